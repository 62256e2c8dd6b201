fn main() {
    chess_demo::ui::run_demo_loop();
}
