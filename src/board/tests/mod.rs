//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Initial layout and board mutation primitives
//! - `legality.rs` - Per-piece move rules and the documented gaps
//! - `destinations.rs` - Destination enumeration order and contents
//! - `proptest.rs` - Property-based tests
//! - `serde_roundtrip.rs` - Serialization (requires the `serde` feature)

mod setup;
