//! Infrastructure layer - External I/O

pub mod files;

pub use files::{create_output, open_input};
