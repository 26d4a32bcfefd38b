//! dateconv - Rewrite dates embedded in text from one format to another
//!
//! Formats are written with two-character tags such as `y4`, `m2`, `d1`,
//! `ml` and `or`; everything else in a format is literal text.
//!
//! ```
//! use dateconv::domain::DateConverter;
//!
//! let converter = DateConverter::new("d2or day of ml in the year y4", "y4-m2-d2").unwrap();
//! assert_eq!(
//!     converter.convert("Today is the 21st day of December in the year 2023"),
//!     "Today is the 2023-12-21"
//! );
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DateConvError;
