//! Application layer - Use cases and orchestration

pub mod convert_file;

pub use convert_file::ConvertFileService;
