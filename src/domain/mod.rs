//! Domain layer - Format tags, compilers and the conversion engine

pub mod converter;
pub mod format_tags;
pub mod input_format;
pub mod output_format;
pub mod template;

pub use converter::{Conversion, DateConverter, DateMatch, SkippedDate};
pub use format_tags::{FormatSpec, Renderer};
pub use input_format::CompiledInputFormat;
pub use output_format::{CompiledOutputFormat, RenderStep};
