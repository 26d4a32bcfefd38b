//! CLI argument definitions

use super::output::format_tag_list;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dateconv")]
#[command(about = "Rewrite dates in a text file from one format to another", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to read
    #[arg(value_name = "INPUT_FILE", allow_hyphen_values = true)]
    pub input_file: PathBuf,

    /// Format of the dates in the input file (e.g. "m2/d2/y4")
    #[arg(value_name = "INPUT_FORMAT", allow_hyphen_values = true)]
    pub input_format: String,

    /// File to write; created or truncated
    #[arg(value_name = "OUTPUT_FILE", allow_hyphen_values = true)]
    pub output_file: PathBuf,

    /// Format to write the dates in (e.g. "y4-m2-d2")
    #[arg(value_name = "OUTPUT_FORMAT", allow_hyphen_values = true)]
    pub output_format: String,
}

impl Cli {
    /// Parse the process arguments. `--help` lists every format tag.
    pub fn parse_with_tags() -> Result<Self, clap::Error> {
        Self::parse_from_with_tags(std::env::args_os())
    }

    pub fn parse_from_with_tags<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command()
            .after_help(format_tag_list())
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}
