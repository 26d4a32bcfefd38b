//! Input format compilation
//!
//! Turns an input format string into a regex with one capture group per tag
//! and a parallel list of template atoms used to rebuild the date.

use super::format_tags::{self, FormatToken};
use crate::error::{DateConvError, Result};
use regex::Regex;

/// Characters with special meaning in the regex dialect
const REGEX_SPECIAL: &[char] = &[
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}',
];

/// A compiled input format
#[derive(Debug, Clone)]
pub struct CompiledInputFormat {
    format: String,
    regex: Regex,
    parse_atoms: Vec<Option<&'static str>>,
}

impl CompiledInputFormat {
    /// Compile an input format string
    ///
    /// # Examples
    ///
    /// ```
    /// use dateconv::domain::CompiledInputFormat;
    ///
    /// let compiled = CompiledInputFormat::compile("y4.m2").unwrap();
    /// assert_eq!(compiled.pattern(), r"([0-9]{4})\.([0-9]{2})");
    /// assert_eq!(compiled.group_count(), 2);
    /// ```
    pub fn compile(format: &str) -> Result<Self> {
        let mut pattern = String::with_capacity(format.len() * 4);
        let mut parse_atoms = Vec::new();

        for token in format_tags::tokenize(format) {
            match token {
                FormatToken::Tag(spec) => {
                    pattern.push_str(spec.pattern);
                    parse_atoms.push(spec.parse_atom);
                }
                FormatToken::Literal(c) => {
                    if REGEX_SPECIAL.contains(&c) {
                        pattern.push('\\');
                    }
                    pattern.push(c);
                }
            }
        }

        let regex = Regex::new(&pattern).map_err(|source| DateConvError::InvalidInputFormat {
            format: format.to_string(),
            source,
        })?;
        log::debug!("Compiled input format '{}' to /{}/", format, pattern);

        Ok(CompiledInputFormat {
            format: format.to_string(),
            regex,
            parse_atoms,
        })
    }

    /// The format string this was compiled from
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Source text of the compiled regex
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// One entry per capture group; `None` for groups that carry no date data
    pub fn parse_atoms(&self) -> &[Option<&'static str>] {
        &self.parse_atoms
    }

    /// Number of capture groups, not counting the whole match
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }
}
