//! Date conversion engine
//!
//! Finds every date written in the input format, rebuilds it as a calendar
//! date and writes it back out in the output format. Dates that match the
//! input pattern but cannot be rebuilt are left as they are.

use super::input_format::CompiledInputFormat;
use super::output_format::CompiledOutputFormat;
use super::template::{self, TemplateError, COMPOSITE_DELIMITER};
use crate::error::Result;
use chrono::NaiveDate;
use std::ops::Range;

/// One occurrence of the input pattern in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Byte span of the whole match
    pub span: Range<usize>,
    /// One entry per tag, in format order. `None` when an optional group did
    /// not take part in the match.
    pub groups: Vec<Option<Range<usize>>>,
}

/// A match that was left unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDate {
    pub span: Range<usize>,
    pub text: String,
    pub reason: TemplateError,
}

/// Result of converting a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub text: String,
    /// Number of dates rewritten
    pub replaced: usize,
    pub skipped: Vec<SkippedDate>,
}

/// Converts dates in text from one format to another
///
/// # Examples
///
/// ```
/// use dateconv::domain::DateConverter;
///
/// let converter = DateConverter::new("m2/d2/y4", "y4-m2-d2").unwrap();
/// assert_eq!(converter.convert("Today is 12/21/2023"), "Today is 2023-12-21");
/// ```
#[derive(Debug, Clone)]
pub struct DateConverter {
    input: CompiledInputFormat,
    output: CompiledOutputFormat,
}

impl DateConverter {
    /// Create a converter for the given input and output formats
    pub fn new(input_format: &str, output_format: &str) -> Result<Self> {
        Ok(DateConverter {
            input: CompiledInputFormat::compile(input_format)?,
            output: CompiledOutputFormat::compile(output_format),
        })
    }

    /// Replace both formats. On error the current formats stay in place.
    pub fn configure(&mut self, input_format: &str, output_format: &str) -> Result<()> {
        let input = CompiledInputFormat::compile(input_format)?;
        let output = CompiledOutputFormat::compile(output_format);
        self.input = input;
        self.output = output;
        Ok(())
    }

    /// Replace the input format. On error the current one stays in place.
    pub fn set_input_format(&mut self, input_format: &str) -> Result<()> {
        self.input = CompiledInputFormat::compile(input_format)?;
        Ok(())
    }

    pub fn set_output_format(&mut self, output_format: &str) {
        self.output = CompiledOutputFormat::compile(output_format);
    }

    pub fn input_format(&self) -> &CompiledInputFormat {
        &self.input
    }

    pub fn output_format(&self) -> &CompiledOutputFormat {
        &self.output
    }

    /// Render a single date in the output format
    pub fn render(&self, date: NaiveDate) -> String {
        self.output.render(date)
    }

    /// All non-overlapping matches of the input format, left to right.
    ///
    /// Zero-width matches are dropped; they can only come from formats made
    /// entirely of optional parts and carry no date.
    pub fn find_matches(&self, text: &str) -> Vec<DateMatch> {
        self.input
            .regex()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if whole.is_empty() {
                    return None;
                }
                let groups = caps
                    .iter()
                    .skip(1)
                    .map(|group| group.map(|g| g.range()))
                    .collect();
                Some(DateMatch {
                    span: whole.range(),
                    groups,
                })
            })
            .collect()
    }

    /// Rebuild the date captured by a match
    pub fn parse_match(
        &self,
        text: &str,
        date_match: &DateMatch,
    ) -> std::result::Result<NaiveDate, TemplateError> {
        let mut composite_template = String::new();
        let mut composite_value = String::new();

        for (atom, group) in self.input.parse_atoms().iter().zip(&date_match.groups) {
            let Some(atom) = atom else {
                continue;
            };
            composite_template.push_str(atom);
            composite_template.push(COMPOSITE_DELIMITER);
            if let Some(range) = group {
                composite_value.push_str(&text[range.clone()]);
            }
            composite_value.push(COMPOSITE_DELIMITER);
        }

        template::parse(&composite_template, &composite_value)
    }

    /// Convert every date in `text`, leaving unparseable ones untouched.
    ///
    /// Zero-width matches are not converted (see [`find_matches`]), so an
    /// empty input format or one made only of `oo` leaves the text as is.
    ///
    /// [`find_matches`]: DateConverter::find_matches
    pub fn convert(&self, text: &str) -> String {
        self.convert_with_report(text).text
    }

    /// Convert every date in `text` and report what was skipped
    pub fn convert_with_report(&self, text: &str) -> Conversion {
        let mut output = String::with_capacity(text.len());
        let mut replaced = 0;
        let mut skipped = Vec::new();
        let mut copied_to = 0;

        for date_match in self.find_matches(text) {
            let span = date_match.span.clone();
            output.push_str(&text[copied_to..span.start]);
            let original = &text[span.clone()];

            match self.parse_match(text, &date_match) {
                Ok(date) => {
                    output.push_str(&self.render(date));
                    replaced += 1;
                }
                Err(reason) => {
                    log::warn!("Could not parse date '{}', leaving alone: {}", original, reason);
                    output.push_str(original);
                    skipped.push(SkippedDate {
                        span: span.clone(),
                        text: original.to_string(),
                        reason,
                    });
                }
            }

            copied_to = span.end;
        }
        output.push_str(&text[copied_to..]);

        log::debug!(
            "Converted {} date(s), left {} unchanged",
            replaced,
            skipped.len()
        );

        Conversion {
            text: output,
            replaced,
            skipped,
        }
    }
}
