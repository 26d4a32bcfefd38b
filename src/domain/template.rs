//! Generic date template engine
//!
//! Templates mix literal text with a fixed set of atoms spelled like chrono
//! strftime specifiers. Rendering substitutes each atom with a field of the
//! date; parsing walks a template and a value string in lockstep and builds
//! a `NaiveDate` from the captured fields.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

pub const YEAR_4: &str = "%Y";
pub const YEAR_2: &str = "%y";
pub const MONTH_PADDED: &str = "%m";
pub const MONTH_UNPADDED: &str = "%-m";
pub const MONTH_ABBREV: &str = "%b";
pub const MONTH_FULL: &str = "%B";
pub const DAY_PADDED: &str = "%d";
pub const DAY_UNPADDED: &str = "%-d";

/// Separator placed after every atom of a composite template and after every
/// captured value of a composite value.
pub const COMPOSITE_DELIMITER: char = ':';

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Errors from parsing a value against a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("value ended before the template was complete")]
    UnexpectedEnd,

    #[error("expected '{expected}' but found '{found}'")]
    Mismatch { expected: char, found: char },

    #[error("'{value}' is not a valid {atom} value")]
    InvalidField { atom: &'static str, value: String },

    #[error("unexpected trailing text '{0}'")]
    TrailingText(String),

    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Atom {
    Year4,
    Year2,
    MonthPadded,
    MonthUnpadded,
    MonthAbbrev,
    MonthFull,
    DayPadded,
    DayUnpadded,
}

impl Atom {
    const ALL: [Atom; 8] = [
        Atom::Year4,
        Atom::Year2,
        Atom::MonthPadded,
        Atom::MonthUnpadded,
        Atom::MonthAbbrev,
        Atom::MonthFull,
        Atom::DayPadded,
        Atom::DayUnpadded,
    ];

    fn token(self) -> &'static str {
        match self {
            Atom::Year4 => YEAR_4,
            Atom::Year2 => YEAR_2,
            Atom::MonthPadded => MONTH_PADDED,
            Atom::MonthUnpadded => MONTH_UNPADDED,
            Atom::MonthAbbrev => MONTH_ABBREV,
            Atom::MonthFull => MONTH_FULL,
            Atom::DayPadded => DAY_PADDED,
            Atom::DayUnpadded => DAY_UNPADDED,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Atom::Year4 => "four-digit year",
            Atom::Year2 => "two-digit year",
            Atom::MonthPadded => "zero padded month",
            Atom::MonthUnpadded => "month",
            Atom::MonthAbbrev => "abbreviated month name",
            Atom::MonthFull => "month name",
            Atom::DayPadded => "zero padded day",
            Atom::DayUnpadded => "day",
        }
    }

    /// Consume this atom's text from the front of `input`.
    ///
    /// Returns the number of bytes consumed and the numeric value (month
    /// names yield their 1-based month number).
    fn take(self, input: &str) -> Option<(usize, u32)> {
        match self {
            Atom::Year4 => take_digits(input, 4, 4),
            Atom::Year2 | Atom::MonthPadded | Atom::DayPadded => take_digits(input, 2, 2),
            Atom::MonthUnpadded | Atom::DayUnpadded => take_digits(input, 1, 2),
            Atom::MonthAbbrev => take_month_name(input, |name| &name[..3]),
            Atom::MonthFull => take_month_name(input, |name| name),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Piece {
    Atom(Atom),
    Literal(char),
}

fn pieces(template: &str) -> impl Iterator<Item = Piece> + '_ {
    let mut rest = template;
    std::iter::from_fn(move || {
        if let Some(atom) = Atom::ALL.iter().find(|a| rest.starts_with(a.token())) {
            rest = &rest[atom.token().len()..];
            return Some(Piece::Atom(*atom));
        }
        let mut chars = rest.chars();
        let c = chars.next()?;
        rest = chars.as_str();
        Some(Piece::Literal(c))
    })
}

fn take_digits(input: &str, min: usize, max: usize) -> Option<(usize, u32)> {
    let len = input
        .bytes()
        .take(max)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if len < min {
        return None;
    }
    input[..len].parse().ok().map(|n| (len, n))
}

fn take_month_name<F>(input: &str, form: F) -> Option<(usize, u32)>
where
    F: Fn(&'static str) -> &'static str,
{
    MONTH_NAMES.iter().enumerate().find_map(|(idx, name)| {
        let name = form(*name);
        input
            .get(..name.len())
            .filter(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|_| (name.len(), idx as u32 + 1))
    })
}

/// Map a two-digit year onto a full year: 69-99 are 1900s, 00-68 are 2000s.
pub fn expand_two_digit_year(value: u32) -> i32 {
    if value >= 69 {
        1900 + value as i32
    } else {
        2000 + value as i32
    }
}

fn render_atom(date: NaiveDate, atom: Atom) -> String {
    match atom {
        Atom::MonthFull => MONTH_NAMES[date.month0() as usize].to_string(),
        Atom::MonthAbbrev => MONTH_NAMES[date.month0() as usize][..3].to_string(),
        _ => date.format(atom.token()).to_string(),
    }
}

/// Render a date through a template.
///
/// Recognized atoms are replaced by the matching date field; everything else
/// is copied unchanged.
pub fn render(date: NaiveDate, template: &str) -> String {
    let mut output = String::with_capacity(template.len());
    for piece in pieces(template) {
        match piece {
            Piece::Atom(atom) => output.push_str(&render_atom(date, atom)),
            Piece::Literal(c) => output.push(c),
        }
    }
    output
}

/// Parse `value` against `template` and build a calendar date.
///
/// Fields the template does not mention default to year 0, January and the
/// 1st. When a field appears more than once the last occurrence wins.
///
/// # Examples
///
/// ```
/// use dateconv::domain::template;
/// use chrono::NaiveDate;
///
/// let date = template::parse("%B:%-d:%y:", "march:7:99:").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(1999, 3, 7).unwrap());
/// ```
pub fn parse(template: &str, value: &str) -> Result<NaiveDate, TemplateError> {
    let mut year = 0;
    let mut month = 1;
    let mut day = 1;
    let mut rest = value;

    for piece in pieces(template) {
        match piece {
            Piece::Literal(expected) => match rest.chars().next() {
                Some(found) if found == expected => rest = &rest[found.len_utf8()..],
                Some(found) => return Err(TemplateError::Mismatch { expected, found }),
                None => return Err(TemplateError::UnexpectedEnd),
            },
            Piece::Atom(atom) => {
                if rest.is_empty() {
                    return Err(TemplateError::UnexpectedEnd);
                }
                let (len, n) = atom.take(rest).ok_or_else(|| TemplateError::InvalidField {
                    atom: atom.name(),
                    value: field_preview(rest),
                })?;
                rest = &rest[len..];

                match atom {
                    Atom::Year4 => year = n as i32,
                    Atom::Year2 => year = expand_two_digit_year(n),
                    Atom::MonthPadded
                    | Atom::MonthUnpadded
                    | Atom::MonthAbbrev
                    | Atom::MonthFull => month = n,
                    Atom::DayPadded | Atom::DayUnpadded => day = n,
                }
            }
        }
    }

    if !rest.is_empty() {
        return Err(TemplateError::TrailingText(rest.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(TemplateError::InvalidDate { year, month, day })
}

// The offending text up to the next composite delimiter
fn field_preview(rest: &str) -> String {
    rest.split(COMPOSITE_DELIMITER)
        .next()
        .unwrap_or(rest)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_all_atoms() {
        let d = date(2023, 9, 1);
        assert_eq!(
            render(d, "%-d:%d:%-m:%m:%B:%b:%y:%Y:"),
            "1:01:9:09:September:Sep:23:2023:"
        );
    }

    #[test]
    fn test_render_leaves_unknown_text() {
        let d = date(2025, 1, 17);
        assert_eq!(render(d, "on %Q the %d%%"), "on %Q the 17%%");
        assert_eq!(render(d, "plain"), "plain");
        assert_eq!(render(d, "%"), "%");
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse("%m:%d:%Y:", "12:21:2023:").unwrap(), date(2023, 12, 21));
        assert_eq!(parse("%-m:%-d:%Y:", "09:1:2023:").unwrap(), date(2023, 9, 1));
    }

    #[test]
    fn test_parse_month_names_case_insensitive() {
        assert_eq!(parse("%d:%B:%Y:", "21:DECEMBER:2023:").unwrap(), date(2023, 12, 21));
        assert_eq!(parse("%d:%b:%Y:", "21:dec:2023:").unwrap(), date(2023, 12, 21));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse("%y:", "69:").unwrap().year(), 1969);
        assert_eq!(parse("%y:", "99:").unwrap().year(), 1999);
        assert_eq!(parse("%y:", "00:").unwrap().year(), 2000);
        assert_eq!(parse("%y:", "68:").unwrap().year(), 2068);
    }

    #[test]
    fn test_missing_fields_default() {
        assert_eq!(parse("%m:%d:", "03:04:").unwrap(), date(0, 3, 4));
        assert_eq!(parse("%Y:", "2023:").unwrap(), date(2023, 1, 1));
    }

    #[test]
    fn test_repeated_field_last_wins() {
        assert_eq!(parse("%Y:%m:%m:", "2023:01:05:").unwrap(), date(2023, 5, 1));
    }

    #[test]
    fn test_parse_shape_mismatch() {
        let err = parse("%m:%d:%Y:", "9:01:2023:").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidField { .. }));

        let err = parse("%d:%b:", "21:xyz:").unwrap_err();
        assert_eq!(
            err,
            TemplateError::InvalidField {
                atom: "abbreviated month name",
                value: "xyz".to_string()
            }
        );
    }

    #[test]
    fn test_parse_literal_mismatch_and_trailing() {
        assert_eq!(
            parse("%Y-", "2023:").unwrap_err(),
            TemplateError::Mismatch {
                expected: '-',
                found: ':'
            }
        );
        assert_eq!(
            parse("%Y:", "2023:x").unwrap_err(),
            TemplateError::TrailingText("x".to_string())
        );
        assert_eq!(parse("%Y:%m:", "2023:").unwrap_err(), TemplateError::UnexpectedEnd);
    }

    #[test]
    fn test_parse_invalid_calendar_date() {
        let err = parse("%m:%d:%Y:", "02:30:2023:").unwrap_err();
        assert_eq!(
            err,
            TemplateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            }
        );
        assert!(err.to_string().contains("2023-02-30"));

        assert!(parse("%m:%d:%Y:", "13:01:2023:").is_err());
        assert!(parse("%m:%d:%Y:", "00:01:2023:").is_err());
    }

    #[test]
    fn test_parse_leap_day() {
        assert_eq!(parse("%m:%d:%Y:", "02:29:2024:").unwrap(), date(2024, 2, 29));
        assert!(parse("%m:%d:%Y:", "02:29:2023:").is_err());
    }
}
