//! Format tag table and the two-character tag scanner
//!
//! A format string is read left to right. At every position the next two
//! characters are looked up in the tag table first; if they do not name a
//! tag, a single character is taken as literal text. The last character of a
//! format string can therefore never start a tag, and there is no way to
//! write the two characters of a tag (e.g. `y4`) as literal text.

use super::template;
use chrono::{Datelike, NaiveDate};

/// How a tag turns a date back into text
#[derive(Debug, Clone, Copy)]
pub enum Renderer {
    /// Expand a canonical template through the generic template engine
    Template(&'static str),
    /// Compute the text directly from the date
    Custom(fn(NaiveDate) -> String),
}

impl Renderer {
    pub fn render(&self, date: NaiveDate) -> String {
        match self {
            Renderer::Template(tmpl) => template::render(date, tmpl),
            Renderer::Custom(f) => f(date),
        }
    }
}

/// Static definition bound to a format tag
#[derive(Debug)]
pub struct FormatSpec {
    /// The two-character tag itself
    pub tag: &'static str,
    /// Regex fragment matching the component; always exactly one capture group
    pub pattern: &'static str,
    /// Template atom used to rebuild a date from the captured text.
    /// `None` for tags that only validate shape (ordinal suffixes).
    pub parse_atom: Option<&'static str>,
    pub description: &'static str,
    pub renderer: Renderer,
}

/// Ordinal suffix for the day of month.
///
/// Chosen from the last digit only, so the 11th, 12th and 13th come out as
/// `st`, `nd` and `rd`. Existing outputs depend on this, keep it.
pub fn ordinal_suffix(date: NaiveDate) -> String {
    match date.day() % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
    .to_string()
}

// Sorted by tag key.
static FORMAT_TAGS: [FormatSpec; 10] = [
    FormatSpec {
        tag: "d1",
        pattern: r"([0-9]{2}|[1-9])",
        parse_atom: Some(template::DAY_UNPADDED),
        description: "Non zero padded day number (i.e. 2)",
        renderer: Renderer::Template(template::DAY_UNPADDED),
    },
    FormatSpec {
        tag: "d2",
        pattern: r"([0-9]{2})",
        parse_atom: Some(template::DAY_PADDED),
        description: "Zero padded day number (i.e. 02)",
        renderer: Renderer::Template(template::DAY_PADDED),
    },
    FormatSpec {
        tag: "m1",
        pattern: r"([0-9]{2}|[1-9])",
        parse_atom: Some(template::MONTH_UNPADDED),
        description: "Non zero padded month number (i.e. 1)",
        renderer: Renderer::Template(template::MONTH_UNPADDED),
    },
    FormatSpec {
        tag: "m2",
        pattern: r"([0-9]{2})",
        parse_atom: Some(template::MONTH_PADDED),
        description: "Zero padded month number (i.e. 01)",
        renderer: Renderer::Template(template::MONTH_PADDED),
    },
    FormatSpec {
        tag: "ml",
        pattern: r"((?i)january|february|march|april|may|june|july|august|september|october|november|december)",
        parse_atom: Some(template::MONTH_FULL),
        description: "Long month name (i.e. January)",
        renderer: Renderer::Template(template::MONTH_FULL),
    },
    FormatSpec {
        tag: "ms",
        pattern: r"((?i)jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)",
        parse_atom: Some(template::MONTH_ABBREV),
        description: "Short month name (i.e. Jan)",
        renderer: Renderer::Template(template::MONTH_ABBREV),
    },
    FormatSpec {
        tag: "oo",
        pattern: r"(st|nd|rd|th)?",
        parse_atom: None,
        description: "Optional ordinal string (i.e. st, nd, rd, th)",
        renderer: Renderer::Custom(ordinal_suffix),
    },
    FormatSpec {
        tag: "or",
        pattern: r"(st|nd|rd|th)",
        parse_atom: None,
        description: "Required ordinal string (i.e. st, nd, rd, th)",
        renderer: Renderer::Custom(ordinal_suffix),
    },
    FormatSpec {
        tag: "y2",
        pattern: r"([0-9]{2})",
        parse_atom: Some(template::YEAR_2),
        description: "Year number without century (i.e. 06)",
        renderer: Renderer::Template(template::YEAR_2),
    },
    FormatSpec {
        tag: "y4",
        pattern: r"([0-9]{4})",
        parse_atom: Some(template::YEAR_4),
        description: "Year number including century (i.e. 2006)",
        renderer: Renderer::Template(template::YEAR_4),
    },
];

/// Look up a tag by its exact two-character key
pub fn lookup(key: &str) -> Option<&'static FormatSpec> {
    FORMAT_TAGS.iter().find(|spec| spec.tag == key)
}

/// All tags, sorted by key
pub fn all() -> impl Iterator<Item = &'static FormatSpec> {
    FORMAT_TAGS.iter()
}

/// One unit of a scanned format string
#[derive(Debug, Clone, Copy)]
pub enum FormatToken {
    Tag(&'static FormatSpec),
    Literal(char),
}

/// Iterator over the tokens of a format string
#[derive(Debug, Clone)]
pub struct FormatTokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for FormatTokens<'a> {
    type Item = FormatToken;

    fn next(&mut self) -> Option<FormatToken> {
        // `get` returns None for a lone trailing char or a non-boundary cut
        if let Some(spec) = self.rest.get(..2).and_then(lookup) {
            self.rest = &self.rest[2..];
            return Some(FormatToken::Tag(spec));
        }

        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        Some(FormatToken::Literal(c))
    }
}

/// Scan a format string into tags and literal characters
pub fn tokenize(format: &str) -> FormatTokens<'_> {
    FormatTokens { rest: format }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(lookup("y4").unwrap().tag, "y4");
        assert!(lookup("y3").is_none());
        assert!(lookup("y").is_none());
        assert!(lookup("y4x").is_none());
    }

    #[test]
    fn test_all_is_sorted() {
        let tags: Vec<&str> = all().map(|s| s.tag).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
        assert_eq!(tags.len(), 10);
    }

    #[test]
    fn test_every_pattern_has_one_group() {
        for spec in all() {
            let re = regex::Regex::new(spec.pattern).unwrap();
            // captures_len includes the implicit whole-match group
            assert_eq!(re.captures_len(), 2, "tag {}", spec.tag);
        }
    }

    #[test]
    fn test_only_ordinals_lack_parse_atom() {
        for spec in all() {
            let is_ordinal = spec.tag == "or" || spec.tag == "oo";
            assert_eq!(spec.parse_atom.is_none(), is_ordinal, "tag {}", spec.tag);
        }
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(date(2023, 12, 20)), "th");
        assert_eq!(ordinal_suffix(date(2023, 12, 21)), "st");
        assert_eq!(ordinal_suffix(date(2023, 12, 22)), "nd");
        assert_eq!(ordinal_suffix(date(2023, 12, 23)), "rd");
        assert_eq!(ordinal_suffix(date(2023, 12, 24)), "th");
        assert_eq!(ordinal_suffix(date(2023, 12, 25)), "th");
    }

    #[test]
    fn test_ordinal_suffix_teens_known_bug() {
        // Last-digit rule: the teens get st/nd/rd instead of th.
        assert_eq!(ordinal_suffix(date(2023, 12, 11)), "st");
        assert_eq!(ordinal_suffix(date(2023, 12, 12)), "nd");
        assert_eq!(ordinal_suffix(date(2023, 12, 13)), "rd");
    }

    #[test]
    fn test_renderer_dispatch() {
        let d = date(2023, 9, 1);
        assert_eq!(lookup("ml").unwrap().renderer.render(d), "September");
        assert_eq!(lookup("or").unwrap().renderer.render(d), "st");
    }

    #[test]
    fn test_tokenize_tags_first() {
        let tokens: Vec<String> = tokenize("y4-m2x")
            .map(|t| match t {
                FormatToken::Tag(spec) => format!("<{}>", spec.tag),
                FormatToken::Literal(c) => c.to_string(),
            })
            .collect();
        assert_eq!(tokens, vec!["<y4>", "-", "<m2>", "x"]);
    }

    #[test]
    fn test_tokenize_left_greedy() {
        // "yy" is not a tag, so 'y' is literal and "y4" follows
        let tokens: Vec<bool> = tokenize("yy4")
            .map(|t| matches!(t, FormatToken::Tag(_)))
            .collect();
        assert_eq!(tokens, vec![false, true]);

        // "d2d" -> tag then lone trailing 'd'
        let tokens: Vec<bool> = tokenize("d2d")
            .map(|t| matches!(t, FormatToken::Tag(_)))
            .collect();
        assert_eq!(tokens, vec![true, false]);
    }

    #[test]
    fn test_tokenize_multibyte_literals() {
        let tokens: Vec<String> = tokenize("é y4年")
            .map(|t| match t {
                FormatToken::Tag(spec) => format!("<{}>", spec.tag),
                FormatToken::Literal(c) => c.to_string(),
            })
            .collect();
        assert_eq!(tokens, vec!["é", " ", "<y4>", "年"]);
    }
}
