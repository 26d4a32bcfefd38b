//! Output formatting utilities

use crate::domain::format_tags;

/// Format the list of date format tags, sorted by tag
pub fn format_tag_list() -> String {
    let mut output = String::from("Date format components:\n");
    for spec in format_tags::all() {
        output.push_str(&format!("   {} - {}\n", spec.tag, spec.description));
    }
    output
}
