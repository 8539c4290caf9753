//! One-paragraph documentation summaries.

/// Summary used when a symbol has no documentation text.
pub const NO_DOCUMENTATION: &str = "No documentation available.";

/// Summary for constants that expose no documentation attribute at all.
pub const SINGLETON_CONSTANT: &str = "Singleton constant.";

/// Lines of a docstring scanned for the summary unless configured otherwise.
pub const DEFAULT_MAX_LINES: usize = 3;

/// Summarize a cleaned docstring.
///
/// Only the first `max_lines` lines are scanned. Blank lines before any
/// content are skipped, the first blank line after content ends the
/// paragraph, and the collected lines are stripped and joined with single
/// spaces. When the scanned window holds no content the first raw line is
/// returned unchanged, so a doc whose text starts past the window yields `""`.
#[must_use]
pub fn summarize(doc: Option<&str>, max_lines: usize) -> String {
    let Some(doc) = doc.filter(|doc| !doc.is_empty()) else {
        return NO_DOCUMENTATION.to_string();
    };

    let mut paragraph: Vec<&str> = Vec::new();
    for line in doc.split('\n').take(max_lines) {
        let content = line.trim();
        if content.is_empty() {
            if paragraph.is_empty() {
                continue;
            }
            break;
        }
        paragraph.push(content);
    }

    if paragraph.is_empty() {
        doc.split('\n').next().unwrap_or_default().to_string()
    } else {
        paragraph.join(" ")
    }
}
