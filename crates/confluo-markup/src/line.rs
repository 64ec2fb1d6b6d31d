//! Line classification for the converter.
//!
//! Each input line is matched against an ordered set of block rules; the
//! first rule that matches decides how the converter handles the line, and
//! anything unmatched falls through to plain paragraph text.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+(.*)$").unwrap());

static BULLET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)[-*][ \t]+(.*)$").unwrap());

static NUMBERED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)\d+\.[ \t]+(.*)$").unwrap());

/// Classified form of a single markdown line, in rule priority order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Fence delimiter (```` ``` ````) with its optional language tag.
    Fence { language: Option<&'a str> },
    /// ATX heading with level 1-6.
    Heading { level: usize, text: &'a str },
    /// Unordered list item at some leading indentation.
    Bullet { indent: &'a str, text: &'a str },
    /// Ordered list item at some leading indentation.
    Numbered { indent: &'a str, text: &'a str },
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else.
    Paragraph,
}

impl<'a> LineKind<'a> {
    /// Classify a line. Never fails: unmatched lines are [`Self::Paragraph`].
    pub(crate) fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix("```") {
            return Self::Fence {
                language: rest.split_whitespace().next(),
            };
        }
        if let Some(caps) = HEADING_PATTERN.captures(line) {
            return Self::Heading {
                level: caps.get(1).map_or(0, |m| m.len()),
                text: caps.get(2).map_or("", |m| m.as_str()).trim(),
            };
        }
        if let Some(caps) = BULLET_PATTERN.captures(line) {
            return Self::Bullet {
                indent: caps.get(1).map_or("", |m| m.as_str()),
                text: caps.get(2).map_or("", |m| m.as_str()),
            };
        }
        if let Some(caps) = NUMBERED_PATTERN.captures(line) {
            return Self::Numbered {
                indent: caps.get(1).map_or("", |m| m.as_str()),
                text: caps.get(2).map_or("", |m| m.as_str()),
            };
        }
        if line.trim().is_empty() {
            return Self::Blank;
        }
        Self::Paragraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_with_language() {
        assert_eq!(
            LineKind::classify("```rust"),
            LineKind::Fence {
                language: Some("rust")
            }
        );
    }

    #[test]
    fn test_fence_language_extra_info() {
        // Some markdown has extra info after the language tag.
        assert_eq!(
            LineKind::classify("```python extra"),
            LineKind::Fence {
                language: Some("python")
            }
        );
    }

    #[test]
    fn test_bare_fence() {
        assert_eq!(LineKind::classify("```"), LineKind::Fence { language: None });
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            LineKind::classify("# Title"),
            LineKind::Heading {
                level: 1,
                text: "Title"
            }
        );
        assert_eq!(
            LineKind::classify("###### Deep"),
            LineKind::Heading {
                level: 6,
                text: "Deep"
            }
        );
    }

    #[test]
    fn test_heading_requires_space() {
        assert_eq!(LineKind::classify("#NoSpace"), LineKind::Paragraph);
    }

    #[test]
    fn test_seven_hashes_is_paragraph() {
        assert_eq!(LineKind::classify("####### Too deep"), LineKind::Paragraph);
    }

    #[test]
    fn test_bullet_markers() {
        assert_eq!(
            LineKind::classify("- item"),
            LineKind::Bullet {
                indent: "",
                text: "item"
            }
        );
        assert_eq!(
            LineKind::classify("* item"),
            LineKind::Bullet {
                indent: "",
                text: "item"
            }
        );
    }

    #[test]
    fn test_indented_bullet() {
        assert_eq!(
            LineKind::classify("  - nested"),
            LineKind::Bullet {
                indent: "  ",
                text: "nested"
            }
        );
    }

    #[test]
    fn test_bullet_requires_space() {
        // "-item" and "**bold**" are not list items.
        assert_eq!(LineKind::classify("-item"), LineKind::Paragraph);
        assert_eq!(LineKind::classify("**bold** text"), LineKind::Paragraph);
    }

    #[test]
    fn test_numbered_item() {
        assert_eq!(
            LineKind::classify("12. item"),
            LineKind::Numbered {
                indent: "",
                text: "item"
            }
        );
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(LineKind::classify("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(LineKind::classify("just some text"), LineKind::Paragraph);
    }
}
