//! Inline span rewriting for paragraph and list item text.
//!
//! A single combined pattern is scanned left to right; among spans starting
//! at the same position the earlier alternative wins, which gives images
//! priority over links and bold priority over italic. Replacements are
//! never rescanned, so inline code contents stay verbatim.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::format;
use crate::macros;

static SPAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"!\[(?P<img_alt>[^\]]*)\]\((?P<img_dest>[^)]+)\)|\[(?P<link_text>[^\]]+)\]\((?P<link_dest>[^)]+)\)|\*\*(?P<bold>[^*]+)\*\*|\*(?P<em_star>[^*]+)\*|_(?P<em_under>[^_]+)_|`(?P<mono>[^`]+)`",
    )
    .unwrap()
});

/// Whether an image target points at an external resource rather than a
/// page attachment.
pub(crate) fn is_absolute_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Rewrite inline markdown spans into their wiki markup forms.
///
/// Image targets that are not absolute URLs are recorded into `images` for
/// later attachment upload.
pub(crate) fn rewrite(text: &str, images: &mut LocalImages) -> String {
    SPAN_PATTERN
        .replace_all(text, |caps: &Captures<'_>| {
            if let Some(dest) = caps.name("img_dest") {
                let dest = dest.as_str();
                let alt = caps.name("img_alt").map_or("", |m| m.as_str());
                if !is_absolute_url(dest) {
                    images.record(dest);
                }
                return macros::image_ref(dest, alt);
            }
            if let Some(label) = caps.name("link_text") {
                let dest = caps.name("link_dest").map_or("", |m| m.as_str());
                return format!("[{}|{}]", label.as_str(), dest);
            }
            if let Some(inner) = caps.name("bold") {
                return format::strong(inner.as_str());
            }
            if let Some(inner) = caps.name("em_star").or_else(|| caps.name("em_under")) {
                return format::emphasis(inner.as_str());
            }
            if let Some(inner) = caps.name("mono") {
                return format::monospaced(inner.as_str());
            }
            caps[0].to_owned()
        })
        .into_owned()
}

/// Local image targets discovered during a conversion, in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct LocalImages {
    paths: Vec<String>,
}

impl LocalImages {
    /// Record a target, ignoring paths already seen.
    pub(crate) fn record(&mut self, path: &str) {
        if !self.paths.iter().any(|seen| seen == path) {
            self.paths.push(path.to_owned());
        }
    }

    pub(crate) fn into_paths(self) -> Vec<String> {
        self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite_discarding(text: &str) -> String {
        let mut images = LocalImages::default();
        rewrite(text, &mut images)
    }

    #[test]
    fn test_link() {
        assert_eq!(rewrite_discarding("[Link](link)"), "[Link|link]");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(rewrite_discarding("**bold**"), "*bold*");
        assert_eq!(rewrite_discarding("*italic*"), "_italic_");
        assert_eq!(rewrite_discarding("_italic_"), "_italic_");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(rewrite_discarding("use `cargo build`"), "use {{cargo build}}");
    }

    #[test]
    fn test_inline_code_contents_not_rewritten() {
        assert_eq!(rewrite_discarding("`**not bold**`"), "{{**not bold**}}");
    }

    #[test]
    fn test_bold_wins_over_italic_at_same_position() {
        assert_eq!(rewrite_discarding("**a** and *b*"), "*a* and _b_");
    }

    #[test]
    fn test_external_image_not_recorded() {
        let mut images = LocalImages::default();
        let out = rewrite("![alt](https://example.com/pic.png)", &mut images);
        assert_eq!(out, "!https://example.com/pic.png|alt!");
        assert!(images.into_paths().is_empty());
    }

    #[test]
    fn test_local_image_recorded() {
        let mut images = LocalImages::default();
        let out = rewrite("![diagram](images/flow.png)", &mut images);
        assert_eq!(out, "!images/flow.png|diagram!");
        assert_eq!(images.into_paths(), vec!["images/flow.png".to_owned()]);
    }

    #[test]
    fn test_image_with_empty_alt() {
        assert_eq!(rewrite_discarding("![](shot.png)"), "!shot.png!");
    }

    #[test]
    fn test_image_wins_over_link() {
        // The leading bang makes this an image, not a link.
        assert_eq!(
            rewrite_discarding("![x](http://y.com/a.png)"),
            "!http://y.com/a.png|x!"
        );
    }

    #[test]
    fn test_duplicate_targets_recorded_once() {
        let mut images = LocalImages::default();
        rewrite("![a](one.png) ![b](one.png) ![c](two.png)", &mut images);
        assert_eq!(
            images.into_paths(),
            vec!["one.png".to_owned(), "two.png".to_owned()]
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(rewrite_discarding("no spans here"), "no spans here");
    }

    #[test]
    fn test_snake_case_survives() {
        assert_eq!(rewrite_discarding("call foo_bar_baz"), "call foo_bar_baz");
    }
}
