//! Markdown to Confluence wiki markup converter.

use crate::inline::{self, LocalImages};
use crate::line::LineKind;
use crate::macros;
use crate::section::{self, SectionError};
use crate::state::{CodeBlockState, ListContext, ListKind};

/// Default number of spaces per list nesting level.
const DEFAULT_INDENT_WIDTH: usize = 2;

/// Result of converting a markdown document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    /// Confluence wiki markup.
    pub markup: String,
    /// Local image targets discovered in the document, in first-seen order
    /// and deduplicated. These must be uploaded as page attachments for the
    /// markup's image references to resolve.
    pub local_images: Vec<String>,
}

impl Conversion {
    /// Extract the nth top-level section (1-indexed) of the markup.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError`] if the document has fewer than `n`
    /// top-level sections.
    pub fn section(&self, n: usize) -> Result<String, SectionError> {
        section::section(&self.markup, n)
    }
}

/// Markdown to Confluence wiki markup converter.
///
/// The converter itself only carries configuration; all per-document state
/// lives inside [`convert`](Self::convert), so one converter can be shared
/// freely across threads.
#[derive(Clone, Debug)]
pub struct MarkdownConverter {
    indent_width: usize,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter {
    /// Create a converter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Set the number of spaces that make up one list nesting level.
    ///
    /// Default is 2. A tab in list indentation counts as one level.
    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.max(1);
        self
    }

    /// Convert a markdown document to Confluence wiki markup.
    ///
    /// Conversion never fails: lines that match no markdown rule pass
    /// through as plain text, and an unterminated code fence is closed at
    /// end of input.
    #[must_use]
    pub fn convert(&self, markdown: &str) -> Conversion {
        let mut out: Vec<String> = Vec::new();
        let mut lists = ListContext::default();
        let mut code = CodeBlockState::default();
        let mut images = LocalImages::default();
        let mut last_blank = false;

        for raw in markdown.split('\n') {
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            // Inside a fence only the closing delimiter is interpreted.
            if code.is_active() {
                if line.starts_with("```") {
                    code.end();
                    out.push(macros::CODE_CLOSE.to_owned());
                } else {
                    out.push(line.to_owned());
                }
                last_blank = false;
                continue;
            }

            let kind = LineKind::classify(line);
            let blank = matches!(kind, LineKind::Blank);
            match kind {
                LineKind::Fence { language } => {
                    out.push(macros::code_open(language));
                    code.start(language.map(str::to_owned));
                }
                LineKind::Heading { level, text } => {
                    lists.reset();
                    out.push(format!("h{level}. {text}"));
                }
                LineKind::Bullet { indent, text } => {
                    out.push(self.list_item(ListKind::Unordered, indent, text, &mut lists, &mut images));
                }
                LineKind::Numbered { indent, text } => {
                    out.push(self.list_item(ListKind::Ordered, indent, text, &mut lists, &mut images));
                }
                LineKind::Blank => {
                    lists.reset();
                    if !last_blank {
                        out.push(String::new());
                    }
                }
                LineKind::Paragraph => {
                    out.push(inline::rewrite(line, &mut images));
                }
            }
            last_blank = blank;
        }

        if code.is_active() {
            // Unterminated fence: close the macro so the markup stays balanced.
            out.push(macros::CODE_CLOSE.to_owned());
        }

        Conversion {
            markup: out.join("\n"),
            local_images: images.into_paths(),
        }
    }

    fn list_item(
        &self,
        kind: ListKind,
        indent: &str,
        text: &str,
        lists: &mut ListContext,
        images: &mut LocalImages,
    ) -> String {
        let level = lists.enter(kind, self.indent_units(indent));
        let marker = kind.marker().to_string().repeat(level);
        format!("{marker} {}", inline::rewrite(text, images))
    }

    /// Number of nesting units represented by a leading whitespace run.
    fn indent_units(&self, indent: &str) -> usize {
        let columns: usize = indent
            .chars()
            .map(|c| if c == '\t' { self.indent_width } else { 1 })
            .sum();
        columns / self.indent_width
    }
}
