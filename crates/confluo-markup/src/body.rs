//! Page body assembly.

use crate::converter::Conversion;
use crate::macros::{self, CodeBlockParams, ImageParams, TocParams};
use crate::section::{self, SectionError};

/// A Confluence page body under construction.
///
/// Collects wiki markup blocks plus the local images they reference so the
/// caller can upload them as attachments before submitting the body. Each
/// body owns its own image list; nothing is shared between instances.
#[derive(Clone, Debug, Default)]
pub struct PageBody {
    content: Vec<String>,
    local_images: Vec<String>,
}

impl PageBody {
    /// Create an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw markup block.
    pub fn append(&mut self, block: impl Into<String>) {
        self.content.push(block.into());
    }

    /// Append all blocks (and pending images) from another body.
    pub fn extend(&mut self, other: PageBody) {
        self.content.extend(other.content);
        for image in other.local_images {
            self.record_image(image);
        }
    }

    /// Append a conversion result, taking over its local image references.
    pub fn push_conversion(&mut self, conversion: Conversion) {
        self.content.push(conversion.markup);
        for image in conversion.local_images {
            self.record_image(image);
        }
    }

    /// Append a heading. Levels are clamped to the dialect's 1..=6 range.
    pub fn heading(&mut self, level: u8, text: &str) {
        let level = level.clamp(1, 6);
        self.content.push(format!("h{level}. {text}"));
    }

    /// Append a paragraph of plain text.
    pub fn text(&mut self, text: &str) {
        self.content.push(text.to_owned());
    }

    /// Append a table of contents macro.
    pub fn toc(&mut self, params: &TocParams) {
        self.content.push(macros::toc(params));
    }

    /// Append a horizontal rule.
    pub fn horizontal_rule(&mut self) {
        self.content.push(macros::horizontal_rule().to_owned());
    }

    /// Append an image macro.
    pub fn image(&mut self, url: &str, params: &ImageParams) {
        self.content.push(macros::image(url, params));
    }

    /// Append a code block macro.
    pub fn code_block(&mut self, params: &CodeBlockParams, content: &str) {
        self.content.push(macros::code_block(params, content));
    }

    /// Local images referenced by the body so far, in first-seen order.
    #[must_use]
    pub fn local_images(&self) -> &[String] {
        &self.local_images
    }

    /// Render the body to a single wiki markup document.
    #[must_use]
    pub fn render(&self) -> String {
        self.content.join("\n")
    }

    /// Extract the nth top-level section (1-indexed) of the rendered body.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError`] if the body has fewer than `n` top-level
    /// sections.
    pub fn section(&self, n: usize) -> Result<String, SectionError> {
        section::section(&self.render(), n)
    }

    fn record_image(&mut self, path: String) {
        if !self.local_images.contains(&path) {
            self.local_images.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::MarkdownConverter;

    #[test]
    fn test_compose_page_elements() {
        let mut body = PageBody::new();
        body.toc(&TocParams::default());
        body.horizontal_rule();
        body.heading(1, "Header");
        body.text("Paragraph");

        let markup = body.render();
        assert!(markup.starts_with("{toc:"));
        assert!(markup.contains("\n----\nh1. Header\nParagraph"));
    }

    #[test]
    fn test_heading_level_clamped() {
        let mut body = PageBody::new();
        body.heading(0, "low");
        body.heading(9, "high");
        assert_eq!(body.render(), "h1. low\nh6. high");
    }

    #[test]
    fn test_push_conversion_collects_images() {
        let conversion = MarkdownConverter::new().convert("![a](one.png)\n![b](two.png)");
        let mut body = PageBody::new();
        body.push_conversion(conversion);
        assert_eq!(body.local_images(), ["one.png", "two.png"]);
    }

    #[test]
    fn test_extend_merges_and_dedups_images() {
        let mut first = PageBody::new();
        first.push_conversion(MarkdownConverter::new().convert("![a](one.png)"));

        let mut second = PageBody::new();
        second.push_conversion(MarkdownConverter::new().convert("![b](one.png)\n![c](two.png)"));

        first.extend(second);
        assert_eq!(first.local_images(), ["one.png", "two.png"]);
        assert_eq!(first.render(), "!one.png|a!\n!one.png|b!\n!two.png|c!");
    }

    #[test]
    fn test_section_of_rendered_body() {
        let mut body = PageBody::new();
        body.heading(1, "A");
        body.text("one");
        body.heading(1, "B");
        body.text("two");

        assert_eq!(body.section(2).unwrap(), "h1. B\ntwo");
        assert!(body.section(3).is_err());
    }

    #[test]
    fn test_append_raw_block() {
        let mut body = PageBody::new();
        body.append("{note}manual{note}");
        assert_eq!(body.render(), "{note}manual{note}");
    }
}
