//! Confluence wiki markup macro builders.
//!
//! Independent pure functions composed by [`PageBody`](crate::PageBody) and
//! the converter.
//!
//! See <https://confluence.atlassian.com/doc/macros-139387.html>

use std::fmt;

/// Closing tag shared by all code block forms.
pub(crate) const CODE_CLOSE: &str = "{code}";

/// Horizontal rule.
#[must_use]
pub const fn horizontal_rule() -> &'static str {
    "----"
}

/// Opening tag for a fenced code block, as emitted by the converter.
pub(crate) fn code_open(language: Option<&str>) -> String {
    match language {
        Some(lang) => format!("{{code:language={lang}}}"),
        None => CODE_CLOSE.to_owned(),
    }
}

/// Bare image reference as emitted by the converter: `!target|alt!`.
pub(crate) fn image_ref(target: &str, alt: &str) -> String {
    if alt.is_empty() {
        format!("!{target}!")
    } else {
        format!("!{target}|{alt}!")
    }
}

/// Parameters for the table of contents macro.
///
/// See <https://confluence.atlassian.com/doc/table-of-contents-macro-182682099.html>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocParams {
    /// Render a printable table of contents.
    pub printable: bool,
    /// Bullet style.
    pub style: String,
    /// Maximum heading level to include.
    pub max_level: u8,
    /// Indentation per level.
    pub indent: String,
    /// Minimum heading level to include.
    pub min_level: u8,
    /// CSS class applied to the table of contents.
    pub class: String,
    /// Regex of headings to exclude.
    pub exclude: Option<String>,
    /// Regex of headings to include.
    pub include: Option<String>,
    /// Output type (`list` or `flat`).
    pub list_type: String,
    /// Render as an outline.
    pub outline: bool,
}

impl Default for TocParams {
    fn default() -> Self {
        Self {
            printable: false,
            style: "square".to_owned(),
            max_level: 4,
            indent: "5px".to_owned(),
            min_level: 1,
            class: "bigpink".to_owned(),
            exclude: None,
            include: None,
            list_type: "list".to_owned(),
            outline: true,
        }
    }
}

/// Table of contents macro.
///
/// Example: `{toc:printable=false|style=square|maxLevel=4|indent=5px|minLevel=1|class=bigpink|type=list|outline=true}`
#[must_use]
pub fn toc(params: &TocParams) -> String {
    let mut out = format!(
        "{{toc:printable={}|style={}|maxLevel={}|indent={}|minLevel={}|class={}",
        params.printable, params.style, params.max_level, params.indent, params.min_level, params.class,
    );
    if let Some(ref exclude) = params.exclude {
        out.push_str(&format!("|exclude={exclude}"));
    }
    if let Some(ref include) = params.include {
        out.push_str(&format!("|include={include}"));
    }
    out.push_str(&format!(
        "|type={}|outline={}}}",
        params.list_type, params.outline
    ));
    out
}

/// Color theme for the code block macro.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CodeTheme {
    DJango,
    Emacs,
    FadeToGrey,
    Midnight,
    RDark,
    Eclipse,
    Confluence,
    #[default]
    Default,
}

impl fmt::Display for CodeTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DJango => "DJango",
            Self::Emacs => "Emacs",
            Self::FadeToGrey => "FadeToGrey",
            Self::Midnight => "Midnight",
            Self::RDark => "RDark",
            Self::Eclipse => "Eclipse",
            Self::Confluence => "Confluence",
            Self::Default => "Default",
        };
        f.write_str(name)
    }
}

/// Parameters for the code block macro.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBlockParams {
    /// Block title.
    pub title: String,
    /// Color theme.
    pub theme: CodeTheme,
    /// Show line numbers.
    pub linenumbers: bool,
    /// Syntax highlighting language.
    pub language: String,
    /// First line number.
    pub firstline: u32,
    /// Render collapsed.
    pub collapse: bool,
}

impl Default for CodeBlockParams {
    fn default() -> Self {
        Self {
            title: String::new(),
            theme: CodeTheme::Default,
            linenumbers: false,
            language: "java".to_owned(),
            firstline: 1,
            collapse: false,
        }
    }
}

/// Code block macro.
///
/// Example: `{code:title=My title|theme=FadeToGrey|linenumbers=true|language=java|firstline=1|collapse=true}`
#[must_use]
pub fn code_block(params: &CodeBlockParams, content: &str) -> String {
    format!(
        "{{code:title={}|theme={}|linenumbers={}|language={}|firstline={}|collapse={}}}\n{}\n{}",
        params.title,
        params.theme,
        params.linenumbers,
        params.language,
        params.firstline,
        params.collapse,
        content,
        CODE_CLOSE,
    )
}

/// Image alignment within the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Bottom,
    Center,
    Top,
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Center => "center",
            Self::Top => "top",
        };
        f.write_str(name)
    }
}

/// Parameters for the image macro. All fields are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageParams {
    /// Hover text.
    pub title: Option<String>,
    /// Alignment within the page.
    pub align: Option<Align>,
    /// Border width in pixels.
    pub border: Option<u32>,
    /// Border color (name or hex value).
    pub bordercolor: Option<String>,
    /// Horizontal padding in pixels.
    pub hspace: Option<u32>,
    /// Vertical padding in pixels.
    pub vspace: Option<u32>,
    /// Display width in pixels.
    pub width: Option<u32>,
    /// Display height in pixels.
    pub height: Option<u32>,
    /// Alternate text for accessibility.
    pub alt: Option<String>,
    /// Render as a thumbnail.
    pub thumbnail: bool,
}

/// Image macro with display options.
///
/// Example: `!http://example.com/image.jpg|title=My image, align=center!`
#[must_use]
pub fn image(url: &str, params: &ImageParams) -> String {
    let mut opts: Vec<String> = Vec::new();
    if let Some(ref title) = params.title {
        opts.push(format!("title={title}"));
    }
    if let Some(align) = params.align {
        opts.push(format!("align={align}"));
    }
    if let Some(border) = params.border {
        opts.push(format!("border={border}"));
    }
    if let Some(ref bordercolor) = params.bordercolor {
        opts.push(format!("bordercolor={bordercolor}"));
    }
    if let Some(hspace) = params.hspace {
        opts.push(format!("hspace={hspace}"));
    }
    if let Some(vspace) = params.vspace {
        opts.push(format!("vspace={vspace}"));
    }
    if let Some(width) = params.width {
        opts.push(format!("width={width}"));
    }
    if let Some(height) = params.height {
        opts.push(format!("height={height}"));
    }
    if let Some(ref alt) = params.alt {
        opts.push(format!("alt={alt}"));
    }
    if params.thumbnail {
        opts.push("thumbnail=true".to_owned());
    }

    if opts.is_empty() {
        format!("!{url}!")
    } else {
        format!("!{url}|{}!", opts.join(", "))
    }
}
