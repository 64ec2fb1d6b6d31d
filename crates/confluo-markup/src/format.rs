//! Inline text formatting for Confluence wiki markup.
//!
//! Independent pure functions producing the dialect's inline forms; the
//! page-assembly layer composes these rather than inheriting them.
//!
//! See <https://confluence.atlassian.com/doc/confluence-wiki-markup-251003035.html>

/// Forced line break.
pub const LINE_BREAK: &str = "\\\\";

/// Strong (bold) text: `*strong*`.
#[must_use]
pub fn strong(text: &str) -> String {
    format!("*{text}*")
}

/// Emphasized (italic) text: `_emphasis_`.
#[must_use]
pub fn emphasis(text: &str) -> String {
    format!("_{text}_")
}

/// Citation: `??citation??`.
#[must_use]
pub fn citation(text: &str) -> String {
    format!("??{text}??")
}

/// Deleted (struck-through) text: `-deleted-`.
#[must_use]
pub fn deleted(text: &str) -> String {
    format!("-{text}-")
}

/// Inserted text: `+inserted+`.
#[must_use]
pub fn inserted(text: &str) -> String {
    format!("+{text}+")
}

/// Subscript: `~subscript~`.
#[must_use]
pub fn subscript(text: &str) -> String {
    format!("~{text}~")
}

/// Superscript: `^superscript^`.
#[must_use]
pub fn superscript(text: &str) -> String {
    format!("^{text}^")
}

/// Monospaced text: `{{monospaced}}`.
#[must_use]
pub fn monospaced(text: &str) -> String {
    format!("{{{{{text}}}}}")
}

/// Single-line block quote: `bq. quote`.
#[must_use]
pub fn block_quote(text: &str) -> String {
    format!("bq. {text}")
}

/// Colored text: `{color:red}text{color}`.
#[must_use]
pub fn color(text: &str, color: &str) -> String {
    format!("{{color:{color}}}{text}{{color}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_forms() {
        assert_eq!(strong("s"), "*s*");
        assert_eq!(emphasis("e"), "_e_");
        assert_eq!(citation("c"), "??c??");
        assert_eq!(deleted("d"), "-d-");
        assert_eq!(inserted("i"), "+i+");
        assert_eq!(subscript("s"), "~s~");
        assert_eq!(superscript("s"), "^s^");
        assert_eq!(monospaced("m"), "{{m}}");
        assert_eq!(block_quote("q"), "bq. q");
    }

    #[test]
    fn test_color() {
        assert_eq!(color("red text", "red"), "{color:red}red text{color}");
    }

    #[test]
    fn test_line_break_is_two_backslashes() {
        assert_eq!(LINE_BREAK.len(), 2);
        assert!(LINE_BREAK.chars().all(|c| c == '\\'));
    }
}
