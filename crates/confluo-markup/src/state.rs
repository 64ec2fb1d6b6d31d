//! Per-conversion block state.
//!
//! These structs track context during the line pass and are created fresh
//! for every conversion call, so a shared converter stays reentrant.

/// Deepest list nesting level the dialect documents.
pub(crate) const MAX_LIST_DEPTH: usize = 4;

/// Kind of list a line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// Marker character for this list kind.
    pub(crate) fn marker(self) -> char {
        match self {
            Self::Unordered => '*',
            Self::Ordered => '#',
        }
    }
}

/// Stack of currently open lists.
///
/// An item deeper than one level below the innermost open list is clamped
/// to the next level, so unbalanced indentation degrades instead of
/// producing orphan markers.
#[derive(Debug, Default)]
pub(crate) struct ListContext {
    stack: Vec<ListKind>,
}

impl ListContext {
    /// Enter an item at `units` indentation units.
    ///
    /// Returns the 1-based nesting level to emit markers for, capped at
    /// [`MAX_LIST_DEPTH`].
    pub(crate) fn enter(&mut self, kind: ListKind, units: usize) -> usize {
        let level = (units + 1)
            .min(self.stack.len() + 1)
            .min(MAX_LIST_DEPTH);
        self.stack.truncate(level);
        if self.stack.len() == level {
            if let Some(top) = self.stack.last_mut() {
                *top = kind;
            }
        } else {
            self.stack.push(kind);
        }
        level
    }

    /// Close all open lists.
    pub(crate) fn reset(&mut self) {
        self.stack.clear();
    }
}

/// State for tracking a fenced code block.
#[derive(Debug, Default)]
pub(crate) struct CodeBlockState {
    /// Whether we're inside a code block.
    active: bool,
    /// Language captured from the opening fence.
    language: Option<String>,
}

impl CodeBlockState {
    /// Start a code block with optional language.
    pub(crate) fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
    }

    /// End the current code block and return its language.
    pub(crate) fn end(&mut self) -> Option<String> {
        self.active = false;
        self.language.take()
    }

    /// Check if we're inside a code block.
    pub(crate) fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_state() {
        let mut state = CodeBlockState::default();
        assert!(!state.is_active());

        state.start(Some("rust".to_owned()));
        assert!(state.is_active());

        let language = state.end();
        assert_eq!(language, Some("rust".to_owned()));
        assert!(!state.is_active());
    }

    #[test]
    fn test_list_context_nesting() {
        let mut lists = ListContext::default();
        assert_eq!(lists.enter(ListKind::Unordered, 0), 1);
        assert_eq!(lists.enter(ListKind::Unordered, 1), 2);
        assert_eq!(lists.enter(ListKind::Unordered, 0), 1);
    }

    #[test]
    fn test_list_context_reset() {
        let mut lists = ListContext::default();
        lists.enter(ListKind::Unordered, 0);
        lists.enter(ListKind::Unordered, 1);
        lists.reset();
        assert_eq!(lists.enter(ListKind::Unordered, 0), 1);
    }

    #[test]
    fn test_unbalanced_indent_clamps_to_next_level() {
        let mut lists = ListContext::default();
        // First item indented three units deep still opens at level 1.
        assert_eq!(lists.enter(ListKind::Unordered, 3), 1);
        // Jumping two units deeper only descends one level.
        assert_eq!(lists.enter(ListKind::Unordered, 5), 2);
    }

    #[test]
    fn test_depth_cap() {
        let mut lists = ListContext::default();
        for units in 0..8 {
            lists.enter(ListKind::Ordered, units);
        }
        assert_eq!(lists.enter(ListKind::Ordered, 9), MAX_LIST_DEPTH);
    }

    #[test]
    fn test_marker_chars() {
        assert_eq!(ListKind::Unordered.marker(), '*');
        assert_eq!(ListKind::Ordered.marker(), '#');
    }
}
