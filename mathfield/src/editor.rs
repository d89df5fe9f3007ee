//! The editor controller
//!
//! Owns the root node exclusively. Every mutation flows through here: the
//! keymap turns a raw character into a symbol, the tree accepts or rejects it
//! at the cursor's gap, conversion outcomes surfacing at the root are applied
//! by swapping the root node, and the cursor moves only on a committed edit.
//!
//! Out-of-range cursor positions are a programming error at this boundary and
//! fail fast; they are never clamped.

use crate::{
    keymap::Keymap,
    render::{NullRenderer, Renderer},
};
use mathfield_expr::{convert, AddSymbolOutcome, ExprNode, Node, Projection, Symbol};

/// Editor state: the tree, the cursor, and an optional selection anchor.
pub struct Editor {
    root: Node,
    cursor: usize,
    selection_anchor: Option<usize>,
    keymap: Keymap,
    renderer: Box<dyn Renderer>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// An editor over a single empty slot.
    pub fn new() -> Self {
        Self::with_root(Node::empty())
    }

    /// An editor over an existing tree, cursor at the front.
    pub fn with_root(root: Node) -> Self {
        Self {
            root,
            cursor: 0,
            selection_anchor: None,
            keymap: Keymap::default(),
            renderer: Box::new(NullRenderer),
        }
    }

    pub fn set_keymap(&mut self, keymap: Keymap) {
        self.keymap = keymap;
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = renderer;
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The global cursor gap, always in `[0, root.token_count()]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selected gap range in ascending order, if a selection is active.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.selection_anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some((anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    pub fn alt_text(&self) -> String {
        self.root.alt_text()
    }

    pub fn is_valid(&self) -> bool {
        self.root.is_valid()
    }

    pub fn projection(&self) -> Projection {
        self.root.projection()
    }

    /// Routes a raw key press to the tree at the cursor.
    pub fn handle_key(&mut self, key: char) -> AddSymbolOutcome {
        match self.keymap.resolve(key) {
            Some(symbol) => self.insert_symbol(symbol),
            None => {
                tracing::trace!(?key, "unbound key");
                AddSymbolOutcome::Rejected
            }
        }
    }

    /// Inserts a symbol at the cursor, applying any root-level conversion.
    ///
    /// Deeper conversions never reach here: each composite resolves its own
    /// children's outcomes, so only the root node's slot is this editor's to
    /// own.
    pub fn insert_symbol(&mut self, symbol: Symbol) -> AddSymbolOutcome {
        assert!(
            self.cursor <= self.root.token_count(),
            "cursor {} outside [0, {}]",
            self.cursor,
            self.root.token_count()
        );
        let outcome = self.root.add_symbol(symbol, self.cursor);
        let outcome = convert::deliver(&mut self.root, outcome, symbol, self.cursor);
        if outcome.is_accepted() {
            self.cursor += 1;
            self.selection_anchor = None;
            tracing::debug!(?symbol, cursor = self.cursor, "inserted symbol");
            self.committed();
        }
        outcome
    }

    /// Deletes the token before the cursor. No-op at the front or when the
    /// addressed token is fixed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        if self.root.delete_symbol(self.cursor - 1) {
            self.cursor -= 1;
            self.selection_anchor = None;
            tracing::debug!(cursor = self.cursor, "deleted before cursor");
            self.committed();
            true
        } else {
            false
        }
    }

    /// Deletes the token after the cursor. No-op at the end or when the
    /// addressed token is fixed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.root.token_count() {
            return false;
        }
        if self.root.delete_symbol(self.cursor) {
            self.selection_anchor = None;
            tracing::debug!(cursor = self.cursor, "deleted after cursor");
            self.committed();
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self, extend: bool) -> bool {
        let target = self.cursor.saturating_sub(1);
        self.move_to(target, extend)
    }

    pub fn move_right(&mut self, extend: bool) -> bool {
        let target = (self.cursor + 1).min(self.root.token_count());
        self.move_to(target, extend)
    }

    pub fn move_to_start(&mut self, extend: bool) -> bool {
        self.move_to(0, extend)
    }

    pub fn move_to_end(&mut self, extend: bool) -> bool {
        self.move_to(self.root.token_count(), extend)
    }

    fn move_to(&mut self, target: usize, extend: bool) -> bool {
        if extend {
            self.selection_anchor.get_or_insert(self.cursor);
        } else {
            self.selection_anchor = None;
        }
        if target == self.cursor {
            return false;
        }
        self.cursor = target;
        self.root.set_cursor(Some(self.cursor));
        self.renderer.cursor_moved(self.cursor);
        true
    }

    fn committed(&mut self) {
        self.root.set_cursor(Some(self.cursor));
        let projection = self.root.projection();
        self.renderer.node_edited(&projection);
        self.renderer.cursor_moved(self.cursor);
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("root", &self.root)
            .field("cursor", &self.cursor)
            .field("selection_anchor", &self.selection_anchor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_a_negative_number() {
        let mut editor = Editor::new();
        assert_eq!(editor.handle_key('-'), AddSymbolOutcome::Accepted);
        assert_eq!(editor.cursor(), 1);
        assert!(matches!(editor.root(), Node::Integer(_)));
        assert!(!editor.is_valid());

        assert_eq!(editor.handle_key('5'), AddSymbolOutcome::Accepted);
        assert_eq!(editor.cursor(), 2);
        assert!(editor.is_valid());
        assert_eq!(editor.alt_text(), "negative 5");
    }

    #[test]
    fn rejected_keys_leave_everything_alone() {
        let mut editor = Editor::new();
        assert_eq!(editor.handle_key('x'), AddSymbolOutcome::Rejected);
        assert_eq!(editor.handle_key('/'), AddSymbolOutcome::Rejected);
        assert_eq!(editor.cursor(), 0);
        assert!(editor.root().is_empty_slot());
    }

    #[test]
    fn root_conversion_chain_to_rational() {
        let mut editor = Editor::new();
        editor.handle_key('7');
        assert_eq!(editor.handle_key('/'), AddSymbolOutcome::Accepted);
        assert!(matches!(editor.root(), Node::Rational(_)));
        assert_eq!(editor.cursor(), 2);
        assert!(!editor.is_valid());

        editor.handle_key('0');
        assert!(!editor.is_valid());
        editor.handle_key('2');
        assert!(editor.is_valid());
        assert_eq!(editor.alt_text(), "7 over 02");
        assert_eq!(editor.cursor(), 4);
    }

    #[test]
    fn backspace_walks_back_through_content() {
        let mut editor = Editor::new();
        editor.handle_key('1');
        editor.handle_key('.');
        editor.handle_key('5');
        assert!(matches!(editor.root(), Node::RealDecimal(_)));

        assert!(editor.backspace());
        assert!(editor.backspace());
        assert_eq!(editor.cursor(), 1);
        assert_eq!(editor.alt_text(), "1");
        assert!(editor.backspace());
        assert!(!editor.backspace());
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn delete_forward_holds_the_cursor() {
        let mut editor = Editor::new();
        editor.handle_key('1');
        editor.handle_key('2');
        editor.move_to_start(false);
        assert!(editor.delete_forward());
        assert_eq!(editor.cursor(), 0);
        assert_eq!(editor.alt_text(), "2");
        assert!(editor.delete_forward());
        assert!(!editor.delete_forward());
    }

    #[test]
    fn movement_clamps_to_the_token_range() {
        let mut editor = Editor::new();
        editor.handle_key('4');
        editor.handle_key('2');

        assert!(!editor.move_right(false));
        assert!(editor.move_left(false));
        assert!(editor.move_left(false));
        assert!(!editor.move_left(false));
        assert!(editor.move_to_end(false));
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn selection_tracks_an_anchor() {
        let mut editor = Editor::new();
        editor.handle_key('1');
        editor.handle_key('2');
        editor.handle_key('3');

        assert_eq!(editor.selection(), None);
        editor.move_left(true);
        editor.move_left(true);
        assert_eq!(editor.selection(), Some((1, 3)));

        // Collapsing back onto the anchor clears the selection.
        editor.move_to_end(true);
        assert_eq!(editor.selection(), None);

        editor.move_left(false);
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn typing_resets_the_selection() {
        let mut editor = Editor::new();
        editor.handle_key('1');
        editor.move_left(true);
        assert_eq!(editor.selection(), Some((0, 1)));
        assert_eq!(editor.handle_key('2'), AddSymbolOutcome::Accepted);
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn insertion_mid_buffer() {
        let mut editor = Editor::new();
        editor.handle_key('1');
        editor.handle_key('3');
        editor.move_left(false);
        assert_eq!(editor.handle_key('2'), AddSymbolOutcome::Accepted);
        assert_eq!(editor.alt_text(), "123");
        assert_eq!(editor.cursor(), 2);
    }
}
