//! Growable symbol sequences and cached slot indices
//!
//! Provides [`SymbolBuffer`], the ordered sequence of symbols owned by every
//! literal node, and [`SlotIndex`], the cached position of a slot-limited
//! symbol (radix, exponent marker, slash, well-known constant, radical). Slot
//! indices are maintained in O(1) from the position of each mutation rather
//! than by rescanning the buffer.

use crate::symbol::Symbol;
use smallvec::SmallVec;

/// An ordered, growable sequence of symbols.
///
/// Short literals are the common case, so the first few symbols are stored
/// inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolBuffer {
    symbols: SmallVec<[Symbol; 8]>,
}

impl SymbolBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<Symbol> {
        self.symbols.get(position).copied()
    }

    pub fn first(&self) -> Option<Symbol> {
        self.symbols.first().copied()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Whether the sequence starts with a unary negation sign.
    pub fn leading_negation(&self) -> bool {
        self.first() == Some(Symbol::UnaryNegation)
    }

    /// Inserts a symbol, shifting everything at and after `position` right.
    ///
    /// `position` must be in `[0, len()]`.
    pub fn insert(&mut self, position: usize, symbol: Symbol) {
        self.symbols.insert(position, symbol);
    }

    /// Removes and returns the symbol at `position`.
    ///
    /// `position` must be in `[0, len())`; anything else is a caller bug.
    pub fn remove(&mut self, position: usize) -> Symbol {
        self.symbols.remove(position)
    }

    /// Whether any symbol strictly after `position` is something other than a
    /// zero digit. Used by the slash validity rule: a denominator consisting
    /// only of zero digits is a divide-by-zero-shaped form.
    pub fn any_nonzero_after(&self, position: usize) -> bool {
        self.symbols[position + 1..]
            .iter()
            .any(|sym| *sym != Symbol::Digit0)
    }

    /// Generates the accessible textual rendering of the sequence.
    ///
    /// Spaced fragments are surrounded by single spaces, adjacent spaced
    /// fragments share one space, and boundary spaces are trimmed so a leading
    /// negation renders "negative 5" rather than " negative 5".
    pub fn alt_text(&self) -> String {
        let mut out = String::with_capacity(self.symbols.len() * 2);
        let mut did_space = false;

        for sym in &self.symbols {
            let spaced = sym.spaced_in_text();
            if spaced && !did_space && !out.is_empty() {
                out.push(' ');
            }
            out.push_str(sym.alt_text());
            if spaced {
                out.push(' ');
            }
            did_space = spaced;
        }

        while out.ends_with(' ') {
            out.pop();
        }
        out
    }
}

/// The cached index of a slot-limited symbol; unset when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotIndex {
    index: Option<usize>,
}

impl SlotIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(self) -> Option<usize> {
        self.index
    }

    pub fn is_set(self) -> bool {
        self.index.is_some()
    }

    /// Records the slot holder at `position`.
    pub fn set(&mut self, position: usize) {
        self.index = Some(position);
    }

    /// Clears the slot; used when the holder itself is removed.
    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Adjusts for an insertion at `position`: a set index at or after the
    /// insertion point moves right by one.
    pub fn shift_for_insert(&mut self, position: usize) {
        if let Some(index) = &mut self.index {
            if *index >= position {
                *index += 1;
            }
        }
    }

    /// Adjusts for a removal at `position`: a set index after the removal
    /// point moves left by one.
    pub fn shift_for_remove(&mut self, position: usize) {
        if let Some(index) = &mut self.index {
            if *index > position {
                *index -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_keep_order() {
        let mut buf = SymbolBuffer::new();
        buf.insert(0, Symbol::Digit1);
        buf.insert(1, Symbol::Digit3);
        buf.insert(1, Symbol::Digit2);
        assert_eq!(
            buf.symbols(),
            &[Symbol::Digit1, Symbol::Digit2, Symbol::Digit3]
        );

        assert_eq!(buf.remove(1), Symbol::Digit2);
        assert_eq!(buf.symbols(), &[Symbol::Digit1, Symbol::Digit3]);
    }

    #[test]
    fn alt_text_spacing() {
        let mut buf = SymbolBuffer::new();
        buf.insert(0, Symbol::UnaryNegation);
        buf.insert(1, Symbol::Digit5);
        assert_eq!(buf.alt_text(), "negative 5");

        let mut frac = SymbolBuffer::new();
        frac.insert(0, Symbol::Digit3);
        frac.insert(1, Symbol::Slash);
        frac.insert(2, Symbol::Digit4);
        assert_eq!(frac.alt_text(), "3 over 4");
    }

    #[test]
    fn alt_text_adjacent_spaced_fragments_share_a_space() {
        let mut buf = SymbolBuffer::new();
        buf.insert(0, Symbol::UnaryNegation);
        buf.insert(1, Symbol::Pi);
        buf.insert(2, Symbol::Slash);
        buf.insert(3, Symbol::Digit2);
        assert_eq!(buf.alt_text(), "negative Pi over 2");
    }

    #[test]
    fn alt_text_empty_buffer() {
        assert_eq!(SymbolBuffer::new().alt_text(), "");
    }

    #[test]
    fn nonzero_after_detects_all_zero_tails() {
        let mut buf = SymbolBuffer::new();
        buf.insert(0, Symbol::Digit7);
        buf.insert(1, Symbol::Slash);
        buf.insert(2, Symbol::Digit0);
        assert!(!buf.any_nonzero_after(1));
        buf.insert(3, Symbol::Digit2);
        assert!(buf.any_nonzero_after(1));
    }

    #[test]
    fn slot_shifts_for_insert_and_remove() {
        let mut slot = SlotIndex::new();
        slot.set(3);

        slot.shift_for_insert(1);
        assert_eq!(slot.get(), Some(4));
        slot.shift_for_insert(4);
        assert_eq!(slot.get(), Some(5));
        slot.shift_for_insert(6);
        assert_eq!(slot.get(), Some(5));

        slot.shift_for_remove(2);
        assert_eq!(slot.get(), Some(4));
        slot.shift_for_remove(4);
        assert_eq!(slot.get(), Some(4));

        slot.clear();
        slot.shift_for_insert(0);
        assert_eq!(slot.get(), None);
    }
}
