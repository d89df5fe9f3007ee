use crate::{
    buffer::{SlotIndex, SymbolBuffer},
    node::ExprNode,
    outcome::AddSymbolOutcome,
    projection::{self, Projection},
    symbol::Symbol,
};

/// A multiple of a well-known irrational constant, optionally over a digit
/// denominator: forms like "3π", "e", "3π/2".
///
/// The constant closes the numerator: digits go before it, a slash may only
/// follow it directly, and denominator digits go after the slash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrrationalSymbol {
    symbols: SymbolBuffer,
    well_known: SlotIndex,
    slash: SlotIndex,
    caret: Option<usize>,
}

impl IrrationalSymbol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &[Symbol] {
        self.symbols.symbols()
    }

    fn insert(&mut self, position: usize, symbol: Symbol) {
        self.symbols.insert(position, symbol);
        self.well_known.shift_for_insert(position);
        self.slash.shift_for_insert(position);
    }
}

impl ExprNode for IrrationalSymbol {
    fn token_count(&self) -> usize {
        self.symbols.len()
    }

    fn is_valid(&self) -> bool {
        let len = self.symbols.len();
        let negated = self.symbols.leading_negation();
        match (self.well_known.get(), self.slash.get()) {
            (None, None) => len > 0 && (!negated || len > 1),
            (Some(well_known), None) => well_known == len - 1,
            (_, Some(slash)) => {
                slash > usize::from(negated)
                    && slash < len - 1
                    && self.symbols.any_nonzero_after(slash)
            }
        }
    }

    fn add_symbol(&mut self, symbol: Symbol, position: usize) -> AddSymbolOutcome {
        debug_assert!(position <= self.symbols.len());
        let negated = self.symbols.leading_negation();
        match symbol {
            Symbol::UnaryNegation => {
                if position == 0 && !negated {
                    self.insert(0, symbol);
                    AddSymbolOutcome::Accepted
                } else {
                    AddSymbolOutcome::Rejected
                }
            }
            digit if digit.is_digit() => {
                if position == 0 && negated {
                    return AddSymbolOutcome::Rejected;
                }
                let allowed = match (self.well_known.get(), self.slash.get()) {
                    (None, _) => true,
                    // Digits belong to the coefficient or the denominator,
                    // never between the constant and the slash.
                    (Some(well_known), None) => position <= well_known,
                    (Some(well_known), Some(slash)) => {
                        position <= well_known || position > slash
                    }
                };
                if allowed {
                    self.insert(position, digit);
                    AddSymbolOutcome::Accepted
                } else {
                    AddSymbolOutcome::Rejected
                }
            }
            Symbol::Pi | Symbol::Euler => {
                if self.well_known.is_set() {
                    return AddSymbolOutcome::Rejected;
                }
                let at_numerator_end = match self.slash.get() {
                    None => position == self.symbols.len(),
                    Some(slash) => position == slash,
                };
                if at_numerator_end {
                    self.insert(position, symbol);
                    self.well_known.set(position);
                    AddSymbolOutcome::Accepted
                } else {
                    AddSymbolOutcome::Rejected
                }
            }
            Symbol::Slash => {
                if self.slash.is_set() {
                    return AddSymbolOutcome::Rejected;
                }
                match self.well_known.get() {
                    // Without a constant this is a plain signed number and
                    // the slash makes it a fraction instead.
                    None => {
                        if position == 0 && negated {
                            AddSymbolOutcome::Rejected
                        } else {
                            AddSymbolOutcome::ConvertToRational
                        }
                    }
                    Some(well_known) => {
                        if position == well_known + 1 {
                            self.insert(position, symbol);
                            self.slash.set(position);
                            AddSymbolOutcome::Accepted
                        } else {
                            AddSymbolOutcome::Rejected
                        }
                    }
                }
            }
            _ => AddSymbolOutcome::Rejected,
        }
    }

    fn delete_symbol(&mut self, position: usize) -> bool {
        debug_assert!(position <= self.symbols.len());
        if position >= self.symbols.len() {
            return false;
        }
        match self.symbols.remove(position) {
            Symbol::Pi | Symbol::Euler => self.well_known.clear(),
            Symbol::Slash => self.slash.clear(),
            _ => {}
        }
        self.well_known.shift_for_remove(position);
        self.slash.shift_for_remove(position);
        true
    }

    fn alt_text(&self) -> String {
        self.symbols.alt_text()
    }

    fn set_cursor(&mut self, position: Option<usize>) {
        self.caret = position;
    }

    fn projection(&self) -> Projection {
        if self.symbols.is_empty() {
            Projection::Empty
        } else if self.slash.is_set() {
            projection::fraction_of(self.symbols.symbols())
        } else {
            Projection::Text(projection::text_of(self.symbols.symbols()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_closes_the_coefficient() {
        let mut node = IrrationalSymbol::new();
        assert_eq!(node.add_symbol(Symbol::Digit3, 0), AddSymbolOutcome::Accepted);
        assert_eq!(node.add_symbol(Symbol::Pi, 1), AddSymbolOutcome::Accepted);
        assert!(node.is_valid());

        // Digits may still grow the coefficient, never trail the constant.
        assert_eq!(node.add_symbol(Symbol::Digit2, 2), AddSymbolOutcome::Rejected);
        assert_eq!(node.add_symbol(Symbol::Digit1, 1), AddSymbolOutcome::Accepted);
        assert_eq!(
            node.symbols(),
            &[Symbol::Digit3, Symbol::Digit1, Symbol::Pi]
        );
        assert!(node.is_valid());
    }

    #[test]
    fn only_one_constant() {
        let mut node = IrrationalSymbol::new();
        node.add_symbol(Symbol::Euler, 0);
        assert_eq!(node.add_symbol(Symbol::Pi, 1), AddSymbolOutcome::Rejected);
        assert!(node.is_valid());
        assert_eq!(node.alt_text(), "e");
    }

    #[test]
    fn constant_mid_coefficient_is_rejected() {
        let mut node = IrrationalSymbol::new();
        node.add_symbol(Symbol::Digit3, 0);
        node.add_symbol(Symbol::Digit1, 1);
        assert_eq!(node.add_symbol(Symbol::Pi, 1), AddSymbolOutcome::Rejected);
        assert_eq!(node.add_symbol(Symbol::Pi, 2), AddSymbolOutcome::Accepted);
    }

    #[test]
    fn slash_goes_directly_after_the_constant() {
        let mut node = IrrationalSymbol::new();
        node.add_symbol(Symbol::Digit3, 0);
        node.add_symbol(Symbol::Pi, 1);
        assert_eq!(node.add_symbol(Symbol::Slash, 1), AddSymbolOutcome::Rejected);
        assert_eq!(node.add_symbol(Symbol::Slash, 2), AddSymbolOutcome::Accepted);
        assert!(!node.is_valid());

        assert_eq!(node.add_symbol(Symbol::Digit2, 3), AddSymbolOutcome::Accepted);
        assert!(node.is_valid());
        assert_eq!(node.alt_text(), "3 Pi over 2");
        assert_eq!(
            node.projection(),
            Projection::Fraction {
                negated: false,
                numerator: "3\u{03c0}".to_string(),
                denominator: "2".to_string(),
            }
        );

        // Denominator digits go anywhere after the slash, including the gap
        // right behind it, but never between the constant and the slash.
        assert_eq!(node.add_symbol(Symbol::Digit4, 2), AddSymbolOutcome::Rejected);
        assert_eq!(node.add_symbol(Symbol::Digit4, 3), AddSymbolOutcome::Accepted);
        assert_eq!(
            node.symbols(),
            &[
                Symbol::Digit3,
                Symbol::Pi,
                Symbol::Slash,
                Symbol::Digit4,
                Symbol::Digit2,
            ]
        );
        assert_eq!(node.alt_text(), "3 Pi over 42");
    }

    #[test]
    fn slash_without_a_constant_converts_to_rational() {
        let mut node = IrrationalSymbol::new();
        node.add_symbol(Symbol::Digit5, 0);
        assert_eq!(
            node.add_symbol(Symbol::Slash, 1),
            AddSymbolOutcome::ConvertToRational
        );
    }

    #[test]
    fn coefficient_digits_shift_both_cached_slots() {
        let mut node = IrrationalSymbol::new();
        node.add_symbol(Symbol::Pi, 0);
        node.add_symbol(Symbol::Slash, 1);
        node.add_symbol(Symbol::Digit2, 2);

        node.add_symbol(Symbol::Digit3, 0);
        assert_eq!(
            node.symbols(),
            &[Symbol::Digit3, Symbol::Pi, Symbol::Slash, Symbol::Digit2]
        );
        // The slash slot must have moved with the insert for the second
        // slash to be recognized as a duplicate at its new frame.
        assert_eq!(node.add_symbol(Symbol::Slash, 2), AddSymbolOutcome::Rejected);
        assert!(node.is_valid());
    }

    #[test]
    fn replaying_content_into_a_fresh_node_reproduces_it() {
        let mut node = IrrationalSymbol::new();
        node.add_symbol(Symbol::Digit3, 0);
        node.add_symbol(Symbol::Pi, 1);
        node.add_symbol(Symbol::Slash, 2);
        node.add_symbol(Symbol::Digit2, 3);
        // Grow both sides of the slash out of order.
        assert_eq!(node.add_symbol(Symbol::Digit1, 1), AddSymbolOutcome::Accepted);
        assert_eq!(node.add_symbol(Symbol::Digit5, 5), AddSymbolOutcome::Accepted);

        let mut replayed = IrrationalSymbol::new();
        for (i, sym) in node.symbols().iter().copied().enumerate() {
            assert_eq!(
                replayed.add_symbol(sym, i),
                AddSymbolOutcome::Accepted,
                "replay of {sym:?} at {i}"
            );
        }
        assert_eq!(replayed.symbols(), node.symbols());
        assert_eq!(replayed.alt_text(), node.alt_text());
    }

    #[test]
    fn deleting_the_constant_reopens_the_slot() {
        let mut node = IrrationalSymbol::new();
        node.add_symbol(Symbol::Digit3, 0);
        node.add_symbol(Symbol::Pi, 1);
        assert!(node.delete_symbol(1));
        assert_eq!(node.add_symbol(Symbol::Euler, 1), AddSymbolOutcome::Accepted);
    }
}
