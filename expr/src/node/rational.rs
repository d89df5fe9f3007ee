use crate::{
    buffer::{SlotIndex, SymbolBuffer},
    node::ExprNode,
    outcome::AddSymbolOutcome,
    projection::{self, Projection},
    symbol::Symbol,
};

/// A fraction literal: a signed digit numerator, one slash, a digit
/// denominator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rational {
    symbols: SymbolBuffer,
    slash: SlotIndex,
    caret: Option<usize>,
}

impl Rational {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &[Symbol] {
        self.symbols.symbols()
    }

    fn insert(&mut self, position: usize, symbol: Symbol) {
        self.symbols.insert(position, symbol);
        self.slash.shift_for_insert(position);
    }
}

impl ExprNode for Rational {
    fn token_count(&self) -> usize {
        self.symbols.len()
    }

    fn is_valid(&self) -> bool {
        let len = self.symbols.len();
        let negated = self.symbols.leading_negation();
        match self.slash.get() {
            None => len > 0 && (!negated || len > 1),
            Some(slash) => {
                // Numerator past any sign, denominator present and not all
                // zeros (a divide-by-zero-shaped form).
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
                    AddSymbolOutcome::Rejected
                } else {
                    self.insert(position, digit);
                    AddSymbolOutcome::Accepted
                }
            }
            Symbol::Slash => {
                if self.slash.is_set() || (position == 0 && negated) {
                    AddSymbolOutcome::Rejected
                } else {
                    self.insert(position, symbol);
                    self.slash.set(position);
                    AddSymbolOutcome::Accepted
                }
            }
            Symbol::Radix => {
                // A decimal numerator means the whole form is a decimal, but
                // only while no slash has committed it to a fraction.
                if self.slash.is_set() || (position == 0 && negated) {
                    AddSymbolOutcome::Rejected
                } else {
                    AddSymbolOutcome::ConvertToRealDecimal
                }
            }
            Symbol::ExpPlus | Symbol::ExpMinus => {
                if self.slash.is_set() || position == 0 || (position == 1 && negated) {
                    AddSymbolOutcome::Rejected
                } else {
                    AddSymbolOutcome::ConvertToRealDecimal
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
        if self.symbols.remove(position) == Symbol::Slash {
            self.slash.clear();
        }
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
        } else {
            projection::fraction_of(self.symbols.symbols())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_denominator_is_incomplete() {
        let mut node = Rational::new();
        node.add_symbol(Symbol::Digit7, 0);
        assert_eq!(node.add_symbol(Symbol::Slash, 1), AddSymbolOutcome::Accepted);
        assert!(!node.is_valid());
        assert_eq!(
            node.projection(),
            Projection::Fraction {
                negated: false,
                numerator: "7".to_string(),
                denominator: "_".to_string(),
            }
        );
    }

    #[test]
    fn all_zero_denominator_is_rejected_as_invalid() {
        let mut node = Rational::new();
        node.add_symbol(Symbol::Digit7, 0);
        node.add_symbol(Symbol::Slash, 1);
        node.add_symbol(Symbol::Digit0, 2);
        assert!(!node.is_valid());

        node.add_symbol(Symbol::Digit2, 3);
        assert_eq!(
            node.symbols(),
            &[Symbol::Digit7, Symbol::Slash, Symbol::Digit0, Symbol::Digit2]
        );
        assert!(node.is_valid());
        assert_eq!(node.alt_text(), "7 over 02");
    }

    #[test]
    fn only_one_slash() {
        let mut node = Rational::new();
        node.add_symbol(Symbol::Digit3, 0);
        node.add_symbol(Symbol::Slash, 1);
        node.add_symbol(Symbol::Digit4, 2);
        assert_eq!(node.add_symbol(Symbol::Slash, 3), AddSymbolOutcome::Rejected);
    }

    #[test]
    fn numerator_digits_shift_the_cached_slash() {
        let mut node = Rational::new();
        node.add_symbol(Symbol::Digit3, 0);
        node.add_symbol(Symbol::Slash, 1);
        node.add_symbol(Symbol::Digit4, 2);

        // Growing the numerator moves the slash; the denominator rule must
        // still see it at its new position.
        node.add_symbol(Symbol::Digit1, 0);
        assert_eq!(
            node.symbols(),
            &[Symbol::Digit1, Symbol::Digit3, Symbol::Slash, Symbol::Digit4]
        );
        assert!(node.is_valid());

        assert!(node.delete_symbol(3));
        assert!(!node.is_valid());
    }

    #[test]
    fn deleting_the_slash_frees_the_slot() {
        let mut node = Rational::new();
        node.add_symbol(Symbol::Digit3, 0);
        node.add_symbol(Symbol::Slash, 1);
        assert!(node.delete_symbol(1));
        assert_eq!(node.add_symbol(Symbol::Slash, 1), AddSymbolOutcome::Accepted);
    }

    #[test]
    fn radix_converts_back_to_decimal_only_before_the_slash_exists() {
        let mut node = Rational::new();
        node.add_symbol(Symbol::Digit3, 0);
        assert_eq!(
            node.add_symbol(Symbol::Radix, 1),
            AddSymbolOutcome::ConvertToRealDecimal
        );
        node.add_symbol(Symbol::Slash, 1);
        assert_eq!(node.add_symbol(Symbol::Radix, 2), AddSymbolOutcome::Rejected);
        assert_eq!(node.add_symbol(Symbol::ExpPlus, 2), AddSymbolOutcome::Rejected);
    }

    #[test]
    fn negated_fraction() {
        let mut node = Rational::new();
        node.add_symbol(Symbol::Digit2, 0);
        node.add_symbol(Symbol::Slash, 1);
        node.add_symbol(Symbol::Digit3, 2);
        node.add_symbol(Symbol::UnaryNegation, 0);
        assert!(node.is_valid());
        assert_eq!(node.alt_text(), "negative 2 over 3");
        assert_eq!(
            node.projection(),
            Projection::Fraction {
                negated: true,
                numerator: "2".to_string(),
                denominator: "3".to_string(),
            }
        );
    }
}
