use crate::{
    buffer::SymbolBuffer,
    node::ExprNode,
    outcome::AddSymbolOutcome,
    projection::{self, Projection},
    symbol::Symbol,
};

/// A whole-number literal: an optional leading negation followed by digits.
///
/// The narrowest of the literal grammars. A radix point, exponent marker, or
/// slash is never stored here; each signals a conversion to the variant whose
/// grammar includes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Integer {
    symbols: SymbolBuffer,
    caret: Option<usize>,
}

impl Integer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &[Symbol] {
        self.symbols.symbols()
    }
}

impl ExprNode for Integer {
    fn token_count(&self) -> usize {
        self.symbols.len()
    }

    fn is_valid(&self) -> bool {
        // A lone negation sign is a number still being typed.
        !self.symbols.is_empty() && (!self.symbols.leading_negation() || self.symbols.len() > 1)
    }

    fn add_symbol(&mut self, symbol: Symbol, position: usize) -> AddSymbolOutcome {
        debug_assert!(position <= self.symbols.len());
        let negated = self.symbols.leading_negation();
        match symbol {
            Symbol::UnaryNegation => {
                if position == 0 && !negated {
                    self.symbols.insert(0, symbol);
                    AddSymbolOutcome::Accepted
                } else {
                    AddSymbolOutcome::Rejected
                }
            }
            digit if digit.is_digit() => {
                if position == 0 && negated {
                    AddSymbolOutcome::Rejected
                } else {
                    self.symbols.insert(position, digit);
                    AddSymbolOutcome::Accepted
                }
            }
            Symbol::Radix => {
                if position == 0 && negated {
                    AddSymbolOutcome::Rejected
                } else {
                    AddSymbolOutcome::ConvertToRealDecimal
                }
            }
            Symbol::ExpPlus | Symbol::ExpMinus => {
                // An exponent needs a mantissa before it.
                if position == 0 || (position == 1 && negated) {
                    AddSymbolOutcome::Rejected
                } else {
                    AddSymbolOutcome::ConvertToRealDecimal
                }
            }
            Symbol::Slash => {
                if position == 0 || (position == 1 && negated) {
                    AddSymbolOutcome::Rejected
                } else {
                    AddSymbolOutcome::ConvertToRational
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
        self.symbols.remove(position);
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
            Projection::Text(projection::text_of(self.symbols.symbols()))
        }
    }
}
