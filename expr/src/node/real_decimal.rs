use crate::{
    buffer::{SlotIndex, SymbolBuffer},
    node::ExprNode,
    outcome::AddSymbolOutcome,
    projection::{self, Projection},
    symbol::Symbol,
};

/// A decimal literal: sign, digits, at most one radix point, at most one
/// exponent marker.
///
/// The radix and exponent positions are cached and maintained on every
/// mutation rather than recovered by scanning the buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealDecimal {
    symbols: SymbolBuffer,
    radix: SlotIndex,
    exponent: SlotIndex,
    caret: Option<usize>,
}

impl RealDecimal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &[Symbol] {
        self.symbols.symbols()
    }

    fn insert(&mut self, position: usize, symbol: Symbol) {
        self.symbols.insert(position, symbol);
        self.radix.shift_for_insert(position);
        self.exponent.shift_for_insert(position);
    }
}

impl ExprNode for RealDecimal {
    fn token_count(&self) -> usize {
        self.symbols.len()
    }

    fn is_valid(&self) -> bool {
        let len = self.symbols.len();
        let negated = self.symbols.leading_negation();
        match (self.radix.get(), self.exponent.get()) {
            (None, None) => len > 0 && (!negated || len > 1),
            // The exponent needs a mantissa before it and digits after it.
            (None, Some(exp)) => exp < len - 1 && exp > usize::from(negated),
            (Some(_), None) => len > usize::from(negated) + 1,
            (Some(radix), Some(exp)) => {
                radix < exp && exp < len - 1 && exp > usize::from(negated) + 1
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
            Symbol::Radix => {
                if self.radix.is_set() || (position == 0 && negated) {
                    return AddSymbolOutcome::Rejected;
                }
                // A radix point never lands inside or after the exponent.
                if let Some(exp) = self.exponent.get() {
                    if position > exp {
                        return AddSymbolOutcome::Rejected;
                    }
                }
                self.insert(position, symbol);
                self.radix.set(position);
                AddSymbolOutcome::Accepted
            }
            Symbol::ExpPlus | Symbol::ExpMinus => {
                if self.exponent.is_set() || position == 0 || (position == 1 && negated) {
                    return AddSymbolOutcome::Rejected;
                }
                if let Some(radix) = self.radix.get() {
                    if position <= radix {
                        return AddSymbolOutcome::Rejected;
                    }
                }
                self.insert(position, symbol);
                self.exponent.set(position);
                AddSymbolOutcome::Accepted
            }
            Symbol::Slash => {
                // Only a plain signed-digit prefix may still become a
                // fraction; a radix or exponent rules that out.
                if self.radix.is_set() || self.exponent.is_set() {
                    AddSymbolOutcome::Rejected
                } else if position == 0 || (position == 1 && negated) {
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
        match self.symbols.remove(position) {
            Symbol::Radix => self.radix.clear(),
            Symbol::ExpPlus | Symbol::ExpMinus => self.exponent.clear(),
            _ => {}
        }
        self.radix.shift_for_remove(position);
        self.exponent.shift_for_remove(position);
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
