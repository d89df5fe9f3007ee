use crate::{
    buffer::{SlotIndex, SymbolBuffer},
    node::ExprNode,
    outcome::AddSymbolOutcome,
    projection::{self, Projection},
    symbol::Symbol,
};

/// A multiple of a square root, optionally over a digit denominator: forms
/// like "3√2" or "3√2/4".
///
/// Unlike the well-known constants, the radical takes an argument, so digits
/// are welcome on either side of it. The radical must precede any slash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrrationalRoot {
    symbols: SymbolBuffer,
    radical: SlotIndex,
    slash: SlotIndex,
    caret: Option<usize>,
}

impl IrrationalRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &[Symbol] {
        self.symbols.symbols()
    }

    fn insert(&mut self, position: usize, symbol: Symbol) {
        self.symbols.insert(position, symbol);
        self.radical.shift_for_insert(position);
        self.slash.shift_for_insert(position);
    }
}

impl ExprNode for IrrationalRoot {
    fn token_count(&self) -> usize {
        self.symbols.len()
    }

    fn is_valid(&self) -> bool {
        let len = self.symbols.len();
        let negated = self.symbols.leading_negation();
        match (self.radical.get(), self.slash.get()) {
            (None, None) => len > 0 && (!negated || len > 1),
            // The radical needs an argument after it.
            (Some(radical), None) => radical != len - 1,
            (radical, Some(slash)) => {
                slash > usize::from(negated)
                    && slash < len - 1
                    && self.symbols.any_nonzero_after(slash)
                    && radical.is_none_or(|radical| radical < slash)
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
            Symbol::Radical => {
                if self.radical.is_set() {
                    return AddSymbolOutcome::Rejected;
                }
                let allowed = match self.slash.get() {
                    None => position > 0 || !negated,
                    Some(slash) => position <= slash,
                };
                if allowed {
                    self.insert(position, symbol);
                    self.radical.set(position);
                    AddSymbolOutcome::Accepted
                } else {
                    AddSymbolOutcome::Rejected
                }
            }
            Symbol::Slash => {
                if self.slash.is_set() {
                    return AddSymbolOutcome::Rejected;
                }
                match self.radical.get() {
                    // No radical yet means this is still a plain number, and
                    // the slash turns it into a fraction.
                    None => {
                        if position == 0 && negated {
                            AddSymbolOutcome::Rejected
                        } else {
                            AddSymbolOutcome::ConvertToRational
                        }
                    }
                    Some(radical) => {
                        if position > radical {
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
            Symbol::Radical => self.radical.clear(),
            Symbol::Slash => self.slash.clear(),
            _ => {}
        }
        self.radical.shift_for_remove(position);
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
