use crate::{
    node::ExprNode,
    outcome::AddSymbolOutcome,
    projection::Projection,
    symbol::Symbol,
};

/// The placeholder occupying a slot that has no content yet.
///
/// An empty slot never stores symbols. The first symbol a user types into it
/// signals which literal variant the slot should become; see
/// [`crate::convert`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Empty {
    caret: Option<usize>,
}

impl Empty {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExprNode for Empty {
    fn token_count(&self) -> usize {
        0
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn add_symbol(&mut self, symbol: Symbol, _position: usize) -> AddSymbolOutcome {
        if symbol == Symbol::UnaryNegation || symbol.is_digit() {
            AddSymbolOutcome::ConvertToInteger
        } else if symbol == Symbol::Radix {
            AddSymbolOutcome::ConvertToRealDecimal
        } else {
            AddSymbolOutcome::Rejected
        }
    }

    fn delete_symbol(&mut self, _position: usize) -> bool {
        false
    }

    fn alt_text(&self) -> String {
        String::new()
    }

    fn set_cursor(&mut self, position: Option<usize>) {
        self.caret = position;
    }

    fn projection(&self) -> Projection {
        Projection::Empty
    }
}
