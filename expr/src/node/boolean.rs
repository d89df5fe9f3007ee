use crate::{
    node::ExprNode,
    outcome::AddSymbolOutcome,
    projection::Projection,
    symbol::Symbol,
};

/// An immutable boolean constant occupying a single token.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    value: bool,
    caret: Option<usize>,
}

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self { value, caret: None }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    fn text(&self) -> &'static str {
        if self.value {
            "true"
        } else {
            "false"
        }
    }
}

impl ExprNode for BooleanLiteral {
    fn token_count(&self) -> usize {
        1
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn add_symbol(&mut self, _symbol: Symbol, _position: usize) -> AddSymbolOutcome {
        AddSymbolOutcome::Rejected
    }

    fn delete_symbol(&mut self, _position: usize) -> bool {
        false
    }

    fn alt_text(&self) -> String {
        self.text().to_string()
    }

    fn set_cursor(&mut self, position: Option<usize>) {
        self.caret = position;
    }

    fn projection(&self) -> Projection {
        Projection::Text(self.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immutable_single_token() {
        let mut node = BooleanLiteral::new(true);
        assert_eq!(node.token_count(), 1);
        assert!(node.is_valid());
        assert_eq!(node.add_symbol(Symbol::Digit1, 0), AddSymbolOutcome::Rejected);
        assert_eq!(node.add_symbol(Symbol::Digit1, 1), AddSymbolOutcome::Rejected);
        assert!(!node.delete_symbol(0));
        assert_eq!(node.alt_text(), "true");
        assert_eq!(
            BooleanLiteral::new(false).projection(),
            Projection::Text("false".to_string())
        );
    }
}
