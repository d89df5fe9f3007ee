use crate::{
    convert,
    node::{ExprNode, Node},
    outcome::AddSymbolOutcome,
    projection::Projection,
    symbol::Symbol,
};

/// A single child wrapped in fixed parentheses.
///
/// The parentheses each occupy one cursor gap but are not content: they can
/// never be edited or deleted, only the child between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    child: Box<Node>,
    caret: Option<usize>,
}

impl Grouping {
    pub fn new(child: Node) -> Self {
        Self {
            child: Box::new(child),
            caret: None,
        }
    }

    pub fn child(&self) -> &Node {
        &self.child
    }
}

impl ExprNode for Grouping {
    fn token_count(&self) -> usize {
        2 + self.child.token_count()
    }

    fn is_valid(&self) -> bool {
        self.child.is_valid()
    }

    fn add_symbol(&mut self, symbol: Symbol, position: usize) -> AddSymbolOutcome {
        debug_assert!(position <= self.token_count());
        if position == 0 || position == self.token_count() {
            return AddSymbolOutcome::Rejected;
        }
        let outcome = self.child.add_symbol(symbol, position - 1);
        // Conversions resolve here: this node owns the child's slot.
        convert::deliver(&mut self.child, outcome, symbol, position - 1)
    }

    fn delete_symbol(&mut self, position: usize) -> bool {
        debug_assert!(position <= self.token_count());
        if position == 0 || position + 1 >= self.token_count() {
            return false;
        }
        self.child.delete_symbol(position - 1)
    }

    fn alt_text(&self) -> String {
        format!("({})", self.child.alt_text())
    }

    fn set_cursor(&mut self, position: Option<usize>) {
        self.caret = position;
        let inner = position.and_then(|pos| {
            (pos >= 1 && pos <= 1 + self.child.token_count()).then(|| pos - 1)
        });
        self.child.set_cursor(inner);
    }

    fn projection(&self) -> Projection {
        Projection::Group(Box::new(self.child.projection()))
    }
}
