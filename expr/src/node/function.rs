use crate::{
    convert,
    node::{ExprNode, Node},
    outcome::AddSymbolOutcome,
    projection::{Projection, PLACEHOLDER},
    resolve::{self, TokenSlot},
    symbol::Symbol,
};
use smol_str::SmolStr;

/// A named function over an ordered, non-empty argument list.
///
/// The name/opening-parenthesis token, the closing parenthesis, and the comma
/// between adjacent arguments are fixed. Only argument content is editable,
/// except that deleting a comma whose neighboring argument is an empty slot
/// collapses the two argument positions into one.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    name: SmolStr,
    args: Vec<Node>,
    caret: Option<usize>,
}

impl FunctionCall {
    /// `args` must be non-empty; a call always has at least one argument
    /// slot, even if it is still an empty placeholder.
    pub fn new(name: impl Into<SmolStr>, args: Vec<Node>) -> Self {
        debug_assert!(!args.is_empty());
        Self {
            name: name.into(),
            args,
            caret: None,
        }
    }

    /// A call with `arity` empty argument slots.
    pub fn with_arity(name: impl Into<SmolStr>, arity: usize) -> Self {
        Self::new(name, (0..arity.max(1)).map(|_| Node::empty()).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Node] {
        &self.args
    }

    fn counts(&self) -> Vec<usize> {
        self.args.iter().map(Node::token_count).collect()
    }
}

impl ExprNode for FunctionCall {
    fn token_count(&self) -> usize {
        let content: usize = self.args.iter().map(Node::token_count).sum();
        2 + content + (self.args.len() - 1)
    }

    fn is_valid(&self) -> bool {
        self.args.iter().all(Node::is_valid)
    }

    fn add_symbol(&mut self, symbol: Symbol, position: usize) -> AddSymbolOutcome {
        debug_assert!(position <= self.token_count());
        if position == 0 || position == self.token_count() {
            return AddSymbolOutcome::Rejected;
        }
        // Insert resolution folds comma gaps into the preceding argument, so
        // only a child slot comes back here (None is ruled out by the guard).
        match resolve::resolve_insert(&self.counts(), position) {
            Some(TokenSlot::Child { index, local }) => {
                let arg = &mut self.args[index];
                let outcome = arg.add_symbol(symbol, local);
                convert::deliver(arg, outcome, symbol, local)
            }
            _ => AddSymbolOutcome::Rejected,
        }
    }

    fn delete_symbol(&mut self, position: usize) -> bool {
        debug_assert!(position <= self.token_count());
        if position == 0 || position + 1 >= self.token_count() {
            return false;
        }
        match resolve::resolve_delete(&self.counts(), position) {
            Some(TokenSlot::Child { index, local }) => self.args[index].delete_symbol(local),
            Some(TokenSlot::Separator { index }) => {
                // A comma goes only when one of its neighbors is an empty
                // slot; the comma and that slot collapse together.
                if self.args[index].is_empty_slot() {
                    self.args.remove(index);
                    true
                } else if self.args[index + 1].is_empty_slot() {
                    self.args.remove(index + 1);
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }

    fn alt_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let text = arg.alt_text();
            if text.is_empty() {
                out.push_str(PLACEHOLDER);
            } else {
                out.push_str(&text);
            }
        }
        out.push(')');
        out
    }

    fn set_cursor(&mut self, position: Option<usize>) {
        self.caret = position;
        let slot = position.and_then(|pos| {
            if pos == 0 || pos >= self.token_count() {
                None
            } else {
                resolve::resolve_insert(&self.counts(), pos)
            }
        });
        for (index, arg) in self.args.iter_mut().enumerate() {
            let local = match slot {
                Some(TokenSlot::Child { index: i, local }) if i == index => Some(local),
                _ => None,
            };
            arg.set_cursor(local);
        }
    }

    fn projection(&self) -> Projection {
        Projection::Function {
            name: self.name.clone(),
            args: self.args.iter().map(Node::projection).collect(),
        }
    }
}
