//! Expression tree nodes
//!
//! A node represents some number of "tokens" between which the cursor can
//! fall. Composite nodes report their intrinsic tokens plus the tokens of all
//! descendants. A node may be in a valid or an invalid state depending on
//! which symbols are present; invalid sub-trees are normal, transient editing
//! states and never block further edits. For example, a fraction whose
//! denominator has not been typed yet is invalid but fully editable.
//!
//! The eight variants form a closed set, so [`Node`] is an enum with static
//! dispatch through [`ExprNode`] rather than an open trait-object hierarchy.
//! This also makes the conversion transitions statically enumerable: only
//! [`Empty`] and the literal buffer variants ever return a `ConvertTo*`
//! outcome.

mod boolean;
mod empty;
mod function;
mod grouping;
mod integer;
mod irrational_root;
mod irrational_symbol;
mod rational;
mod real_decimal;

pub use boolean::BooleanLiteral;
pub use empty::Empty;
pub use function::FunctionCall;
pub use grouping::Grouping;
pub use integer::Integer;
pub use irrational_root::IrrationalRoot;
pub use irrational_symbol::IrrationalSymbol;
pub use rational::Rational;
pub use real_decimal::RealDecimal;

use crate::{outcome::AddSymbolOutcome, projection::Projection, symbol::Symbol};
use enum_dispatch::enum_dispatch;

/// The capability set shared by every node variant.
#[enum_dispatch]
pub trait ExprNode {
    /// The number of tokens in this node and its descendants. The cursor is
    /// always in a gap between adjacent tokens, or before the first or after
    /// the last token.
    fn token_count(&self) -> usize;

    /// Whether the node is in a valid state. Invalid states are expected
    /// during editing and do not block further mutation.
    fn is_valid(&self) -> bool;

    /// Adds a symbol at a node-local position, already resolved to this
    /// node's frame by the caller.
    fn add_symbol(&mut self, symbol: Symbol, position: usize) -> AddSymbolOutcome;

    /// Deletes the token at a node-local position. Returns whether anything
    /// was deleted; fixed tokens of composites are never deletable.
    fn delete_symbol(&mut self, position: usize) -> bool;

    /// Handles a raw key press by mapping it through the shared key table and
    /// delegating to [`ExprNode::add_symbol`]. Unrecognized keys are rejected.
    fn handle_key(&mut self, key: char, position: usize) -> AddSymbolOutcome {
        match Symbol::from_key(key) {
            Some(symbol) => self.add_symbol(symbol, position),
            None => AddSymbolOutcome::Rejected,
        }
    }

    /// Generates the accessible textual rendering of the node's contents.
    fn alt_text(&self) -> String;

    /// Caret notification hook for the external renderer. `None` means the
    /// cursor is not within this node. Carries no semantic state back into
    /// the model.
    fn set_cursor(&mut self, position: Option<usize>);

    /// The renderable projection of this node.
    fn projection(&self) -> Projection;
}

/// A node in an expression tree.
#[enum_dispatch(ExprNode)]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Empty(Empty),
    BooleanLiteral(BooleanLiteral),
    Integer(Integer),
    RealDecimal(RealDecimal),
    Rational(Rational),
    IrrationalSymbol(IrrationalSymbol),
    IrrationalRoot(IrrationalRoot),
    Grouping(Grouping),
    FunctionCall(FunctionCall),
}

impl Default for Node {
    fn default() -> Self {
        Node::Empty(Empty::new())
    }
}

impl Node {
    /// A fresh empty placeholder node.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this node is the empty placeholder.
    pub fn is_empty_slot(&self) -> bool {
        matches!(self, Node::Empty(_))
    }
}
