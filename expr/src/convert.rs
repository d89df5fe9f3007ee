//! Forward conversion between literal variants
//!
//! A literal node that rejects a symbol belonging to a richer grammar asks
//! for a conversion instead of failing the keystroke. Whoever owns the node's
//! slot applies it: build the requested variant, replay the old node's symbol
//! sequence into it in order, swap it into the slot, then re-deliver the
//! originally rejected symbol at the same position.
//!
//! Replaying must never itself request a further conversion: every target
//! grammar is a superset of the content that triggered the hop. A replay
//! rejection is a bug in the grammar tables, not a reachable editing state.

use crate::{
    node::{ExprNode, Integer, Node, Rational, RealDecimal},
    outcome::{AddSymbolOutcome, ConvertTarget},
    symbol::Symbol,
};

/// The symbol sequence a node carries forward on conversion.
fn carried_symbols(node: &Node) -> &[Symbol] {
    match node {
        Node::Empty(_) => &[],
        Node::Integer(n) => n.symbols(),
        Node::RealDecimal(n) => n.symbols(),
        Node::Rational(n) => n.symbols(),
        Node::IrrationalSymbol(n) => n.symbols(),
        Node::IrrationalRoot(n) => n.symbols(),
        Node::BooleanLiteral(_) | Node::Grouping(_) | Node::FunctionCall(_) => {
            unreachable!("only placeholder and literal buffer nodes convert")
        }
    }
}

/// Builds the requested literal variant, seeded by replaying `source`'s
/// symbols in order.
pub fn promote(source: &Node, target: ConvertTarget) -> Node {
    let mut node: Node = match target {
        ConvertTarget::Integer => Integer::new().into(),
        ConvertTarget::RealDecimal => RealDecimal::new().into(),
        ConvertTarget::Rational => Rational::new().into(),
    };
    for (position, symbol) in carried_symbols(source).iter().copied().enumerate() {
        let outcome = node.add_symbol(symbol, position);
        debug_assert!(
            outcome.is_accepted(),
            "conversion replay rejected {symbol:?} at {position}"
        );
        if !outcome.is_accepted() {
            tracing::error!(?symbol, position, ?target, "conversion replay rejected a carried symbol");
        }
    }
    node
}

/// Applies an outcome at the slot that owns the node which produced it.
///
/// `Accepted` and `Rejected` pass through untouched. A `ConvertTo*` outcome
/// replaces `slot` with the promoted node and re-delivers `symbol` at the
/// same position, returning the re-delivery's outcome.
pub fn deliver(
    slot: &mut Node,
    outcome: AddSymbolOutcome,
    symbol: Symbol,
    position: usize,
) -> AddSymbolOutcome {
    let Some(target) = outcome.convert_target() else {
        return outcome;
    };
    let mut promoted = promote(slot, target);
    let mut redelivered = promoted.add_symbol(symbol, position);
    debug_assert!(
        redelivered.convert_target().is_none(),
        "re-delivery of {symbol:?} requested a second conversion"
    );
    if redelivered.convert_target().is_some() {
        tracing::error!(?symbol, position, "conversion chained into a second conversion");
        redelivered = AddSymbolOutcome::Rejected;
    }
    *slot = promoted;
    redelivered
}
