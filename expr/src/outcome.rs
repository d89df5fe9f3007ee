//! Outcomes of attempting to add a symbol to a node
//!
//! The mutation path never uses errors for control flow: every attempt to add
//! a symbol reports one of a small set of outcomes. A `ConvertTo*` outcome is
//! a request that the target node be replaced by a richer literal variant with
//! its symbol sequence carried forward; see [`crate::convert`].

/// Possible outcomes of an attempt to add a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddSymbolOutcome {
    /// The symbol was accepted and added to the node.
    Accepted,
    /// The symbol was rejected and the node is unchanged.
    Rejected,
    /// The symbol was rejected, but the node should be converted to an
    /// `Integer` node and the symbol re-delivered to it.
    ConvertToInteger,
    /// The symbol was rejected, but the node should be converted to a
    /// `RealDecimal` node and the symbol re-delivered to it.
    ConvertToRealDecimal,
    /// The symbol was rejected, but the node should be converted to a
    /// `Rational` node and the symbol re-delivered to it.
    ConvertToRational,
}

/// The literal variant a `ConvertTo*` outcome asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertTarget {
    Integer,
    RealDecimal,
    Rational,
}

impl AddSymbolOutcome {
    /// Whether the symbol was accepted.
    pub fn is_accepted(self) -> bool {
        self == AddSymbolOutcome::Accepted
    }

    /// The conversion target requested by this outcome, if any.
    pub fn convert_target(self) -> Option<ConvertTarget> {
        match self {
            AddSymbolOutcome::ConvertToInteger => Some(ConvertTarget::Integer),
            AddSymbolOutcome::ConvertToRealDecimal => Some(ConvertTarget::RealDecimal),
            AddSymbolOutcome::ConvertToRational => Some(ConvertTarget::Rational),
            AddSymbolOutcome::Accepted | AddSymbolOutcome::Rejected => None,
        }
    }
}
