//! Expression model for the mathfield structural editor
//!
//! This crate owns the mutable expression tree: a closed set of typed nodes,
//! each with a bounded symbol grammar, supporting incremental insertion and
//! deletion of symbols at arbitrary cursor positions. Position arithmetic is
//! expressed in "tokens" -- atomic units the cursor steps across -- so a single
//! integer addresses a gap anywhere in the flattened tree.
//!
//! The key components are:
//! - [`symbol::Symbol`] - The closed alphabet of lexical units in a literal
//! - [`node::Node`] - The expression tree node variants
//! - [`outcome::AddSymbolOutcome`] - Result of attempting to add a symbol
//! - [`convert`] - The forward-conversion protocol between literal variants
//! - [`resolve`] - The shared token-index walk used by composite nodes
//! - [`projection::Projection`] - Renderable surface handed to the (external)
//!   renderer collaborator
//!
//! The editor controller that owns a tree, the cursor state, and the key
//! routing lives in the `mathfield` crate.

pub mod buffer;
pub mod convert;
pub mod node;
pub mod outcome;
pub mod projection;
pub mod resolve;
pub mod symbol;

pub use node::{
    BooleanLiteral, Empty, ExprNode, FunctionCall, Grouping, Integer, IrrationalRoot,
    IrrationalSymbol, Node, Rational, RealDecimal,
};
pub use outcome::{AddSymbolOutcome, ConvertTarget};
pub use projection::Projection;
pub use symbol::Symbol;
