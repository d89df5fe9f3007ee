//! Renderable projection of a node
//!
//! The core never draws anything. After each mutation the editor hands the
//! renderer collaborator a [`Projection`]: a plain-data description of how a
//! node reads, with no layout, geometry, or font knowledge. Empty content
//! renders as the placeholder "_".

use crate::symbol::Symbol;
use smol_str::SmolStr;

/// Placeholder shown for an empty slot.
pub const PLACEHOLDER: &str = "_";

/// A data-only description of a node's displayable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// An empty slot awaiting content.
    Empty,
    /// A single run of text (integers, decimals, boolean constants).
    Text(String),
    /// A vertical fraction with an optional leading negation.
    Fraction {
        negated: bool,
        numerator: String,
        denominator: String,
    },
    /// A parenthesized child.
    Group(Box<Projection>),
    /// A named function call over ordered arguments.
    Function {
        name: SmolStr,
        args: Vec<Projection>,
    },
}

/// Concatenates the display text of a symbol run.
pub(crate) fn text_of(symbols: &[Symbol]) -> String {
    let mut out = String::with_capacity(symbols.len());
    for sym in symbols {
        out.push_str(sym.display_text());
    }
    out
}

/// Splits a symbol sequence into fraction parts at the slash.
///
/// The leading negation is reported separately and excluded from the
/// numerator; either side falls back to the placeholder when empty.
pub(crate) fn fraction_of(symbols: &[Symbol]) -> Projection {
    let negated = symbols.first() == Some(&Symbol::UnaryNegation);
    let mut numerator = String::new();
    let mut denominator = String::new();
    let mut in_denominator = false;

    for sym in symbols {
        match sym {
            Symbol::UnaryNegation => {}
            Symbol::Slash => in_denominator = true,
            other => {
                let side = if in_denominator {
                    &mut denominator
                } else {
                    &mut numerator
                };
                side.push_str(other.display_text());
            }
        }
    }

    if numerator.is_empty() {
        numerator.push_str(PLACEHOLDER);
    }
    if denominator.is_empty() {
        denominator.push_str(PLACEHOLDER);
    }

    Projection::Fraction {
        negated,
        numerator,
        denominator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_concatenates_display_fragments() {
        let symbols = [
            Symbol::UnaryNegation,
            Symbol::Digit1,
            Symbol::Radix,
            Symbol::Digit5,
            Symbol::ExpPlus,
            Symbol::Digit9,
        ];
        assert_eq!(text_of(&symbols), "(-)1.5E+9");
    }

    #[test]
    fn fraction_splits_at_slash() {
        let symbols = [Symbol::Digit7, Symbol::Slash, Symbol::Digit4];
        assert_eq!(
            fraction_of(&symbols),
            Projection::Fraction {
                negated: false,
                numerator: "7".to_string(),
                denominator: "4".to_string(),
            }
        );
    }

    #[test]
    fn fraction_placeholders_and_negation() {
        let symbols = [Symbol::UnaryNegation, Symbol::Digit7, Symbol::Slash];
        assert_eq!(
            fraction_of(&symbols),
            Projection::Fraction {
                negated: true,
                numerator: "7".to_string(),
                denominator: PLACEHOLDER.to_string(),
            }
        );
    }

    #[test]
    fn fraction_keeps_well_known_symbols_in_numerator() {
        let symbols = [
            Symbol::Digit3,
            Symbol::Pi,
            Symbol::Slash,
            Symbol::Digit2,
        ];
        assert_eq!(
            fraction_of(&symbols),
            Projection::Fraction {
                negated: false,
                numerator: "3\u{03c0}".to_string(),
                denominator: "2".to_string(),
            }
        );
    }
}
