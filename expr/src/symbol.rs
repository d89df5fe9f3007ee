//! The closed symbol alphabet for expression literals
//!
//! Every literal buffer node owns an ordered sequence of [`Symbol`]s. The
//! alphabet is fixed: decimal digits, the unary negation sign, the radix
//! point, the fraction slash, the two exponent markers, the well-known
//! irrational constants, and the radical marker. Symbols are plain values and
//! are never mutated once created.

/// An atomic lexical unit that can appear inside a literal buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    /// Leading unary negation sign, displayed as "(-)".
    UnaryNegation,
    /// The well-known constant pi.
    Pi,
    /// The well-known constant e.
    Euler,
    /// Decimal radix point.
    Radix,
    /// Fraction slash separating numerator from denominator.
    Slash,
    /// Scientific-notation exponent marker with a positive exponent ("E+").
    ExpPlus,
    /// Scientific-notation exponent marker with a negative exponent ("E-").
    ExpMinus,
    /// Square-root radical marker.
    Radical,
}

impl Symbol {
    /// The ten decimal digit symbols, in value order.
    pub const DIGITS: [Symbol; 10] = [
        Symbol::Digit0,
        Symbol::Digit1,
        Symbol::Digit2,
        Symbol::Digit3,
        Symbol::Digit4,
        Symbol::Digit5,
        Symbol::Digit6,
        Symbol::Digit7,
        Symbol::Digit8,
        Symbol::Digit9,
    ];

    /// The digit symbol for a value in `0..=9`.
    pub fn digit(value: u8) -> Option<Symbol> {
        Self::DIGITS.get(usize::from(value)).copied()
    }

    /// Whether this symbol is a decimal digit.
    pub fn is_digit(self) -> bool {
        matches!(
            self,
            Symbol::Digit0
                | Symbol::Digit1
                | Symbol::Digit2
                | Symbol::Digit3
                | Symbol::Digit4
                | Symbol::Digit5
                | Symbol::Digit6
                | Symbol::Digit7
                | Symbol::Digit8
                | Symbol::Digit9
        )
    }

    /// Whether this symbol is one of the exponent markers.
    pub fn is_exp_marker(self) -> bool {
        matches!(self, Symbol::ExpPlus | Symbol::ExpMinus)
    }

    /// Whether this symbol is a well-known irrational constant.
    pub fn is_well_known(self) -> bool {
        matches!(self, Symbol::Pi | Symbol::Euler)
    }

    /// The string that represents this symbol in alt-text.
    pub fn alt_text(self) -> &'static str {
        match self {
            Symbol::Digit0 => "0",
            Symbol::Digit1 => "1",
            Symbol::Digit2 => "2",
            Symbol::Digit3 => "3",
            Symbol::Digit4 => "4",
            Symbol::Digit5 => "5",
            Symbol::Digit6 => "6",
            Symbol::Digit7 => "7",
            Symbol::Digit8 => "8",
            Symbol::Digit9 => "9",
            Symbol::UnaryNegation => "negative",
            Symbol::Pi => "Pi",
            Symbol::Euler => "e",
            Symbol::Radix => ".",
            Symbol::Slash => "over",
            Symbol::ExpPlus => "times ten to power",
            Symbol::ExpMinus => "times ten to power negative",
            Symbol::Radical => "root",
        }
    }

    /// Whether the alt-text fragment needs surrounding whitespace when
    /// concatenated with adjacent fragments.
    pub fn spaced_in_text(self) -> bool {
        matches!(
            self,
            Symbol::UnaryNegation
                | Symbol::Pi
                | Symbol::Euler
                | Symbol::Slash
                | Symbol::ExpPlus
                | Symbol::ExpMinus
                | Symbol::Radical
        )
    }

    /// Canonical display text used when projecting a literal for rendering.
    ///
    /// The slash has no display text of its own: in a fraction projection it
    /// splits the numerator from the denominator instead of being drawn.
    pub fn display_text(self) -> &'static str {
        match self {
            Symbol::Digit0 => "0",
            Symbol::Digit1 => "1",
            Symbol::Digit2 => "2",
            Symbol::Digit3 => "3",
            Symbol::Digit4 => "4",
            Symbol::Digit5 => "5",
            Symbol::Digit6 => "6",
            Symbol::Digit7 => "7",
            Symbol::Digit8 => "8",
            Symbol::Digit9 => "9",
            Symbol::UnaryNegation => "(-)",
            Symbol::Pi => "\u{03c0}",
            Symbol::Euler => "e",
            Symbol::Radix => ".",
            Symbol::Slash => "/",
            Symbol::ExpPlus => "E+",
            Symbol::ExpMinus => "E-",
            Symbol::Radical => "\u{221a}",
        }
    }

    /// Maps a raw input character to a symbol.
    ///
    /// This is the shared keyboard mapping used by every node's `handle_key`.
    /// `E` produces [`Symbol::ExpPlus`] (the calculator EE-key convention);
    /// [`Symbol::ExpMinus`] has no single keystroke and is only reachable by
    /// direct symbol insertion, e.g. from a palette button.
    pub fn from_key(key: char) -> Option<Symbol> {
        match key {
            '0'..='9' => {
                let value = key as u8 - b'0';
                Symbol::digit(value)
            }
            '-' => Some(Symbol::UnaryNegation),
            '.' => Some(Symbol::Radix),
            '/' => Some(Symbol::Slash),
            'E' => Some(Symbol::ExpPlus),
            'e' => Some(Symbol::Euler),
            'p' | '\u{03c0}' => Some(Symbol::Pi),
            'r' | '\u{221a}' => Some(Symbol::Radical),
            _ => None,
        }
    }

    /// Looks up a symbol by its configuration name (case-insensitive).
    ///
    /// Used by the keymap configuration layer to bind alternate keys.
    pub fn from_name(name: &str) -> Option<Symbol> {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "negative" | "minus" => Some(Symbol::UnaryNegation),
            "pi" => Some(Symbol::Pi),
            "e" | "euler" => Some(Symbol::Euler),
            "radix" | "decimal" => Some(Symbol::Radix),
            "slash" | "over" => Some(Symbol::Slash),
            "exp" | "exp_plus" => Some(Symbol::ExpPlus),
            "exp_minus" => Some(Symbol::ExpMinus),
            "radical" | "root" => Some(Symbol::Radical),
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(d @ '0'..='9'), None) => Symbol::digit(d as u8 - b'0'),
                    _ => None,
                }
            }
        }
    }
}
