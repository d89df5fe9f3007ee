//! Key-to-symbol binding table, optionally loaded from a TOML file
//!
//! The default table is the canonical mapping from
//! [`mathfield_expr::Symbol::from_key`]. A keymap file adds or overrides
//! bindings on top of it, keyed by symbol name:
//!
//! ```toml
//! [keys]
//! pi = "P"
//! radical = "v"
//! exp_minus = "W"
//! ```

use mathfield_expr::Symbol;
use serde::Deserialize;
use snafu::{ResultExt, Snafu};
use std::{collections::HashMap, path::Path};

/// Errors that can occur while loading a keymap file.
#[derive(Debug, Snafu)]
pub enum KeymapError {
    #[snafu(display("Failed to read keymap file {path}"))]
    Read {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Failed to parse keymap file {path}"))]
    Parse {
        source: toml::de::Error,
        path: String,
    },

    #[snafu(display("Keymap binds unknown symbol name {name:?}"))]
    UnknownSymbol { name: String },

    #[snafu(display("Keymap binding for {name:?} must be a single character, got {value:?}"))]
    NotASingleKey { name: String, value: String },
}

/// On-disk shape of a keymap file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct KeymapConfig {
    /// Symbol name to key character.
    keys: HashMap<String, String>,
}

/// Maps raw input characters to symbols.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<char, Symbol>,
}

impl Default for Keymap {
    fn default() -> Self {
        let canonical = [
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '-', '.', '/', 'E', 'e', 'p',
            '\u{03c0}', 'r', '\u{221a}',
        ];
        let bindings = canonical
            .into_iter()
            .filter_map(|key| Symbol::from_key(key).map(|symbol| (key, symbol)))
            .collect();
        Self { bindings }
    }
}

impl Keymap {
    /// Loads a keymap file and layers its bindings over the defaults.
    pub fn load(path: &Path) -> Result<Self, KeymapError> {
        let contents = std::fs::read_to_string(path).context(ReadSnafu {
            path: path.display().to_string(),
        })?;
        let config: KeymapConfig = toml::from_str(&contents).context(ParseSnafu {
            path: path.display().to_string(),
        })?;

        let mut keymap = Self::default();
        for (name, value) in &config.keys {
            let symbol = Symbol::from_name(name).ok_or_else(|| KeymapError::UnknownSymbol {
                name: name.clone(),
            })?;
            let mut chars = value.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(key), None) => key,
                _ => {
                    return Err(KeymapError::NotASingleKey {
                        name: name.clone(),
                        value: value.clone(),
                    });
                }
            };
            keymap.bindings.insert(key, symbol);
        }
        tracing::debug!(bindings = keymap.bindings.len(), "loaded keymap");
        Ok(keymap)
    }

    /// The symbol bound to `key`, if any.
    pub fn resolve(&self, key: char) -> Option<Symbol> {
        self.bindings.get(&key).copied()
    }
}
