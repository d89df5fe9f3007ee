use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the mathfield editor.
#[derive(Debug, Parser)]
#[command(name = "mathfield", version, about = "Structural editor for mathematical expressions")]
pub struct Cli {
    /// Keys to type into the editor, in order. `<` and `>` move the cursor.
    ///
    /// When omitted, lines are read from stdin and typed one line at a time.
    pub keys: Option<String>,

    /// Keymap TOML file layered over the default key bindings.
    #[arg(long, value_name = "PATH")]
    pub keymap: Option<PathBuf>,

    /// Write logs to this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
