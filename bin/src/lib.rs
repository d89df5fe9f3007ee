//! Command-line front end for the mathfield editor.
//!
//! Runs the editor headless: keys given on the command line (or read from
//! stdin) are fed through the controller one at a time, and the resulting
//! expression state is printed after each batch.

pub mod cli;

use anyhow::{Context, Result};
use cli::Cli;
use mathfield::{Editor, Keymap};
use mathfield_expr::AddSymbolOutcome;
use std::io::BufRead;

pub fn run(cli: Cli) -> Result<()> {
    let mut editor = Editor::new();
    if let Some(path) = &cli.keymap {
        let keymap = Keymap::load(path)
            .with_context(|| format!("Failed to load keymap: {}", path.display()))?;
        editor.set_keymap(keymap);
    }

    match &cli.keys {
        Some(keys) => {
            type_keys(&mut editor, keys);
            report(&editor);
        }
        None => {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("Failed to read from stdin")?;
                type_keys(&mut editor, line.trim_end());
                report(&editor);
            }
        }
    }
    Ok(())
}

fn type_keys(editor: &mut Editor, keys: &str) {
    for key in keys.chars() {
        match key {
            '<' => {
                editor.move_left(false);
            }
            '>' => {
                editor.move_right(false);
            }
            '\u{8}' | '\u{7f}' => {
                editor.backspace();
            }
            _ => {
                if editor.handle_key(key) == AddSymbolOutcome::Rejected {
                    tracing::info!(?key, "keystroke had no effect");
                    eprintln!("rejected: {key}");
                }
            }
        }
    }
}

fn report(editor: &Editor) {
    println!("alt text:   {}", editor.alt_text());
    println!("valid:      {}", editor.is_valid());
    println!("cursor:     {}", editor.cursor());
    println!("projection: {:?}", editor.projection());
}
