//! Editor controller for the mathfield structural editor
//!
//! Owns an expression tree from `mathfield_expr` together with the global
//! cursor and selection state, routes raw key input into the tree, applies
//! conversion outcomes at the root, and notifies a renderer collaborator
//! after each committed mutation.
//!
//! Input handling is single-threaded and synchronous: each key event is fully
//! processed (symbol lookup, tree mutation, possible node replacement, cursor
//! update, renderer notification) before the next one is accepted.

pub mod editor;
pub mod keymap;
pub mod render;

pub use editor::Editor;
pub use keymap::{Keymap, KeymapError};
pub use render::{NullRenderer, Renderer};
