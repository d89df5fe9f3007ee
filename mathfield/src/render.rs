//! Renderer collaborator interface
//!
//! The editor never draws anything itself. After each committed mutation it
//! hands the renderer a [`mathfield_expr::Projection`] of the root node and
//! the new cursor position; font metrics, glyph layout, and the windowing
//! toolkit all live on the far side of this trait.

use mathfield_expr::Projection;

/// Receives change notifications from the [`crate::Editor`].
///
/// Both methods default to no-ops so a renderer may observe only what it
/// cares about.
pub trait Renderer {
    /// The tree changed; `projection` describes the new root content.
    fn node_edited(&mut self, projection: &Projection) {
        let _ = projection;
    }

    /// The cursor moved to global token gap `position`.
    fn cursor_moved(&mut self, position: usize) {
        let _ = position;
    }
}

/// A renderer that ignores every notification. Used headless and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}
