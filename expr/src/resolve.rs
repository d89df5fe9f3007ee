//! Shared token-index resolution for composite nodes
//!
//! Composite nodes contribute fixed tokens of their own (a name/parenthesis
//! token at the front, a closing parenthesis at the back, a comma between
//! adjacent children) and otherwise delegate to children. Mapping a node-local
//! position to the right child requires the same walk in every composite:
//! start past the leading fixed token and accumulate each child's token count
//! plus one separator. This module is the single implementation of that walk
//! so the off-by-one bounds live in exactly one place.
//!
//! Positions on either fixed edge are the caller's responsibility to reject
//! before resolving.

/// Where a node-local position lands among a composite's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSlot {
    /// Inside (or at an editable boundary of) the child at `index`.
    Child { index: usize, local: usize },
    /// On the separator token that follows the child at `index`.
    Separator { index: usize },
}

/// Resolves an insertion position.
///
/// Boundary gaps between a child and the following separator resolve to the
/// end of that child, so an insertion at a comma gap appends to the preceding
/// argument. `position` must be at least 1 (past the leading fixed token).
pub fn resolve_insert(counts: &[usize], position: usize) -> Option<TokenSlot> {
    debug_assert!(position >= 1, "fixed leading token must be rejected first");
    let mut current = 1;
    for (index, len) in counts.iter().copied().enumerate() {
        if position <= current + len {
            return Some(TokenSlot::Child {
                index,
                local: position - current,
            });
        }
        current += len + 1;
    }
    None
}

/// Resolves a deletion (or cursor-token) position.
///
/// Unlike insertion, a position that lands exactly on a separator token is
/// reported as [`TokenSlot::Separator`] so the caller can decide whether the
/// separator may be removed.
pub fn resolve_delete(counts: &[usize], position: usize) -> Option<TokenSlot> {
    debug_assert!(position >= 1, "fixed leading token must be rejected first");
    let mut current = 1;
    let last = counts.len().saturating_sub(1);
    for (index, len) in counts.iter().copied().enumerate() {
        if position < current + len {
            return Some(TokenSlot::Child {
                index,
                local: position - current,
            });
        }
        if position == current + len && index < last {
            return Some(TokenSlot::Separator { index });
        }
        current += len + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // Token layout for counts [2, 3]: name 0, child a occupies 1..=2,
    // comma at 3, child b occupies 4..=6, closing paren at 7.

    #[test]
    fn insert_resolves_into_children() {
        let counts = [2, 3];
        assert_eq!(
            resolve_insert(&counts, 1),
            Some(TokenSlot::Child { index: 0, local: 0 })
        );
        assert_eq!(
            resolve_insert(&counts, 2),
            Some(TokenSlot::Child { index: 0, local: 1 })
        );
        // The comma gap appends to the preceding child.
        assert_eq!(
            resolve_insert(&counts, 3),
            Some(TokenSlot::Child { index: 0, local: 2 })
        );
        assert_eq!(
            resolve_insert(&counts, 4),
            Some(TokenSlot::Child { index: 1, local: 0 })
        );
        assert_eq!(
            resolve_insert(&counts, 7),
            Some(TokenSlot::Child { index: 1, local: 3 })
        );
        assert_eq!(resolve_insert(&counts, 8), None);
    }

    #[test]
    fn delete_reports_separators() {
        let counts = [2, 3];
        assert_eq!(
            resolve_delete(&counts, 1),
            Some(TokenSlot::Child { index: 0, local: 0 })
        );
        assert_eq!(
            resolve_delete(&counts, 3),
            Some(TokenSlot::Separator { index: 0 })
        );
        assert_eq!(
            resolve_delete(&counts, 4),
            Some(TokenSlot::Child { index: 1, local: 0 })
        );
        // Past the last child there is no separator, only the closing paren.
        assert_eq!(resolve_delete(&counts, 7), None);
    }

    #[test]
    fn single_child_never_yields_a_separator() {
        let counts = [4];
        for position in 1..=4 {
            assert_eq!(
                resolve_delete(&counts, position),
                Some(TokenSlot::Child {
                    index: 0,
                    local: position - 1
                })
            );
        }
        assert_eq!(resolve_delete(&counts, 5), None);
    }

    #[test]
    fn empty_child_spans_collapse_to_gaps() {
        // counts [0, 0]: name 0, comma at 1, closing paren at 2.
        let counts = [0, 0];
        assert_eq!(
            resolve_insert(&counts, 1),
            Some(TokenSlot::Child { index: 0, local: 0 })
        );
        assert_eq!(
            resolve_delete(&counts, 1),
            Some(TokenSlot::Separator { index: 0 })
        );
    }
}
