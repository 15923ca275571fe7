//! Selection contexts.
//!
//! A selection borrows its parent (a shape or a shape store) mutably and
//! holds an ordered subset of indices into it. Narrowing a selection with
//! [`every`](VertexSelection::every) or [`at`](VertexSelection::at) never
//! touches the parent; only the editing operations do, and each of them
//! leaves the parent's loop invariants intact.

mod edge_selection;
mod shape_selection;
mod vertex_selection;

pub use edge_selection::EdgeSelection;
pub use shape_selection::ShapeSelection;
pub use vertex_selection::VertexSelection;

/// Keeps every `n`-th entry of `items`, starting at position `offset`.
///
/// `n == 0` selects nothing.
pub(crate) fn stride<T: Copy>(items: &[T], n: usize, offset: usize) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    items.iter().skip(offset).step_by(n).copied().collect()
}

/// Picks entries of `items` at the given positions, dropping positions that
/// are out of range and repeats.
pub(crate) fn pick<T: Copy + PartialEq>(items: &[T], positions: &[usize]) -> Vec<T> {
    let mut picked: Vec<T> = Vec::with_capacity(positions.len());
    for item in positions.iter().filter_map(|&p| items.get(p).copied()) {
        if !picked.contains(&item) {
            picked.push(item);
        }
    }
    picked
}
