//! Test fixtures and assertion helpers for Sliver development.
//!
//! Provides the standard letter sequence used across the view tests,
//! constructors that place a view at a known offset inside a larger
//! buffer, and [`assert_view_eq!`] for element-wise comparisons.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use sliver::{Buffer, View};

/// The five-letter sequence used by the end-to-end scenarios.
pub const LETTERS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// A fresh view over [`LETTERS`].
pub fn letters() -> View<&'static str> {
    View::from_slice(&LETTERS)
}

/// A view of `0..n` as `u32`, with no spare capacity.
pub fn counting(n: u32) -> View<u32> {
    View::from_vec((0..n).collect())
}

/// A view of `len` elements starting at `offset` inside a zeroed buffer of
/// `total` elements, together with the buffer handle for inspection.
///
/// # Panics
///
/// Panics if `offset + len > total`.
pub fn window(total: usize, offset: usize, len: usize) -> (Buffer<u32>, View<u32>) {
    let buffer = Buffer::zeroed(total);
    let view = View::from_buffer(buffer.clone()).subview(offset, offset + len);
    (buffer, view)
}

/// Whether writes through `a` are visible through `b`.
///
/// Probes by writing a sentinel through `a` at index 0 and reading `b` at
/// the same physical slot, then restores the original element. Both views
/// must be non-empty.
pub fn views_alias(a: &View<u32>, b: &View<u32>) -> bool {
    if a.is_empty() || b.is_empty() || !a.shares_storage(b) {
        return false;
    }
    let Some(slot) = a.offset().checked_sub(b.offset()) else {
        return false;
    };
    if slot >= b.len() {
        return false;
    }
    let original = a.at(0);
    a.set(0, original.wrapping_add(1));
    let seen = b.at(slot) != original;
    a.set(0, original);
    seen
}

/// Assert that a view's live elements equal the given sequence.
#[macro_export]
macro_rules! assert_view_eq {
    ($view:expr, [$($item:expr),* $(,)?]) => {{
        let expected: ::std::vec::Vec<_> = ::std::vec![$($item),*];
        let view = &$view;
        assert_eq!(view.len(), expected.len(), "length mismatch for {:?}", view);
        assert_eq!(view.to_vec(), expected, "element mismatch for {:?}", view);
    }};
}
