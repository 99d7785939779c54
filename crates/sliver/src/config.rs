//! Growth configuration for reallocating appends.

use crate::error::ViewError;

/// How much room a reallocating append reserves.
///
/// When an append no longer fits, the new buffer holds
/// `factor * new_len` elements, where `new_len` is the length the append
/// produces. [`View::append`](crate::View::append) always uses
/// [`GrowthPolicy::default`], i.e. `2 * (len + added)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied to the post-append length. Never zero.
    factor: usize,
}

impl GrowthPolicy {
    /// Default growth factor: capacity becomes twice the new length.
    pub const DEFAULT_FACTOR: usize = 2;

    /// The default doubling policy.
    pub const fn new() -> Self {
        Self {
            factor: Self::DEFAULT_FACTOR,
        }
    }

    /// A policy with a custom factor.
    ///
    /// Returns `None` for a factor of zero, which could never fit the
    /// appended elements. A factor of one gives exact-fit growth.
    pub const fn with_factor(factor: usize) -> Option<Self> {
        if factor == 0 {
            return None;
        }
        Some(Self { factor })
    }

    /// The configured multiplier.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Capacity of the buffer allocated for a view growing to `new_len`.
    pub fn new_capacity(&self, new_len: usize) -> Result<usize, ViewError> {
        new_len
            .checked_mul(self.factor)
            .ok_or(ViewError::CapacityOverflow { len: new_len })
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}
