//! Aliasable, growable views over a shared [`Buffer`].
//!
//! A [`View`] is a header of three quantities: the backing buffer, the
//! offset where the view begins, and the number of live elements. Its
//! capacity is derived: `buffer.len() - offset`. Headers are immutable;
//! every re-slice or append returns a new header. What changes through a
//! shared handle is the *content* of the buffer.
//!
//! ```text
//! buffer:  [ a | b | c | d | e | _ | _ | _ ]
//!                ^offset=1
//!                |<-len=2->|
//!                |<-------- cap=7 -------->|
//! ```
//!
//! Two views share storage exactly when one was derived from the other by
//! sub-viewing or by an append that fit in capacity. An append that does
//! not fit moves the result onto a fresh buffer and the alias is broken.
//!
//! # Threading
//!
//! Views are `!Send` and `!Sync`. Mutation through aliased views is
//! unsynchronized, as it is for the native slice this type models.

use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::buffer::Buffer;
use crate::config::GrowthPolicy;
use crate::error::ViewError;

/// Location of a present view inside its buffer.
struct Header<T> {
    storage: Buffer<T>,
    offset: usize,
    len: usize,
}

impl<T> Header<T> {
    fn cap(&self) -> usize {
        self.storage.len() - self.offset
    }
}

impl<T> Clone for Header<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            offset: self.offset,
            len: self.len,
        }
    }
}

/// A window of `len` live elements into shared storage.
///
/// The absent view ([`View::absent`], also the `Default`) has no buffer,
/// length 0 and capacity 0. Every read behaves on it as on an allocated
/// empty view.
///
/// Cloning a view copies the header only; the clone aliases the same
/// buffer.
#[must_use]
pub struct View<T> {
    header: Option<Header<T>>,
}

impl<T> View<T> {
    /// The absent view.
    pub const fn absent() -> Self {
        Self { header: None }
    }

    /// Whether this is the absent view.
    pub fn is_absent(&self) -> bool {
        self.header.is_none()
    }

    /// View all of `buffer`, aliasing it.
    ///
    /// Writes through the returned view are visible through `buffer` and
    /// every other handle to it, and vice versa.
    pub fn from_buffer(buffer: Buffer<T>) -> Self {
        let len = buffer.len();
        Self {
            header: Some(Header {
                storage: buffer,
                offset: 0,
                len,
            }),
        }
    }

    /// View `items`, taking ownership of the vector without copying.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_buffer(Buffer::new(items))
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.header.as_ref().map_or(0, |h| h.len)
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements available before an append must reallocate.
    pub fn cap(&self) -> usize {
        self.header.as_ref().map_or(0, Header::cap)
    }

    /// Where this view begins within its buffer. Zero for the absent view.
    pub fn offset(&self) -> usize {
        self.header.as_ref().map_or(0, |h| h.offset)
    }

    /// Handle to the backing buffer, if any.
    pub fn buffer(&self) -> Option<Buffer<T>> {
        self.header.as_ref().map(|h| h.storage.clone())
    }

    /// Whether both views are present and backed by the same buffer.
    pub fn shares_storage(&self, other: &View<T>) -> bool {
        match (&self.header, &other.header) {
            (Some(a), Some(b)) => a.storage.ptr_eq(&b.storage),
            _ => false,
        }
    }

    /// Re-slice to `[start, end)`, sharing storage.
    ///
    /// `end` may reach past [`len`](Self::len) up to [`cap`](Self::cap):
    /// the result can expose elements beyond the parent's length. The
    /// result's capacity is `self.cap() - start`.
    pub fn try_subview(&self, start: usize, end: usize) -> Result<View<T>, ViewError> {
        let Some(h) = &self.header else {
            if start != 0 || end != 0 {
                return Err(ViewError::AbsentBounds { start, end });
            }
            return Ok(View::absent());
        };
        if start > end {
            return Err(ViewError::InvertedRange { start, end });
        }
        if start > h.len {
            return Err(ViewError::StartOutOfRange { start, len: h.len });
        }
        let cap = h.cap();
        if end > cap {
            return Err(ViewError::EndOutOfRange { end, cap });
        }
        Ok(View {
            header: Some(Header {
                storage: h.storage.clone(),
                offset: h.offset + start,
                len: end - start,
            }),
        })
    }

    /// Panicking form of [`try_subview`](Self::try_subview).
    ///
    /// # Panics
    ///
    /// Panics if the bounds are inverted or out of range.
    #[track_caller]
    pub fn subview(&self, start: usize, end: usize) -> View<T> {
        match self.try_subview(start, end) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    /// Re-slice with range syntax: `v.subview_range(1..)`, `v.subview_range(..3)`.
    ///
    /// An open start is 0 and an open end is [`len`](Self::len).
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`subview`](Self::subview).
    #[track_caller]
    pub fn subview_range(&self, range: impl RangeBounds<usize>) -> View<T> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len(),
        };
        self.subview(start, end)
    }

    fn check_index(&self, index: usize) -> Result<&Header<T>, ViewError> {
        let len = self.len();
        match &self.header {
            Some(h) if index < h.len => Ok(h),
            _ => Err(ViewError::IndexOutOfRange { index, len }),
        }
    }
}

impl<T: Default> View<T> {
    /// A view of `len` default elements over a fresh buffer of `cap`.
    pub fn try_make(len: usize, cap: usize) -> Result<View<T>, ViewError> {
        if len > cap {
            return Err(ViewError::LengthExceedsCapacity { len, cap });
        }
        Ok(View {
            header: Some(Header {
                storage: Buffer::zeroed(cap),
                offset: 0,
                len,
            }),
        })
    }

    /// Panicking form of [`try_make`](Self::try_make).
    ///
    /// # Panics
    ///
    /// Panics if `len > cap`.
    #[track_caller]
    pub fn make(len: usize, cap: usize) -> View<T> {
        match Self::try_make(len, cap) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    /// Reset every live element to `T::default()`.
    ///
    /// Length and capacity are unchanged. Every view sharing the region
    /// observes the reset.
    pub fn clear(&self) {
        if let Some(h) = &self.header {
            h.storage.fill_default(h.offset, h.len);
        }
    }
}

impl<T: Clone> View<T> {
    /// View a copy of `items` in a fresh buffer.
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }

    /// The element at logical index `index`.
    pub fn try_at(&self, index: usize) -> Result<T, ViewError> {
        let h = self.check_index(index)?;
        Ok(h.storage.with_range(h.offset + index, 1, |s| s[0].clone()))
    }

    /// Panicking form of [`try_at`](Self::try_at).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn at(&self, index: usize) -> T {
        match self.try_at(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// The element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<T> {
        self.try_at(index).ok()
    }

    /// Overwrite the element at logical index `index` in shared storage.
    pub fn try_set(&self, index: usize, value: T) -> Result<(), ViewError> {
        let h = self.check_index(index)?;
        h.storage.write(h.offset + index, std::slice::from_ref(&value));
        Ok(())
    }

    /// Panicking form of [`try_set`](Self::try_set).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn set(&self, index: usize, value: T) {
        if let Err(err) = self.try_set(index, value) {
            panic!("{err}");
        }
    }

    /// Snapshot of the live elements.
    pub fn to_vec(&self) -> Vec<T> {
        match &self.header {
            Some(h) => h.storage.with_range(h.offset, h.len, <[T]>::to_vec),
            None => Vec::new(),
        }
    }

    /// Copy `min(self.len(), dest.len())` elements into `dest` in place.
    ///
    /// Never reallocates `dest` or changes its length. Overlapping views
    /// of one buffer copy as if the source were read in full first.
    /// Returns the number of elements copied.
    pub fn copy_into(&self, dest: &View<T>) -> usize {
        let (Some(src), Some(dst)) = (&self.header, &dest.header) else {
            return 0;
        };
        let n = src.len.min(dst.len);
        Buffer::copy_range(&src.storage, src.offset, &dst.storage, dst.offset, n);
        n
    }
}

impl<T: Clone + Default> View<T> {
    /// Append `items`, growing with the default doubling policy.
    ///
    /// See [`try_append_with`](Self::try_append_with).
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows `usize`.
    #[track_caller]
    pub fn append(&self, items: &[T]) -> View<T> {
        self.append_with(&GrowthPolicy::default(), items)
    }

    /// Panicking form of [`try_append_with`](Self::try_append_with).
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows `usize`.
    #[track_caller]
    pub fn append_with(&self, policy: &GrowthPolicy, items: &[T]) -> View<T> {
        match self.try_append_with(policy, items) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    /// Append `items`, returning the grown view.
    ///
    /// - Absent view: a fresh view of `items`.
    /// - `offset + len + items.len() <= cap`: `items` are written in place
    ///   after the live region and the result shares this view's buffer.
    ///   Other views whose capacity reaches those slots see the write.
    /// - Otherwise: the live prefix and `items` move to a fresh buffer of
    ///   `policy.new_capacity(len + items.len())` elements at offset 0.
    ///   The old buffer is untouched and no longer aliased by the result.
    pub fn try_append_with(&self, policy: &GrowthPolicy, items: &[T]) -> Result<View<T>, ViewError> {
        let Some(h) = &self.header else {
            return Ok(View::from_slice(items));
        };
        let fits = h
            .offset
            .checked_add(h.len)
            .and_then(|end| end.checked_add(items.len()))
            .is_some_and(|end| end <= h.cap());
        if fits {
            h.storage.write(h.offset + h.len, items);
            return Ok(View {
                header: Some(Header {
                    storage: h.storage.clone(),
                    offset: h.offset,
                    len: h.len + items.len(),
                }),
            });
        }
        Self::realloc_append(h, policy, items)
    }

    fn realloc_append(
        h: &Header<T>,
        policy: &GrowthPolicy,
        items: &[T],
    ) -> Result<View<T>, ViewError> {
        let new_len = h
            .len
            .checked_add(items.len())
            .ok_or(ViewError::CapacityOverflow { len: h.len })?;
        let new_cap = policy.new_capacity(new_len)?;
        let mut grown = Vec::with_capacity(new_cap);
        h.storage
            .with_range(h.offset, h.len, |live| grown.extend_from_slice(live));
        grown.extend_from_slice(items);
        grown.resize_with(new_cap, T::default);
        tracing::trace!(
            old_cap = h.cap(),
            new_cap,
            new_len,
            "append exceeded capacity, reallocated"
        );
        Ok(View {
            header: Some(Header {
                storage: Buffer::new(grown),
                offset: 0,
                len: new_len,
            }),
        })
    }
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
        }
    }
}

impl<T> Default for View<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Vec<T>> for View<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> From<Buffer<T>> for View<T> {
    fn from(buffer: Buffer<T>) -> Self {
        Self::from_buffer(buffer)
    }
}

/// Element-wise equality of the live regions. The absent view equals
/// every empty view.
impl<T: PartialEq> PartialEq for View<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.header, &other.header) {
            (Some(a), Some(b)) => a
                .storage
                .with_range(a.offset, a.len, |x| b.storage.with_range(b.offset, b.len, |y| x == y)),
            (Some(h), None) | (None, Some(h)) => h.len == 0,
            (None, None) => true,
        }
    }
}

impl<T: Eq> Eq for View<T> {}

impl<T: fmt::Debug> fmt::Debug for View<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(h) = &self.header else {
            return f.write_str("View(absent)");
        };
        h.storage.with_range(h.offset, h.len, |live| {
            f.debug_struct("View")
                .field("elements", &live)
                .field("offset", &h.offset)
                .field("len", &h.len)
                .field("cap", &h.cap())
                .finish()
        })
    }
}

/// Build a [`View`] over a fresh buffer holding the given elements.
///
/// ```
/// let v = sliver::view!["a", "b", "c"];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.cap(), 3);
/// ```
#[macro_export]
macro_rules! view {
    () => {
        $crate::View::from_vec(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::View::from_vec(::std::vec![$($item),+])
    };
}
