//! Fixed-size shared backing storage.
//!
//! A [`Buffer`] is one heap allocation of `T` behind a reference-counted,
//! interior-mutable handle. Cloning a buffer clones the handle, not the
//! elements, so every clone observes every write. Views are windows onto
//! a buffer; the buffer itself never grows or shrinks after creation.
//!
//! Buffers are deliberately `!Send` and `!Sync`. Shared mutation is
//! unsynchronized, so the compiler keeps each buffer on one thread.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::ViewError;

/// Elements staged on the stack when a copy overlaps itself.
type Staging<T> = SmallVec<[T; 16]>;

/// Shared, fixed-length element storage.
pub struct Buffer<T> {
    data: Rc<RefCell<Vec<T>>>,
}

impl<T> Buffer<T> {
    /// Wrap `items` as a buffer without copying them.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            data: Rc::new(RefCell::new(items)),
        }
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `self` and `other` are handles to the same allocation.
    pub fn ptr_eq(&self, other: &Buffer<T>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Number of live handles (buffers and views) to this allocation.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.data)
    }

    /// Run `f` over `len` elements starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the buffer.
    pub(crate) fn with_range<R>(&self, start: usize, len: usize, f: impl FnOnce(&[T]) -> R) -> R {
        let data = self.data.borrow();
        f(&data[start..start + len])
    }
}

impl<T: Default> Buffer<T> {
    /// A buffer of `len` default-valued elements.
    pub fn zeroed(len: usize) -> Self {
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, T::default);
        tracing::trace!(len, "allocated zeroed buffer");
        Self::new(items)
    }

    /// Reset `len` elements starting at `start` to `T::default()`.
    pub(crate) fn fill_default(&self, start: usize, len: usize) {
        let mut data = self.data.borrow_mut();
        data[start..start + len].fill_with(T::default);
    }
}

impl<T: Clone> Buffer<T> {
    /// The element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.borrow().get(index).cloned()
    }

    /// Overwrite the element at `index`.
    pub fn set(&self, index: usize, value: T) -> Result<(), ViewError> {
        let mut data = self.data.borrow_mut();
        let len = data.len();
        let slot = data
            .get_mut(index)
            .ok_or(ViewError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Snapshot of every element.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.borrow().clone()
    }

    /// Overwrite elements starting at `start` with `items`.
    ///
    /// # Panics
    ///
    /// Panics if `items` does not fit at `start`.
    pub(crate) fn write(&self, start: usize, items: &[T]) {
        let mut data = self.data.borrow_mut();
        data[start..start + items.len()].clone_from_slice(items);
    }

    /// Copy `len` elements from `src[src_start..]` to `dst[dst_start..]`.
    ///
    /// When both handles name the same allocation the source range is
    /// staged in full before any element is written, so overlapping
    /// shifts in either direction see the original values.
    pub(crate) fn copy_range(
        src: &Buffer<T>,
        src_start: usize,
        dst: &Buffer<T>,
        dst_start: usize,
        len: usize,
    ) {
        if len == 0 {
            return;
        }
        if src.ptr_eq(dst) {
            let staged: Staging<T> = src.with_range(src_start, len, |s| s.iter().cloned().collect());
            dst.write(dst_start, &staged);
            return;
        }
        let from = src.data.borrow();
        let mut to = dst.data.borrow_mut();
        to[dst_start..dst_start + len].clone_from_slice(&from[src_start..src_start + len]);
    }
}

impl<T> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
        }
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.borrow().iter()).finish()
    }
}
