use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;
use std::ptr;
use std::ptr::NonNull;

use crate::alloc::{FailureHooks, RawAllocator};

/// Lifecycle state of a buffer, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufState {
    /// No region is owned.
    Null,
    /// A region is owned but holds no live elements.
    Empty,
    /// Some slots are live, some are spare.
    Partial,
    /// Every slot is live.
    Full,
}

/// A growable buffer of `T` with explicit create/destroy lifetime.
///
/// The record never allocates or frees on its own: every operation that can
/// touch memory takes a [`RawAllocator`], and the region is released only by
/// an explicit [`destroy`](GrowBuf::destroy). There is no `Drop` impl.
/// Dropping a non-Null `GrowBuf` without destroying it leaks the region.
pub struct GrowBuf<T> {
    pub(crate) data: Option<NonNull<T>>,
    pub(crate) length: usize,
    pub(crate) capacity: usize,
    pub(crate) _marker: PhantomData<T>,
}

// The buffer owns its region exclusively; the raw pointer is not shared.
unsafe impl<T: Send> Send for GrowBuf<T> {}
unsafe impl<T: Sync> Sync for GrowBuf<T> {}

impl<T> GrowBuf<T> {
    /// A buffer in the Null state: no region, zero length and capacity.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            data: None,
            length: 0,
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a buffer with room for `capacity` elements.
    ///
    /// Returns a Null buffer without calling the allocator when `capacity`
    /// is zero, when `T` is zero-sized, or when the byte size would overflow
    /// (the overflow case is deliberately silent: no hook fires). When the
    /// allocator refuses, `on_alloc_error` fires exactly once and the result
    /// is Null; the allocation is never retried.
    pub fn with_capacity<A: RawAllocator, H: FailureHooks>(
        capacity: usize,
        alloc: &mut A,
        hooks: &mut H,
    ) -> Self {
        if capacity == 0 || size_of::<T>() == 0 {
            return Self::null();
        }
        let Ok(layout) = Layout::array::<T>(capacity) else {
            return Self::null();
        };
        match alloc.allocate(layout) {
            Some(raw) => Self {
                data: Some(raw.cast()),
                length: 0,
                capacity,
                _marker: PhantomData,
            },
            None => {
                hooks.on_alloc_error();
                Self::null()
            }
        }
    }

    /// Deep-copies the live elements into a freshly allocated buffer.
    ///
    /// The copy is sized to exactly `len()` slots. A Null or Empty source
    /// yields a Null buffer without calling the allocator. Allocation
    /// failure behaves as in [`with_capacity`](GrowBuf::with_capacity).
    pub fn duplicate<A: RawAllocator, H: FailureHooks>(
        &self,
        alloc: &mut A,
        hooks: &mut H,
    ) -> Self
    where
        T: Clone,
    {
        if self.is_empty() {
            return Self::null();
        }
        let Ok(layout) = Layout::array::<T>(self.length) else {
            return Self::null();
        };
        let Some(raw) = alloc.allocate(layout) else {
            hooks.on_alloc_error();
            return Self::null();
        };
        let dst = raw.cast::<T>().as_ptr();
        for (i, item) in self.as_slice().iter().enumerate() {
            // Safe: dst has room for length elements, checked via the layout
            unsafe {
                ptr::write(dst.add(i), item.clone());
            }
        }
        Self {
            data: Some(raw.cast()),
            length: self.length,
            capacity: self.length,
            _marker: PhantomData,
        }
    }

    /// Drops the live elements, releases the region, and resets the record
    /// to Null. Does nothing on a Null buffer.
    ///
    /// `alloc` must belong to the same allocator family that produced the
    /// region (caller contract).
    pub fn destroy<A: RawAllocator>(&mut self, alloc: &mut A) {
        if let Some(raw) = self.data {
            let layout = self.current_layout();
            // Safe: the region is live with `length` initialized elements
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(raw.as_ptr(), self.length));
                alloc.deallocate(raw.cast(), layout);
            }
        }
        *self = Self::null();
    }

    /// Moves the region out, leaving this record Null. The returned buffer
    /// is the sole owner; no double-free can arise.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::null())
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Number of reserved slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True iff no region is owned or no element is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_none() || self.length == 0
    }

    /// The lifecycle state the record is currently in.
    #[must_use]
    pub fn state(&self) -> BufState {
        match self.data {
            None => BufState::Null,
            Some(_) if self.length == 0 => BufState::Empty,
            Some(_) if self.length == self.capacity => BufState::Full,
            Some(_) => BufState::Partial,
        }
    }

    /// Borrowed view of the live elements.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self.data {
            // Safe: `length` elements starting at the region base are live
            Some(raw) => unsafe { std::slice::from_raw_parts(raw.as_ptr(), self.length) },
            None => &[],
        }
    }

    /// Mutable view of the live elements.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.data {
            // Safe: `length` elements starting at the region base are live
            Some(raw) => unsafe { std::slice::from_raw_parts_mut(raw.as_ptr(), self.length) },
            None => &mut [],
        }
    }

    /// Gets an element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Base pointer of the region. Must only be called on non-Null buffers.
    #[allow(clippy::expect_used)]
    pub(crate) fn base_ptr(&self) -> *mut T {
        self.data
            .expect("caller established that a region is present")
            .as_ptr()
    }

    /// Layout of the currently owned region.
    #[allow(clippy::expect_used)]
    pub(crate) fn current_layout(&self) -> Layout {
        Layout::array::<T>(self.capacity).expect("capacity was layout-checked at allocation time")
    }

    /// Drops the elements at `new_len..length` and clamps `length`.
    pub(crate) fn truncate_live(&mut self, new_len: usize) {
        if new_len >= self.length {
            return;
        }
        if let Some(raw) = self.data {
            let doomed = self.length - new_len;
            // Safe: the dropped range lies inside the live range
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    raw.as_ptr().add(new_len),
                    doomed,
                ));
            }
        }
        self.length = new_len;
    }
}

impl<T> Default for GrowBuf<T> {
    fn default() -> Self {
        Self::null()
    }
}

/// Two buffers compare equal when their live elements compare equal;
/// capacity and state are not part of the comparison.
impl<T: PartialEq> PartialEq for GrowBuf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowBuf<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GrowBuf {{ state: {:?}, length: {}, capacity: {}, items: {:?} }}",
            self.state(),
            self.length,
            self.capacity,
            self.as_slice()
        )
    }
}

impl<'a, T> IntoIterator for &'a GrowBuf<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
