use std::alloc::Layout;
use std::mem::size_of;

use crate::alloc::{FailureHooks, RawAllocator};
use crate::core::GrowBuf;
use crate::error::GrowBufError;

/// Outcome of a hook-free resize attempt. `Overflow` is the silent-no-op
/// case; callers decide whether `Refused` fires a hook immediately or after
/// a fallback attempt.
pub(crate) enum RawResize {
    Done,
    Overflow,
    Refused { requested_bytes: usize },
}

impl<T> GrowBuf<T> {
    /// Resizes the region to `new_capacity` slots.
    ///
    /// A no-op when the capacity already matches. `new_capacity == 0`
    /// releases the region: live elements are dropped, the record becomes
    /// Null, and the call never fails. A byte-size overflow is a silent
    /// no-op. The record is untouched, the allocator is not called, and no
    /// hook fires. When the reallocation is refused, the record is
    /// unchanged, `on_realloc_error` fires once, and `ReallocationFailed`
    /// is returned.
    ///
    /// A successful shrink clamps `length` down to `new_capacity`. Element
    /// types with destructors are the one exception to the unchanged-on-
    /// refusal rule: their clamped elements must be dropped before the
    /// reallocation, so a refused shrink of such a buffer keeps its
    /// capacity but has already truncated the tail. Plain data survives a
    /// refused shrink untouched.
    pub fn resize<A: RawAllocator, H: FailureHooks>(
        &mut self,
        new_capacity: usize,
        alloc: &mut A,
        hooks: &mut H,
    ) -> Result<(), GrowBufError> {
        match self.resize_raw(new_capacity, alloc) {
            RawResize::Done | RawResize::Overflow => Ok(()),
            RawResize::Refused { requested_bytes } => {
                hooks.on_realloc_error();
                Err(GrowBufError::ReallocationFailed { requested_bytes })
            }
        }
    }

    /// Grows the capacity by `amount` slots. Wraparound of the addition is
    /// a silent no-op, before any overflow checks inside the resize itself.
    pub fn grow_by<A: RawAllocator, H: FailureHooks>(
        &mut self,
        amount: usize,
        alloc: &mut A,
        hooks: &mut H,
    ) -> Result<(), GrowBufError> {
        let Some(target) = self.capacity.checked_add(amount) else {
            return Ok(());
        };
        self.resize(target, alloc, hooks)
    }

    /// Shrinks the capacity by `amount` slots. Wraparound of the
    /// subtraction is a silent no-op. Shrinking to zero releases the region.
    pub fn shrink_by<A: RawAllocator, H: FailureHooks>(
        &mut self,
        amount: usize,
        alloc: &mut A,
        hooks: &mut H,
    ) -> Result<(), GrowBufError> {
        let Some(target) = self.capacity.checked_sub(amount) else {
            return Ok(());
        };
        self.resize(target, alloc, hooks)
    }

    /// Resize without hooks, so insertion can chain fallback attempts and
    /// fire `on_realloc_error` only once.
    pub(crate) fn resize_raw<A: RawAllocator>(
        &mut self,
        new_capacity: usize,
        alloc: &mut A,
    ) -> RawResize {
        if new_capacity == self.capacity {
            return RawResize::Done;
        }
        if new_capacity == 0 {
            self.release(alloc);
            return RawResize::Done;
        }
        if size_of::<T>() == 0 {
            return RawResize::Overflow;
        }
        let Ok(new_layout) = Layout::array::<T>(new_capacity) else {
            return RawResize::Overflow;
        };
        let grown = match self.data {
            None => alloc.allocate(new_layout),
            Some(raw) => {
                if new_capacity < self.length && std::mem::needs_drop::<T>() {
                    // Destructors must run before the region past the new
                    // capacity ceases to exist. Plain data is left alone so
                    // a refused shrink cannot lose anything.
                    self.truncate_live(new_capacity);
                }
                let old_layout = self.current_layout();
                // Safe: `raw` came from this allocator family with `old_layout`
                unsafe {
                    alloc.reallocate(raw.cast(), old_layout, new_layout.size())
                }
            }
        };
        match grown {
            Some(raw) => {
                self.data = Some(raw.cast());
                self.capacity = new_capacity;
                self.length = self.length.min(new_capacity);
                RawResize::Done
            }
            None => RawResize::Refused {
                requested_bytes: new_layout.size(),
            },
        }
    }

    /// Realloc-to-zero: drop the live elements and hand the region back.
    fn release<A: RawAllocator>(&mut self, alloc: &mut A) {
        if let Some(raw) = self.data {
            self.truncate_live(0);
            let layout = self.current_layout();
            // Safe: `raw` came from this allocator family with `layout`;
            // new_size 0 releases and returns None by contract
            let released = unsafe { alloc.reallocate(raw.cast(), layout, 0) };
            debug_assert!(released.is_none());
        }
        *self = Self::null();
    }
}
