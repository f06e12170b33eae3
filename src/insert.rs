use std::alloc::Layout;
use std::ptr;

use crate::alloc::{FailureHooks, RawAllocator};
use crate::capacity::RawResize;
use crate::core::GrowBuf;
use crate::error::GrowBufError;

impl<T> GrowBuf<T> {
    /// Moves the elements after `index` up by `amount` slots, freeing
    /// `amount` slots starting at `index + 1` for overwrite. The vacated
    /// slots hold stale bit-copies and must be overwritten, not read or
    /// dropped.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `index < len()` and
    /// `capacity() >= len() + amount`. The buffer must not be Null.
    pub unsafe fn shift_right_from(&mut self, index: usize, amount: usize) {
        debug_assert!(index < self.length);
        debug_assert!(self.capacity >= self.length + amount);
        if amount == 0 {
            return;
        }
        let base = self.base_ptr();
        let tail = self.length - index - 1;
        ptr::copy(base.add(index + 1), base.add(index + 1 + amount), tail);
    }

    /// Inserts clones of `to_insert` directly after the element at `index`.
    ///
    /// On a Null or Empty buffer the elements are copied in from the front
    /// (the index is not consulted), growing to exactly `to_insert.len()`
    /// slots when the capacity is short: a single reallocation, without
    /// doubling. Otherwise an out-of-range index fires `on_index_error` and
    /// returns `IndexOutOfBounds` with nothing mutated and nothing
    /// allocated.
    ///
    /// When the live range plus the insertion no longer fits, the capacity
    /// grows by a doubled headroom of `2 * to_insert.len()` to amortize
    /// future insertions. If that size is unreachable (checked arithmetic)
    /// or refused by the allocator, a second attempt is made at the exact
    /// minimal size; only after that fails does `on_realloc_error` fire.
    /// Size-arithmetic overflow anywhere in the chain is a silent no-op.
    pub fn insert_after<A: RawAllocator, H: FailureHooks>(
        &mut self,
        index: usize,
        to_insert: &[T],
        alloc: &mut A,
        hooks: &mut H,
    ) -> Result<(), GrowBufError>
    where
        T: Clone,
    {
        let n = to_insert.len();
        if self.is_empty() {
            if n == 0 {
                return Ok(());
            }
            if n > self.capacity {
                match self.resize_raw(n, alloc) {
                    RawResize::Done => {}
                    RawResize::Overflow => return Ok(()),
                    RawResize::Refused { requested_bytes } => {
                        hooks.on_realloc_error();
                        return Err(GrowBufError::ReallocationFailed { requested_bytes });
                    }
                }
            }
            let base = self.base_ptr();
            for (i, item) in to_insert.iter().enumerate() {
                // Safe: capacity covers n slots, established just above
                unsafe {
                    ptr::write(base.add(i), item.clone());
                }
            }
            self.length = n;
            return Ok(());
        }
        if index >= self.length {
            hooks.on_index_error();
            return Err(GrowBufError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        if n == 0 {
            return Ok(());
        }
        let Some(needed) = self.length.checked_add(n) else {
            return Ok(());
        };
        if needed > self.capacity {
            self.grow_for_insert(n, alloc, hooks)?;
            if self.capacity < needed {
                // both growth sizes overflowed; give up silently
                return Ok(());
            }
        }
        // Safe: index < length and capacity >= length + n hold here
        unsafe {
            self.insert_after_unchecked(index, to_insert);
        }
        Ok(())
    }

    /// The no-error-check insertion primitive: shift and clone, assuming a
    /// valid index and sufficient spare capacity.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `index < len()` and
    /// `capacity() >= len() + to_insert.len()`. The buffer must not be
    /// Null.
    pub unsafe fn insert_after_unchecked(&mut self, index: usize, to_insert: &[T])
    where
        T: Clone,
    {
        let n = to_insert.len();
        self.shift_right_from(index, n);
        let base = self.base_ptr();
        for (i, item) in to_insert.iter().enumerate() {
            ptr::write(base.add(index + 1 + i), item.clone());
        }
        self.length += n;
    }

    /// Removes the element at `index` plus `extra` following elements,
    /// shifting the tail left to close the gap. Capacity never changes on
    /// removal; shrink explicitly to reclaim memory.
    ///
    /// An out-of-range window (`index >= len()`, `index + extra >= len()`,
    /// or a wrapping `index + extra`) fires `on_index_error` and returns
    /// `IndexOutOfBounds` with nothing mutated.
    pub fn remove_range<H: FailureHooks>(
        &mut self,
        index: usize,
        extra: usize,
        hooks: &mut H,
    ) -> Result<(), GrowBufError> {
        let in_range = match index.checked_add(extra) {
            Some(last) => last < self.length,
            None => false,
        };
        if !in_range {
            hooks.on_index_error();
            return Err(GrowBufError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        let removed = extra + 1;
        // Safe: index + removed <= length, so both ranges lie in the live
        // region
        unsafe {
            let base = self.base_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(index), removed));
            ptr::copy(
                base.add(index + removed),
                base.add(index),
                self.length - index - removed,
            );
        }
        self.length -= removed;
        Ok(())
    }

    /// Doubled-headroom growth with a minimal-size fallback. Fires
    /// `on_realloc_error` at most once, after the minimal attempt fails.
    fn grow_for_insert<A: RawAllocator, H: FailureHooks>(
        &mut self,
        n: usize,
        alloc: &mut A,
        hooks: &mut H,
    ) -> Result<(), GrowBufError> {
        // capacity + 2*n, guarded step by step: the doubling, the addition,
        // and the byte-size multiply inside Layout::array
        let doubled = n
            .checked_mul(2)
            .and_then(|headroom| self.capacity.checked_add(headroom))
            .filter(|&target| Layout::array::<T>(target).is_ok());
        if let Some(target) = doubled {
            match self.resize_raw(target, alloc) {
                RawResize::Done => return Ok(()),
                RawResize::Overflow => {}
                RawResize::Refused { .. } => return self.grow_minimal(n, alloc, hooks),
            }
        }
        self.grow_minimal(n, alloc, hooks)
    }

    /// Exact minimal growth (`capacity + n`). Overflow is a silent no-op;
    /// the caller re-checks the capacity it ended up with.
    fn grow_minimal<A: RawAllocator, H: FailureHooks>(
        &mut self,
        n: usize,
        alloc: &mut A,
        hooks: &mut H,
    ) -> Result<(), GrowBufError> {
        let Some(target) = self.capacity.checked_add(n) else {
            return Ok(());
        };
        match self.resize_raw(target, alloc) {
            RawResize::Done | RawResize::Overflow => Ok(()),
            RawResize::Refused { requested_bytes } => {
                hooks.on_realloc_error();
                Err(GrowBufError::ReallocationFailed { requested_bytes })
            }
        }
    }
}
