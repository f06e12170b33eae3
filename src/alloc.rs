use std::alloc::Layout;
use std::ptr::NonNull;

/// A malloc-shaped allocation capability, injected into every operation that
/// may touch the underlying region.
///
/// The buffer record does not capture an allocator; different calls on the
/// same buffer may use different `RawAllocator` values as long as the memory
/// handed from one call to the next remains compatible with whichever
/// allocator touches it. That compatibility is a caller contract, not
/// something this trait can enforce.
pub trait RawAllocator {
    /// Allocates `layout.size()` bytes. Returns `None` on failure.
    /// Contents are not guaranteed to be zeroed.
    fn allocate(&mut self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resizes an existing allocation to `new_size` bytes, preserving the
    /// prefix, like `realloc`. Returns `None` on failure, in which case the
    /// original allocation is still live.
    ///
    /// A `new_size` of zero releases the allocation and returns `None`;
    /// callers must not treat that as a failure.
    ///
    /// # Safety
    ///
    /// `ptr` must have been produced by this allocator family with `layout`.
    unsafe fn reallocate(
        &mut self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>>;

    /// Releases an allocation, like `free`.
    ///
    /// # Safety
    ///
    /// `ptr` must have been produced by this allocator family with `layout`
    /// and must not be used afterwards.
    unsafe fn deallocate(&mut self, ptr: NonNull<u8>, layout: Layout);
}

/// The process-wide default allocator, backed by `std::alloc`.
///
/// Pass a `&mut Global` wherever no special allocation policy is needed.
/// This replaces a link-time default-allocator override with an ordinary
/// value chosen at the composition root.
#[derive(Debug, Default, Clone, Copy)]
pub struct Global;

impl RawAllocator for Global {
    fn allocate(&mut self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None;
        }
        // Safe: layout has non-zero size, checked above
        NonNull::new(unsafe { std::alloc::alloc(layout) })
    }

    unsafe fn reallocate(
        &mut self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        if new_size == 0 {
            // realloc-to-zero releases; None here is not a failure
            std::alloc::dealloc(ptr.as_ptr(), layout);
            return None;
        }
        NonNull::new(std::alloc::realloc(ptr.as_ptr(), layout, new_size))
    }

    unsafe fn deallocate(&mut self, ptr: NonNull<u8>, layout: Layout) {
        std::alloc::dealloc(ptr.as_ptr(), layout);
    }
}

/// Failure callbacks, invoked synchronously and at most once per failing
/// call. The call always returns immediately after the hook runs; nothing
/// is retried on the hook's behalf.
pub trait FailureHooks {
    /// A fresh allocation was refused.
    fn on_alloc_error(&mut self) {}

    /// A reallocation was refused; the buffer is unchanged.
    fn on_realloc_error(&mut self) {}

    /// A positional operation was given an out-of-range index.
    fn on_index_error(&mut self) {}
}

/// Hook set that ignores every failure. The `Err` return still reports it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl FailureHooks for NoHooks {}
