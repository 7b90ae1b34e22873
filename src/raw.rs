use core::alloc::Layout;
use core::mem;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc, handle_alloc_error};

/// Owned backing block for `GrowVec`.
///
/// A `RawBuf` owns exactly one contiguous allocation of `cap` slots of `T`
/// and frees it exactly once when dropped. It never reads, writes, or drops
/// elements; tracking which slots are initialized is the caller's job.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawBuf<T> {
    /// Allocates a block of `cap` slots.
    ///
    /// Zero capacities and zero-sized element types do not touch the
    /// allocator; the pointer stays dangling and the capacity is recorded
    /// as given.
    #[allow(clippy::expect_used)]
    pub(crate) fn new(cap: usize) -> Self {
        if cap == 0 || mem::size_of::<T>() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap,
            };
        }

        let layout = Layout::array::<T>(cap).expect("capacity overflow");
        // SAFETY: the layout has non-zero size, checked above.
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            handle_alloc_error(layout);
        };

        Self { ptr, cap }
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn cap(&self) -> usize {
        self.cap
    }
}

impl<T> Drop for RawBuf<T> {
    #[allow(clippy::expect_used)]
    fn drop(&mut self) {
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            let layout = Layout::array::<T>(self.cap).expect("layout validated at allocation");
            // SAFETY: the block was allocated with this same layout and is
            // freed exactly once.
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}
