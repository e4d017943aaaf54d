//! Owned, uninitialized storage for a run of `T`s.
//!
//! `RawStorage` only knows how many slots it holds. It never reads, writes or drops
//! the values in those slots: the owning `Buffer` tracks which ones are initialized.

use crate::{CapacityError, Limits};
use std::alloc::{self, Layout};
use std::ptr::NonNull;

pub(crate) struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
}

// Owns its allocation exclusively, like a `Box<[T]>`.
unsafe impl<T: Send> Send for RawStorage<T> {}

impl<T> RawStorage<T> {
    const ELEMENT_SIZE: usize = std::mem::size_of::<T>();

    pub fn empty() -> RawStorage<T> {
        RawStorage {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Layout for `capacity` elements, checked against the overflow limit and `limits`.
    pub fn layout(capacity: usize, limits: &Limits) -> Result<Layout, CapacityError> {
        let layout = Layout::array::<T>(capacity)
            .map_err(|_| CapacityError::CapacityOverflow { requested: capacity })?;
        if !limits.allows(layout.size()) {
            return Err(CapacityError::LimitExceeded {
                requested_bytes: layout.size(),
                max_alloc_bytes: limits.max_alloc_bytes,
            });
        }
        Ok(layout)
    }

    /// Reallocates to hold exactly `new_capacity` elements.
    ///
    /// The first `min(capacity, new_capacity)` slots keep their bytes. On error nothing
    /// changes. Allocator failure does not return: it goes to `handle_alloc_error`.
    pub fn resize(&mut self, new_capacity: usize, limits: &Limits) -> Result<(), CapacityError> {
        if new_capacity == self.capacity {
            return Ok(());
        }
        if Self::ELEMENT_SIZE == 0 {
            self.capacity = new_capacity;
            return Ok(());
        }
        if new_capacity == 0 {
            self.release();
            return Ok(());
        }

        let new_layout = Self::layout(new_capacity, limits)?;
        let ptr = unsafe {
            if self.capacity == 0 {
                alloc::alloc(new_layout)
            } else {
                alloc::realloc(self.ptr.as_ptr() as *mut u8, self.current_layout(), new_layout.size())
            }
        };

        match NonNull::new(ptr as *mut T) {
            Some(ptr) => {
                trace!("resize storage {} -> {} elements ({} bytes)", self.capacity, new_capacity, new_layout.size());
                self.ptr = ptr;
                self.capacity = new_capacity;
                Ok(())
            },
            None => alloc::handle_alloc_error(new_layout),
        }
    }

    /// Frees the allocation. Calling it on empty storage is a no-op.
    pub fn release(&mut self) {
        if self.capacity != 0 && Self::ELEMENT_SIZE != 0 {
            trace!("release storage of {} elements", self.capacity);
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, self.current_layout()) };
        }
        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }

    /// Layout of the live allocation. It passed `layout` when it was made.
    #[inline(always)]
    unsafe fn current_layout(&self) -> Layout {
        Layout::from_size_align_unchecked(
            Self::ELEMENT_SIZE * self.capacity,
            std::mem::align_of::<T>(),
        )
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        self.release();
    }
}
