use crate::raw::RawStorage;
use crate::{CapacityError, Limits};
use std::fmt::Debug;

/// Growable contiguous buffer of fixed-size records.
///
/// Elements live back to back in one allocation owned by this value: element `i` starts
/// `i * element_size()` bytes into the storage. The buffer holds `len()` valid elements and
/// room for `capacity()`; growing past the capacity reallocates to
/// `max(requested, 2 * capacity)` elements.
///
/// Index preconditions are checked in every build and a violation panics, leaving the
/// buffer as it was. Cloning copies the storage; two buffers never share an allocation.
///
/// The buffer can be moved to another thread, but has no internal locking.
pub struct Buffer<T> where T: Copy {
    storage: RawStorage<T>,
    len: usize,
    limits: Limits,
}

impl<T> Buffer<T> where T: Copy {
    /// Creates an empty buffer without allocating.
    pub fn new() -> Buffer<T> {
        Buffer::with_limits(Limits::default())
    }

    /// Creates an empty buffer with room for at least `start_count` elements.
    pub fn with_capacity(start_count: usize) -> Buffer<T> {
        Buffer::with_capacity_and_limits(start_count, Limits::default())
    }

    /// Creates an empty buffer that checks its allocations against `limits`.
    pub fn with_limits(limits: Limits) -> Buffer<T> {
        Buffer {
            storage: RawStorage::empty(),
            len: 0,
            limits,
        }
    }

    /// Creates an empty buffer with room for at least `start_count` elements under `limits`.
    pub fn with_capacity_and_limits(start_count: usize, limits: Limits) -> Buffer<T> {
        let mut buffer = Buffer::with_limits(limits);
        buffer.maybe_grow(start_count);
        buffer
    }

    /// Discards all elements and makes room for at least `start_count` of them.
    ///
    /// The current allocation is reused when it is large enough.
    pub fn reinit(&mut self, start_count: usize) {
        debug!("reinit buffer of {} elements with start count {}", self.len, start_count);
        self.maybe_grow(start_count);
        self.len = 0;
    }

    /// Replaces the contents of this buffer with a copy of `other`.
    ///
    /// Afterwards `capacity() >= other.capacity()` and the elements are equal, but the two
    /// buffers share nothing: mutating one never shows through the other.
    pub fn deep_copy(&mut self, other: &Buffer<T>) {
        debug!("deep copy of {} elements", other.len);
        self.maybe_grow(other.capacity());
        unsafe { self.copy_in_unchecked(0, other.as_slice()) };
        self.len = other.len;
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current allocation holds without reallocating.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Size of one element in bytes.
    #[inline(always)]
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    #[inline(always)]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.check_index(index, "get");
        &self.as_slice()[index]
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index, "get_mut");
        &mut self.as_mut_slice()[index]
    }

    /// Overwrites the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn set(&mut self, index: usize, element: T) {
        self.check_index(index, "set");
        self.as_mut_slice()[index] = element;
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    #[track_caller]
    pub fn top(&self) -> &T {
        assert!(self.len > 0, "top: buffer is empty");
        self.get(self.len - 1)
    }

    #[track_caller]
    pub fn top_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "top_mut: buffer is empty");
        let last = self.len - 1;
        self.get_mut(last)
    }

    /// The valid elements, in order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    /// Makes sure the storage can hold `target_count` elements.
    ///
    /// When it can not, reallocates to `max(target_count, 2 * capacity())` elements, keeping
    /// the existing ones. This is the only way the capacity grows.
    ///
    /// # Panics
    ///
    /// Panics if the new allocation would overflow or reach `Limits::max_alloc_bytes`. Use
    /// `try_reserve` to get the error back instead.
    #[track_caller]
    pub fn maybe_grow(&mut self, target_count: usize) {
        if let Err(e) = self.grow_to(target_count) {
            panic!("maybe_grow: {}", e);
        }
    }

    /// Makes room for `additional` more elements past `len()`, using the same growth rule
    /// as `maybe_grow`. On error the buffer is unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), CapacityError> {
        let target = self.len.checked_add(additional)
            .ok_or(CapacityError::CapacityOverflow { requested: usize::MAX })?;
        self.grow_to(target)
    }

    fn grow_to(&mut self, target_count: usize) -> Result<(), CapacityError> {
        let capacity = self.storage.capacity();
        if target_count <= capacity {
            return Ok(());
        }
        let new_capacity = target_count.max(capacity.saturating_mul(2));
        self.storage.resize(new_capacity, &self.limits)
    }

    /// Forgets all elements, keeping the allocation.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Frees the storage. The length drops to zero with the capacity.
    pub fn deallocate(&mut self) {
        self.len = 0;
        self.storage.release();
    }

    /// Frees the storage and forgets all elements. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.deallocate();
        self.clear();
    }

    #[inline(always)]
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize, op: &str) {
        assert!(index < self.len, "{}: index {} out of range for buffer of length {}", op, index, self.len);
    }

    /// Writes `element` into slot `index` without touching `len`.
    ///
    /// The caller guarantees `index < capacity()`.
    #[inline(always)]
    pub(crate) unsafe fn write_unchecked(&mut self, index: usize, element: T) {
        debug_assert!(index < self.capacity(), "write_unchecked index < capacity");
        self.storage.as_mut_ptr().add(index).write(element);
    }

    /// Copies `elements` into the slots starting at `start` without touching `len`.
    ///
    /// The caller guarantees `start + elements.len() <= capacity()`.
    #[inline(always)]
    pub(crate) unsafe fn copy_in_unchecked(&mut self, start: usize, elements: &[T]) {
        debug_assert!(start + elements.len() <= self.capacity(), "copy_in_unchecked end <= capacity");
        std::ptr::copy_nonoverlapping(elements.as_ptr(), self.storage.as_mut_ptr().add(start), elements.len());
    }

    /// The caller guarantees every slot below `len` is initialized.
    #[inline(always)]
    pub(crate) unsafe fn set_len_unchecked(&mut self, len: usize) {
        debug_assert!(len <= self.capacity(), "set_len_unchecked len <= capacity");
        self.len = len;
    }
}

impl<T> Buffer<T> where T: bytemuck::Pod {
    /// The valid elements as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// The bytes of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn bytes_at(&self, index: usize) -> &[u8] {
        self.check_index(index, "bytes_at");
        bytemuck::bytes_of(&self.as_slice()[index])
    }
}

impl<T> Default for Buffer<T> where T: Copy {
    fn default() -> Self {
        Buffer::new()
    }
}

impl<T> Clone for Buffer<T> where T: Copy {
    fn clone(&self) -> Self {
        let mut copy = Buffer::with_limits(self.limits);
        copy.deep_copy(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.deep_copy(source);
    }
}

impl<T> PartialEq for Buffer<T> where T: Copy + PartialEq {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for Buffer<T> where T: Copy + Eq {}

impl<T> Debug for Buffer<T> where T: Copy + Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
