use crate::Buffer;

impl<T> Buffer<T> where T: Copy {
    /// Adds `element` after the last element, growing the storage if needed.
    pub fn append(&mut self, element: T) {
        let index = self.len();
        self.maybe_grow(index + 1);
        unsafe {
            self.write_unchecked(index, element);
            self.set_len_unchecked(index + 1);
        }
    }

    /// Writes `element` into `repeat` consecutive positions starting at `start`.
    ///
    /// Never grows the buffer: every written position must already exist.
    ///
    /// # Panics
    ///
    /// Panics if `start + repeat > len()`. Nothing is written in that case.
    #[track_caller]
    pub fn set_multiple(&mut self, element: T, start: usize, repeat: usize) {
        if repeat == 0 {
            return;
        }
        let end = start.saturating_add(repeat);
        assert!(
            end <= self.len(),
            "set_multiple: positions {}..{} out of range for buffer of length {}",
            start, end, self.len()
        );
        for slot in &mut self.as_mut_slice()[start..end] {
            *slot = element;
        }
    }

    /// Appends a copy of every element of `other`, in order. `other` is left as is.
    pub fn merge(&mut self, other: &Buffer<T>) {
        self.maybe_grow(self.len().saturating_add(other.len()));
        for element in other.as_slice() {
            self.append(*element);
        }
    }
}

impl<T> Buffer<T> where T: Copy + Default {
    /// Appends `default`, or `T::default()` when none is given.
    pub fn append_default(&mut self, default: Option<T>) {
        self.append(default.unwrap_or_default());
    }

    /// Sets the element at `index`, first appending `default` (or `T::default()`) until
    /// the buffer is long enough to have that index.
    pub fn safe_set(&mut self, index: usize, element: T, default: Option<T>) {
        let filler = default.unwrap_or_default();
        self.maybe_grow(index.saturating_add(1));
        while self.len() <= index {
            self.append(filler);
        }
        self.set(index, element);
    }

    /// Copies `source` into positions `start..start + source.len()`.
    ///
    /// The buffer grows to `max(len(), start + source.len())`. Positions between the old
    /// length and `start` are set to `T::default()`.
    #[track_caller]
    pub fn set_some(&mut self, start: usize, source: &[T]) {
        let end = match start.checked_add(source.len()) {
            Some(end) => end,
            None => panic!("set_some: {} elements at {} overflow the index range", source.len(), start),
        };
        let len = self.len();
        self.maybe_grow(end);
        unsafe {
            for gap in len..start {
                self.write_unchecked(gap, T::default());
            }
            self.copy_in_unchecked(start, source);
            self.set_len_unchecked(len.max(end));
        }
    }

    /// Changes the number of elements to `len`.
    ///
    /// Shrinking forgets the tail; growing appends `T::default()` elements.
    pub fn set_len(&mut self, len: usize) {
        let current = self.len();
        if len <= current {
            unsafe { self.set_len_unchecked(len) };
            return;
        }
        self.maybe_grow(len);
        unsafe {
            for index in current..len {
                self.write_unchecked(index, T::default());
            }
            self.set_len_unchecked(len);
        }
    }
}
