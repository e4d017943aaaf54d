use crate::Buffer;

impl<T> Buffer<T> where T: Copy {
    /// Removes the element at `index`, shifting everything after it one position left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) {
        self.check_index(index, "remove");
        let len = self.len();
        self.as_mut_slice().copy_within(index + 1..len, index);
        unsafe { self.set_len_unchecked(len - 1) };
    }

    /// Removes every position listed in `indices` at once.
    ///
    /// Indices refer to the buffer as it is before the call, so the order they are listed in
    /// does not matter: removing `[2, 0, 4]` from `ABCDE` leaves `BD`. The slice itself is
    /// not modified.
    ///
    /// # Panics
    ///
    /// Panics if an index is listed twice or is not below `len()`. The buffer is unchanged
    /// in that case.
    #[track_caller]
    pub fn remove_many(&mut self, indices: &[usize]) {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();

        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            panic!("remove_many: index {} is listed more than once", pair[0]);
        }
        if let Some(&last) = sorted.last() {
            assert!(
                last < self.len(),
                "remove_many: index {} out of range for buffer of length {}",
                last, self.len()
            );
        }

        debug!("remove {} of {} elements", sorted.len(), self.len());

        // each earlier removal moved the later targets one position down
        for (removed, index) in sorted.into_iter().enumerate() {
            self.remove(index - removed);
        }
    }
}
