use crate::core::GrowBuf;

impl<T> GrowBuf<T> {
    /// Reverses the live elements in place with the classic two-pointer
    /// swap. No-op on an empty buffer; capacity is untouched.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }
}

impl<T: PartialEq> GrowBuf<T> {
    /// Index of the first occurrence of `needle` as a contiguous
    /// sub-sequence, or `None` when the needle is empty, longer than the
    /// live range, or absent.
    ///
    /// Naive O(n·m) scan, with a direct element-wise comparison when the
    /// needle spans the whole live range.
    #[must_use]
    pub fn first_index_of(&self, needle: &[T]) -> Option<usize> {
        let hay = self.as_slice();
        if needle.is_empty() || needle.len() > hay.len() {
            return None;
        }
        if needle.len() == hay.len() {
            return (hay == needle).then_some(0);
        }
        hay.windows(needle.len()).position(|window| window == needle)
    }

    /// Index of the last occurrence of `needle`; same conventions as
    /// [`first_index_of`](GrowBuf::first_index_of).
    #[must_use]
    pub fn last_index_of(&self, needle: &[T]) -> Option<usize> {
        let hay = self.as_slice();
        if needle.is_empty() || needle.len() > hay.len() {
            return None;
        }
        if needle.len() == hay.len() {
            return (hay == needle).then_some(0);
        }
        hay.windows(needle.len())
            .rposition(|window| window == needle)
    }

    /// Number of starting positions at which `needle` occurs. Occurrences
    /// may overlap. Zero when the needle is empty or longer than the live
    /// range.
    #[must_use]
    pub fn count_of(&self, needle: &[T]) -> usize {
        let hay = self.as_slice();
        if needle.is_empty() || needle.len() > hay.len() {
            return 0;
        }
        if needle.len() == hay.len() {
            return usize::from(hay == needle);
        }
        hay.windows(needle.len())
            .filter(|window| *window == needle)
            .count()
    }

    /// True iff the live range begins with `prefix`. False whenever either
    /// operand is empty.
    #[must_use]
    pub fn starts_with(&self, prefix: &[T]) -> bool {
        if prefix.is_empty() || self.is_empty() {
            return false;
        }
        self.as_slice().starts_with(prefix)
    }

    /// True iff the live range ends with `suffix`. False whenever either
    /// operand is empty.
    #[must_use]
    pub fn ends_with(&self, suffix: &[T]) -> bool {
        if suffix.is_empty() || self.is_empty() {
            return false;
        }
        self.as_slice().ends_with(suffix)
    }

    /// Removes every element equal to any member of `items`, keeping the
    /// survivors in their original relative order.
    ///
    /// Implemented as an in-place stable partition: a single forward walk
    /// tracks the lowest index known to hold a doomed element; each
    /// survivor found past that point swaps into it and the index advances.
    /// The doomed elements end up as a contiguous tail, which is then
    /// dropped, truncating `length` to the survivor count. Capacity and
    /// `items` are untouched. The swap-based formulation works through
    /// assignment alone, so it needs nothing beyond `PartialEq` from `T`.
    pub fn remove_each_instance(&mut self, items: &[T]) {
        let live = self.as_mut_slice();
        let mut doomed: Option<usize> = None;
        for i in 0..live.len() {
            if items.contains(&live[i]) {
                if doomed.is_none() {
                    doomed = Some(i);
                }
            } else if let Some(lowest) = doomed {
                live.swap(i, lowest);
                doomed = Some(lowest + 1);
            }
        }
        if let Some(survivors) = doomed {
            self.truncate_live(survivors);
        }
    }
}
