//! Fisher-Yates shuffling
//!
//! The algorithm never touches storage itself; callers supply a
//! swap-by-index closure, so anything indexable can be shuffled.

use crate::RandomKit;

impl RandomKit {
    /// Shuffle `len` elements through `swap(i, j)`
    ///
    /// Walks `i` from `len - 1` down to 1 and swaps with `j` uniform in
    /// `[0, i]`. Lengths 0 and 1 draw nothing.
    ///
    /// # Example
    /// ```
    /// use randomkit::RandomKit;
    ///
    /// let mut rng = RandomKit::new(7);
    /// let mut items: Vec<u32> = (0..10).collect();
    /// rng.shuffle(items.len(), |i, j| items.swap(i, j));
    /// assert_eq!(items, vec![8, 5, 0, 2, 1, 9, 7, 3, 6, 4]);
    /// ```
    pub fn shuffle<F>(&mut self, len: usize, mut swap: F)
    where
        F: FnMut(usize, usize),
    {
        for i in (1..len).rev() {
            let j = self.next_interval(i as u64) as usize;
            swap(i, j);
        }
    }

    /// Shuffle a slice in place
    pub fn shuffle_slice<T>(&mut self, items: &mut [T]) {
        let len = items.len();
        self.shuffle(len, |i, j| items.swap(i, j));
    }

    /// Fresh shuffled sequence `[0, n)`
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        self.shuffle_slice(&mut indices);
        indices
    }
}
