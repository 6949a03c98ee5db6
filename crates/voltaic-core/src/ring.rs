//! Fixed-capacity FIFO with contiguous read and write windows.
//!
//! [`DoubleRingBuffer`] stores every element twice, at `i` and `i + N`, so
//! the `size()` readable elements always form one contiguous slice starting
//! at [`DoubleRingBuffer::start_data`]. Block processors read a whole block
//! from there, write a whole block into [`DoubleRingBuffer::end_data_mut`],
//! and commit with [`DoubleRingBuffer::start_incr`] /
//! [`DoubleRingBuffer::end_incr`].
//!
//! ```rust
//! use voltaic_core::DoubleRingBuffer;
//!
//! let mut ring: DoubleRingBuffer<f32, 4> = DoubleRingBuffer::new();
//! ring.push(1.0);
//! ring.push(2.0);
//! assert_eq!(ring.start_data(), &[1.0, 2.0]);
//! assert_eq!(ring.shift(), Some(1.0));
//! assert_eq!(ring.size(), 1);
//! ```

/// FIFO of `N` elements (`N` a power of two) with mirrored storage.
///
/// # Invariants
///
/// - `0 <= end - start <= N`
/// - `data[i] == data[i + N]` for every live slot
#[derive(Debug, Clone)]
pub struct DoubleRingBuffer<T: Copy + Default, const N: usize> {
    data: [[T; N]; 2],
    start: usize,
    end: usize,
}

impl<T: Copy + Default, const N: usize> DoubleRingBuffer<T, N> {
    /// Empty buffer.
    pub fn new() -> Self {
        const { assert!(N.is_power_of_two(), "capacity must be a power of two") };
        Self {
            data: [[T::default(); N]; 2],
            start: 0,
            end: 0,
        }
    }

    #[inline]
    fn mask(i: usize) -> usize {
        i & (N - 1)
    }

    /// Append an element; does nothing when full.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.is_full() {
            return;
        }
        let i = Self::mask(self.end);
        self.data[0][i] = value;
        self.data[1][i] = value;
        self.end = self.end.wrapping_add(1);
    }

    /// Remove and return the oldest element.
    #[inline]
    pub fn shift(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.data[0][Self::mask(self.start)];
        self.start = self.start.wrapping_add(1);
        Some(value)
    }

    /// Remove the oldest element, or return `default` when empty.
    #[inline]
    pub fn shift_or(&mut self, default: T) -> T {
        self.shift().unwrap_or(default)
    }

    /// Number of stored elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.end.wrapping_sub(self.start)
    }

    /// Free slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        N - self.size()
    }

    /// True if nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// True if no slot is free.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size() >= N
    }

    /// Drop all elements.
    pub fn clear(&mut self) {
        self.start = self.end;
    }

    /// All stored elements, oldest first, as one slice.
    #[inline]
    pub fn start_data(&self) -> &[T] {
        let s = Self::mask(self.start);
        &self.data.as_flattened()[s..s + self.size()]
    }

    /// Consume `n` elements from the front (clamped to `size()`).
    #[inline]
    pub fn start_incr(&mut self, n: usize) {
        self.start = self.start.wrapping_add(n.min(self.size()));
    }

    /// Writable window of `capacity()` slots following the last element.
    ///
    /// Commit writes with [`DoubleRingBuffer::end_incr`].
    #[inline]
    pub fn end_data_mut(&mut self) -> &mut [T] {
        let e = Self::mask(self.end);
        let free = self.capacity();
        &mut self.data.as_flattened_mut()[e..e + free]
    }

    /// Commit `n` elements written through `end_data_mut` (clamped to
    /// `capacity()`), mirroring them into the other half of storage.
    pub fn end_incr(&mut self, n: usize) {
        let n = n.min(self.capacity());
        let e = Self::mask(self.end);
        let e1 = e + n;
        let [low, high] = &mut self.data;
        let lower_end = e1.min(N);
        high[e..lower_end].copy_from_slice(&low[e..lower_end]);
        if e1 > N {
            low[..e1 - N].copy_from_slice(&high[..e1 - N]);
        }
        self.end = self.end.wrapping_add(n);
    }
}

impl<T: Copy + Default, const N: usize> Default for DoubleRingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut ring: DoubleRingBuffer<u32, 8> = DoubleRingBuffer::new();
        for i in 0..5 {
            ring.push(i);
        }
        for i in 0..5 {
            assert_eq!(ring.shift(), Some(i));
        }
        assert_eq!(ring.shift(), None);
    }

    #[test]
    fn push_when_full_is_dropped() {
        let mut ring: DoubleRingBuffer<u32, 4> = DoubleRingBuffer::new();
        for i in 0..6 {
            ring.push(i);
        }
        assert!(ring.is_full());
        assert_eq!(ring.start_data(), &[0, 1, 2, 3]);
    }

    #[test]
    fn shift_or_on_empty_yields_default() {
        let mut ring: DoubleRingBuffer<f32, 4> = DoubleRingBuffer::new();
        assert_eq!(ring.shift_or(-1.0), -1.0);
        assert!(ring.is_empty());
    }

    #[test]
    fn start_data_is_contiguous_across_wrap() {
        let mut ring: DoubleRingBuffer<u32, 4> = DoubleRingBuffer::new();
        for i in 0..3 {
            ring.push(i);
        }
        ring.start_incr(3);
        for i in 10..14 {
            ring.push(i);
        }
        // Physically wraps from slot 3 to slot 2.
        assert_eq!(ring.start_data(), &[10, 11, 12, 13]);
    }

    #[test]
    fn end_window_write_is_mirrored() {
        let mut ring: DoubleRingBuffer<u32, 4> = DoubleRingBuffer::new();
        ring.push(0);
        ring.push(0);
        ring.push(0);
        ring.start_incr(3);
        // end sits at slot 3; a four-element block wraps around.
        let window = ring.end_data_mut();
        assert_eq!(window.len(), 4);
        window.copy_from_slice(&[20, 21, 22, 23]);
        ring.end_incr(4);
        assert_eq!(ring.size(), 4);
        let drained: [u32; 4] = core::array::from_fn(|_| ring.shift_or(0));
        assert_eq!(drained, [20, 21, 22, 23]);
    }

    #[test]
    fn counters_survive_many_cycles() {
        let mut ring: DoubleRingBuffer<u32, 16> = DoubleRingBuffer::new();
        for i in 0..10_000 {
            ring.push(i);
            ring.push(i + 1);
            let front = ring.start_data()[0];
            assert_eq!(ring.shift(), Some(front));
            assert_eq!(ring.shift(), Some(i + 1));
            assert!(ring.is_empty());
        }
    }

    #[test]
    fn clear_empties() {
        let mut ring: DoubleRingBuffer<u8, 4> = DoubleRingBuffer::new();
        ring.push(1);
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.capacity(), 4);
    }
}
