use std::collections::VecDeque;

/// Deque of positions into a sequence.
///
/// Same contract as [`MonoIndexStack`](crate::MonoIndexStack), extended with
/// front access so positions that fall out of a sliding window can be
/// retired from the old end while the monotonic discipline trims the new
/// end.
#[derive(Clone, Debug, Default)]
pub struct MonoIndexDeque {
    indices: VecDeque<usize>,
    pushed: usize,
    popped: usize,
}

impl MonoIndexDeque {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: VecDeque::with_capacity(capacity),
            pushed: 0,
            popped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Oldest held position, without removing it.
    pub fn front(&self) -> Option<usize> {
        self.indices.front().copied()
    }

    /// Most recently pushed position, without removing it.
    pub fn back(&self) -> Option<usize> {
        self.indices.back().copied()
    }

    pub fn push_back(&mut self, index: usize) {
        self.indices.push_back(index);
        self.pushed += 1;
    }

    pub fn pop_back(&mut self) -> Option<usize> {
        let index = self.indices.pop_back();
        if index.is_some() {
            self.popped += 1;
        }
        debug_assert!(self.popped <= self.pushed);
        index
    }

    pub fn pop_front(&mut self) -> Option<usize> {
        let index = self.indices.pop_front();
        if index.is_some() {
            self.popped += 1;
        }
        debug_assert!(self.popped <= self.pushed);
        index
    }

    /// Empties the deque and resets the traffic counters.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.pushed = 0;
        self.popped = 0;
    }

    /// Total pushes since construction or the last `clear`.
    pub fn pushes(&self) -> usize {
        self.pushed
    }

    /// Total successful pops since construction or the last `clear`.
    pub fn pops(&self) -> usize {
        self.popped
    }
}

#[cfg(test)]
mod tests {
    use super::MonoIndexDeque;

    #[test]
    fn both_ends_and_counters() {
        let mut deque = MonoIndexDeque::new();
        assert_eq!(deque.pop_front(), None);
        assert_eq!(deque.pop_back(), None);

        deque.push_back(2);
        deque.push_back(5);
        deque.push_back(9);
        assert_eq!(deque.front(), Some(2));
        assert_eq!(deque.back(), Some(9));
        assert_eq!(deque.pop_front(), Some(2));
        assert_eq!(deque.pop_back(), Some(9));
        assert_eq!(deque.len(), 1);
        assert_eq!(deque.pushes(), 3);
        assert_eq!(deque.pops(), 2);

        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.pushes(), 0);
        assert_eq!(deque.pops(), 0);
    }
}
