/// Stack of positions into a sequence.
///
/// The monotonic ordering of the values at the held positions is the
/// caller's discipline: each algorithm pops according to its own comparison
/// before pushing. The stack itself only provides LIFO access plus traffic
/// counters, which make the push/pop-at-most-once accounting observable.
#[derive(Clone, Debug, Default)]
pub struct MonoIndexStack {
    indices: Vec<usize>,
    pushed: usize,
    popped: usize,
}

impl MonoIndexStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
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

    /// Most recently pushed position, without removing it.
    pub fn last(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
        self.pushed += 1;
    }

    pub fn pop(&mut self) -> Option<usize> {
        let index = self.indices.pop();
        if index.is_some() {
            self.popped += 1;
        }
        debug_assert!(self.popped <= self.pushed);
        index
    }

    /// Empties the stack and resets the traffic counters, so one instance
    /// can be reused as scratch across calls.
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
