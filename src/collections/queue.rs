use std::collections::VecDeque;

/// A growable FIFO queue backed by a `VecDeque`.
///
/// # Example
/// ```
/// use shunt::collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
///
/// assert_eq!(queue.dequeue(), Some('a'));
/// assert_eq!(queue.into_vec(), vec!['b']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Creates an empty queue with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: VecDeque::with_capacity(capacity) }
    }

    /// Appends an item at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the queue.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Consumes the queue, returning its items front to back.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Queue<T> {
    type IntoIter = std::collections::vec_deque::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
