//! Indexed binary heap used as the A* frontier.
//!
//! The heap is 1-indexed (slot 0 is never read) so that the parent of slot `i`
//! is `i / 2` and its children are `2i` and `2i + 1`. Whichever entry has the
//! greatest priority under `Ord` is popped first; callers wanting the smallest
//! value out first wrap their priority in [`std::cmp::Reverse`].

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct Entry<T, P> {
    payload: T,
    priority: P,
}

/// A max-priority queue of `(payload, priority)` pairs with logarithmic push and pop.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    heap: Vec<Option<Entry<T, P>>>,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    #[inline]
    pub fn new() -> Self {
        Self { heap: vec![None] }
    }

    /// Creates an empty queue with room for `capacity` entries before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut heap = Vec::with_capacity(capacity + 1);
        heap.push(None);
        Self { heap }
    }

    /// Returns the number of entries in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the pair at the end of the heap and bubbles it up.
    pub fn push(&mut self, payload: T, priority: P) {
        self.heap.push(Some(Entry { payload, priority }));
        let last = self.heap.len() - 1;
        self.bubble(last);
    }

    /// Removes and returns the payload with the highest priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }

        let last = self.heap.len() - 1;
        self.heap.swap(1, last);
        let top = self.heap.pop().flatten().ok_or(Error::Underflow)?;
        self.sink(1);
        Ok(top.payload)
    }

    fn bubble(&mut self, mut i: usize) {
        while i > 1 && self.is_higher(i, i / 2) {
            self.heap.swap(i, i / 2);
            i /= 2;
        }
    }

    fn sink(&mut self, mut i: usize) {
        let len = self.heap.len();
        while 2 * i < len {
            let mut j = 2 * i;
            // ties go to the left child
            if j + 1 < len && self.is_higher(j + 1, j) {
                j += 1;
            }
            if !self.is_higher(j, i) {
                break;
            }
            self.heap.swap(i, j);
            i = j;
        }
    }

    /// True if slot `i` holds a strictly higher priority than slot `j`.
    #[inline]
    fn is_higher(&self, i: usize, j: usize) -> bool {
        match (&self.heap[i], &self.heap[j]) {
            (Some(a), Some(b)) => a.priority > b.priority,
            _ => false,
        }
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;

    #[test]
    fn test_pop_empty_underflows() {
        let mut queue: PriorityQueue<&str, i32> = PriorityQueue::new();
        assert_eq!(queue.pop(), Err(Error::Underflow));
    }

    #[test]
    fn test_pops_largest_first() {
        let mut queue = PriorityQueue::new();
        for (payload, score) in [("c", 3), ("a", 9), ("e", -4), ("b", 7), ("d", 0), ("f", 7)] {
            queue.push(payload, score);
        }
        assert_eq!(queue.len(), 6);

        let mut scores = Vec::new();
        while let Ok(payload) = queue.pop() {
            let score = match payload {
                "a" => 9,
                "b" | "f" => 7,
                "c" => 3,
                "d" => 0,
                _ => -4,
            };
            scores.push(score);
        }
        assert_eq!(scores, vec![9, 7, 7, 3, 0, -4]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_reverse_pops_smallest_first() {
        let mut queue = PriorityQueue::with_capacity(8);
        for value in [5u32, 1, 8, 3, 9, 2, 2] {
            queue.push(value, Reverse(value));
        }

        let mut out = Vec::new();
        while !queue.is_empty() {
            out.push(queue.pop().unwrap());
        }
        assert_eq!(out, vec![1, 2, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut queue = PriorityQueue::default();
        queue.push('x', 1);
        queue.push('y', 4);
        assert_eq!(queue.pop(), Ok('y'));
        queue.push('z', 2);
        queue.push('w', 0);
        assert_eq!(queue.pop(), Ok('z'));
        assert_eq!(queue.pop(), Ok('x'));
        assert_eq!(queue.pop(), Ok('w'));
        assert_eq!(queue.pop(), Err(Error::Underflow));
    }

    #[test]
    fn test_single_element() {
        let mut queue = PriorityQueue::new();
        queue.push(42, 0);
        assert_eq!(queue.pop(), Ok(42));
        assert!(queue.is_empty());
    }
}
