use std::collections::VecDeque;

use crate::StreamErr;

/// An ordered, in-memory FIFO of samples.
///
/// Models the blocking stream ports a synthesized function reads its
/// inputs from and writes its results to. Host-side driver code is
/// single threaded, so a read from an empty stream fails instead of
/// blocking.
#[derive(Debug)]
pub struct Stream<T> {
    queue: VecDeque<T>,
}

impl<T> Stream<T> {
    /// Creates a new, empty `Stream`.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Appends `data` at the back of the stream.
    pub fn write(&mut self, data: T) {
        self.queue.push_back(data);
    }

    /// Pops the element at the front of the stream.
    ///
    /// # Errors
    /// Returns `StreamErr::Underflow` if the stream is empty.
    pub fn read(&mut self) -> Result<T, StreamErr> {
        self.queue.pop_front().ok_or(StreamErr::Underflow)
    }

    /// Returns the number of elements currently buffered.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if the stream holds no elements.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stream<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}
