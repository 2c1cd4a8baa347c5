//! Capacity-bounded FIFO store.
use crate::error::BufferError;

/// A ring buffer keeping the most recent `capacity` items.
///
/// Slots are allocated lazily up to `capacity`. Once full, [`FifoStore::append`]
/// overwrites the oldest item in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FifoStore<T> {
    capacity: usize,

    /// Slot of the oldest item once the store is full, `0` before that.
    i: usize,
    items: Vec<T>,
}

impl<T> FifoStore<T> {
    /// Creates an empty store.
    ///
    /// Fails with [`BufferError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::invalid_argument(
                "capacity must be a positive integer",
            ));
        }

        Ok(Self {
            capacity,
            i: 0,
            items: Vec::with_capacity(capacity),
        })
    }

    /// Appends an item at the tail.
    ///
    /// If the store is full the oldest item is removed and returned.
    pub fn append(&mut self, item: T) -> Option<T> {
        if self.items.len() < self.capacity {
            self.items.push(item);
            None
        } else {
            let evicted = std::mem::replace(&mut self.items[self.i], item);
            self.i = (self.i + 1) % self.capacity;
            Some(evicted)
        }
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store holds no item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the next append evicts an item.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Item at position `ix`, counted from the oldest.
    pub fn get(&self, ix: usize) -> Option<&T> {
        if ix >= self.items.len() {
            return None;
        }
        self.items.get((self.i + ix) % self.items.len())
    }

    /// The oldest item.
    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// The most recently appended item.
    pub fn newest(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|ix| self.get(ix))
    }

    /// Iterates from the oldest to the newest item.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (newer, older) = self.items.split_at(self.i);
        older.iter().chain(newer.iter())
    }
}
