//! Buffer interfaces.
//!
//! Writing into a buffer and reading batches out of it are separate concerns.
//! A learning loop only needs [`ExperienceBufferBase`], while a trainer that
//! samples for updates uses [`ReplayBufferBase`].
use crate::error::BufferError;
use anyhow::Result;

/// Interface for buffers that store experiences reported by a learning loop.
///
/// # Examples
///
/// ```ignore
/// struct SimpleBuffer<T> {
///     items: Vec<T>,
/// }
///
/// impl<T> ExperienceBufferBase for SimpleBuffer<T> {
///     type Item = T;
///
///     fn push(&mut self, tr: T) -> Result<(), BufferError> {
///         self.items.push(tr);
///         Ok(())
///     }
///
///     fn len(&self) -> usize {
///         self.items.len()
///     }
/// }
/// ```
pub trait ExperienceBufferBase {
    /// The type of items pushed into the buffer.
    type Item;

    /// Pushes an item into the buffer.
    ///
    /// An implementation must not mutate the buffer when it returns
    /// [`BufferError::InvalidArgument`].
    fn push(&mut self, tr: Self::Item) -> Result<(), BufferError>;

    /// Returns the number of complete experiences stored in the buffer.
    fn len(&self) -> usize;

    /// Returns `true` if no complete experience is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interface for buffers that generate batches for training.
pub trait ReplayBufferBase: Sized {
    /// Configuration parameters of the buffer.
    type Config: Clone;

    /// The type of batch generated for training.
    type Batch;

    /// Builds a buffer from the given configuration.
    fn build(config: &Self::Config) -> Result<Self, BufferError>;

    /// Constructs a batch of `size` experiences.
    fn batch(&mut self, size: usize) -> Result<Self::Batch>;
}
