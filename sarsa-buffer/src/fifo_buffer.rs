//! FIFO on-policy buffer producing SARSA transitions.
//!
//! # Key Components
//!
//! - [`FifoOnPolicyBuffer`]: pairs consecutive step reports into transitions
//! - [`PendingCache`]: holds the transition waiting for its next action
//! - [`FifoStore`]: ring buffer of the most recent complete transitions
//! - [`SarsaBatch`]: batch sampled uniformly from the store
//!
//! # Examples
//!
//! ```rust
//! use sarsa_buffer::{
//!     encoder::{IndexEncoder, ZeroPaddingActionSetEncoder},
//!     fifo_buffer::FifoOnPolicyBuffer,
//!     ExperienceBufferBase, StepReport,
//! };
//!
//! type Buffer = FifoOnPolicyBuffer<IndexEncoder, ZeroPaddingActionSetEncoder<IndexEncoder>>;
//!
//! let mut buffer = Buffer::new(100).unwrap();
//! let step = |s: f32, a: usize, terminated: bool| {
//!     StepReport::new(vec![s], a, 1.0, terminated)
//!         .curr_available_actions(vec![0, 1])
//!         .next_state(vec![s + 1.0])
//!         .next_available_actions(vec![0, 1])
//!         .max_number_actions(2)
//! };
//!
//! buffer.push(step(0.0, 1, false)).unwrap();
//! assert_eq!(buffer.len(), 0);
//! buffer.push(step(1.0, 0, false)).unwrap();
//! assert_eq!(buffer.len(), 1);
//! ```
mod base;
mod batch;
mod config;
mod pending;
mod store;
mod transition;
pub use base::FifoOnPolicyBuffer;
pub use batch::SarsaBatch;
pub use config::FifoOnPolicyBufferConfig;
pub use pending::PendingCache;
pub use store::FifoStore;
pub use transition::{PendingTransition, Transition};
