#![warn(missing_docs)]
//! Experience buffer assembling single-step reports into SARSA transitions
//! for on-policy reinforcement learning.
pub mod encoder;
pub mod error;
pub mod fifo_buffer;

mod base;
pub use base::{
    ActionSetEncoder, Encoded, EncodedActionSet, ExperienceBufferBase, ReplayBufferBase,
    StateActionEncoder, StepReport, ValidatedStep,
};
pub use encoder::{IdentityEncoder, IndexEncoder, ZeroPaddingActionSetEncoder};
pub use error::BufferError;
