//! Core interfaces.
mod encoder;
mod replay_buffer;
mod step;
pub use encoder::{ActionSetEncoder, Encoded, EncodedActionSet, StateActionEncoder};
pub use replay_buffer::{ExperienceBufferBase, ReplayBufferBase};
pub use step::{StepReport, ValidatedStep};
