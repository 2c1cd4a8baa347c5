//! Encoders turning raw states, actions and action sets into numeric vectors.
//!
//! The buffer never looks inside raw states or actions. It relies on two
//! collaborators:
//!
//! * [`StateActionEncoder`] converts a single state or action into its
//!   canonical [`Encoded`] form.
//! * [`ActionSetEncoder`] converts the set of currently available actions into
//!   a fixed-width, padded [`EncodedActionSet`].
//!
//! Both must be deterministic. The buffer links successive steps by comparing
//! encoded states with exact equality, so encoding the same raw state twice has
//! to produce bit-identical vectors.
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Canonical encoded form of a single state or action.
pub type Encoded = Vec<f32>;

/// Encodes single states and actions.
///
/// # Examples
///
/// ```ignore
/// struct GridEncoder;
///
/// impl StateActionEncoder for GridEncoder {
///     type State = (usize, usize);
///     type Action = usize;
///
///     fn encode_state(&self, s: &(usize, usize)) -> Result<Encoded> {
///         Ok(vec![s.0 as f32, s.1 as f32])
///     }
///
///     fn encode_action(&self, a: &usize) -> Result<Encoded> {
///         Ok(vec![*a as f32])
///     }
/// }
/// ```
pub trait StateActionEncoder {
    /// Raw state reported by the learning loop.
    type State;

    /// Raw action reported by the learning loop.
    type Action;

    /// Encodes a state.
    fn encode_state(&self, state: &Self::State) -> Result<Encoded>;

    /// Encodes an action.
    fn encode_action(&self, action: &Self::Action) -> Result<Encoded>;
}

/// A set of available actions padded to a fixed number of slots.
///
/// `actions` is a row-major `[n_slots, action_dim]` array. Slot `i` holds a
/// real action when `unavailable_mask[i]` is `false`; otherwise it holds filler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedActionSet {
    /// Flattened `[n_slots, action_dim]` array of encoded actions.
    pub actions: Vec<f32>,

    /// Width of a single encoded action.
    pub action_dim: usize,

    /// `true` where the slot is padding.
    pub unavailable_mask: Vec<bool>,
}

impl EncodedActionSet {
    /// Number of slots, real or padding.
    pub fn n_slots(&self) -> usize {
        self.unavailable_mask.len()
    }

    /// Number of slots holding a real action.
    pub fn n_available(&self) -> usize {
        self.unavailable_mask.iter().filter(|&&m| !m).count()
    }

    /// Encoded action in slot `ix`, or `None` if `ix` is out of range.
    pub fn slot(&self, ix: usize) -> Option<&[f32]> {
        if ix >= self.n_slots() {
            return None;
        }
        let start = ix * self.action_dim;
        self.actions.get(start..start + self.action_dim)
    }
}

/// Encodes a set of available actions into a padded array and mask.
pub trait ActionSetEncoder {
    /// Raw action reported by the learning loop.
    type Action;

    /// Encodes `available` into `max_number_actions` slots.
    ///
    /// When `max_number_actions` is `None` the number of slots equals the
    /// number of available actions.
    fn encode(
        &self,
        max_number_actions: Option<usize>,
        available: &[Self::Action],
    ) -> Result<EncodedActionSet>;
}
