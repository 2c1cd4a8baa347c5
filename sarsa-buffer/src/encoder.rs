//! Ready-made encoders for vector states and discrete or vector actions.
use crate::{ActionSetEncoder, Encoded, EncodedActionSet, StateActionEncoder};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Passes states and actions given as `Vec<f32>` through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityEncoder;

impl StateActionEncoder for IdentityEncoder {
    type State = Vec<f32>;
    type Action = Vec<f32>;

    fn encode_state(&self, state: &Vec<f32>) -> Result<Encoded> {
        Ok(state.clone())
    }

    fn encode_action(&self, action: &Vec<f32>) -> Result<Encoded> {
        Ok(action.clone())
    }
}

/// Encodes discrete actions given as indices into one-element vectors.
///
/// States are `Vec<f32>` and are passed through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexEncoder;

impl StateActionEncoder for IndexEncoder {
    type State = Vec<f32>;
    type Action = usize;

    fn encode_state(&self, state: &Vec<f32>) -> Result<Encoded> {
        Ok(state.clone())
    }

    fn encode_action(&self, action: &usize) -> Result<Encoded> {
        Ok(vec![*action as f32])
    }
}

/// Encodes an action set by stacking encoded actions and padding with zeros.
///
/// Each available action is encoded with the wrapped [`StateActionEncoder`].
/// Real actions occupy the leading slots in the order given; the remaining
/// slots up to `max_number_actions` are filled with zero vectors and flagged in
/// the mask.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZeroPaddingActionSetEncoder<E> {
    encoder: E,

    /// Width used when the action set is empty.
    action_dim: Option<usize>,
}

impl<E> ZeroPaddingActionSetEncoder<E> {
    /// Wraps an action encoder.
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            action_dim: None,
        }
    }

    /// Sets the width of encoded actions.
    ///
    /// Without it, the width of an empty action set is `0`.
    pub fn action_dim(mut self, action_dim: usize) -> Self {
        self.action_dim = Some(action_dim);
        self
    }
}

impl<E> ActionSetEncoder for ZeroPaddingActionSetEncoder<E>
where
    E: StateActionEncoder,
{
    type Action = E::Action;

    fn encode(
        &self,
        max_number_actions: Option<usize>,
        available: &[E::Action],
    ) -> Result<EncodedActionSet> {
        let n_slots = max_number_actions.unwrap_or(available.len());
        if available.len() > n_slots {
            bail!(
                "{} actions are available but max_number_actions is {}",
                available.len(),
                n_slots
            );
        }

        let encoded = available
            .iter()
            .map(|a| self.encoder.encode_action(a))
            .collect::<Result<Vec<_>>>()?;
        let action_dim = match (encoded.first(), self.action_dim) {
            (Some(a), _) => a.len(),
            (None, Some(d)) => d,
            (None, None) => 0,
        };

        let mut actions = Vec::with_capacity(n_slots * action_dim);
        for a in encoded.iter() {
            if a.len() != action_dim {
                bail!(
                    "Encoded actions differ in width: {} and {}",
                    action_dim,
                    a.len()
                );
            }
            actions.extend_from_slice(a);
        }
        actions.resize(n_slots * action_dim, 0.0);

        let unavailable_mask = (0..n_slots).map(|i| i >= encoded.len()).collect();

        Ok(EncodedActionSet {
            actions,
            action_dim,
            unavailable_mask,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_index_encoder() -> Result<()> {
        let encoder = IndexEncoder;
        assert_eq!(encoder.encode_state(&vec![0.5, -1.0])?, vec![0.5, -1.0]);
        assert_eq!(encoder.encode_action(&3)?, vec![3.0]);
        Ok(())
    }

    #[test]
    fn test_padding() -> Result<()> {
        let encoder = ZeroPaddingActionSetEncoder::new(IndexEncoder);
        let set = encoder.encode(Some(4), &[2, 0])?;

        assert_eq!(set.action_dim, 1);
        assert_eq!(set.actions, vec![2.0, 0.0, 0.0, 0.0]);
        assert_eq!(set.unavailable_mask, vec![false, false, true, true]);
        assert_eq!(set.n_slots(), 4);
        assert_eq!(set.n_available(), 2);
        assert_eq!(set.slot(0), Some(&[2.0f32][..]));
        assert_eq!(set.slot(4), None);
        Ok(())
    }

    #[test]
    fn test_padding_vector_actions() -> Result<()> {
        let encoder = ZeroPaddingActionSetEncoder::new(IdentityEncoder);
        let set = encoder.encode(Some(3), &[vec![1.0, 2.0], vec![3.0, 4.0]])?;

        assert_eq!(set.action_dim, 2);
        assert_eq!(set.actions, vec![1.0, 2.0, 3.0, 4.0, 0.0, 0.0]);
        assert_eq!(set.unavailable_mask, vec![false, false, true]);
        assert_eq!(set.slot(1), Some(&[3.0f32, 4.0][..]));
        Ok(())
    }

    #[test]
    fn test_no_padding_width() -> Result<()> {
        let encoder = ZeroPaddingActionSetEncoder::new(IndexEncoder);
        let set = encoder.encode(None, &[1, 2, 3])?;
        assert_eq!(set.unavailable_mask, vec![false; 3]);
        assert_eq!(set.actions, vec![1.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_empty_set() -> Result<()> {
        let encoder = ZeroPaddingActionSetEncoder::new(IdentityEncoder).action_dim(2);
        let set = encoder.encode(Some(2), &[])?;
        assert_eq!(set.actions, vec![0.0; 4]);
        assert_eq!(set.unavailable_mask, vec![true, true]);
        Ok(())
    }

    #[test]
    fn test_too_many_actions() {
        let encoder = ZeroPaddingActionSetEncoder::new(IndexEncoder);
        assert!(encoder.encode(Some(1), &[0, 1]).is_err());
    }

    #[test]
    fn test_ragged_actions() {
        let encoder = ZeroPaddingActionSetEncoder::new(IdentityEncoder);
        assert!(encoder.encode(Some(2), &[vec![1.0], vec![1.0, 2.0]]).is_err());
    }

    #[test]
    fn test_deterministic() -> Result<()> {
        let encoder = ZeroPaddingActionSetEncoder::new(IndexEncoder);
        assert_eq!(encoder.encode(Some(5), &[4, 1])?, encoder.encode(Some(5), &[4, 1])?);
        Ok(())
    }
}
