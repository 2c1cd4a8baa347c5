//! SARSA transitions.
use crate::{Encoded, EncodedActionSet};
use serde::{Deserialize, Serialize};

/// A complete SARSA transition `(s, a, r, s', a')`.
///
/// For a terminated transition `next_action` is a copy of `action`. It only
/// keeps the shape of the field and must not be read as an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Encoded state.
    pub state: Encoded,

    /// Encoded action taken in `state`.
    pub action: Encoded,

    /// Reward.
    pub reward: f32,

    /// Encoded state reached after `action`.
    pub next_state: Encoded,

    /// Encoded action taken in `next_state`.
    pub next_action: Encoded,

    /// Actions available in `state`, with mask.
    pub curr_available_actions: EncodedActionSet,

    /// Actions available in `next_state`, with mask.
    pub next_available_actions: EncodedActionSet,

    /// Episode termination flag.
    pub terminated: bool,

    /// Cost of the step, if reported.
    pub cost: Option<f32>,
}

/// A transition waiting for the action taken in its next state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTransition {
    /// Encoded state.
    pub state: Encoded,

    /// Encoded action taken in `state`.
    pub action: Encoded,

    /// Reward.
    pub reward: f32,

    /// Encoded state the next push has to start from.
    pub next_state: Encoded,

    /// Actions available in `state`, with mask.
    pub curr_available_actions: EncodedActionSet,

    /// Actions available in `next_state`, with mask.
    pub next_available_actions: EncodedActionSet,

    /// Cost of the step, if reported.
    pub cost: Option<f32>,
}

impl PendingTransition {
    /// Completes the transition with the action taken in `next_state`.
    pub fn complete(self, next_action: Encoded) -> Transition {
        Transition {
            state: self.state,
            action: self.action,
            reward: self.reward,
            next_state: self.next_state,
            next_action,
            curr_available_actions: self.curr_available_actions,
            next_available_actions: self.next_available_actions,
            terminated: false,
            cost: self.cost,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_complete_is_never_terminated() {
        let set = EncodedActionSet {
            actions: vec![0.0, 1.0],
            action_dim: 1,
            unavailable_mask: vec![false, false],
        };
        let pending = PendingTransition {
            state: vec![0.0],
            action: vec![1.0],
            reward: 0.5,
            next_state: vec![1.0],
            curr_available_actions: set.clone(),
            next_available_actions: set,
            cost: Some(0.1),
        };

        let tr = pending.clone().complete(vec![0.0]);
        assert!(!tr.terminated);
        assert_eq!(tr.next_action, vec![0.0]);
        assert_eq!(tr.state, pending.state);
        assert_eq!(tr.next_state, pending.next_state);
        assert_eq!(tr.cost, Some(0.1));
    }
}
