//! Batches of SARSA transitions.
use super::Transition;
use crate::{Encoded, EncodedActionSet};

/// Column-wise batch of SARSA transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct SarsaBatch {
    /// States.
    pub obs: Vec<Encoded>,

    /// Actions.
    pub act: Vec<Encoded>,

    /// Rewards.
    pub reward: Vec<f32>,

    /// Next states.
    pub next_obs: Vec<Encoded>,

    /// Next actions. Placeholders where `is_terminated[i] == 1`.
    pub next_act: Vec<Encoded>,

    /// Actions available in `obs`.
    pub curr_available_actions: Vec<EncodedActionSet>,

    /// Actions available in `next_obs`.
    pub next_available_actions: Vec<EncodedActionSet>,

    /// Episode termination flags.
    pub is_terminated: Vec<i8>,

    /// Costs, present only when every sampled transition carries one.
    pub cost: Option<Vec<f32>>,

    /// Indices of sampled transitions, counted from the oldest.
    pub ix_sample: Vec<usize>,
}

impl SarsaBatch {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            obs: Vec::with_capacity(n),
            act: Vec::with_capacity(n),
            reward: Vec::with_capacity(n),
            next_obs: Vec::with_capacity(n),
            next_act: Vec::with_capacity(n),
            curr_available_actions: Vec::with_capacity(n),
            next_available_actions: Vec::with_capacity(n),
            is_terminated: Vec::with_capacity(n),
            cost: Some(Vec::with_capacity(n)),
            ix_sample: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, ix: usize, tr: &Transition) {
        self.obs.push(tr.state.clone());
        self.act.push(tr.action.clone());
        self.reward.push(tr.reward);
        self.next_obs.push(tr.next_state.clone());
        self.next_act.push(tr.next_action.clone());
        self.curr_available_actions
            .push(tr.curr_available_actions.clone());
        self.next_available_actions
            .push(tr.next_available_actions.clone());
        self.is_terminated.push(tr.terminated as i8);
        self.cost = match (self.cost.take(), tr.cost) {
            (Some(mut c), Some(x)) => {
                c.push(x);
                Some(c)
            }
            _ => None,
        };
        self.ix_sample.push(ix);
    }

    /// Number of transitions in the batch.
    pub fn len(&self) -> usize {
        self.reward.len()
    }

    /// Returns `true` if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.reward.is_empty()
    }
}
