//! Single-step report from a learning loop.
use crate::error::BufferError;

/// One interaction step `(s_t, a_t, r_t, s_t+1)` with the action sets
/// available in `s_t` and `s_t+1`.
///
/// Several fields are optional at this level so that a learning loop can
/// share one reporting path across buffers with different needs. Buffers that
/// require them check with [`StepReport::validate`] before doing any work.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport<S, A> {
    /// State the action was taken in.
    pub state: S,

    /// Action taken.
    pub action: A,

    /// Reward received.
    pub reward: f32,

    /// Flag denoting that this step ended the episode.
    pub terminated: bool,

    /// Actions available in `state`.
    pub curr_available_actions: Option<Vec<A>>,

    /// State reached after the action.
    pub next_state: Option<S>,

    /// Actions available in `next_state`.
    pub next_available_actions: Option<Vec<A>>,

    /// Number of slots the action sets are padded to.
    pub max_number_actions: Option<usize>,

    /// Cost of the step for constrained problems. Not used for pairing.
    pub cost: Option<f32>,
}

impl<S, A> StepReport<S, A> {
    /// Constructs a report with all optional fields unset.
    pub fn new(state: S, action: A, reward: f32, terminated: bool) -> Self {
        Self {
            state,
            action,
            reward,
            terminated,
            curr_available_actions: None,
            next_state: None,
            next_available_actions: None,
            max_number_actions: None,
            cost: None,
        }
    }

    /// Sets the actions available in the current state.
    pub fn curr_available_actions(mut self, actions: Vec<A>) -> Self {
        self.curr_available_actions = Some(actions);
        self
    }

    /// Sets the next state.
    pub fn next_state(mut self, next_state: S) -> Self {
        self.next_state = Some(next_state);
        self
    }

    /// Sets the actions available in the next state.
    pub fn next_available_actions(mut self, actions: Vec<A>) -> Self {
        self.next_available_actions = Some(actions);
        self
    }

    /// Sets the padding width of action sets.
    pub fn max_number_actions(mut self, n: usize) -> Self {
        self.max_number_actions = Some(n);
        self
    }

    /// Sets the cost of the step.
    pub fn cost(mut self, cost: f32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Checks that the next state and both action sets are present.
    ///
    /// Consumes the report and returns a [`ValidatedStep`] in which these
    /// fields are no longer optional.
    pub fn validate(self) -> Result<ValidatedStep<S, A>, BufferError> {
        let curr_available_actions = self.curr_available_actions.ok_or_else(|| {
            BufferError::invalid_argument("curr_available_actions must not be None")
        })?;
        let next_available_actions = self.next_available_actions.ok_or_else(|| {
            BufferError::invalid_argument("next_available_actions must not be None")
        })?;
        let next_state = self
            .next_state
            .ok_or_else(|| BufferError::invalid_argument("next_state must not be None"))?;

        Ok(ValidatedStep {
            state: self.state,
            action: self.action,
            reward: self.reward,
            terminated: self.terminated,
            curr_available_actions,
            next_state,
            next_available_actions,
            max_number_actions: self.max_number_actions,
            cost: self.cost,
        })
    }
}

/// A [`StepReport`] whose required fields have been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedStep<S, A> {
    /// State the action was taken in.
    pub state: S,

    /// Action taken.
    pub action: A,

    /// Reward received.
    pub reward: f32,

    /// Flag denoting that this step ended the episode.
    pub terminated: bool,

    /// Actions available in `state`.
    pub curr_available_actions: Vec<A>,

    /// State reached after the action.
    pub next_state: S,

    /// Actions available in `next_state`.
    pub next_available_actions: Vec<A>,

    /// Number of slots the action sets are padded to.
    pub max_number_actions: Option<usize>,

    /// Cost of the step.
    pub cost: Option<f32>,
}
