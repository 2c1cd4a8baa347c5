//! FIFO on-policy buffer.
use super::{
    FifoOnPolicyBufferConfig, FifoStore, PendingCache, PendingTransition, SarsaBatch, Transition,
};
use crate::{
    error::BufferError, ActionSetEncoder, ExperienceBufferBase, ReplayBufferBase,
    StateActionEncoder, StepReport,
};
use anyhow::{bail, Result};
use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Buffer assembling single-step reports into SARSA transitions.
///
/// A step `(s_t, a_t, r_t, s_t+1)` cannot be stored right away because
/// `a_t+1`, the action taken from `s_t+1`, is only reported by the following
/// push. The buffer therefore keeps the latest non-terminal step in a
/// [`PendingCache`] and completes it when the next push starts from exactly
/// the same encoded state. Completed transitions go to a [`FifoStore`] that
/// keeps the most recent `capacity` of them.
///
/// * If the next push starts from a different state, the pending transition
///   is overwritten and never stored.
/// * A terminal step is stored immediately, with a copy of its own action in
///   `next_action`. It does not clear the pending cache.
///
/// The buffer tracks a single trajectory. Use one buffer per trajectory when
/// several run at the same time.
pub struct FifoOnPolicyBuffer<E, C>
where
    E: StateActionEncoder,
    C: ActionSetEncoder<Action = E::Action>,
{
    encoder: E,
    action_set_encoder: C,
    pending: PendingCache,
    store: FifoStore<Transition>,
    rng: StdRng,
}

impl<E, C> FifoOnPolicyBuffer<E, C>
where
    E: StateActionEncoder + Default,
    C: ActionSetEncoder<Action = E::Action> + Default,
{
    /// Creates an empty buffer with default encoders.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of complete transitions kept
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Self::with_encoders(capacity, E::default(), C::default())
    }
}

impl<E, C> FifoOnPolicyBuffer<E, C>
where
    E: StateActionEncoder,
    C: ActionSetEncoder<Action = E::Action>,
{
    /// Creates an empty buffer with the given encoders.
    ///
    /// Batches are sampled with the default seed of
    /// [`FifoOnPolicyBufferConfig`]; use [`FifoOnPolicyBuffer::from_config`]
    /// to choose it.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of complete transitions kept
    /// * `encoder` - Encoder of single states and actions
    /// * `action_set_encoder` - Encoder of available-action sets
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `capacity` is zero.
    pub fn with_encoders(
        capacity: usize,
        encoder: E,
        action_set_encoder: C,
    ) -> Result<Self, BufferError> {
        let config = FifoOnPolicyBufferConfig::default().capacity(capacity);
        Self::from_config(&config, encoder, action_set_encoder)
    }

    /// Creates an empty buffer from a configuration and encoders.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity and sampling seed
    /// * `encoder` - Encoder of single states and actions
    /// * `action_set_encoder` - Encoder of available-action sets
    ///
    /// # Returns
    ///
    /// A buffer with an empty pending cache and an empty store
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `config.capacity` is zero.
    pub fn from_config(
        config: &FifoOnPolicyBufferConfig,
        encoder: E,
        action_set_encoder: C,
    ) -> Result<Self, BufferError> {
        let store = FifoStore::new(config.capacity)?;
        info!(
            "Built FIFO on-policy buffer, capacity = {}, seed = {}",
            config.capacity, config.seed
        );

        Ok(Self {
            encoder,
            action_set_encoder,
            pending: PendingCache::new(),
            store,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Maximum number of transitions kept.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Complete transitions, from the oldest to the newest.
    pub fn records(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.store.iter()
    }

    /// Read-only view of the store.
    pub fn store(&self) -> &FifoStore<Transition> {
        &self.store
    }

    /// The transition waiting for its next action, if any.
    pub fn pending(&self) -> Option<&PendingTransition> {
        self.pending.get()
    }

    /// Samples `size` transitions uniformly with replacement.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of transitions in the batch
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer holds no complete transition.
    pub fn sample(&mut self, size: usize) -> Result<SarsaBatch> {
        let len = self.store.len();
        if len == 0 {
            bail!("Cannot sample from an empty buffer");
        }

        let mut batch = SarsaBatch::with_capacity(size);
        for _ in 0..size {
            let ix = self.rng.gen_range(0..len);
            if let Some(tr) = self.store.get(ix) {
                batch.push(ix, tr);
            }
        }

        Ok(batch)
    }

    fn append(&mut self, tr: Transition) {
        if self.store.append(tr).is_some() {
            trace!("Evicted the oldest transition");
        }
    }
}

impl<E, C> ExperienceBufferBase for FifoOnPolicyBuffer<E, C>
where
    E: StateActionEncoder,
    C: ActionSetEncoder<Action = E::Action>,
{
    type Item = StepReport<E::State, E::Action>;

    fn len(&self) -> usize {
        self.store.len()
    }

    fn push(&mut self, step: Self::Item) -> Result<(), BufferError> {
        let step = step.validate()?;

        // Everything fallible happens before the buffer is touched.
        let curr_available_actions = self
            .action_set_encoder
            .encode(step.max_number_actions, &step.curr_available_actions)?;
        let next_available_actions = self
            .action_set_encoder
            .encode(step.max_number_actions, &step.next_available_actions)?;
        let state = self.encoder.encode_state(&step.state)?;
        let action = self.encoder.encode_action(&step.action)?;
        let next_state = self.encoder.encode_state(&step.next_state)?;

        if self.pending.matches(&state) {
            if let Some(tr) = self.pending.take() {
                trace!("Completed the pending transition");
                self.append(tr.complete(action.clone()));
            }
        } else if !self.pending.is_empty() {
            if step.terminated {
                debug!("Pending transition kept over a terminal step without a match");
            } else {
                debug!("State does not continue the pending transition, dropping it");
            }
        }

        if !step.terminated {
            self.pending.set(PendingTransition {
                state,
                action,
                reward: step.reward,
                next_state,
                curr_available_actions,
                next_available_actions,
                cost: step.cost,
            });
        } else {
            trace!("Stored a terminal transition");
            self.append(Transition {
                state,
                next_action: action.clone(),
                action,
                reward: step.reward,
                next_state,
                curr_available_actions,
                next_available_actions,
                terminated: true,
                cost: step.cost,
            });
        }

        Ok(())
    }
}

impl<E, C> ReplayBufferBase for FifoOnPolicyBuffer<E, C>
where
    E: StateActionEncoder + Default,
    C: ActionSetEncoder<Action = E::Action> + Default,
{
    type Config = FifoOnPolicyBufferConfig;
    type Batch = SarsaBatch;

    fn build(config: &Self::Config) -> Result<Self, BufferError> {
        Self::from_config(config, E::default(), C::default())
    }

    fn batch(&mut self, size: usize) -> Result<Self::Batch> {
        self.sample(size)
    }
}
