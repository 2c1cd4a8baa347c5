//! Single-slot cache of the transition waiting for its next action.
use super::PendingTransition;

/// Holds at most one [`PendingTransition`].
///
/// The cache assumes a single in-flight trajectory. Steps from interleaved
/// trajectories overwrite each other's pending transitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingCache {
    slot: Option<PendingTransition>,
}

impl PendingCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Replaces the pending transition, returning the previous one.
    pub fn set(&mut self, tr: PendingTransition) -> Option<PendingTransition> {
        self.slot.replace(tr)
    }

    /// The pending transition, if any.
    pub fn get(&self) -> Option<&PendingTransition> {
        self.slot.as_ref()
    }

    /// Moves the pending transition out, leaving the cache empty.
    pub fn take(&mut self) -> Option<PendingTransition> {
        self.slot.take()
    }

    /// Returns `true` if a transition is pending and its `next_state` equals
    /// `state` element-wise.
    ///
    /// The comparison is exact. No tolerance is applied to floating point
    /// values.
    pub fn matches(&self, state: &[f32]) -> bool {
        match &self.slot {
            Some(tr) => tr.next_state.as_slice() == state,
            None => false,
        }
    }

    /// Returns `true` if no transition is pending.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::EncodedActionSet;

    fn pending(next_state: Vec<f32>) -> PendingTransition {
        let set = EncodedActionSet {
            actions: vec![0.0],
            action_dim: 1,
            unavailable_mask: vec![false],
        };
        PendingTransition {
            state: vec![0.0],
            action: vec![0.0],
            reward: 1.0,
            next_state,
            curr_available_actions: set.clone(),
            next_available_actions: set,
            cost: None,
        }
    }

    #[test]
    fn test_empty_cache_never_matches() {
        let cache = PendingCache::new();
        assert!(cache.is_empty());
        assert!(cache.get().is_none());
        assert!(!cache.matches(&[0.0]));
        assert!(!cache.matches(&[]));
    }

    #[test]
    fn test_matches_exactly() {
        let mut cache = PendingCache::new();
        cache.set(pending(vec![1.0, 2.0]));

        assert!(cache.matches(&[1.0, 2.0]));
        assert!(!cache.matches(&[1.0, 2.000001]));
        assert!(!cache.matches(&[1.0]));
        assert!(!cache.matches(&[1.0, 2.0, 0.0]));
    }

    #[test]
    fn test_set_overwrites() {
        let mut cache = PendingCache::new();
        assert!(cache.set(pending(vec![1.0])).is_none());

        let prev = cache.set(pending(vec![2.0]));
        assert_eq!(prev.map(|tr| tr.next_state), Some(vec![1.0]));
        assert!(cache.matches(&[2.0]));
        assert!(!cache.matches(&[1.0]));
    }

    #[test]
    fn test_take_empties() {
        let mut cache = PendingCache::new();
        cache.set(pending(vec![1.0]));

        let tr = cache.take();
        assert!(tr.is_some());
        assert!(cache.is_empty());
        assert!(!cache.matches(&[1.0]));
    }
}
