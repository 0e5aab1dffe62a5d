//! Validator configuration.

/// What the walker does when a reference leads back to an object that is
/// still being walked. Objects merely shared along separate paths are walked
/// at each path under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Cut the cycle silently. An `Any` element cut this way does not count
    /// as passing.
    #[default]
    Skip,
    /// Re-entering an object still being walked is an error.
    Reject,
}

/// Settings for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Handling of cyclic references.
    pub cycle_policy: CyclePolicy,
    /// Maximum cascade depth below the root.
    pub max_depth: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            cycle_policy: CyclePolicy::Skip,
            max_depth: 128,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
