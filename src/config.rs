//! Runtime configuration
//!
//! [`EngineConfig`] carries the timing and data-generation knobs of the
//! visualizer engine. The binary fills it from command-line flags; tests use
//! [`EngineConfig::default`] or a seeded variant.

use std::time::Duration;

/// Delay between bubble sort animation steps
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(200);

/// How long an array access stays highlighted
pub const DEFAULT_HIGHLIGHT_DURATION: Duration = Duration::from_millis(1000);

/// Number of values in a freshly generated sort dataset
pub const SORT_SAMPLE_LEN: usize = 15;

/// Inclusive bounds of generated sort values
pub const SORT_VALUE_MIN: i64 = 10;
pub const SORT_VALUE_MAX: i64 = 99;

/// Concept ids offered by the picker when none are given on the command line
pub const DEFAULT_CONCEPTS: &[&str] = &[
    "arrays",
    "strings",
    "linked-list",
    "stacks",
    "queues",
    "sorting",
    "trees",
    "graphs",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub step_delay: Duration,
    pub highlight_duration: Duration,
    /// Seed for sort data; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn seeded(seed: u64) -> Self {
        EngineConfig {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            step_delay: DEFAULT_STEP_DELAY,
            highlight_duration: DEFAULT_HIGHLIGHT_DURATION,
            seed: None,
        }
    }
}
