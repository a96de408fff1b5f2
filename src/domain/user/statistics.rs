//! Scenario performance counters and the ratios derived from them.

use serde::{Deserialize, Serialize};

/// Raw performance counters for a trainee.
///
/// Counters are written directly by the challenge-mode collaborator; no range
/// checks happen here (`perfect_scenarios` is expected, not enforced, to stay
/// at or below `scenarios_completed`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub scenarios_completed: u32,
    /// Best single-scenario score observed.
    pub highest_score: u32,
    /// Scenarios finished at maximum score.
    pub perfect_scenarios: u32,
}

impl UserStatistics {
    pub fn new(scenarios_completed: u32, highest_score: u32, perfect_scenarios: u32) -> Self {
        Self {
            scenarios_completed,
            highest_score,
            perfect_scenarios,
        }
    }

    /// `highest_score / scenarios_completed`, or `0.0` with no completions.
    ///
    /// The numerator is the best score, not a running total.
    pub fn average_score(&self) -> f64 {
        if self.scenarios_completed == 0 {
            return 0.0;
        }
        f64::from(self.highest_score) / f64::from(self.scenarios_completed)
    }

    /// Fraction of completions that were perfect, in `[0, 1]` for consistent
    /// counters, or `0.0` with no completions.
    pub fn success_rate(&self) -> f64 {
        if self.scenarios_completed == 0 {
            return 0.0;
        }
        f64::from(self.perfect_scenarios) / f64::from(self.scenarios_completed)
    }
}
