//! Host-side pacing for computer turns.
//!
//! The engine decides instantly. Hosts that animate the computer opponent
//! wait `decision_delay` before asking for a decision and `animation_time`
//! before applying it. These values never influence what is decided.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rules::Phase;

/// Delays a host inserts around computer turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Pause before the computer decides.
    pub decision_delay: Duration,

    /// Time given to the move animation before the turn is finalized.
    pub animation_time: Duration,

    /// Use `fast_forward_delay` for both pauses during the drop phase.
    pub fast_forward_drops: bool,

    /// Shortened pause used when fast-forwarding drops.
    pub fast_forward_delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            decision_delay: Duration::from_millis(1200),
            animation_time: Duration::from_millis(1000),
            fast_forward_drops: false,
            fast_forward_delay: Duration::from_millis(40),
        }
    }
}

impl PacingConfig {
    /// No delays at all, for tests and headless play.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            decision_delay: Duration::ZERO,
            animation_time: Duration::ZERO,
            fast_forward_drops: false,
            fast_forward_delay: Duration::ZERO,
        }
    }

    /// Enable fast-forwarding of drop-phase turns.
    #[must_use]
    pub fn with_fast_forward_drops(mut self, enabled: bool) -> Self {
        self.fast_forward_drops = enabled;
        self
    }

    /// Set the pause before a decision.
    #[must_use]
    pub fn with_decision_delay(mut self, delay: Duration) -> Self {
        self.decision_delay = delay;
        self
    }

    /// Set the animation time.
    #[must_use]
    pub fn with_animation_time(mut self, time: Duration) -> Self {
        self.animation_time = time;
        self
    }

    fn fast(&self, phase: Phase) -> bool {
        self.fast_forward_drops && phase == Phase::Drop
    }

    /// Pause before deciding in the given phase.
    #[must_use]
    pub fn decision_delay(&self, phase: Phase) -> Duration {
        if self.fast(phase) {
            self.fast_forward_delay
        } else {
            self.decision_delay
        }
    }

    /// Animation time for a move in the given phase.
    #[must_use]
    pub fn animation_time(&self, phase: Phase) -> Duration {
        if self.fast(phase) {
            self.fast_forward_delay
        } else {
            self.animation_time
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pacing() {
        let pacing = PacingConfig::default();

        assert_eq!(pacing.decision_delay(Phase::Drop), Duration::from_millis(1200));
        assert_eq!(pacing.animation_time(Phase::Move), Duration::from_millis(1000));
    }

    #[test]
    fn test_fast_forward_only_affects_drops() {
        let pacing = PacingConfig::default().with_fast_forward_drops(true);

        assert_eq!(pacing.decision_delay(Phase::Drop), Duration::from_millis(40));
        assert_eq!(pacing.animation_time(Phase::Drop), Duration::from_millis(40));
        assert_eq!(pacing.decision_delay(Phase::Move), Duration::from_millis(1200));
        assert_eq!(pacing.animation_time(Phase::Destroy), Duration::from_millis(1000));
    }

    #[test]
    fn test_instant() {
        let pacing = PacingConfig::instant().with_fast_forward_drops(true);
        assert_eq!(pacing.decision_delay(Phase::Drop), Duration::ZERO);
        assert_eq!(pacing.animation_time(Phase::Move), Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let pacing = PacingConfig::default().with_decision_delay(Duration::from_millis(500));
        let json = serde_json::to_string(&pacing).unwrap();
        let deserialized: PacingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(pacing, deserialized);
    }
}
