use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Default target probability of recall at review time
pub const DEFAULT_DESIRED_RETENTION: f64 = 0.9;

/// Default cap on any single scheduled interval, in days
pub const DEFAULT_MAXIMUM_INTERVAL_DAYS: f64 = 365.0;

/// Default stability (days) at which a card counts as mastered
pub const DEFAULT_MASTERY_STABILITY_DAYS: f64 = 30.0;

/// Default repetition count for the mastery fallback path
pub const DEFAULT_MASTERY_MIN_REPETITIONS: u32 = 5;

/// Immutable scheduling configuration, passed into every call
///
/// There is deliberately no global scheduler instance; callers construct
/// one of these once and hand it to each function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct SchedulerConfig {
    /// Target retention probability, strictly between 0 and 1
    pub desired_retention: f64,
    /// Upper bound on scheduled intervals, in days
    pub maximum_interval_days: f64,
    /// Stability threshold of the mastery classifier, in days
    pub mastery_stability_days: f64,
    /// Repetition threshold of the mastery classifier's fallback clause
    pub mastery_min_repetitions: u32,
}

impl SchedulerConfig {
    /// Build a validated configuration
    ///
    /// # Errors
    /// * `SchedulerError::InvalidConfiguration` - retention outside (0, 1),
    ///   non-positive maximum interval, or non-positive mastery thresholds
    pub fn new(
        desired_retention: f64,
        maximum_interval_days: f64,
        mastery_stability_days: f64,
        mastery_min_repetitions: u32,
    ) -> Result<Self, SchedulerError> {
        let config = Self {
            desired_retention,
            maximum_interval_days,
            mastery_stability_days,
            mastery_min_repetitions,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants this configuration must satisfy
    ///
    /// Bad configurations fail here, once, rather than on every review.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if !self.desired_retention.is_finite()
            || self.desired_retention <= 0.0
            || self.desired_retention >= 1.0
        {
            return Err(SchedulerError::invalid_configuration(format!(
                "desired_retention must be strictly between 0 and 1, got {}",
                self.desired_retention
            )));
        }
        if !self.maximum_interval_days.is_finite() || self.maximum_interval_days <= 0.0 {
            return Err(SchedulerError::invalid_configuration(format!(
                "maximum_interval_days must be positive, got {}",
                self.maximum_interval_days
            )));
        }
        if !self.mastery_stability_days.is_finite() || self.mastery_stability_days <= 0.0 {
            return Err(SchedulerError::invalid_configuration(format!(
                "mastery_stability_days must be positive, got {}",
                self.mastery_stability_days
            )));
        }
        if self.mastery_min_repetitions == 0 {
            return Err(SchedulerError::invalid_configuration(
                "mastery_min_repetitions must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            desired_retention: DEFAULT_DESIRED_RETENTION,
            maximum_interval_days: DEFAULT_MAXIMUM_INTERVAL_DAYS,
            mastery_stability_days: DEFAULT_MASTERY_STABILITY_DAYS,
            mastery_min_repetitions: DEFAULT_MASTERY_MIN_REPETITIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SchedulerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_retention_out_of_range() {
        assert!(SchedulerConfig::new(0.0, 365.0, 30.0, 5).is_err());
        assert!(SchedulerConfig::new(1.0, 365.0, 30.0, 5).is_err());
        assert!(SchedulerConfig::new(-0.5, 365.0, 30.0, 5).is_err());
        assert!(SchedulerConfig::new(f64::NAN, 365.0, 30.0, 5).is_err());
        assert!(SchedulerConfig::new(0.9, 365.0, 30.0, 5).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_maximum_interval() {
        assert!(SchedulerConfig::new(0.9, 0.0, 30.0, 5).is_err());
        assert!(SchedulerConfig::new(0.9, -10.0, 30.0, 5).is_err());
    }

    #[test]
    fn test_rejects_bad_mastery_thresholds() {
        assert!(SchedulerConfig::new(0.9, 365.0, 0.0, 5).is_err());
        assert!(SchedulerConfig::new(0.9, 365.0, 30.0, 0).is_err());
    }
}
