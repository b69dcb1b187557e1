//! Threshold configuration parameters.
//!
//! A [`ThresholdConfig`] is the serialisable form of a detector's setup:
//! the two band bounds plus the state to start in.  It can be stored
//! alongside the rest of an application's settings and turned into a
//! [`Threshold`](crate::Threshold) with
//! [`Threshold::from_config`](crate::Threshold::from_config).
//!
//! The bounds may be given in either order; `low`/`high` name the caller's
//! intent, the detector normalises them.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig<T> {
    /// Lower bound of the hysteresis band.
    pub low: T,
    /// Upper bound of the hysteresis band.
    pub high: T,
    /// State the detector starts in.  Defaults to `false` when absent.
    #[serde(default)]
    pub initial_state: bool,
}

impl<T: PartialOrd + Copy> ThresholdConfig<T> {
    /// Single cutoff: both bounds equal, starting low.
    pub fn single(threshold: T) -> Self {
        Self::band(threshold, threshold)
    }

    /// Two-bound band, starting low.
    pub fn band(low: T, high: T) -> Self {
        Self {
            low,
            high,
            initial_state: false,
        }
    }

    pub fn with_initial_state(mut self, state: bool) -> Self {
        self.initial_state = state;
        self
    }

    /// Normalised fall threshold, i.e. the smaller bound.
    pub fn fall(&self) -> T {
        if self.low <= self.high { self.low } else { self.high }
    }

    /// Normalised rise threshold, i.e. the larger bound.
    pub fn rise(&self) -> T {
        if self.low > self.high { self.low } else { self.high }
    }

    /// Reject bounds no sample can be ordered against.
    ///
    /// Reversed bounds are accepted: the detector swaps them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, v) in [("low", self.low), ("high", self.high)] {
            if v.partial_cmp(&v).is_none() {
                warn!("rejecting threshold config: `{field}` is unordered");
                return Err(ConfigError::Unordered { field });
            }
        }
        if self.low.partial_cmp(&self.high).is_none() {
            warn!("rejecting threshold config: bounds are not comparable");
            return Err(ConfigError::InvalidBand);
        }
        Ok(())
    }
}
