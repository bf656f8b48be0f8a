// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Validator tuning.

use std::num::NonZeroUsize;
use std::thread;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Knobs for a validation run. Results never depend on them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Worker threads for the per-flight phase. `None` uses the host's
    /// available parallelism. Always capped at the flight count.
    pub workers: Option<usize>,
}

impl ValidatorConfig {
    /// Config pinned to `workers` threads.
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: Some(workers),
        }
    }

    /// Rejects a zero worker count.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.workers == Some(0) {
            return Err(ValidationError::InvalidConfig("workers must be at least 1"));
        }
        Ok(())
    }

    /// Worker count for a run over `flights` flights (at least 1).
    pub fn effective_workers(&self, flights: usize) -> usize {
        let requested = self
            .workers
            .unwrap_or_else(|| thread::available_parallelism().map_or(1, NonZeroUsize::get));
        requested.min(flights).max(1)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn zero_workers_rejected() {
        assert!(ValidatorConfig::with_workers(0).validate().is_err());
        assert!(ValidatorConfig::with_workers(1).validate().is_ok());
        assert!(ValidatorConfig::default().validate().is_ok());
    }

    #[test]
    fn workers_capped_by_flight_count() {
        assert_eq!(ValidatorConfig::with_workers(8).effective_workers(3), 3);
        assert_eq!(ValidatorConfig::with_workers(8).effective_workers(0), 1);
        assert!(ValidatorConfig::default().effective_workers(1_000) >= 1);
    }

    #[test]
    fn missing_fields_default() {
        let cfg: ValidatorConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(cfg, ValidatorConfig::default());
    }
}
