// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted validator settings.

use currency_core::ValidatorConfig;

use crate::config::Settings;

/// Stored under `validator`; a worker count of zero is rejected on both load
/// and save.
impl Settings for ValidatorConfig {
    const KEY: &'static str = "validator";

    fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}
