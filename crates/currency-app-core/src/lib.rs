// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for currency tooling (config port, settings).
//! Keeps storage adapters thin and the engine free of I/O.

pub mod config;
pub mod settings;
