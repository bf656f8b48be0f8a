// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for the currency crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`aircraft`] - Aircraft presets (trainer, tailwheel, twin, jet, helicopter, simulators)
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`flight`] - Flight builder and date helper

pub mod aircraft;
pub mod config;
pub mod flight;

// Re-export commonly used items at crate root for convenience
pub use aircraft::{
    baron, boeing_737, cessna_172, full_flight_simulator, piper_cub, robinson_r44,
    training_device, AircraftBuilder,
};
pub use config::InMemoryConfigStore;
pub use flight::{at, FlightBuilder};
