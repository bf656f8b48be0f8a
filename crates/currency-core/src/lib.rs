// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! currency-core: pilot currency validation over a personal flight logbook.
//!
//! Flights are loaded into a chronologically sorted [`FlightIndex`]; a fixed
//! catalogue of [`CurrencyRule`]s then inspects every flight against its own
//! history and the [`Validator`] collects the violated regulations per flight.
//!
//! The engine is a finite, in-memory batch computation: it never mutates the
//! logbook it is handed and either returns the complete violation list or a
//! single [`ValidationError`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::module_name_repetitions
)]

mod aircraft;
mod config;
mod criteria;
mod error;
mod flight;
mod index;
/// Logbook record ingestion: raw classification codes to typed records.
pub mod record;
/// The currency rule catalogue.
pub mod rules;
mod validator;
mod violation;
mod window;

/// Aircraft, aircraft types and their FAA classification enums.
pub use aircraft::{
    Aircraft, AircraftType, Category, Class, EngineType, SimulatedCategoryClass, SimulatorKind,
};
/// Validator tuning (worker count).
pub use config::ValidatorConfig;
/// Aircraft-equivalence predicate used by every lookback query.
pub use criteria::MatchCriteria;
/// Error types for classification data and validation runs.
pub use error::{ClassificationError, ClassificationField, ValidationError};
/// Flight records and their counters.
pub use flight::{Checks, Crew, Flight, FlightId, FlightTimes, Operations};
/// Chronological flight store with binary-searched range queries.
pub use index::FlightIndex;
/// Record ingestion entry points.
pub use record::{Logbook, RecordError};
/// Rule abstraction and catalogue constructor.
pub use rules::{catalogue, CurrencyRule};
/// Orchestration entry points.
pub use validator::{execute_parallel, execute_serial, validate, Validator};
/// Violation kinds and the per-flight report entry.
pub use violation::{FlightViolations, Violation};
/// Calendar lookback arithmetic.
pub use window::TimeWindow;
