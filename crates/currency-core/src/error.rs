// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for the validation engine.

use std::fmt;

use thiserror::Error;

use crate::aircraft::{Category, Class};
use crate::flight::FlightId;

/// Which classification attribute carried a bad code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassificationField {
    /// Aircraft category.
    Category,
    /// Aircraft class.
    Class,
    /// Engine type.
    EngineType,
    /// Simulator fidelity (BATD/AATD/FTD/FFS).
    SimulatorType,
    /// Simulated category and class (ASEL/…/GL).
    SimulatorCategoryClass,
}

impl fmt::Display for ClassificationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Category => "category",
            Self::Class => "class",
            Self::EngineType => "engine type",
            Self::SimulatorType => "simulator type",
            Self::SimulatorCategoryClass => "simulator category/class",
        })
    }
}

/// Classification data that cannot be trusted for currency logic.
///
/// Always fatal for a validation run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// A code did not match any known enumeration value.
    #[error("unrecognized {field} code {code:?} on aircraft type {type_id:?}")]
    UnrecognizedCode {
        /// Attribute the code was read for.
        field: ClassificationField,
        /// The offending code.
        code: String,
        /// Aircraft type record carrying it.
        type_id: String,
    },
    /// The class is not defined for the category (e.g. helicopter airplane).
    #[error("{class} is not a valid class for category {category} on aircraft type {type_id:?}")]
    InvalidClass {
        /// Offending class.
        class: Class,
        /// Category it was paired with.
        category: Category,
        /// Aircraft type record.
        type_id: String,
    },
    /// The category requires a class and none was recorded.
    #[error("aircraft type {type_id:?} is missing a class")]
    MissingClass {
        /// Aircraft type record.
        type_id: String,
    },
    /// A simulator type record lacks its device fidelity.
    #[error("simulator aircraft type {type_id:?} is missing a simulator type")]
    MissingSimulatorType {
        /// Aircraft type record.
        type_id: String,
    },
}

/// Failure of a whole validation run. No partial results accompany it.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A rule met classification data it cannot interpret.
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    /// Two flights share an identifier; identity-based exclusion would be ambiguous.
    #[error("duplicate flight id: {0}")]
    DuplicateFlight(FlightId),
    /// The validator configuration is unusable.
    #[error("invalid validator config: {0}")]
    InvalidConfig(&'static str),
    /// A rule panicked on a worker thread.
    #[error("a validation worker panicked")]
    WorkerPanicked,
}
