//! Test result computation engine for HVAC and building-envelope
//! commissioning.
//!
//! Field technicians record raw measurements (pressures, temperatures,
//! humidities, airflow) against commissioning test sessions; this crate
//! turns one raw reading plus optional session weather into a structured
//! [`ComputedResult`]: derived engineering metrics, named pass/fail
//! checks with human-readable targets and diagnostics, and an overall
//! verdict.
//!
//! # Overview
//!
//! - [`reading::Reading`]: Strongly typed reading payloads, one variant
//!   per test type
//! - [`calc`]: Stateless numeric primitives (psychrometrics, refrigerant
//!   saturation, statistics)
//! - [`checks`]: Threshold checks producing uniform [`CheckResult`]
//!   judgments
//! - [`compute`]: One computation routine per test type plus the
//!   dispatch entry point
//!
//! The engine is pure and synchronous: identical inputs produce
//! identical output, nothing is persisted, and every invocation is
//! independent. Persistence, access control, and report layout live in
//! the surrounding application.

use std::fmt;

pub mod calc;
pub mod checks;
pub mod compute;
pub mod reading;
pub mod result;
pub mod weather;

pub use checks::{CheckResult, CheckValue};
pub use compute::{compute, compute_from_value};
pub use reading::{Reading, TestType};
pub use result::ComputedResult;
pub use weather::{WeatherContext, DEFAULT_OUTDOOR_TEMP_F};

/// Errors surfaced at the engine boundary.
///
/// Arithmetic inside the engine never fails; the only failure modes are
/// an unrecognized test-type discriminant and a payload that does not
/// match its test type's schema. Both are per-call: the caller can fall
/// back to persisting the raw reading without a computed result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The test-type discriminant is not one of the ten recognized values.
    UnknownTestType(String),

    /// The reading payload does not match the schema for its test type.
    InvalidReading(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownTestType(name) => {
                write!(f, "Unknown test type: {}", name)
            }
            EngineError::InvalidReading(msg) => write!(f, "Invalid reading: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
