//! Session weather context for condition-adjusted acceptance checks.
//!
//! Refrigerant charge tolerances shift with outdoor conditions, so the
//! parent session can supply outdoor dry bulb and relative humidity
//! alongside a reading. Both fields are optional: a missing outdoor
//! temperature falls back through the reading's own outdoor field to
//! [`DEFAULT_OUTDOOR_TEMP_F`] rather than failing the computation.

use serde::{Deserialize, Serialize};

/// Default outdoor dry bulb (°F) assumed when neither the session
/// weather nor the reading supplies one.
///
/// Kept public and explicit (rather than buried in a routine) so tests
/// and collaborators can reference the exact fallback value.
pub const DEFAULT_OUTDOOR_TEMP_F: f64 = 95.0;

/// Outdoor conditions recorded on the parent session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherContext {
    /// Outdoor dry bulb temperature (°F)
    #[serde(default)]
    pub outdoor_temp_f: Option<f64>,

    /// Outdoor relative humidity (%)
    #[serde(default)]
    pub outdoor_rh_pct: Option<f64>,
}

impl WeatherContext {
    /// Creates a weather context from optional session fields.
    pub fn new(outdoor_temp_f: Option<f64>, outdoor_rh_pct: Option<f64>) -> Self {
        Self {
            outdoor_temp_f,
            outdoor_rh_pct,
        }
    }
}

/// Resolves the outdoor dry bulb used for charge checks.
///
/// Precedence: session weather, then the reading's own outdoor field,
/// then [`DEFAULT_OUTDOOR_TEMP_F`]. This chain affects which acceptance
/// band applies, so it must not be reordered.
pub fn resolve_outdoor_temp_f(
    weather: Option<&WeatherContext>,
    reading_outdoor_f: Option<f64>,
) -> f64 {
    weather
        .and_then(|w| w.outdoor_temp_f)
        .or(reading_outdoor_f)
        .unwrap_or(DEFAULT_OUTDOOR_TEMP_F)
}
