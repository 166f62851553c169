//! Pass/fail acceptance checks.
//!
//! Every check in the engine, shared or inline, produces the same
//! [`CheckResult`] shape: a verdict, the measured value, a
//! human-readable target for the active range, and a message that names
//! the specific failure mode (too low vs too high, never a generic
//! "failed"). Reports and dashboards render these fields directly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The measured value a check was judged on.
///
/// Most checks judge a number; enum-style checks (moisture, smoke)
/// carry the observed state as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckValue {
    Number(f64),
    Text(String),
}

impl From<f64> for CheckValue {
    fn from(v: f64) -> Self {
        CheckValue::Number(v)
    }
}

impl From<&str> for CheckValue {
    fn from(v: &str) -> Self {
        CheckValue::Text(v.to_string())
    }
}

impl From<String> for CheckValue {
    fn from(v: String) -> Self {
        CheckValue::Text(v)
    }
}

impl fmt::Display for CheckValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckValue::Number(n) => write!(f, "{}", n),
            CheckValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One named acceptance judgment inside a computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the measured value met the acceptance criterion
    pub pass: bool,
    /// The value that was judged
    pub value: CheckValue,
    /// Human-readable rendering of the active acceptance range
    pub target: String,
    /// Explanation of the pass, or of the specific failure mode
    pub message: String,
}

impl CheckResult {
    /// Builds a passing judgment.
    pub fn passing(value: impl Into<CheckValue>, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pass: true,
            value: value.into(),
            target: target.into(),
            message: message.into(),
        }
    }

    /// Builds a failing judgment.
    pub fn failing(value: impl Into<CheckValue>, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pass: false,
            value: value.into(),
            target: target.into(),
            message: message.into(),
        }
    }
}

/// Building pressurization: 0.02 to 0.05 in. w.c. relative to outdoors.
pub fn check_building_pressure(delta_p_inwc: f64) -> CheckResult {
    const MIN: f64 = 0.02;
    const MAX: f64 = 0.05;
    let target = "0.02 - 0.05 in. w.c.";

    if delta_p_inwc < MIN {
        CheckResult::failing(
            delta_p_inwc,
            target,
            format!(
                "Building pressure {:.3} in. w.c. is too low - space is under-pressurized relative to outdoors",
                delta_p_inwc
            ),
        )
    } else if delta_p_inwc > MAX {
        CheckResult::failing(
            delta_p_inwc,
            target,
            format!(
                "Building pressure {:.3} in. w.c. is too high - space is over-pressurized relative to outdoors",
                delta_p_inwc
            ),
        )
    } else {
        CheckResult::passing(
            delta_p_inwc,
            target,
            format!(
                "Building pressure {:.3} in. w.c. is within the acceptable range",
                delta_p_inwc
            ),
        )
    }
}

/// Supply airflow per ton: 350 to 400 CFM/ton.
pub fn check_cfm_per_ton(ratio: f64) -> CheckResult {
    const MIN: f64 = 350.0;
    const MAX: f64 = 400.0;
    let target = "350 - 400 CFM/ton";

    if ratio < MIN {
        CheckResult::failing(
            ratio,
            target,
            format!(
                "{:.0} CFM/ton is too low - check fan speed and filter loading",
                ratio
            ),
        )
    } else if ratio > MAX {
        CheckResult::failing(
            ratio,
            target,
            format!(
                "{:.0} CFM/ton is too high - airflow is excessive for the installed capacity",
                ratio
            ),
        )
    } else {
        CheckResult::passing(
            ratio,
            target,
            format!("{:.0} CFM/ton is within the acceptable range", ratio),
        )
    }
}

/// Supply-air dew point: 50 to 55 °F.
pub fn check_supply_dew_point(dew_point_f: f64) -> CheckResult {
    const MIN: f64 = 50.0;
    const MAX: f64 = 55.0;
    let target = "50 - 55 °F";

    if dew_point_f < MIN {
        CheckResult::failing(
            dew_point_f,
            target,
            format!(
                "Supply dew point {:.1} °F is too low - coil is overcooling and risks coil freeze",
                dew_point_f
            ),
        )
    } else if dew_point_f > MAX {
        CheckResult::failing(
            dew_point_f,
            target,
            format!(
                "Supply dew point {:.1} °F is too high - unit is not removing enough moisture",
                dew_point_f
            ),
        )
    } else {
        CheckResult::passing(
            dew_point_f,
            target,
            format!(
                "Supply dew point {:.1} °F is within the acceptable range",
                dew_point_f
            ),
        )
    }
}

/// Acceptance band (°F) for superheat at the given outdoor dry bulb.
///
/// Charge tolerances are condition-dependent; a single fixed band would
/// produce false failures at temperature extremes. Three coarse tiers
/// stand in for the manufacturer's continuous curve: the base band
/// applies at exactly 80 and exactly 100 °F, and the shifted bands
/// engage strictly beyond those boundaries.
fn superheat_band(outdoor_temp_f: f64) -> (f64, f64) {
    if outdoor_temp_f > 100.0 {
        (6.0, 12.0)
    } else if outdoor_temp_f < 80.0 {
        (10.0, 18.0)
    } else {
        (8.0, 15.0)
    }
}

/// Acceptance band (°F) for subcooling at the given outdoor dry bulb.
///
/// Shifts opposite to superheat: hot weather raises the expected
/// subcooling, cold weather lowers it.
fn subcooling_band(outdoor_temp_f: f64) -> (f64, f64) {
    if outdoor_temp_f > 100.0 {
        (10.0, 18.0)
    } else if outdoor_temp_f < 80.0 {
        (6.0, 12.0)
    } else {
        (8.0, 15.0)
    }
}

/// Suction superheat against the outdoor-adjusted band.
pub fn check_superheat(superheat_f: f64, outdoor_temp_f: f64) -> CheckResult {
    let (min, max) = superheat_band(outdoor_temp_f);
    let target = format!("{:.0} - {:.0} °F at {:.0} °F outdoor", min, max, outdoor_temp_f);

    if superheat_f < min {
        CheckResult::failing(
            superheat_f,
            target,
            format!(
                "Superheat {:.1} °F is too low - possible overcharge or low evaporator load",
                superheat_f
            ),
        )
    } else if superheat_f > max {
        CheckResult::failing(
            superheat_f,
            target,
            format!(
                "Superheat {:.1} °F is too high - possible undercharge or refrigerant restriction",
                superheat_f
            ),
        )
    } else {
        CheckResult::passing(
            superheat_f,
            target,
            format!("Superheat {:.1} °F is within the acceptable range", superheat_f),
        )
    }
}

/// Liquid subcooling against the outdoor-adjusted band.
pub fn check_subcooling(subcooling_f: f64, outdoor_temp_f: f64) -> CheckResult {
    let (min, max) = subcooling_band(outdoor_temp_f);
    let target = format!("{:.0} - {:.0} °F at {:.0} °F outdoor", min, max, outdoor_temp_f);

    if subcooling_f < min {
        CheckResult::failing(
            subcooling_f,
            target,
            format!(
                "Subcooling {:.1} °F is too low - possible undercharge",
                subcooling_f
            ),
        )
    } else if subcooling_f > max {
        CheckResult::failing(
            subcooling_f,
            target,
            format!(
                "Subcooling {:.1} °F is too high - possible overcharge or liquid line restriction",
                subcooling_f
            ),
        )
    } else {
        CheckResult::passing(
            subcooling_f,
            target,
            format!(
                "Subcooling {:.1} °F is within the acceptable range",
                subcooling_f
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_pressure_pass() {
        let check = check_building_pressure(0.035);
        assert!(check.pass);
        assert_eq!(check.target, "0.02 - 0.05 in. w.c.");
        assert_eq!(check.value, CheckValue::Number(0.035));
    }

    #[test]
    fn test_building_pressure_too_high() {
        let check = check_building_pressure(0.08);
        assert!(!check.pass);
        assert!(check.message.contains("too high"));
        assert!(check.message.contains("over-pressurized"));
    }

    #[test]
    fn test_building_pressure_too_low() {
        let check = check_building_pressure(0.01);
        assert!(!check.pass);
        assert!(check.message.contains("too low"));
        assert!(check.message.contains("under-pressurized"));
    }

    #[test]
    fn test_building_pressure_boundaries_inclusive() {
        assert!(check_building_pressure(0.02).pass);
        assert!(check_building_pressure(0.05).pass);
    }

    #[test]
    fn test_cfm_per_ton_messages_distinct() {
        let low = check_cfm_per_ton(300.0);
        let high = check_cfm_per_ton(450.0);
        assert!(!low.pass);
        assert!(!high.pass);
        assert!(low.message.contains("too low"));
        assert!(high.message.contains("too high"));
        assert_ne!(low.message, high.message);
    }

    #[test]
    fn test_supply_dew_point_range() {
        assert!(check_supply_dew_point(52.0).pass);
        assert!(!check_supply_dew_point(48.0).pass);
        assert!(!check_supply_dew_point(57.0).pass);
    }

    #[test]
    fn test_superheat_band_tiers() {
        // Base band at moderate outdoor temperatures
        assert_eq!(superheat_band(90.0), (8.0, 15.0));
        // Exactly at the boundaries the base band still applies
        assert_eq!(superheat_band(80.0), (8.0, 15.0));
        assert_eq!(superheat_band(100.0), (8.0, 15.0));
        // Strictly beyond the boundaries the shifted bands engage
        assert_eq!(superheat_band(100.01), (6.0, 12.0));
        assert_eq!(superheat_band(79.99), (10.0, 18.0));
    }

    #[test]
    fn test_subcooling_band_tiers() {
        assert_eq!(subcooling_band(90.0), (8.0, 15.0));
        assert_eq!(subcooling_band(80.0), (8.0, 15.0));
        assert_eq!(subcooling_band(100.0), (8.0, 15.0));
        assert_eq!(subcooling_band(100.01), (10.0, 18.0));
        assert_eq!(subcooling_band(79.99), (6.0, 12.0));
    }

    #[test]
    fn test_superheat_shift_changes_verdict() {
        // 13°F superheat passes the base band but fails the hot-weather band
        assert!(check_superheat(13.0, 95.0).pass);
        assert!(!check_superheat(13.0, 101.0).pass);
        // 9°F passes the base band but fails the cold-weather band
        assert!(check_superheat(9.0, 95.0).pass);
        assert!(!check_superheat(9.0, 75.0).pass);
    }

    #[test]
    fn test_subcooling_shift_changes_verdict() {
        // 9°F subcooling passes the base band but fails the hot-weather band
        assert!(check_subcooling(9.0, 95.0).pass);
        assert!(!check_subcooling(9.0, 101.0).pass);
        // 14°F passes the base band but fails the cold-weather band
        assert!(check_subcooling(14.0, 95.0).pass);
        assert!(!check_subcooling(14.0, 75.0).pass);
    }

    #[test]
    fn test_target_names_active_band() {
        let hot = check_superheat(10.0, 105.0);
        assert!(hot.target.contains("6 - 12"));
        let cold = check_subcooling(10.0, 70.0);
        assert!(cold.target.contains("6 - 12"));
    }
}
