//! Psychrometric approximations for moist air.
//!
//! Field-estimate accuracy only: the dew point uses the Magnus formula
//! and the enthalpy uses a Magnus-form saturation pressure at standard
//! sea-level pressure. Good for commissioning reports, not for
//! certification-grade psychrometrics.

/// Magnus formula coefficient (dimensionless).
const MAGNUS_A: f64 = 17.625;

/// Magnus formula coefficient (°C).
const MAGNUS_B: f64 = 243.04;

/// Lowest relative humidity the formulas accept (%).
///
/// RH of exactly 0 would put a zero inside a logarithm; inputs below
/// this floor are clamped so the primitives stay total.
const MIN_RH_PCT: f64 = 0.1;

fn f_to_c(temp_f: f64) -> f64 {
    (temp_f - 32.0) / 1.8
}

fn c_to_f(temp_c: f64) -> f64 {
    temp_c * 1.8 + 32.0
}

/// Calculates the dew point (°F) from dry bulb (°F) and relative
/// humidity (%).
///
/// # Formula
///
/// Magnus approximation, computed in Celsius:
///
/// ```text
/// γ  = ln(RH/100) + a·T/(b+T)
/// Td = b·γ/(a−γ)
/// ```
///
/// with a = 17.625 and b = 243.04 °C. At RH = 100 the dew point equals
/// the dry bulb exactly; below 100 it is strictly lower. RH is clamped
/// to [0.1, 100].
pub fn dew_point_f(dry_bulb_f: f64, rh_pct: f64) -> f64 {
    let rh = rh_pct.clamp(MIN_RH_PCT, 100.0);
    let t_c = f_to_c(dry_bulb_f);
    let gamma = (rh / 100.0).ln() + MAGNUS_A * t_c / (MAGNUS_B + t_c);
    let dew_c = MAGNUS_B * gamma / (MAGNUS_A - gamma);
    c_to_f(dew_c)
}

/// Calculates approximate moist-air enthalpy (BTU/lb dry air) from dry
/// bulb (°F) and relative humidity (%).
///
/// Uses a Magnus-form saturation vapor pressure and assumes standard
/// sea-level barometric pressure (101.325 kPa):
///
/// ```text
/// W = 0.622·p_v / (101.325 − p_v)
/// h = 0.240·T + W·(1061 + 0.444·T)
/// ```
///
/// Altitude and barometric corrections are deliberately omitted.
pub fn enthalpy_btu_lb(dry_bulb_f: f64, rh_pct: f64) -> f64 {
    let rh = rh_pct.clamp(MIN_RH_PCT, 100.0);
    let t_c = f_to_c(dry_bulb_f);

    // Saturation vapor pressure (kPa), Magnus form.
    let p_sat = 0.6112 * (MAGNUS_A * t_c / (MAGNUS_B + t_c)).exp();
    let p_v = rh / 100.0 * p_sat;

    // Humidity ratio (lb water / lb dry air) at sea level.
    let w = 0.622 * p_v / (101.325 - p_v);

    0.240 * dry_bulb_f + w * (1061.0 + 0.444 * dry_bulb_f)
}
