//! Refrigerant saturation approximations and circuit diagnostics.
//!
//! The saturation curves here are piecewise-linear field approximations,
//! not property tables. They are accurate enough for commissioning
//! charge checks; anything needing certification-grade numbers should
//! substitute real tables behind [`Refrigerant`] without touching the
//! calling routines.

use serde::{Deserialize, Serialize};

/// Refrigerants with a saturation approximation.
///
/// Unknown refrigerant names map to [`Refrigerant::Generic`], a crude
/// linear curve that keeps the diagnostics defined rather than failing
/// the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Refrigerant {
    /// R-410A, the default for the rooftop units these tests target
    R410A,
    /// Fallback linear approximation for unrecognized refrigerants
    Generic,
}

impl Refrigerant {
    /// Maps a free-text refrigerant name to a known curve.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "R-410A" | "R410A" => Refrigerant::R410A,
            _ => Refrigerant::Generic,
        }
    }

    /// Saturation temperature (°F) at the given gauge pressure (PSIG).
    ///
    /// R-410A uses a piecewise-linear fit with breakpoints at 50, 100,
    /// and 200 PSI:
    ///
    /// ```text
    /// P ≤ 50:   −20 + 1.6·P
    /// P ≤ 100:   60 + 1.2·(P − 50)
    /// P ≤ 200:  120 + 0.8·(P − 100)
    /// P > 200:  200 + 0.4·(P − 200)
    /// ```
    ///
    /// The segments are continuous at the breakpoints. The generic curve
    /// is `32 + 0.5·P`.
    pub fn saturation_temp_f(self, psig: f64) -> f64 {
        match self {
            Refrigerant::R410A => {
                if psig <= 50.0 {
                    -20.0 + 1.6 * psig
                } else if psig <= 100.0 {
                    60.0 + 1.2 * (psig - 50.0)
                } else if psig <= 200.0 {
                    120.0 + 0.8 * (psig - 100.0)
                } else {
                    200.0 + 0.4 * (psig - 200.0)
                }
            }
            Refrigerant::Generic => 32.0 + 0.5 * psig,
        }
    }
}

impl Default for Refrigerant {
    fn default() -> Self {
        Refrigerant::R410A
    }
}

/// Superheat (°F): suction line temperature minus saturation
/// temperature at suction pressure.
pub fn superheat_f(suction_line_temp_f: f64, suction_psig: f64, refrigerant: Refrigerant) -> f64 {
    suction_line_temp_f - refrigerant.saturation_temp_f(suction_psig)
}

/// Subcooling (°F): saturation temperature at liquid pressure minus
/// liquid line temperature.
pub fn subcooling_f(liquid_line_temp_f: f64, liquid_psig: f64, refrigerant: Refrigerant) -> f64 {
    refrigerant.saturation_temp_f(liquid_psig) - liquid_line_temp_f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r410a_segments_continuous_at_breakpoints() {
        let r = Refrigerant::R410A;
        assert_eq!(r.saturation_temp_f(50.0), 60.0);
        assert_eq!(r.saturation_temp_f(100.0), 120.0);
        assert_eq!(r.saturation_temp_f(200.0), 200.0);
    }

    #[test]
    fn test_r410a_interior_points() {
        let r = Refrigerant::R410A;
        // 118 PSI: 120 + 0.8*(118-100) = 134.4
        assert!((r.saturation_temp_f(118.0) - 134.4).abs() < 1e-9);
        // 285 PSI: 200 + 0.4*(285-200) = 234.0
        assert!((r.saturation_temp_f(285.0) - 234.0).abs() < 1e-9);
        // 25 PSI: -20 + 1.6*25 = 20.0
        assert!((r.saturation_temp_f(25.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_generic_fallback_curve() {
        let r = Refrigerant::from_name("R-22");
        assert_eq!(r, Refrigerant::Generic);
        assert_eq!(r.saturation_temp_f(100.0), 82.0);
    }

    #[test]
    fn test_from_name_accepts_both_spellings() {
        assert_eq!(Refrigerant::from_name("R-410A"), Refrigerant::R410A);
        assert_eq!(Refrigerant::from_name("r410a"), Refrigerant::R410A);
    }

    #[test]
    fn test_superheat_and_subcooling() {
        // Suction 45°F at 118 PSI: 45 - 134.4 = -89.4
        let sh = superheat_f(45.0, 118.0, Refrigerant::R410A);
        assert!((sh - (-89.4)).abs() < 1e-9);

        // Liquid 85°F at 285 PSI: 234.0 - 85 = 149.0
        let sc = subcooling_f(85.0, 285.0, Refrigerant::R410A);
        assert!((sc - 149.0).abs() < 1e-9);
    }
}
