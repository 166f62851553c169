//! Refrigerant circuit routine: superheat and subcooling against
//! outdoor-adjusted charge bands.

use indexmap::IndexMap;

use crate::calc::{subcooling_f, superheat_f, Refrigerant};
use crate::checks::{check_subcooling, check_superheat};
use crate::reading::RefrigerantCircuitReading;
use crate::result::ComputedResult;
use crate::weather::{resolve_outdoor_temp_f, WeatherContext};

pub(crate) fn refrigerant_circuit(
    r: &RefrigerantCircuitReading,
    weather: Option<&WeatherContext>,
) -> ComputedResult {
    let refrigerant = r
        .refrigerant
        .as_deref()
        .map(Refrigerant::from_name)
        .unwrap_or_default();

    // Session weather, then the reading's own outdoor field, then the
    // fixed default. The resolved value selects the acceptance bands.
    let outdoor_temp = resolve_outdoor_temp_f(weather, r.outdoor_temp_f);

    let suction_saturation = refrigerant.saturation_temp_f(r.suction_psi);
    let liquid_saturation = refrigerant.saturation_temp_f(r.liquid_psi);
    let superheat = superheat_f(r.suction_line_temp_f, r.suction_psi, refrigerant);
    let subcooling = subcooling_f(r.liquid_line_temp_f, r.liquid_psi, refrigerant);

    let mut calculations = IndexMap::new();
    calculations.insert("suction_saturation_f".to_string(), suction_saturation);
    calculations.insert("liquid_saturation_f".to_string(), liquid_saturation);
    calculations.insert("superheat_f".to_string(), superheat);
    calculations.insert("subcooling_f".to_string(), subcooling);
    calculations.insert("outdoor_temp_f".to_string(), outdoor_temp);

    let mut checks = IndexMap::new();
    checks.insert(
        "superheat".to_string(),
        check_superheat(superheat, outdoor_temp),
    );
    checks.insert(
        "subcooling".to_string(),
        check_subcooling(subcooling, outdoor_temp),
    );

    let summary = format!(
        "Superheat {:.1} °F, subcooling {:.1} °F at {:.0} °F outdoor",
        superheat, subcooling, outdoor_temp
    );
    ComputedResult::new(calculations, checks, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::DEFAULT_OUTDOOR_TEMP_F;

    fn circuit() -> RefrigerantCircuitReading {
        RefrigerantCircuitReading {
            suction_psi: 118.0,
            liquid_psi: 285.0,
            suction_line_temp_f: 45.0,
            liquid_line_temp_f: 85.0,
            outdoor_temp_f: None,
            txv_present: None,
            refrigerant: None,
        }
    }

    #[test]
    fn test_scenario_defaults_to_95_outdoor() {
        let result = refrigerant_circuit(&circuit(), None);

        // Piecewise saturation: 118 PSI -> 134.4°F, 285 PSI -> 234.0°F
        assert!((result.calculations["suction_saturation_f"] - 134.4).abs() < 1e-9);
        assert!((result.calculations["liquid_saturation_f"] - 234.0).abs() < 1e-9);
        assert!((result.calculations["superheat_f"] - (-89.4)).abs() < 1e-9);
        assert!((result.calculations["subcooling_f"] - 149.0).abs() < 1e-9);
        assert_eq!(result.calculations["outdoor_temp_f"], DEFAULT_OUTDOOR_TEMP_F);

        // Both far outside the 8-15 band at the default outdoor temp
        assert!(!result.checks["superheat"].pass);
        assert!(!result.checks["subcooling"].pass);
        assert!(!result.pass);
    }

    #[test]
    fn test_session_weather_selects_band() {
        let mut reading = circuit();
        // 10°F superheat: passes the base band, fails the hot band
        reading.suction_line_temp_f = 134.4 + 13.0;
        reading.liquid_line_temp_f = 234.0 - 12.0;

        let mild = WeatherContext::new(Some(95.0), None);
        let result = refrigerant_circuit(&reading, Some(&mild));
        assert!(result.checks["superheat"].pass);

        let hot = WeatherContext::new(Some(105.0), None);
        let result = refrigerant_circuit(&reading, Some(&hot));
        assert!(!result.checks["superheat"].pass);
    }

    #[test]
    fn test_reading_outdoor_used_without_session_weather() {
        let mut reading = circuit();
        reading.outdoor_temp_f = Some(70.0);
        reading.suction_line_temp_f = 134.4 + 11.0; // 11°F superheat, inside the cold band's 10-18
        reading.liquid_line_temp_f = 234.0 - 8.0; // 8°F subcooling, inside the cold band's 6-12

        let result = refrigerant_circuit(&reading, None);
        assert_eq!(result.calculations["outdoor_temp_f"], 70.0);
        assert!(result.checks["superheat"].pass);
        assert!(result.checks["subcooling"].pass);
    }

    #[test]
    fn test_unknown_refrigerant_uses_generic_curve() {
        let mut reading = circuit();
        reading.refrigerant = Some("R-22".to_string());
        let result = refrigerant_circuit(&reading, None);
        // Generic curve: 32 + 0.5*118 = 91.0
        assert!((result.calculations["suction_saturation_f"] - 91.0).abs() < 1e-9);
    }
}
