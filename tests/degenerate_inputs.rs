//! Edge values the caller's validation layer allows through must never
//! panic the engine; each primitive's degenerate-case policy surfaces
//! as a defined value in the computed result.

use airproof::compute_from_value;
use serde_json::json;

#[test]
fn zero_hold_duration_yields_zero_decay_rate() {
    let result = compute_from_value(
        "PRESSURE_DECAY",
        json!({ "start_pressure_inwc": 0.5, "end_pressure_inwc": 0.3, "duration_s": 0.0 }),
        None,
    )
    .unwrap();
    assert_eq!(result.calculations["decay_rate_inwc_per_min"], 0.0);
}

#[test]
fn zero_tonnage_yields_zero_ratio_not_a_panic() {
    let result = compute_from_value(
        "AIRFLOW_STATIC",
        json!({ "supply_cfm": 1600.0, "tons": 0.0, "external_static_inwc": 0.5 }),
        None,
    )
    .unwrap();
    assert_eq!(result.calculations["cfm_per_ton"], 0.0);
    assert!(!result.checks["cfm_per_ton"].pass);
}

#[test]
fn zero_humidity_grid_stays_finite() {
    let result = compute_from_value(
        "DISTRIBUTION_MIXING",
        json!({ "samples": [
            { "temp_f": 72.0, "rh_pct": 0.0 },
            { "temp_f": 73.0, "rh_pct": 0.0 }
        ] }),
        None,
    )
    .unwrap();
    assert!(result.calculations["dew_point_avg_f"].is_finite());
}

#[test]
fn empty_grid_skips_uniformity_checks() {
    let result = compute_from_value("DISTRIBUTION_MIXING", json!({ "samples": [] }), None).unwrap();
    assert!(result.checks.is_empty());
    assert!(result.pass);
    assert_eq!(result.calculations["temperature_spread_f"], 0.0);
}

#[test]
fn equal_return_and_outside_temps_report_full_effectiveness() {
    let result = compute_from_value(
        "ECONOMIZER_SEAL",
        json!({
            "damper_position_pct": 1.0,
            "leakage_observed": false,
            "mixed_air_temp_f": 70.0,
            "return_air_temp_f": 70.0,
            "outside_air_temp_f": 70.0
        }),
        None,
    )
    .unwrap();
    assert_eq!(result.calculations["economizer_effectiveness_pct"], 100.0);
}

#[test]
fn boundary_pressures_compute_without_panic() {
    for delta_p in [-10.0, 0.0, 10.0] {
        let result =
            compute_from_value("BUILDING_PRESSURE", json!({ "delta_p_inwc": delta_p }), None)
                .unwrap();
        assert!(result.checks["building_pressure"].pass == (0.02..=0.05).contains(&delta_p));
    }
}
