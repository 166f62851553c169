//! Per-test-type computation routines and the dispatch entry point.
//!
//! Every routine follows the same shape: pull fields from the typed
//! reading, run the needed [`crate::calc`] primitives, judge 1–3
//! [`crate::checks`] against fixed or condition-adjusted thresholds,
//! and assemble a [`ComputedResult`] whose overall verdict is the
//! conjunction of the checks.

mod airside;
mod envelope;
mod refrigerant;

use crate::reading::Reading;
use crate::result::ComputedResult;
use crate::weather::WeatherContext;
use crate::EngineError;

/// Computes the result for a validated reading.
///
/// Pure and infallible: the sum type guarantees a matching routine
/// exists, and every arithmetic degenerate case has a defined value.
/// Only the refrigerant circuit consults the weather context; the other
/// routines judge against fixed criteria.
pub fn compute(reading: &Reading, weather: Option<&WeatherContext>) -> ComputedResult {
    match reading {
        Reading::BuildingPressure(r) => envelope::building_pressure(r),
        Reading::PressureDecay(r) => envelope::pressure_decay(r),
        Reading::ReturnCurbLeakage(r) => envelope::return_curb_leakage(r),
        Reading::SlabWallMoisture(r) => envelope::slab_wall_moisture(r),
        Reading::EconomizerSeal(r) => envelope::economizer_seal(r),
        Reading::AirflowStatic(r) => airside::airflow_static(r),
        Reading::CoilPerformance(r) => airside::coil_performance(r),
        Reading::FanEvapRecheck(r) => airside::fan_evap_recheck(r),
        Reading::DistributionMixing(r) => airside::distribution_mixing(r),
        Reading::RefrigerantCircuit(r) => refrigerant::refrigerant_circuit(r, weather),
    }
}

/// Boundary variant of [`compute`] for callers holding a string
/// discriminant and a loose JSON payload (the persistence layer's
/// stored shape).
pub fn compute_from_value(
    test_type: &str,
    payload: serde_json::Value,
    weather: Option<&WeatherContext>,
) -> Result<ComputedResult, EngineError> {
    let reading = Reading::from_value(test_type, payload)?;
    Ok(compute(&reading, weather))
}
