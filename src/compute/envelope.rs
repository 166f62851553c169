//! Building-envelope and enclosure test routines: pressurization,
//! duct decay, curb leakage, slab moisture, and economizer seal.

use indexmap::IndexMap;

use crate::calc::{
    decay_rate_inwc_per_min, economizer_effectiveness_pct, pressure_decay_pct,
};
use crate::checks::{check_building_pressure, CheckResult};
use crate::reading::{
    BuildingPressureReading, EconomizerSealReading, MoistureTestResult, PressureDecayReading,
    ReturnCurbLeakageReading, SlabWallMoistureReading,
};
use crate::result::ComputedResult;

/// Maximum allowable duct leak-down rate (in. w.c./min).
const MAX_DECAY_RATE_INWC_PER_MIN: f64 = 0.01;

/// Maximum allowable supply/return static imbalance (in. w.c.).
const MAX_PRESSURE_IMBALANCE_INWC: f64 = 0.1;

/// Widest a "fully closed" damper may read (% open).
const MAX_CLOSED_DAMPER_PCT: f64 = 5.0;

pub(crate) fn building_pressure(r: &BuildingPressureReading) -> ComputedResult {
    let mut checks = IndexMap::new();
    checks.insert(
        "building_pressure".to_string(),
        check_building_pressure(r.delta_p_inwc),
    );

    let summary = format!("Building pressure {:.3} in. w.c.", r.delta_p_inwc);
    ComputedResult::new(IndexMap::new(), checks, summary)
}

pub(crate) fn pressure_decay(r: &PressureDecayReading) -> ComputedResult {
    let rate = decay_rate_inwc_per_min(r.start_pressure_inwc, r.end_pressure_inwc, r.duration_s);
    let pct = pressure_decay_pct(r.start_pressure_inwc, r.end_pressure_inwc);

    let mut calculations = IndexMap::new();
    calculations.insert("decay_rate_inwc_per_min".to_string(), rate);
    calculations.insert("decay_pct".to_string(), pct);

    let mut checks = IndexMap::new();
    let target = format!("<= {} in. w.c./min", MAX_DECAY_RATE_INWC_PER_MIN);
    let check = if rate <= MAX_DECAY_RATE_INWC_PER_MIN {
        CheckResult::passing(
            rate,
            target,
            format!("Decay rate {:.4} in. w.c./min is within the allowable leak-down limit", rate),
        )
    } else {
        CheckResult::failing(
            rate,
            target,
            format!(
                "Decay rate {:.4} in. w.c./min is too high - duct leakage exceeds the allowable limit",
                rate
            ),
        )
    };
    checks.insert("decay_rate".to_string(), check);

    let summary = format!(
        "Decay {:.4} in. w.c./min ({:.1}% lost over {:.0} s)",
        rate, pct, r.duration_s
    );
    ComputedResult::new(calculations, checks, summary)
}

pub(crate) fn return_curb_leakage(r: &ReturnCurbLeakageReading) -> ComputedResult {
    let imbalance = (r.supply_static_inwc - r.return_static_inwc).abs();

    let mut calculations = IndexMap::new();
    calculations.insert("pressure_imbalance_inwc".to_string(), imbalance);

    let mut checks = IndexMap::new();

    let target = format!("<= {} in. w.c.", MAX_PRESSURE_IMBALANCE_INWC);
    let imbalance_check = if imbalance <= MAX_PRESSURE_IMBALANCE_INWC {
        CheckResult::passing(
            imbalance,
            target,
            format!("Supply/return imbalance {:.3} in. w.c. is within the limit", imbalance),
        )
    } else {
        CheckResult::failing(
            imbalance,
            target,
            format!(
                "Supply/return imbalance {:.3} in. w.c. is too high - check curb gasket and return plenum sealing",
                imbalance
            ),
        )
    };
    checks.insert("pressure_imbalance".to_string(), imbalance_check);

    let smoke_check = if r.smoke_observed {
        let message = match r.leak_locations.as_deref() {
            Some(locations) if !locations.is_empty() => {
                format!("Smoke leakage observed at: {}", locations.join(", "))
            }
            _ => "Smoke leakage observed".to_string(),
        };
        CheckResult::failing("smoke observed", "No smoke leakage", message)
    } else {
        CheckResult::passing(
            "none observed",
            "No smoke leakage",
            "No smoke leakage observed at the curb or return connections",
        )
    };
    checks.insert("smoke_leakage".to_string(), smoke_check);

    let summary = format!(
        "Imbalance {:.3} in. w.c., smoke {}",
        imbalance,
        if r.smoke_observed { "observed" } else { "not observed" }
    );
    ComputedResult::new(calculations, checks, summary)
}

pub(crate) fn slab_wall_moisture(r: &SlabWallMoistureReading) -> ComputedResult {
    let mut checks = IndexMap::new();
    let check = match r.plastic_test {
        MoistureTestResult::Dry => CheckResult::passing(
            r.plastic_test.as_str(),
            "DRY",
            "Plastic sheet test shows the slab/wall is dry",
        ),
        observed => CheckResult::failing(
            observed.as_str(),
            "DRY",
            format!(
                "Plastic sheet test shows {} conditions - surface needs additional drying time before finishes",
                observed.as_str()
            ),
        ),
    };
    checks.insert("moisture".to_string(), check);

    let summary = format!("Plastic sheet test: {}", r.plastic_test.as_str());
    ComputedResult::new(IndexMap::new(), checks, summary)
}

pub(crate) fn economizer_seal(r: &EconomizerSealReading) -> ComputedResult {
    let mut calculations = IndexMap::new();

    // Effectiveness is informational here; the seal verdict rests on the
    // damper position and the leakage observation.
    if let (Some(mixed), Some(ret), Some(oat)) =
        (r.mixed_air_temp_f, r.return_air_temp_f, r.outside_air_temp_f)
    {
        calculations.insert(
            "economizer_effectiveness_pct".to_string(),
            economizer_effectiveness_pct(mixed, ret, oat),
        );
    }

    let mut checks = IndexMap::new();

    let target = format!("<= {} % open", MAX_CLOSED_DAMPER_PCT);
    let damper_check = if r.damper_position_pct <= MAX_CLOSED_DAMPER_PCT {
        CheckResult::passing(
            r.damper_position_pct,
            target,
            format!(
                "Damper reads {:.1} % open, within the fully-closed tolerance",
                r.damper_position_pct
            ),
        )
    } else {
        CheckResult::failing(
            r.damper_position_pct,
            target,
            format!(
                "Damper reads {:.1} % open - actuator is not driving the damper fully closed",
                r.damper_position_pct
            ),
        )
    };
    checks.insert("damper_position".to_string(), damper_check);

    let leakage_check = if r.leakage_observed {
        CheckResult::failing(
            "leakage observed",
            "No leakage past closed damper",
            "Air leakage observed past the closed damper - inspect blade seals",
        )
    } else {
        CheckResult::passing(
            "none observed",
            "No leakage past closed damper",
            "No leakage observed past the closed damper",
        )
    };
    checks.insert("leakage".to_string(), leakage_check);

    let summary = format!(
        "Damper {:.1} % open, leakage {}",
        r.damper_position_pct,
        if r.leakage_observed { "observed" } else { "not observed" }
    );
    ComputedResult::new(calculations, checks, summary)
}
