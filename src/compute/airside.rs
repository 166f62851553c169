//! Air-side test routines: airflow/static, coil performance, fan
//! recheck, and spatial distribution.

use indexmap::IndexMap;

use crate::calc::{cfm_per_ton, dew_point_f, enthalpy_btu_lb, stats};
use crate::checks::{check_cfm_per_ton, check_supply_dew_point, CheckResult};
use crate::reading::{
    AirflowStaticReading, CoilPerformanceReading, DistributionMixingReading, FanEvapRecheckReading,
};
use crate::result::ComputedResult;

/// Acceptable external static pressure band (in. w.c.).
const STATIC_PRESSURE_MIN_INWC: f64 = 0.3;
const STATIC_PRESSURE_MAX_INWC: f64 = 1.5;

/// Acceptable sensible temperature drop across a DX cooling coil (°F).
const TEMP_DROP_MIN_F: f64 = 8.0;
const TEMP_DROP_MAX_F: f64 = 25.0;

/// Spatial uniformity limits across a traverse grid.
const MAX_TEMP_SPREAD_F: f64 = 5.0;
const MAX_RH_SPREAD_PCT: f64 = 10.0;

/// Shared by the airflow test and the fan recheck, which judge the same
/// band under different check names.
fn static_pressure_check(esp_inwc: f64) -> CheckResult {
    let target = format!(
        "{} - {} in. w.c.",
        STATIC_PRESSURE_MIN_INWC, STATIC_PRESSURE_MAX_INWC
    );
    if esp_inwc < STATIC_PRESSURE_MIN_INWC {
        CheckResult::failing(
            esp_inwc,
            target,
            format!(
                "External static {:.2} in. w.c. is too low - verify pressure taps and fan operation",
                esp_inwc
            ),
        )
    } else if esp_inwc > STATIC_PRESSURE_MAX_INWC {
        CheckResult::failing(
            esp_inwc,
            target,
            format!(
                "External static {:.2} in. w.c. is too high - duct system is overly restrictive",
                esp_inwc
            ),
        )
    } else {
        CheckResult::passing(
            esp_inwc,
            target,
            format!("External static {:.2} in. w.c. is within the acceptable range", esp_inwc),
        )
    }
}

pub(crate) fn airflow_static(r: &AirflowStaticReading) -> ComputedResult {
    let mut calculations = IndexMap::new();
    let mut checks = IndexMap::new();

    // Without a nameplate tonnage the CFM/ton check is skipped, not failed.
    let mut ratio = None;
    if let Some(tons) = r.tons {
        let value = cfm_per_ton(r.supply_cfm, tons);
        calculations.insert("cfm_per_ton".to_string(), value);
        checks.insert("cfm_per_ton".to_string(), check_cfm_per_ton(value));
        ratio = Some(value);
    }

    checks.insert(
        "external_static".to_string(),
        static_pressure_check(r.external_static_inwc),
    );

    let summary = match ratio {
        Some(value) => format!(
            "{:.0} CFM/ton at {:.2} in. w.c. external static",
            value, r.external_static_inwc
        ),
        None => format!(
            "{:.0} CFM at {:.2} in. w.c. external static (no tonnage recorded)",
            r.supply_cfm, r.external_static_inwc
        ),
    };
    ComputedResult::new(calculations, checks, summary)
}

pub(crate) fn coil_performance(r: &CoilPerformanceReading) -> ComputedResult {
    let return_dew_point = dew_point_f(r.return_db_f, r.return_rh_pct);
    let supply_dew_point = dew_point_f(r.supply_db_f, r.supply_rh_pct);
    let temp_drop = r.return_db_f - r.supply_db_f;
    let enthalpy_drop =
        enthalpy_btu_lb(r.return_db_f, r.return_rh_pct) - enthalpy_btu_lb(r.supply_db_f, r.supply_rh_pct);

    let mut calculations = IndexMap::new();
    calculations.insert("return_dew_point_f".to_string(), return_dew_point);
    calculations.insert("supply_dew_point_f".to_string(), supply_dew_point);
    calculations.insert(
        "dew_point_drop_f".to_string(),
        return_dew_point - supply_dew_point,
    );
    calculations.insert("temp_drop_f".to_string(), temp_drop);
    calculations.insert("enthalpy_drop_btu_lb".to_string(), enthalpy_drop);

    let mut checks = IndexMap::new();

    let target = format!("{:.0} - {:.0} °F", TEMP_DROP_MIN_F, TEMP_DROP_MAX_F);
    let drop_check = if temp_drop < TEMP_DROP_MIN_F {
        CheckResult::failing(
            temp_drop,
            target,
            format!(
                "Temperature drop {:.1} °F is too low - coil is not removing enough sensible heat",
                temp_drop
            ),
        )
    } else if temp_drop > TEMP_DROP_MAX_F {
        CheckResult::failing(
            temp_drop,
            target,
            format!(
                "Temperature drop {:.1} °F is too high - airflow across the coil may be restricted",
                temp_drop
            ),
        )
    } else {
        CheckResult::passing(
            temp_drop,
            target,
            format!("Temperature drop {:.1} °F is within the acceptable range", temp_drop),
        )
    };
    checks.insert("temperature_drop".to_string(), drop_check);

    checks.insert(
        "supply_dew_point".to_string(),
        check_supply_dew_point(supply_dew_point),
    );

    let summary = format!(
        "Temperature drop {:.1} °F, supply dew point {:.1} °F",
        temp_drop, supply_dew_point
    );
    ComputedResult::new(calculations, checks, summary)
}

pub(crate) fn fan_evap_recheck(r: &FanEvapRecheckReading) -> ComputedResult {
    let supply_dew_point = dew_point_f(r.supply_db_f, r.supply_rh_pct);

    let mut calculations = IndexMap::new();
    calculations.insert("supply_dew_point_f".to_string(), supply_dew_point);

    let mut checks = IndexMap::new();
    checks.insert(
        "supply_dew_point".to_string(),
        check_supply_dew_point(supply_dew_point),
    );
    checks.insert(
        "static_pressure".to_string(),
        static_pressure_check(r.external_static_inwc),
    );

    let summary = format!(
        "Supply dew point {:.1} °F at {:.2} in. w.c. external static",
        supply_dew_point, r.external_static_inwc
    );
    ComputedResult::new(calculations, checks, summary)
}

pub(crate) fn distribution_mixing(r: &DistributionMixingReading) -> ComputedResult {
    let temps: Vec<f64> = r.samples.iter().map(|s| s.temp_f).collect();
    let rhs: Vec<f64> = r.samples.iter().map(|s| s.rh_pct).collect();
    let dew_points: Vec<f64> = r
        .samples
        .iter()
        .map(|s| dew_point_f(s.temp_f, s.rh_pct))
        .collect();

    let temp_stats = stats(&temps);
    let rh_stats = stats(&rhs);
    let dew_point_stats = stats(&dew_points);

    let mut calculations = IndexMap::new();
    calculations.insert("temperature_min_f".to_string(), temp_stats.min);
    calculations.insert("temperature_max_f".to_string(), temp_stats.max);
    calculations.insert("temperature_avg_f".to_string(), temp_stats.avg);
    calculations.insert("temperature_spread_f".to_string(), temp_stats.spread());
    calculations.insert("rh_min_pct".to_string(), rh_stats.min);
    calculations.insert("rh_max_pct".to_string(), rh_stats.max);
    calculations.insert("rh_avg_pct".to_string(), rh_stats.avg);
    calculations.insert("rh_spread_pct".to_string(), rh_stats.spread());
    calculations.insert("dew_point_min_f".to_string(), dew_point_stats.min);
    calculations.insert("dew_point_max_f".to_string(), dew_point_stats.max);
    calculations.insert("dew_point_avg_f".to_string(), dew_point_stats.avg);

    let mut checks = IndexMap::new();

    // An empty grid means the traverse was never entered; skip the
    // uniformity checks rather than passing or failing on zero stats.
    if !r.samples.is_empty() {
        let temp_spread = temp_stats.spread();
        let target = format!("<= {:.0} °F spread", MAX_TEMP_SPREAD_F);
        let temp_check = if temp_spread <= MAX_TEMP_SPREAD_F {
            CheckResult::passing(
                temp_spread,
                target,
                format!("Temperature spread {:.1} °F across the grid indicates good mixing", temp_spread),
            )
        } else {
            CheckResult::failing(
                temp_spread,
                target,
                format!(
                    "Temperature spread {:.1} °F across the grid is too high - air is stratifying or short-circuiting",
                    temp_spread
                ),
            )
        };
        checks.insert("temperature_mixing".to_string(), temp_check);

        let rh_spread = rh_stats.spread();
        let target = format!("<= {:.0} % spread", MAX_RH_SPREAD_PCT);
        let rh_check = if rh_spread <= MAX_RH_SPREAD_PCT {
            CheckResult::passing(
                rh_spread,
                target,
                format!("RH spread {:.1} % across the grid indicates good mixing", rh_spread),
            )
        } else {
            CheckResult::failing(
                rh_spread,
                target,
                format!(
                    "RH spread {:.1} % across the grid is too high - moisture is not evenly distributed",
                    rh_spread
                ),
            )
        };
        checks.insert("rh_mixing".to_string(), rh_check);
    }

    let summary = if r.samples.is_empty() {
        "No grid samples provided".to_string()
    } else {
        format!(
            "{} samples, temperature spread {:.1} °F, RH spread {:.1} %",
            r.samples.len(),
            temp_stats.spread(),
            rh_stats.spread()
        )
    };
    ComputedResult::new(calculations, checks, summary)
}
