//! Airflow, pressure-decay, and economizer arithmetic.

/// Supply airflow per ton of cooling capacity (CFM/ton).
///
/// Returns 0 when `tons` is 0 so an incomplete reading degrades to an
/// obviously-failing ratio instead of a division error.
pub fn cfm_per_ton(supply_cfm: f64, tons: f64) -> f64 {
    if tons == 0.0 {
        return 0.0;
    }
    supply_cfm / tons
}

/// Pressure decay rate (in. w.c./min) over an elapsed interval.
///
/// Returns 0 when `elapsed_s` is 0.
pub fn decay_rate_inwc_per_min(start_inwc: f64, end_inwc: f64, elapsed_s: f64) -> f64 {
    if elapsed_s == 0.0 {
        return 0.0;
    }
    (start_inwc - end_inwc) / elapsed_s * 60.0
}

/// Percentage of the starting pressure lost over the test interval.
///
/// Returns 0 when the starting pressure is 0.
pub fn pressure_decay_pct(start_inwc: f64, end_inwc: f64) -> f64 {
    if start_inwc == 0.0 {
        return 0.0;
    }
    (start_inwc - end_inwc) / start_inwc * 100.0
}

/// Economizer effectiveness (%): how much of the mixed-air stream came
/// through the outside-air path, inferred from the three temperatures.
///
/// ```text
/// ε = (T_return − T_mixed) / (T_return − T_outside) × 100
/// ```
///
/// Clamped to [0, 100]. When return and outside temperatures are equal
/// the ratio is undefined; that degenerate-but-valid condition reports
/// 100.
pub fn economizer_effectiveness_pct(mixed_f: f64, return_f: f64, outside_f: f64) -> f64 {
    if return_f == outside_f {
        return 100.0;
    }
    let pct = (return_f - mixed_f) / (return_f - outside_f) * 100.0;
    pct.clamp(0.0, 100.0)
}
