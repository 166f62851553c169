//! Stateless numeric primitives.
//!
//! Pure transformations with no branching on acceptability: the
//! threshold logic lives in [`crate::checks`]. Every function here
//! defines an explicit degenerate-case policy (division by zero, empty
//! input, out-of-domain humidity) and returns a value rather than
//! failing.

mod airflow;
mod psychro;
mod refrigerant;
mod stats;

pub use airflow::{
    cfm_per_ton, decay_rate_inwc_per_min, economizer_effectiveness_pct, pressure_decay_pct,
};
pub use psychro::{dew_point_f, enthalpy_btu_lb};
pub use refrigerant::{subcooling_f, superheat_f, Refrigerant};
pub use stats::{stats, Stats};
