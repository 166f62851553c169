//! Typed field readings, one shape per commissioning test type.
//!
//! The surrounding application validates and range-checks raw payloads
//! against per-test-type schemas; [`Reading::from_value`] is the
//! boundary where a loose JSON payload becomes one of these typed
//! variants. Inside the engine nothing is untyped.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// The ten commissioning test types the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestType {
    BuildingPressure,
    PressureDecay,
    ReturnCurbLeakage,
    SlabWallMoisture,
    AirflowStatic,
    RefrigerantCircuit,
    CoilPerformance,
    FanEvapRecheck,
    EconomizerSeal,
    DistributionMixing,
}

impl TestType {
    /// All recognized test types, in reporting order.
    pub const ALL: [TestType; 10] = [
        TestType::BuildingPressure,
        TestType::PressureDecay,
        TestType::ReturnCurbLeakage,
        TestType::SlabWallMoisture,
        TestType::AirflowStatic,
        TestType::RefrigerantCircuit,
        TestType::CoilPerformance,
        TestType::FanEvapRecheck,
        TestType::EconomizerSeal,
        TestType::DistributionMixing,
    ];

    /// Stable string discriminant, as stored by the persistence layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::BuildingPressure => "BUILDING_PRESSURE",
            TestType::PressureDecay => "PRESSURE_DECAY",
            TestType::ReturnCurbLeakage => "RETURN_CURB_LEAKAGE",
            TestType::SlabWallMoisture => "SLAB_WALL_MOISTURE",
            TestType::AirflowStatic => "AIRFLOW_STATIC",
            TestType::RefrigerantCircuit => "REFRIGERANT_CIRCUIT",
            TestType::CoilPerformance => "COIL_PERFORMANCE",
            TestType::FanEvapRecheck => "FAN_EVAP_RECHECK",
            TestType::EconomizerSeal => "ECONOMIZER_SEAL",
            TestType::DistributionMixing => "DISTRIBUTION_MIXING",
        }
    }

    /// Human-readable label for reports and dashboards.
    pub fn display_name(&self) -> &'static str {
        match self {
            TestType::BuildingPressure => "Building Pressure",
            TestType::PressureDecay => "Pressure Decay",
            TestType::ReturnCurbLeakage => "Return/Curb Leakage",
            TestType::SlabWallMoisture => "Slab/Wall Moisture",
            TestType::AirflowStatic => "Airflow & Static",
            TestType::RefrigerantCircuit => "Refrigerant Circuit",
            TestType::CoilPerformance => "Coil Performance",
            TestType::FanEvapRecheck => "Fan/Evap Recheck",
            TestType::EconomizerSeal => "Economizer Seal",
            TestType::DistributionMixing => "Distribution & Mixing",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TestType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUILDING_PRESSURE" => Ok(TestType::BuildingPressure),
            "PRESSURE_DECAY" => Ok(TestType::PressureDecay),
            "RETURN_CURB_LEAKAGE" => Ok(TestType::ReturnCurbLeakage),
            "SLAB_WALL_MOISTURE" => Ok(TestType::SlabWallMoisture),
            "AIRFLOW_STATIC" => Ok(TestType::AirflowStatic),
            "REFRIGERANT_CIRCUIT" => Ok(TestType::RefrigerantCircuit),
            "COIL_PERFORMANCE" => Ok(TestType::CoilPerformance),
            "FAN_EVAP_RECHECK" => Ok(TestType::FanEvapRecheck),
            "ECONOMIZER_SEAL" => Ok(TestType::EconomizerSeal),
            "DISTRIBUTION_MIXING" => Ok(TestType::DistributionMixing),
            other => Err(EngineError::UnknownTestType(other.to_string())),
        }
    }
}

/// Building pressurization reading: pressure differential to outdoors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingPressureReading {
    /// Measured pressure differential (in. w.c.)
    pub delta_p_inwc: f64,
}

/// Duct pressure-decay reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureDecayReading {
    /// Pressure at the start of the hold (in. w.c.)
    pub start_pressure_inwc: f64,
    /// Pressure at the end of the hold (in. w.c.)
    pub end_pressure_inwc: f64,
    /// Hold duration (seconds)
    pub duration_s: f64,
}

/// Return plenum / curb leakage reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnCurbLeakageReading {
    /// Supply-side static pressure (in. w.c.)
    pub supply_static_inwc: f64,
    /// Return-side static pressure (in. w.c.)
    pub return_static_inwc: f64,
    /// Whether smoke was observed escaping during the test
    pub smoke_observed: bool,
    /// Locations where smoke leakage was observed
    #[serde(default)]
    pub leak_locations: Option<Vec<String>>,
}

/// Outcome of the taped-plastic moisture test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoistureTestResult {
    Dry,
    Damp,
    Wet,
}

impl MoistureTestResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoistureTestResult::Dry => "DRY",
            MoistureTestResult::Damp => "DAMP",
            MoistureTestResult::Wet => "WET",
        }
    }
}

/// Slab/wall moisture reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabWallMoistureReading {
    /// Observed condition under the taped plastic sheet
    pub plastic_test: MoistureTestResult,
}

/// Airflow and external static pressure reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirflowStaticReading {
    /// Measured supply airflow (CFM)
    pub supply_cfm: f64,
    /// Nominal unit capacity (tons); omitted when the nameplate was
    /// unavailable, which skips the CFM/ton check
    #[serde(default)]
    pub tons: Option<f64>,
    /// External static pressure (in. w.c.)
    pub external_static_inwc: f64,
}

/// Refrigerant circuit reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefrigerantCircuitReading {
    /// Suction pressure (PSIG)
    pub suction_psi: f64,
    /// Liquid pressure (PSIG)
    pub liquid_psi: f64,
    /// Suction line temperature (°F)
    pub suction_line_temp_f: f64,
    /// Liquid line temperature (°F)
    pub liquid_line_temp_f: f64,
    /// Outdoor dry bulb at the unit (°F), used when the session has no
    /// weather record
    #[serde(default)]
    pub outdoor_temp_f: Option<f64>,
    /// Whether the circuit meters through a TXV (recorded for the
    /// report; does not change the acceptance bands)
    #[serde(default)]
    pub txv_present: Option<bool>,
    /// Refrigerant name; defaults to R-410A
    #[serde(default)]
    pub refrigerant: Option<String>,
}

/// Coil performance reading: entering and leaving air states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoilPerformanceReading {
    /// Return (entering) dry bulb (°F)
    pub return_db_f: f64,
    /// Return relative humidity (%)
    pub return_rh_pct: f64,
    /// Supply (leaving) dry bulb (°F)
    pub supply_db_f: f64,
    /// Supply relative humidity (%)
    pub supply_rh_pct: f64,
}

/// Fan/evaporator recheck reading after corrective work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanEvapRecheckReading {
    /// Supply dry bulb (°F)
    pub supply_db_f: f64,
    /// Supply relative humidity (%)
    pub supply_rh_pct: f64,
    /// External static pressure (in. w.c.)
    pub external_static_inwc: f64,
}

/// Economizer seal reading with the damper commanded fully closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomizerSealReading {
    /// Observed damper position (% open)
    pub damper_position_pct: f64,
    /// Whether air leakage past the closed damper was observed
    pub leakage_observed: bool,
    /// Mixed air temperature (°F), for the effectiveness estimate
    #[serde(default)]
    pub mixed_air_temp_f: Option<f64>,
    /// Return air temperature (°F)
    #[serde(default)]
    pub return_air_temp_f: Option<f64>,
    /// Outside air temperature (°F)
    #[serde(default)]
    pub outside_air_temp_f: Option<f64>,
}

/// One sample point in a distribution/mixing traverse grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSample {
    /// Dry bulb at the sample point (°F)
    pub temp_f: f64,
    /// Relative humidity at the sample point (%)
    pub rh_pct: f64,
}

/// Distribution and mixing reading: a spatial grid of air states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionMixingReading {
    /// Sample points across the occupied zone
    pub samples: Vec<GridSample>,
}

/// A validated reading, one variant per test type.
///
/// The match in [`crate::compute::compute`] is exhaustive over these
/// variants, so adding an eleventh test type is a compile-time-visible
/// gap rather than a silent runtime default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "test_type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reading {
    BuildingPressure(BuildingPressureReading),
    PressureDecay(PressureDecayReading),
    ReturnCurbLeakage(ReturnCurbLeakageReading),
    SlabWallMoisture(SlabWallMoistureReading),
    AirflowStatic(AirflowStaticReading),
    RefrigerantCircuit(RefrigerantCircuitReading),
    CoilPerformance(CoilPerformanceReading),
    FanEvapRecheck(FanEvapRecheckReading),
    EconomizerSeal(EconomizerSealReading),
    DistributionMixing(DistributionMixingReading),
}

impl Reading {
    /// The test type this reading belongs to.
    pub fn test_type(&self) -> TestType {
        match self {
            Reading::BuildingPressure(_) => TestType::BuildingPressure,
            Reading::PressureDecay(_) => TestType::PressureDecay,
            Reading::ReturnCurbLeakage(_) => TestType::ReturnCurbLeakage,
            Reading::SlabWallMoisture(_) => TestType::SlabWallMoisture,
            Reading::AirflowStatic(_) => TestType::AirflowStatic,
            Reading::RefrigerantCircuit(_) => TestType::RefrigerantCircuit,
            Reading::CoilPerformance(_) => TestType::CoilPerformance,
            Reading::FanEvapRecheck(_) => TestType::FanEvapRecheck,
            Reading::EconomizerSeal(_) => TestType::EconomizerSeal,
            Reading::DistributionMixing(_) => TestType::DistributionMixing,
        }
    }

    /// Turns a string discriminant plus loose JSON payload into a typed
    /// reading.
    ///
    /// This is the only place the engine touches untyped data. An
    /// unrecognized discriminant fails with
    /// [`EngineError::UnknownTestType`]; a payload that does not match
    /// its schema fails with [`EngineError::InvalidReading`].
    pub fn from_value(test_type: &str, payload: serde_json::Value) -> Result<Reading, EngineError> {
        fn parse<T: DeserializeOwned>(payload: serde_json::Value) -> Result<T, EngineError> {
            serde_json::from_value(payload).map_err(|e| EngineError::InvalidReading(e.to_string()))
        }

        let reading = match test_type.parse::<TestType>()? {
            TestType::BuildingPressure => Reading::BuildingPressure(parse(payload)?),
            TestType::PressureDecay => Reading::PressureDecay(parse(payload)?),
            TestType::ReturnCurbLeakage => Reading::ReturnCurbLeakage(parse(payload)?),
            TestType::SlabWallMoisture => Reading::SlabWallMoisture(parse(payload)?),
            TestType::AirflowStatic => Reading::AirflowStatic(parse(payload)?),
            TestType::RefrigerantCircuit => Reading::RefrigerantCircuit(parse(payload)?),
            TestType::CoilPerformance => Reading::CoilPerformance(parse(payload)?),
            TestType::FanEvapRecheck => Reading::FanEvapRecheck(parse(payload)?),
            TestType::EconomizerSeal => Reading::EconomizerSeal(parse(payload)?),
            TestType::DistributionMixing => Reading::DistributionMixing(parse(payload)?),
        };
        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_test_type_round_trip() {
        for t in TestType::ALL {
            assert_eq!(t.as_str().parse::<TestType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_test_type() {
        let err = "DUCT_SMELL".parse::<TestType>().unwrap_err();
        assert_eq!(err, EngineError::UnknownTestType("DUCT_SMELL".to_string()));
    }

    #[test]
    fn test_from_value_building_pressure() {
        let reading =
            Reading::from_value("BUILDING_PRESSURE", json!({ "delta_p_inwc": 0.035 })).unwrap();
        assert_eq!(
            reading,
            Reading::BuildingPressure(BuildingPressureReading { delta_p_inwc: 0.035 })
        );
        assert_eq!(reading.test_type(), TestType::BuildingPressure);
    }

    #[test]
    fn test_from_value_optional_fields_default() {
        let reading = Reading::from_value(
            "REFRIGERANT_CIRCUIT",
            json!({
                "suction_psi": 118.0,
                "liquid_psi": 285.0,
                "suction_line_temp_f": 45.0,
                "liquid_line_temp_f": 85.0
            }),
        )
        .unwrap();

        match reading {
            Reading::RefrigerantCircuit(r) => {
                assert_eq!(r.outdoor_temp_f, None);
                assert_eq!(r.txv_present, None);
                assert_eq!(r.refrigerant, None);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_from_value_rejects_malformed_payload() {
        let err =
            Reading::from_value("BUILDING_PRESSURE", json!({ "delta_p": "not a number" }))
                .unwrap_err();
        assert!(matches!(err, EngineError::InvalidReading(_)));
    }

    #[test]
    fn test_from_value_rejects_unknown_type() {
        let err = Reading::from_value("VIBE_CHECK", json!({})).unwrap_err();
        assert!(matches!(err, EngineError::UnknownTestType(_)));
    }

    #[test]
    fn test_moisture_enum_strings() {
        let reading: SlabWallMoistureReading =
            serde_json::from_value(json!({ "plastic_test": "DRY" })).unwrap();
        assert_eq!(reading.plastic_test, MoistureTestResult::Dry);
        assert_eq!(reading.plastic_test.as_str(), "DRY");
    }
}
