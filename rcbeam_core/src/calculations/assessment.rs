//! # NDT Assessment Pipeline
//!
//! Runs the full single-beam assessment in strict sequence:
//!
//! 1. Predict fck from (RN, UPV) through the loaded regression model
//! 2. Grade concrete quality from UPV (IS 13311)
//! 3. Check ultimate moment capacity (IS 456 Annex G, option b)
//!
//! Each call is one complete, synchronous pass over fresh inputs.
//! Nothing is cached or persisted, and with a fixed model the pipeline
//! is pure: identical inputs produce identical reports.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::calculations::assessment::{assess, AssessmentInput, InspectionReading};
//! use rcbeam_core::calculations::moment::SectionInput;
//! use rcbeam_core::materials::SteelGrade;
//! use rcbeam_core::model::{RegressionArtifact, StrengthPredictor, ARTIFACT_SCHEMA_VERSION};
//!
//! let predictor = StrengthPredictor::from_artifact(RegressionArtifact {
//!     schema_version: ARTIFACT_SCHEMA_VERSION.to_string(),
//!     features: vec!["rebound_number".into(), "pulse_velocity_kms".into()],
//!     intercept: -25.568,
//!     coefficients: vec![0.782, 8.641],
//!     normalization: None,
//! })?;
//!
//! let input = AssessmentInput {
//!     reading: InspectionReading {
//!         rebound_number: 38.0,
//!         pulse_velocity_kms: 4.2,
//!     },
//!     section: SectionInput {
//!         label: "B-1".to_string(),
//!         width_mm: 300.0,
//!         effective_depth_mm: 500.0,
//!         steel_area_mm2: 1500.0,
//!         steel_grade: SteelGrade::Fe415,
//!     },
//! };
//!
//! let report = assess(&input, &predictor)?;
//! println!("fck = {:.2} MPa, quality: {}", report.fck_mpa, report.quality);
//! # Ok::<(), rcbeam_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::moment::{calculate_moment_capacity, CapacityCheck, SectionInput};
use crate::errors::{CalcError, CalcResult};
use crate::model::StrengthModel;
use crate::quality::ConcreteQuality;

/// One pair of non-destructive test readings from the member under
/// assessment.
///
/// ## JSON Example
///
/// ```json
/// { "rebound_number": 38.0, "pulse_velocity_kms": 4.2 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReading {
    /// Rebound Number from the Schmidt hammer test
    pub rebound_number: f64,

    /// Ultrasonic Pulse Velocity in km/s
    pub pulse_velocity_kms: f64,
}

impl InspectionReading {
    /// Rebound number range the model was trained over
    pub const REBOUND_RANGE: (f64, f64) = (10.0, 60.0);

    /// Pulse velocity range (km/s) the model was trained over
    pub const VELOCITY_RANGE: (f64, f64) = (2.0, 6.0);

    /// Validate readings against the documented instrument ranges.
    ///
    /// Outside these ranges the regression is an extrapolation of
    /// unspecified accuracy, so the core refuses rather than silently
    /// predicting from them.
    pub fn validate(&self) -> CalcResult<()> {
        let (rn_min, rn_max) = Self::REBOUND_RANGE;
        if !self.rebound_number.is_finite()
            || self.rebound_number < rn_min
            || self.rebound_number > rn_max
        {
            return Err(CalcError::invalid_input(
                "rebound_number",
                self.rebound_number.to_string(),
                format!("Rebound number must be within [{rn_min}, {rn_max}]"),
            ));
        }
        let (upv_min, upv_max) = Self::VELOCITY_RANGE;
        if !self.pulse_velocity_kms.is_finite()
            || self.pulse_velocity_kms < upv_min
            || self.pulse_velocity_kms > upv_max
        {
            return Err(CalcError::invalid_input(
                "pulse_velocity_kms",
                self.pulse_velocity_kms.to_string(),
                format!("Pulse velocity must be within [{upv_min}, {upv_max}] km/s"),
            ));
        }
        Ok(())
    }
}

/// Complete input for one assessment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// NDT readings feeding the strength prediction and quality grading
    pub reading: InspectionReading,

    /// Section geometry and reinforcement for the capacity check
    pub section: SectionInput,
}

impl AssessmentInput {
    /// Validate all inputs at the API boundary.
    pub fn validate(&self) -> CalcResult<()> {
        self.reading.validate()?;
        self.section.validate()?;
        Ok(())
    }
}

/// Results of one assessment run.
///
/// A transient value record: recomputed per request, never persisted.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fck_mpa": 40.44,
///   "quality": "Good",
///   "capacity": { "status": "Admissible", "mu_knm": 252.69, "tension_ratio": 0.1026 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Predicted concrete compressive strength fck (MPa)
    pub fck_mpa: f64,

    /// Concrete quality grading from UPV (IS 13311)
    pub quality: ConcreteQuality,

    /// Moment capacity outcome (IS 456 Annex G)
    pub capacity: CapacityCheck,
}

/// Run the full assessment pipeline once.
///
/// The three stages run in strict sequence; the quality grading depends
/// only on UPV, never on the predicted strength. Domain-negative
/// outcomes (a redesign-required section) come back inside the report;
/// errors are reserved for invalid inputs and model failures, so no
/// silent fallback values are ever substituted.
///
/// # Arguments
///
/// * `input` - Readings plus section data (validated here)
/// * `model` - The loaded strength model, shared read-only
///
/// # Returns
///
/// * `Ok(AssessmentReport)` - fck, quality grading and capacity outcome
/// * `Err(CalcError)` - invalid input, prediction failure, or a
///   non-physical predicted strength
pub fn assess(input: &AssessmentInput, model: &dyn StrengthModel) -> CalcResult<AssessmentReport> {
    input.validate()?;

    let fck_mpa = model.predict_fck_mpa(
        input.reading.rebound_number,
        input.reading.pulse_velocity_kms,
    )?;

    let quality = ConcreteQuality::from_pulse_velocity(input.reading.pulse_velocity_kms);

    let capacity = calculate_moment_capacity(&input.section, fck_mpa)?;

    Ok(AssessmentReport {
        fck_mpa,
        quality,
        capacity,
    })
}
