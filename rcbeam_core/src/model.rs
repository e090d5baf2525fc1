//! # Strength Prediction Model
//!
//! Wraps the pre-trained regression artifact that maps a pair of
//! non-destructive test readings (Rebound Number, Ultrasonic Pulse
//! Velocity) to a concrete compressive strength estimate fck (MPa).
//!
//! The artifact is an opaque collaborator: a JSON file holding the
//! fitted intercept, per-feature coefficients and (optionally) the
//! feature standardization applied during training. It is loaded and
//! validated once at process start and never retrained, reloaded or
//! torn down. Callers that need the formula path without a real
//! artifact (unit tests, mocks) implement [`StrengthModel`] directly.
//!
//! ## Artifact Format
//!
//! ```json
//! {
//!   "schema_version": "1",
//!   "features": ["rebound_number", "pulse_velocity_kms"],
//!   "intercept": -25.57,
//!   "coefficients": [0.78, 8.64],
//!   "normalization": {
//!     "means": [35.0, 4.0],
//!     "scales": [9.5, 0.8]
//!   }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use rcbeam_core::model::{StrengthModel, StrengthPredictor};
//!
//! let predictor = StrengthPredictor::load("rcbeam_core/assets/fck_model.json")?;
//! let fck_mpa = predictor.predict_fck_mpa(38.0, 4.2)?;
//! println!("fck = {:.2} MPa", fck_mpa);
//! # Ok::<(), rcbeam_core::errors::CalcError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Artifact schema version this crate understands
pub const ARTIFACT_SCHEMA_VERSION: &str = "1";

/// Number of features the predictor contract expects: (RN, UPV)
pub const FEATURE_COUNT: usize = 2;

/// Capability required by the assessment pipeline: map two NDT
/// readings to a strength estimate.
///
/// Implemented by [`StrengthPredictor`] for the real artifact; test
/// code supplies fixed-coefficient fixtures through the same trait so
/// the deterministic formula logic stays unit-testable without any
/// artifact file on disk.
pub trait StrengthModel {
    /// Predict concrete compressive strength fck (MPa) from a rebound
    /// number and an ultrasonic pulse velocity (km/s).
    fn predict_fck_mpa(&self, rebound_number: f64, pulse_velocity_kms: f64) -> CalcResult<f64>;
}

/// Per-feature standardization fitted during training (standard-scaler
/// style): `z = (x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Normalization {
    /// Feature means, one per feature
    pub means: Vec<f64>,
    /// Feature scales (standard deviations), one per feature
    pub scales: Vec<f64>,
}

/// Deserialized regression artifact.
///
/// A plain linear model over (optionally standardized) features:
/// `fck = intercept + Σ coefficient_i · z_i`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegressionArtifact {
    /// Schema version of the artifact file
    pub schema_version: String,

    /// Feature names in call order; must be exactly (RN, UPV)
    pub features: Vec<String>,

    /// Fitted intercept (MPa)
    pub intercept: f64,

    /// Fitted coefficients, one per feature
    pub coefficients: Vec<f64>,

    /// Optional training-time feature standardization
    #[serde(default)]
    pub normalization: Option<Normalization>,
}

impl RegressionArtifact {
    /// Check internal consistency. Returns the reason on failure so the
    /// caller can attach source-path context.
    fn check(&self) -> Result<(), String> {
        if self.schema_version != ARTIFACT_SCHEMA_VERSION {
            return Err(format!(
                "schema version {} not supported (expected {})",
                self.schema_version, ARTIFACT_SCHEMA_VERSION
            ));
        }
        if self.features.len() != FEATURE_COUNT {
            return Err(format!(
                "expected {} features (RN, UPV), artifact declares {}",
                FEATURE_COUNT,
                self.features.len()
            ));
        }
        if self.coefficients.len() != self.features.len() {
            return Err(format!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                self.features.len()
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("non-finite intercept or coefficient".to_string());
        }
        if let Some(norm) = &self.normalization {
            if norm.means.len() != self.features.len() || norm.scales.len() != self.features.len() {
                return Err("normalization arrays do not match feature count".to_string());
            }
            if norm.scales.iter().any(|s| !s.is_finite() || *s == 0.0) {
                return Err("normalization scale must be finite and non-zero".to_string());
            }
        }
        Ok(())
    }

    /// Evaluate the model on a raw feature vector.
    ///
    /// Fails with [`CalcError::Prediction`] if the vector arity does
    /// not match the artifact's declared features.
    pub fn evaluate(&self, features: &[f64]) -> CalcResult<f64> {
        if features.len() != self.coefficients.len() {
            return Err(CalcError::prediction(format!(
                "expected {} features, got {}",
                self.coefficients.len(),
                features.len()
            )));
        }

        let mut fck = self.intercept;
        for (i, x) in features.iter().enumerate() {
            let z = match &self.normalization {
                Some(norm) => (x - norm.means[i]) / norm.scales[i],
                None => *x,
            };
            fck += self.coefficients[i] * z;
        }
        Ok(fck)
    }
}

/// Process-wide strength predictor.
///
/// Owns the validated artifact for the process lifetime; all assessment
/// requests share it read-only. There is no reload-on-change path.
#[derive(Debug, Clone)]
pub struct StrengthPredictor {
    artifact: RegressionArtifact,
}

impl StrengthPredictor {
    /// Load and validate the artifact from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(StrengthPredictor)` - Artifact loaded and consistent
    /// * `Err(CalcError::ArtifactLoad)` - File missing, unreadable,
    ///   unparsable, or incompatible with this crate
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let json = fs::read_to_string(path)
            .map_err(|e| CalcError::artifact_load(&display, e.to_string()))?;

        let artifact: RegressionArtifact = serde_json::from_str(&json)
            .map_err(|e| CalcError::artifact_load(&display, e.to_string()))?;

        artifact
            .check()
            .map_err(|reason| CalcError::artifact_load(&display, reason))?;

        Ok(StrengthPredictor { artifact })
    }

    /// Build a predictor from an already-deserialized artifact
    /// (fixtures, embedded models). Applies the same validation as
    /// [`StrengthPredictor::load`].
    pub fn from_artifact(artifact: RegressionArtifact) -> CalcResult<Self> {
        artifact
            .check()
            .map_err(|reason| CalcError::artifact_load("<in-memory>", reason))?;
        Ok(StrengthPredictor { artifact })
    }

    /// Access the underlying artifact (read-only)
    pub fn artifact(&self) -> &RegressionArtifact {
        &self.artifact
    }
}

impl StrengthModel for StrengthPredictor {
    fn predict_fck_mpa(&self, rebound_number: f64, pulse_velocity_kms: f64) -> CalcResult<f64> {
        self.artifact
            .evaluate(&[rebound_number, pulse_velocity_kms])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_artifact() -> RegressionArtifact {
        RegressionArtifact {
            schema_version: ARTIFACT_SCHEMA_VERSION.to_string(),
            features: vec![
                "rebound_number".to_string(),
                "pulse_velocity_kms".to_string(),
            ],
            intercept: -25.568,
            coefficients: vec![0.782, 8.641],
            normalization: None,
        }
    }

    #[test]
    fn test_linear_evaluation() {
        let predictor = StrengthPredictor::from_artifact(fixture_artifact()).unwrap();
        let fck = predictor.predict_fck_mpa(35.0, 4.0).unwrap();
        // -25.568 + 0.782*35 + 8.641*4 = 36.366
        assert!((fck - 36.366).abs() < 1e-9);
    }

    #[test]
    fn test_standardized_evaluation() {
        let mut artifact = fixture_artifact();
        artifact.intercept = 30.0;
        artifact.coefficients = vec![7.0, 5.0];
        artifact.normalization = Some(Normalization {
            means: vec![35.0, 4.0],
            scales: vec![10.0, 0.5],
        });
        let predictor = StrengthPredictor::from_artifact(artifact).unwrap();

        // At the feature means the standardized terms vanish.
        let at_means = predictor.predict_fck_mpa(35.0, 4.0).unwrap();
        assert!((at_means - 30.0).abs() < 1e-9);

        // One scale unit above each mean adds each coefficient once.
        let shifted = predictor.predict_fck_mpa(45.0, 4.5).unwrap();
        assert!((shifted - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_feature_count_rejected() {
        let mut artifact = fixture_artifact();
        artifact.features.push("core_diameter_mm".to_string());
        artifact.coefficients.push(0.1);
        let err = StrengthPredictor::from_artifact(artifact).unwrap_err();
        assert_eq!(err.error_code(), "ARTIFACT_LOAD");
    }

    #[test]
    fn test_coefficient_arity_mismatch_rejected() {
        let mut artifact = fixture_artifact();
        artifact.coefficients.pop();
        let err = StrengthPredictor::from_artifact(artifact).unwrap_err();
        assert_eq!(err.error_code(), "ARTIFACT_LOAD");
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let mut artifact = fixture_artifact();
        artifact.schema_version = "2".to_string();
        let err = StrengthPredictor::from_artifact(artifact).unwrap_err();
        assert_eq!(err.error_code(), "ARTIFACT_LOAD");
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut artifact = fixture_artifact();
        artifact.normalization = Some(Normalization {
            means: vec![35.0, 4.0],
            scales: vec![10.0, 0.0],
        });
        let err = StrengthPredictor::from_artifact(artifact).unwrap_err();
        assert_eq!(err.error_code(), "ARTIFACT_LOAD");
    }

    #[test]
    fn test_evaluate_arity_checked() {
        let predictor = StrengthPredictor::from_artifact(fixture_artifact()).unwrap();
        let err = predictor.artifact().evaluate(&[35.0]).unwrap_err();
        assert_eq!(err.error_code(), "PREDICTION");
    }

    #[test]
    fn test_missing_file_is_artifact_load_error() {
        let err = StrengthPredictor::load("no/such/fck_model.json").unwrap_err();
        assert_eq!(err.error_code(), "ARTIFACT_LOAD");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_artifact_serialization_roundtrip() {
        let artifact = fixture_artifact();
        let json = serde_json::to_string_pretty(&artifact).unwrap();
        let roundtrip: RegressionArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(artifact, roundtrip);
    }

    #[test]
    fn test_normalization_field_optional_in_json() {
        let json = r#"{
            "schema_version": "1",
            "features": ["rebound_number", "pulse_velocity_kms"],
            "intercept": 1.0,
            "coefficients": [0.5, 2.0]
        }"#;
        let artifact: RegressionArtifact = serde_json::from_str(json).unwrap();
        assert!(artifact.normalization.is_none());
        StrengthPredictor::from_artifact(artifact).unwrap();
    }
}
