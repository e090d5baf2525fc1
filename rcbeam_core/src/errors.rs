//! # Error Types
//!
//! Structured error types for rcbeam_core. These errors carry enough
//! context to understand and fix issues programmatically, and they
//! serialize cleanly to JSON for non-interactive callers.
//!
//! Note that an over-reinforced section ("redesign required") is NOT an
//! error: it is a domain-level outcome reported through
//! [`crate::calculations::moment::CapacityCheck`].
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm < 150.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "width_mm".to_string(),
//!             value: width_mm.to_string(),
//!             reason: "Beam width must be at least 150 mm".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rcbeam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for assessment operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The regression artifact could not be loaded at startup.
    ///
    /// Fatal: no strength prediction (and therefore no assessment)
    /// is possible without the artifact.
    #[error("Artifact load failed: '{path}' - {reason}")]
    ArtifactLoad { path: String, reason: String },

    /// The artifact's call contract was violated (wrong feature arity).
    #[error("Prediction failed: {reason}")]
    Prediction { reason: String },

    /// Predicted concrete strength is zero, negative, or non-finite.
    ///
    /// Guards the tension-ratio denominator b·d·fck; with validated
    /// geometry the denominator can only vanish through fck.
    #[error("Non-physical concrete strength: fck = {fck_mpa} MPa")]
    NonPhysicalStrength { fck_mpa: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an ArtifactLoad error
    pub fn artifact_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ArtifactLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Prediction error
    pub fn prediction(reason: impl Into<String>) -> Self {
        CalcError::Prediction {
            reason: reason.into(),
        }
    }

    /// Create a NonPhysicalStrength error
    pub fn non_physical_strength(fck_mpa: f64) -> Self {
        CalcError::NonPhysicalStrength {
            fck_mpa: format!("{:.2}", fck_mpa),
        }
    }

    /// Check if this is a recoverable error (the caller can fix inputs
    /// and retry). Only an artifact load failure is fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CalcError::ArtifactLoad { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ArtifactLoad { .. } => "ARTIFACT_LOAD",
            CalcError::Prediction { .. } => "PREDICTION",
            CalcError::NonPhysicalStrength { .. } => "NON_PHYSICAL_STRENGTH",
            CalcError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("width_mm", "100", "Beam width must be at least 150 mm");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::artifact_load("fck_model.json", "missing").error_code(),
            "ARTIFACT_LOAD"
        );
        assert_eq!(
            CalcError::non_physical_strength(-3.2).error_code(),
            "NON_PHYSICAL_STRENGTH"
        );
    }

    #[test]
    fn test_recoverability() {
        assert!(!CalcError::artifact_load("fck_model.json", "missing").is_recoverable());
        assert!(CalcError::non_physical_strength(0.0).is_recoverable());
        assert!(CalcError::prediction("expected 2 features, got 3").is_recoverable());
    }
}
