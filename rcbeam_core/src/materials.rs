//! # Reinforcement Materials
//!
//! Steel grade definitions for tension reinforcement per IS 456:2000.
//! The grade fixes the characteristic yield stress fy used by the
//! Annex G moment expression; no other fy values are reachable.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::materials::SteelGrade;
//!
//! let grade = SteelGrade::Fe415;
//! assert_eq!(grade.yield_stress_mpa(), 415.0);
//! assert_eq!(grade.display_name(), "Fe 415");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CalcError;

/// Reinforcing steel grade per IS 456:2000.
///
/// The variant fixes fy exactly: Fe 250 → 250 MPa, Fe 415 → 415 MPa,
/// Fe 500 → 500 MPa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// Mild steel (fy = 250 MPa)
    Fe250,
    /// High-strength deformed bars (fy = 415 MPa)
    Fe415,
    /// High-strength deformed bars (fy = 500 MPa)
    Fe500,
}

impl SteelGrade {
    /// All grades for iteration (e.g., building a selection menu)
    pub const ALL: [SteelGrade; 3] = [SteelGrade::Fe250, SteelGrade::Fe415, SteelGrade::Fe500];

    /// Characteristic yield stress fy (MPa)
    pub fn yield_stress_mpa(&self) -> f64 {
        match self {
            SteelGrade::Fe250 => 250.0,
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Fe250 => "Fe 250",
            SteelGrade::Fe415 => "Fe 415",
            SteelGrade::Fe500 => "Fe 500",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    /// Parse from display form ("Fe 415"), compact form ("fe415"), or
    /// bare yield stress ("415").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match normalized.as_str() {
            "fe250" | "250" => Ok(SteelGrade::Fe250),
            "fe415" | "415" => Ok(SteelGrade::Fe415),
            "fe500" | "500" => Ok(SteelGrade::Fe500),
            _ => Err(CalcError::invalid_input(
                "steel_grade",
                s,
                "Expected one of: Fe 250, Fe 415, Fe 500",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_stress_mapping() {
        assert_eq!(SteelGrade::Fe250.yield_stress_mpa(), 250.0);
        assert_eq!(SteelGrade::Fe415.yield_stress_mpa(), 415.0);
        assert_eq!(SteelGrade::Fe500.yield_stress_mpa(), 500.0);
    }

    #[test]
    fn test_all_grades_enumerated() {
        // Only three grades are reachable through the selection input.
        assert_eq!(SteelGrade::ALL.len(), 3);
        for grade in SteelGrade::ALL {
            let fy = grade.yield_stress_mpa();
            assert!(fy == 250.0 || fy == 415.0 || fy == 500.0);
        }
    }

    #[test]
    fn test_parse_display_and_compact_forms() {
        assert_eq!("Fe 250".parse::<SteelGrade>().unwrap(), SteelGrade::Fe250);
        assert_eq!("fe415".parse::<SteelGrade>().unwrap(), SteelGrade::Fe415);
        assert_eq!("500".parse::<SteelGrade>().unwrap(), SteelGrade::Fe500);
        assert!("Fe 550".parse::<SteelGrade>().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let json = serde_json::to_string(&SteelGrade::Fe415).unwrap();
        let roundtrip: SteelGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, SteelGrade::Fe415);
    }
}
