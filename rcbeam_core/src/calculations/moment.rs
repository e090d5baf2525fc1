//! # Ultimate Moment Capacity
//!
//! Computes the ultimate moment of resistance of a singly reinforced
//! rectangular section per IS 456:2000 Annex G, clause G-1.1(b):
//!
//! ```text
//! Mu = 0.87 · fy · Ast · d · (1 − Ast·fy / (b·d·fck))
//! ```
//!
//! ## Assumptions
//!
//! - Rectangular section, tension reinforcement only
//! - Neutral axis depth within the limiting depth (xu ≤ xu,max)
//! - fy fixed by steel grade per IS 456; fck from the NDT prediction
//!
//! The expression is only valid while the tension ratio
//! `Ast·fy / (b·d·fck)` stays below 1. At or beyond that limit the
//! section is outside the singly-reinforced assumption and the result
//! is a redesign-required outcome, not a number.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::calculations::moment::{calculate_moment_capacity, SectionInput};
//! use rcbeam_core::materials::SteelGrade;
//!
//! let section = SectionInput {
//!     label: "B-1".to_string(),
//!     width_mm: 300.0,
//!     effective_depth_mm: 500.0,
//!     steel_area_mm2: 1500.0,
//!     steel_grade: SteelGrade::Fe415,
//! };
//!
//! let check = calculate_moment_capacity(&section, 20.0).unwrap();
//! assert!(check.is_admissible());
//! println!("Mu = {:.2} kN·m", check.mu_knm().unwrap());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::SteelGrade;
use crate::units::{KilonewtonMetres, NewtonMillimetres};

/// Fixed advisory shown alongside an admissible capacity result.
pub const NEUTRAL_AXIS_NOTE: &str = "Note: Neutral axis depth is assumed within limiting depth \
     (singly reinforced beam - IS 456 Annex G).";

/// Input parameters for the section capacity check.
///
/// All inputs use the SI units of IS 456 (mm, mm², MPa).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "width_mm": 300.0,
///   "effective_depth_mm": 500.0,
///   "steel_area_mm2": 1500.0,
///   "steel_grade": "Fe415"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionInput {
    /// User label for this beam (e.g., "B-1", "First-floor beam at grid C")
    pub label: String,

    /// Beam width b in millimetres
    pub width_mm: f64,

    /// Effective depth d in millimetres
    pub effective_depth_mm: f64,

    /// Area of tension reinforcement Ast in square millimetres
    pub steel_area_mm2: f64,

    /// Grade of reinforcing steel (fixes fy)
    pub steel_grade: SteelGrade,
}

impl SectionInput {
    /// Validate input parameters.
    ///
    /// The core enforces these ranges itself rather than trusting the
    /// presentation layer's min/max bounds, so direct callers get the
    /// same behavior as the CLI.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.width_mm.is_finite() || self.width_mm < 150.0 {
            return Err(CalcError::invalid_input(
                "width_mm",
                self.width_mm.to_string(),
                "Beam width must be at least 150 mm",
            ));
        }
        if !self.effective_depth_mm.is_finite() || self.effective_depth_mm < 200.0 {
            return Err(CalcError::invalid_input(
                "effective_depth_mm",
                self.effective_depth_mm.to_string(),
                "Effective depth must be at least 200 mm",
            ));
        }
        if !self.steel_area_mm2.is_finite() || self.steel_area_mm2 < 1.0 {
            return Err(CalcError::invalid_input(
                "steel_area_mm2",
                self.steel_area_mm2.to_string(),
                "Steel area must be at least 1 mm²",
            ));
        }
        if self.steel_area_mm2 >= self.width_mm * self.effective_depth_mm {
            return Err(CalcError::invalid_input(
                "steel_area_mm2",
                self.steel_area_mm2.to_string(),
                "Steel area exceeds gross section b·d - verify reinforcement",
            ));
        }
        Ok(())
    }

    /// Yield stress fy (MPa) fixed by the selected grade
    pub fn yield_stress_mpa(&self) -> f64 {
        self.steel_grade.yield_stress_mpa()
    }
}

/// Outcome of the section capacity check.
///
/// `RedesignRequired` is a domain result, not an error: the section
/// violates the singly-reinforced assumption (tension ratio ≥ 1) and
/// needs full flexural redesign, possibly as a doubly-reinforced
/// section, which this formula does not cover.
///
/// ## JSON Example
///
/// ```json
/// { "status": "Admissible", "mu_knm": 214.6, "tension_ratio": 0.2075 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status")]
pub enum CapacityCheck {
    /// Section satisfies the singly-reinforced limit; Mu is valid.
    Admissible {
        /// Ultimate moment capacity Mu (kN·m)
        mu_knm: f64,
        /// Tension ratio Ast·fy / (b·d·fck), < 1 here
        tension_ratio: f64,
    },
    /// Tension ratio ≥ 1: outside the Annex G option (b) assumption.
    RedesignRequired {
        /// Tension ratio Ast·fy / (b·d·fck), ≥ 1 here
        tension_ratio: f64,
    },
}

impl CapacityCheck {
    /// Check whether the section passed the singly-reinforced limit
    pub fn is_admissible(&self) -> bool {
        matches!(self, CapacityCheck::Admissible { .. })
    }

    /// Ultimate moment capacity, if the section is admissible
    pub fn mu_knm(&self) -> Option<f64> {
        match self {
            CapacityCheck::Admissible { mu_knm, .. } => Some(*mu_knm),
            CapacityCheck::RedesignRequired { .. } => None,
        }
    }

    /// Tension ratio Ast·fy / (b·d·fck) for either outcome
    pub fn tension_ratio(&self) -> f64 {
        match self {
            CapacityCheck::Admissible { tension_ratio, .. } => *tension_ratio,
            CapacityCheck::RedesignRequired { tension_ratio } => *tension_ratio,
        }
    }
}

/// Calculate the ultimate moment capacity of a singly reinforced
/// rectangular section.
///
/// # Arguments
///
/// * `section` - Geometry and reinforcement (validated here)
/// * `fck_mpa` - Concrete compressive strength, usually the NDT
///   prediction; must be finite and strictly positive
///
/// # Returns
///
/// * `Ok(CapacityCheck::Admissible)` - Mu in kN·m plus the tension ratio
/// * `Ok(CapacityCheck::RedesignRequired)` - tension ratio ≥ 1
/// * `Err(CalcError::InvalidInput)` - geometry out of range
/// * `Err(CalcError::NonPhysicalStrength)` - fck ≤ 0 or non-finite
///   (this is the guard on the b·d·fck denominator: with validated
///   geometry it can only vanish through fck, e.g. a misloaded model
///   predicting 0)
pub fn calculate_moment_capacity(section: &SectionInput, fck_mpa: f64) -> CalcResult<CapacityCheck> {
    section.validate()?;

    // An untrained or extrapolating model can return 0 or a negative
    // strength; reject rather than divide by or invert the ratio.
    if !fck_mpa.is_finite() || fck_mpa <= 0.0 {
        return Err(CalcError::non_physical_strength(fck_mpa));
    }

    let fy = section.yield_stress_mpa();
    let b = section.width_mm;
    let d = section.effective_depth_mm;
    let ast = section.steel_area_mm2;

    let tension_ratio = (ast * fy) / (b * d * fck_mpa);

    if tension_ratio >= 1.0 {
        return Ok(CapacityCheck::RedesignRequired { tension_ratio });
    }

    // Mu = 0.87·fy·Ast·d·(1 − ratio), N·mm with these units
    let mu_raw = NewtonMillimetres(0.87 * fy * ast * d * (1.0 - tension_ratio));
    let mu: KilonewtonMetres = mu_raw.into();

    Ok(CapacityCheck::Admissible {
        mu_knm: mu.0,
        tension_ratio,
    })
}
