//! # Assessment Calculations
//!
//! This module contains the calculation stages of the beam assessment.
//! Each stage follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - A result type (JSON-serializable)
//! - A pure function `Input -> Result<_, CalcError>`
//!
//! ## Available Calculations
//!
//! - [`moment`] - Ultimate moment capacity per IS 456:2000 Annex G,
//!   clause G-1.1(b) (singly reinforced rectangular section)
//! - [`assessment`] - The full NDT assessment pipeline
//!   (strength prediction → quality grading → moment capacity)

pub mod assessment;
pub mod moment;

// Re-export commonly used types
pub use assessment::{assess, AssessmentInput, AssessmentReport, InspectionReading};
pub use moment::{calculate_moment_capacity, CapacityCheck, SectionInput};
