//! # rcbeam_core - RC Beam NDT Assessment Engine
//!
//! `rcbeam_core` estimates structural properties of a singly reinforced
//! rectangular RC beam from two non-destructive test readings (Rebound
//! Number and Ultrasonic Pulse Velocity) plus section geometry and
//! reinforcement data:
//!
//! 1. Predict concrete compressive strength fck (MPa) through a
//!    pre-trained regression artifact
//! 2. Grade concrete quality from UPV per IS 13311 (Part 1)
//! 3. Compute ultimate moment capacity Mu (kN·m) per IS 456:2000
//!    Annex G, clause G-1.1(b)
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions over value records; the loaded model
//!   artifact is the only process-wide state, created once and shared
//!   read-only
//! - **JSON-First**: all inputs, results and errors implement
//!   Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Validated at the boundary**: the core enforces its own input
//!   ranges rather than trusting a presentation layer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rcbeam_core::calculations::{assess, AssessmentInput, InspectionReading, SectionInput};
//! use rcbeam_core::materials::SteelGrade;
//! use rcbeam_core::model::StrengthPredictor;
//!
//! let predictor = StrengthPredictor::load("rcbeam_core/assets/fck_model.json")?;
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
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! # Ok::<(), rcbeam_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Moment capacity check and the assessment pipeline
//! - [`model`] - The pre-trained strength prediction artifact
//! - [`quality`] - IS 13311 quality grading from pulse velocity
//! - [`materials`] - Reinforcing steel grades
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod model;
pub mod quality;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{assess, AssessmentInput, AssessmentReport, CapacityCheck, SectionInput};
pub use errors::{CalcError, CalcResult};
pub use model::{StrengthModel, StrengthPredictor};
pub use quality::ConcreteQuality;
