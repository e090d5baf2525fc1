//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The assessment pipeline uses a small, consistent set of SI units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! RcBeam works in the units of IS 456 / IS 13311:
//! - Length: millimetres (mm)
//! - Area: square millimetres (mm²)
//! - Stress/strength: megapascals (MPa = N/mm²)
//! - Moment: newton-millimetres (N·mm), kilonewton-metres (kN·m)
//! - Pulse velocity: kilometres per second (km/s)
//!
//! Calculation structs keep plain `f64` fields with unit-suffixed names
//! (`width_mm`, `fck_mpa`); the newtypes serve the conversion seams.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::units::{NewtonMillimetres, KilonewtonMetres};
//!
//! let raw = NewtonMillimetres(213_808_359.4);
//! let mu: KilonewtonMetres = raw.into();
//! assert!((mu.0 - 213.81).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length and Area Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimetres(pub f64);

// ============================================================================
// Stress Units
// ============================================================================

/// Stress or strength in megapascals (1 MPa = 1 N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimetres
///
/// Natural unit of the Annex G expression when fy is in MPa, Ast in
/// mm² and d in mm.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimetres(pub f64);

/// Moment in kilonewton-metres (reporting unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMetres(pub f64);

impl From<NewtonMillimetres> for KilonewtonMetres {
    fn from(nmm: NewtonMillimetres) -> Self {
        KilonewtonMetres(nmm.0 / 1.0e6)
    }
}

impl From<KilonewtonMetres> for NewtonMillimetres {
    fn from(knm: KilonewtonMetres) -> Self {
        NewtonMillimetres(knm.0 * 1.0e6)
    }
}

// ============================================================================
// Velocity Units
// ============================================================================

/// Ultrasonic pulse velocity in kilometres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KmPerSecond(pub f64);
