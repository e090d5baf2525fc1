//! # Concrete Quality Classification
//!
//! Maps an ultrasonic pulse velocity reading to the IS 13311 (Part 1)
//! quality grading. This is a pure, total function of UPV alone; the
//! predicted strength plays no part in it.
//!
//! | UPV (km/s)      | Grading   |
//! |-----------------|-----------|
//! | ≥ 4.5           | Excellent |
//! | 3.5 – 4.5       | Good      |
//! | 3.0 – 3.5       | Medium    |
//! | < 3.0           | Poor      |
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::quality::ConcreteQuality;
//!
//! assert_eq!(ConcreteQuality::from_pulse_velocity(4.7), ConcreteQuality::Excellent);
//! assert_eq!(ConcreteQuality::from_pulse_velocity(2.4), ConcreteQuality::Poor);
//! ```

use serde::{Deserialize, Serialize};

/// Concrete quality grading per IS 13311 (Part 1), Table 2.
///
/// Ordinal: `Poor < Medium < Good < Excellent` (variant order carries
/// the derived ordering).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ConcreteQuality {
    /// UPV below 3.0 km/s
    Poor,
    /// UPV in [3.0, 3.5) km/s
    Medium,
    /// UPV in [3.5, 4.5) km/s
    Good,
    /// UPV at or above 4.5 km/s
    Excellent,
}

impl ConcreteQuality {
    /// Classify a pulse velocity reading (km/s).
    ///
    /// Total over all real inputs; thresholds are evaluated top-down,
    /// first match wins, so every reading maps to exactly one grading.
    pub fn from_pulse_velocity(upv_kms: f64) -> Self {
        if upv_kms >= 4.5 {
            ConcreteQuality::Excellent
        } else if upv_kms >= 3.5 {
            ConcreteQuality::Good
        } else if upv_kms >= 3.0 {
            ConcreteQuality::Medium
        } else {
            ConcreteQuality::Poor
        }
    }

    /// Get display label
    pub fn display_name(&self) -> &'static str {
        match self {
            ConcreteQuality::Excellent => "Excellent",
            ConcreteQuality::Good => "Good",
            ConcreteQuality::Medium => "Medium",
            ConcreteQuality::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for ConcreteQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(
            ConcreteQuality::from_pulse_velocity(4.5),
            ConcreteQuality::Excellent
        );
        assert_eq!(
            ConcreteQuality::from_pulse_velocity(4.49999),
            ConcreteQuality::Good
        );
        assert_eq!(
            ConcreteQuality::from_pulse_velocity(3.5),
            ConcreteQuality::Good
        );
        assert_eq!(
            ConcreteQuality::from_pulse_velocity(3.0),
            ConcreteQuality::Medium
        );
        assert_eq!(
            ConcreteQuality::from_pulse_velocity(2.9999),
            ConcreteQuality::Poor
        );
    }

    #[test]
    fn test_totality_over_sampled_range() {
        // Every reading maps to exactly one of the four gradings,
        // including values far outside the instrument range.
        let mut upv = -1.0;
        while upv <= 8.0 {
            let q = ConcreteQuality::from_pulse_velocity(upv);
            assert!(matches!(
                q,
                ConcreteQuality::Poor
                    | ConcreteQuality::Medium
                    | ConcreteQuality::Good
                    | ConcreteQuality::Excellent
            ));
            upv += 0.01;
        }
    }

    #[test]
    fn test_monotonic_in_velocity() {
        // Grading never decreases as UPV increases.
        let mut prev = ConcreteQuality::from_pulse_velocity(2.0);
        let mut upv = 2.0;
        while upv <= 6.0 {
            let q = ConcreteQuality::from_pulse_velocity(upv);
            assert!(q >= prev);
            prev = q;
            upv += 0.001;
        }
    }

    #[test]
    fn test_ordinal_ordering() {
        assert!(ConcreteQuality::Poor < ConcreteQuality::Medium);
        assert!(ConcreteQuality::Medium < ConcreteQuality::Good);
        assert!(ConcreteQuality::Good < ConcreteQuality::Excellent);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(ConcreteQuality::Excellent.to_string(), "Excellent");
        assert_eq!(ConcreteQuality::Poor.to_string(), "Poor");
    }
}
