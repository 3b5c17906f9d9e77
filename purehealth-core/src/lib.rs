//! Core scoring engine for PureHealth
//!
//! Turns raw water-quality readings into health-risk numbers: WQI
//! classification, per-disease risk percentages, outbreak probability,
//! and population impact estimates.
//!
//! Key constraints:
//! - Every scoring function is a pure, total, synchronous transform
//! - No allocation in the scoring path; safe from any number of callers
//! - Malformed inputs degrade to documented defaults, never panic
//!
//! ```
//! use purehealth_core::{assess, WaterSample};
//!
//! let sample = WaterSample {
//!     fecal_coliform: 3000.0,
//!     dissolved_oxygen: 3.0,
//!     ..WaterSample::default()
//! };
//!
//! let report = assess(&sample, "Pune");
//! assert!(report.outbreak.score > 50.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

pub mod assessment;
pub mod constants;
pub mod impact;
pub mod outbreak;
#[cfg(feature = "std")]
pub mod reading;
pub mod risk;
pub mod time;
pub mod traits;
pub mod trend;
pub mod wqi;

// Public API
pub use assessment::{assess, HealthRiskAssessment};
pub use impact::{district_population, estimate_affected, estimate_cases};
pub use outbreak::{aggregate, aggregate_with_horizon, OutbreakLevel, OutbreakProbability};
#[cfg(feature = "std")]
pub use reading::{extract, ParamValue, Reading};
pub use risk::{risk_profile, Disease, DiseaseRisk, RiskLevel};
pub use traits::{RiskModel, WaterSample};
pub use wqi::{classify, WqiClass};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
