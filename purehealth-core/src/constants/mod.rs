//! Constants for the PureHealth scoring engine
//!
//! Centralized, documented constants used throughout the engine. All
//! numeric values live here with their purpose and source; the scoring
//! modules never carry magic numbers of their own.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Water**: parameter defaults, CPCB rating-curve anchors, WQI class bounds
//! - **Risk**: disease step tables, modifiers, outbreak contribution bands
//! - **Population**: district headcounts, fallbacks, case-rate bands
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, cite the standard or survey they came from
//! 3. Use descriptive names that include units

/// Parameter defaults, CPCB curve anchors, and WQI classification bounds.
pub mod water;

/// Disease risk step tables, modifiers, and outbreak scoring bands.
pub mod risk;

/// District populations and impact-estimation rates.
pub mod population;

// Re-export commonly used constants for convenience
pub use water::{
    DEFAULT_BOD_MG_L, DEFAULT_DISSOLVED_OXYGEN_MG_L, DEFAULT_FECAL_COLIFORM_MPN,
    DEFAULT_PH, DEFAULT_TURBIDITY_NTU,
    WQI_CLASS_A_MIN, WQI_CLASS_B_MIN, WQI_CLASS_C_MIN, WQI_CLASS_D_MIN,
};

pub use population::{AFFECTED_FRACTION, FALLBACK_DISTRICT_POPULATION};
