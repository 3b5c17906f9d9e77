//! Water-Quality Parameter Specifications
//!
//! Defaults, rating-curve anchors, and classification bounds for the
//! parameters the engine scores. Values follow CPCB designated-best-use
//! criteria and BIS IS 10500 drinking-water limits.

// ===== PARAMETER DEFAULTS =====
//
// Substituted when a reading is missing a parameter or carries a value
// that cannot be coerced to a number. Chosen as "unremarkable inland
// surface water" so a half-empty reading never manufactures an alert.

/// Default pH when absent from a reading.
///
/// Neutral water; IS 10500 acceptable range is 6.5-8.5.
pub const DEFAULT_PH: f32 = 7.0;

/// Default biological oxygen demand (mg/L) when absent.
///
/// CPCB class A surface water allows BOD up to 2 mg/L.
pub const DEFAULT_BOD_MG_L: f32 = 2.0;

/// Default dissolved oxygen (mg/L) when absent.
///
/// Healthy rivers run 6-8 mg/L; CPCB class A requires >= 6.
pub const DEFAULT_DISSOLVED_OXYGEN_MG_L: f32 = 6.0;

/// Default fecal coliform count (MPN/100 mL) when absent.
///
/// Low but nonzero; pristine sources report single digits to tens.
pub const DEFAULT_FECAL_COLIFORM_MPN: f32 = 10.0;

/// Default turbidity (NTU) when absent.
///
/// IS 10500 acceptable limit is 1 NTU, permissible 5 NTU.
pub const DEFAULT_TURBIDITY_NTU: f32 = 5.0;

/// Default water temperature (°C) when absent.
///
/// Annual mean for Maharashtra surface water.
pub const DEFAULT_TEMPERATURE_C: f32 = 25.0;

// ===== WQI CLASSIFICATION BOUNDS =====
//
// Inclusive lower bounds for the CPCB designated-best-use classes.
// A reading at exactly a bound belongs to the better class.

/// Class A: drinking water source without conventional treatment.
pub const WQI_CLASS_A_MIN: f32 = 90.0;

/// Class B: outdoor bathing (organized).
pub const WQI_CLASS_B_MIN: f32 = 70.0;

/// Class C: drinking water source after conventional treatment.
pub const WQI_CLASS_C_MIN: f32 = 50.0;

/// Class D: propagation of wildlife and fisheries.
pub const WQI_CLASS_D_MIN: f32 = 25.0;

// ===== COMPOSITE WQI RATING CURVES =====
//
// Anchors for the per-parameter 0-100 quality ratings combined into the
// composite index. Simplified piecewise-linear forms of the NSF/CPCB
// sub-index curves, weighted per the four-parameter renormalization of
// the NSF weights (DO 0.31, coliform 0.29, pH 0.20, BOD 0.20).

/// Weight of the dissolved-oxygen rating in the composite WQI.
pub const WQI_WEIGHT_DO: f32 = 0.31;

/// Weight of the fecal-coliform rating in the composite WQI.
pub const WQI_WEIGHT_FC: f32 = 0.29;

/// Weight of the pH rating in the composite WQI.
pub const WQI_WEIGHT_PH: f32 = 0.20;

/// Weight of the BOD rating in the composite WQI.
pub const WQI_WEIGHT_BOD: f32 = 0.20;

/// pH deviation from neutral at which the pH rating reaches zero.
///
/// Ratings fall linearly from 100 at pH 7.0 to 0 at pH 4.0 / 10.0.
pub const WQI_PH_ZERO_SPAN: f32 = 3.0;

/// Dissolved oxygen (mg/L) at which the DO rating saturates at 100.
///
/// 8 mg/L is near-saturation for warm inland water.
pub const WQI_DO_FULL_MG_L: f32 = 8.0;

/// BOD (mg/L) at which the BOD rating reaches zero.
///
/// 30 mg/L is the CPCB general discharge standard into inland water.
pub const WQI_BOD_ZERO_MG_L: f32 = 30.0;

/// log10(MPN/100 mL) span over which the coliform rating falls to zero.
///
/// Rating is 100 at <= 1 MPN and 0 at 10^5 MPN, linear in log10.
pub const WQI_FC_ZERO_LOG10: f32 = 5.0;
