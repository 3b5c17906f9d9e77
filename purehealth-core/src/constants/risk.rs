//! Disease Risk and Outbreak Scoring Tables
//!
//! Step tables mapping contamination indicators to risk percentages,
//! plus the band contributions for the outbreak probability aggregate.
//! Band edges follow WHO guidance on fecal indicator bacteria in
//! recreational and drinking water; base percentages were calibrated
//! against district surveillance data.
//!
//! All tables are ascending in fecal coliform so every scorer is
//! monotonic non-decreasing by construction; the final band catches any
//! remaining input, including negative or absurdly large values.

/// Fecal coliform band edges (MPN/100 mL) for the cholera table.
///
/// <10 is effectively clean, <100 meets bathing-water limits, <500 is
/// degraded, <2000 is heavily contaminated, beyond that raw sewage.
pub const FC_BANDS_FINE: [f32; 4] = [10.0, 100.0, 500.0, 2000.0];

// ===== CHOLERA =====

/// Cholera risk (%) per fecal coliform band: <10, <100, <500, <2000, else.
pub const CHOLERA_RISK_PCT: [f32; 5] = [2.0, 8.0, 25.0, 50.0, 80.0];

// ===== TYPHOID =====

/// Typhoid band edges (MPN/100 mL): <10, <100, <500, else.
pub const TYPHOID_BANDS: [f32; 3] = [10.0, 100.0, 500.0];

/// Typhoid base risk (%) per band.
pub const TYPHOID_RISK_PCT: [f32; 4] = [5.0, 15.0, 35.0, 60.0];

/// Typhoid multiplier when turbidity exceeds [`TYPHOID_TURBIDITY_NTU`].
///
/// Suspended solids shield Salmonella typhi from disinfection.
pub const TYPHOID_TURBIDITY_FACTOR: f32 = 1.3;

/// Turbidity threshold (NTU) that triggers the typhoid multiplier.
pub const TYPHOID_TURBIDITY_NTU: f32 = 10.0;

/// Typhoid multiplier when WQI falls below [`LOW_WQI_THRESHOLD`].
pub const TYPHOID_WQI_FACTOR: f32 = 1.5;

// ===== DYSENTERY =====

/// Dysentery band edges (MPN/100 mL) for the three-band table:
/// <100, <500, <2000, else.
pub const DYSENTERY_BANDS_THREE: [f32; 3] = [100.0, 500.0, 2000.0];

/// Dysentery risk (%) per three-band table entry.
pub const DYSENTERY_RISK_THREE_PCT: [f32; 4] = [5.0, 20.0, 45.0, 75.0];

/// Dysentery band edges (MPN/100 mL) for the four-band table:
/// <10, <100, <500, else.
pub const DYSENTERY_BANDS_FOUR: [f32; 3] = [10.0, 100.0, 500.0];

/// Dysentery risk (%) per four-band table entry.
pub const DYSENTERY_RISK_FOUR_PCT: [f32; 4] = [4.0, 12.0, 35.0, 70.0];

// ===== HEPATITIS A =====

/// Hepatitis A band edges (MPN/100 mL): <100, <1000, else.
pub const HEPATITIS_BANDS: [f32; 2] = [100.0, 1000.0];

/// Hepatitis A base risk (%) per band.
pub const HEPATITIS_RISK_PCT: [f32; 3] = [3.0, 12.0, 30.0];

/// Hepatitis A multiplier when WQI falls below [`LOW_WQI_THRESHOLD`].
///
/// HAV is enveloped in fecal matter and tracks overall degradation.
pub const HEPATITIS_WQI_FACTOR: f32 = 1.5;

// ===== SHARED MODIFIERS =====

/// WQI below this marks water needing full conventional treatment;
/// used as the trigger for the WQI-based risk multipliers.
pub const LOW_WQI_THRESHOLD: f32 = 50.0;

// ===== RISK LEVEL LABELS =====

/// Risk percentage bounds for the Low / Moderate / High / Severe labels.
///
/// Display banding only; the percentages are the contract.
pub const RISK_LEVEL_MODERATE_PCT: f32 = 10.0;
/// Lower bound of the High label.
pub const RISK_LEVEL_HIGH_PCT: f32 = 30.0;
/// Lower bound of the Severe label.
pub const RISK_LEVEL_SEVERE_PCT: f32 = 60.0;

// ===== OUTBREAK AGGREGATION =====
//
// Additive contributions; the worst case across all three indicators
// totals 85 before clamping.

/// WQI band edges for outbreak contribution: <25, <50, <70.
pub const OUTBREAK_WQI_BANDS: [f32; 3] = [25.0, 50.0, 70.0];

/// Outbreak points added per WQI band (worst first), else 0.
pub const OUTBREAK_WQI_POINTS: [f32; 3] = [40.0, 25.0, 10.0];

/// Fecal coliform edges for outbreak contribution: >2500, >500, >100.
pub const OUTBREAK_FC_BANDS: [f32; 3] = [2500.0, 500.0, 100.0];

/// Outbreak points added per fecal band (worst first), else 0.
pub const OUTBREAK_FC_POINTS: [f32; 3] = [30.0, 20.0, 10.0];

/// Dissolved oxygen edges for outbreak contribution: <4.0, <5.0 mg/L.
pub const OUTBREAK_DO_BANDS: [f32; 2] = [4.0, 5.0];

/// Outbreak points added per DO band (worst first), else 0.
pub const OUTBREAK_DO_POINTS: [f32; 2] = [15.0, 10.0];

/// Outbreak score bounds for the four severity levels:
/// very low below the first, high at or above the last.
pub const OUTBREAK_LEVEL_BOUNDS: [f32; 3] = [5.0, 15.0, 40.0];

/// Reference horizon (days) for the time-scaled outbreak estimate.
///
/// The additive aggregate is calibrated as a 30-day figure; shorter
/// horizons scale it down by sqrt(days/30), so 7 days is roughly half.
pub const OUTBREAK_HORIZON_REF_DAYS: f32 = 30.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_ascend() {
        for w in CHOLERA_RISK_PCT.windows(2) {
            assert!(w[0] <= w[1]);
        }
        for w in TYPHOID_RISK_PCT.windows(2) {
            assert!(w[0] <= w[1]);
        }
        for w in DYSENTERY_RISK_THREE_PCT.windows(2) {
            assert!(w[0] <= w[1]);
        }
        for w in DYSENTERY_RISK_FOUR_PCT.windows(2) {
            assert!(w[0] <= w[1]);
        }
        for w in HEPATITIS_RISK_PCT.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn worst_case_outbreak_points() {
        let total = OUTBREAK_WQI_POINTS[0] + OUTBREAK_FC_POINTS[0] + OUTBREAK_DO_POINTS[0];
        assert_eq!(total, 85.0);
    }
}
