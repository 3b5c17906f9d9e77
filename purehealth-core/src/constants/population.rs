//! District Populations and Impact Rates
//!
//! Static headcounts for the Maharashtra districts the monitoring
//! network covers, plus the multipliers used by the impact estimator.
//! Headcounts are Census 2011 district totals rounded to the nearest
//! hundred thousand; they feed display-grade estimates, not
//! epidemiological ground truth.

/// District populations, sorted by name.
///
/// Subset of Maharashtra districts with monitored stations. Lookups
/// scan linearly; the table stays small enough that order only matters
/// for reviewability.
pub const DISTRICT_POPULATION: &[(&str, u64)] = &[
    ("ahmednagar", 4_500_000),
    ("amravati", 2_900_000),
    ("aurangabad", 3_700_000),
    ("kolhapur", 3_900_000),
    ("latur", 2_500_000),
    ("mumbai", 12_400_000),
    ("mumbai suburban", 9_400_000),
    ("nagpur", 4_700_000),
    ("nanded", 3_400_000),
    ("nashik", 6_100_000),
    ("pune", 9_400_000),
    ("raigad", 2_600_000),
    ("sangli", 2_800_000),
    ("satara", 3_000_000),
    ("solapur", 4_300_000),
    ("thane", 11_100_000),
];

/// Headcount assumed for a district missing from the table.
///
/// Median-ish Maharashtra district; deliberately conservative so an
/// unrecognized name still yields a visible, nonzero estimate.
pub const FALLBACK_DISTRICT_POPULATION: u64 = 2_000_000;

/// Fraction of a district's population drawing from the monitored
/// source.
pub const AFFECTED_FRACTION: f64 = 0.15;

/// Outbreak score edges for case-rate selection: >70, >50, >30.
pub const CASE_RATE_SCORE_BANDS: [f32; 3] = [70.0, 50.0, 30.0];

/// Attack rate per band (worst first), with the background rate last.
///
/// Applied to the affected headcount to yield an expected case count.
pub const CASE_RATES: [f64; 4] = [0.05, 0.02, 0.01, 0.002];
