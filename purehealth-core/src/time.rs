//! Time units for readings and trend analysis
//!
//! All timestamps in the engine are plain epoch milliseconds; sources
//! (station RTCs, the host clock, sample files) convert before data
//! reaches scoring.

/// Timestamp in milliseconds since epoch
pub type Timestamp = u64;

/// Milliseconds in one hour, the natural unit for WQI trend slopes
pub const MS_PER_HOUR: u64 = 3_600_000;

/// Milliseconds in one day, the natural unit for prediction horizons
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;
