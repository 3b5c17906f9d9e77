//! WQI trend estimation and prediction
//!
//! Fits a least-squares line through a station's recent WQI history and
//! extrapolates it over a horizon, for the "predicted WQI" figure on
//! station detail views. Timestamps are converted to hours relative to
//! the first point so the normal equations stay well-conditioned over
//! month-long histories.

use crate::time::{Timestamp, MS_PER_HOUR};

/// One WQI observation in a station's history
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WqiPoint {
    /// When the index was computed
    pub timestamp: Timestamp,
    /// Composite WQI in [0, 100]
    pub wqi: f32,
}

/// Least-squares WQI slope in index points per hour
///
/// Returns `None` with fewer than two points or a degenerate time span
/// (all observations at the same instant).
pub fn wqi_trend(history: &[WqiPoint]) -> Option<f32> {
    if history.len() < 2 {
        return None;
    }

    let t0 = history[0].timestamp;

    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;
    let mut sum_xy = 0.0f32;
    let mut sum_xx = 0.0f32;

    for point in history {
        let x = point.timestamp.saturating_sub(t0) as f32 / MS_PER_HOUR as f32;
        let y = point.wqi;

        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let n = history.len() as f32;
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    Some((n * sum_xy - sum_x * sum_y) / denominator)
}

/// Predicted WQI `horizon_ms` past the last observation
///
/// Extrapolates the fitted line and clamps to [0, 100]. Returns `None`
/// whenever [`wqi_trend`] cannot produce a slope.
pub fn predict_wqi(history: &[WqiPoint], horizon_ms: u64) -> Option<f32> {
    let slope = wqi_trend(history)?;

    let t0 = history[0].timestamp;
    let n = history.len() as f32;

    let mean_x = history
        .iter()
        .map(|p| p.timestamp.saturating_sub(t0) as f32 / MS_PER_HOUR as f32)
        .sum::<f32>()
        / n;
    let mean_y = history.iter().map(|p| p.wqi).sum::<f32>() / n;
    let intercept = mean_y - slope * mean_x;

    let last = history[history.len() - 1].timestamp;
    let target_x = (last.saturating_sub(t0) + horizon_ms) as f32 / MS_PER_HOUR as f32;

    Some((intercept + slope * target_x).clamp(0.0, 100.0))
}
