//! Shared scoring helpers
//!
//! Every disease table goes through `step_table`, which is what makes
//! the scorers behave uniformly: ascending `<` comparisons, a final
//! band that catches everything else (negative readings, NaN, absurdly
//! large counts), and no panics.

/// Select a level from an ascending step table
///
/// `edges` are exclusive upper bounds checked in order; `levels` has one
/// more entry than `edges`, the last being the catch-all band.
pub(crate) fn step_table(value: f32, edges: &[f32], levels: &[f32]) -> f32 {
    debug_assert_eq!(levels.len(), edges.len() + 1);

    for (i, edge) in edges.iter().enumerate() {
        if value < *edge {
            return levels[i];
        }
    }
    levels[levels.len() - 1]
}

/// Clamp a risk percentage to [0, 100]
pub(crate) fn clamp_percent(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}
