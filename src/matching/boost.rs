//! Piecewise-linear remap of the weighted similarity into a display score.
//!
//! Raw cosine similarity on short phrases rarely reaches the top of [0, 1],
//! so the band from [`BOOST_THRESHOLD`] up is stretched into
//! [`BOOST_FLOOR`, `BOOST_CEIL`] to separate good matches visibly; below the
//! threshold the mapping stays linear.

/// Weighted similarity at which the boosted band starts.
pub const BOOST_THRESHOLD: f32 = 0.7;

/// Lower end of the boosted output band.
pub const BOOST_FLOOR: f32 = 0.75;

/// Upper end of the boosted output band.
pub const BOOST_CEIL: f32 = 0.98;

/// Maps a weighted similarity to the final integer score in [0, 100].
///
/// Monotonically non-decreasing over [0, 1]; the clamp covers floating-point
/// overshoot at the band boundary and out-of-range weighted sums.
pub fn boost(weighted_similarity: f32) -> u8 {
    let scaled = if weighted_similarity >= BOOST_THRESHOLD {
        let boosted = BOOST_FLOOR
            + (weighted_similarity - BOOST_THRESHOLD) * (BOOST_CEIL - BOOST_FLOOR)
                / (1.0 - BOOST_THRESHOLD);
        boosted * 100.0
    } else {
        weighted_similarity * 100.0
    };

    scaled.round().clamp(0.0, 100.0) as u8
}
