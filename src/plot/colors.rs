//! Line colors keyed by piece count.

/// Used for piece counts without a dedicated color.
pub const FALLBACK_COLOR: &str = "#95a5a6";

pub fn color_for_pieces(pieces: u32) -> &'static str {
    match pieces {
        10 => "#3498db", // Blue
        20 => "#e74c3c", // Red
        30 => "#2ecc71", // Green
        _ => FALLBACK_COLOR,
    }
}
