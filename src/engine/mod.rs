pub mod session;
pub mod spring;

/// Lower bound of the elevation range the shear formulas rebase against.
pub const MIN_ELEVATION: f64 = 0.0;

/// Upper bound of the elevation range.
pub const MAX_ELEVATION: f64 = 3000.0;

/// Midpoint elevation selecting between the two shear/pan regimes.
/// A gesture starting strictly below this value uses the deep (inverted,
/// pan-heavy) regime; at or above it, the high regime.
pub const CRITICAL_ELEVATION: f64 = (MAX_ELEVATION - MIN_ELEVATION) / 2.0;
