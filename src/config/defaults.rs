use super::*;

impl Default for ShearSettings {
    fn default() -> Self {
        Self {
            threshold: 0.05,
            spring_coefficient: 0.08,
            friction_force: 0.17,
            spring_length: 0.0,
            hybrid_shearing_radius_px: 70.0, // ~1cm on a typical display
            min_zoom: 5.0,
        }
    }
}

impl ShearSettings {
    /// Tighter, low-momentum tuning: the terrain follows the pointer with
    /// little overshoot and settles fast. Hybrid shearing disabled, so the
    /// spring always pulls the full displacement.
    pub fn stiff() -> Self {
        Self {
            threshold: 0.1,
            spring_coefficient: 0.2,
            friction_force: 0.4,
            spring_length: 0.0,
            hybrid_shearing_radius_px: 0.0,
            min_zoom: 5.0,
        }
    }
}
