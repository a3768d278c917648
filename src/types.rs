/// Launch parameters for the plotted trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Launch angle above horizontal, in degrees. Integer-valued, kept in
    /// [MIN_ANGLE_DEG, MAX_ANGLE_DEG] by the input handlers.
    pub angle: f64,
    /// Initial speed. Steps by whole units and carries no bound in either
    /// direction.
    pub speed: f64,
    /// Downward acceleration used by the model. Fixed for the process
    /// lifetime.
    pub gravity: f64,
}

pub const MIN_ANGLE_DEG: f64 = 0.0;
pub const MAX_ANGLE_DEG: f64 = 90.0;

impl Default for Projectile {
    fn default() -> Self {
        Self {
            angle: 0.0,
            speed: 50.0,
            gravity: 10.0,
        }
    }
}

impl Projectile {
    /// The label shown when the angle sits at either end of its range.
    pub fn limit_label(&self) -> Option<&'static str> {
        if self.angle == MAX_ANGLE_DEG {
            Some("Max Angle")
        } else if self.angle == MIN_ANGLE_DEG {
            Some("Min Angle")
        } else {
            None
        }
    }

    /// The model is undefined at 90° (cos θ = 0), so the curve is only
    /// drawn below it.
    pub fn curve_visible(&self) -> bool {
        self.angle < MAX_ANGLE_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_startup_state() {
        let p = Projectile::default();
        assert_eq!(p.angle, 0.0);
        assert_eq!(p.speed, 50.0);
        assert_eq!(p.gravity, 10.0);
    }

    #[test]
    fn limit_label_only_at_range_ends() {
        let mut p = Projectile::default();
        assert_eq!(p.limit_label(), Some("Min Angle"));

        p.angle = 45.0;
        assert_eq!(p.limit_label(), None);

        p.angle = 90.0;
        assert_eq!(p.limit_label(), Some("Max Angle"));
    }

    #[test]
    fn curve_suppressed_at_vertical_limit() {
        let mut p = Projectile::default();
        assert!(p.curve_visible());

        p.angle = 89.0;
        assert!(p.curve_visible());

        p.angle = 90.0;
        assert!(!p.curve_visible());
    }
}
