//! Closed-form projectile maths: no time integration, the curve is the
//! standard range equation evaluated per horizontal step.

use crate::types::Projectile;

pub fn degrees_to_radians(theta_deg: f64) -> f64 {
    theta_deg * (std::f64::consts::PI / 180.0)
}

/// Vertical displacement at horizontal distance `x` for a launch at
/// `theta_rad` with initial speed `speed` under `gravity`:
///
/// `y(x) = x·tan(θ) − g·x² / (2·u²·cos²(θ))`
///
/// Singular at θ = 90° (cos θ = 0) and at `speed` = 0; callers are expected
/// to keep the angle below vertical, while a zero speed yields non-finite
/// output that [`sample_curve`] filters out.
pub fn height_at(x: f64, theta_rad: f64, speed: f64, gravity: f64) -> f64 {
    let t = theta_rad.tan();
    let c = theta_rad.cos();
    x * t - gravity * x.powi(2) / (2.0 * speed.powi(2) * c.powi(2))
}

/// Samples the curve at `step`-sized horizontal intervals across `width`
/// and returns the plottable point set. Samples with a non-finite height
/// are dropped; off-screen but finite heights are passed through for the
/// canvas to clip.
pub fn sample_curve(projectile: &Projectile, width: f64, step: f64) -> Vec<(f64, f64)> {
    let theta = degrees_to_radians(projectile.angle);
    let count = (width / step) as usize;
    (0..count)
        .map(|i| {
            let x = i as f64 * step;
            (x, height_at(x, theta, projectile.speed, projectile.gravity))
        })
        .filter(|&(_, y)| y.is_finite())
        .collect()
}
