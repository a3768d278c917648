use crate::types::{Projectile, MAX_ANGLE_DEG, MIN_ANGLE_DEG};

/// Top-level application state.
pub struct App {
    pub projectile: Projectile,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            projectile: Projectile::default(),
            should_quit: false,
        }
    }

    /// Raise the launch angle by one degree, clamped at the vertical limit.
    pub fn raise_angle(&mut self) {
        if self.projectile.angle < MAX_ANGLE_DEG {
            self.projectile.angle += 1.0;
        }
    }

    /// Lower the launch angle by one degree, clamped at horizontal.
    pub fn lower_angle(&mut self) {
        if self.projectile.angle > MIN_ANGLE_DEG {
            self.projectile.angle -= 1.0;
        }
    }

    // Speed carries no bound in either direction.
    pub fn raise_speed(&mut self) {
        self.projectile.speed += 1.0;
    }

    pub fn lower_speed(&mut self) {
        self.projectile.speed -= 1.0;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
