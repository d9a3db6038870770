use fastrand::Rng;

use super::{BASE_ALPHA, DRIFT_SPEED, STAR_RADIUS, TWINKLE_SPEED, between};
use crate::surface::Point;

/// A background star. Size, twinkle floor, twinkle speed and drift velocity
/// are fixed at creation; only `alpha`, the twinkle direction and (for
/// moving stars) the position change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    x: f32,
    y: f32,
    radius: f32,
    base_alpha: f32,
    alpha: f32,
    twinkle_speed: f32,
    twinkle_dir: f32,
    moving: bool,
    dx: f32,
    dy: f32,
}

impl Star {
    pub(crate) fn random(rng: &mut Rng, width: f32, height: f32, moving: bool) -> Self {
        let (dx, dy) = if moving {
            (
                between(rng, -DRIFT_SPEED..DRIFT_SPEED),
                between(rng, -DRIFT_SPEED..DRIFT_SPEED),
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            x: rng.f32() * width,
            y: rng.f32() * height,
            radius: between(rng, STAR_RADIUS),
            base_alpha: between(rng, BASE_ALPHA),
            alpha: 1.0,
            twinkle_speed: between(rng, TWINKLE_SPEED),
            twinkle_dir: if rng.bool() { 1.0 } else { -1.0 },
            moving,
            dx,
            dy,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn base_alpha(&self) -> f32 {
        self.base_alpha
    }

    pub fn twinkle_speed(&self) -> f32 {
        self.twinkle_speed
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    /// Steps the opacity one frame toward the current bound, bouncing off
    /// `1.0` and `base_alpha`.
    pub(crate) fn twinkle(&mut self) {
        self.alpha += self.twinkle_dir * self.twinkle_speed;
        if self.alpha > 1.0 {
            self.alpha = 1.0;
            self.twinkle_dir = -1.0;
        } else if self.alpha < self.base_alpha {
            self.alpha = self.base_alpha;
            self.twinkle_dir = 1.0;
        }
    }

    /// Moves a drifting star by its velocity. Leaving an edge puts it exactly
    /// on the opposite edge.
    pub(crate) fn drift(&mut self, width: f32, height: f32) {
        if !self.moving {
            return;
        }

        self.x += self.dx;
        self.y += self.dy;

        if self.x < 0.0 {
            self.x = width;
        }
        if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
        if self.y > height {
            self.y = 0.0;
        }
    }
}

/// Builds a brand-new field of `count` stars spread over `width x height`.
/// The first `moving` stars drift; the rest stay put.
pub(crate) fn populate(
    rng: &mut Rng,
    width: f32,
    height: f32,
    count: usize,
    moving: usize,
) -> Vec<Star> {
    (0..count)
        .map(|i| Star::random(rng, width, height, i < moving))
        .collect()
}
