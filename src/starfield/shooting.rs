use fastrand::Rng;

use super::{
    EXIT_MARGIN, SHOOTING_DX, SHOOTING_DY, SHOOTING_LEN, SHOOTING_MAX_LIFE, SPAWN_DELAY_MIN_MS,
    SPAWN_DELAY_SPREAD_MS, SPAWN_EDGE_OFFSET, SPAWN_EDGE_SPAN, between,
};
use crate::surface::Point;

/// A fading streak travelling down and to the right.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    /// Sampled tail-length hint. The tail is drawn from the velocity instead,
    /// so this is carried but not read by the renderer.
    len: f32,
    life: u32,
    max_life: f32,
    alpha: f32,
}

impl ShootingStar {
    pub fn new(origin: Point, velocity: (f32, f32), len: f32, max_life: f32) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            dx: velocity.0,
            dy: velocity.1,
            len,
            life: 0,
            max_life,
            alpha: 1.0,
        }
    }

    /// Spawns from the top edge or the left edge with even odds, always
    /// within the first 70% of that edge.
    pub(crate) fn spawn(rng: &mut Rng, width: f32, height: f32) -> Self {
        let origin = if rng.bool() {
            Point::new(rng.f32() * width * SPAWN_EDGE_SPAN, SPAWN_EDGE_OFFSET)
        } else {
            Point::new(SPAWN_EDGE_OFFSET, rng.f32() * height * SPAWN_EDGE_SPAN)
        };

        let velocity = (between(rng, SHOOTING_DX), between(rng, SHOOTING_DY));
        let len = between(rng, SHOOTING_LEN);
        let max_life = between(rng, SHOOTING_MAX_LIFE);

        Self::new(origin, velocity, len, max_life)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    pub fn len(&self) -> f32 {
        self.len
    }

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn max_life(&self) -> f32 {
        self.max_life
    }

    /// Raw fade value `1 - life / max_life`. Goes negative once `life`
    /// passes `max_life`; renderers clamp it.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub(crate) fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
        self.life += 1;
        self.alpha = 1.0 - self.life as f32 / self.max_life;
    }

    /// Whether the streak has outlived `max_life` or left past the right or
    /// bottom edge. The top and left edges never end it.
    pub fn is_spent(&self, width: f32, height: f32) -> bool {
        self.life as f32 > self.max_life
            || self.x > width + EXIT_MARGIN
            || self.y > height + EXIT_MARGIN
    }
}

/// Delay before the next streak, in whole milliseconds within `[2000, 6000)`.
pub(crate) fn spawn_delay_ms(rng: &mut Rng) -> u64 {
    SPAWN_DELAY_MIN_MS + (rng.f64() * SPAWN_DELAY_SPREAD_MS as f64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streak(max_life: f32) -> ShootingStar {
        ShootingStar::new(Point::new(10.0, 10.0), (1.0, 1.0), 100.0, max_life)
    }

    #[test]
    fn test_spawn_from_top_or_left_edge() {
        let mut rng = Rng::with_seed(42);
        let (mut top, mut left) = (0, 0);
        for _ in 0..500 {
            let s = ShootingStar::spawn(&mut rng, 800.0, 600.0);
            if s.y == SPAWN_EDGE_OFFSET {
                top += 1;
                assert!((0.0..=560.0).contains(&s.x));
            } else {
                left += 1;
                assert_eq!(s.x, SPAWN_EDGE_OFFSET);
                assert!((0.0..=420.0).contains(&s.y));
            }
            assert!((6.0..=10.0).contains(&s.dx));
            assert!((3.0..=6.0).contains(&s.dy));
            assert!((80.0..=140.0).contains(&s.len));
            assert!((40.0..=60.0).contains(&s.max_life));
            assert_eq!(s.life, 0);
            assert_eq!(s.alpha, 1.0);
        }
        assert!(top > 0 && left > 0);
    }

    #[test]
    fn test_alpha_falls_linearly_with_life() {
        let mut s = streak(40.0);
        for life in 1..=60u32 {
            s.advance();
            assert_eq!(s.life, life);
            assert_eq!(s.alpha, 1.0 - life as f32 / 40.0);
        }
        assert!(s.alpha < 0.0);
    }

    #[test]
    fn test_spent_only_past_lifetime_or_right_bottom_margin() {
        let mut s = streak(50.0);
        s.life = 50;
        assert!(!s.is_spent(800.0, 600.0));
        s.life = 51;
        assert!(s.is_spent(800.0, 600.0));

        let mut s = streak(50.0);
        s.x = 850.0;
        assert!(!s.is_spent(800.0, 600.0));
        s.x = 850.5;
        assert!(s.is_spent(800.0, 600.0));

        let mut s = streak(50.0);
        s.y = 650.5;
        assert!(s.is_spent(800.0, 600.0));

        let mut s = streak(50.0);
        s.x = -500.0;
        s.y = -500.0;
        assert!(!s.is_spent(800.0, 600.0));
    }

    #[test]
    fn test_spawn_delay_range() {
        let mut rng = Rng::with_seed(9);
        for _ in 0..10_000 {
            let delay = spawn_delay_ms(&mut rng);
            assert!((2_000..6_000).contains(&delay));
        }
    }
}
