//! The starfield simulator: a twinkling, slowly drifting star field behind a
//! galaxy gradient, with an occasional shooting star.
//!
//! [`Starfield`] owns all animation state. A host drives it by calling
//! [`Starfield::frame`] once per display refresh and [`Starfield::resize`]
//! between frames whenever the surface changes size.

mod render;
mod shooting;
mod star;

use std::ops::Range;

use fastrand::Rng;

use crate::color::{ColorStop, Rgb};
use crate::error::StarfieldError;
use crate::surface::Surface;

pub use render::{draw_background, draw_shooting_star, draw_stars};
pub use shooting::ShootingStar;
pub use star::Star;

pub const STAR_COUNT: usize = 250;
pub const MOVING_STAR_COUNT: usize = 15;

const STAR_RADIUS: Range<f32> = 0.3..1.2;
const BASE_ALPHA: Range<f32> = 0.5..1.0;
const TWINKLE_SPEED: Range<f32> = 0.005..0.02;
const DRIFT_SPEED: f32 = 0.07;
const STAR_COLOR: Rgb = Rgb::WHITE;
const STAR_GLOW_BLUR: f32 = 8.0;

const BACKGROUND_OUTER_RATIO: f32 = 0.7;
const BACKGROUND_INNER_RATIO: f32 = 0.1;
const BACKGROUND_STOPS: [ColorStop; 4] = [
    ColorStop::new(0.0, Rgb::hex(0x232a5d)), // light blue
    ColorStop::new(0.3, Rgb::hex(0x181d3a)), // deep blue
    ColorStop::new(0.7, Rgb::hex(0x0a1333)), // dark blue
    ColorStop::new(1.0, Rgb::hex(0x070a1a)), // near black
];

const SHOOTING_DX: Range<f32> = 6.0..10.0;
const SHOOTING_DY: Range<f32> = 3.0..6.0;
const SHOOTING_LEN: Range<f32> = 80.0..140.0;
const SHOOTING_MAX_LIFE: Range<f32> = 40.0..60.0;
const SPAWN_EDGE_OFFSET: f32 = -20.0;
const SPAWN_EDGE_SPAN: f32 = 0.7;
const EXIT_MARGIN: f32 = 50.0;
const SPAWN_DELAY_MIN_MS: u64 = 2_000;
const SPAWN_DELAY_SPREAD_MS: u64 = 4_000;

const HEAD_RADIUS: f32 = 2.5;
const HEAD_COLOR: Rgb = Rgb::hex(0xfffbe7);
const HEAD_BLUR: f32 = 18.0;
const TAIL_COLOR: Rgb = Rgb::new(255, 255, 230);
const TAIL_HEAD_ALPHA: f32 = 0.8;
const TAIL_LENGTH_FACTOR: f32 = 8.0;
const TAIL_WIDTH: f32 = 3.5;

fn between(rng: &mut Rng, range: Range<f32>) -> f32 {
    range.start + rng.f32() * (range.end - range.start)
}

/// A surface side stars can be scattered over.
fn usable(side: f32) -> bool {
    side.is_finite() && side > 0.0
}

/// How many stars a field holds and how many of them drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSettings {
    pub star_count: usize,
    pub moving_star_count: usize,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            moving_star_count: MOVING_STAR_COUNT,
        }
    }
}

pub struct Starfield {
    settings: FieldSettings,
    stars: Vec<Star>,
    shooting_star: Option<ShootingStar>,
    next_spawn_at: u64,
    rng: Rng,
}

impl Starfield {
    /// Creates a simulator for a `width x height` surface. A surface without
    /// a usable area is rejected.
    pub fn new(
        width: f32,
        height: f32,
        now_ms: u64,
        settings: FieldSettings,
    ) -> Result<Self, StarfieldError> {
        Self::with_rng(width, height, now_ms, settings, Rng::new())
    }

    /// Same as [`Starfield::new`] with a caller-provided random source.
    pub fn with_rng(
        width: f32,
        height: f32,
        now_ms: u64,
        settings: FieldSettings,
        mut rng: Rng,
    ) -> Result<Self, StarfieldError> {
        if !usable(width) || !usable(height) {
            return Err(StarfieldError::InvalidSurface { width, height });
        }

        let stars = star::populate(
            &mut rng,
            width,
            height,
            settings.star_count,
            settings.moving_star_count,
        );
        let next_spawn_at = now_ms + shooting::spawn_delay_ms(&mut rng);

        tracing::info!(
            width,
            height,
            stars = stars.len(),
            next_spawn_at,
            "starfield initialized"
        );

        Ok(Self {
            settings,
            stars,
            shooting_star: None,
            next_spawn_at,
            rng,
        })
    }

    /// Throws the current field away and scatters a fresh one over the new
    /// dimensions. The shooting star and spawn schedule are left alone.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !usable(width) || !usable(height) {
            tracing::warn!(width, height, "resizing to an unusable surface");
        }

        self.stars = star::populate(
            &mut self.rng,
            width,
            height,
            self.settings.star_count,
            self.settings.moving_star_count,
        );
        tracing::info!(width, height, "star field regenerated");
    }

    /// Runs one frame: background, stars, star update, shooting star, its
    /// update, then the spawn check. Dimensions are read from `surface`.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: u64) {
        let (width, height) = surface.size();

        draw_background(surface);
        draw_stars(surface, &self.stars);
        for star in &mut self.stars {
            star.twinkle();
            star.drift(width, height);
        }

        if let Some(streak) = &self.shooting_star {
            draw_shooting_star(surface, streak);
        }
        self.update_shooting_star(width, height, now_ms);
        self.spawn_if_due(width, height, now_ms);
    }

    fn update_shooting_star(&mut self, width: f32, height: f32, now_ms: u64) {
        let Some(streak) = &mut self.shooting_star else {
            return;
        };

        streak.advance();
        if streak.is_spent(width, height) {
            tracing::debug!(life = streak.life(), x = streak.position().x, "shooting star gone");
            self.shooting_star = None;
            self.next_spawn_at = now_ms + shooting::spawn_delay_ms(&mut self.rng);
        }
    }

    fn spawn_if_due(&mut self, width: f32, height: f32, now_ms: u64) {
        if self.shooting_star.is_none() && now_ms >= self.next_spawn_at {
            let streak = ShootingStar::spawn(&mut self.rng, width, height);
            tracing::debug!(
                x = streak.position().x,
                y = streak.position().y,
                max_life = streak.max_life(),
                "shooting star spawned"
            );
            self.shooting_star = Some(streak);
        }
    }

    /// Puts `streak` in the shooting-star slot, replacing any active one.
    pub fn launch(&mut self, streak: ShootingStar) {
        self.shooting_star = Some(streak);
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_star(&self) -> Option<&ShootingStar> {
        self.shooting_star.as_ref()
    }

    /// Earliest time, in clock milliseconds, the next shooting star may appear.
    pub fn next_spawn_at(&self) -> u64 {
        self.next_spawn_at
    }

    pub fn settings(&self) -> FieldSettings {
        self.settings
    }
}
