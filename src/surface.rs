//! The drawing capability the simulator paints through.
//!
//! A host supplies something that implements [`Surface`]; the simulator only
//! ever issues [`DrawCommand`]s and reads the current size. [`Recorder`] keeps
//! the commands instead of rasterizing them, which is what headless hosts and
//! tests use.

use crate::color::{ColorStop, Rgb, Rgba};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Soft halo drawn around a filled shape or stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgb,
    /// Blur radius in canvas pixels.
    pub blur: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fills the entire surface with a radial gradient centered on `center`.
    FillRadial {
        center: Point,
        inner_radius: f32,
        outer_radius: f32,
        stops: &'static [ColorStop],
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Rgb,
        alpha: f32,
        glow: Option<Glow>,
    },
    /// Straight segment stroked with a linear gradient running from `start`
    /// at `from` to `end` at `to`. A glow fades with the gradient.
    StrokeLine {
        from: Point,
        to: Point,
        width: f32,
        start: Rgba,
        end: Rgba,
        alpha: f32,
        glow: Option<Glow>,
    },
    Text {
        origin: Point,
        color: Rgb,
        text: String,
    },
}

pub trait Surface {
    /// Current size in pixels as `(width, height)`.
    fn size(&self) -> (f32, f32);

    fn draw(&mut self, command: DrawCommand);
}

/// Surface that records draw commands instead of painting them.
#[derive(Debug, Default)]
pub struct Recorder {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the commands recorded so far and starts a fresh list.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
