//! Animated starfield backdrop: a galaxy gradient, twinkling drifting stars
//! and periodic shooting stars, painted through a pluggable [`Surface`].
//!
//! The [`terminal`] module hosts the simulator in a true-color terminal.

pub mod cli;
pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod starfield;
pub mod surface;
pub mod terminal;

pub use error::{ConfigError, StarfieldError};
pub use starfield::{FieldSettings, ShootingStar, Star, Starfield};
pub use surface::{DrawCommand, Recorder, Surface};
