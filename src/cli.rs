//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Values given here override the config file.
#[derive(Parser, Debug, Default)]
#[command(
    name = "starfield",
    about = "Animated starfield for your terminal",
    after_help = "Press 'q', ESC, or Ctrl+C to exit"
)]
pub struct CliArgs {
    /// RON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frames per second.
    #[arg(long)]
    pub frame_rate: Option<u32>,

    /// Number of stars.
    #[arg(long)]
    pub stars: Option<usize>,

    /// Number of drifting stars.
    #[arg(long)]
    pub moving: Option<usize>,

    /// Glow size relative to the canvas blur radius.
    #[arg(long)]
    pub glow_scale: Option<f32>,

    /// Show a frames-per-second counter.
    #[arg(long)]
    pub show_fps: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write logs to this file. Without it nothing is logged.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(rate) = args.frame_rate {
            self.display.frame_rate = rate;
        }
        if let Some(stars) = args.stars {
            self.field.star_count = stars;
        }
        if let Some(moving) = args.moving {
            self.field.moving_star_count = moving;
        }
        if let Some(scale) = args.glow_scale {
            self.display.glow_scale = scale;
        }
        if args.show_fps {
            self.display.show_fps = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "starfield",
            "--frame-rate",
            "30",
            "--stars",
            "400",
            "--show-fps",
            "--log-file",
            "/tmp/starfield.log",
        ])
        .unwrap();
        assert_eq!(args.frame_rate, Some(30));
        assert_eq!(args.stars, Some(400));
        assert!(args.show_fps);
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/starfield.log")));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(CliArgs::try_parse_from(["starfield", "--bogus"]).is_err());
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            stars: Some(100),
            glow_scale: Some(0.5),
            log_level: Some("debug".into()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);

        assert_eq!(config.field.star_count, 100);
        assert_eq!(config.display.glow_scale, 0.5);
        assert_eq!(config.debug.log_level, "debug");
        // untouched
        assert_eq!(config.field.moving_star_count, 15);
        assert_eq!(config.display.frame_rate, 60);
        assert!(!config.display.show_fps);
    }

    #[test]
    fn test_cli_no_override() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }
}
