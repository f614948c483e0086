//! Command-line argument parsing.

use clap::Parser;
use tracing::warn;

use crate::params::RenderConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "lowpoly-plane")]
#[command(about = "Pointer-reactive low-poly surface", long_about = None)]
pub struct Args {
    /// Seed for vertex offsets and drift (random if omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Window width in pixels
    #[arg(long, value_name = "PIXELS", default_value = "960")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, value_name = "PIXELS", default_value = "720")]
    pub height: u32,

    /// Start pose: flat (default, interactive) or tilted (resting)
    #[arg(long, value_name = "POSE", default_value = "flat")]
    pub pose: String,

    /// Log filter directive, e.g. "lowpoly_plane=debug"
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,
}

/// Pose the surface starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPose {
    Flat,
    Tilted,
}

impl Args {
    /// Parse start pose from command-line arguments
    pub fn parse_start_pose(&self) -> StartPose {
        match self.pose.to_lowercase().as_str() {
            "flat" => StartPose::Flat,
            "tilted" => StartPose::Tilted,
            other => {
                warn!("unknown pose '{}', using flat", other);
                StartPose::Flat
            }
        }
    }

    /// Render configuration with the requested window size
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width.max(1),
            window_height: self.height.max(1),
            ..RenderConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lowpoly-plane"]);
        assert_eq!(args.seed, None);
        assert_eq!(args.parse_start_pose(), StartPose::Flat);

        let config = args.render_config();
        assert_eq!((config.window_width, config.window_height), (960, 720));
    }

    #[test]
    fn test_tilted_pose_and_seed() {
        let args = Args::parse_from(["lowpoly-plane", "--pose", "Tilted", "--seed", "7"]);
        assert_eq!(args.parse_start_pose(), StartPose::Tilted);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_unknown_pose_falls_back_to_flat() {
        let args = Args::parse_from(["lowpoly-plane", "--pose", "sideways"]);
        assert_eq!(args.parse_start_pose(), StartPose::Flat);
    }

    #[test]
    fn test_window_size_override() {
        let args = Args::parse_from(["lowpoly-plane", "--width", "400", "--height", "0"]);
        let config = args.render_config();
        assert_eq!((config.window_width, config.window_height), (400, 1));
    }
}
