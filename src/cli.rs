use std::borrow::Cow;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::Vec2;
use log::LevelFilter;

use bounce_ray::{RaySpec, parse_vec2};

/// Log levels selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn vec2_arg(s: &str) -> Result<Vec2, String> {
    parse_vec2(s).ok_or_else(|| format!("expected X,Y but got '{}'", s))
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "bounce-ray")]
#[command(about = "Trace rays that bounce off the colliders of a 2D scene")]
pub struct Args {
    /// Scene file (JSON)
    pub scene: PathBuf,

    /// Ray origin as X,Y (traces this ray instead of the scene's list)
    #[arg(long, value_parser = vec2_arg, requires = "direction", allow_hyphen_values = true)]
    pub origin: Option<Vec2>,

    /// Ray direction as X,Y
    #[arg(long, value_parser = vec2_arg, requires = "origin", allow_hyphen_values = true)]
    pub direction: Option<Vec2>,

    /// Travel budget (overrides the scene settings)
    #[arg(long, allow_hyphen_values = true)]
    pub budget: Option<f32>,

    /// Collision layer bitmask (overrides the scene settings)
    #[arg(long)]
    pub layers: Option<u32>,

    /// Maximum number of bounces (overrides the scene settings)
    #[arg(long)]
    pub max_bounces: Option<usize>,

    /// Print paths as JSON
    #[arg(long)]
    pub json: bool,

    /// Set the logging level
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Args {
    /// The ray given on the command line, if any
    pub fn ray(&self) -> Option<(Vec2, Vec2)> {
        self.origin.zip(self.direction)
    }

    /// Rays to trace: the command line ray, or else the scene's own list
    pub fn rays<'a>(&self, listed: &'a [RaySpec]) -> Cow<'a, [RaySpec]> {
        match self.ray() {
            Some((origin, direction)) => Cow::Owned(vec![RaySpec { origin, direction }]),
            None => Cow::Borrowed(listed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_ray() {
        let args = Args::try_parse_from([
            "bounce-ray",
            "scene.json",
            "--origin",
            "1,-2",
            "--direction",
            "-1,0",
            "--budget",
            "12",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.ray(), Some((Vec2::new(1.0, -2.0), Vec2::new(-1.0, 0.0))));
        assert_eq!(args.budget, Some(12.0));
        assert!(args.json);
        assert_eq!(args.layers, None);
    }

    #[test]
    fn test_rays_borrow_scene_list() {
        let listed = [
            RaySpec {
                origin: Vec2::ZERO,
                direction: Vec2::X,
            },
            RaySpec {
                origin: Vec2::ONE,
                direction: Vec2::Y,
            },
        ];

        let args = Args::try_parse_from(["bounce-ray", "scene.json"]).unwrap();
        let rays = args.rays(&listed);
        assert!(matches!(rays, Cow::Borrowed(_)));
        assert_eq!(rays.len(), 2);

        let args = Args::try_parse_from([
            "bounce-ray",
            "scene.json",
            "--origin",
            "3,4",
            "--direction",
            "0,-1",
        ])
        .unwrap();
        let rays = args.rays(&listed);
        assert!(matches!(rays, Cow::Owned(_)));
        assert_eq!(
            &rays[..],
            &[RaySpec {
                origin: Vec2::new(3.0, 4.0),
                direction: Vec2::NEG_Y,
            }]
        );
    }

    #[test]
    fn test_origin_requires_direction() {
        assert!(Args::try_parse_from(["bounce-ray", "scene.json", "--origin", "1,2"]).is_err());
    }

    #[test]
    fn test_bad_vector() {
        assert!(
            Args::try_parse_from([
                "bounce-ray",
                "scene.json",
                "--origin",
                "nope",
                "--direction",
                "1,0"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bounce-ray", "scene.json"]).unwrap();
        assert_eq!(args.ray(), None);
        assert_eq!(args.max_bounces, None);
        assert!(!args.json);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Warn);
    }
}
