//! Command-line options shared by `gridcast` and `map_view`.

use std::path::PathBuf;

use clap::Parser;
use glam::dvec2;

use crate::{
    config::RenderConfig,
    world::{GridWorld, MapError, SPAWN_ANGLE, SPAWN_POS, Viewer},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Opts {
    /// Map file: rows of `1` (wall) and `0` (empty). Built-in map if omitted.
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Spawn x in world units
    #[arg(long, default_value_t = SPAWN_POS.x, allow_negative_numbers = true)]
    pub x: f64,

    /// Spawn y in world units
    #[arg(long, default_value_t = SPAWN_POS.y, allow_negative_numbers = true)]
    pub y: f64,

    /// Spawn heading as an angle-table index (0 = east)
    #[arg(long, default_value_t = SPAWN_ANGLE)]
    pub angle: usize,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 320)]
    pub width: usize,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 200)]
    pub height: usize,

    /// Window magnification (1, 2, 4, 8, 16 or 32)
    #[arg(long, default_value_t = 2)]
    pub scale: u8,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f64,

    /// Rays per frame
    #[arg(long, default_value_t = 320)]
    pub columns: usize,

    /// Angle-table steps per full turn
    #[arg(long, default_value_t = 1920)]
    pub steps: usize,
}

impl Opts {
    /// Defaults with the CLI overrides applied. Not validated yet.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            viewport_width: self.width,
            viewport_height: self.height,
            fov_degrees: self.fov,
            columns: self.columns,
            angle_steps: self.steps,
            ..RenderConfig::default()
        }
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::new(dvec2(self.x, self.y), self.angle)
    }

    /// `--map` if given, the built-in map otherwise.
    pub fn load_world(&self) -> Result<GridWorld, MapError> {
        match &self.map {
            Some(path) => GridWorld::from_file(path),
            None => GridWorld::default_map(),
        }
    }

    /// `--scale` as a `minifb` window scale; unknown factors fall back to 1×.
    pub fn window_scale(&self) -> minifb::Scale {
        use minifb::Scale;
        match self.scale {
            2 => Scale::X2,
            4 => Scale::X4,
            8 => Scale::X8,
            16 => Scale::X16,
            32 => Scale::X32,
            _ => Scale::X1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::ConfigError;

    #[test]
    fn defaults_match_render_config() {
        let opts = Opts::try_parse_from(["gridcast"]).unwrap();
        assert_eq!(opts.render_config(), RenderConfig::default());
        assert_eq!(opts.viewer(), Viewer::default());
        assert!(opts.map.is_none());
        assert_eq!(opts.load_world().unwrap().rows(), 16);
    }

    #[test]
    fn overrides_reach_the_config() {
        let opts = Opts::try_parse_from([
            "gridcast", "--fov", "90", "--steps", "2560", "--width", "640", "--columns", "640",
            "--x", "100.5", "--angle", "7",
        ])
        .unwrap();
        let cfg = opts.render_config();
        assert_eq!(cfg.fov_degrees, 90.0);
        assert_eq!(cfg.angle_steps, 2560);
        assert_eq!(cfg.columns, 640);
        assert_eq!(cfg.viewport_width, 640);
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(opts.viewer(), Viewer::new(dvec2(100.5, SPAWN_POS.y), 7));
    }

    #[test]
    fn width_without_columns_is_rejected() {
        let opts = Opts::try_parse_from(["gridcast", "--width", "640"]).unwrap();
        assert!(matches!(
            opts.render_config().validate(),
            Err(ConfigError::ColumnsViewportMismatch { .. })
        ));
    }

    #[test]
    fn missing_map_file_is_an_io_error() {
        let opts = Opts::try_parse_from(["gridcast", "--map", "/no/such/map.txt"]).unwrap();
        assert!(matches!(opts.load_world(), Err(MapError::Io(_))));
    }
}
