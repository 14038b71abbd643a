//! Start-up parameters shared by every stage of the caster.
//!
//! All fields are plain data; [`RenderConfig::validate`] is the single gate
//! that turns a bad combination into a [`ConfigError`] before any table is
//! built or any ray is cast.

use thiserror::Error;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgb = u32;

/*──────────────────────────── Palette ──────────────────────────────*/

/// Colours used by the frame renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Sliver hit on a vertical grid line (east/west face).
    pub vertical: Rgb,
    /// Sliver hit on a horizontal grid line (north/south face), darker.
    pub horizontal: Rgb,
    /// Either axis, when the intercept sits on a cell edge.
    pub boundary: Rgb,
    /// Ceiling and floor fill.
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            vertical: 0x00_008000,
            horizontal: 0x00_006400,
            boundary: 0x00_FFFFFF,
            background: 0x00_F0F0F0,
        }
    }
}

/*──────────────────────────── Errors ───────────────────────────────*/

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("viewport must be at least 1x1 pixels")]
    ZeroViewport,

    #[error("angle table resolution {0} must be a positive multiple of 4")]
    BadResolution(usize),

    #[error("field of view covers {fov_steps} angle steps but {columns} columns are cast")]
    FovMismatch { fov_steps: usize, columns: usize },

    #[error("{columns} columns cannot cover a {width}-pixel wide viewport (one ray per pixel column)")]
    ColumnsViewportMismatch { columns: usize, width: usize },

    #[error("cell size {0} must be positive")]
    BadCellSize(i64),

    #[error("`{0}` must be a positive, finite number")]
    NonPositive(&'static str),

    #[error("clearance {clearance} must stay below half a cell ({cell} units)")]
    ClearanceTooLarge { clearance: f64, cell: i64 },

    #[error("grid is {found:?} (rows, cols) but {expected:?} was configured")]
    GridMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/*──────────────────────────── Config ───────────────────────────────*/

/// Every tunable of the caster. `Default` reproduces the classic 320-column,
/// 60° look with 64-unit cells.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub viewport_width: usize,
    pub viewport_height: usize,
    /// Horizontal field of view in degrees.
    pub fov_degrees: f64,
    /// Rays per frame, one per screen column.
    pub columns: usize,
    /// Side of one square cell in world units.
    pub cell_size: i64,
    pub grid_rows: usize,
    pub grid_cols: usize,
    /// Discrete angle steps covering 360°.
    pub angle_steps: usize,
    /// Numerator of `height = scale / distance`.
    pub projection_scale: f64,
    /// Max offset from a cell edge (world units) that still gets the
    /// boundary tone.
    pub boundary_epsilon: f64,
    /// Minimum distance kept between viewer and wall faces.
    pub clearance: f64,
    /// World units travelled per move command.
    pub move_speed: f64,
    /// Degrees turned per turn command.
    pub turn_degrees: f64,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport_width: 320,
            viewport_height: 200,
            fov_degrees: 60.0,
            columns: 320,
            cell_size: 64,
            grid_rows: 16,
            grid_cols: 16,
            angle_steps: 1920,
            projection_scale: 15_000.0,
            boundary_epsilon: 1.0,
            clearance: 15.0,
            move_speed: 10.0,
            // 32 steps; 5.625 (30 steps) turns exactly like the classic build
            turn_degrees: 6.0,
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Degrees covered by one angle step.
    #[inline]
    pub fn step_degrees(&self) -> f64 {
        360.0 / self.angle_steps as f64
    }

    /// Angle steps spanned by the field of view.
    pub fn fov_steps(&self) -> usize {
        (self.fov_degrees / self.step_degrees()).round() as usize
    }

    /// Angle steps applied by one turn command.
    pub fn turn_steps(&self) -> usize {
        (self.turn_degrees / self.step_degrees()).round() as usize
    }

    /// Check every cross-field constraint the caster relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(ConfigError::ZeroViewport);
        }
        if self.angle_steps == 0 || self.angle_steps % 4 != 0 {
            return Err(ConfigError::BadResolution(self.angle_steps));
        }
        if self.cell_size <= 0 {
            return Err(ConfigError::BadCellSize(self.cell_size));
        }

        for (name, v) in [
            ("fov_degrees", self.fov_degrees),
            ("projection_scale", self.projection_scale),
            ("clearance", self.clearance),
            ("move_speed", self.move_speed),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(ConfigError::NonPositive(name));
            }
        }
        if !(self.boundary_epsilon.is_finite() && self.boundary_epsilon >= 0.0) {
            return Err(ConfigError::NonPositive("boundary_epsilon"));
        }
        if !(self.turn_degrees.is_finite() && self.turn_degrees >= 0.0) {
            return Err(ConfigError::NonPositive("turn_degrees"));
        }

        if self.clearance * 2.0 >= self.cell_size as f64 {
            return Err(ConfigError::ClearanceTooLarge {
                clearance: self.clearance,
                cell: self.cell_size,
            });
        }

        // one angle step per column, no more, no less
        let fov_steps = self.fov_steps();
        if self.columns == 0 || fov_steps != self.columns {
            return Err(ConfigError::FovMismatch {
                fov_steps,
                columns: self.columns,
            });
        }
        // every pixel column gets exactly one ray
        if self.columns != self.viewport_width {
            return Err(ConfigError::ColumnsViewportMismatch {
                columns: self.columns,
                width: self.viewport_width,
            });
        }
        Ok(())
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.fov_steps(), 320);
        assert!((cfg.step_degrees() - 0.1875).abs() < 1e-12);
        assert_eq!(cfg.turn_steps(), 32);
    }

    #[test]
    fn resolution_must_split_into_quadrants() {
        let cfg = RenderConfig {
            angle_steps: 1922,
            ..RenderConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::BadResolution(1922)));
    }

    #[test]
    fn fov_and_columns_must_agree() {
        let cfg = RenderConfig {
            columns: 300,
            ..RenderConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::FovMismatch {
                fov_steps: 320,
                columns: 300
            })
        );

        // 90° at 1280 steps is exactly 320 columns again
        let wide = RenderConfig {
            fov_degrees: 90.0,
            angle_steps: 1280,
            ..RenderConfig::default()
        };
        assert_eq!(wide.validate(), Ok(()));
    }

    #[test]
    fn columns_must_match_viewport_width() {
        let narrow = RenderConfig {
            viewport_width: 200,
            ..RenderConfig::default()
        };
        let wide = RenderConfig {
            viewport_width: 640,
            ..RenderConfig::default()
        };
        for cfg in [narrow, wide] {
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::ColumnsViewportMismatch {
                    columns: 320,
                    width: cfg.viewport_width
                })
            );
        }

        // 640 columns at 60° need 3840 steps
        let hi_res = RenderConfig {
            viewport_width: 640,
            columns: 640,
            angle_steps: 3840,
            ..RenderConfig::default()
        };
        assert_eq!(hi_res.validate(), Ok(()));
    }

    #[test]
    fn clearance_bounded_by_cell() {
        let cfg = RenderConfig {
            clearance: 32.0,
            ..RenderConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ClearanceTooLarge { .. })
        ));

        let cfg = RenderConfig {
            move_speed: 0.0,
            ..RenderConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositive("move_speed")));
    }
}
