//! Ray fan → screen columns.
//!
//! One ray per column, swept counter-clockwise from `view − fov/2` to
//! `view + fov/2`. Ray `i` lands on screen column `width − 1 − i`, so the most
//! counter-clockwise ray ends up on the left edge.
//!
//! Nothing here touches pixels; the result is a `Vec<Column>` that
//! [`RenderSurfaceExt::draw_columns`](crate::renderer::RenderSurfaceExt::draw_columns)
//! turns into draw calls.

use rayon::prelude::*;

use super::{
    caster::{HitAxis, RayCaster, RayHit},
    trig::TrigTables,
};
use crate::{
    config::{ConfigError, Palette, RenderConfig, Rgb},
    world::{GridWorld, Viewer},
};

/// One screen column ready to be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    /// Screen x.
    pub x: usize,
    /// First sliver row (inclusive).
    pub top: usize,
    /// Last sliver row (inclusive).
    pub bottom: usize,
    pub color: Rgb,
    /// Raw cast result, `None` for a ray that found nothing.
    pub hit: Option<RayHit>,
}

/*──────────────────────── projection helpers ─────────────────────────*/

/// Remove the fisheye bulge: distance along the ray → distance along the
/// view axis. `relative` is the ray's offset from the centre ray (radians).
#[inline]
pub fn fisheye_correct(distance: f64, relative: f64) -> f64 {
    distance * relative.cos()
}

/// Wall height in pixels for a corrected distance.
#[inline]
pub fn projected_height(scale: f64, corrected: f64) -> f64 {
    scale / corrected
}

/// Inclusive `(top, bottom)` rows of a sliver `height` pixels tall, centred
/// on the horizon and clamped to the screen.
pub fn sliver_span(height: f64, screen_h: usize) -> (usize, usize) {
    let last = screen_h as i64 - 1;
    let mid = (screen_h / 2) as f64;
    let top = ((mid - height / 2.0) as i64).clamp(0, last);
    let bottom = ((top as f64 + height) as i64).clamp(0, last);
    (top as usize, bottom as usize)
}

/// Sliver colour: axis tone, or the boundary tone when the intercept is
/// within `epsilon` past a cell edge.
pub fn shade(hit: &RayHit, cell_size: i64, epsilon: f64, palette: &Palette) -> Rgb {
    let offset = hit.intercept.floor().rem_euclid(cell_size as f64);
    if offset <= epsilon {
        return palette.boundary;
    }
    match hit.axis {
        HitAxis::Vertical => palette.vertical,
        HitAxis::Horizontal => palette.horizontal,
    }
}

/*──────────────────────────── renderer ───────────────────────────────*/

/// Owns the immutable per-run state: configuration, map and tables.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    config: RenderConfig,
    world: GridWorld,
    tables: TrigTables,
}

impl FrameRenderer {
    /// Validate `config` against itself and `world`, then build the tables.
    pub fn new(config: RenderConfig, world: GridWorld) -> Result<Self, ConfigError> {
        config.validate()?;
        let found = (world.rows(), world.cols());
        let expected = (config.grid_rows, config.grid_cols);
        if found != expected {
            return Err(ConfigError::GridMismatch { expected, found });
        }
        let tables = TrigTables::new(config.angle_steps, config.cell_size as f64);
        Ok(Self {
            config,
            world,
            tables,
        })
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[inline]
    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    #[inline]
    pub fn tables(&self) -> &TrigTables {
        &self.tables
    }

    #[inline]
    pub fn caster(&self) -> RayCaster<'_> {
        RayCaster::new(&self.world, &self.tables, self.config.cell_size)
    }

    /// Half the fan in rays; also the index of the centre ray.
    #[inline]
    fn half_fan(&self) -> usize {
        self.config.columns / 2
    }

    /// Table index of ray `ray` when looking along `view_angle`. Any view
    /// angle is accepted and reduced modulo `N` first.
    #[inline]
    pub fn ray_angle(&self, view_angle: usize, ray: usize) -> usize {
        let n = self.tables.steps();
        self.tables.wrap(self.tables.wrap(view_angle) + n - self.half_fan() + ray)
    }

    /// Offset of ray `ray` from the centre ray, in radians (always ≥ 0).
    #[inline]
    pub fn relative_angle(&self, ray: usize) -> f64 {
        self.half_fan().abs_diff(ray) as f64 * self.tables.step_radians()
    }

    /// Raw cast results for every ray, in sweep order.
    pub fn cast_fan(&self, viewer: &Viewer) -> Vec<Option<RayHit>> {
        let caster = self.caster();
        (0..self.config.columns)
            .map(|i| caster.cast(viewer.pos, self.ray_angle(viewer.angle, i)))
            .collect()
    }

    /// Project ray `ray` into its screen column.
    pub fn column(&self, viewer: &Viewer, ray: usize) -> Column {
        let cfg = &self.config;
        let x = cfg.viewport_width - 1 - ray;
        let angle = self.ray_angle(viewer.angle, ray);

        let Some(hit) = self.caster().cast(viewer.pos, angle) else {
            let mid = cfg.viewport_height / 2;
            return Column {
                x,
                top: mid,
                bottom: mid,
                color: cfg.palette.background,
                hit: None,
            };
        };

        let corrected = fisheye_correct(hit.distance, self.relative_angle(ray));
        let height = projected_height(cfg.projection_scale, corrected);
        let (top, bottom) = sliver_span(height, cfg.viewport_height);

        Column {
            x,
            top,
            bottom,
            color: shade(&hit, cfg.cell_size, cfg.boundary_epsilon, &cfg.palette),
            hit: Some(hit),
        }
    }

    /// Every column of one frame, ray order (screen right → left).
    pub fn columns(&self, viewer: &Viewer) -> Vec<Column> {
        (0..self.config.columns)
            .map(|i| self.column(viewer, i))
            .collect()
    }

    /// Same as [`columns`](Self::columns), rays cast on the rayon pool.
    pub fn columns_par(&self, viewer: &Viewer) -> Vec<Column> {
        (0..self.config.columns)
            .into_par_iter()
            .map(|i| self.column(viewer, i))
            .collect()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
