//! Grid-boundary marching.
//!
//! A ray is tested against the two families of grid lines separately:
//!
//! * **vertical** lines (`x = k·cell`) – step one cell in X, `tan·cell` in Y;
//! * **horizontal** lines (`y = k·cell`) – step one cell in Y, `cot·cell` in X.
//!
//! Each march stops at its first wall; the nearer of the two is the hit.
//! Termination relies on the grid's closed wall ring.

use glam::DVec2;

use super::trig::TrigTables;
use crate::world::GridWorld;

/// Which family of grid lines produced the hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitAxis {
    /// `x = const` line: an east or west wall face.
    Vertical,
    /// `y = const` line: a north or south wall face.
    Horizontal,
}

/// Wall found by one of the two marches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryHit {
    /// Length along the ray from the origin to the hit.
    pub distance: f64,
    /// Coordinate of the hit along the line it lies on
    /// (y for vertical lines, x for horizontal ones).
    pub intercept: f64,
}

/// Nearest wall along one ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub axis: HitAxis,
    pub distance: f64,
    pub intercept: f64,
}

impl RayHit {
    /// World-space point where the ray meets the wall.
    pub fn point(&self, origin: DVec2, tables: &TrigTables, angle: usize) -> DVec2 {
        let rad = tables.radians(angle);
        match self.axis {
            HitAxis::Vertical => DVec2::new(origin.x + self.distance * rad.cos(), self.intercept),
            HitAxis::Horizontal => DVec2::new(self.intercept, origin.y + self.distance * rad.sin()),
        }
    }
}

/// Stateless ray caster over borrowed, immutable world data.
#[derive(Clone, Copy)]
pub struct RayCaster<'a> {
    world: &'a GridWorld,
    tables: &'a TrigTables,
    cell: i64,
}

impl<'a> RayCaster<'a> {
    pub fn new(world: &'a GridWorld, tables: &'a TrigTables, cell_size: i64) -> Self {
        Self {
            world,
            tables,
            cell: cell_size,
        }
    }

    /// Cast from `origin` along table index `angle` (`0..=N`).
    ///
    /// Ties go to the horizontal hit: the vertical one must be *strictly*
    /// nearer to win. `None` only if both marches leave the grid, which a
    /// closed map rules out.
    pub fn cast(&self, origin: DVec2, angle: usize) -> Option<RayHit> {
        nearest(
            self.march_vertical(origin, angle),
            self.march_horizontal(origin, angle),
        )
    }

    /*──────────────────────── vertical lines ─────────────────────────*/

    /// Walk `x = k·cell` lines in the ray's X direction.
    pub fn march_vertical(&self, origin: DVec2, angle: usize) -> Option<BoundaryHit> {
        let t = self.tables;
        let cell = self.cell;
        let cell_f = cell as f64;

        let x_cell = (origin.x / cell_f).floor() as i64;
        // first line ahead, direction, and which side of it holds the cell
        let (mut x_bound, x_delta, side) = if t.faces_right(angle) {
            ((x_cell + 1) * cell, cell, 0)
        } else {
            (x_cell * cell, -cell, -1)
        };

        let mut yi = t.tan(angle) * (x_bound as f64 - origin.x) + origin.y;

        for _ in 0..=self.world.cols() {
            let cell_x = (x_bound + side).div_euclid(cell);
            let cell_y = (yi / cell_f).floor() as i64;

            if self.world.is_wall_at(cell_x, cell_y) {
                return Some(BoundaryHit {
                    distance: (yi - origin.y) * t.recip_sin(angle),
                    intercept: yi,
                });
            }
            yi += t.y_step(angle);
            x_bound += x_delta;
        }
        None
    }

    /*──────────────────────── horizontal lines ───────────────────────*/

    /// Walk `y = k·cell` lines in the ray's Y direction.
    pub fn march_horizontal(&self, origin: DVec2, angle: usize) -> Option<BoundaryHit> {
        let t = self.tables;
        let cell = self.cell;
        let cell_f = cell as f64;

        let y_cell = (origin.y / cell_f).floor() as i64;
        let (mut y_bound, y_delta, side) = if t.faces_up(angle) {
            ((y_cell + 1) * cell, cell, 0)
        } else {
            (y_cell * cell, -cell, -1)
        };

        let mut xi = t.recip_tan(angle) * (y_bound as f64 - origin.y) + origin.x;

        for _ in 0..=self.world.rows() {
            let cell_x = (xi / cell_f).floor() as i64;
            let cell_y = (y_bound + side).div_euclid(cell);

            if self.world.is_wall_at(cell_x, cell_y) {
                return Some(BoundaryHit {
                    distance: (xi - origin.x) * t.recip_cos(angle),
                    intercept: xi,
                });
            }
            xi += t.x_step(angle);
            y_bound += y_delta;
        }
        None
    }
}

/// Nearer of the two march results; the vertical one must be strictly
/// nearer to win.
pub fn nearest(v: Option<BoundaryHit>, h: Option<BoundaryHit>) -> Option<RayHit> {
    match (v, h) {
        (Some(v), Some(h)) if v.distance < h.distance => Some(v.into_ray(HitAxis::Vertical)),
        (_, Some(h)) => Some(h.into_ray(HitAxis::Horizontal)),
        (Some(v), None) => Some(v.into_ray(HitAxis::Vertical)),
        (None, None) => None,
    }
}

impl BoundaryHit {
    #[inline]
    fn into_ray(self, axis: HitAxis) -> RayHit {
        RayHit {
            axis,
            distance: self.distance,
            intercept: self.intercept,
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
