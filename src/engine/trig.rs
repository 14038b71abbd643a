//! Per-angle lookup tables for the caster.
//!
//! The circle is cut into `N` equal steps. Entry `i` describes the ray at
//! `(i + 0.5) · 360°/N`; the half-step keeps every entry off 0°, 90°, 180°
//! and 270°, so no table value is ever infinite. Tables hold `N + 1` entries
//! (index `N` = the 360° wrap point).
//!
//! ```text
//!          90 (+Y)
//!           |
//!   180 ----+---- 0 (+X)
//!           |
//!          270
//! ```

use std::f64::consts::TAU;

#[derive(Clone, Debug)]
pub struct TrigTables {
    steps: usize,
    tan: Vec<f64>,
    recip_tan: Vec<f64>,
    recip_cos: Vec<f64>,
    recip_sin: Vec<f64>,
    /// y advance between successive vertical grid lines (sign = ray's y dir)
    y_step: Vec<f64>,
    /// x advance between successive horizontal grid lines (sign = ray's x dir)
    x_step: Vec<f64>,
}

impl TrigTables {
    /// Build all tables for `steps` angles and square cells of `cell_size`.
    ///
    /// `steps` must be a positive multiple of 4 (checked by
    /// [`RenderConfig::validate`](crate::config::RenderConfig::validate)).
    pub fn new(steps: usize, cell_size: f64) -> Self {
        debug_assert!(steps > 0 && steps % 4 == 0);
        let len = steps + 1;
        let mut t = Self {
            steps,
            tan: Vec::with_capacity(len),
            recip_tan: Vec::with_capacity(len),
            recip_cos: Vec::with_capacity(len),
            recip_sin: Vec::with_capacity(len),
            y_step: Vec::with_capacity(len),
            x_step: Vec::with_capacity(len),
        };

        for i in 0..len {
            let rad = t.radians(i);
            let tan = rad.tan();
            let recip_tan = 1.0 / tan;

            t.tan.push(tan);
            t.recip_tan.push(recip_tan);
            t.recip_cos.push(1.0 / rad.cos());
            t.recip_sin.push(1.0 / rad.sin());

            // one cell to the side moves tan·cell vertically, and vice versa
            let dy = (tan * cell_size).abs();
            let dx = (recip_tan * cell_size).abs();
            let (up, right) = (t.faces_up(i), t.faces_right(i));
            t.y_step.push(if up { dy } else { -dy });
            t.x_step.push(if right { dx } else { -dx });
        }
        t
    }

    /*──────────────────────── index helpers ─────────────────────────*/

    /// Number of steps in a full turn (`N`). Also the largest valid index.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Radians covered by one step.
    #[inline]
    pub fn step_radians(&self) -> f64 {
        TAU / self.steps as f64
    }

    /// Ray direction for index `i`, including the half-step offset.
    #[inline]
    pub fn radians(&self, i: usize) -> f64 {
        (i as f64 + 0.5) * self.step_radians()
    }

    /// Plain heading for index `i` (no offset); used for walking.
    #[inline]
    pub fn heading_radians(&self, i: usize) -> f64 {
        i as f64 * self.step_radians()
    }

    /// Reduce any index into `0..N`.
    #[inline]
    pub fn wrap(&self, i: usize) -> usize {
        i % self.steps
    }

    /// Ray points into the upper half-plane (+Y). Index `N` counts as 0.
    #[inline]
    pub fn faces_up(&self, i: usize) -> bool {
        self.wrap(i) < self.steps / 2
    }

    /// Ray points into the right half-plane (+X).
    #[inline]
    pub fn faces_right(&self, i: usize) -> bool {
        let i = self.wrap(i);
        i < self.steps / 4 || i >= 3 * self.steps / 4
    }

    /*──────────────────────── table lookups ─────────────────────────*/

    #[inline]
    pub fn tan(&self, i: usize) -> f64 {
        self.tan[i]
    }

    #[inline]
    pub fn recip_tan(&self, i: usize) -> f64 {
        self.recip_tan[i]
    }

    #[inline]
    pub fn recip_cos(&self, i: usize) -> f64 {
        self.recip_cos[i]
    }

    #[inline]
    pub fn recip_sin(&self, i: usize) -> f64 {
        self.recip_sin[i]
    }

    #[inline]
    pub fn y_step(&self, i: usize) -> f64 {
        self.y_step[i]
    }

    #[inline]
    pub fn x_step(&self, i: usize) -> f64 {
        self.x_step[i]
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> TrigTables {
        TrigTables::new(1920, 64.0)
    }

    #[test]
    fn endpoints_and_spacing() {
        let t = tables();
        assert_eq!(t.steps(), 1920);
        assert!((t.step_radians() - 0.1875_f64.to_radians()).abs() < 1e-15);
        assert!((t.radians(0) - 0.09375_f64.to_radians()).abs() < 1e-15);
        assert!((t.heading_radians(1920) - TAU).abs() < 1e-12);
        // index N is still addressable and behaves like index 0
        assert!(t.tan(1920).is_finite());
        assert!(t.faces_up(1920) && t.faces_right(1920));
        assert!(t.y_step(1920) > 0.0 && t.x_step(1920) > 0.0);
    }

    #[test]
    fn every_entry_is_finite() {
        let t = tables();
        for i in 0..=t.steps() {
            for v in [
                t.tan(i),
                t.recip_tan(i),
                t.recip_cos(i),
                t.recip_sin(i),
                t.x_step(i),
                t.y_step(i),
            ] {
                assert!(v.is_finite(), "non-finite entry at index {i}");
            }
        }
    }

    #[test]
    fn step_signs_follow_quadrant() {
        let t = tables();
        for (i, up, right) in [
            (100, true, true),    // ~19°
            (600, true, false),   // ~113°
            (1100, false, false), // ~206°
            (1700, false, true),  // ~319°
        ] {
            assert_eq!(t.faces_up(i), up, "faces_up({i})");
            assert_eq!(t.faces_right(i), right, "faces_right({i})");
            assert_eq!(t.y_step(i) > 0.0, up, "y_step sign at {i}");
            assert_eq!(t.x_step(i) > 0.0, right, "x_step sign at {i}");
        }
        // quadrant edges
        assert!(t.faces_up(959) && !t.faces_up(960));
        assert!(t.faces_right(479) && !t.faces_right(480));
        assert!(!t.faces_right(1439) && t.faces_right(1440));
    }

    #[test]
    fn step_magnitudes_match_tangent() {
        let t = tables();
        // at ~45° one cell across is one cell up
        let i = 239; // (239 + 0.5) · 0.1875 = 44.90625°
        assert!((t.y_step(i) - t.tan(i) * 64.0).abs() < 1e-9);
        assert!((t.x_step(i) - t.recip_tan(i) * 64.0).abs() < 1e-9);
        assert!((t.y_step(i) - 64.0).abs() < 0.5);
    }

    #[test]
    fn reciprocal_tables_are_reciprocal() {
        let t = tables();
        for i in [0, 17, 480, 777, 1439, 1919] {
            let rad = t.radians(i);
            assert!((t.recip_cos(i) * rad.cos() - 1.0).abs() < 1e-9);
            assert!((t.recip_sin(i) * rad.sin() - 1.0).abs() < 1e-9);
            assert!((t.recip_tan(i) * t.tan(i) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn wrap_reduces_modulo_n() {
        let t = tables();
        assert_eq!(t.wrap(1920), 0);
        assert_eq!(t.wrap(1920 + 7), 7);
        assert_eq!(t.wrap(5), 5);
    }
}
