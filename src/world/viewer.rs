use glam::{DVec2, dvec2};

/// Viewer spawn on the built-in map: inside cell (8, 3), facing 60°.
pub const SPAWN_POS: DVec2 = dvec2(8.0 * 64.0 + 25.0, 3.0 * 64.0 + 25.0);
/// 60° at the default 1920-step resolution.
pub const SPAWN_ANGLE: usize = 320;

/// Eye position in world space plus a discrete heading.
///
/// * `pos` is in world units, +X right, +Y up.
/// * `angle` indexes the trig tables (0 = east, counter-clockwise).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewer {
    pub pos: DVec2,
    pub angle: usize,
}

impl Viewer {
    pub fn new(pos: DVec2, angle: usize) -> Self {
        Self { pos, angle }
    }

    /// Cell containing the viewer, in virtual (Y-up) cell coordinates.
    #[inline]
    pub fn cell(&self, cell_size: i64) -> (i64, i64) {
        let s = cell_size as f64;
        ((self.pos.x / s).floor() as i64, (self.pos.y / s).floor() as i64)
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(SPAWN_POS, SPAWN_ANGLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_cell() {
        let v = Viewer::default();
        assert_eq!(v.cell(64), (8, 3));
        let v = Viewer::new(dvec2(-1.0, 64.0), 0);
        assert_eq!(v.cell(64), (-1, 1));
    }
}
