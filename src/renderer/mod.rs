//! Rendering abstraction layer.
//!
//! *The caster never touches a pixel buffer directly.*
//! [`FrameRenderer`](crate::engine::FrameRenderer) produces a list of
//! [`Column`]s and hands them to a type that implements [`RenderSurface`].
//!
//! * The surface needs exactly one primitive: a vertical line.
//! * A blanket-impl helper trait, [`RenderSurfaceExt`], adds
//!   `draw_columns` so call-sites stay short.
//!
//! Draw order across columns does not matter; within a column the sliver
//! and its two fills never overlap.

use smallvec::SmallVec;

use crate::{config::Rgb, engine::Column};

pub mod software;

pub use software::Framebuffer;

/// One vertical line, `y1 ..= y2` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VLine {
    pub x: i32,
    pub y1: i32,
    pub y2: i32,
    pub color: Rgb,
}

/// Anything that can paint a vertical line.
pub trait RenderSurface {
    fn draw_vertical_line(&mut self, x: i32, y1: i32, y2: i32, color: Rgb);
}

/// Draw calls for one column: ceiling fill, sliver, floor fill.
///
/// Fills are skipped when the sliver already reaches the screen edge, so the
/// calls always partition `0 .. height` exactly.
pub fn column_calls(col: &Column, height: usize, background: Rgb) -> SmallVec<[VLine; 3]> {
    let x = col.x as i32;
    let top = col.top as i32;
    let bottom = col.bottom as i32;
    let last = height as i32 - 1;

    let mut calls = SmallVec::new();
    if top > 0 {
        calls.push(VLine {
            x,
            y1: 0,
            y2: top - 1,
            color: background,
        });
    }
    calls.push(VLine {
        x,
        y1: top,
        y2: bottom,
        color: col.color,
    });
    if bottom < last {
        calls.push(VLine {
            x,
            y1: bottom + 1,
            y2: last,
            color: background,
        });
    }
    calls
}

/// Convenience blanket-impl with a one-liner `draw_columns` adaptor.
pub trait RenderSurfaceExt: RenderSurface {
    fn draw_columns(&mut self, columns: &[Column], height: usize, background: Rgb) {
        for col in columns {
            for l in column_calls(col, height, background) {
                self.draw_vertical_line(l.x, l.y1, l.y2, l.color);
            }
        }
    }
}
impl<T: RenderSurface + ?Sized> RenderSurfaceExt for T {}

/// Surface that just records what it was asked to draw.
impl RenderSurface for Vec<VLine> {
    fn draw_vertical_line(&mut self, x: i32, y1: i32, y2: i32, color: Rgb) {
        self.push(VLine { x, y1, y2, color });
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;

    fn col(top: usize, bottom: usize) -> Column {
        Column {
            x: 7,
            top,
            bottom,
            color: 0x00_00FF00,
            hit: None,
        }
    }

    #[test]
    fn column_emits_fill_sliver_fill() {
        let calls = column_calls(&col(40, 60), 100, 0x00_111111);
        assert_eq!(
            calls.as_slice(),
            &[
                VLine { x: 7, y1: 0, y2: 39, color: 0x00_111111 },
                VLine { x: 7, y1: 40, y2: 60, color: 0x00_00FF00 },
                VLine { x: 7, y1: 61, y2: 99, color: 0x00_111111 },
            ]
        );
    }

    #[test]
    fn full_height_sliver_needs_no_fill() {
        let calls = column_calls(&col(0, 99), 100, 0);
        assert_eq!(calls.len(), 1);
        assert_eq!((calls[0].y1, calls[0].y2), (0, 99));
    }

    #[test]
    fn recording_surface_sees_every_call() {
        let mut rec: Vec<VLine> = Vec::new();
        rec.draw_columns(&[col(10, 20), col(0, 5)], 30, 0);
        // 3 calls for the first column, sliver + floor for the second
        assert_eq!(rec.len(), 5);
        assert!(rec.iter().all(|l| l.x == 7));
    }
}
