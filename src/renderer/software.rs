//! ---------------------------------------------------------------------------
//! Software (CPU) frame-buffer
//!
//! * Stores pixels in **0x00RRGGBB**, row-major, ready for
//!   `minifb::Window::update_with_buffer`.
//! * Implements [`RenderSurface`], so a frame is just
//!   `begin_frame` → `draw_columns` → `end_frame`.
//! ---------------------------------------------------------------------------

use crate::{config::Rgb, renderer::RenderSurface};

/// Column renderer target.
#[derive(Default)]
pub struct Framebuffer {
    scratch: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let mut fb = Self::default();
        fb.begin_frame(width, height, 0);
        fb
    }

    /// (Re)allocate for the requested resolution and clear to `clear`.
    pub fn begin_frame(&mut self, w: usize, h: usize, clear: Rgb) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(clear);
    }

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// Software callers pass `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    pub fn end_frame<F, R>(&mut self, submit: F) -> R
    where
        F: FnOnce(&[Rgb], usize, usize) -> R,
    {
        submit(&self.scratch, self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.scratch
    }

    /// Pixel at `(x, y)`, `None` off-screen.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.scratch[y * self.width + x])
    }

    /// Set a single pixel; off-screen writes are dropped.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, col: Rgb) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = col;
        }
    }

    /// Integer Bresenham line, clipped per pixel.
    pub fn draw_line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, col: Rgb) {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, col);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

impl RenderSurface for Framebuffer {
    fn draw_vertical_line(&mut self, x: i32, y1: i32, y2: i32, color: Rgb) {
        if !(0..self.width as i32).contains(&x) {
            return;
        }
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        let lo = lo.max(0);
        let hi = hi.min(self.height as i32 - 1);
        for y in lo..=hi {
            self.scratch[y as usize * self.width + x as usize] = color;
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
