//! Top-down view of the grid, the viewer and its ray fan.
//!
//! ```bash
//! cargo run --bin map_view -- [--map level.txt]
//! ```
//!
//! Same controls as `gridcast`; every 8th ray is drawn to its hit point.

use anyhow::Context;
use clap::Parser;
use glam::DVec2;
use minifb::{Key, Window, WindowOptions};

use gridcast::{
    cli::Opts,
    config::Rgb,
    engine::{FrameRenderer, HitAxis},
    renderer::Framebuffer,
    sim::{Commands, Player},
};

const SIZE: usize = 640;
const RAY_STRIDE: usize = 8;

const WALL: Rgb = 0x00_404040;
const FLOOR: Rgb = 0x00_F0F0F0;
const GRID: Rgb = 0x00_D0D0D0;
const VIEWER: Rgb = 0x00_FF0000;
const RAY_V: Rgb = 0x00_008000;
const RAY_H: Rgb = 0x00_006400;

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let world = opts.load_world().context("loading map")?;
    let renderer = FrameRenderer::new(opts.render_config(), world).context("bad configuration")?;
    let cfg = renderer.config().clone();
    let world = renderer.world();
    let tables = renderer.tables();
    let caster = renderer.caster();

    println!("map: {}x{} cells", world.cols(), world.rows());

    // ─────────── world‑space → screen‑space transform ────────────
    let cell = cfg.cell_size as f64;
    let map_w = world.cols() as f64 * cell;
    let map_h = world.rows() as f64 * cell;
    let scale = (SIZE as f64 / map_w).min(SIZE as f64 / map_h);
    let to_screen = |p: DVec2| -> (i32, i32) {
        let sx = (p.x * scale) as i32;
        let sy = SIZE as i32 - 1 - (p.y * scale) as i32; // invert Y so +Y is up
        (sx, sy)
    };

    let mut player = Player::new(opts.viewer(), &cfg);
    let mut fb = Framebuffer::new(SIZE, SIZE);
    let mut win = Window::new("gridcast map", SIZE, SIZE, WindowOptions::default())?;
    win.set_target_fps(20);

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let mut cmd = Commands::empty();
        for (keys, c) in [
            ([Key::Left, Key::A], Commands::TURN_LEFT),
            ([Key::Right, Key::D], Commands::TURN_RIGHT),
            ([Key::Up, Key::W], Commands::FORWARD),
            ([Key::Down, Key::S], Commands::BACKWARD),
        ] {
            if keys.iter().any(|&k| win.is_key_down(k)) {
                cmd |= c;
            }
        }
        player.apply(cmd, world);
        let viewer = player.viewer();

        fb.begin_frame(SIZE, SIZE, FLOOR);

        // ─────────── cells ────────────
        for cy in 0..world.rows() as i64 {
            for cx in 0..world.cols() as i64 {
                let (x0, y1) = to_screen(DVec2::new(cx as f64 * cell, cy as f64 * cell));
                let (x1, y0) = to_screen(DVec2::new((cx + 1) as f64 * cell, (cy + 1) as f64 * cell));
                let colour = if world.is_wall_at(cx, cy) { WALL } else { FLOOR };
                for y in y0..=y1 {
                    fb.draw_line(x0, y, x1, y, colour);
                }
                fb.draw_line(x0, y0, x1, y0, GRID);
                fb.draw_line(x0, y0, x0, y1, GRID);
            }
        }

        // ─────────── ray fan ────────────
        let (ox, oy) = to_screen(viewer.pos);
        for ray in (0..cfg.columns).step_by(RAY_STRIDE) {
            let angle = renderer.ray_angle(viewer.angle, ray);
            if let Some(hit) = caster.cast(viewer.pos, angle) {
                let (hx, hy) = to_screen(hit.point(viewer.pos, tables, angle));
                let colour = match hit.axis {
                    HitAxis::Vertical => RAY_V,
                    HitAxis::Horizontal => RAY_H,
                };
                fb.draw_line(ox, oy, hx, hy, colour);
            }
        }

        // ─────────── viewer ────────────
        for d in -2..=2 {
            fb.draw_line(ox - 2, oy + d, ox + 2, oy + d, VIEWER);
        }

        fb.end_frame(|px, w, h| win.update_with_buffer(px, w, h))?;
    }
    Ok(())
}
