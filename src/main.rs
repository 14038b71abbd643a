//! First-person grid raycaster.
//!
//! ```bash
//! cargo run --release -- [--map level.txt] [--scale 4]
//! ```
//!
//! `W`/`S` or `↑`/`↓` walk, `A`/`D` or `←`/`→` turn, `P` toggles the parallel
//! column path, `Esc` quits.

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::{Duration, Instant};

use gridcast::{
    cli::Opts,
    engine::FrameRenderer,
    renderer::{Framebuffer, RenderSurfaceExt},
    sim::{Commands, Player},
};

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    // ─────────── world & renderer ───────────
    let world = opts.load_world().with_context(|| match &opts.map {
        Some(p) => format!("loading map {}", p.display()),
        None => "loading built-in map".into(),
    })?;
    println!("map: {}x{} cells", world.cols(), world.rows());

    let renderer = FrameRenderer::new(opts.render_config(), world).context("bad configuration")?;
    let cfg = renderer.config().clone();
    let (w, h) = (cfg.viewport_width, cfg.viewport_height);

    let mut player = Player::new(opts.viewer(), &cfg);
    let spawn = player.viewer();
    let (cx, cy) = spawn.cell(cfg.cell_size);
    println!(
        "spawn: ({:.1}, {:.1}) angle {} / {}  fov {}°  {} columns",
        spawn.pos.x, spawn.pos.y, spawn.angle, cfg.angle_steps, cfg.fov_degrees, cfg.columns
    );
    if renderer.world().is_wall_at(cx, cy) {
        eprintln!("warning: spawn cell ({cx}, {cy}) is a wall");
    }

    let mut fb = Framebuffer::new(w, h);
    let mut win = Window::new(
        "gridcast",
        w,
        h,
        WindowOptions {
            scale: opts.window_scale(),
            ..WindowOptions::default()
        },
    )?;
    win.set_target_fps(20);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();
    let mut parallel = false;

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        /* --------------- one command set per tick ----------------------- */
        let mut cmd = Commands::empty();
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            cmd |= Commands::TURN_LEFT;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            cmd |= Commands::TURN_RIGHT;
        }
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            cmd |= Commands::FORWARD;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            cmd |= Commands::BACKWARD;
        }
        if win.is_key_pressed(Key::P, KeyRepeat::No) {
            parallel = !parallel;
            println!("parallel columns: {parallel}");
        }

        player.apply(cmd, renderer.world());

        /* draw */
        let columns = if parallel {
            renderer.columns_par(player.viewer())
        } else {
            renderer.columns(player.viewer())
        };
        fb.begin_frame(w, h, cfg.palette.background);
        fb.draw_columns(&columns, h, cfg.palette.background);
        acc_time += t0.elapsed();
        acc_frames += 1;
        fb.end_frame(|px, w, h| win.update_with_buffer(px, w, h))?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            let fps = 1000.0 / avg_ms;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, fps);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
