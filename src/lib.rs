//! Grid raycaster: first-person wall columns cast from a 2-D cell map.
//!
//! * [`world`]  – the cell map and the viewer pose.
//! * [`engine`] – angle tables, the per-ray caster and the column projector.
//! * [`sim`]    – turn/move commands with wall clearance.
//! * [`renderer`] – the vertical-line surface and a CPU frame-buffer.

pub mod cli;
pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
