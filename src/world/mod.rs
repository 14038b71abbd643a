mod grid;
mod viewer;

pub use grid::{Cell, DEFAULT_MAP, GridWorld, MapError};

pub use viewer::{SPAWN_ANGLE, SPAWN_POS, Viewer};
