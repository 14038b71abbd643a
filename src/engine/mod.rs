mod caster;
mod frame;
mod trig;

pub use caster::{BoundaryHit, HitAxis, RayCaster, RayHit, nearest};
pub use frame::{Column, FrameRenderer, fisheye_correct, projected_height, shade, sliver_span};
pub use trig::TrigTables;
