mod input;
mod movement;

pub use input::Commands;
pub use movement::Player;
