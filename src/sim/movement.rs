//! Player / movement controller.
//!
//! The viewer walks in world units and turns in whole angle steps. After every
//! move the position is pushed back out of any wall it came closer to than
//! `clearance`, one axis at a time.

use std::f64::consts::TAU;

use super::Commands;
use crate::{
    config::RenderConfig,
    world::{GridWorld, Viewer},
};

#[derive(Clone, Debug)]
pub struct Player {
    viewer: Viewer,
    /// Largest angle index (= table size `N`).
    max_angle: usize,
    turn_steps: usize,
    speed: f64,
    clearance: f64,
    cell: i64,
}

impl Player {
    /// Controller for `viewer` using the step sizes in `config`. An angle
    /// past `N` is reduced modulo `N`.
    pub fn new(mut viewer: Viewer, config: &RenderConfig) -> Self {
        if viewer.angle > config.angle_steps {
            viewer.angle %= config.angle_steps;
        }
        Self {
            viewer,
            max_angle: config.angle_steps,
            turn_steps: config.turn_steps(),
            speed: config.move_speed,
            clearance: config.clearance,
            cell: config.cell_size,
        }
    }

    #[inline]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /*──────────────────────────── turning ────────────────────────────*/

    /// Counter-clockwise. Reaching `N` or beyond snaps to 0.
    pub fn turn_left(&mut self) {
        let a = self.viewer.angle + self.turn_steps;
        self.viewer.angle = if a >= self.max_angle { 0 } else { a };
    }

    /// Clockwise. Going below 0 snaps to `N`.
    pub fn turn_right(&mut self) {
        self.viewer.angle = self
            .viewer
            .angle
            .checked_sub(self.turn_steps)
            .unwrap_or(self.max_angle);
    }

    /*──────────────────────────── walking ────────────────────────────*/

    pub fn move_forward(&mut self, world: &GridWorld) {
        self.step(world, 1.0);
    }

    pub fn move_backward(&mut self, world: &GridWorld) {
        self.step(world, -1.0);
    }

    /// Run every held command, in a fixed order: turn-left, turn-right,
    /// forward, backward.
    pub fn apply(&mut self, cmd: Commands, world: &GridWorld) {
        if cmd.contains(Commands::TURN_LEFT) {
            self.turn_left();
        }
        if cmd.contains(Commands::TURN_RIGHT) {
            self.turn_right();
        }
        if cmd.contains(Commands::FORWARD) {
            self.move_forward(world);
        }
        if cmd.contains(Commands::BACKWARD) {
            self.move_backward(world);
        }
    }

    /// One move, split into sub-steps no longer than `clearance` so no
    /// sub-step can cross a whole cell or jump over a wall face.
    fn step(&mut self, world: &GridWorld, sign: f64) {
        let heading = TAU * self.viewer.angle as f64 / self.max_angle as f64;
        let n = (self.speed / self.clearance).ceil().max(1.0);
        let dx = heading.cos() * self.speed * sign / n;
        let dy = heading.sin() * self.speed * sign / n;

        for _ in 0..n as usize {
            let from = self.viewer.cell(self.cell);
            self.viewer.pos.x += dx;
            self.viewer.pos.y += dy;
            self.clamp(world, from, dx, dy);
        }
    }

    /// Keep `clearance` between the viewer and the walls next to `from` (the
    /// cell it stood in before the sub-step) that it moved towards.
    fn clamp(&mut self, world: &GridWorld, (cx, cy): (i64, i64), dx: f64, dy: f64) {
        let cell = self.cell as f64;
        let c = self.clearance;
        let pos = &mut self.viewer.pos;
        let (x0, y0) = (cx as f64 * cell, cy as f64 * cell);

        if dx > 0.0 {
            if world.is_wall_at(cx + 1, cy) && pos.x > x0 + cell - c {
                pos.x = x0 + cell - c;
            }
        } else if world.is_wall_at(cx - 1, cy) && pos.x < x0 + c {
            pos.x = x0 + c;
        }

        if dy > 0.0 {
            if world.is_wall_at(cx, cy + 1) && pos.y > y0 + cell - c {
                pos.y = y0 + cell - c;
            }
        } else if world.is_wall_at(cx, cy - 1) && pos.y < y0 + c {
            pos.y = y0 + c;
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn player_at(x: f64, y: f64, angle: usize) -> Player {
        Player::new(Viewer::new(dvec2(x, y), angle), &RenderConfig::default())
    }

    fn open() -> GridWorld {
        GridWorld::open(16, 16).unwrap()
    }

    #[test]
    fn turning_wraps_at_both_ends() {
        let mut p = player_at(544.0, 544.0, 0);
        p.turn_right();
        assert_eq!(p.viewer().angle, 1920);
        p.turn_left();
        assert_eq!(p.viewer().angle, 0);

        // close to the top, one more step snaps to 0
        let mut p = player_at(544.0, 544.0, 1900);
        p.turn_left();
        assert_eq!(p.viewer().angle, 0);

        let mut p = player_at(544.0, 544.0, 320);
        p.turn_left();
        assert_eq!(p.viewer().angle, 352);
        p.turn_right();
        p.turn_right();
        assert_eq!(p.viewer().angle, 288);
    }

    #[test]
    fn forward_then_backward_returns_home() {
        let world = open();
        let mut p = player_at(544.0, 544.0, 123);
        p.move_forward(&world);
        assert!((p.viewer().pos - dvec2(544.0, 544.0)).length() > 9.99);
        p.move_backward(&world);
        assert!((p.viewer().pos - dvec2(544.0, 544.0)).length() < 1e-9);
    }

    #[test]
    fn west_wall_clamps_to_clearance() {
        // 20 units past the west border face, walking west
        let mut p = player_at(64.0 + 20.0, 544.0, 960);
        p.move_forward(&open());
        assert_eq!(p.viewer().pos.x, 64.0 + 15.0);
        assert!((p.viewer().pos.y - 544.0).abs() < 1e-9);
    }

    #[test]
    fn north_wall_clamps_to_clearance() {
        let mut p = player_at(544.0, 15.0 * 64.0 - 20.0, 480);
        p.move_forward(&open());
        assert_eq!(p.viewer().pos.y, 15.0 * 64.0 - 15.0);

        // repeated pushes never get closer
        for _ in 0..10 {
            p.move_forward(&open());
        }
        assert_eq!(p.viewer().pos.y, 15.0 * 64.0 - 15.0);
    }

    #[test]
    fn already_inside_clearance_is_pushed_out() {
        // 5 units from the west border face: the step crosses into the wall
        // cell and must come back to exactly `clearance`
        let mut p = player_at(64.0 + 5.0, 544.0, 960);
        p.move_forward(&open());
        assert_eq!(p.viewer().pos.x, 64.0 + 15.0);

        let mut p = player_at(544.0, 64.0 + 5.0, 1440);
        p.move_forward(&open());
        assert_eq!(p.viewer().pos.y, 64.0 + 15.0);
    }

    #[test]
    fn fast_walker_never_enters_a_wall() {
        let world = open();
        for speed in [20.0, 64.0, 100.0] {
            let cfg = RenderConfig {
                move_speed: speed,
                ..RenderConfig::default()
            };
            assert_eq!(cfg.validate(), Ok(()));

            // 16 units short of the east border face, walking east
            let mut p = Player::new(Viewer::new(dvec2(15.0 * 64.0 - 16.0, 544.0), 0), &cfg);
            p.move_forward(&world);
            assert_eq!(p.viewer().pos.x, 15.0 * 64.0 - 15.0, "speed {speed}");

            // from the middle of the map, straight at the west border
            let mut p = Player::new(Viewer::new(dvec2(544.0, 544.0), 960), &cfg);
            for _ in 0..30 {
                p.move_forward(&world);
                assert!(p.viewer().pos.x >= 64.0 + 15.0, "speed {speed}");
            }
            assert_eq!(p.viewer().pos.x, 64.0 + 15.0, "speed {speed}");
        }
    }

    #[test]
    fn oversized_angle_is_reduced() {
        let cfg = RenderConfig::default();
        let p = Player::new(Viewer::new(dvec2(544.0, 544.0), 2 * 1920 + 5), &cfg);
        assert_eq!(p.viewer().angle, 5);
        // N itself is a valid index
        let mut p = Player::new(Viewer::new(dvec2(544.0, 544.0), 1920), &cfg);
        assert_eq!(p.viewer().angle, 1920);
        p.turn_right();
        assert_eq!(p.viewer().angle, 1888);

        let mut p = Player::new(Viewer::new(dvec2(544.0, 544.0), usize::MAX), &cfg);
        assert!(p.viewer().angle < 1920);
        p.turn_left();
        assert!(p.viewer().angle <= 1920);
    }

    #[test]
    fn backward_into_wall_clamps_too() {
        // facing east, backing into the west border
        let mut p = player_at(64.0 + 20.0, 544.0, 0);
        p.move_backward(&open());
        assert_eq!(p.viewer().pos.x, 64.0 + 15.0);
    }

    #[test]
    fn diagonal_clamps_one_axis_only() {
        // heading 45° towards the east border; only x is blocked
        let mut p = player_at(15.0 * 64.0 - 20.0, 544.0, 240);
        p.move_forward(&open());
        let s = 10.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(p.viewer().pos.x, 15.0 * 64.0 - 15.0);
        assert!((p.viewer().pos.y - (544.0 + s)).abs() < 1e-9);
    }

    #[test]
    fn open_space_is_not_clamped() {
        let mut p = player_at(544.0, 544.0, 0);
        p.move_forward(&open());
        assert!((p.viewer().pos.x - 554.0).abs() < 1e-9);
    }

    #[test]
    fn commands_run_in_fixed_order() {
        let world = open();

        // left then right cancels out
        let mut p = player_at(544.0, 544.0, 0);
        p.apply(Commands::TURN_LEFT | Commands::TURN_RIGHT, &world);
        assert_eq!(p.viewer().angle, 0);

        // turn happens before the step, so the step uses the new heading
        let mut p = player_at(544.0, 544.0, 0);
        p.apply(Commands::FORWARD | Commands::TURN_LEFT, &world);
        assert_eq!(p.viewer().angle, 32);
        let want = dvec2(544.0, 544.0) + 10.0 * dvec2(6f64.to_radians().cos(), 6f64.to_radians().sin());
        assert!((p.viewer().pos - want).length() < 1e-9);

        // forward + backward is a no-op away from walls
        let mut p = player_at(544.0, 544.0, 700);
        p.apply(Commands::FORWARD | Commands::BACKWARD, &world);
        assert!((p.viewer().pos - dvec2(544.0, 544.0)).length() < 1e-9);

        let mut p = player_at(544.0, 544.0, 700);
        p.apply(Commands::empty(), &world);
        assert_eq!(p.viewer(), &Viewer::new(dvec2(544.0, 544.0), 700));
    }
}
