//! Idle/demo autopilot
//!
//! A cheap heuristic pilot: cruise at a set altitude, sidestep the nearest
//! hazard ahead, and shoot whatever lines up with the missile pair. Used by
//! the headless runner for demos and long soak runs.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameWorld, TickInput};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Cruise altitude as a fraction of viewport height
    pub cruise: f32,
    /// How far ahead of the nose hazards are considered (px)
    pub lookahead: f32,
    /// Vertical distance a hazard must be kept at (px)
    pub clearance: f32,
    /// Vertical window in which a hostile counts as lined up (px)
    pub aim_window: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            cruise: 0.5,
            lookahead: 260.0,
            clearance: 70.0,
            aim_window: 30.0,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the next tick. Never starts a round; the driver decides that.
    pub fn next_input(&self, world: &GameWorld) -> TickInput {
        if !world.is_playing() {
            return TickInput::default();
        }

        let player = &world.player;
        let center = player.center();
        let near = player.pos.x - DRAGON_SIZE;
        let far = player.pos.x + player.width + self.lookahead;
        let ahead = |p: Vec2| p.x >= near && p.x <= far;

        // Nearest hazard ahead by horizontal distance
        let threat = world
            .dragons
            .iter()
            .map(|d| d.center())
            .chain(world.fireballs.iter().map(|f| f.pos))
            .chain(world.lava_balls.iter().map(|l| l.pos))
            .filter(|&p| ahead(p))
            .min_by(|a, b| a.x.total_cmp(&b.x));

        let mut target_y = world.viewport.height * self.cruise;
        if let Some(threat) = threat {
            if (threat.y - center.y).abs() < self.clearance {
                target_y = if threat.y > center.y {
                    threat.y - self.clearance * 1.5
                } else {
                    threat.y + self.clearance * 1.5
                };
            }
        }
        let top = player.height;
        let bottom = (world.viewport.height - player.height).max(top);
        let target_y = target_y.clamp(top, bottom);

        let ascend = center.y > target_y && player.velocity >= 0.0;

        let lined_up = |p: Vec2| p.x > center.x && (p.y - center.y).abs() < self.aim_window;
        let fire = world.dragons.iter().any(|d| lined_up(d.center()))
            || world.fire_dragons.iter().any(|fd| lined_up(fd.center()));

        TickInput {
            ascend,
            fire,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Dragon, Viewport};
    use crate::tuning::Tuning;

    fn world() -> GameWorld {
        let mut w = GameWorld::new(5, Viewport::new(800.0, 600.0), Tuning::without_spawning());
        w.start_round();
        w
    }

    fn dragon(id: u32, pos: Vec2) -> Dragon {
        Dragon {
            id,
            pos,
            speed: 3.0,
            amplitude: 0.0,
            frequency: 0.0,
            initial_y: pos.y,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_idle_world_gets_no_input() {
        let w = GameWorld::new(5, Viewport::new(800.0, 600.0), Tuning::without_spawning());
        assert_eq!(Autopilot::new().next_input(&w), TickInput::default());
    }

    #[test]
    fn test_climbs_back_to_cruise() {
        let mut w = world();
        w.player.pos.y = 500.0;
        assert!(Autopilot::new().next_input(&w).ascend);

        w.player.pos.y = 100.0;
        assert!(!Autopilot::new().next_input(&w).ascend);
    }

    #[test]
    fn test_fires_at_lined_up_dragon() {
        let mut w = world();
        let center = w.player.center();
        w.dragons.push(dragon(100, Vec2::new(600.0, center.y - DRAGON_SIZE / 2.0)));
        assert!(Autopilot::new().next_input(&w).fire);

        w.dragons[0].pos.y += 100.0;
        assert!(!Autopilot::new().next_input(&w).fire);
    }

    #[test]
    fn test_dodges_hazard_ahead() {
        let mut w = world();
        // craft cruising exactly at target, hazard slightly below and close
        let center = w.player.center();
        w.dragons.push(dragon(100, Vec2::new(center.x + 60.0, center.y + 10.0 - DRAGON_SIZE / 2.0)));
        assert!(Autopilot::new().next_input(&w).ascend);
    }
}
