//! Entity factories
//!
//! Each factory draws its motion parameters from the world's seeded RNG using
//! the named spans in [`Tuning`](crate::tuning::Tuning), and derives spawn
//! bounds from the current viewport (never a cached one).

use glam::Vec2;

use super::state::{Dragon, FireDragon, Fireball, GameWorld, LavaBall, Missile, Volcano};
use crate::consts::*;
use crate::tuning::Span;

/// Spawn a dragon just past the right edge
pub fn spawn_dragon(world: &mut GameWorld) -> u32 {
    let id = world.next_entity_id();
    let viewport = world.viewport;
    let t = &world.tuning.dragon;
    let rng = &mut world.rng;

    let y = Span::new(t.margin, viewport.height - t.margin).sample(rng);
    let dragon = Dragon {
        id,
        pos: Vec2::new(viewport.width + DRAGON_SIZE, y),
        speed: t.speed.sample(rng),
        amplitude: t.amplitude.sample(rng),
        frequency: t.frequency.sample(rng),
        initial_y: y,
        scale: t.scale.sample(rng),
        rotation: 0.0,
    };
    log::debug!("Spawned dragon {} at y={:.0} speed={:.2}", id, y, dragon.speed);
    world.dragons.push(dragon);
    id
}

/// Spawn a fire dragon just past the right edge
pub fn spawn_fire_dragon(world: &mut GameWorld) -> u32 {
    let id = world.next_entity_id();
    let viewport = world.viewport;
    let t = &world.tuning.fire_dragon;
    let rng = &mut world.rng;

    let y = Span::new(t.margin, viewport.height - t.margin).sample(rng);
    let fire_dragon = FireDragon {
        id,
        pos: Vec2::new(viewport.width + FIRE_DRAGON_SIZE, y),
        scale: t.scale,
        rotation: 0.0,
        fire_timer_ms: 0.0,
        fire_interval_ms: t.fire_interval_ms.sample(rng),
    };
    log::debug!(
        "Spawned fire dragon {} at y={:.0} firing every {:.0}ms",
        id,
        y,
        fire_dragon.fire_interval_ms
    );
    world.fire_dragons.push(fire_dragon);
    id
}

/// Spawn a fireball from the mouth of a fire dragon at `origin` (its top-left)
pub fn spawn_fireball(world: &mut GameWorld, origin: Vec2) -> u32 {
    let id = world.next_entity_id();
    world.fireballs.push(Fireball {
        id,
        pos: Vec2::new(origin.x - FIRE_DRAGON_SIZE / 2.0, origin.y),
        speed: world.tuning.fireball.speed,
        size: FIREBALL_SIZE,
        rotation: 0.0,
    });
    id
}

/// Spawn a volcano just past the right edge
pub fn spawn_volcano(world: &mut GameWorld) -> u32 {
    let id = world.next_entity_id();
    let next_eruption_ms = world.tuning.volcano.eruption_interval_ms.sample(&mut world.rng);
    world.volcanoes.push(Volcano {
        id,
        x: world.viewport.width + VOLCANO_WIDTH,
        width: VOLCANO_WIDTH,
        height: VOLCANO_HEIGHT,
        erupting: false,
        erupt_timer_ms: 0.0,
        next_eruption_ms,
    });
    world.timers.volcano_gap = 0.0;
    log::debug!("Spawned volcano {}", id);
    id
}

/// Launch a lava ball from `crater` inside an upward cone
pub fn spawn_lava_ball(world: &mut GameWorld, crater: Vec2) -> u32 {
    let id = world.next_entity_id();
    let t = &world.tuning.lava;
    let rng = &mut world.rng;

    let angle = -std::f32::consts::FRAC_PI_2 + t.launch_spread.sample(rng);
    let speed = t.speed.sample(rng);
    world.lava_balls.push(LavaBall {
        id,
        pos: crater,
        vel: Vec2::from_angle(angle) * speed,
        size: LAVA_BALL_SIZE,
        rotation: 0.0,
        gravity: t.gravity,
    });
    id
}

/// Fire one missile above and one below the craft's centre line
pub fn spawn_missile_pair(world: &mut GameWorld) -> [u32; 2] {
    let player = &world.player;
    let nose_x = player.pos.x + player.width;
    let center_y = player.pos.y + player.height / 2.0;
    let offset = world.tuning.missile.pair_offset;
    let speed = world.tuning.missile.speed;

    [center_y - offset, center_y + offset].map(|y| {
        let id = world.next_entity_id();
        world.missiles.push(Missile {
            id,
            pos: Vec2::new(nose_x, y),
            speed,
            size: MISSILE_SIZE,
        });
        id
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;

    fn world() -> GameWorld {
        let mut w = GameWorld::new(42, Viewport::new(1000.0, 600.0), Tuning::default());
        w.start_round();
        w
    }

    #[test]
    fn test_dragon_parameters_within_ranges() {
        let mut w = world();
        for _ in 0..200 {
            spawn_dragon(&mut w);
        }
        for d in &w.dragons {
            assert_eq!(d.pos.x, 1000.0 + DRAGON_SIZE);
            assert!((50.0..550.0).contains(&d.initial_y));
            assert!((2.0..5.0).contains(&d.speed));
            assert!((30.0..90.0).contains(&d.amplitude));
            assert!((0.01..0.03).contains(&d.frequency));
            assert!((0.8..1.3).contains(&d.scale));
        }
    }

    #[test]
    fn test_fire_dragon_parameters_within_ranges() {
        let mut w = world();
        for _ in 0..100 {
            spawn_fire_dragon(&mut w);
        }
        for d in &w.fire_dragons {
            assert!((100.0..500.0).contains(&d.pos.y));
            assert!((1500.0..2500.0).contains(&d.fire_interval_ms));
            assert_eq!(d.scale, 1.2);
        }
    }

    #[test]
    fn test_spawn_uses_current_viewport() {
        let mut w = world();
        w.set_viewport(Viewport::new(400.0, 300.0));
        spawn_dragon(&mut w);
        spawn_volcano(&mut w);
        assert_eq!(w.dragons[0].pos.x, 400.0 + DRAGON_SIZE);
        assert!(w.dragons[0].initial_y < 250.0);
        assert_eq!(w.volcanoes[0].x, 400.0 + VOLCANO_WIDTH);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let mut w = world();
        w.set_viewport(Viewport::new(50.0, 40.0));
        spawn_dragon(&mut w);
        spawn_fire_dragon(&mut w);
        assert_eq!(w.dragons[0].initial_y, 50.0);
    }

    #[test]
    fn test_lava_ball_launches_upward_cone() {
        let mut w = world();
        for _ in 0..200 {
            spawn_lava_ball(&mut w, Vec2::new(500.0, 380.0));
        }
        for lava in &w.lava_balls {
            let speed = lava.vel.length();
            assert!((7.99..12.01).contains(&speed));
            assert!(lava.vel.y < 0.0);
            // within 30 degrees of vertical
            assert!(lava.vel.x.abs() <= speed * 0.5 + 1e-4);
        }
    }

    #[test]
    fn test_missile_pair_straddles_centre_line() {
        let mut w = world();
        w.player.pos = Vec2::new(100.0, 200.0);
        let ids = spawn_missile_pair(&mut w);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(w.missiles.len(), 2);
        assert_eq!(w.missiles[0].pos, Vec2::new(180.0, 205.0));
        assert_eq!(w.missiles[1].pos, Vec2::new(180.0, 225.0));
    }

    #[test]
    fn test_fireball_leaves_from_mouth() {
        let mut w = world();
        spawn_fireball(&mut w, Vec2::new(600.0, 250.0));
        assert_eq!(w.fireballs[0].pos, Vec2::new(575.0, 250.0));
        assert_eq!(w.fireballs[0].speed, 8.0);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = world();
        let mut b = world();
        spawn_dragon(&mut a);
        spawn_dragon(&mut b);
        assert_eq!(a.dragons[0].initial_y, b.dragons[0].initial_y);
        assert_eq!(a.dragons[0].frequency, b.dragons[0].frequency);
    }
}
