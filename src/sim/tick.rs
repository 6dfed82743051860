//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world one frame. Passes run in a fixed
//! order so collision precedence is stable:
//! volcanoes, lava balls, player, dragons, fire dragons, fireballs, missiles.

use super::collision::{missile_target, player_touches};
use super::motion::*;
use super::spawn::*;
use super::state::{GameEvent, GamePhase, GameWorld, HostileKind};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Ascend key is held
    pub ascend: bool,
    /// Start/restart button
    pub start: bool,
    /// Fire missiles (starts a round when none is running)
    pub fire: bool,
    /// Speed multiplier up one step
    pub speed_up: bool,
    /// Speed multiplier down one step
    pub speed_down: bool,
}

type Pass = fn(&mut GameWorld, &TickInput);

const PASSES: [Pass; 7] = [
    update_volcanoes,
    update_lava_balls,
    update_player,
    update_dragons,
    update_fire_dragons,
    update_fireballs,
    update_missiles,
];

/// Advance the world by one tick
pub fn tick(world: &mut GameWorld, input: &TickInput) {
    let restart = matches!(world.phase, GamePhase::Idle | GamePhase::GameOver)
        && (input.start || input.fire);
    if restart {
        world.start_round();
    }

    // Speed is adjustable in every phase, after any restart reset
    if input.speed_up {
        world.adjust_speed(1.0);
    }
    if input.speed_down {
        world.adjust_speed(-1.0);
    }

    if !world.is_playing() {
        return;
    }

    world.time_ticks += 1;
    world.elapsed_ms += f64::from(world.tuning.tick_ms);

    // The fire press that started the round does not also shoot
    if input.fire && world.time_ticks > 1 {
        fire_missiles(world);
    }

    for pass in PASSES {
        pass(world, input);
        // Score freezes the moment the round ends
        if !world.is_playing() {
            break;
        }
    }
}

/// Fire a missile pair if the cooldown has elapsed. Returns true if fired.
pub fn fire_missiles(world: &mut GameWorld) -> bool {
    if !world.is_playing() {
        return false;
    }
    let cooldown = f64::from(world.tuning.missile.cooldown_ms);
    if let Some(last) = world.last_missile_ms {
        if world.elapsed_ms - last < cooldown {
            return false;
        }
    }
    spawn_missile_pair(world);
    world.last_missile_ms = Some(world.elapsed_ms);
    world.events.push(GameEvent::MissilesFired);
    true
}

/// Accumulate a spawn timer; true when it rolls over
fn timer_elapsed(timer_ms: &mut f32, tick_ms: f32, interval_ms: f32) -> bool {
    *timer_ms += tick_ms;
    if *timer_ms >= interval_ms {
        *timer_ms = 0.0;
        true
    } else {
        false
    }
}

fn update_volcanoes(world: &mut GameWorld, _input: &TickInput) {
    let half_width = world.viewport.width / 2.0;
    if world.tuning.spawning && (world.volcanoes.is_empty() || world.timers.volcano_gap > half_width) {
        spawn_volcano(world);
    }

    let drift = world.tuning.volcano.drift;
    let speed = world.speed;
    let tick_ms = world.tuning.tick_ms;
    let viewport = world.viewport;
    world.timers.volcano_gap += drift * speed;

    let mut eruptions = Vec::new();
    for volcano in world.volcanoes.iter_mut() {
        if advance_volcano(volcano, drift, speed, tick_ms) {
            volcano.next_eruption_ms = world.tuning.volcano.eruption_interval_ms.sample(&mut world.rng);
            eruptions.push((volcano.id, volcano.crater(viewport)));
        }
    }
    for (volcano_id, crater) in eruptions {
        spawn_lava_ball(world, crater);
        world.events.push(GameEvent::Eruption { volcano_id });
        log::debug!("Volcano {} erupted", volcano_id);
    }

    world.volcanoes.retain(|v| !volcano_gone(v));
}

fn update_lava_balls(world: &mut GameWorld, _input: &TickInput) {
    let spin = world.tuning.lava.spin;
    let speed = world.speed;
    let mut i = 0;
    while i < world.lava_balls.len() {
        let lava = &mut world.lava_balls[i];
        advance_lava_ball(lava, spin, speed);
        let (center, size) = (lava.pos, lava.size);

        if player_touches(&world.player, center, size) {
            world.take_hit();
            if !world.is_playing() {
                return;
            }
        }

        if lava_ball_gone(&world.lava_balls[i], world.viewport) {
            world.lava_balls.remove(i);
        } else {
            i += 1;
        }
    }
}

fn update_player(world: &mut GameWorld, input: &TickInput) {
    integrate_player(&mut world.player, input.ascend, world.viewport);
}

fn update_dragons(world: &mut GameWorld, _input: &TickInput) {
    let tick_ms = world.tuning.tick_ms;
    if world.tuning.spawning
        && timer_elapsed(&mut world.timers.dragon_ms, tick_ms, world.tuning.dragon.interval_ms)
    {
        spawn_dragon(world);
    }

    let speed = world.speed;
    let mut i = 0;
    while i < world.dragons.len() {
        let dragon = &mut world.dragons[i];
        advance_dragon(dragon, speed);
        let center = dragon.center();

        if player_touches(&world.player, center, DRAGON_SIZE) {
            world.take_hit();
            if !world.is_playing() {
                return;
            }
        }

        if dragon_gone(&world.dragons[i]) {
            world.dragons.remove(i);
            passed(world, HostileKind::Dragon);
        } else {
            i += 1;
        }
    }
}

fn update_fire_dragons(world: &mut GameWorld, _input: &TickInput) {
    let tick_ms = world.tuning.tick_ms;
    if world.tuning.spawning
        && timer_elapsed(
            &mut world.timers.fire_dragon_ms,
            tick_ms,
            world.tuning.fire_dragon.interval_ms,
        )
    {
        spawn_fire_dragon(world);
    }

    let drift = world.tuning.fire_dragon.drift;
    let speed = world.speed;
    let mut mouths = Vec::new();
    for fire_dragon in world.fire_dragons.iter_mut() {
        if advance_fire_dragon(fire_dragon, drift, speed, tick_ms) {
            mouths.push(fire_dragon.pos);
        }
    }
    for origin in mouths {
        spawn_fireball(world, origin);
    }

    let before = world.fire_dragons.len();
    world.fire_dragons.retain(|fd| !fire_dragon_gone(fd));
    for _ in world.fire_dragons.len()..before {
        passed(world, HostileKind::FireDragon);
    }
}

fn update_fireballs(world: &mut GameWorld, _input: &TickInput) {
    let spin = world.tuning.fireball.spin;
    let speed = world.speed;
    let mut i = 0;
    while i < world.fireballs.len() {
        let fireball = &mut world.fireballs[i];
        advance_fireball(fireball, spin, speed);
        let (center, size) = (fireball.pos, fireball.size);

        if player_touches(&world.player, center, size) {
            world.take_hit();
            if !world.is_playing() {
                return;
            }
        }

        if fireball_gone(&world.fireballs[i]) {
            world.fireballs.remove(i);
        } else {
            i += 1;
        }
    }
}

fn update_missiles(world: &mut GameWorld, _input: &TickInput) {
    let speed = world.speed;
    let mut i = 0;
    while i < world.missiles.len() {
        advance_missile(&mut world.missiles[i], speed);

        let target = missile_target(&world.missiles[i], &world.dragons, &world.fire_dragons);
        match target {
            Some(hit) => {
                match hit.kind {
                    HostileKind::Dragon => {
                        world.dragons.remove(hit.index);
                    }
                    HostileKind::FireDragon => {
                        world.fire_dragons.remove(hit.index);
                    }
                }
                let points = hit.kind.kill_points();
                world.award(points);
                world.events.push(GameEvent::HostileDestroyed { kind: hit.kind, points });
                world.missiles.remove(i);
            }
            None if missile_gone(&world.missiles[i], world.viewport) => {
                world.missiles.remove(i);
            }
            None => i += 1,
        }
    }
}

fn passed(world: &mut GameWorld, kind: HostileKind) {
    let points = kind.pass_points();
    world.award(points);
    world.events.push(GameEvent::HostilePassed { kind, points });
}
