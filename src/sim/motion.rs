//! Per-kind motion integrators
//!
//! All displacements are per tick. Hazards scale with the global speed
//! multiplier; the player's own gravity and lift do not.

use super::state::{Dragon, FireDragon, Fireball, LavaBall, Missile, Player, Viewport, Volcano};
use crate::consts::*;

/// Semi-implicit Euler with a hard lift override, then clamp to the viewport.
/// Returns true if a clamp fired this tick.
pub fn integrate_player(player: &mut Player, ascend: bool, viewport: Viewport) -> bool {
    player.velocity += PLAYER_GRAVITY;

    if ascend {
        player.velocity = PLAYER_LIFT;
        player.rotation = PLAYER_NOSE_UP;
    } else {
        player.rotation = player.velocity * PLAYER_TILT_PER_VELOCITY;
    }

    player.pos.y += player.velocity;

    let floor = player.floor(viewport);
    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
        player.velocity = 0.0;
        true
    } else if player.pos.y > floor {
        player.pos.y = floor;
        player.velocity = 0.0;
        true
    } else {
        false
    }
}

/// Scroll left, then place `y` on the wave as a function of `x`
pub fn advance_dragon(dragon: &mut Dragon, speed: f32) {
    dragon.pos.x -= dragon.speed * speed;
    let phase = (dragon.pos.x * dragon.frequency).sin();
    dragon.pos.y = dragon.initial_y + phase * dragon.amplitude;
    dragon.rotation = phase * DRAGON_MAX_ROLL;
}

/// Drift left and run the fire cooldown. Returns true when it should fire.
pub fn advance_fire_dragon(fire_dragon: &mut FireDragon, drift: f32, speed: f32, tick_ms: f32) -> bool {
    fire_dragon.pos.x -= drift * speed;
    fire_dragon.fire_timer_ms += tick_ms;
    if fire_dragon.fire_timer_ms >= fire_dragon.fire_interval_ms {
        fire_dragon.fire_timer_ms = 0.0;
        true
    } else {
        false
    }
}

pub fn advance_fireball(fireball: &mut Fireball, spin: f32, speed: f32) {
    fireball.pos.x -= fireball.speed * speed;
    fireball.rotation += spin;
}

/// Drift left and run the eruption timer. Returns true on the tick it erupts;
/// the caller redraws `next_eruption_ms`.
pub fn advance_volcano(volcano: &mut Volcano, drift: f32, speed: f32, tick_ms: f32) -> bool {
    volcano.erupting = false;
    volcano.x -= drift * speed;
    volcano.erupt_timer_ms += tick_ms;
    if volcano.erupt_timer_ms >= volcano.next_eruption_ms {
        volcano.erupting = true;
        volcano.erupt_timer_ms = 0.0;
        true
    } else {
        false
    }
}

/// Ballistic step: displacement is scaled, the gravity kick is not
pub fn advance_lava_ball(lava: &mut LavaBall, spin: f32, speed: f32) {
    lava.pos += lava.vel * speed;
    lava.vel.y += lava.gravity;
    lava.rotation += spin;
}

pub fn advance_missile(missile: &mut Missile, speed: f32) {
    missile.pos.x += missile.speed * speed;
}

/// Fully past the left edge (right side at or beyond x = 0)
pub fn dragon_gone(dragon: &Dragon) -> bool {
    dragon.pos.x <= -DRAGON_SIZE
}

pub fn fire_dragon_gone(fire_dragon: &FireDragon) -> bool {
    fire_dragon.pos.x <= -FIRE_DRAGON_SIZE
}

pub fn fireball_gone(fireball: &Fireball) -> bool {
    fireball.pos.x < -fireball.size
}

pub fn volcano_gone(volcano: &Volcano) -> bool {
    volcano.x + volcano.width < 0.0
}

/// Below the bottom edge or past either side
pub fn lava_ball_gone(lava: &LavaBall, viewport: Viewport) -> bool {
    lava.pos.y > viewport.height || lava.pos.x < -lava.size || lava.pos.x > viewport.width + lava.size
}

pub fn missile_gone(missile: &Missile, viewport: Viewport) -> bool {
    missile.pos.x > viewport.width
}
