//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{MissileHit, extents_overlap, missile_target, player_touches};
pub use state::{
    Dragon, FireDragon, Fireball, GameEvent, GamePhase, GameWorld, HostileKind, LavaBall, Missile,
    Player, SpawnTimers, Viewport, Volcano,
};
pub use tick::{TickInput, fire_missiles, tick};
