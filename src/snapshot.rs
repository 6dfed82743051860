//! Render boundary
//!
//! A read-only view of one frame for whatever draws it. Borrowed from the
//! world, so taking one is free; serialize it to hand it across to JS.

use serde::Serialize;

use crate::highscores::HighScoreEntry;
use crate::sim::{
    Dragon, FireDragon, Fireball, GamePhase, GameWorld, LavaBall, Missile, Player, Viewport,
    Volcano,
};

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub speed: f32,
    pub viewport: Viewport,
    pub player: &'a Player,
    pub dragons: &'a [Dragon],
    pub fire_dragons: &'a [FireDragon],
    pub fireballs: &'a [Fireball],
    pub volcanoes: &'a [Volcano],
    pub lava_balls: &'a [LavaBall],
    pub missiles: &'a [Missile],
    /// For the game-over table
    pub high_scores: &'a [HighScoreEntry],
}

impl<'a> Snapshot<'a> {
    pub fn capture(world: &'a GameWorld, high_scores: &'a [HighScoreEntry]) -> Self {
        Self {
            phase: world.phase,
            score: world.score,
            lives: world.lives,
            speed: world.speed,
            viewport: world.viewport,
            player: &world.player,
            dragons: &world.dragons,
            fire_dragons: &world.fire_dragons,
            fireballs: &world.fireballs,
            volcanoes: &world.volcanoes,
            lava_balls: &world.lava_balls,
            missiles: &world.missiles,
            high_scores,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_snapshot_json_shape() {
        let mut world = GameWorld::new(3, Viewport::new(800.0, 600.0), Tuning::without_spawning());
        world.start_round();
        crate::sim::spawn::spawn_dragon(&mut world);

        let json = Snapshot::capture(&world, &[]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Playing");
        assert_eq!(value["lives"], 3);
        assert_eq!(value["dragons"].as_array().unwrap().len(), 1);
        assert_eq!(value["player"]["pos"][0], 200.0);
    }
}
