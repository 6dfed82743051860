//! Data-driven game balance
//!
//! Every random draw in the simulation comes from a named [`Span`] here, so
//! tests can pin a distribution by collapsing its range. Defaults are the
//! shipped game balance.

use std::f32::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::TICK_MS;

/// Uniform distribution over `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A span that always yields `value`
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Draw a value. Empty spans (e.g. from a tiny viewport) and spans too
    /// wide to represent yield `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let width = self.max - self.min;
        if width.is_finite() && width > 0.0 {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DragonTuning {
    /// Spawn cadence (ms)
    pub interval_ms: f32,
    /// Leftward speed (px/tick)
    pub speed: Span,
    /// Wave amplitude (px)
    pub amplitude: Span,
    /// Wave frequency (rad/px)
    pub frequency: Span,
    /// Visual scale only, not used for collisions
    pub scale: Span,
    /// Keep-out band at top and bottom of the viewport for the wave origin
    pub margin: f32,
}

impl Default for DragonTuning {
    fn default() -> Self {
        Self {
            interval_ms: 2000.0,
            speed: Span::new(2.0, 5.0),
            amplitude: Span::new(30.0, 90.0),
            frequency: Span::new(0.01, 0.03),
            scale: Span::new(0.8, 1.3),
            margin: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FireDragonTuning {
    pub interval_ms: f32,
    /// Leftward drift (px/tick)
    pub drift: f32,
    pub scale: f32,
    /// Drawn once per fire dragon; its shots then keep this cadence
    pub fire_interval_ms: Span,
    pub margin: f32,
}

impl Default for FireDragonTuning {
    fn default() -> Self {
        Self {
            interval_ms: 3000.0,
            drift: 1.0,
            scale: 1.2,
            fire_interval_ms: Span::new(1500.0, 2500.0),
            margin: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FireballTuning {
    pub speed: f32,
    /// Visual spin (rad/tick)
    pub spin: f32,
}

impl Default for FireballTuning {
    fn default() -> Self {
        Self {
            speed: 8.0,
            spin: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolcanoTuning {
    pub drift: f32,
    /// Redrawn after every eruption
    pub eruption_interval_ms: Span,
}

impl Default for VolcanoTuning {
    fn default() -> Self {
        Self {
            drift: 0.5,
            eruption_interval_ms: Span::new(2000.0, 5000.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LavaTuning {
    /// Launch angle offset from straight up (rad)
    pub launch_spread: Span,
    pub speed: Span,
    /// Added to vertical velocity each tick (not scaled by game speed)
    pub gravity: f32,
    pub spin: f32,
}

impl Default for LavaTuning {
    fn default() -> Self {
        Self {
            launch_spread: Span::new(-PI / 6.0, PI / 6.0),
            speed: Span::new(8.0, 12.0),
            gravity: 0.2,
            spin: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MissileTuning {
    pub speed: f32,
    /// Minimum time between pairs (ms)
    pub cooldown_ms: f32,
    /// Vertical offset of each missile from the craft's centre line
    pub pair_offset: f32,
}

impl Default for MissileTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            cooldown_ms: 500.0,
            pair_offset: 10.0,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Milliseconds credited to every timer per simulation tick
    pub tick_ms: f32,
    /// Timer-driven spawning of dragons, fire dragons and volcanoes
    pub spawning: bool,
    pub dragon: DragonTuning,
    pub fire_dragon: FireDragonTuning,
    pub fireball: FireballTuning,
    pub volcano: VolcanoTuning,
    pub lava: LavaTuning,
    pub missile: MissileTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            spawning: true,
            dragon: DragonTuning::default(),
            fire_dragon: FireDragonTuning::default(),
            fireball: FireballTuning::default(),
            volcano: VolcanoTuning::default(),
            lava: LavaTuning::default(),
            missile: MissileTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning table; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid tuning JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Tuning with timer-driven spawning switched off
    pub fn without_spawning() -> Self {
        Self {
            spawning: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_span_sample_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let span = Span::new(2.0, 5.0);
        for _ in 0..1000 {
            let v = span.sample(&mut rng);
            assert!((2.0..5.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_span_yields_min() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(Span::new(50.0, 10.0).sample(&mut rng), 50.0);
        assert_eq!(Span::fixed(3.0).sample(&mut rng), 3.0);
    }

    #[test]
    fn test_unrepresentable_span_yields_min() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(Span::new(-3.0e38, 3.0e38).sample(&mut rng), -3.0e38);
        assert_eq!(Span::new(0.0, f32::INFINITY).sample(&mut rng), 0.0);
        assert!(Span::new(f32::NAN, 1.0).sample(&mut rng).is_nan());

        let tuning =
            Tuning::from_json(r#"{ "dragon": { "speed": { "min": -3e38, "max": 3e38 } } }"#).unwrap();
        assert_eq!(tuning.dragon.speed.sample(&mut rng), -3.0e38);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "dragon": { "interval_ms": 500 } }"#).unwrap();
        assert_eq!(tuning.dragon.interval_ms, 500.0);
        assert_eq!(tuning.dragon.speed, Span::new(2.0, 5.0));
        assert_eq!(tuning.fire_dragon.interval_ms, 3000.0);
        assert!(tuning.spawning);
        assert_eq!(tuning.tick_ms, TICK_MS);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }
}
