//! Game state and core simulation types
//!
//! `GameWorld` is the single aggregate the frame driver owns. Every update
//! and collision pass borrows it mutably; there is no ambient state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::square_center;
use crate::tuning::Tuning;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Nothing started yet
    Idle,
    /// Active gameplay
    Playing,
    /// Lives exhausted; waiting for a restart
    GameOver,
}

/// Hostiles a missile can destroy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HostileKind {
    Dragon,
    FireDragon,
}

impl HostileKind {
    /// Points for letting it scroll off the left edge
    pub fn pass_points(self) -> u32 {
        match self {
            HostileKind::Dragon => DRAGON_PASS_POINTS,
            HostileKind::FireDragon => FIRE_DRAGON_PASS_POINTS,
        }
    }

    /// Points for shooting it down
    pub fn kill_points(self) -> u32 {
        match self {
            HostileKind::Dragon => DRAGON_KILL_POINTS,
            HostileKind::FireDragon => FIRE_DRAGON_KILL_POINTS,
        }
    }
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    Started,
    PlayerHit { lives: u8 },
    GameOver { score: u32 },
    HostilePassed { kind: HostileKind, points: u32 },
    HostileDestroyed { kind: HostileKind, points: u32 },
    MissilesFired,
    Eruption { volcano_id: u32 },
    SpeedChanged { speed: f32 },
}

/// Drawable area, pushed in by the platform's resize notifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The player's craft. Position is the top-left corner.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (px/tick, positive = down)
    pub velocity: f32,
    /// Degrees, positive = nose down
    pub rotation: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(viewport.width / 4.0, viewport.height / 2.0),
            velocity: 0.0,
            rotation: 0.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Lowest legal `pos.y`
    pub fn floor(&self, viewport: Viewport) -> f32 {
        (viewport.height - self.height).max(0.0)
    }

    /// Put the craft back at mid-height, motionless (after a survivable hit)
    pub fn recenter(&mut self, viewport: Viewport) {
        self.pos.y = viewport.height / 2.0;
        self.velocity = 0.0;
    }
}

/// Hostile flyer on a sinusoidal path. Position is the top-left corner.
#[derive(Debug, Clone, Serialize)]
pub struct Dragon {
    pub id: u32,
    pub pos: Vec2,
    /// Leftward speed (px/tick at speed 1.0)
    pub speed: f32,
    pub amplitude: f32,
    pub frequency: f32,
    /// Wave origin; `pos.y` is recomputed from `pos.x` every tick
    pub initial_y: f32,
    pub scale: f32,
    pub rotation: f32,
}

impl Dragon {
    pub fn center(&self) -> Vec2 {
        square_center(self.pos, DRAGON_SIZE)
    }
}

/// Slow-drifting fire spitter. Position is the top-left corner.
#[derive(Debug, Clone, Serialize)]
pub struct FireDragon {
    pub id: u32,
    pub pos: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub fire_timer_ms: f32,
    /// Fixed for the dragon's lifetime
    pub fire_interval_ms: f32,
}

impl FireDragon {
    pub fn center(&self) -> Vec2 {
        square_center(self.pos, FIRE_DRAGON_SIZE)
    }
}

/// Fire-dragon projectile. Position is the centre.
#[derive(Debug, Clone, Serialize)]
pub struct Fireball {
    pub id: u32,
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
    pub rotation: f32,
}

/// Background hazard source anchored to the bottom edge
#[derive(Debug, Clone, Serialize)]
pub struct Volcano {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// True only on the tick it erupted
    pub erupting: bool,
    pub erupt_timer_ms: f32,
    /// Redrawn after every eruption
    pub next_eruption_ms: f32,
}

impl Volcano {
    /// Where lava leaves the mountain
    pub fn crater(&self, viewport: Viewport) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, viewport.height - self.height)
    }
}

/// Ballistic volcano projectile. Position is the centre.
#[derive(Debug, Clone, Serialize)]
pub struct LavaBall {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub gravity: f32,
}

/// Player projectile. Position is the nose.
#[derive(Debug, Clone, Serialize)]
pub struct Missile {
    pub id: u32,
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
}

/// Spawn bookkeeping, cleared on every round start
#[derive(Debug, Clone, Default)]
pub struct SpawnTimers {
    pub dragon_ms: f32,
    pub fire_dragon_ms: f32,
    /// Horizontal scroll (px) since the last volcano spawned
    pub volcano_gap: f32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameWorld {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    /// Global speed multiplier, always within `[SPEED_MIN, SPEED_MAX]`
    pub speed: f32,
    /// Simulated time of the current round (ms)
    pub elapsed_ms: f64,
    /// Round time of the last missile pair, `None` until the first shot
    pub last_missile_ms: Option<f64>,
    /// Simulation tick counter for the current round
    pub time_ticks: u64,
    pub player: Player,
    pub dragons: Vec<Dragon>,
    pub fire_dragons: Vec<FireDragon>,
    pub fireballs: Vec<Fireball>,
    pub volcanoes: Vec<Volcano>,
    pub lava_balls: Vec<LavaBall>,
    pub missiles: Vec<Missile>,
    pub timers: SpawnTimers,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameWorld {
    /// Create an idle world with the given seed
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            viewport,
            phase: GamePhase::Idle,
            score: 0,
            lives: START_LIVES,
            speed: 1.0,
            elapsed_ms: 0.0,
            last_missile_ms: None,
            time_ticks: 0,
            player: Player::new(viewport),
            dragons: Vec::new(),
            fire_dragons: Vec::new(),
            fireballs: Vec::new(),
            volcanoes: Vec::new(),
            lava_balls: Vec::new(),
            missiles: Vec::new(),
            timers: SpawnTimers::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything round-scoped and enter `Playing`
    pub fn start_round(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = START_LIVES;
        self.speed = 1.0;
        self.elapsed_ms = 0.0;
        self.last_missile_ms = None;
        self.time_ticks = 0;
        self.player = Player::new(self.viewport);
        self.dragons.clear();
        self.fire_dragons.clear();
        self.fireballs.clear();
        self.volcanoes.clear();
        self.lava_balls.clear();
        self.missiles.clear();
        self.timers = SpawnTimers::default();
        self.events.push(GameEvent::Started);
        log::info!(
            "Round started (seed {}, viewport {}x{})",
            self.seed,
            self.viewport.width,
            self.viewport.height
        );
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Player touched a hazard. The hazard stays; the craft respawns at
    /// mid-height, or the round ends if that was the last life.
    pub fn take_hit(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::PlayerHit { lives: self.lives });
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            log::info!("Game over with score {}", self.score);
        } else {
            self.player.recenter(self.viewport);
            log::debug!("Player hit, {} lives left", self.lives);
        }
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Move the speed multiplier by `steps` increments, clamped
    pub fn adjust_speed(&mut self, steps: f32) {
        self.speed = crate::step_speed(self.speed, steps);
        self.events.push(GameEvent::SpeedChanged { speed: self.speed });
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of live transient entities (all kinds)
    pub fn entity_count(&self) -> usize {
        self.dragons.len()
            + self.fire_dragons.len()
            + self.fireballs.len()
            + self.volcanoes.len()
            + self.lava_balls.len()
            + self.missiles.len()
    }
}
