//! Frame driver
//!
//! A `Session` owns one `GameWorld`, latches input between frames, and turns
//! simulation events into persistence side effects. The platform calls
//! `frame()` from its animation callback and reads `snapshot()` to draw.

use crate::highscores::{self, HighScores};
use crate::input::{Action, InputState};
use crate::persistence::ScoreStore;
use crate::sim::{GameEvent, GamePhase, GameWorld, TickInput, Viewport, tick};
use crate::snapshot::Snapshot;
use crate::tuning::Tuning;

/// Produces the timestamp stored with a high score
pub type Clock = fn() -> String;

pub struct Session<S: ScoreStore> {
    world: GameWorld,
    input: InputState,
    store: S,
    high_scores: HighScores,
    clock: Clock,
    /// Events from the most recent frame
    last_events: Vec<GameEvent>,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(store: S, viewport: Viewport, seed: u64, tuning: Tuning) -> Self {
        let high_scores = highscores::load_scores(&store);
        Self {
            world: GameWorld::new(seed, viewport, tuning),
            input: InputState::new(),
            store,
            high_scores,
            clock: crate::platform::now_iso,
            last_events: Vec::new(),
        }
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.key_up(key)
    }

    pub fn press(&mut self, action: Action) {
        self.input.press(action);
    }

    pub fn release(&mut self, action: Action) {
        self.input.release(action);
    }

    /// Window lost focus: drop held keys so the craft doesn't climb forever
    pub fn blur(&mut self) {
        self.input.clear();
    }

    /// Start button
    pub fn start(&mut self) {
        self.input.press(Action::Start);
    }

    /// Viewport change from the platform's resize notifier
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.set_viewport(Viewport::new(width, height));
    }

    /// Advance one frame with the latched input
    pub fn frame(&mut self) {
        let input = self.input.sample();
        self.step(&input);
    }

    /// Advance one frame with explicit input, bypassing the latch
    pub fn step(&mut self, input: &TickInput) {
        tick(&mut self.world, input);
        self.last_events = self.world.drain_events();
        for event in &self.last_events {
            match event {
                GameEvent::Started => {
                    self.high_scores = highscores::load_scores(&self.store);
                }
                GameEvent::GameOver { score } => {
                    let date = (self.clock)();
                    match highscores::record_score(&mut self.store, *score, date) {
                        Ok(table) => self.high_scores = table,
                        Err(err) => log::warn!("Could not save score {}: {err:#}", score),
                    }
                }
                _ => {}
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::capture(&self.world, &self.high_scores.entries)
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Direct world access for scripted setups
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
