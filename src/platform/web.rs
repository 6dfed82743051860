//! Browser surface
//!
//! The page owns the canvas and the `requestAnimationFrame` loop. It forwards
//! key events and resizes here, calls `frame()` once per animation frame and
//! draws whatever `snapshot()` returns.

use wasm_bindgen::prelude::*;

use crate::persistence::LocalStorageStore;
use crate::session::Session;
use crate::sim::{GamePhase, Viewport};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Dragon Flight (web) starting...");
}

/// Game instance handed to the page
#[wasm_bindgen]
pub struct WebGame {
    session: Session<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// `tuning_json` may be empty for the default balance
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, tuning_json: &str) -> Result<WebGame, JsValue> {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).map_err(|err| JsValue::from_str(&format!("{err:#}")))?
        };
        let seed = super::clock_seed();
        log::info!("New session with seed: {}", seed);
        Ok(WebGame {
            session: Session::new(
                LocalStorageStore::default(),
                Viewport::new(width, height),
                seed,
                tuning,
            ),
        })
    }

    /// `KeyboardEvent.key`; returns true if the page should `preventDefault`
    pub fn key_down(&mut self, key: &str) -> bool {
        self.session.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.session.key_up(key)
    }

    /// Start/restart button click
    pub fn start(&mut self) {
        self.session.start();
    }

    /// Window lost focus
    pub fn blur(&mut self) {
        self.session.blur();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    pub fn frame(&mut self) {
        self.session.frame();
    }

    /// Current frame as JSON for the renderer
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.session
            .snapshot()
            .to_json()
            .map_err(|err| JsValue::from_str(&format!("{err:#}")))
    }

    /// Whether the start button should be visible
    pub fn awaiting_start(&self) -> bool {
        self.session.phase() != GamePhase::Playing
    }

    /// "Mon D, YY" for a stored high score date
    pub fn format_date(iso: &str) -> String {
        crate::highscores::format_date(iso)
    }
}
