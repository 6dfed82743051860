//! Player input surface
//!
//! Key events arrive asynchronously relative to frames. They are latched here
//! immediately and sampled once per frame: held keys persist across samples,
//! edge-triggered actions are consumed by the sample that sees them.

use crate::sim::TickInput;

/// Named player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Held: forces lift every tick
    Ascend,
    /// Edge: start or restart a round
    Start,
    /// Edge: fire a missile pair (or start, when no round is running)
    Fire,
    /// Edge: raise the global speed multiplier one step
    SpeedUp,
    /// Edge: lower the global speed multiplier one step
    SpeedDown,
}

impl Action {
    /// Map a DOM `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Action::Ascend),
            " " | "Space" | "Spacebar" => Some(Action::Fire),
            "=" | "+" => Some(Action::SpeedUp),
            "-" | "_" => Some(Action::SpeedDown),
            _ => None,
        }
    }
}

/// Latched input between two frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    ascend_held: bool,
    pending: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action press. Repeated presses before the next sample collapse.
    pub fn press(&mut self, action: Action) {
        match action {
            Action::Ascend => self.ascend_held = true,
            Action::Start => self.pending.start = true,
            Action::Fire => self.pending.fire = true,
            Action::SpeedUp => self.pending.speed_up = true,
            Action::SpeedDown => self.pending.speed_down = true,
        }
    }

    /// Record an action release. Only held actions care.
    pub fn release(&mut self, action: Action) {
        if action == Action::Ascend {
            self.ascend_held = false;
        }
    }

    /// Returns true if the key was mapped to an action
    pub fn key_down(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    /// Take this frame's input: held state plus any edges latched since the
    /// previous sample. Edges are cleared.
    pub fn sample(&mut self) -> TickInput {
        let mut input = std::mem::take(&mut self.pending);
        input.ascend = self.ascend_held;
        input
    }

    /// Forget held keys and unsampled presses (e.g. window lost focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key("ArrowUp"), Some(Action::Ascend));
        assert_eq!(Action::from_key(" "), Some(Action::Fire));
        assert_eq!(Action::from_key("+"), Some(Action::SpeedUp));
        assert_eq!(Action::from_key("="), Some(Action::SpeedUp));
        assert_eq!(Action::from_key("_"), Some(Action::SpeedDown));
        assert_eq!(Action::from_key("a"), None);
    }

    #[test]
    fn test_held_key_survives_sample() {
        let mut input = InputState::new();
        input.key_down("ArrowUp");
        assert!(input.sample().ascend);
        assert!(input.sample().ascend);
        input.key_up("ArrowUp");
        assert!(!input.sample().ascend);
    }

    #[test]
    fn test_edges_are_consumed_once() {
        let mut input = InputState::new();
        input.key_down(" ");
        input.key_down(" ");
        input.key_down("=");
        let first = input.sample();
        assert!(first.fire);
        assert!(first.speed_up);
        let second = input.sample();
        assert!(!second.fire);
        assert!(!second.speed_up);
    }

    #[test]
    fn test_edge_seen_even_if_released_before_frame() {
        let mut input = InputState::new();
        input.key_down(" ");
        input.key_up(" ");
        assert!(input.sample().fire);
        assert!(!input.sample().fire);
    }

    #[test]
    fn test_clear_drops_held_and_pending() {
        let mut input = InputState::new();
        input.key_down("ArrowUp");
        input.key_down(" ");
        input.key_down("-");
        input.clear();
        assert_eq!(input.sample(), TickInput::default());
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut input = InputState::new();
        assert!(!input.key_down("q"));
        let sampled = input.sample();
        assert!(!sampled.fire && !sampled.start && !sampled.ascend);
    }
}
