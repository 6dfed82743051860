//! High score leaderboard system
//!
//! Persisted through a [`ScoreStore`], tracks the top 5 scores.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::persistence::ScoreStore;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's score
    pub score: u32,
    /// ISO-8601 timestamp when achieved
    pub date: String,
}

/// High score leaderboard, sorted descending by score.
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would make the table
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Ties with the lowest entry lose to the older record
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score to the leaderboard.
    /// Returns the rank achieved (1-indexed) or None if it was cut.
    pub fn add_score(&mut self, score: u32, date: impl Into<String>) -> Option<usize> {
        // After every entry that is at least as good, so ties keep insertion order
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());

        self.entries.insert(
            pos,
            HighScoreEntry {
                score,
                date: date.into(),
            },
        );

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Restore the table invariants on data read from outside
    fn normalize(mut self) -> Self {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let scores: HighScores = serde_json::from_str(json).context("malformed high score table")?;
        Ok(scores.normalize())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("serializing high score table")
    }

    /// Persist the table
    pub fn save(&self, store: &mut dyn ScoreStore) -> Result<()> {
        let json = self.to_json()?;
        store.write(&json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

/// Load the persisted table. Never fails: a missing, unreadable or corrupt
/// record all read as an empty table.
pub fn load_scores(store: &dyn ScoreStore) -> HighScores {
    let loaded = store
        .read()
        .and_then(|json| json.map(|json| HighScores::from_json(&json)).transpose());

    match loaded {
        Ok(Some(scores)) => {
            log::info!("Loaded {} high scores", scores.entries.len());
            scores
        }
        Ok(None) => {
            log::info!("No high scores found, starting fresh");
            HighScores::new()
        }
        Err(err) => {
            log::warn!("Ignoring unreadable high scores: {err:#}");
            HighScores::new()
        }
    }
}

/// Append a timestamped score to the persisted table, keep the top 5 and
/// write it back. The table is reloaded first so records written elsewhere
/// since the round started are not clobbered.
pub fn record_score(store: &mut dyn ScoreStore, score: u32, date: impl Into<String>) -> Result<HighScores> {
    let mut scores = load_scores(store);
    if let Some(rank) = scores.add_score(score, date) {
        log::info!("Score {} ranked #{}", score, rank);
    }
    scores.save(store)?;
    Ok(scores)
}

/// Format an ISO timestamp as a short table date (e.g. "Mar 7, 24")
#[cfg(target_arch = "wasm32")]
pub fn format_date(iso: &str) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    format!(
        "{} {}, {:02}",
        MONTHS[date.get_month() as usize % 12],
        date.get_date(),
        date.get_full_year() % 100
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_date(iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(date) => date.format("%b %-d, %y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    const DATE: &str = "2024-03-07T12:00:00.000Z";

    #[test]
    fn test_add_score_keeps_top_five_descending() {
        let mut scores = HighScores::new();
        for s in [50, 30, 90, 10, 70, 20] {
            scores.add_score(s, DATE);
        }
        let kept: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(kept, vec![90, 70, 50, 30, 20]);
    }

    #[test]
    fn test_add_score_rank() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(10, DATE), Some(1));
        assert_eq!(scores.add_score(30, DATE), Some(1));
        assert_eq!(scores.add_score(20, DATE), Some(2));
        for _ in 0..2 {
            scores.add_score(40, DATE);
        }
        assert_eq!(scores.add_score(5, DATE), None);
        assert_eq!(scores.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_ties_keep_older_entry_first() {
        let mut scores = HighScores::new();
        scores.add_score(10, "first");
        scores.add_score(10, "second");
        assert_eq!(scores.entries[0].date, "first");
        assert_eq!(scores.entries[1].date, "second");
    }

    #[test]
    fn test_qualifies() {
        let mut scores = HighScores::new();
        assert!(scores.qualifies(0));
        for s in [50, 40, 30, 20, 10] {
            scores.add_score(s, DATE);
        }
        assert!(!scores.qualifies(10));
        assert!(scores.qualifies(11));
    }

    #[test]
    fn test_wire_format_is_bare_array() {
        let mut scores = HighScores::new();
        scores.add_score(42, DATE);
        let json = scores.to_json().unwrap();
        assert_eq!(json, r#"[{"score":42,"date":"2024-03-07T12:00:00.000Z"}]"#);
    }

    #[test]
    fn test_from_json_normalizes_foreign_data() {
        let json = r#"[{"score":1,"date":"a"},{"score":9,"date":"b"},{"score":5,"date":"c"},
            {"score":2,"date":"d"},{"score":7,"date":"e"},{"score":3,"date":"f"}]"#;
        let scores = HighScores::from_json(json).unwrap();
        let kept: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(kept, vec![9, 7, 5, 3, 2]);
    }

    #[test]
    fn test_load_missing_and_corrupt_are_empty() {
        assert!(load_scores(&MemoryStore::new()).is_empty());
        assert!(load_scores(&MemoryStore::with_contents("{ nope")).is_empty());
    }

    #[test]
    fn test_record_score_sequence() {
        let mut store = MemoryStore::new();
        for s in [50, 30, 90, 10, 70, 20] {
            record_score(&mut store, s, DATE).unwrap();
        }
        let persisted = load_scores(&store);
        let kept: Vec<u32> = persisted.entries.iter().map(|e| e.score).collect();
        assert_eq!(kept, vec![90, 70, 50, 30, 20]);
        assert_eq!(store.writes(), 6);
    }

    #[test]
    fn test_record_score_surfaces_write_failure() {
        let mut store = MemoryStore::new();
        store.fail_writes(true);
        assert!(record_score(&mut store, 5, DATE).is_err());
        assert!(load_scores(&store).is_empty());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(DATE), "Mar 7, 24");
        assert_eq!(format_date("garbage"), "garbage");
    }
}
