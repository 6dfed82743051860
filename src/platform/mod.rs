//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock timestamps (high score dates)
//! - Run seeds
//! - The browser-facing game handle (wasm32)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Current time as an ISO-8601 UTC string, e.g. `2024-03-07T12:00:00.000Z`
#[cfg(target_arch = "wasm32")]
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Seed for a fresh run when the caller doesn't pin one
#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}
