//! One-shot warnings routed through the `log` facade.
//!
//! Provides deduplication so a value that falls back on every measurement
//! pass (an unparsable margin, an unknown display keyword) is only reported
//! once. Used by the CSS value layer and the positioning core.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a fallback value (logged once per unique message)
///
/// # Example
/// ```
/// tether_common::warning::warn_once("CSS", "unparsable margin-left 'auto', using 0");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_log = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_log {
        log::warn!(target: "tether", "[{component}] {message}");
    }
}

/// Whether `warn_once` has already emitted this exact warning.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call when loading a new scene)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
