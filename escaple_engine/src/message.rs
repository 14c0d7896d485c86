//! Message board -- the single slot of transient feedback shown to the player.
//!
//! A new message always replaces the current one and restarts its timer;
//! messages never queue. Time is passed in explicitly by the `_at` variants so
//! expiry can be checked without sleeping.

use std::time::{Duration, Instant};

use log::{debug, info};

/// How long messages stay up, by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTimings {
    pub default: Duration,
    pub success: Duration,
    pub fail: Duration,
}

impl Default for MessageTimings {
    fn default() -> Self {
        Self::from_millis(3500, 6000, 3000)
    }
}

impl MessageTimings {
    pub fn from_millis(default: u64, success: u64, fail: u64) -> Self {
        Self {
            default: Duration::from_millis(default),
            success: Duration::from_millis(success),
            fail: Duration::from_millis(fail),
        }
    }
}

#[derive(Debug, Clone)]
struct Posted {
    text: String,
    // None when `now + duration` would overflow; such a message never expires.
    expires_at: Option<Instant>,
}

/// Debounced single-slot message display.
#[derive(Debug, Clone, Default)]
pub struct MessageBoard {
    current: Option<Posted>,
    generation: u64,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` for `duration`, replacing whatever is up now.
    pub fn show(&mut self, text: impl Into<String>, duration: Duration) {
        self.show_at(text, duration, Instant::now());
    }

    pub fn show_at(&mut self, text: impl Into<String>, duration: Duration, now: Instant) {
        let text = text.into();
        info!("message ({}ms): {text}", duration.as_millis());
        self.current = Some(Posted {
            text,
            expires_at: now.checked_add(duration),
        });
        self.generation += 1;
    }

    /// The message on display at `now`, if it hasn't timed out.
    pub fn visible_at(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|posted| posted.expires_at.is_none_or(|deadline| now < deadline))
            .map(|posted| posted.text.as_str())
    }

    pub fn visible(&self) -> Option<&str> {
        self.visible_at(Instant::now())
    }

    /// Clear the slot if its message has timed out. Returns true if it was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.visible_at(now).is_none() {
            debug!("message timed out and was cleared");
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The most recently shown message, ignoring its timer.
    pub fn latest(&self) -> Option<&str> {
        self.current.as_ref().map(|posted| posted.text.as_str())
    }

    /// Counter bumped on every `show`, so a front-end can tell whether
    /// anything new was posted since it last drew.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
