//! Konami-code easter egg matcher
//!
//! Keeps a rolling buffer of the most recent `KeyboardEvent.code` values,
//! exactly as long as the target sequence. Mismatched input just keeps
//! sliding through the window; there is no early reset on a broken prefix.
//! A successful match clears the buffer so held-down keys cannot re-fire
//! the overlay immediately.

use std::collections::VecDeque;

/// The classic sequence, as `KeyboardEvent.code` values.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// How long the easter-egg overlay stays up before auto-dismissing
pub const EASTER_EGG_DISMISS_MS: u32 = 10_000;

/// Rolling key-code buffer matched against [`KONAMI_SEQUENCE`].
#[derive(Debug, Default)]
pub struct KonamiTracker {
    buffer: VecDeque<String>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key code. Returns `true` when the buffer now spells the full
    /// sequence; the buffer is cleared on a match.
    pub fn push(&mut self, code: &str) -> bool {
        self.buffer.push_back(code.to_string());
        while self.buffer.len() > KONAMI_SEQUENCE.len() {
            self.buffer.pop_front();
        }

        let matched = self.buffer.len() == KONAMI_SEQUENCE.len()
            && self.buffer.iter().zip(KONAMI_SEQUENCE).all(|(a, b)| a == b);
        if matched {
            self.buffer.clear();
        }
        matched
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_sequence_matches() {
        let mut tracker = KonamiTracker::new();
        for (i, code) in KONAMI_SEQUENCE.iter().enumerate() {
            let matched = tracker.push(code);
            assert_eq!(matched, i == KONAMI_SEQUENCE.len() - 1);
        }
    }

    #[test]
    fn test_buffer_cleared_after_match() {
        let mut tracker = KonamiTracker::new();
        for code in KONAMI_SEQUENCE {
            tracker.push(code);
        }
        assert_eq!(tracker.len(), 0);

        // A lone trailing "KeyA" must not re-trigger.
        assert!(!tracker.push("KeyA"));
    }

    #[test]
    fn test_sequence_matches_after_leading_noise() {
        let mut tracker = KonamiTracker::new();
        tracker.push("KeyQ");
        tracker.push("Space");

        let mut matched = false;
        for code in KONAMI_SEQUENCE {
            matched = tracker.push(code);
        }
        assert!(matched, "noise before the sequence should slide out");
    }

    #[test]
    fn test_broken_prefix_slides_instead_of_resetting() {
        let mut tracker = KonamiTracker::new();
        // Start the sequence, break it, then type it in full.
        tracker.push("ArrowUp");
        tracker.push("ArrowUp");
        tracker.push("KeyX");

        let mut matched = false;
        for code in KONAMI_SEQUENCE {
            matched = tracker.push(code);
        }
        assert!(matched);
    }

    #[test]
    fn test_buffer_never_exceeds_sequence_length() {
        let mut tracker = KonamiTracker::new();
        for _ in 0..50 {
            tracker.push("KeyZ");
        }
        assert_eq!(tracker.len(), KONAMI_SEQUENCE.len());
    }
}
