//! Hero terminal typing animation state machine
//!
//! Cycles through a fixed list of commands forever: types each one
//! character-by-character with a jittered delay, pauses at full length,
//! deletes back to empty, pauses again, then moves on to the next command.
//!
//! The sequencer never schedules anything itself. Each call to [`tick`]
//! advances the machine one step and returns the text to display together
//! with the delay the driver should wait before the next tick, so the whole
//! loop can be exercised in tests without real timers.
//!
//! [`tick`]: TypingSequencer::tick

/// Pause at full command length before deletion starts
pub const TYPE_PAUSE_MS: u32 = 2000;

/// Pause at the empty string before the next command starts
pub const NEXT_COMMAND_PAUSE_MS: u32 = 500;

/// Fixed per-character delay while deleting
pub const DELETE_DELAY_MS: u32 = 50;

/// Minimum per-character delay while typing
pub const TYPE_DELAY_MIN_MS: u32 = 50;

/// Jitter range added on top of the minimum typing delay
pub const TYPE_DELAY_JITTER_MS: u32 = 100;

/// One step of the typing animation: what to show and how long to wait.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    /// Text to display after this step
    pub text: String,
    /// Delay before the next call to `tick`
    pub delay_ms: u32,
}

/// Infinite typewriter over a fixed command list.
///
/// State is `(command_index, char_index, deleting)`; nothing outside the
/// sequencer ever writes it.
#[derive(Debug)]
pub struct TypingSequencer {
    commands: Vec<String>,
    command_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingSequencer {
    /// Create a sequencer over a non-empty command list.
    pub fn new(commands: Vec<String>) -> Self {
        assert!(!commands.is_empty(), "command list must be non-empty");
        Self {
            commands,
            command_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    /// Index of the command currently being typed or deleted.
    pub fn command_index(&self) -> usize {
        self.command_index
    }

    /// Whether the sequencer is currently in its deletion phase.
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance one step. `jitter` must be in `[0, 1)` and only affects the
    /// per-character typing delay.
    pub fn tick(&mut self, jitter: f64) -> TypingFrame {
        let command = &self.commands[self.command_index];
        let len = command.chars().count();

        if !self.deleting {
            if self.char_index < len {
                self.char_index += 1;
            }
            let text: String = command.chars().take(self.char_index).collect();

            if self.char_index >= len {
                // Finished typing (including the zero-length command case),
                // hold the full text then start deleting.
                self.deleting = true;
                TypingFrame {
                    text,
                    delay_ms: TYPE_PAUSE_MS,
                }
            } else {
                let jitter = jitter.clamp(0.0, 1.0);
                let delay =
                    TYPE_DELAY_MIN_MS + (jitter * f64::from(TYPE_DELAY_JITTER_MS)) as u32;
                TypingFrame {
                    text,
                    delay_ms: delay,
                }
            }
        } else {
            if self.char_index > 0 {
                self.char_index -= 1;
            }
            let text: String = command.chars().take(self.char_index).collect();

            if self.char_index == 0 {
                // Reached empty, wrap to the next command after a short hold.
                self.deleting = false;
                self.command_index = (self.command_index + 1) % self.commands.len();
                TypingFrame {
                    text,
                    delay_ms: NEXT_COMMAND_PAUSE_MS,
                }
            } else {
                TypingFrame {
                    text,
                    delay_ms: DELETE_DELAY_MS,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer(commands: &[&str]) -> TypingSequencer {
        TypingSequencer::new(commands.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_types_character_by_character() {
        let mut seq = sequencer(&["abc"]);

        assert_eq!(seq.tick(0.0).text, "a");
        assert_eq!(seq.tick(0.0).text, "ab");
        let frame = seq.tick(0.0);
        assert_eq!(frame.text, "abc");
        assert_eq!(frame.delay_ms, TYPE_PAUSE_MS);
        assert!(seq.is_deleting());
    }

    #[test]
    fn test_typing_delay_is_jittered() {
        let mut seq = sequencer(&["abc"]);

        assert_eq!(seq.tick(0.0).delay_ms, TYPE_DELAY_MIN_MS);
        assert_eq!(
            seq.tick(0.999).delay_ms,
            TYPE_DELAY_MIN_MS + (0.999 * f64::from(TYPE_DELAY_JITTER_MS)) as u32
        );
    }

    #[test]
    fn test_single_character_command_full_cycle() {
        let mut seq = sequencer(&["A"]);

        // Type "A", then hold before deleting.
        let typed = seq.tick(0.0);
        assert_eq!(typed.text, "A");
        assert_eq!(typed.delay_ms, TYPE_PAUSE_MS);

        // Delete back to empty, hold before restarting.
        let deleted = seq.tick(0.0);
        assert_eq!(deleted.text, "");
        assert_eq!(deleted.delay_ms, NEXT_COMMAND_PAUSE_MS);
        assert!(!seq.is_deleting());

        // Single-command list wraps back onto itself.
        let retyped = seq.tick(0.0);
        assert_eq!(retyped.text, "A");
        assert_eq!(retyped.delay_ms, TYPE_PAUSE_MS);
    }

    #[test]
    fn test_wraps_to_next_command() {
        let mut seq = sequencer(&["ab", "xy"]);

        seq.tick(0.0);
        seq.tick(0.0); // "ab" typed
        seq.tick(0.0); // "a"
        let empty = seq.tick(0.0);
        assert_eq!(empty.text, "");
        assert_eq!(seq.command_index(), 1);

        assert_eq!(seq.tick(0.0).text, "x");
        assert_eq!(seq.tick(0.0).text, "xy");
    }

    #[test]
    fn test_wraps_from_last_command_to_first() {
        let mut seq = sequencer(&["a", "b"]);

        seq.tick(0.0); // "a"
        seq.tick(0.0); // "" -> command 1
        seq.tick(0.0); // "b"
        seq.tick(0.0); // "" -> command 0
        assert_eq!(seq.command_index(), 0);
        assert_eq!(seq.tick(0.0).text, "a");
    }

    #[test]
    fn test_empty_command_is_degenerate_but_valid() {
        let mut seq = sequencer(&["", "a"]);

        // Immediately "finishes" typing the empty command.
        let frame = seq.tick(0.0);
        assert_eq!(frame.text, "");
        assert_eq!(frame.delay_ms, TYPE_PAUSE_MS);

        // Deletion of an empty command advances straight to the next one.
        let frame = seq.tick(0.0);
        assert_eq!(frame.text, "");
        assert_eq!(frame.delay_ms, NEXT_COMMAND_PAUSE_MS);
        assert_eq!(seq.command_index(), 1);
    }

    #[test]
    fn test_delete_delay_is_fixed() {
        let mut seq = sequencer(&["abc"]);

        seq.tick(0.5);
        seq.tick(0.5);
        seq.tick(0.5); // typed fully
        assert_eq!(seq.tick(0.9).delay_ms, DELETE_DELAY_MS);
        assert_eq!(seq.tick(0.9).delay_ms, DELETE_DELAY_MS);
    }

    #[test]
    fn test_multibyte_commands_split_on_char_boundaries() {
        let mut seq = sequencer(&["héllo ✅"]);

        assert_eq!(seq.tick(0.0).text, "h");
        assert_eq!(seq.tick(0.0).text, "hé");
        for _ in 0..5 {
            seq.tick(0.0);
        }
        assert!(seq.is_deleting());
        assert_eq!(seq.tick(0.0).text, "héllo ");
    }
}
