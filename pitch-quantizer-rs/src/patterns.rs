//! Step sequences of pitches.
//!
//! Length and active-step mask live with whoever plays the pattern; a
//! [`Pattern`] only holds the sixteen step pitches.

use crate::pitch::SEMITONE;

pub const MIN_PATTERN_LENGTH: usize = 2;
pub const MAX_PATTERN_LENGTH: usize = 16;
pub const NUM_USER_PATTERNS: usize = 4;

/// Largest step pitch magnitude, a little over four octaves.
pub const STEP_PITCH_LIMIT: i32 = 6272;

pub const PATTERN_NAMES: [&str; NUM_USER_PATTERNS] = ["SEQ-1", "SEQ-2", "SEQ-3", "SEQ-4"];

/// Name reported for indices past the user patterns.
pub const DEFAULT_PATTERN_NAME: &str = "DEFAULT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pattern {
    pub notes: [i16; MAX_PATTERN_LENGTH],
}

impl Pattern {
    /// Every step at pitch 0.
    pub const DEFAULT: Self = Self {
        notes: [0; MAX_PATTERN_LENGTH],
    };

    pub fn pitch(&self, step: usize) -> Option<i16> {
        self.notes.get(step).copied()
    }

    /// Move `step` by `delta` pitch units, clamped to
    /// `±STEP_PITCH_LIMIT`. Returns the new pitch, or `None` for a step
    /// past the end.
    pub fn change_pitch(&mut self, step: usize, delta: i32) -> Option<i16> {
        let note = self.notes.get_mut(step)?;
        let pitch = (*note as i32)
            .saturating_add(delta)
            .clamp(-STEP_PITCH_LIMIT, STEP_PITCH_LIMIT);
        *note = pitch as i16;
        Some(*note)
    }

    /// [`change_pitch`](Self::change_pitch) in whole semitones.
    pub fn change_semitones(&mut self, step: usize, semitones: i32) -> Option<i16> {
        self.change_pitch(step, semitones.saturating_mul(SEMITONE))
    }
}

/// Clamp a requested pattern length to `MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH`.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_PATTERN_LENGTH, MAX_PATTERN_LENGTH)
}

/// The user pattern bank.
#[derive(Debug, Clone, Default)]
pub struct Patterns {
    user: [Pattern; NUM_USER_PATTERNS],
}

impl Patterns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern `index`, or the all-zero default past the user patterns.
    pub fn get(&self, index: usize) -> &Pattern {
        self.user.get(index).unwrap_or(&Pattern::DEFAULT)
    }

    pub fn name(&self, index: usize) -> &'static str {
        PATTERN_NAMES.get(index).copied().unwrap_or(DEFAULT_PATTERN_NAME)
    }

    pub fn user_pattern_mut(&mut self, slot: usize) -> Option<&mut Pattern> {
        self.user.get_mut(slot)
    }
}
