use super::error::ScaleError;
use super::presets::{BUILTIN_SCALES, BUILTIN_SCALE_NAMES, NUM_BUILTIN_SCALES, SEMITONES};
use super::scale::Scale;
use super::NUM_USER_SCALES;

/// Display names of the user scale slots.
pub const USER_SCALE_NAMES: [&str; NUM_USER_SCALES] = ["USER1", "USER2", "USER3", "USER4"];

/// Every scale the module can select: the user slots first, then the
/// built-in presets.
///
/// Registry index `i < NUM_USER_SCALES` addresses user slot `i`; higher
/// indices address `BUILTIN_SCALES[i - NUM_USER_SCALES]`.
#[derive(Debug, Clone)]
pub struct Scales {
    user: [Scale; NUM_USER_SCALES],
}

impl Default for Scales {
    fn default() -> Self {
        Self::new()
    }
}

impl Scales {
    /// Registry offset of the first built-in scale.
    pub const FIRST_BUILTIN: usize = NUM_USER_SCALES;

    /// Create a registry with every user slot initialised to the chromatic
    /// scale.
    pub fn new() -> Self {
        Self {
            user: [BUILTIN_SCALES[SEMITONES]; NUM_USER_SCALES],
        }
    }

    /// Total number of selectable scales.
    pub const fn len(&self) -> usize {
        NUM_USER_SCALES + NUM_BUILTIN_SCALES
    }

    /// Always `false`; present for API symmetry with [`len`](Self::len).
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Registry index of built-in preset `preset`.
    pub const fn builtin_index(preset: usize) -> usize {
        Self::FIRST_BUILTIN + preset
    }

    /// Returns `true` if `index` addresses a user slot.
    pub fn is_user(&self, index: usize) -> bool {
        index < NUM_USER_SCALES
    }

    /// The scale at registry `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Scale> {
        if index < NUM_USER_SCALES {
            self.user.get(index)
        } else {
            BUILTIN_SCALES.get(index - NUM_USER_SCALES)
        }
    }

    /// Display name of the scale at `index`.
    ///
    /// Returns [`ScaleError::InvalidScaleIndex`] past the end.
    pub fn name(&self, index: usize) -> Result<&'static str, ScaleError> {
        if index < NUM_USER_SCALES {
            Ok(USER_SCALE_NAMES[index])
        } else {
            BUILTIN_SCALE_NAMES
                .get(index - NUM_USER_SCALES)
                .copied()
                .ok_or(ScaleError::InvalidScaleIndex)
        }
    }

    /// Mutable access to a user slot for editing.
    ///
    /// Returns [`ScaleError::InvalidUserSlot`] if `slot >= NUM_USER_SCALES`.
    pub fn user_scale_mut(&mut self, slot: usize) -> Result<&mut Scale, ScaleError> {
        self.user.get_mut(slot).ok_or(ScaleError::InvalidUserSlot)
    }

    /// Replace a user slot wholesale, e.g. with a scale restored from
    /// persistent storage. No validation beyond the slot index is done.
    pub fn restore_user_scale(&mut self, slot: usize, scale: Scale) -> Result<(), ScaleError> {
        *self.user_scale_mut(slot)? = scale;
        Ok(())
    }

    /// Index of the next scale after `index`, wrapping to 0.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }
}
