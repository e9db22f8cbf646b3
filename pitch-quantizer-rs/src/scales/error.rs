/// Errors that can occur when building or editing scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaleError {
    /// More notes were supplied than a scale can hold (must be <= MAX_NOTES).
    TooManyNotes,
    /// Note position is out of bounds (must be < num_notes).
    InvalidNotePosition,
    /// User scale slot is out of bounds (must be < NUM_USER_SCALES).
    InvalidUserSlot,
    /// Registry index is out of bounds (must be < Scales::len()).
    InvalidScaleIndex,
    /// The edit would leave no active note in the mask.
    EmptyMask,
}
