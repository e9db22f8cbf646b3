use super::error::ScaleError;
use super::MAX_NOTES;

/// A repeating set of pitches, measured from the scale's root.
///
/// `notes[..num_notes]` are offsets in pitch units; the pattern repeats
/// every `span` units (one octave for every built-in scale). A span of 0
/// marks the empty "Off" scale.
///
/// A well-formed scale starts at 0, ascends strictly and stays below
/// `span`. Constant tables are not checked at construction; edits made
/// through [`ScaleEditor`](super::ScaleEditor) keep the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scale {
    pub(super) span: i16,
    pub(super) num_notes: usize,
    pub(super) notes: [i16; MAX_NOTES],
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(0, &[])
    }
}

impl Scale {
    /// Build a scale in a `const` context (used by the preset tables).
    ///
    /// # Panics
    ///
    /// If `notes` holds more than [`MAX_NOTES`] entries. In a `const` item
    /// this is a compile error.
    pub const fn new(span: i16, notes: &[i16]) -> Self {
        assert!(notes.len() <= MAX_NOTES, "a scale holds at most 16 notes");

        let mut stored = [0i16; MAX_NOTES];
        let mut i = 0;
        while i < notes.len() {
            stored[i] = notes[i];
            i += 1;
        }

        Self {
            span,
            num_notes: notes.len(),
            notes: stored,
        }
    }

    /// Build a scale from runtime data, e.g. a blob restored from storage.
    ///
    /// Returns [`ScaleError::TooManyNotes`] if `notes` is longer than
    /// [`MAX_NOTES`].
    pub fn from_notes(span: i16, notes: &[i16]) -> Result<Self, ScaleError> {
        if notes.len() > MAX_NOTES {
            return Err(ScaleError::TooManyNotes);
        }
        Ok(Self::new(span, notes))
    }

    /// Width of one repeating period in pitch units.
    pub fn span(&self) -> i16 {
        self.span
    }

    /// Number of defined notes.
    pub fn num_notes(&self) -> usize {
        self.num_notes
    }

    /// The defined notes, `notes[..num_notes]`.
    pub fn notes(&self) -> &[i16] {
        &self.notes[..self.num_notes]
    }

    /// Returns the note at `pos`, or `None` past the last defined note.
    pub fn note(&self, pos: usize) -> Option<i16> {
        self.notes().get(pos).copied()
    }

    /// Returns `true` for a scale that cannot quantize anything.
    pub fn is_empty(&self) -> bool {
        self.num_notes == 0 || self.span == 0
    }

    /// Returns `true` if the notes ascend strictly and stay within
    /// `[0, span)`.
    pub fn is_monotonic(&self) -> bool {
        let notes = self.notes();
        let ascending = notes.windows(2).all(|w| w[0] < w[1]);
        let in_range = match (notes.first(), notes.last()) {
            (Some(&first), Some(&last)) => first >= 0 && last < self.span,
            _ => true,
        };
        ascending && in_range
    }

    /// Sort the defined notes into ascending order.
    pub fn sort(&mut self) {
        self.notes[..self.num_notes].sort_unstable();
    }
}
