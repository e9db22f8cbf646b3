use super::error::ScaleError;
use super::mask::ScaleMask;
use super::presets::{BUILTIN_SCALES, SEMITONES};
use super::scale::Scale;
use super::{MAX_EDIT_NOTES, MIN_EDIT_NOTES};

/// In-place editor for a mutable scale and the mask applied to it.
///
/// Borrows both for the duration of one editing session. Every operation
/// keeps the scale's notes strictly ascending inside `[0, span)` and keeps
/// at least one note active, so the owner can hand the result straight
/// to [`Quantizer::configure`](crate::Quantizer::configure).
///
/// # Examples
///
/// ```
/// use pitch_quantizer::{Scale, ScaleEditor, ScaleMask};
///
/// let mut scale = Scale::new(1536, &[0, 256, 512, 768]);
/// let mut mask = ScaleMask::ALL;
/// let mut editor = ScaleEditor::new(&mut scale, &mut mask);
///
/// // Note 1 cannot be pushed onto note 2.
/// assert_eq!(editor.change_note(1, 1000), Ok(511));
/// ```
pub struct ScaleEditor<'a> {
    scale: &'a mut Scale,
    mask: &'a mut ScaleMask,
}

impl<'a> ScaleEditor<'a> {
    /// Start editing `scale` together with its active-note `mask`.
    pub fn new(scale: &'a mut Scale, mask: &'a mut ScaleMask) -> Self {
        Self { scale, mask }
    }

    /// The scale as edited so far.
    pub fn scale(&self) -> &Scale {
        self.scale
    }

    /// The mask as edited so far.
    pub fn mask(&self) -> ScaleMask {
        *self.mask
    }

    // ── Note values ──────────────────────────────────────────────────

    /// Move note `pos` by `delta` pitch units.
    ///
    /// The new value is clamped to lie strictly between its neighbours: above
    /// `notes[pos - 1]` (or at least 0 for the first note) and below
    /// `notes[pos + 1]` (or `span` for the last note). If the neighbours
    /// leave no room the note stays where it is. Returns the resulting
    /// value.
    ///
    /// Returns [`ScaleError::InvalidNotePosition`] if `pos >= num_notes`.
    pub fn change_note(&mut self, pos: usize, delta: i32) -> Result<i16, ScaleError> {
        if pos >= self.scale.num_notes {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "change_note: pos {} out of range ({} notes)",
                pos,
                self.scale.num_notes
            );
            return Err(ScaleError::InvalidNotePosition);
        }

        let (min, max) = self.note_bounds(pos);
        let current = self.scale.notes[pos];
        if min > max {
            return Ok(current);
        }

        let note = (current as i32).saturating_add(delta).clamp(min, max) as i16;
        self.scale.notes[pos] = note;
        Ok(note)
    }

    /// Inclusive range note `pos` may take without touching a neighbour.
    fn note_bounds(&self, pos: usize) -> (i32, i32) {
        let notes = &self.scale.notes;
        let min = if pos > 0 { notes[pos - 1] as i32 + 1 } else { 0 };
        let max = if pos + 1 < self.scale.num_notes {
            notes[pos + 1] as i32 - 1
        } else {
            self.scale.span as i32 - 1
        };
        (min, max)
    }

    // ── Scale length ─────────────────────────────────────────────────

    /// Grow or shrink the scale by `delta` notes. See
    /// [`set_num_notes`](Self::set_num_notes).
    pub fn change_num_notes(&mut self, delta: i32) -> usize {
        let target = (self.scale.num_notes as i32).saturating_add(delta);
        self.set_num_notes(target.max(0) as usize)
    }

    /// Set the number of notes, clamped to `[MIN_EDIT_NOTES, MAX_EDIT_NOTES]`.
    ///
    /// New notes start at pitch 0 and are clamped against their lower
    /// neighbour, so each lands one unit above the previous note; they are
    /// also made active. Growth stops early once a note would reach the
    /// span. When shrinking leaves no active note, note 0 is activated.
    ///
    /// Returns the resulting number of notes.
    pub fn set_num_notes(&mut self, num_notes: usize) -> usize {
        let target = num_notes.clamp(MIN_EDIT_NOTES, MAX_EDIT_NOTES);
        let old = self.scale.num_notes;

        if target > old {
            for pos in old..target {
                if !self.append_note(pos) {
                    break;
                }
            }
            *self.mask = self.mask.activate_range(old, self.scale.num_notes);
        } else {
            self.scale.num_notes = target;
            if !self.mask.has_active(target) {
                *self.mask = ScaleMask(self.mask.0 | 0x1);
            }
        }

        self.scale.num_notes
    }

    /// Append a note at `pos` (== current `num_notes`). Returns `false` if
    /// there is no room left below the span.
    fn append_note(&mut self, pos: usize) -> bool {
        self.scale.num_notes = pos + 1;
        self.scale.notes[pos] = 0;
        let (min, max) = self.note_bounds(pos);
        if min > max {
            self.scale.num_notes = pos;
            return false;
        }
        self.scale.notes[pos] = 0i32.clamp(min, max) as i16;
        true
    }

    // ── Mask ─────────────────────────────────────────────────────────

    /// Rotate the active notes by `amount` positions (positive = up).
    pub fn rotate_mask(&mut self, amount: i32) {
        *self.mask = self.mask.rotate(amount, self.scale.num_notes);
    }

    /// Invert the active notes. Refused if every note is currently active.
    pub fn invert_mask(&mut self) -> Result<(), ScaleError> {
        *self.mask = self.mask.invert(self.scale.num_notes).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::debug!("invert_mask refused: {}", e);
            e
        })?;
        Ok(())
    }

    /// Toggle whether note `pos` is active. The last active note cannot be
    /// switched off.
    pub fn toggle_note(&mut self, pos: usize) -> Result<(), ScaleError> {
        *self.mask = self.mask.toggle(pos, self.scale.num_notes)?;
        Ok(())
    }

    // ── Reset ────────────────────────────────────────────────────────

    /// Overwrite the scale with the chromatic preset and activate every note.
    pub fn reset(&mut self) {
        *self.scale = BUILTIN_SCALES[SEMITONES];
        *self.mask = ScaleMask::ALL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: a four-note whole-tone fragment.
    fn four_notes() -> (Scale, ScaleMask) {
        (Scale::new(1536, &[0, 256, 512, 768]), ScaleMask::ALL)
    }

    // ── change_note ──────────────────────────────────────────────────

    #[test]
    fn change_note_moves_within_neighbours() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_note(1, 100), Ok(356));
        assert_eq!(editor.scale().notes(), &[0, 356, 512, 768]);
    }

    #[test]
    fn change_note_clamps_below_upper_neighbour() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_note(1, 10_000), Ok(511));
    }

    #[test]
    fn change_note_clamps_above_lower_neighbour() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_note(2, -10_000), Ok(257));
    }

    #[test]
    fn change_note_first_note_stays_non_negative() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_note(0, -128), Ok(0));
        assert_eq!(editor.change_note(0, 128), Ok(128));
    }

    #[test]
    fn change_note_last_note_stays_below_span() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_note(3, 5000), Ok(1535));
    }

    #[test]
    fn change_note_saturates_extreme_deltas() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_note(1, i32::MAX), Ok(511));
        assert_eq!(editor.change_note(1, i32::MIN), Ok(1));
        assert_eq!(editor.change_note(3, i32::MAX), Ok(1535));
        assert_eq!(editor.change_note(0, i32::MIN), Ok(0));
        assert!(editor.scale().is_monotonic());
    }

    #[test]
    fn change_note_without_room_is_unchanged() {
        let mut scale = Scale::new(1536, &[0, 1, 2, 3]);
        let mut mask = ScaleMask::ALL;
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_note(1, 50), Ok(1));
        assert_eq!(editor.change_note(2, -50), Ok(2));
    }

    #[test]
    fn change_note_invalid_position() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_note(4, 1), Err(ScaleError::InvalidNotePosition));
        assert_eq!(editor.scale().notes(), &[0, 256, 512, 768]);
    }

    // ── Length ───────────────────────────────────────────────────────

    #[test]
    fn grow_appends_notes_above_last() {
        let (mut scale, _) = four_notes();
        let mut mask = ScaleMask(0x0003);
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_num_notes(2), 6);
        assert_eq!(editor.scale().notes(), &[0, 256, 512, 768, 769, 770]);
        // New notes are active, old inactive notes untouched.
        assert_eq!(editor.mask().bits() & 0x3f, 0b11_0011);
        assert!(editor.scale().is_monotonic());
    }

    #[test]
    fn grow_stops_at_span() {
        let mut scale = Scale::new(1536, &[0, 512, 1024, 1534]);
        let mut mask = ScaleMask::ALL;
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.set_num_notes(8), 5);
        assert_eq!(editor.scale().notes(), &[0, 512, 1024, 1534, 1535]);
    }

    #[test]
    fn length_is_clamped() {
        let mut scale = Scale::new(1536, &[0, 128, 256, 384, 512, 640]);
        let mut mask = ScaleMask::ALL;
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_num_notes(-10), MIN_EDIT_NOTES);
        assert_eq!(editor.change_num_notes(100), MAX_EDIT_NOTES);
        assert!(editor.scale().is_monotonic());
    }

    #[test]
    fn length_saturates_extreme_deltas() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.change_num_notes(i32::MAX), MAX_EDIT_NOTES);
        assert_eq!(editor.change_num_notes(i32::MIN), MIN_EDIT_NOTES);
        assert!(editor.scale().is_monotonic());
    }

    #[test]
    fn shrink_keeps_one_active_note() {
        let mut scale = Scale::new(1536, &[0, 128, 256, 384, 512, 640]);
        let mut mask = ScaleMask(0b11_0000);
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.set_num_notes(4), 4);
        assert!(editor.mask().has_active(4));
        assert!(editor.mask().is_active(0));
    }

    // ── Mask ─────────────────────────────────────────────────────────

    #[test]
    fn rotate_mask_uses_scale_length() {
        let (mut scale, _) = four_notes();
        let mut mask = ScaleMask(0b0001);
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        editor.rotate_mask(-1);
        assert_eq!(editor.mask().bits(), 0xfff8);
    }

    #[test]
    fn invert_mask_refused_when_all_active() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.invert_mask(), Err(ScaleError::EmptyMask));
        assert_eq!(editor.mask(), ScaleMask::ALL);
    }

    #[test]
    fn invert_mask_flips_in_range() {
        let (mut scale, _) = four_notes();
        let mut mask = ScaleMask(0xfff5);
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        assert_eq!(editor.invert_mask(), Ok(()));
        assert_eq!(editor.mask().bits(), 0xfffa);
    }

    #[test]
    fn toggle_note_round_trip() {
        let (mut scale, mut mask) = four_notes();
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        editor.toggle_note(2).unwrap();
        assert!(!editor.mask().is_active(2));
        editor.toggle_note(2).unwrap();
        assert!(editor.mask().is_active(2));
    }

    // ── Reset ────────────────────────────────────────────────────────

    #[test]
    fn reset_restores_semitones() {
        let (mut scale, _) = four_notes();
        let mut mask = ScaleMask(0x0001);
        let mut editor = ScaleEditor::new(&mut scale, &mut mask);
        editor.reset();
        assert_eq!(editor.scale(), &BUILTIN_SCALES[SEMITONES]);
        assert_eq!(editor.mask(), ScaleMask::ALL);
    }
}
