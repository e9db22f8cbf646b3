use super::{CENTER, CODEBOOK_SIZE, MAX_CODEWORD_INDEX, MIN_CODEWORD_INDEX};
use crate::pitch::clip_i16;
use crate::scales::{Scale, ScaleMask};

/// First codebook index the nearest-neighbour search considers.
const SEARCH_START: usize = 3;
/// One past the last codebook index the search considers.
const SEARCH_END: usize = CODEBOOK_SIZE - 2;

/// Snaps pitches to the nearest note of a configured scale.
///
/// A freshly initialised quantizer is an identity map on the semitone grid:
/// `codebook[i] = (i - 64) * 128`.
///
/// # Examples
///
/// ```
/// use pitch_quantizer::{pitch::OCTAVE, Quantizer, Scale, ScaleMask};
///
/// // Only the root of each octave.
/// let mut quantizer = Quantizer::new();
/// quantizer.configure(&Scale::new(1536, &[0]), ScaleMask::ALL);
///
/// assert_eq!(quantizer.process(OCTAVE + 300, 0, 0), OCTAVE);
/// // One codebook step up.
/// assert_eq!(quantizer.process(OCTAVE + 300, 0, 1), 2 * OCTAVE);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quantizer {
    enabled: bool,
    codebook: [i16; CODEBOOK_SIZE],
    codeword: i32,
    transpose: i32,
    previous_boundary: i32,
    next_boundary: i32,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Quantizer {
    /// Create an enabled quantizer holding the semitone identity codebook.
    pub fn new() -> Self {
        let mut quantizer = Self {
            enabled: true,
            codebook: [0; CODEBOOK_SIZE],
            codeword: 0,
            transpose: 0,
            previous_boundary: 0,
            next_boundary: 0,
        };
        quantizer.init();
        quantizer
    }

    /// Reset to the identity codebook and clear the cached cell.
    pub fn init(&mut self) {
        self.enabled = true;
        self.codeword = 0;
        self.transpose = 0;
        self.previous_boundary = 0;
        self.next_boundary = 0;
        for (i, entry) in self.codebook.iter_mut().enumerate() {
            *entry = ((i as i16) - CENTER as i16) << 7;
        }
    }

    /// Build the codebook for `scale` restricted to the notes in `mask`.
    ///
    /// The quantizer disables itself (and leaves the codebook alone) when the
    /// scale is empty or the mask selects none of its notes. Either way the
    /// cached cell is dropped so the next [`process`](Self::process) call
    /// searches again.
    pub fn configure(&mut self, scale: &Scale, mask: ScaleMask) {
        let num_notes = scale.num_notes();
        self.enabled = !scale.is_empty() && mask.has_active(num_notes);
        self.invalidate();

        if !self.enabled {
            #[cfg(feature = "defmt")]
            defmt::debug!("quantizer disabled: {} notes, mask {=u16:#x}", num_notes, mask.bits());
            return;
        }

        let notes = scale.notes();
        let span = scale.span() as i32;
        let mut octave = 0i32;
        let mut note = 0usize;

        // Each step fills one slot above the center and the mirrored slot
        // below it from the same cursor position.
        for i in 0..CENTER {
            while !mask.is_active(note) {
                note += 1;
                if note >= num_notes {
                    note = 0;
                    octave += 1;
                }
            }

            let up = notes[note] as i32 + span * octave;
            let down = notes[num_notes - 1 - note] as i32 + span * (-octave - 1);
            self.codebook[CENTER + i] = clip_i16(up);
            self.codebook[CENTER - i - 1] = clip_i16(down);

            note += 1;
            if note >= num_notes {
                note = 0;
                octave += 1;
            }
        }
    }

    /// Quantize `pitch` relative to `root`, then move `transpose` codebook
    /// steps.
    ///
    /// A disabled quantizer returns `pitch` unchanged. Otherwise the result
    /// is a codebook entry plus `root`.
    pub fn process(&mut self, pitch: i32, root: i32, transpose: i32) -> i32 {
        if !self.enabled {
            return pitch;
        }

        let pitch = pitch.saturating_sub(root);
        if pitch >= self.previous_boundary
            && pitch <= self.next_boundary
            && transpose == self.transpose
        {
            return self.codeword.saturating_add(root);
        }

        let q = self.nearest(pitch);

        // Grow the cell around q a little past the midpoints.
        let cb = &self.codebook;
        self.previous_boundary = (9 * cb[q - 1] as i32 + 7 * cb[q] as i32) >> 4;
        self.next_boundary = (9 * cb[q + 1] as i32 + 7 * cb[q] as i32) >> 4;

        let shifted = (q as i32)
            .saturating_add(transpose)
            .clamp(MIN_CODEWORD_INDEX, MAX_CODEWORD_INDEX);
        self.codeword = self.codebook[shifted as usize] as i32;
        self.transpose = transpose;

        self.codeword.saturating_add(root)
    }

    /// [`process`](Self::process) with no root and no transpose.
    pub fn process_pitch(&mut self, pitch: i32) -> i32 {
        self.process(pitch, 0, 0)
    }

    /// Codebook entry at `index`, with the index clamped to the table.
    pub fn lookup(&self, index: i32) -> i32 {
        let index = index.clamp(0, CODEBOOK_SIZE as i32 - 1) as usize;
        self.codebook[index] as i32
    }

    /// Returns `true` if the last [`configure`](Self::configure) produced a
    /// usable codebook.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The whole codebook.
    pub fn codebook(&self) -> &[i16; CODEBOOK_SIZE] {
        &self.codebook
    }

    /// Index of the entry closest to `pitch`, searching the three entries
    /// around the upper bound. Always in `1..=126`.
    fn nearest(&self, pitch: i32) -> usize {
        let key = clip_i16(pitch);
        let upper = SEARCH_START
            + self.codebook[SEARCH_START..SEARCH_END].partition_point(|&c| c <= key);
        let lower = upper - 2;

        // min_by_key keeps the first of equal distances, so ties go low.
        (lower..=upper)
            .min_by_key(|&i| pitch.abs_diff(self.codebook[i] as i32))
            .unwrap_or(lower)
    }

    /// Make the next `process` call miss the cache.
    fn invalidate(&mut self) {
        self.previous_boundary = i32::MAX;
        self.next_boundary = i32::MIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{OCTAVE, SEMITONE};
    use crate::scales::presets::{BUILTIN_SCALES, OFF, SEMITONES};

    const IONIAN: usize = 2;

    fn chromatic() -> Quantizer {
        let mut q = Quantizer::new();
        q.configure(&BUILTIN_SCALES[SEMITONES], ScaleMask::ALL);
        q
    }

    // ── Init ─────────────────────────────────────────────────────────

    #[test]
    fn init_is_enabled_identity() {
        let q = Quantizer::new();
        assert!(q.enabled());
        assert_eq!(q.lookup(64), 0);
        assert_eq!(q.lookup(65), 128);
        assert_eq!(q.lookup(0), -64 * 128);
        assert_eq!(q.lookup(127), 63 * 128);
    }

    #[test]
    fn lookup_clamps_index() {
        let q = Quantizer::new();
        assert_eq!(q.lookup(-5), q.lookup(0));
        assert_eq!(q.lookup(500), q.lookup(127));
    }

    // ── Configure ────────────────────────────────────────────────────

    #[test]
    fn chromatic_is_identity_around_center() {
        let q = chromatic();
        assert!(q.enabled());
        assert_eq!(q.lookup(64), 0);
        assert_eq!(q.lookup(65) - q.lookup(64), 128);
        assert_eq!(q.lookup(63), -128);
        for i in 0..128 {
            assert_eq!(q.lookup(i), (i - 64) * SEMITONE);
        }
    }

    #[test]
    fn single_note_scale_spaces_octaves() {
        let mut q = Quantizer::new();
        q.configure(&Scale::new(1536, &[0]), ScaleMask(0x1));
        assert_eq!(q.lookup(64), 0);
        assert_eq!(q.lookup(65), OCTAVE);
        assert_eq!(q.lookup(63), -OCTAVE);
    }

    #[test]
    fn masked_ionian_mirrors_last_note_below_center() {
        // Below the center the walk reads the mirrored note, which the mask
        // does not filter.
        let mut q = Quantizer::new();
        q.configure(&BUILTIN_SCALES[IONIAN], ScaleMask(0x1));
        assert_eq!(q.lookup(64), 0);
        assert_eq!(q.lookup(65), OCTAVE);
        assert_eq!(q.lookup(63), 1408 - OCTAVE);
    }

    #[test]
    fn codebook_is_clipped() {
        let mut q = Quantizer::new();
        q.configure(&Scale::new(1536, &[0]), ScaleMask::ALL);
        assert_eq!(q.lookup(127), 32767);
        assert_eq!(q.lookup(0), -32767);
    }

    #[test]
    fn empty_scale_or_mask_disables() {
        let mut q = Quantizer::new();
        q.configure(&BUILTIN_SCALES[OFF], ScaleMask::ALL);
        assert!(!q.enabled());

        q.configure(&BUILTIN_SCALES[IONIAN], ScaleMask(0xff80));
        assert!(!q.enabled());

        q.configure(&BUILTIN_SCALES[IONIAN], ScaleMask(0x0001));
        assert!(q.enabled());
    }

    #[test]
    fn disabled_configure_keeps_codebook() {
        let mut q = chromatic();
        let before = *q.codebook();
        q.configure(&BUILTIN_SCALES[OFF], ScaleMask::ALL);
        assert_eq!(q.codebook(), &before);
    }

    // ── Process ──────────────────────────────────────────────────────

    #[test]
    fn disabled_passes_pitch_through() {
        let mut q = Quantizer::new();
        q.configure(&BUILTIN_SCALES[OFF], ScaleMask::ALL);
        for pitch in [-40_000, -1, 0, 77, 1536, 40_000] {
            assert_eq!(q.process(pitch, 300, 4), pitch);
        }
    }

    #[test]
    fn single_note_sequence() {
        let mut q = Quantizer::new();
        q.configure(&Scale::new(1536, &[0]), ScaleMask(0x1));

        assert_eq!(q.process_pitch(OCTAVE), OCTAVE);
        assert_eq!(q.process_pitch(2 * OCTAVE - 127), 2 * OCTAVE);
        // Equidistant: the lower entry wins.
        assert_eq!(q.process_pitch(OCTAVE / 2), 0);
        assert_eq!(q.process_pitch(-OCTAVE), -OCTAVE);
        assert_eq!(q.process_pitch(-128), 0);
        // Inside the enlarged cell around 0.
        assert_eq!(q.process_pitch(-OCTAVE / 2), 0);
    }

    #[test]
    fn octave_wrap_on_chromatic() {
        let mut q = chromatic();
        assert_eq!(q.process_pitch(1536), 1536);
        assert_eq!(q.process_pitch(3071), 3072);
    }

    #[test]
    fn hysteresis_holds_across_the_midpoint() {
        let mut q = chromatic();
        assert_eq!(q.process_pitch(0), 0);
        // The plain midpoint to 128 is 64; the cell reaches (9*128)>>4 = 72.
        assert_eq!(q.process_pitch(70), 0);
        assert_eq!(q.process_pitch(72), 0);
        assert_eq!(q.process_pitch(73), 128);
        // Coming back down, 128's cell reaches 56.
        assert_eq!(q.process_pitch(60), 128);
        assert_eq!(q.process_pitch(55), 0);
    }

    #[test]
    fn root_shifts_input_and_output() {
        let mut q = chromatic();
        assert_eq!(q.process(1000 + 130, 1000, 0), 1128);
        assert_eq!(q.process(1000 - 100, 1000, 0), 872);
    }

    #[test]
    fn transpose_forces_re_resolution() {
        let mut q = chromatic();
        assert_eq!(q.process(0, 0, 0), 0);
        assert_eq!(q.process(0, 0, 2), 256);
        assert_eq!(q.process(0, 0, -1), -128);
        // Same cell, same transpose: cache hit.
        assert_eq!(q.process(10, 0, -1), -128);
    }

    #[test]
    fn transpose_is_clamped_to_codebook() {
        let mut q = chromatic();
        assert_eq!(q.process(0, 0, 1000), q.lookup(126));
        assert_eq!(q.process(0, 0, -1000), q.lookup(1));
    }

    #[test]
    fn masked_notes_are_never_returned() {
        let mut q = Quantizer::new();
        // C, E and G of the chromatic scale.
        let mask = ScaleMask(0b0000_1001_0001);
        q.configure(&BUILTIN_SCALES[SEMITONES], mask);
        for pitch in (0..OCTAVE).step_by(7) {
            let out = q.process_pitch(pitch).rem_euclid(OCTAVE);
            assert!(
                out == 0 || out == 512 || out == 896,
                "pitch {} quantized to {}",
                pitch,
                out
            );
        }
    }

    #[test]
    fn configure_drops_cached_cell() {
        let mut q = chromatic();
        assert_eq!(q.process_pitch(128), 128);
        q.configure(&Scale::new(1536, &[0]), ScaleMask::ALL);
        assert_eq!(q.process_pitch(128), 0);
    }

    #[test]
    fn extreme_pitches_stay_in_codebook() {
        let mut q = chromatic();
        assert_eq!(q.process_pitch(i32::MAX), q.lookup(126));
        assert_eq!(q.process_pitch(i32::MIN), q.lookup(1));
    }
}
