//! Chord definitions in scale-degree space.
//!
//! A [`Chord`] is stored as indices into the interval tables below plus a
//! base note and octave. [`Chord::transposes`] turns it into one codebook
//! transpose per voice, ready for [`Quantizer::process`](crate::Quantizer::process),
//! so a chord follows whatever scale the quantizer holds.

/// Voices per chord.
pub const VOICES: usize = 4;

/// Editable chord slots.
pub const NUM_USER_CHORDS: usize = 8;
/// Progressions the user chords are split into.
pub const NUM_PROGRESSIONS: usize = 4;
/// Chords per progression.
pub const CHORDS_PER_PROGRESSION: usize = NUM_USER_CHORDS / NUM_PROGRESSIONS;

/// Lowest and highest chord octave the editor allows.
pub const OCTAVE_RANGE: (i8, i8) = (-4, 4);

/// Scale-degree steps between successive voices, per quality.
pub const QUALITIES: [[i8; VOICES]; 9] = [
    [0, 0, 4, 0], // fifth
    [0, 2, 2, 0], // triad
    [0, 2, 2, 2], // seventh
    [0, 3, 1, 0], // suspended
    [0, 3, 1, 2], // suspended seventh
    [0, 2, 2, 1], // sixth
    [0, 2, 2, 4], // added ninth
    [0, 2, 2, 6], // added eleventh
    [0, 0, 0, 0], // unison
];

pub const QUALITY_NAMES: [&str; 9] = [
    "fifth",
    "triad",
    "seventh",
    "suspended",
    "susp 7th",
    "sixth",
    "added 9th",
    "added 11th",
    "unisono",
];

pub const QUALITY_SHORT_NAMES: [&str; 9] =
    ["5th", "triad", "7th", "susp", "sus7", "6th", "+9th", "+11th", "uni"];

/// Octave shift per voice, per voicing.
pub const VOICINGS: [[i8; VOICES]; 5] = [
    [0, 0, 0, 0],  // close
    [0, 0, 0, -1], // drop 1
    [0, 0, -1, 0], // drop 2
    [0, -1, 0, 0], // drop 3
    [-1, 1, 1, 1], // spread
];

pub const VOICING_NAMES: [&str; 5] = ["close", "drop 1", "drop 2", "drop 3", "spread"];

/// Octave shift per voice, per inversion.
pub const INVERSIONS: [[i8; VOICES]; 4] = [
    [0, 0, 0, 0],
    [1, 0, 0, 0],
    [1, 1, 0, 0],
    [1, 1, 1, 0],
];

pub const INVERSION_NAMES: [&str; 4] = ["-", "1", "2", "3"];

/// One chord of a progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Chord {
    pub quality: i8,
    pub inversion: i8,
    pub voicing: i8,
    /// Scale degree of the lowest voice; 0 follows the CV.
    pub base_note: i8,
    pub octave: i8,
}

fn row<const N: usize>(table: &[[i8; VOICES]; N], index: i8) -> &[i8; VOICES] {
    table.get(index.max(0) as usize).unwrap_or(&table[0])
}

impl Chord {
    /// Degree steps of this chord's quality. Out-of-range qualities read
    /// as the first row.
    pub fn intervals(&self) -> &'static [i8; VOICES] {
        row(&QUALITIES, self.quality)
    }

    /// Codebook transpose of each voice for a scale with `notes_per_octave`
    /// active notes.
    ///
    /// Voice `i` sits `base_note + intervals[..=i].sum()` degrees up, then
    /// moves by the chord octave plus its inversion and voicing shifts.
    ///
    /// ```
    /// use pitch_quantizer::chords::Chord;
    ///
    /// // A seventh chord on a seven-note scale.
    /// let chord = Chord { quality: 2, ..Default::default() };
    /// assert_eq!(chord.transposes(7), [0, 2, 4, 6]);
    /// ```
    pub fn transposes(&self, notes_per_octave: usize) -> [i32; VOICES] {
        let intervals = self.intervals();
        let inversion = row(&INVERSIONS, self.inversion);
        let voicing = row(&VOICINGS, self.voicing);
        let notes = notes_per_octave as i32;

        let mut degree = self.base_note as i32;
        core::array::from_fn(|i| {
            degree += intervals[i] as i32;
            let octave = self.octave as i32 + inversion[i] as i32 + voicing[i] as i32;
            degree + octave * notes
        })
    }

    pub fn change_quality(&mut self, delta: i32) {
        self.quality = step(self.quality, delta, 0, QUALITIES.len() as i8 - 1);
    }

    pub fn change_voicing(&mut self, delta: i32) {
        self.voicing = step(self.voicing, delta, 0, VOICINGS.len() as i8 - 1);
    }

    pub fn change_inversion(&mut self, delta: i32) {
        self.inversion = step(self.inversion, delta, 0, INVERSIONS.len() as i8 - 1);
    }

    /// Base note is limited to `0..=num_notes` of the current scale.
    pub fn change_base_note(&mut self, delta: i32, num_notes: usize) {
        let max = num_notes.min(i8::MAX as usize) as i8;
        self.base_note = step(self.base_note, delta, 0, max);
    }

    pub fn change_octave(&mut self, delta: i32) {
        self.octave = step(self.octave, delta, OCTAVE_RANGE.0, OCTAVE_RANGE.1);
    }
}

fn step(value: i8, delta: i32, min: i8, max: i8) -> i8 {
    (value as i32).saturating_add(delta).clamp(min as i32, max as i32) as i8
}

/// The user chord bank.
#[derive(Debug, Clone, Default)]
pub struct Chords {
    user: [Chord; NUM_USER_CHORDS],
}

impl Chords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chord `index` of `progression`. Anything past the bank reads chord 0.
    pub fn get(&self, index: usize, progression: usize) -> &Chord {
        let slot = progression
            .checked_mul(CHORDS_PER_PROGRESSION)
            .and_then(|base| base.checked_add(index))
            .filter(|&slot| slot < NUM_USER_CHORDS)
            .unwrap_or(0);
        &self.user[slot]
    }

    pub fn user_chord_mut(&mut self, slot: usize) -> Option<&mut Chord> {
        self.user.get_mut(slot)
    }
}
