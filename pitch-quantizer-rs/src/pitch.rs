//! Fixed-point pitch unit shared by every module in the crate.

/// Pitch steps per semitone.
pub const SEMITONE: i32 = 128;

/// Pitch steps per octave (`12 * SEMITONE`).
pub const OCTAVE: i32 = 12 * SEMITONE;

/// Largest magnitude a codebook entry can hold.
pub const CLIP_LIMIT: i32 = 32767;

/// Clamp a pitch into the `i16` range used by codebooks (`±32767`).
pub fn clip_i16(pitch: i32) -> i16 {
    pitch.clamp(-CLIP_LIMIT, CLIP_LIMIT) as i16
}

/// Pitch of a whole number of semitones.
pub const fn semitones(n: i32) -> i32 {
    n * SEMITONE
}
