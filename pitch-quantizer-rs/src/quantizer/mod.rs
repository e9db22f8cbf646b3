//! Nearest-note quantizer with hysteresis.
//!
//! [`Quantizer`] owns a 128-entry codebook built from a [`Scale`](crate::Scale)
//! and [`ScaleMask`](crate::ScaleMask): entry [`CENTER`] holds the scale's
//! first active note at octave zero, higher entries climb through the active
//! notes octave by octave and lower entries descend. Processing a pitch finds
//! the closest codebook entry and remembers a slightly enlarged cell around
//! it, so a CV hovering at a cell edge does not flip between two notes.
//!
//! [`QuantizerChannel`] wraps one quantizer with the per-channel settings
//! (scale selection, mask, root, transpose) and rebuilds the codebook only
//! when those settings change.

mod channel;
mod engine;

pub use channel::{ChannelConfig, QuantizerChannel};
pub use engine::Quantizer;

/// Number of codebook entries.
pub const CODEBOOK_SIZE: usize = 128;

/// Codebook index of the first active note at octave zero.
pub const CENTER: usize = CODEBOOK_SIZE / 2;

/// Lowest codebook index a transposed result may land on.
pub const MIN_CODEWORD_INDEX: i32 = 1;

/// Highest codebook index a transposed result may land on.
pub const MAX_CODEWORD_INDEX: i32 = CODEBOOK_SIZE as i32 - 2;
