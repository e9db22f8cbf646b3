//! Maps a CV onto one of a small number of evenly spaced slots.
//!
//! Used where a voltage selects something discrete (a scale, a chord, a
//! pattern step). Works like the pitch quantizer on a 16-entry codebook,
//! with the same enlarged-cell hysteresis.

mod mapper;
mod presets;

pub use mapper::{InputMap, Map};
pub use presets::{input_map_for, INPUT_MAPS, MAX_SLOTS, MIN_SLOTS};

/// Number of codebook entries.
pub const INPUT_CODEBOOK_SIZE: usize = 16;
