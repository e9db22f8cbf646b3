//! Pitch quantizer engine for a Eurorack CV module.
//!
//! This crate holds the hardware-independent core of the module firmware:
//! the [`Quantizer`] that snaps a continuous pitch CV onto a scale, the
//! [`Scale`]/[`ScaleMask`] data model it reads, the [`InputMap`] that
//! discretises a CV into a handful of slots, and the fixed-point conversions
//! at the ADC and DAC boundary.
//!
//! # Architecture
//!
//! ```text
//! ADC counts ──► cv::AdcCalibration::pitch() ──► Quantizer::process()
//!                                                     │
//!                                      Scale + ScaleMask (configure)
//!                                                     │
//!                DAC counts ◄── cv::DacCalibration::to_dac() ◄──┘
//! ```
//!
//! All pitch values use the same fixed-point unit: 128 steps per semitone,
//! [`pitch::OCTAVE`] (1536) steps per octave.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation anywhere. Every structure is fixed-size and owned by
//! the caller, typically one [`QuantizerChannel`] per output channel. The
//! optional `defmt` feature derives [`defmt::Format`] on public types and
//! logs refused edits.
//!
//! # Quick start
//!
//! ```
//! use pitch_quantizer::{presets, Quantizer, ScaleMask};
//!
//! let mut quantizer = Quantizer::new();
//! quantizer.configure(&presets::BUILTIN_SCALES[presets::SEMITONES], ScaleMask::ALL);
//!
//! // A pitch slightly above C snaps back down to C.
//! assert_eq!(quantizer.process(20, 0, 0), 0);
//! ```

#![no_std]

pub mod chords;
pub mod cv;
pub mod input_map;
pub mod patterns;
pub mod pitch;
pub mod quantizer;
pub mod scales;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use input_map::{InputMap, Map};
pub use quantizer::{ChannelConfig, Quantizer, QuantizerChannel};
pub use scales::{presets, Scale, ScaleEditor, ScaleError, ScaleMask, Scales};
