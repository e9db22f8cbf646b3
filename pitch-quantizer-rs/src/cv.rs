//! Conversions between converter counts and pitch units.
//!
//! The ADC side turns a 12-bit reading into pitch units; the DAC side turns
//! pitch units into a 16-bit code using per-octave calibration points.

use crate::pitch::OCTAVE;

/// Number of octaves the output covers.
pub const DAC_OCTAVES: usize = 10;

/// Calibration point of 0 V.
pub const OCTAVE_ZERO: i32 = 3;

/// Full-scale DAC code.
pub const DAC_MAX: u16 = u16::MAX;

/// Highest pitch the DAC can produce after the octave-zero shift.
pub const DAC_PITCH_LIMIT: i32 = DAC_OCTAVES as i32 * OCTAVE;

/// Default pitch CV scale: ten octaves over the ADC range, `120 << 7`.
pub const DEFAULT_PITCH_CV_SCALE: u16 = 120 << 7;

/// ADC reading at 0 V, mid-scale on a 12-bit converter.
pub const DEFAULT_ADC_OFFSET: u16 = 2048;

/// Input calibration for one CV channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcCalibration {
    /// Raw reading at 0 V.
    pub offset: u16,
    /// Pitch units per 4096 counts.
    pub pitch_cv_scale: u16,
}

impl Default for AdcCalibration {
    fn default() -> Self {
        Self {
            offset: DEFAULT_ADC_OFFSET,
            pitch_cv_scale: DEFAULT_PITCH_CV_SCALE,
        }
    }
}

impl AdcCalibration {
    /// Pitch of a raw 12-bit reading. The front end inverts, so readings
    /// below `offset` are positive voltages.
    pub fn pitch(&self, raw: u16) -> i32 {
        let value = self.offset as i64 - raw as i64;
        ((value * self.pitch_cv_scale as i64) >> 12) as i32
    }

    /// Derive the scale from readings taken at C2 (1 V) and C4 (3 V).
    ///
    /// Two octaves apart means 24 semitones between the readings. The
    /// readings are ignored unless `c2 < c4`; returns whether the scale was
    /// updated.
    pub fn calibrate_pitch(&mut self, c2: i32, c4: i32) -> bool {
        if c2 >= c4 {
            #[cfg(feature = "defmt")]
            defmt::warn!("pitch calibration ignored: c2={} c4={}", c2, c4);
            return false;
        }
        let scale = (24 * 128 * 4096_i64) / (c4 as i64 - c2 as i64);
        self.pitch_cv_scale = scale.clamp(0, u16::MAX as i64) as u16;
        true
    }
}

/// Output calibration: the DAC code of each whole octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DacCalibration {
    pub octaves: [u16; DAC_OCTAVES + 1],
}

impl Default for DacCalibration {
    /// Evenly spaced over the full DAC range.
    fn default() -> Self {
        Self {
            octaves: core::array::from_fn(|i| {
                (i as u32 * DAC_MAX as u32 / DAC_OCTAVES as u32) as u16
            }),
        }
    }
}

impl DacCalibration {
    /// DAC code for `pitch` shifted by `octave_offset` octaves.
    ///
    /// Pitch 0 maps to the octave-zero calibration point. The shifted pitch
    /// is held to the ten-octave output range, and values between octave
    /// points are interpolated linearly.
    pub fn to_dac(&self, pitch: i32, octave_offset: i32) -> u16 {
        let shift = (OCTAVE_ZERO.saturating_add(octave_offset)).saturating_mul(OCTAVE);
        let pitch = pitch.saturating_add(shift).clamp(0, DAC_PITCH_LIMIT);

        let octave = (pitch / OCTAVE) as usize;
        let fractional = pitch - octave as i32 * OCTAVE;

        let mut sample = self.octaves[octave] as i32;
        if fractional != 0 {
            let span = self.octaves[octave + 1] as i32 - sample;
            sample += fractional * span / OCTAVE;
        }
        sample.clamp(0, DAC_MAX as i32) as u16
    }

    /// DAC code at 0 V.
    pub fn zero(&self) -> u16 {
        self.octaves[OCTAVE_ZERO as usize]
    }
}
