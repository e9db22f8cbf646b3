use super::Quantizer;
use crate::scales::presets::{BUILTIN_SCALES, OFF, SEMITONES};
use crate::scales::{ScaleMask, Scales};

/// Per-channel quantizer settings, as edited from the front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelConfig {
    /// Registry index into [`Scales`].
    pub scale: usize,
    /// Active notes of the selected scale.
    pub mask: ScaleMask,
    /// Pitch offset applied before and after quantization.
    pub root: i32,
    /// Codebook steps added to every result.
    pub transpose: i32,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            scale: Scales::builtin_index(SEMITONES),
            mask: ScaleMask::ALL,
            root: 0,
            transpose: 0,
        }
    }
}

/// One output channel: a [`Quantizer`] plus the settings it was built from.
///
/// Call [`update`](Self::update) whenever the settings may have changed and
/// [`process`](Self::process) once per sample. The codebook is only rebuilt
/// when the scale selection or mask actually differ from the last build.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuantizerChannel {
    quantizer: Quantizer,
    config: ChannelConfig,
    built: Option<(usize, ScaleMask)>,
}

impl Default for QuantizerChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantizerChannel {
    /// A passthrough channel; the first [`update`](Self::update) builds its codebook.
    pub fn new() -> Self {
        Self {
            quantizer: Quantizer::new(),
            config: ChannelConfig::default(),
            built: None,
        }
    }

    /// Adopt `config`, rebuilding the codebook if the scale or mask changed.
    ///
    /// An index past the end of `scales` selects the Off scale, which turns
    /// the channel into a passthrough. Returns `true` if the codebook was
    /// rebuilt.
    pub fn update(&mut self, scales: &Scales, config: &ChannelConfig) -> bool {
        self.config = *config;

        let key = (config.scale, config.mask);
        if self.built == Some(key) {
            return false;
        }

        let scale = match scales.get(config.scale) {
            Some(scale) => scale,
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("scale index {} out of range, using Off", config.scale);
                &BUILTIN_SCALES[OFF]
            }
        };
        self.quantizer.configure(scale, config.mask);
        self.built = Some(key);
        true
    }

    /// Force the next [`update`](Self::update) to rebuild, e.g. after the
    /// selected user scale was edited in place.
    pub fn mark_scale_changed(&mut self) {
        self.built = None;
    }

    /// Quantize `pitch` with this channel's root and transpose.
    pub fn process(&mut self, pitch: i32) -> i32 {
        self.quantizer
            .process(pitch, self.config.root, self.config.transpose)
    }

    /// The configuration adopted by the last `update`.
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// The underlying quantizer.
    pub fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::OCTAVE;
    use crate::scales::ScaleEditor;

    #[test]
    fn default_config_is_chromatic() {
        let scales = Scales::new();
        let mut channel = QuantizerChannel::new();
        assert!(channel.update(&scales, &ChannelConfig::default()));
        assert_eq!(channel.process(140), 128);
        assert_eq!(channel.quantizer().lookup(65), 128);
    }

    #[test]
    fn unchanged_config_does_not_rebuild() {
        let scales = Scales::new();
        let mut channel = QuantizerChannel::new();
        let config = ChannelConfig::default();
        assert!(channel.update(&scales, &config));
        assert!(!channel.update(&scales, &config));

        // Root and transpose do not touch the codebook.
        let shifted = ChannelConfig {
            root: 64,
            transpose: 1,
            ..config
        };
        assert!(!channel.update(&scales, &shifted));
        assert_eq!(channel.config(), &shifted);
    }

    #[test]
    fn mask_change_rebuilds() {
        let scales = Scales::new();
        let mut channel = QuantizerChannel::new();
        channel.update(&scales, &ChannelConfig::default());
        let config = ChannelConfig {
            mask: ScaleMask(0x0001),
            ..Default::default()
        };
        assert!(channel.update(&scales, &config));
        assert_eq!(channel.process(OCTAVE + 200), OCTAVE);
    }

    #[test]
    fn unknown_scale_falls_back_to_passthrough() {
        let scales = Scales::new();
        let mut channel = QuantizerChannel::new();
        let config = ChannelConfig {
            scale: scales.len() + 3,
            ..Default::default()
        };
        channel.update(&scales, &config);
        assert!(!channel.quantizer().enabled());
        assert_eq!(channel.process(1234), 1234);
    }

    #[test]
    fn edited_user_scale_needs_mark() {
        let mut scales = Scales::new();
        let mut channel = QuantizerChannel::new();
        let config = ChannelConfig {
            scale: 0,
            ..Default::default()
        };
        channel.update(&scales, &config);
        assert_eq!(channel.process(300), 256);

        let mut mask = ScaleMask::ALL;
        let scale = scales.user_scale_mut(0).unwrap();
        ScaleEditor::new(scale, &mut mask).set_num_notes(4);

        // Still the old codebook until the edit is flagged.
        assert!(!channel.update(&scales, &config));
        assert_eq!(channel.quantizer().lookup(68), 512);

        channel.mark_scale_changed();
        assert!(channel.update(&scales, &config));
        // Four semitones per octave now: 0, 128, 256, 384.
        assert_eq!(channel.quantizer().lookup(68), OCTAVE);
    }

    #[test]
    fn root_and_transpose_apply() {
        let scales = Scales::new();
        let mut channel = QuantizerChannel::new();
        let config = ChannelConfig {
            root: 1000,
            transpose: 2,
            ..Default::default()
        };
        channel.update(&scales, &config);
        assert_eq!(channel.process(1000), 1256);
    }
}
