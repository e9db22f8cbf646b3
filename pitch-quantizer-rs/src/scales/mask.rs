use super::error::ScaleError;

/// Selects which notes of a scale take part in quantization.
///
/// Bit `i` set means note `i` is active. Only the low `num_notes` bits are
/// meaningful; operations that rewrite the mask leave the bits above that
/// range set so stale bits never reappear when a scale grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleMask(pub u16);

impl Default for ScaleMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<u16> for ScaleMask {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<ScaleMask> for u16 {
    fn from(mask: ScaleMask) -> Self {
        mask.0
    }
}

impl ScaleMask {
    /// Every note active.
    pub const ALL: Self = Self(0xffff);

    /// Raw bit pattern.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// The low `num_notes` bits set, saturating at 16.
    pub const fn used_bits(num_notes: usize) -> u16 {
        if num_notes >= 16 {
            0xffff
        } else {
            !(0xffff_u16 << num_notes)
        }
    }

    /// Returns `true` if at least one of the first `num_notes` notes is active.
    pub fn has_active(self, num_notes: usize) -> bool {
        self.0 & Self::used_bits(num_notes) != 0
    }

    /// Returns `true` if note `pos` is active.
    pub fn is_active(self, pos: usize) -> bool {
        pos < 16 && self.0 & (1 << pos) != 0
    }

    /// Number of active notes among the first `num_notes`.
    pub fn count_active(self, num_notes: usize) -> u32 {
        (self.0 & Self::used_bits(num_notes)).count_ones()
    }

    /// Rotate the active notes within the first `num_notes` positions.
    ///
    /// Positive `amount` moves each active bit towards higher notes,
    /// negative towards lower ones; the distance is taken modulo
    /// `num_notes`. Bits at and above `num_notes` come back set.
    ///
    /// ```
    /// use pitch_quantizer::ScaleMask;
    ///
    /// let mask = ScaleMask(0b0000_0001);
    /// assert_eq!(mask.rotate(1, 4).bits(), 0xfff2);
    /// assert_eq!(mask.rotate(-1, 4).bits(), 0xfff8);
    /// ```
    pub fn rotate(self, amount: i32, num_notes: usize) -> Self {
        if num_notes == 0 {
            return self;
        }
        let used = Self::used_bits(num_notes);
        let width = num_notes.min(16) as u32;
        let shift = amount.rem_euclid(width as i32) as u32;

        let bits = (self.0 & used) as u32;
        let rotated = if shift == 0 {
            bits
        } else {
            ((bits << shift) | (bits >> (width - shift))) & used as u32
        };

        Self(rotated as u16 | !used)
    }

    /// Flip every note in range.
    ///
    /// Refused with [`ScaleError::EmptyMask`] when all notes are active,
    /// since the result would select nothing.
    pub fn invert(self, num_notes: usize) -> Result<Self, ScaleError> {
        let used = Self::used_bits(num_notes);
        if self.0 & used == used {
            return Err(ScaleError::EmptyMask);
        }
        Ok(Self(self.0 ^ used))
    }

    /// Flip a single note.
    ///
    /// Deactivating the last active note is refused with
    /// [`ScaleError::EmptyMask`].
    pub fn toggle(self, pos: usize, num_notes: usize) -> Result<Self, ScaleError> {
        if pos >= num_notes.min(16) {
            return Err(ScaleError::InvalidNotePosition);
        }
        let bit = 1u16 << pos;
        if self.0 & bit == 0 {
            return Ok(Self(self.0 | bit));
        }
        let cleared = Self(self.0 & !bit);
        if !cleared.has_active(num_notes) {
            return Err(ScaleError::EmptyMask);
        }
        Ok(cleared)
    }

    /// Activate notes `first..num_notes`.
    pub fn activate_range(self, first: usize, num_notes: usize) -> Self {
        Self(self.0 | (Self::used_bits(num_notes) & !Self::used_bits(first)))
    }
}
