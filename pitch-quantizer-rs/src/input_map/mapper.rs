use super::INPUT_CODEBOOK_SIZE;

/// Slot layout for an [`InputMap`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Map {
    /// Highest slot index the map returns.
    pub num_slots: i8,
    /// Input step between adjacent slots, one per input range.
    pub ranges: [i16; 2],
}

/// First codebook index the search considers.
const SEARCH_START: usize = 2;
/// One past the last codebook index the search considers.
const SEARCH_END: usize = INPUT_CODEBOOK_SIZE - 1;

/// Quantizes an input onto slot indices `0..=num_slots` with hysteresis.
///
/// ```
/// use pitch_quantizer::input_map::{input_map_for, InputMap};
///
/// let mut map = InputMap::new();
/// map.configure(input_map_for(4).unwrap(), 0);
///
/// assert_eq!(map.process(0), 0);
/// assert_eq!(map.process(1100), 2);
/// assert_eq!(map.process(4000), 3);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputMap {
    enabled: bool,
    update: bool,
    codebook: [i16; INPUT_CODEBOOK_SIZE],
    code_index: i8,
    num_slots: i8,
    previous_boundary: i32,
    next_boundary: i32,
}

impl Default for InputMap {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMap {
    /// A map in its [`init`](Self::init) state.
    pub fn new() -> Self {
        let mut map = Self {
            enabled: true,
            update: false,
            codebook: [0; INPUT_CODEBOOK_SIZE],
            code_index: 0,
            num_slots: 0,
            previous_boundary: 0,
            next_boundary: 0,
        };
        map.init();
        map
    }

    /// Reset to 15 slots, one semitone (128 steps) apart.
    pub fn init(&mut self) {
        self.enabled = true;
        self.update = false;
        self.code_index = 0;
        self.previous_boundary = 0;
        self.next_boundary = 0;
        self.num_slots = 15;
        for (i, entry) in self.codebook.iter_mut().enumerate() {
            *entry = (i as i16) << 7;
        }
    }

    /// Lay the codebook out with the step of `map.ranges[range]`.
    ///
    /// A `range` other than 0 or 1 disables the map, after which
    /// [`process`](Self::process) always returns slot 0.
    pub fn configure(&mut self, map: &Map, range: usize) {
        let Some(&step) = map.ranges.get(range) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("input map range {} out of bounds", range);
            self.enabled = false;
            return;
        };

        self.enabled = true;
        for (i, entry) in self.codebook.iter_mut().enumerate() {
            *entry = step.wrapping_mul(i as i16);
        }
        self.num_slots = map.num_slots;
        self.update = true;
    }

    /// The slot `input` falls into.
    pub fn process(&mut self, input: i32) -> i8 {
        if !self.enabled {
            return 0;
        }

        if !self.update && input >= self.previous_boundary && input <= self.next_boundary {
            return self.code_index;
        }

        let q = self.nearest(input);
        let cb = &self.codebook;
        let below = cb[q.saturating_sub(1)] as i32;
        let above = cb[(q + 1).min(INPUT_CODEBOOK_SIZE - 1)] as i32;
        self.previous_boundary = (9 * below + 7 * cb[q] as i32) >> 4;
        self.next_boundary = (9 * above + 7 * cb[q] as i32) >> 4;

        self.code_index = (q as i8).clamp(0, self.num_slots.max(0));
        self.update = false;
        self.code_index
    }

    /// Returns `false` after configuring an unusable range.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Highest slot index [`process`](Self::process) can return.
    pub fn num_slots(&self) -> i8 {
        self.num_slots
    }

    fn nearest(&self, input: i32) -> usize {
        let key = input.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        let upper = SEARCH_START
            + self.codebook[SEARCH_START..SEARCH_END].partition_point(|&c| c <= key);
        let lower = upper - 2;

        (lower..=upper)
            .min_by_key(|&i| input.abs_diff(self.codebook[i] as i32))
            .unwrap_or(lower)
    }
}
