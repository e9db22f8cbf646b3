use super::Map;

/// Fewest slots a preset map provides.
pub const MIN_SLOTS: usize = 4;
/// Most slots a preset map provides.
pub const MAX_SLOTS: usize = 16;

const UNUSED: Map = Map {
    num_slots: 0,
    ranges: [0, 0],
};

/// Preset maps indexed by slot count. `num_slots` holds the highest slot
/// index and `ranges[0]` the input step per slot, about `2048 / slots`.
/// Entries outside `MIN_SLOTS..=MAX_SLOTS` are placeholders.
#[rustfmt::skip]
pub const INPUT_MAPS: [Map; 18] = [
    UNUSED,
    UNUSED,
    UNUSED,
    UNUSED,
    Map { num_slots: 3, ranges: [512, 0] },
    Map { num_slots: 4, ranges: [409, 0] },
    Map { num_slots: 5, ranges: [341, 0] },
    Map { num_slots: 6, ranges: [293, 0] },
    Map { num_slots: 7, ranges: [256, 0] },
    Map { num_slots: 8, ranges: [228, 0] },
    Map { num_slots: 9, ranges: [205, 0] },
    Map { num_slots: 10, ranges: [186, 0] },
    Map { num_slots: 11, ranges: [171, 0] },
    Map { num_slots: 12, ranges: [158, 0] },
    Map { num_slots: 13, ranges: [146, 0] },
    Map { num_slots: 14, ranges: [137, 0] },
    Map { num_slots: 15, ranges: [128, 0] },
    UNUSED,
];

/// The preset map with `num_slots` slots, if one exists.
pub fn input_map_for(num_slots: usize) -> Option<&'static Map> {
    if (MIN_SLOTS..=MAX_SLOTS).contains(&num_slots) {
        INPUT_MAPS.get(num_slots)
    } else {
        None
    }
}
