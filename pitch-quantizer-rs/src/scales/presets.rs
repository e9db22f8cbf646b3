//! Built-in scale presets.
//!
//! Values are offsets from the root in [`pitch`](crate::pitch) units
//! (1536 per octave). Every preset repeats at the octave. Names are the
//! short labels shown on the module's display.

use super::scale::Scale;
use crate::pitch::OCTAVE;

/// Number of built-in scales.
pub const NUM_BUILTIN_SCALES: usize = 119;

/// Index of the empty scale that disables quantization.
pub const OFF: usize = 0;

/// Index of the twelve-tone chromatic scale.
pub const SEMITONES: usize = 1;

const SPAN: i16 = OCTAVE as i16;

/// Built-in scales, ordered as on the module's scale menu.
pub static BUILTIN_SCALES: [Scale; NUM_BUILTIN_SCALES] = [
    // Off
    Scale::new(0, &[]),
    // Semitones
    Scale::new(SPAN, &[0, 128, 256, 384, 512, 640, 768, 896, 1024, 1152, 1280, 1408]),
    // Ionian
    Scale::new(SPAN, &[0, 256, 512, 640, 896, 1152, 1408]),
    // Dorian
    Scale::new(SPAN, &[0, 256, 384, 640, 896, 1152, 1280]),
    // Phrygian
    Scale::new(SPAN, &[0, 128, 384, 640, 896, 1024, 1280]),
    // Lydian
    Scale::new(SPAN, &[0, 256, 512, 768, 896, 1152, 1408]),
    // Mixolydian
    Scale::new(SPAN, &[0, 256, 512, 640, 896, 1152, 1280]),
    // Aeolian
    Scale::new(SPAN, &[0, 256, 384, 640, 896, 1024, 1280]),
    // Locrian
    Scale::new(SPAN, &[0, 128, 384, 640, 768, 1024, 1280]),
    // Blues major
    Scale::new(SPAN, &[0, 384, 512, 896, 1152, 1280]),
    // Blues minor
    Scale::new(SPAN, &[0, 384, 640, 768, 896, 1280]),
    // Pentatonic major
    Scale::new(SPAN, &[0, 256, 512, 896, 1152]),
    // Pentatonic minor
    Scale::new(SPAN, &[0, 384, 640, 896, 1280]),
    // Folk
    Scale::new(SPAN, &[0, 128, 384, 512, 640, 896, 1024, 1280]),
    // Japanese
    Scale::new(SPAN, &[0, 128, 640, 896, 1024]),
    // Gamelan
    Scale::new(SPAN, &[0, 128, 384, 896, 1024]),
    // Gypsy
    Scale::new(SPAN, &[0, 256, 384, 768, 896, 1024, 1408]),
    // Arabian
    Scale::new(SPAN, &[0, 128, 512, 640, 896, 1024, 1408]),
    // Flamenco
    Scale::new(SPAN, &[0, 128, 512, 640, 896, 1024, 1280]),
    // Whole tone
    Scale::new(SPAN, &[0, 256, 512, 768, 1024, 1280]),
    // Pythagorean
    Scale::new(SPAN, &[0, 115, 261, 376, 522, 637, 783, 899, 1014, 1160, 1275, 1421]),
    // Quarter-tone E flat
    Scale::new(SPAN, &[0, 128, 256, 384, 448, 640, 768, 896, 1024, 1152, 1280, 1344]),
    // Quarter-tone E
    Scale::new(SPAN, &[0, 128, 256, 384, 448, 640, 768, 896, 1024, 1152, 1280, 1408]),
    // Quarter-tone E and A
    Scale::new(SPAN, &[0, 128, 256, 384, 448, 640, 768, 896, 1024, 1088, 1280, 1408]),
    // Bhairav
    Scale::new(SPAN, &[0, 115, 494, 637, 899, 1014, 1393]),
    // Gunakri
    Scale::new(SPAN, &[0, 143, 637, 899, 1042]),
    // Marwa
    Scale::new(SPAN, &[0, 143, 494, 755, 1132, 1393]),
    // Shree
    Scale::new(SPAN, &[0, 115, 494, 755, 899, 1014, 1393]),
    // Purvi
    Scale::new(SPAN, &[0, 143, 494, 755, 899, 1042, 1393]),
    // Bilawal
    Scale::new(SPAN, &[0, 261, 494, 637, 899, 1160, 1393]),
    // Yaman
    Scale::new(SPAN, &[0, 261, 522, 783, 899, 1160, 1421]),
    // Kafi
    Scale::new(SPAN, &[0, 233, 376, 637, 899, 1132, 1275]),
    // Bhimpalasree
    Scale::new(SPAN, &[0, 261, 404, 637, 899, 1160, 1303]),
    // Darbari
    Scale::new(SPAN, &[0, 261, 376, 637, 899, 1014, 1275]),
    // Rageshree
    Scale::new(SPAN, &[0, 261, 494, 637, 899, 1132, 1275]),
    // Khamaj
    Scale::new(SPAN, &[0, 261, 494, 637, 899, 1160, 1275, 1421]),
    // Mimal
    Scale::new(SPAN, &[0, 261, 376, 637, 899, 1132, 1275, 1393]),
    // Parameshwari
    Scale::new(SPAN, &[0, 115, 376, 637, 1132, 1275]),
    // Rangeshwari
    Scale::new(SPAN, &[0, 261, 376, 637, 899, 1393]),
    // Gangeshwari
    Scale::new(SPAN, &[0, 494, 637, 899, 1014, 1275]),
    // Kameshwari
    Scale::new(SPAN, &[0, 261, 755, 899, 1132, 1275]),
    // Pa kafi
    Scale::new(SPAN, &[0, 261, 376, 637, 899, 1160, 1275]),
    // Natbhairav
    Scale::new(SPAN, &[0, 261, 494, 637, 899, 1014, 1393]),
    // Malkauns
    Scale::new(SPAN, &[0, 261, 522, 637, 1014, 1275]),
    // Bairagi
    Scale::new(SPAN, &[0, 115, 637, 899, 1275]),
    // B todi
    Scale::new(SPAN, &[0, 115, 376, 899, 1275]),
    // Chandradeep
    Scale::new(SPAN, &[0, 376, 637, 899, 1275]),
    // Kaushik todi
    Scale::new(SPAN, &[0, 376, 637, 755, 1014]),
    // Jogeshwari
    Scale::new(SPAN, &[0, 376, 494, 637, 1132, 1275]),
    // Tartini-Vallotti
    Scale::new(SPAN, &[0, 120, 251, 381, 502, 643, 758, 893, 1019, 1144, 1280, 1395]),
    // 13 out of 22-tET, generator 5
    Scale::new(SPAN, &[0, 140, 279, 419, 489, 628, 768, 838, 977, 1117, 1187, 1327, 1466]),
    // 13 out of 19-tET, Mandelbaum
    Scale::new(SPAN, &[0, 162, 243, 404, 485, 647, 728, 889, 970, 1132, 1213, 1374, 1455]),
    // Magic[16] in 145-tET
    Scale::new(
        SPAN,
        &[
            0, 191, 265, 339, 413, 487, 561, 752,
            826, 900, 975, 1049, 1239, 1314, 1388, 1462,
        ],
    ),
    // Quartaminorthirds, 9 steps of 139-tET
    Scale::new(
        SPAN,
        &[
            0, 99, 199, 298, 398, 497, 597, 696,
            796, 895, 995, 1094, 1193, 1293, 1392, 1492,
        ],
    ),
    // Armodue semi-equalizzato
    Scale::new(
        SPAN,
        &[
            0, 99, 198, 297, 396, 495, 595, 694,
            793, 892, 991, 1090, 1189, 1239, 1338, 1437,
        ],
    ),
    // Hirajoshi
    Scale::new(SPAN, &[0, 237, 431, 874, 1011]),
    // Scottish bagpipes
    Scale::new(SPAN, &[0, 252, 436, 634, 900, 1092, 1292]),
    // Thai ranat
    Scale::new(SPAN, &[0, 206, 443, 673, 878, 1103, 1317]),
    // Quasi-12-equal mode from 31-EDO
    Scale::new(SPAN, &[0, 149, 297, 396, 545, 644, 793, 941, 1041, 1189, 1288, 1437]),
    // 11-TET Machine[6]
    Scale::new(SPAN, &[0, 279, 559, 698, 977, 1257]),
    // 13-TET Father[8]
    Scale::new(SPAN, &[0, 236, 473, 591, 827, 1063, 1182, 1418]),
    // 15-TET Blackwood[10]
    Scale::new(SPAN, &[0, 205, 307, 512, 614, 819, 922, 1126, 1229, 1434]),
    // 16-TET Mavila[7]
    Scale::new(SPAN, &[0, 192, 384, 672, 864, 1056, 1248]),
    // 16-TET Mavila[9]
    Scale::new(SPAN, &[0, 96, 288, 480, 672, 768, 960, 1152, 1344]),
    // 17-TET Superpyth[12]
    Scale::new(SPAN, &[0, 90, 181, 361, 452, 632, 723, 813, 994, 1084, 1265, 1355]),
    // 22-TET Orwell[9]
    Scale::new(SPAN, &[0, 140, 349, 489, 698, 838, 1047, 1187, 1396]),
    // 22-TET Pajara[10] static symmetrical major
    Scale::new(SPAN, &[0, 140, 279, 489, 628, 768, 908, 1047, 1257, 1396]),
    // 22-TET Pajara[10] standard pentachordal major
    Scale::new(SPAN, &[0, 140, 279, 489, 628, 768, 908, 1117, 1257, 1396]),
    // 22-TET Porcupine[7]
    Scale::new(SPAN, &[0, 209, 419, 628, 908, 1117, 1327]),
    // 26-TET Flattone[12]
    Scale::new(SPAN, &[0, 59, 236, 295, 473, 650, 709, 886, 945, 1122, 1182, 1359]),
    // 26-TET Lemba[10]
    Scale::new(SPAN, &[0, 177, 295, 473, 591, 768, 945, 1063, 1241, 1359]),
    // 46-TET Sensi[11]
    Scale::new(SPAN, &[0, 167, 334, 501, 568, 735, 902, 1069, 1135, 1302, 1469]),
    // 53-TET Orwell[9]
    Scale::new(SPAN, &[0, 145, 348, 493, 696, 840, 1043, 1188, 1391]),
    // 12 out of 72-TET, Prent Rodgers
    Scale::new(SPAN, &[0, 256, 341, 491, 555, 640, 704, 896, 1131, 1237, 1344, 1387]),
    // Trivalent zeus[7], 99-ET tuning
    Scale::new(SPAN, &[0, 202, 496, 698, 900, 1195, 1396]),
    // 202-TET octone[8]
    Scale::new(SPAN, &[0, 152, 449, 494, 791, 897, 1194, 1239]),
    // 313-TET elfmadagasgar[9]
    Scale::new(SPAN, &[0, 260, 319, 579, 638, 898, 957, 1217, 1276]),
    // Marvel woo glumma[12]
    Scale::new(SPAN, &[0, 63, 298, 406, 491, 703, 789, 897, 1131, 1194, 1239, 1492]),
    // TOP Parapyth[12]
    Scale::new(SPAN, &[0, 75, 265, 340, 530, 605, 710, 901, 975, 1166, 1240, 1431]),
    // 16-ED
    Scale::new(
        SPAN,
        &[
            0, 96, 192, 288, 384, 480, 576, 672,
            768, 864, 960, 1056, 1152, 1248, 1344, 1440,
        ],
    ),
    // 15-ED
    Scale::new(
        SPAN,
        &[
            0, 102, 205, 307, 410, 512, 614, 717,
            819, 922, 1024, 1126, 1229, 1331, 1434,
        ],
    ),
    // 14-ED
    Scale::new(SPAN, &[0, 110, 219, 329, 439, 549, 658, 768, 878, 987, 1097, 1207, 1317, 1426]),
    // 13-ED
    Scale::new(SPAN, &[0, 118, 236, 354, 473, 591, 709, 827, 945, 1063, 1182, 1300, 1418]),
    // 11-ED
    Scale::new(SPAN, &[0, 140, 279, 419, 559, 698, 838, 977, 1117, 1257, 1396]),
    // 10-ED
    Scale::new(SPAN, &[0, 154, 307, 461, 614, 768, 922, 1075, 1229, 1382]),
    // 9-ED
    Scale::new(SPAN, &[0, 171, 341, 512, 683, 853, 1024, 1195, 1365]),
    // 8-ED
    Scale::new(SPAN, &[0, 192, 384, 576, 768, 960, 1152, 1344]),
    // 7-ED
    Scale::new(SPAN, &[0, 219, 439, 658, 878, 1097, 1317]),
    // 6-ED
    Scale::new(SPAN, &[0, 256, 512, 768, 1024, 1280]),
    // 5-ED
    Scale::new(SPAN, &[0, 307, 614, 922, 1229]),
    // 16-HD2
    Scale::new(
        SPAN,
        &[
            0, 134, 261, 381, 494, 603, 706, 804,
            899, 989, 1076, 1160, 1240, 1318, 1393, 1466,
        ],
    ),
    // 15-HD2
    Scale::new(
        SPAN,
        &[
            0, 143, 277, 404, 524, 637, 746, 849,
            947, 1042, 1132, 1219, 1303, 1383, 1461,
        ],
    ),
    // 14-HD2
    Scale::new(SPAN, &[0, 153, 296, 430, 557, 677, 790, 899, 1002, 1100, 1194, 1285, 1372, 1455]),
    // 13-HD2
    Scale::new(SPAN, &[0, 164, 317, 460, 594, 721, 841, 955, 1063, 1166, 1264, 1359, 1449]),
    // 12-HD2
    Scale::new(SPAN, &[0, 177, 342, 494, 637, 772, 899, 1018, 1132, 1240, 1343, 1442]),
    // 11-HD2
    Scale::new(SPAN, &[0, 193, 370, 534, 687, 830, 965, 1091, 1211, 1325, 1433]),
    // 10-HD2
    Scale::new(SPAN, &[0, 211, 404, 581, 746, 899, 1042, 1176, 1303, 1422]),
    // 9-HD2
    Scale::new(SPAN, &[0, 233, 445, 637, 815, 979, 1132, 1275, 1409]),
    // 8-HD2
    Scale::new(SPAN, &[0, 261, 494, 706, 899, 1076, 1240, 1393]),
    // 7-HD2
    Scale::new(SPAN, &[0, 296, 557, 790, 1002, 1194, 1372]),
    // 6-HD2
    Scale::new(SPAN, &[0, 342, 637, 899, 1132, 1343]),
    // 5-HD2
    Scale::new(SPAN, &[0, 404, 746, 1042, 1303]),
    // 4-HD2
    Scale::new(SPAN, &[0, 494, 899, 1240]),
    // 32-16-SD2
    Scale::new(
        SPAN,
        &[
            0, 70, 143, 218, 296, 376, 460, 547,
            637, 732, 830, 933, 1042, 1155, 1275, 1402,
        ],
    ),
    // 30-15-SD2
    Scale::new(
        SPAN,
        &[
            0, 75, 153, 233, 317, 404, 494, 589,
            687, 790, 899, 1012, 1132, 1259, 1393,
        ],
    ),
    // 28-14-SD2
    Scale::new(SPAN, &[0, 81, 164, 251, 342, 436, 534, 637, 746, 859, 979, 1106, 1240, 1383]),
    // 26-13-SD2
    Scale::new(SPAN, &[0, 87, 177, 272, 370, 473, 581, 695, 815, 942, 1076, 1219, 1372]),
    // 24-12-SD2
    Scale::new(SPAN, &[0, 94, 193, 296, 404, 518, 637, 764, 899, 1042, 1194, 1359]),
    // 22-11-SD2
    Scale::new(SPAN, &[0, 103, 211, 325, 445, 571, 706, 849, 1002, 1166, 1343]),
    // 20-10-SD2
    Scale::new(SPAN, &[0, 114, 233, 360, 494, 637, 790, 955, 1132, 1325]),
    // 18-9-SD2
    Scale::new(SPAN, &[0, 127, 261, 404, 557, 721, 899, 1091, 1303]),
    // 16-8-SD2
    Scale::new(SPAN, &[0, 143, 296, 460, 637, 830, 1042, 1275]),
    // 14-7-SD2
    Scale::new(SPAN, &[0, 164, 342, 534, 746, 979, 1240]),
    // 12-6-SD2
    Scale::new(SPAN, &[0, 193, 404, 637, 899, 1194]),
    // 10-5-SD2
    Scale::new(SPAN, &[0, 233, 494, 790, 1132]),
    // 8-4-SD2
    Scale::new(SPAN, &[0, 296, 637, 1042]),
    // Bohlen-Pierce, equal
    Scale::new(SPAN, &[0, 118, 236, 354, 473, 591, 709, 827, 945, 1063, 1182, 1300, 1418]),
    // Bohlen-Pierce, just
    Scale::new(SPAN, &[0, 108, 244, 351, 470, 595, 714, 822, 941, 1066, 1185, 1292, 1428]),
    // Bohlen-Pierce, lambda
    Scale::new(SPAN, &[0, 244, 351, 470, 714, 822, 1066, 1185, 1428]),
];

/// Display names of [`BUILTIN_SCALES`], same order.
pub static BUILTIN_SCALE_NAMES: [&str; NUM_BUILTIN_SCALES] = [
    "OFF", "SEMI", "IONI", "DORI", "PHRY", "LYDI", "MIXO", "AEOL",
    "LOCR", "BLU+", "BLU-", "PEN+", "PEN-", "FOLK", "JAPA", "GAME",
    "GYPS", "ARAB", "FLAM", "WHOL", "PYTH", "EB/4", "E /4", "EA/4",
    "BHAI", "GUNA", "MARW", "SHRI", "PURV", "BILA", "YAMA", "KAFI",
    "BHIM", "DARB", "RAGE", "KHAM", "MIMA", "PARA", "RANG", "GANG",
    "KAME", "PAKA", "NATB", "KAUN", "BAIR", "BTOD", "CHAN", "KTOD",
    "JOGE", "TRTV", "13/22", "13/19", "MAGI", "QMTH", "ARMO", "HIRA",
    "BAGP", "THAI", "Q31E", "11MA", "13FA", "15BL", "16M7", "16M9",
    "17SP", "22OR", "22PS", "22PP", "22PO", "26FL", "26LE", "46SE",
    "53OR", "72PR", "ZEUS", "OCTO", "ELFM", "GLUM", "TPPY", "16ED",
    "15ED", "14ED", "13ED", "11ED", "10ED", "9ED", "8ED", "7ED",
    "6ED", "5ED", "16HD", "15HD", "14HD", "13HD", "12HD", "11HD",
    "10HD", "9HD", "8HD", "7HD", "6HD", "5HD", "4HD", "16SD",
    "15SD", "14SD", "13SD", "12SD", "11SD", "10SD", "9SD", "8SD",
    "7SD", "6SD", "5SD", "4SD", "BPEQ", "BPJU", "BPLA",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_scale_is_empty() {
        let off = &BUILTIN_SCALES[OFF];
        assert!(off.is_empty());
        assert_eq!(off.span(), 0);
        assert_eq!(BUILTIN_SCALE_NAMES[OFF], "OFF");
    }

    #[test]
    fn semitones_step_by_one_semitone() {
        let semi = &BUILTIN_SCALES[SEMITONES];
        assert_eq!(semi.num_notes(), 12);
        for (i, &note) in semi.notes().iter().enumerate() {
            assert_eq!(note as i32, i as i32 * 128);
        }
    }

    #[test]
    fn every_preset_is_well_formed() {
        for (i, scale) in BUILTIN_SCALES.iter().enumerate().skip(1) {
            assert!(scale.is_monotonic(), "preset {} ({}) is not ascending", i, BUILTIN_SCALE_NAMES[i]);
            assert_eq!(scale.note(0), Some(0), "preset {} does not start at the root", i);
            assert_eq!(scale.span() as i32, OCTAVE);
        }
    }

    #[test]
    fn names_fit_the_display() {
        for name in BUILTIN_SCALE_NAMES {
            assert!(!name.is_empty() && name.len() <= 5, "bad name {}", name);
        }
    }
}
