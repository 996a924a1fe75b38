//! Vimshottari period table: the 120-year ruler cycle.
//!
//! Both dasha subdivision and KP sub-lord resolution walk this same cycle,
//! so it is the single source for ruler order, year weights and the
//! nakshatra-to-ruler mapping.

use crate::graha::Graha;
use crate::nakshatra::nakshatra_index;

/// Length of one full Vimshottari cycle in years.
pub const TOTAL_CYCLE_YEARS: f64 = 120.0;

/// Year length for converting civil days to dasha years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Ruler cycle order: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Years allotted to each ruler, in VIMSHOTTARI_SEQUENCE order.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Position of a graha in the ruler cycle.
pub const fn cycle_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full mahadasha length of a graha in years.
pub const fn dasha_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[cycle_position(graha)]
}

/// The ruler following `graha` in the cycle.
pub const fn next_in_cycle(graha: Graha) -> Graha {
    VIMSHOTTARI_SEQUENCE[(cycle_position(graha) + 1) % 9]
}

/// The 9 rulers in cycle order, starting from `start`.
pub fn cycle_from(start: Graha) -> [Graha; 9] {
    let base = cycle_position(start);
    std::array::from_fn(|i| VIMSHOTTARI_SEQUENCE[(base + i) % 9])
}

/// Ruler of a nakshatra (0-based). The 9-ruler cycle repeats three times
/// across the 27 nakshatras, so index 0, 9 and 18 are all Ketu.
pub const fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra_index % 27 % 9) as usize]
}

/// Ruler of the nakshatra containing a sidereal longitude (the "star lord").
pub fn star_lord_of(sidereal_lon_deg: f64) -> Graha {
    nakshatra_lord(nakshatra_index(sidereal_lon_deg))
}
