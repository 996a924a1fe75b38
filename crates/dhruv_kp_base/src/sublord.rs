//! KP sub-lord resolution.
//!
//! Each nakshatra's 13 deg 20' is split among the 9 rulers in cycle order,
//! starting from the nakshatra's own ruler, in proportion to their dasha
//! years. The split depends only on the ruler cycle, so all 27 nakshatras
//! are subdivided once into a process-wide table.

use std::sync::LazyLock;

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::nakshatra::{ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, nakshatra_from_longitude};
use crate::period_table::nakshatra_lord;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::subdivision::{Allotment, locate, proportional_allotments};
use crate::util::normalize_360;

static SUB_LORD_TABLE: LazyLock<[[Allotment; 9]; 27]> = LazyLock::new(|| {
    std::array::from_fn(|i| proportional_allotments(nakshatra_lord(i as u8), NAKSHATRA_SPAN_27))
});

/// The 9 sub-lord allotments of a nakshatra, as degree offsets into it.
pub fn nakshatra_subdivisions(nakshatra_index: u8) -> &'static [Allotment; 9] {
    &SUB_LORD_TABLE[(nakshatra_index % 27) as usize]
}

/// Sub-lord of a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubLordInfo {
    /// 0-based nakshatra index.
    pub nakshatra_index: u8,
    /// Ruler of the nakshatra.
    pub star_lord: Graha,
    /// Ruler of the sub-division containing the point.
    pub sub_lord: Graha,
    /// Sidereal longitude where the sub-division starts.
    pub sub_start_deg: f64,
    /// Sidereal longitude where the sub-division ends (exclusive).
    pub sub_end_deg: f64,
}

/// Resolve the nakshatra ruler and sub-lord of a sidereal longitude.
pub fn resolve_sub_lord(sidereal_lon_deg: f64) -> SubLordInfo {
    let info = nakshatra_from_longitude(sidereal_lon_deg);
    let subs = nakshatra_subdivisions(info.nakshatra_index);
    let hit = locate(subs, info.degrees_in_nakshatra);
    let nak_start = info.nakshatra.start_deg();

    SubLordInfo {
        nakshatra_index: info.nakshatra_index,
        star_lord: subs[0].ruler,
        sub_lord: hit.ruler,
        sub_start_deg: nak_start + hit.start,
        sub_end_deg: nak_start + hit.end,
    }
}

/// Full KP lord chain of a point: sign, star, sub and sub-sub.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpLords {
    /// Normalized sidereal longitude.
    pub longitude: f64,
    pub rashi: Rashi,
    pub sign_lord: Graha,
    pub nakshatra: Nakshatra,
    pub star_lord: Graha,
    pub sub_lord: Graha,
    /// Sub-division of the sub-lord's span, same proportional law.
    pub sub_sub_lord: Graha,
    pub sub_start_deg: f64,
    pub sub_end_deg: f64,
}

/// Resolve sign lord, star lord, sub-lord and sub-sub-lord of a longitude.
pub fn kp_lords(sidereal_lon_deg: f64) -> KpLords {
    let lon = normalize_360(sidereal_lon_deg);
    let sub = resolve_sub_lord(lon);
    let rashi = rashi_from_longitude(lon);

    let sub_span = sub.sub_end_deg - sub.sub_start_deg;
    let sub_sub = locate(
        &proportional_allotments(sub.sub_lord, sub_span),
        lon - sub.sub_start_deg,
    );

    KpLords {
        longitude: lon,
        rashi,
        sign_lord: rashi_lord(rashi),
        nakshatra: ALL_NAKSHATRAS_27[sub.nakshatra_index as usize],
        star_lord: sub.star_lord,
        sub_lord: sub.sub_lord,
        sub_sub_lord: sub_sub.ruler,
        sub_start_deg: sub.sub_start_deg,
        sub_end_deg: sub.sub_end_deg,
    }
}
