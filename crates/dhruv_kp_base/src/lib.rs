//! KP (Krishnamurti Paddhati) base calculations over a natal snapshot.
//!
//! This crate provides:
//! - Vimshottari dasha resolution to 4 nested levels
//! - Nakshatra sub-lord and sub-sub-lord resolution
//! - The four-level house significator hierarchy
//! - Natal chart assembly from position-provider records
//!
//! Longitudes are sidereal degrees computed elsewhere; nothing here does
//! astronomy. Dasha periods and sub-lords share one proportional
//! subdivision routine ([`subdivision`]).

pub mod bhava;
pub mod chart;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod period_table;
pub mod rashi;
pub mod significator;
pub mod subdivision;
pub mod sublord;
pub mod util;

pub use bhava::{HouseCusps, equal_sign_house, equal_sign_house_rashi};
pub use chart::{ASCENDANT_NAME, BodyRecord, NatalChart, NatalPlanet};
pub use dasha::{
    ALL_DASHA_LEVELS, DASHA_DEPTH, DashaBalance, DashaChain, DashaLevel, PeriodNode,
    birth_balance, dasha_chain, elapsed_years, mahadasha_sequence, periods_at_years,
};
pub use error::KpError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord, rashi_lord_by_index};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude,
    nakshatra_index,
};
pub use period_table::{
    DAYS_PER_YEAR, TOTAL_CYCLE_YEARS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS, dasha_years,
    nakshatra_lord, star_lord_of,
};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude, rashi_index};
pub use significator::{
    ALL_SIGNIFICATION_LEVELS, SignificationLevel, SignificatorHierarchy, SignificatorSet,
};
pub use subdivision::{Allotment, locate, nested_allotments, proportional_allotments};
pub use sublord::{KpLords, SubLordInfo, kp_lords, nakshatra_subdivisions, resolve_sub_lord};
pub use util::normalize_360;
