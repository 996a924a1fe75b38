//! Core types for Vimshottari dasha resolution.

use serde::Serialize;

use crate::graha::Graha;
use crate::period_table::DAYS_PER_YEAR;

/// Number of nested dasha levels resolved.
pub const DASHA_DEPTH: usize = 4;

/// The 4 nested dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
}

/// All levels, outermost first.
pub const ALL_DASHA_LEVELS: [DashaLevel; DASHA_DEPTH] = [
    DashaLevel::Mahadasha,
    DashaLevel::Antardasha,
    DashaLevel::Pratyantardasha,
    DashaLevel::Sookshmadasha,
];

impl DashaLevel {
    /// 0-based depth.
    pub const fn depth(self) -> usize {
        self as usize
    }
}

/// A single period, timed in years relative to birth.
///
/// The mahadasha running at birth starts at 0 and lasts only its balance.
/// Sub-periods that would outlast it are cut at its end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodNode {
    /// Ruler of this period.
    pub ruler: Graha,
    /// Nesting level.
    pub level: DashaLevel,
    /// Years from birth at which the period began.
    pub start_years: f64,
    /// Length of the period in years.
    pub duration_years: f64,
}

impl PeriodNode {
    /// Years from birth at which the period ends (exclusive).
    pub fn end_years(&self) -> f64 {
        self.start_years + self.duration_years
    }

    /// Whether `years_since_birth` falls in `[start, end)`.
    pub fn contains(&self, years_since_birth: f64) -> bool {
        years_since_birth >= self.start_years && years_since_birth < self.end_years()
    }

    /// Start as JD UTC given the birth JD.
    pub fn start_jd(&self, birth_jd: f64) -> f64 {
        birth_jd + self.start_years * DAYS_PER_YEAR
    }

    /// End as JD UTC given the birth JD.
    pub fn end_jd(&self, birth_jd: f64) -> f64 {
        birth_jd + self.end_years() * DAYS_PER_YEAR
    }
}

/// The active period at every level for one query instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaChain {
    /// Birth JD UTC.
    pub birth_jd: f64,
    /// The queried JD UTC.
    pub query_jd: f64,
    /// Years elapsed from birth to the query.
    pub elapsed_years: f64,
    /// 0-based index of the 120-year cycle containing the query.
    pub cycle: i32,
    /// Active periods: periods[0] = mahadasha .. periods[3] = sookshma.
    pub periods: [PeriodNode; DASHA_DEPTH],
}

impl DashaChain {
    /// Rulers in parent→child order.
    pub fn rulers(&self) -> [Graha; DASHA_DEPTH] {
        self.periods.map(|p| p.ruler)
    }

    /// Active period at a level.
    pub fn period(&self, level: DashaLevel) -> &PeriodNode {
        &self.periods[level.depth()]
    }

    pub fn mahadasha(&self) -> Graha {
        self.periods[0].ruler
    }

    pub fn antardasha(&self) -> Graha {
        self.periods[1].ruler
    }

    pub fn pratyantardasha(&self) -> Graha {
        self.periods[2].ruler
    }

    pub fn sookshmadasha(&self) -> Graha {
        self.periods[3].ruler
    }
}
