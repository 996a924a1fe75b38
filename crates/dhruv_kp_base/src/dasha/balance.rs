//! Birth balance: how much of the first mahadasha remains at birth.
//!
//! Computed from the Moon's position within its nakshatra. The fraction of
//! the nakshatra already traversed is the fraction of the ruler's period
//! already spent.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;
use crate::period_table::{dasha_years, nakshatra_lord};

/// Dasha balance at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaBalance {
    /// 0-based index of the Moon's nakshatra.
    pub nakshatra_index: u8,
    /// Ruler of that nakshatra, and of the mahadasha running at birth.
    pub ruler: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Years of the birth mahadasha still to run.
    pub balance_years: f64,
}

impl DashaBalance {
    /// Years of the birth mahadasha that elapsed before birth.
    pub fn spent_years(&self) -> f64 {
        dasha_years(self.ruler) * self.elapsed_fraction
    }
}

/// Compute the Vimshottari birth balance from the natal Moon longitude.
pub fn birth_balance(moon_sidereal_lon: f64) -> DashaBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let ruler = nakshatra_lord(info.nakshatra_index);
    DashaBalance {
        nakshatra_index: info.nakshatra_index,
        ruler,
        elapsed_fraction: info.elapsed_fraction,
        balance_years: dasha_years(ruler) * (1.0 - info.elapsed_fraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN_27;

    #[test]
    fn balance_at_start_of_nakshatra() {
        let b = birth_balance(0.0);
        assert_eq!(b.nakshatra_index, 0);
        assert_eq!(b.ruler, Graha::Ketu);
        assert!((b.balance_years - 7.0).abs() < 1e-12);
        assert!(b.spent_years().abs() < 1e-12);
    }

    #[test]
    fn balance_at_midpoint() {
        let b = birth_balance(40.0 + NAKSHATRA_SPAN_27 / 2.0);
        assert_eq!(b.ruler, Graha::Chandra);
        assert!((b.elapsed_fraction - 0.5).abs() < 1e-10);
        assert!((b.balance_years - 5.0).abs() < 1e-9);
    }

    #[test]
    fn balance_and_spent_sum_to_full_period() {
        let b = birth_balance(123.456);
        assert!((b.balance_years + b.spent_years() - dasha_years(b.ruler)).abs() < 1e-12);
    }

    #[test]
    fn balance_wraps_negative() {
        let b = birth_balance(-1.0);
        assert_eq!(b.nakshatra_index, 26);
        assert_eq!(b.ruler, Graha::Buddh);
    }
}
