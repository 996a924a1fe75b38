//! Bhava (house) placement from cusp longitudes or equal signs.
//!
//! With cusps, house k spans `[cusp[k-1], cusp[k])` on the circle. Without
//! them, houses degrade to whole signs counted from the lagna's rashi.

use crate::error::KpError;
use crate::rashi::rashi_index;
use crate::util::normalize_360;

/// 12 house-cusp longitudes; `cusps[i]` is the start of house `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    cusps: [f64; 12],
}

impl HouseCusps {
    /// Build from 12 sidereal longitudes. Values are normalized to [0, 360).
    pub fn new(cusps: [f64; 12]) -> Result<Self, KpError> {
        if cusps.iter().any(|c| !c.is_finite()) {
            return Err(KpError::InvalidCusps("cusp longitudes must be finite"));
        }
        Ok(Self {
            cusps: cusps.map(normalize_360),
        })
    }

    /// Build from a slice that must hold exactly 12 longitudes.
    pub fn from_slice(cusps: &[f64]) -> Result<Self, KpError> {
        let arr: [f64; 12] = cusps
            .try_into()
            .map_err(|_| KpError::InvalidCusps("expected exactly 12 cusp longitudes"))?;
        Self::new(arr)
    }

    /// Equal 30-degree houses with cusp 1 on the ascendant degree.
    pub fn equal_from(ascendant_deg: f64) -> Self {
        Self {
            cusps: std::array::from_fn(|i| normalize_360(ascendant_deg + i as f64 * 30.0)),
        }
    }

    /// Cusp longitude of a house (1-based). House numbers wrap modulo 12.
    pub fn cusp(&self, house: u8) -> f64 {
        self.cusps[(house as usize + 11) % 12]
    }

    /// All 12 cusps, house 1 first.
    pub fn as_array(&self) -> &[f64; 12] {
        &self.cusps
    }

    /// House (1-12) whose cusp interval contains `lon`.
    ///
    /// Intervals are half-open; an interval whose end cusp is numerically
    /// smaller than its start wraps through 0 deg. Returns None only when
    /// degenerate cusps leave the point uncovered.
    pub fn house_of(&self, lon: f64) -> Option<u8> {
        let lon = normalize_360(lon);
        (0..12).find_map(|i| {
            let start = self.cusps[i];
            let end = self.cusps[(i + 1) % 12];
            let inside = if start < end {
                lon >= start && lon < end
            } else if start > end {
                lon >= start || lon < end
            } else {
                false
            };
            inside.then_some(i as u8 + 1)
        })
    }
}

/// Whole-sign house of `lon` counted from the lagna's rashi.
pub fn equal_sign_house(lagna_deg: f64, lon: f64) -> u8 {
    let lagna_sign = rashi_index(lagna_deg) as i16;
    let sign = rashi_index(lon) as i16;
    ((sign - lagna_sign).rem_euclid(12)) as u8 + 1
}

/// Rashi index (0-11) occupying a house under whole-sign houses.
pub fn equal_sign_house_rashi(lagna_deg: f64, house: u8) -> u8 {
    ((rashi_index(lagna_deg) as u16 + house as u16 + 11) % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cusps() -> HouseCusps {
        // Unequal quadrant-style cusps with house 11 wrapping through 0 deg
        HouseCusps::new([
            61.9, 84.0, 105.5, 129.0, 158.2, 192.0, 241.9, 264.0, 285.5, 309.0, 338.2, 12.0,
        ])
        .unwrap()
    }

    #[test]
    fn from_slice_requires_twelve() {
        assert!(HouseCusps::from_slice(&[0.0; 11]).is_err());
        assert!(HouseCusps::from_slice(&[0.0; 13]).is_err());
        assert!(HouseCusps::from_slice(&[0.0; 12]).is_ok());
    }

    #[test]
    fn rejects_nan() {
        let mut c = [0.0; 12];
        c[5] = f64::NAN;
        assert_eq!(
            HouseCusps::new(c),
            Err(KpError::InvalidCusps("cusp longitudes must be finite"))
        );
    }

    #[test]
    fn house_of_plain_interval() {
        let c = sample_cusps();
        assert_eq!(c.house_of(61.9), Some(1));
        assert_eq!(c.house_of(83.99), Some(1));
        assert_eq!(c.house_of(84.0), Some(2));
        assert_eq!(c.house_of(200.0), Some(6));
    }

    #[test]
    fn house_of_wrapping_interval() {
        let c = sample_cusps();
        assert_eq!(c.house_of(350.0), Some(11));
        assert_eq!(c.house_of(5.0), Some(11));
        assert_eq!(c.house_of(12.0), Some(12));
        assert_eq!(c.house_of(30.0), Some(12));
        assert_eq!(c.house_of(338.1), Some(10));
    }

    #[test]
    fn every_point_has_a_house() {
        let c = sample_cusps();
        for i in 0..3600 {
            assert!(c.house_of(i as f64 / 10.0).is_some());
        }
    }

    #[test]
    fn equal_cusps_from_ascendant() {
        let c = HouseCusps::equal_from(350.0);
        assert!((c.cusp(1) - 350.0).abs() < 1e-12);
        assert!((c.cusp(2) - 20.0).abs() < 1e-12);
        assert!((c.cusp(12) - 320.0).abs() < 1e-12);
        assert_eq!(c.house_of(355.0), Some(1));
        assert_eq!(c.house_of(10.0), Some(1));
    }

    #[test]
    fn equal_sign_house_gemini_lagna() {
        // Lagna in Mithuna (2); 180.74 deg is Tula (6) → 5th house
        assert_eq!(equal_sign_house(61.93967623192282, 180.7372162146417), 5);
        assert_eq!(equal_sign_house(61.9, 31.7), 12);
        assert_eq!(equal_sign_house(61.9, 82.7), 1);
    }

    #[test]
    fn equal_sign_house_rashi_wraps() {
        assert_eq!(equal_sign_house_rashi(61.9, 1), 2);
        assert_eq!(equal_sign_house_rashi(61.9, 11), 0);
        assert_eq!(equal_sign_house_rashi(61.9, 12), 1);
    }
}
