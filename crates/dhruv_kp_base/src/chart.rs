//! Natal chart assembled from position-provider records.
//!
//! The provider supplies one record per body plus the ascendant, all in
//! sidereal degrees. House occupancy, house ownership and nakshatra are
//! derived here; the chart is immutable once built.

use tracing::warn;

use crate::bhava::{HouseCusps, equal_sign_house, equal_sign_house_rashi};
use crate::error::KpError;
use crate::graha::{Graha, rashi_lord_by_index};
use crate::nakshatra::nakshatra_index;
use crate::rashi::{Rashi, rashi_from_longitude, rashi_index};
use crate::util::normalize_360;

/// Record name the provider uses for the ascendant.
pub const ASCENDANT_NAME: &str = "Ascendant";

/// One body as reported by the position provider.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRecord {
    /// Body name ("Sun", "Moon", ..., "Ascendant").
    pub name: String,
    /// Sidereal ecliptic longitude in degrees.
    pub longitude: f64,
    /// Rashi index 0-11 as reported by the provider.
    pub sign_index: u8,
    /// Nakshatra index 0-26 as reported by the provider.
    pub nakshatra_index: u8,
    /// Whether the body is retrograde.
    pub retrograde: bool,
}

impl BodyRecord {
    /// Record with sign and nakshatra indices derived from the longitude.
    pub fn new(name: impl Into<String>, longitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            sign_index: rashi_index(longitude),
            nakshatra_index: nakshatra_index(longitude),
            retrograde: false,
        }
    }

    /// Mark as retrograde.
    pub fn retrograde(mut self) -> Self {
        self.retrograde = true;
        self
    }
}

/// A graha's natal placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NatalPlanet {
    pub graha: Graha,
    /// Normalized sidereal longitude.
    pub longitude: f64,
    /// Occupied house, 1-12.
    pub house: u8,
    /// 0-based nakshatra index, derived from the longitude.
    pub nakshatra_index: u8,
    pub retrograde: bool,
}

/// Immutable natal snapshot: lagna, graha placements and optional cusps.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalChart {
    ascendant: f64,
    cusps: Option<HouseCusps>,
    planets: Vec<NatalPlanet>,
}

impl NatalChart {
    /// Build from `(graha, longitude, retrograde)` placements.
    ///
    /// A graha listed twice keeps its first placement.
    pub fn new(
        ascendant: f64,
        placements: &[(Graha, f64, bool)],
        cusps: Option<HouseCusps>,
    ) -> Result<Self, KpError> {
        if !ascendant.is_finite() {
            return Err(KpError::InvalidLongitude(ASCENDANT_NAME.to_string()));
        }
        let mut chart = Self {
            ascendant: normalize_360(ascendant),
            cusps,
            planets: Vec::with_capacity(placements.len()),
        };

        for &(graha, lon, retrograde) in placements {
            if !lon.is_finite() {
                return Err(KpError::InvalidLongitude(graha.english_name().to_string()));
            }
            if chart.planet(graha).is_some() {
                warn!(graha = %graha, "duplicate placement ignored");
                continue;
            }
            let longitude = normalize_360(lon);
            let house = chart.house_of_longitude(longitude);
            chart.planets.push(NatalPlanet {
                graha,
                longitude,
                house,
                nakshatra_index: nakshatra_index(longitude),
                retrograde,
            });
        }

        Ok(chart)
    }

    /// Build from provider records.
    ///
    /// The ascendant comes from the "Ascendant" record, or from cusp 1 when
    /// no such record exists. Bodies outside the 9 rulers are skipped.
    /// Sign and nakshatra are re-derived from each longitude.
    pub fn from_records(
        records: &[BodyRecord],
        cusps: Option<HouseCusps>,
    ) -> Result<Self, KpError> {
        let ascendant = records
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(ASCENDANT_NAME))
            .map(|r| r.longitude)
            .or_else(|| cusps.map(|c| c.cusp(1)))
            .ok_or(KpError::MissingAscendant)?;

        let mut placements = Vec::with_capacity(records.len());
        for record in records {
            if record.name.eq_ignore_ascii_case(ASCENDANT_NAME) {
                continue;
            }
            match Graha::from_name(&record.name) {
                Some(graha) => placements.push((graha, record.longitude, record.retrograde)),
                None => warn!(body = %record.name, "body is not a dasha ruler, skipped"),
            }
        }

        Self::new(ascendant, &placements, cusps)
    }

    /// Lagna (ascendant) longitude.
    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    /// Rashi of the lagna.
    pub fn lagna_rashi(&self) -> Rashi {
        rashi_from_longitude(self.ascendant)
    }

    /// Supplied cusps, if any.
    pub fn cusps(&self) -> Option<&HouseCusps> {
        self.cusps.as_ref()
    }

    /// Supplied cusps, or equal houses from the ascendant degree.
    pub fn cusps_or_equal(&self) -> HouseCusps {
        self.cusps
            .unwrap_or_else(|| HouseCusps::equal_from(self.ascendant))
    }

    /// All placements in input order.
    pub fn planets(&self) -> &[NatalPlanet] {
        &self.planets
    }

    /// Placement of one graha, if present.
    pub fn planet(&self, graha: Graha) -> Option<&NatalPlanet> {
        self.planets.iter().find(|p| p.graha == graha)
    }

    /// House (1-12) containing a longitude.
    ///
    /// Uses the cusp intervals when cusps exist and cover the point,
    /// otherwise whole signs from the lagna.
    pub fn house_of_longitude(&self, lon: f64) -> u8 {
        self.cusps
            .and_then(|c| c.house_of(lon))
            .unwrap_or_else(|| equal_sign_house(self.ascendant, lon))
    }

    /// Rashi index (0-11) governing a house (1-12).
    ///
    /// With cusps this is the rashi at the house's cusp; without, the rashi
    /// `house - 1` signs on from the lagna's.
    pub fn house_rashi(&self, house: u8) -> u8 {
        match &self.cusps {
            Some(c) => rashi_index(c.cusp(house)),
            None => equal_sign_house_rashi(self.ascendant, house),
        }
    }

    /// Graha owning a house: the lord of the house's rashi.
    pub fn house_owner(&self, house: u8) -> Graha {
        rashi_lord_by_index(self.house_rashi(house))
    }

    /// Houses owned by a graha, ascending. Empty for Rahu and Ketu, and for a
    /// graha whose rashis fall on no cusp.
    pub fn owned_houses(&self, graha: Graha) -> Vec<u8> {
        (1..=12).filter(|&h| self.house_owner(h) == graha).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<BodyRecord> {
        vec![
            BodyRecord::new("Ascendant", 61.93967623192282),
            BodyRecord::new("Sun", 238.9742740947627),
            BodyRecord::new("Moon", 102.61399211366938),
            BodyRecord::new("Mars", 180.7372162146417),
            BodyRecord::new("Uranus", 290.0),
        ]
    }

    #[test]
    fn from_records_skips_non_rulers() {
        let chart = NatalChart::from_records(&records(), None).unwrap();
        assert_eq!(chart.planets().len(), 3);
        assert!(chart.planet(Graha::Surya).is_some());
        assert!(chart.planet(Graha::Guru).is_none());
    }

    #[test]
    fn equal_sign_occupancy() {
        let chart = NatalChart::from_records(&records(), None).unwrap();
        assert_eq!(chart.lagna_rashi(), Rashi::Mithuna);
        assert_eq!(chart.planet(Graha::Mangal).unwrap().house, 5);
        assert_eq!(chart.planet(Graha::Surya).unwrap().house, 6);
        assert_eq!(chart.planet(Graha::Chandra).unwrap().house, 2);
    }

    #[test]
    fn equal_sign_ownership() {
        let chart = NatalChart::from_records(&records(), None).unwrap();
        assert_eq!(chart.owned_houses(Graha::Buddh), vec![1, 4]);
        assert_eq!(chart.owned_houses(Graha::Chandra), vec![2]);
        assert_eq!(chart.owned_houses(Graha::Shukra), vec![5, 12]);
        assert!(chart.owned_houses(Graha::Rahu).is_empty());
    }

    #[test]
    fn missing_ascendant_uses_cusp_one() {
        let cusps = HouseCusps::equal_from(100.0);
        let recs = vec![BodyRecord::new("Moon", 10.0)];
        let chart = NatalChart::from_records(&recs, Some(cusps)).unwrap();
        assert!((chart.ascendant() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn missing_ascendant_without_cusps_fails() {
        let recs = vec![BodyRecord::new("Moon", 10.0)];
        assert_eq!(
            NatalChart::from_records(&recs, None),
            Err(KpError::MissingAscendant)
        );
    }

    #[test]
    fn non_finite_longitude_rejected() {
        let recs = vec![
            BodyRecord::new("Ascendant", 10.0),
            BodyRecord::new("Moon", f64::NAN),
        ];
        assert_eq!(
            NatalChart::from_records(&recs, None),
            Err(KpError::InvalidLongitude("Moon".into()))
        );
    }

    #[test]
    fn cusp_based_occupancy_and_ownership() {
        // Cusp 1 at 25 deg Mesha: a planet at 10 deg Mesha sits in house 12
        let cusps = HouseCusps::equal_from(25.0);
        let chart = NatalChart::new(25.0, &[(Graha::Surya, 10.0, false)], Some(cusps)).unwrap();
        assert_eq!(chart.planet(Graha::Surya).unwrap().house, 12);
        // House 12 cusp at 355 deg is Meena, owned by Guru
        assert_eq!(chart.house_owner(12), Graha::Guru);
        assert_eq!(chart.house_owner(1), Graha::Mangal);
    }

    #[test]
    fn duplicate_placement_keeps_first() {
        let chart = NatalChart::new(
            0.0,
            &[(Graha::Surya, 10.0, false), (Graha::Surya, 200.0, true)],
            None,
        )
        .unwrap();
        assert_eq!(chart.planets().len(), 1);
        assert!((chart.planet(Graha::Surya).unwrap().longitude - 10.0).abs() < 1e-12);
    }

    #[test]
    fn retrograde_flag_carried() {
        let recs = vec![
            BodyRecord::new("Ascendant", 0.0),
            BodyRecord::new("Saturn", 31.7).retrograde(),
        ];
        let chart = NatalChart::from_records(&recs, None).unwrap();
        assert!(chart.planet(Graha::Shani).unwrap().retrograde);
    }
}
