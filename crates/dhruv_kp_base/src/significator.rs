//! KP four-level house significators.
//!
//! For each ruler P with star lord S (the ruler of P's nakshatra):
//! - Level 1: house occupied by S
//! - Level 2: house occupied by P
//! - Level 3: houses owned by S
//! - Level 4: houses owned by P
//!
//! A ruler's strength for a house is the lowest level listing it.
//!
//! Orthodox KP swaps levels 1 and 2 when no other planet sits in the
//! ruler's own nakshatra. That refinement is not applied here.

use serde::Serialize;
use tracing::debug;

use crate::chart::NatalChart;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::period_table::nakshatra_lord;

/// Signification level, 1 (strongest) through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SignificationLevel {
    /// Occupancy of the star lord.
    StarLordOccupancy = 1,
    /// Own occupancy.
    Occupancy = 2,
    /// Ownership of the star lord.
    StarLordOwnership = 3,
    /// Own ownership.
    Ownership = 4,
}

/// All levels, strongest first.
pub const ALL_SIGNIFICATION_LEVELS: [SignificationLevel; 4] = [
    SignificationLevel::StarLordOccupancy,
    SignificationLevel::Occupancy,
    SignificationLevel::StarLordOwnership,
    SignificationLevel::Ownership,
];

impl SignificationLevel {
    /// Level number, 1-4.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// 0-based index into per-level tables.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::StarLordOccupancy),
            2 => Some(Self::Occupancy),
            3 => Some(Self::StarLordOwnership),
            4 => Some(Self::Ownership),
            _ => None,
        }
    }
}

/// House lists of one ruler, each sorted ascending without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignificatorSet {
    pub level1: Vec<u8>,
    pub level2: Vec<u8>,
    pub level3: Vec<u8>,
    pub level4: Vec<u8>,
}

impl SignificatorSet {
    /// List for one level.
    pub fn houses(&self, level: SignificationLevel) -> &[u8] {
        match level {
            SignificationLevel::StarLordOccupancy => &self.level1,
            SignificationLevel::Occupancy => &self.level2,
            SignificationLevel::StarLordOwnership => &self.level3,
            SignificationLevel::Ownership => &self.level4,
        }
    }

    /// Strongest level at which `house` appears, or None.
    pub fn strongest_level(&self, house: u8) -> Option<SignificationLevel> {
        ALL_SIGNIFICATION_LEVELS
            .into_iter()
            .find(|&l| self.houses(l).binary_search(&house).is_ok())
    }

    /// Whether any of `houses` is signified at any level.
    pub fn signifies_any(&self, houses: &[u8]) -> bool {
        houses.iter().any(|&h| self.strongest_level(h).is_some())
    }

    /// Union of all four levels, ascending.
    pub fn all_houses(&self) -> Vec<u8> {
        let mut all: Vec<u8> = [&self.level1, &self.level2, &self.level3, &self.level4]
            .into_iter()
            .flatten()
            .copied()
            .collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    pub fn is_empty(&self) -> bool {
        self.level1.is_empty()
            && self.level2.is_empty()
            && self.level3.is_empty()
            && self.level4.is_empty()
    }
}

fn sorted(mut houses: Vec<u8>) -> Vec<u8> {
    houses.sort_unstable();
    houses.dedup();
    houses
}

/// Per-chart significator table for all 9 rulers.
///
/// Built once per natal chart and passed by reference to scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignificatorHierarchy {
    sets: [SignificatorSet; 9],
}

impl SignificatorHierarchy {
    /// Build the hierarchy from a natal chart.
    ///
    /// A ruler missing from the chart gets four empty lists. A star lord
    /// missing from the chart contributes nothing at level 1.
    pub fn build(chart: &NatalChart) -> Self {
        let sets = ALL_GRAHAS.map(|graha| {
            let Some(planet) = chart.planet(graha) else {
                debug!(graha = %graha, "ruler absent from chart, no significations");
                return SignificatorSet::default();
            };
            let star_lord = nakshatra_lord(planet.nakshatra_index);

            let level1 = match chart.planet(star_lord) {
                Some(s) => vec![s.house],
                None => {
                    debug!(graha = %graha, star_lord = %star_lord, "star lord absent from chart");
                    Vec::new()
                }
            };

            SignificatorSet {
                level1,
                level2: vec![planet.house],
                level3: sorted(chart.owned_houses(star_lord)),
                level4: sorted(chart.owned_houses(graha)),
            }
        });

        debug!(
            rulers = sets.iter().filter(|s| !s.is_empty()).count(),
            "significator hierarchy built"
        );
        Self { sets }
    }

    /// Significator lists of one ruler.
    pub fn set(&self, graha: Graha) -> &SignificatorSet {
        &self.sets[graha.index() as usize]
    }

    /// Strongest level at which `graha` signifies `house`.
    pub fn strength(&self, graha: Graha, house: u8) -> Option<SignificationLevel> {
        self.set(graha).strongest_level(house)
    }

    /// Rulers signifying `house`, with their strongest level, strongest first.
    pub fn significators_of(&self, house: u8) -> Vec<(Graha, SignificationLevel)> {
        let mut out: Vec<_> = ALL_GRAHAS
            .into_iter()
            .filter_map(|g| self.strength(g, house).map(|l| (g, l)))
            .collect();
        out.sort_by_key(|&(g, l)| (l, g));
        out
    }

    /// Iterate `(ruler, set)` in ruler order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, &SignificatorSet)> {
        ALL_GRAHAS.into_iter().zip(self.sets.iter())
    }
}
