//! Cuspal promise check.
//!
//! An event is promised in the chart when the sub-lord of its primary
//! house cusp signifies the event's houses. The detriment set is the house
//! immediately before each required house (the 12th from it), excluding
//! houses that are themselves required.

use dhruv_kp_base::util::twelfth_from;
use dhruv_kp_base::{Graha, HouseCusps, SignificatorHierarchy, kp_lords};
use serde::Serialize;

use crate::catalog::EventCategory;
use crate::config::PromiseConfig;

/// Outcome of the cuspal promise check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromiseVerdict {
    /// Sub-lord signifies required houses and no detriment house.
    Promised,
    /// Sub-lord signifies both required and detriment houses.
    PromisedWithObstacles,
    /// Sub-lord signifies neither.
    Neutral,
    /// Sub-lord signifies only detriment houses.
    Denied,
}

impl PromiseVerdict {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Promised => "Promised",
            Self::PromisedWithObstacles => "Promised with obstacles",
            Self::Neutral => "Neutral",
            Self::Denied => "Denied",
        }
    }
}

/// Promise verdict for one event category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuspalPromise {
    pub event_id: String,
    pub verdict: PromiseVerdict,
    /// House whose cusp was examined.
    pub cusp_house: u8,
    pub cusp_longitude: f64,
    pub sub_lord: Graha,
    /// Required houses the sub-lord signifies.
    pub supporting_houses: Vec<u8>,
    /// Detriment houses the sub-lord signifies.
    pub opposing_houses: Vec<u8>,
    /// Verdict strength, 0-100.
    pub strength: u8,
    pub justification: String,
}

/// Houses in the 12th from each required house, minus the required ones.
pub fn detriment_houses(required: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = required
        .iter()
        .map(|&h| twelfth_from(h))
        .filter(|h| !required.contains(h))
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

fn join_houses(houses: &[u8]) -> String {
    houses
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Evaluate whether `event` is promised by the chart.
pub fn cuspal_promise(
    event: &EventCategory,
    cusps: &HouseCusps,
    hierarchy: &SignificatorHierarchy,
    config: &PromiseConfig,
) -> CuspalPromise {
    let cusp_longitude = cusps.cusp(event.primary_house);
    let lords = kp_lords(cusp_longitude);
    let sub_lord = lords.sub_lord;
    let signified = hierarchy.set(sub_lord).all_houses();
    let detriment = detriment_houses(&event.houses);

    let supporting: Vec<u8> = signified
        .iter()
        .copied()
        .filter(|h| event.requires(*h))
        .collect();
    let opposing: Vec<u8> = signified
        .iter()
        .copied()
        .filter(|h| detriment.contains(h))
        .collect();

    let (verdict, strength, detail) = match (supporting.is_empty(), opposing.is_empty()) {
        (false, true) => (
            PromiseVerdict::Promised,
            config.promised,
            format!("signifies required houses {}", join_houses(&supporting)),
        ),
        (false, false) => (
            PromiseVerdict::PromisedWithObstacles,
            config.promised_with_obstacles,
            format!(
                "signifies required houses {} but also detriment houses {}",
                join_houses(&supporting),
                join_houses(&opposing)
            ),
        ),
        (true, false) => (
            PromiseVerdict::Denied,
            config.denied,
            format!("signifies only detriment houses {}", join_houses(&opposing)),
        ),
        (true, true) => (
            PromiseVerdict::Neutral,
            config.neutral,
            format!("signifies none of houses {}", join_houses(&event.houses)),
        ),
    };
    let justification = format!(
        "{}: sub-lord {sub_lord} of cusp {} ({} in {}) {detail}",
        verdict.name(),
        event.primary_house,
        lords.nakshatra.name(),
        lords.rashi.name(),
    );

    CuspalPromise {
        event_id: event.id.clone(),
        verdict,
        cusp_house: event.primary_house,
        cusp_longitude,
        sub_lord,
        supporting_houses: supporting,
        opposing_houses: opposing,
        strength,
        justification,
    }
}
