//! Event probability scoring from the running dasha lords.
//!
//! Each of the 4 dasha lords earns its level weight in proportion to how
//! strongly it signifies the event's houses, measured against the case where
//! every required house is signified at level 1. Two bonuses follow: synergy
//! when all 4 lords take part, and a flat transit bonus when the transiting
//! Moon's star lord signifies an event house. The result is capped at 100.

use dhruv_kp_base::{
    ALL_DASHA_LEVELS, DASHA_DEPTH, DashaChain, DashaLevel, Graha, HouseCusps, KpError, NatalChart,
    SignificationLevel, SignificatorHierarchy, star_lord_of,
};
use serde::Serialize;
use tracing::debug;

use crate::catalog::{self, EventCategory};
use crate::config::{KpConfig, ScoringConfig};
use crate::error::EventError;
use crate::promise::{CuspalPromise, cuspal_promise};

const MAX_SCORE: f64 = 100.0;

/// Transit positions for the scoring date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitSnapshot {
    /// Sidereal longitude of the transiting Moon.
    pub moon_longitude: f64,
}

/// What produced a score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FactorKind {
    /// A dasha lord signifying event houses.
    Dasha { level: DashaLevel, ruler: Graha },
    /// All 4 dasha lords signify the event.
    Synergy,
    /// The transiting Moon's star lord signifies the event.
    Transit { star_lord: Graha },
}

/// One contribution to an event score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventFactor {
    pub kind: FactorKind,
    /// Points added to the running score.
    pub points: f64,
    /// Matched houses with the strongest level at which each is signified.
    pub houses: Vec<(u8, SignificationLevel)>,
}

/// Bounded score for one event category on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventScore {
    pub event_id: String,
    /// Rounded score, 0-100.
    pub score: u8,
    /// Contributions in the order they were applied.
    pub factors: Vec<EventFactor>,
}

fn required_houses(event: &EventCategory) -> Vec<u8> {
    let mut houses = event.houses.clone();
    houses.sort_unstable();
    houses.dedup();
    houses
}

fn matched_houses(
    hierarchy: &SignificatorHierarchy,
    ruler: Graha,
    required: &[u8],
) -> Vec<(u8, SignificationLevel)> {
    required
        .iter()
        .filter_map(|&h| hierarchy.strength(ruler, h).map(|l| (h, l)))
        .collect()
}

/// Score `event` for a 4-level dasha lord chain.
///
/// Pure: the same inputs always give the same score.
pub fn score_event(
    event: &EventCategory,
    rulers: &[Graha; DASHA_DEPTH],
    hierarchy: &SignificatorHierarchy,
    transit: Option<&TransitSnapshot>,
    config: &ScoringConfig,
) -> EventScore {
    let required = required_houses(event);
    let level_max = required.len() as f64 * config.strength_multipliers[0];
    let mut factors = Vec::new();
    let mut running = 0.0;

    if level_max > 0.0 {
        for (level, &ruler) in ALL_DASHA_LEVELS.iter().zip(rulers) {
            let houses = matched_houses(hierarchy, ruler, &required);
            if houses.is_empty() {
                continue;
            }
            let weighted: f64 = houses
                .iter()
                .map(|&(_, l)| config.strength_multipliers[l.index()])
                .sum();
            let points = weighted / level_max * config.level_weights[level.depth()];
            running += points;
            factors.push(EventFactor {
                kind: FactorKind::Dasha {
                    level: *level,
                    ruler,
                },
                points,
                houses,
            });
        }
    }

    let all_levels = rulers
        .iter()
        .all(|&r| hierarchy.set(r).signifies_any(&required));
    if all_levels {
        let bonus = (running * config.synergy_fraction).min(MAX_SCORE - running).max(0.0);
        if bonus > 0.0 {
            running += bonus;
            factors.push(EventFactor {
                kind: FactorKind::Synergy,
                points: bonus,
                houses: Vec::new(),
            });
        }
    }
    running = running.min(MAX_SCORE);

    if let Some(t) = transit {
        let star_lord = star_lord_of(t.moon_longitude);
        let houses = matched_houses(hierarchy, star_lord, &required);
        if !houses.is_empty() {
            let bonus = config.transit_bonus.min(MAX_SCORE - running).max(0.0);
            running += bonus;
            factors.push(EventFactor {
                kind: FactorKind::Transit { star_lord },
                points: bonus,
                houses,
            });
        }
    }

    EventScore {
        event_id: event.id.clone(),
        score: running.round().clamp(0.0, MAX_SCORE) as u8,
        factors,
    }
}

/// Natal state the engine scores against, built once per chart.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalContext {
    pub hierarchy: SignificatorHierarchy,
    /// Cusps for the promise check; equal houses when the chart has none.
    pub cusps: HouseCusps,
}

impl NatalContext {
    pub fn from_chart(chart: &NatalChart) -> Self {
        Self {
            hierarchy: SignificatorHierarchy::build(chart),
            cusps: chart.cusps_or_equal(),
        }
    }
}

/// Event scorer bound to a configuration and, once attached, a natal chart.
///
/// Scoring without an attached chart fails with `UndefinedHierarchy`
/// rather than returning empty significations.
#[derive(Debug, Clone)]
pub struct EventEngine {
    config: KpConfig,
    natal: Option<NatalContext>,
}

impl EventEngine {
    /// Engine over a validated configuration, with no chart attached.
    pub fn new(config: KpConfig) -> Result<Self, EventError> {
        config.validate()?;
        Ok(Self {
            config,
            natal: None,
        })
    }

    /// Engine with the default configuration, bound to `chart`.
    pub fn for_chart(chart: &NatalChart) -> Self {
        Self {
            config: KpConfig::default(),
            natal: Some(NatalContext::from_chart(chart)),
        }
    }

    /// Build and attach the hierarchy for `chart`, replacing any previous one.
    pub fn attach_chart(&mut self, chart: &NatalChart) {
        self.natal = Some(NatalContext::from_chart(chart));
    }

    /// Attach a prebuilt natal context.
    pub fn attach(&mut self, natal: NatalContext) {
        self.natal = Some(natal);
    }

    pub fn config(&self) -> &KpConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[EventCategory] {
        &self.config.events
    }

    /// Look up a category in the configured catalog.
    pub fn event(&self, id: &str) -> Result<&EventCategory, EventError> {
        catalog::find(&self.config.events, id).ok_or_else(|| EventError::UnknownEvent(id.into()))
    }

    /// The attached natal context.
    pub fn natal(&self) -> Result<&NatalContext, EventError> {
        self.natal.as_ref().ok_or_else(|| {
            debug!("scoring requested with no chart attached");
            EventError::Kp(KpError::UndefinedHierarchy)
        })
    }

    pub fn hierarchy(&self) -> Result<&SignificatorHierarchy, EventError> {
        self.natal().map(|n| &n.hierarchy)
    }

    /// Score a category against a dasha chain.
    pub fn score_category(
        &self,
        event: &EventCategory,
        chain: &DashaChain,
        transit: Option<&TransitSnapshot>,
    ) -> Result<EventScore, EventError> {
        let hierarchy = self.hierarchy()?;
        Ok(score_event(
            event,
            &chain.rulers(),
            hierarchy,
            transit,
            &self.config.scoring,
        ))
    }

    /// Score a catalog event by id.
    pub fn score(
        &self,
        event_id: &str,
        chain: &DashaChain,
        transit: Option<&TransitSnapshot>,
    ) -> Result<EventScore, EventError> {
        let hierarchy = self.hierarchy()?;
        let event = self.event(event_id)?;
        Ok(score_event(
            event,
            &chain.rulers(),
            hierarchy,
            transit,
            &self.config.scoring,
        ))
    }

    /// Cuspal promise verdict for a category.
    pub fn promise_category(&self, event: &EventCategory) -> Result<CuspalPromise, EventError> {
        let natal = self.natal()?;
        Ok(cuspal_promise(
            event,
            &natal.cusps,
            &natal.hierarchy,
            &self.config.promise,
        ))
    }

    /// Cuspal promise verdict for a catalog event by id.
    pub fn promise(&self, event_id: &str) -> Result<CuspalPromise, EventError> {
        let event = self.event(event_id)?;
        self.promise_category(event)
    }
}
