//! Day-by-day event calendar.
//!
//! Each day is scored independently from the dasha chain at 00:00 UTC and,
//! when a transit source is supplied, the day's transiting Moon. Promise
//! verdicts do not depend on the date and are computed once per category.

use chrono::{Days, NaiveDate};
use dhruv_kp_base::{DashaChain, Graha, NatalChart, dasha_chain};
use serde::Serialize;
use tracing::info;

use crate::catalog::{EventCategory, Polarity};
use crate::error::EventError;
use crate::promise::CuspalPromise;
use crate::scorer::{EventEngine, EventScore, TransitSnapshot};
use crate::time::jd_from_date;

/// Supplies transit positions for a calendar date.
pub trait TransitSource {
    /// Sidereal longitude of the transiting Moon on `date`, if known.
    fn moon_longitude(&self, date: NaiveDate) -> Option<f64>;
}

impl<F> TransitSource for F
where
    F: Fn(NaiveDate) -> Option<f64>,
{
    fn moon_longitude(&self, date: NaiveDate) -> Option<f64> {
        self(date)
    }
}

/// Birth inputs that drive the dasha timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthData {
    /// Natal Moon sidereal longitude.
    pub moon_longitude: f64,
    /// Birth instant, JD UTC.
    pub birth_jd: f64,
}

impl BirthData {
    /// Take the Moon from a chart. None if the chart has no Moon.
    pub fn from_chart(chart: &NatalChart, birth_jd: f64) -> Option<Self> {
        chart
            .planet(Graha::Chandra)
            .map(|moon| Self {
                moon_longitude: moon.longitude,
                birth_jd,
            })
    }
}

/// One category's result for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEvent {
    pub event_id: String,
    pub name: String,
    pub polarity: Polarity,
    pub score: EventScore,
    pub promise: CuspalPromise,
}

/// All results for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub dasha: DashaChain,
    pub events: Vec<DayEvent>,
    /// Highest score among the day's events, 0 when there are none.
    pub max_score: u8,
    /// Id of the highest-scoring event; the latest in catalog order on ties.
    pub dominant: Option<String>,
}

/// Resolve the catalog subset to score. `None` selects the whole catalog.
fn select_events<'a>(
    engine: &'a EventEngine,
    selected: Option<&[&str]>,
) -> Result<Vec<&'a EventCategory>, EventError> {
    match selected {
        None => Ok(engine.catalog().iter().collect()),
        Some(ids) => {
            if let Some(unknown) = ids.iter().find(|id| engine.event(id).is_err()) {
                return Err(EventError::UnknownEvent((*unknown).to_string()));
            }
            // Keep catalog order regardless of request order
            Ok(engine
                .catalog()
                .iter()
                .filter(|e| ids.contains(&e.id.as_str()))
                .collect())
        }
    }
}

/// Generate `days` consecutive calendar days starting at `start`.
pub fn generate_calendar(
    engine: &EventEngine,
    birth: &BirthData,
    start: NaiveDate,
    days: u32,
    selected: Option<&[&str]>,
    transits: Option<&dyn TransitSource>,
) -> Result<Vec<CalendarDay>, EventError> {
    engine.natal()?;
    let events = select_events(engine, selected)?;
    let promises = events
        .iter()
        .map(|e| engine.promise_category(e))
        .collect::<Result<Vec<_>, _>>()?;

    info!(%start, days, events = events.len(), "generating event calendar");

    let mut calendar = Vec::with_capacity(days as usize);
    for offset in 0..days {
        let Some(date) = start.checked_add_days(Days::new(offset as u64)) else {
            break;
        };
        let chain = dasha_chain(birth.moon_longitude, birth.birth_jd, jd_from_date(date));
        let transit = transits
            .and_then(|t| t.moon_longitude(date))
            .map(|moon_longitude| TransitSnapshot { moon_longitude });

        let mut day_events = Vec::with_capacity(events.len());
        for (event, promise) in events.iter().zip(&promises) {
            day_events.push(DayEvent {
                event_id: event.id.clone(),
                name: event.name.clone(),
                polarity: event.polarity,
                score: engine.score_category(event, &chain, transit.as_ref())?,
                promise: promise.clone(),
            });
        }

        let mut dominant: Option<&DayEvent> = None;
        for e in &day_events {
            if dominant.is_none_or(|d| e.score.score >= d.score.score) {
                dominant = Some(e);
            }
        }
        let max_score = dominant.map_or(0, |d| d.score.score);
        let dominant = dominant.map(|d| d.event_id.clone());

        calendar.push(CalendarDay {
            date,
            dasha: chain,
            events: day_events,
            max_score,
            dominant,
        });
    }

    info!(days = calendar.len(), "event calendar generated");
    Ok(calendar)
}
