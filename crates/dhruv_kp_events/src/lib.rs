//! KP event scoring over the running Vimshottari dasha lords.
//!
//! This crate provides:
//! - Bounded 0-100 event scores with a factor breakdown
//! - The cuspal promise/denial check for each event category
//! - An overridable event catalog and scoring weights (TOML)
//! - Day-by-day event calendars
//!
//! Natal significations come from `dhruv_kp_base`; an [`EventEngine`] owns
//! the hierarchy for one chart and refuses to score until one is attached.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod promise;
pub mod scorer;
pub mod time;

pub use calendar::{BirthData, CalendarDay, DayEvent, TransitSource, generate_calendar};
pub use catalog::{EventCategory, Polarity, default_catalog};
pub use config::{KpConfig, PromiseConfig, ScoringConfig};
pub use error::EventError;
pub use promise::{CuspalPromise, PromiseVerdict, cuspal_promise, detriment_houses};
pub use scorer::{
    EventEngine, EventFactor, EventScore, FactorKind, NatalContext, TransitSnapshot, score_event,
};
pub use time::{jd_from_date, jd_from_datetime};
