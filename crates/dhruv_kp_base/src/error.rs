//! Error types for KP base calculations.
//!
//! Subdivision boundary drift, dasha cycle overflow and significations that
//! reference an absent body are resolved in place and never reach callers as
//! errors. Only conditions the caller must act on are represented here.

use thiserror::Error;

/// Errors from KP base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum KpError {
    /// No ascendant record was supplied and there are no cusps to take it from.
    #[error("missing ascendant: supply an Ascendant record or house cusps")]
    MissingAscendant,
    /// House cusp sequence is unusable.
    #[error("invalid house cusps: {0}")]
    InvalidCusps(&'static str),
    /// A longitude from the position provider was NaN or infinite.
    #[error("invalid longitude for {0}: not a finite number")]
    InvalidLongitude(String),
    /// Scoring was requested before a signification hierarchy existed.
    #[error("signification hierarchy has not been built for this chart")]
    UndefinedHierarchy,
}
