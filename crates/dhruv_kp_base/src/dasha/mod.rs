//! Vimshottari dasha (planetary period) resolution.
//!
//! Resolves the 4 nested levels (Mahadasha through Sookshmadasha) active at
//! a query instant from the natal Moon longitude. Every level is a
//! proportional subdivision of its parent over the 120-year ruler cycle.

pub mod balance;
pub mod timeline;
pub mod types;

pub use balance::{DashaBalance, birth_balance};
pub use timeline::{dasha_chain, elapsed_years, mahadasha_sequence, periods_at_years};
pub use types::{ALL_DASHA_LEVELS, DASHA_DEPTH, DashaChain, DashaLevel, PeriodNode};
