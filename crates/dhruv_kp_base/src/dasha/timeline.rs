//! Vimshottari timeline: active periods at a query instant.
//!
//! The birth mahadasha starts at birth and runs for the balance only. Its
//! sub-periods are still laid out over the ruler's full period, measured from
//! birth, so at birth every level is the birth ruler. Later mahadashas run
//! their full length. Past 120 years the cycle restarts from the birth ruler
//! with nothing spent.

use tracing::debug;

use crate::period_table::{DAYS_PER_YEAR, TOTAL_CYCLE_YEARS, dasha_years, next_in_cycle};
use crate::subdivision::{Allotment, locate, nested_allotments, proportional_allotments};

use super::balance::{DashaBalance, birth_balance};
use super::types::{ALL_DASHA_LEVELS, DASHA_DEPTH, DashaChain, DashaLevel, PeriodNode};

/// Years between two JD UTC instants.
pub fn elapsed_years(birth_jd: f64, query_jd: f64) -> f64 {
    (query_jd - birth_jd) / DAYS_PER_YEAR
}

/// Active dasha chain at `query_jd` for a natal Moon longitude and birth JD.
pub fn dasha_chain(moon_sidereal_lon: f64, birth_jd: f64, query_jd: f64) -> DashaChain {
    let elapsed = elapsed_years(birth_jd, query_jd);
    let (cycle, periods) = periods_at_years(moon_sidereal_lon, elapsed);
    DashaChain {
        birth_jd,
        query_jd,
        elapsed_years: elapsed,
        cycle,
        periods,
    }
}

/// Mahadasha running `elapsed` years after birth (`elapsed >= 0`).
///
/// Between the end of the first cycle's ninth period (`120 - spent` years)
/// and the wrap at 120 years the birth ruler runs again for the years that
/// were spent before birth.
fn mahadasha_at(balance: &DashaBalance, elapsed: f64) -> (i32, PeriodNode) {
    let cycle = (elapsed / TOTAL_CYCLE_YEARS).floor();
    let within = elapsed - cycle * TOTAL_CYCLE_YEARS;
    let origin = cycle * TOTAL_CYCLE_YEARS;
    let spent = if cycle == 0.0 { balance.spent_years() } else { 0.0 };
    if cycle != 0.0 {
        debug!(elapsed, cycle, "dasha query wrapped past one 120-year cycle");
    }

    let (ruler, start, end) = if within + spent < TOTAL_CYCLE_YEARS {
        let hit = locate(
            &proportional_allotments(balance.ruler, TOTAL_CYCLE_YEARS),
            within + spent,
        );
        (hit.ruler, (hit.start - spent).max(0.0), hit.end - spent)
    } else {
        (balance.ruler, TOTAL_CYCLE_YEARS - spent, TOTAL_CYCLE_YEARS)
    };

    let node = PeriodNode {
        ruler,
        level: DashaLevel::Mahadasha,
        start_years: origin + start,
        duration_years: end - start,
    };
    (cycle as i32, node)
}

/// Active periods `elapsed_years` after birth, with the 0-based cycle index.
///
/// Sub-periods divide the mahadasha ruler's full period from the start of
/// the mahadasha; any that would outlast a shortened mahadasha are cut at
/// its end. Queries before birth resolve as at birth.
pub fn periods_at_years(
    moon_sidereal_lon: f64,
    elapsed_years: f64,
) -> (i32, [PeriodNode; DASHA_DEPTH]) {
    let balance = birth_balance(moon_sidereal_lon);
    if elapsed_years < 0.0 {
        debug!(elapsed_years, "dasha query before birth, resolving at birth");
    }
    let elapsed = elapsed_years.max(0.0);
    let (cycle, md) = mahadasha_at(&balance, elapsed);

    let subs: [Allotment; DASHA_DEPTH - 1] = nested_allotments(
        md.ruler,
        dasha_years(md.ruler),
        elapsed - md.start_years,
    );

    let periods = std::array::from_fn(|i| {
        if i == 0 {
            return md;
        }
        let sub = subs[i - 1];
        let start = md.start_years + sub.start;
        let end = (md.start_years + sub.end).min(md.end_years());
        PeriodNode {
            ruler: sub.ruler,
            level: ALL_DASHA_LEVELS[i],
            start_years: start,
            duration_years: end - start,
        }
    });
    (cycle, periods)
}

/// Mahadasha periods from birth for `cycles` full 120-year cycles.
///
/// The first period lasts only the balance. When part of the birth period
/// was spent before birth, the first cycle closes with the birth ruler again
/// for those spent years, so every cycle spans exactly 120 years.
pub fn mahadasha_sequence(moon_sidereal_lon: f64, cycles: u32) -> Vec<PeriodNode> {
    let balance = birth_balance(moon_sidereal_lon);
    let spent = balance.spent_years();
    let mut periods = Vec::with_capacity(10 * cycles as usize);

    for cycle in 0..cycles {
        let mut cursor = f64::from(cycle) * TOTAL_CYCLE_YEARS;
        let mut ruler = balance.ruler;
        for i in 0..9 {
            let duration = if cycle == 0 && i == 0 {
                balance.balance_years
            } else {
                dasha_years(ruler)
            };
            periods.push(PeriodNode {
                ruler,
                level: DashaLevel::Mahadasha,
                start_years: cursor,
                duration_years: duration,
            });
            cursor += duration;
            ruler = next_in_cycle(ruler);
        }
        if cycle == 0 && spent > 0.0 {
            periods.push(PeriodNode {
                ruler: balance.ruler,
                level: DashaLevel::Mahadasha,
                start_years: TOTAL_CYCLE_YEARS - spent,
                duration_years: spent,
            });
        }
    }

    periods
}
