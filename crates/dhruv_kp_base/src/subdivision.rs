//! Proportional subdivision of a span over the Vimshottari ruler cycle.
//!
//! One law serves every nested level, whether the span is measured in years
//! (dasha periods) or degrees (KP sub-lords):
//!
//! `allotment(ruler) = span * ruler_years / 120`
//!
//! walked in cycle order starting from the parent ruler itself. Allotments
//! are half-open `[start, end)` offsets from the start of the span.

use serde::Serialize;
use tracing::debug;

use crate::graha::Graha;
use crate::period_table::{TOTAL_CYCLE_YEARS, cycle_from, dasha_years};

/// One ruler's share of a subdivided span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Allotment {
    /// Ruler governing this share.
    pub ruler: Graha,
    /// Offset of the share's start, inclusive.
    pub start: f64,
    /// Offset of the share's end, exclusive.
    pub end: f64,
}

impl Allotment {
    /// Length of the share.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `offset` falls in `[start, end)`.
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Split `span` into 9 allotments in cycle order beginning with `first`.
///
/// The last allotment's end is snapped to `span` so that drift never opens a
/// gap at the far boundary.
pub fn proportional_allotments(first: Graha, span: f64) -> [Allotment; 9] {
    let order = cycle_from(first);
    let mut cursor = 0.0;
    let mut out = [Allotment {
        ruler: first,
        start: 0.0,
        end: 0.0,
    }; 9];

    for (slot, ruler) in out.iter_mut().zip(order) {
        let end = cursor + span * dasha_years(ruler) / TOTAL_CYCLE_YEARS;
        *slot = Allotment {
            ruler,
            start: cursor,
            end,
        };
        cursor = end;
    }

    out[8].end = span;
    out
}

/// Find the allotment containing `offset`.
///
/// Negative drift is clamped to the first allotment. An offset at or past the
/// far boundary falls back to the last allotment.
pub fn locate(allotments: &[Allotment; 9], offset: f64) -> Allotment {
    let offset = offset.max(0.0);
    match allotments.iter().find(|a| a.contains(offset)) {
        Some(a) => *a,
        None => {
            let last = allotments[8];
            debug!(
                offset,
                span_end = last.end,
                ruler = %last.ruler,
                "no allotment contains offset, falling back to last"
            );
            last
        }
    }
}

/// Resolve `N` nested levels of subdivision at `offset` within `span`.
///
/// Level k+1 subdivides the allotment found at level k, starting its cycle
/// from that allotment's ruler. Returned allotments carry offsets relative
/// to the outermost span.
pub fn nested_allotments<const N: usize>(first: Graha, span: f64, offset: f64) -> [Allotment; N] {
    let mut out = [Allotment {
        ruler: first,
        start: 0.0,
        end: span,
    }; N];
    let mut ruler = first;
    let mut base = 0.0;
    let mut current_span = span;
    let mut relative = offset;

    for slot in out.iter_mut() {
        let hit = locate(&proportional_allotments(ruler, current_span), relative);
        *slot = Allotment {
            ruler: hit.ruler,
            start: base + hit.start,
            end: base + hit.end,
        };
        relative -= hit.start;
        base += hit.start;
        current_span = hit.length();
        ruler = hit.ruler;
    }

    out
}
