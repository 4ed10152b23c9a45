use crate::dates;
use crate::types::OrderStrategy;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Records without a manual position sort after every explicitly ordered one.
pub const ORDER_FALLBACK: i64 = 999;

// ---------------------------------------------------------------------------
// Orderable
// ---------------------------------------------------------------------------

/// Sort-key access for a displayable record. Entities override only the
/// accessors they actually carry; the defaults mean "no such field".
pub trait Orderable {
    fn display_order(&self) -> Option<i64> {
        None
    }

    fn primary_date(&self) -> Option<&str> {
        None
    }

    fn secondary_date(&self) -> Option<&str> {
        None
    }

    fn status_tag(&self) -> Option<&str> {
        None
    }

    /// Primary date if it parses, else the secondary date, else unset.
    /// Unset sorts as the oldest possible date.
    fn effective_date(&self) -> Option<NaiveDate> {
        self.primary_date()
            .and_then(dates::parse_flexible)
            .or_else(|| self.secondary_date().and_then(dates::parse_flexible))
    }

    /// A record is in progress iff its status tag mentions "progress",
    /// case-insensitively ("Publication in Process" does not count).
    fn is_in_progress(&self) -> bool {
        self.status_tag()
            .map(|s| s.to_lowercase().contains("progress"))
            .unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// order_for_display
// ---------------------------------------------------------------------------

/// Produce the presentation ordering of a snapshot. The input is left
/// untouched; the sort is stable, so records tied on every key keep their
/// fetch order. Sorting an already-sorted list is a no-op.
pub fn order_for_display<T: Orderable + Clone>(records: &[T], strategy: OrderStrategy) -> Vec<T> {
    let mut out: Vec<T> = records.to_vec();
    match strategy {
        OrderStrategy::ManualThenRecency => out.sort_by(manual_then_recency),
        OrderStrategy::StatusThenRecency => out.sort_by(status_then_recency),
    }
    out
}

fn manual_then_recency<T: Orderable>(a: &T, b: &T) -> Ordering {
    let a_order = a.display_order().unwrap_or(ORDER_FALLBACK);
    let b_order = b.display_order().unwrap_or(ORDER_FALLBACK);
    a_order.cmp(&b_order).then_with(|| recency_desc(a, b))
}

fn status_then_recency<T: Orderable>(a: &T, b: &T) -> Ordering {
    b.is_in_progress()
        .cmp(&a.is_in_progress())
        .then_with(|| recency_desc(a, b))
}

/// Later dates first; records with no usable date last.
fn recency_desc<T: Orderable>(a: &T, b: &T) -> Ordering {
    b.effective_date().cmp(&a.effective_date())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
