//! Coefficient lookup with fixed fallbacks.
//!
//! Lookups are exact: the caller rounds the utilization rate to one decimal
//! before resolving. A missing count or key resolves to the table default,
//! never to a neighbouring cell.

use tracing::debug;

use super::tables::{CoefficientKey, ExactTable, RangeTable};

/// Fallback Кр when [`resolve_exact`] finds no cell.
pub const EXACT_DEFAULT: f64 = 1.25;

/// Fallback Кр when [`resolve_range`] finds no cell.
pub const RANGE_DEFAULT: f64 = 0.7;

/// Resolves Кр from a table keyed by exact equipment count.
///
/// # Arguments
///
/// * `count` - Effective equipment count
/// * `coefficient` - Utilization rate, already rounded to one decimal
/// * `table` - Table to search
///
/// # Returns
///
/// The table cell, or [`EXACT_DEFAULT`] if the count or key is absent.
pub fn resolve_exact(count: i64, coefficient: f64, table: &ExactTable) -> f64 {
    CoefficientKey::from_rate(coefficient)
        .and_then(|key| table.lookup(count, key))
        .unwrap_or_else(|| {
            debug!(count, coefficient, "no exact table cell, using default");
            EXACT_DEFAULT
        })
}

/// Resolves Кр from a table keyed by count ranges.
///
/// # Arguments
///
/// * `count` - Effective equipment count
/// * `coefficient` - Utilization rate, already rounded to one decimal
/// * `table` - Table to search, in declaration order
///
/// # Returns
///
/// The cell from the first matching range, or [`RANGE_DEFAULT`].
pub fn resolve_range(count: i64, coefficient: f64, table: &RangeTable) -> f64 {
    CoefficientKey::from_rate(coefficient)
        .and_then(|key| table.lookup(count, key))
        .unwrap_or_else(|| {
            debug!(count, coefficient, "no range table cell, using default");
            RANGE_DEFAULT
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::tables::{BUSBAR_TABLE, GROUP_TABLE};

    #[test]
    fn exact_hit() {
        assert_eq!(resolve_exact(5, 0.4, &GROUP_TABLE), 1.15);
        assert_eq!(resolve_exact(2, 0.6, &GROUP_TABLE), 1.33);
        assert_eq!(resolve_exact(100, 0.1, &GROUP_TABLE), 1.0);
    }

    #[test]
    fn exact_unknown_count_falls_back() {
        assert_eq!(resolve_exact(999, 0.4, &GROUP_TABLE), EXACT_DEFAULT);
        assert_eq!(resolve_exact(11, 0.4, &GROUP_TABLE), 1.25);
        assert_eq!(resolve_exact(0, 0.0, &GROUP_TABLE), 1.25);
    }

    #[test]
    fn exact_unknown_key_falls_back() {
        assert_eq!(resolve_exact(5, 0.9, &GROUP_TABLE), 1.25);
        assert_eq!(resolve_exact(5, 0.45, &GROUP_TABLE), 1.25);
    }

    #[test]
    fn exact_does_not_interpolate_counts() {
        // 11 lies between the 10 and 12 rows
        assert_eq!(resolve_exact(11, 0.1, &GROUP_TABLE), EXACT_DEFAULT);
    }

    #[test]
    fn range_hit() {
        assert_eq!(resolve_range(7, 0.2, &BUSBAR_TABLE), 0.96);
        assert_eq!(resolve_range(1000, 0.3, &BUSBAR_TABLE), 0.70);
        assert_eq!(resolve_range(56, 0.3, &BUSBAR_TABLE), 0.70);
    }

    #[test]
    fn range_miss_falls_back() {
        crate::logging::init_test();
        assert_eq!(resolve_range(0, 0.3, &BUSBAR_TABLE), RANGE_DEFAULT);
        assert_eq!(resolve_range(-4, 0.3, &BUSBAR_TABLE), 0.7);
        assert_eq!(resolve_range(7, 0.8, &BUSBAR_TABLE), 0.7);
    }
}
