//! Decimal rounding rules used by the load calculation.
//!
//! Two rules coexist and must not be swapped: table keys are rounded half
//! away from zero, design currents are floored.

/// Rounds to one decimal place, half away from zero.
///
/// Used to snap utilization rates onto the reference-table key set.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Floors to one decimal place.
pub fn truncate_to_tenth(value: f64) -> f64 {
    (value * 10.0).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_goes_half_away_from_zero() {
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(0.3227), 0.3);
        assert_eq!(round_to_tenth(0.65), 0.7);
        assert_eq!(round_to_tenth(-0.25), -0.3);
    }

    #[test]
    fn round_lands_on_table_literals() {
        for tenths in 0..=10 {
            let rate = f64::from(tenths) / 10.0 + 0.01;
            assert_eq!(round_to_tenth(rate), f64::from(tenths) / 10.0);
        }
    }

    #[test]
    fn truncate_never_rounds_up() {
        assert_eq!(truncate_to_tenth(2.15), 2.1);
        assert_eq!(truncate_to_tenth(2.19), 2.1);
        assert_eq!(truncate_to_tenth(2.1), 2.1);
        assert_eq!(truncate_to_tenth(0.0), 0.0);
    }

    #[test]
    fn truncate_floors_negative_values() {
        assert_eq!(truncate_to_tenth(-2.11), -2.2);
    }
}
