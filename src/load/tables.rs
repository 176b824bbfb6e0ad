//! Reference tables of the standardized active-power coefficient Кр.
//!
//! [`GROUP_TABLE`] holds the coefficients for supply networks up to 1 kV,
//! keyed by an exact effective equipment count. [`BUSBAR_TABLE`] holds the
//! coefficients on the LV busbars of workshop transformers, keyed by
//! inclusive count ranges, the last of which is open-ended.
//!
//! Utilization-rate keys are stored as integer hundredths so lookups never
//! compare floats for equality.

use std::fmt;

/// Utilization-rate key in integer hundredths (`0.15` is stored as `15`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoefficientKey(u16);

impl CoefficientKey {
    pub const K010: Self = Self(10);
    pub const K015: Self = Self(15);
    pub const K020: Self = Self(20);
    pub const K030: Self = Self(30);
    pub const K040: Self = Self(40);
    pub const K050: Self = Self(50);
    pub const K060: Self = Self(60);
    pub const K070: Self = Self(70);
    pub const K080: Self = Self(80);

    /// Converts a utilization rate to a key.
    ///
    /// Returns `None` unless the rate sits on a whole hundredth, so that a
    /// value like `0.123` never aliases onto `0.12`. The caller is expected
    /// to round the rate to one decimal first.
    pub fn from_rate(rate: f64) -> Option<Self> {
        let scaled = rate * 100.0;
        let hundredths = scaled.round();
        if !(0.0..=f64::from(u16::MAX)).contains(&hundredths) || (scaled - hundredths).abs() > 1e-6 {
            return None;
        }
        Some(Self(hundredths as u16))
    }

    /// Key value in hundredths.
    pub const fn hundredths(self) -> u16 {
        self.0
    }

    /// Key value as a utilization rate.
    pub fn as_rate(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for CoefficientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_rate())
    }
}

/// Column keys of [`GROUP_TABLE`].
pub const GROUP_KEYS: [CoefficientKey; 9] = [
    CoefficientKey::K010,
    CoefficientKey::K015,
    CoefficientKey::K020,
    CoefficientKey::K030,
    CoefficientKey::K040,
    CoefficientKey::K050,
    CoefficientKey::K060,
    CoefficientKey::K070,
    CoefficientKey::K080,
];

/// Column keys of [`BUSBAR_TABLE`]; there is no `0.8` column.
pub const BUSBAR_KEYS: [CoefficientKey; 8] = [
    CoefficientKey::K010,
    CoefficientKey::K015,
    CoefficientKey::K020,
    CoefficientKey::K030,
    CoefficientKey::K040,
    CoefficientKey::K050,
    CoefficientKey::K060,
    CoefficientKey::K070,
];

/// Row of an [`ExactTable`], matched on an exact equipment count.
#[derive(Debug)]
pub struct ExactEntry {
    /// Effective equipment count this row applies to.
    pub count: i64,
    /// Coefficients, one per table key in key order.
    pub values: &'static [f64],
}

/// Table keyed by exact equipment count.
#[derive(Debug)]
pub struct ExactTable {
    pub keys: &'static [CoefficientKey],
    pub entries: &'static [ExactEntry],
}

impl ExactTable {
    /// Coefficient for `count` and `key`, or `None` if either is absent.
    pub fn lookup(&self, count: i64, key: CoefficientKey) -> Option<f64> {
        let column = self.keys.iter().position(|k| *k == key)?;
        self.entries
            .iter()
            .filter(|entry| entry.count == count)
            .find_map(|entry| entry.values.get(column).copied())
    }
}

/// Row of a [`RangeTable`], matched on an inclusive count range.
#[derive(Debug)]
pub struct RangeEntry {
    /// Lower bound (inclusive).
    pub start: i64,
    /// Upper bound (inclusive); `None` means unbounded.
    pub end: Option<i64>,
    /// Coefficients, one per table key in key order.
    pub values: &'static [f64],
}

impl RangeEntry {
    /// Whether `count` falls within this row's range.
    pub fn contains(&self, count: i64) -> bool {
        count >= self.start && self.end.is_none_or(|end| count <= end)
    }
}

/// Table keyed by inclusive equipment-count ranges, scanned in order.
#[derive(Debug)]
pub struct RangeTable {
    pub keys: &'static [CoefficientKey],
    pub entries: &'static [RangeEntry],
}

impl RangeTable {
    /// Coefficient from the first row whose range contains `count` and which
    /// defines `key`, or `None`.
    ///
    /// Rows may overlap at their bounds (`9..=10` and `10..=25`); declaration
    /// order decides.
    pub fn lookup(&self, count: i64, key: CoefficientKey) -> Option<f64> {
        let column = self.keys.iter().position(|k| *k == key)?;
        self.entries
            .iter()
            .filter(|entry| entry.contains(count))
            .find_map(|entry| entry.values.get(column).copied())
    }
}

const fn exact(count: i64, values: &'static [f64]) -> ExactEntry {
    ExactEntry { count, values }
}

const fn range(start: i64, end: Option<i64>, values: &'static [f64]) -> RangeEntry {
    RangeEntry { start, end, values }
}

/// Кр for supply networks up to 1 kV.
#[rustfmt::skip]
pub static GROUP_TABLE: ExactTable = ExactTable {
    keys: &GROUP_KEYS,
    entries: &[
        //          0.1   0.15  0.2   0.3   0.4   0.5   0.6   0.7   0.8
        exact(1,   &[8.00, 5.33, 4.00, 2.67, 2.00, 1.60, 1.33, 1.14, 1.0]),
        exact(2,   &[6.22, 4.33, 3.39, 2.45, 1.98, 1.60, 1.33, 1.14, 1.0]),
        exact(3,   &[4.06, 2.89, 2.31, 1.74, 1.45, 1.34, 1.22, 1.14, 1.0]),
        exact(4,   &[3.23, 2.29, 1.83, 1.39, 1.21, 1.13, 1.08, 1.03, 1.0]),
        exact(5,   &[2.84, 2.06, 1.65, 1.31, 1.15, 1.10, 1.05, 1.01, 1.0]),
        exact(6,   &[2.64, 1.96, 1.62, 1.28, 1.14, 1.13, 1.06, 1.01, 1.0]),
        exact(7,   &[2.49, 1.86, 1.54, 1.23, 1.12, 1.10, 1.04, 1.0,  1.0]),
        exact(8,   &[2.37, 1.78, 1.48, 1.19, 1.10, 1.08, 1.02, 1.0,  1.0]),
        exact(9,   &[2.27, 1.71, 1.43, 1.16, 1.09, 1.07, 1.01, 1.0,  1.0]),
        exact(10,  &[2.18, 1.65, 1.39, 1.13, 1.07, 1.05, 1.0,  1.0,  1.0]),
        exact(12,  &[2.04, 1.56, 1.32, 1.08, 1.05, 1.03, 1.0,  1.0,  1.0]),
        exact(14,  &[1.94, 1.49, 1.27, 1.05, 1.02, 1.0,  1.0,  1.0,  1.0]),
        exact(16,  &[1.85, 1.43, 1.23, 1.02, 1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(18,  &[1.78, 1.39, 1.19, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(20,  &[1.72, 1.35, 1.16, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(25,  &[1.60, 1.27, 1.10, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(30,  &[1.51, 1.21, 1.05, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(35,  &[1.44, 1.16, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(40,  &[1.40, 1.13, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(50,  &[1.30, 1.07, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(60,  &[1.25, 1.03, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(80,  &[1.16, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
        exact(100, &[1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    ],
};

/// Кр on the LV busbars of workshop transformers and trunk busways.
#[rustfmt::skip]
pub static BUSBAR_TABLE: RangeTable = RangeTable {
    keys: &BUSBAR_KEYS,
    entries: &[
        //                      0.1   0.15  0.2   0.3   0.4   0.5   0.6   0.7
        range(1,  Some(1),  &[8.00, 5.33, 4.00, 2.67, 2.00, 1.60, 1.33, 1.14]),
        range(2,  Some(2),  &[5.01, 3.44, 2.69, 1.90, 1.52, 1.24, 1.11, 1.0]),
        range(3,  Some(3),  &[2.40, 2.17, 1.80, 1.42, 1.23, 1.14, 1.08, 1.0]),
        range(4,  Some(4),  &[2.28, 1.73, 1.46, 1.19, 1.06, 1.04, 1.0,  0.97]),
        range(5,  Some(5),  &[1.31, 1.12, 1.02, 1.0,  0.98, 0.96, 0.94, 0.93]),
        range(6,  Some(8),  &[1.20, 1.0,  0.96, 0.95, 0.94, 0.93, 0.92, 0.91]),
        range(9,  Some(10), &[1.10, 0.97, 0.91, 0.90, 0.90, 0.90, 0.90, 0.90]),
        range(10, Some(25), &[0.80, 0.80, 0.80, 0.85, 0.85, 0.85, 0.90, 0.90]),
        range(25, Some(50), &[0.75, 0.75, 0.75, 0.75, 0.75, 0.80, 0.85, 0.85]),
        range(50, None,     &[0.65, 0.65, 0.65, 0.70, 0.70, 0.75, 0.80, 0.80]),
    ],
};
