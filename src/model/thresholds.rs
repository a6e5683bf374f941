//! Fixed published constants of the three nomograms. Nothing here is fitted
//! at runtime; values are transcribed from the source publications.

use serde::Serialize;

use crate::model::bsa::{MiskolcBsa, ToguriBsa};
use crate::model::measurement::Quantity;

/// Percentile levels drawn for the full-range nomograms.
pub const PERCENTILES: [u8; 7] = [5, 10, 25, 50, 75, 90, 95];

/// Standard-normal cut points matching `PERCENTILES`.
pub const Z_CUTS: [f64; 7] = [-1.645, -1.28, -0.675, 0.0, 0.675, 1.28, 1.645];

/// z-span between the 5th and 95th percentile (2 * 1.645).
pub const Z_SPAN_5_95: f64 = 3.29;

/// Liverpool (Haylen et al.) multipliers of sqrt(volume), 5th..95th percentile.
pub const LIVERPOOL_QMAX_LIMITS: [f64; 7] = [0.75, 0.95, 1.20, 1.50, 1.80, 2.10, 2.35];
pub const LIVERPOOL_QAVE_LIMITS: [f64; 7] = [0.45, 0.55, 0.70, 0.875, 1.05, 1.20, 1.30];

pub fn liverpool_limits(quantity: Quantity) -> &'static [f64; 7] {
    match quantity {
        Quantity::Qmax => &LIVERPOOL_QMAX_LIMITS,
        Quantity::Qave => &LIVERPOOL_QAVE_LIMITS,
    }
}

/// 5th/95th percentile lines as affine functions of ln(volume + 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MiskolcCoefficients {
    pub a5: f64,
    pub b5: f64,
    pub a95: f64,
    pub b95: f64,
}

impl MiskolcCoefficients {
    pub const fn new(a5: f64, b5: f64, a95: f64, b95: f64) -> Self {
        Self { a5, b5, a95, b95 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MiskolcProfile {
    pub qmax: MiskolcCoefficients,
    pub qave: MiskolcCoefficients,
}

impl MiskolcProfile {
    pub fn coefficients(&self, quantity: Quantity) -> &MiskolcCoefficients {
        match quantity {
            Quantity::Qmax => &self.qmax,
            Quantity::Qave => &self.qave,
        }
    }
}

// Szabó & Fegyverneki, 1995.
pub const MISKOLC_SMALL: MiskolcProfile = MiskolcProfile {
    qmax: MiskolcCoefficients::new(5.7244, -13.6033, 3.8131, 6.5131),
    qave: MiskolcCoefficients::new(3.4010, -7.4933, 4.9999, -7.8369),
};

pub const MISKOLC_MEDIUM: MiskolcProfile = MiskolcProfile {
    qmax: MiskolcCoefficients::new(5.2440, -14.1997, 4.9923, 3.4560),
    qave: MiskolcCoefficients::new(3.1713, -8.5399, 4.0800, -2.6337),
};

pub const MISKOLC_LARGE: MiskolcProfile = MiskolcProfile {
    qmax: MiskolcCoefficients::new(5.4150, -16.1122, 8.5447, -7.4559),
    qave: MiskolcCoefficients::new(4.3957, -14.5260, 6.8810, -11.0350),
};

pub fn miskolc_profile(bsa: MiskolcBsa) -> &'static MiskolcProfile {
    match bsa {
        MiskolcBsa::Small => &MISKOLC_SMALL,
        MiskolcBsa::Medium => &MISKOLC_MEDIUM,
        MiskolcBsa::Large => &MISKOLC_LARGE,
    }
}

/// Percentile levels of the Toguri screening table columns.
pub const TOGURI_PERCENTILES: [u8; 5] = [5, 10, 15, 20, 25];

/// Volume bracket edges used when drawing the Toguri step curves.
pub const TOGURI_BRACKET_EDGES: [f64; 5] = [0.0, 62.5, 112.5, 162.5, 300.0];

/// One volume bracket of a Toguri table: applies to volumes strictly below
/// `upper_volume`. Thresholds are kept in published column order (5th..25th),
/// which is not monotonic in every row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToguriRow {
    pub upper_volume: f64,
    pub thresholds: [f64; 5],
}

impl ToguriRow {
    pub const fn new(upper_volume: f64, thresholds: [f64; 5]) -> Self {
        Self {
            upper_volume,
            thresholds,
        }
    }

    /// Thresholds in ascending order, as used for classification.
    pub fn sorted_thresholds(&self) -> [f64; 5] {
        let mut t = self.thresholds;
        t.sort_by(f64::total_cmp);
        t
    }
}

// Toguri et al., 1982. The last row's bound is open-ended.
pub const TOGURI_QMAX_SMALL: [ToguriRow; 4] = [
    ToguriRow::new(62.5, [4.0, 4.5, 5.0, 5.5, 6.0]),
    ToguriRow::new(112.5, [7.3, 9.0, 10.0, 8.5, 10.0]),
    ToguriRow::new(162.5, [10.0, 12.5, 11.5, 13.0, 14.0]),
    ToguriRow::new(f64::INFINITY, [11.0, 14.0, 13.5, 13.0, 15.0]),
];

pub const TOGURI_QMAX_LARGE: [ToguriRow; 4] = [
    ToguriRow::new(62.5, [5.5, 8.0, 6.0, 7.0, 8.0]),
    ToguriRow::new(112.5, [11.0, 13.0, 13.5, 13.0, 14.0]),
    ToguriRow::new(162.5, [14.0, 16.0, 15.0, 17.0, 18.0]),
    ToguriRow::new(f64::INFINITY, [16.0, 19.0, 17.0, 19.0, 20.0]),
];

pub const TOGURI_QAVE_SMALL: [ToguriRow; 4] = [
    ToguriRow::new(62.5, [3.4, 3.8, 4.5, 4.9, 5.0]),
    ToguriRow::new(112.5, [4.9, 5.6, 6.0, 6.6, 6.9]),
    ToguriRow::new(162.5, [7.9, 8.3, 8.9, 9.3, 9.6]),
    ToguriRow::new(f64::INFINITY, [7.4, 7.9, 9.4, 9.7, 10.0]),
];

pub const TOGURI_QAVE_LARGE: [ToguriRow; 4] = [
    ToguriRow::new(62.5, [6.0, 6.3, 6.6, 6.8, 7.4]),
    ToguriRow::new(112.5, [8.2, 8.8, 9.1, 9.4, 10.1]),
    ToguriRow::new(162.5, [10.1, 11.4, 11.7, 12.0, 12.0]),
    ToguriRow::new(f64::INFINITY, [11.1, 11.5, 11.7, 12.4, 13.2]),
];

pub fn toguri_table(bsa: ToguriBsa, quantity: Quantity) -> &'static [ToguriRow] {
    match (quantity, bsa) {
        (Quantity::Qmax, ToguriBsa::Small) => &TOGURI_QMAX_SMALL,
        (Quantity::Qmax, ToguriBsa::Large) => &TOGURI_QMAX_LARGE,
        (Quantity::Qave, ToguriBsa::Small) => &TOGURI_QAVE_SMALL,
        (Quantity::Qave, ToguriBsa::Large) => &TOGURI_QAVE_LARGE,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
