//! Liverpool nomogram (Haylen et al.): flow is scaled by sqrt(volume) and
//! compared against fixed percentile multipliers.

use crate::model::band::PercentileBand;
use crate::model::measurement::{Measurement, Quantity};
use crate::model::thresholds::{PERCENTILES, liverpool_limits};
use crate::nomogram::curves::{
    CURVE_SAMPLES, CurvePoint, Plot, ReferenceLine, end_labels, linspace, sample_curve,
};

pub const DOMAIN: (f64, f64) = (50.0, 600.0);

pub fn ratio(value: f64, volume: f64) -> f64 {
    debug_assert!(volume > 0.0);
    value / volume.sqrt()
}

/// First band whose limit the ratio is strictly below; a ratio equal to a
/// limit belongs to the band above it.
pub fn band_for_ratio(ratio: f64, limits: &[f64; 7]) -> PercentileBand {
    let idx = limits
        .iter()
        .position(|&limit| ratio < limit)
        .unwrap_or(limits.len());
    PercentileBand::from_index(idx)
}

/// Caller guarantees `volume > 0`.
pub fn classify(value: f64, volume: f64, limits: &[f64; 7]) -> PercentileBand {
    band_for_ratio(ratio(value, volume), limits)
}

pub fn curve_value(limit: f64, volume: f64) -> f64 {
    limit * volume.sqrt()
}

pub fn reference_curves(limits: &[f64; 7]) -> Vec<ReferenceLine> {
    let domain = linspace(DOMAIN.0, DOMAIN.1, CURVE_SAMPLES);
    PERCENTILES
        .iter()
        .zip(limits.iter())
        .map(|(&p, &limit)| {
            let points = sample_curve(domain.clone(), |x| curve_value(limit, x));
            ReferenceLine::continuous(p, points)
        })
        .collect()
}

pub fn plot(quantity: Quantity, measurement: &Measurement) -> Plot {
    let lines = reference_curves(liverpool_limits(quantity));
    let (y_label, y_max) = match quantity {
        Quantity::Qmax => ("Qmax (ml/s)", 40.0),
        Quantity::Qave => ("Qave (ml/s)", 25.0),
    };
    Plot {
        quantity,
        title: format!("Liverpool {} Nomogram", quantity.as_str()),
        x_label: "Térfogat (ml)".to_string(),
        y_label: y_label.to_string(),
        x_max: DOMAIN.1,
        y_max,
        annotations: end_labels(&lines),
        lines,
        patient: CurvePoint {
            x: measurement.volume,
            y: measurement.value(quantity),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/nomogram/liverpool.rs"]
mod tests;
