//! Miskolc nomogram (Szabó & Fegyverneki, 1995) for boys.
//!
//! The 5th and 95th percentile lines are affine in ln(volume + 1). Assuming
//! normality between them gives a mean and SD at the patient's volume; the
//! measured flow is converted to a z-score and banded on `Z_CUTS`. Reference
//! curves for the intermediate percentiles are rebuilt the same way, per
//! coefficient: A_z = mean(A) + z * sd(A), B_z likewise.

use crate::error::NomogramError;
use crate::model::band::PercentileBand;
use crate::model::bsa::MiskolcBsa;
use crate::model::measurement::{Measurement, Quantity};
use crate::model::thresholds::{
    MiskolcCoefficients, PERCENTILES, Z_CUTS, Z_SPAN_5_95, miskolc_profile,
};
use crate::nomogram::curves::{
    CURVE_SAMPLES, CurvePoint, Plot, ReferenceLine, end_labels, linspace, sample_curve,
};

pub const DOMAIN: (f64, f64) = (20.0, 600.0);

/// Estimated flow distribution at one volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowDistribution {
    pub l5: f64,
    pub l95: f64,
    pub mean: f64,
    pub sd: f64,
}

pub fn log_volume(volume: f64) -> f64 {
    (volume + 1.0).ln()
}

pub fn distribution(
    volume: f64,
    coeffs: &MiskolcCoefficients,
) -> Result<FlowDistribution, NomogramError> {
    let ln_v = log_volume(volume);
    let l5 = coeffs.a5 * ln_v + coeffs.b5;
    let l95 = coeffs.a95 * ln_v + coeffs.b95;
    let mean = (l95 + l5) / 2.0;
    let sd = (l95 - l5) / Z_SPAN_5_95;
    // L95 must sit above L5 or the z-score inverts the band order.
    if !sd.is_finite() || sd <= 0.0 {
        return Err(NomogramError::DegenerateSpread { volume, l5, l95 });
    }
    Ok(FlowDistribution { l5, l95, mean, sd })
}

pub fn z_score(
    value: f64,
    volume: f64,
    coeffs: &MiskolcCoefficients,
) -> Result<f64, NomogramError> {
    let dist = distribution(volume, coeffs)?;
    Ok((value - dist.mean) / dist.sd)
}

pub fn band_for_z(z: f64) -> PercentileBand {
    let idx = Z_CUTS
        .iter()
        .position(|&cut| z < cut)
        .unwrap_or(Z_CUTS.len());
    PercentileBand::from_index(idx)
}

pub fn classify(
    value: f64,
    volume: f64,
    coeffs: &MiskolcCoefficients,
) -> Result<PercentileBand, NomogramError> {
    Ok(band_for_z(z_score(value, volume, coeffs)?))
}

/// Coefficients (A_z, B_z) of the percentile line at standard score `z`.
pub fn percentile_coefficients(coeffs: &MiskolcCoefficients, z: f64) -> (f64, f64) {
    let mean_a = (coeffs.a95 + coeffs.a5) / 2.0;
    let mean_b = (coeffs.b95 + coeffs.b5) / 2.0;
    let sd_a = (coeffs.a95 - coeffs.a5) / Z_SPAN_5_95;
    let sd_b = (coeffs.b95 - coeffs.b5) / Z_SPAN_5_95;
    (mean_a + z * sd_a, mean_b + z * sd_b)
}

pub fn curve_value(coeffs: &MiskolcCoefficients, z: f64, volume: f64) -> f64 {
    let (a, b) = percentile_coefficients(coeffs, z);
    a * log_volume(volume) + b
}

pub fn reference_curves(coeffs: &MiskolcCoefficients) -> Vec<ReferenceLine> {
    let domain = linspace(DOMAIN.0, DOMAIN.1, CURVE_SAMPLES);
    PERCENTILES
        .iter()
        .zip(Z_CUTS.iter())
        .map(|(&p, &z)| {
            let points = sample_curve(domain.clone(), |x| curve_value(coeffs, z, x));
            ReferenceLine::continuous(p, points)
        })
        .collect()
}

pub fn plot(bsa: MiskolcBsa, quantity: Quantity, measurement: &Measurement) -> Plot {
    let coeffs = miskolc_profile(bsa).coefficients(quantity);
    let lines = reference_curves(coeffs);
    let y_max = match quantity {
        Quantity::Qmax => 50.0,
        Quantity::Qave => 30.0,
    };
    Plot {
        quantity,
        title: format!("{} Nomogram", quantity.as_str()),
        x_label: "Térfogat (ml)".to_string(),
        y_label: "ml/s".to_string(),
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
#[path = "../../tests/src_inline/nomogram/miskolc.rs"]
mod tests;
