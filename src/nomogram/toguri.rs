//! Toguri nomogram (Toguri et al., 1982): a low-flow screening table keyed by
//! volume bracket and BSA category.
//!
//! The published rows are not monotonic everywhere (e.g. the 15th percentile
//! sits below the 10th in some brackets). Classification sorts each row's
//! thresholds first; the drawn step curves keep the published order.

use crate::error::NomogramError;
use crate::model::band::ScreeningBand;
use crate::model::bsa::ToguriBsa;
use crate::model::measurement::{Measurement, Quantity};
use crate::model::thresholds::{
    TOGURI_BRACKET_EDGES, TOGURI_PERCENTILES, ToguriRow, toguri_table,
};
use crate::nomogram::curves::{Annotation, CurvePoint, Plot, ReferenceLine, StepSegment};

pub const NORMAL_RANGE_LABEL: &str = "NORMÁL TARTOMÁNY (>25pc)";

/// First row whose upper bound exceeds `volume`.
pub fn select_row(volume: f64, table: &[ToguriRow]) -> Result<&ToguriRow, NomogramError> {
    table
        .iter()
        .find(|row| volume < row.upper_volume)
        .ok_or(NomogramError::NoVolumeBracket { volume })
}

/// `sorted` must be ascending.
pub fn band_for_thresholds(value: f64, sorted: &[f64; 5]) -> ScreeningBand {
    let idx = sorted
        .iter()
        .position(|&t| value < t)
        .unwrap_or(sorted.len());
    ScreeningBand::from_index(idx)
}

pub fn classify(
    value: f64,
    volume: f64,
    table: &[ToguriRow],
) -> Result<ScreeningBand, NomogramError> {
    let row = select_row(volume, table)?;
    Ok(band_for_thresholds(value, &row.sorted_thresholds()))
}

/// One step line per percentile column, in published (unsorted) order.
pub fn step_curves(table: &[ToguriRow]) -> Vec<ReferenceLine> {
    TOGURI_PERCENTILES
        .iter()
        .enumerate()
        .map(|(col, &p)| {
            let segments = table
                .iter()
                .zip(TOGURI_BRACKET_EDGES.windows(2))
                .map(|(row, edge)| StepSegment {
                    x_start: edge[0],
                    x_end: edge[1],
                    y: row.thresholds[col],
                })
                .collect();
            ReferenceLine::steps(p, segments)
        })
        .collect()
}

pub fn plot(bsa: ToguriBsa, quantity: Quantity, measurement: &Measurement) -> Plot {
    let table = toguri_table(bsa, quantity);
    let y_max = match quantity {
        Quantity::Qmax => 25.0,
        Quantity::Qave => 20.0,
    };
    let mut annotations = Vec::new();
    if let Some(first) = table.first() {
        annotations.push(Annotation {
            x: 10.0,
            y: first.thresholds[4] + 2.0,
            text: NORMAL_RANGE_LABEL.to_string(),
        });
    }
    Plot {
        quantity,
        title: format!("{} Szűrő (5-25. percentilis)", quantity.as_str()),
        x_label: "Térfogat (ml)".to_string(),
        y_label: "ml/s".to_string(),
        x_max: TOGURI_BRACKET_EDGES[TOGURI_BRACKET_EDGES.len() - 1],
        y_max,
        lines: step_curves(table),
        annotations,
        patient: CurvePoint {
            x: measurement.volume,
            y: measurement.value(quantity),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/nomogram/toguri.rs"]
mod tests;
