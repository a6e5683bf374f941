use serde::Serialize;

use crate::model::measurement::Quantity;

/// Samples per continuous reference curve.
pub const CURVE_SAMPLES: usize = 100;

/// Percentiles that get an end-of-curve text label.
pub const ANNOTATED_PERCENTILES: [u8; 3] = [5, 50, 95];

/// x position of the end-of-curve labels, just right of the 600 ml domain end.
pub const LABEL_ANCHOR_X: f64 = 605.0;

/// Evenly spaced samples over a closed interval, endpoint included exactly.
///
/// Cloning restarts the sequence from the beginning.
#[derive(Debug, Clone, PartialEq)]
pub struct Linspace {
    start: f64,
    stop: f64,
    step: f64,
    len: usize,
    next: usize,
}

pub fn linspace(start: f64, stop: f64, len: usize) -> Linspace {
    let step = if len > 1 {
        (stop - start) / (len - 1) as f64
    } else {
        0.0
    };
    Linspace {
        start,
        stop,
        step,
        len,
        next: 0,
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.len {
            return None;
        }
        let i = self.next;
        self.next += 1;
        if self.len > 1 && i == self.len - 1 {
            return Some(self.stop);
        }
        Some(i as f64 * self.step + self.start)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Linspace {}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Horizontal segment of a step curve, covering `[x_start, x_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepSegment {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveShape {
    Continuous { points: Vec<CurvePoint> },
    Steps { segments: Vec<StepSegment> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub percentile: u8,
    pub label: String,
    pub shape: CurveShape,
}

impl ReferenceLine {
    pub fn continuous(percentile: u8, points: Vec<CurvePoint>) -> Self {
        Self {
            percentile,
            label: percentile_label(percentile),
            shape: CurveShape::Continuous { points },
        }
    }

    pub fn steps(percentile: u8, segments: Vec<StepSegment>) -> Self {
        Self {
            percentile,
            label: percentile_label(percentile),
            shape: CurveShape::Steps { segments },
        }
    }

    /// y of the last sample (continuous) or last segment (steps).
    pub fn end_value(&self) -> Option<f64> {
        match &self.shape {
            CurveShape::Continuous { points } => points.last().map(|p| p.y),
            CurveShape::Steps { segments } => segments.last().map(|s| s.y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plot {
    pub quantity: Quantity,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_max: f64,
    pub y_max: f64,
    pub lines: Vec<ReferenceLine>,
    pub annotations: Vec<Annotation>,
    /// The measurement overlaid on the reference curves: (volume, value).
    pub patient: CurvePoint,
}

pub fn percentile_label(percentile: u8) -> String {
    format!("{percentile}th percentile")
}

pub fn sample_curve(domain: Linspace, f: impl Fn(f64) -> f64) -> Vec<CurvePoint> {
    domain.map(|x| CurvePoint { x, y: f(x) }).collect()
}

/// End-of-curve percentage labels for the annotated percentiles.
pub fn end_labels(lines: &[ReferenceLine]) -> Vec<Annotation> {
    lines
        .iter()
        .filter(|line| ANNOTATED_PERCENTILES.contains(&line.percentile))
        .filter_map(|line| {
            line.end_value().map(|y| Annotation {
                x: LABEL_ANCHOR_X,
                y,
                text: format!("{}%", line.percentile),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/nomogram/curves.rs"]
mod tests;
