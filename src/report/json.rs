use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::measurement::Measurement;
use crate::nomogram::curves::Plot;
use crate::nomogram::{Assessment, BandResult, Nomogram, PlotSet};
use crate::report::SummaryData;
use crate::report::palette::{PATIENT_MARKER_COLOR, screening_line_color, severity_color};

#[derive(Debug, Serialize)]
struct ResultView<'a> {
    #[serde(flatten)]
    result: &'a BandResult,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct AssessmentView<'a> {
    nomogram: &'a Nomogram,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bsa_label: Option<&'static str>,
    measurement: &'a Measurement,
    qmax: ResultView<'a>,
    qave: ResultView<'a>,
}

#[derive(Debug, Serialize)]
struct PlotView<'a> {
    #[serde(flatten)]
    plot: &'a Plot,
    patient_color: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    line_colors: BTreeMap<u8, &'static str>,
}

#[derive(Debug, Serialize)]
struct PlotSetView<'a> {
    nomogram: &'a Nomogram,
    plots: Vec<PlotView<'a>>,
}

/// `null` when the input was insufficient.
pub fn render_assessment_json(
    assessment: Option<&Assessment>,
) -> Result<String, serde_json::Error> {
    let view = assessment.map(|a| AssessmentView {
        nomogram: &a.nomogram,
        description: a.nomogram.description(),
        bsa_label: a.nomogram.bsa_label(),
        measurement: &a.measurement,
        qmax: ResultView {
            result: &a.qmax,
            color: severity_color(a.qmax.severity),
        },
        qave: ResultView {
            result: &a.qave,
            color: severity_color(a.qave.severity),
        },
    });
    serde_json::to_string_pretty(&view)
}

pub fn render_plots_json(plots: Option<&PlotSet>) -> Result<String, serde_json::Error> {
    let view = plots.map(|set| PlotSetView {
        nomogram: &set.nomogram,
        plots: set
            .plots
            .iter()
            .map(|plot| PlotView {
                plot,
                patient_color: PATIENT_MARKER_COLOR,
                line_colors: match set.nomogram {
                    Nomogram::Toguri(_) => plot
                        .lines
                        .iter()
                        .filter_map(|l| {
                            screening_line_color(l.percentile).map(|c| (l.percentile, c))
                        })
                        .collect(),
                    _ => BTreeMap::new(),
                },
            })
            .collect(),
    });
    serde_json::to_string_pretty(&view)
}

pub fn render_summary_json(summary: &SummaryData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
