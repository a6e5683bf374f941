pub mod json;
pub mod palette;
pub mod text;
pub mod write;

use serde::Serialize;

use crate::model::band::Severity;
use crate::model::measurement::Measurement;
use crate::nomogram::{Assessment, Nomogram};

/// Outcome of one batch case; `assessment` is `None` when the volume was not
/// positive.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub id: String,
    pub nomogram: Nomogram,
    pub measurement: Measurement,
    pub assessment: Option<Assessment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub qmax: usize,
    pub qave: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelCount {
    pub model: &'static str,
    pub cases: usize,
    pub classified: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub n_cases: usize,
    pub n_classified: usize,
    pub n_insufficient: usize,
    pub models: Vec<ModelCount>,
    pub severities: Vec<SeverityCount>,
    /// Cases with Qmax or Qave in the pathological band.
    pub pathological_fraction: f64,
}

const SEVERITY_ORDER: [Severity; 5] = [
    Severity::Pathological,
    Severity::Low,
    Severity::Moderate,
    Severity::Normal,
    Severity::High,
];

const MODEL_ORDER: [&str; 3] = ["liverpool", "miskolc", "toguri"];

pub fn build_summary(outcomes: &[CaseOutcome]) -> SummaryData {
    let classified = outcomes
        .iter()
        .filter_map(|o| o.assessment.as_ref())
        .collect::<Vec<_>>();

    let models = MODEL_ORDER
        .iter()
        .map(|&model| ModelCount {
            model,
            cases: outcomes.iter().filter(|o| o.nomogram.name() == model).count(),
            classified: outcomes
                .iter()
                .filter(|o| o.nomogram.name() == model && o.assessment.is_some())
                .count(),
        })
        .collect();

    let severities = SEVERITY_ORDER
        .iter()
        .map(|&severity| SeverityCount {
            severity,
            qmax: classified
                .iter()
                .filter(|a| a.qmax.severity == severity)
                .count(),
            qave: classified
                .iter()
                .filter(|a| a.qave.severity == severity)
                .count(),
        })
        .collect();

    let pathological = classified
        .iter()
        .filter(|a| {
            a.results()
                .iter()
                .any(|r| r.severity == Severity::Pathological)
        })
        .count();

    SummaryData {
        tool: "kira-uroflow".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        n_cases: outcomes.len(),
        n_classified: classified.len(),
        n_insufficient: outcomes.len() - classified.len(),
        models,
        severities,
        pathological_fraction: fraction(pathological, classified.len()),
    }
}

pub fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
