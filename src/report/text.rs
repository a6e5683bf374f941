use crate::nomogram::{Assessment, BandResult, Nomogram};
use crate::report::{SummaryData, format_f64_2, format_f64_6};

pub fn render_assessment_text(nomogram: &Nomogram, assessment: Option<&Assessment>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} nomogram\n", title_case(nomogram.name())));
    out.push_str(&format!("{}\n", nomogram.description()));
    if let Some(bsa) = nomogram.bsa_label() {
        out.push_str(&format!("BSA: {}\n", bsa));
    }
    out.push('\n');

    let Some(assessment) = assessment else {
        out.push_str("Insufficient input: voided volume must be > 0 ml.\n");
        return out;
    };

    let m = &assessment.measurement;
    out.push_str(&format!(
        "Volume: {} ml  Qmax: {} ml/s  Qave: {} ml/s\n\n",
        format_f64_2(m.volume),
        format_f64_2(m.qmax),
        format_f64_2(m.qave)
    ));
    for result in assessment.results() {
        out.push_str(&result_line(result));
    }
    out
}

fn result_line(result: &BandResult) -> String {
    format!(
        "{:<5} {:<38} [{}]\n",
        result.quantity.as_str(),
        result.label,
        result.severity.as_str()
    )
}

pub fn render_batch_report(summary: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Uroflowmetry Nomogram Report\n");
    out.push_str("============================\n\n");

    out.push_str(&format!("Cases: {}\n", summary.n_cases));
    out.push_str(&format!("Classified: {}\n", summary.n_classified));
    out.push_str(&format!(
        "Insufficient input (volume <= 0): {}\n\n",
        summary.n_insufficient
    ));

    out.push_str("By model\n");
    for m in &summary.models {
        out.push_str(&format!(
            "  {:<10} cases={} classified={}\n",
            m.model, m.cases, m.classified
        ));
    }
    out.push('\n');

    out.push_str("By severity (Qmax / Qave)\n");
    for s in &summary.severities {
        out.push_str(&format!(
            "  {:<13} {} / {}\n",
            s.severity.as_str(),
            s.qmax,
            s.qave
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "Pathological fraction: {}\n",
        format_f64_6(summary.pathological_fraction)
    ));
    out
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
