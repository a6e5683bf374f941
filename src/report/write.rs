use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::NomogramError;
use crate::nomogram::Nomogram;
use crate::report::json::render_summary_json;
use crate::report::text::render_batch_report;
use crate::report::{CaseOutcome, build_summary, format_f64_6};

const TSV_HEADER: [&str; 12] = [
    "id",
    "model",
    "bsa",
    "volume",
    "qmax",
    "qave",
    "qmax_band",
    "qmax_label",
    "qmax_severity",
    "qave_band",
    "qave_label",
    "qave_severity",
];

/// Writes `nomogram.tsv`, `summary.json` and `report.txt` into `out_dir`.
pub fn write_reports(outcomes: &[CaseOutcome], out_dir: &Path) -> Result<(), NomogramError> {
    fs::create_dir_all(out_dir)?;

    write_cases_tsv(outcomes, &out_dir.join("nomogram.tsv"))?;

    let summary = build_summary(outcomes);
    write_text(
        &out_dir.join("summary.json"),
        &render_summary_json(&summary)?,
    )?;
    write_text(&out_dir.join("report.txt"), &render_batch_report(&summary))?;

    Ok(())
}

fn write_cases_tsv(outcomes: &[CaseOutcome], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", TSV_HEADER.join("\t"))?;

    for outcome in outcomes {
        let m = &outcome.measurement;
        let mut row = vec![
            outcome.id.clone(),
            outcome.nomogram.name().to_string(),
            bsa_name(&outcome.nomogram).to_string(),
            format_f64_6(m.volume),
            format_f64_6(m.qmax),
            format_f64_6(m.qave),
        ];
        match &outcome.assessment {
            Some(a) => {
                for r in a.results() {
                    row.push(r.short_label.to_string());
                    row.push(r.label.to_string());
                    row.push(r.severity.as_str().to_string());
                }
            }
            None => row.resize(TSV_HEADER.len(), "NA".to_string()),
        }
        writeln!(w, "{}", row.join("\t"))?;
    }

    w.flush()
}

fn bsa_name(nomogram: &Nomogram) -> &'static str {
    match nomogram {
        Nomogram::Liverpool => "NA",
        Nomogram::Miskolc(bsa) => bsa.as_str(),
        Nomogram::Toguri(bsa) => bsa.as_str(),
    }
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/write.rs"]
mod tests;
