mod cli;
mod error;
mod input;
mod logging;
mod model;
mod nomogram;
mod report;

use std::path::Path;

use clap::Parser;

use crate::cli::{Cli, Commands, MeasurementArgs};
use crate::error::NomogramError;
use crate::input::cases::load_cases;
use crate::input::resolve_nomogram;
use crate::model::measurement::Measurement;
use crate::nomogram::Nomogram;
use crate::report::CaseOutcome;
use crate::report::json::{render_assessment_json, render_plots_json};
use crate::report::text::render_assessment_text;
use crate::report::write::write_reports;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), NomogramError> {
    match cli.command {
        Commands::Classify(args) => {
            let (nomogram, measurement) = resolve_inputs(&args.measurement)?;
            let assessment = nomogram.assess(&measurement)?;
            if assessment.is_none() {
                tracing::warn!(
                    volume = measurement.volume,
                    "volume must be > 0; nothing to classify"
                );
            }
            if args.json {
                println!("{}", render_assessment_json(assessment.as_ref())?);
            } else {
                print!("{}", render_assessment_text(&nomogram, assessment.as_ref()));
            }
        }
        Commands::Curves(args) => {
            let (nomogram, measurement) = resolve_inputs(&args)?;
            let plots = nomogram.plots(&measurement)?;
            if plots.is_none() {
                tracing::warn!(
                    volume = measurement.volume,
                    "volume must be > 0; no curves produced"
                );
            }
            println!("{}", render_plots_json(plots.as_ref())?);
        }
        Commands::Run(args) => run_batch(&args.input, &args.out)?,
    }
    Ok(())
}

/// Missing numeric inputs fall back to the model's form defaults.
fn resolve_inputs(args: &MeasurementArgs) -> Result<(Nomogram, Measurement), NomogramError> {
    let nomogram = resolve_nomogram(args.model, args.bsa, args.bsa_area)?;
    let defaults = nomogram.default_measurement();
    let measurement = Measurement::new(
        args.volume.unwrap_or(defaults.volume),
        args.qmax.unwrap_or(defaults.qmax),
        args.qave.unwrap_or(defaults.qave),
    )?;
    Ok((nomogram, measurement))
}

fn run_batch(input: &Path, out_dir: &Path) -> Result<(), NomogramError> {
    let cases = load_cases(input)?;
    tracing::info!(
        cases = cases.len(),
        input = %input.display(),
        out = %out_dir.display(),
        "running batch"
    );

    let mut outcomes = Vec::with_capacity(cases.len());
    for case in &cases {
        let nomogram = case.nomogram()?;
        let measurement = case.measurement()?;
        let assessment = nomogram.assess(&measurement)?;
        if assessment.is_none() {
            tracing::warn!(id = %case.id, "volume must be > 0; case skipped");
        }
        outcomes.push(CaseOutcome {
            id: case.id.clone(),
            nomogram,
            measurement,
            assessment,
        });
    }

    write_reports(&outcomes, out_dir)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
