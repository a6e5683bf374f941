use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::input::{BsaCategory, ModelKind};

#[derive(Debug, Parser)]
#[command(
    name = "kira-uroflow",
    version,
    about = "Classify uroflowmetry measurements against the Liverpool, Miskolc and Toguri nomograms"
)]
pub struct Cli {
    #[arg(long, short, global = true, default_value_t = false, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify Qmax and Qave of a single void
    Classify(ClassifyArgs),
    /// Emit reference curves and the patient point as JSON
    Curves(MeasurementArgs),
    /// Classify a batch of cases from a JSON file
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
pub struct MeasurementArgs {
    #[arg(long, value_enum)]
    pub model: ModelKind,

    #[arg(long, help = "Voided volume (ml); defaults to the model's form default")]
    pub volume: Option<f64>,

    #[arg(long, help = "Maximum flow (ml/s)")]
    pub qmax: Option<f64>,

    #[arg(long, help = "Average flow (ml/s)")]
    pub qave: Option<f64>,

    #[arg(
        long,
        value_enum,
        help = "BSA category (miskolc: small|medium|large, toguri: small|large)"
    )]
    pub bsa: Option<BsaCategory>,

    #[arg(long, help = "Body surface area in m², mapped to the model's BSA category")]
    pub bsa_area: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub measurement: MeasurementArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "JSON array of cases")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,
}
