use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::NomogramError;
use crate::input::{BsaCategory, ModelKind, resolve_nomogram};
use crate::model::measurement::Measurement;
use crate::nomogram::Nomogram;

/// One entry of a batch input file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseInput {
    pub id: String,
    pub model: ModelKind,
    #[serde(default)]
    pub bsa: Option<BsaCategory>,
    #[serde(default)]
    pub bsa_area: Option<f64>,
    pub volume: f64,
    pub qmax: f64,
    pub qave: f64,
}

impl CaseInput {
    pub fn nomogram(&self) -> Result<Nomogram, NomogramError> {
        resolve_nomogram(self.model, self.bsa, self.bsa_area)
    }

    pub fn measurement(&self) -> Result<Measurement, NomogramError> {
        Measurement::new(self.volume, self.qmax, self.qave)
    }
}

/// Reads a JSON array of cases.
pub fn load_cases(path: &Path) -> Result<Vec<CaseInput>, NomogramError> {
    let reader = BufReader::new(File::open(path)?);
    parse_cases(reader)
}

pub fn parse_cases(reader: impl std::io::Read) -> Result<Vec<CaseInput>, NomogramError> {
    let cases: Vec<CaseInput> = serde_json::from_reader(reader)?;
    let mut seen = std::collections::BTreeSet::new();
    for case in &cases {
        if !seen.insert(case.id.as_str()) {
            return Err(NomogramError::InvalidInput(format!(
                "duplicate case id '{}'",
                case.id
            )));
        }
    }
    Ok(cases)
}
