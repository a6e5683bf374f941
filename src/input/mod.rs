use clap::ValueEnum;
use serde::Deserialize;

use crate::error::NomogramError;
use crate::model::bsa::{MiskolcBsa, ToguriBsa};
use crate::nomogram::Nomogram;

pub mod cases;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Liverpool,
    Miskolc,
    Toguri,
}

/// BSA category as entered; validity depends on the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BsaCategory {
    Small,
    Medium,
    Large,
}

impl BsaCategory {
    fn as_str(self) -> &'static str {
        match self {
            BsaCategory::Small => "small",
            BsaCategory::Medium => "medium",
            BsaCategory::Large => "large",
        }
    }
}

/// Builds the nomogram from a model choice plus an optional BSA category or
/// body-surface area in m². Missing BSA defaults to the small category.
pub fn resolve_nomogram(
    model: ModelKind,
    bsa: Option<BsaCategory>,
    bsa_area: Option<f64>,
) -> Result<Nomogram, NomogramError> {
    if bsa.is_some() && bsa_area.is_some() {
        return Err(NomogramError::InvalidInput(
            "give either a BSA category or a BSA area, not both".to_string(),
        ));
    }
    if let Some(area) = bsa_area {
        if !area.is_finite() || area <= 0.0 {
            return Err(NomogramError::InvalidInput(format!(
                "BSA area must be > 0 m², got {area}"
            )));
        }
    }

    match model {
        ModelKind::Liverpool => {
            if bsa.is_some() || bsa_area.is_some() {
                tracing::warn!("BSA is ignored by the Liverpool nomogram");
            }
            Ok(Nomogram::Liverpool)
        }
        ModelKind::Miskolc => {
            let category = match (bsa, bsa_area) {
                (_, Some(area)) => MiskolcBsa::from_area(area),
                (Some(BsaCategory::Small), None) | (None, None) => MiskolcBsa::Small,
                (Some(BsaCategory::Medium), None) => MiskolcBsa::Medium,
                (Some(BsaCategory::Large), None) => MiskolcBsa::Large,
            };
            Ok(Nomogram::Miskolc(category))
        }
        ModelKind::Toguri => {
            let category = match (bsa, bsa_area) {
                (_, Some(area)) => ToguriBsa::from_area(area),
                (Some(BsaCategory::Small), None) | (None, None) => ToguriBsa::Small,
                (Some(BsaCategory::Large), None) => ToguriBsa::Large,
                (Some(other @ BsaCategory::Medium), None) => {
                    return Err(NomogramError::BsaMismatch {
                        model: "toguri",
                        category: other.as_str().to_string(),
                    });
                }
            };
            Ok(Nomogram::Toguri(category))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
