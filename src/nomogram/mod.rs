pub mod curves;
pub mod liverpool;
pub mod miskolc;
pub mod toguri;

use serde::Serialize;

use crate::error::NomogramError;
use crate::model::band::{Band, Severity};
use crate::model::bsa::{MiskolcBsa, ToguriBsa};
use crate::model::measurement::{Measurement, Quantity};
use crate::model::thresholds::{liverpool_limits, miskolc_profile, toguri_table};
use crate::nomogram::curves::Plot;

/// The closed set of supported nomograms, each with its own BSA domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "model", content = "bsa", rename_all = "snake_case")]
pub enum Nomogram {
    Liverpool,
    Miskolc(MiskolcBsa),
    Toguri(ToguriBsa),
}

impl Nomogram {
    pub fn name(&self) -> &'static str {
        match self {
            Nomogram::Liverpool => "liverpool",
            Nomogram::Miskolc(_) => "miskolc",
            Nomogram::Toguri(_) => "toguri",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Nomogram::Liverpool => {
                "Férfiak (50 év alatt). Általános áramlásvizsgálat (Haylen et al.)."
            }
            Nomogram::Miskolc(_) => {
                "Fiú gyermekek. Részletes percentilis becslés (Szabó & Fegyverneki, 1995)."
            }
            Nomogram::Toguri(_) => {
                "Alacsony áramlás (obstrukció) szűrése (Toguri et al., 1982)."
            }
        }
    }

    pub fn bsa_label(&self) -> Option<&'static str> {
        match self {
            Nomogram::Liverpool => None,
            Nomogram::Miskolc(bsa) => Some(bsa.label()),
            Nomogram::Toguri(bsa) => Some(bsa.label()),
        }
    }

    /// Form defaults of each nomogram tab.
    pub fn default_measurement(&self) -> Measurement {
        match self {
            Nomogram::Liverpool => Measurement {
                volume: 400.0,
                qmax: 25.0,
                qave: 15.0,
            },
            Nomogram::Miskolc(_) => Measurement {
                volume: 150.0,
                qmax: 18.0,
                qave: 10.0,
            },
            Nomogram::Toguri(_) => Measurement {
                volume: 140.0,
                qmax: 12.0,
                qave: 8.0,
            },
        }
    }

    /// Band of one flow quantity. Requires `measurement.is_ready()`.
    pub fn classify(
        &self,
        quantity: Quantity,
        measurement: &Measurement,
    ) -> Result<Band, NomogramError> {
        let value = measurement.value(quantity);
        let volume = measurement.volume;
        let band = match self {
            Nomogram::Liverpool => {
                Band::Full(liverpool::classify(value, volume, liverpool_limits(quantity)))
            }
            Nomogram::Miskolc(bsa) => Band::Full(miskolc::classify(
                value,
                volume,
                miskolc_profile(*bsa).coefficients(quantity),
            )?),
            Nomogram::Toguri(bsa) => Band::Screening(toguri::classify(
                value,
                volume,
                toguri_table(*bsa, quantity),
            )?),
        };
        tracing::debug!(
            model = self.name(),
            quantity = quantity.as_str(),
            value,
            volume,
            band = band.short_label(),
            "classified"
        );
        Ok(band)
    }

    /// Classifies Qmax and Qave. `Ok(None)` when the volume is not positive.
    pub fn assess(&self, measurement: &Measurement) -> Result<Option<Assessment>, NomogramError> {
        measurement.validate()?;
        if !measurement.is_ready() {
            return Ok(None);
        }
        let qmax = BandResult::new(
            Quantity::Qmax,
            measurement.qmax,
            self.classify(Quantity::Qmax, measurement)?,
        );
        let qave = BandResult::new(
            Quantity::Qave,
            measurement.qave,
            self.classify(Quantity::Qave, measurement)?,
        );
        Ok(Some(Assessment {
            nomogram: *self,
            measurement: *measurement,
            qmax,
            qave,
        }))
    }

    /// Reference curves for Qmax and Qave with the patient point overlaid.
    /// `Ok(None)` when the volume is not positive.
    pub fn plots(&self, measurement: &Measurement) -> Result<Option<PlotSet>, NomogramError> {
        measurement.validate()?;
        if !measurement.is_ready() {
            return Ok(None);
        }
        let plots = Quantity::BOTH
            .iter()
            .map(|&quantity| match self {
                Nomogram::Liverpool => liverpool::plot(quantity, measurement),
                Nomogram::Miskolc(bsa) => miskolc::plot(*bsa, quantity, measurement),
                Nomogram::Toguri(bsa) => toguri::plot(*bsa, quantity, measurement),
            })
            .collect();
        Ok(Some(PlotSet {
            nomogram: *self,
            plots,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandResult {
    pub quantity: Quantity,
    pub value: f64,
    pub band: Band,
    pub label: &'static str,
    pub short_label: &'static str,
    pub severity: Severity,
}

impl BandResult {
    pub fn new(quantity: Quantity, value: f64, band: Band) -> Self {
        Self {
            quantity,
            value,
            band,
            label: band.label(),
            short_label: band.short_label(),
            severity: band.severity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub nomogram: Nomogram,
    pub measurement: Measurement,
    pub qmax: BandResult,
    pub qave: BandResult,
}

impl Assessment {
    pub fn results(&self) -> [&BandResult; 2] {
        [&self.qmax, &self.qave]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSet {
    pub nomogram: Nomogram,
    pub plots: Vec<Plot>,
}

#[cfg(test)]
#[path = "../../tests/src_inline/nomogram/tests.rs"]
mod tests;
