use serde::{Deserialize, Serialize};

use crate::error::NomogramError;

/// One void: voided volume (ml), maximum and average flow (ml/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub volume: f64,
    pub qmax: f64,
    pub qave: f64,
}

impl Measurement {
    pub fn new(volume: f64, qmax: f64, qave: f64) -> Result<Self, NomogramError> {
        let m = Self { volume, qmax, qave };
        m.validate()?;
        Ok(m)
    }

    pub fn validate(&self) -> Result<(), NomogramError> {
        for (name, v) in [("volume", self.volume), ("qmax", self.qmax), ("qave", self.qave)] {
            if !v.is_finite() {
                return Err(NomogramError::InvalidMeasurement(format!(
                    "{name} must be finite, got {v}"
                )));
            }
            if v < 0.0 {
                return Err(NomogramError::InvalidMeasurement(format!(
                    "{name} must be >= 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Volume is the activating precondition of every nomogram.
    pub fn is_ready(&self) -> bool {
        self.volume > 0.0
    }

    pub fn value(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Qmax => self.qmax,
            Quantity::Qave => self.qave,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Qmax,
    Qave,
}

impl Quantity {
    pub const BOTH: [Quantity; 2] = [Quantity::Qmax, Quantity::Qave];

    pub fn as_str(self) -> &'static str {
        match self {
            Quantity::Qmax => "Qmax",
            Quantity::Qave => "Qave",
        }
    }
}
