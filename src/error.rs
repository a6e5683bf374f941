use thiserror::Error;

#[derive(Debug, Error)]
pub enum NomogramError {
    #[error(
        "no Toguri volume bracket matches volume {volume} ml; \
         threshold table is missing its sentinel row"
    )]
    NoVolumeBracket { volume: f64 },

    #[error(
        "degenerate Miskolc spread at volume {volume} ml (L5={l5}, L95={l95}); \
         check coefficients"
    )]
    DegenerateSpread { volume: f64, l5: f64, l95: f64 },

    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("BSA category '{category}' is not defined for the {model} nomogram")]
    BsaMismatch {
        model: &'static str,
        category: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
