use serde::Serialize;

/// Clinical severity tier of a percentile band. Rendering (colors, styling)
/// lives in `report::palette`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Pathological,
    Low,
    Moderate,
    Normal,
    High,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Pathological => "pathological",
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::Normal => "normal",
            Severity::High => "high",
        }
    }
}

/// Full-range scale shared by the Liverpool and Miskolc nomograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileBand {
    Below5,
    P5To10,
    P10To25,
    P25To50,
    P50To75,
    P75To90,
    P90To95,
    Above95,
}

impl PercentileBand {
    pub const ALL: [PercentileBand; 8] = [
        PercentileBand::Below5,
        PercentileBand::P5To10,
        PercentileBand::P10To25,
        PercentileBand::P25To50,
        PercentileBand::P50To75,
        PercentileBand::P75To90,
        PercentileBand::P90To95,
        PercentileBand::Above95,
    ];

    /// Band for a value that fell below cut point `idx`, or the top band when
    /// `idx` equals the number of cut points.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx.min(Self::ALL.len() - 1)]
    }

    pub fn label(self) -> &'static str {
        match self {
            PercentileBand::Below5 => "< 5. percentilis (Kóros)",
            PercentileBand::P5To10 => "5-10. percentilis (Alacsony)",
            PercentileBand::P10To25 => "10-25. percentilis (Mérsékelt)",
            PercentileBand::P25To50 => "25-50. percentilis (Átlagos)",
            PercentileBand::P50To75 => "50-75. percentilis (Jó)",
            PercentileBand::P75To90 => "75-90. percentilis (Kiváló)",
            PercentileBand::P90To95 => "90-95. percentilis (Kiemelkedő)",
            PercentileBand::Above95 => "> 95. percentilis (Magas)",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            PercentileBand::Below5 => "<5th",
            PercentileBand::P5To10 => "5-10th",
            PercentileBand::P10To25 => "10-25th",
            PercentileBand::P25To50 => "25-50th",
            PercentileBand::P50To75 => "50-75th",
            PercentileBand::P75To90 => "75-90th",
            PercentileBand::P90To95 => "90-95th",
            PercentileBand::Above95 => ">95th",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            PercentileBand::Below5 => Severity::Pathological,
            PercentileBand::P5To10 => Severity::Low,
            PercentileBand::P10To25 => Severity::Moderate,
            PercentileBand::P25To50 | PercentileBand::P50To75 | PercentileBand::P75To90 => {
                Severity::Normal
            }
            PercentileBand::P90To95 | PercentileBand::Above95 => Severity::High,
        }
    }
}

/// Low-flow screening scale of the Toguri nomogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningBand {
    Below5,
    P5To10,
    P10To15,
    P15To20,
    P20To25,
    Above25,
}

impl ScreeningBand {
    pub const ALL: [ScreeningBand; 6] = [
        ScreeningBand::Below5,
        ScreeningBand::P5To10,
        ScreeningBand::P10To15,
        ScreeningBand::P15To20,
        ScreeningBand::P20To25,
        ScreeningBand::Above25,
    ];

    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx.min(Self::ALL.len() - 1)]
    }

    pub fn label(self) -> &'static str {
        match self {
            ScreeningBand::Below5 => "< 5. percentilis (Kóros)",
            ScreeningBand::P5To10 => "5-10. percentilis (Nagyon Alacsony)",
            ScreeningBand::P10To15 => "10-15. percentilis (Alacsony)",
            ScreeningBand::P15To20 => "15-20. percentilis (Alacsony)",
            ScreeningBand::P20To25 => "20-25. percentilis (Mérsékelt)",
            ScreeningBand::Above25 => "> 25. percentilis (Normál)",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            ScreeningBand::Below5 => "<5th",
            ScreeningBand::P5To10 => "5-10th",
            ScreeningBand::P10To15 => "10-15th",
            ScreeningBand::P15To20 => "15-20th",
            ScreeningBand::P20To25 => "20-25th",
            ScreeningBand::Above25 => ">25th",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ScreeningBand::Below5 => Severity::Pathological,
            ScreeningBand::P5To10 => Severity::Low,
            ScreeningBand::P10To15 | ScreeningBand::P15To20 => Severity::Moderate,
            ScreeningBand::P20To25 | ScreeningBand::Above25 => Severity::Normal,
        }
    }
}

/// A classified band from either scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "scale", content = "band", rename_all = "snake_case")]
pub enum Band {
    Full(PercentileBand),
    Screening(ScreeningBand),
}

impl Band {
    pub fn label(self) -> &'static str {
        match self {
            Band::Full(b) => b.label(),
            Band::Screening(b) => b.label(),
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Band::Full(b) => b.short_label(),
            Band::Screening(b) => b.short_label(),
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Band::Full(b) => b.severity(),
            Band::Screening(b) => b.severity(),
        }
    }
}
