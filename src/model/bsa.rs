use serde::Serialize;

/// Body-surface-area category of the Miskolc nomogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MiskolcBsa {
    /// < 0.92 m²
    Small,
    /// 0.92 - 1.42 m²
    Medium,
    /// > 1.42 m²
    Large,
}

impl MiskolcBsa {
    pub fn from_area(area_m2: f64) -> Self {
        if area_m2 < 0.92 {
            MiskolcBsa::Small
        } else if area_m2 <= 1.42 {
            MiskolcBsa::Medium
        } else {
            MiskolcBsa::Large
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MiskolcBsa::Small => "small",
            MiskolcBsa::Medium => "medium",
            MiskolcBsa::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MiskolcBsa::Small => "< 0.92 m² (Kicsi)",
            MiskolcBsa::Medium => "0.92 - 1.42 m² (Közepes)",
            MiskolcBsa::Large => "> 1.42 m² (Nagy)",
        }
    }
}

/// Body-surface-area category of the Toguri nomogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToguriBsa {
    /// < 1.1 m²
    Small,
    /// >= 1.1 m²
    Large,
}

impl ToguriBsa {
    pub fn from_area(area_m2: f64) -> Self {
        if area_m2 < 1.1 {
            ToguriBsa::Small
        } else {
            ToguriBsa::Large
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToguriBsa::Small => "small",
            ToguriBsa::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToguriBsa::Small => "< 1.1 m² (Kicsi)",
            ToguriBsa::Large => "≥ 1.1 m² (Nagy)",
        }
    }
}
