//! Display colors. The classification core only knows `Severity`; this is the
//! single place where a severity or a Toguri percentile line gets a color.

use crate::model::band::Severity;

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Pathological => "#d32f2f",
        Severity::Low => "#f57c00",
        Severity::Moderate => "#fbc02d",
        Severity::Normal => "#388e3c",
        Severity::High => "#1976d2",
    }
}

/// Color of a Toguri step line by percentile (5th..25th).
pub fn screening_line_color(percentile: u8) -> Option<&'static str> {
    match percentile {
        5 => Some("#d32f2f"),
        10 => Some("#e64a19"),
        15 => Some("#f57c00"),
        20 => Some("#ff9800"),
        25 => Some("#ffd54f"),
        _ => None,
    }
}

/// Marker color of the patient point.
pub const PATIENT_MARKER_COLOR: &str = "red";
