use crate::model::band::{Band, PercentileBand, ScreeningBand, Severity};
use crate::model::bsa::{MiskolcBsa, ToguriBsa};
use crate::model::measurement::{Measurement, Quantity};

#[test]
fn test_full_band_scale_order_and_severity() {
    let severities = PercentileBand::ALL.map(|b| b.severity());
    assert_eq!(
        severities,
        [
            Severity::Pathological,
            Severity::Low,
            Severity::Moderate,
            Severity::Normal,
            Severity::Normal,
            Severity::Normal,
            Severity::High,
            Severity::High,
        ]
    );
    assert!(PercentileBand::ALL.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(PercentileBand::P10To25.label(), "10-25. percentilis (Mérsékelt)");
    assert_eq!(PercentileBand::from_index(7), PercentileBand::Above95);
    assert_eq!(PercentileBand::from_index(99), PercentileBand::Above95);
}

#[test]
fn test_screening_band_scale() {
    assert_eq!(ScreeningBand::ALL.len(), 6);
    assert_eq!(ScreeningBand::P5To10.label(), "5-10. percentilis (Nagyon Alacsony)");
    assert_eq!(ScreeningBand::P15To20.severity(), Severity::Moderate);
    assert_eq!(ScreeningBand::Above25.severity(), Severity::Normal);
    assert_eq!(ScreeningBand::from_index(4), ScreeningBand::P20To25);
    assert_eq!(Band::Screening(ScreeningBand::P20To25).short_label(), "20-25th");
}

#[test]
fn test_bsa_from_area_boundaries() {
    assert_eq!(MiskolcBsa::from_area(0.91), MiskolcBsa::Small);
    assert_eq!(MiskolcBsa::from_area(0.92), MiskolcBsa::Medium);
    assert_eq!(MiskolcBsa::from_area(1.42), MiskolcBsa::Medium);
    assert_eq!(MiskolcBsa::from_area(1.43), MiskolcBsa::Large);
    assert_eq!(ToguriBsa::from_area(1.09), ToguriBsa::Small);
    assert_eq!(ToguriBsa::from_area(1.1), ToguriBsa::Large);
}

#[test]
fn test_measurement_validation() {
    assert!(Measurement::new(100.0, 10.0, 5.0).is_ok());
    assert!(Measurement::new(0.0, 0.0, 0.0).is_ok());
    assert!(!Measurement::new(0.0, 10.0, 5.0).unwrap().is_ready());
    assert!(Measurement::new(-1.0, 10.0, 5.0).is_err());
    assert!(Measurement::new(100.0, f64::NAN, 5.0).is_err());
    assert!(Measurement::new(100.0, 10.0, f64::INFINITY).is_err());
}

#[test]
fn test_measurement_value_by_quantity() {
    let m = Measurement::new(200.0, 21.0, 11.0).unwrap();
    assert_eq!(m.value(Quantity::Qmax), 21.0);
    assert_eq!(m.value(Quantity::Qave), 11.0);
}
