use super::*;
use crate::model::band::{PercentileBand, ScreeningBand};

fn all_nomograms() -> Vec<Nomogram> {
    vec![
        Nomogram::Liverpool,
        Nomogram::Miskolc(MiskolcBsa::Small),
        Nomogram::Miskolc(MiskolcBsa::Medium),
        Nomogram::Miskolc(MiskolcBsa::Large),
        Nomogram::Toguri(ToguriBsa::Small),
        Nomogram::Toguri(ToguriBsa::Large),
    ]
}

#[test]
fn test_default_forms() {
    let cases = [
        (
            Nomogram::Liverpool,
            Band::Full(PercentileBand::P25To50),
            Band::Full(PercentileBand::P25To50),
        ),
        (
            Nomogram::Miskolc(MiskolcBsa::Small),
            Band::Full(PercentileBand::P10To25),
            Band::Full(PercentileBand::P5To10),
        ),
        (
            Nomogram::Toguri(ToguriBsa::Small),
            Band::Screening(ScreeningBand::P10To15),
            Band::Screening(ScreeningBand::P5To10),
        ),
    ];
    for (nomogram, qmax, qave) in cases {
        let m = nomogram.default_measurement();
        let a = nomogram.assess(&m).unwrap().unwrap();
        assert_eq!(a.qmax.band, qmax, "{nomogram:?}");
        assert_eq!(a.qave.band, qave, "{nomogram:?}");
        assert_eq!(a.qmax.label, qmax.label());
        assert_eq!(a.qave.severity, qave.severity());
    }
}

#[test]
fn test_zero_volume_is_insufficient_input() {
    let m = Measurement {
        volume: 0.0,
        qmax: 20.0,
        qave: 10.0,
    };
    for nomogram in all_nomograms() {
        assert!(nomogram.assess(&m).unwrap().is_none());
        assert!(nomogram.plots(&m).unwrap().is_none());
    }
}

#[test]
fn test_invalid_measurement_rejected() {
    let m = Measurement {
        volume: 100.0,
        qmax: -1.0,
        qave: 10.0,
    };
    assert!(matches!(
        Nomogram::Liverpool.assess(&m),
        Err(NomogramError::InvalidMeasurement(_))
    ));
}

#[test]
fn test_idempotent() {
    let m = Measurement {
        volume: 210.0,
        qmax: 17.5,
        qave: 9.25,
    };
    for nomogram in all_nomograms() {
        assert_eq!(nomogram.assess(&m).unwrap(), nomogram.assess(&m).unwrap());
        assert_eq!(nomogram.plots(&m).unwrap(), nomogram.plots(&m).unwrap());
    }
}

#[test]
fn test_plots_cover_both_quantities() {
    let m = Measurement {
        volume: 180.0,
        qmax: 15.0,
        qave: 8.0,
    };
    for nomogram in all_nomograms() {
        let set = nomogram.plots(&m).unwrap().unwrap();
        assert_eq!(set.plots.len(), 2);
        assert_eq!(set.plots[0].quantity, Quantity::Qmax);
        assert_eq!(set.plots[1].quantity, Quantity::Qave);
        assert_eq!(set.plots[1].patient.y, 8.0);
        let expected_lines = match nomogram {
            Nomogram::Toguri(_) => 5,
            _ => 7,
        };
        assert!(set.plots.iter().all(|p| p.lines.len() == expected_lines));
    }
}

#[test]
fn test_band_scale_per_model() {
    let m = Measurement {
        volume: 100.0,
        qmax: 10.0,
        qave: 5.0,
    };
    for nomogram in all_nomograms() {
        let a = nomogram.assess(&m).unwrap().unwrap();
        for r in a.results() {
            match (nomogram, r.band) {
                (Nomogram::Toguri(_), Band::Screening(_)) => {}
                (Nomogram::Liverpool | Nomogram::Miskolc(_), Band::Full(_)) => {}
                other => panic!("band scale mismatch: {other:?}"),
            }
        }
    }
}

#[test]
fn test_serialized_shape() {
    let a = Nomogram::Miskolc(MiskolcBsa::Medium)
        .assess(&Measurement {
            volume: 150.0,
            qmax: 18.0,
            qave: 10.0,
        })
        .unwrap()
        .unwrap();
    let v = serde_json::to_value(&a).unwrap();
    assert_eq!(v["nomogram"]["model"], "miskolc");
    assert_eq!(v["nomogram"]["bsa"], "medium");
    assert_eq!(v["qmax"]["quantity"], "qmax");
    assert_eq!(v["qmax"]["band"]["scale"], "full");
    assert!(v["qmax"]["severity"].is_string());
}
