use super::*;
use crate::model::thresholds::{MISKOLC_LARGE, MISKOLC_SMALL};
use crate::nomogram::curves::CurveShape;

#[test]
fn test_published_worked_example() {
    let c = &MISKOLC_SMALL.qmax;
    let dist = distribution(150.0, c).unwrap();
    assert!((log_volume(150.0) - 151f64.ln()).abs() < 1e-12);
    assert!((dist.l5 - 15.1176).abs() < 1e-3);
    assert!((dist.l95 - 25.6445).abs() < 1e-3);
    assert!((dist.mean - 20.3811).abs() < 1e-3);
    assert!((dist.sd - 3.1997).abs() < 1e-3);

    let z = z_score(18.0, 150.0, c).unwrap();
    assert!((z - (-0.744159)).abs() < 1e-5);
    assert_eq!(classify(18.0, 150.0, c).unwrap(), PercentileBand::P10To25);
    assert_eq!(PercentileBand::P10To25.label(), "10-25. percentilis (Mérsékelt)");
}

#[test]
fn test_qave_default_form_value() {
    let z = z_score(10.0, 150.0, &MISKOLC_SMALL.qave).unwrap();
    assert!((z - (-1.460960)).abs() < 1e-5);
    assert_eq!(
        classify(10.0, 150.0, &MISKOLC_SMALL.qave).unwrap(),
        PercentileBand::P5To10
    );
}

#[test]
fn test_band_for_z_cut_points() {
    assert_eq!(band_for_z(-2.0), PercentileBand::Below5);
    assert_eq!(band_for_z(-1.645), PercentileBand::P5To10);
    assert_eq!(band_for_z(0.0), PercentileBand::P50To75);
    assert_eq!(band_for_z(-0.0001), PercentileBand::P25To50);
    assert_eq!(band_for_z(1.645), PercentileBand::Above95);
    assert_eq!(band_for_z(1.6), PercentileBand::P90To95);
}

#[test]
fn test_degenerate_spread_fails_fast() {
    let flat = MiskolcCoefficients::new(4.0, 1.0, 4.0, 1.0);
    match classify(10.0, 150.0, &flat) {
        Err(NomogramError::DegenerateSpread { l5, l95, .. }) => assert_eq!(l5, l95),
        other => panic!("expected degenerate spread, got {other:?}"),
    }

    let crossed = MiskolcCoefficients::new(4.0, 1.0, 2.0, 1.0);
    assert!(matches!(
        classify(10.0, 150.0, &crossed),
        Err(NomogramError::DegenerateSpread { .. })
    ));

    let broken = MiskolcCoefficients::new(f64::NAN, 1.0, 4.0, 1.0);
    assert!(matches!(
        distribution(150.0, &broken),
        Err(NomogramError::DegenerateSpread { .. })
    ));
}

#[test]
fn test_crossed_percentile_lines_are_rejected() {
    // the small-BSA Qmax lines cross near 37 l
    let c = &MISKOLC_SMALL.qmax;
    match distribution(60000.0, c) {
        Err(NomogramError::DegenerateSpread { l5, l95, .. }) => assert!(l95 < l5),
        other => panic!("expected degenerate spread, got {other:?}"),
    }
    assert!(classify(30.0, 60000.0, c).is_err());
    assert!(classify(80.0, 60000.0, c).is_err());

    // small-BSA Qave lines cross below about 0.24 ml
    assert!(matches!(
        distribution(0.1, &MISKOLC_SMALL.qave),
        Err(NomogramError::DegenerateSpread { .. })
    ));
}

#[test]
fn test_monotonic_in_value() {
    for bsa in [MiskolcBsa::Small, MiskolcBsa::Medium, MiskolcBsa::Large] {
        for quantity in Quantity::BOTH {
            let c = miskolc_profile(bsa).coefficients(quantity);
            for volume in [30.0, 150.0, 450.0] {
                let mut prev = PercentileBand::Below5;
                for i in 0..=800 {
                    let band = classify(i as f64 * 0.1, volume, c).unwrap();
                    assert!(band >= prev, "{bsa:?} {quantity:?} {volume}");
                    prev = band;
                }
            }
        }
    }
}

#[test]
fn test_percentile_coefficients_reproduce_endpoints() {
    let c = &MISKOLC_LARGE.qave;
    let (a5, b5) = percentile_coefficients(c, -1.645);
    let (a95, b95) = percentile_coefficients(c, 1.645);
    assert!((a5 - c.a5).abs() < 1e-12 && (b5 - c.b5).abs() < 1e-12);
    assert!((a95 - c.a95).abs() < 1e-12 && (b95 - c.b95).abs() < 1e-12);
}

#[test]
fn test_point_between_band_curves() {
    let c = &MISKOLC_LARGE.qmax;
    let volume = 300.0;
    for value in [5.0, 15.0, 18.0, 24.0, 30.0, 36.0, 40.0, 45.0] {
        let band = classify(value, volume, c).unwrap();
        let k = PercentileBand::ALL.iter().position(|&b| b == band).unwrap();
        if k > 0 {
            assert!(value >= curve_value(c, Z_CUTS[k - 1], volume));
        }
        if k < Z_CUTS.len() {
            assert!(value < curve_value(c, Z_CUTS[k], volume));
        }
    }
    assert_eq!(classify(30.0, volume, c).unwrap(), PercentileBand::P50To75);
}

#[test]
fn test_curves_are_log_linear_over_domain() {
    let c = &MISKOLC_SMALL.qmax;
    let lines = reference_curves(c);
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[3].percentile, 50);
    let CurveShape::Continuous { points } = &lines[3].shape else {
        panic!("expected continuous curve");
    };
    assert_eq!(points.len(), CURVE_SAMPLES);
    assert_eq!(points[0].x, 20.0);
    assert_eq!(points[99].x, 600.0);
    let mean_a = (c.a5 + c.a95) / 2.0;
    let mean_b = (c.b5 + c.b95) / 2.0;
    assert!((points[0].y - (mean_a * 21f64.ln() + mean_b)).abs() < 1e-9);
}

#[test]
fn test_curves_deterministic() {
    let c = &MISKOLC_SMALL.qave;
    assert_eq!(reference_curves(c), reference_curves(c));
}

#[test]
fn test_plot_metadata() {
    let m = Measurement {
        volume: 150.0,
        qmax: 18.0,
        qave: 10.0,
    };
    let p = plot(MiskolcBsa::Small, Quantity::Qmax, &m);
    assert_eq!(p.title, "Qmax Nomogram");
    assert_eq!(p.y_max, 50.0);
    assert_eq!(p.patient, CurvePoint { x: 150.0, y: 18.0 });
    let last_95 = p.lines[6].end_value().unwrap();
    assert_eq!(p.annotations[2].y, last_95);
    assert_eq!(p.annotations[2].text, "95%");
}
