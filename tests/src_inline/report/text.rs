use super::*;
use crate::model::bsa::MiskolcBsa;
use crate::report::build_summary;

#[test]
fn test_assessment_text() {
    let nomogram = Nomogram::Miskolc(MiskolcBsa::Small);
    let a = nomogram.assess(&nomogram.default_measurement()).unwrap();
    let text = render_assessment_text(&nomogram, a.as_ref());
    assert!(text.starts_with("Miskolc nomogram\n"));
    assert!(text.contains("BSA: < 0.92 m² (Kicsi)"));
    assert!(text.contains("10-25. percentilis (Mérsékelt)"));
    assert!(text.contains("[moderate]"));
    assert!(text.contains("5-10. percentilis (Alacsony)"));
}

#[test]
fn test_insufficient_text() {
    let text = render_assessment_text(&Nomogram::Liverpool, None);
    assert!(text.contains("Insufficient input"));
    assert!(!text.contains("BSA:"));
}

#[test]
fn test_batch_report_sections() {
    let summary = build_summary(&crate::report::tests::sample_outcomes());
    let text = render_batch_report(&summary);
    assert!(text.contains("Cases: 3\n"));
    assert!(text.contains("Insufficient input (volume <= 0): 1\n"));
    assert!(text.contains("toguri"));
    assert!(text.contains("Pathological fraction: 0.500000"));
}
