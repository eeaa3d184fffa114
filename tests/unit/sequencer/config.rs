use super::*;

#[test]
fn defaults_match_documented_timing() {
    let c = SequencerConfig::default();
    assert_eq!(c.initial_delay_ms, 250);
    assert_eq!(c.inter_stroke_delay_ms, 0);
    assert_eq!(c.duration_ms(10.0), Millis(100));
    assert_eq!(c.duration_ms(20.0), Millis(200));
    assert_eq!(c.ease, Ease::InOutSine);
    assert_eq!(c.resume, ResumePolicy::PreserveTiming);
}

#[test]
fn duration_rounds_to_nearest_ms() {
    let c = SequencerConfig::default();
    assert_eq!(c.duration_ms(12.34), Millis(123));
    assert_eq!(c.duration_ms(12.36), Millis(124));
    assert_eq!(c.duration_ms(0.0), Millis::ZERO);
    assert_eq!(c.duration_ms(-5.0), Millis::ZERO);
}

#[test]
fn delay_depends_on_position() {
    let c = SequencerConfig {
        initial_delay_ms: 300,
        inter_stroke_delay_ms: 40,
        ..SequencerConfig::default()
    };
    assert_eq!(c.delay_before(0), Millis(300));
    assert_eq!(c.delay_before(1), Millis(40));
    assert_eq!(c.delay_before(7), Millis(40));
}

#[test]
fn validate_rejects_bad_rates() {
    let mut c = SequencerConfig::default();
    assert!(c.validate().is_ok());
    c.ms_per_length_unit = -1.0;
    assert!(c.validate().is_err());
    c.ms_per_length_unit = f64::INFINITY;
    assert!(c.validate().is_err());
}

#[test]
fn partial_json_fills_defaults() {
    let c: SequencerConfig =
        serde_json::from_str(r#"{"inter_stroke_delay_ms": 80, "resume": "FullDuration"}"#)
            .unwrap();
    assert_eq!(c.initial_delay_ms, 250);
    assert_eq!(c.inter_stroke_delay_ms, 80);
    assert_eq!(c.resume, ResumePolicy::FullDuration);
}
