use super::*;
use crate::sequencer::engine::Phase;

fn strokes(lengths: &[f64]) -> StrokeSet {
    StrokeSet::from_svg_paths(lengths.iter().map(|len| format!("M0,0 L{len},0"))).unwrap()
}

#[test]
fn simulation_ends_exactly_at_completion() {
    let rows = simulate_run(
        &strokes(&[10.0, 20.0]),
        &[0, 1],
        SequencerConfig::default(),
        Millis(100),
    )
    .unwrap();

    let times: Vec<u64> = rows.iter().map(|r| r.at.0).collect();
    assert_eq!(times, vec![0, 100, 200, 300, 400, 500, 550]);
    assert_eq!(rows[0].snapshot.phase, Phase::Playing);
    assert_eq!(rows[4].snapshot.cursor, Some(1));

    let last = rows.last().unwrap().snapshot;
    assert_eq!(last.phase, Phase::Completed);
    assert_eq!((last.cursor, last.progress), (Some(1), 1.0));
}

#[test]
fn empty_run_yields_single_idle_row() {
    let config = SequencerConfig::default();
    let rows = simulate_run(&strokes(&[10.0]), &[], config, Millis(16)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].snapshot.phase, Phase::Idle);
}

#[test]
fn zero_step_is_rejected() {
    let config = SequencerConfig::default();
    assert!(simulate_run(&strokes(&[10.0]), &[0], config, Millis::ZERO).is_err());
}

#[test]
fn snapshot_at_matches_simulation() {
    let set = strokes(&[10.0, 20.0]);
    let snap = snapshot_at(&set, &[0, 1], SequencerConfig::default(), Millis(450)).unwrap();
    assert_eq!(snap.cursor, Some(1));
    assert!((snap.progress - 0.5).abs() < 1e-9);

    assert!(snapshot_at(&set, &[3], SequencerConfig::default(), Millis(0)).is_err());
}

#[test]
fn rows_serialize_flat() {
    let config = SequencerConfig::default();
    let rows = simulate_run(&strokes(&[10.0]), &[0], config, Millis(200)).unwrap();
    let v = serde_json::to_value(rows[1]).unwrap();
    assert_eq!(v["at"], 200);
    assert_eq!(v["phase"], "playing");
    assert_eq!(v["cursor"], 0);
    assert_eq!(v["stroke"], 0);
}

#[test]
fn unbounded_durations_fail_instead_of_looping() {
    let config = SequencerConfig {
        ms_per_length_unit: 1e300,
        ..SequencerConfig::default()
    };
    let set = strokes(&[10.0]);
    assert!(simulate_run(&set, &[0], config, Millis(16)).is_err());
    assert!(snapshot_at(&set, &[0], config, Millis(u64::MAX)).is_err());
}
