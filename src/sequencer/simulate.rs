use crate::{
    foundation::core::Millis,
    foundation::error::{StrokeError, StrokeResult},
    sequencer::clock::ManualClock,
    sequencer::config::SequencerConfig,
    sequencer::engine::{SequencerSnapshot, StrokeSequencer, TickOutcome},
    stroke::model::StrokeSet,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Sequencer state observed at one simulated instant.
pub struct TimedSnapshot {
    /// Simulated time since `start`.
    pub at: Millis,
    /// State after the tick at `at`.
    #[serde(flatten)]
    pub snapshot: SequencerSnapshot,
}

fn started(
    strokes: &StrokeSet,
    indices: &[usize],
    config: SequencerConfig,
) -> StrokeResult<(StrokeSequencer<ManualClock>, ManualClock)> {
    let clock = ManualClock::default();
    let mut seq = StrokeSequencer::with_clock(config, clock.clone())?;
    seq.start(strokes, indices)?;
    Ok((seq, clock))
}

/// Play a run on a manual clock, ticking every `step`, and record each tick
/// (the start instant included) until the run completes.
pub fn simulate_run(
    strokes: &StrokeSet,
    indices: &[usize],
    config: SequencerConfig,
    step: Millis,
) -> StrokeResult<Vec<TimedSnapshot>> {
    if step == Millis::ZERO {
        return Err(StrokeError::validation("simulation step must be > 0 ms"));
    }
    let (mut seq, clock) = started(strokes, indices, config)?;

    let mut out = vec![TimedSnapshot {
        at: Millis::ZERO,
        snapshot: seq.snapshot(),
    }];
    if seq.animated_indices().is_empty() {
        return Ok(out);
    }

    // The last sample lands on or past the scheduled end.
    let total = seq.schedule().total();
    let mut t = Millis::ZERO;
    loop {
        t = t.saturating_add(step).min(total);
        clock.set(t);
        let outcome = seq.tick(seq.token());
        out.push(TimedSnapshot {
            at: t,
            snapshot: seq.snapshot(),
        });
        if outcome != TickOutcome::Rearm {
            break;
        }
    }
    Ok(out)
}

/// State an uninterrupted run reaches `at` after `start`.
pub fn snapshot_at(
    strokes: &StrokeSet,
    indices: &[usize],
    config: SequencerConfig,
    at: Millis,
) -> StrokeResult<SequencerSnapshot> {
    let (mut seq, clock) = started(strokes, indices, config)?;
    clock.set(at);
    seq.tick(seq.token());
    Ok(seq.snapshot())
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/simulate.rs"]
mod tests;
