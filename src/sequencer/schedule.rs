use crate::{
    animation::ease::Ease,
    foundation::core::Millis,
    foundation::error::{StrokeError, StrokeResult},
    sequencer::config::SequencerConfig,
    stroke::model::StrokeSet,
};

/// Longest run a schedule accepts, delays included: 24 hours.
pub const MAX_RUN_MS: Millis = Millis(86_400_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Timing of one animated stroke within an uninterrupted run.
pub struct ScheduledStroke {
    /// Index into the stroke set.
    pub stroke: usize,
    /// Offset from run start at which this stroke's delay begins.
    pub start: Millis,
    /// Wait before progress starts moving.
    pub delay: Millis,
    /// Time for progress to go from 0 to 1.
    pub duration: Millis,
}

impl ScheduledStroke {
    /// Offset at which progress starts moving.
    pub fn draw_start(&self) -> Millis {
        self.start.saturating_add(self.delay)
    }

    /// Offset at which progress reaches 1.
    pub fn end(&self) -> Millis {
        self.draw_start().saturating_add(self.duration)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Sequencer position at a given run offset, assuming no pauses.
pub struct ScheduleSample {
    /// Position within the animated indices.
    pub cursor: usize,
    /// Revealed fraction of the stroke at `cursor`.
    pub progress: f64,
    /// Every animated stroke has been fully drawn.
    pub completed: bool,
}

#[derive(Clone, Debug, Default)]
/// Precomputed per-stroke delays and durations of a run, in animation order.
pub struct StrokeSchedule {
    entries: Vec<ScheduledStroke>,
    ease: Ease,
}

impl StrokeSchedule {
    /// Lay out `indices` back to back using `config` timing.
    pub fn new(
        strokes: &StrokeSet,
        indices: &[usize],
        config: &SequencerConfig,
    ) -> StrokeResult<Self> {
        strokes.check_indices(indices)?;
        config.validate()?;

        let mut cursor_time = Millis::ZERO;
        let mut entries = Vec::with_capacity(indices.len());
        for (pos, &stroke) in indices.iter().enumerate() {
            let length = strokes.get(stroke).map(|s| s.length).unwrap_or(0.0);
            let entry = ScheduledStroke {
                stroke,
                start: cursor_time,
                delay: config.delay_before(pos),
                duration: config.duration_ms(length),
            };
            cursor_time = entry.end();
            entries.push(entry);
        }
        if cursor_time > MAX_RUN_MS {
            return Err(StrokeError::validation(format!(
                "run of {} ms exceeds the {} ms limit",
                cursor_time.0, MAX_RUN_MS.0
            )));
        }

        Ok(Self {
            entries,
            ease: config.ease,
        })
    }

    /// Number of animated strokes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is animated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at animation position `cursor`.
    pub fn get(&self, cursor: usize) -> Option<&ScheduledStroke> {
        self.entries.get(cursor)
    }

    /// Entries in animation order.
    pub fn entries(&self) -> &[ScheduledStroke] {
        &self.entries
    }

    /// Run length without pauses.
    pub fn total(&self) -> Millis {
        self.entries.last().map(|e| e.end()).unwrap_or(Millis::ZERO)
    }

    /// Position at `elapsed` since start, or `None` for an empty schedule.
    pub fn sample(&self, elapsed: Millis) -> Option<ScheduleSample> {
        let last = self.entries.len().checked_sub(1)?;
        let Some(cursor) = self.entries.iter().position(|e| e.end() > elapsed) else {
            return Some(ScheduleSample {
                cursor: last,
                progress: 1.0,
                completed: true,
            });
        };

        let entry = &self.entries[cursor];
        let progress = if elapsed < entry.draw_start() {
            0.0
        } else {
            let active = elapsed.saturating_sub(entry.draw_start());
            self.ease.apply(active.as_f64() / entry.duration.as_f64())
        };
        Some(ScheduleSample {
            cursor,
            progress,
            completed: false,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/schedule.rs"]
mod tests;
