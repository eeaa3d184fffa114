use crate::{
    animation::ease::Ease,
    foundation::core::Millis,
    foundation::error::{StrokeError, StrokeResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How a paused stroke continues once playback resumes.
pub enum ResumePolicy {
    /// Continue the frozen curve; active time on the stroke is unchanged.
    #[default]
    PreserveTiming,
    /// Restart the easing curve from the frozen progress over the full duration.
    FullDuration,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Timing knobs for a stroke reveal.
pub struct SequencerConfig {
    /// Delay before the first stroke starts moving.
    pub initial_delay_ms: u64,
    /// Delay inserted before every later stroke.
    pub inter_stroke_delay_ms: u64,
    /// Milliseconds of drawing time per unit of arc length.
    pub ms_per_length_unit: f64,
    /// Curve mapping a stroke's elapsed time to its progress.
    pub ease: Ease,
    /// Behavior of `resume` on a partly drawn stroke.
    pub resume: ResumePolicy,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 250,
            inter_stroke_delay_ms: 0,
            ms_per_length_unit: 10.0,
            ease: Ease::InOutSine,
            resume: ResumePolicy::PreserveTiming,
        }
    }
}

impl SequencerConfig {
    /// Reject rates that would make durations meaningless.
    pub fn validate(&self) -> StrokeResult<()> {
        if !self.ms_per_length_unit.is_finite() || self.ms_per_length_unit < 0.0 {
            return Err(StrokeError::validation(
                "ms_per_length_unit must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Drawing time for a stroke of arc length `length`.
    pub fn duration_ms(&self, length: f64) -> Millis {
        let ms = (length.max(0.0) * self.ms_per_length_unit).round();
        if ms.is_finite() {
            Millis(ms as u64)
        } else {
            Millis::ZERO
        }
    }

    /// Delay before the stroke at animation position `cursor`.
    pub fn delay_before(&self, cursor: usize) -> Millis {
        if cursor == 0 {
            Millis(self.initial_delay_ms)
        } else {
            Millis(self.inter_stroke_delay_ms)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/config.rs"]
mod tests;
