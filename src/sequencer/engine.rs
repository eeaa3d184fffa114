use crate::{
    foundation::core::Millis,
    foundation::error::StrokeResult,
    sequencer::clock::{Clock, MonotonicClock},
    sequencer::config::{ResumePolicy, SequencerConfig},
    sequencer::schedule::StrokeSchedule,
    stroke::model::StrokeSet,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Playback phase of a [`StrokeSequencer`].
pub enum Phase {
    /// No run in progress.
    #[default]
    Idle,
    /// Progress advances on every tick.
    Playing,
    /// Progress frozen until `resume`.
    Paused,
    /// Every animated stroke is fully drawn.
    Completed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
/// Generation counter identifying one run. Ticks carrying an older token are ignored.
pub struct RunToken(u64);

impl RunToken {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw generation number.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What the host should do after delivering a tick.
pub enum TickOutcome {
    /// Still playing; schedule another tick with the same token.
    Rearm,
    /// Paused or idle; wait for a command before ticking again.
    Halted,
    /// The run finished.
    Completed,
    /// Token belongs to a superseded run; nothing changed.
    Stale,
}

impl TickOutcome {
    /// True when another frame callback should be armed.
    pub fn should_rearm(self) -> bool {
        matches!(self, Self::Rearm)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Read-only view of sequencer state consumed by rendering.
pub struct SequencerSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// Position within the animated indices; `None` while idle.
    pub cursor: Option<usize>,
    /// Stroke-set index at `cursor`.
    pub stroke: Option<usize>,
    /// Revealed fraction of `stroke`.
    pub progress: f64,
    /// Live run token.
    pub token: RunToken,
}

/// Timing of the stroke currently being revealed, in clock time.
#[derive(Clone, Copy, Debug)]
struct Segment {
    origin: Millis, // where the delay begins
    delay: Millis,
    duration: Millis,
    from: f64, // progress at the start of the curve
}

/// Stroke reveal state machine.
///
/// Commands (`start`, `pause`, `resume`, `stop`, `restart`) return immediately. The
/// host keeps a frame callback armed with the returned [`RunToken`] and calls
/// [`StrokeSequencer::tick`] from it for as long as the outcome asks for a rearm.
#[derive(Debug)]
pub struct StrokeSequencer<C: Clock = MonotonicClock> {
    clock: C,
    config: SequencerConfig,
    schedule: StrokeSchedule,
    indices: Vec<usize>,
    phase: Phase,
    cursor: Option<usize>,
    progress: f64,
    token: RunToken,
    segment: Option<Segment>,
    paused_at: Option<Millis>,
}

impl StrokeSequencer<MonotonicClock> {
    /// Sequencer on the wall clock.
    pub fn new(config: SequencerConfig) -> StrokeResult<Self> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> StrokeSequencer<C> {
    /// Sequencer reading time from `clock`.
    pub fn with_clock(config: SequencerConfig, clock: C) -> StrokeResult<Self> {
        config.validate()?;
        Ok(Self {
            clock,
            config,
            schedule: StrokeSchedule::default(),
            indices: Vec::new(),
            phase: Phase::Idle,
            cursor: None,
            progress: 0.0,
            token: RunToken::default(),
            segment: None,
            paused_at: None,
        })
    }

    /// Timing configuration.
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Time source.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Position within the animated indices.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Revealed fraction of the stroke at `cursor`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Live run token.
    pub fn token(&self) -> RunToken {
        self.token
    }

    /// Animated indices of the most recent run, in reveal order.
    pub fn animated_indices(&self) -> &[usize] {
        &self.indices
    }

    /// Timing of the most recent run.
    pub fn schedule(&self) -> &StrokeSchedule {
        &self.schedule
    }

    /// Stroke-set index currently being revealed.
    pub fn active_stroke(&self) -> Option<usize> {
        self.cursor
            .and_then(|c| self.schedule.get(c))
            .map(|e| e.stroke)
    }

    /// Copy of the state rendering reads.
    pub fn snapshot(&self) -> SequencerSnapshot {
        SequencerSnapshot {
            phase: self.phase,
            cursor: self.cursor,
            stroke: self.active_stroke(),
            progress: self.progress,
            token: self.token,
        }
    }

    /// Begin a fresh run over `indices` of `strokes`.
    ///
    /// Out-of-range indices are rejected without touching state. An empty `indices`
    /// ends any current run and leaves the sequencer idle (`Ok(None)`).
    #[tracing::instrument(skip(self, strokes), fields(strokes = strokes.len()))]
    pub fn start(
        &mut self,
        strokes: &StrokeSet,
        indices: &[usize],
    ) -> StrokeResult<Option<RunToken>> {
        let schedule = match StrokeSchedule::new(strokes, indices, &self.config) {
            Ok(schedule) => schedule,
            Err(err) => {
                tracing::warn!(%err, "rejected start");
                return Err(err);
            }
        };

        self.stop();
        self.schedule = schedule;
        self.indices = indices.to_vec();
        if self.schedule.is_empty() {
            tracing::debug!("nothing to animate");
            return Ok(None);
        }
        Ok(Some(self.begin_run()))
    }

    /// Stop and start again over the same strokes and indices.
    #[tracing::instrument(skip(self))]
    pub fn restart(&mut self) -> Option<RunToken> {
        self.stop();
        if self.schedule.is_empty() {
            return None;
        }
        Some(self.begin_run())
    }

    /// Freeze progress. Only valid while playing; returns whether it took effect.
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let now = self.clock.now();
        self.advance(now);
        if self.phase != Phase::Playing {
            return false;
        }
        self.phase = Phase::Paused;
        self.paused_at = Some(now);
        tracing::debug!(cursor = ?self.cursor, progress = self.progress, "paused");
        true
    }

    /// Continue from the frozen progress. Only valid while paused; returns the token
    /// to arm ticks with.
    pub fn resume(&mut self) -> Option<RunToken> {
        if self.phase != Phase::Paused {
            return None;
        }
        let now = self.clock.now();
        let paused_at = self.paused_at.take().unwrap_or(now);
        let gap = now.saturating_sub(paused_at);

        if let Some(seg) = self.segment.as_mut() {
            // A pause inside the delay always resumes the remaining delay.
            let in_delay = paused_at.saturating_sub(seg.origin) < seg.delay;
            if in_delay || self.config.resume == ResumePolicy::PreserveTiming {
                seg.origin = seg.origin.saturating_add(gap);
            } else {
                *seg = Segment {
                    origin: now,
                    delay: Millis::ZERO,
                    duration: seg.duration,
                    from: self.progress,
                };
            }
        }

        self.phase = Phase::Playing;
        tracing::debug!(cursor = ?self.cursor, progress = self.progress, "resumed");
        Some(self.token)
    }

    /// End any run and return to idle. Ticks from before the stop become stale.
    pub fn stop(&mut self) {
        self.token = self.token.next();
        if self.phase != Phase::Idle {
            tracing::debug!(from = ?self.phase, "stopped");
        }
        self.phase = Phase::Idle;
        self.cursor = None;
        self.progress = 0.0;
        self.segment = None;
        self.paused_at = None;
    }

    /// Advance to the current clock time if `token` is live.
    pub fn tick(&mut self, token: RunToken) -> TickOutcome {
        if token != self.token {
            tracing::trace!(
                stale = token.as_u64(),
                live = self.token.as_u64(),
                "discarding stale tick"
            );
            return TickOutcome::Stale;
        }
        match self.phase {
            Phase::Playing => {
                let now = self.clock.now();
                self.advance(now);
                if self.phase == Phase::Completed {
                    TickOutcome::Completed
                } else {
                    TickOutcome::Rearm
                }
            }
            Phase::Completed => TickOutcome::Completed,
            Phase::Idle | Phase::Paused => TickOutcome::Halted,
        }
    }

    fn begin_run(&mut self) -> RunToken {
        self.token = self.token.next();
        let now = self.clock.now();
        self.phase = Phase::Playing;
        self.cursor = Some(0);
        self.progress = 0.0;
        self.paused_at = None;
        self.segment = self.schedule.get(0).map(|first| Segment {
            origin: now,
            delay: first.delay,
            duration: first.duration,
            from: 0.0,
        });
        tracing::debug!(
            token = self.token.as_u64(),
            strokes = self.schedule.len(),
            total_ms = self.schedule.total().0,
            "run started"
        );
        self.token
    }

    fn advance(&mut self, now: Millis) {
        // A single call may cross several strokes when ticks are sparse.
        while let (Some(cursor), Some(seg)) = (self.cursor, self.segment) {
            let local = now.saturating_sub(seg.origin);
            if local < seg.delay {
                self.progress = seg.from;
                return;
            }

            let active = local.saturating_sub(seg.delay);
            if active < seg.duration {
                let t = active.as_f64() / seg.duration.as_f64();
                let p = seg.from + (1.0 - seg.from) * self.config.ease.apply(t);
                self.progress = p.clamp(0.0, 1.0).max(self.progress);
                return;
            }

            let done_at = seg
                .origin
                .saturating_add(seg.delay)
                .saturating_add(seg.duration);
            let Some(next) = self.schedule.get(cursor + 1).copied() else {
                self.progress = 1.0;
                self.segment = None;
                self.phase = Phase::Completed;
                tracing::debug!(cursor, "run completed");
                return;
            };

            self.cursor = Some(cursor + 1);
            self.progress = 0.0;
            self.segment = Some(Segment {
                origin: done_at,
                delay: next.delay,
                duration: next.duration,
                from: 0.0,
            });
            tracing::debug!(cursor = cursor + 1, stroke = next.stroke, "next stroke");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/engine.rs"]
mod tests;
