//! strokeplay reveals a vector figure one stroke at a time.
//!
//! Given the strokes of a figure (a handwritten character, a signature, a diagram) and the
//! order to reveal them in, a [`StrokeSequencer`] turns elapsed time and host commands into
//! a `(cursor, progress)` pair, and [`compile_frame`] turns that pair into a backend-agnostic
//! [`FramePlan`] of draw operations.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: `SVG path data -> StrokeSet` (arc lengths via kurbo)
//! 2. **Sequence**: `StrokeSet + animated indices + Clock -> SequencerSnapshot`
//! 3. **Compile**: `Scene + SequencerSnapshot -> FramePlan` (placeholder, full, partial, marker)
//! 4. **Replay**: `FramePlan -> StrokeCanvas` (host painting surface)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded, non-blocking**: commands return immediately; the host drives
//!   advancement from its frame callback with [`StrokeSequencer::tick`].
//! - **Run tokens**: every start/stop bumps a [`RunToken`]; ticks carrying an old token are
//!   ignored.
//! - **Rendering reads, never writes**: compiling a frame takes the sequencer state by
//!   shared reference.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod document;
mod foundation;
mod render;
mod sequencer;
mod stroke;

pub use animation::ease::Ease;
pub use document::model::{PreparedFigure, StrokeDocument};
pub use foundation::core::{Affine, BezPath, Canvas, Millis, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{StrokeError, StrokeResult};
pub use render::canvas::{CanvasCall, RecordingCanvas, StrokeCanvas, replay_plan};
pub use render::plan::{Dash, DrawOp, FramePlan, Scene, compile_frame};
pub use render::style::StrokeStyle;
pub use sequencer::clock::{Clock, ManualClock, MonotonicClock};
pub use sequencer::config::{ResumePolicy, SequencerConfig};
pub use sequencer::engine::{Phase, RunToken, SequencerSnapshot, StrokeSequencer, TickOutcome};
pub use sequencer::schedule::{MAX_RUN_MS, ScheduleSample, ScheduledStroke, StrokeSchedule};
pub use sequencer::simulate::{TimedSnapshot, simulate_run, snapshot_at};
pub use stroke::geometry::{Viewport, point_at_fraction, trim_to_fraction};
pub use stroke::model::{ARCLEN_ACCURACY, Stroke, StrokeSet, path_length};
