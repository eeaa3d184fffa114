use crate::{
    foundation::core::{BezPath, Point, Rgba8},
    foundation::error::{StrokeError, StrokeResult},
    render::style::StrokeStyle,
    sequencer::engine::{Phase, SequencerSnapshot},
    stroke::geometry::{Viewport, point_at_fraction},
    stroke::model::StrokeSet,
};

fn serialize_svg<S: serde::Serializer>(path: &BezPath, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_svg())
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Two-entry dash pattern that reveals the first `on` pixels of a path.
pub struct Dash {
    /// Visible length in canvas pixels.
    pub on: f64,
    /// Gap length; at least the full path length so nothing repeats.
    pub off: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
/// Draw operation emitted for one frame. Paths are already in canvas space.
pub enum DrawOp {
    /// Dimmed stand-in for a stroke that is not fully drawn.
    Placeholder {
        /// Stroke-set index.
        stroke: usize,
        /// Stroke geometry in canvas space.
        #[serde(serialize_with = "serialize_svg")]
        path: BezPath,
        /// Paint color.
        color: Rgba8,
        /// Stroke width in canvas pixels.
        width: f64,
    },
    /// Completely drawn stroke.
    Full {
        /// Stroke-set index.
        stroke: usize,
        /// Stroke geometry in canvas space.
        #[serde(serialize_with = "serialize_svg")]
        path: BezPath,
        /// Paint color.
        color: Rgba8,
        /// Stroke width in canvas pixels.
        width: f64,
    },
    /// Active stroke revealed up to `visible_fraction` of its length.
    Partial {
        /// Stroke-set index.
        stroke: usize,
        /// Whole stroke geometry in canvas space; only the first part is revealed.
        #[serde(serialize_with = "serialize_svg")]
        path: BezPath,
        /// Revealed share of the arc length, in `(0,1]`.
        visible_fraction: f64,
        /// Dash pattern revealing the same share.
        dash: Dash,
        /// Paint color.
        color: Rgba8,
        /// Stroke width in canvas pixels.
        width: f64,
    },
    /// Finger marker at the reveal point of the active stroke.
    Marker {
        /// Stroke-set index of the active stroke.
        stroke: usize,
        /// Marker center in canvas space.
        center: Point,
        /// Radius in canvas pixels.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Ordered draw operations for one frame, back to front.
pub struct FramePlan {
    /// Sequencer phase the plan was compiled from.
    pub phase: Phase,
    /// Operations in paint order.
    pub ops: Vec<DrawOp>,
}

#[derive(Clone, Copy, Debug)]
/// Everything about a figure that stays fixed across frames.
pub struct Scene<'a> {
    /// Stroke geometry in source coordinates.
    pub strokes: &'a StrokeSet,
    /// Reveal order, as handed to the sequencer.
    pub animated: &'a [usize],
    /// Strokes painted in the highlight color once drawn.
    pub highlighted: &'a [usize],
    /// Paint parameters.
    pub style: &'a StrokeStyle,
    /// Source to canvas mapping.
    pub viewport: Viewport,
}

impl Scene<'_> {
    fn color_for(&self, stroke: usize) -> Rgba8 {
        if self.highlighted.contains(&stroke) {
            self.style.highlight_color
        } else {
            self.style.stroke_color
        }
    }
}

/// Turn the sequencer's state into this frame's draw operations.
///
/// Strokes before the cursor in reveal order are drawn fully (all animated strokes
/// once completed), the stroke at the cursor is drawn partially with a marker, and
/// every stroke that is not fully drawn gets a placeholder underneath.
#[tracing::instrument(skip_all, fields(phase = ?snapshot.phase, cursor = ?snapshot.cursor))]
pub fn compile_frame(scene: &Scene<'_>, snapshot: &SequencerSnapshot) -> StrokeResult<FramePlan> {
    let strokes = scene.strokes;
    strokes.check_indices(scene.animated)?;
    if let Some(bad) = scene.highlighted.iter().find(|&&i| i >= strokes.len()) {
        return Err(StrokeError::validation(format!(
            "highlighted index {bad} is out of range for {} strokes",
            strokes.len()
        )));
    }

    let (drawn_upto, active) = match snapshot.phase {
        Phase::Idle => (0, None),
        Phase::Completed => (scene.animated.len(), None),
        Phase::Playing | Phase::Paused => {
            let cursor = snapshot.cursor.ok_or_else(|| {
                StrokeError::validation("playing snapshot must carry a cursor")
            })?;
            let Some(&stroke) = scene.animated.get(cursor) else {
                return Err(StrokeError::validation(format!(
                    "cursor {cursor} is out of range for {} animated strokes",
                    scene.animated.len()
                )));
            };
            (cursor, Some(stroke))
        }
    };

    let mut full = vec![false; strokes.len()];
    let mut full_order = Vec::with_capacity(drawn_upto);
    for &stroke in &scene.animated[..drawn_upto] {
        if !full[stroke] {
            full[stroke] = true;
            full_order.push(stroke);
        }
    }

    let style = scene.style;
    let mut ops = Vec::new();

    if style.show_placeholders {
        for (idx, stroke) in strokes.iter().enumerate() {
            if !full[idx] {
                ops.push(DrawOp::Placeholder {
                    stroke: idx,
                    path: scene.viewport.map_path(&stroke.path),
                    color: style.placeholder_color,
                    width: style.stroke_width,
                });
            }
        }
    }

    for &idx in &full_order {
        if let Some(stroke) = strokes.get(idx) {
            ops.push(DrawOp::Full {
                stroke: idx,
                path: scene.viewport.map_path(&stroke.path),
                color: scene.color_for(idx),
                width: style.stroke_width,
            });
        }
    }

    if let Some(idx) = active
        && let Some(stroke) = strokes.get(idx)
    {
        let progress = snapshot.progress.clamp(0.0, 1.0);
        if progress > 0.0 {
            let total = stroke.length * scene.viewport.scale;
            ops.push(DrawOp::Partial {
                stroke: idx,
                path: scene.viewport.map_path(&stroke.path),
                visible_fraction: progress,
                dash: Dash {
                    on: total * progress,
                    off: total,
                },
                color: scene.color_for(idx),
                width: style.stroke_width,
            });
        }
        if style.show_marker
            && let Some(p) = point_at_fraction(&stroke.path, progress)
        {
            ops.push(DrawOp::Marker {
                stroke: idx,
                center: scene.viewport.map_point(p),
                radius: style.marker_radius,
                color: style.marker_color,
            });
        }
    }

    tracing::trace!(ops = ops.len(), "frame compiled");
    Ok(FramePlan {
        phase: snapshot.phase,
        ops,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
