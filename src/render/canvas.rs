use crate::{
    foundation::core::{BezPath, Point, Rgba8},
    render::plan::{Dash, DrawOp, FramePlan},
    stroke::geometry::trim_to_fraction,
};

/// Painting surface a [`FramePlan`] is replayed onto.
pub trait StrokeCanvas {
    /// Stroke the whole path.
    fn draw_path(&mut self, path: &BezPath, color: Rgba8, width: f64);

    /// Stroke the first `visible_fraction` of the path.
    ///
    /// Canvases with dash support should apply `dash`; the default trims the
    /// geometry and strokes the remainder.
    fn draw_partial_path(
        &mut self,
        path: &BezPath,
        visible_fraction: f64,
        _dash: Dash,
        color: Rgba8,
        width: f64,
    ) {
        self.draw_path(&trim_to_fraction(path, visible_fraction), color, width);
    }

    /// Fill a circle marker.
    fn draw_marker(&mut self, center: Point, radius: f64, color: Rgba8);
}

/// Issue every operation of `plan` to `canvas` in order.
pub fn replay_plan<C: StrokeCanvas + ?Sized>(canvas: &mut C, plan: &FramePlan) {
    for op in &plan.ops {
        match op {
            DrawOp::Placeholder {
                path, color, width, ..
            }
            | DrawOp::Full {
                path, color, width, ..
            } => canvas.draw_path(path, *color, *width),
            DrawOp::Partial {
                path,
                visible_fraction,
                dash,
                color,
                width,
                ..
            } => canvas.draw_partial_path(path, *visible_fraction, *dash, *color, *width),
            DrawOp::Marker {
                center,
                radius,
                color,
                ..
            } => canvas.draw_marker(*center, *radius, *color),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A call received by a [`RecordingCanvas`].
pub enum CanvasCall {
    /// `draw_path`.
    Path {
        /// Stroked geometry.
        path: BezPath,
        /// Paint color.
        color: Rgba8,
    },
    /// `draw_partial_path`.
    Partial {
        /// Full geometry.
        path: BezPath,
        /// Revealed share of the length.
        visible_fraction: f64,
        /// Paint color.
        color: Rgba8,
    },
    /// `draw_marker`.
    Marker {
        /// Marker center.
        center: Point,
        /// Paint color.
        color: Rgba8,
    },
}

#[derive(Clone, Debug, Default)]
/// Canvas that records calls instead of painting, for hosts that batch or inspect.
pub struct RecordingCanvas {
    /// Calls in arrival order.
    pub calls: Vec<CanvasCall>,
}

impl StrokeCanvas for RecordingCanvas {
    fn draw_path(&mut self, path: &BezPath, color: Rgba8, _width: f64) {
        self.calls.push(CanvasCall::Path {
            path: path.clone(),
            color,
        });
    }

    fn draw_partial_path(
        &mut self,
        path: &BezPath,
        visible_fraction: f64,
        _dash: Dash,
        color: Rgba8,
        _width: f64,
    ) {
        self.calls.push(CanvasCall::Partial {
            path: path.clone(),
            visible_fraction,
            color,
        });
    }

    fn draw_marker(&mut self, center: Point, _radius: f64, color: Rgba8) {
        self.calls.push(CanvasCall::Marker { center, color });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
