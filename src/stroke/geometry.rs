use kurbo::{ParamCurve, ParamCurveArclen, PathEl, PathSeg};

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Vec2};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::stroke::model::ARCLEN_ACCURACY;

/// Locate the segment holding arc length `target` and the parameter on it.
fn locate(path: &BezPath, target: f64) -> Option<(PathSeg, f64, Vec<PathSeg>)> {
    let mut acc = 0.0;
    let mut before = Vec::new();
    let mut last = None;
    for seg in path.segments() {
        let len = seg.arclen(ARCLEN_ACCURACY);
        if acc + len >= target && len > 0.0 {
            let t = seg.inv_arclen(target - acc, ARCLEN_ACCURACY).clamp(0.0, 1.0);
            return Some((seg, t, before));
        }
        acc += len;
        before.push(seg);
        last = Some(seg);
    }
    // Rounding left `target` just past the summed length; pin to the end.
    let seg = last?;
    before.pop();
    Some((seg, 1.0, before))
}

fn first_point(path: &BezPath) -> Option<Point> {
    path.elements().iter().find_map(|el| match *el {
        PathEl::MoveTo(p) => Some(p),
        _ => None,
    })
}

/// Point reached after travelling `fraction` of the path's arc length.
///
/// A path with no drawable segments yields its first `MoveTo` point, an empty path
/// yields `None`.
pub fn point_at_fraction(path: &BezPath, fraction: f64) -> Option<Point> {
    let total = crate::stroke::model::path_length(path);
    if total <= 0.0 {
        return first_point(path);
    }
    let target = fraction.clamp(0.0, 1.0) * total;
    locate(path, target).map(|(seg, t, _)| seg.eval(t))
}

/// Sub-path covering the first `fraction` of the path's arc length.
pub fn trim_to_fraction(path: &BezPath, fraction: f64) -> BezPath {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction >= 1.0 {
        return path.clone();
    }
    let total = crate::stroke::model::path_length(path);
    if fraction <= 0.0 || total <= 0.0 {
        return BezPath::new();
    }
    match locate(path, fraction * total) {
        Some((seg, t, mut before)) => {
            if t > 0.0 {
                before.push(seg.subsegment(0.0..t));
            }
            BezPath::from_path_segments(before.into_iter())
        }
        None => BezPath::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Uniform scale-to-fit mapping from source coordinates onto a canvas.
pub struct Viewport {
    /// Source to canvas transform.
    pub transform: Affine,
    /// Uniform scale factor inside `transform`; arc lengths scale by this.
    pub scale: f64,
}

impl Viewport {
    /// Fit `bounds` into `canvas` inset by `padding` on every side, centered.
    ///
    /// When `flip_y` is set, source y grows upward (font-style coordinates).
    pub fn fit(bounds: Rect, canvas: Canvas, padding: f64, flip_y: bool) -> StrokeResult<Self> {
        canvas.validate()?;
        if !padding.is_finite() || padding < 0.0 {
            return Err(StrokeError::validation("padding must be finite and >= 0"));
        }
        if !(bounds.x0.is_finite()
            && bounds.y0.is_finite()
            && bounds.x1.is_finite()
            && bounds.y1.is_finite())
        {
            return Err(StrokeError::validation("bounds must be finite"));
        }
        let bounds = bounds.abs();
        let avail_w = f64::from(canvas.width) - 2.0 * padding;
        let avail_h = f64::from(canvas.height) - 2.0 * padding;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            return Err(StrokeError::validation(
                "padding leaves no drawable area on the canvas",
            ));
        }

        let scale = match (bounds.width() > 0.0, bounds.height() > 0.0) {
            (true, true) => (avail_w / bounds.width()).min(avail_h / bounds.height()),
            (true, false) => avail_w / bounds.width(),
            (false, true) => avail_h / bounds.height(),
            (false, false) => {
                return Err(StrokeError::validation("bounds must have a non-zero extent"));
            }
        };

        let canvas_center = Vec2::new(
            f64::from(canvas.width) / 2.0,
            f64::from(canvas.height) / 2.0,
        );
        let y_scale = if flip_y { -scale } else { scale };
        let transform = Affine::translate(canvas_center)
            * Affine::scale_non_uniform(scale, y_scale)
            * Affine::translate(-bounds.center().to_vec2());
        Ok(Self { transform, scale })
    }

    /// Identity mapping (source units are canvas pixels).
    pub fn identity() -> Self {
        Self {
            transform: Affine::IDENTITY,
            scale: 1.0,
        }
    }

    /// Map a source path onto the canvas.
    pub fn map_path(&self, path: &BezPath) -> BezPath {
        self.transform * path.clone()
    }

    /// Map a source point onto the canvas.
    pub fn map_point(&self, p: Point) -> Point {
        self.transform * p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/geometry.rs"]
mod tests;
