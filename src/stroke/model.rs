use kurbo::{ParamCurveArclen, PathEl, Shape};

use crate::foundation::core::{BezPath, Rect};
use crate::foundation::error::{StrokeError, StrokeResult};

/// Accuracy passed to kurbo's arc-length routines, in drawing units.
pub const ARCLEN_ACCURACY: f64 = 1e-3;

#[derive(Clone, Debug)]
/// One contiguous pen stroke and its measured arc length.
pub struct Stroke {
    /// Stroke geometry in source coordinates.
    pub path: BezPath,
    /// Total arc length of `path`, in source units.
    pub length: f64,
}

impl Stroke {
    /// Measure `path` and wrap it as a stroke.
    ///
    /// Fails when any control point is non-finite; an empty path is accepted and
    /// measures zero.
    pub fn new(path: BezPath) -> StrokeResult<Self> {
        if !path_is_finite(&path) {
            return Err(StrokeError::geometry(
                "stroke path contains non-finite coordinates",
            ));
        }
        let length = path_length(&path);
        Ok(Self { path, length })
    }

    /// Parse SVG path data (`d` attribute syntax) via kurbo and measure it.
    pub fn from_svg(d: &str) -> StrokeResult<Self> {
        let d = d.trim();
        if d.is_empty() {
            return Err(StrokeError::validation("stroke path data must be non-empty"));
        }
        let path = BezPath::from_svg(d)
            .map_err(|e| StrokeError::validation(format!("invalid stroke path data: {e}")))?;
        Self::new(path)
    }
}

#[derive(Clone, Debug, Default)]
/// Ordered, index-addressed strokes making up one figure.
pub struct StrokeSet {
    strokes: Vec<Stroke>,
}

impl StrokeSet {
    /// Measure every path, preserving order.
    pub fn from_paths(paths: impl IntoIterator<Item = BezPath>) -> StrokeResult<Self> {
        let strokes = paths
            .into_iter()
            .map(Stroke::new)
            .collect::<StrokeResult<Vec<_>>>()?;
        Ok(Self { strokes })
    }

    /// Parse every SVG path data string, preserving order.
    pub fn from_svg_paths<S: AsRef<str>>(
        paths: impl IntoIterator<Item = S>,
    ) -> StrokeResult<Self> {
        let strokes = paths
            .into_iter()
            .enumerate()
            .map(|(idx, d)| {
                Stroke::from_svg(d.as_ref()).map_err(|e| match e {
                    StrokeError::Validation(msg) => {
                        StrokeError::validation(format!("stroke {idx}: {msg}"))
                    }
                    StrokeError::Geometry(msg) => {
                        StrokeError::geometry(format!("stroke {idx}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<StrokeResult<Vec<_>>>()?;
        Ok(Self { strokes })
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// True when the set holds no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Stroke at `idx`, if in bounds.
    pub fn get(&self, idx: usize) -> Option<&Stroke> {
        self.strokes.get(idx)
    }

    /// Iterate strokes in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }

    /// Arc lengths in index order.
    pub fn lengths(&self) -> Vec<f64> {
        self.strokes.iter().map(|s| s.length).collect()
    }

    /// Check that every entry of `indices` addresses a stroke in this set.
    pub fn check_indices(&self, indices: &[usize]) -> StrokeResult<()> {
        if let Some((pos, bad)) = indices
            .iter()
            .enumerate()
            .find(|(_, idx)| **idx >= self.strokes.len())
        {
            return Err(StrokeError::validation(format!(
                "animated index {bad} at position {pos} is out of range for {} strokes",
                self.strokes.len()
            )));
        }
        Ok(())
    }

    /// Union of all stroke bounding boxes, `None` when every stroke is empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.strokes
            .iter()
            .filter(|s| !s.path.elements().is_empty())
            .map(|s| s.path.bounding_box())
            .reduce(|a, b| a.union(b))
    }
}

fn path_is_finite(path: &BezPath) -> bool {
    path.elements().iter().all(|el| match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => p.is_finite(),
        PathEl::QuadTo(a, b) => a.is_finite() && b.is_finite(),
        PathEl::CurveTo(a, b, c) => a.is_finite() && b.is_finite() && c.is_finite(),
        PathEl::ClosePath => true,
    })
}

/// Total arc length of `path`, summed over its segments.
pub fn path_length(path: &BezPath) -> f64 {
    path.segments().map(|seg| seg.arclen(ARCLEN_ACCURACY)).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/model.rs"]
mod tests;
