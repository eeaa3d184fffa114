use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::core::{Canvas, Rect},
    foundation::error::{StrokeError, StrokeResult},
    render::plan::Scene,
    render::style::StrokeStyle,
    sequencer::config::SequencerConfig,
    stroke::geometry::Viewport,
    stroke::model::StrokeSet,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// JSON description of a figure and how to reveal it.
///
/// Stroke geometry is given as SVG path data, one string per stroke. Everything but
/// `canvas` and `strokes` has a default.
pub struct StrokeDocument {
    /// Target surface.
    pub canvas: Canvas,
    /// Source coordinate box fitted onto the canvas; defaults to the strokes' bounds.
    #[serde(default)]
    pub bounds: Option<Rect>,
    /// Inset from every canvas edge, in pixels.
    #[serde(default)]
    pub padding: f64,
    /// Source y axis points up.
    #[serde(default)]
    pub flip_y: bool,
    /// SVG path data per stroke, in index order.
    pub strokes: Vec<String>,
    /// Reveal order; all strokes in index order when absent.
    #[serde(default)]
    pub animated: Option<Vec<usize>>,
    /// Strokes painted in the highlight color.
    #[serde(default)]
    pub highlighted: Vec<usize>,
    /// Timing.
    #[serde(default)]
    pub sequencer: SequencerConfig,
    /// Paint parameters.
    #[serde(default)]
    pub style: StrokeStyle,
}

impl StrokeDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StrokeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StrokeError::serde(format!("parse stroke document JSON: {e}")))
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(s: &str) -> StrokeResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| StrokeError::serde(format!("parse stroke document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StrokeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StrokeError::validation(format!("open stroke document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check everything that does not need the parsed geometry.
    pub fn validate(&self) -> StrokeResult<()> {
        self.canvas.validate()?;
        self.sequencer.validate()?;
        self.style.validate()?;
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(StrokeError::validation("padding must be finite and >= 0"));
        }
        let n = self.strokes.len();
        if let Some(bad) = self.animated.iter().flatten().find(|&&i| i >= n) {
            return Err(StrokeError::validation(format!(
                "animated index {bad} is out of range for {n} strokes"
            )));
        }
        if let Some(bad) = self.highlighted.iter().find(|&&i| i >= n) {
            return Err(StrokeError::validation(format!(
                "highlighted index {bad} is out of range for {n} strokes"
            )));
        }
        Ok(())
    }

    /// Reveal order after applying the default.
    pub fn animated_indices(&self) -> Vec<usize> {
        self.animated
            .clone()
            .unwrap_or_else(|| (0..self.strokes.len()).collect())
    }

    /// Validate, parse the strokes and fit them onto the canvas.
    pub fn prepare(&self) -> StrokeResult<PreparedFigure> {
        self.validate()?;
        let strokes = StrokeSet::from_svg_paths(&self.strokes)?;
        let bounds = match self.bounds {
            Some(b) => b,
            None => strokes.bounds().ok_or_else(|| {
                StrokeError::validation("document has no drawable strokes to derive bounds from")
            })?,
        };
        let viewport = Viewport::fit(bounds, self.canvas, self.padding, self.flip_y)?;
        Ok(PreparedFigure {
            strokes,
            animated: self.animated_indices(),
            highlighted: self.highlighted.clone(),
            sequencer: self.sequencer,
            style: self.style,
            viewport,
        })
    }
}

#[derive(Clone, Debug)]
/// A document with parsed geometry and a resolved viewport.
pub struct PreparedFigure {
    /// Measured strokes.
    pub strokes: StrokeSet,
    /// Reveal order.
    pub animated: Vec<usize>,
    /// Highlighted strokes.
    pub highlighted: Vec<usize>,
    /// Timing.
    pub sequencer: SequencerConfig,
    /// Paint parameters.
    pub style: StrokeStyle,
    /// Source to canvas mapping.
    pub viewport: Viewport,
}

impl PreparedFigure {
    /// Borrow as a render scene.
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            strokes: &self.strokes,
            animated: &self.animated,
            highlighted: &self.highlighted,
            style: &self.style,
            viewport: self.viewport,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
