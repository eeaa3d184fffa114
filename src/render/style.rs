use crate::{
    foundation::core::Rgba8,
    foundation::error::{StrokeError, StrokeResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Paint parameters for a stroke reveal.
pub struct StrokeStyle {
    /// Color of drawn strokes.
    pub stroke_color: Rgba8,
    /// Color of drawn strokes listed as highlighted.
    pub highlight_color: Rgba8,
    /// Color of strokes not yet drawn.
    pub placeholder_color: Rgba8,
    /// Color of the finger marker.
    pub marker_color: Rgba8,
    /// Stroke width in canvas pixels.
    pub stroke_width: f64,
    /// Finger marker radius in canvas pixels.
    pub marker_radius: f64,
    /// Paint undrawn strokes in `placeholder_color`.
    pub show_placeholders: bool,
    /// Paint the finger marker on the active stroke.
    pub show_marker: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Rgba8::rgb(0x33, 0x33, 0x33),
            highlight_color: Rgba8::rgb(0xE5, 0x39, 0x35),
            placeholder_color: Rgba8::rgb(0xDD, 0xDD, 0xDD),
            marker_color: Rgba8::rgb(0x1E, 0x88, 0xE5).with_alpha_scaled(0.8),
            stroke_width: 6.0,
            marker_radius: 8.0,
            show_placeholders: true,
            show_marker: true,
        }
    }
}

impl StrokeStyle {
    /// Reject negative or non-finite sizes.
    pub fn validate(&self) -> StrokeResult<()> {
        for (name, value) in [
            ("stroke_width", self.stroke_width),
            ("marker_radius", self.marker_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StrokeError::validation(format!(
                    "style {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
