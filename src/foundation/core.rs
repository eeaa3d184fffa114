use crate::foundation::error::{StrokeError, StrokeResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// A point or span on the sequencer clock, in whole milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Saturating `self + rhs`.
    pub fn saturating_add(self, rhs: Millis) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating `self - rhs`, clamped at zero.
    pub fn saturating_sub(self, rhs: Millis) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Value as `f64` milliseconds.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Drawing surface dimensions in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Surface width.
    pub width: u32,
    /// Surface height.
    pub height: u32,
}

impl Canvas {
    /// Reject zero-sized surfaces.
    pub fn validate(self) -> StrokeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StrokeError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pack as `0xAARRGGBB`, the layout most platform canvases take.
    pub fn to_argb_u32(self) -> u32 {
        (u32::from(self.a) << 24)
            | (u32::from(self.r) << 16)
            | (u32::from(self.g) << 8)
            | u32::from(self.b)
    }

    /// Unpack from `0xAARRGGBB`.
    pub fn from_argb_u32(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Same color with alpha multiplied by `factor` (clamped to `[0,1]`).
    pub fn with_alpha_scaled(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            a: (f64::from(self.a) * factor).round().clamp(0.0, 255.0) as u8,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
