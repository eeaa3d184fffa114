use std::f64::consts::PI;

/// Interpolation curve applied to a stroke's normalized time before it becomes progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Half-cosine acceleration then deceleration.
    #[default]
    InOutSine,
    /// Quadratic acceleration then deceleration.
    InOutQuad,
    /// Cubic acceleration then deceleration.
    InOutCubic,
    /// Quadratic deceleration only.
    OutQuad,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::InOutSine,
        Ease::InOutQuad,
        Ease::InOutCubic,
        Ease::OutQuad,
    ];

    /// Map normalized time `t` to eased progress. Input is clamped to `[0,1]`
    /// and every curve fixes both endpoints.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutSine => 0.5 - 0.5 * (PI * t).cos(),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
