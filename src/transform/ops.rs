use crate::foundation::core::{Affine, Vec2};

/// One elementary affine operation, composed onto the current transform as
/// `current = current * op`.
///
/// Angles are radians, counter-clockwise-positive in a y-up frame. On a y-down raster a positive
/// angle turns clockwise; callers that want the opposite negate at the call site.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    /// Offset by `(dx, dy)`.
    Translate {
        /// Horizontal offset.
        dx: f64,
        /// Vertical offset.
        dy: f64,
    },
    /// Non-uniform scale about the origin.
    Scale {
        /// Horizontal factor.
        sx: f64,
        /// Vertical factor.
        sy: f64,
    },
    /// Rotation about the origin.
    Rotate {
        /// Angle in radians.
        radians: f64,
    },
    /// Shear: `x' = x + shx * y`, `y' = shy * x + y`.
    Shear {
        /// x shift per unit of y.
        shx: f64,
        /// y shift per unit of x.
        shy: f64,
    },
}

impl TransformOp {
    /// Translation op.
    pub fn translate(dx: f64, dy: f64) -> Self {
        Self::Translate { dx, dy }
    }

    /// Scale op.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::Scale { sx, sy }
    }

    /// Uniform scale op.
    pub fn uniform_scale(s: f64) -> Self {
        Self::Scale { sx: s, sy: s }
    }

    /// Rotation op from radians.
    pub fn rotate(radians: f64) -> Self {
        Self::Rotate { radians }
    }

    /// Rotation op from degrees.
    pub fn rotate_degrees(degrees: f64) -> Self {
        Self::Rotate {
            radians: degrees.to_radians(),
        }
    }

    /// Shear op.
    pub fn shear(shx: f64, shy: f64) -> Self {
        Self::Shear { shx, shy }
    }

    /// Matrix form of the op.
    pub fn to_affine(self) -> Affine {
        match self {
            Self::Translate { dx, dy } => Affine::translate(Vec2::new(dx, dy)),
            Self::Scale { sx, sy } => Affine::scale_non_uniform(sx, sy),
            Self::Rotate { radians } => Affine::rotate(radians),
            Self::Shear { shx, shy } => Affine::new([1.0, shy, shx, 1.0, 0.0, 0.0]),
        }
    }

    /// `true` for ops that collapse the plane (zero scale, or a shear with `shx * shy == 1`).
    pub fn is_degenerate(self) -> bool {
        self.to_affine().determinant() == 0.0
    }
}

impl From<TransformOp> for Affine {
    fn from(op: TransformOp) -> Self {
        op.to_affine()
    }
}

/// Fold a sequence of ops, left to right, onto `base`.
pub fn compose_all(base: Affine, ops: &[TransformOp]) -> Affine {
    ops.iter().fold(base, |acc, op| acc * op.to_affine())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/ops.rs"]
mod tests;
