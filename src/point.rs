//! Curve points in affine coordinates.

use num_bigint::BigInt;

/// Point on a short-Weierstrass curve in affine coordinates.
///
/// The group identity is a distinct variant rather than a reserved
/// coordinate value, so no finite point can be mistaken for it. Finite
/// coordinates are kept reduced to `[0, p)` by every operation that
/// produces a point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AffinePoint {
    /// Finite point `(x, y)`.
    Finite {
        /// x-coordinate.
        x: BigInt,
        /// y-coordinate.
        y: BigInt,
    },
    /// The point at infinity.
    Identity,
}

impl AffinePoint {
    /// Construct a finite point.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        AffinePoint::Finite {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, AffinePoint::Identity)
    }

    /// Coordinates of a finite point, `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            AffinePoint::Finite { x, y } => Some((x, y)),
            AffinePoint::Identity => None,
        }
    }
}
