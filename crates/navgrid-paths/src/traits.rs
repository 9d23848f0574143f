use navgrid_core::Vec3;

use crate::error::NavError;

/// Spatial query deciding whether a grid cell can be walked on.
///
/// Typically backed by the physics scene: "is there walkable-tagged geometry
/// within `radius` of `point`?".
pub trait WalkabilityOracle {
    fn is_walkable(&self, point: Vec3, radius: f32) -> Result<bool, NavError>;
}

impl<F: Fn(Vec3, f32) -> bool> WalkabilityOracle for F {
    #[inline]
    fn is_walkable(&self, point: Vec3, radius: f32) -> Result<bool, NavError> {
        Ok(self(point, radius))
    }
}

/// Provider of the world position a grid is centred on.
pub trait ReferencePosition {
    fn position(&self) -> Vec3;
}

impl ReferencePosition for Vec3 {
    #[inline]
    fn position(&self) -> Vec3 {
        *self
    }
}
