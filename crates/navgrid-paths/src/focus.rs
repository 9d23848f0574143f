use navgrid_core::Vec3;

use crate::config::GridConfig;
use crate::traits::ReferencePosition;

/// Reference point that trails a moving target.
///
/// The published position only jumps to the target once the target is
/// farther than `update_radius` from it, so a grid tracking this focus is
/// rebuilt in occasional steps instead of on every tick the player moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamingFocus {
    position: Vec3,
    update_radius: f32,
}

impl StreamingFocus {
    /// Focus starting at `initial`, with the update radius derived from the
    /// grid's chunk size.
    pub fn new(initial: Vec3, config: &GridConfig) -> Self {
        Self::with_radius(initial, config.update_radius())
    }

    pub fn with_radius(initial: Vec3, update_radius: f32) -> Self {
        Self {
            position: initial,
            update_radius,
        }
    }

    #[inline]
    pub fn update_radius(&self) -> f32 {
        self.update_radius
    }

    /// Move to `target` if it has left the update radius. Returns whether
    /// the focus moved.
    pub fn follow(&mut self, target: Vec3) -> bool {
        if target.distance(self.position) > self.update_radius {
            log::debug!("streaming focus {} -> {target}", self.position);
            self.position = target;
            true
        } else {
            false
        }
    }
}

impl ReferencePosition for StreamingFocus {
    #[inline]
    fn position(&self) -> Vec3 {
        self.position
    }
}
