use crate::error::NavError;

/// Largest accepted `chunk_size`: a 2049×2049 grid, about four million nodes.
pub const MAX_CHUNK_SIZE: u32 = 1024;

/// Shape of a [`NodeGrid`](crate::NodeGrid) and how its cells are probed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Cell radius around the centre; the grid is `2 * chunk_size + 1` cells
    /// on each side.
    pub chunk_size: u32,
    /// World units between neighbouring cell centres.
    pub cell_spacing: f32,
    /// Height above the centre at which walkability is probed.
    pub probe_height: f32,
    /// Tolerance radius handed to the walkability oracle.
    pub probe_radius: f32,
    /// Fixed elevation of every node's world position.
    pub node_elevation: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            chunk_size: 20,
            cell_spacing: 1.0,
            probe_height: 1.0,
            probe_radius: 0.1,
            node_elevation: 13.0,
        }
    }
}

impl GridConfig {
    /// Default configuration with the given chunk radius.
    pub fn with_chunk_size(chunk_size: u32) -> Self {
        Self {
            chunk_size,
            ..Self::default()
        }
    }

    /// Number of cells along one side of the grid.
    #[inline]
    pub fn side(&self) -> i32 {
        2 * self.chunk_size as i32 + 1
    }

    /// Distance the streaming focus may lag behind its target before it
    /// moves: `chunk_size - chunk_size / 4`.
    #[inline]
    pub fn update_radius(&self) -> f32 {
        (self.chunk_size - self.chunk_size / 4) as f32
    }

    /// Check that every field is usable for a build.
    pub fn validate(&self) -> Result<(), NavError> {
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(NavError::InvalidConfig(format!(
                "chunk_size {} exceeds {MAX_CHUNK_SIZE}",
                self.chunk_size
            )));
        }
        if !self.cell_spacing.is_finite() || self.cell_spacing <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "cell_spacing must be positive, got {}",
                self.cell_spacing
            )));
        }
        if !self.probe_radius.is_finite() || self.probe_radius < 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "probe_radius must be non-negative, got {}",
                self.probe_radius
            )));
        }
        if !self.probe_height.is_finite() || !self.node_elevation.is_finite() {
            return Err(NavError::InvalidConfig(
                "probe_height and node_elevation must be finite".into(),
            ));
        }
        Ok(())
    }
}
