//! Grid configuration types.

use voxfield_core::{Extent, Vec3};

use crate::error::{GridError, Result};

/// Grid geometry (immutable after construction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of cells per axis.
    pub extent: Extent,
    /// World units per cell along each axis.
    pub cell_size: Vec3,
    /// World position of cell `(0, 0, 0)`.
    pub origin: Vec3,
}

impl GridConfig {
    /// Create a new grid configuration.
    ///
    /// # Arguments
    /// * `extent` - Cells per axis
    /// * `cell_size` - World units per cell along each axis
    /// * `origin` - World position of the first cell
    #[inline]
    pub const fn new(extent: Extent, cell_size: Vec3, origin: Vec3) -> Self {
        Self {
            extent,
            cell_size,
            origin,
        }
    }

    /// Total number of cells.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.extent.cell_count()
    }

    /// World position of the far corner, `origin + extent * cell_size`.
    #[inline]
    pub fn max_corner(&self) -> Vec3 {
        let e = self.extent;
        self.origin
            + Vec3::new(e.x() as f32, e.y() as f32, e.z() as f32).mul_elementwise(self.cell_size)
    }

    /// Check that the cell size is usable.
    ///
    /// # Errors
    /// `InvalidCellSize` if any component is zero, negative or not finite.
    pub fn validate(&self) -> Result<()> {
        let s = self.cell_size;
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !(ok(s.x) && ok(s.y) && ok(s.z)) {
            return Err(GridError::InvalidCellSize {
                x: s.x,
                y: s.y,
                z: s.z,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extent: Extent::default(),
            cell_size: Vec3::splat(1.0),
            origin: Vec3::ZERO,
        }
    }
}
