//! GridBuilder pattern for constructing VoxelGrid.
//!
//! Provides a fluent API for building grids with validation.

use voxfield_core::{Extent, IndexMapper, Vec3, VoxelCoord};

use crate::config::GridConfig;
use crate::error::Result;
use crate::grid::VoxelGrid;

enum BoundarySource {
    Empty,
    Mask(Vec<bool>),
    Coords(Vec<VoxelCoord>),
    Fn(Box<dyn Fn(VoxelCoord) -> bool>),
}

/// Builder for constructing [`VoxelGrid`] instances.
///
/// Nothing is validated until [`build`](Self::build), which checks the
/// extent, then the cell size, then the boundary mask.
///
/// # Example
///
/// ```
/// use voxfield_grid::{GridBuilder, VoxelCoord};
///
/// let grid = GridBuilder::new(8, 8, 8)
///     .with_uniform_cell_size(0.25)
///     .with_boundary_fn(|c| c.x == 0 || c.x == 7)
///     .build()
///     .unwrap();
///
/// assert_eq!(grid.boundary_count().unwrap(), 2 * 8 * 8);
/// assert!(grid.get::<bool>("Boundary", VoxelCoord::new(7, 3, 3)).unwrap());
/// ```
pub struct GridBuilder {
    extent: [i32; 3],
    cell_size: Vec3,
    origin: Vec3,
    boundary: BoundarySource,
}

impl GridBuilder {
    /// Create a new builder with the specified extent.
    ///
    /// Cells default to unit size with the origin at zero and no boundary.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        let defaults = GridConfig::default();
        Self {
            extent: [x, y, z],
            cell_size: defaults.cell_size,
            origin: defaults.origin,
            boundary: BoundarySource::Empty,
        }
    }

    /// Set the world size of one cell along each axis.
    pub fn with_cell_size(mut self, cell_size: Vec3) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the same cell size along every axis.
    pub fn with_uniform_cell_size(self, size: f32) -> Self {
        self.with_cell_size(Vec3::splat(size))
    }

    /// Set the world position of cell `(0, 0, 0)`.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Use a boundary mask in canonical linear order.
    ///
    /// The mask must hold exactly one value per cell.
    pub fn with_boundary(mut self, mask: Vec<bool>) -> Self {
        self.boundary = BoundarySource::Mask(mask);
        self
    }

    /// Mark the listed cells as boundary.
    ///
    /// Coordinates outside the extent make [`build`](Self::build) fail with
    /// `IndexOutOfRange`.
    pub fn with_boundary_coords<I>(mut self, coords: I) -> Self
    where
        I: IntoIterator<Item = VoxelCoord>,
    {
        self.boundary = BoundarySource::Coords(coords.into_iter().collect());
        self
    }

    /// Derive the boundary mask from a per-cell predicate.
    pub fn with_boundary_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(VoxelCoord) -> bool + 'static,
    {
        self.boundary = BoundarySource::Fn(Box::new(f));
        self
    }

    /// Build the grid.
    ///
    /// # Errors
    /// - `InvalidExtent` if any dimension is zero or negative
    /// - `InvalidCellSize` if the cell size is not positive and finite
    /// - `InvalidChannelSize` if a boundary mask has the wrong length
    /// - `IndexOutOfRange` if a boundary coordinate is outside the grid
    pub fn build(self) -> Result<VoxelGrid> {
        let [x, y, z] = self.extent;
        let extent = Extent::new(x, y, z)?;
        let config = GridConfig::new(extent, self.cell_size, self.origin);
        config.validate()?;

        let mapper = IndexMapper::new(extent);
        let mask = match self.boundary {
            BoundarySource::Empty => vec![false; mapper.cell_count()],
            BoundarySource::Mask(mask) => mask,
            BoundarySource::Coords(coords) => {
                let mut mask = vec![false; mapper.cell_count()];
                for coord in coords {
                    mask[mapper.hash(coord)?] = true;
                }
                mask
            }
            BoundarySource::Fn(f) => mapper.coords().map(|c| f(c)).collect(),
        };

        VoxelGrid::with_boundary(config, mask)
    }
}
