//! Dense index mapping between voxel coordinates and linear offsets.
//!
//! The canonical linear order has the third coordinate varying fastest:
//! `hash = k + j * nz + i * nz * ny`. Every channel of a grid is laid out in
//! this order, so a hash addresses the same cell in all of them.

use crate::error::{CoreError, Result};
use crate::types::{Axis, VoxelCoord};

/// Validated grid extent `(nx, ny, nz)`, every dimension positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    x: i32,
    y: i32,
    z: i32,
}

impl Extent {
    /// Create an extent.
    ///
    /// # Errors
    /// `InvalidExtent` if any dimension is zero or negative, or if the total
    /// cell count does not fit in `usize`.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self> {
        if x <= 0 || y <= 0 || z <= 0 {
            return Err(CoreError::InvalidExtent { extent: [x, y, z] });
        }
        (x as usize)
            .checked_mul(y as usize)
            .and_then(|xy| xy.checked_mul(z as usize))
            .ok_or(CoreError::InvalidExtent { extent: [x, y, z] })?;
        Ok(Self { x, y, z })
    }

    /// Cells along the first axis.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Cells along the second axis.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Cells along the third axis.
    #[inline]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Cells along `axis`.
    #[inline]
    pub const fn len(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Total number of cells, `nx * ny * nz`.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }

    /// True if `coord` lies inside the extent.
    #[inline]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.z >= 0
            && coord.x < self.x
            && coord.y < self.y
            && coord.z < self.z
    }
}

impl Default for Extent {
    /// A single cell.
    fn default() -> Self {
        Self { x: 1, y: 1, z: 1 }
    }
}

/// Bidirectional mapping between [`VoxelCoord`] and linear offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMapper {
    extent: Extent,
}

impl IndexMapper {
    /// Create a mapper for the given extent.
    #[inline]
    pub const fn new(extent: Extent) -> Self {
        Self { extent }
    }

    /// The extent this mapper covers.
    #[inline]
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of addressable cells.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.extent.cell_count()
    }

    /// True if `coord` is a valid voxel index.
    #[inline]
    pub const fn is_valid(&self, coord: VoxelCoord) -> bool {
        self.extent.contains(coord)
    }

    /// Linear step between neighbours along each axis, `[ny * nz, nz, 1]`.
    #[inline]
    pub const fn strides(&self) -> [usize; 3] {
        let nz = self.extent.z as usize;
        let ny = self.extent.y as usize;
        [ny * nz, nz, 1]
    }

    /// Linear step between neighbours along `axis`.
    #[inline]
    pub const fn stride(&self, axis: Axis) -> usize {
        self.strides()[axis.index()]
    }

    /// Linearize a voxel coordinate.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `coord` lies outside the extent.
    #[inline]
    pub fn hash(&self, coord: VoxelCoord) -> Result<usize> {
        if !self.is_valid(coord) {
            return Err(CoreError::IndexOutOfRange {
                coord: coord.as_array(),
                extent: self.extent.as_array(),
            });
        }
        Ok(self.hash_unchecked(coord))
    }

    /// Linearize a coordinate already known to be valid.
    ///
    /// The result is meaningless for coordinates outside the extent.
    #[inline]
    pub const fn hash_unchecked(&self, coord: VoxelCoord) -> usize {
        let nz = self.extent.z as usize;
        let ny = self.extent.y as usize;
        coord.z as usize + coord.y as usize * nz + coord.x as usize * nz * ny
    }

    /// Recover the voxel coordinate of a linear offset.
    ///
    /// # Errors
    /// `HashOutOfRange` if `hash >= cell_count()`.
    #[inline]
    pub fn unhash(&self, hash: usize) -> Result<VoxelCoord> {
        if hash >= self.cell_count() {
            return Err(CoreError::HashOutOfRange {
                hash,
                cell_count: self.cell_count(),
            });
        }
        Ok(self.unhash_unchecked(hash))
    }

    /// Inverse of [`hash_unchecked`](Self::hash_unchecked) for in-range offsets.
    #[inline]
    pub const fn unhash_unchecked(&self, hash: usize) -> VoxelCoord {
        let nz = self.extent.z as usize;
        let ny = self.extent.y as usize;
        VoxelCoord::new(
            (hash / (nz * ny)) as i32,
            ((hash / nz) % ny) as i32,
            (hash % nz) as i32,
        )
    }

    /// The neighbour `delta` cells along `axis`, if it is inside the grid.
    #[inline]
    pub fn neighbor(&self, coord: VoxelCoord, axis: Axis, delta: i32) -> Option<VoxelCoord> {
        let next = coord.step(axis, delta);
        self.is_valid(next).then_some(next)
    }

    /// Iterate all coordinates in canonical linear order.
    pub fn coords(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        (0..self.cell_count()).map(move |h| self.unhash_unchecked(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(x: i32, y: i32, z: i32) -> IndexMapper {
        IndexMapper::new(Extent::new(x, y, z).unwrap())
    }

    #[test]
    fn test_extent_rejects_non_positive() {
        assert!(Extent::new(0, 1, 1).is_err());
        assert!(Extent::new(1, -3, 1).is_err());
        assert!(Extent::new(1, 1, 0).is_err());
        assert_eq!(
            Extent::new(2, 0, 2),
            Err(CoreError::InvalidExtent { extent: [2, 0, 2] })
        );
        assert!(Extent::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_hash_layout() {
        let m = mapper(2, 3, 4);
        assert_eq!(m.hash(VoxelCoord::new(0, 0, 0)), Ok(0));
        assert_eq!(m.hash(VoxelCoord::new(0, 0, 1)), Ok(1));
        assert_eq!(m.hash(VoxelCoord::new(0, 1, 0)), Ok(4));
        assert_eq!(m.hash(VoxelCoord::new(1, 0, 0)), Ok(12));
        assert_eq!(m.hash(VoxelCoord::new(1, 2, 3)), Ok(23));
        assert_eq!(m.strides(), [12, 4, 1]);
    }

    #[test]
    fn test_hash_rejects_out_of_range() {
        let m = mapper(3, 3, 3);
        assert_eq!(
            m.hash(VoxelCoord::new(-1, 0, 0)),
            Err(CoreError::IndexOutOfRange {
                coord: [-1, 0, 0],
                extent: [3, 3, 3],
            })
        );
        assert!(m.hash(VoxelCoord::new(0, 3, 0)).is_err());
        assert!(m.hash(VoxelCoord::new(0, 0, 3)).is_err());
    }

    #[test]
    fn test_unhash_inverts_hash() {
        let m = mapper(3, 4, 5);
        for h in 0..m.cell_count() {
            let c = m.unhash(h).unwrap();
            assert!(m.is_valid(c));
            assert_eq!(m.hash(c), Ok(h));
        }
        assert_eq!(
            m.unhash(60),
            Err(CoreError::HashOutOfRange {
                hash: 60,
                cell_count: 60,
            })
        );
    }

    #[test]
    fn test_neighbor_bounds() {
        let m = mapper(2, 2, 2);
        let origin = VoxelCoord::new(0, 0, 0);
        assert_eq!(m.neighbor(origin, Axis::X, -1), None);
        assert_eq!(m.neighbor(origin, Axis::X, 1), Some(VoxelCoord::new(1, 0, 0)));
        assert_eq!(m.neighbor(VoxelCoord::new(1, 1, 1), Axis::Z, 1), None);
    }

    #[test]
    fn test_coords_canonical_order() {
        let m = mapper(2, 2, 2);
        let mut it = m.coords();
        assert_eq!(it.next(), Some(VoxelCoord::new(0, 0, 0)));
        assert_eq!(it.next(), Some(VoxelCoord::new(0, 0, 1)));
        assert_eq!(it.next(), Some(VoxelCoord::new(0, 1, 0)));
        assert_eq!(m.coords().count(), 8);
        assert_eq!(m.coords().last(), Some(VoxelCoord::new(1, 1, 1)));
    }
}
