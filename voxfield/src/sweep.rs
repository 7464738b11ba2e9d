//! Raster pass helpers shared by the distance transforms.
//!
//! Canonical linear order is lexicographic in `(i, j, k)`, so ascending order
//! visits every "behind" neighbour `(i-1, j, k)`, `(i, j-1, k)`, `(i, j, k-1)`
//! before the cell itself, and descending order does the same for the "ahead"
//! neighbours.

use voxfield_core::{Axis, IndexMapper, VoxelCoord};

/// Direction of a raster pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    /// Ascending on all axes, reading behind neighbours.
    Forward,
    /// Descending on all axes, reading ahead neighbours.
    Backward,
}

impl Pass {
    /// Visit every cell in pass order as `(coord, hash, neighbours)`.
    pub(crate) fn run<F>(self, mapper: &IndexMapper, mut visit: F)
    where
        F: FnMut(VoxelCoord, usize, [Option<usize>; 3]),
    {
        let [nx, ny, nz] = mapper.extent().as_array();
        let mut cell = |coord: VoxelCoord| {
            visit(coord, mapper.hash_unchecked(coord), self.neighbors(mapper, coord));
        };

        match self {
            Pass::Forward => {
                for i in 0..nx {
                    for j in 0..ny {
                        for k in 0..nz {
                            cell(VoxelCoord::new(i, j, k));
                        }
                    }
                }
            }
            Pass::Backward => {
                for i in (0..nx).rev() {
                    for j in (0..ny).rev() {
                        for k in (0..nz).rev() {
                            cell(VoxelCoord::new(i, j, k));
                        }
                    }
                }
            }
        }
    }

    /// Hashes of the already-visited neighbours of `coord`, in axis order.
    ///
    /// `None` marks a neighbour outside the grid.
    #[inline]
    pub(crate) fn neighbors(self, mapper: &IndexMapper, coord: VoxelCoord) -> [Option<usize>; 3] {
        let delta = match self {
            Pass::Forward => -1,
            Pass::Backward => 1,
        };
        Axis::ALL.map(|axis| {
            mapper
                .neighbor(coord, axis, delta)
                .map(|n| mapper.hash_unchecked(n))
        })
    }
}
