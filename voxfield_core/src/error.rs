//! Error types for voxfield_core operations.
//!
//! Provides a simple error enum with no external dependencies for no_std compatibility.

use core::fmt;

/// Error types that can occur during voxfield_core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A voxel coordinate lies outside the grid extent.
    IndexOutOfRange {
        /// The offending coordinate.
        coord: [i32; 3],
        /// The grid extent it was checked against.
        extent: [i32; 3],
    },
    /// A linear hash lies outside `[0, cell_count)`.
    HashOutOfRange {
        /// The offending hash.
        hash: usize,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// A grid extent has a non-positive dimension or too many cells.
    InvalidExtent {
        /// The rejected extent.
        extent: [i32; 3],
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::IndexOutOfRange { coord, extent } => {
                write!(
                    f,
                    "voxel index ({}, {}, {}) out of range for extent ({}, {}, {})",
                    coord[0], coord[1], coord[2], extent[0], extent[1], extent[2]
                )
            }
            CoreError::HashOutOfRange { hash, cell_count } => {
                write!(f, "voxel hash {} out of range for {} cells", hash, cell_count)
            }
            CoreError::InvalidExtent { extent } => {
                write!(
                    f,
                    "invalid grid extent ({}, {}, {}): every dimension must be positive",
                    extent[0], extent[1], extent[2]
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type alias for voxfield_core operations.
pub type Result<T> = core::result::Result<T, CoreError>;
