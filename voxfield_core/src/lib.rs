//! # voxfield_core
//!
//! Pure index and vector math for dense voxel field grids.
//!
//! This crate holds the pieces of the voxfield workspace that need no storage:
//! coordinate types, the dense [`IndexMapper`] and the saturating sign helpers
//! used by the integer distance sweeps. Storage lives in `voxfield_grid`, the
//! field algorithms in `voxfield`.
//!
//! ## Features
//!
//! - **no_std compatible**: no allocation anywhere in this crate
//! - **Exact indexing**: `hash`/`unhash` are a bijection onto `[0, nx * ny * nz)`
//!
//! ## Feature Flags
//!
//! - `std` (default): implements `std::error::Error` for [`CoreError`]
//!
//! ## Modules
//!
//! - [`types`]: `Vec3`, `VoxelCoord`, `Axis`
//! - [`index`]: `Extent`, `IndexMapper`
//! - [`sign`]: sign and saturating magnitude helpers
//! - [`error`]: Error types
//!
//! ## Usage
//!
//! ```
//! use voxfield_core::{Extent, IndexMapper, VoxelCoord};
//!
//! let mapper = IndexMapper::new(Extent::new(4, 4, 4).unwrap());
//! let hash = mapper.hash(VoxelCoord::new(1, 2, 3)).unwrap();
//! assert_eq!(hash, 3 + 2 * 4 + 1 * 16);
//! assert_eq!(mapper.unhash(hash).unwrap(), VoxelCoord::new(1, 2, 3));
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod index;
pub mod sign;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::index::{Extent, IndexMapper};
    pub use crate::sign::{relax_signed_distance, sign, sign_f32};
    pub use crate::types::{Axis, Vec3, VoxelCoord};
}

// Re-export everything at crate root for convenience
pub use error::{CoreError, Result};
pub use index::{Extent, IndexMapper};
pub use sign::{
    neighbor_magnitude, relax_signed_distance, saturating_magnitude, sign, sign_f32,
    MAX_NEIGHBOR_DISTANCE,
};
pub use types::{Axis, Vec3, VoxelCoord};
