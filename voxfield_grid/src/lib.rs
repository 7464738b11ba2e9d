//! # voxfield_grid
//!
//! Dense, typed, multi-channel voxel grid storage.
//!
//! A [`VoxelGrid`] has a fixed extent and any number of named channels. Each
//! channel is a dense array of one element kind (`bool`, `i32`, `f32` or
//! [`Vec3`]) in the canonical linear order of [`IndexMapper`]. Every grid
//! starts with a boolean [`BOUNDARY`] channel, which the field generators in
//! the `voxfield` crate read.
//!
//! # Core Types
//!
//! - [`VoxelGrid`]: the grid container
//! - [`GridBuilder`]: fluent construction with validation
//! - [`GridConfig`]: immutable grid geometry
//! - [`ChannelData`] / [`Element`]: typed channel storage
//! - [`CoordQuery`]: restartable coordinate queries
//! - [`ChannelView`] / [`ChannelExporter`]: read-only export interface
//!
//! # Example
//!
//! ```
//! use voxfield_grid::{GridBuilder, VoxelCoord, BOUNDARY};
//!
//! let mut grid = GridBuilder::new(4, 4, 4)
//!     .with_boundary_coords([VoxelCoord::new(1, 1, 1)])
//!     .build()
//!     .unwrap();
//!
//! grid.add_channel::<f32>("Density");
//! grid.set("Density", VoxelCoord::new(2, 2, 2), 0.75f32).unwrap();
//!
//! let dense = grid
//!     .threshold_to_bool("Density", "Dense", 0.5f32, 1.0f32)
//!     .unwrap();
//! assert_eq!(dense, 1);
//!
//! let walls = grid.collect_coordinates::<bool, _>(BOUNDARY, |b| *b).unwrap();
//! assert_eq!(walls, vec![VoxelCoord::new(1, 1, 1)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod channel;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod query;

// Re-export core types from voxfield_core
pub use voxfield_core::{Axis, Extent, IndexMapper, Vec3, VoxelCoord};

pub use builder::GridBuilder;
pub use channel::{CellValue, ChannelData, Element, ElementKind, Numeric};
pub use config::GridConfig;
pub use error::{ChannelFault, GridError, Result};
pub use export::{ChannelExporter, ChannelView};
pub use grid::{VoxelGrid, BOUNDARY};
pub use query::CoordQuery;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        CellValue, ChannelView, ElementKind, GridBuilder, GridConfig, GridError, VoxelGrid,
        BOUNDARY,
    };
    pub use voxfield_core::prelude::*;
}
