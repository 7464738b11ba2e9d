//! # voxfield
//!
//! Spatial fields derived from the boundary mask of a dense voxel grid.
//!
//! Starting from the boolean `"Boundary"` channel of a
//! [`VoxelGrid`](voxfield_grid::VoxelGrid), this crate derives:
//!
//! - **Classification**: every cell labelled boundary (`0`), exterior
//!   (`i32::MAX`) or interior (`i32::MIN`) by axis-aligned occlusion voting
//! - **Manhattan SDF**: signed city-block distance to the nearest boundary cell
//! - **Euclidean SDF**: signed straight-line distance, plus the coordinate of
//!   the nearest boundary cell
//! - **Flow field**: vectors pointing from the nearest boundary cell to each
//!   cell
//!
//! ## Quick Start
//!
//! ```
//! use voxfield::prelude::*;
//!
//! // 5x5x5 hollow cube inside a 7x7x7 grid
//! let mut grid = GridBuilder::new(7, 7, 7)
//!     .with_boundary_fn(|c| {
//!         let shell = |v: i32| v == 1 || v == 5;
//!         let inside = |v: i32| (1..=5).contains(&v);
//!         inside(c.x) && inside(c.y) && inside(c.z)
//!             && (shell(c.x) || shell(c.y) || shell(c.z))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let summary = grid.generate_all_fields().unwrap();
//! assert_eq!(summary.interior, 27);
//!
//! let center = VoxelCoord::new(3, 3, 3);
//! assert_eq!(grid.get::<i32>(MANHATTAN_SDF, center).unwrap(), -2);
//! assert_eq!(grid.get::<f32>(EUCLIDEAN_SDF, center).unwrap(), -2.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: run the three per-axis occlusion sweeps of the classifier on
//!   the rayon thread pool

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod euclidean;
pub mod flow;
mod generators;
pub mod manhattan;
mod sweep;

pub use classify::{
    classify, classify_labels, FieldSummary, BOUNDARY_LABEL, EXTERIOR_LABEL, INTERIOR_EXTERIOR,
    INTERIOR_LABEL,
};
pub use euclidean::{
    euclidean_distances, euclidean_sdf, unreached_sentinel, EuclideanField,
    CLOSEST_BOUNDARY_CELL, EUCLIDEAN_SDF,
};
pub use flow::{flow_field, flow_vectors, DISTANCE_FLOW_FIELD};
pub use generators::FieldGenerators;
pub use manhattan::{manhattan_distances, manhattan_sdf, MANHATTAN_SDF};

// Re-export the storage layer
pub use voxfield_grid::{
    GridBuilder, GridConfig, GridError, Result, Vec3, VoxelCoord, VoxelGrid, BOUNDARY,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        FieldGenerators, FieldSummary, CLOSEST_BOUNDARY_CELL, DISTANCE_FLOW_FIELD, EUCLIDEAN_SDF,
        INTERIOR_EXTERIOR, MANHATTAN_SDF,
    };
    pub use voxfield_grid::prelude::*;
}
