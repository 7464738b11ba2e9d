//! Extension trait exposing the field generators as `VoxelGrid` methods.

use voxfield_grid::{Result, VoxelGrid};

use crate::classify::{classify, FieldSummary};
use crate::euclidean::{euclidean_sdf, EUCLIDEAN_SDF};
use crate::flow::{flow_field, DISTANCE_FLOW_FIELD};
use crate::manhattan::{manhattan_sdf, MANHATTAN_SDF};

/// Field generation on a [`VoxelGrid`].
///
/// All methods fail only with `InvalidChannel`, when a channel they read is
/// missing or has the wrong kind; the grid is unchanged in that case.
pub trait FieldGenerators {
    /// Classify cells into `"InteriorExterior"`, replacing any previous
    /// classification.
    fn classify_boundary(&mut self) -> Result<FieldSummary>;

    /// Signed Manhattan distances into `name`.
    fn generate_manhattan_sdf(&mut self, name: &str) -> Result<()>;

    /// Signed Euclidean distances into `name`, plus `"ClosestBoundaryCell"`.
    fn generate_euclidean_sdf(&mut self, name: &str) -> Result<()>;

    /// Flow vectors into `name`, from `"ClosestBoundaryCell"`.
    fn generate_flow_field(&mut self, name: &str) -> Result<()>;

    /// Reclassify, then generate both distance fields and the flow field
    /// under their default names.
    fn generate_all_fields(&mut self) -> Result<FieldSummary> {
        let summary = self.classify_boundary()?;
        self.generate_manhattan_sdf(MANHATTAN_SDF)?;
        self.generate_euclidean_sdf(EUCLIDEAN_SDF)?;
        self.generate_flow_field(DISTANCE_FLOW_FIELD)?;
        Ok(summary)
    }
}

impl FieldGenerators for VoxelGrid {
    fn classify_boundary(&mut self) -> Result<FieldSummary> {
        classify(self)
    }

    fn generate_manhattan_sdf(&mut self, name: &str) -> Result<()> {
        manhattan_sdf(self, name)
    }

    fn generate_euclidean_sdf(&mut self, name: &str) -> Result<()> {
        euclidean_sdf(self, name)
    }

    fn generate_flow_field(&mut self, name: &str) -> Result<()> {
        flow_field(self, name)
    }
}
