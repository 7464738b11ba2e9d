//! Distance flow field: per-cell vectors pointing away from the nearest
//! boundary cell.

use voxfield_core::{IndexMapper, Vec3};
use voxfield_grid::{Result, VoxelGrid};

use crate::euclidean::CLOSEST_BOUNDARY_CELL;

/// Default name of the flow channel (kind `Vector`).
pub const DISTANCE_FLOW_FIELD: &str = "DistanceFlowField";

/// `coord - closest[coord]` for every cell.
pub fn flow_vectors(mapper: &IndexMapper, closest: &[Vec3]) -> Vec<Vec3> {
    closest
        .iter()
        .enumerate()
        .map(|(h, &c)| Vec3::from(mapper.unhash_unchecked(h)) - c)
        .collect()
}

/// Generate the flow field into channel `name`.
///
/// Reads [`CLOSEST_BOUNDARY_CELL`], so the Euclidean field must be generated
/// first.
///
/// # Errors
/// `InvalidChannel` if [`CLOSEST_BOUNDARY_CELL`] is missing or not a vector
/// channel.
pub fn flow_field(grid: &mut VoxelGrid, name: &str) -> Result<()> {
    let flow = flow_vectors(grid.mapper(), grid.channel::<Vec3>(CLOSEST_BOUNDARY_CELL)?);
    let moving = flow.iter().filter(|v| !v.is_zero()).count();
    grid.insert_channel(name, flow)?;
    log::info!("Flow field '{}': {} non-zero vectors", name, moving);
    Ok(())
}
