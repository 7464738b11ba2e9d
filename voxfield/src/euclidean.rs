//! Signed Euclidean distance field by nearest-boundary propagation.
//!
//! Each cell records the coordinate of the closest boundary cell found so far.
//! A forward and a backward raster pass hand those coordinates on to
//! neighbours; the backward pass also writes the signed distance.

use voxfield_core::{sign_f32, IndexMapper, Vec3};
use voxfield_grid::{Result, VoxelGrid};

use crate::classify::{ensure_classified, BOUNDARY_LABEL, INTERIOR_EXTERIOR};
use crate::sweep::Pass;

/// Default name of the Euclidean distance channel (kind `Float`).
pub const EUCLIDEAN_SDF: &str = "ESignedDistanceField";

/// Name of the nearest-boundary-coordinate channel (kind `Vector`).
pub const CLOSEST_BOUNDARY_CELL: &str = "ClosestBoundaryCell";

/// Result of [`euclidean_distances`], both in canonical linear order.
#[derive(Debug, Clone, PartialEq)]
pub struct EuclideanField {
    /// Coordinate of the nearest boundary cell found for each cell.
    pub closest: Vec<Vec3>,
    /// `sign(label) * |coord - closest|` per cell.
    pub distance: Vec<f32>,
}

/// Placeholder coordinate for cells no boundary has reached yet.
///
/// Twice the extent lies farther from every cell than any cell of the grid.
pub fn unreached_sentinel(mapper: &IndexMapper) -> Vec3 {
    let e = mapper.extent();
    Vec3::new(e.x() as f32, e.y() as f32, e.z() as f32) * 2.0
}

/// Propagate nearest boundary coordinates from classification labels.
pub fn euclidean_distances(mapper: &IndexMapper, labels: &[i32]) -> EuclideanField {
    let sentinel = unreached_sentinel(mapper);
    let mut closest: Vec<Vec3> = labels
        .iter()
        .enumerate()
        .map(|(h, &label)| {
            if label == BOUNDARY_LABEL {
                Vec3::from(mapper.unhash_unchecked(h))
            } else {
                sentinel
            }
        })
        .collect();

    propagate(mapper, &mut closest, sentinel, Pass::Forward);
    propagate(mapper, &mut closest, sentinel, Pass::Backward);

    let distance = closest
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(h, (&c, &label))| {
            let coord = Vec3::from(mapper.unhash_unchecked(h));
            sign_f32(label) * c.distance(coord)
        })
        .collect();

    EuclideanField { closest, distance }
}

fn propagate(mapper: &IndexMapper, closest: &mut [Vec3], sentinel: Vec3, pass: Pass) {
    pass.run(mapper, |coord, h, neighbors| {
        let coord = Vec3::from(coord);
        let current = closest[h].distance(coord);

        // first minimal candidate in axis order wins ties
        let mut best: Option<(Vec3, f32)> = None;
        for neighbor in neighbors {
            let candidate = neighbor.map_or(sentinel, |n| closest[n]);
            let dist = candidate.distance(coord);
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((candidate, dist));
            }
        }

        if let Some((candidate, dist)) = best {
            if dist <= current {
                closest[h] = candidate;
            }
        }
    });
}

/// Generate the signed Euclidean distance field into channel `name`, and the
/// nearest boundary coordinates into [`CLOSEST_BOUNDARY_CELL`].
///
/// Classifies the grid first if no classification channel exists.
///
/// # Errors
/// `InvalidChannel` if the boundary or classification channel is unusable.
pub fn euclidean_sdf(grid: &mut VoxelGrid, name: &str) -> Result<()> {
    ensure_classified(grid)?;
    let labels = grid.channel::<i32>(INTERIOR_EXTERIOR)?;
    let has_boundary = labels.contains(&BOUNDARY_LABEL);
    let field = euclidean_distances(grid.mapper(), labels);

    if !has_boundary {
        log::warn!("No boundary cells, Euclidean distances in '{}' are unbounded", name);
    }
    let max_distance = field
        .distance
        .iter()
        .fold(0.0f32, |acc, d| acc.max(d.abs()));
    let cells = field.distance.len();

    grid.insert_channel(CLOSEST_BOUNDARY_CELL, field.closest)?;
    grid.insert_channel(name, field.distance)?;

    log::info!(
        "Euclidean SDF '{}': {} cells, max |distance| = {:.3}",
        name,
        cells,
        max_distance
    );
    Ok(())
}
