//! Signed Manhattan (city-block) distance field.
//!
//! A two-pass raster transform seeded from the classification labels. Every
//! cell ends with the number of axis-aligned unit steps to the nearest boundary
//! cell, positive outside and negative inside. Cells no boundary can reach keep
//! a saturated magnitude of `i32::MAX`.

use voxfield_core::{neighbor_magnitude, relax_signed_distance, IndexMapper};
use voxfield_grid::{Result, VoxelGrid};

use crate::classify::{ensure_classified, FieldSummary, INTERIOR_EXTERIOR};
use crate::sweep::Pass;

/// Default name of the Manhattan distance channel (kind `Int`).
pub const MANHATTAN_SDF: &str = "MSignedDistanceField";

/// Run both passes over a copy of the classification labels.
pub fn manhattan_distances(mapper: &IndexMapper, labels: &[i32]) -> Vec<i32> {
    let mut sdf = labels.to_vec();
    relax(mapper, &mut sdf, Pass::Forward);
    relax(mapper, &mut sdf, Pass::Backward);
    sdf
}

fn relax(mapper: &IndexMapper, sdf: &mut [i32], pass: Pass) {
    pass.run(mapper, |_, h, neighbors| {
        let current = sdf[h];
        if pass == Pass::Backward && current == 0 {
            return;
        }
        let closest = neighbors
            .into_iter()
            .flatten()
            .map(|n| neighbor_magnitude(sdf[n]))
            .min();
        sdf[h] = relax_signed_distance(current, closest);
    });
}

/// Generate the signed Manhattan distance field into channel `name`.
///
/// Classifies the grid first if no classification channel exists.
///
/// # Errors
/// `InvalidChannel` if the boundary or classification channel is unusable.
pub fn manhattan_sdf(grid: &mut VoxelGrid, name: &str) -> Result<()> {
    ensure_classified(grid)?;
    let sdf = manhattan_distances(grid.mapper(), grid.channel::<i32>(INTERIOR_EXTERIOR)?);
    let summary = FieldSummary::from_labels(&sdf);
    let unreached = sdf.iter().filter(|d| d.unsigned_abs() >= i32::MAX as u32).count();

    if summary.boundary == 0 {
        log::warn!("No boundary cells, Manhattan distances in '{}' are unbounded", name);
    }
    grid.insert_channel(name, sdf)?;

    log::info!(
        "Manhattan SDF '{}': {} cells ({} interior, {} exterior, {} unreached)",
        name,
        summary.total(),
        summary.interior,
        summary.exterior,
        unreached
    );
    Ok(())
}
