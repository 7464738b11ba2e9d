//! Interior/exterior classification by axis-aligned occlusion voting.
//!
//! For every line of cells along an axis, two sweeps record whether a boundary
//! cell lies at or below each cell (`blocked_low`) and at or above it
//! (`blocked_high`). The high-ward sweep starts one below the top index, so a
//! boundary cell there is never seen from above. A non-boundary cell is exterior when some axis is clear in
//! both directions, or when every axis is clear in at least one direction.

use voxfield_core::{Axis, IndexMapper};
use voxfield_grid::{Result, VoxelGrid, BOUNDARY};

/// Name of the classification channel (kind `Int`).
pub const INTERIOR_EXTERIOR: &str = "InteriorExterior";

/// Label of boundary cells.
pub const BOUNDARY_LABEL: i32 = 0;

/// Label of exterior cells.
pub const EXTERIOR_LABEL: i32 = i32::MAX;

/// Label of interior cells.
pub const INTERIOR_LABEL: i32 = i32::MIN;

/// Cell counts per classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSummary {
    /// Cells labelled [`BOUNDARY_LABEL`].
    pub boundary: usize,
    /// Cells with a negative label.
    pub interior: usize,
    /// Cells with a positive label.
    pub exterior: usize,
}

impl FieldSummary {
    /// Count the labels of a classification (or signed distance) channel.
    pub fn from_labels(labels: &[i32]) -> Self {
        labels.iter().fold(Self::default(), |mut acc, &label| {
            match label.signum() {
                0 => acc.boundary += 1,
                -1 => acc.interior += 1,
                _ => acc.exterior += 1,
            }
            acc
        })
    }

    /// Total number of cells counted.
    #[inline]
    pub fn total(&self) -> usize {
        self.boundary + self.interior + self.exterior
    }
}

/// Occlusion flags of one axis, in canonical linear order.
#[derive(Debug, Clone, PartialEq)]
struct Occlusion {
    blocked_low: Vec<bool>,
    blocked_high: Vec<bool>,
}

impl Occlusion {
    #[inline]
    fn clear(&self, hash: usize) -> (bool, bool) {
        (!self.blocked_low[hash], !self.blocked_high[hash])
    }
}

fn sweep_axis(mapper: &IndexMapper, boundary: &[bool], axis: Axis) -> Occlusion {
    let len = mapper.extent().len(axis) as usize;
    let stride = mapper.stride(axis);
    let mut occ = Occlusion {
        blocked_low: vec![false; boundary.len()],
        blocked_high: vec![false; boundary.len()],
    };

    for start in mapper.coords().filter(|c| c.get(axis) == 0) {
        let base = mapper.hash_unchecked(start);

        // low-ward: 0 up to the last index
        let mut seen = false;
        for step in 0..len {
            let h = base + step * stride;
            seen |= boundary[h];
            occ.blocked_low[h] = seen;
        }

        // high-ward: next-to-last index down to 0, the top index is never
        // visited and stays unblocked
        let mut seen = false;
        for step in (0..len.saturating_sub(1)).rev() {
            let h = base + step * stride;
            seen |= boundary[h];
            occ.blocked_high[h] = seen;
        }
    }

    occ
}

#[cfg(not(feature = "parallel"))]
fn occlusion(mapper: &IndexMapper, boundary: &[bool]) -> [Occlusion; 3] {
    Axis::ALL.map(|axis| sweep_axis(mapper, boundary, axis))
}

#[cfg(feature = "parallel")]
fn occlusion(mapper: &IndexMapper, boundary: &[bool]) -> [Occlusion; 3] {
    let (x, (y, z)) = rayon::join(
        || sweep_axis(mapper, boundary, Axis::X),
        || {
            rayon::join(
                || sweep_axis(mapper, boundary, Axis::Y),
                || sweep_axis(mapper, boundary, Axis::Z),
            )
        },
    );
    [x, y, z]
}

/// Classify every cell of a boundary mask.
///
/// `boundary` must hold `mapper.cell_count()` values in canonical linear order.
/// Returns [`BOUNDARY_LABEL`], [`EXTERIOR_LABEL`] or [`INTERIOR_LABEL`] per
/// cell.
pub fn classify_labels(mapper: &IndexMapper, boundary: &[bool]) -> Vec<i32> {
    let [x, y, z] = occlusion(mapper, boundary);

    boundary
        .iter()
        .enumerate()
        .map(|(h, &is_boundary)| {
            if is_boundary {
                return BOUNDARY_LABEL;
            }
            let (low_x, high_x) = x.clear(h);
            let (low_y, high_y) = y.clear(h);
            let (low_z, high_z) = z.clear(h);

            let see_through = (low_x && high_x) || (low_y && high_y) || (low_z && high_z);
            let open_every_axis = (low_x || high_x) && (low_y || high_y) && (low_z || high_z);

            if see_through || open_every_axis {
                EXTERIOR_LABEL
            } else {
                INTERIOR_LABEL
            }
        })
        .collect()
}

/// Classify the grid's boundary mask into the [`INTERIOR_EXTERIOR`] channel.
///
/// An existing classification channel is replaced.
///
/// # Errors
/// `InvalidChannel` if the grid has no boolean [`BOUNDARY`] channel.
pub fn classify(grid: &mut VoxelGrid) -> Result<FieldSummary> {
    let labels = classify_labels(grid.mapper(), grid.channel::<bool>(BOUNDARY)?);
    let summary = FieldSummary::from_labels(&labels);

    if summary.boundary == 0 {
        log::warn!("No boundary cells, every cell classifies as exterior");
    }
    grid.insert_channel(INTERIOR_EXTERIOR, labels)?;

    log::info!(
        "Classified {} cells: {} boundary, {} interior, {} exterior",
        summary.total(),
        summary.boundary,
        summary.interior,
        summary.exterior
    );
    Ok(summary)
}

/// Classify the grid unless a classification channel already exists.
pub(crate) fn ensure_classified(grid: &mut VoxelGrid) -> Result<()> {
    if !grid.has_channel(INTERIOR_EXTERIOR) {
        classify(grid)?;
    }
    Ok(())
}
