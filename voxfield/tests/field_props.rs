//! Property-based tests checking the sweeps against brute-force references on
//! random boundary masks.

use proptest::prelude::*;
use voxfield::prelude::*;
use voxfield::{
    classify_labels, unreached_sentinel, BOUNDARY_LABEL, EXTERIOR_LABEL, INTERIOR_LABEL,
};
use voxfield_core::{Axis, IndexMapper};

/// Random extent up to 5 cells per axis with a random boundary mask.
fn masked_grid() -> impl Strategy<Value = VoxelGrid> {
    (1i32..=5, 1i32..=5, 1i32..=5).prop_flat_map(|(x, y, z)| {
        let cells = (x * y * z) as usize;
        prop::collection::vec(prop::bool::weighted(0.2), cells).prop_map(move |mask| {
            GridBuilder::new(x, y, z)
                .with_boundary(mask)
                .build()
                .unwrap()
        })
    })
}

/// Label a cell by walking its three axis lines directly.
fn reference_label(mapper: &IndexMapper, boundary: &[bool], c: VoxelCoord) -> i32 {
    if boundary[mapper.hash_unchecked(c)] {
        return BOUNDARY_LABEL;
    }
    let clear = |axis: Axis| {
        let at = c.get(axis);
        let len = mapper.extent().len(axis);
        let hit = |t: i32| boundary[mapper.hash_unchecked(c.with(axis, t))];
        let low = !(0..=at).any(hit);
        // the top index is never seen from above
        let high = !(at..len - 1).any(hit);
        (low, high)
    };
    let (lx, hx) = clear(Axis::X);
    let (ly, hy) = clear(Axis::Y);
    let (lz, hz) = clear(Axis::Z);
    if (lx && hx) || (ly && hy) || (lz && hz) || ((lx || hx) && (ly || hy) && (lz || hz)) {
        EXTERIOR_LABEL
    } else {
        INTERIOR_LABEL
    }
}

fn boundary_coords(grid: &VoxelGrid) -> Vec<VoxelCoord> {
    grid.collect_coordinates::<bool, _>(BOUNDARY, |b| *b).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Sweep classification agrees with per-cell line walks
    #[test]
    fn classification_matches_reference(grid in masked_grid()) {
        let boundary = grid.channel::<bool>(BOUNDARY).unwrap();
        let labels = classify_labels(grid.mapper(), boundary);
        for (h, c) in grid.mapper().coords().enumerate() {
            prop_assert_eq!(labels[h], reference_label(grid.mapper(), boundary, c), "at {:?}", c);
        }
    }

    /// Boundary cells, and only they, are labelled 0
    #[test]
    fn boundary_cells_labelled_zero(mut grid in masked_grid()) {
        let summary = grid.classify_boundary().unwrap();
        prop_assert_eq!(summary.boundary, boundary_coords(&grid).len());
        prop_assert_eq!(summary.total(), grid.cell_count());

        let boundary = grid.channel::<bool>(BOUNDARY).unwrap();
        let labels = grid.channel::<i32>(INTERIOR_EXTERIOR).unwrap();
        for (&b, &label) in boundary.iter().zip(labels) {
            prop_assert_eq!(b, label == BOUNDARY_LABEL);
            prop_assert!(label == BOUNDARY_LABEL || label == EXTERIOR_LABEL || label == INTERIOR_LABEL);
        }
    }

    /// Manhattan field equals the signed brute-force city-block distance
    #[test]
    fn manhattan_matches_brute_force(mut grid in masked_grid()) {
        grid.generate_manhattan_sdf(MANHATTAN_SDF).unwrap();
        let walls = boundary_coords(&grid);

        for c in grid.mapper().coords() {
            let label = grid.get::<i32>(INTERIOR_EXTERIOR, c).unwrap();
            let m = grid.get::<i32>(MANHATTAN_SDF, c).unwrap();
            let nearest = walls
                .iter()
                .map(|w| (w.x - c.x).abs() + (w.y - c.y).abs() + (w.z - c.z).abs())
                .min();
            match nearest {
                Some(d) => prop_assert_eq!(m, label.signum() * d, "at {:?}", c),
                None => prop_assert_eq!(m, label.signum() * i32::MAX, "at {:?}", c),
            }
        }
    }

    /// Euclidean field is signed like the labels, points at a real boundary
    /// cell and never undercuts the true nearest distance
    #[test]
    fn euclidean_bounded_by_brute_force(mut grid in masked_grid()) {
        grid.generate_euclidean_sdf(EUCLIDEAN_SDF).unwrap();
        let walls = boundary_coords(&grid);
        let sentinel = unreached_sentinel(grid.mapper());

        for c in grid.mapper().coords() {
            let p = Vec3::from(c);
            let label = grid.get::<i32>(INTERIOR_EXTERIOR, c).unwrap();
            let e = grid.get::<f32>(EUCLIDEAN_SDF, c).unwrap();
            let closest = grid.get::<Vec3>(CLOSEST_BOUNDARY_CELL, c).unwrap();

            if walls.is_empty() {
                prop_assert_eq!(closest, sentinel);
                continue;
            }
            prop_assert!(walls.iter().any(|&w| Vec3::from(w) == closest), "at {:?}", c);
            let nearest = walls
                .iter()
                .map(|&w| (Vec3::from(w) - p).length())
                .fold(f32::INFINITY, f32::min);
            prop_assert!(e.abs() >= nearest, "at {:?}: {} < {}", c, e.abs(), nearest);
            if label == BOUNDARY_LABEL {
                prop_assert_eq!(e, 0.0);
            } else {
                prop_assert_eq!(e.signum(), label.signum() as f32);
            }
        }
    }

    /// Flow vectors are exactly coord - closest and as long as |ESDF|
    #[test]
    fn flow_length_matches_euclidean(mut grid in masked_grid()) {
        let summary = grid.generate_all_fields().unwrap();
        prop_assert_eq!(summary.total(), grid.cell_count());

        let flow = grid.channel::<Vec3>(DISTANCE_FLOW_FIELD).unwrap();
        let closest = grid.channel::<Vec3>(CLOSEST_BOUNDARY_CELL).unwrap();
        let esdf = grid.channel::<f32>(EUCLIDEAN_SDF).unwrap();
        for (h, c) in grid.mapper().coords().enumerate() {
            prop_assert_eq!(flow[h], Vec3::from(c) - closest[h]);
            prop_assert_eq!(flow[h].length(), esdf[h].abs());
        }
    }
}
