//! End-to-end tests for classification and field generation on small grids
//! with hand-checked answers.

use voxfield::prelude::*;
use voxfield::{BOUNDARY_LABEL, EXTERIOR_LABEL, INTERIOR_LABEL};
use voxfield_grid::{ChannelFault, ElementKind};

/// 5x5x5 hollow cube shell spanning cells 1..=5 of a 7x7x7 grid.
fn hollow_box() -> VoxelGrid {
    GridBuilder::new(7, 7, 7)
        .with_boundary_fn(|c| {
            let inside = |v: i32| (1..=5).contains(&v);
            let shell = |v: i32| v == 1 || v == 5;
            inside(c.x) && inside(c.y) && inside(c.z) && (shell(c.x) || shell(c.y) || shell(c.z))
        })
        .build()
        .unwrap()
}

fn is_box_interior(c: VoxelCoord) -> bool {
    (2..=4).contains(&c.x) && (2..=4).contains(&c.y) && (2..=4).contains(&c.z)
}

fn coords(grid: &VoxelGrid) -> Vec<VoxelCoord> {
    grid.mapper().coords().collect()
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_empty_boundary_all_exterior() {
    let mut grid = GridBuilder::new(4, 3, 5).build().unwrap();
    let summary = grid.classify_boundary().unwrap();
    assert_eq!(summary.exterior, 60);
    assert_eq!(summary.boundary + summary.interior, 0);
    assert!(grid
        .channel::<i32>(INTERIOR_EXTERIOR)
        .unwrap()
        .iter()
        .all(|&l| l == EXTERIOR_LABEL));
}

#[test]
fn test_single_center_cell() {
    let center = VoxelCoord::new(2, 2, 2);
    let mut grid = GridBuilder::new(5, 5, 5)
        .with_boundary_coords([center])
        .build()
        .unwrap();
    grid.classify_boundary().unwrap();

    for c in coords(&grid) {
        let label = grid.get::<i32>(INTERIOR_EXTERIOR, c).unwrap();
        if c == center {
            assert_eq!(label, BOUNDARY_LABEL);
        } else {
            assert_eq!(label, EXTERIOR_LABEL, "at {:?}", c);
        }
    }
}

#[test]
fn test_hollow_box_classification() {
    let mut grid = hollow_box();
    let summary = grid.classify_boundary().unwrap();
    assert_eq!(summary.interior, 27);
    assert_eq!(summary.boundary, 125 - 27);
    assert_eq!(summary.exterior, 343 - 125);

    for c in coords(&grid) {
        let label = grid.get::<i32>(INTERIOR_EXTERIOR, c).unwrap();
        let expected = if grid.get::<bool>(BOUNDARY, c).unwrap() {
            BOUNDARY_LABEL
        } else if is_box_interior(c) {
            INTERIOR_LABEL
        } else {
            EXTERIOR_LABEL
        };
        assert_eq!(label, expected, "at {:?}", c);
    }
}

#[test]
fn test_top_index_boundary_unseen_from_above() {
    // Every high-side wall of (0, 1, 1) sits at a top index, which the
    // high-ward sweep never visits, so X reads as open both ways and the cell
    // stays exterior.
    let mut grid = GridBuilder::new(3, 3, 3)
        .with_boundary_coords([
            VoxelCoord::new(2, 1, 1),
            VoxelCoord::new(0, 0, 1),
            VoxelCoord::new(0, 2, 1),
            VoxelCoord::new(0, 1, 0),
            VoxelCoord::new(0, 1, 2),
        ])
        .build()
        .unwrap();
    grid.classify_boundary().unwrap();
    assert_eq!(
        grid.get::<i32>(INTERIOR_EXTERIOR, VoxelCoord::new(0, 1, 1)),
        Ok(EXTERIOR_LABEL)
    );

    // one index further from the top, the same walls enclose it
    let mut grid = GridBuilder::new(4, 4, 4)
        .with_boundary_coords([
            VoxelCoord::new(2, 1, 1),
            VoxelCoord::new(0, 0, 1),
            VoxelCoord::new(0, 2, 1),
            VoxelCoord::new(0, 1, 0),
            VoxelCoord::new(0, 1, 2),
        ])
        .build()
        .unwrap();
    grid.classify_boundary().unwrap();
    assert_eq!(
        grid.get::<i32>(INTERIOR_EXTERIOR, VoxelCoord::new(0, 1, 1)),
        Ok(INTERIOR_LABEL)
    );
}

#[test]
fn test_classification_idempotent() {
    let mut grid = hollow_box();
    let first = grid.classify_boundary().unwrap();
    let labels = grid.channel::<i32>(INTERIOR_EXTERIOR).unwrap().to_vec();
    let second = grid.classify_boundary().unwrap();
    assert_eq!(first, second);
    assert_eq!(grid.channel::<i32>(INTERIOR_EXTERIOR).unwrap(), &labels[..]);
}

#[test]
fn test_no_transient_channels_left() {
    let mut grid = hollow_box();
    grid.classify_boundary().unwrap();
    let names: Vec<&str> = grid.channel_names().collect();
    assert_eq!(names, vec![BOUNDARY, INTERIOR_EXTERIOR]);
}

// =============================================================================
// Distance fields
// =============================================================================

#[test]
fn test_boundary_cells_pinned_to_zero() {
    let mut grid = hollow_box();
    grid.generate_all_fields().unwrap();

    let walls = grid.collect_coordinates::<bool, _>(BOUNDARY, |b| *b).unwrap();
    assert_eq!(walls.len(), 98);
    for c in walls {
        assert_eq!(grid.get::<i32>(MANHATTAN_SDF, c), Ok(0));
        assert_eq!(grid.get::<f32>(EUCLIDEAN_SDF, c), Ok(0.0));
        assert_eq!(grid.get::<Vec3>(DISTANCE_FLOW_FIELD, c), Ok(Vec3::ZERO));
        assert_eq!(grid.get::<Vec3>(CLOSEST_BOUNDARY_CELL, c), Ok(Vec3::from(c)));
    }
}

#[test]
fn test_manhattan_adjacent_cells() {
    let mut grid = hollow_box();
    grid.generate_manhattan_sdf(MANHATTAN_SDF).unwrap();

    // one step outside a face, one step inside it
    assert_eq!(grid.get::<i32>(MANHATTAN_SDF, VoxelCoord::new(0, 3, 3)), Ok(1));
    assert_eq!(grid.get::<i32>(MANHATTAN_SDF, VoxelCoord::new(2, 3, 3)), Ok(-1));
    assert_eq!(grid.get::<i32>(MANHATTAN_SDF, VoxelCoord::new(3, 3, 3)), Ok(-2));
    // outer corner: three steps to (1, 1, 1)
    assert_eq!(grid.get::<i32>(MANHATTAN_SDF, VoxelCoord::new(0, 0, 0)), Ok(3));
}

#[test]
fn test_sdf_signs_follow_classification() {
    let mut grid = hollow_box();
    grid.generate_all_fields().unwrap();

    for c in coords(&grid) {
        let label = grid.get::<i32>(INTERIOR_EXTERIOR, c).unwrap();
        let m = grid.get::<i32>(MANHATTAN_SDF, c).unwrap();
        let e = grid.get::<f32>(EUCLIDEAN_SDF, c).unwrap();
        assert_eq!(m.signum(), label.signum(), "manhattan at {:?}", c);
        if label == BOUNDARY_LABEL {
            assert_eq!(e, 0.0);
        } else {
            assert_eq!(e.signum(), label.signum() as f32, "euclidean at {:?}", c);
            assert!(m.abs() >= 1);
        }
    }
}

#[test]
fn test_euclidean_corridor_monotonic() {
    // wall plane at i = 0
    let mut grid = GridBuilder::new(6, 3, 3)
        .with_boundary_fn(|c| c.x == 0)
        .build()
        .unwrap();
    grid.generate_manhattan_sdf(MANHATTAN_SDF).unwrap();
    grid.generate_euclidean_sdf(EUCLIDEAN_SDF).unwrap();

    for j in 0..3 {
        for k in 0..3 {
            let mut previous = -1.0f32;
            for i in 0..6 {
                let c = VoxelCoord::new(i, j, k);
                let e = grid.get::<f32>(EUCLIDEAN_SDF, c).unwrap();
                assert_eq!(e, i as f32, "at {:?}", c);
                assert_eq!(grid.get::<i32>(MANHATTAN_SDF, c), Ok(i));
                assert!(e >= previous);
                previous = e;
            }
        }
    }
}

#[test]
fn test_euclidean_diagonal_distance() {
    let mut grid = GridBuilder::new(4, 4, 4)
        .with_boundary_coords([VoxelCoord::new(0, 0, 0)])
        .build()
        .unwrap();
    grid.generate_euclidean_sdf(EUCLIDEAN_SDF).unwrap();

    let far = VoxelCoord::new(3, 3, 3);
    assert_eq!(
        grid.get::<f32>(EUCLIDEAN_SDF, far).unwrap(),
        Vec3::new(3.0, 3.0, 3.0).length()
    );
    assert_eq!(grid.get::<Vec3>(CLOSEST_BOUNDARY_CELL, far), Ok(Vec3::ZERO));
}

#[test]
fn test_flow_matches_closest_cell() {
    let mut grid = hollow_box();
    grid.generate_all_fields().unwrap();

    let flow = grid.channel::<Vec3>(DISTANCE_FLOW_FIELD).unwrap();
    let closest = grid.channel::<Vec3>(CLOSEST_BOUNDARY_CELL).unwrap();
    let esdf = grid.channel::<f32>(EUCLIDEAN_SDF).unwrap();

    for (h, c) in coords(&grid).into_iter().enumerate() {
        assert_eq!(flow[h], Vec3::from(c) - closest[h]);
        assert_eq!(flow[h].length(), esdf[h].abs(), "at {:?}", c);
    }

    // outside the +x face the flow points further along +x
    let out = grid.get::<Vec3>(DISTANCE_FLOW_FIELD, VoxelCoord::new(6, 3, 3)).unwrap();
    assert_eq!(out, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_existing_classification_reused() {
    let mut grid = GridBuilder::new(3, 1, 1).build().unwrap();
    grid.insert_channel(INTERIOR_EXTERIOR, vec![BOUNDARY_LABEL, EXTERIOR_LABEL, INTERIOR_LABEL])
        .unwrap();
    grid.generate_manhattan_sdf("M").unwrap();
    assert_eq!(grid.channel::<i32>("M").unwrap(), &[0, 1, -2][..]);
}

#[test]
fn test_generate_all_fields_channels() {
    let mut grid = hollow_box();
    let summary = grid.generate_all_fields().unwrap();
    assert_eq!(summary.total(), grid.cell_count());

    let kinds: Vec<(&str, ElementKind)> = grid
        .channels()
        .map(|view| (view.name(), view.kind()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (BOUNDARY, ElementKind::Bool),
            (CLOSEST_BOUNDARY_CELL, ElementKind::Vector),
            (DISTANCE_FLOW_FIELD, ElementKind::Vector),
            (EUCLIDEAN_SDF, ElementKind::Float),
            (INTERIOR_EXTERIOR, ElementKind::Int),
            (MANHATTAN_SDF, ElementKind::Int),
        ]
    );
}

// =============================================================================
// Preconditions
// =============================================================================

#[test]
fn test_missing_boundary_fails_cleanly() {
    let mut grid = hollow_box();
    grid.remove_channel(BOUNDARY).unwrap();

    assert!(grid.classify_boundary().unwrap_err().is_invalid_channel());
    assert!(grid
        .generate_manhattan_sdf(MANHATTAN_SDF)
        .unwrap_err()
        .is_invalid_channel());
    assert!(grid
        .generate_euclidean_sdf(EUCLIDEAN_SDF)
        .unwrap_err()
        .is_invalid_channel());
    assert!(grid.generate_all_fields().unwrap_err().is_invalid_channel());
    assert_eq!(grid.num_channels(), 0);
}

#[test]
fn test_boundary_of_wrong_kind() {
    let mut grid = GridBuilder::new(2, 2, 2).build().unwrap();
    grid.insert_channel(BOUNDARY, vec![1i32; 8]).unwrap();
    let err = grid.classify_boundary().unwrap_err();
    assert_eq!(
        err,
        GridError::InvalidChannel {
            name: BOUNDARY.to_owned(),
            fault: ChannelFault::KindMismatch {
                expected: ElementKind::Bool,
                found: ElementKind::Int,
            },
        }
    );
}

#[test]
fn test_flow_requires_closest_cells() {
    let mut grid = hollow_box();
    let err = grid.generate_flow_field(DISTANCE_FLOW_FIELD).unwrap_err();
    assert_eq!(
        err,
        GridError::InvalidChannel {
            name: CLOSEST_BOUNDARY_CELL.to_owned(),
            fault: ChannelFault::Missing,
        }
    );
    assert!(!grid.has_channel(DISTANCE_FLOW_FIELD));
}
