//! Hollow Sphere Field Generation
//!
//! This example demonstrates the full voxfield pipeline:
//! 1. Build a grid whose boundary mask is a spherical shell
//! 2. Classify interior and exterior cells
//! 3. Generate both signed distance fields and the flow field
//! 4. Hand every channel to an exporter
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --example hollow_sphere -- 48
//! ```

use std::env;

use instant::Instant;

use voxfield::prelude::*;
use voxfield_grid::{CellValue, ChannelExporter};

/// Prints per-channel statistics instead of writing files.
struct StatsExporter;

impl ChannelExporter for StatsExporter {
    type Error = std::convert::Infallible;

    fn export(&mut self, view: &ChannelView<'_>) -> Result<(), Self::Error> {
        let mut non_zero = 0usize;
        let mut max_magnitude = 0.0f32;
        for (_, value) in view.cells() {
            let magnitude = match value {
                CellValue::Bool(b) => b as u8 as f32,
                CellValue::Int(v) => v.unsigned_abs() as f32,
                CellValue::Float(v) => v.abs(),
                CellValue::Vector(v) => v.length(),
            };
            if magnitude != 0.0 {
                non_zero += 1;
            }
            max_magnitude = max_magnitude.max(magnitude);
        }
        println!(
            "  {:<22} {:<8} {:>8} non-zero   max |v| = {:.3}",
            view.name(),
            view.tag(),
            non_zero,
            max_magnitude
        );
        Ok(())
    }
}

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("          voxfield Hollow Sphere Demo");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    let size: i32 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(32);

    // =========================================================================
    // Step 1: Build the boundary mask
    // =========================================================================
    let center = (size - 1) as f32 / 2.0;
    let radius = size as f32 * 0.35;

    let start = Instant::now();
    let grid = GridBuilder::new(size, size, size)
        .with_uniform_cell_size(0.1)
        .with_boundary_fn(move |c| {
            let d = (Vec3::from(c) - Vec3::splat(center)).length();
            (d - radius).abs() < 0.75
        })
        .build();
    let mut grid = match grid {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to build grid: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "Built {}x{}x{} grid ({} cells) in {:?}",
        size,
        size,
        size,
        grid.cell_count(),
        start.elapsed()
    );

    // =========================================================================
    // Step 2: Generate fields
    // =========================================================================
    let start = Instant::now();
    let summary = match grid.generate_all_fields() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Field generation failed: {}", e);
            std::process::exit(1);
        }
    };
    println!("Generated all fields in {:?}", start.elapsed());
    println!(
        "  boundary: {}   interior: {}   exterior: {}",
        summary.boundary, summary.interior, summary.exterior
    );

    let mid = size / 2;
    let probe = VoxelCoord::new(mid, mid, mid);
    if let (Ok(m), Ok(e)) = (
        grid.get::<i32>(MANHATTAN_SDF, probe),
        grid.get::<f32>(EUCLIDEAN_SDF, probe),
    ) {
        println!(
            "  center {:?} at {:?}: manhattan = {}, euclidean = {:.3}",
            probe,
            grid.to_world(probe),
            m,
            e
        );
    }
    println!();

    // =========================================================================
    // Step 3: Export
    // =========================================================================
    println!("Channels:");
    let count = match grid.export_all(&mut StatsExporter) {
        Ok(count) => count,
        Err(never) => match never {},
    };
    println!();
    println!("Exported {} channels", count);
}
