//! Field solver example - a single charged disk in a square domain

use anyhow::Result;
use efield_solver::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Electrostatic FEM example: charged disk ===\n");

    // 200 x 200 domain with one circular electrode at potential 1
    let mut geometry = Geometry::default();
    geometry.add_circular(-20.0, 0.0, 10.0, 1.0);

    let mut mesh = Mesh::new(geometry, 5.0, 5.0)?;
    mesh.generate()?;

    let mut solver = Solver::new(&mesh);
    solver.assemble(Symmetry::Planar)?;
    solver.apply_boundary_conditions()?;
    solver.solve(SolveMethod::Direct)?;

    let summary = solver.summary();
    println!(
        "nodes: {} ({} fixed, {} free), elements: {}",
        summary.num_nodes, summary.num_fixed_nodes, summary.num_free_nodes, summary.num_elements
    );

    println!("\npotential along y = 0:");
    for &x in &[-20.0, 0.0, 20.0, 50.0, 90.0] {
        println!("  u({x:>5.1}, 0.0) = {:.6}", solver.probe(x, 0.0)?);
    }

    let grid = solver.potential_grid()?;
    std::fs::write("field.json", serde_json::to_string_pretty(&grid)?)?;
    let (nx, ny) = grid.dimensions();
    println!("\nwrote field.json ({nx} x {ny} samples)");

    Ok(())
}
