//! CLI command implementations.

use std::path::Path;

use meshring_io::{load_mesh, WireframeExport};
use meshring_mesh::generators::lat_long_sphere;
use meshring_mesh::{AdjacencyBuilder, AdjacencyConfig, AdjacencyGraph, TriangleMesh};
use meshring_types::MeshringResult;

/// Loads the builder config, or the default when no path is given.
pub fn load_config(path: Option<&Path>) -> MeshringResult<AdjacencyConfig> {
    match path {
        Some(path) => {
            let config = AdjacencyConfig::load(path)?;
            tracing::debug!(path = %path.display(), ?config, "config loaded");
            Ok(config)
        }
        None => Ok(AdjacencyConfig::default()),
    }
}

/// Sphere demo: generate, build, report the one-ring, optionally export.
pub fn sphere(
    config: &AdjacencyConfig,
    radius: f32,
    theta: usize,
    phi: usize,
    highlight: u32,
    output: Option<&Path>,
) -> MeshringResult<()> {
    println!("meshring sphere");
    println!("───────────────");
    println!();

    let mesh = lat_long_sphere(radius, theta, phi);
    let graph = build_and_report(config, &mesh)?;
    report_one_ring(&graph, highlight)?;
    export(&mesh, &graph, Some(highlight), output)
}

/// Build the graph of a mesh file.
pub fn graph(
    config: &AdjacencyConfig,
    path: &Path,
    highlight: Option<u32>,
    output: Option<&Path>,
) -> MeshringResult<()> {
    println!("meshring graph");
    println!("──────────────");
    println!("Mesh: {}", path.display());
    println!();

    let mesh = load_mesh(path)?;
    let graph = build_and_report(config, &mesh)?;
    if let Some(v) = highlight {
        report_one_ring(&graph, v)?;
    }
    export(&mesh, &graph, highlight, output)
}

/// Validate a config or mesh file.
pub fn validate(config: &AdjacencyConfig, path: &Path) -> MeshringResult<()> {
    println!("meshring validator");
    println!("──────────────────");
    println!();

    if path.extension().is_some_and(|ext| ext == "toml") {
        println!("Validating config: {}", path.display());
        AdjacencyConfig::load(path)?;
        println!("✅ Config is valid.");
    } else {
        println!("Validating mesh: {}", path.display());
        let mesh = load_mesh(path)?;
        mesh.validate()?;
        // Strict/lenient degenerate handling comes from the active config.
        AdjacencyBuilder::new(config.clone()).build(&mesh)?;
        println!(
            "✅ Mesh is valid ({} vertices, {} triangles).",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    Ok(())
}

fn build_and_report(config: &AdjacencyConfig, mesh: &TriangleMesh) -> MeshringResult<AdjacencyGraph> {
    let graph = AdjacencyBuilder::new(config.clone()).build(mesh)?;
    let stats = graph.stats();

    println!("Vertices:     {}", stats.vertex_count);
    println!("Triangles:    {}", mesh.triangle_count());
    println!("Edges:        {}", stats.edge_count);
    println!(
        "Degree:       min {} / max {} / mean {:.2}",
        stats.min_degree, stats.max_degree, stats.mean_degree
    );
    if stats.isolated_vertices > 0 {
        println!("Isolated:     {}", stats.isolated_vertices);
    }
    println!();

    Ok(graph)
}

fn report_one_ring(graph: &AdjacencyGraph, v: u32) -> MeshringResult<()> {
    let ring = graph.one_ring(v)?;
    let ids: Vec<String> = ring.neighbors.iter().map(u32::to_string).collect();
    println!("One-ring of {}: [{}]", ring.center, ids.join(", "));
    Ok(())
}

fn export(
    mesh: &TriangleMesh,
    graph: &AdjacencyGraph,
    highlight: Option<u32>,
    output: Option<&Path>,
) -> MeshringResult<()> {
    let Some(path) = output else {
        return Ok(());
    };
    WireframeExport::build(mesh, graph, highlight)?.write_json(path)?;
    println!("Wireframe written to: {}", path.display());
    Ok(())
}
