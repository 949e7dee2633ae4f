//! meshring CLI — build vertex adjacency graphs, inspect one-rings,
//! and export wireframes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use meshring_types::constants::{
    DEFAULT_HIGHLIGHT_VERTEX, DEFAULT_PHI_RESOLUTION, DEFAULT_SPHERE_RADIUS,
    DEFAULT_THETA_RESOLUTION,
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "meshring")]
#[command(version, about = "meshring — one-ring adjacency graphs for triangle meshes")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Adjacency builder config (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a closed sphere, build its graph and report a one-ring.
    Sphere {
        #[arg(long, default_value_t = DEFAULT_SPHERE_RADIUS)]
        radius: f32,

        /// Longitude divisions.
        #[arg(long, default_value_t = DEFAULT_THETA_RESOLUTION)]
        theta: usize,

        /// Latitude divisions, pole to pole.
        #[arg(long, default_value_t = DEFAULT_PHI_RESOLUTION)]
        phi: usize,

        /// Vertex whose one-ring is reported and exported.
        #[arg(long, default_value_t = DEFAULT_HIGHLIGHT_VERTEX)]
        highlight: u32,

        /// Write the wireframe JSON here.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the graph of a mesh JSON file.
    Graph {
        /// Path to mesh JSON (`positions` + `triangles`).
        path: PathBuf,

        /// Vertex whose one-ring is reported and exported.
        #[arg(long)]
        highlight: Option<u32>,

        /// Write the wireframe JSON here.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a config (.toml) or mesh (.json) file.
    Validate {
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Sphere {
            radius,
            theta,
            phi,
            highlight,
            output,
        } => commands::sphere(&config, radius, theta, phi, highlight, output.as_deref()),
        Commands::Graph {
            path,
            highlight,
            output,
        } => commands::graph(&config, &path, highlight, output.as_deref()),
        Commands::Validate { path } => commands::validate(&config, &path),
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
