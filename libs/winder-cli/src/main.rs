//! # Filament Winder CLI
//!
//! Builds the filament winder from a parameter file and renders it.
//!
//! ```text
//! filament-winder render   --config configuration.toml --out-dir build
//! filament-winder validate --config configuration.toml
//! filament-winder bounds   --config configuration.toml
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use config::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_NAME, DEFAULT_RENDERER_BINARY, DEFAULT_SCENE_FN,
    RENDERER_ENV_VAR,
};

/// Parametric filament winder generator.
#[derive(Debug, Parser)]
#[command(name = "filament-winder", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the scene file and render it to STL.
    Render(RenderArgs),
    /// Load and validate a parameter file.
    Validate(ConfigArgs),
    /// Print the assembly bounding box and node counts.
    Bounds(ConfigArgs),
}

#[derive(Debug, Args)]
struct ConfigArgs {
    /// Parameter file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Base name of the scene and mesh files.
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
    name: String,

    /// Directory both files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// OpenSCAD binary, by path or by name on PATH.
    #[arg(long, env = RENDERER_ENV_VAR, default_value = DEFAULT_RENDERER_BINARY)]
    openscad: PathBuf,

    /// Scene resolution (`$fn`).
    #[arg(long = "fn", value_name = "N", default_value_t = DEFAULT_SCENE_FN)]
    resolution: u32,

    /// Write the scene file without rendering.
    #[arg(long)]
    scene_only: bool,

    /// Write a placeholder mesh instead of running OpenSCAD.
    #[arg(long, conflicts_with = "scene_only")]
    stub: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => commands::render(&args),
        Command::Validate(args) => commands::validate(&args.config),
        Command::Bounds(args) => commands::bounds(&args.config),
    }
}
