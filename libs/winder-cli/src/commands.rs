//! Subcommand implementations.

use std::path::Path;

use anyhow::{bail, Context, Result};
use config::constants::{approx_equal, SceneConfig};
use glam::DVec3;
use scad_geometry::BoundingBox;
use scad_render::{OpenScadRenderer, RenderDriver, Renderer, StubRenderer};
use scad_scene::Scene;
use tracing::info;
use winder_model::{filament_winder, AssemblyParts, ParameterSet};

use crate::RenderArgs;

fn load(path: &Path) -> Result<ParameterSet> {
    let params = ParameterSet::load(path)?;
    info!(path = %path.display(), "parameters loaded");
    Ok(params)
}

/// Build, write the scene and (unless told otherwise) render the mesh.
pub fn render(args: &RenderArgs) -> Result<()> {
    let scene_config = SceneConfig::new(args.resolution)?;
    let params = load(&args.config.config)?;
    let root = filament_winder(&params).context("failed to build the filament winder")?;
    let scene = Scene::with_config(root, scene_config);

    let renderer: Box<dyn Renderer> = if args.stub {
        Box::new(StubRenderer::new())
    } else {
        Box::new(OpenScadRenderer::new(&args.openscad))
    };
    let driver = RenderDriver::new(renderer, &args.out_dir);

    if args.scene_only {
        let scene_path = driver
            .write_scene(&scene, &args.name)
            .context("failed to write the scene file")?;
        println!("{}", scene_path.display());
        return Ok(());
    }

    let output = driver
        .render(&scene, &args.name)
        .context("failed to render the filament winder")?;
    println!("{}", output.scene_path.display());
    println!("{}", output.mesh_path.display());
    Ok(())
}

/// Report whether a parameter file is usable.
pub fn validate(path: &Path) -> Result<()> {
    let params = load(path)?;
    if let Err(err) = params.validate() {
        for error in &err.errors {
            println!("error: {error}");
        }
        bail!(
            "{} has {} invalid parameter(s)",
            path.display(),
            err.errors.len()
        );
    }
    println!("OK: {}", path.display());
    Ok(())
}

/// Print per-part and overall bounds.
pub fn bounds(path: &Path) -> Result<()> {
    let params = load(path)?;
    let parts = AssemblyParts::build(&params).context("failed to build the filament winder")?;

    for (name, part) in parts.named() {
        println!("{name:<22} {}", describe(&part.bounds()));
    }

    let winder = parts.assemble();
    println!("{:<22} {}", "assembly", describe(&winder.bounds()));
    println!("{:<22} {}", "size", vector(winder.bounds().size()));
    println!(
        "{:<22} {} nodes, {} primitives, depth {}",
        "tree",
        winder.node_count(),
        winder.primitive_count(),
        winder.depth()
    );
    Ok(())
}

fn describe(bounds: &BoundingBox) -> String {
    format!("min {} max {}", vector(bounds.min), vector(bounds.max))
}

fn vector(v: DVec3) -> String {
    // Rotations leave values like 98.00000000000001; `+ 0.0` drops `-0`.
    let snap = |c: f64| {
        if approx_equal(c, c.round()) {
            c.round() + 0.0
        } else {
            c
        }
    };
    format!("[{}, {}, {}]", snap(v.x), snap(v.y), snap(v.z))
}
