use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use scad_scene::parse;
use winder_model::{filament_winder, ParameterSet};

fn configuration() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../configuration.toml")
}

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("winder-cli-{label}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn filament_winder_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_filament-winder"))
        .args(args)
        .env_remove("OPENSCAD_BIN")
        .output()
        .expect("failed to run filament-winder")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// VALIDATE
// =============================================================================

#[test]
fn validate_accepts_shipped_configuration() {
    let config = configuration();
    let output = filament_winder_cli(&["validate", "--config", config.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("OK: "));
}

#[test]
fn validate_lists_violations() {
    let dir = scratch_dir("validate");
    let source = fs::read_to_string(configuration())
        .unwrap()
        .replace("wall_thickness = 4", "wall_thickness = 0")
        .replace("motor_screw_x = 20", "motor_screw_x = 25");
    let config = dir.join("bad.toml");
    fs::write(&config, source).unwrap();

    let output = filament_winder_cli(&["validate", "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("wall_thickness must be positive"), "{text}");
    assert!(text.contains("motor_screw_x"), "{text}");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_configuration_fails() {
    let output = filament_winder_cli(&["validate", "--config", "/nonexistent/winder.toml"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read"));
}

// =============================================================================
// RENDER
// =============================================================================

#[test]
fn render_with_stub_writes_both_files() {
    let dir = scratch_dir("render");
    let config = configuration();
    let output = filament_winder_cli(&[
        "render",
        "--config",
        config.to_str().unwrap(),
        "--out-dir",
        dir.to_str().unwrap(),
        "--stub",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let scene_text = fs::read_to_string(dir.join("filament_winder.scad")).unwrap();
    assert!(scene_text.starts_with("$fn = 200;\n"));
    let scene = parse(&scene_text).unwrap();
    assert_eq!(scene.root, filament_winder(&ParameterSet::default()).unwrap());

    let mesh = fs::read_to_string(dir.join("filament_winder.stl")).unwrap();
    assert!(mesh.starts_with("solid filament_winder"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn scene_only_skips_the_renderer() {
    let dir = scratch_dir("scene-only");
    let config = configuration();
    let output = filament_winder_cli(&[
        "render",
        "--config",
        config.to_str().unwrap(),
        "--out-dir",
        dir.to_str().unwrap(),
        "--name",
        "winder",
        "--fn",
        "48",
        "--scene-only",
        "--openscad",
        "/nonexistent/openscad",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    let scene_text = fs::read_to_string(dir.join("winder.scad")).unwrap();
    assert!(scene_text.starts_with("$fn = 48;\n"));
    assert!(!dir.join("winder.stl").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_renderer_binary_fails() {
    let dir = scratch_dir("no-openscad");
    let config = configuration();
    let output = filament_winder_cli(&[
        "render",
        "--config",
        config.to_str().unwrap(),
        "--out-dir",
        dir.to_str().unwrap(),
        "--openscad",
        "/nonexistent/openscad",
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to start renderer"), "{}", stderr(&output));
    assert!(dir.join("filament_winder.scad").is_file());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn resolution_below_three_is_rejected() {
    let config = configuration();
    let output = filament_winder_cli(&[
        "render",
        "--config",
        config.to_str().unwrap(),
        "--fn",
        "2",
        "--scene-only",
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("scene resolution must be >= 3"));
}

// =============================================================================
// BOUNDS
// =============================================================================

#[test]
fn bounds_reports_assembly_extent() {
    let config = configuration();
    let output = filament_winder_cli(&["bounds", "--config", config.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    let assembly = text
        .lines()
        .find(|line| line.starts_with("assembly"))
        .expect("assembly line");
    assert!(assembly.ends_with("min [-75, -173, -2] max [106, 171, 140]"), "{assembly}");
    assert!(text.contains("size                   [181, 344, 142]"), "{text}");
    assert!(text.contains("19 primitives"));
}
