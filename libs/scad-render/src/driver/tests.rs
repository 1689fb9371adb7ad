use glam::DVec3;
use scad_geometry::GeometryNode;

use super::*;
use crate::renderer::StubRenderer;

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scad-driver-{label}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn plate() -> Scene {
    let root = GeometryNode::cube(DVec3::new(42.0, 42.0, 4.0), true).unwrap()
        - GeometryNode::cylinder(5.0, 4.0, true).unwrap();
    Scene::new(root)
}

#[test]
fn test_write_scene_creates_out_dir() {
    let dir = scratch_dir("write").join("nested");
    let driver = RenderDriver::new(StubRenderer::new(), &dir);

    let path = driver.write_scene(&plate(), "plate").unwrap();
    assert_eq!(path, dir.join("plate.scad"));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("$fn = 200;\n"));
    assert!(text.contains("difference() {"));
    fs::remove_dir_all(dir.parent().unwrap()).unwrap();
}

#[test]
fn test_render_writes_scene_and_mesh() {
    let dir = scratch_dir("render");
    let driver = RenderDriver::new(StubRenderer::new(), &dir);

    let output = driver.render(&plate(), "plate").unwrap();
    assert_eq!(output.scene_path, driver.scene_path("plate"));
    assert_eq!(output.mesh_path, dir.join("plate.stl"));
    assert!(output.scene_path.is_file());
    assert!(fs::read_to_string(&output.mesh_path)
        .unwrap()
        .starts_with("solid plate"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_render_failure_keeps_scene() {
    let dir = scratch_dir("fail");
    let driver = RenderDriver::new(StubRenderer::failing(), &dir);

    let err = driver.render(&plate(), "plate").unwrap_err();
    assert!(matches!(err, RenderError::RendererFailed { .. }));
    assert!(driver.scene_path("plate").is_file());
    assert!(!driver.mesh_path("plate").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_rejects_path_like_names() {
    let driver = RenderDriver::new(StubRenderer::new(), scratch_dir("names"));
    for name in ["", "..", "sub/part", "a\\b"] {
        assert!(matches!(
            driver.write_scene(&plate(), name),
            Err(RenderError::InvalidName(_))
        ));
    }
}

#[test]
fn test_unwritable_out_dir_is_io_error() {
    let blocker = scratch_dir("blocked");
    fs::write(&blocker, "not a directory").unwrap();
    let driver = RenderDriver::new(StubRenderer::new(), blocker.join("out"));

    match driver.write_scene(&plate(), "plate") {
        Err(RenderError::Io { path, .. }) => assert_eq!(path, blocker.join("out")),
        other => panic!("Expected Io, got {:?}", other),
    }
    fs::remove_file(&blocker).unwrap();
}
