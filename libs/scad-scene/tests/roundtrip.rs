use glam::DVec3;
use scad_geometry::{GeometryNode, NodeKind};
use scad_scene::{parse, print, Scene};

fn bushing_plate() -> GeometryNode {
    let base = GeometryNode::cube(DVec3::new(150.0, 300.0, 4.0), true)
        .unwrap()
        .translate(DVec3::new(0.0, 21.0, 0.0));
    let spool = GeometryNode::cylinder(200.0, 300.0, true)
        .unwrap()
        .rotate(DVec3::new(90.0, 0.0, 0.0))
        .translate(DVec3::new(0.0, 21.0, 100.0));
    let bore = GeometryNode::cylinder(5.0, 600.0, true)
        .unwrap()
        .rotate(DVec3::new(90.0, 0.0, 0.0))
        .translate(DVec3::new(0.0, 0.0, 1.0 / 3.0));
    ((base - spool) + GeometryNode::cube(DVec3::new(42.0, 42.0, 100.0), false).unwrap()) - bore
}

#[test]
fn roundtrip_preserves_structure() {
    let scene = Scene::new(bushing_plate());
    let text = print(&scene);
    let parsed = parse(&text).unwrap();
    assert_eq!(parsed, scene);
    assert_eq!(parsed.root.kind(), NodeKind::Difference);
    assert_eq!(parsed.root.primitive_count(), 4);
}

#[test]
fn printing_parsed_output_is_stable() {
    let mut scene = Scene::new(bushing_plate());
    scene.resolution = 48;
    let first = print(&scene);
    let second = print(&parse(&first).unwrap());
    assert_eq!(first, second);
    assert!(first.starts_with("$fn = 48;"));
}

#[test]
fn parses_hand_written_scene() {
    let source = r#"
        $fn=200;

        // motor plate with one screw hole
        difference() {
            cube(center = true, size = [42, 42, 4]);
            translate(v = [20, -20, 0]) {
                cylinder(center = true, d = 4, h = 4);
            }
        }
    "#;
    let scene = parse(source).unwrap();
    assert_eq!(scene.resolution, 200);
    let expected = GeometryNode::cube(DVec3::new(42.0, 42.0, 4.0), true).unwrap()
        - GeometryNode::cylinder(4.0, 4.0, true)
            .unwrap()
            .translate(DVec3::new(20.0, -20.0, 0.0));
    assert_eq!(scene.root, expected);
}

#[test]
fn winder_assembly_roundtrips() {
    use winder_model::{filament_winder, ParameterSet};

    let scene = Scene::new(filament_winder(&ParameterSet::default()).unwrap());
    let text = print(&scene);
    let parsed = parse(&text).unwrap();
    assert_eq!(parsed, scene);
    assert_eq!(parsed.root.primitive_count(), 19);
    assert_eq!(print(&parsed), text);
}
