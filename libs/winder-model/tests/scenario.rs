use approx::assert_relative_eq;
use scad_geometry::NodeKind;
use winder_model::{filament_winder, BuildError, ParameterSet};

const CONFIGURATION: &str = include_str!("../../../configuration.toml");

#[test]
fn shipped_configuration_builds() {
    let params = ParameterSet::from_toml_str(CONFIGURATION).unwrap();
    assert_eq!(params, ParameterSet::default());

    let winder = filament_winder(&params).unwrap();
    assert_eq!(winder.kind(), NodeKind::Difference);
    // 2 spool base + 1 bridge + 6 bracket + 2 support + 7 camera + 1 bore
    assert_eq!(winder.primitive_count(), 19);
}

#[test]
fn assembly_bounds_match_reference_design() {
    let params = ParameterSet::default();
    let bounds = filament_winder(&params).unwrap().bounds();

    assert_relative_eq!(bounds.min.x, -params.spool_base_width / 2.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.x, 106.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.min.y, -173.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.y, 171.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.min.z, -2.0, epsilon = 1e-9);
    assert_relative_eq!(
        bounds.max.z,
        params.spool_diameter / 2.0 + params.motor_width - 2.0,
        epsilon = 1e-9
    );

    let size = bounds.size();
    assert!(size.x >= params.spool_base_width);
    assert_relative_eq!(
        size.y,
        params.spool_base_height + params.motor_length + 2.0,
        epsilon = 1e-9
    );
}

#[test]
fn larger_spool_raises_the_motor() {
    let small = filament_winder(&ParameterSet::default()).unwrap().bounds();
    let large = filament_winder(&ParameterSet {
        spool_diameter: 250.0,
        ..ParameterSet::default()
    })
    .unwrap()
    .bounds();
    assert_relative_eq!(large.max.z - small.max.z, 25.0, epsilon = 1e-9);
}

#[test]
fn invalid_set_reports_every_violation() {
    let params = ParameterSet {
        motor_screw_x: 30.0,
        wall_thickness: -4.0,
        motor_shaft_diameter: f64::NAN,
        ..ParameterSet::default()
    };
    let err = filament_winder(&params).unwrap_err();
    let BuildError::InvalidParameters(validation) = &err else {
        panic!("Expected InvalidParameters, got {:?}", err);
    };
    assert_eq!(validation.errors.len(), 3);
    let message = err.to_string();
    assert!(message.contains("wall_thickness"));
    assert!(message.contains("motor_screw_x"));
    assert!(message.contains("motor_shaft_diameter"));
}
