use super::*;

const REFERENCE_TOML: &str = r#"
spool_diameter = 200
screw_diameter = 4
motor_screw_x = 20
motor_screw_y = 20
spool_base_width = 150
spool_base_height = 300
camera_mount_height = 30
camera_mount_width = 60
camera_mount_x = 40
camera_mount_y = 40
camera_filament_offset = 20
filament_max_diameter = 3
motor_length = 42
motor_width = 42
motor_height = 42
motor_shaft_diameter = 5
spool_shaft_diameter = 8.0
wall_thickness = 4
"#;

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_integers_accepted_for_float_fields() {
    let params = ParameterSet::from_toml_str(REFERENCE_TOML).unwrap();
    assert_eq!(params, ParameterSet::default());
}

#[test]
fn test_missing_key_is_named() {
    let source = REFERENCE_TOML.replace("motor_width = 42\n", "");
    let err = ParameterSet::from_toml_str(&source).unwrap_err();
    assert!(err.to_string().contains("motor_width"), "{err}");
}

#[test]
fn test_unknown_key_is_rejected() {
    let source = format!("{REFERENCE_TOML}spool_colour = 1\n");
    let err = ParameterSet::from_toml_str(&source).unwrap_err();
    assert!(err.to_string().contains("spool_colour"), "{err}");
}

#[test]
fn test_load_missing_file_reports_path() {
    let path = std::env::temp_dir().join("winder-model-no-such-file.toml");
    match ParameterSet::load(&path) {
        Err(ConfigLoadError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_reads_file() {
    let path = std::env::temp_dir().join(format!(
        "winder-model-params-{}.toml",
        std::process::id()
    ));
    fs::write(&path, REFERENCE_TOML).unwrap();
    let loaded = ParameterSet::load(&path);
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded.unwrap(), ParameterSet::default());
}

#[test]
fn test_load_bad_toml_is_parse_error() {
    let path = std::env::temp_dir().join(format!(
        "winder-model-bad-{}.toml",
        std::process::id()
    ));
    fs::write(&path, "spool_diameter = = 3").unwrap();
    let loaded = ParameterSet::load(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(loaded, Err(ConfigLoadError::Parse { .. })));
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_reference_set_is_valid() {
    assert!(ParameterSet::default().validate().is_ok());
}

#[test]
fn test_every_bad_field_is_reported() {
    let params = ParameterSet {
        wall_thickness: 0.0,
        spool_diameter: -1.0,
        camera_mount_y: f64::NAN,
        ..ParameterSet::default()
    };
    let errors = params.validate().unwrap_err().errors;
    assert_eq!(errors.len(), 3);
    assert!(matches!(
        errors[0],
        ParameterError::NonPositive {
            field: "spool_diameter",
            ..
        }
    ));
    assert!(matches!(
        errors[1],
        ParameterError::NonFinite {
            field: "camera_mount_y",
            ..
        }
    ));
    assert!(matches!(
        errors[2],
        ParameterError::NonPositive {
            field: "wall_thickness",
            ..
        }
    ));
}

#[test]
fn test_infinite_value_rejected() {
    let params = ParameterSet {
        motor_height: f64::INFINITY,
        ..ParameterSet::default()
    };
    assert_eq!(
        params.validate().unwrap_err().errors,
        vec![ParameterError::NonFinite {
            field: "motor_height",
            value: f64::INFINITY
        }]
    );
}

#[test]
fn test_screw_outside_bracket() {
    let params = ParameterSet {
        motor_screw_x: 21.0,
        motor_screw_y: 30.0,
        ..ParameterSet::default()
    };
    let errors = params.validate().unwrap_err().errors;
    assert_eq!(
        errors,
        vec![
            ParameterError::ScrewOutsideBracket {
                field: "motor_screw_x",
                offset: 21.0,
                limit: 21.0
            },
            ParameterError::ScrewOutsideBracket {
                field: "motor_screw_y",
                offset: 30.0,
                limit: 21.0
            },
        ]
    );
}

#[test]
fn test_filament_loop_needs_a_wall() {
    let params = ParameterSet {
        filament_max_diameter: 4.0,
        ..ParameterSet::default()
    };
    assert_eq!(
        params.validate().unwrap_err().errors,
        vec![ParameterError::FilamentLoopClosed {
            filament: 4.0,
            wall: 4.0
        }]
    );
}

#[test]
fn test_shaft_wider_than_motor() {
    let params = ParameterSet {
        motor_shaft_diameter: 50.0,
        ..ParameterSet::default()
    };
    assert!(matches!(
        params.validate().unwrap_err().errors[..],
        [ParameterError::ShaftWiderThanMotor { .. }]
    ));
}

#[test]
fn test_relational_rules_skip_invalid_fields() {
    // Only the non-positive width is reported, not the screw or shaft rules.
    let params = ParameterSet {
        motor_width: -42.0,
        ..ParameterSet::default()
    };
    assert_eq!(params.validate().unwrap_err().errors.len(), 1);
}
