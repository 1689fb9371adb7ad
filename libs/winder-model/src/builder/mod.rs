//! # Geometry Builder
//!
//! Builds the filament winder assembly from a [`ParameterSet`].
//!
//! ## Assembly
//!
//! ```text
//! difference() {
//!     union() {
//!         spool base      (bushing plate with the spool cut-out)
//!         bridge          (block from the plate up to the motor)
//!         motor bracket   (L bracket with four screw holes)
//!         camera support  (L shaped bar pair)
//!         camera mount    (plate, two filament loops, two struts)
//!     }
//!     motor shaft bore
//! }
//! ```
//!
//! Every placement builds its own nodes; no sub-tree is shared.

use glam::DVec3;
use scad_geometry::{GeometryError, GeometryNode};
use tracing::debug;

use crate::error::BuildError;
use crate::params::ParameterSet;

/// Quarter turn about X, tipping a Z-up part onto its side.
const TILT_X: DVec3 = DVec3::new(90.0, 0.0, 0.0);

/// Quarter turn about Y, laying a Z-axis cylinder along X.
const TILT_Y: DVec3 = DVec3::new(0.0, 90.0, 0.0);

// =============================================================================
// ASSEMBLY
// =============================================================================

/// The five unioned parts plus the bore cut through them.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyParts {
    /// Bushing plate with the spool cut-out.
    pub spool_base: GeometryNode,
    /// Block joining the plate to the motor bracket.
    pub bridge: GeometryNode,
    /// Motor L bracket.
    pub motor_bracket: GeometryNode,
    /// Bars holding the camera mount.
    pub camera_mount_support: GeometryNode,
    /// Camera plate with filament guides.
    pub camera_mount: GeometryNode,
    /// Motor shaft clearance, subtracted from everything else.
    pub motor_shaft_bore: GeometryNode,
}

impl AssemblyParts {
    /// Build every part from a validated parameter set.
    pub fn build(params: &ParameterSet) -> Result<Self, BuildError> {
        params.validate()?;

        Ok(Self {
            spool_base: spool_base(params)?,
            bridge: spool_motor_bridge(params)?,
            motor_bracket: motor_bracket(params)?,
            camera_mount_support: camera_mount_support(params)?,
            camera_mount: camera_mount(params)?,
            motor_shaft_bore: motor_shaft_bore(params)?,
        })
    }

    /// Parts in assembly order, with their names.
    pub fn named(&self) -> [(&'static str, &GeometryNode); 6] {
        [
            ("spool_base", &self.spool_base),
            ("bridge", &self.bridge),
            ("motor_bracket", &self.motor_bracket),
            ("camera_mount_support", &self.camera_mount_support),
            ("camera_mount", &self.camera_mount),
            ("motor_shaft_bore", &self.motor_shaft_bore),
        ]
    }

    /// Union the parts and cut the shaft bore.
    pub fn assemble(self) -> GeometryNode {
        (self.spool_base
            + self.bridge
            + self.motor_bracket
            + self.camera_mount_support
            + self.camera_mount)
            - self.motor_shaft_bore
    }
}

/// Build the complete filament winder.
///
/// ## Example
///
/// ```rust
/// use scad_geometry::NodeKind;
/// use winder_model::{filament_winder, ParameterSet};
///
/// let winder = filament_winder(&ParameterSet::default()).unwrap();
/// assert_eq!(winder.kind(), NodeKind::Difference);
/// assert_eq!(winder.children()[0].children().len(), 5);
/// ```
pub fn filament_winder(params: &ParameterSet) -> Result<GeometryNode, BuildError> {
    let parts = AssemblyParts::build(params)?;
    let winder = parts.assemble();
    debug!(
        nodes = winder.node_count(),
        primitives = winder.primitive_count(),
        depth = winder.depth(),
        "assembled filament winder"
    );
    Ok(winder)
}

// =============================================================================
// MOTOR BRACKET
// =============================================================================

/// Motor mounting holes, one fresh cylinder per corner.
pub fn screw_holes(params: &ParameterSet) -> Result<Vec<GeometryNode>, GeometryError> {
    let (x, y) = (params.motor_screw_x, params.motor_screw_y);
    let corners = [(x, y), (-x, y), (-x, -y), (x, -y)];

    corners
        .into_iter()
        .map(|(cx, cy)| {
            let screw =
                GeometryNode::cylinder(params.screw_diameter, params.wall_thickness, true)?;
            Ok(screw.translate(DVec3::new(cx, cy, 0.0)))
        })
        .collect()
}

/// L bracket: a drilled lower plate plus an upright plate along its back
/// edge, stood up and lifted onto the bridge.
pub fn motor_bracket(params: &ParameterSet) -> Result<GeometryNode, GeometryError> {
    let wall = params.wall_thickness;
    let plate = DVec3::new(params.motor_width, params.motor_length, wall);

    let upper = GeometryNode::cube(plate, true)?.rotate(TILT_X).translate(DVec3::new(
        0.0,
        -params.motor_length / 2.0 + wall / 2.0,
        params.motor_width / 2.0,
    ));

    let lower = screw_holes(params)?
        .into_iter()
        .fold(GeometryNode::cube(plate, true)?, |drilled, hole| drilled - hole);

    let bracket = (upper + lower)
        .rotate(TILT_X)
        .translate(DVec3::new(0.0, -params.spool_base_height / 2.0 + wall / 2.0, 0.0))
        .translate(DVec3::new(0.0, 0.0, params.spool_diameter / 2.0))
        .up(params.motor_length / 2.0 - wall / 2.0)
        .translate(DVec3::new(0.0, params.motor_width / 2.0 - wall, 0.0));

    debug!(stage = "motor_bracket", primitives = bracket.primitive_count());
    Ok(bracket)
}

/// Cylinder cut through both bracket plates for the motor shaft.
pub fn motor_shaft_bore(params: &ParameterSet) -> Result<GeometryNode, GeometryError> {
    let bore = GeometryNode::cylinder(
        params.motor_shaft_diameter,
        2.0 * params.spool_base_height,
        true,
    )?
    .rotate(TILT_X)
    .translate(DVec3::new(
        0.0,
        0.0,
        params.spool_diameter / 2.0 + params.motor_length / 2.0,
    ));

    debug!(stage = "motor_shaft_bore", primitives = bore.primitive_count());
    Ok(bore)
}

// =============================================================================
// SPOOL BASE
// =============================================================================

/// Base plate with the spool's footprint subtracted, leaving a bushing.
pub fn spool_base(params: &ParameterSet) -> Result<GeometryNode, GeometryError> {
    let plate = GeometryNode::cube(
        DVec3::new(
            params.spool_base_width,
            params.spool_base_height,
            params.wall_thickness,
        ),
        true,
    )?
    .translate(DVec3::new(0.0, params.motor_length / 2.0, 0.0));

    let spool = GeometryNode::cylinder(params.spool_diameter, params.spool_base_height, true)?
        .rotate(TILT_X)
        .translate(DVec3::new(
            0.0,
            params.motor_length / 2.0,
            params.spool_diameter / 2.0,
        ));

    let base = plate - spool;
    debug!(stage = "spool_base", primitives = base.primitive_count());
    Ok(base)
}

/// Block rising from the front edge of the base plate to the motor.
pub fn spool_motor_bridge(params: &ParameterSet) -> Result<GeometryNode, GeometryError> {
    let bridge = GeometryNode::cube(
        DVec3::new(
            params.motor_width,
            params.motor_length,
            params.spool_diameter / 2.0,
        ),
        true,
    )?
    .translate(DVec3::new(
        0.0,
        0.0,
        params.spool_diameter / 4.0 - params.wall_thickness / 2.0,
    ))
    .translate(DVec3::new(0.0, -params.spool_base_height / 2.0, 0.0));

    debug!(stage = "bridge", primitives = bridge.primitive_count());
    Ok(bridge)
}

// =============================================================================
// CAMERA MOUNT
// =============================================================================

/// Filament guide: a tube along X with the filament channel removed.
fn filament_loop(params: &ParameterSet, x: f64) -> Result<GeometryNode, GeometryError> {
    let length = params.camera_mount_width / 3.0;
    let tube = GeometryNode::cylinder(params.wall_thickness, length, true)?
        - GeometryNode::cylinder(params.filament_max_diameter, length, true)?;

    Ok(tube
        .rotate(TILT_Y)
        .translate(DVec3::new(x, 0.0, params.camera_filament_offset)))
}

/// Post holding a filament loop above the camera plate.
fn strut(params: &ParameterSet, x: f64) -> Result<GeometryNode, GeometryError> {
    let post = GeometryNode::cylinder(
        params.wall_thickness,
        params.camera_filament_offset,
        true,
    )?;
    Ok(post.translate(DVec3::new(x, 0.0, params.camera_filament_offset / 2.0)))
}

/// Camera plate with two filament loops and the struts beside them.
pub fn camera_mount(params: &ParameterSet) -> Result<GeometryNode, GeometryError> {
    let wall = params.wall_thickness;
    let width = params.camera_mount_width;
    let loop_x = width / 3.0;
    let strut_x = width / 2.0 - wall / 2.0;

    let plate = GeometryNode::cube(DVec3::new(width, params.camera_mount_height, wall), true)?;
    let mount = plate
        + filament_loop(params, loop_x)?
        + filament_loop(params, -loop_x)?
        + strut(params, strut_x)?
        + strut(params, -strut_x)?;

    let mount = mount
        .translate(DVec3::new(params.camera_mount_x, params.camera_mount_y, 0.0))
        .translate(DVec3::new(width / 2.0, params.camera_mount_height / 2.0, 0.0))
        .translate(DVec3::new(
            0.0,
            -params.spool_base_height / 2.0 + params.motor_length / 2.0 - wall,
            0.0,
        ));

    debug!(stage = "camera_mount", primitives = mount.primitive_count());
    Ok(mount)
}

/// X and Y bars running from beside the motor out to the camera mount.
pub fn camera_mount_support(params: &ParameterSet) -> Result<GeometryNode, GeometryError> {
    let wall = params.wall_thickness;

    let x_bar = GeometryNode::cube(DVec3::new(params.camera_mount_x, wall, wall), true)?;
    let y_bar = GeometryNode::cube(DVec3::new(wall, params.camera_mount_y, wall), true)?
        .translate(DVec3::new(params.camera_mount_x / 2.0, 0.0, 0.0))
        .translate(DVec3::new(0.0, params.camera_mount_y / 2.0 - wall / 2.0, 0.0));

    let support = (x_bar + y_bar)
        .translate(DVec3::new(2.0 * params.motor_width, 0.0, 0.0))
        .translate(DVec3::new(
            0.0,
            -params.spool_base_height / 2.0 + params.motor_length / 2.0 - wall / 2.0,
            0.0,
        ));

    debug!(
        stage = "camera_mount_support",
        primitives = support.primitive_count()
    );
    Ok(support)
}
