//! Axis-aligned bounding boxes for geometry trees.
//!
//! Rotations follow OpenSCAD: Euler angles in degrees applied about X, then
//! Y, then Z. With glam's column vectors that is `Mz * My * Mx`.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Builds the rotation matrix for an OpenSCAD `rotate(a = [x, y, z])`.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use scad_geometry::rotation_matrix;
///
/// let m = rotation_matrix(DVec3::new(90.0, 0.0, 0.0));
/// let p = m.transform_point3(DVec3::new(0.0, 0.0, 1.0));
/// assert!((p.y + 1.0).abs() < 1e-12);
/// ```
pub fn rotation_matrix(angles: DVec3) -> DMat4 {
    DMat4::from_rotation_z(angles.z.to_radians())
        * DMat4::from_rotation_y(angles.y.to_radians())
        * DMat4::from_rotation_x(angles.x.to_radians())
}

/// Axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(DVec3::ZERO, DVec3::ZERO)
    }
}

impl BoundingBox {
    /// Creates a box from two corners in any order.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a box of `size` centred on `center`.
    pub fn from_center_size(center: DVec3, size: DVec3) -> Self {
        let half = size / 2.0;
        Self::new(center - half, center + half)
    }

    /// Extent along each axis.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Centre point.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) / 2.0
    }

    /// The eight corners of the box.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box shifted by `offset`.
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Axis-aligned box enclosing this box after rotation.
    pub fn rotated(&self, angles: DVec3) -> Self {
        let matrix = rotation_matrix(angles);
        self.transformed(matrix)
    }

    /// Axis-aligned box enclosing this box after an affine transform.
    pub fn transformed(&self, matrix: DMat4) -> Self {
        let corners = self.corners().map(|c| matrix.transform_point3(c));
        corners[1..]
            .iter()
            .fold(Self::new(corners[0], corners[0]), |acc, c| Self {
                min: acc.min.min(*c),
                max: acc.max.max(*c),
            })
    }

    /// Checks whether `point` lies inside or on the box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
