//! # Geometry Node
//!
//! Immutable geometry description tree.
//!
//! All values are concrete numbers: a node records exactly what will be
//! written to the scene file, nothing is evaluated later.

use std::ops::{Add, Sub};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::error::GeometryError;

// =============================================================================
// GEOMETRY NODE
// =============================================================================

/// A node in the geometry tree.
///
/// Primitives are leaves; transforms wrap exactly one child; booleans own
/// an ordered list of children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeometryNode {
    // =========================================================================
    // PRIMITIVES
    // =========================================================================
    /// Rectangular prism.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube(size = [x, y, z], center = true);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: DVec3,
        /// Whether centered at origin.
        center: bool,
    },

    /// Right circular cylinder along Z.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h = 4, d = 4, center = true);
    /// ```
    Cylinder {
        /// Diameter.
        diameter: f64,
        /// Height along Z.
        height: f64,
        /// Whether centered on Z.
        center: bool,
    },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================
    /// Translation transform.
    Translate {
        /// Translation vector [x, y, z].
        offset: DVec3,
        /// Child geometry.
        child: Box<GeometryNode>,
    },

    /// Rotation transform.
    Rotate {
        /// Rotation angles [x, y, z] in degrees, applied X then Y then Z.
        angles: DVec3,
        /// Child geometry.
        child: Box<GeometryNode>,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================
    /// Union of children.
    Union {
        /// Child geometries.
        children: Vec<GeometryNode>,
    },

    /// Difference (first child minus rest).
    Difference {
        /// Child geometries.
        children: Vec<GeometryNode>,
    },
}

/// Discriminant of a [`GeometryNode`], used for structural comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `cube`
    Cube,
    /// `cylinder`
    Cylinder,
    /// `translate`
    Translate,
    /// `rotate`
    Rotate,
    /// `union`
    Union,
    /// `difference`
    Difference,
}

impl NodeKind {
    /// OpenSCAD module name for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Cylinder => "cylinder",
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Union => "union",
            Self::Difference => "difference",
        }
    }
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

impl GeometryNode {
    /// Constructs a cube, validating every side is positive and finite.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use scad_geometry::GeometryNode;
    ///
    /// assert!(GeometryNode::cube(DVec3::new(1.0, 2.0, 3.0), true).is_ok());
    /// assert!(GeometryNode::cube(DVec3::new(1.0, 0.0, 3.0), true).is_err());
    /// ```
    pub fn cube(size: DVec3, center: bool) -> Result<Self, GeometryError> {
        GeometryError::check("cube", "size.x", size.x)?;
        GeometryError::check("cube", "size.y", size.y)?;
        GeometryError::check("cube", "size.z", size.z)?;
        Ok(Self::Cube { size, center })
    }

    /// Constructs a cylinder from its diameter and height.
    pub fn cylinder(diameter: f64, height: f64, center: bool) -> Result<Self, GeometryError> {
        GeometryError::check("cylinder", "diameter", diameter)?;
        GeometryError::check("cylinder", "height", height)?;
        Ok(Self::Cylinder {
            diameter,
            height,
            center,
        })
    }

    /// Wraps this node in a translation.
    pub fn translate(self, offset: DVec3) -> Self {
        Self::Translate {
            offset,
            child: Box::new(self),
        }
    }

    /// Translates along Z only.
    pub fn up(self, z: f64) -> Self {
        self.translate(DVec3::new(0.0, 0.0, z))
    }

    /// Wraps this node in a rotation (degrees, X then Y then Z).
    pub fn rotate(self, angles: DVec3) -> Self {
        Self::Rotate {
            angles,
            child: Box::new(self),
        }
    }

    /// Unions `other` onto this node.
    ///
    /// When `self` is already a union the operand is appended to it, so
    /// `a.union(b).union(c)` yields one three-child union.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use scad_geometry::GeometryNode;
    ///
    /// let cube = || GeometryNode::cube(DVec3::splat(1.0), true).unwrap();
    /// let all = cube().union(cube()).union(cube());
    /// assert_eq!(all.children().len(), 3);
    /// ```
    pub fn union(self, other: GeometryNode) -> Self {
        match self {
            Self::Union { mut children } => {
                children.push(other);
                Self::Union { children }
            }
            lhs => Self::Union {
                children: vec![lhs, other],
            },
        }
    }

    /// Subtracts `other` from this node, appending to an existing difference.
    pub fn difference(self, other: GeometryNode) -> Self {
        match self {
            Self::Difference { mut children } => {
                children.push(other);
                Self::Difference { children }
            }
            lhs => Self::Difference {
                children: vec![lhs, other],
            },
        }
    }
}

impl Add for GeometryNode {
    type Output = GeometryNode;

    fn add(self, rhs: GeometryNode) -> GeometryNode {
        self.union(rhs)
    }
}

impl Sub for GeometryNode {
    type Output = GeometryNode;

    fn sub(self, rhs: GeometryNode) -> GeometryNode {
        self.difference(rhs)
    }
}

// =============================================================================
// INSPECTION
// =============================================================================

impl GeometryNode {
    /// Returns the node discriminant.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Cube { .. } => NodeKind::Cube,
            Self::Cylinder { .. } => NodeKind::Cylinder,
            Self::Translate { .. } => NodeKind::Translate,
            Self::Rotate { .. } => NodeKind::Rotate,
            Self::Union { .. } => NodeKind::Union,
            Self::Difference { .. } => NodeKind::Difference,
        }
    }

    /// Check if this is a primitive (leaf) node.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Cube { .. } | Self::Cylinder { .. })
    }

    /// Check if this is a boolean node.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Union { .. } | Self::Difference { .. })
    }

    /// Children of a boolean node; empty for every other kind.
    pub fn children(&self) -> &[GeometryNode] {
        match self {
            Self::Union { children } | Self::Difference { children } => children,
            _ => &[],
        }
    }

    /// Child of a transform node.
    pub fn child(&self) -> Option<&GeometryNode> {
        match self {
            Self::Translate { child, .. } | Self::Rotate { child, .. } => Some(child),
            _ => None,
        }
    }

    /// Total number of nodes in the tree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.child().map_or(0, Self::node_count)
            + self.children().iter().map(Self::node_count).sum::<usize>()
    }

    /// Number of primitive leaves.
    pub fn primitive_count(&self) -> usize {
        if self.is_primitive() {
            return 1;
        }
        self.child().map_or(0, Self::primitive_count)
            + self
                .children()
                .iter()
                .map(Self::primitive_count)
                .sum::<usize>()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let below = match self {
            Self::Translate { child, .. } | Self::Rotate { child, .. } => child.depth(),
            Self::Union { children } | Self::Difference { children } => {
                children.iter().map(Self::depth).max().unwrap_or(0)
            }
            _ => 0,
        };
        1 + below
    }

    /// Axis-aligned bounds of the solid this node describes.
    ///
    /// Differences report the bounds of their first child, which is the
    /// tightest box available without evaluating the boolean.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Self::Cube { size, center } => {
                if *center {
                    BoundingBox::from_center_size(DVec3::ZERO, *size)
                } else {
                    BoundingBox::new(DVec3::ZERO, *size)
                }
            }
            Self::Cylinder {
                diameter,
                height,
                center,
            } => {
                let radius = diameter / 2.0;
                let (z_min, z_max) = if *center {
                    (-height / 2.0, height / 2.0)
                } else {
                    (0.0, *height)
                };
                BoundingBox::new(
                    DVec3::new(-radius, -radius, z_min),
                    DVec3::new(radius, radius, z_max),
                )
            }
            Self::Translate { offset, child } => child.bounds().translated(*offset),
            Self::Rotate { angles, child } => child.bounds().rotated(*angles),
            Self::Union { children } => children
                .iter()
                .map(Self::bounds)
                .reduce(|a, b| a.union(&b))
                .unwrap_or_default(),
            Self::Difference { children } => {
                children.first().map(Self::bounds).unwrap_or_default()
            }
        }
    }
}
