use super::{project_local, Point3d, Vector3d, FORWARD, SIDE, UP};
use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that a frame's axes are orthonormal.
const ORTHONORMAL_TOLERANCE: f64 = 1e-6;

/// A local coordinate system, described by three orthonormal axes and an origin.
///
/// Local +Z is "forward", +Y is "up" and +X is "side".
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalSpace {
    side: Vector3d,
    up: Vector3d,
    forward: Vector3d,
    position: Point3d,
}

impl LocalSpace {
    /// Creates a local space from explicit axes.
    ///
    /// The axes must be orthonormal; this is only checked in debug builds.
    pub fn new(side: Vector3d, up: Vector3d, forward: Vector3d, position: Point3d) -> Self {
        debug_assert!(
            is_orthonormal(side, up, forward),
            "Local space axes must be orthonormal"
        );
        Self {
            side,
            up,
            forward,
            position,
        }
    }

    /// The local space aligned with the world axes, positioned at the origin.
    pub fn identity() -> Self {
        Self::new(SIDE, UP, FORWARD, Point3d::origin())
    }

    /// Creates a local space facing along `forward`, regenerating the
    /// side and up axes so that the basis is orthonormal.
    ///
    /// The world up axis is used as a hint, unless `forward` is nearly
    /// vertical, in which case world forward is used instead.
    pub fn from_forward(forward: Vector3d, position: Point3d) -> Self {
        let forward = forward.normalize();
        let hint = if forward.dot(UP).abs() > 0.99 {
            FORWARD
        } else {
            UP
        };
        let side = hint.cross(forward).normalize();
        let up = forward.cross(side);
        Self::new(side, up, forward, position)
    }

    /// The side (+X) axis in world space.
    pub fn side(&self) -> Vector3d {
        self.side
    }

    /// The up (+Y) axis in world space.
    pub fn up(&self) -> Vector3d {
        self.up
    }

    /// The forward (+Z) axis in world space.
    pub fn forward(&self) -> Vector3d {
        self.forward
    }

    /// The origin of the local space in world space.
    pub fn position(&self) -> Point3d {
        self.position
    }

    /// Moves the origin of the local space.
    pub fn set_position(&mut self, position: Point3d) {
        self.position = position;
    }

    /// Transforms a world space point into this local space.
    pub fn localize_position(&self, point: Point3d) -> Point3d {
        project_local(point, self.position, self.side, self.up, self.forward)
    }

    /// Transforms a world space direction into this local space.
    pub fn localize_direction(&self, dir: Vector3d) -> Vector3d {
        Vector3d::new(dir.dot(self.side), dir.dot(self.up), dir.dot(self.forward))
    }

    /// Transforms a point in this local space into world space.
    pub fn globalize_position(&self, point: Point3d) -> Point3d {
        self.position + self.globalize_direction(point.to_vec())
    }

    /// Transforms a direction in this local space into world space.
    pub fn globalize_direction(&self, dir: Vector3d) -> Vector3d {
        self.side * dir.x + self.up * dir.y + self.forward * dir.z
    }
}

impl Default for LocalSpace {
    fn default() -> Self {
        Self::identity()
    }
}

fn is_orthonormal(side: Vector3d, up: Vector3d, forward: Vector3d) -> bool {
    let unit = |v: Vector3d| (v.magnitude2() - 1.0).abs() < ORTHONORMAL_TOLERANCE;
    let perp = |a: Vector3d, b: Vector3d| a.dot(b).abs() < ORTHONORMAL_TOLERANCE;
    unit(side)
        && unit(up)
        && unit(forward)
        && perp(side, up)
        && perp(up, forward)
        && perp(side, forward)
}
