use super::{Point3d, Vector3d};
use cgmath::prelude::*;

/// The zero vector.
pub const ZERO: Vector3d = Vector3d {
    x: 0.0,
    y: 0.0,
    z: 0.0,
};

/// The side axis (+X) of a local coordinate system.
pub const SIDE: Vector3d = Vector3d {
    x: 1.0,
    y: 0.0,
    z: 0.0,
};

/// The up axis (+Y) of a local coordinate system.
pub const UP: Vector3d = Vector3d {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// The forward axis (+Z) of a local coordinate system.
pub const FORWARD: Vector3d = Vector3d {
    x: 0.0,
    y: 0.0,
    z: 1.0,
};

/// Projects a point onto a local coordinate system.
///
/// # Parameters
/// * `point` - The point to project
/// * `origin` - The origin of the coordinate system
/// * `x_axis` - The basis vector pointing in the positive x-axis.
/// * `y_axis` - The basis vector pointing in the positive y-axis.
/// * `z_axis` - The basis vector pointing in the positive z-axis.
pub fn project_local(
    point: Point3d,
    origin: Point3d,
    x_axis: Vector3d,
    y_axis: Vector3d,
    z_axis: Vector3d,
) -> Point3d {
    let point = point - origin;
    Point3d::new(point.dot(x_axis), point.dot(y_axis), point.dot(z_axis))
}

/// The component of `vec` parallel to `unit_basis`, which must be of unit length.
pub fn parallel_component(vec: Vector3d, unit_basis: Vector3d) -> Vector3d {
    unit_basis * vec.dot(unit_basis)
}

/// The component of `vec` perpendicular to `unit_basis`, which must be of unit length.
pub fn perpendicular_component(vec: Vector3d, unit_basis: Vector3d) -> Vector3d {
    vec - parallel_component(vec, unit_basis)
}

/// Normalises a vector, or returns the zero vector if it has no length.
pub fn normalize_or_zero(vec: Vector3d) -> Vector3d {
    let mag = vec.magnitude();
    if mag > 0.0 {
        vec / mag
    } else {
        ZERO
    }
}
