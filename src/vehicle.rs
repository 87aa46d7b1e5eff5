use crate::math::{LocalSpace, Point3d, Vector3d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The read-only view of a vehicle needed to test its path against obstacles.
///
/// The vehicle's path is the ray from `position` along `forward`, which is
/// the +Z axis of the vehicle's local space.
pub trait Vehicle {
    /// The coordinates in world space of the centre of the vehicle.
    fn position(&self) -> Point3d;

    /// A unit vector in world space aligned with the vehicle's heading.
    fn forward(&self) -> Vector3d;

    /// The vehicle's speed, a non-negative number.
    fn speed(&self) -> f64;

    /// The radius of the vehicle's bounding sphere.
    fn radius(&self) -> f64;

    /// The magnitude of the largest steering force the vehicle can apply.
    fn max_force(&self) -> f64;

    /// Transforms a world space point into the vehicle's local space.
    fn localize_position(&self, point: Point3d) -> Point3d;
}

/// A vehicle with a position, heading and speed.
#[derive(Clone, Debug)]
pub struct SimpleVehicle {
    /// The vehicle's local coordinate system.
    space: LocalSpace,
    /// The speed along the forward axis.
    speed: f64,
    /// The radius of the bounding sphere.
    radius: f64,
    /// The maximum steering force.
    max_force: f64,
}

/// The attributes of a simulated vehicle.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VehicleAttributes {
    /// The radius of the vehicle's bounding sphere.
    pub radius: f64,
    /// The magnitude of the largest steering force the vehicle can apply.
    pub max_force: f64,
}

impl SimpleVehicle {
    /// Creates a new vehicle at rest at the origin, facing +Z.
    ///
    /// # Panics
    /// If the radius or maximum force is negative.
    pub fn new(attributes: &VehicleAttributes) -> Self {
        assert!(
            attributes.radius >= 0.0,
            "Vehicle radius must be non-negative"
        );
        assert!(
            attributes.max_force >= 0.0,
            "Vehicle maximum force must be non-negative"
        );
        Self {
            space: LocalSpace::identity(),
            speed: 0.0,
            radius: attributes.radius,
            max_force: attributes.max_force,
        }
    }

    /// The vehicle's local coordinate system.
    pub fn space(&self) -> &LocalSpace {
        &self.space
    }

    /// The vehicle's velocity in world space.
    pub fn velocity(&self) -> Vector3d {
        self.space.forward() * self.speed
    }

    /// Moves the vehicle.
    pub fn set_position(&mut self, position: Point3d) {
        self.space.set_position(position);
    }

    /// Turns the vehicle to face along `forward`, which needn't be normalised.
    pub fn set_forward(&mut self, forward: Vector3d) {
        self.space = LocalSpace::from_forward(forward, self.space.position());
    }

    /// Sets the vehicle's speed.
    pub fn set_speed(&mut self, speed: f64) {
        debug_assert!(speed >= 0.0, "Vehicle speed must be non-negative");
        self.speed = speed;
    }
}

impl Vehicle for SimpleVehicle {
    fn position(&self) -> Point3d {
        self.space.position()
    }

    fn forward(&self) -> Vector3d {
        self.space.forward()
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn max_force(&self) -> f64 {
        self.max_force
    }

    fn localize_position(&self, point: Point3d) -> Point3d {
        self.space.localize_position(point)
    }
}
