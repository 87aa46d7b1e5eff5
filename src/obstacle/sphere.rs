use super::{Obstacle, SeenFrom};
use crate::intersection::PathIntersection;
use crate::math::{normalize_or_zero, Point3d};
use crate::vehicle::Vehicle;
use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A spherical obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphericalObstacle {
    /// The radius of the sphere.
    radius: f64,
    /// The centre of the sphere in world space.
    center: Point3d,
    #[cfg_attr(feature = "serde", serde(default))]
    seen_from: SeenFrom,
}

impl SphericalObstacle {
    /// Creates a solid sphere.
    ///
    /// # Panics
    /// If the radius is negative.
    pub fn new(radius: f64, center: Point3d) -> Self {
        assert!(radius >= 0.0, "Sphere radius must be non-negative");
        Self {
            radius,
            center,
            seen_from: SeenFrom::Outside,
        }
    }

    /// Returns a copy of this sphere with the given [SeenFrom] policy.
    pub fn with_seen_from(self, seen_from: SeenFrom) -> Self {
        Self { seen_from, ..self }
    }

    /// The radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The centre of the sphere in world space.
    pub fn center(&self) -> Point3d {
        self.center
    }

    /// Moves the sphere.
    pub fn set_center(&mut self, center: Point3d) {
        self.center = center;
    }
}

impl Obstacle for SphericalObstacle {
    fn seen_from(&self) -> SeenFrom {
        self.seen_from
    }

    fn set_seen_from(&mut self, seen_from: SeenFrom) {
        self.seen_from = seen_from;
    }

    fn find_intersection_with_vehicle_path(
        &self,
        vehicle: &dyn Vehicle,
    ) -> Option<PathIntersection<'_>> {
        // The path is the vehicle's local Z axis; the sphere is grown by the
        // vehicle's radius so the vehicle can be treated as a point.
        let lc = vehicle.localize_position(self.center);
        let r = self.radius + vehicle.radius();
        let b = -2.0 * lc.z;
        let c = lc.to_vec().magnitude2() - r * r;
        let d = b * b - 4.0 * c;
        if d < 0.0 {
            return None;
        }

        // The path enters the sphere at `q` and leaves at `p`
        let s = d.sqrt();
        let p = 0.5 * (-b + s);
        let q = 0.5 * (-b - s);
        if p <= 0.0 {
            return None;
        }

        let distance = if q > 0.0 {
            q
        } else {
            // The vehicle is inside the sphere
            match self.seen_from {
                SeenFrom::Outside => 0.0,
                SeenFrom::Inside | SeenFrom::Both => p,
            }
        };

        let surface_point = vehicle.position() + vehicle.forward() * distance;
        let surface_normal = normalize_or_zero(surface_point - self.center);
        log::trace!(
            "Path meets sphere at {:?}, distance {}",
            surface_point,
            distance
        );

        Some(PathIntersection {
            distance,
            surface_point,
            surface_normal,
            steer_hint: surface_normal,
            obstacle: self,
        })
    }
}
