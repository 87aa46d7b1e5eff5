use crate::debug::{debug_line, debug_point};
use crate::math::{perpendicular_component, Point3d, Vector3d, ZERO};
use crate::obstacle::Obstacle;
use crate::vehicle::Vehicle;
use cgmath::prelude::*;

/// Lateral components shorter than this have no usable direction.
const MIN_LATERAL: f64 = 1e-12;

/// The point at which a vehicle's path first meets an obstacle.
///
/// Produced by [Obstacle::find_intersection_with_vehicle_path] and only
/// valid for as long as the obstacle it borrows.
#[derive(Clone, Copy, Debug)]
pub struct PathIntersection<'a> {
    /// The distance along the vehicle's path to the intersection, never negative.
    pub distance: f64,
    /// The point of intersection in world space.
    pub surface_point: Point3d,
    /// The obstacle's normal at the point of intersection, facing the vehicle.
    pub surface_normal: Vector3d,
    /// The direction the vehicle should steer towards to avoid the obstacle.
    pub steer_hint: Vector3d,
    /// The obstacle that was hit.
    pub obstacle: &'a dyn Obstacle,
}

impl<'a> PathIntersection<'a> {
    /// Returns a copy of this intersection attributed to a different obstacle.
    pub fn with_obstacle<'b>(&self, obstacle: &'b dyn Obstacle) -> PathIntersection<'b> {
        PathIntersection {
            distance: self.distance,
            surface_point: self.surface_point,
            surface_normal: self.surface_normal,
            steer_hint: self.steer_hint,
            obstacle,
        }
    }

    /// Computes the steering force needed to avoid this intersection.
    ///
    /// If the vehicle would reach the intersection within `min_time_to_collision`
    /// at its current speed, returns the component of the steer hint that is
    /// perpendicular to the vehicle's heading, scaled to the vehicle's maximum force.
    /// Otherwise, or if the steer hint is parallel to the heading, returns zero.
    pub fn steer_to_avoid_if_needed(
        &self,
        vehicle: &dyn Vehicle,
        min_time_to_collision: f64,
    ) -> Vector3d {
        let min_distance = min_time_to_collision * vehicle.speed();
        if self.distance >= min_distance {
            return ZERO;
        }

        let lateral = perpendicular_component(self.steer_hint, vehicle.forward());
        let mag = lateral.magnitude();
        if mag < MIN_LATERAL {
            log::debug!(
                "Steer hint {:?} is parallel to heading, no avoidance applied",
                self.steer_hint
            );
            return ZERO;
        }

        let normal_tip = self.surface_point + self.surface_normal;
        debug_point("collision", self.surface_point);
        debug_line("normal", self.surface_point, normal_tip);
        lateral * (vehicle.max_force() / mag)
    }
}
