use crate::group::ObstacleGroup;
use crate::intersection::PathIntersection;
use crate::math::{Vector3d, ZERO};
use crate::vehicle::Vehicle;
pub use cuboid::BoxObstacle;
pub use rectangle::RectangleObstacle;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
pub use sphere::SphericalObstacle;
use std::fmt::Debug;

mod cuboid;
mod rectangle;
mod sphere;

/// Which side of an obstacle's surface blocks a vehicle's path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeenFrom {
    /// Only the exterior surface, as for a solid object.
    #[default]
    Outside,
    /// Only the interior surface, as for a hollow enclosure.
    Inside,
    /// Either surface, as for a thin double-sided panel.
    Both,
}

/// An object that can block a vehicle's path.
pub trait Obstacle: Debug {
    /// Which side of the obstacle's surface registers a collision.
    fn seen_from(&self) -> SeenFrom;

    /// Sets which side of the obstacle's surface registers a collision.
    fn set_seen_from(&mut self, seen_from: SeenFrom);

    /// Finds the nearest point, if any, at which the vehicle's forward path
    /// meets this obstacle.
    fn find_intersection_with_vehicle_path(
        &self,
        vehicle: &dyn Vehicle,
    ) -> Option<PathIntersection<'_>>;

    /// Computes the steering force needed for the vehicle to avoid this obstacle,
    /// or zero if there's no collision within `min_time_to_collision`.
    fn steer_to_avoid(&self, vehicle: &dyn Vehicle, min_time_to_collision: f64) -> Vector3d {
        self.find_intersection_with_vehicle_path(vehicle)
            .map_or(ZERO, |pi| {
                pi.steer_to_avoid_if_needed(vehicle, min_time_to_collision)
            })
    }
}

/// Computes the steering force needed for the vehicle to avoid the nearest
/// obstacle on its path, or zero if there's no collision within `min_time_to_collision`.
pub fn steer_to_avoid_obstacles(
    vehicle: &dyn Vehicle,
    min_time_to_collision: f64,
    obstacles: &ObstacleGroup,
) -> Vector3d {
    first_path_intersection_with_obstacle_group(vehicle, obstacles)
        .map_or(ZERO, |pi| {
            pi.steer_to_avoid_if_needed(vehicle, min_time_to_collision)
        })
}

/// Tests every obstacle in the group against the vehicle's path
/// and returns the nearest intersection.
///
/// When two intersections are equally near, the one belonging to the obstacle
/// that comes first in the group is returned.
pub fn first_path_intersection_with_obstacle_group<'a>(
    vehicle: &dyn Vehicle,
    obstacles: &ObstacleGroup<'a>,
) -> Option<PathIntersection<'a>> {
    let mut nearest: Option<PathIntersection<'a>> = None;
    for obstacle in obstacles.iter() {
        let next = obstacle.find_intersection_with_vehicle_path(vehicle);
        let replace = match (&nearest, &next) {
            (None, _) => true,
            (Some(nearest), Some(next)) => next.distance < nearest.distance,
            (Some(_), None) => false,
        };
        if replace {
            if let Some(pi) = &next {
                log::trace!("Nearer obstacle {:?} at {}", pi.obstacle, pi.distance);
            }
            nearest = next;
        }
    }
    nearest
}
