pub use cgmath;
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use group::ObstacleGroup;
pub use intersection::PathIntersection;
pub use obstacle::{
    first_path_intersection_with_obstacle_group, steer_to_avoid_obstacles, BoxObstacle, Obstacle,
    RectangleObstacle, SeenFrom, SphericalObstacle,
};
pub use vehicle::{SimpleVehicle, Vehicle, VehicleAttributes};

mod debug;
mod group;
mod intersection;
pub mod math;
mod obstacle;
mod util;
mod vehicle;
