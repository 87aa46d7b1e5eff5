use super::{Obstacle, SeenFrom};
use crate::intersection::PathIntersection;
use crate::math::{normalize_or_zero, LocalSpace, Point3d};
use crate::util::Interval;
use crate::vehicle::Vehicle;
use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A flat rectangular panel.
///
/// The rectangle lies in the XY plane of its local space and is centred on
/// its origin. Its outside faces the local +Z axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RectangleObstacle {
    /// The extent along the local X axis.
    width: f64,
    /// The extent along the local Y axis.
    height: f64,
    space: LocalSpace,
    #[cfg_attr(feature = "serde", serde(default))]
    seen_from: SeenFrom,
}

impl RectangleObstacle {
    /// Creates a rectangle which is only seen from the outside.
    ///
    /// # Panics
    /// If the width or height is negative.
    pub fn new(width: f64, height: f64, space: LocalSpace) -> Self {
        assert!(
            width >= 0.0 && height >= 0.0,
            "Rectangle dimensions must be non-negative"
        );
        Self {
            width,
            height,
            space,
            seen_from: SeenFrom::Outside,
        }
    }

    /// Returns a copy of this rectangle with the given [SeenFrom] policy.
    pub fn with_seen_from(self, seen_from: SeenFrom) -> Self {
        Self { seen_from, ..self }
    }

    /// The extent along the local X axis.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The extent along the local Y axis.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The rectangle's local space.
    pub fn space(&self) -> &LocalSpace {
        &self.space
    }

    /// Moves the rectangle.
    pub fn set_position(&mut self, position: Point3d) {
        self.space.set_position(position);
    }
}

impl Obstacle for RectangleObstacle {
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
        let lp = self.space.localize_position(vehicle.position());
        let ld = self.space.localize_direction(vehicle.forward());

        // Parallel to the plane
        if ld.z == 0.0 {
            return None;
        }

        // Heading away from the plane
        if (lp.z > 0.0 && ld.z > 0.0) || (lp.z < 0.0 && ld.z < 0.0) {
            return None;
        }

        // Approaching from a side that isn't seen
        match self.seen_from {
            SeenFrom::Outside if lp.z < 0.0 => return None,
            SeenFrom::Inside if lp.z > 0.0 => return None,
            _ => {}
        }

        // Find where the path meets the plane
        let t = lp.z / ld.z;
        let hit = Point3d::new(lp.x - ld.x * t, lp.y - ld.y * t, 0.0);

        let r = vehicle.radius();
        let xs = Interval::disc(0.0, 0.5 * self.width + r);
        let ys = Interval::disc(0.0, 0.5 * self.height + r);
        if !xs.contains(hit.x) || !ys.contains(hit.y) {
            return None;
        }

        // Steer away from the face, and towards whichever edge is closer
        let side_sign = if lp.z > 0.0 { 1.0 } else { -1.0 };
        let opposing_normal = self.space.forward() * side_sign;
        let to_edge = self.space.globalize_direction(normalize_or_zero(hit.to_vec()));
        let distance = lp.distance(hit);
        let surface_point = self.space.globalize_position(hit);
        log::trace!(
            "Path meets rectangle at {:?}, distance {}",
            surface_point,
            distance
        );

        Some(PathIntersection {
            distance,
            surface_point,
            surface_normal: opposing_normal,
            steer_hint: opposing_normal + to_edge,
            obstacle: self,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Vector3d, FORWARD, SIDE, UP, ZERO};
    use crate::{SimpleVehicle, VehicleAttributes};
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    fn panel() -> RectangleObstacle {
        RectangleObstacle::new(10.0, 10.0, LocalSpace::identity())
    }

    fn vehicle(x: f64, z: f64, forward: Vector3d) -> SimpleVehicle {
        let mut veh = SimpleVehicle::new(&VehicleAttributes {
            radius: 0.0,
            max_force: 1.0,
        });
        veh.set_position(Point3d::new(x, 0.0, z));
        veh.set_forward(forward);
        veh.set_speed(1.0);
        veh
    }

    #[test]
    fn head_on() {
        let panel = panel();
        let veh = vehicle(0.0, 5.0, -FORWARD);
        let pi = panel.find_intersection_with_vehicle_path(&veh);
        let pi = pi.expect("expected an intersection");
        assert_approx_eq!(pi.distance, 5.0);
        assert_eq!(pi.surface_normal, FORWARD);
        assert_approx_eq!(pi.surface_point.z, 0.0);

        // Dead centre, so there's no way around
        assert_eq!(pi.steer_to_avoid_if_needed(&veh, 10.0), ZERO);
    }

    #[test]
    fn outside_panel() {
        let veh = vehicle(20.0, 5.0, -FORWARD);
        assert!(panel().find_intersection_with_vehicle_path(&veh).is_none());
    }

    #[test]
    fn vehicle_radius_widens_panel() {
        let mut veh = SimpleVehicle::new(&VehicleAttributes {
            radius: 1.0,
            max_force: 1.0,
        });
        veh.set_position(Point3d::new(5.5, 0.0, 5.0));
        veh.set_forward(-FORWARD);
        let panel = panel();
        assert!(panel.find_intersection_with_vehicle_path(&veh).is_some());
        let thin = vehicle(5.5, 5.0, -FORWARD);
        assert!(panel.find_intersection_with_vehicle_path(&thin).is_none());
    }

    #[test]
    fn parallel_to_panel() {
        let veh = vehicle(0.0, 5.0, SIDE);
        assert!(panel().find_intersection_with_vehicle_path(&veh).is_none());
    }

    #[test]
    fn heading_away() {
        let veh = vehicle(0.0, 5.0, FORWARD);
        assert!(panel().find_intersection_with_vehicle_path(&veh).is_none());
        let veh = vehicle(0.0, -5.0, -FORWARD);
        let both = panel().with_seen_from(SeenFrom::Both);
        assert!(both.find_intersection_with_vehicle_path(&veh).is_none());
    }

    #[test]
    fn path_away_from_panel() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Never look back at a flat panel!");
        let seen_from = [SeenFrom::Outside, SeenFrom::Inside, SeenFrom::Both];
        for _i in 0..100 {
            let panel = RectangleObstacle::new(
                rng.gen_range(0.0..20.0),
                rng.gen_range(0.0..20.0),
                LocalSpace::identity(),
            )
            .with_seen_from(seen_from[rng.gen_range(0..3usize)]);

            // Either in front of the panel heading forward, or behind it heading back
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let mut veh = vehicle(0.0, 0.0, FORWARD);
            veh.set_position(Point3d::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                sign * rng.gen_range(0.01..20.0),
            ));
            veh.set_forward(Vector3d::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                sign * rng.gen_range(0.01..1.0),
            ));
            assert!(panel.find_intersection_with_vehicle_path(&veh).is_none());
        }
    }

    #[test]
    fn seen_from_sides() {
        let fore = vehicle(0.0, 5.0, -FORWARD);
        let aft = vehicle(0.0, -5.0, FORWARD);

        let solid = panel();
        assert!(solid.find_intersection_with_vehicle_path(&fore).is_some());
        assert!(solid.find_intersection_with_vehicle_path(&aft).is_none());

        let hollow = panel().with_seen_from(SeenFrom::Inside);
        assert!(hollow.find_intersection_with_vehicle_path(&fore).is_none());
        let pi = hollow.find_intersection_with_vehicle_path(&aft);
        assert_eq!(pi.map(|pi| pi.surface_normal), Some(-FORWARD));

        let mut both = panel();
        both.set_seen_from(SeenFrom::Both);
        assert!(both.find_intersection_with_vehicle_path(&fore).is_some());
        assert!(both.find_intersection_with_vehicle_path(&aft).is_some());
    }

    #[test]
    fn oblique_hit_steers_towards_edge() {
        let panel = panel();
        let veh = vehicle(-1.0, 5.0, Vector3d::new(1.0, 0.0, -1.0));
        let pi = panel.find_intersection_with_vehicle_path(&veh);
        let pi = pi.expect("expected an intersection");
        assert_approx_eq!(pi.distance, 50.0f64.sqrt());
        assert_approx_eq!(pi.surface_point.x, 4.0);
        assert_approx_eq!(pi.steer_hint.x, 1.0);
        assert_approx_eq!(pi.steer_hint.z, 1.0);

        let steer = pi.steer_to_avoid_if_needed(&veh, 10.0);
        assert_approx_eq!(steer.magnitude(), 1.0);
        assert_approx_eq!(steer.dot(veh.forward()), 0.0);
        assert!(steer.x > 0.0);
    }

    #[test]
    fn rotated_panel() {
        let space = LocalSpace::from_forward(SIDE, Point3d::new(10.0, 0.0, 0.0));
        let panel = RectangleObstacle::new(4.0, 4.0, space);
        let mut veh = vehicle(20.0, 1.0, -SIDE);
        veh.set_position(Point3d::new(20.0, 1.0, 1.0));

        let pi = panel.find_intersection_with_vehicle_path(&veh);
        let pi = pi.expect("expected an intersection");
        assert_approx_eq!(pi.distance, 10.0);
        assert_approx_eq!(pi.surface_point.x, 10.0);
        assert_approx_eq!(pi.surface_point.y, 1.0);
        assert_approx_eq!(pi.surface_point.z, 1.0);
        assert_approx_eq!(pi.surface_normal.x, 1.0);
        assert_approx_eq!(pi.steer_hint.dot(UP), 0.5f64.sqrt());
    }

    #[test]
    fn repeatable() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Flat panels are flat, like Perth");
        let panel = panel().with_seen_from(SeenFrom::Both);
        for _i in 0..100 {
            let veh = vehicle(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                Vector3d::new(rng.gen_range(-1.0..1.0), 0.0, rng.gen_range(-1.0..1.0)),
            );
            let a = panel.find_intersection_with_vehicle_path(&veh);
            let b = panel.find_intersection_with_vehicle_path(&veh);
            assert_eq!(a.is_some(), b.is_some());
            if let (Some(a), Some(b)) = (a, b) {
                assert!(a.distance >= 0.0);
                assert_eq!(a.distance.to_bits(), b.distance.to_bits());
                assert_eq!(a.surface_point, b.surface_point);
                assert_eq!(a.steer_hint, b.steer_hint);
            }
        }
    }
}
