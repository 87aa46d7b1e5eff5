use super::{first_path_intersection_with_obstacle_group, Obstacle, RectangleObstacle, SeenFrom};
use crate::group::ObstacleGroup;
use crate::intersection::PathIntersection;
use crate::math::{LocalSpace, Point3d};
use crate::vehicle::Vehicle;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular box, centred on the origin of its local space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxObstacle {
    /// The extent along the local X axis.
    width: f64,
    /// The extent along the local Y axis.
    height: f64,
    /// The extent along the local Z axis.
    depth: f64,
    space: LocalSpace,
    #[cfg_attr(feature = "serde", serde(default))]
    seen_from: SeenFrom,
}

impl BoxObstacle {
    /// Creates a solid box.
    ///
    /// # Panics
    /// If any of the dimensions are negative.
    pub fn new(width: f64, height: f64, depth: f64, space: LocalSpace) -> Self {
        assert!(
            width >= 0.0 && height >= 0.0 && depth >= 0.0,
            "Box dimensions must be non-negative"
        );
        Self {
            width,
            height,
            depth,
            space,
            seen_from: SeenFrom::Outside,
        }
    }

    /// Returns a copy of this box with the given [SeenFrom] policy.
    pub fn with_seen_from(self, seen_from: SeenFrom) -> Self {
        Self { seen_from, ..self }
    }

    /// The box's dimensions along its local X, Y and Z axes.
    pub fn dimensions(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    /// The box's local space.
    pub fn space(&self) -> &LocalSpace {
        &self.space
    }

    /// Moves the box.
    pub fn set_position(&mut self, position: Point3d) {
        self.space.set_position(position);
    }

    /// The six faces of the box, each facing outwards and sharing the box's [SeenFrom] policy.
    ///
    /// In order: front, back, the two sides, top, bottom.
    pub fn faces(&self) -> [RectangleObstacle; 6] {
        let (w, h, d) = (self.width, self.height, self.depth);
        let (s, u, f) = (self.space.side(), self.space.up(), self.space.forward());
        let p = self.space.position();

        // Offsets from the centre of the box to the centre of each face
        let hw = s * (0.5 * w);
        let hh = u * (0.5 * h);
        let hd = f * (0.5 * d);

        let seen_from = self.seen_from;
        let face = |width, height, space| {
            let face = RectangleObstacle::new(width, height, space);
            face.with_seen_from(seen_from)
        };
        [
            face(w, h, LocalSpace::new(s, u, f, p + hd)),
            face(w, h, LocalSpace::new(-s, u, -f, p - hd)),
            face(d, h, LocalSpace::new(-f, u, s, p + hw)),
            face(d, h, LocalSpace::new(f, u, -s, p - hw)),
            face(w, d, LocalSpace::new(s, -f, u, p + hh)),
            face(w, d, LocalSpace::new(-s, -f, -u, p - hh)),
        ]
    }
}

impl Obstacle for BoxObstacle {
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
        let faces = self.faces();
        let group: ObstacleGroup = faces.iter().map(|f| f as &dyn Obstacle).collect();
        first_path_intersection_with_obstacle_group(vehicle, &group)
            .map(|pi| pi.with_obstacle(self))
    }
}
