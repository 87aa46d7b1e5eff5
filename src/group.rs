use crate::obstacle::Obstacle;
use smallvec::SmallVec;

/// An ordered set of obstacles whose intersections are considered together.
///
/// The group only borrows its obstacles, which are owned by the caller.
/// Small groups are stored inline.
#[derive(Clone, Default, Debug)]
pub struct ObstacleGroup<'a> {
    obstacles: SmallVec<[&'a dyn Obstacle; 8]>,
}

impl<'a> ObstacleGroup<'a> {
    /// Creates an empty group.
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends an obstacle to the end of the group.
    pub fn push(&mut self, obstacle: &'a dyn Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// The number of obstacles in the group.
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether the group has no obstacles.
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Returns an iterator over the obstacles, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &'a dyn Obstacle> + '_ {
        self.obstacles.iter().copied()
    }
}

impl<'a> FromIterator<&'a dyn Obstacle> for ObstacleGroup<'a> {
    fn from_iter<I: IntoIterator<Item = &'a dyn Obstacle>>(iter: I) -> Self {
        Self {
            obstacles: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<&'a dyn Obstacle> for ObstacleGroup<'a> {
    fn extend<I: IntoIterator<Item = &'a dyn Obstacle>>(&mut self, iter: I) {
        self.obstacles.extend(iter);
    }
}
