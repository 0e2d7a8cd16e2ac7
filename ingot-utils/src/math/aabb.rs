//! Axis aligned bounding boxes.
use super::Vector3;

/// An axis aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// The minimum corner.
    pub min: Vector3<f64>,
    /// The maximum corner.
    pub max: Vector3<f64>,
}

impl Aabb {
    /// Creates a box from two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self {
            min: Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates the box of an entity standing at `feet`.
    #[must_use]
    pub fn at_feet(feet: Vector3<f64>, width: f64, height: f64) -> Self {
        let half = width / 2.0;
        Self {
            min: Vector3::new(feet.x - half, feet.y, feet.z - half),
            max: Vector3::new(feet.x + half, feet.y + height, feet.z + half),
        }
    }

    /// Returns true if both boxes overlap.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Returns true if the point lies inside the box.
    #[must_use]
    pub fn contains(&self, point: Vector3<f64>) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
            && point.z >= self.min.z
            && point.z < self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized() {
        let aabb = Aabb::from_corners(Vector3::new(5.0, 0.0, -1.0), Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(aabb.min, Vector3::new(1.0, 0.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(5.0, 3.0, 2.0));
        assert!(aabb.contains(Vector3::new(2.0, 1.0, 0.0)));
        assert!(!aabb.contains(Vector3::new(5.0, 1.0, 0.0)));
    }

    #[test]
    fn touching_boxes_do_not_intersect() {
        let a = Aabb::from_corners(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        let b = Aabb::from_corners(Vector3::new(1.0, 0.0, 0.0), Vector3::new(2.0, 1.0, 1.0));
        let c = Aabb::from_corners(Vector3::new(0.5, 0.5, 0.5), Vector3::new(2.0, 1.0, 1.0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }
}
