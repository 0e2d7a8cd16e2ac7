//! A three dimensional vector.
use std::ops::{Add, Mul, Sub};

/// A three dimensional vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Vector3<T> {
    /// The x component.
    pub x: T,
    /// The y component.
    pub y: T,
    /// The z component.
    pub z: T,
}

impl<T> Vector3<T> {
    /// Creates a new vector.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl Vector3<f64> {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Returns the squared euclidean length.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the squared distance to `other`.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).length_squared()
    }

    /// Floors every component.
    #[must_use]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Computes the yaw and pitch (in degrees) needed to look from `self` at `target`.
    #[must_use]
    pub fn look_at(self, target: Self) -> (f32, f32) {
        let delta = target - self;
        let horizontal = (delta.x * delta.x + delta.z * delta.z).sqrt();
        let pitch = -(delta.y.atan2(horizontal).to_degrees()) as f32;
        let yaw = (delta.z.atan2(delta.x).to_degrees() - 90.0) as f32;
        (super::wrap_degrees(yaw), super::wrap_degrees(pitch))
    }
}

impl<T: Add<Output = T>> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Sub<Output = T>> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_matches_cardinal_directions() {
        let origin = Vector3::new(0.0, 0.0, 0.0);
        // +z is south, which is yaw 0
        let (yaw, pitch) = origin.look_at(Vector3::new(0.0, 0.0, 5.0));
        assert!(yaw.abs() < 1e-4);
        assert!(pitch.abs() < 1e-4);

        let (yaw, _) = origin.look_at(Vector3::new(-5.0, 0.0, 0.0));
        assert!((yaw - 90.0).abs() < 1e-4);

        let (_, pitch) = origin.look_at(Vector3::new(0.0, 10.0, 0.0));
        assert!((pitch + 90.0).abs() < 1e-4);
    }
}
