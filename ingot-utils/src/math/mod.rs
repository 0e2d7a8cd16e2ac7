//! Vector and bounding box math.
pub mod aabb;
pub mod vector2;
pub mod vector3;

pub use aabb::Aabb;
pub use vector2::Vector2;
pub use vector3::Vector3;

/// Wraps an angle in degrees into `[-180, 180)`.
#[must_use]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let mut value = degrees % 360.0;
    if value >= 180.0 {
        value -= 360.0;
    }
    if value < -180.0 {
        value += 360.0;
    }
    value
}

/// Floor division that rounds towards negative infinity.
#[must_use]
pub const fn floor_div(a: i32, b: i32) -> i32 {
    let q = a / b;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Modulo whose result has the sign of the divisor.
#[must_use]
pub const fn floor_mod(a: i32, b: i32) -> i32 {
    let m = a % b;
    if m != 0 && ((m < 0) != (b < 0)) { m + b } else { m }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_degrees_stays_in_range() {
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(180.0), -180.0);
        assert_eq!(wrap_degrees(45.0), 45.0);
    }

    #[test]
    fn floor_division_rounds_down() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(7, -2), -4);
        assert_eq!(floor_mod(-7, 3), 2);
        assert_eq!(floor_mod(7, -3), -2);
        assert_eq!(floor_mod(6, 3), 0);
    }
}
