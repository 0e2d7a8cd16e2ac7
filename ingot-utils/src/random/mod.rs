//! Deterministic random number generation.
pub mod legacy_random;

pub use legacy_random::LegacyRandom;

/// A source of random numbers.
pub trait Random {
    /// Returns a random `i32`.
    fn next_i32(&mut self) -> i32;

    /// Returns a random `i32` in `[0, bound)`.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Returns a random `i64`.
    fn next_i64(&mut self) -> i64;

    /// Returns a random `f32` in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Returns a random `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a random `bool`.
    fn next_bool(&mut self) -> bool;

    /// Returns a random `f64` in `[min, max)`, or `min` if the range is empty.
    fn next_f64_between(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            min
        } else {
            self.next_f64() * (max - min) + min
        }
    }

    /// Returns a random `i32` in `[min, max]`.
    fn next_i32_between(&mut self, min: i32, max: i32) -> i32 {
        self.next_i32_bounded(max - min + 1) + min
    }
}
