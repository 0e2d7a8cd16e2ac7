//! Bounded numeric arguments.
use std::str::FromStr;

use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;

/// A number within an inclusive range.
pub struct NumberArgument<T> {
    min: T,
    max: T,
}

/// An `i32` argument.
pub type IntegerArgument = NumberArgument<i32>;
/// An `f32` argument.
pub type FloatArgument = NumberArgument<f32>;
/// An `f64` argument.
pub type DoubleArgument = NumberArgument<f64>;

impl<T> NumberArgument<T> {
    /// Accepts values in `min..=max`.
    pub const fn bounded(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl IntegerArgument {
    /// Accepts any `i32`.
    #[must_use]
    pub const fn any() -> Self {
        Self::bounded(i32::MIN, i32::MAX)
    }

    /// Accepts values of at least `min`.
    #[must_use]
    pub const fn at_least(min: i32) -> Self {
        Self::bounded(min, i32::MAX)
    }
}

impl FloatArgument {
    /// Accepts any finite `f32`.
    #[must_use]
    pub const fn any() -> Self {
        Self::bounded(f32::MIN, f32::MAX)
    }

    /// Accepts values of at least `min`.
    #[must_use]
    pub const fn at_least(min: f32) -> Self {
        Self::bounded(min, f32::MAX)
    }
}

impl DoubleArgument {
    /// Accepts any finite `f64`.
    #[must_use]
    pub const fn any() -> Self {
        Self::bounded(f64::MIN, f64::MAX)
    }

    /// Accepts values of at least `min`.
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self::bounded(min, f64::MAX)
    }
}

impl<T> CommandArgument for NumberArgument<T>
where
    T: FromStr + PartialOrd + Copy + Send + Sync,
{
    type Output = T;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let value = arg.first()?.parse::<T>().ok()?;
        (value >= self.min && value <= self.max).then(|| (&arg[1..], value))
    }
}
