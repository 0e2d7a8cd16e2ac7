//! Ranges such as `1..5`, `..3` or `7`.
use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;

/// An inclusive integer range with optional ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    /// The lower bound.
    pub min: Option<i32>,
    /// The upper bound.
    pub max: Option<i32>,
}

impl IntRange {
    /// Parses `a`, `a..`, `..b` or `a..b`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (min, max) = split_range(s, |part| part.parse::<i32>().ok())?;
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return None;
        }
        Some(Self { min, max })
    }

    /// Whether `value` lies inside the range.
    #[must_use]
    pub fn matches(self, value: i32) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// An inclusive floating point range with optional ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    /// The lower bound.
    pub min: Option<f64>,
    /// The upper bound.
    pub max: Option<f64>,
}

impl FloatRange {
    /// Parses `a`, `a..`, `..b` or `a..b`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (min, max) = split_range(s, |part| {
            part.parse::<f64>().ok().filter(|value| value.is_finite())
        })?;
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return None;
        }
        Some(Self { min, max })
    }

    /// Whether `value` lies inside the range.
    #[must_use]
    pub fn matches(self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// Whether the square root of `squared` lies inside the range; both ends must be non-negative.
    #[must_use]
    pub fn matches_squared(self, squared: f64) -> bool {
        self.min.is_none_or(|min| squared >= min * min)
            && self.max.is_none_or(|max| squared <= max * max)
    }
}

type Bounds<T> = (Option<T>, Option<T>);

fn split_range<T: Copy>(s: &str, parse: impl Fn(&str) -> Option<T>) -> Option<Bounds<T>> {
    let Some((min, max)) = s.split_once("..") else {
        let value = parse(s)?;
        return Some((Some(value), Some(value)));
    };
    if min.is_empty() && max.is_empty() {
        return None;
    }
    let min = if min.is_empty() { None } else { Some(parse(min)?) };
    let max = if max.is_empty() { None } else { Some(parse(max)?) };
    Some((min, max))
}

/// Parses an [`IntRange`].
pub struct IntRangeArgument;

impl CommandArgument for IntRangeArgument {
    type Output = IntRange;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let range = IntRange::parse(arg.first()?)?;
        Some((&arg[1..], range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_ranges() {
        assert_eq!(
            IntRange::parse("3"),
            Some(IntRange {
                min: Some(3),
                max: Some(3)
            })
        );
        let open = IntRange::parse("..-2").expect("valid range");
        assert!(open.matches(-5));
        assert!(!open.matches(-1));
        assert!(IntRange::parse("1..").expect("valid range").matches(i32::MAX));
        assert_eq!(IntRange::parse(".."), None);
        assert_eq!(IntRange::parse("5..1"), None);
        assert_eq!(IntRange::parse("a..b"), None);
    }

    #[test]
    fn float_ranges() {
        let range = FloatRange::parse("..2.5").expect("valid range");
        assert!(range.matches(2.5));
        assert!(range.matches_squared(6.25));
        assert!(!range.matches_squared(6.26));
        assert!(FloatRange::parse("1.5..0.5").is_none());
    }
}
