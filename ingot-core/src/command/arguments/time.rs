//! A duration in ticks with an optional `d`, `s` or `t` suffix.
use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;
use crate::world::level_data::TICKS_PER_DAY;

/// A duration in ticks, at least `min`.
pub struct TimeArgument {
    min: i32,
}

impl TimeArgument {
    /// Accepts durations of at least `min` ticks.
    #[must_use]
    pub const fn at_least(min: i32) -> Self {
        Self { min }
    }

    /// Parses `1.5d`, `20s`, `100t` or `100` into ticks.
    #[must_use]
    pub fn parse_ticks(token: &str) -> Option<i32> {
        let (number, scale) = match token.char_indices().last()? {
            (i, 'd') => (&token[..i], TICKS_PER_DAY as f64),
            (i, 's') => (&token[..i], 20.0),
            (i, 't') => (&token[..i], 1.0),
            _ => (token, 1.0),
        };
        let value = number.parse::<f64>().ok()?;
        let ticks = (value * scale).round();
        (ticks.is_finite() && ticks >= f64::from(i32::MIN) && ticks <= f64::from(i32::MAX))
            .then_some(ticks as i32)
    }
}

impl CommandArgument for TimeArgument {
    type Output = i32;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let ticks = Self::parse_ticks(arg.first()?)?;
        (ticks >= self.min).then(|| (&arg[1..], ticks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_scale_ticks() {
        assert_eq!(TimeArgument::parse_ticks("100"), Some(100));
        assert_eq!(TimeArgument::parse_ticks("5t"), Some(5));
        assert_eq!(TimeArgument::parse_ticks("2s"), Some(40));
        assert_eq!(TimeArgument::parse_ticks("0.5d"), Some(12000));
        assert_eq!(TimeArgument::parse_ticks("1.26s"), Some(25));
        assert_eq!(TimeArgument::parse_ticks("d"), None);
        assert_eq!(TimeArgument::parse_ticks("abc"), None);
    }
}
