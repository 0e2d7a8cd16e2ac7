//! Scoreboard operations for `/scoreboard players operation`.
use ingot_utils::math::{floor_div, floor_mod};
use ingot_utils::translations;

use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;
use crate::command::error::CommandError;

/// An operation between a target score and a source score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreboardOperation {
    /// `=`
    Assign,
    /// `+=`
    Add,
    /// `-=`
    Subtract,
    /// `*=`
    Multiply,
    /// `/=`, rounding down.
    Divide,
    /// `%=`, with the sign of the divisor.
    Modulo,
    /// `<`
    Min,
    /// `>`
    Max,
    /// `><`
    Swap,
}

impl ScoreboardOperation {
    /// Applies the operation. Only [`Self::Swap`] changes `source`.
    pub fn apply(self, target: &mut i32, source: &mut i32) -> Result<(), CommandError> {
        match self {
            Self::Assign => *target = *source,
            Self::Add => *target = target.wrapping_add(*source),
            Self::Subtract => *target = target.wrapping_sub(*source),
            Self::Multiply => *target = target.wrapping_mul(*source),
            Self::Divide | Self::Modulo if *source == 0 => {
                return Err(CommandError::msg(translations::ARGUMENTS_OPERATION_DIV0));
            }
            Self::Divide if *source == -1 => *target = target.wrapping_neg(),
            Self::Divide => *target = floor_div(*target, *source),
            Self::Modulo if *source == -1 => *target = 0,
            Self::Modulo => *target = floor_mod(*target, *source),
            Self::Min => *target = (*target).min(*source),
            Self::Max => *target = (*target).max(*source),
            Self::Swap => std::mem::swap(target, source),
        }
        Ok(())
    }
}

/// Parses an operation symbol.
pub struct OperationArgument;

impl CommandArgument for OperationArgument {
    type Output = ScoreboardOperation;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let operation = match *arg.first()? {
            "=" => ScoreboardOperation::Assign,
            "+=" => ScoreboardOperation::Add,
            "-=" => ScoreboardOperation::Subtract,
            "*=" => ScoreboardOperation::Multiply,
            "/=" => ScoreboardOperation::Divide,
            "%=" => ScoreboardOperation::Modulo,
            "<" => ScoreboardOperation::Min,
            ">" => ScoreboardOperation::Max,
            "><" => ScoreboardOperation::Swap,
            _ => return None,
        };
        Some((&arg[1..], operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(operation: ScoreboardOperation, target: i32, source: i32) -> Option<(i32, i32)> {
        let (mut target, mut source) = (target, source);
        operation.apply(&mut target, &mut source).ok()?;
        Some((target, source))
    }

    #[test]
    fn arithmetic_wraps_and_floors() {
        assert_eq!(apply(ScoreboardOperation::Add, i32::MAX, 1), Some((i32::MIN, 1)));
        assert_eq!(apply(ScoreboardOperation::Divide, -7, 2), Some((-4, 2)));
        assert_eq!(apply(ScoreboardOperation::Modulo, -7, 3), Some((2, 3)));
        assert_eq!(apply(ScoreboardOperation::Divide, i32::MIN, -1), Some((i32::MIN, -1)));
        assert_eq!(apply(ScoreboardOperation::Min, 4, 9), Some((4, 9)));
        assert_eq!(apply(ScoreboardOperation::Max, 4, 9), Some((9, 9)));
        assert_eq!(apply(ScoreboardOperation::Swap, 4, 9), Some((9, 4)));
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(apply(ScoreboardOperation::Divide, 5, 0), None);
        assert_eq!(apply(ScoreboardOperation::Modulo, 5, 0), None);
    }
}
