//! A difficulty argument.
use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;
use crate::difficulty::Difficulty;

/// A difficulty argument.
pub struct DifficultyArgument;

impl CommandArgument for DifficultyArgument {
    type Output = Difficulty;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let difficulty = Difficulty::parse(arg.first()?)?;
        Some((&arg[1..], difficulty))
    }
}
