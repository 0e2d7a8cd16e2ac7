//! A team name argument.
use crate::command::arguments::{CommandArgument, is_unquoted_char};
use crate::command::context::CommandContext;

/// A team name. Existence is checked by the command.
pub struct TeamArgument;

impl CommandArgument for TeamArgument {
    type Output = String;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let name = *arg.first()?;
        name.chars()
            .all(is_unquoted_char)
            .then(|| (&arg[1..], name.to_string()))
    }
}
