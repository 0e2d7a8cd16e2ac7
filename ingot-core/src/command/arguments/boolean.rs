//! A boolean argument.
use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;

/// Parses `true` or `false`.
pub struct BoolArgument;

impl CommandArgument for BoolArgument {
    type Output = bool;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let value = match *arg.first()? {
            "true" => true,
            "false" => false,
            _ => return None,
        };
        Some((&arg[1..], value))
    }
}
