//! A scoreboard display slot argument.
use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;
use crate::scoreboard::DisplaySlot;

/// Parses `list`, `sidebar`, `below_name` or `sidebar.team.<color>`.
pub struct DisplaySlotArgument;

impl CommandArgument for DisplaySlotArgument {
    type Output = DisplaySlot;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let slot = DisplaySlot::parse(arg.first()?)?;
        Some((&arg[1..], slot))
    }
}
