//! A team colour argument.
use ingot_utils::text::NamedColor;

use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;

/// Parses a colour name; `reset` clears the colour.
pub struct ColorArgument;

impl CommandArgument for ColorArgument {
    type Output = Option<NamedColor>;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let name = *arg.first()?;
        let color = if name == "reset" {
            None
        } else {
            Some(NamedColor::from_name(name)?)
        };
        Some((&arg[1..], color))
    }
}
