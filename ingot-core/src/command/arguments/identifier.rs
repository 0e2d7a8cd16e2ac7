//! A namespaced identifier argument.
use ingot_utils::Identifier;

use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;

/// Parses `namespace:path`, defaulting to `minecraft`.
pub struct IdentifierArgument;

impl CommandArgument for IdentifierArgument {
    type Output = Identifier;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let id = Identifier::parse(arg.first()?).ok()?;
        Some((&arg[1..], id))
    }
}
