//! A dimension argument.
use std::sync::Arc;

use ingot_utils::{Identifier, translations};

use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::world::World;

/// Parses a dimension id. Unknown ids fail when resolved, not when parsed.
pub struct DimensionArgument;

impl DimensionArgument {
    /// Finds the world for a parsed dimension id.
    pub fn world(id: &Identifier, context: &CommandContext) -> Result<Arc<World>, CommandError> {
        context
            .server
            .world_by_key(&id.to_string())
            .cloned()
            .ok_or_else(|| {
                CommandError::translated(
                    translations::ARGUMENT_DIMENSION_INVALID,
                    [id.to_string().into()],
                )
            })
    }
}

impl CommandArgument for DimensionArgument {
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
