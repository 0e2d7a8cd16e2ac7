//! An entity type argument for the summon command.
use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;
use crate::registry::entity_types::{self, EntityType};

/// Reference to a static `EntityType`
pub type EntityTypeRef = &'static EntityType;

/// Parses entity types like `minecraft:cow` or `zombie`.
pub struct EntityTypeArgument;

impl CommandArgument for EntityTypeArgument {
    type Output = EntityTypeRef;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let entity_type = entity_types::by_key(arg.first()?)?;
        Some((&arg[1..], entity_type))
    }
}
