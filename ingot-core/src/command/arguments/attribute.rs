//! An attribute argument.
use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;
use crate::registry::attributes::{self, Attribute};

/// Parses attribute keys like `minecraft:max_health`.
pub struct AttributeArgument;

impl CommandArgument for AttributeArgument {
    type Output = &'static Attribute;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let attribute = attributes::by_key(arg.first()?)?;
        Some((&arg[1..], attribute))
    }
}
