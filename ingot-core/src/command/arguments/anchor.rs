//! An entity anchor argument.
use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;
use crate::entity::EntityAnchor;

/// Parses `feet` or `eyes`.
pub struct AnchorArgument;

impl CommandArgument for AnchorArgument {
    type Output = EntityAnchor;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let anchor = match *arg.first()? {
            "feet" => EntityAnchor::Feet,
            "eyes" => EntityAnchor::Eyes,
            _ => return None,
        };
        Some((&arg[1..], anchor))
    }
}
