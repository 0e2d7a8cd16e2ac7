//! A block state argument, also used as a block predicate.
use crate::command::arguments::{CommandArgument, take_balanced};
use crate::command::context::CommandContext;
use crate::world::block_state::BlockState;

/// Parses `id[property=value,...]`.
pub struct BlockStateArgument;

impl CommandArgument for BlockStateArgument {
    type Output = BlockState;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let (text, consumed) = take_balanced(arg)?;
        let state = BlockState::parse(&text).ok()?;
        Some((&arg[consumed..], state))
    }
}
