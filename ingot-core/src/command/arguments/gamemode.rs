//! A game mode argument.
use ingot_utils::GameType;

use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;

/// A game mode argument.
pub struct GameModeArgument;

impl CommandArgument for GameModeArgument {
    type Output = GameType;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let game_type = GameType::parse(arg.first()?)?;
        Some((&arg[1..], game_type))
    }
}
