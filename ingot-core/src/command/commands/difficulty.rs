//! Handler for the "difficulty" command.
use ingot_utils::translations;

use crate::command::arguments::difficulty::DifficultyArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::difficulty::Difficulty;

/// Handler for the "difficulty" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["difficulty"],
        "Sets the difficulty level.",
        "minecraft:command.difficulty",
    )
    .executes(DifficultyCommandExecutor)
    .then(argument("difficulty", DifficultyArgument).executes(DifficultyCommandExecutor))
}

struct DifficultyCommandExecutor;

impl CommandExecutor<()> for DifficultyCommandExecutor {
    fn execute(&self, _args: (), context: &mut CommandContext) -> CommandResult {
        let difficulty = context.server.difficulty();
        context.send_success(
            &translations::COMMANDS_DIFFICULTY_QUERY.message([difficulty.translation().msg()]),
        );
        Ok(difficulty as i32)
    }
}

impl CommandExecutor<((), Difficulty)> for DifficultyCommandExecutor {
    fn execute(&self, args: ((), Difficulty), context: &mut CommandContext) -> CommandResult {
        let ((), difficulty) = args;
        if !context.server.set_difficulty(difficulty) {
            return Err(CommandError::translated(
                translations::COMMANDS_DIFFICULTY_FAILURE,
                [difficulty.translation().msg()],
            ));
        }
        context.send_success(
            &translations::COMMANDS_DIFFICULTY_SUCCESS.message([difficulty.translation().msg()]),
        );
        Ok(difficulty as i32)
    }
}

#[cfg(test)]
mod tests {
    use crate::difficulty::Difficulty;
    use crate::test_support::TestServer;

    #[test]
    fn queries_and_sets() {
        let server = TestServer::new();
        assert_eq!(server.console("difficulty"), 2);
        assert_eq!(server.console("difficulty hard"), 3);
        assert_eq!(server.server.difficulty(), Difficulty::Hard);
        assert!(server.run_console("difficulty hard").is_err());
        assert!(server.run_console("difficulty impossible").is_err());
    }
}
