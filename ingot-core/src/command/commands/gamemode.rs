//! Handler for the "gamemode" command.
use std::sync::Arc;

use ingot_utils::GameType;
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::gamemode::GameModeArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument,
};
use crate::command::context::CommandContext;
use crate::entity::Entity;

/// Handler for the "gamemode" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["gamemode"],
        "Changes the game mode of a player.",
        "minecraft:command.gamemode",
    )
    .then(
        argument("gamemode", GameModeArgument)
            .executes(GameModeCommandExecutor)
            .then(argument("targets", EntityArgument::players()).executes(GameModeCommandExecutor)),
    )
}

struct GameModeCommandExecutor;

impl CommandExecutor<((), GameType)> for GameModeCommandExecutor {
    fn execute(&self, args: ((), GameType), context: &mut CommandContext) -> CommandResult {
        let ((), game_type) = args;
        let player = context.require_player()?.clone();
        set_game_mode(vec![player], game_type, context)
    }
}

impl CommandExecutor<(((), GameType), EntitySelector)> for GameModeCommandExecutor {
    fn execute(
        &self,
        args: (((), GameType), EntitySelector),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((), game_type), targets) = args;
        let targets = targets.entities(context)?;
        set_game_mode(targets, game_type, context)
    }
}

fn set_game_mode(
    targets: Vec<Arc<Entity>>,
    game_type: GameType,
    context: &CommandContext,
) -> CommandResult {
    let mut changed = 0;
    for target in &targets {
        let Some(player) = target.player() else {
            continue;
        };
        if !player.set_game_mode(game_type) {
            continue;
        }
        changed += 1;

        let mode = game_mode_translation(game_type);
        let is_self = context
            .entity
            .as_ref()
            .is_some_and(|entity| Arc::ptr_eq(entity, target));
        if is_self {
            context.send_success(&translations::COMMANDS_GAMEMODE_SUCCESS_SELF.message([mode]));
        } else {
            context.send_success(
                &translations::COMMANDS_GAMEMODE_SUCCESS_OTHER
                    .message([target.display_name(), mode]),
            );
        }
    }
    Ok(changed)
}

/// Returns the translation text component for a game mode.
pub(crate) fn game_mode_translation(game_type: GameType) -> TextComponent {
    match game_type {
        GameType::Survival => translations::GAME_MODE_SURVIVAL.msg(),
        GameType::Creative => translations::GAME_MODE_CREATIVE.msg(),
        GameType::Adventure => translations::GAME_MODE_ADVENTURE.msg(),
        GameType::Spectator => translations::GAME_MODE_SPECTATOR.msg(),
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::GameType;

    use crate::test_support::TestServer;

    #[test]
    fn changes_own_and_other_game_modes() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let alex = server.player("Alex");

        assert_eq!(server.run_as(&steve, "gamemode creative").ok(), Some(1));
        assert_eq!(server.messages(&steve), vec!["Set own game mode to Creative Mode"]);
        assert_eq!(server.run_as(&steve, "gamemode creative").ok(), Some(0));

        assert_eq!(server.console("gamemode spectator @a"), 2);
        assert_eq!(
            alex.player().map(|player| player.game_mode()),
            Some(GameType::Spectator)
        );
    }

    #[test]
    fn non_ops_are_denied() {
        let server = TestServer::new();
        let alex = server.player("Alex");
        assert!(server.run_as(&alex, "gamemode creative").is_err());
    }
}
