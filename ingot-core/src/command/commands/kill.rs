//! Handler for the "kill" command.
use std::sync::Arc;

use ingot_utils::translations;

use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument,
};
use crate::command::context::CommandContext;
use crate::entity::Entity;

/// Handler for the "kill" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["kill"],
        "Kills entities (players, mobs, items, etc.).",
        "minecraft:command.kill",
    )
    .executes(KillCommandExecutor)
    .then(argument("targets", EntityArgument::entities()).executes(KillCommandExecutor))
}

struct KillCommandExecutor;

impl CommandExecutor<()> for KillCommandExecutor {
    fn execute(&self, _args: (), context: &mut CommandContext) -> CommandResult {
        let entity = context.require_entity()?.clone();
        kill(vec![entity], context)
    }
}

impl CommandExecutor<((), EntitySelector)> for KillCommandExecutor {
    fn execute(&self, args: ((), EntitySelector), context: &mut CommandContext) -> CommandResult {
        let ((), targets) = args;
        let targets = targets.entities(context)?;
        kill(targets, context)
    }
}

fn kill(targets: Vec<Arc<Entity>>, context: &CommandContext) -> CommandResult {
    for target in &targets {
        context.server.kill(target);
    }

    if let [target] = targets.as_slice() {
        context.send_success(
            &translations::COMMANDS_KILL_SUCCESS_SINGLE.message([target.display_name()]),
        );
    } else {
        context.send_success(
            &translations::COMMANDS_KILL_SUCCESS_MULTIPLE.message([targets.len().into()]),
        );
    }
    Ok(targets.len() as i32)
}

#[cfg(test)]
mod tests {
    use ingot_utils::math::Vector3;

    use crate::registry::entity_types;
    use crate::test_support::TestServer;

    #[test]
    fn kills_targets_and_counts_deaths() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        server.summon(&entity_types::ZOMBIE, Vector3::new(3.0, -60.0, 3.0));
        server.summon(&entity_types::COW, Vector3::new(5.0, -60.0, 3.0));
        server.console("scoreboard objectives add deaths deathCount");

        assert_eq!(server.console("kill @e[type=!player]"), 2);
        assert!(server.run_console("kill @e[type=zombie]").is_err());

        assert_eq!(server.run_as(&steve, "kill").ok(), Some(1));
        assert!(!steve.is_alive());
        assert_eq!(server.messages(&steve), vec!["Killed Steve"]);
        let score = server.server.scoreboard.lock().score("Steve", "deaths");
        assert_eq!(score.map(|score| score.value), Some(1));
    }

    #[test]
    fn console_needs_targets() {
        let server = TestServer::new();
        assert!(server.run_console("kill").is_err());
    }
}
