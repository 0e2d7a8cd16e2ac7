//! Handler for the "damage" command.
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::numbers::FloatArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;

/// Handler for the "damage" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["damage"],
        "Damages entities.",
        "minecraft:command.damage",
    )
    .then(
        argument("target", EntityArgument::entity())
            .then(argument("amount", FloatArgument::at_least(0.0)).executes(DamageCommandExecutor)),
    )
}

struct DamageCommandExecutor;

impl CommandExecutor<(((), EntitySelector), f32)> for DamageCommandExecutor {
    fn execute(
        &self,
        args: (((), EntitySelector), f32),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((), target), amount) = args;
        let target = target.entity(context)?;

        if !context.server.hurt(&target, amount) {
            return Err(CommandError::msg(translations::COMMANDS_DAMAGE_INVULNERABLE));
        }
        context.send_success(&translations::COMMANDS_DAMAGE_SUCCESS.message([
            TextComponent::plain(amount.to_string()),
            target.display_name(),
        ]));
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::math::Vector3;

    use crate::registry::entity_types;
    use crate::test_support::TestServer;

    #[test]
    fn damages_and_kills() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let zombie = server.summon(&entity_types::ZOMBIE, Vector3::new(1.0, -60.0, 1.0));

        assert_eq!(server.run_as(&steve, "damage @e[type=zombie,limit=1] 5").ok(), Some(1));
        assert!((zombie.health() - 15.0).abs() < f32::EPSILON);
        assert_eq!(server.messages(&steve), vec!["Applied 5 damage to Zombie"]);

        server.console("damage @e[type=zombie,limit=1] 100");
        assert!(!zombie.is_alive());
    }

    #[test]
    fn creative_players_are_invulnerable() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        server.console("gamemode creative Steve");
        assert!(server.run_as(&steve, "damage @s 1").is_err());
        assert!(server.run_console("damage @e -1").is_err());
    }
}
