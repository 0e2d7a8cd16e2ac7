//! Handler for the "summon" command.
use ingot_utils::BlockPos;
use ingot_utils::math::Vector3;
use ingot_utils::translations;

use crate::command::arguments::coordinates::Vector3Argument;
use crate::command::arguments::entity_type::EntityTypeRef;
use crate::command::arguments::entity_type::EntityTypeArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::world::World;

/// Handler for the "summon" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["summon"],
        "Summons an entity.",
        "minecraft:command.summon",
    )
    .then(
        argument("entity", EntityTypeArgument)
            .executes(SummonCommandExecutor)
            .then(argument("pos", Vector3Argument::centered()).executes(SummonCommandExecutor)),
    )
}

struct SummonCommandExecutor;

impl CommandExecutor<((), EntityTypeRef)> for SummonCommandExecutor {
    fn execute(&self, args: ((), EntityTypeRef), context: &mut CommandContext) -> CommandResult {
        let position = context.position;
        self.execute((args, position), context)
    }
}

impl CommandExecutor<(((), EntityTypeRef), Vector3<f64>)> for SummonCommandExecutor {
    fn execute(
        &self,
        args: (((), EntityTypeRef), Vector3<f64>),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((), entity_type), position) = args;

        if !World::is_in_spawnable_bounds(BlockPos::containing(position)) {
            return Err(CommandError::msg(translations::COMMANDS_SUMMON_INVALIDPOSITION));
        }
        if !entity_type.summonable {
            return Err(CommandError::msg(translations::COMMANDS_SUMMON_FAILED));
        }
        if context.server.difficulty().is_peaceful() && !entity_type.is_allowed_in_peaceful() {
            return Err(CommandError::msg(translations::COMMANDS_SUMMON_FAILED_PEACEFUL));
        }

        let entity = context
            .server
            .spawn_entity(&context.world, entity_type, position);
        log::debug!("Summoned {} at {:?}", entity_type.key, position);
        context.send_success(&translations::COMMANDS_SUMMON_SUCCESS.message([entity.display_name()]));
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::math::Vector3;

    use crate::test_support::TestServer;

    #[test]
    fn summons_at_position() {
        let server = TestServer::new();
        assert_eq!(server.console("summon minecraft:cow 10 -60 -3"), 1);
        let cow = server
            .server
            .all_entities()
            .into_iter()
            .find(|entity| entity.entity_type().path() == "cow")
            .expect("cow was summoned");
        assert_eq!(cow.position(), Vector3::new(10.5, -60.0, -2.5));
    }

    #[test]
    fn rejects_players_and_peaceful_monsters() {
        let server = TestServer::new();
        assert!(server.run_console("summon player").is_err());
        assert!(server.run_console("summon zombie 0 0 40000000").is_err());
        server.console("difficulty peaceful");
        assert!(server.run_console("summon zombie").is_err());
        assert_eq!(server.console("summon pig"), 1);
    }
}
