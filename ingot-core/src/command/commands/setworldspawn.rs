//! Handler for the "setworldspawn" command.
use ingot_utils::BlockPos;
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::coordinates::{AngleArgument, BlockPosArgument};
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::world::World;

/// Handler for the "setworldspawn" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["setworldspawn"],
        "Sets the world spawn.",
        "minecraft:command.setworldspawn",
    )
    .executes(SetWorldSpawnCommandExecutor)
    .then(
        argument("pos", BlockPosArgument)
            .executes(SetWorldSpawnCommandExecutor)
            .then(argument("angle", AngleArgument).executes(SetWorldSpawnCommandExecutor)),
    )
}

struct SetWorldSpawnCommandExecutor;

impl CommandExecutor<()> for SetWorldSpawnCommandExecutor {
    fn execute(&self, _args: (), context: &mut CommandContext) -> CommandResult {
        let pos = BlockPos::containing(context.position);
        self.execute((((), pos), 0.0), context)
    }
}

impl CommandExecutor<((), BlockPos)> for SetWorldSpawnCommandExecutor {
    fn execute(&self, args: ((), BlockPos), context: &mut CommandContext) -> CommandResult {
        self.execute((args, 0.0), context)
    }
}

impl CommandExecutor<(((), BlockPos), f32)> for SetWorldSpawnCommandExecutor {
    fn execute(&self, args: (((), BlockPos), f32), context: &mut CommandContext) -> CommandResult {
        let (((), pos), angle) = args;
        if !World::is_in_spawnable_bounds(pos) {
            return Err(CommandError::msg(translations::ARGUMENT_POS_OUTOFWORLD));
        }

        {
            let mut level_data = context.server.overworld().level_data.lock();
            level_data.spawn = pos;
            level_data.spawn_angle = angle;
        }
        log::info!("World spawn set to {pos}");

        context.send_success(&translations::COMMANDS_SETWORLDSPAWN_SUCCESS.message([
            pos.x().into(),
            pos.y().into(),
            pos.z().into(),
            TextComponent::plain(angle.to_string()),
        ]));
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::BlockPos;

    use crate::test_support::TestServer;

    #[test]
    fn sets_spawn_and_angle() {
        let server = TestServer::new();
        let steve = server.player("Steve");

        assert_eq!(server.run_as(&steve, "setworldspawn 10 -60 ~5 90").ok(), Some(1));
        assert_eq!(
            server.messages(&steve),
            vec!["Set the world spawn point to 10, -60, 5 [90]"]
        );

        let level_data = server.server.overworld().level_data.lock().clone();
        assert_eq!(level_data.spawn, BlockPos::new(10, -60, 5));
        assert!((level_data.spawn_angle - 90.0).abs() < f32::EPSILON);
        drop(level_data);

        let alex = server.player("Alex");
        assert_eq!(alex.position().x, 10.5);
        assert_eq!(alex.rotation().0, 90.0);
    }
}
