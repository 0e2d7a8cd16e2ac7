//! Handler for the "setblock" command.
use ingot_utils::BlockPos;
use ingot_utils::translations;

use crate::command::arguments::block_state::BlockStateArgument;
use crate::command::arguments::coordinates::BlockPosArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::world::block_state::BlockState;

/// Handler for the "setblock" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["setblock"],
        "Changes a block to another block.",
        "minecraft:command.setblock",
    )
    .then(
        argument("pos", BlockPosArgument).then(
            argument("block", BlockStateArgument)
                .executes(SetBlockCommandExecutor::Replace)
                .then(literal("replace").executes(SetBlockCommandExecutor::Replace))
                .then(literal("destroy").executes(SetBlockCommandExecutor::Replace))
                .then(literal("keep").executes(SetBlockCommandExecutor::Keep)),
        ),
    )
}

#[derive(Clone, Copy)]
enum SetBlockCommandExecutor {
    Replace,
    Keep,
}

impl CommandExecutor<(((), BlockPos), BlockState)> for SetBlockCommandExecutor {
    fn execute(
        &self,
        args: (((), BlockPos), BlockState),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((), pos), block) = args;
        if !context.world.is_in_world_bounds(pos) {
            return Err(CommandError::msg(translations::ARGUMENT_POS_OUTOFWORLD));
        }
        if matches!(self, SetBlockCommandExecutor::Keep) && !context.world.get_block_state(pos).is_air() {
            return Err(CommandError::msg(translations::COMMANDS_SETBLOCK_FAILED));
        }
        if !context.world.set_block_state(pos, block) {
            return Err(CommandError::msg(translations::COMMANDS_SETBLOCK_FAILED));
        }

        context.send_success(&translations::COMMANDS_SETBLOCK_SUCCESS.message([
            pos.x().into(),
            pos.y().into(),
            pos.z().into(),
        ]));
        Ok(1)
    }
}

impl CommandExecutor<((((), BlockPos), BlockState), ())> for SetBlockCommandExecutor {
    fn execute(
        &self,
        args: ((((), BlockPos), BlockState), ()),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (args, ()) = args;
        self.execute(args, context)
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::BlockPos;

    use crate::test_support::TestServer;

    #[test]
    fn sets_and_keeps_blocks() {
        let server = TestServer::new();
        let world = server.server.overworld().clone();

        assert_eq!(server.console("setblock 1 -60 1 minecraft:stone"), 1);
        assert_eq!(world.get_block_state(BlockPos::new(1, -60, 1)).block.path, "stone");
        assert!(server.run_console("setblock 1 -60 1 stone").is_err());
        assert!(server.run_console("setblock 1 -60 1 gold_block keep").is_err());
        assert_eq!(server.console("setblock 2 -60 1 gold_block keep"), 1);
        assert_eq!(
            server.console("setblock 3 -60 1 oak_stairs[facing=east, half=top] replace"),
            1
        );
        assert!(server.run_console("setblock 1 400 1 stone").is_err());
        assert!(server.run_console("setblock 1 -60 1 unobtainium").is_err());
    }
}
