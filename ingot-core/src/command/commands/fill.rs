//! Handler for the "fill" command.
use ingot_utils::BlockPos;
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::block_state::BlockStateArgument;
use crate::command::arguments::coordinates::BlockPosArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::world::block_state::BlockState;

/// The most blocks one command may modify.
pub const MODIFICATION_BLOCK_LIMIT: i64 = 32_768;

/// Handler for the "fill" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["fill"],
        "Fills a region with a specific block.",
        "minecraft:command.fill",
    )
    .then(
        argument("from", BlockPosArgument).then(
            argument("to", BlockPosArgument).then(
                argument("block", BlockStateArgument)
                    .executes(FillCommandExecutor(FillMode::Replace))
                    .then(
                        literal("replace")
                            .executes(FillCommandExecutor(FillMode::Replace))
                            .then(argument("filter", BlockStateArgument).executes(FillCommandExecutor(FillMode::Replace))),
                    )
                    .then(literal("destroy").executes(FillCommandExecutor(FillMode::Replace)))
                    .then(literal("keep").executes(FillCommandExecutor(FillMode::Keep)))
                    .then(literal("hollow").executes(FillCommandExecutor(FillMode::Hollow)))
                    .then(literal("outline").executes(FillCommandExecutor(FillMode::Outline))),
            ),
        ),
    )
}

#[derive(Clone, Copy)]
enum FillMode {
    Replace,
    Keep,
    Hollow,
    Outline,
}

struct FillCommandExecutor(FillMode);

type FillArgs = ((((), BlockPos), BlockPos), BlockState);

impl CommandExecutor<FillArgs> for FillCommandExecutor {
    fn execute(&self, args: FillArgs, context: &mut CommandContext) -> CommandResult {
        let ((((), from), to), block) = args;
        fill(from, to, &block, self.0, None, context)
    }
}

impl CommandExecutor<(FillArgs, ())> for FillCommandExecutor {
    fn execute(&self, args: (FillArgs, ()), context: &mut CommandContext) -> CommandResult {
        let (((((), from), to), block), ()) = args;
        fill(from, to, &block, self.0, None, context)
    }
}

impl CommandExecutor<((FillArgs, ()), BlockState)> for FillCommandExecutor {
    fn execute(&self, args: ((FillArgs, ()), BlockState), context: &mut CommandContext) -> CommandResult {
        let ((((((), from), to), block), ()), filter) = args;
        fill(from, to, &block, self.0, Some(&filter), context)
    }
}

/// The corners of the box spanned by two positions, min first.
pub(crate) fn bounds(a: BlockPos, b: BlockPos) -> (BlockPos, BlockPos) {
    (
        BlockPos::new(a.x().min(b.x()), a.y().min(b.y()), a.z().min(b.z())),
        BlockPos::new(a.x().max(b.x()), a.y().max(b.y()), a.z().max(b.z())),
    )
}

/// The number of blocks in the box between `min` and `max`, inclusive, saturating at `i64::MAX`.
pub(crate) fn volume(min: BlockPos, max: BlockPos) -> i64 {
    let side = |min: i32, max: i32| i64::from(max) - i64::from(min) + 1;
    side(min.x(), max.x())
        .saturating_mul(side(min.y(), max.y()))
        .saturating_mul(side(min.z(), max.z()))
}

/// Fails unless every position is inside the world.
pub(crate) fn require_in_world(
    context: &CommandContext,
    positions: &[BlockPos],
) -> Result<(), CommandError> {
    if positions.iter().all(|&pos| context.world.is_in_world_bounds(pos)) {
        Ok(())
    } else {
        Err(CommandError::msg(translations::ARGUMENT_POS_OUTOFWORLD))
    }
}

fn fill(
    from: BlockPos,
    to: BlockPos,
    block: &BlockState,
    mode: FillMode,
    filter: Option<&BlockState>,
    context: &CommandContext,
) -> CommandResult {
    require_in_world(context, &[from, to])?;
    let world = &context.world;
    let (min, max) = bounds(from, to);
    let volume = volume(min, max);
    if volume > MODIFICATION_BLOCK_LIMIT {
        return Err(CommandError::translated(
            translations::COMMANDS_FILL_TOOBIG,
            [
                TextComponent::plain(MODIFICATION_BLOCK_LIMIT.to_string()),
                TextComponent::plain(volume.to_string()),
            ],
        ));
    }

    let mut changed = 0;
    for x in min.x()..=max.x() {
        for y in min.y()..=max.y() {
            for z in min.z()..=max.z() {
                let pos = BlockPos::new(x, y, z);
                let on_edge = x == min.x()
                    || x == max.x()
                    || y == min.y()
                    || y == max.y()
                    || z == min.z()
                    || z == max.z();
                let state = match mode {
                    FillMode::Replace => {
                        if filter.is_some_and(|filter| !world.get_block_state(pos).matches(filter)) {
                            continue;
                        }
                        block.clone()
                    }
                    FillMode::Keep => {
                        if !world.get_block_state(pos).is_air() {
                            continue;
                        }
                        block.clone()
                    }
                    FillMode::Hollow if !on_edge => BlockState::AIR,
                    FillMode::Outline if !on_edge => continue,
                    FillMode::Hollow | FillMode::Outline => block.clone(),
                };
                if world.set_block_state(pos, state) {
                    changed += 1;
                }
            }
        }
    }

    if changed == 0 {
        return Err(CommandError::msg(translations::COMMANDS_FILL_FAILED));
    }
    context.send_success(&translations::COMMANDS_FILL_SUCCESS.message([changed.into()]));
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use ingot_utils::BlockPos;

    use crate::test_support::TestServer;

    #[test]
    fn fills_modes() {
        let server = TestServer::new();
        let world = server.server.overworld().clone();

        assert_eq!(server.console("fill 0 -60 0 2 -58 2 stone"), 27);
        assert_eq!(server.console("fill 0 -60 0 2 -58 2 glass hollow"), 27);
        assert!(world.get_block_state(BlockPos::new(1, -59, 1)).is_air());
        assert_eq!(world.get_block_state(BlockPos::new(0, -60, 0)).block.path, "glass");

        assert_eq!(server.console("fill 0 -60 0 2 -58 2 dirt replace glass"), 26);
        assert_eq!(server.console("fill 0 -60 0 2 -58 2 stone keep"), 1);
        assert!(server.run_console("fill 0 -60 0 2 -58 2 stone keep").is_err());
        assert_eq!(server.console("fill 0 -60 0 2 -58 2 gold_block outline"), 26);
        assert_eq!(world.get_block_state(BlockPos::new(1, -59, 1)).block.path, "stone");
    }

    #[test]
    fn rejects_large_areas() {
        let server = TestServer::new();
        assert!(server.run_console("fill 0 -60 0 100 -50 100 stone").is_err());
        assert!(server.run_console("fill 0 -60 0 1 400 1 stone").is_err());
        assert!(server.run_console("fill 0 -60 0 30000000 -60 0 stone").is_err());
        assert!(
            server
                .run_console("fill -2147483648 0 -2147483648 2147483647 0 2147483647 minecraft:stone")
                .is_err()
        );
        assert!(
            server
                .run_console("fill -29999999 -64 -29999999 29999999 319 29999999 stone")
                .is_err()
        );
    }

    #[test]
    fn huge_volumes_saturate() {
        let min = BlockPos::new(-29_999_999, -2_000, -29_999_999);
        let max = BlockPos::new(29_999_999, 2_000, 29_999_999);
        assert_eq!(super::volume(min, max), i64::MAX);
        assert_eq!(super::volume(max, max), 1);
    }
}
