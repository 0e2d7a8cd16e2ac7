//! Handler for the "worldborder" command.
use ingot_utils::math::Vector2;
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::coordinates::Vector2Argument;
use crate::command::arguments::numbers::{DoubleArgument, FloatArgument, IntegerArgument};
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::world::border::{MAX_CENTER, MAX_SIZE};

/// Handler for the "worldborder" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["worldborder"],
        "Manages the world border.",
        "minecraft:command.worldborder",
    )
    .then(
        literal("add").then(
            argument("distance", DoubleArgument::bounded(-MAX_SIZE, MAX_SIZE))
                .executes(SizeExecutor::Add)
                .then(argument("time", IntegerArgument::at_least(0)).executes(SizeExecutor::Add)),
        ),
    )
    .then(
        literal("set").then(
            argument("distance", DoubleArgument::bounded(-MAX_SIZE, MAX_SIZE))
                .executes(SizeExecutor::Set)
                .then(argument("time", IntegerArgument::at_least(0)).executes(SizeExecutor::Set)),
        ),
    )
    .then(literal("center").then(argument("pos", Vector2Argument).executes(CenterExecutor)))
    .then(
        literal("damage")
            .then(
                literal("amount").then(
                    argument("damagePerBlock", FloatArgument::at_least(0.0))
                        .executes(DamageExecutor::Amount),
                ),
            )
            .then(
                literal("buffer").then(
                    argument("distance", FloatArgument::at_least(0.0))
                        .executes(DamageExecutor::Buffer),
                ),
            ),
    )
    .then(literal("get").executes(GetExecutor))
    .then(
        literal("warning")
            .then(
                literal("distance").then(
                    argument("distance", IntegerArgument::at_least(0))
                        .executes(WarningExecutor::Distance),
                ),
            )
            .then(
                literal("time").then(
                    argument("time", IntegerArgument::at_least(0)).executes(WarningExecutor::Time),
                ),
            ),
    )
}

fn plain(value: String) -> TextComponent {
    TextComponent::plain(value)
}

enum SizeExecutor {
    Add,
    Set,
}

impl SizeExecutor {
    fn apply(&self, distance: f64, seconds: i32, context: &CommandContext) -> CommandResult {
        let mut border = context.world.border.lock();
        let current = border.size();
        let target = match self {
            SizeExecutor::Add => current + distance,
            SizeExecutor::Set => distance,
        };

        if (current - target).abs() < f64::EPSILON {
            return Err(CommandError::msg(translations::COMMANDS_WORLDBORDER_SET_FAILED_NOCHANGE));
        }
        if target < 1.0 {
            return Err(CommandError::msg(translations::COMMANDS_WORLDBORDER_SET_FAILED_SMALL));
        }
        if target > MAX_SIZE {
            return Err(CommandError::translated(
                translations::COMMANDS_WORLDBORDER_SET_FAILED_BIG,
                [plain(format!("{MAX_SIZE:.1}"))],
            ));
        }

        let message = if seconds > 0 {
            border.lerp_size_between(current, target, i64::from(seconds) * 20);
            let translation = if target > current {
                translations::COMMANDS_WORLDBORDER_SET_GROW
            } else {
                translations::COMMANDS_WORLDBORDER_SET_SHRINK
            };
            translation.message([plain(format!("{target:.1}")), seconds.into()])
        } else {
            border.set_size(target);
            translations::COMMANDS_WORLDBORDER_SET_IMMEDIATE.message([plain(format!("{target:.1}"))])
        };
        drop(border);

        context.send_success(&message);
        Ok((target - current) as i32)
    }
}

impl CommandExecutor<(((), ()), f64)> for SizeExecutor {
    fn execute(&self, args: (((), ()), f64), context: &mut CommandContext) -> CommandResult {
        let (((), ()), distance) = args;
        self.apply(distance, 0, context)
    }
}

impl CommandExecutor<((((), ()), f64), i32)> for SizeExecutor {
    fn execute(&self, args: ((((), ()), f64), i32), context: &mut CommandContext) -> CommandResult {
        let ((((), ()), distance), seconds) = args;
        self.apply(distance, seconds, context)
    }
}

struct CenterExecutor;

impl CommandExecutor<(((), ()), Vector2<f64>)> for CenterExecutor {
    fn execute(&self, args: (((), ()), Vector2<f64>), context: &mut CommandContext) -> CommandResult {
        let (((), ()), pos) = args;
        let mut border = context.world.border.lock();
        if (border.center_x - pos.x).abs() < f64::EPSILON && (border.center_z - pos.y).abs() < f64::EPSILON {
            return Err(CommandError::msg(translations::COMMANDS_WORLDBORDER_CENTER_FAILED));
        }
        if pos.x.abs() > MAX_CENTER || pos.y.abs() > MAX_CENTER {
            return Err(CommandError::translated(
                translations::COMMANDS_WORLDBORDER_SET_FAILED_FAR,
                [plain(format!("{MAX_CENTER:.0}"))],
            ));
        }
        border.center_x = pos.x;
        border.center_z = pos.y;
        drop(border);

        context.send_success(&translations::COMMANDS_WORLDBORDER_CENTER_SUCCESS.message([
            plain(format!("{:.2}", pos.x)),
            plain(format!("{:.2}", pos.y)),
        ]));
        Ok(0)
    }
}

enum DamageExecutor {
    Amount,
    Buffer,
}

impl CommandExecutor<((((), ()), ()), f32)> for DamageExecutor {
    fn execute(&self, args: ((((), ()), ()), f32), context: &mut CommandContext) -> CommandResult {
        let ((((), ()), ()), value) = args;
        let value = f64::from(value);
        let mut border = context.world.border.lock();
        let (field, failed, success) = match self {
            DamageExecutor::Amount => (
                &mut border.damage_per_block,
                translations::COMMANDS_WORLDBORDER_DAMAGE_AMOUNT_FAILED,
                translations::COMMANDS_WORLDBORDER_DAMAGE_AMOUNT_SUCCESS,
            ),
            DamageExecutor::Buffer => (
                &mut border.safe_zone,
                translations::COMMANDS_WORLDBORDER_DAMAGE_BUFFER_FAILED,
                translations::COMMANDS_WORLDBORDER_DAMAGE_BUFFER_SUCCESS,
            ),
        };
        if (*field - value).abs() < f64::EPSILON {
            return Err(CommandError::msg(failed));
        }
        *field = value;
        drop(border);

        context.send_success(&success.message([plain(format!("{value:.2}"))]));
        Ok(value as i32)
    }
}

struct GetExecutor;

impl CommandExecutor<((), ())> for GetExecutor {
    fn execute(&self, _args: ((), ()), context: &mut CommandContext) -> CommandResult {
        let size = context.world.border.lock().size();
        context.send_success(
            &translations::COMMANDS_WORLDBORDER_GET.message([plain(format!("{size:.0}"))]),
        );
        Ok((size + 0.5).floor() as i32)
    }
}

enum WarningExecutor {
    Distance,
    Time,
}

impl CommandExecutor<((((), ()), ()), i32)> for WarningExecutor {
    fn execute(&self, args: ((((), ()), ()), i32), context: &mut CommandContext) -> CommandResult {
        let ((((), ()), ()), value) = args;
        let mut border = context.world.border.lock();
        let (field, failed, success) = match self {
            WarningExecutor::Distance => (
                &mut border.warning_blocks,
                translations::COMMANDS_WORLDBORDER_WARNING_DISTANCE_FAILED,
                translations::COMMANDS_WORLDBORDER_WARNING_DISTANCE_SUCCESS,
            ),
            WarningExecutor::Time => (
                &mut border.warning_time,
                translations::COMMANDS_WORLDBORDER_WARNING_TIME_FAILED,
                translations::COMMANDS_WORLDBORDER_WARNING_TIME_SUCCESS,
            ),
        };
        if *field == value {
            return Err(CommandError::msg(failed));
        }
        *field = value;
        drop(border);

        context.send_success(&success.message([value.into()]));
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestServer;

    #[test]
    fn sets_and_grows_the_border() {
        let server = TestServer::new();
        let world = server.server.overworld().clone();

        assert_eq!(server.console("worldborder set 100"), 100 - 59_999_968);
        assert!((world.border.lock().size() - 100.0).abs() < 1e-9);
        assert!(server.run_console("worldborder set 100").is_err());
        assert!(server.run_console("worldborder set 0.5").is_err());

        assert_eq!(server.console("worldborder add 20 1"), 20);
        assert!((world.border.lock().lerp_target() - 120.0).abs() < 1e-9);
        for _ in 0..20 {
            world.tick();
        }
        assert_eq!(server.console("worldborder get"), 120);
    }

    #[test]
    fn centers_and_configures_damage() {
        let server = TestServer::new();
        let world = server.server.overworld().clone();

        assert_eq!(server.console("worldborder center 10 -4"), 0);
        assert!((world.border.lock().center_x - 10.5).abs() < 1e-9);
        assert!(server.run_console("worldborder center 10 -4").is_err());
        assert!(server.run_console("worldborder center 30000000 0").is_err());

        assert_eq!(server.console("worldborder damage amount 2"), 2);
        assert!(server.run_console("worldborder damage amount 2").is_err());
        assert_eq!(server.console("worldborder damage buffer 8"), 8);
        assert_eq!(server.console("worldborder warning distance 12"), 12);
        assert_eq!(server.console("worldborder warning time 30"), 30);
        assert!(server.run_console("worldborder warning time 30").is_err());
    }
}
