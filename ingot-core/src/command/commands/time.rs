//! Handler for the "time" command.
use ingot_utils::translations;

use crate::command::arguments::time::TimeArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::world::level_data::TICKS_PER_DAY;

/// Handler for the "time" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["time"],
        "Changes or queries the world's game time.",
        "minecraft:command.time",
    )
    .then(
        literal("set")
            .then(argument("time", TimeArgument::at_least(0)).executes(TimeCommandExecutor::Set))
            .then(literal("day").executes(TimeCommandExecutor::SetTo(1_000)))
            .then(literal("noon").executes(TimeCommandExecutor::SetTo(6_000)))
            .then(literal("night").executes(TimeCommandExecutor::SetTo(13_000)))
            .then(literal("midnight").executes(TimeCommandExecutor::SetTo(18_000))),
    )
    .then(
        literal("add")
            .then(argument("time", TimeArgument::at_least(0)).executes(TimeCommandExecutor::Add)),
    )
    .then(
        literal("query")
            .then(literal("daytime").executes(TimeCommandExecutor::Query(TimeQuery::DayTime)))
            .then(literal("gametime").executes(TimeCommandExecutor::Query(TimeQuery::GameTime)))
            .then(literal("day").executes(TimeCommandExecutor::Query(TimeQuery::Day))),
    )
}

#[derive(Clone, Copy)]
enum TimeQuery {
    DayTime,
    GameTime,
    Day,
}

enum TimeCommandExecutor {
    Set,
    SetTo(i32),
    Add,
    Query(TimeQuery),
}

impl CommandExecutor<(((), ()), i32)> for TimeCommandExecutor {
    fn execute(&self, args: (((), ()), i32), context: &mut CommandContext) -> CommandResult {
        let (_, time) = args;
        match self {
            TimeCommandExecutor::Add => add_time(i64::from(time), context),
            _ => set_time(time, context),
        }
    }
}

impl CommandExecutor<(((), ()), ())> for TimeCommandExecutor {
    fn execute(&self, _args: (((), ()), ()), context: &mut CommandContext) -> CommandResult {
        match self {
            TimeCommandExecutor::SetTo(time) => set_time(*time, context),
            TimeCommandExecutor::Query(query) => query_time(*query, context),
            _ => Err(CommandError::InvalidRequirement),
        }
    }
}

fn set_time(time: i32, context: &CommandContext) -> CommandResult {
    for world in &context.server.worlds {
        world.level_data.lock().day_time = i64::from(time);
    }
    context.send_success(&translations::COMMANDS_TIME_SET.message([time.into()]));
    Ok(day_time(context))
}

fn add_time(time: i64, context: &CommandContext) -> CommandResult {
    for world in &context.server.worlds {
        let mut level_data = world.level_data.lock();
        level_data.day_time = level_data.day_time.wrapping_add(time);
    }
    let result = day_time(context);
    context.send_success(&translations::COMMANDS_TIME_SET.message([result.into()]));
    Ok(result)
}

fn day_time(context: &CommandContext) -> i32 {
    (context.world.level_data.lock().day_time % TICKS_PER_DAY) as i32
}

fn query_time(query: TimeQuery, context: &CommandContext) -> CommandResult {
    let (day_time, game_time) = {
        let level_data = context.world.level_data.lock();
        (level_data.day_time, level_data.game_time)
    };
    let value = match query {
        TimeQuery::DayTime => day_time % TICKS_PER_DAY,
        TimeQuery::GameTime => game_time % i64::from(i32::MAX),
        TimeQuery::Day => (day_time / TICKS_PER_DAY) % i64::from(i32::MAX),
    } as i32;
    context.send_success(&translations::COMMANDS_TIME_QUERY.message([value.into()]));
    Ok(value)
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestServer;

    #[test]
    fn sets_adds_and_queries() {
        let server = TestServer::new();
        assert_eq!(server.console("time set noon"), 6_000);
        assert_eq!(server.console("time add 1d"), 6_000);
        assert_eq!(server.console("time query day"), 1);
        assert_eq!(server.console("time query daytime"), 6_000);
        assert_eq!(server.console("time set 100t"), 100);
        assert_eq!(server.console("time query gametime"), 0);
        for world in &server.server.worlds {
            assert_eq!(world.level_data.lock().day_time, 100);
        }
    }
}
