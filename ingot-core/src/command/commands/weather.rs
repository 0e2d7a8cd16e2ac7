//! Handler for the "weather" command.
use ingot_utils::translations;

use crate::command::arguments::time::TimeArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;

/// Handler for the "weather" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["weather"],
        "Changes the weather in the current dimension.",
        "minecraft:command.weather",
    )
    .then(
        literal("clear")
            .then(argument("duration", TimeArgument::at_least(1)).executes(WeatherCommandExecutor::Clear))
            .executes(WeatherCommandExecutor::Clear),
    )
    .then(
        literal("rain")
            .then(argument("duration", TimeArgument::at_least(1)).executes(WeatherCommandExecutor::Rain))
            .executes(WeatherCommandExecutor::Rain),
    )
    .then(
        literal("thunder")
            .then(argument("duration", TimeArgument::at_least(1)).executes(WeatherCommandExecutor::Thunder))
            .executes(WeatherCommandExecutor::Thunder),
    )
}

enum WeatherCommandExecutor {
    Clear,
    Rain,
    Thunder,
}

impl CommandExecutor<((), ())> for WeatherCommandExecutor {
    fn execute(&self, _args: ((), ()), context: &mut CommandContext) -> CommandResult {
        let duration = match self {
            WeatherCommandExecutor::Clear => rand::random_range(12_000..=180_000),
            WeatherCommandExecutor::Rain => rand::random_range(12_000..=24_000),
            WeatherCommandExecutor::Thunder => rand::random_range(3_600..=15_600),
        };

        self.execute((((), ()), duration), context)
    }
}

impl CommandExecutor<(((), ()), i32)> for WeatherCommandExecutor {
    fn execute(&self, args: (((), ()), i32), context: &mut CommandContext) -> CommandResult {
        let (_, duration) = args;
        let mut level_data = context.server.overworld().level_data.lock();

        let message = match self {
            WeatherCommandExecutor::Clear => {
                level_data.set_weather(duration, 0, false, false);
                translations::COMMANDS_WEATHER_SET_CLEAR
            }
            WeatherCommandExecutor::Rain => {
                level_data.set_weather(0, duration, true, false);
                translations::COMMANDS_WEATHER_SET_RAIN
            }
            WeatherCommandExecutor::Thunder => {
                level_data.set_weather(0, duration, true, true);
                translations::COMMANDS_WEATHER_SET_THUNDER
            }
        };
        drop(level_data);

        context.send_success(&message.msg());
        Ok(duration)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestServer;

    #[test]
    fn sets_weather_for_duration() {
        let server = TestServer::new();
        assert_eq!(server.console("weather thunder 10s"), 200);
        {
            let level_data = server.server.overworld().level_data.lock();
            assert!(level_data.raining && level_data.thundering);
            assert_eq!(level_data.rain_time, 200);
        }

        let duration = server.console("weather clear");
        assert!((12_000..=180_000).contains(&duration));
        let level_data = server.server.overworld().level_data.lock();
        assert!(!level_data.raining);
        assert_eq!(level_data.clear_weather_time, duration);
    }

    #[test]
    fn rejects_zero_duration() {
        let server = TestServer::new();
        assert!(server.run_console("weather rain 0").is_err());
    }
}
