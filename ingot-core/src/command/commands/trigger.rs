//! Handler for the "trigger" command.
use ingot_utils::translations;

use crate::command::arguments::numbers::IntegerArgument;
use crate::command::arguments::objective::ObjectiveArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::scoreboard::ObjectiveCriteria;

/// Handler for the "trigger" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["trigger"],
        "Sets a trigger to be activated.",
        "minecraft:command.trigger",
    )
    .then(
        argument("objective", ObjectiveArgument)
            .executes(TriggerCommandExecutor::Add)
            .then(
                literal("add")
                    .then(argument("value", IntegerArgument::any()).executes(TriggerCommandExecutor::Add)),
            )
            .then(
                literal("set")
                    .then(argument("value", IntegerArgument::any()).executes(TriggerCommandExecutor::Set)),
            ),
    )
}

enum TriggerCommandExecutor {
    Add,
    Set,
}

impl CommandExecutor<((), String)> for TriggerCommandExecutor {
    fn execute(&self, args: ((), String), context: &mut CommandContext) -> CommandResult {
        let ((), objective) = args;
        trigger(&objective, None, context)
    }
}

impl CommandExecutor<((((), String), ()), i32)> for TriggerCommandExecutor {
    fn execute(
        &self,
        args: ((((), String), ()), i32),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((), objective), ()), value) = args;
        let change = match self {
            TriggerCommandExecutor::Add => TriggerChange::Add(value),
            TriggerCommandExecutor::Set => TriggerChange::Set(value),
        };
        trigger(&objective, Some(change), context)
    }
}

enum TriggerChange {
    Add(i32),
    Set(i32),
}

fn trigger(objective: &str, change: Option<TriggerChange>, context: &CommandContext) -> CommandResult {
    let player = context.require_player()?;
    let holder = player.scoreboard_name();

    let mut scoreboard = context.server.scoreboard.lock();
    let objective = ObjectiveArgument::get(&scoreboard, objective)?;
    if objective.criteria != ObjectiveCriteria::Trigger {
        return Err(CommandError::msg(translations::COMMANDS_TRIGGER_FAILED_INVALID));
    }
    let name = objective.formatted_display_name();
    let objective = objective.name.clone();
    if scoreboard.score(&holder, &objective).is_none_or(|score| score.locked) {
        return Err(CommandError::msg(translations::COMMANDS_TRIGGER_FAILED_UNPRIMED));
    }

    let score = scoreboard.score_mut(&holder, &objective);
    score.locked = true;
    let (message, result) = match change {
        None => {
            score.value = score.value.wrapping_add(1);
            (translations::COMMANDS_TRIGGER_SIMPLE_SUCCESS.message([name]), score.value)
        }
        Some(TriggerChange::Add(value)) => {
            score.value = score.value.wrapping_add(value);
            (
                translations::COMMANDS_TRIGGER_ADD_SUCCESS.message([name, value.into()]),
                score.value,
            )
        }
        Some(TriggerChange::Set(value)) => {
            score.value = value;
            (
                translations::COMMANDS_TRIGGER_SET_SUCCESS.message([name, value.into()]),
                value,
            )
        }
    };
    drop(scoreboard);

    context.send_success(&message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestServer;

    #[test]
    fn triggers_once_per_enable() {
        let server = TestServer::new();
        let alex = server.player("Alex");
        server.console("scoreboard objectives add vote trigger");

        assert!(server.run_as(&alex, "trigger vote").is_err());
        server.console("scoreboard players enable Alex vote");
        assert_eq!(server.run_as(&alex, "trigger vote add 5").ok(), Some(5));
        assert_eq!(server.messages(&alex), vec!["Triggered [vote] (added 5 to value)"]);
        assert!(server.run_as(&alex, "trigger vote").is_err());

        server.console("scoreboard players enable Alex vote");
        assert_eq!(server.run_as(&alex, "trigger vote").ok(), Some(6));
        server.console("scoreboard players enable Alex vote");
        assert_eq!(server.run_as(&alex, "trigger vote set 2").ok(), Some(2));
    }

    #[test]
    fn rejects_other_criteria_and_console() {
        let server = TestServer::new();
        let alex = server.player("Alex");
        server.console("scoreboard objectives add kills dummy");
        assert!(server.run_as(&alex, "trigger kills").is_err());
        assert!(server.run_as(&alex, "trigger missing").is_err());
        assert!(server.run_console("trigger kills").is_err());
    }
}
