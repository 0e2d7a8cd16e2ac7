//! Handler for the "help" command.
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::string::StringArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;

/// Handler for the "help" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["help"],
        "Shows command usage.",
        "minecraft:command.help",
    )
    .executes(HelpCommandExecutor)
    .then(argument("command", StringArgument::Greedy).executes(HelpCommandExecutor))
}

struct HelpCommandExecutor;

impl CommandExecutor<()> for HelpCommandExecutor {
    fn execute(&self, _args: (), context: &mut CommandContext) -> CommandResult {
        let server = context.server.clone();
        let mut lines = 0;
        for handler in server.command_dispatcher.handlers() {
            if !server.has_permission(&context.sender, handler.permission()) {
                continue;
            }
            for usage in handler.usage() {
                context.send_success(&TextComponent::plain(format!("/{usage}")));
                lines += 1;
            }
        }
        Ok(lines)
    }
}

impl CommandExecutor<((), String)> for HelpCommandExecutor {
    fn execute(&self, args: ((), String), context: &mut CommandContext) -> CommandResult {
        let ((), query) = args;
        let query = query.strip_prefix('/').unwrap_or(&query);
        let (name, rest) = query.split_once(' ').unwrap_or((query, ""));

        let server = context.server.clone();
        let handler = server
            .command_dispatcher
            .handler(name)
            .filter(|handler| server.has_permission(&context.sender, handler.permission()))
            .ok_or_else(|| CommandError::msg(translations::COMMANDS_HELP_FAILED))?;

        let prefix = format!("{} {}", handler.names()[0], rest.trim());
        let prefix = prefix.trim_end();
        let usages: Vec<String> = handler
            .usage()
            .into_iter()
            .filter(|usage| usage.starts_with(prefix))
            .collect();
        if usages.is_empty() {
            return Err(CommandError::msg(translations::COMMANDS_HELP_FAILED));
        }

        for usage in &usages {
            context.send_success(&TextComponent::plain(format!("/{usage}")));
        }
        Ok(usages.len() as i32)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestServer;

    #[test]
    fn lists_usage_for_a_command() {
        let server = TestServer::new();
        let steve = server.player("Steve");

        assert_eq!(server.run_as(&steve, "help weather").ok(), Some(6));
        let lines = server.messages(&steve);
        assert_eq!(lines[0], "/weather clear <duration>");
        assert_eq!(lines[1], "/weather clear");

        assert_eq!(server.run_as(&steve, "help tp").ok().map(|n| n > 0), Some(true));
        assert_eq!(server.run_as(&steve, "help weather rain").ok(), Some(2));
        assert!(server.run_as(&steve, "help nothing").is_err());
    }

    #[test]
    fn hides_commands_without_permission() {
        let server = TestServer::new();
        let alex = server.player("Alex");

        assert!(server.run_as(&alex, "help weather").is_err());
        let lines = server.run_as(&alex, "help").ok();
        assert!(lines.is_some_and(|lines| lines > 0));
        assert!(
            server
                .messages(&alex)
                .iter()
                .all(|line| line.starts_with("/help") || line.starts_with("/trigger"))
        );
    }
}
