//! This module contains everything needed for commands (e.g., parsing, execution, and sender handling).
pub mod arguments;
pub mod commands;
pub mod context;
pub mod error;
pub mod sender;

use std::sync::Arc;

use ingot_utils::text::{NamedColor, TextComponent};
use ingot_utils::translations;

use crate::command::commands::{CommandHandlerDyn, CommandResult};
use crate::command::context::CommandContext;
use crate::command::error::CommandError::{self, *};
use crate::command::sender::CommandSender;
use crate::server::Server;

/// A struct that parses and dispatches commands to their appropriate handlers.
pub struct CommandDispatcher {
    /// A map of command names to their handlers.
    handlers: scc::HashMap<&'static str, Arc<dyn CommandHandlerDyn>>,
}

impl CommandDispatcher {
    /// Creates a new command dispatcher with no handlers.
    #[must_use]
    pub fn new() -> Self {
        CommandDispatcher {
            handlers: scc::HashMap::new(),
        }
    }

    /// Runs a command for a sender, reporting failures to them in red.
    ///
    /// Returns the command result, or 0 if it failed.
    pub fn handle_command(&self, sender: CommandSender, command: &str, server: Arc<Server>) -> i32 {
        let mut context = CommandContext::new(sender, server);
        self.handle_command_with(&mut context, command)
    }

    /// Runs a command with an existing context, reporting failures in red.
    pub fn handle_command_with(&self, context: &mut CommandContext, command: &str) -> i32 {
        match self.execute(context, command) {
            Ok(result) => result,
            Err(error) => {
                let text = match error {
                    InvalidConsumption(s) => {
                        log::error!(
                            "Error while parsing command \"{command}\": {s:?} was consumed, but couldn't be parsed"
                        );
                        translations::COMMAND_FAILED.msg()
                    }
                    InvalidRequirement => {
                        log::error!(
                            "Error while parsing command \"{command}\": a requirement that was expected was not met."
                        );
                        translations::COMMAND_FAILED.msg()
                    }
                    PermissionDenied => {
                        log::warn!(
                            "{} was denied permission for command \"{command}\"",
                            context.sender.name()
                        );
                        TextComponent::const_plain(
                            "I'm sorry, but you do not have permission to perform this command. Please contact the server administrator if you believe this is an error.",
                        )
                    }
                    CommandFailed(text_component) => *text_component,
                };

                context.sender.send_message(&text.color(NamedColor::Red));
                0
            }
        }
    }

    /// Executes a command, returning its result.
    pub fn execute(&self, context: &mut CommandContext, command: &str) -> CommandResult {
        let command = command.trim();
        let command = command.strip_prefix('/').unwrap_or(command);
        let args = tokenize(command);
        if args.is_empty() {
            return Err(CommandError::msg(translations::COMMAND_UNKNOWN_COMMAND));
        }

        self.dispatch(&args, context)
            .unwrap_or_else(|| Err(CommandError::msg(translations::COMMAND_UNKNOWN_ARGUMENT)))
    }

    /// Dispatches tokens whose first element names the command.
    pub fn dispatch(&self, args: &[&str], context: &mut CommandContext) -> Option<CommandResult> {
        let (name, rest) = args.split_first()?;
        self.dispatch_to(name, rest, context)
    }

    /// Dispatches arguments to the named command.
    pub fn dispatch_to(
        &self,
        name: &str,
        args: &[&str],
        context: &mut CommandContext,
    ) -> Option<CommandResult> {
        let Some(handler) = self.handlers.read_sync(name, |_, v| v.clone()) else {
            return Some(Err(CommandError::msg(
                translations::COMMAND_UNKNOWN_COMMAND,
            )));
        };

        if !context
            .server
            .has_permission(&context.sender, handler.permission())
        {
            return Some(Err(PermissionDenied));
        }

        let previous = std::mem::replace(&mut context.command, handler.names()[0]);
        let result = handler.handle(args, context);
        context.command = previous;
        result
    }

    /// Looks a handler up by any of its names.
    #[must_use]
    pub fn handler(&self, name: &str) -> Option<Arc<dyn CommandHandlerDyn>> {
        self.handlers.read_sync(name, |_, v| v.clone())
    }

    /// Every registered handler once, sorted by primary name.
    #[must_use]
    pub fn handlers(&self) -> Vec<Arc<dyn CommandHandlerDyn>> {
        let mut handlers: Vec<Arc<dyn CommandHandlerDyn>> = Vec::new();
        self.handlers.iter_sync(|name, handler| {
            if handler.names()[0] == *name {
                handlers.push(handler.clone());
            }
            true
        });
        handlers.sort_by_key(|handler| handler.names()[0]);
        handlers
    }

    /// Registers a command handler under all of its names.
    pub fn register(&self, handler: impl CommandHandlerDyn + 'static) {
        let handler: Arc<dyn CommandHandlerDyn> = Arc::new(handler);

        for &name in handler.names() {
            if let Err((name, _)) = self.handlers.insert_sync(name, handler.clone()) {
                log::warn!("Command {name} is already registered");
            }
        }
    }

    /// Unregisters a command handler.
    pub fn unregister(&self, names: &[&'static str]) {
        for name in names {
            self.handlers.remove_sync(name);
        }
    }
}

/// Splits a command at single spaces.
///
/// Any further spaces in a run stay at the front of the next token, so joining
/// tokens with one space gives back the original text.
pub(crate) fn tokenize(command: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = command;
    while !rest.is_empty() {
        let body = rest.len() - rest.trim_start_matches(' ').len();
        let end = rest[body..].find(' ').map_or(rest.len(), |i| body + i);
        tokens.push(&rest[..end]);
        rest = rest.get(end + 1..).unwrap_or_default();
    }
    tokens
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        use crate::command::commands::*;

        let dispatcher = Self::new();
        dispatcher.register(advancement::command_handler());
        dispatcher.register(attribute::command_handler());
        dispatcher.register(bossbar::command_handler());
        dispatcher.register(damage::command_handler());
        dispatcher.register(difficulty::command_handler());
        dispatcher.register(execute::command_handler());
        dispatcher.register(fill::command_handler());
        dispatcher.register(gamemode::command_handler());
        dispatcher.register(help::command_handler());
        dispatcher.register(kill::command_handler());
        dispatcher.register(say::command_handler());
        dispatcher.register(scoreboard::command_handler());
        dispatcher.register(setblock::command_handler());
        dispatcher.register(setworldspawn::command_handler());
        dispatcher.register(spreadplayers::command_handler());
        dispatcher.register(summon::command_handler());
        dispatcher.register(tag::command_handler());
        dispatcher.register(team::command_handler());
        dispatcher.register(teleport::command_handler());
        dispatcher.register(tellraw::command_handler());
        dispatcher.register(time::command_handler());
        dispatcher.register(trigger::command_handler());
        dispatcher.register(weather::command_handler());
        dispatcher.register(worldborder::command_handler());
        dispatcher
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::tokenize;
    use crate::command::sender::CommandSender;
    use crate::test_support::TestServer;

    #[test]
    fn aliases_share_one_handler() {
        let server = TestServer::new();
        let dispatcher = &server.server.command_dispatcher;

        let teleport = dispatcher.handler("teleport").expect("registered");
        let tp = dispatcher.handler("tp").expect("registered");
        assert!(Arc::ptr_eq(&teleport, &tp));
        assert_eq!(
            dispatcher
                .handlers()
                .iter()
                .filter(|handler| handler.names()[0] == "teleport")
                .count(),
            1
        );
    }

    #[test]
    fn reports_failures_in_red_to_players() {
        let server = TestServer::new();
        let alex = server.player("Alex");
        let dispatcher = &server.server.command_dispatcher;

        let result = dispatcher.handle_command(
            CommandSender::Player(alex.clone()),
            "weather clear",
            server.server.clone(),
        );
        assert_eq!(result, 0);
        assert!(server.messages(&alex)[0].starts_with("I'm sorry, but you do not have permission"));

        assert!(server.run_console("").is_err());
        assert!(server.run_console("nothing here").is_err());
        assert_eq!(server.console("/weather clear 10"), 10);
    }

    #[test]
    fn tokens_keep_repeated_spaces() {
        let command = r#"tellraw Steve {"text":"a    b"}"#;
        let tokens = tokenize(command);
        assert_eq!(tokens, ["tellraw", "Steve", r#"{"text":"a"#, r#"   b"}"#]);
        assert_eq!(tokens.join(" "), command);
        assert_eq!(tokenize("a b"), ["a", "b"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn joined_arguments_keep_their_spacing() {
        let server = TestServer::new();
        let steve = server.player("Steve");

        server.console(r#"tellraw Steve {"text":"a    b"}"#);
        assert_eq!(server.messages(&steve), ["a    b"]);

        server.console("say hello   there");
        assert_eq!(server.messages(&steve), ["[Server] hello   there"]);

        assert!(server.run_console("tp  Steve 0 -60 0").is_err());
    }

    #[test]
    fn unregistered_commands_are_unknown() {
        let server = TestServer::new();
        let dispatcher = &server.server.command_dispatcher;

        dispatcher.unregister(&["weather"]);
        assert!(dispatcher.handler("weather").is_none());
        assert!(server.run_console("weather clear").is_err());
        assert_eq!(server.console("time set 0"), 0);
    }
}
