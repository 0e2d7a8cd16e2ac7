//! Handler for the "say" command.
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::string::StringArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument,
};
use crate::command::context::CommandContext;

/// Handler for the "say" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["say"],
        "Broadcasts a message to every player.",
        "minecraft:command.say",
    )
    .then(argument("message", StringArgument::Greedy).executes(SayCommandExecutor))
}

struct SayCommandExecutor;

impl CommandExecutor<((), String)> for SayCommandExecutor {
    fn execute(&self, args: ((), String), context: &mut CommandContext) -> CommandResult {
        let ((), message) = args;
        let message = resolve_selectors(&message, context);

        let sender = match &context.entity {
            Some(entity) => entity.display_name(),
            None => TextComponent::plain(context.sender.name()),
        };
        context.server.broadcast_message(
            &translations::CHAT_TYPE_ANNOUNCEMENT.message([sender, TextComponent::plain(message)]),
        );
        Ok(1)
    }
}

/// Replaces words that are entity selectors with the names they match.
fn resolve_selectors(message: &str, context: &CommandContext) -> String {
    message
        .split(' ')
        .map(|word| {
            if !word.starts_with('@') {
                return word.to_string();
            }
            EntitySelector::parse(word)
                .and_then(|selector| selector.find_entities(context).ok())
                .map_or_else(
                    || word.to_string(),
                    |entities| {
                        entities
                            .iter()
                            .map(|entity| entity.name())
                            .collect::<Vec<_>>()
                            .join(", ")
                    },
                )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestServer;

    #[test]
    fn broadcasts_with_sender_name() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let alex = server.player("Alex");

        assert_eq!(server.run_as(&steve, "say hello there").ok(), Some(1));
        assert_eq!(server.messages(&alex), vec!["[Steve] hello there"]);

        server.console("say hi @a");
        assert_eq!(server.messages(&alex), vec!["[Server] hi Steve, Alex"]);
    }
}
