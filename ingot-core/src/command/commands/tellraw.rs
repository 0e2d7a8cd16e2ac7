//! Handler for the "tellraw" command.
use ingot_utils::text::TextComponent;

use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::text_component::TextComponentArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument,
};
use crate::command::context::CommandContext;

/// Handler for the "tellraw" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["tellraw"],
        "Sends a JSON message to players.",
        "minecraft:command.tellraw",
    )
    .then(
        argument("targets", EntityArgument::players())
            .then(argument("message", TextComponentArgument).executes(TellrawCommandExecutor)),
    )
}

struct TellrawCommandExecutor;

impl CommandExecutor<(((), EntitySelector), TextComponent)> for TellrawCommandExecutor {
    fn execute(
        &self,
        args: (((), EntitySelector), TextComponent),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((), targets), message) = args;
        let targets = targets.entities(context)?;
        for target in &targets {
            target.send_message(message.clone());
        }
        Ok(targets.len() as i32)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestServer;

    #[test]
    fn sends_json_to_targets() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let alex = server.player("Alex");

        let result = server.console(r#"tellraw @a {"text": "hi", "extra": [" all"]}"#);
        assert_eq!(result, 2);
        assert_eq!(server.messages(&steve), vec!["hi all"]);
        assert_eq!(server.messages(&alex), vec!["hi all"]);

        assert!(server.run_console("tellraw @e[type=cow] \"x\"").is_err());
    }
}
