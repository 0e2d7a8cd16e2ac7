//! Handler for the "tag" command.
use std::collections::BTreeSet;

use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::string::StringArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;

/// Handler for the "tag" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["tag"],
        "Controls entity scoreboard tags.",
        "minecraft:command.tag",
    )
    .then(
        argument("targets", EntityArgument::entities())
            .then(
                literal("add")
                    .then(argument("name", StringArgument::Word).executes(TagCommandExecutor::Add)),
            )
            .then(
                literal("remove").then(
                    argument("name", StringArgument::Word).executes(TagCommandExecutor::Remove),
                ),
            )
            .then(literal("list").executes(TagCommandExecutor::List)),
    )
}

enum TagCommandExecutor {
    Add,
    Remove,
    List,
}

impl CommandExecutor<((((), EntitySelector), ()), String)> for TagCommandExecutor {
    fn execute(
        &self,
        args: ((((), EntitySelector), ()), String),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((), targets), ()), tag) = args;
        let targets = targets.entities(context)?;
        let adding = matches!(self, TagCommandExecutor::Add);

        let changed = targets
            .iter()
            .filter(|target| {
                if adding {
                    target.add_tag(&tag)
                } else {
                    target.remove_tag(&tag)
                }
            })
            .count();
        if changed == 0 {
            return Err(CommandError::msg(if adding {
                translations::COMMANDS_TAG_ADD_FAILED
            } else {
                translations::COMMANDS_TAG_REMOVE_FAILED
            }));
        }

        let tag_text = TextComponent::plain(tag);
        let message = match (adding, targets.as_slice()) {
            (true, [target]) => translations::COMMANDS_TAG_ADD_SUCCESS_SINGLE
                .message([tag_text, target.display_name()]),
            (true, _) => {
                translations::COMMANDS_TAG_ADD_SUCCESS_MULTIPLE.message([tag_text, targets.len().into()])
            }
            (false, [target]) => translations::COMMANDS_TAG_REMOVE_SUCCESS_SINGLE
                .message([tag_text, target.display_name()]),
            (false, _) => translations::COMMANDS_TAG_REMOVE_SUCCESS_MULTIPLE
                .message([tag_text, targets.len().into()]),
        };
        context.send_success(&message);
        Ok(changed as i32)
    }
}

impl CommandExecutor<(((), EntitySelector), ())> for TagCommandExecutor {
    fn execute(
        &self,
        args: (((), EntitySelector), ()),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((), targets), ()) = args;
        let targets = targets.entities(context)?;

        let tags: BTreeSet<String> = targets.iter().flat_map(|target| target.tags()).collect();
        let list = TextComponent::join(tags.iter().map(TextComponent::plain));
        let message = match (targets.as_slice(), tags.is_empty()) {
            ([target], true) => {
                translations::COMMANDS_TAG_LIST_SINGLE_EMPTY.message([target.display_name()])
            }
            ([target], false) => translations::COMMANDS_TAG_LIST_SINGLE_SUCCESS
                .message([target.display_name(), tags.len().into(), list]),
            (_, true) => {
                translations::COMMANDS_TAG_LIST_MULTIPLE_EMPTY.message([targets.len().into()])
            }
            (_, false) => translations::COMMANDS_TAG_LIST_MULTIPLE_SUCCESS
                .message([targets.len().into(), tags.len().into(), list]),
        };
        context.send_success(&message);
        Ok(tags.len() as i32)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestServer;

    #[test]
    fn adds_lists_and_removes_tags() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        server.player("Alex");

        assert_eq!(server.run_as(&steve, "tag @s add builder").ok(), Some(1));
        assert!(server.run_as(&steve, "tag @s add builder").is_err());
        assert_eq!(server.run_as(&steve, "tag @a add team_a").ok(), Some(2));
        server.messages(&steve);

        assert_eq!(server.run_as(&steve, "tag @s list").ok(), Some(2));
        assert_eq!(
            server.messages(&steve),
            vec!["Steve has 2 tags: builder, team_a"]
        );

        assert_eq!(server.run_as(&steve, "tag @a remove builder").ok(), Some(1));
        assert!(!steve.has_tag("builder"));
        assert!(server.run_as(&steve, "tag @a remove builder").is_err());
    }
}
