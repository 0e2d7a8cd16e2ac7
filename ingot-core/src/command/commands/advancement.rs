//! Handler for the "advancement" command.
use std::sync::Arc;

use ingot_utils::Identifier;
use ingot_utils::text::TextComponent;
use ingot_utils::translations::{self, Translation};

use crate::advancement::{Advancement, AdvancementMode, AdvancementProgress};
use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::identifier::IdentifierArgument;
use crate::command::arguments::string::StringArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandParserExecutor, CommandResult,
    argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::entity::Entity;

/// Handler for the "advancement" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["advancement"],
        "Gives or takes advancements from players.",
        "minecraft:command.advancement",
    )
    .then(literal("grant").then(targets(Action::Grant)))
    .then(literal("revoke").then(targets(Action::Revoke)))
}

fn targets(action: Action) -> impl CommandParserExecutor<((), ())> + Send + Sync {
    argument("targets", EntityArgument::players())
        .then(
            literal("only").then(
                argument("advancement", IdentifierArgument)
                    .executes(Select(action, AdvancementMode::Only))
                    .then(argument("criterion", StringArgument::Word).executes(Criterion(action))),
            ),
        )
        .then(literal("from").then(
            argument("advancement", IdentifierArgument).executes(Select(action, AdvancementMode::From)),
        ))
        .then(literal("until").then(
            argument("advancement", IdentifierArgument).executes(Select(action, AdvancementMode::Until)),
        ))
        .then(literal("through").then(
            argument("advancement", IdentifierArgument)
                .executes(Select(action, AdvancementMode::Through)),
        ))
        .then(literal("everything").executes(Everything(action)))
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Grant,
    Revoke,
}

impl Action {
    fn perform(self, progress: &mut AdvancementProgress, advancement: &Advancement) -> bool {
        match self {
            Action::Grant => progress.grant_all(advancement),
            Action::Revoke => progress.revoke_all(advancement),
        }
    }

    fn perform_criterion(
        self,
        progress: &mut AdvancementProgress,
        advancement: &Advancement,
        criterion: &str,
    ) -> bool {
        match self {
            Action::Grant => progress.award(advancement, criterion),
            Action::Revoke => progress.revoke(advancement, criterion),
        }
    }

    /// Keys for one/many advancements to one/many players.
    const fn keys(self, success: bool) -> [Translation; 4] {
        match (self, success) {
            (Action::Grant, true) => [
                translations::COMMANDS_ADVANCEMENT_GRANT_ONE_TO_ONE_SUCCESS,
                translations::COMMANDS_ADVANCEMENT_GRANT_ONE_TO_MANY_SUCCESS,
                translations::COMMANDS_ADVANCEMENT_GRANT_MANY_TO_ONE_SUCCESS,
                translations::COMMANDS_ADVANCEMENT_GRANT_MANY_TO_MANY_SUCCESS,
            ],
            (Action::Grant, false) => [
                translations::COMMANDS_ADVANCEMENT_GRANT_ONE_TO_ONE_FAILURE,
                translations::COMMANDS_ADVANCEMENT_GRANT_ONE_TO_MANY_FAILURE,
                translations::COMMANDS_ADVANCEMENT_GRANT_MANY_TO_ONE_FAILURE,
                translations::COMMANDS_ADVANCEMENT_GRANT_MANY_TO_MANY_FAILURE,
            ],
            (Action::Revoke, true) => [
                translations::COMMANDS_ADVANCEMENT_REVOKE_ONE_TO_ONE_SUCCESS,
                translations::COMMANDS_ADVANCEMENT_REVOKE_ONE_TO_MANY_SUCCESS,
                translations::COMMANDS_ADVANCEMENT_REVOKE_MANY_TO_ONE_SUCCESS,
                translations::COMMANDS_ADVANCEMENT_REVOKE_MANY_TO_MANY_SUCCESS,
            ],
            (Action::Revoke, false) => [
                translations::COMMANDS_ADVANCEMENT_REVOKE_ONE_TO_ONE_FAILURE,
                translations::COMMANDS_ADVANCEMENT_REVOKE_ONE_TO_MANY_FAILURE,
                translations::COMMANDS_ADVANCEMENT_REVOKE_MANY_TO_ONE_FAILURE,
                translations::COMMANDS_ADVANCEMENT_REVOKE_MANY_TO_MANY_FAILURE,
            ],
        }
    }

    /// Keys for a single criterion to one/many players.
    const fn criterion_keys(self, success: bool) -> [Translation; 2] {
        match (self, success) {
            (Action::Grant, true) => [
                translations::COMMANDS_ADVANCEMENT_GRANT_CRITERION_TO_ONE_SUCCESS,
                translations::COMMANDS_ADVANCEMENT_GRANT_CRITERION_TO_MANY_SUCCESS,
            ],
            (Action::Grant, false) => [
                translations::COMMANDS_ADVANCEMENT_GRANT_CRITERION_TO_ONE_FAILURE,
                translations::COMMANDS_ADVANCEMENT_GRANT_CRITERION_TO_MANY_FAILURE,
            ],
            (Action::Revoke, true) => [
                translations::COMMANDS_ADVANCEMENT_REVOKE_CRITERION_TO_ONE_SUCCESS,
                translations::COMMANDS_ADVANCEMENT_REVOKE_CRITERION_TO_MANY_SUCCESS,
            ],
            (Action::Revoke, false) => [
                translations::COMMANDS_ADVANCEMENT_REVOKE_CRITERION_TO_ONE_FAILURE,
                translations::COMMANDS_ADVANCEMENT_REVOKE_CRITERION_TO_MANY_FAILURE,
            ],
        }
    }

    /// Applies the action to every player and advancement, failing if nothing changed.
    fn apply(
        self,
        targets: &[Arc<Entity>],
        advancements: &[&Advancement],
        context: &CommandContext,
    ) -> CommandResult {
        let mut changed = 0;
        for target in targets {
            let Some(player) = target.player() else {
                continue;
            };
            let mut progress = player.advancements.lock();
            for advancement in advancements {
                if self.perform(&mut progress, advancement) {
                    changed += 1;
                }
            }
        }

        let message = |keys: [Translation; 4]| match (advancements, targets) {
            ([advancement], [target]) => {
                keys[0].message([display(advancement), target.display_name()])
            }
            ([advancement], _) => keys[1].message([display(advancement), targets.len().into()]),
            (_, [target]) => keys[2].message([advancements.len().into(), target.display_name()]),
            _ => keys[3].message([advancements.len().into(), targets.len().into()]),
        };

        if changed == 0 {
            return Err(CommandError::CommandFailed(Box::new(message(self.keys(false)))));
        }
        context.send_success(&message(self.keys(true)));
        Ok(changed)
    }
}

fn display(advancement: &Advancement) -> TextComponent {
    TextComponent::plain(format!("[{}]", advancement.id))
}

fn find<'a>(context: &'a CommandContext, id: &Identifier) -> Result<&'a Advancement, CommandError> {
    context.server.advancements.get(id).ok_or_else(|| {
        CommandError::translated(
            translations::ADVANCEMENT_ADVANCEMENTNOTFOUND,
            [TextComponent::plain(id.to_string())],
        )
    })
}

struct Everything(Action);

impl CommandExecutor<((((), ()), EntitySelector), ())> for Everything {
    fn execute(
        &self,
        args: ((((), ()), EntitySelector), ()),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((), ()), targets), ()) = args;
        let targets = targets.entities(context)?;
        let advancements = context.server.advancements.everything();
        self.0.apply(&targets, &advancements, context)
    }
}

struct Select(Action, AdvancementMode);

impl CommandExecutor<(((((), ()), EntitySelector), ()), Identifier)> for Select {
    fn execute(
        &self,
        args: (((((), ()), EntitySelector), ()), Identifier),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((((), ()), targets), ()), id) = args;
        let targets = targets.entities(context)?;
        let advancement = find(context, &id)?;
        let advancements = context.server.advancements.select(advancement, self.1);
        self.0.apply(&targets, &advancements, context)
    }
}

struct Criterion(Action);

impl CommandExecutor<((((((), ()), EntitySelector), ()), Identifier), String)> for Criterion {
    fn execute(
        &self,
        args: ((((((), ()), EntitySelector), ()), Identifier), String),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((((), ()), targets), ()), id), criterion) = args;
        let targets = targets.entities(context)?;
        let advancement = find(context, &id)?;
        if !advancement.criteria.contains(&criterion) {
            return Err(CommandError::translated(
                translations::COMMANDS_ADVANCEMENT_CRITERIONNOTFOUND,
                [display(advancement), TextComponent::plain(criterion)],
            ));
        }

        let mut changed = 0;
        for target in &targets {
            let Some(player) = target.player() else {
                continue;
            };
            if self
                .0
                .perform_criterion(&mut player.advancements.lock(), advancement, &criterion)
            {
                changed += 1;
            }
        }

        let message = |[one, many]: [Translation; 2]| match targets.as_slice() {
            [target] => one.message([
                TextComponent::plain(criterion.clone()),
                display(advancement),
                target.display_name(),
            ]),
            _ => many.message([
                TextComponent::plain(criterion.clone()),
                display(advancement),
                targets.len().into(),
            ]),
        };

        if changed == 0 {
            return Err(CommandError::CommandFailed(Box::new(message(
                self.0.criterion_keys(false),
            ))));
        }
        context.send_success(&message(self.0.criterion_keys(true)));
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::Identifier;

    use crate::test_support::TestServer;

    #[test]
    fn grants_and_revokes_with_modes() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let tree = &server.server.advancements;
        let done = |path: &'static str| {
            let advancement = tree.get(&Identifier::vanilla_static(path)).expect("exists");
            steve
                .player()
                .expect("player")
                .advancements
                .lock()
                .is_done(advancement)
        };

        assert_eq!(
            server.run_as(&steve, "advancement grant @s only story/root").ok(),
            Some(1)
        );
        assert_eq!(
            server.messages(&steve),
            vec!["Granted the advancement [minecraft:story/root] to Steve"]
        );
        assert!(server.run_console("advancement grant Steve only story/root").is_err());

        assert_eq!(server.console("advancement grant Steve until story/iron_tools"), 4);
        assert!(done("story/smelt_iron"));
        assert!(!done("story/mine_diamond"));

        assert_eq!(server.console("advancement revoke Steve from story/smelt_iron"), 2);
        assert!(!done("story/iron_tools"));
        assert!(done("story/upgrade_tools"));

        assert_eq!(server.console("advancement revoke Steve everything"), 3);
        assert!(server.run_console("advancement revoke Steve everything").is_err());
    }

    #[test]
    fn awards_single_criteria() {
        let server = TestServer::new();
        server.player("Steve");
        server.player("Alex");

        assert_eq!(
            server.console("advancement grant @a only story/obtain_armor iron_boots"),
            2
        );
        assert!(server.run_console("advancement grant @a only story/obtain_armor iron_boots").is_err());
        assert!(server.run_console("advancement grant @a only story/obtain_armor gold_boots").is_err());
        assert_eq!(
            server.console("advancement revoke Alex only story/obtain_armor iron_boots"),
            1
        );
        assert!(server.run_console("advancement grant @a only story/missing").is_err());
    }
}
