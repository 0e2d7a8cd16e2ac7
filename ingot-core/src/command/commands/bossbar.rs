//! Handler for the "bossbar" command.
use std::sync::Arc;

use ingot_utils::Identifier;
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::bossbar::{BossBarColor, BossBarOverlay, CustomBossEvent};
use crate::command::arguments::boolean::BoolArgument;
use crate::command::arguments::choice::ChoiceArgument;
use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::identifier::IdentifierArgument;
use crate::command::arguments::numbers::IntegerArgument;
use crate::command::arguments::text_component::TextComponentArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::entity::Entity;

/// Handler for the "bossbar" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["bossbar"],
        "Creates and manages boss bars.",
        "minecraft:command.bossbar",
    )
    .then(
        literal("add").then(
            argument("id", IdentifierArgument)
                .then(argument("name", TextComponentArgument).executes(AddExecutor)),
        ),
    )
    .then(literal("remove").then(argument("id", IdentifierArgument).executes(RemoveExecutor)))
    .then(literal("list").executes(ListExecutor))
    .then(
        literal("set").then(
            argument("id", IdentifierArgument)
                .then(
                    literal("name")
                        .then(argument("name", TextComponentArgument).executes(SetProperty)),
                )
                .then(
                    literal("color").then(
                        argument("color", ChoiceArgument::new(BossBarColor::ALL))
                            .executes(SetProperty),
                    ),
                )
                .then(
                    literal("style").then(
                        argument("style", ChoiceArgument::new(BossBarOverlay::ALL))
                            .executes(SetProperty),
                    ),
                )
                .then(
                    literal("value").then(
                        argument("value", IntegerArgument::at_least(0))
                            .executes(SetNumber::Value),
                    ),
                )
                .then(
                    literal("max").then(
                        argument("max", IntegerArgument::at_least(1)).executes(SetNumber::Max),
                    ),
                )
                .then(
                    literal("visible")
                        .then(argument("visible", BoolArgument).executes(SetProperty)),
                )
                .then(
                    literal("players")
                        .executes(SetPlayers)
                        .then(argument("targets", EntityArgument::players()).executes(SetPlayers)),
                ),
        ),
    )
    .then(
        literal("get").then(
            argument("id", IdentifierArgument)
                .then(literal("value").executes(Query::Value))
                .then(literal("max").executes(Query::Max))
                .then(literal("visible").executes(Query::Visible))
                .then(literal("players").executes(Query::Players)),
        ),
    )
}

fn unknown(id: &Identifier) -> CommandError {
    CommandError::translated(
        translations::COMMANDS_BOSSBAR_UNKNOWN,
        [TextComponent::plain(id.to_string())],
    )
}

/// Runs `f` on the bar with the given id while the bar registry is locked.
fn with_bar<R>(
    context: &CommandContext,
    id: &Identifier,
    f: impl FnOnce(&mut CustomBossEvent) -> Result<R, CommandError>,
) -> Result<R, CommandError> {
    let mut bossbars = context.server.bossbars.lock();
    let bar = bossbars.get_mut(id).ok_or_else(|| unknown(id))?;
    f(bar)
}

struct AddExecutor;

impl CommandExecutor<((((), ()), Identifier), TextComponent)> for AddExecutor {
    fn execute(
        &self,
        args: ((((), ()), Identifier), TextComponent),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((), ()), id), name) = args;
        let mut bossbars = context.server.bossbars.lock();
        let Some(bar) = bossbars.create(id.clone(), name) else {
            return Err(CommandError::translated(
                translations::COMMANDS_BOSSBAR_CREATE_FAILED,
                [TextComponent::plain(id.to_string())],
            ));
        };
        let message = translations::COMMANDS_BOSSBAR_CREATE_SUCCESS.message([bar.display_name()]);
        let count = bossbars.iter().count();
        drop(bossbars);

        context.send_success(&message);
        Ok(count as i32)
    }
}

struct RemoveExecutor;

impl CommandExecutor<(((), ()), Identifier)> for RemoveExecutor {
    fn execute(&self, args: (((), ()), Identifier), context: &mut CommandContext) -> CommandResult {
        let (((), ()), id) = args;
        let mut bossbars = context.server.bossbars.lock();
        let bar = bossbars.remove(&id).ok_or_else(|| unknown(&id))?;
        let count = bossbars.iter().count();
        drop(bossbars);

        context.send_success(
            &translations::COMMANDS_BOSSBAR_REMOVE_SUCCESS.message([bar.display_name()]),
        );
        Ok(count as i32)
    }
}

struct ListExecutor;

impl CommandExecutor<((), ())> for ListExecutor {
    fn execute(&self, _args: ((), ()), context: &mut CommandContext) -> CommandResult {
        let names: Vec<TextComponent> = context
            .server
            .bossbars
            .lock()
            .iter()
            .map(CustomBossEvent::display_name)
            .collect();

        let count = names.len();
        if names.is_empty() {
            context.send_success(&translations::COMMANDS_BOSSBAR_LIST_BARS_NONE.msg());
        } else {
            context.send_success(
                &translations::COMMANDS_BOSSBAR_LIST_BARS_SOME
                    .message([count.into(), TextComponent::join(names)]),
            );
        }
        Ok(count as i32)
    }
}

type SetArgs<T> = (((((), ()), Identifier), ()), T);

struct SetProperty;

impl CommandExecutor<SetArgs<TextComponent>> for SetProperty {
    fn execute(&self, args: SetArgs<TextComponent>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), id), ()), name) = args;
        let message = with_bar(context, &id, |bar| {
            if bar.name == name {
                return Err(CommandError::msg(translations::COMMANDS_BOSSBAR_SET_NAME_UNCHANGED));
            }
            bar.name = name;
            Ok(translations::COMMANDS_BOSSBAR_SET_NAME_SUCCESS.message([bar.display_name()]))
        })?;
        context.send_success(&message);
        Ok(0)
    }
}

impl CommandExecutor<SetArgs<BossBarColor>> for SetProperty {
    fn execute(&self, args: SetArgs<BossBarColor>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), id), ()), color) = args;
        let message = with_bar(context, &id, |bar| {
            if bar.color == color {
                return Err(CommandError::msg(translations::COMMANDS_BOSSBAR_SET_COLOR_UNCHANGED));
            }
            bar.color = color;
            Ok(translations::COMMANDS_BOSSBAR_SET_COLOR_SUCCESS.message([bar.display_name()]))
        })?;
        context.send_success(&message);
        Ok(0)
    }
}

impl CommandExecutor<SetArgs<BossBarOverlay>> for SetProperty {
    fn execute(&self, args: SetArgs<BossBarOverlay>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), id), ()), overlay) = args;
        let message = with_bar(context, &id, |bar| {
            if bar.overlay == overlay {
                return Err(CommandError::msg(translations::COMMANDS_BOSSBAR_SET_STYLE_UNCHANGED));
            }
            bar.overlay = overlay;
            Ok(translations::COMMANDS_BOSSBAR_SET_STYLE_SUCCESS.message([bar.display_name()]))
        })?;
        context.send_success(&message);
        Ok(0)
    }
}

impl CommandExecutor<SetArgs<bool>> for SetProperty {
    fn execute(&self, args: SetArgs<bool>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), id), ()), visible) = args;
        let message = with_bar(context, &id, |bar| {
            if bar.visible == visible {
                return Err(CommandError::msg(if visible {
                    translations::COMMANDS_BOSSBAR_SET_VISIBILITY_UNCHANGED_VISIBLE
                } else {
                    translations::COMMANDS_BOSSBAR_SET_VISIBILITY_UNCHANGED_HIDDEN
                }));
            }
            bar.visible = visible;
            let translation = if visible {
                translations::COMMANDS_BOSSBAR_SET_VISIBLE_SUCCESS_VISIBLE
            } else {
                translations::COMMANDS_BOSSBAR_SET_VISIBLE_SUCCESS_HIDDEN
            };
            Ok(translation.message([bar.display_name()]))
        })?;
        context.send_success(&message);
        Ok(0)
    }
}

enum SetNumber {
    Value,
    Max,
}

impl CommandExecutor<SetArgs<i32>> for SetNumber {
    fn execute(&self, args: SetArgs<i32>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), id), ()), value) = args;
        let message = with_bar(context, &id, |bar| {
            let (field, unchanged, success) = match self {
                SetNumber::Value => (
                    &mut bar.value,
                    translations::COMMANDS_BOSSBAR_SET_VALUE_UNCHANGED,
                    translations::COMMANDS_BOSSBAR_SET_VALUE_SUCCESS,
                ),
                SetNumber::Max => (
                    &mut bar.max,
                    translations::COMMANDS_BOSSBAR_SET_MAX_UNCHANGED,
                    translations::COMMANDS_BOSSBAR_SET_MAX_SUCCESS,
                ),
            };
            if *field == value {
                return Err(CommandError::msg(unchanged));
            }
            *field = value;
            Ok(success.message([bar.display_name(), value.into()]))
        })?;
        context.send_success(&message);
        Ok(value)
    }
}

struct SetPlayers;

impl SetPlayers {
    fn apply(
        id: &Identifier,
        players: &[Arc<Entity>],
        context: &CommandContext,
    ) -> CommandResult {
        let message = with_bar(context, id, |bar| {
            if !bar.set_players(players.iter().map(|player| player.uuid())) {
                return Err(CommandError::msg(translations::COMMANDS_BOSSBAR_SET_PLAYERS_UNCHANGED));
            }
            Ok(if players.is_empty() {
                translations::COMMANDS_BOSSBAR_SET_PLAYERS_SUCCESS_NONE.message([bar.display_name()])
            } else {
                translations::COMMANDS_BOSSBAR_SET_PLAYERS_SUCCESS_SOME.message([
                    bar.display_name(),
                    players.len().into(),
                    TextComponent::join(players.iter().map(|player| player.display_name())),
                ])
            })
        })?;
        context.send_success(&message);
        Ok(players.len() as i32)
    }
}

impl CommandExecutor<((((), ()), Identifier), ())> for SetPlayers {
    fn execute(
        &self,
        args: ((((), ()), Identifier), ()),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((), ()), id), ()) = args;
        Self::apply(&id, &[], context)
    }
}

impl CommandExecutor<SetArgs<EntitySelector>> for SetPlayers {
    fn execute(&self, args: SetArgs<EntitySelector>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), id), ()), targets) = args;
        let players = targets.find_entities(context)?;
        Self::apply(&id, &players, context)
    }
}

enum Query {
    Value,
    Max,
    Visible,
    Players,
}

impl CommandExecutor<((((), ()), Identifier), ())> for Query {
    fn execute(
        &self,
        args: ((((), ()), Identifier), ()),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((), ()), id), ()) = args;
        let bar = with_bar(context, &id, |bar| Ok(bar.clone()))?;
        let name = bar.display_name();

        let (message, result) = match self {
            Query::Value => (
                translations::COMMANDS_BOSSBAR_GET_VALUE.message([name, bar.value.into()]),
                bar.value,
            ),
            Query::Max => (
                translations::COMMANDS_BOSSBAR_GET_MAX.message([name, bar.max.into()]),
                bar.max,
            ),
            Query::Visible if bar.visible => (
                translations::COMMANDS_BOSSBAR_GET_VISIBLE_VISIBLE.message([name]),
                1,
            ),
            Query::Visible => (
                translations::COMMANDS_BOSSBAR_GET_VISIBLE_HIDDEN.message([name]),
                0,
            ),
            Query::Players => {
                let online: Vec<_> = bar
                    .players()
                    .iter()
                    .filter_map(|uuid| context.server.entity_by_uuid(*uuid))
                    .filter(|entity| entity.is_player())
                    .collect();
                let message = if online.is_empty() {
                    translations::COMMANDS_BOSSBAR_GET_PLAYERS_NONE.message([name])
                } else {
                    translations::COMMANDS_BOSSBAR_GET_PLAYERS_SOME.message([
                        name,
                        online.len().into(),
                        TextComponent::join(online.iter().map(|player| player.display_name())),
                    ])
                };
                (message, online.len() as i32)
            }
        };
        context.send_success(&message);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::Identifier;

    use crate::test_support::TestServer;

    #[test]
    fn creates_lists_and_removes_bars() {
        let server = TestServer::new();
        let steve = server.player("Steve");

        assert_eq!(server.console(r#"bossbar add raid "Raid""#), 1);
        assert!(server.run_console(r#"bossbar add raid "Again""#).is_err());
        assert_eq!(server.console(r#"bossbar add minecraft:boss {"text":"Boss"}"#), 2);

        assert_eq!(server.run_as(&steve, "bossbar list").ok(), Some(2));
        assert_eq!(
            server.messages(&steve),
            vec!["There are 2 custom bossbar(s) active: [Boss], [Raid]"]
        );

        assert_eq!(server.console("bossbar remove raid"), 1);
        assert!(server.run_console("bossbar remove raid").is_err());
    }

    #[test]
    fn sets_and_gets_properties() {
        let server = TestServer::new();
        server.player("Steve");
        server.player("Alex");
        server.console(r#"bossbar add raid "Raid""#);

        assert_eq!(server.console("bossbar set raid max 20"), 20);
        assert_eq!(server.console("bossbar set raid value 5"), 5);
        assert!(server.run_console("bossbar set raid value 5").is_err());
        assert_eq!(server.console("bossbar set raid color red"), 0);
        assert!(server.run_console("bossbar set raid color red").is_err());
        assert_eq!(server.console("bossbar set raid style notched_10"), 0);
        server.console("bossbar set raid visible false");

        assert_eq!(server.console("bossbar get raid value"), 5);
        assert_eq!(server.console("bossbar get raid max"), 20);
        assert_eq!(server.console("bossbar get raid visible"), 0);

        assert_eq!(server.console("bossbar set raid players @a"), 2);
        assert_eq!(server.console("bossbar get raid players"), 2);
        assert_eq!(server.console("bossbar set raid players"), 0);
        assert_eq!(server.console("bossbar get raid players"), 0);

        let bars = server.server.bossbars.lock();
        let bar = bars.get(&Identifier::vanilla_static("raid"));
        assert!(bar.is_some_and(|bar| (bar.progress() - 0.25).abs() < 1e-6));
    }

    #[test]
    fn unknown_bars_fail() {
        let server = TestServer::new();
        assert!(server.run_console("bossbar get missing value").is_err());
        assert!(server.run_console("bossbar set missing max 3").is_err());
    }
}
