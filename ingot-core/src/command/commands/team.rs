//! Handler for the "team" command.
use ingot_utils::text::{NamedColor, TextComponent};
use ingot_utils::translations;

use crate::command::arguments::boolean::BoolArgument;
use crate::command::arguments::choice::ChoiceArgument;
use crate::command::arguments::color::ColorArgument;
use crate::command::arguments::score_holder::{ScoreHolderArgument, ScoreHolders};
use crate::command::arguments::team::TeamArgument;
use crate::command::arguments::text_component::TextComponentArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::scoreboard::Scoreboard;
use crate::scoreboard::team::{CollisionRule, PlayerTeam, Visibility};

/// Handler for the "team" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["team"],
        "Controls teams.",
        "minecraft:command.team",
    )
    .then(
        literal("list")
            .executes(ListTeams)
            .then(argument("team", TeamArgument).executes(TeamAction::List)),
    )
    .then(
        literal("add").then(
            argument("team", TeamArgument)
                .executes(TeamAction::Add)
                .then(argument("displayName", TextComponentArgument).executes(TeamAction::Add)),
        ),
    )
    .then(literal("remove").then(argument("team", TeamArgument).executes(TeamAction::Remove)))
    .then(literal("empty").then(argument("team", TeamArgument).executes(TeamAction::Empty)))
    .then(
        literal("join").then(
            argument("team", TeamArgument)
                .executes(TeamAction::Join)
                .then(argument("members", ScoreHolderArgument::multiple()).executes(TeamAction::Join)),
        ),
    )
    .then(
        literal("leave")
            .then(argument("members", ScoreHolderArgument::multiple()).executes(LeaveTeam)),
    )
    .then(
        literal("modify").then(
            argument("team", TeamArgument)
                .then(
                    literal("displayName").then(
                        argument("displayName", TextComponentArgument)
                            .executes(ModifyText::DisplayName),
                    ),
                )
                .then(literal("color").then(argument("value", ColorArgument).executes(ModifyColor)))
                .then(
                    literal("friendlyFire")
                        .then(argument("allowed", BoolArgument).executes(ModifyFlag::FriendlyFire)),
                )
                .then(
                    literal("seeFriendlyInvisibles").then(
                        argument("allowed", BoolArgument)
                            .executes(ModifyFlag::SeeFriendlyInvisibles),
                    ),
                )
                .then(
                    literal("nametagVisibility").then(
                        argument("visibility", ChoiceArgument::new(Visibility::ALL))
                            .executes(ModifyVisibility::NameTag),
                    ),
                )
                .then(
                    literal("deathMessageVisibility").then(
                        argument("visibility", ChoiceArgument::new(Visibility::ALL))
                            .executes(ModifyVisibility::DeathMessage),
                    ),
                )
                .then(
                    literal("collisionRule").then(
                        argument("rule", ChoiceArgument::new(CollisionRule::ALL))
                            .executes(ModifyCollision),
                    ),
                )
                .then(
                    literal("prefix")
                        .then(argument("prefix", TextComponentArgument).executes(ModifyText::Prefix)),
                )
                .then(
                    literal("suffix")
                        .then(argument("suffix", TextComponentArgument).executes(ModifyText::Suffix)),
                ),
        ),
    )
}

fn team<'a>(scoreboard: &'a Scoreboard, name: &str) -> Result<&'a PlayerTeam, CommandError> {
    scoreboard
        .team(name)
        .ok_or_else(|| CommandError::translated(translations::TEAM_NOTFOUND, [name.into()]))
}

fn team_mut<'a>(scoreboard: &'a mut Scoreboard, name: &str) -> Result<&'a mut PlayerTeam, CommandError> {
    scoreboard
        .team_mut(name)
        .ok_or_else(|| CommandError::translated(translations::TEAM_NOTFOUND, [name.into()]))
}

struct ListTeams;

impl CommandExecutor<((), ())> for ListTeams {
    fn execute(&self, _args: ((), ()), context: &mut CommandContext) -> CommandResult {
        let names: Vec<TextComponent> = context
            .server
            .scoreboard
            .lock()
            .teams()
            .map(PlayerTeam::formatted_display_name)
            .collect();
        let count = names.len();
        if names.is_empty() {
            context.send_success(&translations::COMMANDS_TEAM_LIST_TEAMS_EMPTY.msg());
        } else {
            context.send_success(
                &translations::COMMANDS_TEAM_LIST_TEAMS_SUCCESS
                    .message([count.into(), TextComponent::join(names)]),
            );
        }
        Ok(count as i32)
    }
}

enum TeamAction {
    List,
    Add,
    Remove,
    Empty,
    Join,
}

impl TeamAction {
    fn add(name: &str, display_name: TextComponent, context: &CommandContext) -> CommandResult {
        let mut scoreboard = context.server.scoreboard.lock();
        let Some(team) = scoreboard.add_team(name, display_name) else {
            return Err(CommandError::msg(translations::COMMANDS_TEAM_ADD_DUPLICATE));
        };
        let message = translations::COMMANDS_TEAM_ADD_SUCCESS.message([team.formatted_display_name()]);
        let count = scoreboard.teams().count();
        drop(scoreboard);

        context.send_success(&message);
        Ok(count as i32)
    }

    fn join(name: &str, holders: &[String], context: &CommandContext) -> CommandResult {
        let mut scoreboard = context.server.scoreboard.lock();
        let team_name = team(&scoreboard, name)?.formatted_display_name();
        for holder in holders {
            scoreboard.join_team(holder, name);
        }
        drop(scoreboard);

        let message = match holders {
            [holder] => translations::COMMANDS_TEAM_JOIN_SUCCESS_SINGLE
                .message([holder.as_str().into(), team_name]),
            _ => translations::COMMANDS_TEAM_JOIN_SUCCESS_MULTIPLE
                .message([holders.len().into(), team_name]),
        };
        context.send_success(&message);
        Ok(holders.len() as i32)
    }
}

impl CommandExecutor<(((), ()), String)> for TeamAction {
    fn execute(&self, args: (((), ()), String), context: &mut CommandContext) -> CommandResult {
        let (((), ()), name) = args;
        match self {
            TeamAction::List => {
                let (team_name, members) = {
                    let scoreboard = context.server.scoreboard.lock();
                    let team = team(&scoreboard, &name)?;
                    (team.formatted_display_name(), team.members())
                };
                if members.is_empty() {
                    context.send_success(
                        &translations::COMMANDS_TEAM_LIST_MEMBERS_EMPTY.message([team_name]),
                    );
                } else {
                    context.send_success(&translations::COMMANDS_TEAM_LIST_MEMBERS_SUCCESS.message([
                        team_name,
                        members.len().into(),
                        TextComponent::join(members.iter().map(|member| member.as_str().into())),
                    ]));
                }
                Ok(members.len() as i32)
            }
            TeamAction::Add => Self::add(&name, TextComponent::plain(name.clone()), context),
            TeamAction::Remove => {
                let mut scoreboard = context.server.scoreboard.lock();
                let team_name = team(&scoreboard, &name)?.formatted_display_name();
                scoreboard.remove_team(&name);
                let count = scoreboard.teams().count();
                drop(scoreboard);

                context.send_success(&translations::COMMANDS_TEAM_REMOVE_SUCCESS.message([team_name]));
                Ok(count as i32)
            }
            TeamAction::Empty => {
                let mut scoreboard = context.server.scoreboard.lock();
                let team_name = team(&scoreboard, &name)?.formatted_display_name();
                let removed = scoreboard.empty_team(&name);
                drop(scoreboard);

                if removed == 0 {
                    return Err(CommandError::msg(translations::COMMANDS_TEAM_EMPTY_UNCHANGED));
                }
                context.send_success(
                    &translations::COMMANDS_TEAM_EMPTY_SUCCESS.message([removed.into(), team_name]),
                );
                Ok(removed as i32)
            }
            TeamAction::Join => {
                let holder = context.require_entity()?.scoreboard_name();
                Self::join(&name, &[holder], context)
            }
        }
    }
}

impl CommandExecutor<((((), ()), String), TextComponent)> for TeamAction {
    fn execute(
        &self,
        args: ((((), ()), String), TextComponent),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((), ()), name), display_name) = args;
        Self::add(&name, display_name, context)
    }
}

impl CommandExecutor<((((), ()), String), ScoreHolders)> for TeamAction {
    fn execute(
        &self,
        args: ((((), ()), String), ScoreHolders),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((), ()), name), members) = args;
        let holders = members.holders(context)?;
        Self::join(&name, &holders, context)
    }
}

struct LeaveTeam;

impl CommandExecutor<(((), ()), ScoreHolders)> for LeaveTeam {
    fn execute(&self, args: (((), ()), ScoreHolders), context: &mut CommandContext) -> CommandResult {
        let (((), ()), members) = args;
        let holders = members.holders(context)?;
        {
            let mut scoreboard = context.server.scoreboard.lock();
            for holder in &holders {
                scoreboard.leave_team(holder);
            }
        }

        let message = match holders.as_slice() {
            [holder] => {
                translations::COMMANDS_TEAM_LEAVE_SUCCESS_SINGLE.message([holder.as_str().into()])
            }
            _ => translations::COMMANDS_TEAM_LEAVE_SUCCESS_MULTIPLE.message([holders.len().into()]),
        };
        context.send_success(&message);
        Ok(holders.len() as i32)
    }
}

type ModifyArgs<T> = (((((), ()), String), ()), T);

enum ModifyText {
    DisplayName,
    Prefix,
    Suffix,
}

impl CommandExecutor<ModifyArgs<TextComponent>> for ModifyText {
    fn execute(&self, args: ModifyArgs<TextComponent>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), name), ()), text) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        let team = team_mut(&mut scoreboard, &name)?;
        let message = match self {
            ModifyText::DisplayName => {
                if team.display_name == text {
                    return Err(CommandError::msg(translations::COMMANDS_TEAM_OPTION_NAME_UNCHANGED));
                }
                team.display_name = text;
                translations::COMMANDS_TEAM_OPTION_NAME_SUCCESS
                    .message([team.formatted_display_name()])
            }
            ModifyText::Prefix => {
                team.prefix = text.clone();
                translations::COMMANDS_TEAM_OPTION_PREFIX_SUCCESS.message([text])
            }
            ModifyText::Suffix => {
                team.suffix = text.clone();
                translations::COMMANDS_TEAM_OPTION_SUFFIX_SUCCESS.message([text])
            }
        };
        drop(scoreboard);

        context.send_success(&message);
        Ok(0)
    }
}

struct ModifyColor;

impl CommandExecutor<ModifyArgs<Option<NamedColor>>> for ModifyColor {
    fn execute(
        &self,
        args: ModifyArgs<Option<NamedColor>>,
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((((), ()), name), ()), color) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        let team = team_mut(&mut scoreboard, &name)?;
        if team.color == color {
            return Err(CommandError::msg(translations::COMMANDS_TEAM_OPTION_COLOR_UNCHANGED));
        }
        team.color = color;
        let message = translations::COMMANDS_TEAM_OPTION_COLOR_SUCCESS.message([
            team.formatted_display_name(),
            color.map_or("reset", NamedColor::name).into(),
        ]);
        drop(scoreboard);

        context.send_success(&message);
        Ok(0)
    }
}

enum ModifyFlag {
    FriendlyFire,
    SeeFriendlyInvisibles,
}

impl CommandExecutor<ModifyArgs<bool>> for ModifyFlag {
    fn execute(&self, args: ModifyArgs<bool>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), name), ()), value) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        let team = team_mut(&mut scoreboard, &name)?;
        let (field, enabled, disabled, already_enabled, already_disabled) = match self {
            ModifyFlag::FriendlyFire => (
                &mut team.friendly_fire,
                translations::COMMANDS_TEAM_OPTION_FRIENDLYFIRE_ENABLED,
                translations::COMMANDS_TEAM_OPTION_FRIENDLYFIRE_DISABLED,
                translations::COMMANDS_TEAM_OPTION_FRIENDLYFIRE_ALREADYENABLED,
                translations::COMMANDS_TEAM_OPTION_FRIENDLYFIRE_ALREADYDISABLED,
            ),
            ModifyFlag::SeeFriendlyInvisibles => (
                &mut team.see_friendly_invisibles,
                translations::COMMANDS_TEAM_OPTION_SEEFRIENDLYINVISIBLES_ENABLED,
                translations::COMMANDS_TEAM_OPTION_SEEFRIENDLYINVISIBLES_DISABLED,
                translations::COMMANDS_TEAM_OPTION_SEEFRIENDLYINVISIBLES_ALREADYENABLED,
                translations::COMMANDS_TEAM_OPTION_SEEFRIENDLYINVISIBLES_ALREADYDISABLED,
            ),
        };
        if *field == value {
            return Err(CommandError::msg(if value {
                already_enabled
            } else {
                already_disabled
            }));
        }
        *field = value;
        let message = (if value { enabled } else { disabled }).message([team.formatted_display_name()]);
        drop(scoreboard);

        context.send_success(&message);
        Ok(0)
    }
}

enum ModifyVisibility {
    NameTag,
    DeathMessage,
}

impl CommandExecutor<ModifyArgs<Visibility>> for ModifyVisibility {
    fn execute(&self, args: ModifyArgs<Visibility>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), name), ()), visibility) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        let team = team_mut(&mut scoreboard, &name)?;
        let (field, unchanged, success) = match self {
            ModifyVisibility::NameTag => (
                &mut team.name_tag_visibility,
                translations::COMMANDS_TEAM_OPTION_NAMETAGVISIBILITY_UNCHANGED,
                translations::COMMANDS_TEAM_OPTION_NAMETAGVISIBILITY_SUCCESS,
            ),
            ModifyVisibility::DeathMessage => (
                &mut team.death_message_visibility,
                translations::COMMANDS_TEAM_OPTION_DEATHMESSAGEVISIBILITY_UNCHANGED,
                translations::COMMANDS_TEAM_OPTION_DEATHMESSAGEVISIBILITY_SUCCESS,
            ),
        };
        if *field == visibility {
            return Err(CommandError::msg(unchanged));
        }
        *field = visibility;
        let message = success.message([team.formatted_display_name(), visibility.name().into()]);
        drop(scoreboard);

        context.send_success(&message);
        Ok(0)
    }
}

struct ModifyCollision;

impl CommandExecutor<ModifyArgs<CollisionRule>> for ModifyCollision {
    fn execute(&self, args: ModifyArgs<CollisionRule>, context: &mut CommandContext) -> CommandResult {
        let (((((), ()), name), ()), rule) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        let team = team_mut(&mut scoreboard, &name)?;
        if team.collision_rule == rule {
            return Err(CommandError::msg(
                translations::COMMANDS_TEAM_OPTION_COLLISIONRULE_UNCHANGED,
            ));
        }
        team.collision_rule = rule;
        let message = translations::COMMANDS_TEAM_OPTION_COLLISIONRULE_SUCCESS
            .message([team.formatted_display_name(), rule.name().into()]);
        drop(scoreboard);

        context.send_success(&message);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::text::NamedColor;

    use crate::test_support::TestServer;

    #[test]
    fn manages_teams_and_members() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        server.player("Alex");

        assert_eq!(server.console("team add red"), 1);
        assert!(server.run_console("team add red").is_err());
        assert_eq!(server.console(r#"team add blue "Blue Team""#), 2);

        assert_eq!(server.run_as(&steve, "team join red").ok(), Some(1));
        assert_eq!(server.messages(&steve), vec!["Added Steve to team [red]"]);
        assert_eq!(server.console("team join blue @a"), 2);
        assert_eq!(server.console("team join blue Creeper"), 1);
        assert_eq!(server.console("team list blue"), 3);
        assert_eq!(server.console("team list red"), 0);

        assert_eq!(server.console("team leave Alex"), 1);
        assert_eq!(server.console("team empty blue"), 2);
        assert!(server.run_console("team empty blue").is_err());

        assert_eq!(server.console("team remove red"), 1);
        assert_eq!(server.console("team list"), 1);
        assert!(server.run_console("team list red").is_err());
    }

    #[test]
    fn modifies_team_options() {
        let server = TestServer::new();
        server.console("team add red");

        server.console("team modify red color red");
        assert!(server.run_console("team modify red color red").is_err());
        server.console("team modify red friendlyFire false");
        assert!(server.run_console("team modify red friendlyFire false").is_err());
        server.console("team modify red nametagVisibility hideForOtherTeams");
        server.console("team modify red collisionRule never");
        server.console(r#"team modify red prefix "[R] ""#);
        server.console(r#"team modify red displayName "Reds""#);

        let scoreboard = server.server.scoreboard.lock();
        let team = scoreboard.team("red").expect("team exists");
        assert_eq!(team.color, Some(NamedColor::Red));
        assert!(!team.friendly_fire);
        assert_eq!(team.prefix.to_plain(), "[R] ");
        assert_eq!(team.formatted_display_name().to_plain(), "[Reds]");
    }
}
