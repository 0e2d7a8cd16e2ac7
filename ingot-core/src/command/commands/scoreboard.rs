//! Handler for the "scoreboard" command.
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::choice::ChoiceArgument;
use crate::command::arguments::display_slot::DisplaySlotArgument;
use crate::command::arguments::numbers::IntegerArgument;
use crate::command::arguments::objective::{ObjectiveArgument, ObjectiveCriteriaArgument};
use crate::command::arguments::operation::{OperationArgument, ScoreboardOperation};
use crate::command::arguments::score_holder::{ScoreHolderArgument, ScoreHolders};
use crate::command::arguments::text_component::TextComponentArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::scoreboard::{DisplaySlot, Objective, ObjectiveCriteria, RenderType};

/// Handler for the "scoreboard" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["scoreboard"],
        "Manages scoreboard objectives and scores.",
        "minecraft:command.scoreboard",
    )
    .then(
        literal("objectives")
            .then(literal("list").executes(ListObjectives))
            .then(
                literal("add").then(
                    argument("objective", ObjectiveArgument).then(
                        argument("criteria", ObjectiveCriteriaArgument)
                            .executes(AddObjective)
                            .then(
                                argument("displayName", TextComponentArgument)
                                    .executes(AddObjective),
                            ),
                    ),
                ),
            )
            .then(
                literal("remove")
                    .then(argument("objective", ObjectiveArgument).executes(RemoveObjective)),
            )
            .then(
                literal("setdisplay").then(
                    argument("slot", DisplaySlotArgument)
                        .executes(SetDisplay)
                        .then(argument("objective", ObjectiveArgument).executes(SetDisplay)),
                ),
            )
            .then(
                literal("modify").then(
                    argument("objective", ObjectiveArgument)
                        .then(
                            literal("displayname").then(
                                argument("displayName", TextComponentArgument)
                                    .executes(ModifyObjective),
                            ),
                        )
                        .then(
                            literal("rendertype").then(
                                argument("renderType", ChoiceArgument::new(RenderType::ALL))
                                    .executes(ModifyObjective),
                            ),
                        ),
                ),
            ),
    )
    .then(
        literal("players")
            .then(
                literal("list")
                    .executes(ListHolders)
                    .then(argument("target", ScoreHolderArgument::single()).executes(ListHolders)),
            )
            .then(
                literal("set").then(
                    argument("targets", ScoreHolderArgument::multiple()).then(
                        argument("objective", ObjectiveArgument).then(
                            argument("score", IntegerArgument::any()).executes(ChangeScore::Set),
                        ),
                    ),
                ),
            )
            .then(
                literal("add").then(
                    argument("targets", ScoreHolderArgument::multiple()).then(
                        argument("objective", ObjectiveArgument).then(
                            argument("score", IntegerArgument::at_least(0))
                                .executes(ChangeScore::Add),
                        ),
                    ),
                ),
            )
            .then(
                literal("remove").then(
                    argument("targets", ScoreHolderArgument::multiple()).then(
                        argument("objective", ObjectiveArgument).then(
                            argument("score", IntegerArgument::at_least(0))
                                .executes(ChangeScore::Remove),
                        ),
                    ),
                ),
            )
            .then(
                literal("reset").then(
                    argument("targets", ScoreHolderArgument::multiple())
                        .executes(ResetScores)
                        .then(argument("objective", ObjectiveArgument).executes(ResetScores)),
                ),
            )
            .then(
                literal("get").then(
                    argument("target", ScoreHolderArgument::single())
                        .then(argument("objective", ObjectiveArgument).executes(GetScore)),
                ),
            )
            .then(
                literal("enable").then(
                    argument("targets", ScoreHolderArgument::multiple())
                        .then(argument("objective", ObjectiveArgument).executes(EnableTrigger)),
                ),
            )
            .then(
                literal("operation").then(
                    argument("targets", ScoreHolderArgument::multiple()).then(
                        argument("targetObjective", ObjectiveArgument).then(
                            argument("operation", OperationArgument).then(
                                argument("source", ScoreHolderArgument::multiple()).then(
                                    argument("sourceObjective", ObjectiveArgument)
                                        .executes(ScoreOperation),
                                ),
                            ),
                        ),
                    ),
                ),
            ),
    )
}

/// `objectives` or `players` followed by the subcommand literal.
type Sub = (((), ()), ());

fn holder_text(holder: &str) -> TextComponent {
    TextComponent::plain(holder)
}

struct ListObjectives;

impl CommandExecutor<Sub> for ListObjectives {
    fn execute(&self, _args: Sub, context: &mut CommandContext) -> CommandResult {
        let names: Vec<TextComponent> = context
            .server
            .scoreboard
            .lock()
            .objectives()
            .map(Objective::formatted_display_name)
            .collect();
        let count = names.len();
        if names.is_empty() {
            context.send_success(&translations::COMMANDS_SCOREBOARD_OBJECTIVES_LIST_EMPTY.msg());
        } else {
            context.send_success(
                &translations::COMMANDS_SCOREBOARD_OBJECTIVES_LIST_SUCCESS
                    .message([count.into(), TextComponent::join(names)]),
            );
        }
        Ok(count as i32)
    }
}

struct AddObjective;

impl AddObjective {
    fn add(
        name: &str,
        criteria: ObjectiveCriteria,
        display_name: TextComponent,
        context: &CommandContext,
    ) -> CommandResult {
        let mut scoreboard = context.server.scoreboard.lock();
        let Some(objective) = scoreboard.add_objective(
            name,
            criteria,
            display_name,
            criteria.default_render_type(),
        ) else {
            return Err(CommandError::msg(
                translations::COMMANDS_SCOREBOARD_OBJECTIVES_ADD_DUPLICATE,
            ));
        };
        let message = translations::COMMANDS_SCOREBOARD_OBJECTIVES_ADD_SUCCESS
            .message([objective.formatted_display_name()]);
        let count = scoreboard.objectives().count();
        drop(scoreboard);

        context.send_success(&message);
        Ok(count as i32)
    }
}

impl CommandExecutor<((Sub, String), ObjectiveCriteria)> for AddObjective {
    fn execute(
        &self,
        args: ((Sub, String), ObjectiveCriteria),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((_, name), criteria) = args;
        Self::add(&name, criteria, TextComponent::plain(name.clone()), context)
    }
}

impl CommandExecutor<(((Sub, String), ObjectiveCriteria), TextComponent)> for AddObjective {
    fn execute(
        &self,
        args: (((Sub, String), ObjectiveCriteria), TextComponent),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((_, name), criteria), display_name) = args;
        Self::add(&name, criteria, display_name, context)
    }
}

struct RemoveObjective;

impl CommandExecutor<(Sub, String)> for RemoveObjective {
    fn execute(&self, args: (Sub, String), context: &mut CommandContext) -> CommandResult {
        let (_, name) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        let display_name = ObjectiveArgument::get(&scoreboard, &name)?.formatted_display_name();
        scoreboard.remove_objective(&name);
        let count = scoreboard.objectives().count();
        drop(scoreboard);

        context.send_success(
            &translations::COMMANDS_SCOREBOARD_OBJECTIVES_REMOVE_SUCCESS.message([display_name]),
        );
        Ok(count as i32)
    }
}

struct SetDisplay;

impl CommandExecutor<(Sub, DisplaySlot)> for SetDisplay {
    fn execute(&self, args: (Sub, DisplaySlot), context: &mut CommandContext) -> CommandResult {
        let (_, slot) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        if scoreboard.display_objective(slot).is_none() {
            return Err(CommandError::msg(
                translations::COMMANDS_SCOREBOARD_OBJECTIVES_DISPLAY_ALREADYEMPTY,
            ));
        }
        scoreboard.set_display_slot(slot, None);
        drop(scoreboard);

        context.send_success(
            &translations::COMMANDS_SCOREBOARD_OBJECTIVES_DISPLAY_CLEARED
                .message([slot.name().into()]),
        );
        Ok(0)
    }
}

impl CommandExecutor<((Sub, DisplaySlot), String)> for SetDisplay {
    fn execute(
        &self,
        args: ((Sub, DisplaySlot), String),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((_, slot), name) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        let display_name = ObjectiveArgument::get(&scoreboard, &name)?.formatted_display_name();
        if scoreboard.display_objective(slot) == Some(name.as_str()) {
            return Err(CommandError::msg(
                translations::COMMANDS_SCOREBOARD_OBJECTIVES_DISPLAY_ALREADYSET,
            ));
        }
        scoreboard.set_display_slot(slot, Some(&name));
        drop(scoreboard);

        context.send_success(
            &translations::COMMANDS_SCOREBOARD_OBJECTIVES_DISPLAY_SET
                .message([slot.name().into(), display_name]),
        );
        Ok(0)
    }
}

struct ModifyObjective;

impl CommandExecutor<(((Sub, String), ()), TextComponent)> for ModifyObjective {
    fn execute(
        &self,
        args: (((Sub, String), ()), TextComponent),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((_, name), ()), display_name) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        ObjectiveArgument::get(&scoreboard, &name)?;
        if let Some(objective) = scoreboard.objective_mut(&name) {
            objective.display_name = display_name.clone();
        }
        drop(scoreboard);

        context.send_success(
            &translations::COMMANDS_SCOREBOARD_OBJECTIVES_MODIFY_DISPLAYNAME
                .message([name.into(), display_name]),
        );
        Ok(0)
    }
}

impl CommandExecutor<(((Sub, String), ()), RenderType)> for ModifyObjective {
    fn execute(
        &self,
        args: (((Sub, String), ()), RenderType),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((_, name), ()), render_type) = args;
        let mut scoreboard = context.server.scoreboard.lock();
        ObjectiveArgument::get(&scoreboard, &name)?;
        let Some(objective) = scoreboard.objective_mut(&name) else {
            return Err(CommandError::InvalidRequirement);
        };
        objective.render_type = render_type;
        let message = translations::COMMANDS_SCOREBOARD_OBJECTIVES_MODIFY_RENDERTYPE
            .message([objective.formatted_display_name()]);
        drop(scoreboard);

        context.send_success(&message);
        Ok(0)
    }
}

struct ListHolders;

impl CommandExecutor<Sub> for ListHolders {
    fn execute(&self, _args: Sub, context: &mut CommandContext) -> CommandResult {
        let holders = context.server.scoreboard.lock().tracked_holders();
        let count = holders.len();
        if holders.is_empty() {
            context.send_success(&translations::COMMANDS_SCOREBOARD_PLAYERS_LIST_EMPTY.msg());
        } else {
            context.send_success(&translations::COMMANDS_SCOREBOARD_PLAYERS_LIST_SUCCESS.message([
                count.into(),
                TextComponent::join(holders.iter().map(|holder| holder_text(holder))),
            ]));
        }
        Ok(count as i32)
    }
}

impl CommandExecutor<(Sub, ScoreHolders)> for ListHolders {
    fn execute(&self, args: (Sub, ScoreHolders), context: &mut CommandContext) -> CommandResult {
        let (_, target) = args;
        let holders = target.holders(context)?;
        let Some(holder) = holders.first() else {
            return Err(CommandError::InvalidRequirement);
        };

        let entries: Vec<(TextComponent, i32)> = context
            .server
            .scoreboard
            .lock()
            .holder_scores(holder)
            .into_iter()
            .map(|(objective, score)| (objective.formatted_display_name(), score.value))
            .collect();

        if entries.is_empty() {
            context.send_success(
                &translations::COMMANDS_SCOREBOARD_PLAYERS_LIST_ENTITY_EMPTY
                    .message([holder_text(holder)]),
            );
        } else {
            context.send_success(
                &translations::COMMANDS_SCOREBOARD_PLAYERS_LIST_ENTITY_SUCCESS
                    .message([holder_text(holder), entries.len().into()]),
            );
            for (name, value) in &entries {
                context.send_success(
                    &translations::COMMANDS_SCOREBOARD_PLAYERS_LIST_ENTITY_ENTRY
                        .message([name.clone(), (*value).into()]),
                );
            }
        }
        Ok(entries.len() as i32)
    }
}

enum ChangeScore {
    Set,
    Add,
    Remove,
}

impl CommandExecutor<(((Sub, ScoreHolders), String), i32)> for ChangeScore {
    fn execute(
        &self,
        args: (((Sub, ScoreHolders), String), i32),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((_, targets), objective), amount) = args;
        let holders = targets.holders(context)?;

        let mut scoreboard = context.server.scoreboard.lock();
        let display_name = ObjectiveArgument::get_writable(&scoreboard, &objective)?.formatted_display_name();
        let mut total = 0i32;
        let mut last = 0;
        for holder in &holders {
            let score = scoreboard.score_mut(holder, &objective);
            score.value = match self {
                ChangeScore::Set => amount,
                ChangeScore::Add => score.value.wrapping_add(amount),
                ChangeScore::Remove => score.value.wrapping_sub(amount),
            };
            last = score.value;
            total = total.wrapping_add(score.value);
        }
        drop(scoreboard);

        let count = holders.len();
        let message = match (self, holders.as_slice()) {
            (ChangeScore::Set, [holder]) => translations::COMMANDS_SCOREBOARD_PLAYERS_SET_SUCCESS_SINGLE
                .message([display_name, holder_text(holder), amount.into()]),
            (ChangeScore::Set, _) => translations::COMMANDS_SCOREBOARD_PLAYERS_SET_SUCCESS_MULTIPLE
                .message([display_name, count.into(), amount.into()]),
            (ChangeScore::Add, [holder]) => translations::COMMANDS_SCOREBOARD_PLAYERS_ADD_SUCCESS_SINGLE
                .message([amount.into(), display_name, holder_text(holder), last.into()]),
            (ChangeScore::Add, _) => translations::COMMANDS_SCOREBOARD_PLAYERS_ADD_SUCCESS_MULTIPLE
                .message([amount.into(), display_name, count.into()]),
            (ChangeScore::Remove, [holder]) => {
                translations::COMMANDS_SCOREBOARD_PLAYERS_REMOVE_SUCCESS_SINGLE
                    .message([amount.into(), display_name, holder_text(holder), last.into()])
            }
            (ChangeScore::Remove, _) => {
                translations::COMMANDS_SCOREBOARD_PLAYERS_REMOVE_SUCCESS_MULTIPLE
                    .message([amount.into(), display_name, count.into()])
            }
        };
        context.send_success(&message);

        Ok(match self {
            ChangeScore::Set => amount.wrapping_mul(count as i32),
            ChangeScore::Add | ChangeScore::Remove => total,
        })
    }
}

struct ResetScores;

impl CommandExecutor<(Sub, ScoreHolders)> for ResetScores {
    fn execute(&self, args: (Sub, ScoreHolders), context: &mut CommandContext) -> CommandResult {
        let (_, targets) = args;
        let holders = targets.holders(context)?;
        {
            let mut scoreboard = context.server.scoreboard.lock();
            for holder in &holders {
                scoreboard.reset_all_scores(holder);
            }
        }

        let message = match holders.as_slice() {
            [holder] => translations::COMMANDS_SCOREBOARD_PLAYERS_RESET_ALL_SINGLE
                .message([holder_text(holder)]),
            _ => translations::COMMANDS_SCOREBOARD_PLAYERS_RESET_ALL_MULTIPLE
                .message([holders.len().into()]),
        };
        context.send_success(&message);
        Ok(holders.len() as i32)
    }
}

impl CommandExecutor<((Sub, ScoreHolders), String)> for ResetScores {
    fn execute(
        &self,
        args: ((Sub, ScoreHolders), String),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((_, targets), objective) = args;
        let holders = targets.holders(context)?;
        let display_name = {
            let mut scoreboard = context.server.scoreboard.lock();
            let display_name = ObjectiveArgument::get(&scoreboard, &objective)?.formatted_display_name();
            for holder in &holders {
                scoreboard.reset_score(holder, &objective);
            }
            display_name
        };

        let message = match holders.as_slice() {
            [holder] => translations::COMMANDS_SCOREBOARD_PLAYERS_RESET_SPECIFIC_SINGLE
                .message([display_name, holder_text(holder)]),
            _ => translations::COMMANDS_SCOREBOARD_PLAYERS_RESET_SPECIFIC_MULTIPLE
                .message([display_name, holders.len().into()]),
        };
        context.send_success(&message);
        Ok(holders.len() as i32)
    }
}

struct GetScore;

impl CommandExecutor<((Sub, ScoreHolders), String)> for GetScore {
    fn execute(
        &self,
        args: ((Sub, ScoreHolders), String),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((_, target), objective) = args;
        let holders = target.holders(context)?;
        let Some(holder) = holders.first() else {
            return Err(CommandError::InvalidRequirement);
        };

        let scoreboard = context.server.scoreboard.lock();
        let display_name = ObjectiveArgument::get(&scoreboard, &objective)?.formatted_display_name();
        let Some(score) = scoreboard.score(holder, &objective) else {
            return Err(CommandError::translated(
                translations::COMMANDS_SCOREBOARD_PLAYERS_GET_NULL,
                [objective.as_str().into(), holder_text(holder)],
            ));
        };
        drop(scoreboard);

        context.send_success(&translations::COMMANDS_SCOREBOARD_PLAYERS_GET_SUCCESS.message([
            holder_text(holder),
            score.value.into(),
            display_name,
        ]));
        Ok(score.value)
    }
}

struct EnableTrigger;

impl CommandExecutor<((Sub, ScoreHolders), String)> for EnableTrigger {
    fn execute(
        &self,
        args: ((Sub, ScoreHolders), String),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((_, targets), objective) = args;
        let holders = targets.holders(context)?;

        let mut scoreboard = context.server.scoreboard.lock();
        let found = ObjectiveArgument::get(&scoreboard, &objective)?;
        if found.criteria != ObjectiveCriteria::Trigger {
            return Err(CommandError::msg(
                translations::COMMANDS_SCOREBOARD_PLAYERS_ENABLE_INVALID,
            ));
        }
        let display_name = found.formatted_display_name();
        let mut enabled = 0;
        for holder in &holders {
            let score = scoreboard.score_mut(holder, &objective);
            if score.locked {
                score.locked = false;
                enabled += 1;
            }
        }
        drop(scoreboard);

        if enabled == 0 {
            return Err(CommandError::msg(
                translations::COMMANDS_SCOREBOARD_PLAYERS_ENABLE_FAILED,
            ));
        }
        let message = match holders.as_slice() {
            [holder] => translations::COMMANDS_SCOREBOARD_PLAYERS_ENABLE_SUCCESS_SINGLE
                .message([display_name, holder_text(holder)]),
            _ => translations::COMMANDS_SCOREBOARD_PLAYERS_ENABLE_SUCCESS_MULTIPLE
                .message([display_name, holders.len().into()]),
        };
        context.send_success(&message);
        Ok(enabled)
    }
}

struct ScoreOperation;

type OperationArgs = (
    ((((Sub, ScoreHolders), String), ScoreboardOperation), ScoreHolders),
    String,
);

impl CommandExecutor<OperationArgs> for ScoreOperation {
    fn execute(&self, args: OperationArgs, context: &mut CommandContext) -> CommandResult {
        let (((((_, targets), target_objective), operation), sources), source_objective) = args;
        let targets = targets.holders(context)?;
        let sources = sources.holders(context)?;

        let mut scoreboard = context.server.scoreboard.lock();
        let display_name =
            ObjectiveArgument::get_writable(&scoreboard, &target_objective)?.formatted_display_name();
        ObjectiveArgument::get(&scoreboard, &source_objective)?;

        let mut total = 0i32;
        let mut last = 0;
        for target in &targets {
            for source in &sources {
                let mut target_value = scoreboard.score_mut(target, &target_objective).value;
                let mut source_value = scoreboard.score_mut(source, &source_objective).value;
                operation.apply(&mut target_value, &mut source_value)?;
                scoreboard.score_mut(source, &source_objective).value = source_value;
                scoreboard.score_mut(target, &target_objective).value = target_value;
            }
            last = scoreboard.score_mut(target, &target_objective).value;
            total = total.wrapping_add(last);
        }
        drop(scoreboard);

        let message = match targets.as_slice() {
            [target] => translations::COMMANDS_SCOREBOARD_PLAYERS_OPERATION_SUCCESS_SINGLE
                .message([display_name, holder_text(target), last.into()]),
            _ => translations::COMMANDS_SCOREBOARD_PLAYERS_OPERATION_SUCCESS_MULTIPLE
                .message([display_name, targets.len().into()]),
        };
        context.send_success(&message);
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use crate::scoreboard::{DisplaySlot, RenderType};
    use crate::test_support::TestServer;

    #[test]
    fn manages_objectives() {
        let server = TestServer::new();

        assert_eq!(server.console("scoreboard objectives add kills dummy"), 1);
        assert!(server.run_console("scoreboard objectives add kills dummy").is_err());
        assert_eq!(server.console(r#"scoreboard objectives add hp health "Health""#), 2);
        assert_eq!(server.console("scoreboard objectives list"), 2);

        server.console("scoreboard objectives setdisplay sidebar kills");
        assert!(server.run_console("scoreboard objectives setdisplay sidebar kills").is_err());
        server.console("scoreboard objectives modify kills rendertype hearts");
        server.console(r#"scoreboard objectives modify kills displayname "Kills""#);
        {
            let scoreboard = server.server.scoreboard.lock();
            assert_eq!(scoreboard.display_objective(DisplaySlot::Sidebar), Some("kills"));
            let kills = scoreboard.objective("kills").expect("objective exists");
            assert_eq!(kills.render_type, RenderType::Hearts);
            assert_eq!(kills.formatted_display_name().to_plain(), "[Kills]");
            let hp = scoreboard.objective("hp").expect("objective exists");
            assert_eq!(hp.render_type, RenderType::Hearts);
        }

        server.console("scoreboard objectives setdisplay sidebar");
        assert!(server.run_console("scoreboard objectives setdisplay sidebar").is_err());
        assert_eq!(server.console("scoreboard objectives remove kills"), 1);
        assert!(server.run_console("scoreboard objectives remove kills").is_err());
    }

    #[test]
    fn changes_player_scores() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        server.player("Alex");
        server.console("scoreboard objectives add points dummy");

        assert_eq!(server.console("scoreboard players set @a points 5"), 10);
        assert_eq!(server.console("scoreboard players add Steve points 3"), 8);
        assert_eq!(server.console("scoreboard players remove @a points 1"), 11);
        assert_eq!(server.console("scoreboard players get Steve points"), 7);
        assert!(server.run_console("scoreboard players get Nobody points").is_err());

        assert_eq!(server.run_as(&steve, "scoreboard players list Steve").ok(), Some(1));
        assert_eq!(
            server.messages(&steve),
            vec!["Steve has 1 score(s):", "[points]: 7"]
        );
        assert_eq!(server.console("scoreboard players list"), 2);

        assert_eq!(server.console("scoreboard players reset Alex points"), 1);
        assert!(server.run_console("scoreboard players get Alex points").is_err());
        assert_eq!(server.console("scoreboard players reset *"), 1);
        assert!(server.run_console("scoreboard players list Steve").is_ok_and(|n| n == 0));
    }

    #[test]
    fn read_only_objectives_reject_changes() {
        let server = TestServer::new();
        server.console("scoreboard objectives add hp health");
        assert!(server.run_console("scoreboard players set Steve hp 3").is_err());
        assert!(server.run_console("scoreboard players set Steve missing 3").is_err());
    }

    #[test]
    fn operations_combine_scores() {
        let server = TestServer::new();
        server.console("scoreboard objectives add a dummy");
        server.console("scoreboard players set x a 7");
        server.console("scoreboard players set y a 2");

        assert_eq!(server.console("scoreboard players operation x a %= y a"), 1);
        assert_eq!(server.console("scoreboard players operation x a >< y a"), 2);
        assert_eq!(server.console("scoreboard players get y a"), 1);
        assert!(server.run_console("scoreboard players set z a 0").is_ok());
        assert!(server.run_console("scoreboard players operation x a /= z a").is_err());
    }

    #[test]
    fn enables_triggers() {
        let server = TestServer::new();
        server.console("scoreboard objectives add vote trigger");
        server.console("scoreboard objectives add plain dummy");

        assert_eq!(server.console("scoreboard players enable Steve vote"), 1);
        assert!(server.run_console("scoreboard players enable Steve vote").is_err());
        assert!(server.run_console("scoreboard players enable Steve plain").is_err());
    }
}
