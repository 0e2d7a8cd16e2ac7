//! Objective and objective criteria arguments.
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::{CommandArgument, is_unquoted_char};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::scoreboard::{Objective, ObjectiveCriteria, Scoreboard};

/// An objective name. Existence is checked by the command.
pub struct ObjectiveArgument;

impl ObjectiveArgument {
    /// Looks the objective up, failing if it doesn't exist.
    pub fn get<'a>(scoreboard: &'a Scoreboard, name: &str) -> Result<&'a Objective, CommandError> {
        scoreboard.objective(name).ok_or_else(|| {
            CommandError::translated(
                translations::ARGUMENTS_OBJECTIVE_NOTFOUND,
                [TextComponent::plain(name)],
            )
        })
    }

    /// Like [`Self::get`], but also fails for read-only criteria.
    pub fn get_writable<'a>(
        scoreboard: &'a Scoreboard,
        name: &str,
    ) -> Result<&'a Objective, CommandError> {
        let objective = Self::get(scoreboard, name)?;
        if objective.criteria.is_read_only() {
            return Err(CommandError::translated(
                translations::ARGUMENTS_OBJECTIVE_READONLY,
                [TextComponent::plain(name)],
            ));
        }
        Ok(objective)
    }
}

impl CommandArgument for ObjectiveArgument {
    type Output = String;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let name = *arg.first()?;
        name.chars()
            .all(is_unquoted_char)
            .then(|| (&arg[1..], name.to_string()))
    }
}

/// An objective criteria such as `dummy` or `deathCount`.
pub struct ObjectiveCriteriaArgument;

impl CommandArgument for ObjectiveCriteriaArgument {
    type Output = ObjectiveCriteria;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let criteria = ObjectiveCriteria::parse(arg.first()?)?;
        Some((&arg[1..], criteria))
    }
}
