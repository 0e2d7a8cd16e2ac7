//! A score holder argument: `*`, an entity selector or a plain name.
use ingot_utils::translations;

use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::{CommandArgument, take_balanced};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;

/// Parsed score holders.
#[derive(Debug, Clone)]
pub enum ScoreHolders {
    /// `*`, every holder tracked by the scoreboard.
    All,
    /// Entities matched by a selector.
    Selector(EntitySelector),
    /// A name that need not belong to an entity.
    Name(String),
}

impl ScoreHolders {
    /// Resolves the holder names; fails if none are found.
    pub fn holders(&self, context: &CommandContext) -> Result<Vec<String>, CommandError> {
        let holders = match self {
            Self::All => context.server.scoreboard.lock().tracked_holders(),
            Self::Selector(selector) => selector
                .find_entities(context)?
                .iter()
                .map(|entity| entity.scoreboard_name())
                .collect(),
            Self::Name(name) => vec![name.clone()],
        };
        if holders.is_empty() {
            return Err(CommandError::msg(translations::ARGUMENT_SCOREHOLDER_EMPTY));
        }
        Ok(holders)
    }
}

/// Score holder argument.
pub struct ScoreHolderArgument {
    single: bool,
}

impl ScoreHolderArgument {
    /// Accepts a single holder.
    #[must_use]
    pub const fn single() -> Self {
        Self { single: true }
    }

    /// Accepts any number of holders.
    #[must_use]
    pub const fn multiple() -> Self {
        Self { single: false }
    }
}

impl CommandArgument for ScoreHolderArgument {
    type Output = ScoreHolders;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let first = *arg.first()?;
        if first == "*" {
            return (!self.single).then(|| (&arg[1..], ScoreHolders::All));
        }
        if first.starts_with('@') {
            let (text, consumed) = take_balanced(arg)?;
            let mut selector = EntitySelector::parse(&text)?;
            selector.single = self.single;
            return Some((&arg[consumed..], ScoreHolders::Selector(selector)));
        }
        if first.len() > 40 {
            return None;
        }
        if first.len() == 36
            && let Some(selector) = EntitySelector::parse(first)
        {
            return Some((&arg[1..], ScoreHolders::Selector(selector)));
        }
        Some((&arg[1..], ScoreHolders::Name(first.to_string())))
    }
}
