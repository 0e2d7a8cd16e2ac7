//! An entity argument.
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::{CommandArgument, take_balanced};
use crate::command::context::CommandContext;

/// An entity argument, resolved later through [`EntitySelector`].
pub struct EntityArgument {
    /// If only accepts one entity
    single: bool,
    /// If only accepts players
    players_only: bool,
}

impl EntityArgument {
    /// Creates a selector for multiple entities
    #[must_use]
    pub const fn entities() -> Self {
        EntityArgument {
            single: false,
            players_only: false,
        }
    }

    /// Creates a selector for one entity
    #[must_use]
    pub const fn entity() -> Self {
        EntityArgument {
            single: true,
            players_only: false,
        }
    }

    /// Creates a selector for multiple players
    #[must_use]
    pub const fn players() -> Self {
        EntityArgument {
            single: false,
            players_only: true,
        }
    }

    /// Creates a selector for one player
    #[must_use]
    pub const fn player() -> Self {
        EntityArgument {
            single: true,
            players_only: true,
        }
    }
}

impl CommandArgument for EntityArgument {
    type Output = EntitySelector;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let (text, consumed) = take_balanced(arg)?;
        let mut selector = EntitySelector::parse(&text)?;
        selector.single = self.single;
        selector.players_only = self.players_only;
        Some((&arg[consumed..], selector))
    }
}
