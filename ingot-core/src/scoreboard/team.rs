//! Player teams.
use std::collections::BTreeSet;

use ingot_utils::text::{NamedColor, TextComponent};

/// Who can see a team's name tags or death messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Visible to everyone.
    Always,
    /// Visible to nobody.
    Never,
    /// Hidden from other teams.
    HideForOtherTeams,
    /// Hidden from the own team.
    HideForOwnTeam,
}

impl Visibility {
    /// Every visibility with its command name.
    pub const ALL: &'static [(&'static str, Visibility)] = &[
        ("always", Visibility::Always),
        ("never", Visibility::Never),
        ("hideForOtherTeams", Visibility::HideForOtherTeams),
        ("hideForOwnTeam", Visibility::HideForOwnTeam),
    ];

    /// The command name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::HideForOtherTeams => "hideForOtherTeams",
            Self::HideForOwnTeam => "hideForOwnTeam",
        }
    }
}

/// Which entities team members push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionRule {
    /// Push everyone.
    Always,
    /// Push nobody.
    Never,
    /// Push only members of other teams.
    PushOtherTeams,
    /// Push only members of the own team.
    PushOwnTeam,
}

impl CollisionRule {
    /// Every rule with its command name.
    pub const ALL: &'static [(&'static str, CollisionRule)] = &[
        ("always", CollisionRule::Always),
        ("never", CollisionRule::Never),
        ("pushOtherTeams", CollisionRule::PushOtherTeams),
        ("pushOwnTeam", CollisionRule::PushOwnTeam),
    ];

    /// The command name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::PushOtherTeams => "pushOtherTeams",
            Self::PushOwnTeam => "pushOwnTeam",
        }
    }
}

/// A scoreboard team.
#[derive(Debug, Clone)]
pub struct PlayerTeam {
    /// The team name.
    pub name: String,
    /// The name shown to players.
    pub display_name: TextComponent,
    /// Colour of member names; `None` is `reset`.
    pub color: Option<NamedColor>,
    /// Shown before member names.
    pub prefix: TextComponent,
    /// Shown after member names.
    pub suffix: TextComponent,
    /// Whether members can hurt each other.
    pub friendly_fire: bool,
    /// Whether members see invisible team mates.
    pub see_friendly_invisibles: bool,
    /// Who sees member name tags.
    pub name_tag_visibility: Visibility,
    /// Who sees member death messages.
    pub death_message_visibility: Visibility,
    /// Which entities members push.
    pub collision_rule: CollisionRule,
    pub(super) members: BTreeSet<String>,
}

impl PlayerTeam {
    pub(super) fn new(name: String, display_name: TextComponent) -> Self {
        Self {
            name,
            display_name,
            color: None,
            prefix: TextComponent::default(),
            suffix: TextComponent::default(),
            friendly_fire: true,
            see_friendly_invisibles: true,
            name_tag_visibility: Visibility::Always,
            death_message_visibility: Visibility::Always,
            collision_rule: CollisionRule::Always,
            members: BTreeSet::new(),
        }
    }

    /// Member score holder names, sorted.
    #[must_use]
    pub fn members(&self) -> Vec<String> {
        self.members.iter().cloned().collect()
    }

    /// The display name in square brackets, in the team colour.
    #[must_use]
    pub fn formatted_display_name(&self) -> TextComponent {
        let name = TextComponent::plain("[")
            .append(self.display_name.clone())
            .append("]");
        match self.color {
            Some(color) => name.color(color),
            None => name,
        }
    }
}
