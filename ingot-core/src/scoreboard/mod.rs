//! Objectives, scores, display slots and teams.
pub mod team;

use std::collections::{BTreeMap, BTreeSet};

use ingot_utils::text::{NamedColor, TextComponent};
use rustc_hash::FxHashMap;

use crate::scoreboard::team::PlayerTeam;

/// What drives an objective's scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveCriteria {
    /// Only changed by commands.
    Dummy,
    /// Changed by players with `/trigger`.
    Trigger,
    /// Deaths of the holder.
    DeathCount,
    /// Players killed by the holder.
    PlayerKillCount,
    /// Entities killed by the holder.
    TotalKillCount,
    /// Health of the holder.
    Health,
    /// Food level of the holder.
    Food,
    /// Air supply of the holder.
    Air,
    /// Armor points of the holder.
    Armor,
    /// Experience points of the holder.
    Xp,
    /// Experience level of the holder.
    Level,
}

impl ObjectiveCriteria {
    /// Every criterion with its name.
    pub const ALL: &'static [(&'static str, ObjectiveCriteria)] = &[
        ("dummy", Self::Dummy),
        ("trigger", Self::Trigger),
        ("deathCount", Self::DeathCount),
        ("playerKillCount", Self::PlayerKillCount),
        ("totalKillCount", Self::TotalKillCount),
        ("health", Self::Health),
        ("food", Self::Food),
        ("air", Self::Air),
        ("armor", Self::Armor),
        ("xp", Self::Xp),
        ("level", Self::Level),
    ];

    /// Looks a criterion up by name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, criteria)| *criteria)
    }

    /// The criterion name.
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(_, criteria)| *criteria == self)
            .map_or("dummy", |(name, _)| *name)
    }

    /// Whether commands may not change scores of this criterion.
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(
            self,
            Self::Health | Self::Food | Self::Air | Self::Armor | Self::Xp | Self::Level
        )
    }

    /// The render type objectives of this criterion start with.
    #[must_use]
    pub const fn default_render_type(self) -> RenderType {
        match self {
            Self::Health => RenderType::Hearts,
            _ => RenderType::Integer,
        }
    }
}

/// How an objective's scores are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderType {
    /// As numbers.
    Integer,
    /// As hearts.
    Hearts,
}

impl RenderType {
    /// Every render type with its command name.
    pub const ALL: &'static [(&'static str, RenderType)] =
        &[("integer", Self::Integer), ("hearts", Self::Hearts)];
}

/// A scoreboard objective.
#[derive(Debug, Clone)]
pub struct Objective {
    /// The objective name.
    pub name: String,
    /// What drives the scores.
    pub criteria: ObjectiveCriteria,
    /// The name shown to players.
    pub display_name: TextComponent,
    /// How scores are displayed.
    pub render_type: RenderType,
}

impl Objective {
    /// The display name in square brackets.
    #[must_use]
    pub fn formatted_display_name(&self) -> TextComponent {
        TextComponent::plain("[")
            .append(self.display_name.clone())
            .append("]")
    }
}

/// A score of one holder in one objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// The value.
    pub value: i32,
    /// Whether `/trigger` is disabled for this score.
    pub locked: bool,
}

impl Default for Score {
    fn default() -> Self {
        Self {
            value: 0,
            locked: true,
        }
    }
}

/// A place objectives can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplaySlot {
    /// The player list.
    List,
    /// The sidebar.
    Sidebar,
    /// Below player name tags.
    BelowName,
    /// The sidebar, shown only to members of teams with this colour.
    TeamSidebar(NamedColor),
}

impl DisplaySlot {
    /// Parses a slot name such as `sidebar.team.red`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "list" => Some(Self::List),
            "sidebar" => Some(Self::Sidebar),
            "below_name" | "belowName" => Some(Self::BelowName),
            _ => name
                .strip_prefix("sidebar.team.")
                .and_then(NamedColor::from_name)
                .map(Self::TeamSidebar),
        }
    }

    /// The slot name.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::List => "list".to_string(),
            Self::Sidebar => "sidebar".to_string(),
            Self::BelowName => "below_name".to_string(),
            Self::TeamSidebar(color) => format!("sidebar.team.{}", color.name()),
        }
    }
}

/// The server scoreboard.
#[derive(Debug, Default)]
pub struct Scoreboard {
    objectives: BTreeMap<String, Objective>,
    scores: BTreeMap<String, BTreeMap<String, Score>>,
    display_slots: FxHashMap<DisplaySlot, String>,
    teams: BTreeMap<String, PlayerTeam>,
    team_of: FxHashMap<String, String>,
}

impl Scoreboard {
    /// Adds an objective. Returns `None` if the name is taken.
    pub fn add_objective(
        &mut self,
        name: &str,
        criteria: ObjectiveCriteria,
        display_name: TextComponent,
        render_type: RenderType,
    ) -> Option<&Objective> {
        if self.objectives.contains_key(name) {
            return None;
        }
        log::debug!("Adding objective {name} ({})", criteria.name());
        let objective = Objective {
            name: name.to_string(),
            criteria,
            display_name,
            render_type,
        };
        Some(self.objectives.entry(name.to_string()).or_insert(objective))
    }

    /// Removes an objective with its scores and display slots.
    pub fn remove_objective(&mut self, name: &str) -> Option<Objective> {
        let objective = self.objectives.remove(name)?;
        for scores in self.scores.values_mut() {
            scores.remove(name);
        }
        self.scores.retain(|_, scores| !scores.is_empty());
        self.display_slots.retain(|_, shown| shown != name);
        Some(objective)
    }

    /// Looks an objective up.
    #[must_use]
    pub fn objective(&self, name: &str) -> Option<&Objective> {
        self.objectives.get(name)
    }

    /// Looks an objective up mutably.
    pub fn objective_mut(&mut self, name: &str) -> Option<&mut Objective> {
        self.objectives.get_mut(name)
    }

    /// Every objective, sorted by name.
    pub fn objectives(&self) -> impl Iterator<Item = &Objective> {
        self.objectives.values()
    }

    /// Shows an objective in a slot, or clears the slot.
    pub fn set_display_slot(&mut self, slot: DisplaySlot, objective: Option<&str>) {
        match objective {
            Some(name) => {
                self.display_slots.insert(slot, name.to_string());
            }
            None => {
                self.display_slots.remove(&slot);
            }
        }
    }

    /// The objective shown in a slot.
    #[must_use]
    pub fn display_objective(&self, slot: DisplaySlot) -> Option<&str> {
        self.display_slots.get(&slot).map(String::as_str)
    }

    /// The score of a holder, if set.
    #[must_use]
    pub fn score(&self, holder: &str, objective: &str) -> Option<Score> {
        self.scores.get(holder)?.get(objective).copied()
    }

    /// The score of a holder, created as zero if missing.
    pub fn score_mut(&mut self, holder: &str, objective: &str) -> &mut Score {
        self.scores
            .entry(holder.to_string())
            .or_default()
            .entry(objective.to_string())
            .or_default()
    }

    /// Removes one score. Returns false if it wasn't set.
    pub fn reset_score(&mut self, holder: &str, objective: &str) -> bool {
        let Some(scores) = self.scores.get_mut(holder) else {
            return false;
        };
        let removed = scores.remove(objective).is_some();
        if scores.is_empty() {
            self.scores.remove(holder);
        }
        removed
    }

    /// Removes every score of a holder. Returns false if it had none.
    pub fn reset_all_scores(&mut self, holder: &str) -> bool {
        self.scores.remove(holder).is_some()
    }

    /// Every holder with at least one score, sorted.
    #[must_use]
    pub fn tracked_holders(&self) -> Vec<String> {
        self.scores.keys().cloned().collect()
    }

    /// The scores of one holder with their objectives, sorted by objective name.
    #[must_use]
    pub fn holder_scores(&self, holder: &str) -> Vec<(&Objective, Score)> {
        self.scores.get(holder).map_or_else(Vec::new, |scores| {
            scores
                .iter()
                .filter_map(|(name, score)| Some((self.objectives.get(name)?, *score)))
                .collect()
        })
    }

    /// Updates the holder's score in every objective with the given criteria.
    pub fn for_all_with_criteria(
        &mut self,
        criteria: ObjectiveCriteria,
        holder: &str,
        mut update: impl FnMut(&mut Score),
    ) {
        let names: Vec<String> = self
            .objectives
            .values()
            .filter(|objective| objective.criteria == criteria)
            .map(|objective| objective.name.clone())
            .collect();
        for name in names {
            update(self.score_mut(holder, &name));
        }
    }

    /// Adds a team. Returns `None` if the name is taken.
    pub fn add_team(&mut self, name: &str, display_name: TextComponent) -> Option<&mut PlayerTeam> {
        if self.teams.contains_key(name) {
            return None;
        }
        let team = PlayerTeam::new(name.to_string(), display_name);
        Some(self.teams.entry(name.to_string()).or_insert(team))
    }

    /// Removes a team and its memberships.
    pub fn remove_team(&mut self, name: &str) -> Option<PlayerTeam> {
        let team = self.teams.remove(name)?;
        for member in &team.members {
            self.team_of.remove(member);
        }
        Some(team)
    }

    /// Looks a team up.
    #[must_use]
    pub fn team(&self, name: &str) -> Option<&PlayerTeam> {
        self.teams.get(name)
    }

    /// Looks a team up mutably.
    pub fn team_mut(&mut self, name: &str) -> Option<&mut PlayerTeam> {
        self.teams.get_mut(name)
    }

    /// Every team, sorted by name.
    pub fn teams(&self) -> impl Iterator<Item = &PlayerTeam> {
        self.teams.values()
    }

    /// The team a holder belongs to.
    #[must_use]
    pub fn team_of(&self, holder: &str) -> Option<&str> {
        self.team_of.get(holder).map(String::as_str)
    }

    /// Puts a holder on a team, leaving any previous one. Returns false if the
    /// holder is already on that team or the team doesn't exist.
    pub fn join_team(&mut self, holder: &str, team: &str) -> bool {
        if !self.teams.contains_key(team) || self.team_of(holder) == Some(team) {
            return false;
        }
        self.leave_team(holder);
        self.team_of.insert(holder.to_string(), team.to_string());
        if let Some(team) = self.teams.get_mut(team) {
            team.members.insert(holder.to_string());
        }
        true
    }

    /// Removes a holder from its team. Returns false if it had none.
    pub fn leave_team(&mut self, holder: &str) -> bool {
        let Some(team) = self.team_of.remove(holder) else {
            return false;
        };
        if let Some(team) = self.teams.get_mut(&team) {
            team.members.remove(holder);
        }
        true
    }

    /// Removes every member of a team. Returns how many were removed.
    pub fn empty_team(&mut self, name: &str) -> usize {
        let members: BTreeSet<String> = self
            .teams
            .get_mut(name)
            .map(|team| std::mem::take(&mut team.members))
            .unwrap_or_default();
        for member in &members {
            self.team_of.remove(member);
        }
        members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_objectives_clears_scores_and_slots() {
        let mut scoreboard = Scoreboard::default();
        scoreboard
            .add_objective(
                "kills",
                ObjectiveCriteria::Dummy,
                TextComponent::plain("kills"),
                RenderType::Integer,
            )
            .expect("new objective");
        assert!(scoreboard
            .add_objective(
                "kills",
                ObjectiveCriteria::Dummy,
                TextComponent::plain("kills"),
                RenderType::Integer,
            )
            .is_none());
        scoreboard.score_mut("Steve", "kills").value = 3;
        scoreboard.set_display_slot(DisplaySlot::Sidebar, Some("kills"));

        assert!(scoreboard.remove_objective("kills").is_some());
        assert_eq!(scoreboard.score("Steve", "kills"), None);
        assert_eq!(scoreboard.display_objective(DisplaySlot::Sidebar), None);
        assert!(scoreboard.tracked_holders().is_empty());
    }

    #[test]
    fn teams_track_membership() {
        let mut scoreboard = Scoreboard::default();
        scoreboard.add_team("red", TextComponent::plain("red"));
        scoreboard.add_team("blue", TextComponent::plain("blue"));

        assert!(scoreboard.join_team("Steve", "red"));
        assert!(!scoreboard.join_team("Steve", "red"));
        assert!(scoreboard.join_team("Steve", "blue"));
        assert_eq!(scoreboard.team_of("Steve"), Some("blue"));
        assert!(scoreboard.team("red").expect("exists").members().is_empty());

        assert_eq!(scoreboard.empty_team("blue"), 1);
        assert!(!scoreboard.leave_team("Steve"));
    }

    #[test]
    fn display_slot_names() {
        assert_eq!(
            DisplaySlot::parse("sidebar.team.dark_red"),
            Some(DisplaySlot::TeamSidebar(NamedColor::DarkRed))
        );
        assert_eq!(DisplaySlot::parse("below_name").map(DisplaySlot::name).as_deref(), Some("below_name"));
        assert_eq!(DisplaySlot::parse("sidebar.team.nope"), None);
    }
}
