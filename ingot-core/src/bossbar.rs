//! Custom boss bars created with `/bossbar`.
use std::collections::{BTreeMap, BTreeSet};

use ingot_utils::Identifier;
use ingot_utils::text::TextComponent;
use uuid::Uuid;

/// The colour of a boss bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossBarColor {
    /// Pink.
    Pink,
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
    /// White.
    White,
}

impl BossBarColor {
    /// Every colour with its command name.
    pub const ALL: &'static [(&'static str, BossBarColor)] = &[
        ("pink", Self::Pink),
        ("blue", Self::Blue),
        ("red", Self::Red),
        ("green", Self::Green),
        ("yellow", Self::Yellow),
        ("purple", Self::Purple),
        ("white", Self::White),
    ];
}

/// How a boss bar is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossBarOverlay {
    /// A continuous bar.
    Progress,
    /// Six segments.
    Notched6,
    /// Ten segments.
    Notched10,
    /// Twelve segments.
    Notched12,
    /// Twenty segments.
    Notched20,
}

impl BossBarOverlay {
    /// Every style with its command name.
    pub const ALL: &'static [(&'static str, BossBarOverlay)] = &[
        ("progress", Self::Progress),
        ("notched_6", Self::Notched6),
        ("notched_10", Self::Notched10),
        ("notched_12", Self::Notched12),
        ("notched_20", Self::Notched20),
    ];
}

/// A boss bar managed by commands.
#[derive(Debug, Clone)]
pub struct CustomBossEvent {
    /// The id.
    pub id: Identifier,
    /// The title.
    pub name: TextComponent,
    /// The colour.
    pub color: BossBarColor,
    /// The style.
    pub overlay: BossBarOverlay,
    /// The current value.
    pub value: i32,
    /// The maximum value.
    pub max: i32,
    /// Whether the bar is shown to its players.
    pub visible: bool,
    players: BTreeSet<Uuid>,
}

impl CustomBossEvent {
    fn new(id: Identifier, name: TextComponent) -> Self {
        Self {
            id,
            name,
            color: BossBarColor::White,
            overlay: BossBarOverlay::Progress,
            value: 0,
            max: 100,
            visible: true,
            players: BTreeSet::new(),
        }
    }

    /// The fill fraction, between 0 and 1.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.value as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// The title in square brackets.
    #[must_use]
    pub fn display_name(&self) -> TextComponent {
        TextComponent::plain("[").append(self.name.clone()).append("]")
    }

    /// The players seeing this bar.
    #[must_use]
    pub fn players(&self) -> &BTreeSet<Uuid> {
        &self.players
    }

    /// Replaces the player set. Returns false if it didn't change.
    pub fn set_players(&mut self, players: impl IntoIterator<Item = Uuid>) -> bool {
        let players: BTreeSet<Uuid> = players.into_iter().collect();
        if players == self.players {
            return false;
        }
        self.players = players;
        true
    }
}

/// Every custom boss bar.
#[derive(Debug, Default)]
pub struct CustomBossEvents {
    events: BTreeMap<Identifier, CustomBossEvent>,
}

impl CustomBossEvents {
    /// Creates a boss bar. Returns `None` if the id is taken.
    pub fn create(&mut self, id: Identifier, name: TextComponent) -> Option<&mut CustomBossEvent> {
        if self.events.contains_key(&id) {
            return None;
        }
        let event = CustomBossEvent::new(id.clone(), name);
        Some(self.events.entry(id).or_insert(event))
    }

    /// Removes a boss bar.
    pub fn remove(&mut self, id: &Identifier) -> Option<CustomBossEvent> {
        self.events.remove(id)
    }

    /// Looks a boss bar up.
    #[must_use]
    pub fn get(&self, id: &Identifier) -> Option<&CustomBossEvent> {
        self.events.get(id)
    }

    /// Looks a boss bar up mutably.
    pub fn get_mut(&mut self, id: &Identifier) -> Option<&mut CustomBossEvent> {
        self.events.get_mut(id)
    }

    /// Every boss bar, sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &CustomBossEvent> {
        self.events.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let mut events = CustomBossEvents::default();
        let id = Identifier::vanilla_static("test");
        let bar = events
            .create(id.clone(), TextComponent::plain("Test"))
            .expect("new bar");
        bar.value = 150;
        assert!((bar.progress() - 1.0).abs() < f32::EPSILON);
        bar.value = 25;
        assert!((bar.progress() - 0.25).abs() < f32::EPSILON);
        assert!(events.create(id, TextComponent::plain("Again")).is_none());
    }

    #[test]
    fn player_sets_report_changes() {
        let mut events = CustomBossEvents::default();
        let bar = events
            .create(Identifier::vanilla_static("test"), TextComponent::plain("Test"))
            .expect("new bar");
        let player = Uuid::new_v4();
        assert!(bar.set_players([player]));
        assert!(!bar.set_players([player]));
        assert!(bar.set_players([]));
    }
}
