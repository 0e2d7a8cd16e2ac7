//! Entities and players.
pub mod attribute_map;

use std::collections::BTreeSet;

use ingot_utils::GameType;
use ingot_utils::locks::SyncMutex;
use ingot_utils::math::{Aabb, Vector3, wrap_degrees};
use ingot_utils::text::TextComponent;
use uuid::Uuid;

use crate::advancement::AdvancementProgress;
use crate::entity::attribute_map::AttributeMap;
use crate::registry::attributes;
use crate::registry::dimensions::DimensionType;
use crate::registry::entity_types::EntityType;

/// The maximum number of tags an entity may carry.
pub const MAX_TAGS: usize = 1024;

/// The part of an entity positions are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityAnchor {
    /// The feet of the entity.
    #[default]
    Feet,
    /// The eyes of the entity.
    Eyes,
}

/// Mutable state shared by every entity.
#[derive(Debug, Clone)]
pub struct EntityState {
    /// Position of the feet.
    pub position: Vector3<f64>,
    /// Yaw and pitch in degrees.
    pub rotation: (f32, f32),
    /// The dimension the entity is in.
    pub dimension: &'static DimensionType,
    /// Current health; meaningless for non-living entities.
    pub health: f32,
    /// False once the entity died or was removed.
    pub alive: bool,
    /// Scoreboard tags.
    pub tags: BTreeSet<String>,
    /// Attribute values.
    pub attributes: AttributeMap,
    /// A custom name shown instead of the type name.
    pub custom_name: Option<String>,
}

/// Player specific data.
#[derive(Debug)]
pub struct PlayerData {
    /// The player's name.
    pub name: String,
    game_mode: SyncMutex<GameType>,
    messages: SyncMutex<Vec<TextComponent>>,
    /// Awarded advancement criteria.
    pub advancements: SyncMutex<AdvancementProgress>,
}

/// An entity in a world.
#[derive(Debug)]
pub struct Entity {
    id: i32,
    uuid: Uuid,
    entity_type: &'static EntityType,
    player: Option<PlayerData>,
    /// Mutable state.
    pub state: SyncMutex<EntityState>,
}

impl Entity {
    /// Creates a non-player entity.
    #[must_use]
    pub fn new(
        id: i32,
        entity_type: &'static EntityType,
        dimension: &'static DimensionType,
        position: Vector3<f64>,
    ) -> Self {
        Self::with_player(id, entity_type, dimension, position, None)
    }

    /// Creates a player.
    #[must_use]
    pub fn new_player(
        id: i32,
        name: String,
        game_mode: GameType,
        dimension: &'static DimensionType,
        position: Vector3<f64>,
    ) -> Self {
        let player = PlayerData {
            name,
            game_mode: SyncMutex::new(game_mode),
            messages: SyncMutex::new(Vec::new()),
            advancements: SyncMutex::new(AdvancementProgress::default()),
        };
        Self::with_player(
            id,
            &crate::registry::entity_types::PLAYER,
            dimension,
            position,
            Some(player),
        )
    }

    fn with_player(
        id: i32,
        entity_type: &'static EntityType,
        dimension: &'static DimensionType,
        position: Vector3<f64>,
        player: Option<PlayerData>,
    ) -> Self {
        let attribute_map = AttributeMap::for_type(entity_type);
        let health = attribute_map
            .value(&attributes::MAX_HEALTH)
            .map_or(0.0, |max| max as f32);
        Self {
            id,
            uuid: Uuid::new_v4(),
            entity_type,
            player,
            state: SyncMutex::new(EntityState {
                position,
                rotation: (0.0, 0.0),
                dimension,
                health,
                alive: true,
                tags: BTreeSet::new(),
                attributes: attribute_map,
                custom_name: None,
            }),
        }
    }

    /// The network id, unique per server.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// The persistent id.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// The entity type.
    #[must_use]
    pub const fn entity_type(&self) -> &'static EntityType {
        self.entity_type
    }

    /// Player data, if this is a player.
    #[must_use]
    pub const fn player(&self) -> Option<&PlayerData> {
        self.player.as_ref()
    }

    /// Whether this is a player.
    #[must_use]
    pub const fn is_player(&self) -> bool {
        self.player.is_some()
    }

    /// The player name, custom name, or type name.
    #[must_use]
    pub fn name(&self) -> String {
        if let Some(player) = &self.player {
            return player.name.clone();
        }
        self.state
            .lock()
            .custom_name
            .clone()
            .unwrap_or_else(|| self.entity_type.name.to_string())
    }

    /// The name shown in command feedback.
    #[must_use]
    pub fn display_name(&self) -> TextComponent {
        TextComponent::plain(self.name())
    }

    /// The name this entity's scores are stored under.
    #[must_use]
    pub fn scoreboard_name(&self) -> String {
        match &self.player {
            Some(player) => player.name.clone(),
            None => self.uuid.to_string(),
        }
    }

    /// Position of the feet.
    #[must_use]
    pub fn position(&self) -> Vector3<f64> {
        self.state.lock().position
    }

    /// Yaw and pitch.
    #[must_use]
    pub fn rotation(&self) -> (f32, f32) {
        self.state.lock().rotation
    }

    /// The dimension the entity is in.
    #[must_use]
    pub fn dimension(&self) -> &'static DimensionType {
        self.state.lock().dimension
    }

    /// Position of the feet or eyes.
    #[must_use]
    pub fn anchor_position(&self, anchor: EntityAnchor) -> Vector3<f64> {
        let position = self.position();
        match anchor {
            EntityAnchor::Feet => position,
            EntityAnchor::Eyes => {
                position + Vector3::new(0.0, f64::from(self.entity_type.eye_height), 0.0)
            }
        }
    }

    /// The collision box at the current position.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::at_feet(
            self.position(),
            f64::from(self.entity_type.width),
            f64::from(self.entity_type.height),
        )
    }

    /// Moves the entity within its current world. Pitch is clamped to ±90.
    pub fn move_to(&self, position: Vector3<f64>, rotation: Option<(f32, f32)>) {
        let mut state = self.state.lock();
        state.position = position;
        if let Some((yaw, pitch)) = rotation {
            state.rotation = (wrap_degrees(yaw), pitch.clamp(-90.0, 90.0));
        }
    }

    /// Records the new dimension after a world change.
    pub fn set_dimension(&self, dimension: &'static DimensionType) {
        self.state.lock().dimension = dimension;
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> f32 {
        self.state.lock().health
    }

    /// Whether the entity is alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state.lock().alive
    }

    /// Marks the entity as dead.
    pub fn mark_dead(&self) {
        let mut state = self.state.lock();
        state.alive = false;
        state.health = 0.0;
    }

    /// Whether the entity ignores damage.
    #[must_use]
    pub fn is_invulnerable(&self) -> bool {
        self.player()
            .is_some_and(|player| player.game_mode().is_invulnerable())
    }

    /// Applies damage to a living entity, returning the new health.
    ///
    /// Returns `None` when the entity can't take damage.
    pub fn hurt(&self, amount: f32) -> Option<f32> {
        if !self.entity_type.living || self.is_invulnerable() {
            return None;
        }
        let mut state = self.state.lock();
        if !state.alive {
            return None;
        }
        state.health = (state.health - amount).max(0.0);
        Some(state.health)
    }

    /// Adds a tag. Returns false if present or the entity has too many tags.
    pub fn add_tag(&self, tag: &str) -> bool {
        let mut state = self.state.lock();
        if state.tags.len() >= MAX_TAGS {
            return false;
        }
        state.tags.insert(tag.to_string())
    }

    /// Removes a tag. Returns false if it wasn't present.
    pub fn remove_tag(&self, tag: &str) -> bool {
        self.state.lock().tags.remove(tag)
    }

    /// Whether the entity has the tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.state.lock().tags.contains(tag)
    }

    /// All tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.state.lock().tags.iter().cloned().collect()
    }

    /// Sends a chat message; only players receive them.
    pub fn send_message(&self, text: TextComponent) {
        if let Some(player) = &self.player {
            log::debug!("[{}] {}", player.name, text.to_plain());
            player.messages.lock().push(text);
        }
    }
}

impl PlayerData {
    /// The current game mode.
    #[must_use]
    pub fn game_mode(&self) -> GameType {
        *self.game_mode.lock()
    }

    /// Changes the game mode. Returns false if it was already set.
    pub fn set_game_mode(&self, game_mode: GameType) -> bool {
        let mut current = self.game_mode.lock();
        if *current == game_mode {
            return false;
        }
        *current = game_mode;
        true
    }

    /// Removes and returns every message received so far.
    pub fn take_messages(&self) -> Vec<TextComponent> {
        std::mem::take(&mut *self.messages.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::dimensions::OVERWORLD;
    use crate::registry::entity_types::ZOMBIE;

    #[test]
    fn tags_are_capped() {
        let entity = Entity::new(1, &ZOMBIE, &OVERWORLD, Vector3::ZERO);
        for i in 0..MAX_TAGS {
            assert!(entity.add_tag(&format!("t{i}")));
        }
        assert!(!entity.add_tag("overflow"));
        assert!(entity.remove_tag("t0"));
        assert!(!entity.remove_tag("t0"));
        assert!(entity.add_tag("overflow"));
    }

    #[test]
    fn score_names_and_display_names() {
        let player = Entity::new_player(
            1,
            "Steve".into(),
            GameType::Survival,
            &OVERWORLD,
            Vector3::ZERO,
        );
        assert_eq!(player.scoreboard_name(), "Steve");
        let zombie = Entity::new(2, &ZOMBIE, &OVERWORLD, Vector3::ZERO);
        assert_eq!(zombie.scoreboard_name(), zombie.uuid().to_string());
        assert_eq!(zombie.name(), "Zombie");
        assert!((zombie.health() - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn creative_players_ignore_damage() {
        let player = Entity::new_player(
            1,
            "Alex".into(),
            GameType::Creative,
            &OVERWORLD,
            Vector3::ZERO,
        );
        assert_eq!(player.hurt(5.0), None);
        if let Some(data) = player.player() {
            data.set_game_mode(GameType::Survival);
        }
        assert_eq!(player.hurt(5.0), Some(15.0));
    }
}
