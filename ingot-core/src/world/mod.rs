//! This module contains the `World` struct, which represents a dimension.
pub mod block_state;
pub mod border;
pub mod level_data;

use std::sync::Arc;

use ingot_utils::BlockPos;
use ingot_utils::locks::{SyncMutex, SyncRwLock};
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::entity::Entity;
use crate::registry::dimensions::DimensionType;
use crate::world::block_state::BlockState;
use crate::world::border::WorldBorder;
use crate::world::level_data::LevelData;

/// A flat world.
pub struct World {
    /// The dimension this world represents.
    pub dimension: &'static DimensionType,
    min_y: i32,
    height: i32,
    entities: scc::HashMap<Uuid, Arc<Entity>>,
    blocks: SyncRwLock<FxHashMap<BlockPos, BlockState>>,
    flat_layers: Vec<BlockState>,
    /// The world border.
    pub border: SyncMutex<WorldBorder>,
    /// Time, weather and spawn.
    pub level_data: SyncMutex<LevelData>,
}

impl World {
    /// Creates a world filled with `flat_layers` from `min_y` upwards.
    #[must_use]
    pub fn new(
        dimension: &'static DimensionType,
        min_y: i32,
        height: i32,
        flat_layers: Vec<BlockState>,
        border: WorldBorder,
        spawn: BlockPos,
    ) -> Self {
        Self {
            dimension,
            min_y,
            height,
            entities: scc::HashMap::new(),
            blocks: SyncRwLock::new(FxHashMap::default()),
            flat_layers,
            border: SyncMutex::new(border),
            level_data: SyncMutex::new(LevelData {
                spawn,
                ..LevelData::default()
            }),
        }
    }

    /// The lowest block y.
    #[must_use]
    pub const fn min_y(&self) -> i32 {
        self.min_y
    }

    /// One above the highest block y.
    #[must_use]
    pub const fn max_y(&self) -> i32 {
        self.min_y + self.height
    }

    /// Whether `pos` is inside the build height.
    #[must_use]
    pub const fn is_in_height(&self, pos: BlockPos) -> bool {
        pos.y() >= self.min_y && pos.y() < self.max_y()
    }

    /// Whether `pos` is inside the build height and the horizontal world limit.
    #[must_use]
    pub const fn is_in_world_bounds(&self, pos: BlockPos) -> bool {
        self.is_in_height(pos)
            && pos.x().unsigned_abs() < 30_000_000
            && pos.z().unsigned_abs() < 30_000_000
    }

    /// Whether entities may be placed at `pos` at all.
    #[must_use]
    pub const fn is_in_spawnable_bounds(pos: BlockPos) -> bool {
        pos.x().unsigned_abs() < 30_000_000
            && pos.z().unsigned_abs() < 30_000_000
            && pos.y() >= -20_000_000
            && pos.y() < 20_000_000
    }

    /// The block at `pos`; outside the build height everything is void air.
    #[must_use]
    pub fn get_block_state(&self, pos: BlockPos) -> BlockState {
        if !self.is_in_height(pos) {
            return BlockState::simple(ingot_utils::Identifier::vanilla_static("void_air"));
        }
        if let Some(state) = self.blocks.read().get(&pos) {
            return state.clone();
        }
        usize::try_from(pos.y() - self.min_y)
            .ok()
            .and_then(|layer| self.flat_layers.get(layer))
            .cloned()
            .unwrap_or(BlockState::AIR)
    }

    /// Sets the block at `pos`. Returns false if nothing changed or `pos` is
    /// outside the build height.
    pub fn set_block_state(&self, pos: BlockPos, state: BlockState) -> bool {
        if !self.is_in_height(pos) || self.get_block_state(pos) == state {
            return false;
        }
        self.blocks.write().insert(pos, state);
        true
    }

    /// Adds an entity to the world.
    pub fn add_entity(&self, entity: Arc<Entity>) {
        if self.entities.insert_sync(entity.uuid(), entity).is_err() {
            log::warn!("Entity added to {} twice", self.dimension.key);
        }
    }

    /// Removes an entity from the world.
    pub fn remove_entity(&self, uuid: Uuid) -> Option<Arc<Entity>> {
        self.entities.remove_sync(&uuid).map(|(_, entity)| entity)
    }

    /// Looks an entity up by UUID.
    #[must_use]
    pub fn entity(&self, uuid: Uuid) -> Option<Arc<Entity>> {
        self.entities.read_sync(&uuid, |_, entity| entity.clone())
    }

    /// Every entity, in spawn order.
    #[must_use]
    pub fn entities(&self) -> Vec<Arc<Entity>> {
        let mut entities = Vec::new();
        self.entities.iter_sync(|_, entity| {
            entities.push(entity.clone());
            true
        });
        entities.sort_by_key(|entity| entity.id());
        entities
    }

    /// Every player, in join order.
    #[must_use]
    pub fn players(&self) -> Vec<Arc<Entity>> {
        let mut players = self.entities();
        players.retain(|entity| entity.is_player());
        players
    }

    /// Ticks the clock, the weather and the border.
    pub fn tick(&self) {
        self.level_data.lock().tick();
        self.border.lock().tick();
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::Identifier;
    use ingot_utils::math::Vector3;

    use super::*;
    use crate::registry::dimensions::OVERWORLD;
    use crate::registry::entity_types::ZOMBIE;

    fn world() -> World {
        World::new(
            &OVERWORLD,
            -64,
            384,
            vec![
                BlockState::simple(Identifier::vanilla_static("bedrock")),
                BlockState::simple(Identifier::vanilla_static("dirt")),
            ],
            WorldBorder::default(),
            BlockPos::new(0, -62, 0),
        )
    }

    #[test]
    fn flat_layers_and_overrides() {
        let world = world();
        assert_eq!(
            world.get_block_state(BlockPos::new(3, -64, 7)).block.path,
            "bedrock"
        );
        assert!(world.get_block_state(BlockPos::new(0, -62, 0)).is_air());
        assert!(world.get_block_state(BlockPos::new(0, 400, 0)).is_air());

        let stone = BlockState::simple(Identifier::vanilla_static("stone"));
        assert!(world.set_block_state(BlockPos::new(0, -62, 0), stone.clone()));
        assert!(!world.set_block_state(BlockPos::new(0, -62, 0), stone));
        assert!(!world.set_block_state(BlockPos::new(0, 320, 0), BlockState::AIR));
    }

    #[test]
    fn entities_are_listed_in_spawn_order() {
        let world = world();
        let second = Arc::new(Entity::new(2, &ZOMBIE, &OVERWORLD, Vector3::ZERO));
        let first = Arc::new(Entity::new(1, &ZOMBIE, &OVERWORLD, Vector3::ZERO));
        world.add_entity(second.clone());
        world.add_entity(first);
        assert_eq!(
            world.entities().iter().map(|e| e.id()).collect::<Vec<_>>(),
            [1, 2]
        );
        assert!(world.remove_entity(second.uuid()).is_some());
        assert!(world.entity(second.uuid()).is_none());
    }
}
