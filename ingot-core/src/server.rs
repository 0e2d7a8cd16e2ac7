//! The shared server state.
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};

use ingot_utils::locks::SyncMutex;
use ingot_utils::math::Vector3;
use ingot_utils::text::TextComponent;
use ingot_utils::BlockPos;
use uuid::Uuid;

use crate::advancement::{AdvancementError, AdvancementTree, DEFAULT_ADVANCEMENTS};
use crate::bossbar::CustomBossEvents;
use crate::command::CommandDispatcher;
use crate::command::sender::CommandSender;
use crate::config::{ConfigError, ServerConfig};
use crate::difficulty::Difficulty;
use crate::entity::Entity;
use crate::registry::dimensions::{self, DimensionType};
use crate::registry::entity_types::EntityType;
use crate::scoreboard::{ObjectiveCriteria, Scoreboard};
use crate::world::World;
use crate::world::block_state::BlockState;
use crate::world::border::WorldBorder;

/// Permissions players hold without being an operator.
const PUBLIC_PERMISSIONS: &[&str] = &["minecraft:command.help", "minecraft:command.trigger"];

/// An error raised while starting the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The advancements could not be loaded.
    #[error(transparent)]
    Advancements(#[from] AdvancementError),
    /// A flat layer names an unknown block.
    #[error("invalid flat layer block: {0}")]
    InvalidBlock(String),
}

/// The shared state of a running server.
pub struct Server {
    /// The loaded configuration.
    pub config: ServerConfig,
    /// Every world; the overworld comes first.
    pub worlds: Vec<Arc<World>>,
    /// The scoreboard.
    pub scoreboard: SyncMutex<Scoreboard>,
    /// Custom boss bars.
    pub bossbars: SyncMutex<CustomBossEvents>,
    /// The advancement tree.
    pub advancements: AdvancementTree,
    /// The command dispatcher.
    pub command_dispatcher: CommandDispatcher,
    difficulty: SyncMutex<Difficulty>,
    next_entity_id: AtomicI32,
    tick_count: AtomicU64,
}

impl Server {
    /// Creates the server and its worlds from a configuration.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        config.validate()?;

        let layers = config
            .flat_layers
            .iter()
            .map(|layer| BlockState::parse(layer).map_err(ServerError::InvalidBlock))
            .collect::<Result<Vec<_>, _>>()?;
        let [x, y, z] = config.spawn_point;
        let spawn = BlockPos::new(x, y, z);

        let worlds = dimensions::ALL_DIMENSIONS
            .iter()
            .map(|&dimension| {
                let (min_y, height, layers) = if std::ptr::eq(dimension, &dimensions::OVERWORLD) {
                    (config.min_y, config.height, layers.clone())
                } else {
                    (dimension.min_y, dimension.height, Vec::new())
                };
                Arc::new(World::new(
                    dimension,
                    min_y,
                    height,
                    layers,
                    WorldBorder::new(config.world_border_size),
                    spawn,
                ))
            })
            .collect();

        let advancements = AdvancementTree::from_json(DEFAULT_ADVANCEMENTS)?;
        log::info!("Loaded {} advancements", advancements.len());

        Ok(Self {
            difficulty: SyncMutex::new(config.difficulty),
            config,
            worlds,
            scoreboard: SyncMutex::new(Scoreboard::default()),
            bossbars: SyncMutex::new(CustomBossEvents::default()),
            advancements,
            command_dispatcher: CommandDispatcher::default(),
            next_entity_id: AtomicI32::new(1),
            tick_count: AtomicU64::new(0),
        })
    }

    /// The overworld.
    #[must_use]
    pub fn overworld(&self) -> &Arc<World> {
        &self.worlds[0]
    }

    /// The world of a dimension.
    #[must_use]
    pub fn world(&self, dimension: &DimensionType) -> Option<&Arc<World>> {
        self.worlds
            .iter()
            .find(|world| std::ptr::eq(world.dimension, dimension))
    }

    /// The world of a dimension by key.
    #[must_use]
    pub fn world_by_key(&self, key: &str) -> Option<&Arc<World>> {
        self.worlds.iter().find(|world| world.dimension.key == key)
    }

    /// The world an entity is in.
    #[must_use]
    pub fn world_of(&self, entity: &Entity) -> &Arc<World> {
        self.world(entity.dimension())
            .unwrap_or_else(|| self.overworld())
    }

    /// The current difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        *self.difficulty.lock()
    }

    /// Changes the difficulty. Returns false if it was already set.
    pub fn set_difficulty(&self, difficulty: Difficulty) -> bool {
        let mut current = self.difficulty.lock();
        if *current == difficulty {
            return false;
        }
        *current = difficulty;
        true
    }

    /// Ticks since the server started.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    fn next_entity_id(&self) -> i32 {
        self.next_entity_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Spawns a player at the world spawn of the overworld.
    pub fn spawn_player(&self, name: &str) -> Arc<Entity> {
        let world = self.overworld();
        let (spawn, angle) = {
            let level_data = world.level_data.lock();
            (level_data.spawn, level_data.spawn_angle)
        };
        let player = Arc::new(Entity::new_player(
            self.next_entity_id(),
            name.to_string(),
            self.config.default_game_mode,
            world.dimension,
            spawn.bottom_center(),
        ));
        player.move_to(spawn.bottom_center(), Some((angle, 0.0)));
        world.add_entity(player.clone());
        log::info!("{name} joined the game");
        player
    }

    /// Spawns a non-player entity.
    pub fn spawn_entity(
        &self,
        world: &World,
        entity_type: &'static EntityType,
        position: Vector3<f64>,
    ) -> Arc<Entity> {
        let entity = Arc::new(Entity::new(
            self.next_entity_id(),
            entity_type,
            world.dimension,
            position,
        ));
        world.add_entity(entity.clone());
        entity
    }

    /// Every player in every world, in join order.
    #[must_use]
    pub fn players(&self) -> Vec<Arc<Entity>> {
        let mut players: Vec<_> = self.worlds.iter().flat_map(|world| world.players()).collect();
        players.sort_by_key(|player| player.id());
        players
    }

    /// Every entity in every world, in spawn order.
    #[must_use]
    pub fn all_entities(&self) -> Vec<Arc<Entity>> {
        let mut entities: Vec<_> = self
            .worlds
            .iter()
            .flat_map(|world| world.entities())
            .collect();
        entities.sort_by_key(|entity| entity.id());
        entities
    }

    /// Looks a player up by name, ignoring case.
    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<Arc<Entity>> {
        self.players().into_iter().find(|player| {
            player
                .player()
                .is_some_and(|data| data.name.eq_ignore_ascii_case(name))
        })
    }

    /// Looks an entity up by UUID in every world.
    #[must_use]
    pub fn entity_by_uuid(&self, uuid: Uuid) -> Option<Arc<Entity>> {
        self.worlds.iter().find_map(|world| world.entity(uuid))
    }

    /// Moves an entity, switching worlds when `world` differs from its current one.
    pub fn teleport(
        &self,
        entity: &Arc<Entity>,
        world: &Arc<World>,
        position: Vector3<f64>,
        rotation: Option<(f32, f32)>,
    ) {
        let current = self.world_of(entity);
        if !Arc::ptr_eq(current, world) {
            current.remove_entity(entity.uuid());
            entity.set_dimension(world.dimension);
            world.add_entity(entity.clone());
        }
        entity.move_to(position, rotation);
    }

    /// Kills an entity. Players stay in the world as dead players, other
    /// entities are removed.
    pub fn kill(&self, entity: &Arc<Entity>) {
        entity.mark_dead();
        if entity.is_player() {
            let holder = entity.scoreboard_name();
            let mut scoreboard = self.scoreboard.lock();
            scoreboard.for_all_with_criteria(ObjectiveCriteria::DeathCount, &holder, |score| {
                score.value = score.value.wrapping_add(1);
            });
            scoreboard.for_all_with_criteria(ObjectiveCriteria::Health, &holder, |score| {
                score.value = 0;
            });
        } else {
            self.world_of(entity).remove_entity(entity.uuid());
        }
    }

    /// Damages an entity, updating `health` objectives and killing it at zero
    /// health. Returns false if the entity can't be hurt.
    pub fn hurt(&self, entity: &Arc<Entity>, amount: f32) -> bool {
        let Some(health) = entity.hurt(amount) else {
            return false;
        };
        if health <= 0.0 {
            self.kill(entity);
        } else if entity.is_player() {
            let holder = entity.scoreboard_name();
            self.scoreboard.lock().for_all_with_criteria(
                ObjectiveCriteria::Health,
                &holder,
                |score| score.value = health.ceil() as i32,
            );
        }
        true
    }

    /// Sends a message to every player and the console.
    pub fn broadcast_message(&self, text: &TextComponent) {
        log::info!("{}", text.to_plain());
        for player in self.players() {
            player.send_message(text.clone());
        }
    }

    /// Whether the sender may use a command with the given permission.
    #[must_use]
    pub fn has_permission(&self, sender: &CommandSender, permission: &str) -> bool {
        match sender {
            CommandSender::Console => true,
            CommandSender::Player(player) => {
                PUBLIC_PERMISSIONS.contains(&permission)
                    || self
                        .config
                        .ops
                        .iter()
                        .any(|op| player.player().is_some_and(|data| data.name.eq_ignore_ascii_case(op)))
            }
        }
    }

    /// Ticks every world.
    pub fn tick(&self) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        for world in &self.worlds {
            world.tick();
        }
    }
}
