//! This module contains the command context.
use std::sync::Arc;

use ingot_utils::Identifier;
use ingot_utils::math::Vector3;
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::error::CommandError;
use crate::command::sender::CommandSender;
use crate::entity::{Entity, EntityAnchor};
use crate::server::Server;
use crate::world::World;

/// Where `execute store` writes a command result.
#[derive(Debug, Clone)]
pub enum ResultStore {
    /// Scores of the given holders.
    Score {
        /// Score holder names.
        holders: Vec<String>,
        /// The objective name.
        objective: String,
        /// Store 1/0 for success instead of the result.
        success: bool,
    },
    /// The value of a boss bar.
    BossbarValue {
        /// The boss bar id.
        id: Identifier,
        /// Store 1/0 for success instead of the result.
        success: bool,
    },
    /// The maximum of a boss bar.
    BossbarMax {
        /// The boss bar id.
        id: Identifier,
        /// Store 1/0 for success instead of the result.
        success: bool,
    },
}

/// The context of a command.
#[derive(Clone)]
pub struct CommandContext {
    /// The sender of the command.
    pub sender: CommandSender,
    /// The entity executing the command.
    pub entity: Option<Arc<Entity>>,
    /// The world/dimension of the command.
    pub world: Arc<World>,
    /// The server where the command has been run.
    pub server: Arc<Server>,
    /// The position of the command.
    pub position: Vector3<f64>,
    /// The rotation of the command, yaw then pitch.
    pub rotation: (f32, f32),
    /// The anchor of the command.
    pub anchor: EntityAnchor,
    /// Where the result of the command is stored.
    pub result_stores: Vec<ResultStore>,
    /// Whether the context was forked by a redirect.
    pub forked: bool,
    /// The name of the command being run.
    pub command: &'static str,
}

impl CommandContext {
    /// Creates a new command context.
    #[must_use]
    pub fn new(sender: CommandSender, server: Arc<Server>) -> Self {
        let entity = sender.get_player().cloned();
        let (world, position, rotation) = match &entity {
            Some(entity) => (
                server.world_of(entity).clone(),
                entity.position(),
                entity.rotation(),
            ),
            None => {
                let world = server.overworld().clone();
                let spawn = world.level_data.lock().spawn;
                (world, spawn.bottom_center(), (0.0, 0.0))
            }
        };

        Self {
            sender,
            entity,
            world,
            server,
            position,
            rotation,
            anchor: EntityAnchor::default(),
            result_stores: Vec::new(),
            forked: false,
            command: "",
        }
    }

    /// The executing entity, or an error if there is none.
    pub fn require_entity(&self) -> Result<&Arc<Entity>, CommandError> {
        self.entity
            .as_ref()
            .ok_or_else(|| CommandError::msg(translations::PERMISSIONS_REQUIRES_ENTITY))
    }

    /// The executing player, or an error if the entity isn't a player.
    pub fn require_player(&self) -> Result<&Arc<Entity>, CommandError> {
        self.entity
            .as_ref()
            .filter(|entity| entity.is_player())
            .ok_or_else(|| CommandError::msg(translations::PERMISSIONS_REQUIRES_PLAYER))
    }

    /// The point local coordinates and `facing` are measured from.
    #[must_use]
    pub fn anchor_position(&self) -> Vector3<f64> {
        match (&self.entity, self.anchor) {
            (Some(entity), EntityAnchor::Eyes) => {
                self.position
                    + Vector3::new(0.0, f64::from(entity.entity_type().eye_height), 0.0)
            }
            _ => self.position,
        }
    }

    /// Sends command feedback to the sender.
    pub fn send_success(&self, text: &TextComponent) {
        self.sender.send_message(text);
    }

    /// Writes a result into every store of this context.
    pub fn store_result(&self, success: bool, result: i32) {
        for store in &self.result_stores {
            match store {
                ResultStore::Score {
                    holders,
                    objective,
                    success: store_success,
                } => {
                    let value = if *store_success { i32::from(success) } else { result };
                    let mut scoreboard = self.server.scoreboard.lock();
                    if scoreboard.objective(objective).is_none() {
                        continue;
                    }
                    for holder in holders {
                        scoreboard.score_mut(holder, objective).value = value;
                    }
                }
                ResultStore::BossbarValue {
                    id,
                    success: store_success,
                } => {
                    let value = if *store_success { i32::from(success) } else { result };
                    if let Some(bar) = self.server.bossbars.lock().get_mut(id) {
                        bar.value = value;
                    }
                }
                ResultStore::BossbarMax {
                    id,
                    success: store_success,
                } => {
                    let value = if *store_success { i32::from(success) } else { result };
                    if let Some(bar) = self.server.bossbars.lock().get_mut(id) {
                        bar.max = value.max(1);
                    }
                }
            }
        }
    }
}
