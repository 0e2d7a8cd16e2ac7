//! Helpers for tests that need a running server.
use std::sync::Arc;

use ingot_utils::math::Vector3;
use ingot_utils::text::TextComponent;

use crate::command::commands::CommandResult;
use crate::command::context::CommandContext;
use crate::command::sender::CommandSender;
use crate::config::ServerConfig;
use crate::entity::Entity;
use crate::registry::entity_types::EntityType;
use crate::server::Server;

/// A server built from the default config, with `Steve` as the only op.
pub(crate) struct TestServer {
    pub server: Arc<Server>,
}

impl TestServer {
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        let server = Server::new(config).expect("default config is valid");
        Self {
            server: Arc::new(server),
        }
    }

    /// Returns the named player, spawning them if they aren't online.
    pub fn player(&self, name: &str) -> Arc<Entity> {
        self.server
            .player_by_name(name)
            .unwrap_or_else(|| self.server.spawn_player(name))
    }

    /// Spawns an entity in the overworld.
    pub fn summon(&self, entity_type: &'static EntityType, position: Vector3<f64>) -> Arc<Entity> {
        self.server
            .spawn_entity(self.server.overworld(), entity_type, position)
    }

    pub fn console_context(&self) -> CommandContext {
        CommandContext::new(CommandSender::Console, self.server.clone())
    }

    pub fn context_for(&self, player: &Arc<Entity>) -> CommandContext {
        CommandContext::new(CommandSender::Player(player.clone()), self.server.clone())
    }

    pub fn run_console(&self, command: &str) -> CommandResult {
        let mut context = self.console_context();
        self.server.command_dispatcher.execute(&mut context, command)
    }

    /// Runs a console command that must succeed.
    pub fn console(&self, command: &str) -> i32 {
        match self.run_console(command) {
            Ok(result) => result,
            Err(error) => panic!("\"{command}\" failed: {error:?}"),
        }
    }

    pub fn run_as(&self, player: &Arc<Entity>, command: &str) -> CommandResult {
        let mut context = self.context_for(player);
        self.server.command_dispatcher.execute(&mut context, command)
    }

    /// The plain text of every message the player received since the last call.
    pub fn messages(&self, player: &Arc<Entity>) -> Vec<String> {
        player
            .player()
            .map(|data| data.take_messages())
            .unwrap_or_default()
            .iter()
            .map(TextComponent::to_plain)
            .collect()
    }
}
