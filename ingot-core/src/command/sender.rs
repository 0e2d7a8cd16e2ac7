//! The sender of a command.
use std::sync::Arc;

use ingot_utils::text::TextComponent;

use crate::entity::Entity;

/// Who issued a command.
#[derive(Clone)]
pub enum CommandSender {
    /// The server console.
    Console,
    /// A player.
    Player(Arc<Entity>),
}

impl CommandSender {
    /// Returns the player if the sender is one.
    #[must_use]
    pub fn get_player(&self) -> Option<&Arc<Entity>> {
        match self {
            CommandSender::Console => None,
            CommandSender::Player(player) => Some(player),
        }
    }

    /// The name shown for this sender in chat.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            CommandSender::Console => "Server".to_string(),
            CommandSender::Player(player) => player.name(),
        }
    }

    /// Sends feedback to the sender.
    pub fn send_message(&self, text: &TextComponent) {
        match self {
            CommandSender::Console => log::info!("{}", text.to_plain()),
            CommandSender::Player(player) => player.send_message(text.clone()),
        }
    }
}
