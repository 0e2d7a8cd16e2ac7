//! # Ingot
//!
//! The console host for the Ingot server: it ticks the worlds and runs commands typed on stdin.
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ingot_core::command::sender::CommandSender;
use ingot_core::config::ServerConfig;
use ingot_core::server::{Server, ServerError};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tokio::{select, spawn};
use tokio_util::sync::CancellationToken;

pub mod logger;

/// The main server struct.
pub struct IngotServer {
    /// The cancellation token for graceful shutdown.
    pub cancel_token: CancellationToken,
    /// The shared server state.
    pub server: Arc<Server>,
}

impl IngotServer {
    /// Creates the server and spawns the configured fake players.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        log::info!("Starting Ingot Server");

        let server = Server::new(config)?;
        for name in &server.config.fake_players {
            server.spawn_player(name);
            log::info!("{name} joined the game");
        }

        Ok(Self {
            cancel_token: CancellationToken::new(),
            server: Arc::new(server),
        })
    }

    /// Starts the tick loop and the console reader.
    pub fn start(&self) {
        log::info!("Started Ingot Server");
        self.start_ticking();
        self.start_console();
    }

    fn start_ticking(&self) {
        let server = self.server.clone();
        let cancel_token = self.cancel_token.clone();
        let period = Duration::from_secs_f32(1.0 / server.config.tick_rate);

        spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                select! {
                    () = cancel_token.cancelled() => break,
                    _ = interval.tick() => server.tick(),
                }
            }
        });
    }

    fn start_console(&self) {
        let server = self.server.clone();
        let cancel_token = self.cancel_token.clone();
        let (tx, mut rx) = mpsc::unbounded_channel();

        // Stdin blocks, so it gets its own thread that the runtime doesn't wait on.
        thread::spawn(move || {
            for line in io::stdin().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log::warn!("Failed to read console input: {e}");
                        break;
                    }
                }
            }
        });

        spawn(async move {
            loop {
                let line = select! {
                    () = cancel_token.cancelled() => break,
                    line = rx.recv() => line,
                };
                let Some(line) = line else {
                    break;
                };
                let command = line.trim().trim_start_matches('/');
                if command.is_empty() {
                    continue;
                }
                if command == "stop" {
                    log::info!("Stopping the server");
                    cancel_token.cancel();
                    break;
                }
                server
                    .command_dispatcher
                    .handle_command(CommandSender::Console, command, server.clone());
            }
        });
    }

    /// Stops the server.
    pub fn stop(&self) {
        self.cancel_token.cancel();
    }
}
