//! # Ingot core
//!
//! The game model of the Ingot server and the command engine that drives it.
pub mod advancement;
pub mod bossbar;
pub mod command;
pub mod config;
pub mod difficulty;
pub mod entity;
pub mod registry;
pub mod scoreboard;
pub mod server;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;
