//! # Ingot utils
//!
//! Shared building blocks for the Ingot server: math types, identifiers,
//! text components and the legacy random generator.
pub mod locks;
pub mod math;
pub mod random;
pub mod text;
pub mod translations;
pub mod types;

pub use types::{BlockPos, GameType, Identifier};
