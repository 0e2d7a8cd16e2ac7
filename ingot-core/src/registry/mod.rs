//! Static game registries: entity types, attributes, dimensions and blocks.
pub mod attributes;
pub mod blocks;
pub mod dimensions;
pub mod entity_types;
