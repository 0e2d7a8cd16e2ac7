//! Block states as used by the flat world and the block commands.
use std::fmt::{self, Display};

use ingot_utils::Identifier;

use crate::registry::blocks;

/// A block together with its property values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockState {
    /// The block identifier.
    pub block: Identifier,
    /// Property values, sorted by property name.
    pub properties: Vec<(String, String)>,
}

impl BlockState {
    /// Plain air.
    pub const AIR: BlockState = BlockState::simple(Identifier::vanilla_static("air"));

    /// A block without properties.
    #[must_use]
    pub const fn simple(block: Identifier) -> Self {
        Self {
            block,
            properties: Vec::new(),
        }
    }

    /// Parses `namespace:block[key=value,...]`.
    ///
    /// Fails with the offending block id when the block is not registered.
    pub fn parse(s: &str) -> Result<Self, String> {
        let (id, properties) = match s.split_once('[') {
            Some((id, rest)) => (id, Some(rest.strip_suffix(']').ok_or_else(|| s.to_string())?)),
            None => (s, None),
        };
        let block = Identifier::parse(id)?;
        if block.namespace != "minecraft" || !blocks::is_known(&block.path) {
            return Err(block.to_string());
        }

        let mut parsed = Vec::new();
        for property in properties.into_iter().flat_map(|p| p.split(',')) {
            if property.is_empty() {
                continue;
            }
            let (key, value) = property.split_once('=').ok_or_else(|| s.to_string())?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() || parsed.iter().any(|(k, _)| k == key) {
                return Err(s.to_string());
            }
            parsed.push((key.to_string(), value.to_string()));
        }
        parsed.sort();

        Ok(Self {
            block,
            properties: parsed,
        })
    }

    /// Whether this is any kind of air.
    #[must_use]
    pub fn is_air(&self) -> bool {
        matches!(&*self.block.path, "air" | "cave_air" | "void_air")
    }

    /// Whether this block is a fluid.
    #[must_use]
    pub fn is_liquid(&self) -> bool {
        matches!(&*self.block.path, "water" | "lava")
    }

    /// Whether this block is a fire.
    #[must_use]
    pub fn is_fire(&self) -> bool {
        matches!(&*self.block.path, "fire" | "soul_fire")
    }

    /// Whether an entity can stand on this block.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        !self.is_air() && !self.is_liquid() && !self.is_fire()
    }

    /// Whether `self` matches `predicate`: same block, and every property the
    /// predicate names has the same value.
    #[must_use]
    pub fn matches(&self, predicate: &BlockState) -> bool {
        self.block == predicate.block
            && predicate
                .properties
                .iter()
                .all(|property| self.properties.contains(property))
    }
}

impl Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block)?;
        if !self.properties.is_empty() {
            f.write_str("[")?;
            for (i, (key, value)) in self.properties.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{key}={value}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_properties_sorted() {
        let state = BlockState::parse("oak_log[axis=y]").expect("valid state");
        assert_eq!(state.to_string(), "minecraft:oak_log[axis=y]");
        let stairs = BlockState::parse("minecraft:oak_stairs[half=top,facing=north]")
            .expect("valid state");
        assert_eq!(stairs.properties[0].0, "facing");
    }

    #[test]
    fn rejects_unknown_blocks() {
        assert_eq!(
            BlockState::parse("minecraft:unobtainium"),
            Err("minecraft:unobtainium".to_string())
        );
        assert!(BlockState::parse("stone[axis]").is_err());
    }

    #[test]
    fn predicates_match_subsets() {
        let log = BlockState::parse("oak_log[axis=x]").expect("valid state");
        assert!(log.matches(&BlockState::parse("oak_log").expect("valid state")));
        assert!(!log.matches(&BlockState::parse("oak_log[axis=y]").expect("valid state")));
        assert!(BlockState::AIR.is_air());
    }
}
