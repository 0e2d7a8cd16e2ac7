//! Entity types known to the server.

/// A type of entity.
#[derive(Debug, PartialEq)]
pub struct EntityType {
    /// The registry key, e.g. `minecraft:zombie`.
    pub key: &'static str,
    /// The English display name.
    pub name: &'static str,
    /// Living entities have health and attributes.
    pub living: bool,
    /// Whether `/summon` may create this entity.
    pub summonable: bool,
    /// Hostile mobs can't be summoned in peaceful.
    pub hostile: bool,
    /// Bounding box width.
    pub width: f32,
    /// Bounding box height.
    pub height: f32,
    /// Eye height above the feet.
    pub eye_height: f32,
}

impl EntityType {
    /// Returns the key without the `minecraft:` namespace.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.key.strip_prefix("minecraft:").unwrap_or(self.key)
    }

    /// Whether this entity may exist in peaceful difficulty.
    #[must_use]
    pub const fn is_allowed_in_peaceful(&self) -> bool {
        !self.hostile
    }
}

macro_rules! entity_types {
    ($($name:ident = $key:literal, $display:literal, living: $living:literal, summonable: $summonable:literal, hostile: $hostile:literal, $width:literal x $height:literal, eyes: $eyes:literal;)*) => {
        $(
            #[doc = $display]
            pub static $name: EntityType = EntityType {
                key: $key,
                name: $display,
                living: $living,
                summonable: $summonable,
                hostile: $hostile,
                width: $width,
                height: $height,
                eye_height: $eyes,
            };
        )*

        /// Every registered entity type.
        pub static ALL_ENTITY_TYPES: &[&EntityType] = &[$(&$name),*];
    };
}

entity_types! {
    PLAYER = "minecraft:player", "Player", living: true, summonable: false, hostile: false, 0.6 x 1.8, eyes: 1.62;
    ZOMBIE = "minecraft:zombie", "Zombie", living: true, summonable: true, hostile: true, 0.6 x 1.95, eyes: 1.74;
    SKELETON = "minecraft:skeleton", "Skeleton", living: true, summonable: true, hostile: true, 0.6 x 1.99, eyes: 1.74;
    CREEPER = "minecraft:creeper", "Creeper", living: true, summonable: true, hostile: true, 0.6 x 1.7, eyes: 1.445;
    SPIDER = "minecraft:spider", "Spider", living: true, summonable: true, hostile: true, 1.4 x 0.9, eyes: 0.65;
    COW = "minecraft:cow", "Cow", living: true, summonable: true, hostile: false, 0.9 x 1.4, eyes: 1.3;
    PIG = "minecraft:pig", "Pig", living: true, summonable: true, hostile: false, 0.9 x 0.9, eyes: 0.765;
    SHEEP = "minecraft:sheep", "Sheep", living: true, summonable: true, hostile: false, 0.9 x 1.3, eyes: 1.235;
    CHICKEN = "minecraft:chicken", "Chicken", living: true, summonable: true, hostile: false, 0.4 x 0.7, eyes: 0.644;
    VILLAGER = "minecraft:villager", "Villager", living: true, summonable: true, hostile: false, 0.6 x 1.95, eyes: 1.62;
    ARMOR_STAND = "minecraft:armor_stand", "Armor Stand", living: true, summonable: true, hostile: false, 0.5 x 1.975, eyes: 1.7775;
    SLIME = "minecraft:slime", "Slime", living: true, summonable: true, hostile: true, 0.52 x 0.52, eyes: 0.325;
    ITEM = "minecraft:item", "Item", living: false, summonable: true, hostile: false, 0.25 x 0.25, eyes: 0.2125;
    MARKER = "minecraft:marker", "Marker", living: false, summonable: true, hostile: false, 0.0 x 0.0, eyes: 0.0;
    BLOCK_DISPLAY = "minecraft:block_display", "Block Display", living: false, summonable: true, hostile: false, 0.0 x 0.0, eyes: 0.0;
    TEXT_DISPLAY = "minecraft:text_display", "Text Display", living: false, summonable: true, hostile: false, 0.0 x 0.0, eyes: 0.0;
    LIGHTNING_BOLT = "minecraft:lightning_bolt", "Lightning Bolt", living: false, summonable: true, hostile: false, 0.0 x 0.0, eyes: 0.0;
}

/// Looks an entity type up by its key; a missing namespace defaults to `minecraft`.
#[must_use]
pub fn by_key(key: &str) -> Option<&'static EntityType> {
    let path = key.strip_prefix("minecraft:").unwrap_or(key);
    ALL_ENTITY_TYPES
        .iter()
        .copied()
        .find(|entity_type| entity_type.path() == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_short_and_full_keys() {
        assert_eq!(by_key("zombie"), Some(&ZOMBIE));
        assert_eq!(by_key("minecraft:cow"), Some(&COW));
        assert_eq!(by_key("other:cow"), None);
        assert!(!PLAYER.summonable);
    }
}
