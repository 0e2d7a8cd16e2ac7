//! Entity attributes and their ranges.

/// A ranged attribute.
#[derive(Debug, PartialEq)]
pub struct Attribute {
    /// The registry key, e.g. `minecraft:max_health`.
    pub key: &'static str,
    /// The default base value.
    pub default_value: f64,
    /// The lowest value the attribute can take.
    pub min: f64,
    /// The highest value the attribute can take.
    pub max: f64,
}

impl Attribute {
    /// Clamps a value into this attribute's range.
    #[must_use]
    pub fn sanitize(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// The key without the `minecraft:` namespace.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.key.strip_prefix("minecraft:").unwrap_or(self.key)
    }
}

macro_rules! attributes {
    ($($name:ident = $key:literal, $default:literal, $min:literal, $max:literal;)*) => {
        $(
            #[doc = $key]
            pub static $name: Attribute = Attribute {
                key: $key,
                default_value: $default,
                min: $min,
                max: $max,
            };
        )*

        /// Every registered attribute.
        pub static ALL_ATTRIBUTES: &[&Attribute] = &[$(&$name),*];
    };
}

attributes! {
    ARMOR = "minecraft:armor", 0.0, 0.0, 30.0;
    ARMOR_TOUGHNESS = "minecraft:armor_toughness", 0.0, 0.0, 20.0;
    ATTACK_DAMAGE = "minecraft:attack_damage", 2.0, 0.0, 2048.0;
    ATTACK_KNOCKBACK = "minecraft:attack_knockback", 0.0, 0.0, 5.0;
    ATTACK_SPEED = "minecraft:attack_speed", 4.0, 0.0, 1024.0;
    BLOCK_INTERACTION_RANGE = "minecraft:block_interaction_range", 4.5, 0.0, 64.0;
    ENTITY_INTERACTION_RANGE = "minecraft:entity_interaction_range", 3.0, 0.0, 64.0;
    FALL_DAMAGE_MULTIPLIER = "minecraft:fall_damage_multiplier", 1.0, 0.0, 100.0;
    FOLLOW_RANGE = "minecraft:follow_range", 32.0, 0.0, 2048.0;
    GRAVITY = "minecraft:gravity", 0.08, -1.0, 1.0;
    JUMP_STRENGTH = "minecraft:jump_strength", 0.42, 0.0, 32.0;
    KNOCKBACK_RESISTANCE = "minecraft:knockback_resistance", 0.0, 0.0, 1.0;
    LUCK = "minecraft:luck", 0.0, -1024.0, 1024.0;
    MAX_ABSORPTION = "minecraft:max_absorption", 0.0, 0.0, 2048.0;
    MAX_HEALTH = "minecraft:max_health", 20.0, 1.0, 1024.0;
    MOVEMENT_SPEED = "minecraft:movement_speed", 0.7, 0.0, 1024.0;
    SAFE_FALL_DISTANCE = "minecraft:safe_fall_distance", 3.0, -1024.0, 1024.0;
    SCALE = "minecraft:scale", 1.0, 0.0625, 16.0;
    STEP_HEIGHT = "minecraft:step_height", 0.6, 0.0, 10.0;
}

/// Looks an attribute up by its key; a missing namespace defaults to `minecraft`.
#[must_use]
pub fn by_key(key: &str) -> Option<&'static Attribute> {
    let path = key.strip_prefix("minecraft:").unwrap_or(key);
    ALL_ATTRIBUTES
        .iter()
        .copied()
        .find(|attribute| attribute.path() == path)
}
