//! Dimension types.

/// A dimension and the properties commands care about.
#[derive(Debug, PartialEq)]
pub struct DimensionType {
    /// The registry key.
    pub key: &'static str,
    /// How many overworld blocks one block of this dimension spans.
    pub coordinate_scale: f64,
    /// The lowest block level.
    pub min_y: i32,
    /// The build height.
    pub height: i32,
}

impl DimensionType {
    /// The highest buildable y level, exclusive.
    #[must_use]
    pub const fn max_y(&self) -> i32 {
        self.min_y + self.height
    }
}

/// The overworld.
pub static OVERWORLD: DimensionType = DimensionType {
    key: "minecraft:overworld",
    coordinate_scale: 1.0,
    min_y: -64,
    height: 384,
};

/// The nether.
pub static THE_NETHER: DimensionType = DimensionType {
    key: "minecraft:the_nether",
    coordinate_scale: 8.0,
    min_y: 0,
    height: 256,
};

/// The end.
pub static THE_END: DimensionType = DimensionType {
    key: "minecraft:the_end",
    coordinate_scale: 1.0,
    min_y: 0,
    height: 256,
};

/// Every vanilla dimension.
pub static ALL_DIMENSIONS: &[&DimensionType] = &[&OVERWORLD, &THE_NETHER, &THE_END];

/// The scale to apply to horizontal coordinates when moving from `from` to `to`.
#[must_use]
pub fn teleportation_scale(from: &DimensionType, to: &DimensionType) -> f64 {
    from.coordinate_scale / to.coordinate_scale
}
