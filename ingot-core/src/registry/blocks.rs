//! Block ids accepted by block arguments.

/// Blocks known to the server.
pub static BLOCKS: &[&str] = &[
    "air",
    "cave_air",
    "void_air",
    "stone",
    "granite",
    "diorite",
    "andesite",
    "deepslate",
    "grass_block",
    "dirt",
    "coarse_dirt",
    "cobblestone",
    "oak_planks",
    "spruce_planks",
    "birch_planks",
    "oak_log",
    "oak_leaves",
    "bedrock",
    "water",
    "lava",
    "sand",
    "red_sand",
    "gravel",
    "gold_block",
    "iron_block",
    "diamond_block",
    "emerald_block",
    "redstone_block",
    "glass",
    "white_wool",
    "red_wool",
    "blue_wool",
    "green_wool",
    "yellow_wool",
    "black_wool",
    "obsidian",
    "torch",
    "fire",
    "soul_fire",
    "chest",
    "crafting_table",
    "furnace",
    "ladder",
    "snow_block",
    "ice",
    "netherrack",
    "glowstone",
    "end_stone",
    "barrier",
    "bricks",
    "tnt",
    "sponge",
    "oak_stairs",
    "oak_slab",
    "stone_bricks",
    "command_block",
    "structure_void",
];

/// Returns true if the path names a known block.
#[must_use]
pub fn is_known(path: &str) -> bool {
    BLOCKS.contains(&path)
}
