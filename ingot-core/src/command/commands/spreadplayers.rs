//! Handler for the "spreadplayers" command.
use std::sync::Arc;

use ingot_utils::BlockPos;
use ingot_utils::math::{Vector2, Vector3};
use ingot_utils::random::{LegacyRandom, Random};
use ingot_utils::text::TextComponent;
use ingot_utils::translations;
use rustc_hash::FxHashMap;

use crate::command::arguments::boolean::BoolArgument;
use crate::command::arguments::coordinates::Vector2Argument;
use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::numbers::{FloatArgument, IntegerArgument};
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::entity::Entity;
use crate::world::World;

const MAX_ITERATIONS: usize = 10_000;

/// Handler for the "spreadplayers" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["spreadplayers"],
        "Teleports entities to random surface locations within an area.",
        "minecraft:command.spreadplayers",
    )
    .then(
        argument("center", Vector2Argument).then(
            argument("spreadDistance", FloatArgument::at_least(0.0)).then(
                argument("maxRange", FloatArgument::at_least(1.0))
                    .then(
                        argument("respectTeams", BoolArgument).then(
                            argument("targets", EntityArgument::entities())
                                .executes(SpreadPlayersCommandExecutor),
                        ),
                    )
                    .then(
                        literal("under").then(
                            argument("maxHeight", IntegerArgument::any()).then(
                                argument("respectTeams", BoolArgument).then(
                                    argument("targets", EntityArgument::entities())
                                        .executes(SpreadPlayersCommandExecutor),
                                ),
                            ),
                        ),
                    ),
            ),
        ),
    )
}

type Area = ((((), Vector2<f64>), f32), f32);

struct SpreadPlayersCommandExecutor;

impl CommandExecutor<((Area, bool), EntitySelector)> for SpreadPlayersCommandExecutor {
    fn execute(
        &self,
        args: ((Area, bool), EntitySelector),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((((), center), spread_distance), max_range), respect_teams), targets) = args;
        let max_height = context.world.max_y();
        let targets = targets.entities(context)?;
        let spread = Spread {
            center,
            spread_distance: f64::from(spread_distance),
            max_range: f64::from(max_range),
            max_height,
            respect_teams,
        };
        spread.run(&targets, context)
    }
}

impl CommandExecutor<((((Area, ()), i32), bool), EntitySelector)> for SpreadPlayersCommandExecutor {
    fn execute(
        &self,
        args: ((((Area, ()), i32), bool), EntitySelector),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((((((), center), spread_distance), max_range), ()), max_height), respect_teams), targets) =
            args;
        let targets = targets.entities(context)?;
        let spread = Spread {
            center,
            spread_distance: f64::from(spread_distance),
            max_range: f64::from(max_range),
            max_height,
            respect_teams,
        };
        spread.run(&targets, context)
    }
}

/// A column candidate, in block coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spot {
    x: f64,
    z: f64,
}

impl Spot {
    fn distance(self, other: Spot) -> f64 {
        ((self.x - other.x).powi(2) + (self.z - other.z).powi(2)).sqrt()
    }

    fn randomize(&mut self, random: &mut impl Random, bounds: &Bounds) {
        self.x = random.next_f64_between(bounds.min_x, bounds.max_x);
        self.z = random.next_f64_between(bounds.min_z, bounds.max_z);
    }

    /// Moves the spot back inside the bounds. Returns true if it moved.
    fn clamp(&mut self, bounds: &Bounds) -> bool {
        let clamped = Spot {
            x: self.x.clamp(bounds.min_x, bounds.max_x),
            z: self.z.clamp(bounds.min_z, bounds.max_z),
        };
        let moved = clamped != *self;
        *self = clamped;
        moved
    }

    /// The y an entity lands on: the first air over air over non-air column
    /// scanning down from `max_height + 1`. Everything above the build height
    /// is air, so the scan starts no higher than that.
    fn spawn_y(self, world: &World, max_height: i32) -> i32 {
        let x = self.x.floor() as i32;
        let z = self.z.floor() as i32;
        let top = max_height.min(world.max_y()) + 1;
        let mut y = top;
        let mut above_air = world.get_block_state(BlockPos::new(x, y, z)).is_air();
        y -= 1;
        let mut here_air = world.get_block_state(BlockPos::new(x, y, z)).is_air();

        while y > world.min_y() {
            y -= 1;
            let below_air = world.get_block_state(BlockPos::new(x, y, z)).is_air();
            if !below_air && here_air && above_air {
                return y + 1;
            }
            above_air = here_air;
            here_air = below_air;
        }
        top
    }

    fn is_safe(self, world: &World, max_height: i32) -> bool {
        let y = self.spawn_y(world, max_height) - 1;
        let ground = world.get_block_state(BlockPos::new(self.x.floor() as i32, y, self.z.floor() as i32));
        y < max_height && !ground.is_liquid() && !ground.is_fire()
    }
}

struct Bounds {
    min_x: f64,
    min_z: f64,
    max_x: f64,
    max_z: f64,
}

struct Spread {
    center: Vector2<f64>,
    spread_distance: f64,
    max_range: f64,
    max_height: i32,
    respect_teams: bool,
}

impl Spread {
    fn run(&self, targets: &[Arc<Entity>], context: &CommandContext) -> CommandResult {
        let world = &context.world;
        if self.max_height < world.min_y() {
            return Err(CommandError::translated(
                translations::COMMANDS_SPREADPLAYERS_FAILED_INVALID_HEIGHT,
                [self.max_height.into(), world.min_y().into()],
            ));
        }

        let bounds = Bounds {
            min_x: self.center.x - self.max_range,
            min_z: self.center.y - self.max_range,
            max_x: self.center.x + self.max_range,
            max_z: self.center.y + self.max_range,
        };
        let teams = self.team_keys(targets, context);
        let count = if self.respect_teams {
            let mut distinct = teams.clone();
            distinct.sort_unstable();
            distinct.dedup();
            distinct.len()
        } else {
            targets.len()
        };

        let mut random = LegacyRandom::from_seed(rand::random());
        let mut spots = vec![Spot { x: 0.0, z: 0.0 }; count];
        for spot in &mut spots {
            spot.randomize(&mut random, &bounds);
        }
        self.spread(&mut spots, &bounds, world, &mut random)?;

        let distance = self.place(targets, &teams, &spots, context);
        let translation = if self.respect_teams {
            translations::COMMANDS_SPREADPLAYERS_SUCCESS_TEAMS
        } else {
            translations::COMMANDS_SPREADPLAYERS_SUCCESS_ENTITIES
        };
        context.send_success(&translation.message([
            spots.len().into(),
            TextComponent::plain(self.center.x.to_string()),
            TextComponent::plain(self.center.y.to_string()),
            TextComponent::plain(format!("{distance:.2}")),
        ]));
        Ok(spots.len() as i32)
    }

    /// The team each target belongs to; `None` groups non-players and
    /// players without a team.
    fn team_keys(&self, targets: &[Arc<Entity>], context: &CommandContext) -> Vec<Option<String>> {
        if !self.respect_teams {
            return vec![None; targets.len()];
        }
        let names: Vec<Option<String>> = targets
            .iter()
            .map(|target| target.player().map(|_| target.scoreboard_name()))
            .collect();
        let scoreboard = context.server.scoreboard.lock();
        names
            .iter()
            .map(|name| {
                name.as_deref()
                    .and_then(|name| scoreboard.team_of(name))
                    .map(str::to_string)
            })
            .collect()
    }

    /// Pushes spots apart until none are closer than the spread distance and
    /// all of them are safe to stand on.
    fn spread(
        &self,
        spots: &mut [Spot],
        bounds: &Bounds,
        world: &World,
        random: &mut LegacyRandom,
    ) -> Result<(), CommandError> {
        let mut colliding = true;
        let mut min_distance = f64::from(f32::MAX);
        let mut iteration = 0;

        while iteration < MAX_ITERATIONS && colliding {
            iteration += 1;
            colliding = false;
            min_distance = f64::from(f32::MAX);

            for i in 0..spots.len() {
                let spot = spots[i];
                let mut neighbours = 0;
                let mut offset = Spot { x: 0.0, z: 0.0 };
                for (j, other) in spots.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let distance = spot.distance(*other);
                    min_distance = min_distance.min(distance);
                    if distance < self.spread_distance {
                        neighbours += 1;
                        offset.x += other.x - spot.x;
                        offset.z += other.z - spot.z;
                    }
                }

                let spot = &mut spots[i];
                if neighbours > 0 {
                    offset.x /= f64::from(neighbours);
                    offset.z /= f64::from(neighbours);
                    let length = offset.x.hypot(offset.z);
                    if length > 0.0 {
                        spot.x -= offset.x / length;
                        spot.z -= offset.z / length;
                    } else {
                        spot.randomize(random, bounds);
                    }
                    colliding = true;
                }
                if spot.clamp(bounds) {
                    colliding = true;
                }
            }

            if !colliding {
                for spot in spots.iter_mut() {
                    if !spot.is_safe(world, self.max_height) {
                        spot.randomize(random, bounds);
                        colliding = true;
                    }
                }
            }
        }

        if (min_distance - f64::from(f32::MAX)).abs() < f64::EPSILON {
            min_distance = 0.0;
        }
        if iteration >= MAX_ITERATIONS {
            log::debug!("Gave up spreading {} positions after {iteration} iterations", spots.len());
            let translation = if self.respect_teams {
                translations::COMMANDS_SPREADPLAYERS_FAILED_TEAMS
            } else {
                translations::COMMANDS_SPREADPLAYERS_FAILED_ENTITIES
            };
            return Err(CommandError::translated(
                translation,
                [
                    spots.len().into(),
                    TextComponent::plain(self.center.x.to_string()),
                    TextComponent::plain(self.center.y.to_string()),
                    TextComponent::plain(format!("{min_distance:.2}")),
                ],
            ));
        }
        Ok(())
    }

    /// Teleports every target onto its spot and returns the average distance
    /// to the nearest other spot.
    fn place(
        &self,
        targets: &[Arc<Entity>],
        teams: &[Option<String>],
        spots: &[Spot],
        context: &CommandContext,
    ) -> f64 {
        let mut team_spots: FxHashMap<&Option<String>, usize> = FxHashMap::default();
        let mut next = 0;
        let mut total = 0.0;

        for (target, team) in targets.iter().zip(teams) {
            let index = if self.respect_teams {
                *team_spots.entry(team).or_insert_with(|| {
                    next += 1;
                    next - 1
                })
            } else {
                next += 1;
                next - 1
            };
            let spot = spots[index];

            let position = Vector3::new(
                spot.x.floor() + 0.5,
                f64::from(spot.spawn_y(&context.world, self.max_height)),
                spot.z.floor() + 0.5,
            );
            context.server.teleport(target, &context.world, position, None);

            let nearest = spots
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, other)| spot.distance(*other))
                .reduce(f64::min)
                .unwrap_or(0.0);
            total += nearest;
        }

        if targets.len() < 2 {
            0.0
        } else {
            total / targets.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::math::Vector3;

    use crate::registry::entity_types::ZOMBIE;
    use crate::test_support::TestServer;

    #[test]
    fn spreads_entities_apart_on_the_surface() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let alex = server.player("Alex");

        assert_eq!(server.console("spreadplayers 0 0 5 20 false @a"), 2);
        let (a, b) = (steve.position(), alex.position());
        assert!((a.y + 60.0).abs() < 1e-9);
        assert!((b.y + 60.0).abs() < 1e-9);
        assert!((a.x.fract().abs() - 0.5).abs() < 1e-9);
        assert!(a.x.abs() <= 21.0 && a.z.abs() <= 21.0);
        assert!(((a.x - b.x).powi(2) + (a.z - b.z).powi(2)).sqrt() >= 3.5);
    }

    #[test]
    fn teams_share_a_position() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let alex = server.player("Alex");
        server.console("team add red");
        server.console("team join red @a");

        assert_eq!(server.console("spreadplayers 0 0 5 20 true @a"), 1);
        assert_eq!(steve.position(), alex.position());
    }

    #[test]
    fn fails_when_there_is_no_room() {
        let server = TestServer::new();
        server.player("Steve");
        server.player("Alex");

        assert!(server.run_console("spreadplayers 0 0 100 1 false @a").is_err());
        assert!(server.run_console("spreadplayers 0 0 1 10 under -100 false @a").is_err());
        assert_eq!(server.console("spreadplayers 0 0 1 10 under 0 false @a"), 2);
        assert!(server.run_console("spreadplayers ~NaN 0 1 10 false @a").is_err());
        assert!(server.run_console("spreadplayers 0 ~inf 1 10 false @a").is_err());
    }

    #[test]
    fn tall_height_limits_land_on_the_surface() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        server.player("Alex");

        assert_eq!(server.console("spreadplayers 0 0 1 10 under 2147483647 false @a"), 2);
        assert!((steve.position().y + 60.0).abs() < 1e-9);
    }

    #[test]
    fn only_players_keep_their_team() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let alex = server.player("Alex");
        let zombie = server.summon(&ZOMBIE, Vector3::new(2.0, -60.0, 2.0));
        server.console("team add red");
        server.console("team join red @e");

        assert_eq!(server.console("spreadplayers 0 0 2 20 true @e"), 2);
        assert_eq!(steve.position(), alex.position());
        assert_ne!(zombie.position(), steve.position());
    }
}
