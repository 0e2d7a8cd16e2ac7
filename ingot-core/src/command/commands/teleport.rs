//! Handler for the "teleport" command.
use std::sync::Arc;

use ingot_utils::BlockPos;
use ingot_utils::math::Vector3;
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::anchor::AnchorArgument;
use crate::command::arguments::coordinates::{RotationArgument, Vector3Argument};
use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::entity::{Entity, EntityAnchor};
use crate::world::World;

/// Handler for the "teleport" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["teleport", "tp"],
        "Teleports entities.",
        "minecraft:command.teleport",
    )
    .then(argument("destination", EntityArgument::entity()).executes(TeleportToEntity))
    .then(argument("location", Vector3Argument::centered()).executes(TeleportToLocation))
    .then(
        argument("targets", EntityArgument::entities())
            .then(argument("destination", EntityArgument::entity()).executes(TeleportToEntity))
            .then(
                argument("location", Vector3Argument::centered())
                    .executes(TeleportToLocation)
                    .then(argument("rotation", RotationArgument).executes(TeleportToLocation))
                    .then(
                        literal("facing")
                            .then(
                                literal("entity").then(
                                    argument("facingEntity", EntityArgument::entity())
                                        .executes(TeleportToLocation)
                                        .then(
                                            argument("facingAnchor", AnchorArgument)
                                                .executes(TeleportToLocation),
                                        ),
                                ),
                            )
                            .then(
                                argument("facingLocation", Vector3Argument::exact())
                                    .executes(TeleportToLocation),
                            ),
                    ),
            ),
    )
}

struct TeleportToEntity;

impl CommandExecutor<((), EntitySelector)> for TeleportToEntity {
    fn execute(&self, args: ((), EntitySelector), context: &mut CommandContext) -> CommandResult {
        let ((), destination) = args;
        let targets = vec![context.require_entity()?.clone()];
        teleport_to_entity(&targets, &destination, context)
    }
}

impl CommandExecutor<(((), EntitySelector), EntitySelector)> for TeleportToEntity {
    fn execute(
        &self,
        args: (((), EntitySelector), EntitySelector),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((), targets), destination) = args;
        let targets = targets.entities(context)?;
        teleport_to_entity(&targets, &destination, context)
    }
}

/// How teleported entities turn after arriving at a location.
enum LookTarget {
    Keep,
    Rotation((f32, f32)),
    Position(Vector3<f64>),
    Entity(Arc<Entity>, EntityAnchor),
}

struct TeleportToLocation;

impl CommandExecutor<((), Vector3<f64>)> for TeleportToLocation {
    fn execute(&self, args: ((), Vector3<f64>), context: &mut CommandContext) -> CommandResult {
        let ((), location) = args;
        let targets = vec![context.require_entity()?.clone()];
        teleport_to_location(&targets, location, &LookTarget::Keep, context)
    }
}

impl CommandExecutor<(((), EntitySelector), Vector3<f64>)> for TeleportToLocation {
    fn execute(
        &self,
        args: (((), EntitySelector), Vector3<f64>),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((), targets), location) = args;
        let targets = targets.entities(context)?;
        teleport_to_location(&targets, location, &LookTarget::Keep, context)
    }
}

impl CommandExecutor<((((), EntitySelector), Vector3<f64>), (f32, f32))> for TeleportToLocation {
    fn execute(
        &self,
        args: ((((), EntitySelector), Vector3<f64>), (f32, f32)),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((), targets), location), rotation) = args;
        let targets = targets.entities(context)?;
        teleport_to_location(&targets, location, &LookTarget::Rotation(rotation), context)
    }
}

impl CommandExecutor<(((((), EntitySelector), Vector3<f64>), ()), Vector3<f64>)>
    for TeleportToLocation
{
    fn execute(
        &self,
        args: (((((), EntitySelector), Vector3<f64>), ()), Vector3<f64>),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((((), targets), location), ()), facing) = args;
        let targets = targets.entities(context)?;
        teleport_to_location(&targets, location, &LookTarget::Position(facing), context)
    }
}

impl CommandExecutor<((((((), EntitySelector), Vector3<f64>), ()), ()), EntitySelector)>
    for TeleportToLocation
{
    fn execute(
        &self,
        args: ((((((), EntitySelector), Vector3<f64>), ()), ()), EntitySelector),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((((), targets), location), ()), ()), facing) = args;
        let targets = targets.entities(context)?;
        let facing = facing.entity(context)?;
        teleport_to_location(
            &targets,
            location,
            &LookTarget::Entity(facing, EntityAnchor::Feet),
            context,
        )
    }
}

impl
    CommandExecutor<(
        ((((((), EntitySelector), Vector3<f64>), ()), ()), EntitySelector),
        EntityAnchor,
    )> for TeleportToLocation
{
    fn execute(
        &self,
        args: (
            ((((((), EntitySelector), Vector3<f64>), ()), ()), EntitySelector),
            EntityAnchor,
        ),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((((((), targets), location), ()), ()), facing), anchor) = args;
        let targets = targets.entities(context)?;
        let facing = facing.entity(context)?;
        teleport_to_location(
            &targets,
            location,
            &LookTarget::Entity(facing, anchor),
            context,
        )
    }
}

fn check_position(position: Vector3<f64>) -> Result<(), CommandError> {
    if World::is_in_spawnable_bounds(BlockPos::containing(position)) {
        Ok(())
    } else {
        Err(CommandError::msg(translations::COMMANDS_TELEPORT_INVALIDPOSITION))
    }
}

fn teleport_to_entity(
    targets: &[Arc<Entity>],
    destination: &EntitySelector,
    context: &CommandContext,
) -> CommandResult {
    let destination = destination.entity(context)?;
    let world = context.server.world_of(&destination).clone();
    let position = destination.position();
    check_position(position)?;
    let rotation = destination.rotation();

    for target in targets {
        context
            .server
            .teleport(target, &world, position, Some(rotation));
    }

    let message = match targets {
        [target] => translations::COMMANDS_TELEPORT_SUCCESS_ENTITY_SINGLE
            .message([target.display_name(), destination.display_name()]),
        _ => translations::COMMANDS_TELEPORT_SUCCESS_ENTITY_MULTIPLE
            .message([targets.len().into(), destination.display_name()]),
    };
    context.send_success(&message);
    Ok(targets.len() as i32)
}

fn teleport_to_location(
    targets: &[Arc<Entity>],
    location: Vector3<f64>,
    look: &LookTarget,
    context: &CommandContext,
) -> CommandResult {
    check_position(location)?;

    for target in targets {
        let rotation = match look {
            LookTarget::Keep => None,
            LookTarget::Rotation(rotation) => Some(*rotation),
            LookTarget::Position(facing) => Some(eyes_at(target, location).look_at(*facing)),
            LookTarget::Entity(facing, anchor) => {
                Some(eyes_at(target, location).look_at(facing.anchor_position(*anchor)))
            }
        };
        context
            .server
            .teleport(target, &context.world, location, rotation);
    }

    let coordinates = [location.x, location.y, location.z].map(format_coordinate);
    let [x, y, z] = coordinates;
    let message = match targets {
        [target] => translations::COMMANDS_TELEPORT_SUCCESS_LOCATION_SINGLE
            .message([target.display_name(), x, y, z]),
        _ => translations::COMMANDS_TELEPORT_SUCCESS_LOCATION_MULTIPLE
            .message([targets.len().into(), x, y, z]),
    };
    context.send_success(&message);
    Ok(targets.len() as i32)
}

fn eyes_at(entity: &Entity, feet: Vector3<f64>) -> Vector3<f64> {
    feet + Vector3::new(0.0, f64::from(entity.entity_type().eye_height), 0.0)
}

fn format_coordinate(value: f64) -> TextComponent {
    TextComponent::plain(format!("{value:.6}"))
}

#[cfg(test)]
mod tests {
    use ingot_utils::math::Vector3;

    use crate::registry::entity_types::ZOMBIE;
    use crate::test_support::TestServer;

    #[test]
    fn teleports_self_to_location() {
        let server = TestServer::new();
        let steve = server.player("Steve");

        assert_eq!(server.run_as(&steve, "tp 10 -50 ~2").ok(), Some(1));
        assert_eq!(steve.position(), Vector3::new(10.5, -50.0, 2.5));
        assert_eq!(
            server.messages(&steve),
            vec!["Teleported Steve to 10.500000, -50.000000, 2.500000"]
        );
    }

    #[test]
    fn rejects_non_finite_offsets() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let before = steve.position();

        assert!(server.run_as(&steve, "tp @s ~NaN ~ ~").is_err());
        assert!(server.run_as(&steve, "tp @s ^ ^ ^inf").is_err());
        assert_eq!(steve.position(), before);
    }

    #[test]
    fn teleports_targets_to_entity() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let zombie = server.summon(&ZOMBIE, Vector3::new(5.0, -60.0, 5.0));
        zombie.move_to(Vector3::new(5.0, -60.0, 5.0), Some((90.0, 10.0)));

        assert_eq!(server.console(&format!("teleport Steve {}", zombie.uuid())), 1);
        assert_eq!(steve.position(), Vector3::new(5.0, -60.0, 5.0));
        assert_eq!(steve.rotation(), (90.0, 10.0));

        server.player("Alex");
        assert_eq!(server.console("tp @a 0 -60 0"), 2);
    }

    #[test]
    fn facing_turns_towards_the_target() {
        let server = TestServer::new();
        let steve = server.player("Steve");

        server.console("tp Steve 0 -60 0 facing 0.5 -60 10");
        assert!(steve.rotation().0.abs() < 1e-3);
        assert!(steve.rotation().1 > 0.0);
        server.console("tp Steve 0 -60 0 90 0");
        assert_eq!(steve.rotation(), (90.0, 0.0));
    }

    #[test]
    fn rejects_positions_outside_the_world() {
        let server = TestServer::new();
        server.player("Steve");
        assert!(server.run_console("tp Steve 30000000 0 0").is_err());
        assert!(server.run_console("tp Nobody 0 0 0").is_err());
    }
}
