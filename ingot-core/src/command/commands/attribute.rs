//! Handler for the "attribute" command.
use ingot_utils::Identifier;
use ingot_utils::text::TextComponent;
use ingot_utils::translations;

use crate::command::arguments::attribute::AttributeArgument;
use crate::command::arguments::choice::ChoiceArgument;
use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::identifier::IdentifierArgument;
use crate::command::arguments::numbers::DoubleArgument;
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandResult, argument, literal,
};
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::entity::attribute_map::{AttributeInstance, AttributeModifier, AttributeOperation};
use crate::registry::attributes::Attribute;

/// Handler for the "attribute" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    CommandHandlerBuilder::new(
        &["attribute"],
        "Queries and changes entity attributes.",
        "minecraft:command.attribute",
    )
    .then(
        argument("target", EntityArgument::entity()).then(
            argument("attribute", AttributeArgument)
                .then(
                    literal("get")
                        .executes(GetValue)
                        .then(argument("scale", DoubleArgument::any()).executes(GetValue)),
                )
                .then(
                    literal("base")
                        .then(
                            literal("set")
                                .then(argument("value", DoubleArgument::any()).executes(SetBase)),
                        )
                        .then(
                            literal("get")
                                .executes(GetBase)
                                .then(argument("scale", DoubleArgument::any()).executes(GetBase)),
                        )
                        .then(literal("reset").executes(ResetBase)),
                )
                .then(
                    literal("modifier")
                        .then(
                            literal("add").then(
                                argument("id", IdentifierArgument).then(
                                    argument("value", DoubleArgument::any()).then(
                                        argument(
                                            "operation",
                                            ChoiceArgument::new(AttributeOperation::ALL),
                                        )
                                        .executes(AddModifier),
                                    ),
                                ),
                            ),
                        )
                        .then(
                            literal("remove")
                                .then(argument("id", IdentifierArgument).executes(RemoveModifier)),
                        )
                        .then(
                            literal("value").then(
                                literal("get").then(
                                    argument("id", IdentifierArgument)
                                        .executes(GetModifier)
                                        .then(
                                            argument("scale", DoubleArgument::any())
                                                .executes(GetModifier),
                                        ),
                                ),
                            ),
                        ),
                ),
        ),
    )
}

type Target = (((), EntitySelector), &'static Attribute);

fn attribute_name(attribute: &Attribute) -> TextComponent {
    TextComponent::plain(attribute.key)
}

fn number(value: f64) -> TextComponent {
    TextComponent::plain(format!("{value:?}"))
}

fn id_text(id: &Identifier) -> TextComponent {
    TextComponent::plain(id.to_string())
}

/// Runs `f` on the attribute instance of the single targeted living entity.
///
/// `f` receives the entity's display name, resolved before its state is locked.
fn with_instance<R>(
    target: &EntitySelector,
    attribute: &'static Attribute,
    context: &CommandContext,
    f: impl FnOnce(&mut AttributeInstance, &TextComponent) -> Result<R, CommandError>,
) -> Result<(R, TextComponent), CommandError> {
    let entity = target.entity(context)?;
    let name = entity.display_name();
    if !entity.entity_type().living {
        return Err(CommandError::translated(
            translations::COMMANDS_ATTRIBUTE_FAILED_ENTITY,
            [name],
        ));
    }

    let mut state = entity.state.lock();
    let Some(instance) = state.attributes.get_mut(attribute) else {
        return Err(CommandError::translated(
            translations::COMMANDS_ATTRIBUTE_FAILED_NO_ATTRIBUTE,
            [name, attribute_name(attribute)],
        ));
    };
    let result = f(instance, &name)?;
    Ok((result, name))
}

struct GetValue;

impl GetValue {
    fn run(target: Target, scale: f64, context: &CommandContext) -> CommandResult {
        let (((), target), attribute) = target;
        let (value, name) =
            with_instance(&target, attribute, context, |instance, _| Ok(instance.value()))?;
        context.send_success(&translations::COMMANDS_ATTRIBUTE_VALUE_GET_SUCCESS.message([
            attribute_name(attribute),
            name.clone(),
            number(value),
        ]));
        Ok((value * scale) as i32)
    }
}

impl CommandExecutor<(Target, ())> for GetValue {
    fn execute(&self, args: (Target, ()), context: &mut CommandContext) -> CommandResult {
        let (target, ()) = args;
        Self::run(target, 1.0, context)
    }
}

impl CommandExecutor<((Target, ()), f64)> for GetValue {
    fn execute(&self, args: ((Target, ()), f64), context: &mut CommandContext) -> CommandResult {
        let ((target, ()), scale) = args;
        Self::run(target, scale, context)
    }
}

struct GetBase;

impl GetBase {
    fn run(target: Target, scale: f64, context: &CommandContext) -> CommandResult {
        let (((), target), attribute) = target;
        let (value, name) =
            with_instance(&target, attribute, context, |instance, _| Ok(instance.base_value()))?;
        context.send_success(&translations::COMMANDS_ATTRIBUTE_BASE_VALUE_GET_SUCCESS.message([
            attribute_name(attribute),
            name.clone(),
            number(value),
        ]));
        Ok((value * scale) as i32)
    }
}

impl CommandExecutor<((Target, ()), ())> for GetBase {
    fn execute(&self, args: ((Target, ()), ()), context: &mut CommandContext) -> CommandResult {
        let ((target, ()), ()) = args;
        Self::run(target, 1.0, context)
    }
}

impl CommandExecutor<(((Target, ()), ()), f64)> for GetBase {
    fn execute(&self, args: (((Target, ()), ()), f64), context: &mut CommandContext) -> CommandResult {
        let (((target, ()), ()), scale) = args;
        Self::run(target, scale, context)
    }
}

struct SetBase;

impl CommandExecutor<(((Target, ()), ()), f64)> for SetBase {
    fn execute(&self, args: (((Target, ()), ()), f64), context: &mut CommandContext) -> CommandResult {
        let ((((((), target), attribute), ()), ()), value) = args;
        let ((), name) = with_instance(&target, attribute, context, |instance, _| {
            instance.set_base_value(value);
            Ok(())
        })?;
        context.send_success(&translations::COMMANDS_ATTRIBUTE_BASE_VALUE_SET_SUCCESS.message([
            attribute_name(attribute),
            name.clone(),
            number(value),
        ]));
        Ok(1)
    }
}

struct ResetBase;

impl CommandExecutor<((Target, ()), ())> for ResetBase {
    fn execute(&self, args: ((Target, ()), ()), context: &mut CommandContext) -> CommandResult {
        let (((((), target), attribute), ()), ()) = args;
        let (value, name) = with_instance(&target, attribute, context, |instance, _| {
            instance.set_base_value(attribute.default_value);
            Ok(attribute.default_value)
        })?;
        context.send_success(&translations::COMMANDS_ATTRIBUTE_BASE_VALUE_RESET_SUCCESS.message([
            attribute_name(attribute),
            name.clone(),
            number(value),
        ]));
        Ok(1)
    }
}

struct AddModifier;

impl CommandExecutor<(((((Target, ()), ()), Identifier), f64), AttributeOperation)> for AddModifier {
    fn execute(
        &self,
        args: (((((Target, ()), ()), Identifier), f64), AttributeOperation),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((((((), target), attribute), ()), ()), id), amount), operation) = args;
        let ((), name) = with_instance(&target, attribute, context, |instance, name| {
            let modifier = AttributeModifier {
                id: id.clone(),
                amount,
                operation,
            };
            if instance.add_modifier(modifier) {
                Ok(())
            } else {
                Err(CommandError::translated(
                    translations::COMMANDS_ATTRIBUTE_FAILED_MODIFIER_ALREADY_PRESENT,
                    [id_text(&id), attribute_name(attribute), name.clone()],
                ))
            }
        })?;
        context.send_success(&translations::COMMANDS_ATTRIBUTE_MODIFIER_ADD_SUCCESS.message([
            id_text(&id),
            attribute_name(attribute),
            name.clone(),
        ]));
        Ok(1)
    }
}

fn no_modifier(attribute: &Attribute, name: &TextComponent, id: &Identifier) -> CommandError {
    CommandError::translated(
        translations::COMMANDS_ATTRIBUTE_FAILED_NO_MODIFIER,
        [attribute_name(attribute), name.clone(), id_text(id)],
    )
}

struct RemoveModifier;

impl CommandExecutor<(((Target, ()), ()), Identifier)> for RemoveModifier {
    fn execute(
        &self,
        args: (((Target, ()), ()), Identifier),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((((), target), attribute), ()), ()), id) = args;
        let ((), name) = with_instance(&target, attribute, context, |instance, name| {
            if instance.remove_modifier(&id) {
                Ok(())
            } else {
                Err(no_modifier(attribute, name, &id))
            }
        })?;
        context.send_success(&translations::COMMANDS_ATTRIBUTE_MODIFIER_REMOVE_SUCCESS.message([
            id_text(&id),
            attribute_name(attribute),
            name.clone(),
        ]));
        Ok(1)
    }
}

struct GetModifier;

impl GetModifier {
    fn run(target: Target, id: &Identifier, scale: f64, context: &CommandContext) -> CommandResult {
        let (((), target), attribute) = target;
        let (amount, name) = with_instance(&target, attribute, context, |instance, name| {
            instance
                .modifier(id)
                .map(|modifier| modifier.amount)
                .ok_or_else(|| no_modifier(attribute, name, id))
        })?;
        context.send_success(&translations::COMMANDS_ATTRIBUTE_MODIFIER_VALUE_GET_SUCCESS.message([
            id_text(id),
            attribute_name(attribute),
            name.clone(),
            number(amount),
        ]));
        Ok((amount * scale) as i32)
    }
}

impl CommandExecutor<((((Target, ()), ()), ()), Identifier)> for GetModifier {
    fn execute(
        &self,
        args: ((((Target, ()), ()), ()), Identifier),
        context: &mut CommandContext,
    ) -> CommandResult {
        let ((((target, ()), ()), ()), id) = args;
        Self::run(target, &id, 1.0, context)
    }
}

impl CommandExecutor<(((((Target, ()), ()), ()), Identifier), f64)> for GetModifier {
    fn execute(
        &self,
        args: (((((Target, ()), ()), ()), Identifier), f64),
        context: &mut CommandContext,
    ) -> CommandResult {
        let (((((target, ()), ()), ()), id), scale) = args;
        Self::run(target, &id, scale, context)
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::math::Vector3;

    use crate::registry::attributes::MAX_HEALTH;
    use crate::registry::entity_types::MARKER;
    use crate::test_support::TestServer;

    #[test]
    fn reads_and_changes_base_values() {
        let server = TestServer::new();
        let steve = server.player("Steve");

        assert_eq!(server.run_as(&steve, "attribute @s minecraft:max_health get").ok(), Some(20));
        assert_eq!(
            server.messages(&steve),
            vec!["Value of attribute minecraft:max_health for entity Steve is 20.0"]
        );
        assert_eq!(server.console("attribute Steve movement_speed base get 100"), 10);

        assert_eq!(server.console("attribute Steve max_health base set 30"), 1);
        assert_eq!(server.console("attribute Steve max_health get"), 30);
        assert_eq!(server.console("attribute Steve max_health base reset"), 1);
        assert_eq!(steve.state.lock().attributes.value(&MAX_HEALTH), Some(20.0));
    }

    #[test]
    fn manages_modifiers() {
        let server = TestServer::new();
        server.player("Steve");

        assert_eq!(server.console("attribute Steve max_health modifier add boost 10 add_value"), 1);
        assert!(server.run_console("attribute Steve max_health modifier add boost 1 add_value").is_err());
        assert_eq!(server.console("attribute Steve max_health get"), 30);
        assert_eq!(server.console("attribute Steve max_health modifier value get boost 2"), 20);

        assert_eq!(
            server.console("attribute Steve max_health modifier add double 1 add_multiplied_total"),
            1
        );
        assert_eq!(server.console("attribute Steve max_health get"), 60);

        assert_eq!(server.console("attribute Steve max_health modifier remove boost"), 1);
        assert!(server.run_console("attribute Steve max_health modifier remove boost").is_err());
        assert_eq!(server.console("attribute Steve max_health get"), 40);
    }

    #[test]
    fn rejects_entities_without_attributes() {
        let server = TestServer::new();
        let marker = server.summon(&MARKER, Vector3::new(0.0, -60.0, 0.0));
        assert!(server.run_console(&format!("attribute {} max_health get", marker.uuid())).is_err());
        assert!(server.run_console("attribute Nobody max_health get").is_err());
    }
}
