//! Attribute instances and their modifiers.
use std::collections::BTreeMap;

use ingot_utils::Identifier;
use rustc_hash::FxHashMap;

use crate::registry::attributes::{self, Attribute};
use crate::registry::entity_types::{self, EntityType};

/// How a modifier is combined with the base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOperation {
    /// Added to the base value.
    AddValue,
    /// Multiplied with the base value, then added.
    AddMultipliedBase,
    /// Multiplied with the running total.
    AddMultipliedTotal,
}

impl AttributeOperation {
    /// Every operation with its command name.
    pub const ALL: &'static [(&'static str, AttributeOperation)] = &[
        ("add_value", AttributeOperation::AddValue),
        ("add_multiplied_base", AttributeOperation::AddMultipliedBase),
        ("add_multiplied_total", AttributeOperation::AddMultipliedTotal),
    ];
}

/// A modifier applied on top of an attribute's base value.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeModifier {
    /// The modifier id, unique per attribute.
    pub id: Identifier,
    /// The modifier amount.
    pub amount: f64,
    /// How the amount is applied.
    pub operation: AttributeOperation,
}

/// The value of one attribute on an entity.
#[derive(Debug, Clone)]
pub struct AttributeInstance {
    attribute: &'static Attribute,
    base_value: f64,
    modifiers: BTreeMap<Identifier, AttributeModifier>,
}

impl AttributeInstance {
    /// Creates an instance with the attribute's default base value.
    #[must_use]
    pub fn new(attribute: &'static Attribute) -> Self {
        Self {
            attribute,
            base_value: attribute.default_value,
            modifiers: BTreeMap::new(),
        }
    }

    /// The attribute this instance belongs to.
    #[must_use]
    pub const fn attribute(&self) -> &'static Attribute {
        self.attribute
    }

    /// The unmodified value.
    #[must_use]
    pub const fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Sets the unmodified value.
    pub fn set_base_value(&mut self, value: f64) {
        self.base_value = value;
    }

    /// Looks up a modifier.
    #[must_use]
    pub fn modifier(&self, id: &Identifier) -> Option<&AttributeModifier> {
        self.modifiers.get(id)
    }

    /// Adds a modifier. Returns false if one with the same id exists.
    pub fn add_modifier(&mut self, modifier: AttributeModifier) -> bool {
        if self.modifiers.contains_key(&modifier.id) {
            return false;
        }
        self.modifiers.insert(modifier.id.clone(), modifier);
        true
    }

    /// Removes a modifier. Returns false if there was none.
    pub fn remove_modifier(&mut self, id: &Identifier) -> bool {
        self.modifiers.remove(id).is_some()
    }

    /// The final value with all modifiers applied, clamped to the attribute range.
    #[must_use]
    pub fn value(&self) -> f64 {
        let mut base = self.base_value;
        for modifier in self.modifiers.values() {
            if modifier.operation == AttributeOperation::AddValue {
                base += modifier.amount;
            }
        }

        let mut value = base;
        for modifier in self.modifiers.values() {
            if modifier.operation == AttributeOperation::AddMultipliedBase {
                value += base * modifier.amount;
            }
        }
        for modifier in self.modifiers.values() {
            if modifier.operation == AttributeOperation::AddMultipliedTotal {
                value *= 1.0 + modifier.amount;
            }
        }

        self.attribute.sanitize(value)
    }
}

/// All attributes of one entity.
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    instances: FxHashMap<&'static str, AttributeInstance>,
}

impl AttributeMap {
    /// The attributes a freshly spawned entity of this type has.
    #[must_use]
    pub fn for_type(entity_type: &'static EntityType) -> Self {
        if !entity_type.living {
            return Self::default();
        }

        let mut instances: FxHashMap<_, _> = attributes::ALL_ATTRIBUTES
            .iter()
            .map(|attribute| (attribute.key, AttributeInstance::new(attribute)))
            .collect();
        if std::ptr::eq(entity_type, &entity_types::PLAYER)
            && let Some(speed) = instances.get_mut(attributes::MOVEMENT_SPEED.key)
        {
            speed.set_base_value(0.1);
        }
        Self { instances }
    }

    /// Looks up an attribute instance.
    #[must_use]
    pub fn get(&self, attribute: &Attribute) -> Option<&AttributeInstance> {
        self.instances.get(attribute.key)
    }

    /// Looks up an attribute instance mutably.
    pub fn get_mut(&mut self, attribute: &Attribute) -> Option<&mut AttributeInstance> {
        self.instances.get_mut(attribute.key)
    }

    /// The current value of an attribute, if the entity has it.
    #[must_use]
    pub fn value(&self, attribute: &Attribute) -> Option<f64> {
        self.get(attribute).map(AttributeInstance::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(path: &'static str, amount: f64, operation: AttributeOperation) -> AttributeModifier {
        AttributeModifier {
            id: Identifier::vanilla_static(path),
            amount,
            operation,
        }
    }

    #[test]
    fn modifiers_apply_in_operation_order() {
        let mut instance = AttributeInstance::new(&attributes::ATTACK_DAMAGE);
        assert!(instance.add_modifier(modifier("a", 2.0, AttributeOperation::AddValue)));
        assert!(instance.add_modifier(modifier("b", 0.5, AttributeOperation::AddMultipliedBase)));
        assert!(instance.add_modifier(modifier("c", 1.0, AttributeOperation::AddMultipliedTotal)));
        // (2 + 2) * (1 + 0.5) * (1 + 1)
        assert!((instance.value() - 12.0).abs() < 1e-9);
        assert!(!instance.add_modifier(modifier("a", 1.0, AttributeOperation::AddValue)));
    }

    #[test]
    fn values_are_clamped() {
        let mut instance = AttributeInstance::new(&attributes::MAX_HEALTH);
        instance.set_base_value(5000.0);
        assert!((instance.value() - 1024.0).abs() < 1e-9);
    }

    #[test]
    fn non_living_entities_have_no_attributes() {
        assert!(AttributeMap::for_type(&entity_types::ITEM)
            .get(&attributes::MAX_HEALTH)
            .is_none());
        let player = AttributeMap::for_type(&entity_types::PLAYER);
        assert_eq!(player.value(&attributes::MOVEMENT_SPEED), Some(0.1));
    }
}
