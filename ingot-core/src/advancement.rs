//! The advancement tree and per-player progress.
use std::collections::{BTreeMap, BTreeSet};

use ingot_utils::Identifier;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// The advancements shipped with the server.
pub const DEFAULT_ADVANCEMENTS: &str = include_str!("../assets/advancements.json");

/// An error raised while loading advancements.
#[derive(Debug, thiserror::Error)]
pub enum AdvancementError {
    /// The JSON is malformed.
    #[error("could not parse advancements: {0}")]
    Parse(#[from] serde_json::Error),
    /// An advancement names a parent that doesn't exist.
    #[error("advancement {0} has unknown parent {1}")]
    UnknownParent(Identifier, Identifier),
    /// An advancement is defined twice.
    #[error("advancement {0} is defined twice")]
    Duplicate(Identifier),
}

#[derive(Deserialize)]
struct AdvancementDefinition {
    id: Identifier,
    #[serde(default)]
    parent: Option<Identifier>,
    criteria: Vec<String>,
}

/// A node of the advancement tree.
#[derive(Debug, Clone)]
pub struct Advancement {
    /// The advancement id.
    pub id: Identifier,
    /// The parent advancement, `None` for roots.
    pub parent: Option<Identifier>,
    /// Criteria names, all of which must be awarded.
    pub criteria: Vec<String>,
    /// Direct children in definition order.
    pub children: Vec<Identifier>,
}

/// Selects which advancements around a given one are affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancementMode {
    /// Only the advancement itself.
    Only,
    /// The advancement and all its descendants.
    From,
    /// Ancestors, the advancement, and descendants.
    Through,
    /// Ancestors and the advancement.
    Until,
}

impl AdvancementMode {
    const fn parents(self) -> bool {
        matches!(self, Self::Through | Self::Until)
    }

    const fn children(self) -> bool {
        matches!(self, Self::Through | Self::From)
    }
}

/// Every loaded advancement.
#[derive(Debug, Default)]
pub struct AdvancementTree {
    advancements: BTreeMap<Identifier, Advancement>,
    roots: Vec<Identifier>,
}

impl AdvancementTree {
    /// Loads a tree from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self, AdvancementError> {
        let definitions: Vec<AdvancementDefinition> = serde_json::from_str(json)?;
        let mut tree = Self::default();
        let mut order = Vec::with_capacity(definitions.len());

        for definition in definitions {
            if tree.advancements.contains_key(&definition.id) {
                return Err(AdvancementError::Duplicate(definition.id));
            }
            order.push(definition.id.clone());
            tree.advancements.insert(
                definition.id.clone(),
                Advancement {
                    id: definition.id,
                    parent: definition.parent,
                    criteria: definition.criteria,
                    children: Vec::new(),
                },
            );
        }

        for id in order {
            let parent = tree.advancements.get(&id).and_then(|a| a.parent.clone());
            match parent {
                Some(parent) => match tree.advancements.get_mut(&parent) {
                    Some(parent_advancement) => parent_advancement.children.push(id),
                    None => return Err(AdvancementError::UnknownParent(id, parent)),
                },
                None => tree.roots.push(id),
            }
        }

        log::debug!("Loaded {} advancements", tree.advancements.len());
        Ok(tree)
    }

    /// Looks an advancement up.
    #[must_use]
    pub fn get(&self, id: &Identifier) -> Option<&Advancement> {
        self.advancements.get(id)
    }

    /// Number of loaded advancements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.advancements.len()
    }

    /// Whether no advancements are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.advancements.is_empty()
    }

    /// The advancements affected by `mode` around `advancement`.
    #[must_use]
    pub fn select<'a>(
        &'a self,
        advancement: &'a Advancement,
        mode: AdvancementMode,
    ) -> Vec<&'a Advancement> {
        let mut selected = Vec::new();
        if mode.parents() {
            let mut parent = advancement.parent.as_ref();
            while let Some(parent_advancement) = parent.and_then(|id| self.get(id)) {
                selected.push(parent_advancement);
                parent = parent_advancement.parent.as_ref();
            }
        }
        selected.push(advancement);
        if mode.children() {
            self.add_children(advancement, &mut selected);
        }
        selected
    }

    /// Every advancement, each root followed by its descendants.
    #[must_use]
    pub fn everything(&self) -> Vec<&Advancement> {
        let mut selected = Vec::new();
        for root in self.roots.iter().filter_map(|id| self.get(id)) {
            selected.push(root);
            self.add_children(root, &mut selected);
        }
        selected
    }

    fn add_children<'a>(&'a self, advancement: &Advancement, out: &mut Vec<&'a Advancement>) {
        for child in advancement.children.iter().filter_map(|id| self.get(id)) {
            out.push(child);
            self.add_children(child, out);
        }
    }
}

/// A player's awarded criteria.
#[derive(Debug, Clone, Default)]
pub struct AdvancementProgress {
    awarded: FxHashMap<Identifier, BTreeSet<String>>,
}

impl AdvancementProgress {
    /// Whether every criterion of the advancement is awarded.
    #[must_use]
    pub fn is_done(&self, advancement: &Advancement) -> bool {
        let awarded = self.awarded.get(&advancement.id);
        advancement
            .criteria
            .iter()
            .all(|criterion| awarded.is_some_and(|set| set.contains(criterion)))
    }

    /// Whether at least one criterion of the advancement is awarded.
    #[must_use]
    pub fn has_progress(&self, advancement: &Advancement) -> bool {
        self.awarded
            .get(&advancement.id)
            .is_some_and(|set| !set.is_empty())
    }

    /// Awards a single criterion. Returns false if it was already awarded.
    pub fn award(&mut self, advancement: &Advancement, criterion: &str) -> bool {
        self.awarded
            .entry(advancement.id.clone())
            .or_default()
            .insert(criterion.to_string())
    }

    /// Revokes a single criterion. Returns false if it wasn't awarded.
    pub fn revoke(&mut self, advancement: &Advancement, criterion: &str) -> bool {
        self.awarded
            .get_mut(&advancement.id)
            .is_some_and(|set| set.remove(criterion))
    }

    /// Awards every remaining criterion. Returns false if already done.
    pub fn grant_all(&mut self, advancement: &Advancement) -> bool {
        if self.is_done(advancement) {
            return false;
        }
        for criterion in &advancement.criteria {
            self.award(advancement, criterion);
        }
        true
    }

    /// Revokes every awarded criterion. Returns false if nothing was awarded.
    pub fn revoke_all(&mut self, advancement: &Advancement) -> bool {
        if !self.has_progress(advancement) {
            return false;
        }
        self.awarded.remove(&advancement.id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> AdvancementTree {
        AdvancementTree::from_json(DEFAULT_ADVANCEMENTS).expect("embedded advancements load")
    }

    fn ids(advancements: &[&Advancement]) -> Vec<String> {
        advancements.iter().map(|a| a.id.path.to_string()).collect()
    }

    #[test]
    fn modes_select_ancestors_and_descendants() {
        let tree = tree();
        let iron = tree
            .get(&Identifier::vanilla_static("story/iron_tools"))
            .expect("exists");

        assert_eq!(
            ids(&tree.select(iron, AdvancementMode::Only)),
            ["story/iron_tools"]
        );
        assert_eq!(
            ids(&tree.select(iron, AdvancementMode::From)),
            ["story/iron_tools", "story/mine_diamond"]
        );
        assert_eq!(
            ids(&tree.select(iron, AdvancementMode::Until)),
            [
                "story/smelt_iron",
                "story/upgrade_tools",
                "story/mine_stone",
                "story/root",
                "story/iron_tools"
            ]
        );
        assert_eq!(tree.select(iron, AdvancementMode::Through).len(), 6);
        assert_eq!(tree.everything().len(), tree.len());
    }

    #[test]
    fn unknown_parents_are_rejected() {
        let json = r#"[{ "id": "a:b", "parent": "a:missing", "criteria": [] }]"#;
        assert!(matches!(
            AdvancementTree::from_json(json),
            Err(AdvancementError::UnknownParent(..))
        ));
    }

    #[test]
    fn progress_tracks_criteria() {
        let tree = tree();
        let armor = tree
            .get(&Identifier::vanilla_static("story/obtain_armor"))
            .expect("exists");
        let mut progress = AdvancementProgress::default();

        assert!(!progress.revoke_all(armor));
        assert!(progress.award(armor, "iron_boots"));
        assert!(!progress.award(armor, "iron_boots"));
        assert!(progress.has_progress(armor));
        assert!(!progress.is_done(armor));
        assert!(progress.grant_all(armor));
        assert!(progress.is_done(armor));
        assert!(!progress.grant_all(armor));
        assert!(progress.revoke_all(armor));
        assert!(!progress.has_progress(armor));
    }
}
