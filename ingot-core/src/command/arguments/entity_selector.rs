//! Entity selector parsing and resolution.
//!
//! Supports `@s @p @a @r @e @n`, player names and UUIDs, with the options
//! `type name tag team gamemode limit sort distance x y z dx dy dz scores`.
use std::sync::Arc;

use ingot_utils::math::{Aabb, Vector3};
use ingot_utils::{GameType, Identifier, translations};
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::command::arguments::range::{FloatRange, IntRange};
use crate::command::arguments::take_quotable;
use crate::command::context::CommandContext;
use crate::command::error::CommandError;
use crate::entity::Entity;
use crate::registry::entity_types::{self, EntityType};
use crate::scoreboard::Scoreboard;

/// The base of a selector, the part after `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorBase {
    /// `@s`
    CurrentEntity,
    /// `@p`
    NearestPlayer,
    /// `@a`
    AllPlayers,
    /// `@r`
    RandomPlayer,
    /// `@e`
    AllEntities,
    /// `@n`
    NearestEntity,
}

/// How matching entities are ordered before the limit is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Closest first.
    Nearest,
    /// Furthest first.
    Furthest,
    /// Shuffled.
    Random,
    /// Spawn order.
    Arbitrary,
}

#[derive(Debug, Clone, PartialEq)]
struct Filter<T> {
    value: T,
    negated: bool,
}

impl<T> Filter<T> {
    fn test(&self, matched: bool) -> bool {
        matched != self.negated
    }
}

/// Options given in square brackets.
#[derive(Debug, Clone, Default)]
struct SelectorOptions {
    limit: Option<usize>,
    sort: Option<SortOrder>,
    types: Vec<Filter<&'static EntityType>>,
    names: Vec<Filter<String>>,
    tags: Vec<Filter<String>>,
    teams: Vec<Filter<String>>,
    game_modes: Vec<Filter<GameType>>,
    distance: Option<FloatRange>,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    dx: Option<f64>,
    dy: Option<f64>,
    dz: Option<f64>,
    scores: Vec<(String, IntRange)>,
}

#[derive(Debug, Clone)]
enum SelectorTarget {
    Name(String),
    Uuid(Uuid),
    Query {
        base: SelectorBase,
        options: Box<SelectorOptions>,
    },
}

/// A parsed entity selector; resolving it needs a command context.
#[derive(Debug, Clone)]
pub struct EntitySelector {
    target: SelectorTarget,
    /// Whether at most one entity may be selected.
    pub single: bool,
    /// Whether only players may be selected.
    pub players_only: bool,
}

impl EntitySelector {
    /// Parses a selector, a UUID or a player name.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let target = if let Some(rest) = text.strip_prefix('@') {
            let mut chars = rest.chars();
            let base = match chars.next()? {
                's' => SelectorBase::CurrentEntity,
                'p' => SelectorBase::NearestPlayer,
                'a' => SelectorBase::AllPlayers,
                'r' => SelectorBase::RandomPlayer,
                'e' => SelectorBase::AllEntities,
                'n' => SelectorBase::NearestEntity,
                _ => return None,
            };
            let options = match chars.as_str() {
                "" => SelectorOptions::default(),
                bracketed => {
                    let inner = bracketed.strip_prefix('[')?.strip_suffix(']')?;
                    parse_options(inner)?
                }
            };
            SelectorTarget::Query {
                base,
                options: Box::new(options),
            }
        } else if text.len() == 36
            && let Ok(uuid) = Uuid::parse_str(text)
        {
            SelectorTarget::Uuid(uuid)
        } else if !text.is_empty() && text.len() <= 16 && !text.contains(['[', ']', '"', '{', '}'])
        {
            SelectorTarget::Name(text.to_string())
        } else {
            return None;
        };

        Some(Self {
            target,
            single: false,
            players_only: false,
        })
    }

    /// The most entities this selector can return.
    #[must_use]
    pub fn max_results(&self) -> usize {
        match &self.target {
            SelectorTarget::Name(_) | SelectorTarget::Uuid(_) => 1,
            SelectorTarget::Query { base, options } => options.limit.unwrap_or(match base {
                SelectorBase::AllPlayers | SelectorBase::AllEntities => usize::MAX,
                _ => 1,
            }),
        }
    }

    /// Whether the selector can match non-player entities.
    #[must_use]
    pub fn includes_entities(&self) -> bool {
        match &self.target {
            SelectorTarget::Name(_) => false,
            SelectorTarget::Uuid(_) => true,
            SelectorTarget::Query { base, options } => {
                matches!(base, SelectorBase::AllEntities | SelectorBase::NearestEntity)
                    && !options
                        .types
                        .iter()
                        .any(|f| !f.negated && std::ptr::eq(f.value, &entity_types::PLAYER))
            }
        }
    }

    /// Whether this is `@s`.
    #[must_use]
    pub fn is_self_selector(&self) -> bool {
        matches!(
            self.target,
            SelectorTarget::Query {
                base: SelectorBase::CurrentEntity,
                ..
            }
        )
    }

    fn check(&self) -> Result<(), CommandError> {
        if self.single && self.max_results() > 1 {
            return Err(CommandError::msg(if self.players_only {
                translations::ARGUMENT_PLAYER_TOOMANY
            } else {
                translations::ARGUMENT_ENTITY_TOOMANY
            }));
        }
        if self.players_only && self.includes_entities() && !self.is_self_selector() {
            return Err(CommandError::msg(translations::ARGUMENT_PLAYER_ENTITIES));
        }
        Ok(())
    }

    /// Every matching entity; an empty result is not an error.
    pub fn find_entities(&self, context: &CommandContext) -> Result<Vec<Arc<Entity>>, CommandError> {
        self.check()?;
        let mut found = match &self.target {
            SelectorTarget::Name(name) => context.server.player_by_name(name).into_iter().collect(),
            SelectorTarget::Uuid(uuid) => context.server.entity_by_uuid(*uuid).into_iter().collect(),
            SelectorTarget::Query { base, options } => resolve_query(*base, options, context),
        };
        if self.players_only {
            found.retain(|entity| entity.is_player());
        }
        Ok(found)
    }

    /// Every matching entity; fails if there is none.
    pub fn entities(&self, context: &CommandContext) -> Result<Vec<Arc<Entity>>, CommandError> {
        let found = self.find_entities(context)?;
        if found.is_empty() {
            return Err(CommandError::msg(if self.players_only {
                translations::ARGUMENT_ENTITY_NOTFOUND_PLAYER
            } else {
                translations::ARGUMENT_ENTITY_NOTFOUND_ENTITY
            }));
        }
        Ok(found)
    }

    /// The single matching entity; fails if there is none.
    pub fn entity(&self, context: &CommandContext) -> Result<Arc<Entity>, CommandError> {
        self.entities(context)?
            .into_iter()
            .next()
            .ok_or(CommandError::InvalidRequirement)
    }
}

fn resolve_query(
    base: SelectorBase,
    options: &SelectorOptions,
    context: &CommandContext,
) -> Vec<Arc<Entity>> {
    let origin = Vector3::new(
        options.x.unwrap_or(context.position.x),
        options.y.unwrap_or(context.position.y),
        options.z.unwrap_or(context.position.z),
    );
    let volume = options.volume(origin);
    let world_limited = options.distance.is_some() || volume.is_some();

    let mut candidates = match base {
        SelectorBase::CurrentEntity => context.entity.iter().cloned().collect(),
        SelectorBase::NearestPlayer | SelectorBase::AllPlayers | SelectorBase::RandomPlayer => {
            if world_limited {
                context.world.players()
            } else {
                context.server.players()
            }
        }
        SelectorBase::AllEntities | SelectorBase::NearestEntity => {
            if world_limited {
                context.world.entities()
            } else {
                context.server.all_entities()
            }
        }
    };
    if !matches!(base, SelectorBase::CurrentEntity | SelectorBase::AllPlayers) {
        candidates.retain(|entity| entity.is_alive());
    }

    {
        let scoreboard = context.server.scoreboard.lock();
        candidates.retain(|entity| {
            (!world_limited || std::ptr::eq(entity.dimension(), context.world.dimension))
                && options.matches(entity, origin, volume, &scoreboard)
        });
    }

    let sort = options.sort.unwrap_or(match base {
        SelectorBase::NearestPlayer | SelectorBase::NearestEntity => SortOrder::Nearest,
        SelectorBase::RandomPlayer => SortOrder::Random,
        _ => SortOrder::Arbitrary,
    });
    match sort {
        SortOrder::Nearest => candidates.sort_by(|a, b| {
            origin
                .distance_squared(a.position())
                .total_cmp(&origin.distance_squared(b.position()))
        }),
        SortOrder::Furthest => candidates.sort_by(|a, b| {
            origin
                .distance_squared(b.position())
                .total_cmp(&origin.distance_squared(a.position()))
        }),
        SortOrder::Random => candidates.shuffle(&mut rand::rng()),
        SortOrder::Arbitrary => {}
    }

    let limit = options.limit.unwrap_or(match base {
        SelectorBase::AllPlayers | SelectorBase::AllEntities => usize::MAX,
        _ => 1,
    });
    candidates.truncate(limit);
    candidates
}

impl SelectorOptions {
    fn volume(&self, origin: Vector3<f64>) -> Option<Aabb> {
        if self.dx.is_none() && self.dy.is_none() && self.dz.is_none() {
            return None;
        }
        let span = |delta: Option<f64>| {
            let delta = delta.unwrap_or(0.0);
            if delta < 0.0 { (delta, 1.0) } else { (0.0, delta + 1.0) }
        };
        let (min_x, max_x) = span(self.dx);
        let (min_y, max_y) = span(self.dy);
        let (min_z, max_z) = span(self.dz);
        Some(Aabb::from_corners(
            origin + Vector3::new(min_x, min_y, min_z),
            origin + Vector3::new(max_x, max_y, max_z),
        ))
    }

    fn matches(
        &self,
        entity: &Entity,
        origin: Vector3<f64>,
        volume: Option<Aabb>,
        scoreboard: &Scoreboard,
    ) -> bool {
        if !self
            .types
            .iter()
            .all(|f| f.test(std::ptr::eq(entity.entity_type(), f.value)))
        {
            return false;
        }
        if !self.names.is_empty() {
            let name = entity.name();
            if !self.names.iter().all(|f| f.test(name == f.value)) {
                return false;
            }
        }
        if !self.tags.is_empty() {
            let tags = entity.tags();
            let has_tag = |tag: &String| {
                if tag.is_empty() {
                    tags.is_empty()
                } else {
                    tags.contains(tag)
                }
            };
            if !self.tags.iter().all(|f| f.test(has_tag(&f.value))) {
                return false;
            }
        }
        let holder = entity.scoreboard_name();
        if !self.teams.is_empty() {
            let team = scoreboard.team_of(&holder);
            let on_team = |name: &String| {
                if name.is_empty() {
                    team.is_none()
                } else {
                    team == Some(name.as_str())
                }
            };
            if !self.teams.iter().all(|f| f.test(on_team(&f.value))) {
                return false;
            }
        }
        if !self.game_modes.is_empty() {
            let Some(game_mode) = entity.player().map(|player| player.game_mode()) else {
                return false;
            };
            if !self.game_modes.iter().all(|f| f.test(game_mode == f.value)) {
                return false;
            }
        }
        if let Some(distance) = self.distance
            && !distance.matches_squared(origin.distance_squared(entity.position()))
        {
            return false;
        }
        if let Some(volume) = volume
            && !volume.intersects(&entity.bounding_box())
        {
            return false;
        }
        self.scores.iter().all(|(objective, range)| {
            scoreboard
                .score(&holder, objective)
                .is_some_and(|score| range.matches(score.value))
        })
    }
}

/// Splits on commas that are outside of braces and quotes.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0;
    let mut in_quotes = false;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '{' if !in_quotes => depth += 1,
            '}' if !in_quotes => depth -= 1,
            ',' if !in_quotes && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

fn negatable(value: &str) -> (bool, &str) {
    match value.strip_prefix('!') {
        Some(value) => (true, value.trim()),
        None => (false, value),
    }
}

fn unquote(value: &str) -> Option<String> {
    if value.starts_with('"') {
        let tokens: Vec<&str> = value.split(' ').collect();
        let (text, consumed) = take_quotable(&tokens)?;
        (consumed == tokens.len()).then_some(text)
    } else {
        Some(value.to_string())
    }
}

fn parse_options(inner: &str) -> Option<SelectorOptions> {
    let mut options = SelectorOptions::default();
    if inner.trim().is_empty() {
        return Some(options);
    }

    for option in split_top_level(inner) {
        let (key, value) = option.split_once('=')?;
        let (key, value) = (key.trim(), value.trim());
        match key {
            "limit" => {
                let limit = value.parse::<usize>().ok()?;
                if limit == 0 {
                    return None;
                }
                options.limit = Some(limit);
            }
            "sort" => {
                options.sort = Some(match value {
                    "nearest" => SortOrder::Nearest,
                    "furthest" => SortOrder::Furthest,
                    "random" => SortOrder::Random,
                    "arbitrary" => SortOrder::Arbitrary,
                    _ => return None,
                });
            }
            "distance" => {
                let range = FloatRange::parse(value)?;
                if range.min.is_some_and(|min| min < 0.0) || range.max.is_some_and(|max| max < 0.0) {
                    return None;
                }
                options.distance = Some(range);
            }
            "x" => options.x = Some(value.parse().ok()?),
            "y" => options.y = Some(value.parse().ok()?),
            "z" => options.z = Some(value.parse().ok()?),
            "dx" => options.dx = Some(value.parse().ok()?),
            "dy" => options.dy = Some(value.parse().ok()?),
            "dz" => options.dz = Some(value.parse().ok()?),
            "type" => {
                let (negated, value) = negatable(value);
                let id = Identifier::parse(value).ok()?;
                let entity_type = entity_types::by_key(&id.to_string())?;
                options.types.push(Filter {
                    value: entity_type,
                    negated,
                });
            }
            "name" => {
                let (negated, value) = negatable(value);
                options.names.push(Filter {
                    value: unquote(value)?,
                    negated,
                });
            }
            "tag" => {
                let (negated, value) = negatable(value);
                options.tags.push(Filter {
                    value: value.to_string(),
                    negated,
                });
            }
            "team" => {
                let (negated, value) = negatable(value);
                options.teams.push(Filter {
                    value: value.to_string(),
                    negated,
                });
            }
            "gamemode" => {
                let (negated, value) = negatable(value);
                options.game_modes.push(Filter {
                    value: GameType::parse(value)?,
                    negated,
                });
            }
            "scores" => {
                let inner = value.strip_prefix('{')?.strip_suffix('}')?;
                for score in split_top_level(inner) {
                    if score.trim().is_empty() {
                        continue;
                    }
                    let (objective, range) = score.split_once('=')?;
                    options
                        .scores
                        .push((objective.trim().to_string(), IntRange::parse(range.trim())?));
                }
            }
            _ => return None,
        }
    }
    Some(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestServer;

    #[test]
    fn parses_bases_names_and_uuids() {
        assert!(EntitySelector::parse("@s").is_some_and(|s| s.is_self_selector()));
        assert!(EntitySelector::parse("@x").is_none());
        assert!(EntitySelector::parse("Steve").is_some());
        assert!(EntitySelector::parse("ThisNameIsFarTooLong").is_none());
        assert!(EntitySelector::parse("3f1b2c4d-1234-4abc-8def-0123456789ab").is_some());
        assert!(EntitySelector::parse("@e[type=minecraft:zombie,limit=2,sort=nearest]").is_some());
        assert!(EntitySelector::parse("@e[limit=0]").is_none());
        assert!(EntitySelector::parse("@e[type=dragon]").is_none());
        assert!(EntitySelector::parse("@e[unknown=1]").is_none());
        assert!(EntitySelector::parse("@a[scores={kills=1.., deaths=..3}]").is_some());
    }

    #[test]
    fn single_and_player_checks() {
        let server = TestServer::new();
        let context = server.console_context();

        let mut all = EntitySelector::parse("@e").expect("valid selector");
        all.single = true;
        assert!(all.find_entities(&context).is_err());

        let mut entities = EntitySelector::parse("@e[type=zombie]").expect("valid selector");
        entities.players_only = true;
        assert!(entities.find_entities(&context).is_err());

        let mut players = EntitySelector::parse("@e[type=player]").expect("valid selector");
        players.players_only = true;
        assert!(players.find_entities(&context).is_ok());
    }

    #[test]
    fn filters_and_sorting() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let zombie = server.summon(&entity_types::ZOMBIE, Vector3::new(10.5, -60.0, 0.5));
        let far_zombie = server.summon(&entity_types::ZOMBIE, Vector3::new(50.5, -60.0, 0.5));
        server.summon(&entity_types::COW, Vector3::new(2.5, -60.0, 0.5));
        zombie.add_tag("boss");
        let context = server.context_for(&steve);

        let nearest = EntitySelector::parse("@n[type=zombie]")
            .expect("valid selector")
            .entity(&context)
            .expect("a zombie exists");
        assert_eq!(nearest.id(), zombie.id());

        let furthest = EntitySelector::parse("@e[type=zombie,sort=furthest,limit=1]")
            .expect("valid selector")
            .entities(&context)
            .expect("a zombie exists");
        assert_eq!(furthest[0].id(), far_zombie.id());

        let untagged = EntitySelector::parse("@e[type=!player,tag=!boss]")
            .expect("valid selector")
            .entities(&context)
            .expect("entities exist");
        assert_eq!(untagged.len(), 2);

        let close = EntitySelector::parse("@e[distance=..5]")
            .expect("valid selector")
            .entities(&context)
            .expect("entities exist");
        assert_eq!(close.len(), 2);

        let boxed = EntitySelector::parse("@e[x=9,y=-61,z=0,dx=2,dy=2,dz=1]")
            .expect("valid selector")
            .entities(&context)
            .expect("the zombie is inside");
        assert_eq!(boxed.len(), 1);

        let none = EntitySelector::parse("@e[type=skeleton]").expect("valid selector");
        assert!(none.find_entities(&context).expect("no error").is_empty());
        assert!(none.entities(&context).is_err());
    }

    #[test]
    fn score_and_team_filters() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        server.player("Alex");
        server.console("scoreboard objectives add kills dummy");
        server.console("scoreboard players set Steve kills 5");
        server.console("team add red");
        server.console("team join red Alex");
        let context = server.context_for(&steve);

        let scored = EntitySelector::parse("@a[scores={kills=3..}]")
            .expect("valid selector")
            .entities(&context)
            .expect("Steve has kills");
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].name(), "Steve");

        let teamless = EntitySelector::parse("@a[team=]")
            .expect("valid selector")
            .entities(&context)
            .expect("Steve has no team");
        assert_eq!(teamless[0].name(), "Steve");

        let red = EntitySelector::parse("@a[team=red]")
            .expect("valid selector")
            .entities(&context)
            .expect("Alex is on red");
        assert_eq!(red[0].name(), "Alex");
    }
}
