//! Handler for the "execute" command.
use ingot_utils::math::Vector3;
use ingot_utils::text::TextComponent;
use ingot_utils::{BlockPos, Identifier, translations};

use crate::command::arguments::anchor::AnchorArgument;
use crate::command::arguments::block_state::BlockStateArgument;
use crate::command::arguments::choice::ChoiceArgument;
use crate::command::arguments::coordinates::{
    BlockPosArgument, RotationArgument, Swizzle, SwizzleArgument, Vector3Argument,
};
use crate::command::arguments::dimension::DimensionArgument;
use crate::command::arguments::entity::EntityArgument;
use crate::command::arguments::entity_selector::EntitySelector;
use crate::command::arguments::identifier::IdentifierArgument;
use crate::command::arguments::objective::ObjectiveArgument;
use crate::command::arguments::range::{IntRange, IntRangeArgument};
use crate::command::arguments::score_holder::{ScoreHolderArgument, ScoreHolders};
use crate::command::commands::fill::{bounds, require_in_world, volume};
use crate::command::commands::{
    CommandExecutor, CommandHandlerBuilder, CommandHandlerDyn, CommandParserExecutor,
    CommandRedirectExecutor, CommandRedirectTarget, CommandResult, argument, literal, redirect,
};
use crate::command::context::{CommandContext, ResultStore};
use crate::command::error::CommandError;
use crate::entity::EntityAnchor;
use crate::registry::dimensions;
use crate::world::block_state::BlockState;

/// The largest region `if blocks` compares.
const MAX_COMPARED_BLOCKS: i64 = 32_768;

/// Handler for the "execute" command.
#[must_use]
pub fn command_handler() -> impl CommandHandlerDyn {
    use CommandRedirectTarget::Current;

    CommandHandlerBuilder::new(
        &["execute"],
        "Executes another command with extra options.",
        "minecraft:command.execute",
    )
    .then(literal("run").then(redirect(CommandRedirectTarget::All, Run)))
    .then(
        literal("as")
            .then(argument("targets", EntityArgument::entities()).then(redirect(Current, As))),
    )
    .then(
        literal("at")
            .then(argument("targets", EntityArgument::entities()).then(redirect(Current, At))),
    )
    .then(
        literal("positioned")
            .then(
                literal("as").then(
                    argument("targets", EntityArgument::entities())
                        .then(redirect(Current, PositionedAs)),
                ),
            )
            .then(argument("pos", Vector3Argument::centered()).then(redirect(Current, Positioned))),
    )
    .then(
        literal("rotated")
            .then(
                literal("as").then(
                    argument("targets", EntityArgument::entities())
                        .then(redirect(Current, RotatedAs)),
                ),
            )
            .then(argument("rot", RotationArgument).then(redirect(Current, Rotated))),
    )
    .then(
        literal("facing")
            .then(
                literal("entity").then(
                    argument("targets", EntityArgument::entities()).then(
                        argument("anchor", AnchorArgument).then(redirect(Current, FacingEntity)),
                    ),
                ),
            )
            .then(argument("pos", Vector3Argument::centered()).then(redirect(Current, Facing))),
    )
    .then(literal("align").then(argument("axes", SwizzleArgument).then(redirect(Current, Align))))
    .then(
        literal("anchored")
            .then(argument("anchor", AnchorArgument).then(redirect(Current, Anchored))),
    )
    .then(literal("in").then(argument("dimension", DimensionArgument).then(redirect(Current, In))))
    .then(conditions("if", true))
    .then(conditions("unless", false))
    .then(
        literal("store").then(
            argument("kind", ChoiceArgument::new(STORE_KINDS))
                .then(
                    literal("score").then(
                        argument("targets", ScoreHolderArgument::multiple()).then(
                            argument("objective", ObjectiveArgument)
                                .then(redirect(Current, StoreScore)),
                        ),
                    ),
                )
                .then(
                    literal("bossbar").then(
                        argument("id", IdentifierArgument).then(
                            argument("field", ChoiceArgument::new(BossbarField::ALL))
                                .then(redirect(Current, StoreBossbar)),
                        ),
                    ),
                ),
        ),
    )
}

/// The `if`/`unless` subtree. Each test ends the command or gates the rest of it.
fn conditions(name: &'static str, expect: bool) -> impl CommandParserExecutor<()> + Send + Sync {
    use CommandRedirectTarget::Current;

    literal(name)
        .then(
            literal("block").then(
                argument("pos", BlockPosArgument).then(
                    argument("block", BlockStateArgument)
                        .executes(Check(BlockTest, expect))
                        .then(redirect(Current, Check(BlockTest, expect))),
                ),
            ),
        )
        .then(
            literal("blocks").then(
                argument("start", BlockPosArgument).then(
                    argument("end", BlockPosArgument).then(
                        argument("destination", BlockPosArgument).then(
                            argument("mode", ChoiceArgument::new(COMPARE_MODES))
                                .executes(Check(BlocksTest, expect))
                                .then(redirect(Current, Check(BlocksTest, expect))),
                        ),
                    ),
                ),
            ),
        )
        .then(
            literal("dimension").then(
                argument("dimension", DimensionArgument)
                    .executes(Check(DimensionTest, expect))
                    .then(redirect(Current, Check(DimensionTest, expect))),
            ),
        )
        .then(
            literal("entity").then(
                argument("entities", EntityArgument::entities())
                    .executes(Check(EntityTest, expect))
                    .then(redirect(Current, Check(EntityTest, expect))),
            ),
        )
        .then(
            literal("score").then(
                argument("target", ScoreHolderArgument::single()).then(
                    argument("targetObjective", ObjectiveArgument)
                        .then(
                            literal("matches").then(
                                argument("range", IntRangeArgument)
                                    .executes(Check(ScoreMatchesTest, expect))
                                    .then(redirect(Current, Check(ScoreMatchesTest, expect))),
                            ),
                        )
                        .then(
                            argument("operation", ChoiceArgument::new(Comparison::ALL)).then(
                                argument("source", ScoreHolderArgument::single()).then(
                                    argument("sourceObjective", ObjectiveArgument)
                                        .executes(Check(ScoreCompareTest, expect))
                                        .then(redirect(Current, Check(ScoreCompareTest, expect))),
                                ),
                            ),
                        ),
                ),
            ),
        )
}

struct Run;

impl CommandRedirectExecutor<((), ())> for Run {
    fn redirect(
        &self,
        _args: ((), ()),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        Ok(vec![context.clone()])
    }
}

type Targets = (((), ()), EntitySelector);
type AsTargets = ((((), ()), ()), EntitySelector);

struct As;

impl CommandRedirectExecutor<Targets> for As {
    fn redirect(&self, args: Targets, context: &CommandContext) -> Result<Vec<CommandContext>, CommandError> {
        let (((), ()), targets) = args;
        Ok(targets
            .find_entities(context)?
            .into_iter()
            .map(|entity| {
                let mut branch = context.clone();
                branch.entity = Some(entity);
                branch
            })
            .collect())
    }

    fn forks(&self) -> bool {
        true
    }
}

struct At;

impl CommandRedirectExecutor<Targets> for At {
    fn redirect(&self, args: Targets, context: &CommandContext) -> Result<Vec<CommandContext>, CommandError> {
        let (((), ()), targets) = args;
        Ok(targets
            .find_entities(context)?
            .into_iter()
            .map(|entity| {
                let mut branch = context.clone();
                branch.world = context.server.world_of(&entity).clone();
                branch.position = entity.position();
                branch.rotation = entity.rotation();
                branch
            })
            .collect())
    }

    fn forks(&self) -> bool {
        true
    }
}

struct Positioned;

impl CommandRedirectExecutor<(((), ()), Vector3<f64>)> for Positioned {
    fn redirect(
        &self,
        args: (((), ()), Vector3<f64>),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        let (((), ()), pos) = args;
        let mut branch = context.clone();
        branch.position = pos;
        branch.anchor = EntityAnchor::Feet;
        Ok(vec![branch])
    }
}

struct PositionedAs;

impl CommandRedirectExecutor<AsTargets> for PositionedAs {
    fn redirect(&self, args: AsTargets, context: &CommandContext) -> Result<Vec<CommandContext>, CommandError> {
        let ((((), ()), ()), targets) = args;
        Ok(targets
            .find_entities(context)?
            .into_iter()
            .map(|entity| {
                let mut branch = context.clone();
                branch.position = entity.position();
                branch
            })
            .collect())
    }

    fn forks(&self) -> bool {
        true
    }
}

struct Rotated;

impl CommandRedirectExecutor<(((), ()), (f32, f32))> for Rotated {
    fn redirect(
        &self,
        args: (((), ()), (f32, f32)),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        let (((), ()), rotation) = args;
        let mut branch = context.clone();
        branch.rotation = rotation;
        Ok(vec![branch])
    }
}

struct RotatedAs;

impl CommandRedirectExecutor<AsTargets> for RotatedAs {
    fn redirect(&self, args: AsTargets, context: &CommandContext) -> Result<Vec<CommandContext>, CommandError> {
        let ((((), ()), ()), targets) = args;
        Ok(targets
            .find_entities(context)?
            .into_iter()
            .map(|entity| {
                let mut branch = context.clone();
                branch.rotation = entity.rotation();
                branch
            })
            .collect())
    }

    fn forks(&self) -> bool {
        true
    }
}

struct Facing;

impl CommandRedirectExecutor<(((), ()), Vector3<f64>)> for Facing {
    fn redirect(
        &self,
        args: (((), ()), Vector3<f64>),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        let (((), ()), target) = args;
        let mut branch = context.clone();
        branch.rotation = context.anchor_position().look_at(target);
        Ok(vec![branch])
    }
}

struct FacingEntity;

impl CommandRedirectExecutor<(AsTargets, EntityAnchor)> for FacingEntity {
    fn redirect(
        &self,
        args: (AsTargets, EntityAnchor),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        let (((((), ()), ()), targets), anchor) = args;
        let origin = context.anchor_position();
        Ok(targets
            .find_entities(context)?
            .into_iter()
            .map(|entity| {
                let mut branch = context.clone();
                branch.rotation = origin.look_at(entity.anchor_position(anchor));
                branch
            })
            .collect())
    }

    fn forks(&self) -> bool {
        true
    }
}

struct Align;

impl CommandRedirectExecutor<(((), ()), Swizzle)> for Align {
    fn redirect(
        &self,
        args: (((), ()), Swizzle),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        let (((), ()), axes) = args;
        let mut branch = context.clone();
        let position = &mut branch.position;
        if axes.x {
            position.x = position.x.floor();
        }
        if axes.y {
            position.y = position.y.floor();
        }
        if axes.z {
            position.z = position.z.floor();
        }
        Ok(vec![branch])
    }
}

struct Anchored;

impl CommandRedirectExecutor<(((), ()), EntityAnchor)> for Anchored {
    fn redirect(
        &self,
        args: (((), ()), EntityAnchor),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        let (((), ()), anchor) = args;
        let mut branch = context.clone();
        branch.anchor = anchor;
        Ok(vec![branch])
    }
}

struct In;

impl CommandRedirectExecutor<(((), ()), Identifier)> for In {
    fn redirect(
        &self,
        args: (((), ()), Identifier),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        let (((), ()), dimension) = args;
        let world = DimensionArgument::world(&dimension, context)?;
        let scale = dimensions::teleportation_scale(context.world.dimension, world.dimension);

        let mut branch = context.clone();
        branch.position = Vector3::new(
            context.position.x * scale,
            context.position.y,
            context.position.z * scale,
        );
        branch.world = world;
        Ok(vec![branch])
    }
}

const STORE_KINDS: &[(&str, bool)] = &[("result", false), ("success", true)];

struct StoreScore;

impl CommandRedirectExecutor<((((((), ()), bool), ()), ScoreHolders), String)> for StoreScore {
    fn redirect(
        &self,
        args: ((((((), ()), bool), ()), ScoreHolders), String),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        let ((((((), ()), success), ()), targets), objective) = args;
        let holders = targets.holders(context)?;
        ObjectiveArgument::get(&context.server.scoreboard.lock(), &objective)?;

        let mut branch = context.clone();
        branch.result_stores.push(ResultStore::Score {
            holders,
            objective,
            success,
        });
        Ok(vec![branch])
    }
}

/// Which number of a boss bar a result is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BossbarField {
    Value,
    Max,
}

impl BossbarField {
    const ALL: &'static [(&'static str, BossbarField)] =
        &[("value", BossbarField::Value), ("max", BossbarField::Max)];
}

struct StoreBossbar;

impl CommandRedirectExecutor<((((((), ()), bool), ()), Identifier), BossbarField)> for StoreBossbar {
    fn redirect(
        &self,
        args: ((((((), ()), bool), ()), Identifier), BossbarField),
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError> {
        let ((((((), ()), success), ()), id), field) = args;
        if context.server.bossbars.lock().get(&id).is_none() {
            return Err(CommandError::translated(
                translations::COMMANDS_BOSSBAR_UNKNOWN,
                [TextComponent::plain(id.to_string())],
            ));
        }

        let mut branch = context.clone();
        branch.result_stores.push(match field {
            BossbarField::Value => ResultStore::BossbarValue { id, success },
            BossbarField::Max => ResultStore::BossbarMax { id, success },
        });
        Ok(vec![branch])
    }
}

/// The outcome of a test.
#[derive(Debug, Clone, Copy)]
enum Matches {
    /// A yes/no test.
    Flag(bool),
    /// A test that passes when something was counted.
    Count(i32),
}

impl Matches {
    const fn count(self) -> i32 {
        match self {
            Matches::Flag(passed) => passed as i32,
            Matches::Count(count) => count,
        }
    }
}

/// A predicate of `execute if`/`unless` over its parsed arguments.
trait Condition<S> {
    fn test(&self, args: S, context: &CommandContext) -> Result<Matches, CommandError>;
}

/// Runs a condition, either as the end of the command or as a gate for the rest.
struct Check<C>(C, bool);

impl<S, C: Condition<S>> CommandExecutor<S> for Check<C> {
    fn execute(&self, args: S, context: &mut CommandContext) -> CommandResult {
        let Check(condition, expect) = self;
        let matches = condition.test(args, context)?;
        let count = matches.count();
        let passed = (count > 0) == *expect;

        if !passed {
            context.store_result(false, 0);
            return Err(match matches {
                Matches::Count(count) if !expect => CommandError::translated(
                    translations::COMMANDS_EXECUTE_CONDITIONAL_FAIL_COUNT,
                    [count.into()],
                ),
                _ => CommandError::msg(translations::COMMANDS_EXECUTE_CONDITIONAL_FAIL),
            });
        }

        let (message, result) = match matches {
            Matches::Count(count) if *expect => (
                translations::COMMANDS_EXECUTE_CONDITIONAL_PASS_COUNT.message([count.into()]),
                count,
            ),
            _ => (translations::COMMANDS_EXECUTE_CONDITIONAL_PASS.msg(), 1),
        };
        context.store_result(true, result);
        context.send_success(&message);
        Ok(result)
    }
}

impl<S, C: Condition<S>> CommandRedirectExecutor<S> for Check<C> {
    fn redirect(&self, args: S, context: &CommandContext) -> Result<Vec<CommandContext>, CommandError> {
        let Check(condition, expect) = self;
        let passed = (condition.test(args, context)?.count() > 0) == *expect;
        if passed {
            Ok(vec![context.clone()])
        } else {
            Err(CommandError::msg(translations::COMMANDS_EXECUTE_CONDITIONAL_FAIL))
        }
    }
}

struct EntityTest;

impl Condition<((((), ()), ()), EntitySelector)> for EntityTest {
    fn test(
        &self,
        args: ((((), ()), ()), EntitySelector),
        context: &CommandContext,
    ) -> Result<Matches, CommandError> {
        let ((((), ()), ()), entities) = args;
        Ok(Matches::Count(entities.find_entities(context)?.len() as i32))
    }
}

struct BlockTest;

impl Condition<(((((), ()), ()), BlockPos), BlockState)> for BlockTest {
    fn test(
        &self,
        args: (((((), ()), ()), BlockPos), BlockState),
        context: &CommandContext,
    ) -> Result<Matches, CommandError> {
        let (((((), ()), ()), pos), predicate) = args;
        Ok(Matches::Flag(
            context.world.get_block_state(pos).matches(&predicate),
        ))
    }
}

const COMPARE_MODES: &[(&str, bool)] = &[("all", false), ("masked", true)];

struct BlocksTest;

impl Condition<(((((((), ()), ()), BlockPos), BlockPos), BlockPos), bool)> for BlocksTest {
    fn test(
        &self,
        args: (((((((), ()), ()), BlockPos), BlockPos), BlockPos), bool),
        context: &CommandContext,
    ) -> Result<Matches, CommandError> {
        let (((((((), ()), ()), start), end), destination), masked) = args;
        require_in_world(context, &[start, end, destination])?;
        let (min, max) = bounds(start, end);
        let size = volume(min, max);
        if size > MAX_COMPARED_BLOCKS {
            return Err(CommandError::translated(
                translations::COMMANDS_EXECUTE_BLOCKS_TOOBIG,
                [
                    TextComponent::plain(MAX_COMPARED_BLOCKS.to_string()),
                    TextComponent::plain(size.to_string()),
                ],
            ));
        }

        require_in_world(
            context,
            &[destination.offset(max.x() - min.x(), max.y() - min.y(), max.z() - min.z())],
        )?;

        let world = &context.world;
        let (dx, dy, dz) = (
            destination.x() - min.x(),
            destination.y() - min.y(),
            destination.z() - min.z(),
        );
        let mut compared = 0;
        for y in min.y()..=max.y() {
            for z in min.z()..=max.z() {
                for x in min.x()..=max.x() {
                    let source_pos = BlockPos::new(x, y, z);
                    let source = world.get_block_state(source_pos);
                    if masked && source.is_air() {
                        continue;
                    }
                    if world.get_block_state(source_pos.offset(dx, dy, dz)) != source {
                        return Ok(Matches::Flag(false));
                    }
                    compared += 1;
                }
            }
        }
        Ok(Matches::Count(compared))
    }
}

struct DimensionTest;

impl Condition<((((), ()), ()), Identifier)> for DimensionTest {
    fn test(
        &self,
        args: ((((), ()), ()), Identifier),
        context: &CommandContext,
    ) -> Result<Matches, CommandError> {
        let ((((), ()), ()), dimension) = args;
        let world = DimensionArgument::world(&dimension, context)?;
        Ok(Matches::Flag(std::ptr::eq(world.dimension, context.world.dimension)))
    }
}

/// How two scores are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Less,
    LessOrEqual,
    Equal,
    Greater,
    GreaterOrEqual,
}

impl Comparison {
    const ALL: &'static [(&'static str, Comparison)] = &[
        ("<", Comparison::Less),
        ("<=", Comparison::LessOrEqual),
        ("=", Comparison::Equal),
        (">", Comparison::Greater),
        (">=", Comparison::GreaterOrEqual),
    ];

    const fn test(self, target: i32, source: i32) -> bool {
        match self {
            Comparison::Less => target < source,
            Comparison::LessOrEqual => target <= source,
            Comparison::Equal => target == source,
            Comparison::Greater => target > source,
            Comparison::GreaterOrEqual => target >= source,
        }
    }
}

/// Resolves a single score holder and reads its score, `None` if unset.
fn read_score(
    holder: &ScoreHolders,
    objective: &str,
    context: &CommandContext,
) -> Result<Option<i32>, CommandError> {
    let holder = holder
        .holders(context)?
        .into_iter()
        .next()
        .ok_or_else(|| CommandError::msg(translations::ARGUMENT_SCOREHOLDER_EMPTY))?;
    let scoreboard = context.server.scoreboard.lock();
    ObjectiveArgument::get(&scoreboard, objective)?;
    Ok(scoreboard.score(&holder, objective).map(|score| score.value))
}

type ScoreTarget = (((((), ()), ()), ScoreHolders), String);

struct ScoreMatchesTest;

impl Condition<((ScoreTarget, ()), IntRange)> for ScoreMatchesTest {
    fn test(&self, args: ((ScoreTarget, ()), IntRange), context: &CommandContext) -> Result<Matches, CommandError> {
        let (((((((), ()), ()), target), objective), ()), range) = args;
        let value = read_score(&target, &objective, context)?;
        Ok(Matches::Flag(value.is_some_and(|value| range.matches(value))))
    }
}

struct ScoreCompareTest;

impl Condition<(((ScoreTarget, Comparison), ScoreHolders), String)> for ScoreCompareTest {
    fn test(
        &self,
        args: (((ScoreTarget, Comparison), ScoreHolders), String),
        context: &CommandContext,
    ) -> Result<Matches, CommandError> {
        let ((((((((), ()), ()), target), target_objective), comparison), source), source_objective) =
            args;
        let target = read_score(&target, &target_objective, context)?;
        let source = read_score(&source, &source_objective, context)?;
        Ok(Matches::Flag(match (target, source) {
            (Some(target), Some(source)) => comparison.test(target, source),
            _ => false,
        }))
    }
}

#[cfg(test)]
mod tests {
    use ingot_utils::BlockPos;
    use ingot_utils::math::Vector3;

    use crate::registry::entity_types::ZOMBIE;
    use crate::test_support::TestServer;

    #[test]
    fn as_and_at_fork_per_entity() {
        let server = TestServer::new();
        let steve = server.player("Steve");
        let alex = server.player("Alex");

        assert_eq!(server.console("execute as @a run tag @s add seen"), 2);
        assert_eq!(steve.tags(), vec!["seen"]);
        assert_eq!(alex.tags(), vec!["seen"]);

        server.console("tp Alex 10 -60 10");
        assert_eq!(server.console("execute as Steve at Alex run tp @s ~ ~5 ~"), 1);
        assert_eq!(steve.position(), Vector3::new(10.5, -55.0, 10.5));

        assert_eq!(
            server.console("execute as @a if entity @s[name=Steve] run tag @s add picked"),
            1
        );
        assert_eq!(alex.tags(), vec!["seen"]);
    }

    #[test]
    fn forked_branch_failures_count_as_failures() {
        let server = TestServer::new();
        server.player("Steve");
        server.player("Alex");
        server.console("scoreboard objectives add points dummy");
        server.console("scoreboard players set Steve points 7");

        assert_eq!(server.run_console("execute as @a run scoreboard players get @s points").ok(), Some(1));
        assert_eq!(server.run_console("execute as @a run scoreboard players get @s missing").ok(), Some(0));
        assert_eq!(
            server
                .run_console("execute as @a if score @s points matches 7 run say hi")
                .ok(),
            Some(1)
        );
        assert!(server.run_console("execute run scoreboard players get Alex points").is_err());
    }

    #[test]
    fn positions_rotations_and_alignment() {
        let server = TestServer::new();
        let steve = server.player("Steve");

        server.console("execute as Steve positioned 1.7 -60 -2.3 align xz run tp @s ~ ~ ~");
        assert_eq!(steve.position(), Vector3::new(1.0, -60.0, -3.0));

        server.console("tp Steve 0.5 -60 0.5");
        server.console("execute as Steve at @s facing 0.5 -60 10.5 run tp @s ~ ~ ~ ~ ~");
        assert!(steve.rotation().0.abs() < 1e-3);
        assert!(steve.rotation().1.abs() < 1e-3);

        server.console("execute as Steve rotated 45 10 run tp @s ~ ~ ~ ~ ~");
        assert_eq!(steve.rotation(), (45.0, 10.0));
    }

    #[test]
    fn in_scales_coordinates_between_dimensions() {
        let server = TestServer::new();
        let steve = server.player("Steve");

        server.console("execute as Steve positioned 80 70 16 in minecraft:the_nether run tp @s ~ ~ ~");
        assert_eq!(steve.dimension().key, "minecraft:the_nether");
        assert_eq!(steve.position(), Vector3::new(80.5 / 8.0, 70.0, 16.5 / 8.0));
        assert!(server.run_console("execute in minecraft:nowhere run say hi").is_err());
    }

    #[test]
    fn conditions_count_and_gate() {
        let server = TestServer::new();
        server.player("Steve");
        server.player("Alex");

        assert_eq!(server.console("execute if entity @a"), 2);
        assert!(server.run_console("execute unless entity @a").is_err());
        assert_eq!(server.console("execute unless entity @e[type=zombie]"), 1);
        server.summon(&ZOMBIE, Vector3::new(3.0, -60.0, 3.0));
        assert_eq!(server.console("execute if entity @e[type=zombie] run say found"), 1);

        assert_eq!(server.console("execute if block 0 -61 0 minecraft:grass_block"), 1);
        assert!(server.run_console("execute if block 0 -61 0 minecraft:stone").is_err());
        assert_eq!(server.console("execute if dimension minecraft:overworld"), 1);
        assert!(server.run_console("execute if block 0 -61 0 stone run say no").is_err());
    }

    #[test]
    fn score_conditions() {
        let server = TestServer::new();
        server.console("scoreboard objectives add points dummy");
        server.console("scoreboard players set Steve points 7");
        server.console("scoreboard players set Alex points 3");

        assert_eq!(server.console("execute if score Steve points > Alex points"), 1);
        assert!(server.run_console("execute if score Steve points = Alex points").is_err());
        assert_eq!(server.console("execute if score Alex points matches ..3"), 1);
        assert_eq!(server.console("execute unless score Nobody points matches 0.."), 1);
        assert!(server.run_console("execute if score Steve missing matches 1").is_err());
    }

    #[test]
    fn compares_block_regions() {
        let server = TestServer::new();
        let world = server.server.overworld().clone();

        assert_eq!(server.console("execute if blocks 0 -64 0 1 -61 1 10 -64 10 all"), 16);
        server.console("setblock 10 -60 10 minecraft:stone");
        assert_eq!(server.console("execute if blocks 0 -61 0 0 -60 0 10 -61 10 masked"), 1);
        assert!(server.run_console("execute if blocks 0 -61 0 0 -60 0 10 -61 10 all").is_err());
        assert_eq!(
            server.console("execute unless blocks 0 -61 0 0 -60 0 10 -61 10 all"),
            1
        );
        assert!(world.get_block_state(BlockPos::new(10, -60, 10)).is_solid());
        assert!(server.run_console("execute if blocks 0 -64 0 40 -40 40 100 -64 100 all").is_err());
        assert!(
            server
                .run_console(
                    "execute if blocks -2147483648 -2147483648 -2147483648 2147483647 2147483647 2147483647 0 0 0 all"
                )
                .is_err()
        );
        assert!(server.run_console("execute if blocks 0 -64 0 1 -63 1 0 319 0 all").is_err());
        assert!(
            server
                .run_console("execute if blocks -29999999 -64 -29999999 29999999 319 29999999 0 0 0 all")
                .is_err()
        );
    }

    #[test]
    fn stores_results_in_scores_and_bossbars() {
        let server = TestServer::new();
        server.player("Steve");
        server.console("scoreboard objectives add points dummy");
        server.console("scoreboard players set Alex points 12");

        server.console("execute store result score Steve points run scoreboard players get Alex points");
        assert_eq!(server.console("scoreboard players get Steve points"), 12);

        assert!(
            server
                .run_console("execute store success score Steve points run scoreboard players get Nobody points")
                .is_err()
        );
        assert_eq!(server.console("scoreboard players get Steve points"), 0);

        server.console("bossbar add raid \"Raid\"");
        server.console("execute store result bossbar raid max if entity @a");
        let bars = server.server.bossbars.lock();
        let bar = bars
            .get(&ingot_utils::Identifier::vanilla_static("raid"))
            .expect("bar exists");
        assert_eq!(bar.max, 1);
        drop(bars);

        assert!(server.run_console("execute store result bossbar missing value run say hi").is_err());
    }
}
