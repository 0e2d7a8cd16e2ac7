//! Position and rotation arguments.
//!
//! Coordinates are absolute, relative to the context position (`~`) or local
//! to the context rotation (`^`, left/up/forwards). They are resolved against
//! the context they are parsed with.
use ingot_utils::BlockPos;
use ingot_utils::math::{Vector2, Vector3, wrap_degrees};

use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;

/// Parses a number, rejecting `NaN` and infinities.
fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// One axis of a world coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WorldCoordinate {
    relative: bool,
    value: f64,
}

impl WorldCoordinate {
    /// Parses `~`, `~<n>` or `<n>`. Absolute values must be integers when
    /// `integer` is set.
    fn parse(token: &str, integer: bool) -> Option<Self> {
        if let Some(offset) = token.strip_prefix('~') {
            let value = if offset.is_empty() { 0.0 } else { parse_finite(offset)? };
            return Some(Self {
                relative: true,
                value,
            });
        }
        if token.starts_with('^') {
            return None;
        }
        let value = if integer {
            f64::from(token.parse::<i32>().ok()?)
        } else {
            parse_finite(token)?
        };
        Some(Self {
            relative: false,
            value,
        })
    }

    /// Adds 0.5 to whole absolute values written without a decimal point.
    fn center(self, token: &str) -> Self {
        if !self.relative && !token.contains('.') {
            Self {
                relative: false,
                value: self.value + 0.5,
            }
        } else {
            self
        }
    }

    fn resolve(self, origin: f64) -> f64 {
        if self.relative { origin + self.value } else { self.value }
    }
}

fn parse_local(tokens: &[&str]) -> Option<[f64; 3]> {
    let mut values = [0.0; 3];
    for (value, token) in values.iter_mut().zip(tokens) {
        let offset = token.strip_prefix('^')?;
        *value = if offset.is_empty() { 0.0 } else { parse_finite(offset)? };
    }
    Some(values)
}

/// Applies `^left ^up ^forwards` to the context anchor and rotation.
fn resolve_local([left, up, forwards]: [f64; 3], context: &CommandContext) -> Vector3<f64> {
    let (yaw, pitch) = context.rotation;
    let (yaw, pitch) = (f64::from(yaw), f64::from(pitch));
    let (yaw_sin, yaw_cos) = (yaw + 90.0).to_radians().sin_cos();
    let (pitch_sin, pitch_cos) = (-pitch).to_radians().sin_cos();
    let (up_sin, up_cos) = (-pitch + 90.0).to_radians().sin_cos();

    let forward_axis = Vector3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos);
    let up_axis = Vector3::new(yaw_cos * up_cos, up_sin, yaw_sin * up_cos);
    let left_axis = Vector3::new(
        -(forward_axis.y * up_axis.z - forward_axis.z * up_axis.y),
        -(forward_axis.z * up_axis.x - forward_axis.x * up_axis.z),
        -(forward_axis.x * up_axis.y - forward_axis.y * up_axis.x),
    );

    context.anchor_position() + forward_axis * forwards + up_axis * up + left_axis * left
}

fn parse_position(
    arg: &[&str],
    context: &CommandContext,
    integer: bool,
    center: bool,
) -> Option<Vector3<f64>> {
    let tokens = arg.get(..3)?;
    let position = if tokens.iter().any(|token| token.starts_with('^')) {
        resolve_local(parse_local(tokens)?, context)
    } else {
        parse_world(tokens, context, integer, center)?
    };
    [position.x, position.y, position.z]
        .iter()
        .all(|value| value.is_finite())
        .then_some(position)
}

fn parse_world(
    tokens: &[&str],
    context: &CommandContext,
    integer: bool,
    center: bool,
) -> Option<Vector3<f64>> {
    let mut axes = [WorldCoordinate {
        relative: false,
        value: 0.0,
    }; 3];
    for (i, token) in tokens.iter().enumerate() {
        let coordinate = WorldCoordinate::parse(token, integer)?;
        axes[i] = if center && i != 1 {
            coordinate.center(token)
        } else {
            coordinate
        };
    }
    let origin = context.position;
    Some(Vector3::new(
        axes[0].resolve(origin.x),
        axes[1].resolve(origin.y),
        axes[2].resolve(origin.z),
    ))
}

/// A precise position, `x y z`.
pub struct Vector3Argument {
    center_correct: bool,
}

impl Vector3Argument {
    /// Whole absolute x and z values are moved to the block centre.
    #[must_use]
    pub const fn centered() -> Self {
        Self {
            center_correct: true,
        }
    }

    /// Values are taken as written.
    #[must_use]
    pub const fn exact() -> Self {
        Self {
            center_correct: false,
        }
    }
}

impl CommandArgument for Vector3Argument {
    type Output = Vector3<f64>;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let position = parse_position(arg, context, false, self.center_correct)?;
        Some((&arg[3..], position))
    }

    fn display(&self, name: &str) -> String {
        format!("<{name}: x y z>")
    }
}

/// A block position, `x y z`, where absolute values are integers.
pub struct BlockPosArgument;

impl CommandArgument for BlockPosArgument {
    type Output = BlockPos;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let position = parse_position(arg, context, true, false)?;
        Some((&arg[3..], BlockPos::containing(position)))
    }

    fn display(&self, name: &str) -> String {
        format!("<{name}: x y z>")
    }
}

/// A horizontal position, `x z`.
pub struct Vector2Argument;

impl CommandArgument for Vector2Argument {
    type Output = Vector2<f64>;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let tokens = arg.get(..2)?;
        let x = WorldCoordinate::parse(tokens[0], false)?.center(tokens[0]);
        let z = WorldCoordinate::parse(tokens[1], false)?.center(tokens[1]);
        let position = Vector2::new(
            x.resolve(context.position.x),
            z.resolve(context.position.z),
        );
        (position.x.is_finite() && position.y.is_finite()).then(|| (&arg[2..], position))
    }

    fn display(&self, name: &str) -> String {
        format!("<{name}: x z>")
    }
}

/// A rotation, `yaw pitch`.
pub struct RotationArgument;

impl CommandArgument for RotationArgument {
    type Output = (f32, f32);

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let tokens = arg.get(..2)?;
        let yaw = WorldCoordinate::parse(tokens[0], false)?;
        let pitch = WorldCoordinate::parse(tokens[1], false)?;
        let (current_yaw, current_pitch) = context.rotation;
        let rotation = (
            yaw.resolve(f64::from(current_yaw)) as f32,
            pitch.resolve(f64::from(current_pitch)) as f32,
        );
        (rotation.0.is_finite() && rotation.1.is_finite()).then(|| (&arg[2..], rotation))
    }

    fn display(&self, name: &str) -> String {
        format!("<{name}: yaw pitch>")
    }
}

/// A single yaw angle, optionally `~` relative to the context yaw.
pub struct AngleArgument;

impl CommandArgument for AngleArgument {
    type Output = f32;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let angle = WorldCoordinate::parse(arg.first()?, false)?;
        let yaw = angle.resolve(f64::from(context.rotation.0)) as f32;
        yaw.is_finite().then(|| (&arg[1..], wrap_degrees(yaw)))
    }
}

/// A set of axes such as `xz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Swizzle {
    /// Includes x.
    pub x: bool,
    /// Includes y.
    pub y: bool,
    /// Includes z.
    pub z: bool,
}

/// Parses a combination of `x`, `y` and `z` without repeats.
pub struct SwizzleArgument;

impl CommandArgument for SwizzleArgument {
    type Output = Swizzle;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let token = *arg.first()?;
        let mut swizzle = Swizzle::default();
        for c in token.chars() {
            let axis = match c {
                'x' => &mut swizzle.x,
                'y' => &mut swizzle.y,
                'z' => &mut swizzle.z,
                _ => return None,
            };
            if *axis {
                return None;
            }
            *axis = true;
        }
        (!token.is_empty()).then(|| (&arg[1..], swizzle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestServer;

    #[test]
    fn world_coordinates() {
        let server = TestServer::new();
        let mut context = server.console_context();
        context.position = Vector3::new(10.0, 64.0, -5.0);

        let (_, pos) = Vector3Argument::centered()
            .parse(&["~1", "70", "3"], &mut context)
            .expect("valid position");
        assert_eq!(pos, Vector3::new(11.0, 70.0, 3.5));

        let (_, pos) = Vector3Argument::exact()
            .parse(&["1.25", "~", "~-5"], &mut context)
            .expect("valid position");
        assert_eq!(pos, Vector3::new(1.25, 64.0, -10.0));

        assert!(
            BlockPosArgument
                .parse(&["1.5", "2", "3"], &mut context)
                .is_none()
        );
        let (rest, pos) = BlockPosArgument
            .parse(&["~0.5", "~", "~-0.5", "stone"], &mut context)
            .expect("valid block position");
        assert_eq!(pos, BlockPos::new(10, 64, -6));
        assert_eq!(rest, &["stone"]);

        assert!(
            Vector3Argument::exact()
                .parse(&["^", "~", "^"], &mut context)
                .is_none()
        );
    }

    #[test]
    fn local_coordinates_follow_rotation() {
        let server = TestServer::new();
        let mut context = server.console_context();
        context.entity = None;
        context.position = Vector3::new(0.0, 0.0, 0.0);

        // Yaw 0 faces +z.
        context.rotation = (0.0, 0.0);
        let (_, pos) = Vector3Argument::exact()
            .parse(&["^", "^", "^2"], &mut context)
            .expect("valid position");
        assert!((pos.z - 2.0).abs() < 1e-9 && pos.x.abs() < 1e-9);

        // Left of +z is +x.
        let (_, pos) = Vector3Argument::exact()
            .parse(&["^1", "^", "^"], &mut context)
            .expect("valid position");
        assert!((pos.x - 1.0).abs() < 1e-9 && pos.z.abs() < 1e-9);

        // Yaw 90 faces -x.
        context.rotation = (90.0, 0.0);
        let (_, pos) = Vector3Argument::exact()
            .parse(&["^", "^1", "^3"], &mut context)
            .expect("valid position");
        assert!((pos.x + 3.0).abs() < 1e-9 && (pos.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let server = TestServer::new();
        let mut context = server.console_context();

        for tokens in [
            ["~NaN", "~", "~"],
            ["~", "~inf", "~"],
            ["^", "^", "^-inf"],
            ["NaN", "0", "0"],
            ["^", "^", "^NaN"],
        ] {
            assert!(
                Vector3Argument::exact().parse(&tokens, &mut context).is_none(),
                "{tokens:?}"
            );
        }
        assert!(BlockPosArgument.parse(&["~NaN", "0", "0"], &mut context).is_none());
        assert!(Vector2Argument.parse(&["~NaN", "0"], &mut context).is_none());
        assert!(RotationArgument.parse(&["~", "~1e300"], &mut context).is_none());
        assert!(AngleArgument.parse(&["inf"], &mut context).is_none());
    }

    #[test]
    fn rotation_and_swizzle() {
        let server = TestServer::new();
        let mut context = server.console_context();
        context.rotation = (45.0, 10.0);

        let (_, rotation) = RotationArgument
            .parse(&["~10", "-20"], &mut context)
            .expect("valid rotation");
        assert_eq!(rotation, (55.0, -20.0));

        let (_, swizzle) = SwizzleArgument
            .parse(&["zx"], &mut context)
            .expect("valid swizzle");
        assert_eq!(
            swizzle,
            Swizzle {
                x: true,
                y: false,
                z: true
            }
        );
        assert!(SwizzleArgument.parse(&["xx"], &mut context).is_none());
        assert!(SwizzleArgument.parse(&["xw"], &mut context).is_none());
    }
}
