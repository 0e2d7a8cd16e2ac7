//! This module contains everything related to text components.
use std::borrow::Cow;
use std::fmt::{self, Display};

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::translations::TRANSLATIONS;

pub mod color;

pub use color::NamedColor;

/// The content of a text component.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Literal text.
    Text(Cow<'static, str>),
    /// A translation key with its arguments.
    Translate {
        /// The translation key.
        key: Cow<'static, str>,
        /// The arguments substituted into the translation.
        args: Vec<TextComponent>,
    },
}

/// A rich chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct TextComponent {
    /// What this component displays.
    pub content: Content,
    /// The colour, inherited by children when unset.
    pub color: Option<NamedColor>,
    /// Components appended after this one.
    pub extra: Vec<TextComponent>,
}

impl Default for TextComponent {
    fn default() -> Self {
        Self::const_plain("")
    }
}

impl TextComponent {
    /// Creates a literal component from a static string.
    #[must_use]
    pub const fn const_plain(text: &'static str) -> Self {
        Self {
            content: Content::Text(Cow::Borrowed(text)),
            color: None,
            extra: Vec::new(),
        }
    }

    /// Creates a literal component.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(Cow::Owned(text.into())),
            color: None,
            extra: Vec::new(),
        }
    }

    /// Creates a translatable component without arguments.
    #[must_use]
    pub const fn const_translate(key: &'static str) -> Self {
        Self {
            content: Content::Translate {
                key: Cow::Borrowed(key),
                args: Vec::new(),
            },
            color: None,
            extra: Vec::new(),
        }
    }

    /// Creates a translatable component.
    #[must_use]
    pub fn translate(key: &'static str, args: impl IntoIterator<Item = TextComponent>) -> Self {
        Self {
            content: Content::Translate {
                key: Cow::Borrowed(key),
                args: args.into_iter().collect(),
            },
            color: None,
            extra: Vec::new(),
        }
    }

    /// Sets the colour of this component.
    #[must_use]
    pub fn color(mut self, color: NamedColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Appends a child component.
    #[must_use]
    pub fn append(mut self, child: impl Into<TextComponent>) -> Self {
        self.extra.push(child.into());
        self
    }

    /// Joins components with `", "`, the way vanilla formats lists.
    #[must_use]
    pub fn join(components: impl IntoIterator<Item = TextComponent>) -> Self {
        let mut result = Self::const_plain("");
        for (i, component) in components.into_iter().enumerate() {
            if i > 0 {
                result.extra.push(Self::const_plain(", "));
            }
            result.extra.push(component);
        }
        result
    }

    /// Renders the component as plain English text.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match &self.content {
            Content::Text(text) => out.push_str(text),
            Content::Translate { key, args } => {
                let format = TRANSLATIONS
                    .get(key.as_ref())
                    .copied()
                    .unwrap_or(key.as_ref());
                format_translation(format, args, out);
            }
        }
        for child in &self.extra {
            child.write_plain(out);
        }
    }

    /// Serializes the component to its JSON form.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        match &self.content {
            Content::Text(text) => {
                map.insert("text".into(), Value::String(text.to_string()));
            }
            Content::Translate { key, args } => {
                map.insert("translate".into(), Value::String(key.to_string()));
                if !args.is_empty() {
                    map.insert(
                        "with".into(),
                        Value::Array(args.iter().map(Self::to_json).collect()),
                    );
                }
            }
        }
        if let Some(color) = self.color {
            map.insert("color".into(), Value::String(color.name().into()));
        }
        if !self.extra.is_empty() {
            map.insert(
                "extra".into(),
                Value::Array(self.extra.iter().map(Self::to_json).collect()),
            );
        }
        Value::Object(map)
    }

    /// Parses a component from its JSON form.
    pub fn from_json(value: &Value) -> Result<Self, String> {
        match value {
            Value::String(text) => Ok(Self::plain(text.clone())),
            Value::Number(number) => Ok(Self::plain(number.to_string())),
            Value::Bool(value) => Ok(Self::plain(value.to_string())),
            Value::Array(values) => {
                let (first, rest) = values
                    .split_first()
                    .ok_or_else(|| "Unexpected empty array of components".to_string())?;
                let mut component = Self::from_json(first)?;
                for value in rest {
                    component.extra.push(Self::from_json(value)?);
                }
                Ok(component)
            }
            Value::Object(map) => Self::from_json_object(map),
            Value::Null => Err("Don't know how to turn null into a component".into()),
        }
    }

    fn from_json_object(map: &Map<String, Value>) -> Result<Self, String> {
        let content = if let Some(text) = map.get("text") {
            match text {
                Value::String(text) => Content::Text(Cow::Owned(text.clone())),
                other => Content::Text(Cow::Owned(other.to_string())),
            }
        } else if let Some(Value::String(key)) = map.get("translate") {
            let args = match map.get("with") {
                Some(Value::Array(values)) => values
                    .iter()
                    .map(Self::from_json)
                    .collect::<Result<Vec<_>, _>>()?,
                Some(_) => return Err("Expected 'with' to be an array".into()),
                None => Vec::new(),
            };
            Content::Translate {
                key: Cow::Owned(key.clone()),
                args,
            }
        } else {
            return Err("Don't know how to turn an object without 'text' or 'translate' into a component".into());
        };

        let color = match map.get("color") {
            Some(Value::String(name)) => Some(
                NamedColor::from_name(name).ok_or_else(|| format!("Unknown color '{name}'"))?,
            ),
            Some(_) => return Err("Expected 'color' to be a string".into()),
            None => None,
        };

        let extra = match map.get("extra") {
            Some(Value::Array(values)) => values
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err("Expected 'extra' to be an array".into()),
            None => Vec::new(),
        };

        Ok(Self {
            content,
            color,
            extra,
        })
    }
}

/// Substitutes `%s`, `%n$s` and `%%` in a translation format.
fn format_translation(format: &str, args: &[TextComponent], out: &mut String) {
    let mut next_arg = 0;
    let mut chars = format.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().map(|&(_, c)| c) {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s') => {
                chars.next();
                if let Some(arg) = args.get(next_arg) {
                    arg.write_plain(out);
                }
                next_arg += 1;
            }
            Some(d) if d.is_ascii_digit() => {
                let mut index = 0usize;
                while let Some(&(_, d)) = chars.peek() {
                    let Some(digit) = d.to_digit(10) else {
                        break;
                    };
                    index = index * 10 + digit as usize;
                    chars.next();
                }
                // Positional form is `%<n>$s`.
                if chars.next_if(|&(_, c)| c == '$').is_some()
                    && chars.next_if(|&(_, c)| c == 's').is_some()
                {
                    if let Some(arg) = index.checked_sub(1).and_then(|i| args.get(i)) {
                        arg.write_plain(out);
                    }
                } else {
                    out.push('%');
                    out.push_str(&index.to_string());
                }
            }
            _ => out.push('%'),
        }
    }
}

impl Display for TextComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain())
    }
}

impl Serialize for TextComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<String> for TextComponent {
    fn from(value: String) -> Self {
        Self::plain(value)
    }
}

impl From<&str> for TextComponent {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

impl From<i32> for TextComponent {
    fn from(value: i32) -> Self {
        Self::plain(value.to_string())
    }
}

impl From<usize> for TextComponent {
    fn from(value: usize) -> Self {
        Self::plain(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn translation_substitutes_sequential_and_positional_arguments() {
        let text = TextComponent::translate(
            "commands.advancement.criterionNotFound",
            [TextComponent::plain("story/root"), TextComponent::plain("crafting")],
        );
        assert_eq!(
            text.to_plain(),
            "The advancement story/root does not contain the criterion 'crafting'"
        );

        let text = TextComponent::translate(
            "commands.kill.success.single",
            [TextComponent::plain("Steve")],
        );
        assert_eq!(text.to_plain(), "Killed Steve");
    }

    #[test]
    fn unknown_keys_render_as_the_key() {
        let text = TextComponent::const_translate("not.a.real.key");
        assert_eq!(text.to_plain(), "not.a.real.key");
    }

    #[test]
    fn json_accepts_strings_arrays_and_objects() {
        let text = TextComponent::from_json(&json!(["Hello ", {"text": "world", "color": "red"}]))
            .expect("valid component");
        assert_eq!(text.to_plain(), "Hello world");
        assert_eq!(text.extra[0].color, Some(NamedColor::Red));

        assert!(TextComponent::from_json(&json!([])).is_err());
        assert!(TextComponent::from_json(&json!({"color": "red"})).is_err());
        assert!(TextComponent::from_json(&json!({"text": "x", "color": "nope"})).is_err());
    }

    #[test]
    fn json_round_trips_translations() {
        let text = TextComponent::translate("chat.type.announcement", [
            TextComponent::plain("Server"),
            TextComponent::plain("hi"),
        ])
        .color(NamedColor::Gold);
        let parsed = TextComponent::from_json(&text.to_json()).expect("valid component");
        assert_eq!(parsed.to_plain(), "[Server] hi");
        assert_eq!(parsed.color, Some(NamedColor::Gold));
    }

    #[test]
    fn join_separates_with_commas() {
        let joined = TextComponent::join(["a", "b", "c"].map(TextComponent::plain));
        assert_eq!(joined.to_plain(), "a, b, c");
    }
}
