//! This module contains types and utilities for parsing command arguments.
pub mod anchor;
pub mod attribute;
pub mod block_state;
pub mod boolean;
pub mod choice;
pub mod color;
pub mod coordinates;
pub mod difficulty;
pub mod dimension;
pub mod display_slot;
pub mod entity;
pub mod entity_selector;
pub mod entity_type;
pub mod gamemode;
pub mod identifier;
pub mod literal;
pub mod numbers;
pub mod objective;
pub mod operation;
pub mod range;
pub mod score_holder;
pub mod string;
pub mod team;
pub mod text_component;
pub mod time;

use crate::command::context::CommandContext;

/// A trait that defines how an argument is parsed.
pub trait CommandArgument: Send + Sync {
    /// The type of the parsed argument.
    type Output;

    /// Parses the argument from the start of `arg`.
    ///
    /// Returns the remaining unparsed tokens and the parsed value, or `None`
    /// if the tokens don't match this argument.
    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)>;

    /// How the argument is shown in usage text.
    fn display(&self, name: &str) -> String {
        format!("<{name}>")
    }
}

/// Joins tokens until every `[`/`{` opened in them is closed again.
///
/// Returns the joined text and the number of tokens it spans.
pub(crate) fn take_balanced(args: &[&str]) -> Option<(String, usize)> {
    let mut depth = 0i32;
    let mut in_quotes = false;
    let mut joined = String::new();

    for (i, token) in args.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(token);

        let mut escaped = false;
        for c in token.chars() {
            match c {
                _ if escaped => escaped = false,
                '\\' if in_quotes => escaped = true,
                '"' => in_quotes = !in_quotes,
                '[' | '{' if !in_quotes => depth += 1,
                ']' | '}' if !in_quotes => depth -= 1,
                _ => {}
            }
        }
        if depth < 0 {
            return None;
        }
        if depth == 0 && !in_quotes {
            return Some((joined, i + 1));
        }
    }
    None
}

/// Reads a possibly quoted string spanning one or more tokens.
///
/// Returns the unescaped string and the number of tokens it spans.
pub(crate) fn take_quotable(args: &[&str]) -> Option<(String, usize)> {
    let first = args.first()?;
    let Some(rest) = first.strip_prefix('"') else {
        return first
            .chars()
            .all(is_unquoted_char)
            .then(|| ((*first).to_string(), 1));
    };

    let mut raw = rest.to_string();
    let mut consumed = 1;
    loop {
        if let Some(text) = closing_quote(&raw) {
            return Some((text, consumed));
        }
        raw.push(' ');
        raw.push_str(args.get(consumed)?);
        consumed += 1;
    }
}

/// If `raw` ends with an unescaped closing quote, returns the unescaped text before it.
fn closing_quote(raw: &str) -> Option<String> {
    let mut text = String::new();
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => text.push(chars.next()?),
            '"' => return chars.as_str().is_empty().then_some(text),
            c => text.push(c),
        }
    }
    None
}

/// Characters allowed in an unquoted string.
pub(crate) const fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_tokens_are_joined() {
        assert_eq!(
            take_balanced(&["@e[type=zombie,", "tag=a]", "rest"]),
            Some(("@e[type=zombie, tag=a]".to_string(), 2))
        );
        assert_eq!(
            take_balanced(&["{\"text\":\"a", "]\"}"]),
            Some(("{\"text\":\"a ]\"}".to_string(), 2))
        );
        assert_eq!(take_balanced(&["@e[type=zombie"]), None);
    }

    #[test]
    fn quoted_strings_span_tokens() {
        assert_eq!(
            take_quotable(&["\"hello", "world\"", "x"]),
            Some(("hello world".to_string(), 2))
        );
        assert_eq!(
            take_quotable(&["\"say", "\\\"hi\\\"\""]),
            Some(("say \"hi\"".to_string(), 2))
        );
        assert_eq!(
            take_quotable(&["\"a", "   b\""]),
            Some(("a    b".to_string(), 2))
        );
        assert_eq!(take_quotable(&["plain"]), Some(("plain".to_string(), 1)));
        assert_eq!(take_quotable(&["\"open"]), None);
        assert_eq!(take_quotable(&["bad:char"]), None);
    }
}
