//! A JSON text component argument.
use ingot_utils::text::TextComponent;

use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;

/// Parses the shortest run of tokens that forms valid JSON text.
pub struct TextComponentArgument;

impl CommandArgument for TextComponentArgument {
    type Output = TextComponent;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        for end in 1..=arg.len() {
            let text = arg[..end].join(" ");
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
                let component = TextComponent::from_json(&value).ok()?;
                return Some((&arg[end..], component));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestServer;

    #[test]
    fn parses_json_across_tokens() {
        let server = TestServer::new();
        let mut context = server.console_context();

        let (rest, text) = TextComponentArgument
            .parse(&["{\"text\":", "\"hello", "world\"}", "extra"], &mut context)
            .expect("valid json");
        assert_eq!(text.to_plain(), "hello world");
        assert_eq!(rest, &["extra"]);

        let (_, text) = TextComponentArgument
            .parse(&["\"plain\""], &mut context)
            .expect("valid json string");
        assert_eq!(text.to_plain(), "plain");

        assert!(
            TextComponentArgument
                .parse(&["{\"text\":"], &mut context)
                .is_none()
        );
    }
}
