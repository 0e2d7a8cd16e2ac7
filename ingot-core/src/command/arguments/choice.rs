//! A fixed set of named values.
use crate::command::arguments::CommandArgument;
use crate::command::context::CommandContext;

/// Matches one token against a list of names.
pub struct ChoiceArgument<T: 'static> {
    choices: &'static [(&'static str, T)],
}

impl<T> ChoiceArgument<T> {
    /// Accepts any of the given names.
    #[must_use]
    pub const fn new(choices: &'static [(&'static str, T)]) -> Self {
        Self { choices }
    }
}

impl<T: Copy + Send + Sync> CommandArgument for ChoiceArgument<T> {
    type Output = T;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        let token = *arg.first()?;
        self.choices
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| (&arg[1..], *value))
    }

    fn display(&self, name: &str) -> String {
        let names: Vec<&str> = self.choices.iter().map(|(name, _)| *name).collect();
        if names.len() <= 4 {
            format!("({})", names.join("|"))
        } else {
            format!("<{name}>")
        }
    }
}
