//! String arguments.
use crate::command::arguments::{CommandArgument, is_unquoted_char, take_quotable};
use crate::command::context::CommandContext;

/// How much input a string argument consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringArgument {
    /// A single unquoted word.
    Word,
    /// A word or a quoted phrase.
    Quotable,
    /// Everything that is left.
    Greedy,
}

impl CommandArgument for StringArgument {
    type Output = String;

    fn parse<'a>(
        &self,
        arg: &'a [&'a str],
        _context: &mut CommandContext,
    ) -> Option<(&'a [&'a str], Self::Output)> {
        match self {
            Self::Word => {
                let word = arg.first()?;
                word.chars()
                    .all(is_unquoted_char)
                    .then(|| (&arg[1..], (*word).to_string()))
            }
            Self::Quotable => {
                let (text, consumed) = take_quotable(arg)?;
                Some((&arg[consumed..], text))
            }
            Self::Greedy => (!arg.is_empty()).then(|| (&arg[arg.len()..], arg.join(" "))),
        }
    }
}
