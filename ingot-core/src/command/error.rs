//! Errors raised while parsing or executing commands.
use ingot_utils::text::TextComponent;
use ingot_utils::translations::Translation;

/// An error raised by a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// An argument was consumed, but the executor couldn't use it.
    #[error("argument {0:?} was consumed, but couldn't be parsed")]
    InvalidConsumption(Option<String>),
    /// A requirement that was expected to hold was not met.
    #[error("a requirement that was expected was not met")]
    InvalidRequirement,
    /// The sender isn't allowed to run the command.
    #[error("permission denied")]
    PermissionDenied,
    /// The command failed with a message for the sender.
    #[error("{}", .0.to_plain())]
    CommandFailed(Box<TextComponent>),
}

impl CommandError {
    /// A failure whose message is a translation with arguments.
    #[must_use]
    pub fn translated(
        translation: Translation,
        args: impl IntoIterator<Item = TextComponent>,
    ) -> Self {
        CommandError::CommandFailed(Box::new(translation.message(args)))
    }

    /// A failure whose message is a translation without arguments.
    #[must_use]
    pub fn msg(translation: Translation) -> Self {
        CommandError::CommandFailed(Box::new(translation.msg()))
    }
}

impl From<TextComponent> for CommandError {
    fn from(value: TextComponent) -> Self {
        CommandError::CommandFailed(Box::new(value))
    }
}
