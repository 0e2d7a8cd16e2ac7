//! This module contains the command building structs.
pub mod advancement;
pub mod attribute;
pub mod bossbar;
pub mod damage;
pub mod difficulty;
pub mod execute;
pub mod fill;
pub mod gamemode;
pub mod help;
pub mod kill;
pub mod say;
pub mod scoreboard;
pub mod setblock;
pub mod setworldspawn;
pub mod spreadplayers;
pub mod summon;
pub mod tag;
pub mod team;
pub mod teleport;
pub mod tellraw;
pub mod time;
pub mod trigger;
pub mod weather;
pub mod worldborder;

use std::marker::PhantomData;

use crate::command::arguments::CommandArgument;
use crate::command::arguments::literal::LiteralArgument;
use crate::command::context::CommandContext;
use crate::command::error::CommandError;

/// The result of a command: an integer on success.
pub type CommandResult = Result<i32, CommandError>;

/// A trait that defines the behavior of a type safe command executor.
pub trait CommandExecutor<S> {
    /// Executes the command with the given type safe arguments.
    fn execute(&self, args: S, context: &mut CommandContext) -> CommandResult;
}

/// A trait for nodes that derive new contexts the rest of the command runs with.
pub trait CommandRedirectExecutor<S> {
    /// Returns the contexts to continue with; an empty list stops execution.
    fn redirect(
        &self,
        args: S,
        context: &CommandContext,
    ) -> Result<Vec<CommandContext>, CommandError>;

    /// Whether the redirect forks, making the result the number of successful branches.
    fn forks(&self) -> bool {
        false
    }
}

/// Where the remaining input of a redirected command is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandRedirectTarget {
    /// Back into the command being run.
    Current,
    /// Into the dispatcher, as a new command.
    All,
}

/// The builder struct that holds command handler data and executor.
pub struct CommandHandlerBuilder {
    names: &'static [&'static str],
    description: &'static str,
    permission: &'static str,
}

/// The struct that holds command handler data and executor.
pub struct CommandHandler<E> {
    names: &'static [&'static str],
    description: &'static str,
    permission: &'static str,
    executor: E,
}

/// Defines a command handler that can be dynamically dispatched.
pub trait CommandHandlerDyn: Send + Sync {
    /// Returns the names of the command.
    fn names(&self) -> &'static [&'static str];

    /// Returns the description of the command.
    fn description(&self) -> &'static str;

    /// Returns the permission of the command.
    fn permission(&self) -> &'static str;

    /// Parses and runs the arguments; `None` means they matched no branch.
    fn handle(&self, command_args: &[&str], context: &mut CommandContext) -> Option<CommandResult>;

    /// Every syntax the command accepts.
    fn usage(&self) -> Vec<String>;
}

impl CommandHandlerBuilder {
    /// Creates a new command handler builder.
    #[must_use]
    pub fn new(
        names: &'static [&'static str],
        description: &'static str,
        permission: &'static str,
    ) -> CommandHandlerBuilder {
        CommandHandlerBuilder {
            names,
            description,
            permission,
        }
    }

    /// Chains a command executor to this command handler.
    #[must_use]
    pub fn then<E>(self, executor: E) -> CommandHandler<E>
    where
        E: CommandParserExecutor<()>,
    {
        CommandHandler {
            names: self.names,
            description: self.description,
            permission: self.permission,
            executor,
        }
    }

    /// Executes the command executor if the command was ran without arguments.
    pub fn executes<E>(self, executor: E) -> CommandHandler<CommandParserLeafExecutor<(), E>>
    where
        E: CommandExecutor<()>,
    {
        CommandHandler {
            names: self.names,
            description: self.description,
            permission: self.permission,
            executor: CommandParserLeafExecutor {
                executor,
                _source: PhantomData,
            },
        }
    }
}

impl<E1> CommandHandler<E1> {
    /// Chains a command executor that parses arguments.
    #[must_use]
    pub fn then<E2>(self, executor: E2) -> CommandHandler<CommandParserSplitExecutor<(), E1, E2>>
    where
        E2: CommandParserExecutor<()>,
    {
        CommandHandler {
            names: self.names,
            description: self.description,
            permission: self.permission,
            executor: CommandParserSplitExecutor {
                first_executor: self.executor,
                second_executor: executor,
                _source: PhantomData,
            },
        }
    }

    /// Executes the command executor if the command was ran without arguments.
    pub fn executes<E2>(self, executor: E2) -> CommandHandler<SplitLeafExecutor<(), E1, E2>>
    where
        E2: CommandExecutor<()>,
    {
        CommandHandler {
            names: self.names,
            description: self.description,
            permission: self.permission,
            executor: CommandParserSplitExecutor {
                first_executor: self.executor,
                second_executor: CommandParserLeafExecutor {
                    executor,
                    _source: PhantomData,
                },
                _source: PhantomData,
            },
        }
    }
}

impl<E> CommandHandlerDyn for CommandHandler<E>
where
    E: CommandParserExecutor<()> + Send + Sync,
{
    fn names(&self) -> &'static [&'static str] {
        self.names
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn permission(&self) -> &'static str {
        self.permission
    }

    fn handle(&self, command_args: &[&str], context: &mut CommandContext) -> Option<CommandResult> {
        self.executor.execute(command_args, (), context)
    }

    fn usage(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.executor.usage(self.names[0], &mut out);
        out
    }
}

/// A trait that defines the behavior of a type safe command executor.
pub trait CommandParserExecutor<S> {
    /// Executes the command with the given unparsed and parsed arguments.
    fn execute(
        &self,
        args: &[&str],
        parsed: S,
        context: &mut CommandContext,
    ) -> Option<CommandResult>;

    /// Collects the syntax of every branch below this node.
    fn usage(&self, path: &str, out: &mut Vec<String>);
}

impl<S, A, E> CommandParserExecutor<S> for CommandParserArgumentExecutor<S, A, E>
where
    E: CommandParserExecutor<(S, A)>,
{
    fn execute(
        &self,
        args: &[&str],
        parsed: S,
        context: &mut CommandContext,
    ) -> Option<CommandResult> {
        let (args, arg) = self.argument.parse(args, context)?;
        self.executor.execute(args, (parsed, arg), context)
    }

    fn usage(&self, path: &str, out: &mut Vec<String>) {
        let path = format!("{path} {}", self.argument.display(self.name));
        self.executor.usage(&path, out);
    }
}

impl<S, E1, E2> CommandParserExecutor<S> for CommandParserSplitExecutor<S, E1, E2>
where
    S: Clone,
    E1: CommandParserExecutor<S>,
    E2: CommandParserExecutor<S>,
{
    fn execute(
        &self,
        args: &[&str],
        parsed: S,
        context: &mut CommandContext,
    ) -> Option<CommandResult> {
        let result = self.first_executor.execute(args, parsed.clone(), context);
        if result.is_some() {
            return result;
        }

        self.second_executor.execute(args, parsed, context)
    }

    fn usage(&self, path: &str, out: &mut Vec<String>) {
        self.first_executor.usage(path, out);
        self.second_executor.usage(path, out);
    }
}

impl<S, E> CommandParserExecutor<S> for CommandParserLeafExecutor<S, E>
where
    E: CommandExecutor<S>,
{
    fn execute(
        &self,
        args: &[&str],
        parsed: S,
        context: &mut CommandContext,
    ) -> Option<CommandResult> {
        args.is_empty()
            .then(|| self.executor.execute(parsed, context))
    }

    fn usage(&self, path: &str, out: &mut Vec<String>) {
        out.push(path.to_string());
    }
}

impl<S, E> CommandParserExecutor<S> for CommandParserRedirectExecutor<S, E>
where
    E: CommandRedirectExecutor<S>,
{
    fn execute(
        &self,
        args: &[&str],
        parsed: S,
        context: &mut CommandContext,
    ) -> Option<CommandResult> {
        if args.is_empty() {
            return None;
        }

        let contexts = match self.executor.redirect(parsed, context) {
            Ok(contexts) => contexts,
            Err(error) => return Some(Err(error)),
        };
        let forked = context.forked || self.executor.forks();
        let server = context.server.clone();
        let dispatcher = &server.command_dispatcher;

        let mut result = 0i32;
        let mut successes = 0i32;
        for mut branch in contexts {
            branch.forked = forked;
            let outcome = match self.target {
                CommandRedirectTarget::Current => {
                    dispatcher.dispatch_to(branch.command, args, &mut branch)
                }
                CommandRedirectTarget::All => {
                    let stores = std::mem::take(&mut branch.result_stores);
                    let outcome = dispatcher.dispatch(args, &mut branch);
                    branch.result_stores = stores;
                    match &outcome {
                        Some(Ok(value)) => branch.store_result(true, *value),
                        Some(Err(_)) => branch.store_result(false, 0),
                        None => {}
                    }
                    outcome
                }
            };

            match outcome? {
                Ok(value) => {
                    successes += 1;
                    result = result.wrapping_add(value);
                }
                Err(error) if !forked => return Some(Err(error)),
                Err(error) => {
                    log::debug!("Forked command branch failed: {error}");
                }
            }
        }

        Some(Ok(if forked { successes } else { result }))
    }

    fn usage(&self, path: &str, out: &mut Vec<String>) {
        match self.target {
            CommandRedirectTarget::Current => {
                let root = path.split(' ').next().unwrap_or(path);
                out.push(format!("{path} -> {root}"));
            }
            CommandRedirectTarget::All => out.push(format!("{path} ...")),
        }
    }
}

/// Tree node that parses a single argument and provides it to the next executor.
pub struct CommandParserArgumentExecutor<S, A, E> {
    name: &'static str,
    argument: Box<dyn CommandArgument<Output = A>>,
    executor: E,
    _source: PhantomData<fn() -> S>,
}

/// Tree node that passes execution to the second executor if the first one fails.
pub struct CommandParserSplitExecutor<S, E1, E2> {
    first_executor: E1,
    second_executor: E2,
    _source: PhantomData<fn() -> S>,
}

/// Tree node that executes a command with the given parsed arguments.
pub struct CommandParserLeafExecutor<S, E> {
    executor: E,
    _source: PhantomData<fn() -> S>,
}

/// Tree node that derives new contexts and dispatches the remaining input with each.
pub struct CommandParserRedirectExecutor<S, E> {
    target: CommandRedirectTarget,
    executor: E,
    _source: PhantomData<fn() -> S>,
}

/// A builder struct for creating command argument executors.
pub struct CommandParserArgumentBuilder<S, A> {
    name: &'static str,
    argument: Box<dyn CommandArgument<Output = A>>,
    _source: PhantomData<fn() -> S>,
}

/// Creates a new command argument builder.
pub fn argument<S, A>(
    name: &'static str,
    argument: impl CommandArgument<Output = A> + 'static,
) -> CommandParserArgumentBuilder<S, A> {
    CommandParserArgumentBuilder {
        name,
        argument: Box::new(argument),
        _source: PhantomData,
    }
}

/// Creates a new literal command argument builder.
#[must_use]
pub fn literal<S>(expected: &'static str) -> CommandParserArgumentBuilder<S, ()> {
    CommandParserArgumentBuilder {
        name: expected,
        argument: Box::new(LiteralArgument { expected }),
        _source: PhantomData,
    }
}

/// Creates a redirect node.
pub fn redirect<S, E>(target: CommandRedirectTarget, executor: E) -> CommandParserRedirectExecutor<S, E>
where
    E: CommandRedirectExecutor<S>,
{
    CommandParserRedirectExecutor {
        target,
        executor,
        _source: PhantomData,
    }
}

impl<S, A> CommandParserArgumentBuilder<S, A> {
    /// Executes the command argument executor after the argument is parsed.
    pub fn then<E>(self, executor: E) -> CommandParserArgumentExecutor<S, A, E>
    where
        E: CommandParserExecutor<(S, A)>,
    {
        CommandParserArgumentExecutor {
            name: self.name,
            argument: self.argument,
            executor,
            _source: PhantomData,
        }
    }

    /// Executes the command executor after the argument is parsed.
    pub fn executes<E>(
        self,
        executor: E,
    ) -> CommandParserArgumentExecutor<S, A, CommandParserLeafExecutor<(S, A), E>>
    where
        E: CommandExecutor<(S, A)>,
    {
        CommandParserArgumentExecutor {
            name: self.name,
            argument: self.argument,
            executor: CommandParserLeafExecutor {
                executor,
                _source: PhantomData,
            },
            _source: PhantomData,
        }
    }
}

impl<S, A, E1> CommandParserArgumentExecutor<S, A, E1> {
    /// Executes the command argument executor after the argument is parsed.
    pub fn then<E2>(
        self,
        executor: E2,
    ) -> CommandParserArgumentExecutor<S, A, CommandParserSplitExecutor<(S, A), E1, E2>>
    where
        E2: CommandParserExecutor<(S, A)>,
    {
        CommandParserArgumentExecutor {
            name: self.name,
            argument: self.argument,
            executor: CommandParserSplitExecutor {
                first_executor: self.executor,
                second_executor: executor,
                _source: PhantomData,
            },
            _source: PhantomData,
        }
    }

    /// Executes the command executor after the argument is parsed.
    pub fn executes<E2>(
        self,
        executor: E2,
    ) -> CommandParserArgumentExecutor<S, A, SplitLeafExecutor<(S, A), E1, E2>>
    where
        E2: CommandExecutor<(S, A)>,
    {
        CommandParserArgumentExecutor {
            name: self.name,
            argument: self.argument,
            executor: CommandParserSplitExecutor {
                first_executor: self.executor,
                second_executor: CommandParserLeafExecutor {
                    executor,
                    _source: PhantomData,
                },
                _source: PhantomData,
            },
            _source: PhantomData,
        }
    }
}

type SplitLeafExecutor<S, E1, E2> =
    CommandParserSplitExecutor<S, E1, CommandParserLeafExecutor<S, E2>>;
