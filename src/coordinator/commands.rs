//! Named commands the host can dispatch, and the built-in ones.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use super::App;
use crate::types::ToggleError;

pub const COMMENT_TOGGLE: &str = "comment-toggle";

pub type CommandFn = fn(&mut App, &[String]) -> Result<(), CommandError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error(transparent)]
    Toggle(#[from] ToggleError),
}

#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandFn>,
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in command installed.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(COMMENT_TOGGLE, comment_toggle);
        registry
    }

    pub fn register(&mut self, name: &'static str, command: CommandFn) {
        if self.commands.insert(name, command).is_some() {
            tracing::debug!(command = name, "replaced existing command");
        }
    }

    pub fn get(&self, name: &str) -> Option<CommandFn> {
        self.commands.get(name).copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// `comment-toggle`: takes no arguments, toggles the active frame's cursor
/// row or selection.
pub fn comment_toggle(app: &mut App, args: &[String]) -> Result<(), CommandError> {
    if !args.is_empty() {
        return Err(ToggleError::MalformedArguments(args.len()).into());
    }
    let outcome = app.toggle_comments()?;
    tracing::info!(
        rows = outcome.changes.len(),
        commented = outcome.commented_count(),
        uncommented = outcome.uncommented_count(),
        "comment-toggle"
    );
    Ok(())
}
