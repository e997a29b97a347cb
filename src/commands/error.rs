// ABOUTME: Command-layer error type with SNAFU context selectors.
// ABOUTME: Wraps config and dispatch failures and classifies them for callers.

use snafu::Snafu;

use crate::dispatch::DispatchError;

/// Failure of a CLI command.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CommandError {
    #[snafu(display("configuration error: {source}"))]
    Config { source: crate::error::Error },

    #[snafu(display("{operation} failed: {source}"))]
    Api {
        operation: &'static str,
        source: DispatchError,
    },

    #[snafu(display("stats failed for {failed} of {total} container(s)"))]
    PartialStats { failed: usize, total: usize },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandErrorKind {
    /// Local configuration could not be loaded or was invalid.
    Config,
    /// The backend could not be reached or the exchange broke off.
    Transport,
    /// The backend answered with an error.
    Backend,
    /// The backend answered with something that was not understood.
    Protocol,
}

impl CommandError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> CommandErrorKind {
        match self {
            CommandError::Config { .. } => CommandErrorKind::Config,
            CommandError::Api { source, .. } => match source {
                DispatchError::InvalidRequest(_) => CommandErrorKind::Config,
                DispatchError::Connect { .. }
                | DispatchError::Http(_)
                | DispatchError::Timeout(_) => CommandErrorKind::Transport,
                DispatchError::Status { .. } | DispatchError::Backend { .. } => {
                    CommandErrorKind::Backend
                }
                DispatchError::MalformedResponse(_) | DispatchError::Decode(_) => {
                    CommandErrorKind::Protocol
                }
            },
            CommandError::PartialStats { .. } => CommandErrorKind::Backend,
        }
    }

    /// The underlying dispatch error, if this came from the backend exchange.
    pub fn dispatch_error(&self) -> Option<&DispatchError> {
        match self {
            CommandError::Api { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<crate::error::Error> for CommandError {
    fn from(source: crate::error::Error) -> Self {
        CommandError::Config { source }
    }
}
