//! Error types for world loading and the process exit statuses they map to

use crate::game_of_life::{ALIVE_GLYPH, DEAD_GLYPH};
use std::collections::TryReserveError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Failure while building the generation-0 grid from a world file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not open \"{}\"", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not finish reading \"{}\"", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Invalid file format in \"{}\": {issue}\n\
         The file must contain {size} lines with {size} characters in each row.\n\
         The characters can only be '{}' for living cells OR '{}' for dead cells.",
        .path.display(),
        ALIVE_GLYPH,
        DEAD_GLYPH
    )]
    Format {
        path: PathBuf,
        size: usize,
        issue: FormatIssue,
    },

    #[error("Not enough memory to load the world")]
    OutOfMemory(#[from] TryReserveError),
}

/// What exactly was wrong with a malformed world file (1-based positions)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIssue {
    #[error("expected {expected} lines, found only {found}")]
    MissingLine { expected: usize, found: usize },

    #[error("line {line} has {length} characters, expected at least {expected}")]
    ShortLine {
        line: usize,
        length: usize,
        expected: usize,
    },

    #[error("invalid character '{}' at line {line}, column {column}", .found.escape_ascii())]
    InvalidGlyph { line: usize, column: usize, found: u8 },
}

/// Process exit statuses of the command-line program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    InvalidArgs,
    InvalidFormat,
    FailedToOpen,
    FailedToClose,
    NotEnoughMemory,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::InvalidArgs => 2,
            ExitStatus::InvalidFormat => 3,
            ExitStatus::FailedToOpen => 4,
            ExitStatus::FailedToClose => 5,
            ExitStatus::NotEnoughMemory => 6,
        }
    }

    /// Classify a failed run. Anything that is not a load failure happened
    /// before a world was requested (configuration, arguments).
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LoadError>() {
            Some(load_error) => load_error.into(),
            None => ExitStatus::InvalidArgs,
        }
    }
}

impl From<&LoadError> for ExitStatus {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::SourceUnavailable { .. } => ExitStatus::FailedToOpen,
            LoadError::SourceUnreadable { .. } => ExitStatus::FailedToClose,
            LoadError::Format { .. } => ExitStatus::InvalidFormat,
            LoadError::OutOfMemory(_) => ExitStatus::NotEnoughMemory,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
