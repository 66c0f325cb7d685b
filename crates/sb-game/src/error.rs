//! Error types for the game session.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing or loading a scenario.
#[derive(Debug, Error)]
pub enum GameError {
    /// Input did not match any command.
    #[error("Unknown command '{input}'. Type 'help' to see available commands.{}", suggestion_text(.suggestion))]
    UnknownCommand {
        /// What the player typed, trimmed.
        input: String,
        /// The closest known command, if any is close.
        suggestion: Option<&'static str>,
    },

    /// There is no event waiting to be executed.
    #[error("There is no event to execute.")]
    NoCurrentEvent,

    /// The party has not arrived anywhere yet.
    #[error("You are nowhere at all.")]
    NoLocation,

    /// The session already ended.
    #[error("The game is over.")]
    GameOver,

    /// Reading a scenario file failed.
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// A scenario file is not valid JSON.
    #[error("failed to parse scenario: {0}")]
    Json(#[from] serde_json::Error),

    /// Core model error.
    #[error("{0}")]
    Core(#[from] sb_core::CoreError),
}

fn suggestion_text(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(cmd) => format!(" Did you mean '{cmd}'?"),
        None => String::new(),
    }
}
