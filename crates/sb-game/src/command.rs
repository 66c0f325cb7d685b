//! Command parsing for player input.

use strsim::jaro_winkler;

/// Minimum similarity for suggesting a command (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the command list.
    Help,
    /// Quit the game.
    Quit,
    /// Show the party.
    Status,
    /// Describe the current location.
    Look,
    /// Show the current event's prompt.
    Event,
    /// Resolve the current event.
    Execute,
}

impl Command {
    /// Every command, in help order.
    pub const ALL: [Command; 6] = [
        Self::Help,
        Self::Quit,
        Self::Status,
        Self::Look,
        Self::Event,
        Self::Execute,
    ];

    /// The word that invokes this command.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Status => "status",
            Self::Look => "look",
            Self::Event => "event",
            Self::Execute => "execute",
        }
    }

    /// One-line description for the help text.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Help => "Show available commands",
            Self::Quit => "Quit the game",
            Self::Status => "Show party status",
            Self::Look => "Look around the current location",
            Self::Event => "Show details of the current event",
            Self::Execute => "Execute the current event",
        }
    }
}

/// Parse player input. Matching ignores case and surrounding whitespace.
///
/// Returns `None` for anything that is not exactly one of the commands.
pub fn parse_command(input: &str) -> Option<Command> {
    let word = input.trim().to_lowercase();
    Command::ALL.into_iter().find(|c| c.keyword() == word)
}

/// The known command closest to a mistyped one, if any is close enough.
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let word = input.trim().to_lowercase();
    if word.is_empty() {
        return None;
    }
    Command::ALL
        .into_iter()
        .map(|c| (c.keyword(), jaro_winkler(&word, c.keyword())))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(keyword, _)| keyword)
}
