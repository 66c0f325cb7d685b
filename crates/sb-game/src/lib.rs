//! Game session for Sagebrush.
//!
//! Parses player commands, drives the event loop across locations, and
//! loads scenarios either from the built-in frontier town or from JSON.

pub mod command;
pub mod config;
pub mod error;
pub mod scenario;
pub mod session;

pub use command::{Command, parse_command};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use scenario::{Scenario, ScenarioFile};
pub use session::GameSession;
