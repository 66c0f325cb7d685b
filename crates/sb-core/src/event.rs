//! Narrative events and how they resolve.
//!
//! An event asks for a primary and a secondary attribute kind. When it is
//! executed, the selector picks a party member and one of their attribute
//! kinds:
//! - matching **both** requirements is a pass (only possible when primary
//!   and secondary name the same kind)
//! - matching **one** is a partial pass
//! - matching **neither** is a failure
//!
//! The attribute's value does not take part in the check.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::attribute::AttributeKind;
use crate::error::{CoreError, CoreResult};
use crate::party::Party;
use crate::selector::Selector;

/// Prompt used when an event definition has none.
pub const DEFAULT_PROMPT: &str = "A dragon appears, what will you do?";
/// Pass message used when an event definition has none.
pub const DEFAULT_PASS: &str = "You passed.";
/// Fail message used when an event definition has none.
pub const DEFAULT_FAIL: &str = "You failed.";
/// Partial pass message used when an event definition has none.
pub const DEFAULT_PARTIAL_PASS: &str = "You partially passed.";

/// Where an event stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventStatus {
    /// Not yet resolved.
    #[default]
    Unknown,
    /// Both requirements met.
    Pass,
    /// Neither requirement met.
    Fail,
    /// One requirement met.
    PartialPass,
}

impl EventStatus {
    /// Returns true once the event has an outcome.
    pub fn is_terminal(self) -> bool {
        self != Self::Unknown
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
            Self::PartialPass => write!(f, "Partial Pass"),
        }
    }
}

/// Decide the outcome for a chosen kind against an event's requirements.
///
/// A missing requirement never matches.
pub fn resolve_status(
    primary: Option<AttributeKind>,
    secondary: Option<AttributeKind>,
    chosen: AttributeKind,
) -> EventStatus {
    let hits_primary = primary == Some(chosen);
    let hits_secondary = secondary == Some(chosen);
    match (hits_primary, hits_secondary) {
        (true, true) => EventStatus::Pass,
        (true, false) | (false, true) => EventStatus::PartialPass,
        (false, false) => EventStatus::Fail,
    }
}

/// An event record as it appears in scenario data.
///
/// Every key is optional; missing keys fall back to defaults when the
/// record is turned into an [`Event`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDefinition {
    /// Name of the primary attribute kind.
    pub primary_attribute: Option<String>,
    /// Name of the secondary attribute kind.
    pub secondary_attribute: Option<String>,
    /// What the player is asked.
    pub prompt_text: Option<String>,
    /// Shown on a pass.
    pub pass: Option<String>,
    /// Shown on a failure.
    pub fail: Option<String>,
    /// Shown on a partial pass.
    pub partial_pass: Option<String>,
}

/// What happened when an event was executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Who stepped up.
    pub character: String,
    /// Which attribute they leaned on.
    pub attribute: AttributeKind,
    /// That attribute's score, for display.
    pub value: u32,
    /// The outcome.
    pub status: EventStatus,
    /// The outcome message.
    pub message: String,
}

/// A resolvable narrative challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    primary: Option<AttributeKind>,
    secondary: Option<AttributeKind>,
    prompt: String,
    pass_message: String,
    fail_message: String,
    partial_pass_message: String,
    status: EventStatus,
}

impl Event {
    /// Create an event with the given requirements and messages.
    pub fn new(
        primary: AttributeKind,
        secondary: AttributeKind,
        prompt: impl Into<String>,
        pass_message: impl Into<String>,
        fail_message: impl Into<String>,
        partial_pass_message: impl Into<String>,
    ) -> Self {
        Self {
            primary: Some(primary),
            secondary: Some(secondary),
            prompt: prompt.into(),
            pass_message: pass_message.into(),
            fail_message: fail_message.into(),
            partial_pass_message: partial_pass_message.into(),
            status: EventStatus::Unknown,
        }
    }

    /// Build an event from a scenario record.
    ///
    /// Unrecognised attribute names are logged and treated as missing.
    pub fn from_definition(def: &EventDefinition) -> Self {
        Self {
            primary: parse_requirement(def.primary_attribute.as_deref()),
            secondary: parse_requirement(def.secondary_attribute.as_deref()),
            prompt: text_or(def.prompt_text.as_deref(), DEFAULT_PROMPT),
            pass_message: text_or(def.pass.as_deref(), DEFAULT_PASS),
            fail_message: text_or(def.fail.as_deref(), DEFAULT_FAIL),
            partial_pass_message: text_or(def.partial_pass.as_deref(), DEFAULT_PARTIAL_PASS),
            status: EventStatus::Unknown,
        }
    }

    /// The primary requirement.
    pub fn primary(&self) -> Option<AttributeKind> {
        self.primary
    }

    /// The secondary requirement.
    pub fn secondary(&self) -> Option<AttributeKind> {
        self.secondary
    }

    /// The prompt shown to the player.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The current status.
    pub fn status(&self) -> EventStatus {
        self.status
    }

    /// The message that goes with an outcome. `Unknown` has none.
    pub fn message_for(&self, status: EventStatus) -> Option<&str> {
        match status {
            EventStatus::Unknown => None,
            EventStatus::Pass => Some(&self.pass_message),
            EventStatus::Fail => Some(&self.fail_message),
            EventStatus::PartialPass => Some(&self.partial_pass_message),
        }
    }

    /// Resolve the event against a chosen attribute kind.
    ///
    /// Sets the status and returns the outcome message. An event that
    /// already has an outcome is left alone and reported as
    /// [`CoreError::AlreadyResolved`].
    pub fn resolve(&mut self, chosen: AttributeKind) -> CoreResult<&str> {
        if self.status.is_terminal() {
            return Err(CoreError::AlreadyResolved);
        }
        let status = resolve_status(self.primary, self.secondary, chosen);
        debug!(%chosen, %status, "event resolved");
        self.status = status;
        Ok(self.message_for(status).unwrap_or_default())
    }

    /// Let the selector pick a member and attribute, then resolve.
    ///
    /// An empty party is reported as [`CoreError::NoEligibleMember`] and
    /// the status stays [`EventStatus::Unknown`].
    pub fn execute(
        &mut self,
        party: &Party,
        selector: &mut dyn Selector,
    ) -> CoreResult<Resolution> {
        if self.status.is_terminal() {
            return Err(CoreError::AlreadyResolved);
        }
        let character = selector
            .select_member(party)
            .ok_or(CoreError::NoEligibleMember)?;
        let attribute = selector.select_attribute(character);
        debug!(character = character.name(), %attribute, "party member selected");

        let message = self.resolve(attribute)?.to_string();
        Ok(Resolution {
            character: character.name().to_string(),
            attribute,
            value: character.attribute(attribute).value(),
            status: self.status,
            message,
        })
    }
}

fn parse_requirement(name: Option<&str>) -> Option<AttributeKind> {
    let name = name?;
    match AttributeKind::parse(name) {
        Ok(kind) => Some(kind),
        Err(e) => {
            warn!(error = %e, "event requirement will never match");
            None
        }
    }
}

fn text_or(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).to_string()
}
