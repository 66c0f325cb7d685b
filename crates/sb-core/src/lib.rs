//! Core model for Sagebrush, a Wild West text adventure.
//!
//! Provides attributes and character archetypes, the party roster, narrative
//! events with their resolution rules, location event queues, and the
//! [`Selector`] capability that decides who takes on each event.

pub mod attribute;
pub mod character;
pub mod error;
pub mod event;
pub mod location;
pub mod party;
pub mod selector;

pub use attribute::{Attribute, AttributeKind};
pub use character::{Archetype, Character};
pub use error::{CoreError, CoreResult};
pub use event::{Event, EventDefinition, EventStatus, Resolution, resolve_status};
pub use location::Location;
pub use party::Party;
pub use selector::{RandomSelector, ScriptedSelector, Selector};
