//! Attribute kinds and values.
//!
//! Every character carries one value for each of the eleven kinds. Events
//! name the kinds they call for; the value itself is only shown to the
//! player.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A capability dimension a character can be measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttributeKind {
    /// How much you can lift, how hard you punch.
    Strength,
    /// How quick and precise your limbs are.
    Dexterity,
    /// The body's natural armor.
    Constitution,
    /// How lively you feel; an indirect measure of age.
    Vitality,
    /// How fast you recover from injury and fatigue.
    Endurance,
    /// How quickly you connect the dots.
    Intelligence,
    /// How well you choose under pressure.
    Wisdom,
    /// Raw breadth of what you know.
    Knowledge,
    /// Resistance to urges and to mind control.
    Willpower,
    /// Aptitude for otherworldly acts.
    Spirit,
    /// Presence and persuasion.
    Charisma,
}

impl AttributeKind {
    /// Every kind, in sheet order.
    pub const ALL: [AttributeKind; 11] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Vitality,
        Self::Endurance,
        Self::Intelligence,
        Self::Wisdom,
        Self::Knowledge,
        Self::Willpower,
        Self::Spirit,
        Self::Charisma,
    ];

    /// The capitalised display name ("Strength").
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Vitality => "Vitality",
            Self::Endurance => "Endurance",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Knowledge => "Knowledge",
            Self::Willpower => "Willpower",
            Self::Spirit => "Spirit",
            Self::Charisma => "Charisma",
        }
    }

    /// Three-letter abbreviation used in compact tables.
    pub fn short(self) -> &'static str {
        &self.name()[..3]
    }

    /// Parse a kind from its name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownAttribute(wanted.to_string()))
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single attribute score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    kind: AttributeKind,
    value: u32,
}

impl Attribute {
    /// Create an attribute with a fixed value.
    pub fn new(kind: AttributeKind, value: u32) -> Self {
        Self { kind, value }
    }

    /// Which dimension this score belongs to.
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// The score.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.value)
    }
}
