//! Characters and the archetypes that seed their attributes.
//!
//! A character is a name plus one [`Attribute`] for every [`AttributeKind`].
//! Archetypes are plain value tables; building a character from one copies
//! the table, and the values never change afterwards.

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeKind};

/// Name given to characters created without one.
pub const DEFAULT_NAME: &str = "Unnamed Character";

/// A fixed template of attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// Keeper of the peace.
    Sheriff,
    /// Wanted by the law.
    Outlaw,
    /// Hears everything, forgets nothing.
    Bartender,
    /// Rattles before it bites.
    Snake,
    /// Rides with a gang.
    Bandit,
    /// Patches up whoever comes through the door.
    Doctor,
    /// Runs the town.
    Mayor,
    /// The sheriff's right hand.
    Deputy,
    /// Four legs and a saddle.
    Horse,
}

impl Archetype {
    /// Every archetype.
    pub const ALL: [Archetype; 9] = [
        Self::Sheriff,
        Self::Outlaw,
        Self::Bartender,
        Self::Snake,
        Self::Bandit,
        Self::Doctor,
        Self::Mayor,
        Self::Deputy,
        Self::Horse,
    ];

    /// Display name of the archetype.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sheriff => "Sheriff",
            Self::Outlaw => "Outlaw",
            Self::Bartender => "Bartender",
            Self::Snake => "Snake",
            Self::Bandit => "Bandit",
            Self::Doctor => "Doctor",
            Self::Mayor => "Mayor",
            Self::Deputy => "Deputy",
            Self::Horse => "Horse",
        }
    }

    /// Parse an archetype name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
    }

    /// The archetype's starting value for one attribute kind.
    ///
    /// Values are listed in [`AttributeKind::ALL`] order. Only deputies and
    /// horses have a charisma score; everyone else starts at zero there.
    pub fn base_value(self, kind: AttributeKind) -> u32 {
        let table: [u32; 11] = match self {
            Self::Sheriff => [90, 90, 90, 75, 85, 60, 60, 60, 90, 90, 0],
            Self::Outlaw => [90, 90, 100, 50, 75, 70, 50, 70, 50, 50, 0],
            Self::Bartender => [80, 90, 85, 75, 75, 90, 80, 90, 75, 80, 0],
            Self::Snake => [80, 60, 90, 50, 30, 20, 5, 5, 50, 50, 0],
            Self::Bandit => [65, 90, 100, 50, 75, 30, 50, 30, 50, 50, 0],
            Self::Doctor => [40, 90, 60, 50, 75, 90, 75, 90, 50, 90, 0],
            Self::Mayor => [95, 90, 100, 85, 75, 90, 80, 90, 50, 50, 0],
            Self::Deputy => [65, 80, 75, 80, 75, 90, 60, 90, 60, 80, 90],
            Self::Horse => [80, 80, 90, 80, 90, 5, 5, 5, 60, 80, 90],
        };
        table[kind as usize]
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named bundle of attributes.
///
/// Characters are only built through [`Character::new`], which fills one
/// slot per kind, so every kind is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    name: String,
    archetype: Option<Archetype>,
    // Indexed by `AttributeKind as usize`.
    attributes: [Attribute; 11],
}

impl Character {
    /// Create a character.
    ///
    /// Without a name the character is called [`DEFAULT_NAME`]; without an
    /// archetype every attribute is zero.
    pub fn new(name: Option<String>, archetype: Option<Archetype>) -> Self {
        let attributes = AttributeKind::ALL.map(|kind| {
            let value = archetype.map(|a| a.base_value(kind)).unwrap_or(0);
            Attribute::new(kind, value)
        });

        Self {
            name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            archetype,
            attributes,
        }
    }

    /// Create a named character from an archetype.
    pub fn named(name: impl Into<String>, archetype: Archetype) -> Self {
        Self::new(Some(name.into()), Some(archetype))
    }

    /// Create an unnamed character from an archetype.
    pub fn unnamed(archetype: Archetype) -> Self {
        Self::new(None, Some(archetype))
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The archetype the character was built from, if any.
    pub fn archetype(&self) -> Option<Archetype> {
        self.archetype
    }

    /// Look up one attribute.
    pub fn attribute(&self, kind: AttributeKind) -> Attribute {
        self.attributes[kind as usize]
    }

    /// All attributes in sheet order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// All attribute kinds this character has, in sheet order.
    pub fn kinds(&self) -> [AttributeKind; 11] {
        self.attributes.map(|a| a.kind())
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.archetype {
            Some(a) => write!(f, "{} ({a})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name() {
        let c = Character::unnamed(Archetype::Sheriff);
        assert_eq!(c.name(), "Unnamed Character");
        assert_eq!(Character::new(None, None).name(), DEFAULT_NAME);
    }

    #[test]
    fn every_kind_present() {
        let c = Character::named("Doc", Archetype::Doctor);
        assert_eq!(c.kinds(), AttributeKind::ALL);
        assert_eq!(c.attributes().count(), 11);
    }

    #[test]
    fn attributes_line_up_with_kinds() {
        for archetype in [None, Some(Archetype::Horse)] {
            let c = Character::new(None, archetype);
            assert_eq!(c.kinds(), AttributeKind::ALL);
            for kind in AttributeKind::ALL {
                assert_eq!(c.attribute(kind).kind(), kind);
            }
        }
    }

    #[test]
    fn no_archetype_is_all_zero() {
        let c = Character::new(Some("Drifter".to_string()), None);
        assert!(c.attributes().all(|a| a.value() == 0));
        assert_eq!(c.archetype(), None);
    }

    #[test]
    fn sheriff_table() {
        let c = Character::unnamed(Archetype::Sheriff);
        assert_eq!(c.attribute(AttributeKind::Strength).value(), 90);
        assert_eq!(c.attribute(AttributeKind::Vitality).value(), 75);
        assert_eq!(c.attribute(AttributeKind::Endurance).value(), 85);
        assert_eq!(c.attribute(AttributeKind::Wisdom).value(), 60);
        assert_eq!(c.attribute(AttributeKind::Charisma).value(), 0);
    }

    #[test]
    fn charisma_only_for_deputy_and_horse() {
        for archetype in Archetype::ALL {
            let charisma = archetype.base_value(AttributeKind::Charisma);
            match archetype {
                Archetype::Deputy | Archetype::Horse => assert_eq!(charisma, 90),
                _ => assert_eq!(charisma, 0),
            }
        }
    }

    #[test]
    fn snake_and_horse_are_not_scholars() {
        assert_eq!(Archetype::Snake.base_value(AttributeKind::Knowledge), 5);
        assert_eq!(Archetype::Horse.base_value(AttributeKind::Intelligence), 5);
        assert_eq!(Archetype::Mayor.base_value(AttributeKind::Strength), 95);
    }

    #[test]
    fn archetype_parse() {
        assert_eq!(Archetype::parse("outlaw"), Some(Archetype::Outlaw));
        assert_eq!(Archetype::parse("HORSE"), Some(Archetype::Horse));
        assert_eq!(Archetype::parse("cowboy"), None);
    }

    #[test]
    fn display_includes_archetype() {
        assert_eq!(
            Character::named("Wyatt", Archetype::Sheriff).to_string(),
            "Wyatt (Sheriff)"
        );
        assert_eq!(Character::new(None, None).to_string(), "Unnamed Character");
    }
}
