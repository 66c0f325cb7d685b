//! Starting data for a game: who is around, who is in the party, and where
//! things happen.
//!
//! The built-in frontier town is defined in code. Other scenarios are read
//! from JSON files shaped like [`ScenarioFile`]; every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use sb_core::{Archetype, AttributeKind, Character, Event, EventDefinition, Location, Party};

use crate::error::GameResult;

/// A character as written in a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterDefinition {
    /// Character name; unnamed characters get the default name.
    pub name: Option<String>,
    /// Archetype; without one every attribute is zero.
    pub archetype: Option<Archetype>,
}

impl CharacterDefinition {
    /// Build the character.
    pub fn build(&self) -> Character {
        Character::new(self.name.clone(), self.archetype)
    }
}

/// A location as written in a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationDefinition {
    /// Location name.
    pub name: String,
    /// Location description.
    pub description: String,
    /// Who can be found there.
    pub inhabitants: Vec<String>,
    /// What there is to do there, shown by `look`.
    pub interaction: Option<String>,
    /// Events in the order they will happen.
    pub events: Vec<EventDefinition>,
}

impl LocationDefinition {
    /// Build the location with its event queue.
    pub fn build(&self) -> Location {
        let mut location = Location::new(&self.name, &self.description)
            .with_inhabitants(self.inhabitants.iter().cloned());
        if let Some(line) = &self.interaction {
            location = location.with_interaction(line);
        }
        for def in &self.events {
            location.add_event(Event::from_definition(def));
        }
        location
    }
}

/// The on-disk scenario format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioFile {
    /// Everyone in the world, including party members.
    pub roster: Vec<CharacterDefinition>,
    /// The party the player starts with.
    pub party: Vec<CharacterDefinition>,
    /// Places and their events.
    pub locations: Vec<LocationDefinition>,
}

/// A ready-to-play set of characters and locations.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    /// Everyone in the world.
    pub roster: Vec<Character>,
    /// The starting party.
    pub party: Party,
    /// Places and their event queues.
    pub locations: Vec<Location>,
}

impl Scenario {
    /// Build a scenario from its file form.
    pub fn from_file(file: &ScenarioFile) -> Self {
        Self {
            roster: file.roster.iter().map(CharacterDefinition::build).collect(),
            party: file.party.iter().map(CharacterDefinition::build).collect(),
            locations: file.locations.iter().map(LocationDefinition::build).collect(),
        }
    }

    /// Parse a scenario from JSON text.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let file: ScenarioFile = serde_json::from_str(json)?;
        Ok(Self::from_file(&file))
    }

    /// Read a scenario from a JSON file.
    pub fn load(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let scenario = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            locations = scenario.locations.len(),
            party = scenario.party.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// The built-in frontier town: a saloon, a jail, and a sheriff's posse.
    pub fn frontier() -> Self {
        let sheriff = Character::named("Wyatt", Archetype::Sheriff);
        let outlaw = Character::named("Jesse", Archetype::Outlaw);
        let bartender = Character::named("Sam", Archetype::Bartender);

        let roster = vec![
            sheriff.clone(),
            outlaw.clone(),
            bartender.clone(),
            Character::named("Rattler", Archetype::Snake),
            Character::named("Black Bart", Archetype::Bandit),
            Character::named("Doc", Archetype::Doctor),
            Character::named("Mayor Hale", Archetype::Mayor),
            Character::named("Virgil", Archetype::Deputy),
            Character::named("Trigger", Archetype::Horse),
        ];

        let mut saloon = Location::new("Saloon", "A lively saloon filled with patrons and music.")
            .with_inhabitants(["Bartender", "Card players", "Saloon girls"])
            .with_interaction("You can order a drink, play some cards, or chat with the locals.");
        saloon.add_event(Event::new(
            AttributeKind::Strength,
            AttributeKind::Dexterity,
            "A bar fight breaks out. What do you do?",
            "You successfully break up the fight.",
            "You get caught in the middle of the fight.",
            "You manage to dodge the punches but fail to stop the fight.",
        ));

        let mut jail = Location::new("Jail", "A dusty jail with empty cells.")
            .with_interaction("The cell keys hang on a nail behind the desk.");
        jail.add_event(Event::new(
            AttributeKind::Intelligence,
            AttributeKind::Wisdom,
            "A mysterious stranger offers you a secret job. What do you do?",
            "You wisely decline the offer, sensing something isn't right.",
            "You accept the job, not realizing it's a setup.",
            "You hesitate, asking for more information before deciding.",
        ));

        Self {
            roster,
            party: [sheriff, outlaw, bartender].into_iter().collect(),
            locations: vec![saloon, jail],
        }
    }
}
