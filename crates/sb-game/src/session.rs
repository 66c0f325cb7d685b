//! Game session management.
//!
//! `GameSession` owns the party, the locations and the selector. Between
//! two prompts the front end calls [`GameSession::tick`] to settle where the
//! party is and which event is waiting, then hands the player's input to
//! [`GameSession::process`].

use comfy_table::Table;
use tracing::{debug, info};

use sb_core::{AttributeKind, Character, Event, Location, Party, Selector};

use crate::command::{Command, parse_command, suggest_command};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::scenario::Scenario;

/// Printed when the party has nobody left.
pub const GAME_OVER: &str = "Game over. Your party has been defeated.";

/// An interactive game session.
pub struct GameSession {
    roster: Vec<Character>,
    party: Party,
    locations: Vec<Location>,
    selector: Box<dyn Selector>,
    current_location: Option<usize>,
    // Index into the current location's history.
    current_event: Option<usize>,
    over: bool,
}

impl GameSession {
    /// Create a session from a scenario and a selection policy.
    pub fn new(scenario: Scenario, selector: impl Selector + 'static) -> Self {
        info!(
            locations = scenario.locations.len(),
            party = scenario.party.len(),
            "session started"
        );
        Self {
            roster: scenario.roster,
            party: scenario.party,
            locations: scenario.locations,
            selector: Box::new(selector),
            current_location: None,
            current_event: None,
            over: false,
        }
    }

    /// Create a session from configuration.
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        let scenario = config.load_scenario()?;
        Ok(Self::new(scenario, config.selector()))
    }

    /// The opening lines shown before the first prompt.
    pub fn greeting(&self) -> &'static str {
        "Welcome to the Wild West Adventure Game!\n\
         You are the sheriff in town. Your job is to keep peace and order.\n\
         Type 'help' at any time to see available commands."
    }

    /// The active party.
    pub fn party(&self) -> &Party {
        &self.party
    }

    /// Mutable access to the party, for adding or removing members.
    pub fn party_mut(&mut self) -> &mut Party {
        &mut self.party
    }

    /// Everyone in the world.
    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    /// All locations.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Where the party is, once it has arrived somewhere.
    pub fn current_location(&self) -> Option<&Location> {
        self.locations.get(self.current_location?)
    }

    /// The event waiting to be executed, if any.
    pub fn current_event(&self) -> Option<&Event> {
        self.current_location()?
            .seen_events()
            .get(self.current_event?)
    }

    /// Returns true after `quit` or once the party is gone.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Settle the session state before the next prompt.
    ///
    /// Picks a location if there is none, pulls the next event if none is
    /// waiting, and moves on to another location when the current one has
    /// run out of events. Ends the game if the party is empty. Returns
    /// anything worth telling the player.
    pub fn tick(&mut self) -> Option<String> {
        if self.over {
            return None;
        }
        let mut notes = Vec::new();

        if self.current_location.is_none() && !self.locations.is_empty() {
            let idx = self.selector.pick(self.locations.len());
            self.current_location = Some(idx);
            info!(location = self.locations[idx].name(), "party arrived");
        }

        if self.current_event.is_none()
            && let Some(here) = self.current_location
        {
            let here = self.travel_if_exhausted(here, &mut notes);
            let location = &mut self.locations[here];
            if location.next_event().is_some() {
                self.current_event = location.seen_events().len().checked_sub(1);
            }
        }

        if self.party.is_empty() {
            self.over = true;
            notes.push(GAME_OVER.to_string());
        }

        if notes.is_empty() {
            None
        } else {
            Some(notes.join("\n"))
        }
    }

    fn travel_if_exhausted(&mut self, here: usize, notes: &mut Vec<String>) -> usize {
        if self.locations[here].has_pending() {
            return here;
        }
        let open: Vec<usize> = self
            .locations
            .iter()
            .enumerate()
            .filter(|(i, l)| *i != here && l.has_pending())
            .map(|(i, _)| i)
            .collect();
        if open.is_empty() {
            return here;
        }
        let next = open[self.selector.pick(open.len())];
        let name = self.locations[next].name();
        info!(from = self.locations[here].name(), to = name, "party travelled");
        notes.push(format!("You travel on to the {name}."));
        self.current_location = Some(next);
        next
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }
        if self.over {
            return Err(GameError::GameOver);
        }

        debug!(input = trimmed, "command received");
        match parse_command(trimmed) {
            Some(Command::Help) => Ok(self.do_help()),
            Some(Command::Quit) => {
                self.over = true;
                Ok("Quitting the game.".to_string())
            }
            Some(Command::Status) => Ok(self.do_status()),
            Some(Command::Look) => self.do_look(),
            Some(Command::Event) => Ok(self.do_event()),
            Some(Command::Execute) => self.do_execute(),
            None => Err(GameError::UnknownCommand {
                input: trimmed.to_string(),
                suggestion: suggest_command(trimmed),
            }),
        }
    }

    fn do_help(&self) -> String {
        let mut out = "Available commands:".to_string();
        for cmd in Command::ALL {
            out.push_str(&format!("\n- {}: {}", cmd.keyword(), cmd.summary()));
        }
        out
    }

    fn do_status(&self) -> String {
        if self.party.is_empty() {
            return "Party Status:\nNobody is left in the party.".to_string();
        }

        let mut table = Table::new();
        let mut header = vec!["Name".to_string(), "Archetype".to_string()];
        header.extend(AttributeKind::ALL.iter().map(|k| k.short().to_string()));
        table.set_header(header);

        for member in &self.party {
            let mut row = vec![
                member.name().to_string(),
                member
                    .archetype()
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| "--".to_string()),
            ];
            row.extend(member.attributes().map(|a| a.value().to_string()));
            table.add_row(row);
        }

        format!("Party Status:\n{table}")
    }

    fn do_look(&self) -> GameResult<String> {
        let location = self.current_location().ok_or(GameError::NoLocation)?;
        let mut out = format!(
            "You look around...\nWelcome to the Wild West!\n{}\n{}",
            location.describe(),
            location.describe_inhabitants()
        );
        if let Some(line) = location.interaction() {
            out.push('\n');
            out.push_str(line);
        }
        Ok(out)
    }

    fn do_event(&self) -> String {
        match self.current_event() {
            Some(event) => format!("Current Event:\n{}", event.prompt()),
            None => "Current Event:\nNothing is happening here right now.".to_string(),
        }
    }

    fn do_execute(&mut self) -> GameResult<String> {
        let (Some(here), Some(idx)) = (self.current_location, self.current_event) else {
            return Err(GameError::NoCurrentEvent);
        };
        let event = self
            .locations
            .get_mut(here)
            .and_then(|l| l.seen_event_mut(idx))
            .ok_or(GameError::NoCurrentEvent)?;

        let resolution = event.execute(&self.party, self.selector.as_mut())?;
        self.current_event = None;

        Ok(format!(
            "Executing event...\n{} steps up, relying on {} ({}).\n{}\nOutcome: {}",
            resolution.character,
            resolution.attribute,
            resolution.value,
            resolution.message,
            resolution.status
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::{Archetype, CoreError, EventStatus, ScriptedSelector};

    // Scripted picks: location, then (member, attribute) per execute.
    fn session(picks: &[usize]) -> GameSession {
        GameSession::new(Scenario::frontier(), ScriptedSelector::new(picks.to_vec()))
    }

    fn two_event_saloon() -> Scenario {
        let mut saloon = Location::new("Saloon", "Loud.");
        saloon.add_event(Event::new(
            AttributeKind::Strength,
            AttributeKind::Dexterity,
            "Bar fight!",
            "Broken up.",
            "Caught in it.",
            "Dodged.",
        ));
        saloon.add_event(Event::new(
            AttributeKind::Charisma,
            AttributeKind::Charisma,
            "Card sharp!",
            "Called the bluff.",
            "Lost your shirt.",
            "Broke even.",
        ));
        Scenario {
            roster: Vec::new(),
            party: [Character::named("Virgil", Archetype::Deputy)]
                .into_iter()
                .collect(),
            locations: vec![saloon],
        }
    }

    #[test]
    fn nothing_selected_before_first_tick() {
        let s = session(&[0]);
        assert!(s.current_location().is_none());
        assert!(s.current_event().is_none());
        assert!(!s.is_over());
    }

    #[test]
    fn first_tick_picks_location_and_event() {
        let mut s = session(&[1]);
        assert_eq!(s.tick(), None);
        assert_eq!(s.current_location().unwrap().name(), "Jail");
        assert_eq!(
            s.current_event().unwrap().prompt(),
            "A mysterious stranger offers you a secret job. What do you do?"
        );
    }

    #[test]
    fn help_lists_commands() {
        let mut s = session(&[0]);
        let help = s.process("help").unwrap();
        assert!(help.starts_with("Available commands:"));
        for cmd in Command::ALL {
            assert!(help.contains(&format!("- {}:", cmd.keyword())));
        }
    }

    #[test]
    fn status_lists_party() {
        let mut s = session(&[0]);
        let status = s.process("STATUS").unwrap();
        assert!(status.starts_with("Party Status:"));
        assert!(status.contains("Wyatt"));
        assert!(status.contains("Jesse"));
        assert!(status.contains("Bartender"));
        assert!(status.contains("Cha"));
    }

    #[test]
    fn look_describes_location() {
        let mut s = session(&[0]);
        assert!(matches!(s.process("look"), Err(GameError::NoLocation)));
        s.tick();
        let look = s.process(" look ").unwrap();
        assert!(look.contains("Saloon: A lively saloon filled with patrons and music."));
        assert!(look.contains("- Card players"));
        assert!(look.ends_with("You can order a drink, play some cards, or chat with the locals."));
    }

    #[test]
    fn look_without_interaction_ends_at_inhabitants() {
        let mut s = GameSession::new(two_event_saloon(), ScriptedSelector::new([0]));
        s.tick();
        let look = s.process("look").unwrap();
        assert!(look.ends_with("The Saloon is deserted."));
    }

    // Ignores the range it is given.
    struct Overshoot;

    impl Selector for Overshoot {
        fn choose(&mut self, n: usize) -> usize {
            n
        }
    }

    #[test]
    fn out_of_range_selector_does_not_panic() {
        let mut s = GameSession::new(Scenario::frontier(), Overshoot);
        assert_eq!(s.tick(), None);
        assert_eq!(s.current_location().unwrap().name(), "Saloon");
        let out = s.process("execute").unwrap();
        assert!(out.contains("Wyatt steps up, relying on Strength (90)."));
        assert_eq!(s.tick().as_deref(), Some("You travel on to the Jail."));
    }

    #[test]
    fn event_shows_prompt() {
        let mut s = session(&[0]);
        s.tick();
        let out = s.process("event").unwrap();
        assert_eq!(out, "Current Event:\nA bar fight breaks out. What do you do?");
    }

    #[test]
    fn execute_partial_pass() {
        // Saloon; Jesse; Strength
        let mut s = session(&[0, 1, 0]);
        s.tick();
        let out = s.process("execute").unwrap();
        assert!(out.contains("Jesse steps up, relying on Strength (90)."));
        assert!(out.contains("You manage to dodge the punches but fail to stop the fight."));
        assert!(out.ends_with("Outcome: Partial Pass"));
        assert!(s.current_event().is_none());
        let saloon = s.current_location().unwrap();
        assert_eq!(saloon.seen_events()[0].status(), EventStatus::PartialPass);
    }

    #[test]
    fn execute_fail() {
        // Saloon; Wyatt; Intelligence
        let mut s = session(&[0, 0, 5]);
        s.tick();
        let out = s.process("execute").unwrap();
        assert!(out.contains("You get caught in the middle of the fight."));
        assert!(out.ends_with("Outcome: Fail"));
    }

    #[test]
    fn execute_pass_when_both_requirements_match() {
        // Only location; Virgil; skip first event with Strength, then Charisma.
        let mut s = GameSession::new(two_event_saloon(), ScriptedSelector::new([0, 0, 0, 0, 10]));
        s.tick();
        s.process("execute").unwrap();
        s.tick();
        assert_eq!(s.current_event().unwrap().prompt(), "Card sharp!");
        let out = s.process("execute").unwrap();
        assert!(out.contains("Called the bluff."));
        assert!(out.ends_with("Outcome: Pass"));
    }

    #[test]
    fn execute_without_event() {
        let mut s = session(&[0]);
        assert!(matches!(s.process("execute"), Err(GameError::NoCurrentEvent)));
        s.tick();
        s.process("execute").unwrap();
        assert!(matches!(s.process("execute"), Err(GameError::NoCurrentEvent)));
    }

    #[test]
    fn execute_with_empty_party_keeps_event() {
        let mut s = session(&[0]);
        s.tick();
        for name in ["Wyatt", "Jesse", "Sam"] {
            s.party_mut().remove(name).unwrap();
        }
        let result = s.process("execute");
        assert!(matches!(
            result,
            Err(GameError::Core(CoreError::NoEligibleMember))
        ));
        let event = s.current_event().unwrap();
        assert_eq!(event.status(), EventStatus::Unknown);
    }

    #[test]
    fn empty_party_ends_game_on_tick() {
        let mut s = session(&[0]);
        s.party_mut().remove("Wyatt");
        s.party_mut().remove("Jesse");
        s.party_mut().remove("Sam");
        assert_eq!(s.tick().as_deref(), Some(GAME_OVER));
        assert!(s.is_over());
        assert!(matches!(s.process("look"), Err(GameError::GameOver)));
        assert_eq!(s.tick(), None);
    }

    #[test]
    fn exhausted_location_moves_on() {
        // Saloon first, then the only open location is the jail.
        let mut s = session(&[0]);
        s.tick();
        s.process("execute").unwrap();
        let note = s.tick().unwrap();
        assert_eq!(note, "You travel on to the Jail.");
        assert_eq!(s.current_location().unwrap().name(), "Jail");
        assert!(s.current_event().is_some());
    }

    #[test]
    fn everything_exhausted_leaves_no_event() {
        let mut s = session(&[0]);
        s.tick();
        s.process("execute").unwrap();
        s.tick();
        s.process("execute").unwrap();
        assert_eq!(s.tick(), None);
        assert!(s.current_event().is_none());
        assert_eq!(
            s.process("event").unwrap(),
            "Current Event:\nNothing is happening here right now."
        );
        let seen: usize = s.locations().iter().map(|l| l.seen_events().len()).sum();
        assert_eq!(seen, 2);
    }

    #[test]
    fn unknown_command_changes_nothing() {
        let mut s = session(&[0]);
        s.tick();
        let before = s.current_event().cloned();
        let err = s.process("dance").unwrap_err();
        assert!(matches!(err, GameError::UnknownCommand { suggestion: None, .. }));
        assert!(err.to_string().starts_with("Unknown command 'dance'."));
        assert_eq!(s.current_event().cloned(), before);
        assert!(!s.is_over());
    }

    #[test]
    fn unknown_command_suggests() {
        let mut s = session(&[0]);
        let err = s.process("exectue").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'execute'?"));
    }

    #[test]
    fn quit_ends_session() {
        let mut s = session(&[0]);
        assert_eq!(s.process("quit").unwrap(), "Quitting the game.");
        assert!(s.is_over());
    }

    #[test]
    fn empty_input() {
        let mut s = session(&[0]);
        assert!(s.process("   ").unwrap().is_empty());
    }

    #[test]
    fn no_locations_is_harmless() {
        let scenario = Scenario {
            party: [Character::named("Doc", Archetype::Doctor)]
                .into_iter()
                .collect(),
            ..Scenario::default()
        };
        let mut s = GameSession::new(scenario, ScriptedSelector::default());
        assert_eq!(s.tick(), None);
        assert!(matches!(s.process("look"), Err(GameError::NoLocation)));
        assert!(matches!(s.process("execute"), Err(GameError::NoCurrentEvent)));
    }

    #[test]
    fn from_config_with_seed() {
        let cfg = GameConfig::default().with_seed(42);
        let mut s = GameSession::from_config(&cfg).unwrap();
        assert_eq!(s.roster().len(), 9);
        s.tick();
        assert!(s.current_event().is_some());
        assert!(s.greeting().contains("Wild West"));
    }
}
