//! Locations and their event queues.
//!
//! Each location hands out its events first-in, first-out. A handed-out
//! event moves into the location's history and is never queued again.

use std::collections::VecDeque;

use tracing::debug;

use crate::event::Event;

/// A place the party can be, with events waiting to happen there.
#[derive(Debug, Clone, Default)]
pub struct Location {
    name: String,
    description: String,
    inhabitants: Vec<String>,
    interaction: Option<String>,
    pending: VecDeque<Event>,
    seen: Vec<Event>,
}

impl Location {
    /// Create a location with no inhabitants and no events.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Set who can be found here.
    pub fn with_inhabitants<I, S>(mut self, inhabitants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inhabitants = inhabitants.into_iter().map(Into::into).collect();
        self
    }

    /// Set the line telling the player what there is to do here.
    pub fn with_interaction(mut self, interaction: impl Into<String>) -> Self {
        self.interaction = Some(interaction.into());
        self
    }

    /// Location name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Who can be found here.
    pub fn inhabitants(&self) -> &[String] {
        &self.inhabitants
    }

    /// What there is to do here, if the location says.
    pub fn interaction(&self) -> Option<&str> {
        self.interaction.as_deref()
    }

    /// Queue an event behind the ones already waiting.
    pub fn add_event(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    /// Take the next waiting event, moving it into the history.
    ///
    /// Returns `None` once the queue is exhausted.
    pub fn next_event(&mut self) -> Option<&mut Event> {
        let event = self.pending.pop_front()?;
        self.seen.push(event);
        debug!(
            location = %self.name,
            remaining = self.pending.len(),
            "event dequeued"
        );
        self.seen.last_mut()
    }

    /// Events handed out so far, oldest first.
    pub fn seen_events(&self) -> &[Event] {
        &self.seen
    }

    /// Mutable access to a handed-out event.
    pub fn seen_event_mut(&mut self, index: usize) -> Option<&mut Event> {
        self.seen.get_mut(index)
    }

    /// Number of events still waiting.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if at least one event is still waiting.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// One-line description: `"<name>: <description>"`.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }

    /// Who is here, one per line, or a note that the place is deserted.
    pub fn describe_inhabitants(&self) -> String {
        if self.inhabitants.is_empty() {
            return format!("The {} is deserted.", self.name);
        }
        let mut out = format!("The {} is populated by:", self.name);
        for who in &self.inhabitants {
            out.push_str(&format!("\n- {who}"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeKind;
    use crate::event::EventStatus;

    fn event(prompt: &str) -> Event {
        Event::new(
            AttributeKind::Strength,
            AttributeKind::Dexterity,
            prompt,
            "pass",
            "fail",
            "partial",
        )
    }

    fn saloon() -> Location {
        let mut loc = Location::new("Saloon", "A lively saloon filled with patrons and music.");
        loc.add_event(event("first"));
        loc.add_event(event("second"));
        loc.add_event(event("third"));
        loc
    }

    #[test]
    fn events_come_out_in_order() {
        let mut loc = saloon();
        assert_eq!(loc.next_event().unwrap().prompt(), "first");
        assert_eq!(loc.next_event().unwrap().prompt(), "second");
        assert_eq!(loc.next_event().unwrap().prompt(), "third");
    }

    #[test]
    fn exhausted_queue_returns_none() {
        let mut loc = saloon();
        for _ in 0..3 {
            assert!(loc.next_event().is_some());
        }
        assert!(loc.next_event().is_none());
        assert!(loc.next_event().is_none());
        assert_eq!(loc.seen_events().len(), 3);
        assert_eq!(loc.pending_count(), 0);
        assert!(!loc.has_pending());
    }

    #[test]
    fn empty_location_returns_none() {
        let mut loc = Location::new("Ghost Town", "An abandoned town.");
        assert!(loc.next_event().is_none());
        assert!(loc.seen_events().is_empty());
    }

    #[test]
    fn resolution_is_kept_in_history() {
        let mut loc = saloon();
        loc.next_event()
            .unwrap()
            .resolve(AttributeKind::Strength)
            .unwrap();
        assert_eq!(loc.seen_events()[0].status(), EventStatus::PartialPass);
        assert_eq!(loc.pending_count(), 2);
    }

    #[test]
    fn seen_event_mut_reaches_history() {
        let mut loc = saloon();
        loc.next_event();
        let e = loc.seen_event_mut(0).unwrap();
        e.resolve(AttributeKind::Wisdom).unwrap();
        assert_eq!(loc.seen_events()[0].status(), EventStatus::Fail);
        assert!(loc.seen_event_mut(1).is_none());
    }

    #[test]
    fn fresh_containers_per_location() {
        let mut a = Location::new("A", "a");
        let b = Location::new("B", "b");
        a.add_event(event("only a"));
        assert_eq!(a.pending_count(), 1);
        assert_eq!(b.pending_count(), 0);
        assert!(b.inhabitants().is_empty());
    }

    #[test]
    fn describe() {
        let loc = Location::new("Jail", "A dusty jail with empty cells.");
        assert_eq!(loc.describe(), "Jail: A dusty jail with empty cells.");
        assert_eq!(loc.describe_inhabitants(), "The Jail is deserted.");

        let loc = loc.with_inhabitants(["Deputy", "A drunk"]);
        assert_eq!(
            loc.describe_inhabitants(),
            "The Jail is populated by:\n- Deputy\n- A drunk"
        );
    }

    #[test]
    fn interaction_is_optional() {
        let camp = Location::new("Outlaw Camp", "Tents and a campfire.");
        assert_eq!(camp.interaction(), None);

        let camp = camp.with_interaction("Outlaws might not take kindly to strangers.");
        assert_eq!(
            camp.interaction(),
            Some("Outlaws might not take kindly to strangers.")
        );
        assert_eq!(camp.describe(), "Outlaw Camp: Tents and a campfire.");
    }
}
