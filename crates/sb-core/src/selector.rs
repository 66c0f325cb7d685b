//! Choosing who takes on an event, and with what.
//!
//! Everything random in the game goes through [`Selector::choose`], so a
//! session can be driven by seeded randomness in play and by a fixed script
//! in tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::attribute::AttributeKind;
use crate::character::Character;
use crate::party::Party;

/// Picks one of `n` options.
pub trait Selector {
    /// Return an index in `0..n`. Callers never pass `n == 0`.
    fn choose(&mut self, n: usize) -> usize;

    /// [`choose`](Selector::choose), reduced into `0..n` whatever the
    /// implementation returns.
    fn pick(&mut self, n: usize) -> usize {
        self.choose(n) % n.max(1)
    }

    /// Pick a party member, or `None` if the party is empty.
    fn select_member<'a>(&mut self, party: &'a Party) -> Option<&'a Character> {
        if party.is_empty() {
            return None;
        }
        let idx = self.pick(party.len());
        party.get(idx)
    }

    /// Pick one of the character's attribute kinds.
    fn select_attribute(&mut self, character: &Character) -> AttributeKind {
        let kinds = character.kinds();
        kinds[self.pick(kinds.len())]
    }
}

/// Uniform random selection backed by a seeded RNG.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Reproducible selection from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Selection seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Selector for RandomSelector {
    fn choose(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n.max(1))
    }
}

/// Replays a fixed list of picks, cycling when it runs out.
///
/// Each pick is reduced modulo `n`, so a script written for one party size
/// stays valid for another. An empty script always picks 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    picks: VecDeque<usize>,
}

impl ScriptedSelector {
    /// Create a selector that replays `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl Selector for ScriptedSelector {
    fn choose(&mut self, n: usize) -> usize {
        let Some(pick) = self.picks.pop_front() else {
            return 0;
        };
        self.picks.push_back(pick);
        pick % n.max(1)
    }
}
