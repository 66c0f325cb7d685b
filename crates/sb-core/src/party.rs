//! The active roster under player control.

use crate::character::Character;

/// An ordered group of characters.
#[derive(Debug, Clone, Default)]
pub struct Party {
    members: Vec<Character>,
}

impl Party {
    /// Create an empty party.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member at the end of the marching order.
    pub fn add(&mut self, character: Character) {
        self.members.push(character);
    }

    /// Remove the first member with this name (case-insensitive).
    pub fn remove(&mut self, name: &str) -> Option<Character> {
        let pos = self
            .members
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))?;
        Some(self.members.remove(pos))
    }

    /// Member at a position.
    pub fn get(&self, index: usize) -> Option<&Character> {
        self.members.get(index)
    }

    /// All members, in order.
    pub fn members(&self) -> &[Character] {
        &self.members
    }

    /// Iterate over the members.
    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.members.iter()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if nobody is left.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<Character> for Party {
    fn from_iter<I: IntoIterator<Item = Character>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Party {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
