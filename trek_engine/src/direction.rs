//! Directions of travel.
//!
//! Directions only exist in mutually opposite pairs ("north"/"south", "in"/"out").
//! A pair is created in one step by [`GameMap::add_direction_pair`](crate::GameMap::add_direction_pair),
//! which is the only place a direction's opposite is ever assigned.

use std::fmt;

/// Index of a [`Direction`] in its [`GameMap`](crate::GameMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectionId(pub(crate) usize);

impl DirectionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named direction in which movement can be made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
    id: DirectionId,
    name: String,
    opposite: DirectionId,
}

impl Direction {
    pub(crate) fn paired(id: DirectionId, name: impl Into<String>, opposite: DirectionId) -> Self {
        Self {
            id,
            name: name.into(),
            opposite,
        }
    }

    pub fn id(&self) -> DirectionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The direction leading back the way this one came.
    pub fn opposite(&self) -> DirectionId {
        self.opposite
    }

    /// Short form players may type instead of the full name: its first character.
    pub fn synonym(&self) -> Option<String> {
        self.name.chars().next().map(String::from)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonym_is_first_character() {
        let west = Direction::paired(DirectionId(0), "west", DirectionId(1));
        assert_eq!(west.synonym().as_deref(), Some("w"));
    }

    #[test]
    fn synonym_handles_multibyte_names() {
        let up = Direction::paired(DirectionId(0), "über", DirectionId(1));
        assert_eq!(up.synonym().as_deref(), Some("ü"));
    }

    #[test]
    fn empty_name_has_no_synonym() {
        let nameless = Direction::paired(DirectionId(0), "", DirectionId(1));
        assert!(nameless.synonym().is_none());
    }

    #[test]
    fn displays_as_name() {
        let down = Direction::paired(DirectionId(3), "down", DirectionId(2));
        assert_eq!(down.to_string(), "down");
        assert_eq!(down.opposite().index(), 2);
    }
}
