//! Player -- the character the player moves around the map.
use crate::location::LocationId;

/// A character within a game, controlled by the player.
///
/// Only the [`Game`](crate::Game) moves it, in response to a movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCharacter {
    current_location: LocationId,
}

impl PlayerCharacter {
    pub(crate) fn new(starting_location: LocationId) -> Self {
        Self {
            current_location: starting_location,
        }
    }

    pub fn current_location(&self) -> LocationId {
        self.current_location
    }

    pub(crate) fn move_to(&mut self, location: LocationId) {
        self.current_location = location;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_where_placed_and_moves() {
        let mut character = PlayerCharacter::new(LocationId(2));
        assert_eq!(character.current_location(), LocationId(2));
        character.move_to(LocationId(0));
        assert_eq!(character.current_location(), LocationId(0));
    }
}
