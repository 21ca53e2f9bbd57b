//! The game graph.
//!
//! [`GameMap`] is an arena owning every [`Direction`] and [`Location`]. Everything
//! else refers to them by [`DirectionId`] / [`LocationId`], so exits can form
//! cycles without any ownership cycles.

use log::debug;
use trek_data::{GameFormatError, QUIT_COMMAND, check_direction_pair};

use crate::direction::{Direction, DirectionId};
use crate::location::{Location, LocationId};

/// The common direction pairs, as registered by [`GameMap::add_standard_directions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardDirections {
    pub north: DirectionId,
    pub south: DirectionId,
    pub east: DirectionId,
    pub west: DirectionId,
    pub up: DirectionId,
    pub down: DirectionId,
    pub inward: DirectionId,
    pub outward: DirectionId,
}

/// Directions and locations of a game. Locations keep insertion order; the first is the start.
#[derive(Debug, Clone, Default)]
pub struct GameMap {
    directions: Vec<Direction>,
    locations: Vec<Location>,
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create two directions, each the other's opposite.
    ///
    /// Pairing happens only here, so a direction's opposite can never be reassigned.
    ///
    /// # Errors
    /// If either name is already a direction in this map, both names are equal,
    /// or either is the quit command.
    pub fn add_direction_pair(
        &mut self,
        name: impl Into<String>,
        opposite: impl Into<String>,
    ) -> Result<(DirectionId, DirectionId), GameFormatError> {
        let (name, opposite) = (name.into(), opposite.into());
        check_direction_pair(&name, &opposite, |taken| self.find_direction(taken).is_some())?;

        let first = DirectionId(self.directions.len());
        let second = DirectionId(first.0 + 1);
        debug!("paired directions '{name}' <-> '{opposite}'");
        self.directions.push(Direction::paired(first, name, second));
        self.directions.push(Direction::paired(second, opposite, first));
        Ok((first, second))
    }

    /// Register north/south, east/west, up/down and in/out.
    ///
    /// # Errors
    /// If any of those names is already a direction in this map.
    pub fn add_standard_directions(&mut self) -> Result<StandardDirections, GameFormatError> {
        let (north, south) = self.add_direction_pair("north", "south")?;
        let (east, west) = self.add_direction_pair("east", "west")?;
        let (up, down) = self.add_direction_pair("up", "down")?;
        let (inward, outward) = self.add_direction_pair("in", "out")?;
        Ok(StandardDirections {
            north,
            south,
            east,
            west,
            up,
            down,
            inward,
            outward,
        })
    }

    /// # Errors
    /// [`GameFormatError::DuplicateRoomName`] if a location already has this name.
    pub fn add_location(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<LocationId, GameFormatError> {
        let name = name.into();
        if self.find_location(&name).is_some() {
            return Err(GameFormatError::DuplicateRoomName { name });
        }
        let id = LocationId(self.locations.len());
        self.locations.push(Location::new(id, name, description));
        Ok(id)
    }

    /// Add an exit usable only from `from` to `to`.
    ///
    /// # Panics
    /// If any id belongs to a different map.
    pub fn add_one_way_exit(&mut self, from: LocationId, direction: DirectionId, to: LocationId) {
        let direction = &self.directions[direction.0];
        assert!(to.0 < self.locations.len(), "exit target {to:?} is not in this map");
        debug!(
            "exit '{}' from '{}' to '{}'",
            direction,
            self.locations[from.0].name(),
            self.locations[to.0].name()
        );
        self.locations[from.0].push_exit(direction, to);
    }

    /// Add an exit from `from` to `to`, and the way back using the opposite direction.
    ///
    /// # Panics
    /// If any id belongs to a different map.
    pub fn add_exit(&mut self, from: LocationId, direction: DirectionId, to: LocationId) {
        let back = self.directions[direction.0].opposite();
        self.add_one_way_exit(from, direction, to);
        self.add_one_way_exit(to, back, from);
    }

    /// # Panics
    /// If the id belongs to a different map.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }

    /// # Panics
    /// If the id belongs to a different map.
    pub fn location_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.0]
    }

    /// # Panics
    /// If the id belongs to a different map.
    pub fn direction(&self, id: DirectionId) -> &Direction {
        &self.directions[id.0]
    }

    /// Find a location by name. Names are unique within a map.
    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name() == name)
    }

    /// Find a direction by name, whichever side of its pair it is.
    pub fn find_direction(&self, name: &str) -> Option<&Direction> {
        self.directions.iter().find(|direction| direction.name() == name)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn starting_location(&self) -> Option<LocationId> {
        self.locations.first().map(Location::id)
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Every word that can be typed as a command somewhere in this map, for completion.
    pub fn command_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .locations
            .iter()
            .flat_map(Location::commands)
            .map(|command| command.name().to_string())
            .collect();
        words.push(QUIT_COMMAND.to_string());
        words.sort_unstable();
        words.dedup();
        words
    }
}
