//! Location definitions.
//!
//! Any place the player character can stand is a `Location`, whether it's a coffin
//! or a cave. Exits are one-way edges to other locations; every exit also
//! registers a movement [`Command`] on the location it leaves from.

use crate::command::Command;
use crate::direction::{Direction, DirectionId};

/// Index of a [`Location`] in its [`GameMap`](crate::GameMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub(crate) usize);

/// A one-way exit from one location to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    pub direction: DirectionId,
    pub to: LocationId,
}

/// A node in the game graph.
#[derive(Debug, Clone)]
pub struct Location {
    id: LocationId,
    name: String,
    description: String,
    exits: Vec<Exit>,
    commands: Vec<Command>,
}

impl Location {
    pub(crate) fn new(id: LocationId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Exits in the order they were added.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// Commands available only while the player is here, movement commands included.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Make an extra command available at this location.
    pub fn add_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Record an exit and its movement command.
    pub(crate) fn push_exit(&mut self, direction: &Direction, to: LocationId) {
        self.exits.push(Exit {
            direction: direction.id(),
            to,
        });
        self.commands.push(Command::movement(direction, to));
    }
}
