use serde::{Deserialize, Serialize};

/// Name of the built-in quit command. Directions may not claim it.
pub const QUIT_COMMAND: &str = "quit";

/// Synonym registered for the built-in quit command.
pub const QUIT_SYNONYM: &str = "q";

/// Top-level game description: the directions players may travel and the rooms they travel between.
///
/// The first room is where the player starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDef {
    #[serde(default)]
    pub directions: Vec<DirectionDef>,
    pub rooms: Vec<RoomDef>,
}

impl GameDef {
    /// Look up a room definition by its name.
    pub fn find_room(&self, name: &str) -> Option<&RoomDef> {
        self.rooms.iter().find(|room| room.name == name)
    }
}

/// A pair of mutually opposite directions, e.g. "north" / "south".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionDef {
    pub name: String,
    pub opposite: String,
}

impl DirectionDef {
    pub fn new(name: impl Into<String>, opposite: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opposite: opposite.into(),
        }
    }
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDef {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
}

impl RoomDef {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
        }
    }

    /// Append an exit, returning the room (builder style).
    #[must_use]
    pub fn with_exit(mut self, exit: ExitDef) -> Self {
        self.exits.push(exit);
        self
    }
}

/// Exit from a room. Two-way unless `one_way` is set.
///
/// `direction` may name either side of a direction pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDef {
    pub to: String,
    pub direction: String,
    #[serde(default)]
    pub one_way: bool,
}

impl ExitDef {
    pub fn two_way(to: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            direction: direction.into(),
            one_way: false,
        }
    }

    pub fn one_way(to: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            direction: direction.into(),
            one_way: true,
        }
    }
}
