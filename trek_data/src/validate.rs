//! Validation of game descriptions.
//!
//! Descriptions arrive as untyped nested data (decoded from JSON, RON or TOML)
//! and are checked in a fixed order: top-level shape, each direction, each room
//! and its exits, then exit references. The first violation aborts the check,
//! so a `GameDef` is only ever produced from a description that is valid as a whole.

use std::collections::HashSet;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{DirectionDef, ExitDef, GameDef, QUIT_COMMAND, RoomDef};

/// Everything that can be wrong with a game description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameFormatError {
    #[error("game description must be a mapping")]
    NotAMapping,
    #[error("game description has no 'directions' list")]
    MissingDirections,
    #[error("'directions' must be a list")]
    DirectionsNotAList,
    #[error("game description has no 'rooms' list")]
    MissingRooms,
    #[error("'rooms' must be a list")]
    RoomsNotAList,
    #[error("'rooms' must contain at least one room")]
    NoRooms,

    #[error("direction #{index} must be a mapping")]
    DirectionNotAMapping { index: usize },
    #[error("direction with opposite '{opposite}' has no 'name'")]
    DirectionMissingName { opposite: String },
    #[error("direction '{name}' has no 'opposite'")]
    DirectionMissingOpposite { name: String },
    #[error("direction #{index} has neither 'name' nor 'opposite'")]
    DirectionMissingNameAndOpposite { index: usize },
    #[error("direction name {value} is not a string")]
    DirectionNameNotString { value: String },
    #[error("opposite of direction '{name}' is not a string ({value})")]
    DirectionOppositeNotString { name: String, value: String },
    #[error("direction '{name}' cannot be its own opposite")]
    DirectionIsOwnOpposite { name: String },
    #[error("duplicate direction name '{name}'")]
    DuplicateDirectionName { name: String },
    #[error("opposite '{opposite}' of direction '{name}' is already a direction")]
    DuplicateOppositeName { name: String, opposite: String },
    #[error("direction '{name}' clashes with the reserved '{}' command", QUIT_COMMAND)]
    ReservedDirectionName { name: String },

    #[error("room #{index} must be a mapping")]
    RoomNotAMapping { index: usize },
    #[error("room with description '{description}' has no 'name'")]
    RoomMissingName { description: String },
    #[error("room '{name}' has no 'description'")]
    RoomMissingDescription { name: String },
    #[error("room #{index} has neither 'name' nor 'description'")]
    RoomMissingNameAndDescription { index: usize },
    #[error("room name {value} is not a string")]
    RoomNameNotString { value: String },
    #[error("duplicate room name '{name}'")]
    DuplicateRoomName { name: String },
    #[error("description of room '{room}' is not a string")]
    RoomDescriptionNotString { room: String },
    #[error("exits of room '{room}' must be a list")]
    RoomExitsNotAList { room: String },

    #[error("exit #{index} of room '{room}' must be a mapping")]
    ExitNotAMapping { room: String, index: usize },
    #[error("exit '{direction}' of room '{room}' has no 'to'")]
    ExitMissingTo { room: String, direction: String },
    #[error("exit to '{to}' from room '{room}' has no 'direction'")]
    ExitMissingDirection { room: String, to: String },
    #[error("an exit of room '{room}' has neither 'to' nor 'direction'")]
    ExitMissingToAndDirection { room: String },
    #[error("an exit of room '{room}' has a 'to' that is not a string")]
    ExitToNotString { room: String },
    #[error("an exit of room '{room}' has a 'direction' that is not a string")]
    ExitDirectionNotString { room: String },
    #[error("an exit of room '{room}' has a 'one_way' that is not a boolean")]
    ExitOneWayNotBool { room: String },

    #[error("unknown exit room '{to}' from '{from}'")]
    UnknownExitRoom { to: String, from: String },
    #[error("unknown direction '{direction}' for exit from '{from}'")]
    UnknownExitDirection { direction: String, from: String },
}

/// Parse and validate an untyped game description.
///
/// ```
/// use serde_json::json;
/// use trek_data::parse_game_def;
///
/// let def = parse_game_def(&json!({
///     "directions": [{"name": "up", "opposite": "down"}],
///     "rooms": [
///         {"name": "A", "description": "d", "exits": [{"to": "B", "direction": "down", "one_way": true}]},
///         {"name": "B", "description": "d2"}
///     ]
/// }))
/// .unwrap();
/// assert_eq!(def.rooms.len(), 2);
/// assert!(def.rooms[0].exits[0].one_way);
/// ```
///
/// # Errors
/// Returns the first [`GameFormatError`] encountered.
pub fn parse_game_def(description: &Value) -> Result<GameDef, GameFormatError> {
    let top = description.as_object().ok_or(GameFormatError::NotAMapping)?;
    let raw_directions = top
        .get("directions")
        .ok_or(GameFormatError::MissingDirections)?
        .as_array()
        .ok_or(GameFormatError::DirectionsNotAList)?;
    let raw_rooms = top
        .get("rooms")
        .ok_or(GameFormatError::MissingRooms)?
        .as_array()
        .ok_or(GameFormatError::RoomsNotAList)?;
    if raw_rooms.is_empty() {
        return Err(GameFormatError::NoRooms);
    }

    let mut checker = Checker::default();

    let mut directions = Vec::with_capacity(raw_directions.len());
    for (index, raw) in raw_directions.iter().enumerate() {
        let direction = direction_from_value(index, raw)?;
        checker.check_direction(&direction)?;
        directions.push(direction);
    }

    let mut rooms = Vec::with_capacity(raw_rooms.len());
    for (index, raw) in raw_rooms.iter().enumerate() {
        rooms.push(room_from_value(index, raw, &mut checker)?);
    }

    for room in &rooms {
        checker.check_exit_references(room)?;
    }

    Ok(GameDef { directions, rooms })
}

/// Validate an already-typed `GameDef`, e.g. one deserialized straight from a data file.
///
/// Applies the same uniqueness and reference rules as [`parse_game_def`], in the same order.
///
/// # Errors
/// Returns the first [`GameFormatError`] encountered.
pub fn validate_game(def: &GameDef) -> Result<(), GameFormatError> {
    if def.rooms.is_empty() {
        return Err(GameFormatError::NoRooms);
    }
    let mut checker = Checker::default();
    for direction in &def.directions {
        checker.check_direction(direction)?;
    }
    for room in &def.rooms {
        checker.check_room_name(&room.name)?;
    }
    for room in &def.rooms {
        checker.check_exit_references(room)?;
    }
    Ok(())
}

/// Check a new direction pair against the direction names already in use.
///
/// `is_taken` answers whether a name is already either side of an earlier pair.
///
/// # Errors
/// - [`GameFormatError::DirectionIsOwnOpposite`] if both names are equal
/// - [`GameFormatError::DuplicateDirectionName`] / [`GameFormatError::DuplicateOppositeName`] if a name is taken
/// - [`GameFormatError::ReservedDirectionName`] if either name is the quit command
pub fn check_direction_pair(
    name: &str,
    opposite: &str,
    is_taken: impl Fn(&str) -> bool,
) -> Result<(), GameFormatError> {
    if name == opposite {
        return Err(GameFormatError::DirectionIsOwnOpposite { name: name.to_string() });
    }
    if is_taken(name) {
        return Err(GameFormatError::DuplicateDirectionName { name: name.to_string() });
    }
    if is_taken(opposite) {
        return Err(GameFormatError::DuplicateOppositeName {
            name: name.to_string(),
            opposite: opposite.to_string(),
        });
    }
    if let Some(reserved) = [name, opposite].into_iter().find(|n| *n == QUIT_COMMAND) {
        return Err(GameFormatError::ReservedDirectionName {
            name: reserved.to_string(),
        });
    }
    Ok(())
}

/// Names seen so far while walking a description.
#[derive(Debug, Default)]
struct Checker {
    // both sides of every direction pair
    direction_names: HashSet<String>,
    room_names: HashSet<String>,
}

impl Checker {
    fn check_direction(&mut self, direction: &DirectionDef) -> Result<(), GameFormatError> {
        let DirectionDef { name, opposite } = direction;
        check_direction_pair(name, opposite, |taken| self.direction_names.contains(taken))?;
        self.direction_names.insert(name.clone());
        self.direction_names.insert(opposite.clone());
        Ok(())
    }

    fn check_room_name(&mut self, name: &str) -> Result<(), GameFormatError> {
        if !self.room_names.insert(name.to_string()) {
            return Err(GameFormatError::DuplicateRoomName { name: name.to_string() });
        }
        Ok(())
    }

    fn check_exit_references(&self, room: &RoomDef) -> Result<(), GameFormatError> {
        for exit in &room.exits {
            if !self.room_names.contains(&exit.to) {
                return Err(GameFormatError::UnknownExitRoom {
                    to: exit.to.clone(),
                    from: room.name.clone(),
                });
            }
            if !self.direction_names.contains(&exit.direction) {
                return Err(GameFormatError::UnknownExitDirection {
                    direction: exit.direction.clone(),
                    from: room.name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn direction_from_value(index: usize, raw: &Value) -> Result<DirectionDef, GameFormatError> {
    let entry = raw.as_object().ok_or(GameFormatError::DirectionNotAMapping { index })?;
    let (name, opposite) = match (entry.get("name"), entry.get("opposite")) {
        (Some(name), Some(opposite)) => (name, opposite),
        (None, Some(opposite)) => {
            return Err(GameFormatError::DirectionMissingName {
                opposite: describe(opposite),
            });
        },
        (Some(name), None) => {
            return Err(GameFormatError::DirectionMissingOpposite { name: describe(name) });
        },
        (None, None) => return Err(GameFormatError::DirectionMissingNameAndOpposite { index }),
    };
    let name = name
        .as_str()
        .ok_or_else(|| GameFormatError::DirectionNameNotString { value: describe(name) })?;
    let opposite = opposite
        .as_str()
        .ok_or_else(|| GameFormatError::DirectionOppositeNotString {
            name: name.to_string(),
            value: describe(opposite),
        })?;
    Ok(DirectionDef::new(name, opposite))
}

fn room_from_value(index: usize, raw: &Value, checker: &mut Checker) -> Result<RoomDef, GameFormatError> {
    let entry = raw.as_object().ok_or(GameFormatError::RoomNotAMapping { index })?;
    let (name, description) = match (entry.get("name"), entry.get("description")) {
        (Some(name), Some(description)) => (name, description),
        (None, Some(description)) => {
            return Err(GameFormatError::RoomMissingName {
                description: describe(description),
            });
        },
        (Some(name), None) => return Err(GameFormatError::RoomMissingDescription { name: describe(name) }),
        (None, None) => return Err(GameFormatError::RoomMissingNameAndDescription { index }),
    };
    let name = name
        .as_str()
        .ok_or_else(|| GameFormatError::RoomNameNotString { value: describe(name) })?;
    checker.check_room_name(name)?;
    let description = description
        .as_str()
        .ok_or_else(|| GameFormatError::RoomDescriptionNotString { room: name.to_string() })?;

    let exits: Vec<ExitDef> = match entry.get("exits") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(raw_exits)) => raw_exits
            .iter()
            .enumerate()
            .map(|(exit_index, raw_exit)| exit_from_value(name, exit_index, raw_exit))
            .collect::<Result<_, _>>()?,
        Some(_) => return Err(GameFormatError::RoomExitsNotAList { room: name.to_string() }),
    };

    Ok(RoomDef {
        name: name.to_string(),
        description: description.to_string(),
        exits,
    })
}

fn exit_from_value(room: &str, index: usize, raw: &Value) -> Result<ExitDef, GameFormatError> {
    let entry: &Map<String, Value> = raw.as_object().ok_or_else(|| GameFormatError::ExitNotAMapping {
        room: room.to_string(),
        index,
    })?;
    let (to, direction) = match (entry.get("to"), entry.get("direction")) {
        (Some(to), Some(direction)) => (to, direction),
        (None, Some(direction)) => {
            return Err(GameFormatError::ExitMissingTo {
                room: room.to_string(),
                direction: describe(direction),
            });
        },
        (Some(to), None) => {
            return Err(GameFormatError::ExitMissingDirection {
                room: room.to_string(),
                to: describe(to),
            });
        },
        (None, None) => return Err(GameFormatError::ExitMissingToAndDirection { room: room.to_string() }),
    };
    let to = to
        .as_str()
        .ok_or_else(|| GameFormatError::ExitToNotString { room: room.to_string() })?;
    let direction = direction
        .as_str()
        .ok_or_else(|| GameFormatError::ExitDirectionNotString { room: room.to_string() })?;
    let one_way = match entry.get("one_way") {
        None => false,
        Some(value) => value
            .as_bool()
            .ok_or_else(|| GameFormatError::ExitOneWayNotBool { room: room.to_string() })?,
    };
    Ok(ExitDef {
        to: to.to_string(),
        direction: direction.to_string(),
        one_way,
    })
}

/// Render a value for an error message: strings bare, anything else as JSON.
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
