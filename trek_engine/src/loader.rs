//! Loader utilities for building a [`GameMap`] from a declarative game description.
//!
//! A description is checked by `trek_data` before anything is wired, so a
//! malformed description never produces a partial map. Descriptions can be
//! read from JSON, RON or TOML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use serde_json::Value;
use trek_data::{GameDef, GameFormatError, parse_game_def, validate_game};

use crate::direction::DirectionId;
use crate::game::{Game, GameError};
use crate::handlers::Handlers;
use crate::location::LocationId;
use crate::world::GameMap;

/// Validate a typed description and wire it into a map.
///
/// Rooms keep their order, so the first room becomes the starting location.
///
/// # Errors
/// Returns the first [`GameFormatError`] found; nothing is built in that case.
pub fn build_game_map(def: &GameDef) -> Result<GameMap, GameFormatError> {
    validate_game(def)?;

    let mut map = GameMap::new();
    let mut directions: HashMap<&str, DirectionId> = HashMap::new();
    for pair in &def.directions {
        let (name, opposite) = map.add_direction_pair(pair.name.as_str(), pair.opposite.as_str())?;
        directions.insert(&pair.name, name);
        directions.insert(&pair.opposite, opposite);
    }
    info!("{} directions added to map", map.directions().len());

    let mut rooms: HashMap<&str, LocationId> = HashMap::new();
    let mut origins = Vec::with_capacity(def.rooms.len());
    for room in &def.rooms {
        let id = map.add_location(room.name.as_str(), room.description.as_str())?;
        rooms.insert(&room.name, id);
        origins.push(id);
    }
    info!("{} rooms added to map", map.locations().len());

    let mut exit_count = 0;
    for (room, from) in def.rooms.iter().zip(origins) {
        for exit in &room.exits {
            let to = *rooms.get(exit.to.as_str()).ok_or_else(|| GameFormatError::UnknownExitRoom {
                to: exit.to.clone(),
                from: room.name.clone(),
            })?;
            let direction =
                *directions
                    .get(exit.direction.as_str())
                    .ok_or_else(|| GameFormatError::UnknownExitDirection {
                        direction: exit.direction.clone(),
                        from: room.name.clone(),
                    })?;
            if exit.one_way {
                map.add_one_way_exit(from, direction, to);
                exit_count += 1;
            } else {
                map.add_exit(from, direction, to);
                exit_count += 2;
            }
        }
    }
    info!("{exit_count} exits added to map");

    Ok(map)
}

/// Check an untyped description and build its map.
///
/// # Errors
/// Returns the first [`GameFormatError`] found in the description.
pub fn load_game_map(description: &Value) -> Result<GameMap, GameFormatError> {
    let def = parse_game_def(description)?;
    build_game_map(&def)
}

/// Build a game from an untyped description, with the default handlers.
///
/// # Errors
/// - [`GameError::Format`] if the description is malformed
pub fn create_game(description: &Value) -> Result<Game, GameError> {
    create_game_with_handlers(description, Handlers::default())
}

/// Build a game from an untyped description, with the given handlers.
///
/// # Errors
/// - [`GameError::Format`] if the description is malformed
pub fn create_game_with_handlers(description: &Value, handlers: Handlers) -> Result<Game, GameError> {
    let map = load_game_map(description)?;
    Game::with_handlers(map, handlers)
}

/// Read a description file into an untyped value. The format follows the
/// extension: `.json`, `.ron` or `.toml`.
///
/// RON files must spell rooms and exits as maps (`{"name": "A Cave", ...}`),
/// since struct syntax carries no field names into the untyped value.
///
/// # Errors
/// If the file cannot be read or parsed, or has an unsupported extension.
pub fn load_description(path: &Path) -> Result<Value> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    let text = fs::read_to_string(path).with_context(|| format!("reading game description from '{}'", path.display()))?;
    let value: Value = match extension {
        "json" => serde_json::from_str(&text)
            .with_context(|| format!("parsing game description JSON from '{}'", path.display()))?,
        "ron" => ron::from_str(&text).with_context(|| format!("parsing game description RON from '{}'", path.display()))?,
        "toml" => {
            toml::from_str(&text).with_context(|| format!("parsing game description TOML from '{}'", path.display()))?
        },
        other => bail!("unsupported game description format '{other}' for '{}'", path.display()),
    };
    info!("read game description from '{}'", path.display());
    Ok(value)
}

/// Read, check and build a game from a description file, with the default handlers.
///
/// # Errors
/// If the file cannot be loaded or describes an invalid game.
pub fn load_game_file(path: &Path) -> Result<Game> {
    load_game_file_with_handlers(path, Handlers::default())
}

/// Read, check and build a game from a description file, with the given handlers.
///
/// # Errors
/// If the file cannot be loaded or describes an invalid game.
pub fn load_game_file_with_handlers(path: &Path, handlers: Handlers) -> Result<Game> {
    let description = load_description(path)?;
    create_game_with_handlers(&description, handlers)
        .with_context(|| format!("while building game from '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::Builder;
    use trek_data::{DirectionDef, ExitDef, RoomDef};

    fn church() -> Value {
        json!({
            "directions": [
                {"name": "up", "opposite": "down"},
                {"name": "in", "opposite": "out"},
                {"name": "west", "opposite": "east"}
            ],
            "rooms": [
                {"name": "A Church", "description": "Tiny place of worship",
                 "exits": [{"to": "The Crypt", "direction": "down"}]},
                {"name": "The Crypt", "description": "Dusty tomb filled with empty sarcophagi",
                 "exits": [
                     {"to": "A Coffin", "direction": "in", "one_way": true},
                     {"to": "A Cave", "direction": "west"}
                 ]},
                {"name": "A Coffin", "description": "A tight squeeze and pitch dark"},
                {"name": "A Cave", "description": "A dark and dingy place"}
            ]
        })
    }

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn one_way_round_trip() {
        let map = load_game_map(&json!({
            "directions": [{"name": "up", "opposite": "down"}],
            "rooms": [
                {"name": "A", "description": "d", "exits": [{"to": "B", "direction": "down", "one_way": true}]},
                {"name": "B", "description": "d2"}
            ]
        }))
        .unwrap();
        assert_eq!(map.find_location("A").unwrap().exits().len(), 1);
        assert_eq!(map.find_location("B").unwrap().exits().len(), 0);
    }

    #[test]
    fn every_room_is_found_with_its_description() {
        let description = church();
        let map = load_game_map(&description).unwrap();
        for room in description["rooms"].as_array().unwrap() {
            let location = map.find_location(room["name"].as_str().unwrap()).unwrap();
            assert_eq!(location.description(), room["description"].as_str().unwrap());
        }
        assert_eq!(map.locations()[0].name(), "A Church");
    }

    #[test]
    fn two_way_exits_wire_the_opposite_direction() {
        let map = load_game_map(&church()).unwrap();
        let crypt = map.find_location("The Crypt").unwrap();
        let names: Vec<_> = crypt.commands().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["up", "in", "west"]);
        let cave = map.find_location("A Cave").unwrap();
        assert_eq!(cave.commands()[0].name(), "east");
        assert!(map.find_location("A Coffin").unwrap().exits().is_empty());
    }

    #[test]
    fn duplicate_direction_is_reported() {
        let err = load_game_map(&json!({
            "directions": [
                {"name": "east", "opposite": "west"},
                {"name": "east", "opposite": "sideways"}
            ],
            "rooms": [{"name": "A", "description": ""}]
        }))
        .unwrap_err();
        assert_eq!(err, GameFormatError::DuplicateDirectionName { name: "east".into() });
    }

    #[test]
    fn unknown_exit_room_names_both_rooms() {
        let err = load_game_map(&json!({
            "directions": [{"name": "up", "opposite": "down"}],
            "rooms": [{"name": "A", "description": "", "exits": [{"to": "Nowhere", "direction": "up"}]}]
        }))
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Nowhere"), "{message}");
        assert!(message.contains("'A'"), "{message}");
    }

    #[test]
    fn typed_definitions_are_validated_before_wiring() {
        let def = GameDef {
            directions: vec![DirectionDef::new("up", "down")],
            rooms: vec![RoomDef::new("A", "").with_exit(ExitDef::two_way("A", "sideways"))],
        };
        assert!(matches!(
            build_game_map(&def),
            Err(GameFormatError::UnknownExitDirection { .. })
        ));
    }

    #[test]
    fn create_game_reports_format_errors() {
        let err = create_game(&json!({"directions": []})).unwrap_err();
        assert!(matches!(err, GameError::Format(GameFormatError::MissingRooms)));
    }

    #[test]
    fn loads_json_file() {
        let file = write_temp(".json", &church().to_string());
        let game = load_game_file(file.path()).unwrap();
        assert_eq!(game.current_location().name(), "A Church");
    }

    #[test]
    fn loads_toml_file() {
        let file = write_temp(
            ".toml",
            r#"
directions = [{ name = "up", opposite = "down" }]

[[rooms]]
name = "A"
description = "d"
exits = [{ to = "B", direction = "down", one_way = true }]

[[rooms]]
name = "B"
description = "d2"
"#,
        );
        let description = load_description(file.path()).unwrap();
        let map = load_game_map(&description).unwrap();
        assert_eq!(map.locations().len(), 2);
        assert_eq!(map.find_location("A").unwrap().exits().len(), 1);
    }

    #[test]
    fn loads_ron_file() {
        let file = write_temp(
            ".ron",
            r#"{
    "directions": [{"name": "west", "opposite": "east"}],
    "rooms": [
        {"name": "A", "description": "", "exits": [{"to": "B", "direction": "west"}]},
        {"name": "B", "description": "far away"},
    ],
}"#,
        );
        let description = load_description(file.path()).unwrap();
        let map = load_game_map(&description).unwrap();
        assert_eq!(map.find_location("B").unwrap().commands()[0].name(), "east");
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = write_temp(".yaml", "rooms: []");
        let err = load_description(file.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported"), "{err}");
    }

    #[test]
    fn missing_file_has_context() {
        let err = load_game_file(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("definitely/not/here.json"));
    }
}
