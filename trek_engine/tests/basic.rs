use std::path::Path;

use serde_json::{Value, json};
use te::*;
use trek_engine as te;

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

fn scripted(transcript: &Transcript, lines: &[&str]) -> Handlers {
    Handlers::default()
        .display(transcript.clone())
        .input(ScriptedInput::new(lines.iter().copied()))
        .quit(AutoQuit)
}

#[test]
fn test_church_walkthrough() {
    let transcript = Transcript::new();
    let map = load_game_map(&church()).unwrap();
    let mut game = Game::with_handlers(map, scripted(&transcript, &["d", "w", "e", "i"])).unwrap();

    assert_eq!(game.run(), GameState::Running);
    assert_eq!(game.turn_count(), 4);
    assert_eq!(game.current_location().name(), "A Coffin");
    assert_eq!(
        transcript.lines(),
        [
            "A Church (exits: down)\nTiny place of worship",
            "The Crypt (exits: up, in, west)\nDusty tomb filled with empty sarcophagi",
            "A Cave (exits: east)\nA dark and dingy place",
            "The Crypt (exits: up, in, west)\nDusty tomb filled with empty sarcophagi",
        ]
    );
}

#[test]
fn test_coffin_is_a_dead_end() {
    let transcript = Transcript::new();
    let map = load_game_map(&church()).unwrap();
    let mut game = Game::with_handlers(map, scripted(&transcript, &["d", "i", "o", "out", "u", "quit"])).unwrap();

    assert_eq!(game.run(), GameState::Terminated);
    assert_eq!(game.current_location().name(), "A Coffin");
    assert_eq!(game.turn_count(), 6);
    assert_eq!(
        transcript.last().as_deref(),
        Some("A Coffin (exits: <none>)\nA tight squeeze and pitch dark")
    );
}

#[test]
fn test_single_room_quit() {
    let transcript = Transcript::new();
    let description = json!({"directions": [], "rooms": [{"name": "Hall", "description": ""}]});
    let mut game = create_game(&description).unwrap();
    assert_eq!(game.current_location().name(), "Hall");

    let map = load_game_map(&description).unwrap();
    game = Game::with_handlers(map, scripted(&transcript, &["quit"])).unwrap();
    assert_eq!(game.run(), GameState::Terminated);
    assert_eq!(game.turn_count(), 1);
}

#[test]
fn test_custom_renderer_and_game_command() {
    let transcript = Transcript::new();
    let map = load_game_map(&church()).unwrap();
    let handlers = scripted(&transcript, &["where", "d", "where"])
        .renderer(|_map: &GameMap, _location: &Location| String::from(">"));
    let mut game = Game::with_handlers(map, handlers).unwrap();
    game.add_command(Command::custom("where", |game| {
        let name = game.current_location().name().to_string();
        game.display(&format!("You are in {name}."));
    }));

    game.run();
    assert_eq!(
        transcript.lines(),
        [">", "You are in A Church.", ">", ">", "You are in The Crypt."]
    );
}

#[test]
fn test_goal_reached_ends_game() {
    let transcript = Transcript::new();
    let map = load_game_map(&church()).unwrap();
    let mut game = Game::with_handlers(map, scripted(&transcript, &["d", "w", "e", "w"])).unwrap();
    game.set_end_of_turn_check(|game| {
        if game.current_location().name() == "A Cave" {
            game.display("You have reached the end. Well done!");
            game.end();
        }
    });

    assert_eq!(game.run(), GameState::Terminated);
    assert_eq!(game.turn_count(), 2);
    assert_eq!(transcript.last().as_deref(), Some("You have reached the end. Well done!"));
}

#[test]
fn test_reserved_quit_direction_rejected() {
    let err = create_game(&json!({
        "directions": [{"name": "quit", "opposite": "stay"}],
        "rooms": [{"name": "A", "description": ""}]
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        GameError::Format(trek_data::GameFormatError::ReservedDirectionName { .. })
    ));
}

#[test]
fn test_bundled_world_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/world.ron");
    let game = load_game_file(&path).unwrap();
    assert_eq!(game.current_location().name(), "A Church");
    assert_eq!(game.map().locations().len(), 4);
    assert_eq!(game.map().command_words(), ["down", "east", "in", "quit", "up", "west"]);
}

#[test]
fn test_version_is_set() {
    assert!(!TREK_VERSION.is_empty());
}
