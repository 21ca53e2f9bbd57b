#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Trek: a small engine for location-based text adventures.
//!
//! A game is a map of locations joined by exits in paired directions. Every exit
//! registers a movement command on its origin; the [`Game`] reads one line per
//! turn and runs the single command it names.

pub const TREK_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod direction;
pub mod game;
pub mod handlers;
pub mod loader;
pub mod location;
pub mod player;
pub mod style;
pub mod terminal;
pub mod world;

// Re-exports for convenience
pub use command::{Action, Command, CommandFn};
pub use direction::{Direction, DirectionId};
pub use game::{Game, GameError, GameState};
pub use handlers::{
    AutoQuit, ConfirmQuit, DisplayHandler, Handlers, InputHandler, LocationRenderer, QuitHandler, ScriptedInput,
    Transcript, render_location,
};
pub use loader::{build_game_map, create_game, load_description, load_game_file, load_game_map};
pub use location::{Exit, Location, LocationId};
pub use player::PlayerCharacter;
pub use world::{GameMap, StandardDirections};
