#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Trek **
//! Play a text adventure from a game description file.
//!
//! Usage: `trek [GAME_FILE]`. Without an argument the bundled `world.ron` is played.

use trek_engine::data_paths::data_path;
use trek_engine::style::{GameStyle, render_location_styled};
use trek_engine::terminal::TerminalInput;
use trek_engine::{Game, GameState, Handlers, TREK_VERSION, load_description, load_game_map};

use anyhow::{Context, Result};

use log::info;

use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let path = env::args_os().nth(1).map_or_else(|| data_path("world.ron"), PathBuf::from);
    info!("Start: loading game from '{}'", path.display());

    let description = load_description(&path).context("while loading game")?;
    let map = load_game_map(&description).with_context(|| format!("while building game from '{}'", path.display()))?;
    let input = TerminalInput::with_completions(map.command_words()).with_prompt(">> ".prompt_style().to_string());
    let handlers = Handlers::default()
        .input(input)
        .renderer(render_location_styled);
    let mut game = Game::with_handlers(map, handlers)?;
    info!("Game loaded successfully.");

    println!("{:^60}", format!("TREK {TREK_VERSION}").as_str().banner_style());
    println!("Type a direction to move, or \"quit\" to leave.\n");

    match game.run() {
        GameState::Terminated => println!("\nFarewell, traveller."),
        GameState::Running => println!("\n{}", "Input closed; leaving the game.".error_style()),
    }
    Ok(())
}
