//! Game module
//!
//! The command engine. A [`Game`] owns the map, the player character, the
//! game-level commands and the handlers, and drives the turn loop:
//! render the current location, read a line, resolve it to a command, run it.
use std::fmt;

use log::{debug, info, warn};
use thiserror::Error;
use trek_data::GameFormatError;
use variantly::Variantly;

use crate::command::{Action, Command};
use crate::handlers::Handlers;
use crate::location::{Location, LocationId};
use crate::player::PlayerCharacter;
use crate::world::GameMap;

/// Whether the game is still being played.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum GameState {
    #[default]
    Running,
    /// Terminal: reached through a confirmed quit or [`Game::end`].
    Terminated,
}

/// Errors raised while setting up a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("a game needs at least one location")]
    NoLocations,
    #[error(transparent)]
    Format(#[from] GameFormatError),
}

type EndOfTurnCheck = Box<dyn FnMut(&mut Game)>;

/// A game in progress.
pub struct Game {
    map: GameMap,
    character: PlayerCharacter,
    commands: Vec<Command>,
    handlers: Handlers,
    state: GameState,
    turn_count: usize,
    end_of_turn: Option<EndOfTurnCheck>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("character", &self.character)
            .field("commands", &self.commands)
            .field("state", &self.state)
            .field("turn_count", &self.turn_count)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Start a game with the default terminal handlers.
    ///
    /// # Errors
    /// - [`GameError::NoLocations`] if the map has no locations
    pub fn new(map: GameMap) -> Result<Self, GameError> {
        Self::with_handlers(map, Handlers::default())
    }

    /// Start a game on the map's first location, using the given handlers.
    ///
    /// # Errors
    /// - [`GameError::NoLocations`] if the map has no locations
    pub fn with_handlers(map: GameMap, handlers: Handlers) -> Result<Self, GameError> {
        let start = map.starting_location().ok_or(GameError::NoLocations)?;
        info!(
            "starting game at '{}' ({} locations)",
            map.location(start).name(),
            map.locations().len()
        );
        Ok(Self {
            map,
            character: PlayerCharacter::new(start),
            commands: vec![Command::quit()],
            handlers,
            state: GameState::Running,
            turn_count: 0,
            end_of_turn: None,
        })
    }

    pub fn character(&self) -> &PlayerCharacter {
        &self.character
    }

    /// The location the player character is standing in.
    pub fn current_location(&self) -> &Location {
        self.map.location(self.character.current_location())
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.map.find_location(name)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    /// Number of turns started so far.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Add a game-level command, available wherever the character is.
    pub fn add_command(&mut self, command: Command) {
        debug!("adding game command '{}'", command.name());
        self.commands.push(command);
    }

    /// Every command the token would activate right now: game-level commands first,
    /// then those of the current location.
    pub fn find_commands(&self, token: &str) -> Vec<&Command> {
        self.commands
            .iter()
            .chain(self.current_location().commands())
            .filter(|command| command.matches(token))
            .collect()
    }

    /// The single command the token activates, or `None` if it matches nothing or is ambiguous.
    pub fn find_command(&self, token: &str) -> Option<&Command> {
        let matches = self.find_commands(token);
        if let [command] = matches[..] { Some(command) } else { None }
    }

    /// Resolve one line of input and run the matching command.
    ///
    /// Unknown and ambiguous input is ignored.
    pub fn process_input(&mut self, token: &str) {
        let matches = self.find_commands(token);
        let action = match matches.as_slice() {
            [] => {
                debug!("ignoring input {token:?}: no matching command");
                return;
            },
            [command] => {
                debug!("input {token:?} -> command '{}'", command.name());
                command.action().clone()
            },
            many => {
                warn!("ignoring ambiguous input {token:?}: {} commands match", many.len());
                return;
            },
        };
        self.execute(action);
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::MoveTo(to) => self.move_character_to(to),
            Action::Quit => self.quit(),
            Action::Custom(run) => run(self),
        }
    }

    pub(crate) fn move_character_to(&mut self, to: LocationId) {
        info!(
            "moving from '{}' to '{}'",
            self.current_location().name(),
            self.map.location(to).name()
        );
        self.character.move_to(to);
    }

    fn quit(&mut self) {
        let Handlers { display, input, quit, .. } = &mut self.handlers;
        if quit.confirm_quit(display.as_mut(), input.as_mut()) {
            self.save();
            self.end();
        } else {
            debug!("quit declined");
        }
    }

    /// Hook for persisting progress when a quit is confirmed. Nothing is saved yet.
    pub fn save(&mut self) {
        debug!("save requested; game saving is not supported");
    }

    /// End the game.
    pub fn end(&mut self) {
        if self.state.is_running() {
            info!("game over after {} turns", self.turn_count);
            self.state = GameState::Terminated;
        }
    }

    /// Show text through the display handler.
    pub fn display(&mut self, text: &str) {
        self.handlers.display.display(text);
    }

    /// Register a check run after every turn, e.g. to [`end`](Game::end) the game at a goal.
    ///
    /// Replaces any earlier check.
    pub fn set_end_of_turn_check(&mut self, check: impl FnMut(&mut Game) + 'static) {
        self.end_of_turn = Some(Box::new(check));
    }

    /// Play a single turn. Does nothing once the game has terminated.
    pub fn run_turn(&mut self) {
        if self.is_terminated() {
            return;
        }
        self.turn_count += 1;
        info!("================> BEGIN TURN {} <================", self.turn_count);

        let text = self.handlers.renderer.render_location(&self.map, self.current_location());
        self.display(&text);
        let input = self.handlers.input.read_input();
        self.process_input(&input);

        if self.is_running()
            && let Some(mut check) = self.end_of_turn.take()
        {
            check(self);
            // the check may have installed a replacement
            if self.end_of_turn.is_none() {
                self.end_of_turn = Some(check);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Play turns until the game terminates or the input handler runs dry.
    pub fn run(&mut self) -> GameState {
        while self.is_running() {
            if self.handlers.input.is_exhausted() {
                info!("input exhausted after {} turns", self.turn_count);
                break;
            }
            self.run_turn();
        }
        self.state
    }
}
