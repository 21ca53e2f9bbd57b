//! Pluggable handlers.
//!
//! A [`Game`](crate::Game) talks to the outside world only through four roles:
//! showing text, reading a line of input, turning a location into text, and
//! confirming a quit. Each role is a one-method trait, implemented for plain
//! closures as well, and the chosen implementations travel into the game in a
//! [`Handlers`] value.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::location::Location;
use crate::terminal::{TerminalDisplay, TerminalInput};
use crate::world::GameMap;

/// Shows text to the player.
pub trait DisplayHandler {
    fn display(&mut self, text: &str);
}

impl<F: FnMut(&str)> DisplayHandler for F {
    fn display(&mut self, text: &str) {
        self(text);
    }
}

/// Produces the next line typed by the player. May block.
pub trait InputHandler {
    fn read_input(&mut self) -> String;

    /// True once no further input will ever arrive (end of stdin, end of a script).
    fn is_exhausted(&self) -> bool {
        false
    }
}

impl<F: FnMut() -> String> InputHandler for F {
    fn read_input(&mut self) -> String {
        self()
    }
}

/// Turns a location into displayable text.
pub trait LocationRenderer {
    fn render_location(&self, map: &GameMap, location: &Location) -> String;
}

impl<F: Fn(&GameMap, &Location) -> String> LocationRenderer for F {
    fn render_location(&self, map: &GameMap, location: &Location) -> String {
        self(map, location)
    }
}

/// Decides whether a quit request should end the game. It must not end anything itself.
pub trait QuitHandler {
    fn confirm_quit(&mut self, display: &mut dyn DisplayHandler, input: &mut dyn InputHandler) -> bool;
}

impl<F: FnMut(&mut dyn DisplayHandler, &mut dyn InputHandler) -> bool> QuitHandler for F {
    fn confirm_quit(&mut self, display: &mut dyn DisplayHandler, input: &mut dyn InputHandler) -> bool {
        self(display, input)
    }
}

/// Default renderer: the name and exit direction names, then the description if there is one.
///
/// ```text
/// The Crypt (exits: up, in, west)
/// Dusty tomb filled with empty sarcophagi
/// ```
pub fn render_location(map: &GameMap, location: &Location) -> String {
    let mut text = format!("{} (exits: {})", location.name(), exit_list(map, location));
    if !location.description().is_empty() {
        text.push('\n');
        text.push_str(location.description());
    }
    text
}

/// Comma-separated exit direction names in the order the exits were added, or `<none>`.
pub fn exit_list(map: &GameMap, location: &Location) -> String {
    if location.exits().is_empty() {
        return "<none>".to_string();
    }
    location
        .exits()
        .iter()
        .map(|exit| map.direction(exit.direction).name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Default quit handler: asks, and accepts "y" or "yes".
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfirmQuit;

impl QuitHandler for ConfirmQuit {
    fn confirm_quit(&mut self, display: &mut dyn DisplayHandler, input: &mut dyn InputHandler) -> bool {
        display.display("Are you sure you want to quit?");
        let answer = input.read_input();
        debug!("quit confirmation answer: {answer:?}");
        matches!(answer.as_str(), "y" | "yes")
    }
}

/// Quit handler that never asks.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoQuit;

impl QuitHandler for AutoQuit {
    fn confirm_quit(&mut self, _display: &mut dyn DisplayHandler, _input: &mut dyn InputHandler) -> bool {
        true
    }
}

/// Input replayed from a fixed list of lines, for tests and scripted play-throughs.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputHandler for ScriptedInput {
    /// Returns the next scripted line, or an empty line once the script has run out.
    fn read_input(&mut self) -> String {
        self.lines.pop_front().unwrap_or_default()
    }

    fn is_exhausted(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Display handler that records everything shown, for embedding and tests.
///
/// Clones share the same transcript.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }
}

impl DisplayHandler for Transcript {
    fn display(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

/// The four handler slots a game is configured with.
pub struct Handlers {
    pub(crate) display: Box<dyn DisplayHandler>,
    pub(crate) input: Box<dyn InputHandler>,
    pub(crate) renderer: Box<dyn LocationRenderer>,
    pub(crate) quit: Box<dyn QuitHandler>,
}

impl Default for Handlers {
    /// Terminal display and input, the plain renderer, and a y/yes quit prompt.
    fn default() -> Self {
        Self {
            display: Box::new(TerminalDisplay::default()),
            input: Box::new(TerminalInput::default()),
            renderer: Box::new(render_location),
            quit: Box::new(ConfirmQuit),
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers").finish_non_exhaustive()
    }
}

impl Handlers {
    #[must_use]
    pub fn display(mut self, handler: impl DisplayHandler + 'static) -> Self {
        self.display = Box::new(handler);
        self
    }

    #[must_use]
    pub fn input(mut self, handler: impl InputHandler + 'static) -> Self {
        self.input = Box::new(handler);
        self
    }

    #[must_use]
    pub fn renderer(mut self, handler: impl LocationRenderer + 'static) -> Self {
        self.renderer = Box::new(handler);
        self
    }

    #[must_use]
    pub fn quit(mut self, handler: impl QuitHandler + 'static) -> Self {
        self.quit = Box::new(handler);
        self
    }
}
