//! Command module
//!
//! A command is something the player can type: a name, optional synonyms, and the
//! action it triggers. Commands match input tokens literally; there is no parsing.
use std::fmt;
use std::rc::Rc;

use trek_data::{QUIT_COMMAND, QUIT_SYNONYM};
use variantly::Variantly;

use crate::direction::Direction;
use crate::game::Game;
use crate::location::LocationId;

/// Behaviour bound to a user-defined command. Any fixed context it needs is captured by the closure.
pub type CommandFn = Rc<dyn Fn(&mut Game)>;

/// What happens when a command runs.
#[derive(Clone, Variantly)]
pub enum Action {
    /// Move the player character to the location.
    MoveTo(LocationId),
    /// Ask the quit handler whether to end the game.
    Quit,
    Custom(CommandFn),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::MoveTo(id) => f.debug_tuple("MoveTo").field(id).finish(),
            Action::Quit => f.write_str("Quit"),
            Action::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A command which can be given by the player, by name or by any of its synonyms.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    synonyms: Vec<String>,
    action: Action,
}

impl Command {
    pub fn new(name: impl Into<String>, action: Action) -> Self {
        Self {
            name: name.into(),
            synonyms: Vec::new(),
            action,
        }
    }

    /// Create a command running an arbitrary closure against the game.
    pub fn custom(name: impl Into<String>, run: impl Fn(&mut Game) + 'static) -> Self {
        Self::new(name, Action::Custom(Rc::new(run)))
    }

    /// Add an alternative input which also activates the command.
    #[must_use]
    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        let synonym = synonym.into();
        if !self.synonyms.contains(&synonym) {
            self.synonyms.push(synonym);
        }
        self
    }

    /// The built-in "quit"/"q" command every game starts with.
    pub(crate) fn quit() -> Self {
        Self::new(QUIT_COMMAND, Action::Quit).with_synonym(QUIT_SYNONYM)
    }

    /// Movement command registered for each exit: the direction's full name, its first letter as synonym.
    pub(crate) fn movement(direction: &Direction, to: LocationId) -> Self {
        let command = Self::new(direction.name(), Action::MoveTo(to));
        match direction.synonym() {
            Some(synonym) => command.with_synonym(synonym),
            None => command,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// True if the token is exactly this command's name or one of its synonyms (case-sensitive).
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.synonyms.iter().any(|s| s == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::DirectionId;

    #[test]
    fn matches_name_and_synonyms_exactly() {
        let cmd = Command::new("look", Action::Quit).with_synonym("l").with_synonym("examine");
        assert!(cmd.matches("look"));
        assert!(cmd.matches("l"));
        assert!(cmd.matches("examine"));
        assert!(!cmd.matches("Look"));
        assert!(!cmd.matches("loo"));
        assert!(!cmd.matches(" look"));
    }

    #[test]
    fn duplicate_synonyms_are_kept_once() {
        let cmd = Command::new("north", Action::Quit).with_synonym("n").with_synonym("n");
        assert_eq!(cmd.synonyms(), ["n"]);
    }

    #[test]
    fn builtin_quit() {
        let quit = Command::quit();
        assert_eq!(quit.name(), "quit");
        assert!(quit.matches("q"));
        assert!(quit.action().is_quit());
    }

    #[test]
    fn movement_command_uses_direction_name_and_initial() {
        let north = Direction::paired(DirectionId(0), "north", DirectionId(1));
        let cmd = Command::movement(&north, LocationId(4));
        assert_eq!(cmd.name(), "north");
        assert_eq!(cmd.synonyms(), ["n"]);
        assert_eq!(cmd.action().clone().unwrap_move_to(), LocationId(4));
    }

    #[test]
    fn custom_action_debug_is_opaque() {
        let cmd = Command::custom("xyzzy", |_game| {});
        assert_eq!(format!("{:?}", cmd.action()), "Custom(..)");
        assert!(cmd.action().is_custom());
    }
}
