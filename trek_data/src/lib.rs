//! Shared data model for trek game descriptions.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{GameFormatError, check_direction_pair, parse_game_def, validate_game};
