//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait applies ANSI styling via the `colored` crate.
//! Implementations for `&str` and `String` are provided so string literals can
//! be styled directly.

use colored::{ColoredString, Colorize};

use crate::handlers::exit_list;
use crate::location::Location;
use crate::world::GameMap;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn location_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn banner_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn location_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn banner_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn location_titlebar_style(&self) -> ColoredString {
        self.as_str().location_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}

/// Colored variant of [`render_location`](crate::handlers::render_location), used by the `trek` binary.
///
/// Produces the same text as the plain renderer once ANSI codes are stripped.
pub fn render_location_styled(map: &GameMap, location: &Location) -> String {
    let mut text = format!(
        "{} (exits: {})",
        location.name().location_titlebar_style(),
        exit_list(map, location).exit_style()
    );
    if !location.description().is_empty() {
        text.push('\n');
        text.push_str(&location.description().description_style().to_string());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::render_location;

    #[test]
    fn styled_render_matches_plain_without_color() {
        colored::control::set_override(false);
        let mut map = GameMap::new();
        let dirs = map.add_standard_directions().unwrap();
        let church = map.add_location("A Church", "Tiny place of worship").unwrap();
        let crypt = map.add_location("The Crypt", "").unwrap();
        map.add_exit(church, dirs.down, crypt);

        for id in [church, crypt] {
            let location = map.location(id);
            assert_eq!(render_location_styled(&map, location), render_location(&map, location));
        }
        colored::control::unset_override();
    }
}
