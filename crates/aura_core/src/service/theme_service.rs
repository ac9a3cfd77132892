//! Palette application onto themeable style variables.
//!
//! # Invariants
//! - Applying a palette overwrites all four variables; nothing is blended.
//! - Applying the same palette twice is indistinguishable from once.

use crate::model::mood::Mood;

/// Style variables written by a palette, in palette order.
pub const THEME_VARIABLES: [&str; 4] = ["--color-1", "--color-2", "--color-3", "--color-4"];

/// Current values of the four themeable variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    mood: Mood,
    values: [&'static str; 4],
}

impl Theme {
    pub fn new(mood: Mood) -> Self {
        Self {
            mood,
            values: mood.palette(),
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn apply(&mut self, mood: Mood) {
        self.mood = mood;
        self.values = mood.palette();
    }

    /// `(variable, color)` pairs for the renderer.
    pub fn variables(&self) -> [(&'static str, &'static str); 4] {
        std::array::from_fn(|index| (THEME_VARIABLES[index], self.values[index]))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Mood::Aurora)
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;
    use crate::model::mood::Mood;

    #[test]
    fn apply_is_idempotent() {
        let mut once = Theme::default();
        once.apply(Mood::Sunset);

        let mut twice = Theme::default();
        twice.apply(Mood::Sunset);
        twice.apply(Mood::Sunset);

        assert_eq!(once.variables(), twice.variables());
    }

    #[test]
    fn apply_overwrites_every_variable() {
        let mut theme = Theme::new(Mood::Ocean);
        theme.apply(Mood::Cyber);
        assert_eq!(
            theme.variables(),
            [
                ("--color-1", "#fdcb6e"),
                ("--color-2", "#e84393"),
                ("--color-3", "#00cec9"),
                ("--color-4", "#d63031"),
            ]
        );
        assert_eq!(theme.mood(), Mood::Cyber);
    }
}
