//! Baked-in defaults — the values the template assets were authored with.
//!
//! Composition works by replacing these default values with the user's
//! values, so the defaults double as the "old" side of every substitution.
//! The default palettes are computed once, here, and threaded through
//! explicitly; nothing recomputes them per call.

use glass_color::Rgb;

use crate::palette::{TonalPalette, generate_palette};

/// The seed every template was authored with, and the fallback for any
/// unparseable color.
pub const DEFAULT_SEED: Rgb = Rgb::new(106, 116, 211);

/// Background the light section was authored with.
pub const DEFAULT_LIGHT_BACKGROUND: &str = "/local/frosted-glass/background-light.jpg";

/// Background the dark section was authored with.
pub const DEFAULT_DARK_BACKGROUND: &str = "/local/frosted-glass/background-dark.jpg";

/// Marks the start of the dark section. Everything before it is light.
pub const DARK_BOUNDARY: &str = "\n    dark:\n";

/// Light or dark half of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Authored values for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeDefaults {
    pub primary: Rgb,
    pub background: String,
    /// `generate_palette(primary)`, computed at construction.
    pub palette: TonalPalette,
}

impl ModeDefaults {
    #[must_use]
    pub fn new(primary: Rgb, background: impl Into<String>) -> Self {
        Self {
            primary,
            background: background.into(),
            palette: generate_palette(primary),
        }
    }
}

/// Immutable composition configuration: authored values for both modes
/// plus the section boundary.
///
/// Light and dark are independent; nothing assumes their seeds are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDefaults {
    light: ModeDefaults,
    dark: ModeDefaults,
    boundary: String,
}

impl ThemeDefaults {
    #[must_use]
    pub fn new(light: ModeDefaults, dark: ModeDefaults, boundary: impl Into<String>) -> Self {
        Self {
            light,
            dark,
            boundary: boundary.into(),
        }
    }

    #[must_use]
    pub const fn mode(&self, mode: Mode) -> &ModeDefaults {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }
}

impl Default for ThemeDefaults {
    /// The values shipped template assets were authored with.
    fn default() -> Self {
        Self::new(
            ModeDefaults::new(DEFAULT_SEED, DEFAULT_LIGHT_BACKGROUND),
            ModeDefaults::new(DEFAULT_SEED, DEFAULT_DARK_BACKGROUND),
            DARK_BOUNDARY,
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Level;

    #[test]
    fn default_palettes_come_from_seed() {
        let d = ThemeDefaults::default();
        assert_eq!(d.mode(Mode::Light).palette, generate_palette(DEFAULT_SEED));
        assert_eq!(d.mode(Mode::Dark).palette, generate_palette(DEFAULT_SEED));
        assert_eq!(d.mode(Mode::Light).palette.hex(Level::L50), "#6A74D3");
    }

    #[test]
    fn modes_are_independent() {
        let d = ThemeDefaults::new(
            ModeDefaults::new(Rgb::new(1, 2, 3), "a.jpg"),
            ModeDefaults::new(Rgb::new(200, 100, 0), "b.jpg"),
            "--dark--",
        );
        assert_eq!(d.mode(Mode::Light).background, "a.jpg");
        assert_eq!(d.mode(Mode::Dark).primary, Rgb::new(200, 100, 0));
        assert_ne!(d.mode(Mode::Light).palette, d.mode(Mode::Dark).palette);
        assert_eq!(d.boundary(), "--dark--");
    }

    #[test]
    fn mode_names() {
        assert_eq!(Mode::Light.name(), "light");
        assert_eq!(Mode::Dark.name(), "dark");
    }
}
