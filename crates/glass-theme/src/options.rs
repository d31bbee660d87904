//! Theme options — what the user picked, and what it resolves to.
//!
//! Options arrive from a store that does not agree with itself on how to
//! write a color: older entries hold decimal strings, newer ones hold the
//! color picker's numeric list, and some hold hex. [`ColorInput`] keeps the
//! value exactly as stored; [`ThemeOptions::resolve`] is the single place
//! the ambiguity is removed.
//!
//! # Keys
//!
//! | Key                | Type                    | Default                                     |
//! |--------------------|-------------------------|---------------------------------------------|
//! | `light_primary`    | `"R, G, B"`, hex, list  | `"106, 116, 211"`                           |
//! | `light_background` | string                  | `/local/frosted-glass/background-light.jpg` |
//! | `dark_primary`     | `"R, G, B"`, hex, list  | `"106, 116, 211"`                           |
//! | `dark_background`  | string                  | `/local/frosted-glass/background-dark.jpg`  |
//! | `reset`            | bool                    | `false`                                     |

use glass_color::Rgb;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::defaults::{
    DEFAULT_DARK_BACKGROUND, DEFAULT_LIGHT_BACKGROUND, DEFAULT_SEED, Mode, ThemeDefaults,
};

/// A color as it was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// Decimal triple (`"106, 116, 211"`) or hex (`"#6A74D3"`).
    Text(String),
    /// The color picker's `[R, G, B]`.
    Components(Vec<i64>),
    /// Any other shape (floats, booleans, lists of strings, tables).
    Unrecognized(Unrecognized),
}

/// A stored color of a shape no encoding covers.
///
/// Loading a file with one never fails; writing it back stores `""`, which
/// resolves the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unrecognized;

impl<'de> Deserialize<'de> for Unrecognized {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer).map(|_| Self)
    }
}

impl Serialize for Unrecognized {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("")
    }
}

impl ColorInput {
    /// Normalize to [`Rgb`]. Anything malformed becomes [`DEFAULT_SEED`].
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        let parsed = match self {
            Self::Text(text) => text.parse::<Rgb>(),
            Self::Components(values) => Rgb::from_components(values),
            Self::Unrecognized(_) => {
                tracing::debug!("color option has an unsupported shape, using default seed");
                return DEFAULT_SEED;
            }
        };
        parsed.unwrap_or_else(|err| {
            tracing::debug!(input = ?self, %err, "malformed color option, using default seed");
            DEFAULT_SEED
        })
    }
}

impl From<Rgb> for ColorInput {
    /// Stores the decimal form, which is what the store writes back.
    fn from(color: Rgb) -> Self {
        Self::Text(color.to_decimal())
    }
}

/// User options as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub light_primary: ColorInput,
    pub light_background: String,
    pub dark_primary: ColorInput,
    pub dark_background: String,
    /// One-shot: forces every value back to its default on the next
    /// generation, then clears itself.
    pub reset: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            light_primary: DEFAULT_SEED.into(),
            light_background: DEFAULT_LIGHT_BACKGROUND.to_string(),
            dark_primary: DEFAULT_SEED.into(),
            dark_background: DEFAULT_DARK_BACKGROUND.to_string(),
            reset: false,
        }
    }
}

impl ThemeOptions {
    /// Options mirroring `defaults` exactly, with the reset flag clear.
    #[must_use]
    pub fn from_defaults(defaults: &ThemeDefaults) -> Self {
        let light = defaults.mode(Mode::Light);
        let dark = defaults.mode(Mode::Dark);
        Self {
            light_primary: light.primary.into(),
            light_background: light.background.clone(),
            dark_primary: dark.primary.into(),
            dark_background: dark.background.clone(),
            reset: false,
        }
    }

    /// Resolve to canonical values. With `reset` set, every value comes from
    /// `defaults` regardless of what is stored.
    #[must_use]
    pub fn resolve(&self, defaults: &ThemeDefaults) -> ResolvedOptions {
        if self.reset {
            return ResolvedOptions::from_defaults(defaults);
        }
        ResolvedOptions {
            light: ModeSettings {
                primary: self.light_primary.to_rgb(),
                background: self.light_background.clone(),
            },
            dark: ModeSettings {
                primary: self.dark_primary.to_rgb(),
                background: self.dark_background.clone(),
            },
        }
    }

    /// Apply a pending reset to the stored values.
    ///
    /// Returns `true` if the flag was set. The options then hold the
    /// defaults with the flag cleared, so the reset does not repeat on the
    /// next load.
    pub fn take_reset(&mut self, defaults: &ThemeDefaults) -> bool {
        if !self.reset {
            return false;
        }
        *self = Self::from_defaults(defaults);
        true
    }
}

/// Canonical settings for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSettings {
    pub primary: Rgb,
    pub background: String,
}

/// Canonical settings for both modes. No encoding ambiguity left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub light: ModeSettings,
    pub dark: ModeSettings,
}

impl ResolvedOptions {
    #[must_use]
    pub fn from_defaults(defaults: &ThemeDefaults) -> Self {
        let settings = |mode: Mode| {
            let d = defaults.mode(mode);
            ModeSettings {
                primary: d.primary,
                background: d.background.clone(),
            }
        };
        Self {
            light: settings(Mode::Light),
            dark: settings(Mode::Dark),
        }
    }

    #[must_use]
    pub const fn mode(&self, mode: Mode) -> &ModeSettings {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
