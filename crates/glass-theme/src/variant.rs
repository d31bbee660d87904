//! Shipped template variants.
//!
//! Each variant is a complete theme YAML authored with the values in
//! [`crate::defaults`]. They are generated independently: one failing does
//! not stop the other.

use std::fmt;

/// A template asset and where its output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariant {
    /// Full theme: tonal palette, card styling, sidebar, and background.
    Full,
    /// Lite theme: palette and primary colors only, no blur effects.
    Lite,
}

impl TemplateVariant {
    pub const ALL: [Self; 2] = [Self::Full, Self::Lite];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Lite => "lite",
        }
    }

    /// Output filename inside the themes directory. Fixed, not derived from
    /// options.
    #[must_use]
    pub const fn filename(self) -> &'static str {
        match self {
            Self::Full => "frosted_glass.yaml",
            Self::Lite => "frosted_glass_lite.yaml",
        }
    }

    /// The embedded template text.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Full => include_str!("../templates/full.yaml"),
            Self::Lite => include_str!("../templates/lite.yaml"),
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
