//! Tonal palette generation — one seed color in, eleven graded tones out.
//!
//! The seed is moved into HLS, hue and saturation are held fixed, and the
//! lightness is swept across a fixed set of targets. Level `50` is special:
//! it keeps the seed's *own* lightness so the midtone is always the seed
//! itself, whatever the seed happens to be.

use std::fmt;

use glass_color::{Hls, Rgb};

use crate::defaults::DEFAULT_SEED;

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// One step of the tonal ramp, keyed the way the theme template names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    L05,
    L10,
    L20,
    L30,
    L40,
    L50,
    L60,
    L70,
    L80,
    L90,
    L95,
}

impl Level {
    /// Every level in palette order.
    pub const ALL: [Self; 11] = [
        Self::L05,
        Self::L10,
        Self::L20,
        Self::L30,
        Self::L40,
        Self::L50,
        Self::L60,
        Self::L70,
        Self::L80,
        Self::L90,
        Self::L95,
    ];

    /// Two-digit key, e.g. `"05"` or `"95"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::L05 => "05",
            Self::L10 => "10",
            Self::L20 => "20",
            Self::L30 => "30",
            Self::L40 => "40",
            Self::L50 => "50",
            Self::L60 => "60",
            Self::L70 => "70",
            Self::L80 => "80",
            Self::L90 => "90",
            Self::L95 => "95",
        }
    }

    /// Target HLS lightness. `None` for [`Level::L50`], which uses the
    /// seed's lightness instead.
    #[must_use]
    pub const fn target_lightness(self) -> Option<f64> {
        match self {
            Self::L05 => Some(0.05),
            Self::L10 => Some(0.10),
            Self::L20 => Some(0.20),
            Self::L30 => Some(0.30),
            Self::L40 => Some(0.40),
            Self::L50 => None,
            Self::L60 => Some(0.60),
            Self::L70 => Some(0.70),
            Self::L80 => Some(0.80),
            Self::L90 => Some(0.90),
            // Not 0.95: the lightest tone sits a little closer to white.
            Self::L95 => Some(0.96),
        }
    }

    /// Look up a level by its two-digit key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.key() == key)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// TonalPalette
// ---------------------------------------------------------------------------

/// An ordered mapping from [`Level`] to color, in [`Level::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonalPalette {
    seed: Rgb,
    tones: [Rgb; 11],
}

impl TonalPalette {
    /// The seed this palette was generated from.
    #[must_use]
    pub const fn seed(&self) -> Rgb {
        self.seed
    }

    #[must_use]
    pub const fn get(&self, level: Level) -> Rgb {
        self.tones[level.index()]
    }

    /// `#RRGGBB` for one level.
    #[must_use]
    pub fn hex(&self, level: Level) -> String {
        self.get(level).to_hex()
    }

    /// Levels and colors in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, Rgb)> + '_ {
        Level::ALL.into_iter().map(|level| (level, self.get(level)))
    }

    /// `(key, hex)` pairs in palette order, ready for display or templates.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        self.iter().map(|(level, rgb)| (level.key(), rgb.to_hex())).collect()
    }

    /// Number of levels. Always 11.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tones.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Generate the tonal palette for `seed`.
///
/// Deterministic and side-effect free. Achromatic seeds produce a gray ramp.
#[must_use]
pub fn generate_palette(seed: Rgb) -> TonalPalette {
    let hls = Hls::from_rgb(seed);
    let tones = Level::ALL.map(|level| {
        let l = level.target_lightness().unwrap_or(hls.l);
        hls.with_lightness(l).to_rgb()
    });
    TonalPalette { seed, tones }
}

/// Generate a palette from a textual seed (decimal triple or hex).
///
/// Unparseable input falls back to [`DEFAULT_SEED`] instead of failing.
#[must_use]
pub fn palette_from_input(input: &str) -> TonalPalette {
    let seed = input.parse::<Rgb>().unwrap_or_else(|err| {
        tracing::debug!(input, %err, "unparseable seed color, using default");
        DEFAULT_SEED
    });
    generate_palette(seed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
