//! Template composition — split on the dark boundary, substitute each half
//! on its own, glue the halves back together.
//!
//! The light and dark sections were authored with the same seed, so they
//! share textual constants (`106, 116, 211`, `#6A74D3`, ...). A single pass
//! over the whole template would let a dark value overwrite a light one
//! whenever the two modes differ. Each section therefore gets its own
//! substitution list and never sees the other's.
//!
//! Within a section, replacement is literal and global, and happens in one
//! left-to-right scan. Where several entries could match at the same spot,
//! the earlier entry wins. Text produced by a replacement is never scanned
//! again, so two palettes that happen to share a hex value cannot chain.
//!
//! This matches applying the entries one after another in list order as
//! long as no two `old` values overlap partially (one starting inside the
//! other). Hex and decimal color literals never do. For overlapping
//! literals the scan takes whichever match starts first in the text.

use std::collections::HashMap;

use regex::{Captures, Regex};

use crate::defaults::ModeDefaults;
use crate::options::ModeSettings;
use crate::palette::{Level, TonalPalette};

/// Why composition produced no output.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// The template does not contain the boundary token (or the token is
    /// empty), so the two sections cannot be told apart.
    #[error("dark section boundary {boundary:?} not found in template")]
    MissingBoundary { boundary: String },

    /// The substitution set could not be compiled into a matcher. Only a
    /// set far past the regex size limit gets here; theme sets are a dozen
    /// short literals.
    #[error("invalid substitution set: {0}")]
    Matcher(#[from] regex::Error),
}

/// One literal replacement: every `old` becomes `new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub old: String,
    pub new: String,
}

impl Substitution {
    #[must_use]
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// Ordered substitutions for one section:
///
/// 1. default primary decimal → chosen primary decimal
/// 2. default background → chosen background
/// 3. per level, default palette hex → `palette` hex
///
/// The "old" side always comes from `defaults`, never from a fresh
/// computation. Entries where `old == new` are kept: they pin their text so
/// a later entry with the same `old` cannot claim it.
#[must_use]
pub fn mode_substitutions(
    defaults: &ModeDefaults,
    settings: &ModeSettings,
    palette: &TonalPalette,
) -> Vec<Substitution> {
    let mut subs = Vec::with_capacity(2 + Level::ALL.len());
    subs.push(Substitution::new(
        defaults.primary.to_decimal(),
        settings.primary.to_decimal(),
    ));
    subs.push(Substitution::new(
        defaults.background.as_str(),
        settings.background.as_str(),
    ));
    subs.extend(
        Level::ALL
            .into_iter()
            .map(|level| Substitution::new(defaults.palette.hex(level), palette.hex(level))),
    );
    subs
}

/// Split `template` at the first `boundary`.
///
/// Returns `(light, dark)` where `dark` starts with the boundary itself and
/// keeps any later recurrences verbatim.
///
/// # Errors
///
/// [`ComposeError::MissingBoundary`] if `boundary` is empty or absent.
pub fn split_sections<'a>(
    template: &'a str,
    boundary: &str,
) -> Result<(&'a str, &'a str), ComposeError> {
    let missing = || ComposeError::MissingBoundary {
        boundary: boundary.to_string(),
    };
    if boundary.is_empty() {
        return Err(missing());
    }
    let at = template.find(boundary).ok_or_else(missing)?;
    Ok(template.split_at(at))
}

/// Replace every literal `old` in `text` with its `new`, in one pass.
///
/// Entries with an empty `old` are skipped. For identical `old`s the first
/// entry wins.
///
/// # Errors
///
/// [`ComposeError::Matcher`] if the set is too large to compile.
pub fn replace_literals(text: &str, subs: &[Substitution]) -> Result<String, ComposeError> {
    let mut table: HashMap<&str, &str> = HashMap::with_capacity(subs.len());
    let mut alternatives = Vec::with_capacity(subs.len());
    for sub in subs.iter().filter(|s| !s.old.is_empty()) {
        if !table.contains_key(sub.old.as_str()) {
            table.insert(&sub.old, &sub.new);
            alternatives.push(regex::escape(&sub.old));
        }
    }
    if alternatives.is_empty() {
        return Ok(text.to_string());
    }

    // Alternation is leftmost-first, which gives list order precedence.
    let matcher = Regex::new(&alternatives.join("|"))?;
    let replaced = matcher.replace_all(text, |caps: &Captures<'_>| {
        let found = &caps[0];
        table.get(found).map_or_else(|| found.to_string(), |new| (*new).to_string())
    });
    Ok(replaced.into_owned())
}

/// Compose a theme: split at `boundary`, apply `light_subs` to the light
/// section and `dark_subs` to the dark section, concatenate light first.
///
/// # Errors
///
/// [`ComposeError::MissingBoundary`] when the template cannot be split; no
/// output is produced in that case.
pub fn compose(
    template: &str,
    boundary: &str,
    light_subs: &[Substitution],
    dark_subs: &[Substitution],
) -> Result<String, ComposeError> {
    let (light, dark) = split_sections(template, boundary)?;
    tracing::debug!(light_len = light.len(), dark_len = dark.len(), "split template");

    let mut out = replace_literals(light, light_subs)?;
    out.push_str(&replace_literals(dark, dark_subs)?);
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
