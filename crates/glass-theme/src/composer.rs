//! Theme assembly — resolved options in, finished theme text out.
//!
//! [`ThemeComposer`] computes both palettes and both substitution lists
//! once, then composes as many templates as needed against them.

use crate::compose::{ComposeError, Substitution, compose, mode_substitutions};
use crate::defaults::{Mode, ThemeDefaults};
use crate::options::ResolvedOptions;
use crate::palette::{TonalPalette, generate_palette};
use crate::variant::TemplateVariant;

#[derive(Debug, Clone)]
pub struct ThemeComposer<'a> {
    defaults: &'a ThemeDefaults,
    light_palette: TonalPalette,
    dark_palette: TonalPalette,
    light_subs: Vec<Substitution>,
    dark_subs: Vec<Substitution>,
}

impl<'a> ThemeComposer<'a> {
    #[must_use]
    pub fn new(defaults: &'a ThemeDefaults, resolved: &ResolvedOptions) -> Self {
        let light_palette = generate_palette(resolved.light.primary);
        let dark_palette = generate_palette(resolved.dark.primary);
        let light_subs =
            mode_substitutions(defaults.mode(Mode::Light), &resolved.light, &light_palette);
        let dark_subs = mode_substitutions(defaults.mode(Mode::Dark), &resolved.dark, &dark_palette);
        Self {
            defaults,
            light_palette,
            dark_palette,
            light_subs,
            dark_subs,
        }
    }

    #[must_use]
    pub const fn palette(&self, mode: Mode) -> &TonalPalette {
        match mode {
            Mode::Light => &self.light_palette,
            Mode::Dark => &self.dark_palette,
        }
    }

    #[must_use]
    pub fn substitutions(&self, mode: Mode) -> &[Substitution] {
        match mode {
            Mode::Light => &self.light_subs,
            Mode::Dark => &self.dark_subs,
        }
    }

    /// Compose arbitrary template text.
    ///
    /// # Errors
    ///
    /// See [`compose`].
    pub fn compose(&self, template: &str) -> Result<String, ComposeError> {
        compose(
            template,
            self.defaults.boundary(),
            &self.light_subs,
            &self.dark_subs,
        )
    }

    /// Compose one of the shipped variants.
    ///
    /// # Errors
    ///
    /// See [`compose`].
    pub fn compose_variant(&self, variant: TemplateVariant) -> Result<String, ComposeError> {
        self.compose(variant.template())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
