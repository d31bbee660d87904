//! # glass-theme — Frosted Glass theme generation
//!
//! Turns two seed colors and two background references into finished
//! dashboard theme files with separate light and dark sections.
//!
//! # Architecture
//!
//! ```text
//! ThemeOptions (as stored: decimal / hex / list colors, reset flag)
//!     │
//!     ▼
//! options.rs:  resolve → ResolvedOptions (canonical Rgb per mode)
//!     │
//!     ▼
//! palette.rs:  seed → 11-level HLS tonal ramp, once per mode
//!     │
//!     ▼
//! compose.rs:  split template at the dark boundary, substitute each
//!              section against ThemeDefaults (the authored values)
//!     │
//!     ▼
//! composer.rs: ThemeComposer, one per request, reused for every
//!              TemplateVariant
//! ```
//!
//! Everything here is pure: no I/O, no shared state.

pub mod compose;
pub mod composer;
pub mod defaults;
pub mod options;
pub mod palette;
pub mod variant;

pub use compose::{ComposeError, Substitution, compose};
pub use composer::ThemeComposer;
pub use defaults::{Mode, ModeDefaults, ThemeDefaults};
pub use options::{ColorInput, ModeSettings, ResolvedOptions, ThemeOptions, Unrecognized};
pub use palette::{Level, TonalPalette, generate_palette, palette_from_input};
pub use variant::TemplateVariant;
