//! One generation request, end to end.
//!
//! resolve options → compose each template → write each result → notify.
//!
//! Nothing in here fails the caller. A template that cannot be composed is
//! skipped and its previous file is left alone; a write that fails is
//! logged. The reload notification goes out once, after every write has
//! finished, and only if something was actually written.

use std::path::PathBuf;

use glass_theme::{ComposeError, TemplateVariant, ThemeComposer, ThemeDefaults, ThemeOptions};

use crate::config::ConfigError;
use crate::notify::{NotifyError, ReloadNotifier};
use crate::store::OptionsStore;
use crate::writer::{ThemeWriter, WriteError};

/// A template to compose and the file it goes to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeJob<'a> {
    pub name: &'a str,
    pub filename: &'a str,
    pub template: &'a str,
}

impl From<TemplateVariant> for ThemeJob<'static> {
    fn from(variant: TemplateVariant) -> Self {
        Self {
            name: variant.name(),
            filename: variant.filename(),
            template: variant.template(),
        }
    }
}

/// Jobs for every shipped variant.
#[must_use]
pub fn shipped_jobs() -> Vec<ThemeJob<'static>> {
    TemplateVariant::ALL.into_iter().map(ThemeJob::from).collect()
}

#[derive(Debug)]
pub enum JobOutcome {
    Written(PathBuf),
    ComposeFailed(ComposeError),
    WriteFailed(WriteError),
}

#[derive(Debug)]
pub enum NotifyOutcome {
    /// Nothing was written, so there was nothing to announce.
    Skipped,
    Sent,
    Failed(NotifyError),
}

#[derive(Debug)]
pub struct GenerationReport {
    pub jobs: Vec<(String, JobOutcome)>,
    pub notify: NotifyOutcome,
}

impl GenerationReport {
    #[must_use]
    pub fn written(&self) -> usize {
        self.jobs
            .iter()
            .filter(|(_, outcome)| matches!(outcome, JobOutcome::Written(_)))
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.jobs.len() - self.written()
    }
}

/// Compose and write every job against `options`, then notify.
pub async fn generate_themes(
    defaults: &ThemeDefaults,
    options: &ThemeOptions,
    jobs: &[ThemeJob<'_>],
    writer: &ThemeWriter,
    notifier: &dyn ReloadNotifier,
) -> GenerationReport {
    let resolved = options.resolve(defaults);
    tracing::info!(
        light = %resolved.light.primary,
        dark = %resolved.dark.primary,
        reset = options.reset,
        "generating themes"
    );
    let composer = ThemeComposer::new(defaults, &resolved);

    let mut outcomes = Vec::with_capacity(jobs.len());
    for job in jobs {
        let outcome = match composer.compose(job.template) {
            Ok(text) => match writer.write(job.filename, text).await {
                Ok(path) => JobOutcome::Written(path),
                Err(err) => {
                    tracing::error!(theme = job.name, %err, "failed to write theme");
                    JobOutcome::WriteFailed(err)
                }
            },
            Err(err) => {
                tracing::error!(theme = job.name, %err, "cannot compose theme, leaving existing file");
                JobOutcome::ComposeFailed(err)
            }
        };
        outcomes.push((job.name.to_string(), outcome));
    }

    let any_written = outcomes
        .iter()
        .any(|(_, outcome)| matches!(outcome, JobOutcome::Written(_)));
    let notify = if any_written {
        match notifier.notify_themes_changed().await {
            Ok(()) => NotifyOutcome::Sent,
            Err(err) => {
                tracing::warn!(%err, "theme reload notification failed");
                NotifyOutcome::Failed(err)
            }
        }
    } else {
        tracing::warn!("no theme written, skipping reload");
        NotifyOutcome::Skipped
    };

    GenerationReport {
        jobs: outcomes,
        notify,
    }
}

/// Load options, generate, and clear a pending reset in the store.
///
/// # Errors
///
/// Only when the options file cannot be loaded. Generation problems are in
/// the report; a failure to save the cleared reset flag is logged.
pub async fn run_generation(
    defaults: &ThemeDefaults,
    store: &OptionsStore,
    jobs: &[ThemeJob<'_>],
    writer: &ThemeWriter,
    notifier: &dyn ReloadNotifier,
) -> Result<GenerationReport, ConfigError> {
    let mut options = store.load()?;
    let report = generate_themes(defaults, &options, jobs, writer, notifier).await;

    if options.take_reset(defaults) {
        match store.save(&options) {
            Ok(()) => tracing::info!("reset applied, options restored to defaults"),
            Err(err) => tracing::error!(%err, "failed to clear reset flag in options store"),
        }
    }
    Ok(report)
}
