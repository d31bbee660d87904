// SPDX-License-Identifier: MIT
//
// frosted-glass — generates the Frosted Glass dashboard theme from two
// seed colors.
//
//   glass-color → RGB parsing, formatting, HLS conversion
//   glass-theme → palettes, option resolution, template composition
//
// This binary adds the outer surface: config, the options store, atomic
// theme file writes, and the reload notification.

mod cli;
mod config;
mod generate;
mod notify;
mod store;
mod writer;

use anyhow::Context;
use clap::Parser;
use glass_theme::{TemplateVariant, ThemeDefaults, palette_from_input};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::generate::{JobOutcome, NotifyOutcome, run_generation, shipped_jobs};
use crate::store::OptionsStore;
use crate::writer::ThemeWriter;

fn init_tracing(cli: &Cli) {
    let level = cli.level().to_string().to_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("frosted_glass={level},glass_theme={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match cli.command.clone().unwrap_or_default() {
        Command::Generate => generate(&cli, false).await,
        Command::Reset => generate(&cli, true).await,
        Command::Palette { color } => {
            print_palette(&color);
            Ok(())
        }
        Command::Variants => {
            for variant in TemplateVariant::ALL {
                println!("{:<6} {}", variant.name(), variant.filename());
            }
            Ok(())
        }
    }
}

async fn generate(cli: &Cli, reset: bool) -> anyhow::Result<()> {
    let mut config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    if let Some(dir) = &cli.themes_dir {
        config.themes_dir.clone_from(dir);
    }
    tracing::debug!(?config, "effective config");

    let store = OptionsStore::new(&config.options_path);
    if reset {
        let mut options = store.load()?;
        options.reset = true;
        store
            .save(&options)
            .with_context(|| format!("requesting reset in {}", store.path().display()))?;
    }

    let defaults = ThemeDefaults::default();
    let writer = ThemeWriter::new(&config.themes_dir);
    tracing::debug!(themes_dir = %writer.themes_dir().display(), "writing themes");
    let notifier = notify::from_config(config.reload.as_ref());
    let report = run_generation(&defaults, &store, &shipped_jobs(), &writer, notifier.as_ref()).await?;

    for (name, outcome) in &report.jobs {
        match outcome {
            JobOutcome::Written(path) => println!("{name}: {}", path.display()),
            JobOutcome::ComposeFailed(err) => println!("{name}: skipped ({err})"),
            JobOutcome::WriteFailed(err) => println!("{name}: failed ({err})"),
        }
    }
    if let NotifyOutcome::Failed(err) = &report.notify {
        println!("reload: failed ({err})");
    }

    // Per-theme failures do not change the exit status.
    tracing::info!(
        written = report.written(),
        failed = report.failed(),
        notified = matches!(report.notify, NotifyOutcome::Sent),
        "generation finished"
    );
    Ok(())
}

fn print_palette(color: &str) {
    let palette = palette_from_input(color);
    println!("seed {}", palette.seed());
    for (key, hex) in palette.entries() {
        println!("palette-{key} {hex}");
    }
}
