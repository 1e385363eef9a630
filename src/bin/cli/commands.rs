//! CLI command implementations.

use anyhow::{bail, Context};
use console::style;

use nameshift::core::config::PRESET_NAMES;
use nameshift::{ConversionPipeline, ConversionReport, NamingPreferences};

use super::args::{ConvertArgs, InitConfigArgs};

/// Maximum number of old -> new sample pairs printed in the summary.
const SAMPLE_LIMIT: usize = 8;

fn resolve_preferences(
    config: Option<&std::path::Path>,
    preset: Option<&str>,
) -> anyhow::Result<NamingPreferences> {
    if let Some(path) = config {
        return NamingPreferences::from_json_file(path)
            .with_context(|| format!("failed to load preferences from {}", path.display()));
    }

    if let Some(name) = preset {
        return NamingPreferences::preset(name).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown preset '{name}' (available: {})",
                PRESET_NAMES.join(", ")
            )
        });
    }

    Ok(NamingPreferences::default())
}

/// Run the conversion pipeline and print a summary.
pub fn convert_command(args: ConvertArgs) -> anyhow::Result<()> {
    if !args.path.exists() {
        bail!("path does not exist: {}", args.path.display());
    }

    let preferences = resolve_preferences(args.config.as_deref(), args.preset.as_deref())?;

    println!("{}", style("Naming preferences:").bold());
    println!("  variables:  {}", style(preferences.variables).cyan());
    println!("  functions:  {}", style(preferences.functions).cyan());
    println!("  classes:    {}", style(preferences.classes).cyan());
    println!("  methods:    {}", style(preferences.methods).cyan());
    println!("  arguments:  {}", style(preferences.arguments).cyan());
    println!("  attributes: {}", style(preferences.attributes).cyan());
    println!("  constants:  {}", style(preferences.constants).cyan());
    if args.dry_run {
        println!("  {}", style("dry-run: no files will be written").yellow());
    }
    println!();

    let mut pipeline = ConversionPipeline::new(preferences)?.with_dry_run(args.dry_run);
    let report = pipeline.convert_directory(&args.path)?;

    print_report(&report, args.dry_run);
    Ok(())
}

fn print_report(report: &ConversionReport, dry_run: bool) {
    if report.total_conversions == 0 {
        println!("{}", style("No naming conversions needed").green());
    } else {
        let verb = if dry_run { "Would convert" } else { "Converted" };
        println!(
            "{}",
            style(format!(
                "{verb} {} names in {} files",
                report.total_conversions, report.files_processed
            ))
            .green()
        );

        for (old, new) in report.conversions.iter().take(SAMPLE_LIMIT) {
            println!("  {} -> {}", style(old).yellow(), style(new).green());
        }
        if report.conversions.len() > SAMPLE_LIMIT {
            println!("  ... and {} more", report.conversions.len() - SAMPLE_LIMIT);
        }
    }

    if report.files_skipped_syntax > 0 {
        println!(
            "{}",
            style(format!(
                "{} file(s) skipped: conversion would break syntax",
                report.files_skipped_syntax
            ))
            .red()
        );
    }
}

/// Write a preferences JSON file.
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    let preferences = resolve_preferences(None, args.preset.as_deref())?;

    if args.output.exists() {
        bail!("refusing to overwrite {}", args.output.display());
    }

    preferences
        .save_json_file(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Wrote preferences to {}", style(args.output.display()).green());
    Ok(())
}

/// Print the default preferences JSON to stdout.
pub fn print_default_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&NamingPreferences::default().to_json())?;
    println!("{json}");
    Ok(())
}

/// List the shipped presets with their conventions.
pub fn list_presets() -> anyhow::Result<()> {
    println!("{}", style("Available presets:").bold());
    for name in PRESET_NAMES {
        let prefs = NamingPreferences::preset(name)
            .ok_or_else(|| anyhow::anyhow!("preset table out of sync: {name}"))?;
        println!(
            "  {:16} variables={}, functions={}, classes={}",
            style(name).cyan(),
            prefs.variables,
            prefs.functions,
            prefs.classes
        );
    }
    Ok(())
}
