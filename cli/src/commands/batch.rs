use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use bmi_common::config::Config;
use bmi_common::health::{AgeGroup, BmiCategory};
use bmi_common::success;
use bmi_core::batch::{self, Evaluation, Record, Summary, Verdict};
use bmi_core::i18n::Catalog;
use colored::*;
use indicatif::ProgressBar;
use tracing::{info_span, warn};

use crate::mprint;
use crate::terminal::{colors, format, print, progress};

pub fn batch(file: Option<PathBuf>, age_group: AgeGroup, cfg: &Config) -> anyhow::Result<()> {
    let text: String = read_input(file.as_ref())?;
    let records: Vec<Record> = batch::parse_records(&text);

    if records.is_empty() {
        warn!("no records found in input");
        return Ok(());
    }

    let span = info_span!("batch", records = records.len());
    let guard = span.enter();

    let start_time: Instant = Instant::now();
    let pb: ProgressBar = progress::batch_bar(records.len(), cfg.quiet)?;
    let tick = || pb.inc(1);
    let evaluations: Vec<Evaluation> =
        batch::evaluate_all(&records, age_group, cfg.child_floor, Some(&tick));
    pb.finish_and_clear();

    drop(guard);

    let catalog = Catalog::new(cfg.locale);
    print::header(catalog.text("results.title"), cfg.quiet);
    for evaluation in &evaluations {
        print_evaluation(&catalog, evaluation);
    }

    let summary = Summary::from_evaluations(&evaluations);
    print_summary(&catalog, &summary, cfg);
    success!(
        "{} of {} records evaluated in {:.2}s",
        summary.evaluated(),
        summary.total(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read records from stdin")?;
            Ok(text)
        }
    }
}

fn print_evaluation(catalog: &Catalog, evaluation: &Evaluation) {
    let line: ColoredString = format!("#{:<4}", evaluation.line).color(colors::ACCENT);
    let detail: String = match &evaluation.verdict {
        Verdict::Evaluated { age_group, result } => format!(
            "{}  {} {}",
            format!("{:>7}", format::bmi_value(result.value)).bold(),
            format::status(catalog, result.category),
            format!("({})", catalog.age_group(*age_group)).color(colors::MUTED)
        ),
        Verdict::Skipped => catalog.text("batch.skipped").color(colors::MUTED).to_string(),
        Verdict::Failed(e) => e.to_string().red().to_string(),
    };
    print::print_status(format!("{line} {detail}"));
}

fn print_summary(catalog: &Catalog, summary: &Summary, cfg: &Config) {
    if !cfg.shows_decorations() {
        return;
    }

    mprint!();
    print::fat_separator();
    let mut rows: Vec<(String, ColoredString)> = BmiCategory::ALL
        .iter()
        .map(|category| {
            let count: usize = summary.by_category.get(category).copied().unwrap_or(0);
            (
                catalog.status(Some(*category)).to_string(),
                count.to_string().color(format::category_color(Some(*category))),
            )
        })
        .collect();
    rows.push((
        catalog.status(None).to_string(),
        summary.unclassified.to_string().color(colors::UNCLASSIFIED),
    ));
    rows.push((
        catalog.text("batch.skipped").to_string(),
        summary.skipped.to_string().color(colors::MUTED),
    ));
    rows.push((
        catalog.text("batch.failed").to_string(),
        summary.failed.to_string().red(),
    ));

    print::as_tree_one_level(rows);
}
