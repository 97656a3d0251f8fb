//! Parallel evaluation of many measurements.
//!
//! Input is plain text, one `height,weight[,age group]` record per line.
//! Blank lines and lines starting with `#` are ignored. A bad line becomes a
//! failed entry and never aborts the rest of the batch.

use std::collections::BTreeMap;

use bmi_common::error::{EngineError, InputError};
use bmi_common::health::{AgeGroup, BmiCategory, BmiResult, ChildFloor, Measurement};
use rayon::prelude::*;
use tracing::debug;

use crate::engine;

/// Content of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Height or weight left empty.
    Skipped,
    Invalid(InputError),
    Ready {
        measurement: Measurement,
        /// Falls back to the batch default when absent.
        age_group: Option<AgeGroup>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based line number in the source text.
    pub line: usize,
    pub entry: Entry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Skipped,
    Failed(EngineError),
    Evaluated {
        age_group: AgeGroup,
        result: BmiResult,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub line: usize,
    pub verdict: Verdict,
}

/// Counts per outcome over a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub by_category: BTreeMap<BmiCategory, usize>,
    pub unclassified: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_evaluations(evaluations: &[Evaluation]) -> Self {
        let mut summary = Summary::default();
        for evaluation in evaluations {
            match &evaluation.verdict {
                Verdict::Skipped => summary.skipped += 1,
                Verdict::Failed(_) => summary.failed += 1,
                Verdict::Evaluated { result, .. } => match result.category {
                    Some(category) => *summary.by_category.entry(category).or_default() += 1,
                    None => summary.unclassified += 1,
                },
            }
        }
        summary
    }

    pub fn evaluated(&self) -> usize {
        self.by_category.values().sum::<usize>() + self.unclassified
    }

    pub fn total(&self) -> usize {
        self.evaluated() + self.skipped + self.failed
    }
}

pub fn parse_records(text: &str) -> Vec<Record> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line_str: &str = line.trim();
            if line_str.is_empty() || line_str.starts_with('#') {
                return None;
            }
            Some(Record {
                line: idx + 1,
                entry: parse_entry(line_str),
            })
        })
        .collect()
}

fn parse_entry(line: &str) -> Entry {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 2 || fields.len() > 3 {
        return Entry::Invalid(InputError::MalformedRecord(fields.len()));
    }

    let age_group: Option<AgeGroup> = match fields.get(2).filter(|raw| !raw.is_empty()) {
        Some(raw) => match raw.parse::<AgeGroup>() {
            Ok(group) => Some(group),
            Err(e) => return Entry::Invalid(e),
        },
        None => None,
    };

    match Measurement::from_input(fields[0], fields[1]) {
        Ok(Some(measurement)) => Entry::Ready {
            measurement,
            age_group,
        },
        Ok(None) => Entry::Skipped,
        Err(e) => Entry::Invalid(e),
    }
}

/// Evaluates every record on the rayon pool. Output order matches input order.
///
/// `on_progress` is invoked once per finished record, from worker threads.
pub fn evaluate_all(
    records: &[Record],
    default_group: AgeGroup,
    child_floor: ChildFloor,
    on_progress: Option<&(dyn Fn() + Sync)>,
) -> Vec<Evaluation> {
    debug!(records = records.len(), %default_group, "starting batch evaluation");

    let evaluations: Vec<Evaluation> = records
        .par_iter()
        .map(|record| {
            let verdict: Verdict = evaluate_entry(&record.entry, default_group, child_floor);
            if let Some(callback) = on_progress {
                callback();
            }
            Evaluation {
                line: record.line,
                verdict,
            }
        })
        .collect();

    debug!("{} records evaluated", evaluations.len());
    evaluations
}

fn evaluate_entry(entry: &Entry, default_group: AgeGroup, child_floor: ChildFloor) -> Verdict {
    match entry {
        Entry::Skipped => Verdict::Skipped,
        Entry::Invalid(e) => Verdict::Failed(EngineError::Input(e.clone())),
        Entry::Ready {
            measurement,
            age_group,
        } => {
            let age_group: AgeGroup = age_group.unwrap_or(default_group);
            match engine::evaluate(measurement, age_group, child_floor) {
                Ok(result) => Verdict::Evaluated { age_group, result },
                Err(e) => Verdict::Failed(e),
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
