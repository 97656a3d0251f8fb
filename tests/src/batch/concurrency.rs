#![cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use bmi_common::health::{AgeGroup, ChildFloor, Measurement};
use bmi_core::batch::{self, Summary, Verdict};
use bmi_core::engine;

fn generated_input(count: usize) -> String {
    (0..count)
        .map(|i| {
            let height = 120 + (i % 80);
            let weight = 25 + (i % 90);
            let group = ["child", "adult", "senior", ""][i % 4];
            format!("{height},{weight},{group}")
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// The parallel batch agrees with evaluating each record on its own.
#[test]
fn parallel_batch_matches_sequential() {
    let records = batch::parse_records(&generated_input(2_000));
    let progress = AtomicUsize::new(0);
    let tick = || {
        progress.fetch_add(1, Ordering::Relaxed);
    };

    let evaluations = batch::evaluate_all(&records, AgeGroup::Adult, ChildFloor::default(), Some(&tick));

    assert_eq!(progress.load(Ordering::Relaxed), 2_000);
    assert_eq!(evaluations.len(), records.len());

    for (record, evaluation) in records.iter().zip(&evaluations) {
        assert_eq!(record.line, evaluation.line);
        let batch::Entry::Ready { measurement, age_group } = &record.entry else {
            panic!("line {} should be ready", record.line);
        };
        let group = age_group.unwrap_or(AgeGroup::Adult);
        let expected = engine::evaluate(measurement, group, ChildFloor::default()).unwrap();
        assert_eq!(
            evaluation.verdict,
            Verdict::Evaluated {
                age_group: group,
                result: expected
            }
        );
    }

    let summary = Summary::from_evaluations(&evaluations);
    assert_eq!(summary.total(), 2_000);
    assert_eq!(summary.failed, 0);
}

/// The engine holds no shared state, so threads never see each other's work.
#[test]
fn engine_is_reentrant_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let m = Measurement::new(150.0 + i as f64 * 5.0, 60.0);
                (0..1_000)
                    .map(|_| engine::compute_bmi(&m).unwrap())
                    .collect::<Vec<f64>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let values = handle.join().unwrap();
        let expected = engine::compute_bmi(&Measurement::new(150.0 + i as f64 * 5.0, 60.0)).unwrap();
        assert!(values.iter().all(|v| *v == expected));
    }
}
