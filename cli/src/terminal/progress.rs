use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Progress bar for a batch of `len` records. Hidden when output is quiet.
pub fn batch_bar(len: usize, q_level: u8) -> anyhow::Result<ProgressBar> {
    if q_level > 0 {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template("{spinner:.blue} [{bar:32.green/black}] {pos}/{len} {msg}")?
        .tick_strings(TICKS)
        .progress_chars("█▓░");

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
