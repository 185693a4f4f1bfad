//! Summary statistics over a batch of response times.
//!
//! Every function here is pure. An empty sample set has no statistics, so the
//! entry points return `None` for it and leave the reporting to the caller.

use crate::model::{Dashboard, FrequencyEntry, QuartileKind, QuartilePoint, Summary};
use std::collections::BTreeMap;

/// Number of entries kept in `Summary::common_times`.
pub const TOP_FREQUENCIES: usize = 3;

/// Ascending copy of the samples; the input order is left untouched.
pub fn sorted_copy(samples: &[u64]) -> Vec<u64> {
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the Q1/Q2/Q3/Max landmarks.
///
/// Q1..Q3 use nearest rank on the sorted copy (`sorted[floor(r * n)]`), no
/// interpolation. Max is the true maximum of the input.
pub fn compute_quartiles(samples: &[u64]) -> Option<[QuartilePoint; 4]> {
    let max = samples.iter().copied().max()?;
    let sorted = sorted_copy(samples);
    let n = sorted.len();
    let q1 = sorted[n / 4];
    let q2 = sorted[n / 2];
    let q3 = sorted[3 * n / 4];
    Some([
        QuartilePoint::new(QuartileKind::Q1, q1),
        QuartilePoint::new(QuartileKind::Q2, q2),
        QuartilePoint::new(QuartileKind::Q3, q3),
        QuartilePoint::new(QuartileKind::Max, max),
    ])
}

/// Count occurrences of every distinct value.
///
/// Highest count first; equal counts keep ascending value order.
pub fn frequency_distribution(samples: &[u64]) -> Vec<FrequencyEntry> {
    let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
    for &v in samples {
        *counts.entry(v).or_insert(0) += 1;
    }
    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(value_ms, frequency)| FrequencyEntry {
            value_ms,
            frequency,
        })
        .collect();
    // Stable sort: ties stay in the ascending order produced by the BTreeMap.
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries
}

/// Compute min, max, rounded mean and the most common values.
pub fn compute_summary(samples: &[u64]) -> Option<Summary> {
    let min_ms = samples.iter().copied().min()?;
    let max_ms = samples.iter().copied().max()?;
    let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / samples.len() as f64;
    let mut common_times = frequency_distribution(samples);
    common_times.truncate(TOP_FREQUENCIES);
    Some(Summary {
        min_ms,
        max_ms,
        mean_ms: round_to_tenth(mean),
        common_times,
    })
}

/// Quartiles and summary bundled for the renderers.
pub fn compute_dashboard(samples: &[u64]) -> Option<Dashboard> {
    Some(Dashboard {
        quartiles: compute_quartiles(samples)?,
        summary: compute_summary(samples)?,
    })
}
