use super::DISTRIBUTION_TITLE;
use crate::filter::WorkingSet;
use serde::Serialize;

pub const DEFAULT_BINS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram of total_value.
/// `edges` has one more entry than `counts`; the last bucket is
/// closed on the right so the maximum is counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub title:  &'static str,
    pub edges:  Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bucket_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn buckets(&self) -> Vec<Bucket> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Bucket {
                lower: self.edges[i],
                upper: self.edges[i + 1],
                count,
            })
            .collect()
    }
}

pub fn histogram(set: &WorkingSet<'_>, bins: usize) -> Histogram {
    let values: Vec<f64> = set.iter().map(|r| r.total_value()).collect();
    bin_values(&values, bins)
}

/// Partition `values` into `bins` equal-width buckets over their range.
///
/// Degenerate ranges keep the bucket count:
///   - no values: buckets span [0, 1], all empty
///   - min == max: range widened to [v - 0.5, v + 0.5]
pub fn bin_values(values: &[f64], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let (lo, hi) = value_range(values);
    let width = (hi - lo) / bins as f64;

    let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
    edges.push(hi);

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = if v >= hi {
            bins - 1
        } else {
            (((v - lo) / width) as usize).min(bins - 1)
        };
        counts[idx] += 1;
    }

    Histogram {
        title: DISTRIBUTION_TITLE,
        edges,
        counts,
    }
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        return (0.0, 1.0);
    };
    let (lo, hi) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}
