//! Diagnostic summary over a set of entries.

use serde::Serialize;
use std::collections::BTreeMap;

use super::entry::{ChangeFrequency, SitemapEntry};

/// Counts and priority aggregates for one sitemap document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total: usize,
    pub by_change_frequency: BTreeMap<ChangeFrequency, usize>,
    /// `None` when there are no entries.
    pub min_priority: Option<f64>,
    pub max_priority: Option<f64>,
    pub mean_priority: Option<f64>,
}

/// Summarize `entries`. Read-only.
pub fn summarize(entries: &[SitemapEntry]) -> StatsSummary {
    let mut summary = StatsSummary {
        total: entries.len(),
        ..StatsSummary::default()
    };

    if entries.is_empty() {
        return summary;
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for entry in entries {
        *summary
            .by_change_frequency
            .entry(entry.change_frequency)
            .or_insert(0) += 1;
        sum += entry.priority;
        min = min.min(entry.priority);
        max = max.max(entry.priority);
    }

    summary.min_priority = Some(min);
    summary.max_priority = Some(max);
    summary.mean_priority = Some(sum / entries.len() as f64);
    summary
}
