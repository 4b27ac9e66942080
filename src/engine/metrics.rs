//! Summary statistics over a batch of calls.

use serde::{Deserialize, Serialize};

use crate::models::CallRecord;

/// Dashboard headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total: usize,
    pub urgent_count: usize,
    pub callbacks_needed: usize,
    pub avg_duration_minutes: f64,
}

/// Footer statistics: total time plus urgent/callback shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    pub total_duration_minutes: u64,
    pub avg_duration_minutes: f64,
    pub urgent_percentage: f64,
    pub callback_percentage: f64,
}

pub fn aggregate(calls: &[CallRecord]) -> MetricsSummary {
    let total = calls.len();
    MetricsSummary {
        total,
        urgent_count: calls.iter().filter(|c| c.is_urgent()).count(),
        callbacks_needed: calls.iter().filter(|c| c.callback_required).count(),
        avg_duration_minutes: average_minutes(total_seconds(calls), total),
    }
}

pub fn statistics(calls: &[CallRecord]) -> DashboardStatistics {
    let summary = aggregate(calls);
    let seconds = total_seconds(calls);
    DashboardStatistics {
        total_duration_minutes: seconds / 60,
        avg_duration_minutes: summary.avg_duration_minutes,
        urgent_percentage: percentage(summary.urgent_count, summary.total),
        callback_percentage: percentage(summary.callbacks_needed, summary.total),
    }
}

fn total_seconds(calls: &[CallRecord]) -> u64 {
    calls.iter().map(|c| u64::from(c.duration_seconds)).sum()
}

fn average_minutes(seconds: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round1(seconds as f64 / (count as f64 * 60.0))
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0)
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
