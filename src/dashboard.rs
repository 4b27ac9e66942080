//! Dashboard view over a call batch: filtering and ordering.
//!
//! Works on borrowed records and returns references, so the batch itself
//! is never reordered.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::models::{CallRecord, CallStatus};

/// Display order for the call list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recent voicemail first.
    #[default]
    Newest,
    Oldest,
    /// Longest voicemail first.
    Duration,
    /// Urgent, In Progress, Pending, New; newest first within a status.
    Priority,
}

/// Restricts the call list. Empty lists mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallFilter {
    pub statuses: Vec<CallStatus>,
    pub categories: Vec<String>,
}

impl CallFilter {
    pub fn matches(&self, call: &CallRecord) -> bool {
        let status_ok = self.statuses.is_empty() || self.statuses.contains(&call.status);
        let category_ok = self.categories.is_empty()
            || self
                .categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&call.category));
        status_ok && category_ok
    }
}

/// Filtered and ordered view of `calls`.
pub fn view<'a>(
    calls: &'a [CallRecord],
    filter: &CallFilter,
    order: SortOrder,
) -> Vec<&'a CallRecord> {
    let mut selected: Vec<&CallRecord> = calls.iter().filter(|c| filter.matches(c)).collect();

    match order {
        SortOrder::Newest => selected.sort_by_key(|c| Reverse(c.timestamp)),
        SortOrder::Oldest => selected.sort_by_key(|c| c.timestamp),
        SortOrder::Duration => selected.sort_by_key(|c| Reverse(c.duration_seconds)),
        SortOrder::Priority => selected.sort_by_key(|c| (c.status.rank(), Reverse(c.timestamp))),
    }

    selected
}

/// Distinct categories present in a batch, in first-seen order.
pub fn categories(calls: &[CallRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for call in calls {
        if !seen.contains(&call.category) {
            seen.push(call.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_batch;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_calls() -> Vec<CallRecord> {
        let now = Utc.with_ymd_and_hms(2024, 5, 14, 15, 0, 0).unwrap();
        build_batch(&mut StdRng::seed_from_u64(81), 40, now).unwrap()
    }

    #[test]
    fn default_order_is_newest_first() {
        let calls = sample_calls();
        let listed = view(&calls, &CallFilter::default(), SortOrder::default());
        assert_eq!(listed.len(), calls.len());
        assert!(listed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn oldest_and_duration_orders() {
        let calls = sample_calls();
        let oldest = view(&calls, &CallFilter::default(), SortOrder::Oldest);
        assert!(oldest.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        let longest = view(&calls, &CallFilter::default(), SortOrder::Duration);
        assert!(longest
            .windows(2)
            .all(|w| w[0].duration_seconds >= w[1].duration_seconds));
    }

    #[test]
    fn priority_puts_urgent_first() {
        let calls = sample_calls();
        let listed = view(&calls, &CallFilter::default(), SortOrder::Priority);
        assert!(listed
            .windows(2)
            .all(|w| w[0].status.rank() <= w[1].status.rank()));
    }

    #[test]
    fn status_filter() {
        let calls = sample_calls();
        let filter = CallFilter {
            statuses: vec![CallStatus::Urgent],
            ..Default::default()
        };
        let listed = view(&calls, &filter, SortOrder::Newest);
        assert!(listed.iter().all(|c| c.status == CallStatus::Urgent));
        assert_eq!(
            listed.len(),
            calls.iter().filter(|c| c.status == CallStatus::Urgent).count()
        );
    }

    #[test]
    fn category_filter_ignores_case() {
        let calls = sample_calls();
        let wanted = calls[0].category.to_lowercase();
        let filter = CallFilter {
            categories: vec![wanted.clone()],
            ..Default::default()
        };
        let listed = view(&calls, &filter, SortOrder::Newest);
        assert!(!listed.is_empty());
        assert!(listed.iter().all(|c| c.category.to_lowercase() == wanted));
    }

    #[test]
    fn view_does_not_reorder_batch() {
        let calls = sample_calls();
        let ids_before: Vec<_> = calls.iter().map(|c| c.call_id.clone()).collect();
        let _ = view(&calls, &CallFilter::default(), SortOrder::Duration);
        let ids_after: Vec<_> = calls.iter().map(|c| c.call_id.clone()).collect();
        assert_eq!(ids_before, ids_after);
    }

    #[test]
    fn categories_are_distinct() {
        let calls = sample_calls();
        let cats = categories(&calls);
        let mut deduped = cats.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(cats.len(), deduped.len());
    }
}
