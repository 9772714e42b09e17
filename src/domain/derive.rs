// src/domain/derive.rs

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::location::Report;
use crate::domain::status::Status;

/// Reports at or after `now - RECENCY_WINDOW_HOURS` count double.
pub const RECENCY_WINDOW_HOURS: i64 = 48;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Estimates the current status of one location from its reports.
///
/// Each report votes for its own status with weight `2 / age_hours` when it
/// is inside the recency window (boundary inclusive) and `1 / age_hours`
/// otherwise. Ages are floored at one hour, so future-dated reports count as
/// one hour old. The status with the largest total wins; equal totals resolve
/// in `Status::ALL` order.
///
/// Returns `None` when there are no reports. Input order does not matter.
/// Callers must pass reports of a single location only.
pub fn derive_status<'a, I>(reports: I, now: DateTime<Utc>) -> Option<Status>
where
    I: IntoIterator<Item = &'a Report>,
{
    let cutoff = now - TimeDelta::hours(RECENCY_WINDOW_HOURS);
    let mut totals = [0.0_f64; 3];
    let mut seen = false;

    for report in reports {
        seen = true;
        totals[report.status.index()] += report_weight(report.created_at, cutoff, now);
    }

    if !seen {
        return None;
    }

    let mut best = Status::ALL[0];
    for status in Status::ALL.into_iter().skip(1) {
        if totals[status.index()] > totals[best.index()] {
            best = status;
        }
    }
    Some(best)
}

fn report_weight(created_at: DateTime<Utc>, cutoff: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_ms = (now - created_at).num_milliseconds() as f64;
    let age_hours = (age_ms / MS_PER_HOUR).max(1.0);

    if created_at >= cutoff {
        2.0 / age_hours
    } else {
        1.0 / age_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn report_at(status: Status, created_at: DateTime<Utc>) -> Report {
        Report {
            id: format!("r-{}", created_at.timestamp()),
            location_id: "loc-1".to_string(),
            status,
            note: None,
            created_at,
        }
    }

    fn hours_ago(status: Status, hours: i64) -> Report {
        report_at(status, now() - TimeDelta::hours(hours))
    }

    #[test]
    fn empty_input_has_no_status() {
        let none: Vec<Report> = Vec::new();
        assert_eq!(derive_status(&none, now()), None);
        assert_eq!(derive_status(&none, now() + TimeDelta::days(400)), None);
    }

    #[rstest]
    #[case(Status::Working, 0)]
    #[case(Status::Issues, 5)]
    #[case(Status::OutOfOrder, 2000)]
    fn single_report_wins(#[case] status: Status, #[case] age_hours: i64) {
        let reports = vec![hours_ago(status, age_hours)];
        assert_eq!(derive_status(&reports, now()), Some(status));
    }

    #[test]
    fn unanimous_recent_votes() {
        let reports = vec![
            hours_ago(Status::Working, 1),
            hours_ago(Status::Working, 2),
            hours_ago(Status::Working, 3),
        ];
        assert_eq!(derive_status(&reports, now()), Some(Status::Working));
    }

    #[test]
    fn recent_minority_overrides_old_majority() {
        let reports = vec![
            hours_ago(Status::OutOfOrder, 100),
            hours_ago(Status::OutOfOrder, 120),
            hours_ago(Status::OutOfOrder, 150),
            hours_ago(Status::Working, 1),
        ];
        assert_eq!(derive_status(&reports, now()), Some(Status::Working));
    }

    #[test]
    fn recency_dominates_regardless_of_order() {
        let fresh = hours_ago(Status::OutOfOrder, 1);
        let stale = hours_ago(Status::Working, 500);

        let forward = vec![fresh.clone(), stale.clone()];
        let backward = vec![stale, fresh];

        assert_eq!(derive_status(&forward, now()), Some(Status::OutOfOrder));
        assert_eq!(derive_status(&backward, now()), Some(Status::OutOfOrder));
    }

    #[test]
    fn every_permutation_agrees() {
        let base = [
            hours_ago(Status::Issues, 3),
            hours_ago(Status::Working, 30),
            hours_ago(Status::Working, 40),
            hours_ago(Status::OutOfOrder, 70),
        ];
        let expected = derive_status(&base, now());

        let orders = [
            [0, 1, 2, 3],
            [3, 2, 1, 0],
            [1, 3, 0, 2],
            [2, 0, 3, 1],
            [1, 0, 2, 3],
            [3, 0, 1, 2],
        ];
        for order in orders {
            let shuffled: Vec<Report> = order.iter().map(|&i| base[i].clone()).collect();
            assert_eq!(derive_status(&shuffled, now()), expected, "order {order:?}");
        }
    }

    #[test]
    fn equal_weights_resolve_in_enumeration_order() {
        let reports = vec![hours_ago(Status::Issues, 10), hours_ago(Status::Working, 10)];
        assert_eq!(derive_status(&reports, now()), Some(Status::Working));

        let reports = vec![
            hours_ago(Status::OutOfOrder, 10),
            hours_ago(Status::Issues, 10),
        ];
        assert_eq!(derive_status(&reports, now()), Some(Status::Issues));
    }

    // 2/48 for the boundary report against 1/49 + 1/50 for two old ones.
    #[test]
    fn report_exactly_at_cutoff_counts_as_recent() {
        let reports = vec![
            hours_ago(Status::Working, RECENCY_WINDOW_HOURS),
            hours_ago(Status::Issues, 49),
            hours_ago(Status::Issues, 50),
        ];
        assert_eq!(derive_status(&reports, now()), Some(Status::Working));
    }

    #[test]
    fn report_just_past_cutoff_counts_as_old() {
        let just_past = now() - TimeDelta::hours(RECENCY_WINDOW_HOURS) - TimeDelta::seconds(1);
        let reports = vec![
            report_at(Status::Working, just_past),
            hours_ago(Status::Issues, 49),
            hours_ago(Status::Issues, 50),
        ];
        assert_eq!(derive_status(&reports, now()), Some(Status::Issues));
    }

    #[test]
    fn future_reports_clamp_to_one_hour() {
        let future = report_at(Status::Issues, now() + TimeDelta::hours(5));
        let fresh = hours_ago(Status::Working, 0);

        // Both weigh 2/1; the tie goes to WORKING.
        assert_eq!(derive_status(&[future.clone(), fresh], now()), Some(Status::Working));

        let weight = report_weight(
            future.created_at,
            now() - TimeDelta::hours(RECENCY_WINDOW_HOURS),
            now(),
        );
        assert!((weight - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn density_can_outvote_a_single_recent_report() {
        let reports = vec![
            hours_ago(Status::Working, 4),
            hours_ago(Status::OutOfOrder, 5),
            hours_ago(Status::OutOfOrder, 6),
        ];
        // 2/4 = 0.5 against 2/5 + 2/6 = 0.733
        assert_eq!(derive_status(&reports, now()), Some(Status::OutOfOrder));
    }
}
