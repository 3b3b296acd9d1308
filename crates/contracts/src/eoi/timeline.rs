//! Key-date arithmetic of an Expression of Interest.
//!
//! Offsets follow the resolution-process practice the invitations are
//! issued under: submissions close 15 days after issue, the provisional
//! list follows in 10, objections close 5 days later and the final list is
//! out 10 days after that.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const SUBMISSION_WINDOW_DAYS: i64 = 15;
pub const PROVISIONAL_LIST_OFFSET_DAYS: i64 = 10;
pub const OBJECTION_WINDOW_DAYS: i64 = 5;
pub const FINAL_LIST_OFFSET_DAYS: i64 = 10;

/// Computed schedule of an invitation, all dates derived from the issue date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoiTimeline {
    pub issue_date: NaiveDate,
    pub last_submission_date: NaiveDate,
    pub provisional_list_date: NaiveDate,
    pub objection_deadline: NaiveDate,
    pub final_list_date: NaiveDate,
}

/// Derive the full schedule from the issue date
pub fn compute_timeline(issue_date: NaiveDate) -> EoiTimeline {
    let last_submission_date = issue_date + Duration::days(SUBMISSION_WINDOW_DAYS);
    let provisional_list_date = last_submission_date + Duration::days(PROVISIONAL_LIST_OFFSET_DAYS);
    let objection_deadline = provisional_list_date + Duration::days(OBJECTION_WINDOW_DAYS);
    let final_list_date = objection_deadline + Duration::days(FINAL_LIST_OFFSET_DAYS);
    EoiTimeline {
        issue_date,
        last_submission_date,
        provisional_list_date,
        objection_deadline,
        final_list_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offsets_from_issue_date() {
        let timeline = compute_timeline(date(2026, 1, 5));
        assert_eq!(timeline.last_submission_date, date(2026, 1, 20));
        assert_eq!(timeline.provisional_list_date, date(2026, 1, 30));
        assert_eq!(timeline.objection_deadline, date(2026, 2, 4));
        assert_eq!(timeline.final_list_date, date(2026, 2, 14));
    }

    #[test]
    fn test_month_and_year_rollover() {
        let timeline = compute_timeline(date(2025, 12, 20));
        assert_eq!(timeline.last_submission_date, date(2026, 1, 4));
        assert_eq!(timeline.final_list_date, date(2026, 1, 29));
    }
}
