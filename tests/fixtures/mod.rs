// Test fixtures - reusable test data
// Provides consistent events and dates across the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use change_heatmap::models::ChangeEvent;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Thursday Feb 1, 2024; a one-month window starts Sunday Dec 31, 2023
    pub fn feb_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    /// Wednesday Jan 10, 2024
    pub fn jan_10_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    /// Saturday Jun 15, 2024; twelve months back lands on a Thursday
    pub fn jun_15_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// The add + delete pair on Jan 10, 2024
    pub fn add_and_delete() -> Vec<ChangeEvent> {
        vec![
            ChangeEvent::new("2024-01-10T09:15:00Z", "add").with_message("created X"),
            ChangeEvent::new("2024-01-10T16:40:00Z", "delete").with_message("removed Y"),
        ]
    }

    /// One of each category on Jan 10, 2024, deliberately out of priority order
    pub fn all_categories() -> Vec<ChangeEvent> {
        vec![
            ChangeEvent::new("2024-01-10T18:00:00Z", "delete").with_message("dropped table"),
            ChangeEvent::new("2024-01-10T12:00:00Z", "change").with_message("renamed column"),
            ChangeEvent::new("2024-01-10T08:00:00Z", "add").with_message("added index"),
        ]
    }

    /// Records the engine must ignore without failing
    pub fn malformed() -> Vec<ChangeEvent> {
        vec![
            ChangeEvent::new("not-a-timestamp", "add"),
            ChangeEvent::new("2024-01-10T09:00:00Z", "ADD"),
            ChangeEvent::new("2024-01-10T09:00:00Z", "rename"),
            ChangeEvent::new("", "delete"),
            ChangeEvent::new("1999-01-01", "change"),
        ]
    }
}
