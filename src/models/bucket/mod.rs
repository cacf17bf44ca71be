//! Day buckets and the resolved period they span.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::change_event::{Category, ChangeEvent};

/// The resolved `[start, end]` range (both inclusive) rendered by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Always a Sunday
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the period, counting both ends.
    pub fn day_count(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }

    /// Offset of `date` from `start` in days, if it lies inside the period.
    pub fn day_offset(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        usize::try_from((date - self.start).num_days()).ok()
    }

    /// Zero-based week column of `date`: whole weeks elapsed since `start`.
    pub fn week_index(&self, date: NaiveDate) -> u32 {
        let days = (date - self.start).num_days().max(0);
        u32::try_from(days / 7).unwrap_or(u32::MAX)
    }
}

/// All events recorded for one calendar day, split by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u32,
    pub week_index: u32,
    pub add_events: Vec<ChangeEvent>,
    pub change_events: Vec<ChangeEvent>,
    pub delete_events: Vec<ChangeEvent>,
}

impl DayBucket {
    /// Create an empty bucket for `date`, indexed against the period start.
    pub fn empty(date: NaiveDate, period_start: NaiveDate) -> Self {
        let week_index = Period::new(period_start, date).week_index(date);
        Self {
            date,
            day_of_week: date.weekday().num_days_from_sunday(),
            week_index,
            add_events: Vec::new(),
            change_events: Vec::new(),
            delete_events: Vec::new(),
        }
    }

    pub fn events(&self, category: Category) -> &[ChangeEvent] {
        match category {
            Category::Add => &self.add_events,
            Category::Change => &self.change_events,
            Category::Delete => &self.delete_events,
        }
    }

    pub(crate) fn push(&mut self, category: Category, event: ChangeEvent) {
        match category {
            Category::Add => self.add_events.push(event),
            Category::Change => self.change_events.push(event),
            Category::Delete => self.delete_events.push(event),
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.events(category).len()
    }

    pub fn has(&self, category: Category) -> bool {
        !self.events(category).is_empty()
    }

    /// Which categories have at least one event, independent of filters.
    pub fn presence(&self) -> [bool; 3] {
        Category::ALL.map(|category| self.has(category))
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|category| self.count(*category)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_day_count_is_inclusive() {
        let period = Period::new(date(2024, 1, 7), date(2024, 1, 13));
        assert_eq!(period.day_count(), 7);
        assert_eq!(Period::new(date(2024, 1, 7), date(2024, 1, 7)).day_count(), 1);
    }

    #[test]
    fn test_period_day_offset() {
        let period = Period::new(date(2024, 1, 7), date(2024, 2, 1));
        assert_eq!(period.day_offset(date(2024, 1, 7)), Some(0));
        assert_eq!(period.day_offset(date(2024, 1, 10)), Some(3));
        assert_eq!(period.day_offset(date(2024, 2, 1)), Some(25));
        assert_eq!(period.day_offset(date(2024, 1, 6)), None);
        assert_eq!(period.day_offset(date(2024, 2, 2)), None);
    }

    #[test]
    fn test_week_index_floors_whole_weeks() {
        let period = Period::new(date(2024, 1, 7), date(2024, 3, 1));
        assert_eq!(period.week_index(date(2024, 1, 7)), 0);
        assert_eq!(period.week_index(date(2024, 1, 13)), 0);
        assert_eq!(period.week_index(date(2024, 1, 14)), 1);
        assert_eq!(period.week_index(date(2024, 1, 28)), 3);
    }

    #[test]
    fn test_empty_bucket_coordinates() {
        // 2024-01-10 is a Wednesday
        let bucket = DayBucket::empty(date(2024, 1, 10), date(2024, 1, 7));
        assert_eq!(bucket.day_of_week, 3);
        assert_eq!(bucket.week_index, 0);
        assert!(bucket.is_empty());
        assert_eq!(bucket.presence(), [false, false, false]);
    }

    #[test]
    fn test_push_routes_by_category() {
        let mut bucket = DayBucket::empty(date(2024, 1, 10), date(2024, 1, 7));
        bucket.push(Category::Add, ChangeEvent::new("2024-01-10", "add"));
        bucket.push(Category::Delete, ChangeEvent::new("2024-01-10", "delete"));
        bucket.push(Category::Delete, ChangeEvent::new("2024-01-10", "delete"));

        assert_eq!(bucket.count(Category::Add), 1);
        assert_eq!(bucket.count(Category::Change), 0);
        assert_eq!(bucket.count(Category::Delete), 2);
        assert_eq!(bucket.total(), 3);
        assert_eq!(bucket.presence(), [true, false, true]);
    }
}
