//! Calendar month grid and due-date bucketing.
//!
//! # Responsibility
//! - Lay out a display month as a Sunday-first 7-column grid.
//! - Bucket projected tasks into the day cell their due date falls on.
//!
//! # Invariants
//! - The grid covers whole weeks: leading/trailing days of the adjacent
//!   months pad the first and last row.
//! - Day membership is decided on the UTC calendar day of `due_date`;
//!   tasks without a due date appear in no bucket.
//! - Bucket order is projection order.

use crate::view::projector::TaskWithCategory;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How many tasks a day cell shows before reporting overflow.
pub const DEFAULT_DAY_TASK_CAP: usize = 3;

/// A display month (year + 1-based month).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

/// Calendar input failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidMonth { year: i32, month: u32 },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid calendar month: year={year} month={month}")
            }
        }
    }
}

impl Error for CalendarError {}

impl MonthRef {
    /// Creates a month reference; `month` is 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CalendarError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month navigation: the month `delta` steps away, wrapping years.
    pub fn shifted(&self, delta: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: index.div_euclid(12),
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn first_day(&self) -> NaiveDate {
        // Month is range-checked at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month validated on construction")
    }

    fn last_day(&self) -> NaiveDate {
        self.shifted(1)
            .first_day()
            .pred_opt()
            .expect("month start has a predecessor")
    }
}

/// One cell of the rendered month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the adjacent-month padding days.
    pub in_month: bool,
    /// Full bucket for this day, in projection order.
    pub tasks: Vec<TaskWithCategory>,
}

impl DayCell {
    /// The slice of the bucket a capped display shows.
    pub fn visible_tasks(&self, cap: usize) -> &[TaskWithCategory] {
        &self.tasks[..self.tasks.len().min(cap)]
    }

    /// How many tasks a capped display hides ("+N more").
    pub fn overflow(&self, cap: usize) -> usize {
        self.tasks.len().saturating_sub(cap)
    }
}

/// Partitions `items` into the day cells of the displayed month.
///
/// The returned grid always starts on a Sunday and ends on a Saturday, so
/// its length is a multiple of 7.
pub fn month_grid(month: MonthRef, items: &[TaskWithCategory]) -> Vec<DayCell> {
    let first = month.first_day();
    let last = month.last_day();
    let lead = first.weekday().num_days_from_sunday() as u64;
    let tail = 6 - last.weekday().num_days_from_sunday() as u64;
    let start = first - Days::new(lead);
    let end = last + Days::new(tail);

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| DayCell {
            date,
            in_month: month.contains(date),
            tasks: items
                .iter()
                .filter(|item| due_day(item) == Some(date))
                .cloned()
                .collect(),
        })
        .collect()
}

/// The UTC calendar day a task is due on, if any.
pub fn due_day(item: &TaskWithCategory) -> Option<NaiveDate> {
    item.task
        .due_date
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|at| at.date_naive())
}
