//! Aggregation windows.
//!
//! A [`PeriodComparison`] pairs the current window with an earlier comparison
//! window ("this month vs last month"). Both bounds are inclusive.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::error::DashboardError;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeWindow {
    /// Creates a window covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidPeriod` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DashboardError> {
        if start > end {
            return Err(DashboardError::InvalidPeriod(format!(
                "window start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The calendar month containing `date`.
    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        let start = month_start(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// `count` consecutive calendar months ending with the month of
    /// `last`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidPeriod` if `count` is zero or the
    /// range runs before the earliest representable date.
    pub fn trailing_months(last: NaiveDate, count: u32) -> Result<Vec<Self>, DashboardError> {
        if count == 0 {
            return Err(DashboardError::InvalidPeriod(
                "at least one month is required".to_string(),
            ));
        }

        let last_start = month_start(last);
        (0..count)
            .rev()
            .map(|back| {
                last_start
                    .checked_sub_months(Months::new(back))
                    .map(Self::month_of)
                    .ok_or_else(|| {
                        DashboardError::InvalidPeriod(format!(
                            "{count} months before {last} is out of range"
                        ))
                    })
            })
            .collect()
    }

    /// First day of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the given date falls within this window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Current window plus the earlier window it is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodComparison {
    current: TimeWindow,
    comparison: TimeWindow,
}

impl PeriodComparison {
    /// Pairs two windows.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidPeriod` unless the comparison window
    /// ends strictly before the current window starts.
    pub fn new(current: TimeWindow, comparison: TimeWindow) -> Result<Self, DashboardError> {
        if comparison.end >= current.start {
            return Err(DashboardError::InvalidPeriod(format!(
                "comparison window ends {} which is not before current window start {}",
                comparison.end, current.start
            )));
        }
        Ok(Self {
            current,
            comparison,
        })
    }

    /// The month containing `today` compared with the previous month.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidPeriod` if `today` is in the earliest
    /// representable month.
    pub fn month_over_month(today: NaiveDate) -> Result<Self, DashboardError> {
        let current = TimeWindow::month_of(today);
        let previous_day = current.start.pred_opt().ok_or_else(|| {
            DashboardError::InvalidPeriod(format!("no month precedes {}", current.start))
        })?;
        Self::new(current, TimeWindow::month_of(previous_day))
    }

    /// The window being reported on.
    #[must_use]
    pub const fn current(&self) -> TimeWindow {
        self.current
    }

    /// The window used for percentage change.
    #[must_use]
    pub const fn comparison(&self) -> TimeWindow {
        self.comparison
    }
}
