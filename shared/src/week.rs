//! Week grid calculations.
//!
//! All functions here are pure and take the anchor date explicitly; the UI
//! owns "today" and the current selection.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Weeks start on Sunday, matching the browser locale default the planner was built for.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

pub const DAYS_PER_WEEK: usize = 7;

/// Direction of a one-week navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekDirection {
    Previous,
    Next,
}

/// One cell of the week grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDay {
    pub day: NaiveDate,
    pub selected: bool,
}

impl WeekDay {
    /// Short weekday plus day of month, e.g. "Wed 10"
    pub fn label(&self) -> String {
        format!("{} {}", self.day.format("%a"), self.day.day())
    }
}

/// First day of the week containing `anchor`.
pub fn start_of_week(anchor: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (anchor.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    anchor - Days::new(u64::from(offset))
}

/// The 7 days of the week containing `anchor`, Sunday first.
///
/// A day counts as selected when its day of month equals the selected
/// date's day of month. Month and year are not compared.
pub fn compute_week_days(anchor: NaiveDate, selected: Option<NaiveDate>) -> [WeekDay; DAYS_PER_WEEK] {
    let start = start_of_week(anchor, DEFAULT_WEEK_START);
    std::array::from_fn(|offset| {
        let day = start + Days::new(offset as u64);
        WeekDay {
            day,
            selected: selected.is_some_and(|chosen| chosen.day() == day.day()),
        }
    })
}

pub fn shift_week(anchor: NaiveDate, direction: WeekDirection) -> NaiveDate {
    let week = Days::new(DAYS_PER_WEEK as u64);
    match direction {
        WeekDirection::Previous => anchor - week,
        WeekDirection::Next => anchor + week,
    }
}

/// Week index within its week-numbering year.
///
/// Weeks start on Sunday and week 1 is the week containing 1 January, so the
/// last days of December can already belong to week 1 of the next year.
pub fn week_number(date: NaiveDate) -> u32 {
    let start = start_of_week(date, DEFAULT_WEEK_START);
    let year_start = [date.year() + 1, date.year()]
        .into_iter()
        .filter_map(|year| NaiveDate::from_yo_opt(year, 1))
        .map(|new_year| start_of_week(new_year, DEFAULT_WEEK_START))
        .find(|first_week| *first_week <= start)
        .unwrap_or(start);

    ((start - year_start).num_days() / DAYS_PER_WEEK as i64 + 1) as u32
}

/// Header text for the grid, e.g. "2024 Week: 2"
pub fn week_title(anchor: NaiveDate) -> String {
    format!("{} Week: {}", anchor.year(), week_number(anchor))
}
