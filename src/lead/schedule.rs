//! Demo scheduling rules: bookable dates, time slots and the calendar grid.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime, Weekday};

/// Number of half-hour demo slots offered, 09:00 AM through 05:00 PM inclusive.
pub const SLOT_COUNT: usize = 17;

const FIRST_SLOT_MINUTES: u32 = 9 * 60;
const SLOT_STEP_MINUTES: u32 = 30;

/// One of the fixed demo start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOT_COUNT as u8).map(TimeSlot)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < SLOT_COUNT).then(|| TimeSlot(index as u8))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn start(&self) -> NaiveTime {
        let minutes = FIRST_SLOT_MINUTES + u32::from(self.0) * SLOT_STEP_MINUTES;
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Display label, e.g. "09:30 AM" or "01:00 PM".
    pub fn label(&self) -> String {
        self.start().format("%I:%M %p").to_string()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().find(|slot| slot.label() == label)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A date can be booked when it is today or later and falls on a weekday.
pub fn is_bookable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Long form used in the picker and confirmation, e.g. "October 17th, 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!("{} {}{}, {}", date.format("%B"), day, ordinal_suffix(day), date.year())
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// A single cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub bookable: bool,
}

/// The month currently shown by the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
    today: NaiveDate,
}

impl MonthView {
    pub fn current(today: NaiveDate) -> Self {
        Self::containing(today, today)
    }

    pub fn containing(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            first: first_of_month(date),
            today,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Months before the current one contain no bookable dates.
    pub fn can_go_back(&self) -> bool {
        self.first > first_of_month(self.today)
    }

    pub fn previous(&self) -> Option<Self> {
        if !self.can_go_back() {
            return None;
        }
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first, ..*self })
    }

    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first, ..*self })
    }

    fn last_day(&self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.checked_sub_days(Days::new(1)))
            .unwrap_or(self.first)
    }

    /// Full weeks (Sunday first) covering the month, padded with adjacent-month days.
    pub fn days(&self) -> Vec<CalendarDay> {
        let lead = u64::from(self.first.weekday().num_days_from_sunday());
        let start = self.first.checked_sub_days(Days::new(lead)).unwrap_or(self.first);
        let last = self.last_day();
        let trail = 6 - u64::from(last.weekday().num_days_from_sunday());
        let end = last.checked_add_days(Days::new(trail)).unwrap_or(last);

        start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| CalendarDay {
                date,
                in_month: date.month() == self.first.month() && date.year() == self.first.year(),
                is_today: date == self.today,
                bookable: is_bookable(date, self.today),
            })
            .collect()
    }

    pub fn weeks(&self) -> Vec<Vec<CalendarDay>> {
        self.days().chunks(7).map(|week| week.to_vec()).collect()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
