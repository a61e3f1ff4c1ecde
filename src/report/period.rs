//! The coarse relative time window used to filter payments for reporting.

use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

/// A reporting window relative to a reference date.
///
/// `Today`, `ThisMonth` and `ThisYear` compare calendar components;
/// `ThisWeek` and `ThisQuarter` compare against the start of the window only,
/// so dates after the reference date still fall inside it. Existing reports
/// rely on that asymmetry, so it is kept.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    /// The same calendar day as the reference date.
    Today,
    /// From the most recent Sunday at or before the reference date.
    ThisWeek,
    /// The same calendar month and year as the reference date.
    #[default]
    ThisMonth,
    /// From the first day of the current three-month quarter.
    ThisQuarter,
    /// The same calendar year as the reference date.
    ThisYear,
}

impl Period {
    /// Whether `payment_date` falls inside this window relative to `now`.
    pub fn contains(&self, payment_date: Date, now: Date) -> bool {
        match self {
            Period::Today => payment_date == now,
            Period::ThisWeek => payment_date >= week_start(now),
            Period::ThisMonth => {
                payment_date.month() == now.month() && payment_date.year() == now.year()
            }
            Period::ThisQuarter => payment_date >= quarter_start(now),
            Period::ThisYear => payment_date.year() == now.year(),
        }
    }

    /// The heading label, e.g. "This Month".
    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::ThisWeek => "This Week",
            Period::ThisMonth => "This Month",
            Period::ThisQuarter => "This Quarter",
            Period::ThisYear => "This Year",
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The most recent Sunday at or before `now`. Weeks start on Sunday.
fn week_start(now: Date) -> Date {
    let days_since_sunday = i64::from(now.weekday().number_days_from_sunday());

    now.checked_sub(Duration::days(days_since_sunday))
        .unwrap_or(Date::MIN)
}

/// The first day of the quarter containing `now`. Quarters start in January,
/// April, July and October.
fn quarter_start(now: Date) -> Date {
    let quarter_month = match now.month() {
        Month::January | Month::February | Month::March => Month::January,
        Month::April | Month::May | Month::June => Month::April,
        Month::July | Month::August | Month::September => Month::July,
        Month::October | Month::November | Month::December => Month::October,
    };

    // Day 1 is valid in every month, so neither replacement can fail.
    now.replace_day(1)
        .and_then(|date| date.replace_month(quarter_month))
        .unwrap_or(Date::MIN)
}
