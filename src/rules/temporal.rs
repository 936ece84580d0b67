//! Time-of-day and calendar date rules.

use chrono::{Datelike, NaiveDate};

use crate::grammar::Arg;
use crate::message::MessageKey;

use super::{Outcome, RuleFn, Scope, ensure};

pub(super) const RULES: &[(&str, RuleFn)] = &[
    ("timehhmmss", timehhmmss),
    ("dateyyyymmdd", dateyyyymmdd),
];

/// Dates before this year are rejected outright.
const FLOOR_YEAR: i32 = 2015;

// Seconds may reach 60 to tolerate leap seconds.
static_regex!(TIME, r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]:(?:[0-5][0-9]|60)$");
static_regex!(DATE, r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$");

/// A real calendar day written as zero-padded `YYYY-MM-DD`.
fn is_date(value: &str) -> bool {
    DATE.is_match(value)
        && NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .is_ok_and(|date| date.year() >= FLOOR_YEAR)
}

fn timehhmmss(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(TIME.is_match(scope.value()), MessageKey::Time)
}

fn dateyyyymmdd(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(is_date(scope.value()), MessageKey::Date)
}
