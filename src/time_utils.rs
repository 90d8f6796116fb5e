// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Utc};

/// Format a UTC timestamp as "<MonthName> <Day>", e.g. "August 7".
pub fn format_month_day(date: DateTime<Utc>) -> String {
    format!("{} {}", date.format("%B"), date.day())
}
