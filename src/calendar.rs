/*
 * ==========================================================================
 * FNTOUR - A guided tour of function contracts
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the FNTOUR project.
 *
 * FNTOUR is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

/*
 * --------------------------------------------------------------------------
 * Calendar Day-Count Lookup
 * --------------------------------------------------------------------------
 * Reports how many days a month has in a given year, using the Gregorian
 * leap-year rule. When the caller omits the year, the current local year
 * is read from the system clock.
 * --------------------------------------------------------------------------
 */

use chrono::{Datelike, Local};

use crate::error::{Result, TourError};

/// Returns the current local calendar year.
///
/// # Returns
/// The year component of `chrono::Local::now()`.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Gregorian leap-year rule.
///
/// A year is a leap year when it is divisible by 4 and not by 100, or when
/// it is divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Looks up the number of days in `month` of `year`.
///
/// # Parameters
/// - `month`: month number, 1 (January) through 12 (December)
/// - `year`: any year; only consulted for February
///
/// # Errors
/// `E_MONTH` when `month` is outside `1..=12`.
pub fn days_in_month(month: u32, year: i32) -> Result<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        other => Err(TourError::invalid_month(other)),
    }
}

/// Builds the textual day-count report for `month` of `year`.
///
/// # Returns
/// A line such as `Month 7 of 2022 has 31 days`.
pub fn report(month: u32, year: i32) -> Result<String> {
    let days = days_in_month(month, year)?;
    Ok(format!("Month {} of {} has {} days", month, year, days))
}

/// Reports the day count, defaulting the year to the current one.
pub fn print_days(month: u32, year: Option<i32>) -> Result<String> {
    print_days_or(month, year, current_year)
}

/// Reports the day count, defaulting the year through `fallback`.
///
/// `fallback` is only called when `year` is `None`.
pub fn print_days_or<F>(month: u32, year: Option<i32>, fallback: F) -> Result<String>
where
    F: FnOnce() -> i32,
{
    report(month, year.unwrap_or_else(fallback))
}
