//! The four karmic number calculations.
//!
//! Each function is pure and independent: it consumes parsed date
//! components, leans on [`reduce`] for digit folding, and returns one
//! number from the karmic vocabulary. [`calculate_all`] bundles the four
//! into a [`KarmicNumberSet`].

use super::birth_date::BirthDate;
use super::number_set::KarmicNumberSet;
use super::reduction::reduce;

/// The fixed anchor year of the Karma Portal calculation.
///
/// Deliberately a literal, not the birth year or the current year: the
/// portal is branded as "the 2025 portal" product-wide.
pub const PORTAL_ANCHOR_YEAR: i32 = 2025;

/// Spiritual Mark: the reduced destiny number offset by the birth day.
///
/// A negative offset gets a single +9 correction. That correction is not a
/// modulo: a destiny number far below the day would stay negative and pass
/// through `reduce` unchanged. Kept as-is pending product clarification.
pub fn spiritual_mark(day: i32, month: i32, year: i32) -> i32 {
    let destiny_number = reduce(day + month + reduce(year));

    let mut mark = destiny_number - day;
    if mark < 0 {
        mark += 9;
    }

    reduce(mark)
}

/// Destiny Call: digit sum of the unpadded decimal concatenation of the
/// date components, reduced.
///
/// Day 5 contributes "5", not "05", so 05/07/1990 concatenates to
/// "571990".
pub fn destiny_call(day: i32, month: i32, year: i32) -> i32 {
    let concatenated = format!("{}{}{}", day, month, year);

    let sum: i32 = concatenated
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as i32)
        .sum();

    reduce(sum)
}

/// Karma Portal: day plus month plus the fixed anchor year, reduced.
///
/// The birth year plays no part in this calculation.
pub fn karma_portal(day: i32, month: i32) -> i32 {
    reduce(day + month + PORTAL_ANCHOR_YEAR)
}

/// Karmic Inheritance: the reduced sum of four karmic challenges, each an
/// absolute difference folded through `reduce`.
pub fn karmic_inheritance(day: i32, month: i32, year: i32) -> i32 {
    let year_sum = reduce(year);

    let challenge1 = reduce((month - day).abs());
    let challenge2 = reduce((day - year_sum).abs());
    let challenge3 = reduce((challenge1 - challenge2).abs());
    let challenge4 = reduce((month - year_sum).abs());

    reduce(challenge1 + challenge2 + challenge3 + challenge4)
}

/// Parses a `DD/MM/YYYY` string and runs all four calculations.
pub fn calculate_all_from_text(
    text: &str,
) -> Result<KarmicNumberSet, crate::domain::foundation::ValidationError> {
    Ok(calculate_all(&BirthDate::parse(text)?))
}

/// Runs all four calculations for a validated birth date.
pub fn calculate_all(date: &BirthDate) -> KarmicNumberSet {
    let day = date.day() as i32;
    let month = date.month() as i32;
    let year = date.year();

    KarmicNumberSet {
        spiritual_mark: spiritual_mark(day, month, year),
        destiny_call: destiny_call(day, month, year),
        karma_portal: karma_portal(day, month),
        karmic_inheritance: karmic_inheritance(day, month, year),
    }
}
