//! Formatting and parsing of the primitive field kinds used by every NACHA
//! record: alphameric, numeric, routing number, amount, date, and time.
//!
//! Every function here is total: it either returns the value (or formatted
//! string) or a precisely-typed [`AchError`].

use crate::error::AchError;

/// Right-pad `value` with spaces to exactly `width` bytes.
///
/// Rejects control characters (`< 0x20`) and bytes above `0x7E`; does not
/// force uppercase.
pub fn format_alpha(field: &'static str, value: &str, width: usize) -> Result<String, AchError> {
    if value.len() > width {
        return Err(AchError::field_overflow(field, value, width));
    }
    for c in value.chars() {
        if (c as u32) < 0x20 || (c as u32) > 0x7E {
            return Err(AchError::invalid_character(field, value));
        }
    }
    Ok(format!("{value:<width$}"))
}

/// Right-trim trailing ASCII spaces from an alphameric field.
pub fn parse_alpha(value: &str) -> String {
    value.trim_end_matches(' ').to_string()
}

/// Left-pad `value` with zeros to exactly `width` bytes.
///
/// Rejects overflow (the decimal representation of `value` is wider than
/// `width`).
pub fn format_numeric(field: &'static str, value: u64, width: usize) -> Result<String, AchError> {
    let digits = value.to_string();
    if digits.len() > width {
        return Err(AchError::field_overflow(field, &digits, width));
    }
    Ok(format!("{value:0width$}"))
}

/// Parse a fixed-width numeric field into a `u64`. Leading zeros and
/// surrounding spaces are trimmed; an all-space field parses as zero.
pub fn parse_numeric(field: &'static str, value: &str) -> Result<u64, AchError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u64>()
        .map_err(|source| AchError::InvalidNumber { field, source })
}

/// Compute the ABA routing-number check digit over the first 8 digits.
pub fn compute_check_digit(first_eight: &[u8; 8]) -> u8 {
    const WEIGHTS: [u32; 8] = [3, 7, 1, 3, 7, 1, 3, 7];
    let sum: u32 = first_eight
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(d, w)| u32::from(d - b'0') * w)
        .sum();
    ((10 - (sum % 10)) % 10) as u8
}

/// Validate a 9-digit ABA routing number, including its trailing check
/// digit.
pub fn validate_routing_number(routing: &str) -> Result<(), AchError> {
    if routing.len() != 9 || !routing.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AchError::InvalidRoutingNumber(routing.to_string()));
    }
    let bytes = routing.as_bytes();
    let mut first_eight = [0u8; 8];
    first_eight.copy_from_slice(&bytes[..8]);
    let expected = compute_check_digit(&first_eight);
    let actual = bytes[8] - b'0';
    if expected != actual {
        return Err(AchError::InvalidRoutingNumber(routing.to_string()));
    }
    Ok(())
}

/// Format an amount (integer cents) as the 10-digit numeric field.
pub fn format_amount(value: u64) -> Result<String, AchError> {
    format_numeric("Amount", value, 10)
}

/// Validate a 6-digit `YYMMDD` date field is calendar-valid.
pub fn validate_date_yymmdd(value: &str) -> Result<(), AchError> {
    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AchError::InvalidDate(value.to_string()));
    }
    let month: u32 = value[2..4].parse().unwrap();
    let day: u32 = value[4..6].parse().unwrap();
    let year: u32 = value[0..2].parse().unwrap();
    if !(1..=12).contains(&month) {
        return Err(AchError::InvalidDate(value.to_string()));
    }
    let days_in_month = days_in_month(month, year);
    if day == 0 || day > days_in_month {
        return Err(AchError::InvalidDate(value.to_string()));
    }
    Ok(())
}

fn is_leap_year(two_digit_year: u32) -> bool {
    // NACHA YY is a two-digit year in the 2000s for all practical ACH traffic.
    let year = 2000 + two_digit_year;
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: u32, two_digit_year: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(two_digit_year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Validate a 4-digit `HHMM` time field is in range `0000`..=`2359`.
pub fn validate_time_hhmm(value: &str) -> Result<(), AchError> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AchError::InvalidTime(value.to_string()));
    }
    let hour: u32 = value[0..2].parse().unwrap();
    let minute: u32 = value[2..4].parse().unwrap();
    if hour > 23 || minute > 59 {
        return Err(AchError::InvalidTime(value.to_string()));
    }
    Ok(())
}
