//! Validators shared across record and batch types: US state/territory
//! codes, identification-number sanity checks, and the addenda-record
//! indicator/attachment consistency rule.

use crate::error::AchError;

/// USPS state and territory abbreviations, plus the armed-forces codes
/// NACHA batches commonly carry in terminal-state and receiver-state
/// fields.
const US_STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
    "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY", "PR", "VI", "GU", "AS", "MP", "AA", "AE", "AP",
];

pub fn validate_us_state(code: &str) -> Result<(), AchError> {
    if US_STATE_CODES.contains(&code) {
        Ok(())
    } else {
        Err(AchError::ValidState(code.to_string()))
    }
}

/// An identification number made entirely of spaces or zeros carries no
/// information and is rejected for entries whose SEC rules require one
/// (`SecRules::check_identification_number`).
pub fn validate_identification_number_present(value: &str) -> Result<(), AchError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '0') {
        return Err(AchError::IdentificationNumber);
    }
    Ok(())
}

/// The addenda-record indicator must agree with whether any addenda
/// records actually follow the entry.
pub fn validate_addenda_record_indicator(indicator: u8, has_addenda: bool) -> Result<(), AchError> {
    match (indicator, has_addenda) {
        (0, false) | (1, true) => Ok(()),
        _ => Err(AchError::AddendaRecordIndicator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_state() {
        assert!(validate_us_state("VA").is_ok());
    }

    #[test]
    fn rejects_unknown_state() {
        assert!(validate_us_state("ZZ").is_err());
    }

    #[test]
    fn rejects_all_zero_identification_number() {
        assert!(validate_identification_number_present("000000000").is_err());
        assert!(validate_identification_number_present("               ").is_err());
    }

    #[test]
    fn accepts_nonzero_identification_number() {
        assert!(validate_identification_number_present("123879654").is_ok());
    }

    #[test]
    fn addenda_indicator_must_match_attachment() {
        assert!(validate_addenda_record_indicator(0, false).is_ok());
        assert!(validate_addenda_record_indicator(1, true).is_ok());
        assert!(validate_addenda_record_indicator(0, true).is_err());
        assert!(validate_addenda_record_indicator(1, false).is_err());
    }
}
