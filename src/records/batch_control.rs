use crate::error::AchError;
use crate::field::{self, format_alpha, format_numeric, parse_alpha};
use crate::records::{record_type, validate_line_length};

/// Batch Control Record (Record Type 8).
///
/// Summarizes the batch: entry/addenda count, entry hash, and debit/credit
/// totals. `Batch::create` recomputes every one of these fields from the
/// entries it controls; a file read from the wire keeps whatever the
/// originator wrote so validation can compare the two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchControl {
    pub service_class_code: u32,
    pub entry_addenda_count: u32,
    pub entry_hash: u64,
    pub total_debit_entry_dollar_amount: u64,
    pub total_credit_entry_dollar_amount: u64,
    pub company_identification: String,
    pub message_authentication_code: String,
    pub odfi_identification: String,
    pub batch_number: u32,
}

impl BatchControl {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        let rt = record_type(line)?;
        if rt != "8" {
            return Err(AchError::InvalidRecordType(rt.to_string()));
        }
        Ok(BatchControl {
            service_class_code: field::parse_numeric("ServiceClassCode", &line[1..4])? as u32,
            entry_addenda_count: field::parse_numeric("EntryAddendaCount", &line[4..10])? as u32,
            entry_hash: field::parse_numeric("EntryHash", &line[10..20])?,
            total_debit_entry_dollar_amount: field::parse_numeric(
                "TotalDebitEntryDollarAmount",
                &line[20..32],
            )?,
            total_credit_entry_dollar_amount: field::parse_numeric(
                "TotalCreditEntryDollarAmount",
                &line[32..44],
            )?,
            company_identification: parse_alpha(&line[44..54]),
            message_authentication_code: parse_alpha(&line[54..73]),
            odfi_identification: line[79..87].to_string(),
            batch_number: field::parse_numeric("BatchNumber", &line[87..94])? as u32,
        })
    }

    pub fn validate(&self) -> Result<(), AchError> {
        if self.odfi_identification.len() != 8 {
            return Err(AchError::Constructor(
                "ODFIIdentification must be 8 digits".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        self.validate()?;
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('8');
        line.push_str(&format_numeric(
            "ServiceClassCode",
            self.service_class_code as u64,
            3,
        )?);
        line.push_str(&format_numeric(
            "EntryAddendaCount",
            self.entry_addenda_count as u64,
            6,
        )?);
        line.push_str(&format_numeric("EntryHash", self.entry_hash, 10)?);
        line.push_str(&format_numeric(
            "TotalDebitEntryDollarAmount",
            self.total_debit_entry_dollar_amount,
            12,
        )?);
        line.push_str(&format_numeric(
            "TotalCreditEntryDollarAmount",
            self.total_credit_entry_dollar_amount,
            12,
        )?);
        line.push_str(&format_alpha(
            "CompanyIdentification",
            &self.company_identification,
            10,
        )?);
        line.push_str(&format_alpha(
            "MessageAuthenticationCode",
            &self.message_authentication_code,
            19,
        )?);
        line.push_str(&" ".repeat(6)); // reserved
        line.push_str(&format_alpha(
            "ODFIIdentification",
            &self.odfi_identification,
            8,
        )?);
        line.push_str(&format_numeric("BatchNumber", self.batch_number as u64, 7)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock() -> BatchControl {
        BatchControl {
            service_class_code: 225,
            entry_addenda_count: 1,
            entry_hash: 23_138_010,
            total_debit_entry_dollar_amount: 250_000,
            total_credit_entry_dollar_amount: 0,
            company_identification: "231380104".to_string(),
            odfi_identification: "12104288".to_string(),
            batch_number: 1,
            ..Default::default()
        }
    }

    #[test]
    fn matches_the_literal_nacha_line_from_the_spec() {
        let bc = mock();
        let line = bc.to_line().unwrap();
        assert_eq!(
            line,
            "82250000010023138010000000250000000000000000231380104                          121042880000001"
        );
    }

    #[test]
    fn round_trips() {
        let bc = mock();
        let line = bc.to_line().unwrap();
        let parsed = BatchControl::parse(&line).unwrap();
        assert_eq!(parsed, bc);
    }

    #[test]
    fn rejects_short_odfi() {
        let mut bc = mock();
        bc.odfi_identification = "123".to_string();
        assert!(bc.to_line().is_err());
    }
}
