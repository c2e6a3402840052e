use crate::error::AchError;
use crate::field::{self, format_alpha, format_numeric, parse_alpha};
use crate::records::{record_type, validate_line_length};

/// Entry Detail Record (Record Type 6).
///
/// Carries the details of one individual transaction within a batch. The
/// receiving DFI's check digit, the entry's addenda-record-indicator, and
/// the 15-digit trace number are all re-derived by `Batch::create` rather
/// than trusted from the caller, except when the Reader populates them from
/// an incoming file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDetail {
    pub transaction_code: u32,
    /// 8-digit routing prefix of the receiving DFI (no check digit).
    pub rdfi_identification: String,
    pub check_digit: String,
    pub dfi_account_number: String,
    /// Integer cents.
    pub amount: u64,
    pub identification_number: String,
    pub individual_name: String,
    pub discretionary_data: String,
    /// 0 or 1.
    pub addenda_record_indicator: u8,
    /// 15-digit trace number: 8-digit ODFI prefix + 7-digit sequence.
    pub trace_number: String,
}

impl EntryDetail {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        let rt = record_type(line)?;
        if rt != "6" {
            return Err(AchError::InvalidRecordType(rt.to_string()));
        }
        Ok(EntryDetail {
            transaction_code: field::parse_numeric("TransactionCode", &line[1..3])? as u32,
            rdfi_identification: line[3..11].to_string(),
            check_digit: line[11..12].to_string(),
            dfi_account_number: parse_alpha(&line[12..29]),
            amount: field::parse_numeric("Amount", &line[29..39])?,
            identification_number: parse_alpha(&line[39..54]),
            individual_name: parse_alpha(&line[54..76]),
            discretionary_data: parse_alpha(&line[76..78]),
            addenda_record_indicator: field::parse_numeric("AddendaRecordIndicator", &line[78..79])?
                as u8,
            trace_number: line[79..94].to_string(),
        })
    }

    /// Set the receiving DFI from a full 9-digit routing number, deriving
    /// the 8-digit RDFI identification and check digit. Mirrors the
    /// original source's `entry.SetRDFI(routing)` convenience setter.
    pub fn set_rdfi(&mut self, routing: &str) -> Result<(), AchError> {
        field::validate_routing_number(routing)?;
        self.rdfi_identification = routing[..8].to_string();
        self.check_digit = routing[8..9].to_string();
        Ok(())
    }

    /// Set the 15-digit trace number from the batch's ODFI identification
    /// and a 1-based sequence number within the batch.
    pub fn set_trace_number(&mut self, odfi_identification: &str, sequence: u32) {
        self.trace_number = format!("{odfi_identification:0>8}{sequence:07}");
    }

    /// Convenience alias used by CCD/CTX/MTE/IAT mock data: the
    /// `IndividualName` field doubles as "receiving company name".
    pub fn set_receiving_company(&mut self, name: &str) {
        self.individual_name = name.to_string();
    }

    /// Store a check serial number (ARC/BOC/POP) in the identification
    /// number field.
    pub fn set_check_serial_number(&mut self, serial: &str) {
        self.identification_number = serial.to_string();
    }

    /// Store the original trace number (MTE/POS reversal linkage) in the
    /// identification number field.
    pub fn set_original_trace_number(&mut self, trace: &str) {
        self.identification_number = trace.to_string();
    }

    pub fn validate(&self) -> Result<(), AchError> {
        if self.rdfi_identification.len() != 8 {
            return Err(AchError::Constructor(
                "RDFIIdentification must be 8 digits".to_string(),
            ));
        }
        let routing = format!("{}{}", self.rdfi_identification, self.check_digit);
        field::validate_routing_number(&routing)?;
        if self.trace_number.len() != 15 {
            return Err(AchError::Constructor(
                "TraceNumber must be 15 digits".to_string(),
            ));
        }
        if self.addenda_record_indicator > 1 {
            return Err(AchError::Constructor(
                "AddendaRecordIndicator must be 0 or 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        self.validate()?;
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('6');
        line.push_str(&format_numeric(
            "TransactionCode",
            self.transaction_code as u64,
            2,
        )?);
        line.push_str(&format_alpha(
            "RDFIIdentification",
            &self.rdfi_identification,
            8,
        )?);
        line.push_str(&format_alpha("CheckDigit", &self.check_digit, 1)?);
        line.push_str(&format_alpha(
            "DFIAccountNumber",
            &self.dfi_account_number,
            17,
        )?);
        line.push_str(&format_numeric("Amount", self.amount, 10)?);
        line.push_str(&format_alpha(
            "IdentificationNumber",
            &self.identification_number,
            15,
        )?);
        line.push_str(&format_alpha("IndividualName", &self.individual_name, 22)?);
        line.push_str(&format_alpha(
            "DiscretionaryData",
            &self.discretionary_data,
            2,
        )?);
        line.push_str(&format_numeric(
            "AddendaRecordIndicator",
            self.addenda_record_indicator as u64,
            1,
        )?);
        line.push_str(&format_alpha("TraceNumber", &self.trace_number, 15)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock() -> EntryDetail {
        let mut e = EntryDetail {
            transaction_code: 27,
            dfi_account_number: "12345678".to_string(),
            amount: 250_000,
            individual_name: "ABC Company".to_string(),
            ..Default::default()
        };
        e.set_rdfi("231380104").unwrap();
        e.set_check_serial_number("123879654");
        e.set_trace_number("12104288", 1);
        e
    }

    #[test]
    fn matches_the_literal_nacha_line_from_the_spec() {
        let e = mock();
        let line = e.to_line().unwrap();
        assert_eq!(
            line,
            "62723138010412345678         0000250000123879654      ABC Company             0121042880000001"
        );
    }

    #[test]
    fn round_trips() {
        let e = mock();
        let line = e.to_line().unwrap();
        let parsed = EntryDetail::parse(&line).unwrap();
        assert_eq!(parsed.amount, 250_000);
        assert_eq!(parsed.rdfi_identification, "23138010");
    }

    #[test]
    fn set_rdfi_rejects_bad_check_digit() {
        let mut e = EntryDetail::default();
        assert!(e.set_rdfi("231380105").is_err());
    }
}
