use crate::error::AchError;
use crate::field::{self, format_alpha, format_numeric, parse_alpha};
use crate::records::{record_type, validate_line_length};

fn check_type_code(line: &str, expected: &str) -> Result<(), AchError> {
    let rt = record_type(line)?;
    if rt != "7" {
        return Err(AchError::InvalidRecordType(rt.to_string()));
    }
    if &line[1..3] != expected {
        return Err(AchError::AddendaTypeCode(line[1..3].to_string()));
    }
    Ok(())
}

/// Addenda Type 02: terminal info carried by POS/MTE entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda02 {
    pub reference_information_one: String,
    pub reference_information_two: String,
    pub terminal_identification_code: String,
    pub transaction_serial_number: String,
    /// MMDD
    pub transaction_date: String,
    pub authorization_code_or_expire_date: String,
    pub terminal_location: String,
    pub terminal_city: String,
    pub terminal_state: String,
    pub trace_number: String,
}

impl Addenda02 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "02")?;
        Ok(Addenda02 {
            reference_information_one: parse_alpha(&line[3..10]),
            reference_information_two: parse_alpha(&line[10..13]),
            terminal_identification_code: parse_alpha(&line[13..19]),
            transaction_serial_number: parse_alpha(&line[19..25]),
            transaction_date: line[25..29].to_string(),
            authorization_code_or_expire_date: parse_alpha(&line[29..35]),
            terminal_location: parse_alpha(&line[35..62]),
            terminal_city: parse_alpha(&line[62..77]),
            terminal_state: line[77..79].to_string(),
            trace_number: line[79..94].to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), AchError> {
        crate::validate::validate_us_state(&self.terminal_state)
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        self.validate()?;
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("02");
        line.push_str(&format_alpha(
            "ReferenceInformationOne",
            &self.reference_information_one,
            7,
        )?);
        line.push_str(&format_alpha(
            "ReferenceInformationTwo",
            &self.reference_information_two,
            3,
        )?);
        line.push_str(&format_alpha(
            "TerminalIdentificationCode",
            &self.terminal_identification_code,
            6,
        )?);
        line.push_str(&format_alpha(
            "TransactionSerialNumber",
            &self.transaction_serial_number,
            6,
        )?);
        line.push_str(&format_alpha("TransactionDate", &self.transaction_date, 4)?);
        line.push_str(&format_alpha(
            "AuthorizationCodeOrExpireDate",
            &self.authorization_code_or_expire_date,
            6,
        )?);
        line.push_str(&format_alpha(
            "TerminalLocation",
            &self.terminal_location,
            27,
        )?);
        line.push_str(&format_alpha("TerminalCity", &self.terminal_city, 15)?);
        line.push_str(&format_alpha("TerminalState", &self.terminal_state, 2)?);
        line.push_str(&format_alpha("TraceNumber", &self.trace_number, 15)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda Type 05: free-form payment-related information. Up to 9999 may
/// be attached to a single entry (CTX/CCD/ENR/etc.).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda05 {
    pub payment_related_information: String,
    pub addenda_sequence_number: u32,
    pub entry_detail_sequence_number: u32,
}

impl Addenda05 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "05")?;
        Ok(Addenda05 {
            payment_related_information: parse_alpha(&line[3..83]),
            addenda_sequence_number: field::parse_numeric("AddendaSequenceNumber", &line[83..87])?
                as u32,
            entry_detail_sequence_number: field::parse_numeric(
                "EntryDetailSequenceNumber",
                &line[87..94],
            )? as u32,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("05");
        line.push_str(&format_alpha(
            "PaymentRelatedInformation",
            &self.payment_related_information,
            80,
        )?);
        line.push_str(&format_numeric(
            "AddendaSequenceNumber",
            self.addenda_sequence_number as u64,
            4,
        )?);
        line.push_str(&format_numeric(
            "EntryDetailSequenceNumber",
            self.entry_detail_sequence_number as u64,
            7,
        )?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda Type 98: Notification of Change / Corrected data, carried by
/// COR entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda98 {
    /// e.g. "C01".
    pub change_code: String,
    pub original_trace: String,
    pub original_rdfi_identification: String,
    pub corrected_data: String,
    pub trace_number: String,
}

impl Addenda98 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "98")?;
        Ok(Addenda98 {
            change_code: line[3..6].to_string(),
            original_trace: line[6..21].to_string(),
            original_rdfi_identification: line[27..35].to_string(),
            corrected_data: parse_alpha(&line[35..64]),
            trace_number: line[79..94].to_string(),
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("98");
        line.push_str(&format_alpha("ChangeCode", &self.change_code, 3)?);
        line.push_str(&format_alpha("OriginalTrace", &self.original_trace, 15)?);
        line.push_str(&" ".repeat(6)); // reserved
        line.push_str(&format_alpha(
            "OriginalRDFIIdentification",
            &self.original_rdfi_identification,
            8,
        )?);
        line.push_str(&format_alpha("CorrectedData", &self.corrected_data, 29)?);
        line.push_str(&" ".repeat(15)); // reserved
        line.push_str(&format_alpha("TraceNumber", &self.trace_number, 15)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda Type 99: Return, carried by return-batch entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda99 {
    pub return_reason_code: String,
    pub original_trace: String,
    pub date_of_death: String,
    pub original_rdfi_identification: String,
    pub addenda_information: String,
    pub trace_number: String,
}

impl Addenda99 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "99")?;
        Ok(Addenda99 {
            return_reason_code: line[3..6].to_string(),
            original_trace: line[6..21].to_string(),
            date_of_death: line[21..27].to_string(),
            original_rdfi_identification: line[27..35].to_string(),
            addenda_information: parse_alpha(&line[35..64]),
            trace_number: line[79..94].to_string(),
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("99");
        line.push_str(&format_alpha("ReturnReasonCode", &self.return_reason_code, 3)?);
        line.push_str(&format_alpha("OriginalTrace", &self.original_trace, 15)?);
        line.push_str(&format_alpha("DateOfDeath", &self.date_of_death, 6)?);
        line.push_str(&format_alpha(
            "OriginalRDFIIdentification",
            &self.original_rdfi_identification,
            8,
        )?);
        line.push_str(&format_alpha(
            "AddendaInformation",
            &self.addenda_information,
            29,
        )?);
        line.push_str(&" ".repeat(15)); // reserved
        line.push_str(&format_alpha("TraceNumber", &self.trace_number, 15)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}
