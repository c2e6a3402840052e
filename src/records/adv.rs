use crate::error::AchError;
use crate::field::{self, format_alpha, format_numeric, parse_alpha};
use crate::records::{record_type, validate_line_length};

/// ADV Entry Detail Record (Record Type 6, automated accounting advice).
///
/// Used only within ADV batches (service class 280) to report
/// interest/fee/settlement activity between ACH operators and
/// participating DFIs. Distinct field layout from the ordinary
/// [`super::EntryDetail`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDetailAdv {
    pub transaction_code: u32,
    /// Full 9-digit routing number, including check digit.
    pub routing_number: String,
    pub dfi_account_number: String,
    pub amount: u64,
    pub advice_routing_number: String,
    pub file_identification: String,
    pub ach_operator_data: String,
    pub individual_name: String,
    pub discretionary_data: String,
    pub addenda_record_indicator: u8,
    pub ach_operator_routing_number: String,
    pub julian_day: u32,
    pub sequence_number: u32,
}

impl EntryDetailAdv {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        let rt = record_type(line)?;
        if rt != "6" {
            return Err(AchError::InvalidRecordType(rt.to_string()));
        }
        Ok(EntryDetailAdv {
            transaction_code: field::parse_numeric("TransactionCode", &line[1..3])? as u32,
            routing_number: line[3..12].to_string(),
            dfi_account_number: parse_alpha(&line[12..29]),
            amount: field::parse_numeric("Amount", &line[29..39])?,
            advice_routing_number: line[39..48].to_string(),
            file_identification: parse_alpha(&line[48..56]),
            ach_operator_data: parse_alpha(&line[56..57]),
            individual_name: parse_alpha(&line[57..72]),
            discretionary_data: parse_alpha(&line[72..74]),
            addenda_record_indicator: field::parse_numeric("AddendaRecordIndicator", &line[74..75])?
                as u8,
            ach_operator_routing_number: line[75..83].to_string(),
            julian_day: field::parse_numeric("JulianDay", &line[83..86])? as u32,
            sequence_number: field::parse_numeric("SequenceNumber", &line[86..94])? as u32,
        })
    }

    pub fn validate(&self) -> Result<(), AchError> {
        field::validate_routing_number(&self.routing_number)?;
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
        line.push_str(&format_alpha("RoutingNumber", &self.routing_number, 9)?);
        line.push_str(&format_alpha(
            "DFIAccountNumber",
            &self.dfi_account_number,
            17,
        )?);
        line.push_str(&format_numeric("Amount", self.amount, 10)?);
        line.push_str(&format_alpha(
            "AdviceRoutingNumber",
            &self.advice_routing_number,
            9,
        )?);
        line.push_str(&format_alpha(
            "FileIdentification",
            &self.file_identification,
            8,
        )?);
        line.push_str(&format_alpha("AchOperatorData", &self.ach_operator_data, 1)?);
        line.push_str(&format_alpha("IndividualName", &self.individual_name, 15)?);
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
        line.push_str(&format_alpha(
            "AchOperatorRoutingNumber",
            &self.ach_operator_routing_number,
            8,
        )?);
        line.push_str(&format_numeric("JulianDay", self.julian_day as u64, 3)?);
        line.push_str(&format_numeric(
            "SequenceNumber",
            self.sequence_number as u64,
            8,
        )?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// ADV Batch Control Record (Record Type 8, service class 280).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchControlAdv {
    pub service_class_code: u32,
    pub entry_addenda_count: u32,
    pub entry_hash: u64,
    pub total_debit_entry_dollar_amount: u64,
    pub total_credit_entry_dollar_amount: u64,
    pub company_identification: String,
    pub message_authentication_code: String,
    pub ach_operator_routing_number: String,
    pub julian_day: u32,
    pub sequence_number: u32,
}

impl BatchControlAdv {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        let rt = record_type(line)?;
        if rt != "8" {
            return Err(AchError::InvalidRecordType(rt.to_string()));
        }
        Ok(BatchControlAdv {
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
            ach_operator_routing_number: line[78..86].to_string(),
            julian_day: field::parse_numeric("JulianDay", &line[86..89])? as u32,
            sequence_number: field::parse_numeric("SequenceNumber", &line[89..94])? as u32,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
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
        line.push_str(&" ".repeat(5)); // reserved
        line.push_str(&format_alpha(
            "AchOperatorRoutingNumber",
            &self.ach_operator_routing_number,
            8,
        )?);
        line.push_str(&format_numeric("JulianDay", self.julian_day as u64, 3)?);
        line.push_str(&format_numeric(
            "SequenceNumber",
            self.sequence_number as u64,
            5,
        )?);
        validate_line_length(&line)?;
        Ok(line)
    }
}
