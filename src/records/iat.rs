//! IAT (International ACH Transaction) addenda records, Addenda10 through
//! Addenda18. Each carries a fixed 84-byte content area between the
//! 2-byte addenda type code and the 7-byte entry detail sequence number;
//! field widths below follow the NACHA IAT addenda layout.

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

fn seq(line: &str) -> Result<u32, AchError> {
    Ok(field::parse_numeric("EntryDetailSequenceNumber", &line[87..94])? as u32)
}

fn seq_line(seq: u32) -> Result<String, AchError> {
    format_numeric("EntryDetailSequenceNumber", seq as u64, 7)
}

/// Addenda10: transaction type and foreign payment amount/trace number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda10 {
    pub transaction_type_code: String,
    pub foreign_payment_amount: u64,
    pub foreign_trace_number: String,
    pub name_of_receiving_company: String,
    pub entry_detail_sequence_number: u32,
}

impl Addenda10 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "10")?;
        Ok(Addenda10 {
            transaction_type_code: line[3..6].to_string(),
            foreign_payment_amount: field::parse_numeric("ForeignPaymentAmount", &line[6..24])?,
            foreign_trace_number: parse_alpha(&line[24..46]),
            name_of_receiving_company: parse_alpha(&line[46..81]),
            entry_detail_sequence_number: seq(line)?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("10");
        line.push_str(&format_alpha(
            "TransactionTypeCode",
            &self.transaction_type_code,
            3,
        )?);
        line.push_str(&format_numeric(
            "ForeignPaymentAmount",
            self.foreign_payment_amount,
            18,
        )?);
        line.push_str(&format_alpha(
            "ForeignTraceNumber",
            &self.foreign_trace_number,
            22,
        )?);
        line.push_str(&format_alpha(
            "NameOfReceivingCompany",
            &self.name_of_receiving_company,
            35,
        )?);
        line.push_str(&" ".repeat(6)); // reserved
        line.push_str(&seq_line(self.entry_detail_sequence_number)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda11: originator name and street address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda11 {
    pub originator_name: String,
    pub originator_street_address: String,
    pub entry_detail_sequence_number: u32,
}

impl Addenda11 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "11")?;
        Ok(Addenda11 {
            originator_name: parse_alpha(&line[3..38]),
            originator_street_address: parse_alpha(&line[38..73]),
            entry_detail_sequence_number: seq(line)?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("11");
        line.push_str(&format_alpha("OriginatorName", &self.originator_name, 35)?);
        line.push_str(&format_alpha(
            "OriginatorStreetAddress",
            &self.originator_street_address,
            35,
        )?);
        line.push_str(&" ".repeat(14)); // reserved
        line.push_str(&seq_line(self.entry_detail_sequence_number)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda12: originator city/state and country/postal code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda12 {
    pub originator_city_state: String,
    pub originator_country_postal_code: String,
    pub entry_detail_sequence_number: u32,
}

impl Addenda12 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "12")?;
        Ok(Addenda12 {
            originator_city_state: parse_alpha(&line[3..38]),
            originator_country_postal_code: parse_alpha(&line[38..73]),
            entry_detail_sequence_number: seq(line)?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("12");
        line.push_str(&format_alpha(
            "OriginatorCityState",
            &self.originator_city_state,
            35,
        )?);
        line.push_str(&format_alpha(
            "OriginatorCountryPostalCode",
            &self.originator_country_postal_code,
            35,
        )?);
        line.push_str(&" ".repeat(14)); // reserved
        line.push_str(&seq_line(self.entry_detail_sequence_number)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda13: originator bank name and country/city.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda13 {
    pub originator_bank_name: String,
    pub originator_bank_country_city: String,
    pub entry_detail_sequence_number: u32,
}

impl Addenda13 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "13")?;
        Ok(Addenda13 {
            originator_bank_name: parse_alpha(&line[3..38]),
            originator_bank_country_city: parse_alpha(&line[38..73]),
            entry_detail_sequence_number: seq(line)?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("13");
        line.push_str(&format_alpha(
            "OriginatorBankName",
            &self.originator_bank_name,
            35,
        )?);
        line.push_str(&format_alpha(
            "OriginatorBankCountryCity",
            &self.originator_bank_country_city,
            35,
        )?);
        line.push_str(&" ".repeat(14)); // reserved
        line.push_str(&seq_line(self.entry_detail_sequence_number)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda14: receiving DFI name and identification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda14 {
    pub receiving_dfi_name: String,
    pub receiving_dfi_id_number_qualifier: String,
    pub receiving_dfi_identification: String,
    pub receiving_dfi_branch_country_code: String,
    pub entry_detail_sequence_number: u32,
}

impl Addenda14 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "14")?;
        Ok(Addenda14 {
            receiving_dfi_name: parse_alpha(&line[3..38]),
            receiving_dfi_id_number_qualifier: line[38..40].to_string(),
            receiving_dfi_identification: parse_alpha(&line[40..74]),
            receiving_dfi_branch_country_code: line[74..77].to_string(),
            entry_detail_sequence_number: seq(line)?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("14");
        line.push_str(&format_alpha(
            "ReceivingDFIName",
            &self.receiving_dfi_name,
            35,
        )?);
        line.push_str(&format_alpha(
            "ReceivingDFIIDNumberQualifier",
            &self.receiving_dfi_id_number_qualifier,
            2,
        )?);
        line.push_str(&format_alpha(
            "ReceivingDFIIdentification",
            &self.receiving_dfi_identification,
            34,
        )?);
        line.push_str(&format_alpha(
            "ReceivingDFIBranchCountryCode",
            &self.receiving_dfi_branch_country_code,
            3,
        )?);
        line.push_str(&" ".repeat(10)); // reserved
        line.push_str(&seq_line(self.entry_detail_sequence_number)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda15: receiver identification and street address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda15 {
    pub receiver_identification_number: String,
    pub receiver_street_address: String,
    pub entry_detail_sequence_number: u32,
}

impl Addenda15 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "15")?;
        Ok(Addenda15 {
            receiver_identification_number: parse_alpha(&line[3..18]),
            receiver_street_address: parse_alpha(&line[18..53]),
            entry_detail_sequence_number: seq(line)?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("15");
        line.push_str(&format_alpha(
            "ReceiverIdentificationNumber",
            &self.receiver_identification_number,
            15,
        )?);
        line.push_str(&format_alpha(
            "ReceiverStreetAddress",
            &self.receiver_street_address,
            35,
        )?);
        line.push_str(&" ".repeat(34)); // reserved
        line.push_str(&seq_line(self.entry_detail_sequence_number)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda16: receiver city/state and country/postal code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda16 {
    pub receiver_city_state: String,
    pub receiver_country_postal_code: String,
    pub entry_detail_sequence_number: u32,
}

impl Addenda16 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "16")?;
        Ok(Addenda16 {
            receiver_city_state: parse_alpha(&line[3..38]),
            receiver_country_postal_code: parse_alpha(&line[38..73]),
            entry_detail_sequence_number: seq(line)?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("16");
        line.push_str(&format_alpha(
            "ReceiverCityState",
            &self.receiver_city_state,
            35,
        )?);
        line.push_str(&format_alpha(
            "ReceiverCountryPostalCode",
            &self.receiver_country_postal_code,
            35,
        )?);
        line.push_str(&" ".repeat(14)); // reserved
        line.push_str(&seq_line(self.entry_detail_sequence_number)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda17: free-form payment-related information. Up to two may be
/// attached per IAT entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda17 {
    pub payment_related_information: String,
    pub entry_detail_sequence_number: u32,
}

impl Addenda17 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "17")?;
        Ok(Addenda17 {
            payment_related_information: parse_alpha(&line[3..83]),
            entry_detail_sequence_number: seq(line)?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("17");
        line.push_str(&format_alpha(
            "PaymentRelatedInformation",
            &self.payment_related_information,
            80,
        )?);
        line.push_str(&" ".repeat(4)); // reserved
        line.push_str(&seq_line(self.entry_detail_sequence_number)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}

/// Addenda18: foreign correspondent bank information. Up to five may be
/// attached per IAT entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addenda18 {
    pub foreign_correspondent_bank_name: String,
    pub foreign_correspondent_bank_id_number_qualifier: String,
    pub foreign_correspondent_bank_id_number: String,
    pub foreign_correspondent_bank_branch_country_code: String,
    pub entry_detail_sequence_number: u32,
}

impl Addenda18 {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        check_type_code(line, "18")?;
        Ok(Addenda18 {
            foreign_correspondent_bank_name: parse_alpha(&line[3..38]),
            foreign_correspondent_bank_id_number_qualifier: line[38..40].to_string(),
            foreign_correspondent_bank_id_number: parse_alpha(&line[40..74]),
            foreign_correspondent_bank_branch_country_code: line[74..77].to_string(),
            entry_detail_sequence_number: seq(line)?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('7');
        line.push_str("18");
        line.push_str(&format_alpha(
            "ForeignCorrespondentBankName",
            &self.foreign_correspondent_bank_name,
            35,
        )?);
        line.push_str(&format_alpha(
            "ForeignCorrespondentBankIDNumberQualifier",
            &self.foreign_correspondent_bank_id_number_qualifier,
            2,
        )?);
        line.push_str(&format_alpha(
            "ForeignCorrespondentBankIDNumber",
            &self.foreign_correspondent_bank_id_number,
            34,
        )?);
        line.push_str(&format_alpha(
            "ForeignCorrespondentBankBranchCountryCode",
            &self.foreign_correspondent_bank_branch_country_code,
            3,
        )?);
        line.push_str(&" ".repeat(10)); // reserved
        line.push_str(&seq_line(self.entry_detail_sequence_number)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}
