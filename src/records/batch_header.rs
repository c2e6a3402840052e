use crate::error::AchError;
use crate::field::{format_alpha, format_numeric, parse_alpha, validate_date_yymmdd};
use crate::records::{record_type, validate_line_length};
use crate::sec::SecCode;
use crate::transaction::ServiceClassCode;

/// Batch Header Record (Record Type 5).
///
/// Identifies the batch and carries the summary information every entry in
/// the batch inherits (service class, SEC code, ODFI, effective date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchHeader {
    pub service_class_code: u32,
    pub company_name: String,
    pub company_discretionary_data: String,
    pub company_identification: String,
    pub standard_entry_class_code: String,
    pub company_entry_description: String,
    pub company_descriptive_date: String,
    pub effective_entry_date: String,
    pub settlement_date: String,
    pub originator_status_code: String,
    /// 8-digit ODFI identification (routing number without check digit).
    pub odfi_identification: String,
    pub batch_number: u32,
}

impl Default for BatchHeader {
    fn default() -> Self {
        BatchHeader {
            service_class_code: 200,
            company_name: String::new(),
            company_discretionary_data: String::new(),
            company_identification: String::new(),
            standard_entry_class_code: String::new(),
            company_entry_description: String::new(),
            company_descriptive_date: String::new(),
            effective_entry_date: String::new(),
            settlement_date: String::new(),
            originator_status_code: "1".to_string(),
            odfi_identification: String::new(),
            batch_number: 1,
        }
    }
}

impl BatchHeader {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        let rt = record_type(line)?;
        if rt != "5" {
            return Err(AchError::InvalidRecordType(rt.to_string()));
        }
        Ok(BatchHeader {
            service_class_code: crate::field::parse_numeric("ServiceClassCode", &line[1..4])?
                as u32,
            company_name: parse_alpha(&line[4..20]),
            company_discretionary_data: parse_alpha(&line[20..40]),
            company_identification: parse_alpha(&line[40..50]),
            standard_entry_class_code: line[50..53].to_string(),
            company_entry_description: parse_alpha(&line[53..63]),
            company_descriptive_date: parse_alpha(&line[63..69]),
            effective_entry_date: line[69..75].to_string(),
            settlement_date: line[75..78].to_string(),
            originator_status_code: line[78..79].to_string(),
            odfi_identification: line[79..87].to_string(),
            batch_number: crate::field::parse_numeric("BatchNumber", &line[87..94])? as u32,
        })
    }

    pub fn sec_code(&self) -> Result<SecCode, AchError> {
        self.standard_entry_class_code.parse()
    }

    pub fn service_class(&self) -> Result<ServiceClassCode, AchError> {
        ServiceClassCode::from_code(self.service_class_code)
    }

    pub fn validate(&self) -> Result<(), AchError> {
        self.service_class()?;
        self.sec_code()?;
        if !self.effective_entry_date.is_empty() {
            validate_date_yymmdd(&self.effective_entry_date)?;
        }
        if self.odfi_identification.trim().is_empty() || self.odfi_identification.len() != 8 {
            return Err(AchError::Constructor(
                "ODFIIdentification must be 8 digits".to_string(),
            ));
        }
        if self.company_identification.trim().is_empty() {
            return Err(AchError::Constructor(
                "CompanyIdentification is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        self.validate()?;
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('5');
        line.push_str(&format_numeric(
            "ServiceClassCode",
            self.service_class_code as u64,
            3,
        )?);
        line.push_str(&format_alpha("CompanyName", &self.company_name, 16)?);
        line.push_str(&format_alpha(
            "CompanyDiscretionaryData",
            &self.company_discretionary_data,
            20,
        )?);
        line.push_str(&format_alpha(
            "CompanyIdentification",
            &self.company_identification,
            10,
        )?);
        line.push_str(&format_alpha(
            "SECCode",
            &self.standard_entry_class_code,
            3,
        )?);
        line.push_str(&format_alpha(
            "CompanyEntryDescription",
            &self.company_entry_description,
            10,
        )?);
        line.push_str(&format_alpha(
            "CompanyDescriptiveDate",
            &self.company_descriptive_date,
            6,
        )?);
        line.push_str(&format_alpha(
            "EffectiveEntryDate",
            &self.effective_entry_date,
            6,
        )?);
        line.push_str(&format_alpha("SettlementDate", &self.settlement_date, 3)?);
        line.push_str(&format_alpha(
            "OriginatorStatusCode",
            &self.originator_status_code,
            1,
        )?);
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

    fn mock() -> BatchHeader {
        BatchHeader {
            service_class_code: 225,
            company_name: "Payee Name".to_string(),
            company_identification: "231380104".to_string(),
            standard_entry_class_code: "ARC".to_string(),
            company_entry_description: "ACH ARC".to_string(),
            effective_entry_date: "190816".to_string(),
            originator_status_code: "1".to_string(),
            odfi_identification: "12104288".to_string(),
            batch_number: 1,
            ..Default::default()
        }
    }

    #[test]
    fn matches_the_literal_nacha_line_from_the_spec() {
        let bh = mock();
        let line = bh.to_line().unwrap();
        assert_eq!(
            line,
            "5225Payee Name                          231380104 ARCACH ARC         190816   1121042880000001"
        );
    }

    #[test]
    fn round_trips() {
        let bh = mock();
        let line = bh.to_line().unwrap();
        let parsed = BatchHeader::parse(&line).unwrap();
        assert_eq!(parsed.sec_code().unwrap(), SecCode::Arc);
        assert_eq!(parsed.service_class_code, 225);
    }

    #[test]
    fn rejects_unknown_sec_code() {
        let mut bh = mock();
        bh.standard_entry_class_code = "ZZZ".to_string();
        assert!(bh.to_line().is_err());
    }
}
