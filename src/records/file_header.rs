use crate::error::AchError;
use crate::field::{
    format_alpha, format_numeric, parse_alpha, validate_date_yymmdd, validate_routing_number,
    validate_time_hhmm,
};
use crate::records::{record_type, validate_line_length};

/// File Header Record (Record Type 1).
///
/// Designates physical file characteristics and identifies the immediate
/// destination and origin of the entries within the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub priority_code: String,
    /// 9-digit routing number of the immediate destination, without the
    /// leading blank NACHA pads the 10-byte field with.
    pub immediate_destination: String,
    /// 9 or 10-digit identification of the immediate origin.
    pub immediate_origin: String,
    pub file_creation_date: String,
    pub file_creation_time: String,
    pub file_id_modifier: String,
    pub immediate_destination_name: String,
    pub immediate_origin_name: String,
    pub reference_code: String,
}

impl Default for FileHeader {
    fn default() -> Self {
        FileHeader {
            priority_code: "01".to_string(),
            immediate_destination: String::new(),
            immediate_origin: String::new(),
            file_creation_date: String::new(),
            file_creation_time: String::new(),
            file_id_modifier: "A".to_string(),
            immediate_destination_name: String::new(),
            immediate_origin_name: String::new(),
            reference_code: String::new(),
        }
    }
}

impl FileHeader {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        let rt = record_type(line)?;
        if rt != "1" {
            return Err(AchError::InvalidRecordType(rt.to_string()));
        }
        Ok(FileHeader {
            priority_code: line[1..3].to_string(),
            immediate_destination: line[3..13].trim_start().to_string(),
            immediate_origin: line[13..23].trim_start_matches('0').to_string(),
            file_creation_date: line[23..29].to_string(),
            file_creation_time: line[29..33].to_string(),
            file_id_modifier: line[33..34].to_string(),
            immediate_destination_name: parse_alpha(&line[40..63]),
            immediate_origin_name: parse_alpha(&line[63..86]),
            reference_code: parse_alpha(&line[86..94]),
        })
    }

    pub fn validate(&self) -> Result<(), AchError> {
        validate_routing_number(&format!("{:0>9}", self.immediate_destination.trim()))?;
        validate_date_yymmdd(&self.file_creation_date)?;
        validate_time_hhmm(&self.file_creation_time)?;
        if self.file_id_modifier.len() != 1
            || !self
                .file_id_modifier
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(AchError::Constructor(
                "FileIDModifier must be a single character A-Z or 0-9".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        self.validate()?;
        let destination: u64 = self
            .immediate_destination
            .trim()
            .parse()
            .map_err(|_| AchError::Constructor("ImmediateDestination must be numeric".into()))?;
        let origin: u64 = self
            .immediate_origin
            .trim()
            .parse()
            .map_err(|_| AchError::Constructor("ImmediateOrigin must be numeric".into()))?;

        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('1');
        line.push_str(&format_alpha("PriorityCode", &self.priority_code, 2)?);
        line.push(' ');
        line.push_str(&format_numeric("ImmediateDestination", destination, 9)?);
        line.push_str(&format_numeric("ImmediateOrigin", origin, 10)?);
        line.push_str(&format_alpha("FileCreationDate", &self.file_creation_date, 6)?);
        line.push_str(&format_alpha("FileCreationTime", &self.file_creation_time, 4)?);
        line.push_str(&format_alpha("FileIDModifier", &self.file_id_modifier, 1)?);
        line.push_str("094");
        line.push_str("10");
        line.push('1');
        line.push_str(&format_alpha(
            "ImmediateDestinationName",
            &self.immediate_destination_name,
            23,
        )?);
        line.push_str(&format_alpha(
            "ImmediateOriginName",
            &self.immediate_origin_name,
            23,
        )?);
        line.push_str(&format_alpha("ReferenceCode", &self.reference_code, 8)?);
        validate_line_length(&line)?;
        Ok(line)
    }
}
