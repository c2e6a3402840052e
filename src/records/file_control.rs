use crate::error::AchError;
use crate::field::{self, format_numeric};
use crate::records::{record_type, validate_line_length};

/// File Control Record (Record Type 9).
///
/// Summarizes the entire file: batch count, block count (10-record blocks,
/// including padding), total entry/addenda count, entry hash, and
/// debit/credit totals across every batch. `File::create` recomputes every
/// field here from its batches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileControl {
    pub batch_count: u32,
    pub block_count: u32,
    pub entry_addenda_count: u32,
    pub entry_hash: u64,
    pub total_debit_entry_dollar_amount: u64,
    pub total_credit_entry_dollar_amount: u64,
}

impl FileControl {
    pub fn parse(line: &str) -> Result<Self, AchError> {
        validate_line_length(line)?;
        let rt = record_type(line)?;
        if rt != "9" {
            return Err(AchError::InvalidRecordType(rt.to_string()));
        }
        Ok(FileControl {
            batch_count: field::parse_numeric("BatchCount", &line[1..7])? as u32,
            block_count: field::parse_numeric("BlockCount", &line[7..13])? as u32,
            entry_addenda_count: field::parse_numeric("EntryAddendaCount", &line[13..21])? as u32,
            entry_hash: field::parse_numeric("EntryHash", &line[21..31])?,
            total_debit_entry_dollar_amount: field::parse_numeric(
                "TotalDebitEntryDollarAmount",
                &line[31..43],
            )?,
            total_credit_entry_dollar_amount: field::parse_numeric(
                "TotalCreditEntryDollarAmount",
                &line[43..55],
            )?,
        })
    }

    pub fn to_line(&self) -> Result<String, AchError> {
        let mut line = String::with_capacity(crate::constants::RECORD_LENGTH);
        line.push('9');
        line.push_str(&format_numeric("BatchCount", self.batch_count as u64, 6)?);
        line.push_str(&format_numeric("BlockCount", self.block_count as u64, 6)?);
        line.push_str(&format_numeric(
            "EntryAddendaCount",
            self.entry_addenda_count as u64,
            8,
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
        line.push_str(&" ".repeat(39)); // reserved
        validate_line_length(&line)?;
        Ok(line)
    }
}
