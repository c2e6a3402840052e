//! ADV batches (service class 280, automated accounting advices).
//!
//! ADV entries and their batch control use a distinct field layout from
//! ordinary entries (sequence number instead of trace number, no addenda),
//! so rather than force them through [`crate::batch::Batch`] and
//! [`crate::entry::Entry`], they get their own lightweight aggregate.

use crate::error::AchError;
use crate::records::{BatchControlAdv, BatchHeader, EntryDetailAdv};
use crate::sec::SecCode;
use crate::transaction::ServiceClassCode;

#[derive(Debug, Clone, Default)]
pub struct AdvBatch {
    pub header: BatchHeader,
    pub entries: Vec<EntryDetailAdv>,
    pub control: BatchControlAdv,
}

impl AdvBatch {
    pub fn new(header: BatchHeader) -> Self {
        AdvBatch {
            header,
            entries: Vec::new(),
            control: BatchControlAdv::default(),
        }
    }

    pub fn add_entry(&mut self, entry: EntryDetailAdv) {
        self.entries.push(entry);
    }

    /// Derive aggregates: sequence numbers starting at 1, debit/credit
    /// totals, entry hash over the routing numbers, entry count.
    pub fn create(&mut self) -> Result<(), AchError> {
        if self.entries.is_empty() {
            return Err(AchError::Constructor(
                "ADV batch must contain at least one entry".to_string(),
            ));
        }
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.sequence_number = (i + 1) as u32;
        }

        let mut total_debit = 0u64;
        let mut total_credit = 0u64;
        let mut hash_sum = 0u64;
        for entry in &self.entries {
            match entry.transaction_code {
                81 | 83 | 85 | 87 | 89 => total_credit += entry.amount,
                82 | 84 | 86 | 88 => total_debit += entry.amount,
                _ => {}
            }
            let prefix: u64 = entry.routing_number.get(..8).unwrap_or("0").parse().unwrap_or(0);
            hash_sum += prefix;
        }

        self.control = BatchControlAdv {
            service_class_code: self.header.service_class_code,
            entry_addenda_count: self.entries.len() as u32,
            entry_hash: hash_sum % 10_000_000_000,
            total_debit_entry_dollar_amount: total_debit,
            total_credit_entry_dollar_amount: total_credit,
            company_identification: self.header.company_identification.clone(),
            message_authentication_code: String::new(),
            ach_operator_routing_number: self.control.ach_operator_routing_number.clone(),
            julian_day: self.control.julian_day,
            sequence_number: self.header.batch_number,
        };

        self.validate()
    }

    pub fn validate(&self) -> Result<(), AchError> {
        self.header.validate()?;
        let sec: SecCode = self.header.sec_code()?;
        if sec != SecCode::Adv {
            return Err(AchError::BatchSecType(
                self.header.standard_entry_class_code.clone(),
            ));
        }
        let service_class = ServiceClassCode::from_code(self.header.service_class_code)?;
        if !matches!(service_class, ServiceClassCode::Adv) {
            return Err(AchError::Constructor(
                "ADV batch must declare service class 280".to_string(),
            ));
        }
        for entry in &self.entries {
            entry.validate()?;
            if !service_class.allows_transaction_code(entry.transaction_code) {
                return Err(AchError::new_batch_service_class_tran_code(
                    self.header.service_class_code,
                    entry.transaction_code,
                ));
            }
        }
        Ok(())
    }

    pub fn to_lines(&self) -> Result<Vec<String>, AchError> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(self.header.to_line()?);
        for entry in &self.entries {
            lines.push(entry.to_line()?);
        }
        lines.push(self.control.to_line()?);
        Ok(lines)
    }
}
