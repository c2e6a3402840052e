//! The top-level `File`: one File Header, its Batches in order, one File
//! Control. `File::create` orders batches, derives File Control aggregates,
//! and computes the block count.

use crate::adv_batch::AdvBatch;
use crate::batch::Batch;
use crate::constants::{MAX_TOTAL_RECORDS, RECORDS_PER_BLOCK};
use crate::error::AchError;
use crate::records::{is_padding_line, padding_line, FileControl, FileHeader};

/// A complete ACH file: header, batches, control.
///
/// ADV batches (service class 280) carry their own entry/control shape and
/// are kept in a separate collection rather than forced through the
/// standard `Batch`/`Entry` model; see DESIGN.md.
#[derive(Debug, Clone, Default)]
pub struct File {
    pub header: FileHeader,
    pub batches: Vec<Batch>,
    pub adv_batches: Vec<AdvBatch>,
    pub control: FileControl,
}

impl File {
    pub fn new(header: FileHeader) -> Self {
        File {
            header,
            batches: Vec::new(),
            adv_batches: Vec::new(),
            control: FileControl::default(),
        }
    }

    pub fn add_batch(&mut self, batch: Batch) {
        self.batches.push(batch);
    }

    pub fn add_adv_batch(&mut self, batch: AdvBatch) {
        self.adv_batches.push(batch);
    }

    /// Sum every batch's aggregates and derive the total record/block
    /// count, without touching batch numbering or calling `Batch::create`.
    /// Shared by `create` (which compares against nothing, just derives)
    /// and `validate` (which compares against the declared `control`).
    fn compute_totals(&self) -> (u32, u32, u64, u64, u64, usize) {
        let mut total_records = 2; // file header + file control
        let mut batch_count = 0u32;
        let mut entry_addenda_count: u32 = 0;
        let mut entry_hash: u64 = 0;
        let mut total_debit: u64 = 0;
        let mut total_credit: u64 = 0;

        for batch in &self.batches {
            batch_count += 1;
            entry_addenda_count += batch.control.entry_addenda_count;
            entry_hash += batch.control.entry_hash;
            total_debit += batch.control.total_debit_entry_dollar_amount;
            total_credit += batch.control.total_credit_entry_dollar_amount;
            // header + control + every entry/addenda line in this batch.
            total_records += 2 + batch.control.entry_addenda_count as usize;
        }

        for batch in &self.adv_batches {
            batch_count += 1;
            entry_addenda_count += batch.control.entry_addenda_count;
            entry_hash += batch.control.entry_hash;
            total_debit += batch.control.total_debit_entry_dollar_amount;
            total_credit += batch.control.total_credit_entry_dollar_amount;
            total_records += 2 + batch.entries.len();
        }

        (
            batch_count,
            entry_addenda_count,
            entry_hash % 10_000_000_000,
            total_debit,
            total_credit,
            total_records,
        )
    }

    /// Assign 1-based, strictly increasing batch numbers in insertion
    /// order, call `Create` on each batch, and derive File Control from
    /// the resulting aggregates. Idempotent.
    pub fn create(&mut self) -> Result<(), AchError> {
        if self.batches.is_empty() && self.adv_batches.is_empty() {
            return Err(AchError::Constructor(
                "file must contain at least one batch".to_string(),
            ));
        }

        let mut next_batch_number = 1u32;
        for batch in self.batches.iter_mut() {
            batch.header.batch_number = next_batch_number;
            batch.control.batch_number = next_batch_number;
            next_batch_number += 1;
            batch.create()?;
        }
        for batch in self.adv_batches.iter_mut() {
            batch.header.batch_number = next_batch_number;
            next_batch_number += 1;
            batch.create()?;
        }

        let (batch_count, entry_addenda_count, entry_hash, total_debit, total_credit, total_records) =
            self.compute_totals();

        if total_records > MAX_TOTAL_RECORDS {
            return Err(AchError::Constructor(format!(
                "file would contain {total_records} records, exceeding the {MAX_TOTAL_RECORDS} limit"
            )));
        }

        let block_count = total_records.div_ceil(RECORDS_PER_BLOCK) as u32;

        self.control = FileControl {
            batch_count,
            block_count,
            entry_addenda_count,
            entry_hash,
            total_debit_entry_dollar_amount: total_debit,
            total_credit_entry_dollar_amount: total_credit,
        };

        tracing::debug!(
            batches = batch_count,
            records = total_records,
            "file aggregates derived"
        );

        self.validate()
    }

    /// Cross-check every declared aggregate against what `Create` would
    /// compute, without mutating anything.
    pub fn validate(&self) -> Result<(), AchError> {
        self.header.validate()?;

        let mut prev_batch_number = 0u32;
        for batch in &self.batches {
            if batch.header.batch_number <= prev_batch_number {
                return Err(AchError::BatchNumberOutOfOrder(batch.header.batch_number));
            }
            prev_batch_number = batch.header.batch_number;
            batch.validate()?;
        }
        for batch in &self.adv_batches {
            if batch.header.batch_number <= prev_batch_number {
                return Err(AchError::BatchNumberOutOfOrder(batch.header.batch_number));
            }
            prev_batch_number = batch.header.batch_number;
            batch.validate()?;
        }

        let (
            computed_batch_count,
            computed_count,
            computed_hash,
            computed_debit,
            computed_credit,
            total_records,
        ) = self.compute_totals();
        let computed_block_count = total_records.div_ceil(RECORDS_PER_BLOCK) as u32;

        if computed_hash != self.control.entry_hash {
            return Err(AchError::AggregateMismatch {
                field: "FileControl.EntryHash",
                declared: self.control.entry_hash,
                computed: computed_hash,
            });
        }
        if computed_count != self.control.entry_addenda_count {
            return Err(AchError::AggregateMismatch {
                field: "FileControl.EntryAddendaCount",
                declared: self.control.entry_addenda_count as u64,
                computed: computed_count as u64,
            });
        }
        if computed_batch_count != self.control.batch_count {
            return Err(AchError::AggregateMismatch {
                field: "FileControl.BatchCount",
                declared: self.control.batch_count as u64,
                computed: computed_batch_count as u64,
            });
        }
        if computed_debit != self.control.total_debit_entry_dollar_amount {
            return Err(AchError::AggregateMismatch {
                field: "FileControl.TotalDebitEntryDollarAmount",
                declared: self.control.total_debit_entry_dollar_amount,
                computed: computed_debit,
            });
        }
        if computed_credit != self.control.total_credit_entry_dollar_amount {
            return Err(AchError::AggregateMismatch {
                field: "FileControl.TotalCreditEntryDollarAmount",
                declared: self.control.total_credit_entry_dollar_amount,
                computed: computed_credit,
            });
        }
        if computed_block_count != self.control.block_count {
            return Err(AchError::AggregateMismatch {
                field: "FileControl.BlockCount",
                declared: self.control.block_count as u64,
                computed: computed_block_count as u64,
            });
        }

        Ok(())
    }

    /// Serialize to 94-byte lines (no terminators), padded with all-'9'
    /// lines so the total is a multiple of 10.
    pub fn to_lines(&self) -> Result<Vec<String>, AchError> {
        let mut lines = Vec::new();
        lines.push(self.header.to_line()?);
        for batch in &self.batches {
            lines.extend(batch.to_lines()?);
        }
        for batch in &self.adv_batches {
            lines.extend(batch.to_lines()?);
        }
        lines.push(self.control.to_line()?);
        while lines.len() % RECORDS_PER_BLOCK != 0 {
            lines.push(padding_line());
        }
        Ok(lines)
    }

    /// Serialize to a complete ACH file body, LF-terminated.
    pub fn write_string(&self) -> Result<String, AchError> {
        let lines = self.to_lines()?;
        let mut out = String::with_capacity(lines.len() * 95);
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    /// True for a line that is pure padding rather than a File Control.
    pub fn is_padding(line: &str) -> bool {
        is_padding_line(line)
    }
}
