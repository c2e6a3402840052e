//! The single `Batch` value object, parameterized by [`SecCode`], that
//! stands in for the twenty-odd SEC-specific batch kinds SPEC_FULL.md §4.5
//! describes. SEC-specific behavior is a rule lookup (`SecCode::rules`),
//! not a subclass.

use crate::entry::Entry;
use crate::error::AchError;
use crate::records::{BatchControl, BatchHeader};
use crate::sec::{AddendaRequirement, SecCode, SecRules};
use crate::transaction::{is_credit_transaction_code, is_debit_transaction_code};

/// A batch: one header, its entries, and a control record. `Create` derives
/// every field in `control` except `company_identification` and
/// `odfi_identification`, which are copied from the header.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub header: BatchHeader,
    pub entries: Vec<Entry>,
    pub control: BatchControl,
}

impl Batch {
    pub fn new(header: BatchHeader) -> Self {
        Batch {
            header,
            entries: Vec::new(),
            control: BatchControl::default(),
        }
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn sec_code(&self) -> Result<SecCode, AchError> {
        self.header.sec_code()
    }

    /// Sum each entry's amount by direction, its RDFI prefix, and its
    /// addenda count. Shared by `create` (derives `control` from this) and
    /// `validate` (compares `control` against this).
    fn compute_aggregates(&self) -> (u64, u64, u64, u32) {
        let mut total_debit: u64 = 0;
        let mut total_credit: u64 = 0;
        let mut hash_sum: u64 = 0;
        let mut addenda_count: u32 = 0;
        for entry in &self.entries {
            let tc = entry.detail.transaction_code;
            if is_credit_transaction_code(tc) {
                total_credit += entry.detail.amount;
            } else if is_debit_transaction_code(tc) {
                total_debit += entry.detail.amount;
            }
            let rdfi_prefix: u64 = entry.detail.rdfi_identification.parse().unwrap_or(0);
            hash_sum += rdfi_prefix;
            addenda_count += 1 + entry.addenda_count() as u32;
        }
        (hash_sum % 10_000_000_000, total_debit, total_credit, addenda_count)
    }

    /// Derive trace sequence numbers, aggregate totals, entry/addenda
    /// count, and entry hash from the current entries, then validate.
    /// Idempotent: calling twice reproduces the same `control`.
    pub fn create(&mut self) -> Result<(), AchError> {
        if self.entries.is_empty() {
            return Err(AchError::Constructor(
                "batch must contain at least one entry".to_string(),
            ));
        }
        let odfi = self.header.odfi_identification.clone();
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.detail.set_trace_number(&odfi, (i + 1) as u32);
            entry.renumber_addenda()?;
        }

        let (entry_hash, total_debit, total_credit, addenda_count) = self.compute_aggregates();

        self.control = BatchControl {
            service_class_code: self.header.service_class_code,
            entry_addenda_count: addenda_count,
            entry_hash,
            total_debit_entry_dollar_amount: total_debit,
            total_credit_entry_dollar_amount: total_credit,
            company_identification: self.header.company_identification.clone(),
            message_authentication_code: String::new(),
            odfi_identification: odfi,
            batch_number: self.header.batch_number,
        };

        tracing::debug!(
            batch_number = self.header.batch_number,
            entries = self.entries.len(),
            "batch aggregates derived"
        );

        if let Err(e) = self.validate() {
            tracing::warn!(batch_number = self.header.batch_number, error = %e, "batch validation failed");
            return Err(e);
        }
        Ok(())
    }

    /// Full validation: generic per-record, service-class/transaction-code
    /// table, SEC-specific rules, and a recompute-and-compare pass over the
    /// declared `BatchControl` aggregates.
    pub fn validate(&self) -> Result<(), AchError> {
        self.header.validate()?;
        let sec = self.sec_code()?;
        let service_class = self.header.service_class()?;

        for entry in &self.entries {
            entry.detail.validate()?;
            if !service_class.allows_transaction_code(entry.detail.transaction_code) {
                return Err(AchError::new_batch_service_class_tran_code(
                    self.header.service_class_code,
                    entry.detail.transaction_code,
                ));
            }
            entry.validate_addenda_indicator()?;
            entry.validate_addenda_caps()?;
        }

        self.validate_sec_specific(&sec, sec.rules())?;

        let (computed_hash, computed_debit, computed_credit, computed_count) =
            self.compute_aggregates();
        if computed_hash != self.control.entry_hash {
            return Err(AchError::AggregateMismatch {
                field: "BatchControl.EntryHash",
                declared: self.control.entry_hash,
                computed: computed_hash,
            });
        }
        if computed_count != self.control.entry_addenda_count {
            return Err(AchError::AggregateMismatch {
                field: "BatchControl.EntryAddendaCount",
                declared: self.control.entry_addenda_count as u64,
                computed: computed_count as u64,
            });
        }
        if computed_debit != self.control.total_debit_entry_dollar_amount {
            return Err(AchError::AggregateMismatch {
                field: "BatchControl.TotalDebitEntryDollarAmount",
                declared: self.control.total_debit_entry_dollar_amount,
                computed: computed_debit,
            });
        }
        if computed_credit != self.control.total_credit_entry_dollar_amount {
            return Err(AchError::AggregateMismatch {
                field: "BatchControl.TotalCreditEntryDollarAmount",
                declared: self.control.total_credit_entry_dollar_amount,
                computed: computed_credit,
            });
        }

        Ok(())
    }

    fn validate_sec_specific(&self, sec: &SecCode, rules: SecRules) -> Result<(), AchError> {
        if self.header.standard_entry_class_code.trim() != sec.as_str() {
            return Err(AchError::BatchSecType(
                self.header.standard_entry_class_code.clone(),
            ));
        }

        for entry in &self.entries {
            match rules.addenda02 {
                AddendaRequirement::Required if entry.addenda02.is_none() => {
                    return Err(AchError::Constructor(
                        "addenda02 is required for this SEC".to_string(),
                    ));
                }
                AddendaRequirement::None_ if entry.addenda02.is_some() => {
                    return Err(AchError::AddendaTypeCode("02".to_string()));
                }
                _ => {}
            }

            match rules.addenda05 {
                AddendaRequirement::None_ if !entry.addenda05.is_empty() => {
                    return Err(AchError::BatchAddendaCategory(
                        "addenda05 is not permitted for this SEC".to_string(),
                    ));
                }
                AddendaRequirement::RequiredWithCount | AddendaRequirement::ExactlyOne
                    if entry.addenda05.is_empty() =>
                {
                    return Err(AchError::Constructor(
                        "addenda05 is required for this SEC".to_string(),
                    ));
                }
                AddendaRequirement::RequiredEnrollmentPayload => {
                    if entry.addenda05.len() != 1 {
                        return Err(AchError::Constructor(
                            "ENR requires exactly one addenda05".to_string(),
                        ));
                    }
                    if !entry.addenda05[0]
                        .payment_related_information
                        .trim()
                        .contains('*')
                    {
                        return Err(AchError::Constructor(
                            "ENR addenda05 payload must be a '*'-delimited enrollment record"
                                .to_string(),
                        ));
                    }
                }
                _ => {}
            }

            match rules.addenda98 {
                AddendaRequirement::ExactlyOne if entry.addenda98.is_none() => {
                    return Err(AchError::Constructor(
                        "addenda98 is required for COR entries".to_string(),
                    ));
                }
                _ => {}
            }

            if rules.require_individual_name && entry.detail.individual_name.trim().is_empty() {
                return Err(AchError::Constructor(
                    "IndividualName/ReceivingCompany is required for this SEC".to_string(),
                ));
            }

            if rules.require_discretionary_data_recurring_or_single {
                match entry.detail.discretionary_data.trim() {
                    "R" | "S" => {}
                    _ => {
                        return Err(AchError::Constructor(
                            "DiscretionaryData must be 'R' or 'S' for WEB entries".to_string(),
                        ));
                    }
                }
            }

            if rules.forbid_credit_transaction_codes
                && is_credit_transaction_code(entry.detail.transaction_code)
            {
                return Err(AchError::new_batch_service_class_tran_code(
                    self.header.service_class_code,
                    entry.detail.transaction_code,
                ));
            }

            if entry.detail.amount == 0 && !matches!(sec, SecCode::Enr | SecCode::Cor) {
                return Err(AchError::BatchAmountZero);
            }

            if rules.check_identification_number {
                crate::validate::validate_identification_number_present(
                    &entry.detail.identification_number,
                )?;
            }
        }
        Ok(())
    }

    pub fn to_lines(&self) -> Result<Vec<String>, AchError> {
        let mut lines = Vec::with_capacity(self.entries.len() * 2 + 2);
        lines.push(self.header.to_line()?);
        for entry in &self.entries {
            lines.push(entry.detail.to_line()?);
            if let Some(a) = &entry.addenda02 {
                lines.push(a.to_line()?);
            }
            for a in &entry.addenda05 {
                lines.push(a.to_line()?);
            }
            if let Some(a) = &entry.addenda98 {
                lines.push(a.to_line()?);
            }
            if let Some(a) = &entry.addenda99 {
                lines.push(a.to_line()?);
            }
            if let Some(a) = &entry.iat_addenda.addenda10 {
                lines.push(a.to_line()?);
            }
            if let Some(a) = &entry.iat_addenda.addenda11 {
                lines.push(a.to_line()?);
            }
            if let Some(a) = &entry.iat_addenda.addenda12 {
                lines.push(a.to_line()?);
            }
            if let Some(a) = &entry.iat_addenda.addenda13 {
                lines.push(a.to_line()?);
            }
            if let Some(a) = &entry.iat_addenda.addenda14 {
                lines.push(a.to_line()?);
            }
            if let Some(a) = &entry.iat_addenda.addenda15 {
                lines.push(a.to_line()?);
            }
            if let Some(a) = &entry.iat_addenda.addenda16 {
                lines.push(a.to_line()?);
            }
            for a in &entry.iat_addenda.addenda17 {
                lines.push(a.to_line()?);
            }
            for a in &entry.iat_addenda.addenda18 {
                lines.push(a.to_line()?);
            }
        }
        lines.push(self.control.to_line()?);
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::EntryDetail;

    fn ppd_header() -> BatchHeader {
        BatchHeader {
            service_class_code: 220,
            company_name: "My Company".to_string(),
            company_identification: "1210428821".to_string(),
            standard_entry_class_code: "PPD".to_string(),
            company_entry_description: "PAYROLL".to_string(),
            effective_entry_date: "190816".to_string(),
            odfi_identification: "12104288".to_string(),
            batch_number: 1,
            ..Default::default()
        }
    }

    fn ppd_entry() -> Entry {
        let mut d = EntryDetail {
            transaction_code: 22,
            dfi_account_number: "12345678".to_string(),
            amount: 10_000,
            individual_name: "John Doe".to_string(),
            ..Default::default()
        };
        d.set_rdfi("231380104").unwrap();
        Entry::new(d)
    }

    #[test]
    fn create_derives_aggregates_for_a_single_credit_entry() {
        let mut batch = Batch::new(ppd_header());
        batch.add_entry(ppd_entry());
        batch.create().unwrap();
        assert_eq!(batch.control.total_credit_entry_dollar_amount, 10_000);
        assert_eq!(batch.control.total_debit_entry_dollar_amount, 0);
        assert_eq!(batch.control.entry_hash, 23_138_010);
        assert_eq!(batch.control.entry_addenda_count, 1);
        assert_eq!(batch.entries[0].detail.trace_number, "121042880000001");
    }

    #[test]
    fn create_is_idempotent() {
        let mut batch = Batch::new(ppd_header());
        batch.add_entry(ppd_entry());
        batch.create().unwrap();
        let first = batch.to_lines().unwrap();
        batch.create().unwrap();
        let second = batch.to_lines().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_service_class_transaction_code_mismatch() {
        let mut header = ppd_header();
        header.service_class_code = 225; // debits only
        let mut batch = Batch::new(header);
        batch.add_entry(ppd_entry()); // credit code 22
        let err = batch.create().unwrap_err();
        assert!(matches!(
            err,
            AchError::BatchServiceClassTranCode {
                service_class: 225,
                transaction_code: 22
            }
        ));
    }

    #[test]
    fn rejects_empty_batch() {
        let mut batch = Batch::new(ppd_header());
        assert!(batch.create().is_err());
    }

    #[test]
    fn validate_catches_a_hand_tampered_control_total() {
        let mut batch = Batch::new(ppd_header());
        batch.add_entry(ppd_entry());
        batch.create().unwrap();

        batch.control.total_credit_entry_dollar_amount += 1;
        let err = batch.validate().unwrap_err();
        assert!(matches!(
            err,
            AchError::AggregateMismatch {
                field: "BatchControl.TotalCreditEntryDollarAmount",
                ..
            }
        ));
    }
}
