//! The Entry wrapper: an Entry Detail plus whichever addenda kind its SEC
//! permits. Addenda cardinality is modeled as distinct typed slots rather
//! than one heterogeneous collection, per SPEC_FULL.md §9 design notes.

use crate::constants::{MAX_ADDENDA05_PER_ENTRY, MAX_ADDENDA17_PER_ENTRY, MAX_ADDENDA18_PER_ENTRY};
use crate::error::AchError;
use crate::records::{
    Addenda02, Addenda05, Addenda10, Addenda11, Addenda12, Addenda13, Addenda14, Addenda15,
    Addenda16, Addenda17, Addenda18, Addenda98, Addenda99, EntryDetail,
};

/// The IAT remittance-information chain: addenda 10 through 16 are
/// mandatory and singleton, 17 may repeat up to twice, 18 up to five times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IatAddendaChain {
    pub addenda10: Option<Addenda10>,
    pub addenda11: Option<Addenda11>,
    pub addenda12: Option<Addenda12>,
    pub addenda13: Option<Addenda13>,
    pub addenda14: Option<Addenda14>,
    pub addenda15: Option<Addenda15>,
    pub addenda16: Option<Addenda16>,
    pub addenda17: Vec<Addenda17>,
    pub addenda18: Vec<Addenda18>,
}

impl IatAddendaChain {
    pub fn is_empty(&self) -> bool {
        self.addenda10.is_none()
            && self.addenda11.is_none()
            && self.addenda12.is_none()
            && self.addenda13.is_none()
            && self.addenda14.is_none()
            && self.addenda15.is_none()
            && self.addenda16.is_none()
            && self.addenda17.is_empty()
            && self.addenda18.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.addenda10.is_some()
            && self.addenda11.is_some()
            && self.addenda12.is_some()
            && self.addenda13.is_some()
            && self.addenda14.is_some()
            && self.addenda15.is_some()
            && self.addenda16.is_some()
    }

    pub fn len(&self) -> usize {
        let singletons = [
            self.addenda10.is_some(),
            self.addenda11.is_some(),
            self.addenda12.is_some(),
            self.addenda13.is_some(),
            self.addenda14.is_some(),
            self.addenda15.is_some(),
            self.addenda16.is_some(),
        ]
        .iter()
        .filter(|x| **x)
        .count();
        singletons + self.addenda17.len() + self.addenda18.len()
    }
}

/// One Entry Detail plus its attached addenda, whichever kind the parent
/// batch's SEC permits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub detail: EntryDetail,
    pub addenda02: Option<Addenda02>,
    pub addenda05: Vec<Addenda05>,
    pub addenda98: Option<Addenda98>,
    pub addenda99: Option<Addenda99>,
    pub iat_addenda: IatAddendaChain,
}

impl Entry {
    pub fn new(detail: EntryDetail) -> Self {
        Entry {
            detail,
            ..Default::default()
        }
    }

    /// Total addenda records attached to this entry, across every kind.
    pub fn addenda_count(&self) -> usize {
        self.addenda02.is_some() as usize
            + self.addenda05.len()
            + self.addenda98.is_some() as usize
            + self.addenda99.is_some() as usize
            + self.iat_addenda.len()
    }

    pub fn has_addenda(&self) -> bool {
        self.addenda_count() > 0
    }

    /// Check the addenda-record-indicator against actual attachment.
    pub fn validate_addenda_indicator(&self) -> Result<(), AchError> {
        crate::validate::validate_addenda_record_indicator(
            self.detail.addenda_record_indicator,
            self.has_addenda(),
        )
    }

    /// Enforce the format's per-kind addenda cardinality ceilings.
    pub fn validate_addenda_caps(&self) -> Result<(), AchError> {
        if self.addenda05.len() > MAX_ADDENDA05_PER_ENTRY {
            return Err(AchError::AddendaCountExceeded {
                field: "Addenda05",
                max: MAX_ADDENDA05_PER_ENTRY,
                actual: self.addenda05.len(),
            });
        }
        if self.iat_addenda.addenda17.len() > MAX_ADDENDA17_PER_ENTRY {
            return Err(AchError::AddendaCountExceeded {
                field: "Addenda17",
                max: MAX_ADDENDA17_PER_ENTRY,
                actual: self.iat_addenda.addenda17.len(),
            });
        }
        if self.iat_addenda.addenda18.len() > MAX_ADDENDA18_PER_ENTRY {
            return Err(AchError::AddendaCountExceeded {
                field: "Addenda18",
                max: MAX_ADDENDA18_PER_ENTRY,
                actual: self.iat_addenda.addenda18.len(),
            });
        }
        Ok(())
    }

    /// Renumber every attached addenda's entry-detail-sequence-number and
    /// addenda05's own addenda-sequence-number to match this entry's trace.
    pub fn renumber_addenda(&mut self) -> Result<(), AchError> {
        let entry_seq: u32 = self.detail.trace_number[8..]
            .parse()
            .map_err(|_| AchError::Constructor("trace number has no numeric sequence".into()))?;
        for (i, a) in self.addenda05.iter_mut().enumerate() {
            a.addenda_sequence_number = (i + 1) as u32;
            a.entry_detail_sequence_number = entry_seq;
        }
        if let Some(a) = &mut self.addenda98 {
            a.trace_number = self.detail.trace_number.clone();
        }
        if let Some(a) = &mut self.addenda99 {
            a.trace_number = self.detail.trace_number.clone();
        }
        if let Some(a) = &mut self.addenda02 {
            a.trace_number = self.detail.trace_number.clone();
        }
        for a in &mut self.iat_addenda.addenda17 {
            a.entry_detail_sequence_number = entry_seq;
        }
        for a in &mut self.iat_addenda.addenda18 {
            a.entry_detail_sequence_number = entry_seq;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addenda_count_sums_every_slot() {
        let mut e = Entry::new(EntryDetail::default());
        assert_eq!(e.addenda_count(), 0);
        assert!(!e.has_addenda());
        e.addenda05.push(Addenda05::default());
        e.addenda05.push(Addenda05::default());
        assert_eq!(e.addenda_count(), 2);
        assert!(e.has_addenda());
    }

    #[test]
    fn addenda_indicator_must_agree_with_attachment() {
        let mut e = Entry::new(EntryDetail::default());
        e.detail.addenda_record_indicator = 0;
        assert!(e.validate_addenda_indicator().is_ok());
        e.addenda05.push(Addenda05::default());
        assert!(e.validate_addenda_indicator().is_err());
        e.detail.addenda_record_indicator = 1;
        assert!(e.validate_addenda_indicator().is_ok());
    }

    #[test]
    fn rejects_more_than_two_addenda17() {
        let mut e = Entry::new(EntryDetail::default());
        e.iat_addenda.addenda17.push(Addenda17::default());
        e.iat_addenda.addenda17.push(Addenda17::default());
        assert!(e.validate_addenda_caps().is_ok());
        e.iat_addenda.addenda17.push(Addenda17::default());
        assert!(matches!(
            e.validate_addenda_caps(),
            Err(AchError::AddendaCountExceeded {
                field: "Addenda17",
                max: 2,
                actual: 3,
            })
        ));
    }

    #[test]
    fn rejects_more_than_five_addenda18() {
        let mut e = Entry::new(EntryDetail::default());
        for _ in 0..5 {
            e.iat_addenda.addenda18.push(Addenda18::default());
        }
        assert!(e.validate_addenda_caps().is_ok());
        e.iat_addenda.addenda18.push(Addenda18::default());
        assert!(matches!(
            e.validate_addenda_caps(),
            Err(AchError::AddendaCountExceeded {
                field: "Addenda18",
                max: 5,
                actual: 6,
            })
        ));
    }

    #[test]
    fn iat_chain_completeness() {
        let mut chain = IatAddendaChain::default();
        assert!(chain.is_empty());
        assert!(!chain.is_complete());
        chain.addenda10 = Some(Addenda10::default());
        chain.addenda11 = Some(Addenda11::default());
        chain.addenda12 = Some(Addenda12::default());
        chain.addenda13 = Some(Addenda13::default());
        chain.addenda14 = Some(Addenda14::default());
        chain.addenda15 = Some(Addenda15::default());
        chain.addenda16 = Some(Addenda16::default());
        assert!(chain.is_complete());
        assert_eq!(chain.len(), 7);
    }

    #[test]
    fn renumber_addenda_propagates_trace_sequence() {
        let mut e = Entry::new(EntryDetail {
            trace_number: "231380100000003".to_string(),
            ..Default::default()
        });
        e.addenda05.push(Addenda05::default());
        e.addenda05.push(Addenda05::default());
        e.renumber_addenda().unwrap();
        assert_eq!(e.addenda05[0].addenda_sequence_number, 1);
        assert_eq!(e.addenda05[1].addenda_sequence_number, 2);
        assert_eq!(e.addenda05[0].entry_detail_sequence_number, 3);
    }
}
