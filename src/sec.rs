//! Standard Entry Class (SEC) codes and the per-SEC rule table.
//!
//! Rather than a subclass per SEC code, the twenty-odd SEC behaviors are
//! expressed as one tagged enum plus a data-driven rule table consulted by
//! [`crate::batch::Batch::validate`]. See SPEC_FULL.md §4.5 for the
//! rationale.

use crate::error::AchError;
use std::fmt;
use std::str::FromStr;

/// Standard Entry Class Code: the three-letter identifier of the
/// transaction kind carried in the Batch Header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecCode {
    /// Prearranged Payment and Deposit (consumer).
    Ppd,
    /// Corporate Credit or Debit.
    Ccd,
    /// Internet-Initiated/Mobile Entry.
    Web,
    /// Telephone-Initiated Entry.
    Tel,
    /// Corporate Trade Exchange.
    Ctx,
    /// Accounts Receivable Entry.
    Arc,
    /// Back Office Conversion Entry.
    Boc,
    /// Point of Purchase Entry.
    Pop,
    /// Machine Transfer Entry.
    Mte,
    /// Point of Sale Entry.
    Pos,
    /// Shared Network Entry.
    Shr,
    /// Represented Check Entry.
    Rck,
    /// Destroyed Check Entry.
    Xck,
    /// Automated Enrollment Entry.
    Enr,
    /// Automated Accounting Advice.
    Adv,
    /// Notification of Change / Automated Corrected Data.
    Cor,
    /// Death Notification Entry.
    Dne,
    /// Financial EDI Acknowledgement (Addenda-bearing ATX).
    Atx,
    /// International ACH Transaction.
    Iat,
    /// Acknowledgement Entry.
    Ack,
    /// Truncated Check Entry.
    Trc,
    /// Check Truncation Entry Exchange.
    Trx,
    /// Customer-Initiated Entry.
    Cie,
}

impl SecCode {
    pub const ALL: &'static [SecCode] = &[
        SecCode::Ppd,
        SecCode::Ccd,
        SecCode::Web,
        SecCode::Tel,
        SecCode::Ctx,
        SecCode::Arc,
        SecCode::Boc,
        SecCode::Pop,
        SecCode::Mte,
        SecCode::Pos,
        SecCode::Shr,
        SecCode::Rck,
        SecCode::Xck,
        SecCode::Enr,
        SecCode::Adv,
        SecCode::Cor,
        SecCode::Dne,
        SecCode::Atx,
        SecCode::Iat,
        SecCode::Ack,
        SecCode::Trc,
        SecCode::Trx,
        SecCode::Cie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecCode::Ppd => "PPD",
            SecCode::Ccd => "CCD",
            SecCode::Web => "WEB",
            SecCode::Tel => "TEL",
            SecCode::Ctx => "CTX",
            SecCode::Arc => "ARC",
            SecCode::Boc => "BOC",
            SecCode::Pop => "POP",
            SecCode::Mte => "MTE",
            SecCode::Pos => "POS",
            SecCode::Shr => "SHR",
            SecCode::Rck => "RCK",
            SecCode::Xck => "XCK",
            SecCode::Enr => "ENR",
            SecCode::Adv => "ADV",
            SecCode::Cor => "COR",
            SecCode::Dne => "DNE",
            SecCode::Atx => "ATX",
            SecCode::Iat => "IAT",
            SecCode::Ack => "ACK",
            SecCode::Trc => "TRC",
            SecCode::Trx => "TRX",
            SecCode::Cie => "CIE",
        }
    }

    /// Whether this SEC's batch is an IAT batch, which follows the
    /// mandatory addenda-10..18 chain rather than addenda-02/05/98/99.
    pub fn is_iat(&self) -> bool {
        matches!(self, SecCode::Iat)
    }

    /// Whether this SEC uses the ADV (280 service class) variant of Entry
    /// Detail and Batch Control.
    pub fn is_adv(&self) -> bool {
        matches!(self, SecCode::Adv)
    }

    /// The per-SEC rule table consulted by batch validation.
    pub fn rules(&self) -> SecRules {
        use AddendaRequirement::*;
        match self {
            SecCode::Ppd | SecCode::Ccd => SecRules {
                addenda05: ZeroOrOne,
                require_individual_name: matches!(self, SecCode::Ccd),
                ..SecRules::default()
            },
            SecCode::Web => SecRules {
                addenda05: ZeroOrOne,
                require_discretionary_data_recurring_or_single: true,
                ..SecRules::default()
            },
            SecCode::Tel => SecRules {
                addenda05: ZeroOrOne,
                forbid_credit_transaction_codes: true,
                ..SecRules::default()
            },
            SecCode::Ctx => SecRules {
                addenda05: RequiredWithCount,
                require_individual_name: true,
                ..SecRules::default()
            },
            SecCode::Arc | SecCode::Boc | SecCode::Pop => SecRules {
                addenda05: None_,
                ..SecRules::default()
            },
            SecCode::Mte | SecCode::Pos | SecCode::Shr => SecRules {
                addenda02: Required,
                addenda05: None_,
                require_individual_name: true,
                check_identification_number: matches!(self, SecCode::Mte),
                ..SecRules::default()
            },
            SecCode::Rck | SecCode::Xck => SecRules {
                addenda05: None_,
                forbid_credit_transaction_codes: true,
                ..SecRules::default()
            },
            SecCode::Enr => SecRules {
                addenda05: RequiredEnrollmentPayload,
                ..SecRules::default()
            },
            SecCode::Cor => SecRules {
                addenda98: ExactlyOne,
                addenda05: None_,
                ..SecRules::default()
            },
            SecCode::Dne => SecRules {
                addenda05: ZeroOrOne,
                ..SecRules::default()
            },
            SecCode::Atx | SecCode::Ack | SecCode::Cie => SecRules {
                addenda05: ZeroOrOne,
                ..SecRules::default()
            },
            SecCode::Trc | SecCode::Trx => SecRules {
                addenda05: None_,
                ..SecRules::default()
            },
            SecCode::Adv => SecRules {
                addenda05: None_,
                is_adv: true,
                ..SecRules::default()
            },
            SecCode::Iat => SecRules {
                addenda05: None_,
                is_iat: true,
                require_individual_name: true,
                ..SecRules::default()
            },
        }
    }
}

impl fmt::Display for SecCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecCode {
    type Err = AchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SecCode::ALL
            .iter()
            .copied()
            .find(|sec| sec.as_str() == s.trim())
            .ok_or_else(|| AchError::BatchSecType(s.to_string()))
    }
}

/// How many Addenda05 records (or equivalent) an entry of this SEC must
/// carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddendaRequirement {
    #[default]
    None_,
    ZeroOrOne,
    /// Exactly one, i.e. CTX's addenda05 plus a numeric addenda count field.
    RequiredWithCount,
    /// ENR: exactly one addenda05 whose payload is a `*`-delimited
    /// signed-enrollment record.
    RequiredEnrollmentPayload,
    ExactlyOne,
    Required,
}

/// Data-driven validation rules for one SEC code, consulted by
/// [`crate::batch::Batch::validate_sec_specific`].
#[derive(Debug, Clone, Copy)]
pub struct SecRules {
    pub addenda02: AddendaRequirement,
    pub addenda05: AddendaRequirement,
    pub addenda98: AddendaRequirement,
    pub addenda99: AddendaRequirement,
    pub require_individual_name: bool,
    pub require_discretionary_data_recurring_or_single: bool,
    pub forbid_credit_transaction_codes: bool,
    pub check_identification_number: bool,
    pub is_adv: bool,
    pub is_iat: bool,
}

impl Default for SecRules {
    fn default() -> Self {
        SecRules {
            addenda02: AddendaRequirement::None_,
            addenda05: AddendaRequirement::None_,
            addenda98: AddendaRequirement::None_,
            addenda99: AddendaRequirement::None_,
            require_individual_name: false,
            require_discretionary_data_recurring_or_single: false,
            forbid_credit_transaction_codes: false,
            check_identification_number: false,
            is_adv: false,
            is_iat: false,
        }
    }
}
