//! Error types for ACH file parsing, validation, and assembly.

use thiserror::Error;

/// Errors that can occur while decoding, validating, or assembling an ACH
/// file. Every variant is a tagged value — the crate never panics or
/// unwinds on malformed input.
#[derive(Error, Debug)]
pub enum AchError {
    /// A field's formatted width exceeds its column width.
    #[error("field '{field}' overflows its {width}-byte width: {value:?}")]
    FieldOverflow {
        field: &'static str,
        value: String,
        width: usize,
    },

    /// An alphameric field contains a control character or byte above 0x7E.
    #[error("field '{field}' contains an inadmissible character: {value:?}")]
    InvalidCharacter { field: &'static str, value: String },

    /// A 9-digit routing number failed the ABA check-digit rule.
    #[error("invalid routing number '{0}': check digit mismatch")]
    InvalidRoutingNumber(String),

    /// A 6-digit YYMMDD field is not a calendar-valid date.
    #[error("invalid date '{0}': not a valid YYMMDD date")]
    InvalidDate(String),

    /// A 4-digit HHMM field is out of the 0000-2359 range.
    #[error("invalid time '{0}': not a valid HHMM time")]
    InvalidTime(String),

    /// The record type is invalid or unsupported.
    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    /// The line length does not match the expected 94 characters.
    #[error("Invalid line length: expected 94, got {0}")]
    InvalidLineLength(usize),

    /// A numeric field could not be parsed.
    #[error("Invalid numeric field '{field}': {source}")]
    InvalidNumber {
        field: &'static str,
        source: std::num::ParseIntError,
    },

    /// The file structure is invalid (e.g., missing header or control records).
    #[error("Invalid file structure: {0}")]
    InvalidStructure(String),

    /// The file is empty or contains no valid records.
    #[error("Empty file")]
    EmptyFile,

    /// A batch is missing required records.
    #[error("Incomplete batch: {0}")]
    IncompleteBatch(String),

    /// `ErrConstructor`: a field required before `Create` is missing or
    /// invalid.
    #[error("ErrConstructor: {0}")]
    Constructor(String),

    /// `ErrBatchSECType`: the batch's declared SEC code does not match the
    /// batch family that is validating it.
    #[error("ErrBatchSECType: SEC code '{0}' is not valid for this batch")]
    BatchSecType(String),

    /// A service class / transaction code combination is disallowed.
    #[error(
        "ErrBatchServiceClassTranCode: service class {service_class} does not accept transaction code {transaction_code}"
    )]
    BatchServiceClassTranCode {
        service_class: u32,
        transaction_code: u32,
    },

    /// `ErrBatchAmountZero`: an entry's amount is zero where the SEC
    /// forbids it.
    #[error("ErrBatchAmountZero: amount must be greater than zero")]
    BatchAmountZero,

    /// `ErrAddendaTypeCode`: an addenda's type code is not valid for the
    /// entry's SEC code.
    #[error("ErrAddendaTypeCode: addenda type code '{0}' is not valid here")]
    AddendaTypeCode(String),

    /// `ErrBatchAddendaCategory`: an addenda kind is attached that this SEC
    /// does not permit at all.
    #[error("ErrBatchAddendaCategory: {0}")]
    BatchAddendaCategory(String),

    /// `ErrIdentificationNumber`: identification number is all spaces or
    /// all zeros where that is forbidden.
    #[error("ErrIdentificationNumber: identification number must not be all spaces or all zeros")]
    IdentificationNumber,

    /// `ErrValidState`: not a valid two-letter USPS state/territory code.
    #[error("ErrValidState: '{0}' is not a valid two-letter US state code")]
    ValidState(String),

    /// `ErrAddendaRecordIndicator`: the addenda record indicator does not
    /// agree with whether addenda are actually attached.
    #[error(
        "ErrAddendaRecordIndicator: addenda record indicator does not match attached addenda"
    )]
    AddendaRecordIndicator,

    /// A declared aggregate (hash, count, or total) does not match the
    /// value computed from the batch/file contents.
    #[error("aggregate mismatch on '{field}': declared {declared}, computed {computed}")]
    AggregateMismatch {
        field: &'static str,
        declared: u64,
        computed: u64,
    },

    /// A batch number is not 1-based and strictly increasing across the file.
    #[error("batch numbers must be 1-based and strictly increasing, found {0} out of order")]
    BatchNumberOutOfOrder(u32),

    /// An entry carries more of one addenda kind than the format permits.
    #[error("entry carries {actual} {field} records, exceeding the limit of {max}")]
    AddendaCountExceeded {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// An error propagated unmodified from the byte source/sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AchError {
    pub(crate) fn field_overflow(field: &'static str, value: &str, width: usize) -> Self {
        AchError::FieldOverflow {
            field,
            value: value.to_string(),
            width,
        }
    }

    pub(crate) fn invalid_character(field: &'static str, value: &str) -> Self {
        AchError::InvalidCharacter {
            field,
            value: value.to_string(),
        }
    }

    /// Build the `ErrBatchServiceClassTranCode` variant, mirroring the
    /// source's `NewErrBatchServiceClassTranCode(serviceClass, tranCode)`
    /// constructor function.
    pub fn new_batch_service_class_tran_code(service_class: u32, transaction_code: u32) -> Self {
        AchError::BatchServiceClassTranCode {
            service_class,
            transaction_code,
        }
    }

    /// Prefix an error with a field path ("batch N, entry M, field X") the
    /// way user-facing diagnostics are expected to read. Wraps the error in
    /// `Constructor` carrying the combined message; use at call sites that
    /// have path context the lower-level error doesn't.
    pub fn with_path(self, path: &str) -> Self {
        AchError::Constructor(format!("{path}: {self}"))
    }
}
