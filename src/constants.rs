//! Crate-wide fixed-width format constants and hostile-input ceilings.

/// Every NACHA record is exactly this many bytes wide.
pub const RECORD_LENGTH: usize = 94;

/// Records are grouped into blocks of 10 on output; the file is padded with
/// all-'9' records until the block is full.
pub const RECORDS_PER_BLOCK: usize = 10;

/// Maximum number of Addenda05 records a single entry may carry. This is the
/// format's inherent cap (four decimal digits in the addenda sequence field).
pub const MAX_ADDENDA05_PER_ENTRY: usize = 9999;

/// Maximum Addenda17 records per IAT entry.
pub const MAX_ADDENDA17_PER_ENTRY: usize = 2;

/// Maximum Addenda18 records per IAT entry.
pub const MAX_ADDENDA18_PER_ENTRY: usize = 5;

/// Defensive ceiling on total records accepted by the Reader, to protect
/// against unbounded memory growth from a hostile or malformed input.
pub const MAX_TOTAL_RECORDS: usize = 10_000_000;
