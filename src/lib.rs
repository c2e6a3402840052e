//! # ach-core
//!
//! ACH (Automated Clearing House) file reader, writer, and validator for
//! Rust, following the NACHA (National Automated Clearing House
//! Association) file format specification.
//!
//! ## Features
//!
//! - Read and write fixed-width NACHA files: File Header/Control, Batch
//!   Header/Control, Entry Detail, and every addenda kind (02, 05, 98, 99,
//!   the IAT 10-18 chain, and the ADV variants)
//! - All twenty-odd Standard Entry Class codes, validated against a
//!   data-driven per-SEC rule table
//! - `Create`/`Validate` lifecycle: derive aggregate fields (hashes, totals,
//!   trace numbers, block count) from entries, then validate them
//! - Typed errors for every malformed-input and failed-invariant case; the
//!   crate never panics on untrusted input
//!
//! ## Example
//!
//! ```no_run
//! use ach_core::{Batch, BatchHeader, Entry, EntryDetail, File, FileHeader};
//!
//! let mut file = File::new(FileHeader {
//!     immediate_destination: "031300012".to_string(),
//!     immediate_origin: "231380104".to_string(),
//!     file_creation_date: "230101".to_string(),
//!     file_creation_time: "0830".to_string(),
//!     ..Default::default()
//! });
//!
//! let mut batch = Batch::new(BatchHeader {
//!     service_class_code: 220,
//!     company_identification: "1210428821".to_string(),
//!     standard_entry_class_code: "PPD".to_string(),
//!     odfi_identification: "23138010".to_string(),
//!     ..Default::default()
//! });
//!
//! let mut entry = EntryDetail {
//!     transaction_code: 22,
//!     dfi_account_number: "12345678".to_string(),
//!     amount: 10_000,
//!     individual_name: "John Doe".to_string(),
//!     ..Default::default()
//! };
//! entry.set_rdfi("231380104").unwrap();
//! batch.add_entry(Entry::new(entry));
//! file.add_batch(batch);
//!
//! file.create().unwrap();
//! let text = file.write_string().unwrap();
//! let parsed = ach_core::reader::read_str(&text).unwrap();
//! assert_eq!(parsed.batches.len(), 1);
//! ```

mod adv_batch;
mod batch;
mod constants;
mod entry;
mod error;
mod field;
pub mod file;
pub mod reader;
mod records;
mod sec;
mod transaction;
mod validate;
pub mod writer;

pub use adv_batch::AdvBatch;
pub use batch::Batch;
pub use entry::{Entry, IatAddendaChain};
pub use error::AchError;
pub use file::File;
pub use records::{
    Addenda02, Addenda05, Addenda10, Addenda11, Addenda12, Addenda13, Addenda14, Addenda15,
    Addenda16, Addenda17, Addenda18, Addenda98, Addenda99, BatchControl, BatchControlAdv,
    BatchHeader, EntryDetail, EntryDetailAdv, FileControl, FileHeader,
};
pub use sec::{AddendaRequirement, SecCode, SecRules};
pub use transaction::ServiceClassCode;
