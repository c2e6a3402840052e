//! Sink-oriented writer: serializes a [`File`] to any [`std::io::Write`],
//! one 94-byte record per line, LF-terminated, padded to a block boundary.

use std::io::Write as IoWrite;

use crate::error::AchError;
use crate::file::File;

/// Write `file` to `sink`. Does not call `file.create()` first; the caller
/// is expected to have already derived aggregates via `File::create` (or to
/// be writing a file whose records were read back unmodified).
pub fn write(file: &File, mut sink: impl IoWrite) -> Result<(), AchError> {
    for line in file.to_lines()? {
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Batch;
    use crate::entry::Entry;
    use crate::records::{BatchHeader, EntryDetail, FileHeader};

    fn sample_file() -> File {
        let fh = FileHeader {
            immediate_destination: "031300012".to_string(),
            immediate_origin: "231380104".to_string(),
            file_creation_date: "190816".to_string(),
            file_creation_time: "1055".to_string(),
            ..Default::default()
        };
        let mut file = File::new(fh);
        let header = BatchHeader {
            service_class_code: 220,
            company_identification: "1210428821".to_string(),
            standard_entry_class_code: "PPD".to_string(),
            odfi_identification: "23138010".to_string(),
            ..Default::default()
        };
        let mut batch = Batch::new(header);
        let mut d = EntryDetail {
            transaction_code: 22,
            dfi_account_number: "12345678".to_string(),
            amount: 500,
            individual_name: "Jane Doe".to_string(),
            ..Default::default()
        };
        d.set_rdfi("231380104").unwrap();
        batch.add_entry(Entry::new(d));
        file.add_batch(batch);
        file
    }

    #[test]
    fn writes_every_line_lf_terminated() {
        let mut file = sample_file();
        file.create().unwrap();
        let mut buf = Vec::new();
        write(&file, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with('1'));
        assert!(lines.last().unwrap().starts_with('9'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn round_trips_through_reader() {
        let mut file = sample_file();
        file.create().unwrap();
        let mut buf = Vec::new();
        write(&file, &mut buf).unwrap();
        let parsed = crate::reader::read_str(&String::from_utf8(buf).unwrap()).unwrap();
        assert_eq!(parsed.batches.len(), 1);
        assert_eq!(parsed.batches[0].entries[0].detail.amount, 500);
    }
}
