//! Round-trip coverage for `reader::read`/`read_str` and `writer::write`,
//! including the fixed-width-block encoding with no line terminators.

use ach_core::{reader, writer, Batch, BatchHeader, Entry, EntryDetail, File, FileHeader};

fn sample_file() -> File {
    let fh = FileHeader {
        immediate_destination: "031300012".to_string(),
        immediate_origin: "231380104".to_string(),
        file_creation_date: "190816".to_string(),
        file_creation_time: "1055".to_string(),
        immediate_destination_name: "Federal Reserve Bank".to_string(),
        immediate_origin_name: "My Bank Name".to_string(),
        ..Default::default()
    };
    let mut file = File::new(fh);
    let header = BatchHeader {
        service_class_code: 220,
        company_name: "My Company".to_string(),
        company_identification: "1210428821".to_string(),
        standard_entry_class_code: "PPD".to_string(),
        odfi_identification: "23138010".to_string(),
        ..Default::default()
    };
    let mut batch = Batch::new(header);
    let mut d = EntryDetail {
        transaction_code: 22,
        dfi_account_number: "12345678".to_string(),
        amount: 2500,
        individual_name: "John Doe".to_string(),
        ..Default::default()
    };
    d.set_rdfi("231380104").unwrap();
    batch.add_entry(Entry::new(d));
    file.add_batch(batch);
    file
}

#[test]
fn writer_output_reads_back_identically() {
    let mut file = sample_file();
    file.create().unwrap();

    let mut buf = Vec::new();
    writer::write(&file, &mut buf).unwrap();

    let parsed = reader::read(&buf[..]).unwrap();
    assert_eq!(parsed.header.immediate_origin, file.header.immediate_origin);
    assert_eq!(parsed.control.entry_hash, file.control.entry_hash);
    assert_eq!(parsed.batches[0].entries[0].detail.amount, 2500);
}

#[test]
fn reads_a_file_with_no_line_terminators() {
    let mut file = sample_file();
    file.create().unwrap();
    let joined: String = file.to_lines().unwrap().concat();
    assert_eq!(joined.len() % 94, 0);

    let parsed = reader::read_str(&joined).unwrap();
    assert_eq!(parsed.batches[0].entries.len(), 1);
}

#[test]
fn reads_a_file_with_crlf_terminators() {
    let mut file = sample_file();
    file.create().unwrap();
    let content = file.to_lines().unwrap().join("\r\n") + "\r\n";

    let parsed = reader::read_str(&content).unwrap();
    assert_eq!(parsed.batches[0].entries.len(), 1);
    assert_eq!(parsed.control.batch_count, 1);
}

#[test]
fn reader_rejects_a_stray_byte_after_the_final_block() {
    let mut file = sample_file();
    file.create().unwrap();
    let mut joined: String = file.to_lines().unwrap().concat();
    joined.push('1');
    assert!(reader::read_str(&joined).is_err());
}

#[test]
fn reader_read_accepts_any_io_read_source() {
    let mut file = sample_file();
    file.create().unwrap();
    let text = file.write_string().unwrap();
    let cursor = std::io::Cursor::new(text.into_bytes());
    let parsed = reader::read(cursor).unwrap();
    assert_eq!(parsed.batches.len(), 1);
}
