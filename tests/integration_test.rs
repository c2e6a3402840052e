//! Integration tests: build a file through the public `File`/`Batch`/`Entry`
//! API, run it through `Create`, write it out, and read it back.

use ach_core::{reader, Batch, BatchHeader, Entry, EntryDetail, File, FileHeader};

fn header(immediate_destination: &str, immediate_origin: &str) -> FileHeader {
    FileHeader {
        immediate_destination: immediate_destination.to_string(),
        immediate_origin: immediate_origin.to_string(),
        file_creation_date: "140903".to_string(),
        file_creation_time: "0123".to_string(),
        immediate_destination_name: "YOUR BANK".to_string(),
        immediate_origin_name: "YOUR COMPANY".to_string(),
        ..Default::default()
    }
}

fn entry(transaction_code: u32, rdfi: &str, amount: u64, name: &str) -> Entry {
    let mut d = EntryDetail {
        transaction_code,
        dfi_account_number: "11232132".to_string(),
        amount,
        individual_name: name.to_string(),
        ..Default::default()
    };
    d.set_rdfi(rdfi).unwrap();
    Entry::new(d)
}

#[test]
fn builds_and_round_trips_a_mixed_ppd_batch() {
    let mut file = File::new(header("123456780", "1234567801"));
    let mut batch = Batch::new(BatchHeader {
        service_class_code: 200,
        company_name: "YOUR COMPANY".to_string(),
        company_identification: "1234567890".to_string(),
        standard_entry_class_code: "PPD".to_string(),
        company_entry_description: "PAYROLL".to_string(),
        odfi_identification: "12345678".to_string(),
        ..Default::default()
    });
    batch.add_entry(entry(22, "231380104", 1000, "Alice Wanderdust"));
    batch.add_entry(entry(27, "231380104", 15000, "Billy Holiday"));
    file.add_batch(batch);

    file.create().unwrap();
    let text = file.write_string().unwrap();

    let parsed = reader::read_str(&text).unwrap();
    assert_eq!(parsed.batches.len(), 1);
    let batch = &parsed.batches[0];
    assert_eq!(batch.header.company_name, "YOUR COMPANY");
    assert_eq!(batch.header.standard_entry_class_code, "PPD");
    assert_eq!(batch.entries.len(), 2);
    assert_eq!(batch.entries[0].detail.amount, 1000);
    assert_eq!(batch.entries[0].detail.individual_name, "Alice Wanderdust");
    assert_eq!(batch.entries[1].detail.amount, 15000);
    assert_eq!(parsed.control.batch_count, 1);
    assert_eq!(parsed.control.entry_addenda_count, 2);
}

#[test]
fn ctx_batch_carries_multiple_addenda05_records() {
    let mut file = File::new(header("123456780", "1234567801"));
    let mut batch = Batch::new(BatchHeader {
        service_class_code: 200,
        company_name: "YOUR COMPANY".to_string(),
        company_identification: "1234567890".to_string(),
        standard_entry_class_code: "CTX".to_string(),
        odfi_identification: "12345678".to_string(),
        ..Default::default()
    });
    let mut e = entry(22, "231380104", 5000, "Trading Partner Inc");
    e.addenda05.push(ach_core::Addenda05 {
        payment_related_information: "invoice 1001".to_string(),
        ..Default::default()
    });
    e.addenda05.push(ach_core::Addenda05 {
        payment_related_information: "invoice 1002".to_string(),
        ..Default::default()
    });
    e.detail.addenda_record_indicator = 1;
    batch.add_entry(e);
    file.add_batch(batch);

    file.create().unwrap();
    let text = file.write_string().unwrap();
    let parsed = reader::read_str(&text).unwrap();

    let entry = &parsed.batches[0].entries[0];
    assert_eq!(entry.addenda05.len(), 2);
    assert_eq!(entry.addenda05[0].addenda_sequence_number, 1);
    assert_eq!(entry.addenda05[1].addenda_sequence_number, 2);
    assert_eq!(parsed.control.entry_addenda_count, 3);
}

#[test]
fn credits_only_batch_rejects_a_debit_entry() {
    let mut file = File::new(header("123456780", "1234567801"));
    let mut batch = Batch::new(BatchHeader {
        service_class_code: 220,
        company_name: "YOUR COMPANY".to_string(),
        company_identification: "1234567890".to_string(),
        standard_entry_class_code: "PPD".to_string(),
        odfi_identification: "12345678".to_string(),
        ..Default::default()
    });
    batch.add_entry(entry(27, "231380104", 1000, "Billy Holiday"));
    file.add_batch(batch);
    assert!(file.create().is_err());
}

#[test]
fn debits_only_batch_accepts_two_debit_entries() {
    let mut file = File::new(header("123456780", "1234567801"));
    let mut batch = Batch::new(BatchHeader {
        service_class_code: 225,
        company_name: "YOUR COMPANY".to_string(),
        company_identification: "1234567890".to_string(),
        standard_entry_class_code: "PPD".to_string(),
        odfi_identification: "12345678".to_string(),
        ..Default::default()
    });
    batch.add_entry(entry(27, "231380104", 15000, "Billy Holiday"));
    batch.add_entry(entry(27, "231380104", 5000, "Jane Doe"));
    file.add_batch(batch);
    file.create().unwrap();

    let text = file.write_string().unwrap();
    let parsed = reader::read_str(&text).unwrap();
    assert_eq!(parsed.control.total_debit_entry_dollar_amount, 20000);
    assert_eq!(parsed.control.total_credit_entry_dollar_amount, 0);
}

#[test]
fn rejects_empty_content() {
    assert!(reader::read_str("").is_err());
}

#[test]
fn rejects_a_short_line() {
    let result = reader::read_str("101 123");
    assert!(result.is_err());
}

#[test]
fn rejects_an_unknown_record_type() {
    let line = "X".repeat(94) + "\n";
    assert!(reader::read_str(&line).is_err());
}

#[test]
fn rejects_entry_before_any_batch_header() {
    let fh_line = header("123456780", "1234567801").to_line().unwrap();
    let mut d = entry(22, "231380104", 1000, "Alice Wanderdust");
    d.detail.set_trace_number("12345678", 1);
    let entry_line = d.detail.to_line().unwrap();
    let content = format!("{fh_line}\n{entry_line}\n");
    assert!(reader::read_str(&content).is_err());
}

#[test]
fn rejects_a_batch_with_no_control_record() {
    let mut file = File::new(header("123456780", "1234567801"));
    let mut batch = Batch::new(BatchHeader {
        service_class_code: 200,
        company_identification: "1234567890".to_string(),
        standard_entry_class_code: "PPD".to_string(),
        odfi_identification: "12345678".to_string(),
        ..Default::default()
    });
    batch.add_entry(entry(22, "231380104", 1000, "Alice Wanderdust"));
    batch.create().unwrap();
    file.add_batch(batch);
    file.create().unwrap();

    let mut lines = file.to_lines().unwrap();
    lines.remove(3); // drop the batch control record
    let content: String = lines.join("\n") + "\n";
    assert!(reader::read_str(&content).is_err());
}
