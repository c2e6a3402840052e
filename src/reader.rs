//! Streaming line-oriented Reader: assembles a [`File`] from raw ACH file
//! bytes, dispatching on each line's record-type discriminant per the
//! state machine in SPEC_FULL.md §4.3.

use std::io::Read as IoRead;

use crate::adv_batch::AdvBatch;
use crate::batch::Batch;
use crate::constants::RECORD_LENGTH;
use crate::entry::Entry;
use crate::error::AchError;
use crate::file::File;
use crate::records::{
    is_padding_line, Addenda02, Addenda05, Addenda10, Addenda11, Addenda12, Addenda13, Addenda14,
    Addenda15, Addenda16, Addenda17, Addenda18, Addenda98, Addenda99, BatchControl,
    BatchControlAdv, BatchHeader, EntryDetail, EntryDetailAdv, FileControl, FileHeader,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum State {
    Initial,
    /// Inside the file, no entry currently open (either no batch open, or
    /// the last thing seen was a Batch Header or Batch Control).
    InFile,
    /// Inside a batch, at least one entry parsed (addenda may attach, or a
    /// new entry/batch control may follow).
    InEntry,
    /// File Control has been read; only padding may follow.
    Closed,
}

enum OpenBatch {
    Standard(Batch),
    Adv(AdvBatch),
}

/// Split raw ACH content into 94-byte records. Accepts LF or CRLF line
/// terminators; if the content has no terminators at all, splits every 94
/// bytes instead (a valid, if unusual, wire encoding).
fn split_into_records(content: &str) -> Result<Vec<String>, AchError> {
    if content.is_empty() {
        return Err(AchError::EmptyFile);
    }
    if content.contains('\n') {
        Ok(content
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.to_string())
            .collect())
    } else {
        let bytes = content.as_bytes();
        if bytes.len() % RECORD_LENGTH != 0 {
            return Err(AchError::InvalidLineLength(bytes.len() % RECORD_LENGTH));
        }
        Ok(bytes
            .chunks(RECORD_LENGTH)
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect())
    }
}

/// Parse a complete ACH file from its textual content.
pub fn read_str(content: &str) -> Result<File, AchError> {
    let records = split_into_records(content)?;
    if records.is_empty() {
        return Err(AchError::EmptyFile);
    }

    let mut state = State::Initial;
    let mut file_header: Option<FileHeader> = None;
    let mut batches: Vec<Batch> = Vec::new();
    let mut adv_batches: Vec<AdvBatch> = Vec::new();
    let mut current: Option<OpenBatch> = None;
    let mut file_control: Option<FileControl> = None;

    for line in &records {
        if line.len() != RECORD_LENGTH {
            return Err(AchError::InvalidLineLength(line.len()));
        }
        let record_type = &line[0..1];

        tracing::trace!(record_type, state = ?state, "record read");

        match (state, record_type) {
            (State::Initial, "1") => {
                file_header = Some(FileHeader::parse(line)?);
                state = State::InFile;
            }

            (State::InFile, "5") => {
                if current.is_some() {
                    return Err(AchError::InvalidStructure(
                        "a new Batch Header appeared before the previous batch's control record"
                            .to_string(),
                    ));
                }
                let header = BatchHeader::parse(line)?;
                let sec = header.sec_code()?;
                current = Some(if sec.is_adv() {
                    OpenBatch::Adv(AdvBatch::new(header))
                } else {
                    OpenBatch::Standard(Batch::new(header))
                });
            }

            (State::InFile, "9") => {
                if !is_padding_line(line) {
                    file_control = Some(FileControl::parse(line)?);
                }
                state = State::Closed;
            }

            (State::InFile, "6") | (State::InEntry, "6") => {
                match current.as_mut() {
                    Some(OpenBatch::Standard(batch)) => {
                        batch.add_entry(Entry::new(EntryDetail::parse(line)?));
                    }
                    Some(OpenBatch::Adv(batch)) => {
                        batch.add_entry(EntryDetailAdv::parse(line)?);
                    }
                    None => {
                        return Err(AchError::InvalidStructure(
                            "Entry Detail seen with no open batch".to_string(),
                        ));
                    }
                }
                state = State::InEntry;
            }

            (State::InEntry, "7") => {
                let batch = match current.as_mut() {
                    Some(OpenBatch::Standard(batch)) => batch,
                    Some(OpenBatch::Adv(_)) => {
                        return Err(AchError::InvalidStructure(
                            "ADV batches carry no addenda records".to_string(),
                        ));
                    }
                    None => {
                        return Err(AchError::InvalidStructure(
                            "addenda seen with no open entry".to_string(),
                        ));
                    }
                };
                let is_iat = batch.header.sec_code()?.is_iat();
                let entry = batch.entries.last_mut().ok_or_else(|| {
                    AchError::InvalidStructure("addenda seen with no open entry".to_string())
                })?;
                let type_code = &line[1..3];
                match type_code {
                    "02" => entry.addenda02 = Some(Addenda02::parse(line)?),
                    "05" => entry.addenda05.push(Addenda05::parse(line)?),
                    "98" => entry.addenda98 = Some(Addenda98::parse(line)?),
                    "99" => entry.addenda99 = Some(Addenda99::parse(line)?),
                    "10" | "11" | "12" | "13" | "14" | "15" | "16" | "17" | "18" if !is_iat => {
                        return Err(AchError::BatchAddendaCategory(format!(
                            "addenda{type_code} is only valid inside an IAT batch"
                        )));
                    }
                    "10" => entry.iat_addenda.addenda10 = Some(Addenda10::parse(line)?),
                    "11" => entry.iat_addenda.addenda11 = Some(Addenda11::parse(line)?),
                    "12" => entry.iat_addenda.addenda12 = Some(Addenda12::parse(line)?),
                    "13" => entry.iat_addenda.addenda13 = Some(Addenda13::parse(line)?),
                    "14" => entry.iat_addenda.addenda14 = Some(Addenda14::parse(line)?),
                    "15" => entry.iat_addenda.addenda15 = Some(Addenda15::parse(line)?),
                    "16" => entry.iat_addenda.addenda16 = Some(Addenda16::parse(line)?),
                    "17" => entry.iat_addenda.addenda17.push(Addenda17::parse(line)?),
                    "18" => entry.iat_addenda.addenda18.push(Addenda18::parse(line)?),
                    other => return Err(AchError::AddendaTypeCode(other.to_string())),
                }
            }

            (State::InEntry, "8") => match current.take() {
                Some(OpenBatch::Standard(mut batch)) => {
                    batch.control = BatchControl::parse(line)?;
                    batches.push(batch);
                    state = State::InFile;
                }
                Some(OpenBatch::Adv(mut batch)) => {
                    batch.control = BatchControlAdv::parse(line)?;
                    adv_batches.push(batch);
                    state = State::InFile;
                }
                None => {
                    return Err(AchError::InvalidStructure(
                        "Batch Control seen with no open batch".to_string(),
                    ));
                }
            },

            (State::Closed, "9") => {
                if !is_padding_line(line) {
                    return Err(AchError::InvalidStructure(
                        "more than one non-padding File Control".to_string(),
                    ));
                }
            }

            (state, record_type) => {
                return Err(AchError::InvalidStructure(format!(
                    "unexpected record type '{record_type}' in state {state:?}"
                )));
            }
        }
    }

    let file_header = file_header.ok_or(AchError::EmptyFile)?;
    if state != State::Closed {
        return Err(AchError::IncompleteBatch(
            "file ended without a File Control record".to_string(),
        ));
    }
    let file_control = file_control.ok_or_else(|| {
        AchError::InvalidStructure("file contains no File Control record".to_string())
    })?;

    Ok(File {
        header: file_header,
        batches,
        adv_batches,
        control: file_control,
    })
}

/// Read a complete ACH file from any byte source.
pub fn read(mut source: impl IoRead) -> Result<File, AchError> {
    let mut content = String::new();
    source.read_to_string(&mut content)?;
    read_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "101 03130001202313801041908161055A094101Federal Reserve Bank   My Bank Name           12345678\n5225Payee Name                          231380104 ARCACH ARC         190816   1121042880000001\n62723138010412345678         0000250000123879654      ABC Company             0121042880000001\n82250000010023138010000000250000000000000000231380104                          121042880000001\n9000001000001000000010023138010000000250000000000000000\n";

    #[test]
    fn reads_a_single_batch_file() {
        let file = read_str(SAMPLE).unwrap();
        assert_eq!(file.header.immediate_origin, "231380104");
        assert_eq!(file.batches.len(), 1);
        assert_eq!(file.batches[0].entries.len(), 1);
        assert_eq!(file.batches[0].entries[0].detail.amount, 250_000);
        assert_eq!(file.control.batch_count, 1);
    }

    #[test]
    fn rejects_empty_content() {
        assert!(read_str("").is_err());
    }

    #[test]
    fn rejects_entry_detail_before_any_batch() {
        let bad = "101 03130001202313801041908161055A094101Federal Reserve Bank   My Bank Name           12345678\n62723138010412345678         0000250000123879654      ABC Company             0121042880000001\n";
        assert!(read_str(bad).is_err());
    }

    #[test]
    fn accepts_fixed_width_block_with_no_terminators() {
        let joined: String = SAMPLE.lines().collect::<Vec<_>>().join("");
        let file = read_str(&joined).unwrap();
        assert_eq!(file.batches.len(), 1);
    }

    #[test]
    fn rejects_a_second_batch_header_before_the_first_batch_is_closed() {
        let lines: Vec<&str> = SAMPLE.lines().collect();
        let mut bad: Vec<&str> = vec![lines[0], lines[1], lines[1]];
        bad.extend_from_slice(&lines[2..]);
        let content = bad.join("\n") + "\n";
        assert!(read_str(&content).is_err());
    }

    #[test]
    fn rejects_iat_addenda_inside_a_non_iat_batch() {
        let addenda10_line = Addenda10::default().to_line().unwrap();
        let mut lines: Vec<&str> = SAMPLE.lines().collect();
        lines.insert(3, &addenda10_line); // after the entry detail, before batch control
        let content = lines.join("\n") + "\n";
        let err = read_str(&content).unwrap_err();
        assert!(matches!(err, AchError::BatchAddendaCategory(_)));
    }
}
