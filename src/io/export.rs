//! CSV snapshot of the stored words.
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::Error;
use crate::processing::Word;

/// One line of the snapshot.
#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub text: &'a str,
    pub romanized: &'a str,
    pub pos_raw: &'a str,
    pub pos_english: &'a str,
    pub source: &'a str,
    pub timestamp: String,
}

impl<'a> From<&'a Word> for ExportRow<'a> {
    fn from(w: &'a Word) -> Self {
        Self {
            text: &w.text,
            romanized: &w.romanized,
            pos_raw: &w.pos_raw,
            pos_english: &w.pos_english,
            source: &w.source_id,
            timestamp: w.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Write `words` as CSV (with a header line) into `out`.
pub fn write_csv<W: Write>(out: W, words: &[Word]) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);
    for word in words {
        writer.serialize(ExportRow::from(word))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `words` as CSV into a file at `dst`.
pub fn export_csv(dst: &Path, words: &[Word]) -> Result<(), Error> {
    let file = std::fs::File::create(dst)?;
    write_csv(file, words)?;
    info!("exported {} words to {:?}", words.len(), dst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn word() -> Word {
        Word {
            text: "本".to_string(),
            romanized: "hon".to_string(),
            pos_raw: "名詞".to_string(),
            pos_normalized: "Noun".to_string(),
            pos_english: "Noun".to_string(),
            source_id: "https://example.com/a, b".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2024, 4, 1)
                .unwrap()
                .and_hms_opt(9, 5, 0)
                .unwrap(),
        }
    }

    #[test]
    fn columns() {
        let mut out = Vec::new();
        write_csv(&mut out, &[word()]).unwrap();
        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("text,romanized,pos_raw,pos_english,source,timestamp")
        );
        assert_eq!(
            lines.next(),
            Some("本,hon,名詞,Noun,\"https://example.com/a, b\",2024-04-01 09:05:00")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_snapshot() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        // no record, no header
        assert!(out.is_empty());
    }

    #[test]
    fn to_file() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("words.csv");
        export_csv(&dst, &[word(), word()]).unwrap();
        let content = std::fs::read_to_string(dst).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}
