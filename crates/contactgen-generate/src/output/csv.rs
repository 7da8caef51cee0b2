use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::errors::GenerationError;

/// Counts reported after a successful export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvSummary {
    pub rows_written: u64,
    pub bytes_written: u64,
}

/// Write a materialized dataset as CSV.
pub fn write_dataset_csv(path: &Path, dataset: &Dataset) -> Result<CsvSummary, GenerationError> {
    write_records_csv(path, dataset.header(), dataset.rows().iter().map(Ok))
}

/// Write the header and then each row as it is produced.
///
/// Output goes to a sibling `.tmp` file that is renamed over `path` only once
/// every row is flushed; on any error the temporary file is removed and
/// `path` is left untouched.
pub fn write_records_csv<H, I, R, T>(
    path: &Path,
    header: &[H],
    rows: I,
) -> Result<CsvSummary, GenerationError>
where
    H: AsRef<[u8]>,
    I: IntoIterator<Item = Result<R, GenerationError>>,
    R: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let result = write_to(&tmp_path, header, rows).and_then(|summary| {
        std::fs::rename(&tmp_path, path)?;
        Ok(summary)
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result
}

fn write_to<H, I, R, T>(path: &Path, header: &[H], rows: I) -> Result<CsvSummary, GenerationError>
where
    H: AsRef<[u8]>,
    I: IntoIterator<Item = Result<R, GenerationError>>,
    R: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(header)?;

    let mut rows_written = 0_u64;
    for row in rows {
        writer.write_record(row?)?;
        rows_written += 1;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    let file = counting.inner.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;

    Ok(CsvSummary {
        rows_written,
        bytes_written: counting.bytes,
    })
}

fn temp_path(path: &Path) -> Result<PathBuf, GenerationError> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid output path '{}'", path.display()),
        )
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("contactgen_csv_{label}_{}", uuid::Uuid::new_v4()));
        create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn quotes_reserved_characters() {
        let dir = temp_dir("quotes");
        let path = dir.join("out.csv");
        let rows = vec![Ok(vec!["Smith, Jr.".to_string(), "say \"hi\"".to_string()])];

        let summary = write_records_csv(&path, &["name", "note"], rows).expect("write csv");
        assert_eq!(summary.rows_written, 1);

        let contents = std::fs::read_to_string(&path).expect("read csv");
        assert_eq!(contents, "name,note\n\"Smith, Jr.\",\"say \"\"hi\"\"\"\n");
        assert_eq!(summary.bytes_written, contents.len() as u64);
        assert!(!dir.join("out.csv.tmp").exists());
    }

    #[test]
    fn failed_row_leaves_no_file() {
        let dir = temp_dir("failed");
        let path = dir.join("out.csv");
        let rows: Vec<Result<Vec<String>, GenerationError>> = vec![
            Ok(vec!["ok".to_string()]),
            Err(GenerationError::RowSynthesisFailed {
                row: 1,
                source: contactgen_core::Error::InvalidEmail("x".to_string()),
            }),
        ];

        let result = write_records_csv(&path, &["col"], rows);
        assert!(matches!(
            result,
            Err(GenerationError::RowSynthesisFailed { row: 1, .. })
        ));
        assert!(!path.exists());
        assert!(!dir.join("out.csv.tmp").exists());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = temp_dir("nested");
        let path = dir.join("a").join("b").join("out.csv");
        let rows: Vec<Result<Vec<String>, GenerationError>> = Vec::new();
        write_records_csv(&path, &["col"], rows).expect("write csv");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "col\n");
    }
}
