use coursematch_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read every row of a headed CSV file.
///
/// A leading UTF-8 BOM is skipped and cells are trimmed. Any I/O or parse
/// failure, including a single malformed row, fails the whole table.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| Error::startup_load(&file, e))?;
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(body);

    let headers = reader
        .headers()
        .map_err(|e| Error::startup_load(&file, format!("failed to read headers: {e}")))?;
    if headers.iter().all(str::is_empty) {
        return Err(Error::startup_load(&file, "missing header row"));
    }

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        // line 1 is the header
        let row = record.map_err(|e| Error::startup_load(&file, format!("row {}: {e}", i + 2)))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Write rows under `header` as a CSV file, prefixed with a UTF-8 BOM.
///
/// The header is written even when `rows` is empty. Its columns must match
/// the serialized field order of `T`.
pub fn write_table<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let file = path.display().to_string();
    let mut out = std::fs::File::create(path)?;
    out.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer
        .write_record(header)
        .map_err(|e| Error::startup_load(&file, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| Error::startup_load(&file, e))?;
    }
    writer.flush()?;
    Ok(())
}
