use crate::utils::error::{ManhelperError, Result};
use flate2::{Compression, GzBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Name stored in the gzip header: the destination's file name without `.gz`.
pub fn header_name(destination: &Path) -> Vec<u8> {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(".gz").unwrap_or(&name).as_bytes().to_vec()
}

/// Streams the translated page at `scratch` into a gzip file at `destination`,
/// line by line as UTF-8 text. Returns the number of uncompressed bytes written.
///
/// On failure the partially written destination is removed; `scratch` is
/// never touched here.
pub fn compress_to_gzip(scratch: &Path, destination: &Path) -> Result<u64> {
    let result = write_gzip(scratch, destination);
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(destination) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(
                    "Could not remove partial output {}: {}",
                    destination.display(),
                    e
                );
            }
        }
    }
    result
}

fn write_gzip(scratch: &Path, destination: &Path) -> Result<u64> {
    // 先開啟輸入，避免讀取失敗時留下空的 .gz
    let mut reader = BufReader::new(File::open(scratch)?);

    let mtime = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0);

    let mut encoder = GzBuilder::new()
        .filename(header_name(destination))
        .mtime(mtime)
        .write(
            BufWriter::new(File::create(destination)?),
            Compression::best(),
        );

    let mut total = 0u64;
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(|e| {
            if e.kind() == ErrorKind::InvalidData {
                ManhelperError::EncodingError {
                    path: scratch.display().to_string(),
                    source: e,
                }
            } else {
                ManhelperError::IoError(e)
            }
        })?;
        if read == 0 {
            break;
        }
        encoder.write_all(line.as_bytes())?;
        total += read as u64;
    }

    encoder.finish()?.flush()?;
    tracing::debug!(
        "Compressed {} bytes into {}",
        total,
        destination.display()
    );
    Ok(total)
}
