use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};

const MAX_CAPACITY_HINT: u64 = 1 << 24;

/// Read the XML part named `part` out of the ODT package at `path`.
pub fn read_part(path: &Path, part: &str) -> Result<String> {
    let file = File::open(path)?;
    read_part_from(BufReader::new(file), part)
}

/// Read the XML part named `part` out of an ODT package held by `reader`.
pub fn read_part_from<R: Read + Seek>(reader: R, part: &str) -> Result<String> {
    let mut archive = ZipArchive::new(reader).map_err(|e| Error::Package(e.to_string()))?;

    let mut entry = match archive.by_name(part) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(Error::MissingPart(part.to_string())),
        Err(e) => return Err(Error::Package(e.to_string())),
    };

    // The declared size is only a hint
    let capacity = entry.size().min(MAX_CAPACITY_HINT) as usize;
    let mut content = String::with_capacity(capacity);
    entry.read_to_string(&mut content).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => {
            Error::MalformedInput(format!("{part} is not valid UTF-8"))
        }
        _ => Error::Package(format!("failed to read {part}: {e}")),
    })?;

    log::debug!("read {} bytes from {part}", content.len());
    Ok(content)
}
