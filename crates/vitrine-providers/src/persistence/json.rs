//! JSON metadata files
//!
//! Pretty-printed UTF-8 JSON; non-ASCII text is written as-is.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use vitrine_domain::error::{Error, Result};

use crate::persistence::ensure_parent_dir;

/// Write `value` as pretty-printed JSON
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| {
        Error::io_with_source(format!("Failed to create {}", path.display()), e)
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .map_err(|e| Error::io_with_source(format!("Failed to open {}", path.display()), e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        Error::persistence(format!("Failed to parse {}: {e}", path.display()))
    })
}
