//! Reading and writing snapshots on disk

use crate::error::{FileMovesError, Result};
use crate::move_detection::Snapshot;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Load a snapshot from a JSON file, or build one from a directory
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
	if path.is_dir() {
		debug!("Building snapshot from directory: {:?}", path);
		return Ok(Snapshot::from_directory(path)?);
	}
	if !path.is_file() {
		return Err(FileMovesError::invalid_path(path));
	}

	debug!("Reading snapshot file: {:?}", path);
	let reader = BufReader::new(File::open(path)?);
	Ok(serde_json::from_reader(reader)?)
}

/// Write a snapshot as pretty-printed JSON
pub fn write_snapshot<W: Write>(snapshot: &Snapshot, writer: W) -> Result<()> {
	let mut writer = BufWriter::new(writer);
	serde_json::to_writer_pretty(&mut writer, snapshot)?;
	writer.write_all(b"\n")?;
	writer.flush()?;
	Ok(())
}
