// 💾 Serializer - One JSON document for the whole run

use crate::entities::{Organization, Person};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Everything a run produced
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Registry insertion order: parliament, committees, then lazily added bodies
    pub organizations: Vec<Organization>,

    /// Member index order, failed members left out
    pub persons: Vec<Person>,
}

/// Write `dataset` to `path`, replacing any existing file
pub fn write_dataset(dataset: &Dataset, path: &Path, pretty: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, dataset)?;
    } else {
        serde_json::to_writer(&mut writer, dataset)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
