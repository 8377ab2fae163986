use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::ledger::Transaction;

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// JSON-file store: a single document holding the ordered transaction array.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    /// Overwrites the store with the full sequence. The write goes to a
    /// sibling tmp file first and is renamed into place, so a crash mid-write
    /// cannot truncate the previous store.
    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(transactions)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), entries = transactions.len(), "ledger saved");
        Ok(())
    }

    /// A missing store file is not an error: it reads as an empty ledger.
    /// A present but unparsable store propagates the parse failure; startup
    /// treats that as fatal rather than silently discarding data.
    fn load(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no store file, starting empty");
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let transactions: Vec<Transaction> = serde_json::from_str(&data)?;
        Ok(transactions)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
