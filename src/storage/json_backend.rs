use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::{LedgerError, Result};
use crate::ledger::GoalLedger;

use super::StorageBackend;

const LEDGER_FILE: &str = "goals.json";
const APP_DIR: &str = "goal_ledger";

/// Stores the ledger as a single pretty-printed JSON snapshot.
///
/// Writes stage to a `.tmp` sibling and rename into place, so a failed write
/// never corrupts the previous snapshot.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            path: root.join(LEDGER_FILE),
        })
    }

    /// Opens a store under the platform data directory.
    pub fn new_default() -> Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| LedgerError::Storage("no platform data directory".into()))?;
        Self::new(base.join(APP_DIR))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStore {
    fn save(&self, ledger: &GoalLedger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)
    }

    fn load(&self) -> Result<GoalLedger> {
        load_ledger_from_path(&self.path)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Writes the provided ledger to disk atomically by staging to a temporary file.
pub fn save_ledger_to_path(ledger: &GoalLedger, path: &Path) -> Result<()> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(ledger)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a ledger snapshot from disk, returning structured errors on failure.
pub fn load_ledger_from_path(path: &Path) -> Result<GoalLedger> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
