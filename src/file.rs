use std::fs;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use log::debug;

use crate::document::IniDocument;
use crate::error::IniError;

/// An [`IniDocument`] tied to a file on disk.
///
/// Opening a path that does not exist yields an empty document; `save` writes
/// the current state back to the same path, replacing whatever was there. The
/// write is a plain overwrite with no locking or atomic rename, so a save that
/// fails midway can leave a truncated file behind while the in-memory document
/// stays unchanged.
#[derive(Debug)]
pub struct IniFile {
    path: PathBuf,
    document: IniDocument,
}

impl IniFile {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, IniError> {
        let path = path.into();
        let document = if path.exists() {
            // Undecodable bytes degrade to replacement characters instead of
            // failing the load.
            let bytes = fs::read(&path)?;
            let document = IniDocument::parse(&String::from_utf8_lossy(&bytes));
            debug!(
                "parsed {} section(s) from {}",
                document.len(),
                path.display()
            );
            document
        } else {
            debug!("{} does not exist, starting empty", path.display());
            IniDocument::new()
        };
        Ok(IniFile { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &IniDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut IniDocument {
        &mut self.document
    }

    /// Serializes the document and overwrites the backing file with it.
    pub fn save(&self) -> Result<(), IniError> {
        fs::write(&self.path, self.document.to_string())?;
        debug!("saved {} section(s) to {}", self.document.len(), self.path.display());
        Ok(())
    }
}

impl Deref for IniFile {
    type Target = IniDocument;

    fn deref(&self) -> &IniDocument {
        &self.document
    }
}

impl DerefMut for IniFile {
    fn deref_mut(&mut self) -> &mut IniDocument {
        &mut self.document
    }
}
