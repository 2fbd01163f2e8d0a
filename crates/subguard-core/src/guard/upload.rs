use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use super::error::{ValidationError, ValidationErrorKind};
use crate::config::GuardConfig;
use crate::extension::extension_of;

/// A file picked in the upload control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Name (last path component) and size of a file on disk.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, meta.len()))
    }
}

/// The upload control. Clearing it leaves no file selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    selected: Option<SelectedFile>,
}

impl FileInput {
    pub fn with_file(file: SelectedFile) -> Self {
        Self {
            selected: Some(file),
        }
    }

    pub fn select(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Current value as the form would submit it (the file name, or empty).
    pub fn value(&self) -> &str {
        self.selected.as_ref().map_or("", |f| f.name.as_str())
    }
}

/// Bytes to kB (1024), rounded half up.
pub fn size_kb(bytes: u64) -> u64 {
    bytes.saturating_add(512) / 1024
}

/// Extension check first, then size. Pure; no notification or clearing.
pub fn check_upload(file: &SelectedFile, config: &GuardConfig) -> Result<(), ValidationError> {
    let ext = extension_of(&file.name);
    if !config.is_allowed(&ext) {
        return Err(ValidationErrorKind::InvalidFileType { ext }.into());
    }

    let kb = size_kb(file.size);
    if kb > config.max_upload_kb {
        return Err(ValidationErrorKind::FileTooLarge { size_kb: kb }.into());
    }

    Ok(())
}
