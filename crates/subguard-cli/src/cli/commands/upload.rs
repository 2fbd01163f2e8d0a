//! `subguard upload` – file-selection gate for a file on disk.

use anyhow::{bail, Context, Result};
use std::path::Path;
use subguard_core::config::GuardConfig;
use subguard_core::guard::{FileInput, FormGuard, SelectedFile};

use super::StderrNotifier;

pub fn run_upload(cfg: &GuardConfig, path: &Path) -> Result<()> {
    let file = SelectedFile::from_path(path).with_context(|| format!("stat {}", path.display()))?;
    let guard = FormGuard::new(cfg.clone());
    let mut input = FileInput::with_file(file);

    if guard.validate_upload(&mut input, &mut StderrNotifier).is_err() {
        bail!("{} rejected", path.display());
    }
    println!("{}: ok", input.value());
    Ok(())
}
