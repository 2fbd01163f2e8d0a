//! `subguard config` – show where the config lives and what it says.

use anyhow::Result;
use std::path::Path;
use subguard_core::config::{self, GuardConfig};

pub fn run_config(cfg: &GuardConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
