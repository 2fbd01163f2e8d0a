//! `subguard plan` – server-side acceptance and output naming.

use anyhow::{Context, Result};
use std::path::Path;
use subguard_core::config::GuardConfig;
use subguard_core::guard::SelectedFile;
use subguard_core::request::{plan_conversion, ConversionForm};

pub fn run_plan(
    cfg: &GuardConfig,
    path: &Path,
    seconds: String,
    plusmin: String,
    from: String,
    to: String,
    json: bool,
) -> Result<()> {
    let file = SelectedFile::from_path(path).with_context(|| format!("stat {}", path.display()))?;
    let form = ConversionForm {
        subtitlefile: file.name,
        size: file.size,
        seconds,
        plusmin,
        from,
        to,
    };

    let plan = plan_conversion(&form, cfg).context("request refused")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{:<8} {}", "INPUT", plan.input);
        println!("{:<8} {} -> {}", "FORMAT", plan.from, plan.to);
        println!("{:<8} {:+.3}s", "OFFSET", plan.offset_secs);
        println!("{:<8} {}", "OUTPUT", plan.output_name);
    }
    Ok(())
}
