//! `subguard submit` – submit gate for explicit form values.

use anyhow::{bail, Result};
use subguard_core::config::GuardConfig;
use subguard_core::guard::{FormGuard, SubmissionForm};

use super::StderrNotifier;

pub fn run_submit(
    cfg: &GuardConfig,
    subtitlefile: String,
    seconds: String,
    from: String,
) -> Result<()> {
    let form = SubmissionForm {
        subtitlefile,
        seconds,
        from,
    };
    let guard = FormGuard::new(cfg.clone());
    if !guard.validate_submission(&form, &mut StderrNotifier) {
        bail!("submission blocked");
    }
    println!("ok");
    Ok(())
}
