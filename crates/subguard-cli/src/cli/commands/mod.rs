//! CLI command handlers, one file per subcommand.

mod config;
mod plan;
mod submit;
mod upload;

pub use config::run_config;
pub use plan::run_plan;
pub use submit::run_submit;
pub use upload::run_upload;

use subguard_core::guard::{LogNotifier, Notifier};
use subguard_core::logging;

/// Prints each guard message to stderr. Also logs it, unless the log itself
/// is going to stderr.
pub(crate) struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
        if !logging::logs_to_stderr() {
            LogNotifier.notify(message);
        }
    }
}
