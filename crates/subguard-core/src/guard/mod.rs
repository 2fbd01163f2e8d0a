//! Form guard: validation gates for the subtitle upload form.
//!
//! Two gates run at two moments. [`FormGuard::validate_upload`] runs when a
//! file is picked and clears the file input if the file is unacceptable.
//! [`FormGuard::validate_submission`] runs on submit and returns whether the
//! form may be posted. Failures are reported through a caller-supplied
//! [`Notifier`], so the gates never block on a UI themselves.

mod error;
mod notify;
mod submit;
mod upload;

pub use error::{ValidationError, ValidationErrorKind};
pub use notify::{Collect, LogNotifier, Notifier};
pub use submit::{check_submission, SubmissionForm};
pub use upload::{check_upload, size_kb, FileInput, SelectedFile};

use crate::config::GuardConfig;

/// Validation gates bound to a [`GuardConfig`].
#[derive(Debug, Clone, Default)]
pub struct FormGuard {
    config: GuardConfig,
}

impl FormGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// File-selection gate.
    ///
    /// Does nothing when `input` is empty. Otherwise checks the selected file's
    /// extension and rounded size; on failure the notifier receives the message
    /// and `input` is cleared. The returned result mirrors what was notified.
    pub fn validate_upload<N: Notifier + ?Sized>(
        &self,
        input: &mut FileInput,
        notifier: &mut N,
    ) -> Result<(), ValidationError> {
        let Some(file) = input.selected() else {
            return Ok(());
        };

        match check_upload(file, &self.config) {
            Ok(()) => {
                tracing::debug!(name = %file.name, size = file.size, "upload accepted");
                Ok(())
            }
            Err(err) => {
                tracing::info!(name = %file.name, size = file.size, "upload rejected: {}", err);
                notifier.notify(&err.to_string());
                input.clear();
                Err(err)
            }
        }
    }

    /// Submit gate. Returns `true` only when every check passes; on failure
    /// the notifier receives exactly one message.
    pub fn validate_submission<N: Notifier + ?Sized>(
        &self,
        form: &SubmissionForm,
        notifier: &mut N,
    ) -> bool {
        match check_submission(form) {
            Ok(()) => {
                tracing::debug!(file = %form.subtitlefile, "submission accepted");
                true
            }
            Err(err) => {
                tracing::info!(file = %form.subtitlefile, "submission blocked: {}", err);
                notifier.notify(&err.to_string());
                false
            }
        }
    }
}

/// [`FormGuard::validate_upload`] with the default configuration.
pub fn validate_upload<N: Notifier + ?Sized>(
    input: &mut FileInput,
    notifier: &mut N,
) -> Result<(), ValidationError> {
    FormGuard::default().validate_upload(input, notifier)
}

/// [`FormGuard::validate_submission`] with the default configuration.
pub fn validate_submission<N: Notifier + ?Sized>(form: &SubmissionForm, notifier: &mut N) -> bool {
    FormGuard::default().validate_submission(form, notifier)
}
