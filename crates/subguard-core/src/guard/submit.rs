use serde::{Deserialize, Serialize};

use super::error::{ValidationError, ValidationErrorKind};
use crate::extension::{file_extension, normalize_format_token};

/// Field values of the upload form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionForm {
    /// Name of the selected subtitle file, empty when none is selected.
    pub subtitlefile: String,
    /// Time offset as typed by the user.
    pub seconds: String,
    /// Declared source format, e.g. `.srt`.
    pub from: String,
}

/// Checks, in order: file present, seconds present, extension matches `from`.
///
/// Both sides of the extension comparison are normalized (no dot, lowercase),
/// so `.SRT` and `srt` in the `from` field both match `movie.srt`. A name
/// without any `.` has no extension and never matches.
pub fn check_submission(form: &SubmissionForm) -> Result<(), ValidationError> {
    if form.subtitlefile.is_empty() {
        return Err(ValidationErrorKind::MissingFile.into());
    }

    if form.seconds.is_empty() {
        return Err(ValidationErrorKind::MissingDuration.into());
    }

    let ext = file_extension(&form.subtitlefile);
    let from = normalize_format_token(&form.from);
    tracing::debug!(from = %form.from, ext = ?ext, "comparing extension with from field");
    match ext {
        Some(ext) if !from.is_empty() && ext == from => Ok(()),
        ext => Err(ValidationErrorKind::ExtensionMismatch { ext, from }.into()),
    }
}
