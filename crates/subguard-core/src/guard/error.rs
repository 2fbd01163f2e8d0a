//! Guard failures. The `Display` text is the message shown to the user.

use std::fmt;

use crate::extension::dotted;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Selected file's extension is not in the accepted set.
    InvalidFileType { ext: String },
    /// Selected file is larger than the threshold (rounded kB).
    FileTooLarge { size_kb: u64 },
    /// No file selected at submit time.
    MissingFile,
    /// Empty seconds field at submit time.
    MissingDuration,
    /// File extension disagrees with the `from` field. Both are normalized;
    /// `ext` is `None` when the file name has no `.`.
    ExtensionMismatch { ext: Option<String>, from: String },
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self { kind }
    }
}

impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::InvalidFileType { ext } => write!(f, "Invalid filetype: {ext}"),
            ValidationErrorKind::FileTooLarge { size_kb } => {
                write!(f, "Filesize = {size_kb}kB\nToo large!")
            }
            ValidationErrorKind::MissingFile => write!(f, "No subtitle file is selected."),
            ValidationErrorKind::MissingDuration => write!(f, "No seconds are entered."),
            ValidationErrorKind::ExtensionMismatch { ext: None, from } => {
                let from = dotted(from);
                write!(
                    f,
                    "The file has no extension, so it does not match the from field's {from}.\n\
                     Choose a file with extension {from}."
                )
            }
            ValidationErrorKind::ExtensionMismatch {
                ext: Some(ext),
                from,
            } => {
                let ext = dotted(ext);
                let from = dotted(from);
                write!(
                    f,
                    "The file's extension {ext} does not match the from field's {from}.\n\
                     Either change the from field to {ext}, or choose a file with extension {from}."
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_text() {
        let e = ValidationError::new(ValidationErrorKind::ExtensionMismatch {
            ext: Some("srt".into()),
            from: "vtt".into(),
        });
        assert_eq!(
            e.to_string(),
            "The file's extension .srt does not match the from field's .vtt.\n\
             Either change the from field to .srt, or choose a file with extension .vtt."
        );
    }

    #[test]
    fn mismatch_without_extension_adds_no_dot() {
        let e = ValidationError::new(ValidationErrorKind::ExtensionMismatch {
            ext: None,
            from: "vtt".into(),
        });
        let msg = e.to_string();
        assert!(msg.starts_with("The file has no extension"));
        assert!(msg.contains(".vtt"));
        assert!(!msg.contains(".readme"));
    }

    #[test]
    fn simple_messages() {
        assert_eq!(
            ValidationError::from(ValidationErrorKind::MissingFile).to_string(),
            "No subtitle file is selected."
        );
        assert_eq!(
            ValidationError::from(ValidationErrorKind::FileTooLarge { size_kb: 244 }).to_string(),
            "Filesize = 244kB\nToo large!"
        );
    }
}
