//! Server-side acceptance of a submitted conversion form.
//!
//! The browser gate can be bypassed, so the receiving side re-checks the
//! request before any conversion happens: size limit, numeric offset, known
//! `from`/`to` formats, and agreement between `from` and the uploaded file.
//! The result is a [`ConversionPlan`] describing what the converter should do.

mod output_name;

pub use output_name::output_name;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GuardConfig;
use crate::extension::{file_extension, SubtitleFormat};

/// Why a submitted form was refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("no subtitle file was uploaded")]
    MissingFile,

    #[error("upload of {size} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { size: u64, limit: u64 },

    #[error("'{field}' value '{value}' is not a finite number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("'{field}' extension '{value}' is not allowed")]
    UnsupportedFormat { field: &'static str, value: String },

    #[error(
        "the chosen 'from' extension {from} does not match that of the filename ({})",
        .ext.as_deref().unwrap_or("none")
    )]
    ExtensionMismatch {
        ext: Option<String>,
        from: SubtitleFormat,
    },
}

/// Form fields as received by the converting endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionForm {
    pub subtitlefile: String,
    /// Uploaded file size in bytes.
    pub size: u64,
    pub seconds: String,
    /// Sign multiplier for `seconds`, normally `1` or `-1`.
    pub plusmin: String,
    pub from: String,
    pub to: String,
}

/// Accepted request, ready for the converter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionPlan {
    pub input: String,
    pub from: SubtitleFormat,
    pub to: SubtitleFormat,
    /// Signed shift in seconds (`seconds * plusmin`).
    pub offset_secs: f64,
    pub output_name: String,
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, RequestError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RequestError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn parse_format(
    field: &'static str,
    value: &str,
    config: &GuardConfig,
) -> Result<SubtitleFormat, RequestError> {
    value
        .parse::<SubtitleFormat>()
        .ok()
        .filter(|fmt| config.is_allowed(fmt.as_ext()))
        .ok_or_else(|| RequestError::UnsupportedFormat {
            field,
            value: value.to_string(),
        })
}

/// Validates a submitted form and derives the conversion plan.
pub fn plan_conversion(
    form: &ConversionForm,
    config: &GuardConfig,
) -> Result<ConversionPlan, RequestError> {
    if form.subtitlefile.is_empty() {
        return Err(RequestError::MissingFile);
    }

    let limit = config.max_upload_bytes();
    if form.size > limit {
        return Err(RequestError::BodyTooLarge {
            size: form.size,
            limit,
        });
    }

    let seconds = parse_number("seconds", &form.seconds)?;
    let plusmin = parse_number("plusmin", &form.plusmin)?;
    let offset_secs = seconds * plusmin;
    if !offset_secs.is_finite() {
        return Err(RequestError::InvalidNumber {
            field: "offset",
            value: format!("{} * {}", form.seconds, form.plusmin),
        });
    }

    let from = parse_format("from", &form.from, config)?;
    let to = parse_format("to", &form.to, config)?;

    let ext = file_extension(&form.subtitlefile);
    if ext.as_deref() != Some(from.as_ext()) {
        return Err(RequestError::ExtensionMismatch { ext, from });
    }

    let output_name = output_name(&form.subtitlefile, offset_secs, from, to);
    tracing::debug!(
        input = %form.subtitlefile,
        %from,
        %to,
        offset_secs,
        output = %output_name,
        "conversion planned"
    );

    Ok(ConversionPlan {
        input: form.subtitlefile.clone(),
        from,
        to,
        offset_secs,
        output_name,
    })
}
