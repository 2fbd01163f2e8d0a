//! Output filename derivation with a cumulative offset tag.
//!
//! A converted file is named after its input with a `{+x.xx_Sec}_` prefix.
//! Converting an already tagged file updates the tag instead of stacking a
//! second one, so repeated shifts keep a readable name.

use crate::extension::SubtitleFormat;

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Splits a tagged name into the tag's offset and the text after the tag.
fn parse_tag(name: &str) -> Option<(f64, &str)> {
    let caps = regex!(r"\{([+-]\d+\.\d+)_Sec\}_").captures(name)?;
    let whole = caps.get(0)?;
    let offset = caps.get(1)?.as_str().parse::<f64>().ok()?;
    Some((offset, &name[whole.end()..]))
}

fn format_tag(offset: f64) -> String {
    let sign = if offset >= 0.0 { '+' } else { '-' };
    format!("{{{}{:.2}_Sec}}_", sign, offset.abs())
}

/// Name for the converted file.
///
/// Examples:
///
/// - `output_name("movie.srt", 1.5, Srt, Srt)` → `"{+1.50_Sec}_movie.srt"`
/// - `output_name("{+1.50_Sec}_movie.srt", -2.0, Srt, Vtt)` → `"{-0.50_Sec}_movie.vtt"`
pub fn output_name(input: &str, offset: f64, from: SubtitleFormat, to: SubtitleFormat) -> String {
    let (total, rest) = match parse_tag(input) {
        Some((previous, rest)) => (previous + offset, rest),
        None => (offset, input),
    };

    let name = format!("{}{}", format_tag(total), rest);

    if from == to {
        return name;
    }
    let stem = match name.rfind('.') {
        Some(idx) if name[idx + 1..].eq_ignore_ascii_case(from.as_ext()) => &name[..idx],
        _ => name.as_str(),
    };
    format!("{}{}", stem, to.dotted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubtitleFormat::{Srt, Vtt};

    #[test]
    fn fresh_name_gets_tag() {
        assert_eq!(output_name("movie.srt", 1.5, Srt, Srt), "{+1.50_Sec}_movie.srt");
        assert_eq!(output_name("movie.srt", 0.0, Srt, Srt), "{+0.00_Sec}_movie.srt");
        assert_eq!(output_name("movie.vtt", -3.25, Vtt, Vtt), "{-3.25_Sec}_movie.vtt");
    }

    #[test]
    fn tagged_name_accumulates() {
        assert_eq!(
            output_name("{+1.50_Sec}_movie.srt", 2.0, Srt, Srt),
            "{+3.50_Sec}_movie.srt"
        );
        assert_eq!(
            output_name("{+1.50_Sec}_movie.srt", -2.0, Srt, Vtt),
            "{-0.50_Sec}_movie.vtt"
        );
    }

    #[test]
    fn text_before_tag_is_dropped() {
        assert_eq!(
            output_name("copy of {-1.00_Sec}_ep1.vtt", 1.0, Vtt, Vtt),
            "{+0.00_Sec}_ep1.vtt"
        );
    }

    #[test]
    fn format_change_replaces_suffix() {
        assert_eq!(output_name("ep1.srt", 2.0, Srt, Vtt), "{+2.00_Sec}_ep1.vtt");
        assert_eq!(output_name("ep1.vtt", 2.0, Vtt, Srt), "{+2.00_Sec}_ep1.srt");
        assert_eq!(output_name("EP1.SRT", 2.0, Srt, Vtt), "{+2.00_Sec}_EP1.vtt");
    }

    #[test]
    fn unusual_tag_is_not_parsed() {
        assert_eq!(
            output_name("{+1_Sec}_ep1.srt", 1.0, Srt, Srt),
            "{+1.00_Sec}_{+1_Sec}_ep1.srt"
        );
    }
}
