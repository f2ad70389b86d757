//! Batch files: a list of `[[line]]` entries, each rendered through
//! [`format()`](crate::format()).
//!
//! ```toml
//! [[line]]
//! text = "warning"
//! fg = "yellow"
//! bold = true
//!
//! [[line]]
//! text = "truecolor"
//! bg = [30, 30, 30]
//! fg = 208
//! ```

use std::fs;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

use crate::color::ColorSpec;
use crate::error::BatchError;
use crate::format::Styled;
use crate::style::StyleSet;

/// A parsed batch file.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(title = "sgr-format batch file")]
pub struct Batch {
    /// Entries to render, one output line each, in order.
    ///
    /// In TOML these are written as `[[line]]` blocks.
    #[serde(default, rename = "line")]
    pub lines: Vec<Line>,
}

/// One piece of text and the formatting applied to it.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(title = "Line")]
#[allow(clippy::struct_excessive_bools)]
pub struct Line {
    /// Text to wrap. Written verbatim between the escape sequences and the
    /// trailing reset.
    pub text: String,

    /// Background color.
    #[serde(default)]
    pub bg: Option<ColorSpec>,

    /// Foreground color.
    #[serde(default)]
    pub fg: Option<ColorSpec>,

    #[serde(default)]
    pub bold: bool,

    /// Faint / dim intensity (SGR 2).
    #[serde(default)]
    pub thin: bool,

    #[serde(default)]
    pub italics: bool,

    #[serde(default)]
    pub underline: bool,

    #[serde(default)]
    pub strikethrough: bool,
}

impl Line {
    pub fn styles(&self) -> StyleSet {
        StyleSet {
            bold: self.bold,
            thin: self.thin,
            italics: self.italics,
            underline: self.underline,
            strikethrough: self.strikethrough,
        }
    }

    pub fn to_styled(&self) -> Styled {
        let mut styled = Styled::new(self.text.clone()).styles(self.styles());
        if let Some(bg) = &self.bg {
            styled = styled.bg(bg.clone());
        }
        if let Some(fg) = &self.fg {
            styled = styled.fg(fg.clone());
        }
        styled
    }
}

impl Batch {
    /// Render every entry, stopping at the first color error.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Color`] naming the 1-based entry whose color
    /// could not be resolved.
    pub fn render(&self) -> Result<Vec<String>, BatchError> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                line.to_styled()
                    .render()
                    .map_err(|source| BatchError::Color {
                        index: i + 1,
                        source,
                    })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchFormat {
    Toml,
    Json,
}

fn detect_format(path: &Path) -> Option<BatchFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some(BatchFormat::Toml),
        Some("json") => Some(BatchFormat::Json),
        _ => None,
    }
}

/// Parse a batch file from TOML source. `name` is used in diagnostics.
///
/// # Errors
///
/// Returns [`BatchError::Syntax`] if the TOML is invalid or does not match
/// the batch file schema.
pub fn parse_toml(src: &str, name: &str) -> Result<Batch, BatchError> {
    toml::from_str(src).map_err(|e| BatchError::Syntax {
        message: e.message().to_owned(),
        src: NamedSource::new(name, src.to_owned()),
        span: e.span().map(SourceSpan::from),
    })
}

/// Parse a batch file from JSON source. `name` is used in diagnostics.
///
/// # Errors
///
/// Returns [`BatchError::Syntax`] if the JSON is invalid or does not match
/// the batch file schema.
pub fn parse_json(src: &str, name: &str) -> Result<Batch, BatchError> {
    serde_json::from_str(src).map_err(|e| BatchError::Syntax {
        message: e.to_string(),
        src: NamedSource::new(name, src.to_owned()),
        span: line_col_to_offset(src, e.line(), e.column()).map(|offset| (offset, 0).into()),
    })
}

/// Convert a 1-based line and column into a byte offset.
fn line_col_to_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

/// Read and parse a `.toml` or `.json` batch file.
///
/// # Errors
///
/// Returns an error if the extension is not recognized, the file cannot be
/// read, or its contents do not parse.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<Batch, BatchError> {
    let format = detect_format(path).ok_or_else(|| BatchError::UnsupportedExtension {
        path: path.to_path_buf(),
    })?;
    let src = fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.display().to_string();
    let batch = match format {
        BatchFormat::Toml => parse_toml(&src, &name)?,
        BatchFormat::Json => parse_json(&src, &name)?,
    };
    tracing::debug!(lines = batch.lines.len(), ?format, "loaded batch file");
    Ok(batch)
}

/// Generate the JSON Schema for the [`Batch`] file format.
///
/// # Panics
///
/// Panics if the schema cannot be serialized to JSON (should never happen).
pub fn schema() -> Value {
    serde_json::to_value(schema_for!(Batch)).expect("schema serialization cannot fail")
}
