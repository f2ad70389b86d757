use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// An error raised while turning a color specification into an escape sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ColorError {
    /// The input matched none of the accepted shapes: a name, a single
    /// palette index, or exactly three integer RGB components.
    #[error("invalid color format '{input}'")]
    #[diagnostic(
        code(sgr_format::invalid_color_format),
        help(
            "expected a color name (\"red\"), a palette index (\"208\"), or three RGB components (\"255,128,0\")"
        )
    )]
    InvalidFormat { input: String },

    /// A named color that is not one of the 16 recognized names.
    #[error("unknown color name '{name}'")]
    #[diagnostic(
        code(sgr_format::unknown_color_name),
        help(
            "expected one of: black, red, green, yellow, blue, purple, cyan, white, or a bright_ variant such as bright_red"
        )
    )]
    UnknownName { name: String },
}

/// An error raised while loading or rendering a batch file.
#[derive(Debug, Error, Diagnostic)]
pub enum BatchError {
    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(sgr_format::batch_read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported batch file '{}'", .path.display())]
    #[diagnostic(
        code(sgr_format::batch_extension),
        help("batch files must end in .toml or .json")
    )]
    UnsupportedExtension { path: PathBuf },

    #[error("invalid batch file: {message}")]
    #[diagnostic(code(sgr_format::batch_syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    /// A `[[line]]` entry (1-based) whose color could not be resolved.
    #[error("line entry {index} has an invalid color")]
    #[diagnostic(code(sgr_format::batch_color))]
    Color {
        index: usize,
        #[source]
        #[diagnostic_source]
        source: ColorError,
    },
}
