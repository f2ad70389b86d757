use std::io::Write;
use std::path::PathBuf;

use ansi_term_codes::ESC;
use bpaf::Bpaf;
use miette::IntoDiagnostic;
use strum::IntoEnumIterator;

use crate::color::{ColorSpec, NamedColor, Role};
use crate::global::{ColorsArg, GlobalOptions, global_options};
use crate::style::StyleSet;
use crate::{batch, combine_colors, font_style, format};

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version, fallback_to_usage, generate(cli))]
/// Wrap text in ANSI color and font-style escape sequences
pub struct Cli {
    #[bpaf(external(global_options), hide_usage)]
    pub global: GlobalOptions,
    #[bpaf(external(commands))]
    pub command: Commands,
}

#[derive(Debug, Clone, Bpaf)]
pub struct ColorArgs {
    /// Background color: a name, a palette index, or "r,g,b"
    #[bpaf(long("bg"), argument("SPEC"))]
    pub bg: Option<ColorSpec>,

    /// Foreground color: a name, a palette index, or "r,g,b"
    #[bpaf(long("fg"), argument("SPEC"))]
    pub fg: Option<ColorSpec>,
}

#[derive(Debug, Clone, Copy, Bpaf)]
#[allow(clippy::struct_excessive_bools)]
pub struct StyleArgs {
    #[bpaf(long("bold"), switch)]
    pub bold: bool,

    /// Faint / dim intensity
    #[bpaf(long("thin"), switch)]
    pub thin: bool,

    #[bpaf(long("italics"), switch)]
    pub italics: bool,

    #[bpaf(long("underline"), switch)]
    pub underline: bool,

    #[bpaf(long("strikethrough"), switch)]
    pub strikethrough: bool,
}

impl From<StyleArgs> for StyleSet {
    fn from(args: StyleArgs) -> Self {
        Self {
            bold: args.bold,
            thin: args.thin,
            italics: args.italics,
            underline: args.underline,
            strikethrough: args.strikethrough,
        }
    }
}

#[derive(Debug, Clone, Copy, Bpaf)]
pub struct OutputArgs {
    /// Print ESC as the visible text \x1b instead of the raw control byte
    #[bpaf(long("escaped"), switch)]
    pub escaped: bool,
}

#[derive(Debug, Clone, Bpaf)]
pub enum Commands {
    #[bpaf(command("paint"))]
    /// Format TEXT with colors and styles, followed by a reset
    Paint {
        #[bpaf(external(color_args))]
        colors: ColorArgs,
        #[bpaf(external(style_args))]
        styles: StyleArgs,
        #[bpaf(external(output_args))]
        output: OutputArgs,
        /// Text to format
        #[bpaf(positional("TEXT"))]
        text: String,
    },

    #[bpaf(command("colors"))]
    /// Print the background sequence followed by the foreground sequence
    Colors {
        #[bpaf(external(color_args))]
        colors: ColorArgs,
        #[bpaf(external(output_args))]
        output: OutputArgs,
    },

    #[bpaf(command("style"))]
    /// Print the sequences for a set of font styles
    Style {
        #[bpaf(external(style_args))]
        styles: StyleArgs,
        #[bpaf(external(output_args))]
        output: OutputArgs,
    },

    #[bpaf(command("names"))]
    /// List the recognized color names with their codes
    Names {
        #[bpaf(external(output_args))]
        output: OutputArgs,
    },

    #[bpaf(command("batch"))]
    /// Render every [[line]] entry of a TOML or JSON batch file
    Batch {
        #[bpaf(external(output_args))]
        output: OutputArgs,
        /// Batch file (.toml or .json)
        #[bpaf(positional("FILE"))]
        file: PathBuf,
    },

    #[bpaf(command("schema"))]
    /// Print the JSON Schema for batch files
    Schema,

    #[bpaf(command("version"))]
    /// Print version information
    Version,
}

/// Replace every ESC byte with the visible text `\x1b`.
pub fn escape_visible(s: &str) -> String {
    s.replace(ESC, "\\x1b")
}

/// How rendered text reaches the output.
struct Output {
    colors: bool,
    escaped: bool,
}

impl Output {
    fn new(global: &GlobalOptions, args: OutputArgs) -> Self {
        Self {
            colors: global.colors == ColorsArg::On,
            escaped: args.escaped,
        }
    }

    /// Pick the rendered or plain form of a piece of text.
    fn show(&self, rendered: &str, plain: &str) -> String {
        let s = if self.colors { rendered } else { plain };
        if self.escaped {
            escape_visible(s)
        } else {
            s.to_owned()
        }
    }
}

fn names_table(output: &Output) -> miette::Result<Vec<String>> {
    NamedColor::iter()
        .map(|color| {
            let name: &'static str = color.into();
            let sample = format(name, None, Some(&ColorSpec::from(color)), StyleSet::new())?;
            Ok(format!(
                "{name:<14}fg {:>3}  bg {:>3}  {}",
                color.sgr(Role::Foreground),
                color.sgr(Role::Background),
                output.show(&sample, name)
            ))
        })
        .collect()
}

/// Run a parsed command, writing its output to `out`.
///
/// # Errors
///
/// Returns a diagnostic if a color cannot be resolved, a batch file cannot
/// be loaded, or writing to `out` fails.
#[tracing::instrument(skip_all)]
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> miette::Result<()> {
    let global = &cli.global;
    let lines = match &cli.command {
        Commands::Paint {
            colors,
            styles,
            output,
            text,
        } => {
            let rendered = format(
                text,
                colors.bg.as_ref(),
                colors.fg.as_ref(),
                (*styles).into(),
            )?;
            vec![Output::new(global, *output).show(&rendered, text)]
        }
        Commands::Colors { colors, output } => {
            let rendered = combine_colors(colors.bg.as_ref(), colors.fg.as_ref())?;
            vec![Output::new(global, *output).show(&rendered, "")]
        }
        Commands::Style { styles, output } => {
            let rendered = font_style(
                styles.bold,
                styles.thin,
                styles.italics,
                styles.underline,
                styles.strikethrough,
            );
            vec![Output::new(global, *output).show(&rendered, "")]
        }
        Commands::Names { output } => names_table(&Output::new(global, *output))?,
        Commands::Batch { output, file } => {
            let batch = batch::load(file)?;
            let rendered = batch.render()?;
            let output = Output::new(global, *output);
            tracing::info!(lines = rendered.len(), "rendered batch file");
            if global.verbose {
                eprintln!("Rendered {} lines from {}", rendered.len(), file.display());
            }
            batch
                .lines
                .iter()
                .zip(&rendered)
                .map(|(line, rendered)| output.show(rendered, &line.text))
                .collect()
        }
        Commands::Schema => {
            vec![serde_json::to_string_pretty(&batch::schema()).into_diagnostic()?]
        }
        Commands::Version => vec![format!("sgr-format {}", env!("CARGO_PKG_VERSION"))],
    };

    for line in lines {
        writeln!(out, "{line}").into_diagnostic()?;
    }
    Ok(())
}
