use ansi_term_codes::RESET;

use crate::color::{ColorSpec, Role, resolve_color};
use crate::error::ColorError;
use crate::style::{StyleSet, resolve_styles};

/// Wrap `text` as `[bg][fg][styles]{text}ESC[0m`.
///
/// Omitted colors and unset flags contribute nothing. The trailing reset is
/// always appended, so `format("X", None, None, StyleSet::new())` is
/// `"X\x1b[0m"`.
///
/// # Errors
///
/// Returns a [`ColorError`] if either color cannot be resolved.
pub fn format(
    text: &str,
    bg: Option<&ColorSpec>,
    fg: Option<&ColorSpec>,
    styles: StyleSet,
) -> Result<String, ColorError> {
    let mut out = combine_colors(bg, fg)?;
    out.push_str(&resolve_styles(styles));
    out.push_str(text);
    out.push_str(RESET);
    Ok(out)
}

/// Escape sequence selecting `spec` as the foreground color.
///
/// # Errors
///
/// Returns [`ColorError::UnknownName`] for an unrecognized name.
pub fn foreground_color(spec: &ColorSpec) -> Result<String, ColorError> {
    resolve_color(spec, Role::Foreground)
}

/// Escape sequence selecting `spec` as the background color.
///
/// # Errors
///
/// Returns [`ColorError::UnknownName`] for an unrecognized name.
pub fn background_color(spec: &ColorSpec) -> Result<String, ColorError> {
    resolve_color(spec, Role::Background)
}

/// Background sequence followed by foreground sequence, with no text and no
/// reset.
///
/// # Errors
///
/// Returns a [`ColorError`] if either color cannot be resolved.
pub fn combine_colors(
    bg: Option<&ColorSpec>,
    fg: Option<&ColorSpec>,
) -> Result<String, ColorError> {
    let mut out = String::new();
    if let Some(bg) = bg {
        out.push_str(&background_color(bg)?);
    }
    if let Some(fg) = fg {
        out.push_str(&foreground_color(fg)?);
    }
    Ok(out)
}

/// Escape sequences for the given font-style flags, in fixed order.
#[allow(clippy::fn_params_excessive_bools)]
pub fn font_style(
    bold: bool,
    thin: bool,
    italics: bool,
    underline: bool,
    strikethrough: bool,
) -> String {
    resolve_styles(StyleSet {
        bold,
        thin,
        italics,
        underline,
        strikethrough,
    })
}

/// Owned text plus the formatting to apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Styled {
    text: String,
    bg: Option<ColorSpec>,
    fg: Option<ColorSpec>,
    styles: StyleSet,
}

impl Styled {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bg(mut self, spec: impl Into<ColorSpec>) -> Self {
        self.bg = Some(spec.into());
        self
    }

    #[must_use]
    pub fn fg(mut self, spec: impl Into<ColorSpec>) -> Self {
        self.fg = Some(spec.into());
        self
    }

    #[must_use]
    pub fn styles(mut self, styles: StyleSet) -> Self {
        self.styles = styles;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render through [`format`].
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] if either color cannot be resolved.
    pub fn render(&self) -> Result<String, ColorError> {
        format(
            &self.text,
            self.bg.as_ref(),
            self.fg.as_ref(),
            self.styles,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn plain_text_gets_only_reset() {
        assert_eq!(
            format("X", None, None, StyleSet::new()).unwrap(),
            "X\x1b[0m"
        );
    }

    #[test]
    fn fg_before_styles() {
        let red = ColorSpec::named("red");
        assert_eq!(
            format("X", None, Some(&red), StyleSet::new().bold()).unwrap(),
            "\x1b[31m\x1b[1mX\x1b[0m"
        );
    }

    #[test]
    fn bg_before_fg() {
        let bg = ColorSpec::Rgb(10, 20, 30);
        let fg = ColorSpec::Palette256(208);
        assert_eq!(
            format("hi", Some(&bg), Some(&fg), StyleSet::new().underline()).unwrap(),
            "\x1b[48;2;10;20;30m\x1b[38;5;208m\x1b[4mhi\x1b[0m"
        );
    }

    #[test]
    fn empty_text_still_resets() {
        let blue = ColorSpec::named("blue");
        assert_eq!(
            format("", Some(&blue), None, StyleSet::new()).unwrap(),
            "\x1b[44m\x1b[0m"
        );
    }

    #[test]
    fn format_propagates_unknown_name() {
        let bad = ColorSpec::named("magenta");
        let err = format("X", None, Some(&bad), StyleSet::new()).unwrap_err();
        assert!(matches!(err, ColorError::UnknownName { .. }));
    }

    #[test]
    fn combine_colors_applies_foreground_as_foreground() {
        let bg = ColorSpec::named("white");
        let fg = ColorSpec::named("black");
        assert_eq!(
            combine_colors(Some(&bg), Some(&fg)).unwrap(),
            "\x1b[47m\x1b[30m"
        );
    }

    #[test]
    fn combine_colors_foreground_only() {
        let fg = ColorSpec::named("green");
        assert_eq!(combine_colors(None, Some(&fg)).unwrap(), "\x1b[32m");
        assert_eq!(combine_colors(None, None).unwrap(), "");
    }

    #[test]
    fn single_role_helpers() {
        let spec = ColorSpec::named("bright_yellow");
        assert_eq!(foreground_color(&spec).unwrap(), "\x1b[93m");
        assert_eq!(background_color(&spec).unwrap(), "\x1b[103m");
    }

    #[test]
    fn font_style_flags() {
        assert_eq!(font_style(false, false, false, false, false), "");
        assert_eq!(
            font_style(true, false, true, false, true),
            "\x1b[1m\x1b[3m\x1b[9m"
        );
    }

    #[test]
    fn styled_builder_matches_format() {
        let styled = Styled::new("ok")
            .fg(NamedColor::Green)
            .bg(236u8)
            .styles(StyleSet::new().bold());
        assert_eq!(styled.text(), "ok");
        assert_eq!(
            styled.render().unwrap(),
            "\x1b[48;5;236m\x1b[32m\x1b[1mok\x1b[0m"
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let styled = Styled::new("same")
            .fg((1u8, 2u8, 3u8))
            .styles(StyleSet::new().italics());
        assert_eq!(styled.render().unwrap(), styled.render().unwrap());
    }
}
