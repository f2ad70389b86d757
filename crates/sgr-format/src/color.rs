use core::str::FromStr;

use ansi_term_codes::{
    BG_BASE, BG_BRIGHT_BASE, BG_EXTENDED, CSI, FG_BASE, FG_BRIGHT_BASE, FG_EXTENDED, PALETTE_256,
    TRUECOLOR,
};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ColorError;

/// Which half of a cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Foreground,
    Background,
}

impl Role {
    /// The `38`/`48` introducer for palette and truecolor sequences.
    const fn extended(self) -> u8 {
        match self {
            Self::Foreground => FG_EXTENDED,
            Self::Background => BG_EXTENDED,
        }
    }

    const fn base(self, bright: bool) -> u8 {
        match (self, bright) {
            (Self::Foreground, false) => FG_BASE,
            (Self::Foreground, true) => FG_BRIGHT_BASE,
            (Self::Background, false) => BG_BASE,
            (Self::Background, true) => BG_BRIGHT_BASE,
        }
    }
}

/// The 16 color names accepted by [`ColorSpec::Named`].
///
/// Names are lowercase with a `bright_` prefix for the high-intensity half,
/// e.g. `"purple"` and `"bright_purple"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightPurple,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// Whether this is one of the `bright_` names.
    pub const fn is_bright(self) -> bool {
        self as u8 >= 8
    }

    /// The bare SGR parameter for this color in the given role.
    ///
    /// Foreground colors map to 30–37 and 90–97, background colors to 40–47
    /// and 100–107.
    pub const fn sgr(self, role: Role) -> u8 {
        role.base(self.is_bright()) + self as u8 % 8
    }
}

/// A color in one of the three shapes a terminal understands.
///
/// Numeric components are carried as-is: values outside `0..=255` are not
/// rejected and end up verbatim in the escape sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// One of the 16 names of [`NamedColor`]. Checked when resolved.
    Named(String),
    /// An index into the 256-color palette.
    Palette256(i64),
    /// A 24-bit truecolor triple.
    Rgb(i64, i64, i64),
}

impl ColorSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Resolve to an escape sequence. Shorthand for [`resolve_color`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownName`] for an unrecognized name.
    pub fn resolve(&self, role: Role) -> Result<String, ColorError> {
        resolve_color(self, role)
    }
}

impl From<NamedColor> for ColorSpec {
    fn from(color: NamedColor) -> Self {
        Self::Named(color.to_string())
    }
}

impl From<u8> for ColorSpec {
    fn from(index: u8) -> Self {
        Self::Palette256(i64::from(index))
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(i64::from(r), i64::from(g), i64::from(b))
    }
}

/// Produce the SGR escape sequence selecting `spec` for `role`.
///
/// # Errors
///
/// Returns [`ColorError::UnknownName`] when a [`ColorSpec::Named`] is not one
/// of the 16 recognized names.
pub fn resolve_color(spec: &ColorSpec, role: Role) -> Result<String, ColorError> {
    let code = match spec {
        ColorSpec::Named(name) => {
            let color = NamedColor::from_str(name)
                .map_err(|_| ColorError::UnknownName { name: name.clone() })?;
            format!("{CSI}{}m", color.sgr(role))
        }
        ColorSpec::Palette256(n) => format!("{CSI}{};{PALETTE_256};{n}m", role.extended()),
        ColorSpec::Rgb(r, g, b) => {
            format!("{CSI}{};{TRUECOLOR};{r};{g};{b}m", role.extended())
        }
    };
    tracing::debug!(?spec, ?role, code = %code.escape_debug(), "resolved color");
    Ok(code)
}
