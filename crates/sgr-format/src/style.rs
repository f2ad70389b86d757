use ansi_term_codes::{BOLD, DIM, ITALIC, STRIKETHROUGH, UNDERLINE};

/// Independent font-style flags. Any combination is allowed, including the
/// visually contradictory `bold` + `thin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct StyleSet {
    pub bold: bool,
    pub thin: bool,
    pub italics: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl StyleSet {
    pub const fn new() -> Self {
        Self {
            bold: false,
            thin: false,
            italics: false,
            underline: false,
            strikethrough: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn thin(mut self) -> Self {
        self.thin = true;
        self
    }

    #[must_use]
    pub const fn italics(mut self) -> Self {
        self.italics = true;
        self
    }

    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub const fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub const fn is_empty(self) -> bool {
        !(self.bold || self.thin || self.italics || self.underline || self.strikethrough)
    }
}

/// Concatenate the escape sequences of every set flag.
///
/// Output order is always bold, thin, italics, underline, strikethrough.
pub fn resolve_styles(flags: StyleSet) -> String {
    [
        (flags.bold, BOLD),
        (flags.thin, DIM),
        (flags.italics, ITALIC),
        (flags.underline, UNDERLINE),
        (flags.strikethrough, STRIKETHROUGH),
    ]
    .into_iter()
    .filter_map(|(on, code)| on.then_some(code))
    .collect()
}
