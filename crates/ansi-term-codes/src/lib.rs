#![doc = include_str!("../README.md")]
#![no_std]

/// The escape control byte.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

// Text attributes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const STRIKETHROUGH: &str = "\x1b[9m";

/// First standard-intensity foreground color (black). Red is `FG_BASE + 1`.
pub const FG_BASE: u8 = 30;
/// First standard-intensity background color (black).
pub const BG_BASE: u8 = 40;
/// First high-intensity foreground color (bright black).
pub const FG_BRIGHT_BASE: u8 = 90;
/// First high-intensity background color (bright black).
pub const BG_BRIGHT_BASE: u8 = 100;

/// Extended foreground color introducer, followed by `5;n` or `2;r;g;b`.
pub const FG_EXTENDED: u8 = 38;
/// Extended background color introducer, followed by `5;n` or `2;r;g;b`.
pub const BG_EXTENDED: u8 = 48;

/// Sub-parameter selecting a 256-color palette index.
pub const PALETTE_256: u8 = 5;
/// Sub-parameter selecting a 24-bit RGB color.
pub const TRUECOLOR: u8 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_sequences() {
        let params = [RESET, BOLD, DIM, ITALIC, UNDERLINE, STRIKETHROUGH]
            .map(|seq| seq.strip_prefix(CSI).and_then(|s| s.strip_suffix('m')));
        assert_eq!(
            params,
            [Some("0"), Some("1"), Some("2"), Some("3"), Some("4"), Some("9")]
        );
    }

    #[test]
    fn csi_starts_with_esc() {
        assert!(CSI.starts_with(ESC));
        assert!(RESET.starts_with(CSI));
    }
}
