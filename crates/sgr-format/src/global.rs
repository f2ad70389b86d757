use bpaf::Bpaf;
use strum::{Display, EnumString, IntoStaticStr};

/// Global options applied to all commands
#[derive(Debug, Clone, Bpaf)]
#[bpaf(generate(global_options))]
pub struct GlobalOptions {
    /// Whether to emit escape sequences: "on" writes them, "off" prints
    /// every piece of text unformatted
    #[bpaf(
        long("colors"),
        argument("on|off"),
        fallback(ColorsArg::On),
        display_fallback
    )]
    pub colors: ColorsArg,

    /// Print a summary of what was rendered to stderr
    #[bpaf(short('v'), long("verbose"), switch, fallback(false))]
    pub verbose: bool,

    /// The level of logging. In order, from the most verbose to the least verbose:
    /// debug, info, warn, error. Overridden by the `SGR_FORMAT_LOG` environment variable.
    #[bpaf(
        long("log-level"),
        argument("none|debug|info|warn|error"),
        fallback(LogLevel::None),
        display_fallback
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ColorsArg {
    #[default]
    On,
    Off,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    #[default]
    None,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level, or `None` to skip installing
    /// a subscriber.
    pub fn directive(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            level => Some(level.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bpaf::Parser;

    fn opts() -> bpaf::OptionParser<GlobalOptions> {
        global_options().to_options()
    }

    #[test]
    fn defaults() {
        let parsed = opts().run_inner(&[]).unwrap();
        assert!(!parsed.verbose);
        assert_eq!(parsed.log_level, LogLevel::None);
        assert_eq!(parsed.colors, ColorsArg::On);
    }

    #[test]
    fn verbose_short() {
        let parsed = opts().run_inner(&["-v"]).unwrap();
        assert!(parsed.verbose);
    }

    #[test]
    fn log_level_debug() {
        let parsed = opts().run_inner(&["--log-level", "debug"]).unwrap();
        assert_eq!(parsed.log_level, LogLevel::Debug);
        assert_eq!(parsed.log_level.directive(), Some("debug"));
    }

    #[test]
    fn log_level_none_has_no_directive() {
        assert_eq!(LogLevel::None.directive(), None);
    }

    #[test]
    fn log_level_invalid() {
        assert!(opts().run_inner(&["--log-level", "trace"]).is_err());
    }

    #[test]
    fn levels_round_trip_through_text() {
        for (text, level) in [
            ("none", LogLevel::None),
            ("debug", LogLevel::Debug),
            ("info", LogLevel::Info),
            ("warn", LogLevel::Warn),
            ("error", LogLevel::Error),
        ] {
            assert_eq!(text.parse::<LogLevel>().unwrap(), level);
            assert_eq!(level.to_string(), text);
        }
        assert_eq!(ColorsArg::Off.to_string(), "off");
    }

    #[test]
    fn colors_off() {
        let parsed = opts().run_inner(&["--colors", "off"]).unwrap();
        assert_eq!(parsed.colors, ColorsArg::Off);
    }

    #[test]
    fn colors_invalid() {
        assert!(opts().run_inner(&["--colors", "auto"]).is_err());
    }

    #[test]
    fn combined_flags() {
        let parsed = opts()
            .run_inner(&["-v", "--log-level", "warn", "--colors", "off"])
            .unwrap();
        assert!(parsed.verbose);
        assert_eq!(parsed.log_level, LogLevel::Warn);
        assert_eq!(parsed.colors, ColorsArg::Off);
    }
}
