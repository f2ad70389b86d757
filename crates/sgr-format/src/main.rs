use sgr_format::global::LogLevel;
use tracing_subscriber::prelude::*;

fn main() -> miette::Result<()> {
    setup_miette();
    let cli = sgr_format::cli::cli().run();
    setup_tracing(cli.global.log_level);

    let stdout = std::io::stdout();
    sgr_format::cli::run(&cli, &mut stdout.lock())
}

fn setup_miette() {
    let theme = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        miette::GraphicalTheme::unicode()
    } else {
        miette::GraphicalTheme::unicode_nocolor()
    };
    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .context_lines(2)
                .graphical_theme(theme.clone())
                .build(),
        )
    }))
    .ok();
}

/// Install a subscriber when `SGR_FORMAT_LOG` is set or `--log-level` is not
/// `none`. Verbose span entry/exit is only shown for the env var.
fn setup_tracing(level: LogLevel) {
    let (filter, explicit) = match tracing_subscriber::EnvFilter::try_from_env("SGR_FORMAT_LOG") {
        Ok(f) => (f, true),
        Err(_) => match level.directive() {
            Some(directive) => (tracing_subscriber::EnvFilter::new(directive), false),
            None => return,
        },
    };
    tracing_subscriber::registry()
        .with(
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
                .with_indent_lines(true)
                .with_verbose_exit(explicit)
                .with_verbose_entry(explicit)
                .with_timer(tracing_tree::time::Uptime::default())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
