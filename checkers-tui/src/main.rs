use checkers_tui::ui::theme::Theme;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Two-player checkers in the terminal.
#[derive(Parser)]
#[command(name = "checkers-tui", version)]
struct Args {
    /// Color preset for the board and panels
    #[arg(long, value_enum, default_value = "dark")]
    theme: ThemeArg,

    /// Directory for debug logs
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Tracing goes to a rolling file; the TUI owns the terminal.
    std::fs::create_dir_all(&args.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&args.log_dir, "checkers-tui");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("checkers-tui starting up");

    let theme = match args.theme {
        ThemeArg::Dark => Theme::dark(),
        ThemeArg::Light => Theme::light(),
    };

    let winner = checkers_tui::ui::run_app(theme)?;

    match winner {
        Some(side) => println!("Player {side} wins!"),
        None => println!("Game abandoned."),
    }

    tracing::info!(?winner, "checkers-tui shutting down");
    Ok(())
}
