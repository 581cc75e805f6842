use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use libwebserver::{
    AnsiStyler, PackageVersion, PlainStyler, ProcessExit, Styler, TaggedStyler, VersionProvider,
    help,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// How the help screen is styled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum StyleMode {
    /// ANSI colours when stdout is a terminal, plain text otherwise
    #[default]
    Auto,
    Ansi,
    Plain,
    Tagged,
}

// Server commands are dispatched elsewhere; anything this binary does not
// recognise falls through to the help screen.
#[derive(Debug, Parser)]
#[command(
    name = "web-server",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(long = "style", value_enum, default_value_t = StyleMode::Auto)]
    style: StyleMode,

    command: Option<String>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

impl StyleMode {
    /// Settles `Auto`. `NO_COLOR` wins over a terminal (https://no-color.org/).
    fn resolve(self, no_color: bool, is_tty: bool) -> StyleMode {
        match self {
            StyleMode::Auto if no_color => StyleMode::Plain,
            StyleMode::Auto if is_tty => StyleMode::Ansi,
            StyleMode::Auto => StyleMode::Plain,
            other => other,
        }
    }
}

fn select_styler(mode: StyleMode) -> &'static dyn Styler {
    let no_color = std::env::var("NO_COLOR").is_ok();
    let mode = mode.resolve(no_color, io::stdout().is_tty());
    debug!(?mode, no_color, "selected styler");

    match mode {
        StyleMode::Ansi => &AnsiStyler,
        StyleMode::Tagged => &TaggedStyler,
        _ => &PlainStyler,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            debug!(%err, "unrecognised invocation, showing help");
            Cli {
                style: StyleMode::Auto,
                command: None,
                rest: Vec::new(),
            }
        }
    };
    debug!(command = ?cli.command, "dispatching");

    if cli.command.as_deref() == Some("version") {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", PackageVersion.version())?;
        stdout.flush()?;
        return Ok(());
    }

    let styler = select_styler(cli.style);
    match help(styler, &PackageVersion, io::stdout().lock(), ProcessExit)? {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolution() {
        assert_eq!(StyleMode::Auto.resolve(false, true), StyleMode::Ansi);
        assert_eq!(StyleMode::Auto.resolve(false, false), StyleMode::Plain);
        assert_eq!(StyleMode::Auto.resolve(true, true), StyleMode::Plain);
    }

    #[test]
    fn test_explicit_mode_ignores_environment() {
        for mode in [StyleMode::Ansi, StyleMode::Plain, StyleMode::Tagged] {
            assert_eq!(mode.resolve(true, false), mode);
            assert_eq!(mode.resolve(false, true), mode);
        }
    }
}
