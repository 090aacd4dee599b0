//! equation-tui: run the equation widget in a terminal
//!
//! Click the counter boxes with the mouse, or use ←/→ (1/2), Tab and Enter.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use equation_counter::config::EquationConfig;
use equation_counter::tui::{render, Action, EquationApp, InputHandler};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Two click counters and their sum
#[derive(Parser, Debug)]
#[command(name = "equation-tui", version, about)]
struct Args {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directive (overrides RUST_LOG and the config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

impl Args {
    /// Loads the config file, if any, and applies flag overrides
    fn resolve_config(&self) -> Result<EquationConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => EquationConfig::load(path)?,
            None => EquationConfig::default(),
        };
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        if let Some(level) = &self.log_level {
            config = config.with_log_level(level.clone());
        }
        Ok(config)
    }
}

/// Picks the log filter: `--log-level`, then `RUST_LOG`, then the config file
fn filter_directive(flag: Option<&str>, env: Option<String>, config: &EquationConfig) -> String {
    match (flag, env) {
        (Some(level), _) => level.to_owned(),
        (None, Some(env)) if !env.trim().is_empty() => env,
        _ => config.log_level.clone(),
    }
}

/// Installs a file logger; the terminal itself is busy with the UI
fn init_tracing(args: &Args, config: &EquationConfig) -> io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let directive = filter_directive(
        args.log_level.as_deref(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        config,
    );

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_ansi(false)
        .with_writer(Mutex::new(File::create(path)?))
        .init();
    Ok(())
}

/// Raw mode plus alternate screen, undone on drop
///
/// Dropping restores the terminal on every exit path, including a failed
/// setup and an error out of the event loop.
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = execute!(stdout, Show);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.resolve_config()?;
    init_tracing(&args, &config)?;
    let mouse = config.mouse;

    let guard = TerminalGuard::enter(mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    tracing::info!(mouse, "equation-tui started");
    let mut app = EquationApp::with_config(config);
    let result = run_app(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    match &result {
        Ok(()) => tracing::info!(counters = %app.snapshot(), "equation-tui stopped"),
        Err(err) => tracing::error!(counters = %app.snapshot(), %err, "equation-tui failed"),
    }
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut EquationApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_handler = InputHandler::new();

    loop {
        let mut layout = None;
        terminal.draw(|f| layout = Some(render(app, f)))?;

        let event = event::read()?;
        let action = match &layout {
            Some(layout) => input_handler.handle_event(&event, layout),
            None => Action::None,
        };
        if action != Action::None {
            tracing::trace!(?action, "input");
        }

        if app.apply(action) {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("equation-tui").chain(args.iter().copied())).unwrap()
    }

    // ===== Config merge tests =====

    #[test]
    fn test_no_flags_uses_defaults() {
        let config = parse(&[]).resolve_config().unwrap();
        assert_eq!(config, EquationConfig::default());
    }

    #[test]
    fn test_file_values_apply_without_flags() {
        let file = config_file("mouse: false\nlog_level: warn\ntitle: Sums\n");
        let path = file.path().to_str().unwrap();

        let config = parse(&["--config", path]).resolve_config().unwrap();
        assert!(!config.mouse);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.title, "Sums");
    }

    #[test]
    fn test_flags_override_file_values() {
        let file = config_file("mouse: true\nlog_level: warn\n");
        let path = file.path().to_str().unwrap();

        let config = parse(&["-c", path, "--no-mouse", "--log-level", "debug"])
            .resolve_config()
            .unwrap();
        assert!(!config.mouse);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let args = parse(&["--config", path.to_str().unwrap()]);
        assert!(args.resolve_config().is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["equation-tui", "--bogus"]).is_err());
    }

    // ===== Log filter precedence tests =====

    #[test]
    fn test_flag_beats_env_and_config() {
        let config = EquationConfig::default().with_log_level("warn");
        let directive = filter_directive(Some("debug"), Some("trace".into()), &config);
        assert_eq!(directive, "debug");
    }

    #[test]
    fn test_env_used_when_flag_absent() {
        let config = EquationConfig::default().with_log_level("warn");
        assert_eq!(filter_directive(None, Some("trace".into()), &config), "trace");
    }

    #[test]
    fn test_config_used_when_flag_and_env_absent() {
        let config = EquationConfig::default().with_log_level("warn");
        assert_eq!(filter_directive(None, None, &config), "warn");
        assert_eq!(filter_directive(None, Some("  ".into()), &config), "warn");
    }
}
