//! slidedeck - Main entry point
//!
//! Presents a module-grouped slide deck in the terminal, or inspects a
//! catalog from the command line.

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use slidedeck::app::{App, AppState};
use slidedeck::cli::{Cli, Commands};
use slidedeck::config::DeckConfig;
use slidedeck::error::DeckError;
use slidedeck::loader::AssetLoader;
use slidedeck::{Presentation, SlideCatalog};

/// Where log output goes
enum LogTarget<'a> {
    /// Presenter with --log-file
    File(&'a Path),
    /// Presenter without a log file; the alternate screen must stay clean
    Discard,
    /// Command-line subcommands
    Stderr,
}

/// Initialize the logger with appropriate settings
fn init_logger(target: LogTarget<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let (writer, default_level, ansi) = match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .map_err(|e| DeckError::config(format!("Cannot open log file {:?}: {}", path, e)))?;
            (BoxMakeWriter::new(Mutex::new(file)), "info", false)
        }
        LogTarget::Discard => (BoxMakeWriter::new(std::io::sink), "info", false),
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), "warn", true),
    };

    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| DeckError::general(format!("Failed to initialize logging: {}", e)))?;
    Ok(())
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = DeckConfig::from_cli(&cli);
    let command = cli.command.clone().unwrap_or_default();

    let log_target = match (&command, config.log_file.as_deref()) {
        (Commands::Present { .. }, Some(path)) => LogTarget::File(path),
        (Commands::Present { .. }, None) => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    init_logger(log_target)?;
    info!("slidedeck starting up");
    debug!("Resolved configuration: {:?}", config);

    match command {
        Commands::Validate { catalog } => run_validate(&config, catalog.as_deref()),
        Commands::List => run_list(&config),
        Commands::Modules => run_modules(&config),
        Commands::Present { start } => run_presenter(&config, start),
    }

    Ok(())
}

/// Print a CLI failure and exit non-zero
fn fail(message: impl std::fmt::Display) -> ! {
    error!("{}", message);
    eprintln!("✗ {}", message);
    std::process::exit(1);
}

/// Load settings and catalog, refusing a catalog that fails validation
fn load_presentation(config: &DeckConfig) -> anyhow::Result<Presentation> {
    let settings = config.load_settings()?;
    let catalog = config.load_catalog()?;
    catalog.validate()?;
    Ok(Presentation::new(catalog, settings.builder(), config.include_all))
}

fn run_validate(config: &DeckConfig, path: Option<&Path>) {
    let loaded = match path.or(config.catalog_path.as_deref()) {
        Some(path) => {
            info!("Validating catalog file: {:?}", path);
            SlideCatalog::load_from_file(path)
        }
        None => {
            info!("Validating built-in catalog");
            SlideCatalog::builtin()
        }
    };

    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => fail(format!("Failed to load catalog: {:#}", e)),
    };

    let issues = catalog.issues();
    if issues.is_empty() {
        println!("✓ Catalog is valid: {} records", catalog.len());
    } else {
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        fail(format!("Catalog validation failed with {} issue(s)", issues.len()));
    }
}

fn run_list(config: &DeckConfig) {
    let presentation = match load_presentation(config) {
        Ok(p) => p,
        Err(e) => fail(format!("{:#}", e)),
    };

    println!(
        "Active slides: {} ({} deck)",
        presentation.len(),
        if presentation.include_all() { "full" } else { "reduced" }
    );
    for slide in presentation.slides() {
        let marker = if slide.is_module_start { "▸" } else { " " };
        println!(
            "{} {:>3}  {:<10} {}  ({})",
            marker,
            slide.id,
            slide.layout_type.to_string(),
            slide.title,
            slide.module
        );
    }

    let range = presentation.reduced_range();
    println!(
        "\nReduced-range slides ({}-{}) included: {}",
        range.start,
        range.end,
        if presentation.includes_reduced_range() { "yes" } else { "no" }
    );
}

fn run_modules(config: &DeckConfig) {
    let presentation = match load_presentation(config) {
        Ok(p) => p,
        Err(e) => fail(format!("{:#}", e)),
    };

    println!("Modules: {}", presentation.modules().len());
    for module in presentation.modules().modules() {
        println!(
            "  [{}] {:<12} starts at slide {:>3}  {}",
            module.rank + 1,
            module.name,
            module.start_index + 1,
            module.full_name
        );
    }
}

/// Run the interactive presenter
fn run_presenter(config: &DeckConfig, start: u32) {
    let presentation = match load_presentation(config) {
        Ok(p) => p,
        Err(e) => fail(format!("{:#}", e)),
    };

    let mut state = AppState::new(presentation, config.toggle_enabled);
    if start > 1 && !state.start_at(start) {
        warn!("Start slide {} is out of range, opening on the first slide", start);
    }
    let app = App::new(state, AssetLoader::new(&config.asset_root));

    if let Err(e) = run_tui(app) {
        fail(e);
    }
}

fn run_tui(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode().map_err(|e| DeckError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        restore_terminal();
        return Err(DeckError::terminal(format!("Failed to enter alternate screen: {}", e)).into());
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout())) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal();
            return Err(DeckError::terminal(format!("Failed to create terminal: {}", e)).into());
        }
    };

    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = terminal.show_cursor();
    restore_terminal();

    if result.is_ok() {
        info!("Presenter exited normally");
    }
    result
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
}
