use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEventKind,
};
use filetree::app::App;
use filetree::config::Config;
use filetree::services::terminal_modes::{self, TerminalModes};
use filetree::services::{log_dirs, tracing_setup};
use filetree::view::theme::ColorMode;
use ratatui::Terminal;
use std::{io::stdout, path::PathBuf, time::Duration};

/// An in-memory file and folder tree editor for the terminal
#[derive(Parser, Debug)]
#[command(name = "filetree")]
#[command(about = "Build a file/folder tree in the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in light or dark mode, overriding the config file
    #[arg(long, value_enum)]
    theme: Option<ColorMode>,

    /// Path to log file for diagnostics (default: state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    Ok(config)
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // --dump-config needs no terminal setup
    if args.dump_config {
        let config = load_config(&args)?;
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(log_dirs::main_log_path);
    if !tracing_setup::init_global(&log_file) {
        eprintln!("Warning: could not open log file {}", log_file.display());
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!("filetree starting, logging to {:?}", log_file);

    let config = load_config(&args)?;
    tracing::debug!("Effective config: {:?}", config);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut modes = TerminalModes::enable().context("Failed to set up terminal")?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.clear()?;

    let mut app = App::new(config);
    let result = run_event_loop(&mut app, &mut terminal);

    modes.undo();
    if let Err(e) = &result {
        tracing::error!("Event loop failed: {:?}", e);
    }
    tracing::info!("filetree exiting");
    result
}

fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
) -> AnyhowResult<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|frame| app.render(frame))?;
            needs_render = false;
        }

        if app.should_quit() {
            break;
        }

        if !event_poll(Duration::from_millis(250))? {
            continue;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    app.handle_key(key_event);
                    needs_render = true;
                }
            }
            CrosstermEvent::Mouse(mouse_event) => {
                if app.handle_mouse(mouse_event) {
                    needs_render = true;
                }
            }
            CrosstermEvent::Paste(text) => {
                app.handle_paste(&text);
                needs_render = true;
            }
            CrosstermEvent::Resize(_, _) => {
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}
