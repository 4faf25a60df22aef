use std::io::stdout;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use meal_suggest::app::App;
use meal_suggest::cli::Args;
use meal_suggest::config::load_config;
use meal_suggest::suggestion::labels_listing;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if args.labels {
        println!("{}", labels_listing());
        return Ok(());
    }

    #[cfg(debug_assertions)]
    let log_notice = match meal_suggest::logging::init() {
        Ok(path) => {
            log::debug!("Logging to {}", path.display());
            None
        }
        Err(err) => Some(meal_suggest::logging::failure_notice(&err)),
    };
    #[cfg(not(debug_assertions))]
    let log_notice: Option<String> = None;

    let loaded = load_config(args.config.as_deref());
    let mouse = loaded.config.ui.mouse;

    let mut app = App::new(&loaded.config);
    if let Some(warning) = loaded.warning {
        app.add_status(warning);
    }
    if let Some(notice) = log_notice {
        app.add_status(notice);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if mouse {
        if let Err(err) = execute!(stdout(), EnableMouseCapture) {
            ratatui::restore();
            return Err(err.into());
        }
    }

    let result = run(terminal, app);

    // Best-effort teardown; the run result is what gets reported
    if mouse {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
