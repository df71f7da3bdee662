use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use arbor_app::App;
use arbor_config::Config;
use arbor_i18n::{init_with_language, t};

fn main() -> Result<()> {
    // Load config first to get language setting
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config: {:#}. Using defaults.", e);
        Config::default()
    });

    init_with_language(&config.general.language);
    let tr = t();

    if !arbor_git::is_available() {
        eprintln!("{}", tr.git_not_found());
        std::process::exit(1);
    }

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let repo_root = match arbor_git::show_toplevel(&cwd) {
        Ok(root) => root,
        Err(_) => {
            eprintln!("{}", tr.not_a_repository(&cwd.display().to_string()));
            std::process::exit(1);
        }
    };
    std::env::set_current_dir(&repo_root)
        .with_context(|| format!("Failed to enter {}", repo_root.display()))?;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Only DISAMBIGUATE_ESCAPE_CODES: reporting all keys as escape codes
    // breaks modifier combinations.
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, repo_root);
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
