//! Main application module.
//!
//! Contains the App struct and the event loop.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use arbor_config::{constants, Config};
use arbor_core::event::{Event, EventHandler};
use arbor_core::{RefreshMode, RefreshScope, RefreshService};
use arbor_panel_worktrees::WorktreesController;

use crate::keys::GlobalKeys;
use crate::state::AppState;

mod key_handler;
mod modal_handler;
mod mouse_handler;

/// Main application
pub struct App {
    state: AppState,
    controller: WorktreesController,
    keys: GlobalKeys,
    event_handler: EventHandler,
}

impl App {
    /// Create the application for the repository at `location`.
    pub fn new(config: Config, location: PathBuf) -> Self {
        init_logging(&config);
        arbor_logger::info(format!("Application started in {}", location.display()));

        Self::with_state(AppState::new(config, location))
    }

    /// Create the application around prepared state.
    pub fn with_state(mut state: AppState) -> Self {
        let controller = WorktreesController::new(&state.config.keybinding.universal);
        let keys = GlobalKeys::from_config(&state.config.keybinding.universal);

        state.refresh(RefreshScope::Worktrees, RefreshMode::Sync);

        Self {
            state,
            controller,
            keys,
            event_handler: EventHandler::new(Duration::from_millis(
                constants::EVENT_HANDLER_INTERVAL_MS,
            )),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn controller(&self) -> &WorktreesController {
        &self.controller
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.state.should_quit {
            match self.event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key_event(key)?;
                    self.state.needs_redraw = true;
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse)?;
                }
                Event::Resize(_, _) => {
                    self.state.needs_redraw = true;
                }
                Event::Tick => {
                    self.state.poll_refresh();
                }
            }

            // Render UI only when needed
            if self.state.needs_redraw {
                terminal.draw(|frame| {
                    crate::ui::render(frame, &mut self.state, &self.controller, &self.keys);
                })?;
                self.state.needs_redraw = false;
            }
        }

        arbor_logger::info("Application exiting");
        Ok(())
    }
}

fn init_logging(config: &Config) {
    let min_log_level = arbor_logger::LogLevel::from_str(&config.logging.min_level)
        .unwrap_or(arbor_logger::LogLevel::Info);

    arbor_logger::init(config.log_file_path(), min_log_level);
}
