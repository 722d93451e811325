//! periodic-tui - An interactive periodic table in the terminal
//!
//! This is the main entry point for the periodic-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logger;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::{Config, ConfigSource};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    let (config, source) = Config::load();

    // Logging is best effort: the table works without a writable home
    if let Some(log_path) = Config::log_path() {
        if let Err(e) = logger::init(&log_path, logger::parse_level(&config.log_level)) {
            eprintln!("Logging disabled: {:#}", e);
        }
    }
    match &source {
        ConfigSource::File(path) => log::info!("Loaded config from {}", path.display()),
        ConfigSource::Missing => log::info!("No config file, using defaults"),
        ConfigSource::Invalid(reason) => log::warn!("{}; using defaults", reason),
    }

    let mut app = App::new(config.clone())?;
    log::info!("Loaded {} elements", app.catalog.len());

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        log::error!("Fatal: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        if let Err(e) = draw_result {
            log::error!("Draw error: {:#}", e);
        }

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            let mut current_action = Some(Action::Tick);
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        }
    }

    Ok(())
}
