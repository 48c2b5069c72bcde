//! Interactive terminal session.
//!
//! The layout is re-detected through the [`ViewportSize`] provider at startup
//! and on every resize event.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::app::App;
use crate::config::Settings;
use crate::ui;
use crate::viewport::{LayoutMode, ViewportSize};

/// Restores the terminal when dropped.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut io::stdout()) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step is attempted; the first error is returned.
fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Runs the game until the player quits, restoring the terminal afterwards.
#[instrument(skip_all)]
pub fn run(settings: &Settings, viewport: &impl ViewportSize) -> Result<()> {
    info!("Starting interactive session");

    enable_raw_mode()?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(settings.start_reversed());
    let res = run_app(&mut terminal, app, settings, viewport);

    if let Err(e) = &res {
        error!(error = %e, "Session ended with error");
    }
    info!("Session ended");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    settings: &Settings,
    viewport: &impl ViewportSize,
) -> Result<()> {
    let mut mode = LayoutMode::detect(viewport, settings.compact_width());
    loop {
        terminal.draw(|f| ui::draw(f, &app, mode))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let event = event::read()?;
        match &event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key.code);
                if app.should_quit() {
                    return Ok(());
                }
            }
            _ => mode = layout_after(&event, mode, viewport, settings.compact_width()),
        }
    }
}

/// Layout to use after `event`; resizes re-query the provider.
fn layout_after(
    event: &Event,
    current: LayoutMode,
    viewport: &impl ViewportSize,
    compact_width: u16,
) -> LayoutMode {
    match event {
        Event::Resize(width, height) => {
            let mode = LayoutMode::detect(viewport, compact_width);
            info!(width, height, %mode, "Viewport resized");
            mode
        }
        _ => current,
    }
}
