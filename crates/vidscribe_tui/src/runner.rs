//! TUI runner - main loop and backend integration.
//!
//! This module contains the main TUI loop that works with any backend
//! implementing the TuiBackend trait.

use crate::{Action, App, Event, EventHandler, Focus, TuiBackend};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info};
use vidscribe_error::{TuiError, TuiErrorKind, TuiResult};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI with the provided backend until the user quits.
///
/// Generation failures are shown on screen; only terminal failures end the
/// loop with an error.
pub async fn run_tui(backend: &mut dyn TuiBackend) -> TuiResult<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;

    let result = event_loop(&mut terminal, backend).await;

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;

    result
}

async fn event_loop(terminal: &mut CrosstermTerminal, backend: &mut dyn TuiBackend) -> TuiResult<()> {
    let mut app = App::new();
    let events = EventHandler::new(250);

    while !app.should_quit {
        redraw(terminal, &app)?;

        let Some(Event::Key(key)) = events.next()? else {
            continue;
        };

        if let Some(Action::Submit(raw)) = handle_key(&mut app, key) {
            app.begin_generation();
            redraw(terminal, &app)?;
            submit(&mut app, backend, &raw).await;
        }
    }

    Ok(())
}

fn redraw(terminal: &mut CrosstermTerminal, app: &App) -> TuiResult<()> {
    terminal
        .draw(|f| crate::ui::draw(f, app))
        .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;
    Ok(())
}

/// Apply a key press to the app state.
///
/// Returns the action the run loop must perform, if any.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        code => match app.focus {
            Focus::Input => match code {
                KeyCode::Enter => return Some(Action::Submit(app.input.clone())),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            },
            Focus::Panels => match code {
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
                _ => {}
            },
        },
    }

    None
}

/// Run one submission through the backend and record the outcome.
///
/// Empty input leaves the output untouched. A failure replaces any earlier
/// results with the error message.
#[tracing::instrument(skip(app, backend))]
pub async fn submit(app: &mut App, backend: &mut dyn TuiBackend, raw: &str) {
    match backend.generate(raw).await {
        Ok(Some(view)) => {
            info!("Generation finished");
            app.show_results(view);
        }
        Ok(None) => app.ignore_empty(),
        Err(e) => {
            error!(error = %e, "Generation failed");
            app.show_error(e.to_string());
        }
    }
}
