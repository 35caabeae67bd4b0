//! UI rendering for TUI.

use crate::app::{App, Focus, GenerationView, Outcome, Panel};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Topic input
            Constraint::Min(0),    // Output
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_input(f, app, chunks[1]);

    match &app.outcome {
        Outcome::Idle => draw_idle(f, chunks[2]),
        Outcome::Success(view) => draw_results(f, app, view, chunks[2]),
        Outcome::Failed(message) => draw_error(f, message, chunks[2]),
    }

    draw_status_bar(f, app, chunks[3]);
}

/// Draw the header.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎥 YouTube GPT Creator")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

#[tracing::instrument(skip_all)]
fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.focus == Focus::Input {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Plug in your prompt here")
            .border_style(style),
    );
    f.render_widget(input, area);

    if app.focus == Focus::Input {
        let offset = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position((x, area.y + 1));
    }
}

fn draw_idle(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new("Enter a topic above and press Enter to generate a title and script.")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(hint, area);
}

#[tracing::instrument(skip_all)]
fn draw_error(f: &mut Frame, message: &str, area: Rect) {
    let error = Paragraph::new(message)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Error")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    f.render_widget(error, area);
}

/// Draw the title, the script and the collapsible panels.
#[tracing::instrument(skip_all)]
fn draw_results(f: &mut Frame, app: &App, view: &GenerationView, area: Rect) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(5)];
    for panel in Panel::ALL {
        if app.is_expanded(panel) {
            constraints.push(Constraint::Length(8));
        } else {
            constraints.push(Constraint::Length(1));
        }
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(view.title.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Generated Title")
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().fg(Color::Green));
    f.render_widget(title, chunks[0]);

    let script = Paragraph::new(view.script.as_str())
        .block(Block::default().borders(Borders::ALL).title("Video Script"))
        .wrap(Wrap { trim: false })
        .scroll((app.script_scroll, 0));
    f.render_widget(script, chunks[1]);

    for (panel, area) in Panel::ALL.into_iter().zip(chunks.iter().skip(2)) {
        draw_panel(f, app, view, panel, *area);
    }
}

fn draw_panel(f: &mut Frame, app: &App, view: &GenerationView, panel: Panel, area: Rect) {
    let selected = app.focus == Focus::Panels && app.selected_panel == panel;
    let heading_style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    if app.is_expanded(panel) {
        let body = Paragraph::new(view.panel_text(panel))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("▼ {}", panel.label()))
                    .title_style(heading_style),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(body, area);
    } else {
        let heading = Paragraph::new(format!("▶ {}", panel.label())).style(heading_style);
        f.render_widget(heading, area);
    }
}

/// Draw the status bar with help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Input => "Enter: Generate | Tab: Panels | PgUp/PgDn: Scroll | Esc: Quit",
        Focus::Panels => "↑↓: Select | Enter/Space: Expand | Tab: Input | Esc: Quit",
    };

    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
