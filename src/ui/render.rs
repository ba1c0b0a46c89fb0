use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Route};

use super::styles;
use super::views::{activate, login, movies, register};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(2), // Navigation
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0]);
    render_nav(frame, app, chunks[1]);
    render_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = "  Greenlight";
    let hint = "[Ctrl+Q] Quit";

    let line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title.len() as u16 + hint.len() as u16 + 4) as usize,
        )),
        Span::styled(hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let entries: Vec<(&str, Route)> = if app.session.is_authenticated() {
        vec![("Movies", Route::Movies)]
    } else {
        vec![
            ("[^L] Sign in", Route::Login),
            ("[^R] Register", Route::Register),
            ("[^T] Activate", Route::Activate),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (label, route)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        spans.push(Span::styled(*label, styles::nav_style(app.route == *route)));
    }
    if app.session.is_authenticated() {
        spans.push(Span::styled(" | ", styles::muted_style()));
        spans.push(Span::styled("[^D] Sign out", styles::nav_style(false)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.route {
        Route::Login => login::render(frame, app, area),
        Route::Register => register::render(frame, app, area),
        Route::Activate => activate::render(frame, app, area),
        Route::Movies => movies::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let session = if app.session.is_authenticated() {
        Span::styled(" signed in ", styles::success_style())
    } else {
        Span::styled(" anonymous ", styles::muted_style())
    };

    let keys = match app.route {
        Route::Movies => "↑/↓ select  ←/→ page  r refresh  ^D sign out",
        Route::Login | Route::Register => "Tab next field  Enter submit",
        Route::Activate => "Enter submit",
    };

    let line = Line::from(vec![
        session,
        Span::raw(" | "),
        Span::styled(keys, styles::muted_style()),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(styles::status_bar_style()),
        area,
    );
}
