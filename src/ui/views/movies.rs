use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    render_table(frame, app, chunks[0]);
    render_pagination(frame, app, chunks[1]);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.movies;

    let title = match view.metadata {
        Some(meta) if meta.total_records > 0 => {
            format!(" Movies ({}) ", meta.total_records)
        }
        _ => " Movies ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    if let Some(ref error) = view.error {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            styles::error_style(),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    if view.loading && view.movies.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "Loading…",
            styles::muted_style(),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    if view.movies.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No movies found.",
            styles::muted_style(),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<Row> = view
        .movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let style = if i == view.selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            Row::new(vec![
                movie.title.clone(),
                movie.year.to_string(),
                movie.display_runtime(),
                movie.display_genres(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Percentage(40),
        ],
    )
    .header(Row::new(vec!["Title", "Year", "Runtime", "Genres"]).style(styles::table_header_style()))
    .block(block);

    let mut state = TableState::default();
    state.select(Some(view.selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let Some(meta) = app.movies.metadata else {
        return;
    };

    let arrow_style = |enabled: bool| {
        if enabled {
            styles::help_key_style()
        } else {
            styles::muted_style()
        }
    };

    let mut spans = vec![
        Span::styled("[←] Previous", arrow_style(meta.has_previous_page())),
        Span::raw("   "),
        Span::styled(
            format!("Page {} of {}", meta.current_page, meta.last_page.max(1)),
            styles::list_item_style(),
        ),
        Span::raw("   "),
        Span::styled("[→] Next", arrow_style(meta.has_next_page())),
    ];
    if app.movies.loading {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("Loading…", styles::muted_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
