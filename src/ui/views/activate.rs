use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

use super::{error_banner, field_lines, form_rect};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.activate.success {
        render_success(frame, area);
    } else {
        render_form(frame, app, area);
    }
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.activate;
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Enter the token from your email",
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    lines.extend(error_banner(form.error.as_deref()));

    lines.extend(field_lines(
        "Activation token",
        &form.token,
        true,
        &form.field_errors,
        "token",
    ));

    if form.loading {
        lines.push(Line::from(Span::styled(
            "Activating…",
            styles::highlight_style(),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[Enter]", styles::help_key_style()),
            Span::raw(" Activate account"),
        ]));
    }

    let height = lines.len() as u16 + 2;
    let block = Block::default()
        .title(" Activate account ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, form_rect(area, height));
}

fn render_success(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Your account is now active.",
            styles::success_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", styles::help_key_style()),
            Span::raw(" Sign in"),
        ]),
    ];

    let height = lines.len() as u16 + 2;
    let block = Block::default()
        .title(" Account activated ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, form_rect(area, height));
}
