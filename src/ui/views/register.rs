use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, RegisterField};
use crate::ui::styles;

use super::{error_banner, field_lines, form_rect, masked};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.register.success {
        render_success(frame, app, area);
    } else {
        render_form(frame, app, area);
    }
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.register;
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Join Greenlight today", styles::muted_style())),
        Line::from(""),
    ];

    lines.extend(error_banner(form.error.as_deref()));

    let password = masked(&form.password);
    lines.extend(field_lines(
        "Name",
        &form.name,
        form.focus == RegisterField::Name,
        &form.field_errors,
        "name",
    ));
    lines.extend(field_lines(
        "Email",
        &form.email,
        form.focus == RegisterField::Email,
        &form.field_errors,
        "email",
    ));
    lines.extend(field_lines(
        "Password",
        &password,
        form.focus == RegisterField::Password,
        &form.field_errors,
        "password",
    ));

    if form.loading {
        lines.push(Line::from(Span::styled(
            "Creating account…",
            styles::highlight_style(),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[Enter]", styles::help_key_style()),
            Span::raw(" Create account   "),
            Span::styled("[Tab]", styles::help_key_style()),
            Span::raw(" Next field"),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Already have an account? Press Ctrl+L to sign in.",
        styles::muted_style(),
    )));

    let height = lines.len() as u16 + 2;
    let block = Block::default()
        .title(" Create account ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, form_rect(area, height));
}

fn render_success(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Account created.",
            styles::success_style(),
        )),
        Line::from(""),
        Line::from(format!(
            "We've sent an activation token to {}.",
            app.register.email.trim()
        )),
        Line::from("Copy the token from the email, then activate your account."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", styles::help_key_style()),
            Span::raw(" Activate account"),
        ]),
    ];

    let height = lines.len() as u16 + 2;
    let block = Block::default()
        .title(" Check your email ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, form_rect(area, height));
}
