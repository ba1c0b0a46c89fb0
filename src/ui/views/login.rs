use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoginField};
use crate::ui::styles;

use super::{error_banner, field_lines, form_rect, masked};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.login;
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Sign in to your account",
        styles::muted_style(),
    ))];
    lines.push(Line::from(""));

    lines.extend(error_banner(form.error.as_deref()));

    let password = masked(&form.password);
    lines.extend(field_lines(
        "Email",
        &form.email,
        form.focus == LoginField::Email,
        &form.field_errors,
        "email",
    ));
    lines.extend(field_lines(
        "Password",
        &password,
        form.focus == LoginField::Password,
        &form.field_errors,
        "password",
    ));

    if form.loading {
        lines.push(Line::from(Span::styled(
            "Signing in…",
            styles::highlight_style(),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[Enter]", styles::help_key_style()),
            Span::raw(" Sign in   "),
            Span::styled("[Tab]", styles::help_key_style()),
            Span::raw(" Next field"),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Don't have an account? Press Ctrl+R to register.",
        styles::muted_style(),
    )));

    let height = lines.len() as u16 + 2;
    let block = Block::default()
        .title(" Welcome back ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, form_rect(area, height));
}
