//! Per-screen content rendering.

pub mod activate;
pub mod login;
pub mod movies;
pub mod register;

use std::collections::HashMap;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
};

use crate::ui::styles;

/// Width of form cards, in columns.
const FORM_WIDTH: u16 = 60;

/// Center a form card of the given height within the available area.
pub fn form_rect(area: Rect, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(1),
        ])
        .split(area);

    let width = FORM_WIDTH.min(area.width);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(width),
            Constraint::Min(1),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Lines for one labelled form field: the label/value row plus an optional
/// field-error row underneath.
pub fn field_lines<'a>(
    label: &'a str,
    value: &'a str,
    focused: bool,
    field_errors: &'a HashMap<String, String>,
    field_key: &str,
) -> Vec<Line<'a>> {
    let cursor = if focused { "_" } else { "" };
    let mut lines = vec![
        Line::from(Span::styled(label, styles::label_style(focused))),
        Line::from(Span::styled(
            format!("{}{}", value, cursor),
            styles::input_style(focused),
        )),
    ];
    if let Some(message) = field_errors.get(field_key) {
        lines.push(Line::from(Span::styled(
            message.as_str(),
            styles::error_style(),
        )));
    }
    lines.push(Line::from(""));
    lines
}

/// Masked rendering for password fields.
pub fn masked(value: &str) -> String {
    "•".repeat(value.chars().count())
}

/// Banner line for a general (non-field) error, or nothing.
pub fn error_banner(error: Option<&str>) -> Vec<Line<'_>> {
    match error {
        Some(message) => vec![
            Line::from(Span::styled(message, styles::error_style())),
            Line::from(""),
        ],
        None => vec![],
    }
}
