//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes. Typing goes to the focused form field;
//! navigation and submission use control keys so that plain characters
//! (including digits) stay available for text entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Route};

/// Handle a keyboard event.
pub fn handle_input(app: &mut App, key: KeyEvent) {
    // Global shortcuts work on every screen.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => {
                app.quit();
                return;
            }
            KeyCode::Char('l') => {
                if !app.session.is_authenticated() {
                    app.navigate(Route::Login);
                    return;
                }
            }
            KeyCode::Char('r') => {
                if !app.session.is_authenticated() {
                    app.navigate(Route::Register);
                    return;
                }
            }
            KeyCode::Char('t') => {
                if !app.session.is_authenticated() {
                    app.navigate(Route::Activate);
                    return;
                }
            }
            KeyCode::Char('d') => {
                if app.session.is_authenticated() {
                    app.logout();
                    return;
                }
            }
            _ => {}
        }
    }

    match app.route {
        Route::Login => handle_login_input(app, key),
        Route::Register => handle_register_input(app, key),
        Route::Activate => handle_activate_input(app, key),
        Route::Movies => handle_movies_input(app, key),
    }
}

fn handle_login_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
            // Two fields, so every direction toggles.
            app.login.focus = app.login.focus.next();
        }
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.login.backspace(),
        KeyCode::Char(c) => app.login.push_char(c),
        _ => {}
    }
}

fn handle_register_input(app: &mut App, key: KeyEvent) {
    if app.register.success {
        if key.code == KeyCode::Enter {
            app.navigate(Route::Activate);
        }
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.register.focus = app.register.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.register.focus = app.register.focus.prev(),
        KeyCode::Enter => app.submit_register(),
        KeyCode::Backspace => app.register.backspace(),
        KeyCode::Char(c) => app.register.push_char(c),
        _ => {}
    }
}

fn handle_activate_input(app: &mut App, key: KeyEvent) {
    if app.activate.success {
        if key.code == KeyCode::Enter {
            app.navigate(Route::Login);
        }
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match key.code {
        KeyCode::Enter => app.submit_activate(),
        KeyCode::Backspace => app.activate.backspace(),
        KeyCode::Char(c) => app.activate.push_char(c),
        _ => {}
    }
}

fn handle_movies_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_movie(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_movie(),
        KeyCode::Right | KeyCode::Char('n') => app.next_page(),
        KeyCode::Left | KeyCode::Char('p') => app.previous_page(),
        KeyCode::Char('r') => app.refresh_movies(app.movies.page),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
