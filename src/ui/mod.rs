//! Terminal UI module using ratatui.
//!
//! This module provides the TUI rendering and input handling:
//!
//! - `render`: Main frame rendering and layout
//! - `input`: Keyboard event handling
//! - `styles`: Color schemes and text styling
//! - `views`: Per-screen content rendering (login, register, activate, movies)

pub mod input;
pub mod render;
pub mod styles;
pub mod views;
