//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use crate::filter::ConnectionTier;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::FocusNext),
        KeyCode::Char(' ') | KeyCode::Enter => Some(AppMsg::ToggleExchange),
        KeyCode::Char('a') => Some(AppMsg::SelectAllExchanges),
        KeyCode::Char('n') => Some(AppMsg::DeselectAllExchanges),
        KeyCode::Char('x') => Some(AppMsg::ClearMaxTier),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char(digit) => tier_from_digit(digit).map(AppMsg::SetMaxTier),
        _ => None,
    }
}

fn tier_from_digit(digit: char) -> Option<ConnectionTier> {
    digit
        .to_digit(10)
        .and_then(|value| u8::try_from(value).ok())
        .map(ConnectionTier::new)
}
