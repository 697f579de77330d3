//! Input handling for the TUI application.
//!
//! Maps terminal key events onto application messages. Each judgment
//! trigger has exactly one key; the in-flight and terminal guards live in
//! the message handlers, not here.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Up => Some(AppMsg::Approve),
        KeyCode::Left => Some(AppMsg::Reject),
        KeyCode::Right => Some(AppMsg::Skip),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
