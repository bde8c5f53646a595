//! Terminal input mapping.
//!
//! Turns crossterm events into game `InputEvent`s. Anything unmapped is
//! dropped.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use flapper::core::game::{InputEvent, InputSource};

/// Map a terminal event to a game input, if it is one.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(InputEvent::PrimaryAction(InputSource::Mouse))
            }
            _ => None,
        },
        _ => None,
    }
}

/// Flap keys: Space, Up, Enter, W. Quit keys: Esc, Q, Ctrl-C.
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    // Only presses; held keys do not auto-flap.
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Enter
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(InputEvent::PrimaryAction(InputSource::Keyboard)),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_flap_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Char('w'),
        ] {
            assert_eq!(
                map_key(&key(code)),
                Some(InputEvent::PrimaryAction(InputSource::Keyboard))
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('q'))), Some(InputEvent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn test_unmapped_and_released_keys_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('x'))), None);
        assert_eq!(map_key(&key(KeyCode::Down)), None);

        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(&release), None);
    }

    #[test]
    fn test_left_click_is_primary_action() {
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(InputEvent::PrimaryAction(InputSource::Mouse))
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(map_event(&mouse(MouseEventKind::Moved)), None);
        assert_eq!(map_event(&Event::FocusGained), None);
    }
}
