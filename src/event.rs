//! Module for translating terminal key events into game [`Input`]s.

use crossterm::event::{self, KeyCode};

/// A single keyboard input, as seen by a game tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Left,
    Right,
    Up,
    Down,
    Enter,
    /// Esc or `q`.
    Quit,
    /// Any other printable key.
    Char(char),
}

impl Input {
    /// Maps a raw crossterm event to an [`Input`], if it is one we care
    /// about. Arrow keys and WASD both produce directions.
    pub fn from_event(event: event::Event) -> Option<Self> {
        match event {
            event::Event::Key(key) => match key.code {
                KeyCode::Left => Some(Input::Left),
                KeyCode::Right => Some(Input::Right),
                KeyCode::Up => Some(Input::Up),
                KeyCode::Down => Some(Input::Down),
                KeyCode::Enter => Some(Input::Enter),
                KeyCode::Esc => Some(Input::Quit),
                KeyCode::Char('q') => Some(Input::Quit),
                KeyCode::Char('a') => Some(Input::Left),
                KeyCode::Char('d') => Some(Input::Right),
                KeyCode::Char('w') => Some(Input::Up),
                KeyCode::Char('s') => Some(Input::Down),
                KeyCode::Char(c) => Some(Input::Char(c)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Horizontal movement as -1, 0 or +1, for paddle-style control.
    pub fn horizontal(self) -> i32 {
        match self {
            Input::Left => -1,
            Input::Right => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn wasd_aliases_arrows() {
        assert_eq!(Input::from_event(key(KeyCode::Char('a'))), Some(Input::Left));
        assert_eq!(Input::from_event(key(KeyCode::Left)), Some(Input::Left));
        assert_eq!(Input::from_event(key(KeyCode::Char('s'))), Some(Input::Down));
        assert_eq!(Input::from_event(key(KeyCode::Down)), Some(Input::Down));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(Input::from_event(key(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(Input::from_event(key(KeyCode::Char('q'))), Some(Input::Quit));
    }

    #[test]
    fn horizontal_sign() {
        assert_eq!(Input::Left.horizontal(), -1);
        assert_eq!(Input::Right.horizontal(), 1);
        assert_eq!(Input::Up.horizontal(), 0);
    }
}
