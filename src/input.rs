//! Maps terminal key and mouse events to game inputs.
//!
//! What a key means depends on the phase: Space flaps during a run but
//! starts one from the title screen.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use flappy::{GameInput, Phase};

/// Result of handling a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Game(GameInput),
    Quit,
    /// Nothing to do.
    Ignore,
}

pub fn map_event(event: &Event, phase: Phase) -> InputAction {
    match event {
        Event::Key(key) => map_key(key, phase),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => click(phase),
            _ => InputAction::Ignore,
        },
        _ => InputAction::Ignore,
    }
}

fn map_key(key: &KeyEvent, phase: Phase) -> InputAction {
    // Windows reports releases too.
    if key.kind == KeyEventKind::Release {
        return InputAction::Ignore;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up => match phase {
            Phase::Running => InputAction::Game(GameInput::Jump),
            Phase::Idle => InputAction::Game(GameInput::Start),
            // Restart is Enter, r or a click.
            Phase::GameOver => InputAction::Ignore,
        },
        KeyCode::Enter => match phase {
            Phase::Running => InputAction::Game(GameInput::Jump),
            Phase::Idle | Phase::GameOver => InputAction::Game(GameInput::Start),
        },
        KeyCode::Char('r') if phase == Phase::GameOver => InputAction::Game(GameInput::Start),
        _ => InputAction::Ignore,
    }
}

/// A click flaps during a run and presses the start/restart button otherwise.
fn click(phase: Phase) -> InputAction {
    match phase {
        Phase::Running => InputAction::Game(GameInput::Jump),
        Phase::Idle | Phase::GameOver => InputAction::Game(GameInput::Start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn left_click() -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_space_depends_on_phase() {
        let space = key(KeyCode::Char(' '));
        assert_eq!(
            map_event(&space, Phase::Running),
            InputAction::Game(GameInput::Jump)
        );
        assert_eq!(
            map_event(&space, Phase::Idle),
            InputAction::Game(GameInput::Start)
        );
        assert_eq!(map_event(&space, Phase::GameOver), InputAction::Ignore);
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(
            map_event(&key(KeyCode::Enter), Phase::GameOver),
            InputAction::Game(GameInput::Start)
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('r')), Phase::GameOver),
            InputAction::Game(GameInput::Start)
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('r')), Phase::Running),
            InputAction::Ignore
        );
    }

    #[test]
    fn test_quit_keys() {
        for phase in [Phase::Idle, Phase::Running, Phase::GameOver] {
            assert_eq!(map_event(&key(KeyCode::Char('q')), phase), InputAction::Quit);
            assert_eq!(map_event(&key(KeyCode::Esc), phase), InputAction::Quit);
        }
    }

    #[test]
    fn test_click() {
        assert_eq!(
            map_event(&left_click(), Phase::Running),
            InputAction::Game(GameInput::Jump)
        );
        assert_eq!(
            map_event(&left_click(), Phase::GameOver),
            InputAction::Game(GameInput::Start)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(
            map_event(&Event::Key(release), Phase::Running),
            InputAction::Ignore
        );
    }

    #[test]
    fn test_other_events_ignored() {
        assert_eq!(map_event(&Event::FocusLost, Phase::Running), InputAction::Ignore);
        assert_eq!(
            map_event(&key(KeyCode::Char('x')), Phase::Running),
            InputAction::Ignore
        );
    }
}
