use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Applies one key press to the app state. The next frame is drawn by the
/// main loop immediately after the pending events are drained, so every
/// accepted key is followed by a redraw.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Up => app.raise_angle(),
        KeyCode::Down => app.lower_angle(),
        KeyCode::Left => app.lower_speed(),
        KeyCode::Right => app.raise_speed(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_adjust_angle_and_speed() {
        let mut app = App::new();

        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.projectile.angle, 1.0);

        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.projectile.angle, 0.0);

        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.projectile.speed, 51.0);

        handle_key(&mut app, press(KeyCode::Left));
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.projectile.speed, 49.0);
    }

    #[test]
    fn escape_requests_quit() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn other_keys_change_nothing() {
        let mut app = App::new();
        let before = app.projectile;

        handle_key(&mut app, press(KeyCode::Char('z')));
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::PageUp));

        assert_eq!(app.projectile, before);
        assert!(!app.should_quit);
    }

    #[test]
    fn repeated_presses_respect_angle_clamp_only() {
        let mut app = App::new();
        for _ in 0..95 {
            handle_key(&mut app, press(KeyCode::Up));
        }
        assert_eq!(app.projectile.angle, 90.0);

        for _ in 0..60 {
            handle_key(&mut app, press(KeyCode::Left));
        }
        assert_eq!(app.projectile.speed, -10.0);
    }
}
