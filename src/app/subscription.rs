// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! While the grid is shown only keyboard focus keys are routed; once the
//! lightbox is open, viewer shortcuts and finger events take over.

use super::message::TouchInput;
use super::Message;
use crate::application::input::{FingerId, GridKey, ViewerKey};
use iced::{event, keyboard, touch, Subscription};

/// Routes keyboard events, and finger events while the viewer is open.
///
/// Keys already handled by a widget are dropped. Finger events are always
/// forwarded so a swipe starting on a control still counts.
pub fn create_event_subscription(viewer_open: bool) -> Subscription<Message> {
    if viewer_open {
        event::listen_with(viewer_event)
    } else {
        event::listen_with(grid_event)
    }
}

fn viewer_event(
    event: event::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored if is_export_key(&key) => Some(Message::ExportDiagnostics),
            event::Status::Ignored => viewer_key(&key).map(Message::ViewerKey),
            event::Status::Captured => None,
        },
        event::Event::Touch(touch_event) => touch_input(touch_event).map(Message::Touch),
        _ => None,
    }
}

fn grid_event(
    event: event::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            event::Status::Ignored,
        ) => {
            if is_export_key(&key) {
                Some(Message::ExportDiagnostics)
            } else {
                grid_key(&key, modifiers).map(Message::GridKey)
            }
        }
        _ => None,
    }
}

/// Maps a key to a viewer shortcut.
pub fn viewer_key(key: &keyboard::Key) -> Option<ViewerKey> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(ViewerKey::Escape),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(ViewerKey::ArrowLeft),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(ViewerKey::ArrowRight),
        _ => None,
    }
}

/// Maps a key to grid focus movement or card activation.
///
/// Tab and the arrow keys move the focus (Shift+Tab backwards); Enter and
/// Space open the focused card.
pub fn grid_key(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<GridKey> {
    use keyboard::key::Named;
    match key {
        keyboard::Key::Named(Named::Tab) if modifiers.shift() => Some(GridKey::FocusPrevious),
        keyboard::Key::Named(Named::Tab | Named::ArrowRight | Named::ArrowDown) => {
            Some(GridKey::FocusNext)
        }
        keyboard::Key::Named(Named::ArrowLeft | Named::ArrowUp) => Some(GridKey::FocusPrevious),
        keyboard::Key::Named(Named::Enter | Named::Space) => Some(GridKey::Activate),
        keyboard::Key::Character(c) if c.as_str() == " " => Some(GridKey::Activate),
        _ => None,
    }
}

/// F12 writes the diagnostics log to disk.
pub fn is_export_key(key: &keyboard::Key) -> bool {
    matches!(key, keyboard::Key::Named(keyboard::key::Named::F12))
}

/// Keeps the finger id and horizontal position of a touch event.
pub fn touch_input(event: touch::Event) -> Option<TouchInput> {
    match event {
        touch::Event::FingerPressed { id, position } => Some(TouchInput::Pressed {
            finger: FingerId(id.0),
            x: position.x,
        }),
        touch::Event::FingerLifted { id, position } => Some(TouchInput::Lifted {
            finger: FingerId(id.0),
            x: position.x,
        }),
        touch::Event::FingerLost { id, .. } => Some(TouchInput::Lost {
            finger: FingerId(id.0),
        }),
        touch::Event::FingerMoved { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn viewer_keys_are_mapped() {
        use keyboard::key::Named;
        assert_eq!(
            viewer_key(&keyboard::Key::Named(Named::Escape)),
            Some(ViewerKey::Escape)
        );
        assert_eq!(
            viewer_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(ViewerKey::ArrowLeft)
        );
        assert_eq!(
            viewer_key(&keyboard::Key::Named(Named::ArrowRight)),
            Some(ViewerKey::ArrowRight)
        );
        assert_eq!(viewer_key(&keyboard::Key::Named(Named::ArrowUp)), None);
        assert_eq!(viewer_key(&keyboard::Key::Character("a".into())), None);
    }

    #[test]
    fn grid_keys_are_mapped() {
        use keyboard::key::Named;
        use keyboard::Modifiers;

        let named = |n: Named| keyboard::Key::Named(n);
        assert_eq!(
            grid_key(&named(Named::Tab), Modifiers::empty()),
            Some(GridKey::FocusNext)
        );
        assert_eq!(
            grid_key(&named(Named::Tab), Modifiers::SHIFT),
            Some(GridKey::FocusPrevious)
        );
        assert_eq!(
            grid_key(&named(Named::ArrowRight), Modifiers::empty()),
            Some(GridKey::FocusNext)
        );
        assert_eq!(
            grid_key(&named(Named::ArrowUp), Modifiers::empty()),
            Some(GridKey::FocusPrevious)
        );
        assert_eq!(
            grid_key(&named(Named::Enter), Modifiers::empty()),
            Some(GridKey::Activate)
        );
        assert_eq!(
            grid_key(&named(Named::Space), Modifiers::empty()),
            Some(GridKey::Activate)
        );
        assert_eq!(
            grid_key(&keyboard::Key::Character(" ".into()), Modifiers::empty()),
            Some(GridKey::Activate)
        );
        assert_eq!(grid_key(&named(Named::Escape), Modifiers::empty()), None);
        assert_eq!(
            grid_key(&keyboard::Key::Character("a".into()), Modifiers::empty()),
            None
        );
    }

    #[test]
    fn f12_exports_diagnostics() {
        use keyboard::key::Named;
        assert!(is_export_key(&keyboard::Key::Named(Named::F12)));
        assert!(!is_export_key(&keyboard::Key::Named(Named::F11)));
        assert_eq!(viewer_key(&keyboard::Key::Named(Named::F12)), None);
    }

    #[test]
    fn finger_events_keep_id_and_x() {
        let pressed = touch_input(touch::Event::FingerPressed {
            id: touch::Finger(7),
            position: Point::new(120.0, 40.0),
        });
        assert_eq!(
            pressed,
            Some(TouchInput::Pressed {
                finger: FingerId(7),
                x: 120.0
            })
        );

        let lost = touch_input(touch::Event::FingerLost {
            id: touch::Finger(7),
            position: Point::ORIGIN,
        });
        assert_eq!(
            lost,
            Some(TouchInput::Lost {
                finger: FingerId(7)
            })
        );
    }

    #[test]
    fn finger_moves_are_ignored() {
        let moved = touch_input(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position: Point::new(10.0, 10.0),
        });
        assert_eq!(moved, None);
    }
}
