//! Platform-agnostic input event types.
//!
//! Every host maps its native input to these enums before handing them to
//! a widget. Widgets never see raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor / analog stick moved to absolute position.
    CursorMove { x: i32, y: i32 },
    /// Pointer click at absolute position (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// Pointer released.
    PointerRelease { x: i32, y: i32 },
    /// Scroll wheel moved. Positive is away from the user.
    ScrollWheel { delta: i32 },
    /// A face / d-pad button pressed.
    ButtonPress { button: Button },
    /// A face / d-pad button released.
    ButtonRelease { button: Button },
    /// The viewport changed size.
    Resize { width: u32, height: u32 },
    /// User requested quit (window close, etc.).
    Quit,
}

/// Buttons that map across all platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_move_negative_coords() {
        let e = InputEvent::CursorMove { x: -10, y: -20 };
        if let InputEvent::CursorMove { x, y } = e {
            assert_eq!(x, -10);
            assert_eq!(y, -20);
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn press_differs_from_release() {
        let press = InputEvent::ButtonPress {
            button: Button::Confirm,
        };
        let release = InputEvent::ButtonRelease {
            button: Button::Confirm,
        };
        assert_ne!(press, release);
    }

    #[test]
    fn scroll_wheel_from_toml() {
        let e: InputEvent = toml::from_str("kind = \"scroll_wheel\"\ndelta = -1").unwrap();
        assert_eq!(e, InputEvent::ScrollWheel { delta: -1 });
    }

    #[test]
    fn button_press_from_toml() {
        let e: InputEvent = toml::from_str("kind = \"button_press\"\nbutton = \"down\"").unwrap();
        assert_eq!(
            e,
            InputEvent::ButtonPress {
                button: Button::Down
            }
        );
    }

    #[test]
    fn quit_json_tag() {
        let json = serde_json::to_string(&InputEvent::Quit).unwrap();
        assert_eq!(json, r#"{"kind":"quit"}"#);
    }

    #[test]
    fn button_hash_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Button::Up);
        set.insert(Button::Down);
        set.insert(Button::Up);
        assert_eq!(set.len(), 2);
    }
}
