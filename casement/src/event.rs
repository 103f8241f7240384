/// High-level input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press.
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button press.
    Click {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse wheel.
    Scroll {
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    /// Mouse move with no button held (hover tracking).
    MouseMove { x: u16, y: u16 },
    /// Mouse move with a button held.
    Drag {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse button release.
    Release {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'),
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Map a raw crossterm event to a high-level event.
/// Returns `None` for events that have no high-level equivalent
/// (key releases, focus changes, paste).
pub fn convert_event(raw: crossterm::event::Event) -> Option<Event> {
    use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

    match raw {
        CtEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            })
        }
        CtEvent::Mouse(mouse) => {
            let (x, y) = (mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Drag(button) => Some(Event::Drag {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Up(button) => Some(Event::Release {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Moved => Some(Event::MouseMove { x, y }),
                MouseEventKind::ScrollDown => Some(Event::Scroll {
                    x,
                    y,
                    delta_x: 0,
                    delta_y: 1,
                }),
                MouseEventKind::ScrollUp => Some(Event::Scroll {
                    x,
                    y,
                    delta_x: 0,
                    delta_y: -1,
                }),
                MouseEventKind::ScrollLeft => Some(Event::Scroll {
                    x,
                    y,
                    delta_x: -1,
                    delta_y: 0,
                }),
                MouseEventKind::ScrollRight => Some(Event::Scroll {
                    x,
                    y,
                    delta_x: 1,
                    delta_y: 0,
                }),
            }
        }
        CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}
