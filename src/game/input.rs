//! Keyboard state.

/// A game action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move left (A, left arrow).
    Left,
    /// Move right (D, right arrow).
    Right,
    /// Jump (W, space, up arrow).
    Jump,
    /// Quit (Escape).
    Exit,
}

impl Key {
    /// Map a typed character to its action.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' | 'A' => Some(Self::Left),
            'd' | 'D' => Some(Self::Right),
            'w' | 'W' | ' ' => Some(Self::Jump),
            '\u{1b}' => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Horizontal intent derived from the held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Move left.
    Left,
    /// Move right.
    Right,
    /// Come to rest.
    Idle,
}

/// Held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Input {
    left: bool,
    right: bool,
}

impl Input {
    /// Record a key press. Only movement keys are held.
    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    /// Record a key release.
    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            Key::Jump | Key::Exit => {}
        }
    }

    /// Current heading; left wins when both directions are held.
    #[must_use]
    pub fn heading(&self) -> Heading {
        if self.left {
            Heading::Left
        } else if self.right {
            Heading::Right
        } else {
            Heading::Idle
        }
    }
}
