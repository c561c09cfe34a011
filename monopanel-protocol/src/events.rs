//! Key input from the serial console

/// A key press, decoded from one console byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// `q`: leave the current page or dismiss the modal
    Back,
    /// `e`, carriage return or line feed
    Select,
    /// `a`
    Left,
    /// `d`
    Right,
    /// `w`
    Up,
    /// `s`
    Down,
    /// `p`
    Menu,
    /// Any other byte, passed through untouched
    Other(u8),
}

// Console bytes
const KEY_BACK: u8 = b'q';
const KEY_SELECT: u8 = b'e';
const KEY_LEFT: u8 = b'a';
const KEY_RIGHT: u8 = b'd';
const KEY_UP: u8 = b'w';
const KEY_DOWN: u8 = b's';
const KEY_MENU: u8 = b'p';

impl Key {
    /// Decode a console byte; never fails
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            KEY_BACK => Key::Back,
            KEY_SELECT | b'\r' | b'\n' => Key::Select,
            KEY_LEFT => Key::Left,
            KEY_RIGHT => Key::Right,
            KEY_UP => Key::Up,
            KEY_DOWN => Key::Down,
            KEY_MENU => Key::Menu,
            other => Key::Other(other),
        }
    }

    /// Canonical console byte for this key
    pub fn to_byte(self) -> u8 {
        match self {
            Key::Back => KEY_BACK,
            Key::Select => KEY_SELECT,
            Key::Left => KEY_LEFT,
            Key::Right => KEY_RIGHT,
            Key::Up => KEY_UP,
            Key::Down => KEY_DOWN,
            Key::Menu => KEY_MENU,
            Key::Other(byte) => byte,
        }
    }

    /// Horizontal step (-1, 0 or +1)
    pub fn horizontal_delta(&self) -> i8 {
        match self {
            Key::Left => -1,
            Key::Right => 1,
            _ => 0,
        }
    }

    /// Vertical step (-1 for up, +1 for down)
    pub fn vertical_delta(&self) -> i8 {
        match self {
            Key::Up => -1,
            Key::Down => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_keys() {
        assert_eq!(Key::from_byte(113), Key::Back);
        assert_eq!(Key::from_byte(101), Key::Select);
        assert_eq!(Key::from_byte(97), Key::Left);
        assert_eq!(Key::from_byte(100), Key::Right);
        assert_eq!(Key::from_byte(119), Key::Up);
        assert_eq!(Key::from_byte(115), Key::Down);
        assert_eq!(Key::from_byte(112), Key::Menu);
    }

    #[test]
    fn test_enter_is_select() {
        assert_eq!(Key::from_byte(b'\r'), Key::Select);
        assert_eq!(Key::from_byte(b'\n'), Key::Select);
        assert_eq!(Key::Select.to_byte(), b'e');
    }

    #[test]
    fn test_other_passes_through() {
        assert_eq!(Key::from_byte(b'x'), Key::Other(b'x'));
        assert_eq!(Key::Other(0xFF).to_byte(), 0xFF);
    }

    #[test]
    fn test_deltas() {
        assert_eq!(Key::Left.horizontal_delta(), -1);
        assert_eq!(Key::Right.horizontal_delta(), 1);
        assert_eq!(Key::Up.horizontal_delta(), 0);
        assert_eq!(Key::Up.vertical_delta(), -1);
        assert_eq!(Key::Down.vertical_delta(), 1);
    }
}
