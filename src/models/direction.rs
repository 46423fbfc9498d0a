use std::fmt;

/// Heading of the snake, shared by the keyboard and the gesture detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const VARIANTS: &'static [Direction] = &[Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit step `(dx, dy)` in screen space, y growing downwards.
    #[must_use]
    pub fn value(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn get_opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_symmetric() {
        for d in Direction::VARIANTS {
            assert_ne!(d.get_opposite(), *d);
            assert_eq!(d.get_opposite().get_opposite(), *d);
            let (dx, dy) = d.value();
            let (ox, oy) = d.get_opposite().value();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
