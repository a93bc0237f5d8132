/// Heading of the snake on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit offset (dx, dy) in cells; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_each_direction_has_exactly_one_reverse() {
        for direction in ALL {
            let reverses = ALL.iter().filter(|other| direction.is_opposite(**other)).count();
            assert_eq!(reverses, 1);
        }
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for direction in ALL {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            // Exactly one axis moves by one cell
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_screen_axes() {
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Down.delta(), (0, 1));
    }
}
